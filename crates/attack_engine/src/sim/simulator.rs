//! Path simulator.
//!
//! Runs `n_paths` independent trials of `n_steps` steps each. Every step
//! draws one uniform value and applies the configured model's update rule
//! to the previous state:
//!
//! ```text
//! for path in 0..n_paths:
//!     state = 0;              record observe(state)
//!     for step in 0..n_steps:
//!         u = source.next_uniform()
//!         state = evolve(state, u);  record observe(state)
//! ```
//!
//! Draws are consumed from one stream in path order, so two simulators fed
//! the same source produce bit-identical ensembles.

use attack_models::models::StepGrid;
use attack_models::ModelParams;
use tracing::{debug, warn};

use super::config::SimulationConfig;
use super::ensemble::Ensemble;
use super::error::SimulationError;
use crate::rng::{SimRng, UniformSource};

/// Path simulator over a uniform draw source.
///
/// # Examples
///
/// ```rust
/// use attack_engine::rng::FixedSequence;
/// use attack_engine::sim::{PathSimulator, SimulationConfig};
/// use attack_models::ModelParams;
///
/// let config = SimulationConfig::builder()
///     .n_paths(1)
///     .n_steps(4)
///     .model(ModelParams::random_walk(0.0, false).unwrap())
///     .build()
///     .unwrap();
///
/// let mut simulator = PathSimulator::new(FixedSequence::constant(0.5).unwrap());
/// let ensemble = simulator.generate(&config).unwrap();
///
/// assert_eq!(ensemble.path(0), &[0.0, -1.0, -2.0, -3.0, -4.0]);
/// ```
#[derive(Debug)]
pub struct PathSimulator<R: UniformSource = SimRng> {
    source: R,
}

impl PathSimulator<SimRng> {
    /// Creates a simulator seeded from the config, or from entropy when the
    /// config carries no seed.
    pub fn from_config(config: &SimulationConfig) -> Self {
        let rng = match config.seed() {
            Some(seed) => SimRng::from_seed(seed),
            None => SimRng::from_entropy(),
        };
        Self::new(rng)
    }
}

impl<R: UniformSource> PathSimulator<R> {
    /// Creates a simulator drawing from `source`.
    #[inline]
    pub fn new(source: R) -> Self {
        Self { source }
    }

    /// Borrows the draw source.
    #[inline]
    pub fn source(&self) -> &R {
        &self.source
    }

    /// Generates an ensemble for `config`.
    ///
    /// The configuration is validated before any draw is consumed.
    ///
    /// # Errors
    ///
    /// `SimulationError::InvalidConfiguration` when `config` violates an
    /// invariant.
    pub fn generate(&mut self, config: &SimulationConfig) -> Result<Ensemble, SimulationError> {
        config.validate()?;

        let model = config.model();
        let grid = config.grid();
        let (n_paths, n_steps) = (config.n_paths(), config.n_steps());

        if model.is_saturated(&grid) {
            warn!(
                model = model.model_name(),
                n_steps,
                "jump rate exceeds step count; every step will jump"
            );
        }
        debug!(
            model = model.model_name(),
            n_paths, n_steps, "generating ensemble"
        );

        let mut values = Vec::with_capacity(n_paths * (n_steps + 1));
        for _ in 0..n_paths {
            self.simulate_path_into(model, &grid, &mut values);
        }

        debug!(values = values.len(), "ensemble generated");

        Ok(Ensemble::from_raw(
            values,
            n_paths,
            n_steps,
            model.kind(),
            model.value_kind(),
            self.source.seed(),
        ))
    }

    /// Appends one path of `grid.n_steps() + 1` values to `out`.
    fn simulate_path_into(&mut self, model: &ModelParams, grid: &StepGrid, out: &mut Vec<f64>) {
        let mut state = model.initial_state();
        out.push(model.observe(state, grid));

        for _ in 0..grid.n_steps() {
            let u = self.source.next_uniform();
            state = model.evolve_step(state, u, grid);
            out.push(model.observe(state, grid));
        }
    }
}

/// Generates an ensemble with a [`SimRng`] seeded from `config`.
///
/// # Errors
///
/// `SimulationError::InvalidConfiguration` when `config` violates an
/// invariant.
pub fn generate(config: &SimulationConfig) -> Result<Ensemble, SimulationError> {
    PathSimulator::from_config(config).generate(config)
}
