//! PenetrationModel trait for the one-draw-per-step update rules.
//!
//! Each model advances a scalar state using exactly one uniform draw
//! `u ∈ [0, 1)` per step. The state is the running counter; `observe` maps it
//! to the value appended to the path, which differs from the state only for
//! the relative random walk.
//!
//! ## Example
//!
//! ```
//! use attack_models::models::{BernoulliModel, BernoulliParams, PenetrationModel, StepGrid};
//!
//! let params = BernoulliParams::new(0.5).unwrap();
//! let grid = StepGrid::new(10);
//!
//! let state = BernoulliModel::initial_state(&params);
//! assert_eq!(BernoulliModel::evolve_step(state, 0.2, &grid, &params), 1.0);
//! assert_eq!(BernoulliModel::evolve_step(state, 0.7, &grid, &params), 0.0);
//! ```

use super::kind::{ModelKind, ValueKind};
use crate::error::ModelError;

/// Discrete step grid over the unit horizon.
///
/// `n_steps` is the server count or time-step count of a path; the implied
/// time step is `dt = 1 / n_steps`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StepGrid {
    n_steps: usize,
}

impl StepGrid {
    /// Creates a grid with `n_steps` steps.
    ///
    /// `n_steps` must be at least 1; callers validate before building a grid.
    #[inline]
    pub fn new(n_steps: usize) -> Self {
        debug_assert!(n_steps >= 1, "step grid needs at least one step");
        Self { n_steps }
    }

    /// Number of steps.
    #[inline]
    pub fn n_steps(&self) -> usize {
        self.n_steps
    }

    /// Implied time step `1 / n_steps`.
    #[inline]
    pub fn dt(&self) -> f64 {
        1.0 / self.n_steps as f64
    }
}

/// Unified trait interface for penetration process models.
///
/// Implementors are zero-sized markers; all data lives in `Params`.
///
/// # Static Dispatch Only
/// Use [`ModelParams`](super::ModelParams) to select a model at runtime
/// rather than `Box<dyn PenetrationModel>`.
pub trait PenetrationModel {
    /// Model parameter payload
    type Params: Clone;

    /// Advance the state by one step using draw `u ∈ [0, 1)`.
    fn evolve_step(state: f64, u: f64, grid: &StepGrid, params: &Self::Params) -> f64;

    /// Starting state of every path (the unattacked state).
    fn initial_state(_params: &Self::Params) -> f64 {
        0.0
    }

    /// Value recorded in the path for the given state.
    fn observe(state: f64, _grid: &StepGrid, _params: &Self::Params) -> f64 {
        state
    }

    /// Whether the recorded values are integer or real valued.
    fn value_kind(params: &Self::Params) -> ValueKind;

    /// Range check of the parameter payload.
    fn validate(params: &Self::Params) -> Result<(), ModelError>;

    /// Selector for this model.
    fn kind() -> ModelKind;

    /// Model name for logging and debugging.
    fn model_name() -> &'static str {
        Self::kind().name()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_step_grid_dt() {
        let grid = StepGrid::new(4);
        assert_eq!(grid.n_steps(), 4);
        assert_relative_eq!(grid.dt(), 0.25);
    }

    #[test]
    fn test_step_grid_single_step() {
        let grid = StepGrid::new(1);
        assert_eq!(grid.dt(), 1.0);
    }

    // Constant model used to exercise the provided methods.
    struct Stay;

    impl PenetrationModel for Stay {
        type Params = ();

        fn evolve_step(state: f64, _u: f64, _grid: &StepGrid, _params: &()) -> f64 {
            state
        }

        fn value_kind(_params: &()) -> ValueKind {
            ValueKind::Discrete
        }

        fn validate(_params: &()) -> Result<(), ModelError> {
            Ok(())
        }

        fn kind() -> ModelKind {
            ModelKind::BernoulliAccumulation
        }
    }

    #[test]
    fn test_default_methods() {
        let grid = StepGrid::new(3);
        assert_eq!(Stay::initial_state(&()), 0.0);
        assert_eq!(Stay::observe(2.0, &grid, &()), 2.0);
        assert_eq!(Stay::model_name(), "bernoulli_accumulation");
    }
}
