//! Simulation configuration.
//!
//! This module provides the configuration record and builder for a path
//! simulation request.

use attack_models::models::StepGrid;
use attack_models::ModelParams;

use super::error::ConfigError;

/// Maximum number of stored values (`n_paths * (n_steps + 1)`) per ensemble.
pub const MAX_ENSEMBLE_VALUES: usize = 50_000_000;

/// Path simulation configuration.
///
/// Immutable configuration specifying one simulation request.
/// Use [`SimulationConfigBuilder`] to construct instances; deserialised
/// records are validated again by the simulator before use.
///
/// # Examples
///
/// ```rust
/// use attack_engine::sim::SimulationConfig;
/// use attack_models::ModelParams;
///
/// let config = SimulationConfig::builder()
///     .n_paths(1_000)
///     .n_steps(50)
///     .model(ModelParams::random_walk(0.5, true).unwrap())
///     .seed(42)
///     .build()
///     .expect("valid configuration");
///
/// assert_eq!(config.n_paths(), 1_000);
/// assert_eq!(config.n_steps(), 50);
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(deny_unknown_fields))]
pub struct SimulationConfig {
    /// Number of independent trials.
    n_paths: usize,
    /// Number of steps per path.
    n_steps: usize,
    /// Model selector with its parameters.
    model: ModelParams,
    /// Optional seed for reproducibility.
    #[cfg_attr(feature = "serde", serde(default))]
    seed: Option<u64>,
}

impl SimulationConfig {
    /// Creates a new configuration builder.
    #[inline]
    pub fn builder() -> SimulationConfigBuilder {
        SimulationConfigBuilder::default()
    }

    /// Returns the number of simulation paths.
    #[inline]
    pub fn n_paths(&self) -> usize {
        self.n_paths
    }

    /// Returns the number of steps per path.
    #[inline]
    pub fn n_steps(&self) -> usize {
        self.n_steps
    }

    /// Returns the model parameters.
    #[inline]
    pub fn model(&self) -> &ModelParams {
        &self.model
    }

    /// Returns the optional seed for reproducibility.
    #[inline]
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Step grid implied by the step count.
    #[inline]
    pub fn grid(&self) -> StepGrid {
        StepGrid::new(self.n_steps)
    }

    /// Builds a config without validation, for exercising the simulator's
    /// own checks.
    #[cfg(test)]
    pub(crate) fn new_unchecked(n_paths: usize, n_steps: usize, model: ModelParams) -> Self {
        Self {
            n_paths,
            n_steps,
            model,
            seed: None,
        }
    }

    /// Returns a copy with a different seed.
    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if:
    /// - `n_paths` is 0
    /// - `n_steps` is 0
    /// - the ensemble would exceed [`MAX_ENSEMBLE_VALUES`]
    /// - a model parameter is out of range
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.n_paths == 0 {
            return Err(ConfigError::InvalidPathCount(self.n_paths));
        }
        if self.n_steps == 0 {
            return Err(ConfigError::InvalidStepCount(self.n_steps));
        }
        let values = self
            .n_steps
            .checked_add(1)
            .and_then(|points| self.n_paths.checked_mul(points));
        if values.map_or(true, |v| v > MAX_ENSEMBLE_VALUES) {
            return Err(ConfigError::EnsembleTooLarge {
                n_paths: self.n_paths,
                n_steps: self.n_steps,
            });
        }
        self.model.validate()?;
        Ok(())
    }
}

/// Builder for [`SimulationConfig`].
///
/// # Examples
///
/// ```rust
/// use attack_engine::sim::SimulationConfig;
/// use attack_models::ModelParams;
///
/// let config = SimulationConfig::builder()
///     .n_paths(10)
///     .n_steps(100)
///     .model(ModelParams::poisson(3.0).unwrap())
///     .build()
///     .expect("valid config");
///
/// assert_eq!(config.seed(), None);
/// ```
#[derive(Clone, Debug, Default)]
pub struct SimulationConfigBuilder {
    n_paths: Option<usize>,
    n_steps: Option<usize>,
    model: Option<ModelParams>,
    seed: Option<u64>,
}

impl SimulationConfigBuilder {
    /// Sets the number of simulation paths.
    ///
    /// # Arguments
    ///
    /// * `n_paths` - Number of paths, at least 1
    #[inline]
    pub fn n_paths(mut self, n_paths: usize) -> Self {
        self.n_paths = Some(n_paths);
        self
    }

    /// Sets the number of steps per path.
    ///
    /// # Arguments
    ///
    /// * `n_steps` - Number of steps, at least 1
    #[inline]
    pub fn n_steps(mut self, n_steps: usize) -> Self {
        self.n_steps = Some(n_steps);
        self
    }

    /// Sets the model and its parameters.
    #[inline]
    pub fn model(mut self, model: ModelParams) -> Self {
        self.model = Some(model);
        self
    }

    /// Sets the seed for reproducibility.
    #[inline]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Builds the configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a field is missing or
    /// [`SimulationConfig::validate`] fails.
    pub fn build(self) -> Result<SimulationConfig, ConfigError> {
        let n_paths = self.n_paths.ok_or(ConfigError::MissingParameter("n_paths"))?;
        let n_steps = self.n_steps.ok_or(ConfigError::MissingParameter("n_steps"))?;
        let model = self.model.ok_or(ConfigError::MissingParameter("model"))?;

        let config = SimulationConfig {
            n_paths,
            n_steps,
            model,
            seed: self.seed,
        };

        config.validate()?;
        Ok(config)
    }
}
