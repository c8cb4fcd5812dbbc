//! Error types for the simulation engine.
//!
//! This module defines structured error types for configuration validation
//! and for statistics requested on unusable ensembles.

use attack_models::ModelError;
use thiserror::Error;

/// Configuration error for the path simulator.
///
/// These errors occur before any path is generated.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum ConfigError {
    /// Path count of zero.
    #[error("Invalid path count {0}: must be at least 1")]
    InvalidPathCount(usize),

    /// Step count of zero.
    #[error("Invalid step count {0}: must be at least 1")]
    InvalidStepCount(usize),

    /// Ensemble would hold more values than allowed.
    #[error("Ensemble of {n_paths} paths x {n_steps} steps exceeds 50_000_000 values")]
    EnsembleTooLarge {
        /// Requested path count.
        n_paths: usize,
        /// Requested step count.
        n_steps: usize,
    },

    /// Required builder field not set.
    #[error("Missing parameter '{0}': must be specified")]
    MissingParameter(&'static str),

    /// Model parameters out of range.
    #[error(transparent)]
    Model(#[from] ModelError),
}

/// Engine error.
///
/// Surfaced synchronously to the immediate caller; nothing is retried.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum SimulationError {
    /// Configuration violates an invariant.
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(#[from] ConfigError),

    /// Statistics requested on zero paths.
    #[error("Cannot summarise an empty ensemble")]
    EmptyEnsemble,

    /// Histogram would need more bins than allowed.
    #[error("Histogram needs {bins} bins, more than the limit of {limit}")]
    TooManyBins {
        /// Bins required by the data spread.
        bins: usize,
        /// Upper bound on bins.
        limit: usize,
    },

    /// NaN or infinite value where a finite one is needed for binning.
    #[error("Cannot bin non-finite value {0}")]
    NonFiniteValue(f64),
}

impl From<ModelError> for SimulationError {
    fn from(err: ModelError) -> Self {
        SimulationError::InvalidConfiguration(ConfigError::Model(err))
    }
}
