//! Error types for the attacksim CLI.

use thiserror::Error;

/// CLI error type
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration file or environment error
    #[error("Configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),

    /// Simulation request rejected by the engine
    #[error("Invalid simulation: {0}")]
    InvalidSimulation(#[from] attack_engine::sim::ConfigError),

    /// Generation or summarisation failure
    #[error("Simulation error: {0}")]
    Simulation(#[from] attack_engine::sim::SimulationError),

    /// Invalid command-line argument
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialisation error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// CSV serialisation error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

impl CliError {
    /// Create an invalid argument error
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }
}

/// Result alias for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;
