//! CLI configuration management.
//!
//! Loads settings from a TOML file with environment variable overrides.
//! Command-line flags are applied on top by the commands themselves.
//!
//! ```toml
//! log_level = "info"
//! format = "table"
//! seed = 42
//!
//! [simulation]
//! n_paths = 100
//! n_steps = 50
//!
//! [simulation.model]
//! model = "symmetric_random_walk"
//! success_probability = 0.5
//! relative = true
//! ```

use std::path::{Path, PathBuf};

use attack_engine::sim::SimulationConfig;
use serde::Deserialize;
use thiserror::Error;

use crate::output::OutputFormat;

/// Config file read when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "attacksim.toml";

const VALID_LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// CLI configuration
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    /// Log level used when `RUST_LOG` is unset
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Default output format
    #[serde(default)]
    pub format: OutputFormat,

    /// Default seed for runs that do not pass `--seed`
    pub seed: Option<u64>,

    /// Histogram bin width for continuous models
    pub bin_width: Option<f64>,

    /// Simulation run by `simulate --from-config`
    pub simulation: Option<SimulationConfig>,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            format: OutputFormat::default(),
            seed: None,
            bin_width: None,
            simulation: None,
        }
    }
}

impl AppConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        toml::from_str(&content).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Load the explicitly named file, or [`DEFAULT_CONFIG_FILE`] if present.
    ///
    /// A missing default file yields the default configuration; a missing
    /// explicit file is an error.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        Self::resolve_from(explicit, Path::new(DEFAULT_CONFIG_FILE))
    }

    fn resolve_from(explicit: Option<&Path>, default: &Path) -> Result<Self, ConfigError> {
        match explicit {
            Some(path) => Self::load(path),
            None if default.exists() => Self::load(default),
            None => Ok(Self::default()),
        }
    }

    /// Apply `ATTACKSIM_*` environment variable overrides
    pub fn with_env_override(self) -> Result<Self, ConfigError> {
        self.with_overrides_from(|key| std::env::var(key).ok())
    }

    /// Apply overrides from an arbitrary variable lookup
    pub fn with_overrides_from(
        mut self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        if let Some(level) = lookup("ATTACKSIM_LOG_LEVEL") {
            self.log_level = level;
        }

        if let Some(format) = lookup("ATTACKSIM_FORMAT") {
            self.format = format.parse().map_err(|_| ConfigError::Env {
                var: "ATTACKSIM_FORMAT",
                value: format,
            })?;
        }

        if let Some(seed) = lookup("ATTACKSIM_SEED") {
            self.seed = Some(seed.parse().map_err(|_| ConfigError::Env {
                var: "ATTACKSIM_SEED",
                value: seed,
            })?);
        }

        Ok(self)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut errors = Vec::new();

        if !VALID_LOG_LEVELS.contains(&self.log_level.to_lowercase().as_str()) {
            errors.push(format!(
                "Invalid log_level '{}'. Valid values: {:?}",
                self.log_level, VALID_LOG_LEVELS
            ));
        }

        if let Some(width) = self.bin_width {
            if !(width.is_finite() && width > 0.0) {
                errors.push(format!("bin_width must be positive and finite, got {}", width));
            }
        }

        if let Some(simulation) = &self.simulation {
            if let Err(e) = simulation.validate() {
                errors.push(format!("[simulation]: {}", e));
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Validation(errors))
        }
    }

    /// Resolve, apply environment overrides and validate
    pub fn load_with_env_and_validate(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        let config = Self::resolve(explicit)?.with_env_override()?;
        config.validate()?;
        Ok(config)
    }
}

/// Configuration error type
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConfigError {
    /// IO error reading config file
    #[error("IO error reading {}: {message}", path.display())]
    Io {
        /// File that could not be read
        path: PathBuf,
        /// Underlying error message
        message: String,
    },

    /// Parse error in config file
    #[error("Parse error: {0}")]
    Parse(String),

    /// Unparsable environment override
    #[error("Invalid value '{value}' for {var}")]
    Env {
        /// Variable name
        var: &'static str,
        /// Rejected value
        value: String,
    },

    /// Validation error
    #[error("Validation errors: {}", .0.join("; "))]
    Validation(Vec<String>),
}
