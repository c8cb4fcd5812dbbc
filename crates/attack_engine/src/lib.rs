//! # Attack Engine (Layer 2: Simulation Engine)
//!
//! ## Layer 2 Role
//!
//! attack_engine turns a [`sim::SimulationConfig`] into an ensemble of
//! penetration paths and reduces the ensemble to a histogram, mean and
//! variance of final values:
//!
//! ```text
//! SimulationConfig ──► PathSimulator::generate ──► Ensemble
//!                                                     │
//!                             stats::summarize ◄──────┘
//!                                    │
//!                                    ▼
//!                  EnsembleSummary { distribution, statistics }
//! ```
//!
//! The update rules come from `attack_models`; this crate owns the trial
//! loop, the random source and the statistics.
//!
//! ## Usage Example
//!
//! ```rust
//! use attack_engine::sim::{PathSimulator, SimulationConfig};
//! use attack_engine::stats::summarize;
//! use attack_models::ModelParams;
//!
//! let config = SimulationConfig::builder()
//!     .n_paths(3)
//!     .n_steps(5)
//!     .model(ModelParams::bernoulli(1.0).unwrap())
//!     .seed(42)
//!     .build()
//!     .unwrap();
//!
//! let ensemble = PathSimulator::from_config(&config).generate(&config).unwrap();
//! assert_eq!(ensemble.path(0), &[0.0, 1.0, 2.0, 3.0, 4.0, 5.0]);
//!
//! let summary = summarize(&ensemble).unwrap();
//! assert_eq!(summary.statistics.mean, 5.0);
//! assert_eq!(summary.statistics.variance, 0.0);
//! ```
//!
//! ## Execution Model
//!
//! Generation is single-threaded and synchronous. The random source is
//! consumed strictly in path order, step order.

#![warn(missing_docs)]

pub mod rng;
pub mod sim;
pub mod stats;

pub use sim::{generate, ConfigError, Ensemble, PathSimulator, SimulationConfig, SimulationError};
pub use stats::{summarize, Binning, Distribution, EnsembleSummary, SummaryStatistics};
