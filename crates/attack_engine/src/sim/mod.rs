//! Path simulation.
//!
//! # Architecture
//!
//! ```text
//! PathSimulator<R: UniformSource>
//! ├── SimulationConfig  (validated request: sizes, model, seed)
//! ├── R                 (uniform draw source, SimRng by default)
//! └── generate()        → Ensemble (row-major paths + metadata)
//! ```
//!
//! # Examples
//!
//! ```rust
//! use attack_engine::sim::{generate, SimulationConfig};
//! use attack_models::ModelParams;
//!
//! let config = SimulationConfig::builder()
//!     .n_paths(100)
//!     .n_steps(50)
//!     .model(ModelParams::diffusion(0.5).unwrap())
//!     .seed(7)
//!     .build()
//!     .unwrap();
//!
//! let ensemble = generate(&config).unwrap();
//! assert_eq!(ensemble.n_paths(), 100);
//! assert!(ensemble.paths().all(|p| p.len() == 51 && p[0] == 0.0));
//! ```

pub mod config;
pub mod ensemble;
pub mod error;
pub mod simulator;

pub use config::{SimulationConfig, SimulationConfigBuilder, MAX_ENSEMBLE_VALUES};
pub use ensemble::Ensemble;
pub use error::{ConfigError, SimulationError};
pub use simulator::{generate, PathSimulator};
