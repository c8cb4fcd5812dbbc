//! Penetration process models.
//!
//! This module provides:
//! - `PenetrationModel` trait: one-draw-per-step update rule
//! - `ModelParams`: static dispatch enum carrying per-model parameters
//! - One unit struct per model implementing the trait
//!
//! ## Design Philosophy
//!
//! All models use:
//! - Static dispatch via enum (not `Box<dyn Trait>`)
//! - Per-variant parameter payloads, so a field can only be set on the
//!   model that reads it
//!
//! ## Example
//!
//! ```
//! use attack_models::models::{ModelParams, RandomWalkParams, StepGrid};
//!
//! let params = ModelParams::RandomWalk(RandomWalkParams::new(0.0, false).unwrap());
//! let grid = StepGrid::new(4);
//!
//! let mut state = params.initial_state();
//! for _ in 0..grid.n_steps() {
//!     state = params.evolve_step(state, 0.5, &grid);
//! }
//! assert_eq!(params.observe(state, &grid), -4.0);
//! ```

pub mod bernoulli;
pub mod diffusion;
pub mod kind;
pub mod model_enum;
pub mod penetration;
pub mod poisson;
pub mod random_walk;

pub use bernoulli::{BernoulliModel, BernoulliParams};
pub use diffusion::{DiffusionParams, ScaledWalkModel};
pub use kind::{ModelKind, ValueKind};
pub use model_enum::ModelParams;
pub use penetration::{PenetrationModel, StepGrid};
pub use poisson::{PoissonJumpModel, PoissonParams};
pub use random_walk::{RandomWalkModel, RandomWalkParams};
