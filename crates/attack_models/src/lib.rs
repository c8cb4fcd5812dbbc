//! # Attack Models (Layer 1: Update Rules)
//!
//! attack_models defines the four attack penetration processes simulated by
//! attacksim and the parameters each one consumes:
//!
//! | Kind | Update per step | Parameters |
//! |------|-----------------|------------|
//! | [`ModelKind::BernoulliAccumulation`] | `+1` on success, else unchanged | success probability |
//! | [`ModelKind::SymmetricRandomWalk`] | `+1` on success, else `-1` | success probability, relative |
//! | [`ModelKind::PoissonJumpApproximation`] | `+1` with probability `rate * dt` | rate |
//! | [`ModelKind::ScaledRandomWalkDiffusion`] | `±sqrt(dt)` | jump probability |
//!
//! Every rule consumes exactly one uniform draw in `[0, 1)` per step. The
//! trial loop itself lives in `attack_engine`; this crate only knows how to
//! advance a single state.
//!
//! ## Usage Example
//!
//! ```rust
//! use attack_models::models::{BernoulliParams, ModelParams, StepGrid};
//!
//! let params = ModelParams::Bernoulli(BernoulliParams::new(1.0).unwrap());
//! let grid = StepGrid::new(5);
//!
//! let next = params.evolve_step(params.initial_state(), 0.3, &grid);
//! assert_eq!(params.observe(next, &grid), 1.0);
//! ```

#![warn(missing_docs)]

pub mod error;
pub mod models;

pub use error::ModelError;
pub use models::{ModelKind, ModelParams, ValueKind};
