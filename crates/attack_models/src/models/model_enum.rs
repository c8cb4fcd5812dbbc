//! Static dispatch enum for penetration models.
//!
//! `ModelParams` is the tagged union of per-model parameter payloads. The
//! variant selects the model, so a field such as `relative` can only be
//! supplied to the model that reads it.
//!
//! ## Example
//!
//! ```
//! use attack_models::models::{ModelKind, ModelParams};
//!
//! let params = ModelParams::poisson(3.0).unwrap();
//!
//! assert_eq!(params.kind(), ModelKind::PoissonJumpApproximation);
//! assert_eq!(params.model_name(), "poisson_jump_approximation");
//! assert!(params.value_kind().is_discrete());
//! ```

use super::bernoulli::{BernoulliModel, BernoulliParams};
use super::diffusion::{DiffusionParams, ScaledWalkModel};
use super::kind::{ModelKind, ValueKind};
use super::penetration::{PenetrationModel, StepGrid};
use super::poisson::{PoissonJumpModel, PoissonParams};
use super::random_walk::{RandomWalkModel, RandomWalkParams};
use crate::error::ModelError;

/// Unified parameter type for all models.
///
/// Serialised internally tagged by `model`:
/// ```toml
/// model = "symmetric_random_walk"
/// success_probability = 0.5
/// relative = true
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "model"))]
pub enum ModelParams {
    /// Bernoulli accumulation parameters
    #[cfg_attr(feature = "serde", serde(rename = "bernoulli_accumulation"))]
    Bernoulli(BernoulliParams),
    /// Symmetric random walk parameters
    #[cfg_attr(feature = "serde", serde(rename = "symmetric_random_walk"))]
    RandomWalk(RandomWalkParams),
    /// Poisson jump approximation parameters
    #[cfg_attr(feature = "serde", serde(rename = "poisson_jump_approximation"))]
    Poisson(PoissonParams),
    /// Scaled random walk diffusion parameters
    #[cfg_attr(feature = "serde", serde(rename = "scaled_random_walk_diffusion"))]
    Diffusion(DiffusionParams),
}

impl ModelParams {
    /// Bernoulli accumulation with success probability `p`.
    pub fn bernoulli(p: f64) -> Result<Self, ModelError> {
        BernoulliParams::new(p).map(ModelParams::Bernoulli)
    }

    /// Symmetric random walk with up probability `p`.
    pub fn random_walk(p: f64, relative: bool) -> Result<Self, ModelError> {
        RandomWalkParams::new(p, relative).map(ModelParams::RandomWalk)
    }

    /// Poisson jump approximation with intensity `rate`.
    pub fn poisson(rate: f64) -> Result<Self, ModelError> {
        PoissonParams::new(rate).map(ModelParams::Poisson)
    }

    /// Scaled random walk with up probability `p`.
    pub fn diffusion(p: f64) -> Result<Self, ModelError> {
        DiffusionParams::new(p).map(ModelParams::Diffusion)
    }

    /// Selector of the wrapped model.
    pub fn kind(&self) -> ModelKind {
        match self {
            ModelParams::Bernoulli(_) => BernoulliModel::kind(),
            ModelParams::RandomWalk(_) => RandomWalkModel::kind(),
            ModelParams::Poisson(_) => PoissonJumpModel::kind(),
            ModelParams::Diffusion(_) => ScaledWalkModel::kind(),
        }
    }

    /// Get the model name.
    pub fn model_name(&self) -> &'static str {
        self.kind().name()
    }

    /// Integer or real valued output.
    pub fn value_kind(&self) -> ValueKind {
        match self {
            ModelParams::Bernoulli(p) => BernoulliModel::value_kind(p),
            ModelParams::RandomWalk(p) => RandomWalkModel::value_kind(p),
            ModelParams::Poisson(p) => PoissonJumpModel::value_kind(p),
            ModelParams::Diffusion(p) => ScaledWalkModel::value_kind(p),
        }
    }

    /// Range check of the wrapped parameters.
    ///
    /// Needed for payloads built field by field or deserialised, which
    /// bypass the validating constructors.
    pub fn validate(&self) -> Result<(), ModelError> {
        match self {
            ModelParams::Bernoulli(p) => BernoulliModel::validate(p),
            ModelParams::RandomWalk(p) => RandomWalkModel::validate(p),
            ModelParams::Poisson(p) => PoissonJumpModel::validate(p),
            ModelParams::Diffusion(p) => ScaledWalkModel::validate(p),
        }
    }

    /// Get initial state for the model.
    pub fn initial_state(&self) -> f64 {
        match self {
            ModelParams::Bernoulli(p) => BernoulliModel::initial_state(p),
            ModelParams::RandomWalk(p) => RandomWalkModel::initial_state(p),
            ModelParams::Poisson(p) => PoissonJumpModel::initial_state(p),
            ModelParams::Diffusion(p) => ScaledWalkModel::initial_state(p),
        }
    }

    /// Evolve state by one step using draw `u ∈ [0, 1)`.
    #[inline]
    pub fn evolve_step(&self, state: f64, u: f64, grid: &StepGrid) -> f64 {
        match self {
            ModelParams::Bernoulli(p) => BernoulliModel::evolve_step(state, u, grid, p),
            ModelParams::RandomWalk(p) => RandomWalkModel::evolve_step(state, u, grid, p),
            ModelParams::Poisson(p) => PoissonJumpModel::evolve_step(state, u, grid, p),
            ModelParams::Diffusion(p) => ScaledWalkModel::evolve_step(state, u, grid, p),
        }
    }

    /// Value recorded in the path for `state`.
    #[inline]
    pub fn observe(&self, state: f64, grid: &StepGrid) -> f64 {
        match self {
            ModelParams::Bernoulli(p) => BernoulliModel::observe(state, grid, p),
            ModelParams::RandomWalk(p) => RandomWalkModel::observe(state, grid, p),
            ModelParams::Poisson(p) => PoissonJumpModel::observe(state, grid, p),
            ModelParams::Diffusion(p) => ScaledWalkModel::observe(state, grid, p),
        }
    }

    /// True when the Poisson approximation is used past `λ * dt = 1`.
    ///
    /// Always false for the other models.
    pub fn is_saturated(&self, grid: &StepGrid) -> bool {
        match self {
            ModelParams::Poisson(p) => p.is_saturated(grid),
            _ => false,
        }
    }
}
