//! Poisson jump approximation.
//!
//! Bernoulli discretisation of a Poisson counting process with intensity λ
//! over the unit horizon:
//! ```text
//! v(k+1) = v(k) + 1   if u < λ * dt
//! v(k+1) = v(k)       otherwise
//! ```
//! The approximation holds while `λ * dt ≤ 1`. Past that point every draw
//! succeeds and the path degenerates to `[0, 1, ..., n_steps]`; see
//! [`PoissonParams::is_saturated`].

use super::kind::{ModelKind, ValueKind};
use super::penetration::{PenetrationModel, StepGrid};
use crate::error::ModelError;

/// Poisson jump parameters.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(deny_unknown_fields))]
pub struct PoissonParams {
    /// Jump intensity per unit time (λ)
    pub rate: f64,
}

impl PoissonParams {
    /// Create new parameters with validation.
    ///
    /// # Errors
    /// `ModelError` if `rate` is negative or not finite.
    pub fn new(rate: f64) -> Result<Self, ModelError> {
        let params = Self { rate };
        PoissonJumpModel::validate(&params)?;
        Ok(params)
    }

    /// Per-step jump probability `λ * dt`.
    ///
    /// May exceed 1 for coarse grids.
    #[inline]
    pub fn jump_probability(&self, grid: &StepGrid) -> f64 {
        self.rate * grid.dt()
    }

    /// True when `λ > n_steps`, i.e. the per-step probability exceeds 1.
    pub fn is_saturated(&self, grid: &StepGrid) -> bool {
        self.rate > grid.n_steps() as f64
    }
}

/// Poisson jump approximation model.
#[derive(Clone, Copy, Debug, Default)]
pub struct PoissonJumpModel;

impl PenetrationModel for PoissonJumpModel {
    type Params = PoissonParams;

    #[inline]
    fn evolve_step(state: f64, u: f64, grid: &StepGrid, params: &Self::Params) -> f64 {
        if u < params.jump_probability(grid) {
            state + 1.0
        } else {
            state
        }
    }

    fn value_kind(_params: &Self::Params) -> ValueKind {
        ValueKind::Discrete
    }

    fn validate(params: &Self::Params) -> Result<(), ModelError> {
        if !params.rate.is_finite() {
            return Err(ModelError::NonFinite { name: "rate" });
        }
        if params.rate < 0.0 {
            return Err(ModelError::NegativeRate(params.rate));
        }
        Ok(())
    }

    fn kind() -> ModelKind {
        ModelKind::PoissonJumpApproximation
    }
}
