//! Symmetric random walk model.
//!
//! Each attempt either gains or loses one penetration:
//! ```text
//! v(k+1) = v(k) + 1   if u < p
//! v(k+1) = v(k) - 1   otherwise
//! ```
//! In relative mode the recorded value is the running count divided by
//! `n_steps`, so the final value lies in `[-1, 1]`. The count itself stays
//! integral, which keeps relative values free of accumulated rounding.

use super::kind::{ModelKind, ValueKind};
use super::penetration::{PenetrationModel, StepGrid};
use crate::error::{check_probability, ModelError};

/// Symmetric random walk parameters.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(deny_unknown_fields))]
pub struct RandomWalkParams {
    /// Probability of an upward step
    pub success_probability: f64,
    /// Record values normalised by the step count
    #[cfg_attr(feature = "serde", serde(default))]
    pub relative: bool,
}

impl RandomWalkParams {
    /// Create new parameters with validation.
    ///
    /// # Errors
    /// `ModelError` if `success_probability` is not a finite value in [0, 1].
    pub fn new(success_probability: f64, relative: bool) -> Result<Self, ModelError> {
        let params = Self {
            success_probability,
            relative,
        };
        RandomWalkModel::validate(&params)?;
        Ok(params)
    }
}

/// Symmetric random walk model.
#[derive(Clone, Copy, Debug, Default)]
pub struct RandomWalkModel;

impl PenetrationModel for RandomWalkModel {
    type Params = RandomWalkParams;

    #[inline]
    fn evolve_step(state: f64, u: f64, _grid: &StepGrid, params: &Self::Params) -> f64 {
        if u < params.success_probability {
            state + 1.0
        } else {
            state - 1.0
        }
    }

    #[inline]
    fn observe(state: f64, grid: &StepGrid, params: &Self::Params) -> f64 {
        if params.relative {
            state / grid.n_steps() as f64
        } else {
            state
        }
    }

    fn value_kind(params: &Self::Params) -> ValueKind {
        if params.relative {
            ValueKind::Continuous
        } else {
            ValueKind::Discrete
        }
    }

    fn validate(params: &Self::Params) -> Result<(), ModelError> {
        check_probability("success_probability", params.success_probability)
    }

    fn kind() -> ModelKind {
        ModelKind::SymmetricRandomWalk
    }
}
