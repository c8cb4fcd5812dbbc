//! Bernoulli accumulation model.
//!
//! Counts successful penetrations over a sequence of independent attempts:
//! ```text
//! v(k+1) = v(k) + 1   if u < p
//! v(k+1) = v(k)       otherwise
//! ```
//! The path is non-decreasing and its final value is an integer in
//! `[0, n_steps]`.

use super::kind::{ModelKind, ValueKind};
use super::penetration::{PenetrationModel, StepGrid};
use crate::error::{check_probability, ModelError};

/// Bernoulli accumulation parameters.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(deny_unknown_fields))]
pub struct BernoulliParams {
    /// Probability that a single attempt succeeds
    pub success_probability: f64,
}

impl BernoulliParams {
    /// Create new parameters with validation.
    ///
    /// # Errors
    /// `ModelError` if `success_probability` is not a finite value in [0, 1].
    pub fn new(success_probability: f64) -> Result<Self, ModelError> {
        let params = Self {
            success_probability,
        };
        BernoulliModel::validate(&params)?;
        Ok(params)
    }
}

/// Bernoulli accumulation model.
#[derive(Clone, Copy, Debug, Default)]
pub struct BernoulliModel;

impl PenetrationModel for BernoulliModel {
    type Params = BernoulliParams;

    #[inline]
    fn evolve_step(state: f64, u: f64, _grid: &StepGrid, params: &Self::Params) -> f64 {
        if u < params.success_probability {
            state + 1.0
        } else {
            state
        }
    }

    fn value_kind(_params: &Self::Params) -> ValueKind {
        ValueKind::Discrete
    }

    fn validate(params: &Self::Params) -> Result<(), ModelError> {
        check_probability("success_probability", params.success_probability)
    }

    fn kind() -> ModelKind {
        ModelKind::BernoulliAccumulation
    }
}
