//! Scaled random walk diffusion model.
//!
//! A ±1 walk rescaled by `sqrt(dt)`, which converges to Brownian motion with
//! drift `2p - 1` per unit time as `n_steps` grows:
//! ```text
//! v(k+1) = v(k) + sqrt(dt)   if u < p
//! v(k+1) = v(k) - sqrt(dt)   otherwise
//! ```

use super::kind::{ModelKind, ValueKind};
use super::penetration::{PenetrationModel, StepGrid};
use crate::error::{check_probability, ModelError};

/// Scaled random walk parameters.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(deny_unknown_fields))]
pub struct DiffusionParams {
    /// Probability of an upward jump
    pub jump_probability: f64,
}

impl DiffusionParams {
    /// Create new parameters with validation.
    ///
    /// # Errors
    /// `ModelError` if `jump_probability` is not a finite value in [0, 1].
    pub fn new(jump_probability: f64) -> Result<Self, ModelError> {
        let params = Self { jump_probability };
        ScaledWalkModel::validate(&params)?;
        Ok(params)
    }
}

/// Scaled random walk diffusion model.
#[derive(Clone, Copy, Debug, Default)]
pub struct ScaledWalkModel;

impl PenetrationModel for ScaledWalkModel {
    type Params = DiffusionParams;

    #[inline]
    fn evolve_step(state: f64, u: f64, grid: &StepGrid, params: &Self::Params) -> f64 {
        let sign = if u < params.jump_probability {
            1.0
        } else {
            -1.0
        };
        state + sign * grid.dt().sqrt()
    }

    fn value_kind(_params: &Self::Params) -> ValueKind {
        ValueKind::Continuous
    }

    fn validate(params: &Self::Params) -> Result<(), ModelError> {
        check_probability("jump_probability", params.jump_probability)
    }

    fn kind() -> ModelKind {
        ModelKind::ScaledRandomWalkDiffusion
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_step_magnitude_is_sqrt_dt() {
        let params = DiffusionParams::new(0.5).unwrap();
        let grid = StepGrid::new(4);

        assert_relative_eq!(ScaledWalkModel::evolve_step(0.0, 0.2, &grid, &params), 0.5);
        assert_relative_eq!(
            ScaledWalkModel::evolve_step(0.0, 0.8, &grid, &params),
            -0.5
        );
    }

    #[test]
    fn test_step_from_nonzero_state() {
        let params = DiffusionParams::new(1.0).unwrap();
        let grid = StepGrid::new(100);

        assert_relative_eq!(
            ScaledWalkModel::evolve_step(1.5, 0.3, &grid, &params),
            1.6,
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_value_kind_is_continuous() {
        let params = DiffusionParams::new(0.5).unwrap();
        assert_eq!(ScaledWalkModel::value_kind(&params), ValueKind::Continuous);
    }

    #[test]
    fn test_params_validation() {
        assert!(matches!(
            DiffusionParams::new(1.2),
            Err(ModelError::ProbabilityOutOfRange {
                name: "jump_probability",
                ..
            })
        ));
    }
}
