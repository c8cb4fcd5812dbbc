//! Error types for model parameter validation.

use thiserror::Error;

/// Model parameter errors.
///
/// Raised when a parameter payload violates the range of its model.
///
/// # Examples
/// ```
/// use attack_models::ModelError;
///
/// let err = ModelError::NegativeRate(-0.5);
/// assert!(format!("{}", err).contains("rate"));
/// ```
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ModelError {
    /// Probability outside the closed interval [0, 1].
    #[error("Invalid probability '{name}': {value} is outside [0, 1]")]
    ProbabilityOutOfRange {
        /// Parameter name
        name: &'static str,
        /// The rejected value
        value: f64,
    },

    /// Negative jump intensity.
    #[error("Invalid rate: λ = {0} must be non-negative")]
    NegativeRate(f64),

    /// NaN or infinite parameter.
    #[error("Invalid parameter '{name}': value must be finite")]
    NonFinite {
        /// Parameter name
        name: &'static str,
    },
}

/// Checks that `value` is a finite probability.
pub(crate) fn check_probability(name: &'static str, value: f64) -> Result<(), ModelError> {
    if !value.is_finite() {
        return Err(ModelError::NonFinite { name });
    }
    if !(0.0..=1.0).contains(&value) {
        return Err(ModelError::ProbabilityOutOfRange { name, value });
    }
    Ok(())
}
