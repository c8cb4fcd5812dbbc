//! First and second moments of final values.

use crate::sim::SimulationError;

/// Mean and population variance of a sample.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SummaryStatistics {
    /// Arithmetic mean.
    pub mean: f64,
    /// Population variance (divisor `n`).
    pub variance: f64,
}

impl SummaryStatistics {
    /// Computes mean and population variance of `values`.
    ///
    /// Deviations are taken from the first value before averaging, so a
    /// constant sample yields exactly that constant and zero variance.
    ///
    /// # Errors
    ///
    /// `SimulationError::EmptyEnsemble` if `values` is empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use attack_engine::stats::SummaryStatistics;
    ///
    /// let stats = SummaryStatistics::from_values(&[1.0, 2.0, 3.0, 4.0]).unwrap();
    /// assert_eq!(stats.mean, 2.5);
    /// assert_eq!(stats.variance, 1.25);
    /// ```
    pub fn from_values(values: &[f64]) -> Result<Self, SimulationError> {
        let shift = *values.first().ok_or(SimulationError::EmptyEnsemble)?;
        let n = values.len() as f64;

        let mean = shift + values.iter().map(|&v| v - shift).sum::<f64>() / n;
        let variance = values
            .iter()
            .map(|&v| {
                let d = v - mean;
                d * d
            })
            .sum::<f64>()
            / n;

        Ok(Self { mean, variance })
    }

    /// Population standard deviation.
    #[inline]
    pub fn std_dev(&self) -> f64 {
        self.variance.sqrt()
    }
}
