//! Ensemble statistics.
//!
//! Reduces an ensemble to the distribution, mean and population variance of
//! its final values. Intermediate path values are never inspected.
//!
//! The bucketing regime follows the ensemble's value kind: exact buckets for
//! integer-valued models, width-1 bins otherwise. [`summarize_with`] accepts
//! an explicit [`Binning`].
//!
//! # Examples
//!
//! ```rust
//! use attack_engine::sim::Ensemble;
//! use attack_engine::stats::summarize;
//! use attack_models::ValueKind;
//!
//! let ensemble = Ensemble::from_paths(
//!     vec![vec![0.0, 1.0], vec![0.0, 1.0], vec![0.0, 0.0]],
//!     ValueKind::Discrete,
//! )
//! .unwrap();
//!
//! let summary = summarize(&ensemble).unwrap();
//! assert_eq!(summary.distribution.iter().collect::<Vec<_>>(), vec![(0.0, 1), (1.0, 2)]);
//! ```

pub mod distribution;
pub mod moments;

pub use distribution::{Binning, Bucket, Distribution, MAX_BINS};
pub use moments::SummaryStatistics;

use tracing::debug;

use crate::sim::{Ensemble, SimulationError};

/// Distribution and moments of an ensemble's final values.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct EnsembleSummary {
    /// Number of final values summarised.
    pub n_paths: usize,
    /// Histogram of final values.
    pub distribution: Distribution,
    /// Mean and variance of final values.
    pub statistics: SummaryStatistics,
}

/// Summarises `ensemble` with the binning implied by its value kind.
///
/// # Errors
///
/// `SimulationError::EmptyEnsemble` if the ensemble has no paths.
pub fn summarize(ensemble: &Ensemble) -> Result<EnsembleSummary, SimulationError> {
    summarize_with(ensemble, Binning::for_value_kind(ensemble.value_kind()))
}

/// Summarises `ensemble` with an explicit binning.
///
/// # Errors
///
/// - `SimulationError::EmptyEnsemble` if the ensemble has no paths
/// - `SimulationError::TooManyBins` if `binning` is too fine for the spread
pub fn summarize_with(
    ensemble: &Ensemble,
    binning: Binning,
) -> Result<EnsembleSummary, SimulationError> {
    summarize_final_values(&ensemble.final_values(), binning)
}

/// Summarises a slice of final values.
///
/// # Errors
///
/// As [`summarize_with`].
pub fn summarize_final_values(
    values: &[f64],
    binning: Binning,
) -> Result<EnsembleSummary, SimulationError> {
    let statistics = SummaryStatistics::from_values(values)?;
    let distribution = Distribution::from_values(values, binning)?;

    debug!(
        n_paths = values.len(),
        buckets = distribution.len(),
        mean = statistics.mean,
        variance = statistics.variance,
        "ensemble summarised"
    );

    Ok(EnsembleSummary {
        n_paths: values.len(),
        distribution,
        statistics,
    })
}
