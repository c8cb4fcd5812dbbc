//! Histogram of final values.
//!
//! Two bucketing regimes:
//!
//! - [`Binning::Exact`]: one bucket per distinct value, keyed by that value.
//!   Used for integer-valued models.
//! - [`Binning::FixedWidth`]: bins of `width` centred on
//!   `floor(min) + k * width`. A value belongs to the bin whose centre is
//!   within half a width; a value exactly halfway between two centres goes
//!   to the upper bin, so every value lands in exactly one bin.

use attack_models::ValueKind;

use crate::sim::SimulationError;

/// Upper bound on fixed-width bins per histogram.
pub const MAX_BINS: usize = 100_000;

/// Bucketing rule for a [`Distribution`].
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "snake_case"))]
pub enum Binning {
    /// One bucket per distinct value.
    Exact,
    /// Fixed-width bins starting at `floor(min)`.
    FixedWidth {
        /// Bin width (positive, finite).
        width: f64,
    },
}

impl Binning {
    /// Default width for continuous-valued models.
    pub const DEFAULT_WIDTH: f64 = 1.0;

    /// Default binning for the given value kind.
    pub fn for_value_kind(kind: ValueKind) -> Self {
        match kind {
            ValueKind::Discrete => Binning::Exact,
            ValueKind::Continuous => Binning::FixedWidth {
                width: Self::DEFAULT_WIDTH,
            },
        }
    }

    /// Fixed-width binning.
    ///
    /// # Returns
    /// `None` unless `width` is positive and finite.
    pub fn fixed_width(width: f64) -> Option<Self> {
        (width.is_finite() && width > 0.0).then_some(Binning::FixedWidth { width })
    }
}

/// One histogram bar.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bucket {
    /// Bucket value (exact value or bin centre).
    pub key: f64,
    /// Number of final values in the bucket.
    pub count: usize,
}

/// Empirical distribution of final values.
///
/// Buckets are sorted ascending by key and their counts sum to the number
/// of values summarised.
///
/// # Examples
///
/// ```rust
/// use attack_engine::stats::{Binning, Distribution};
///
/// let dist = Distribution::from_values(&[2.0, 0.0, 2.0, 1.0], Binning::Exact).unwrap();
///
/// let pairs: Vec<(f64, usize)> = dist.iter().collect();
/// assert_eq!(pairs, vec![(0.0, 1), (1.0, 1), (2.0, 2)]);
/// assert_eq!(dist.total(), 4);
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Distribution {
    binning: Binning,
    buckets: Vec<Bucket>,
}

impl Distribution {
    /// Buckets `values` according to `binning`.
    ///
    /// # Errors
    ///
    /// - `SimulationError::EmptyEnsemble` if `values` is empty
    /// - `SimulationError::TooManyBins` if fixed-width bins would exceed
    ///   [`MAX_BINS`]
    /// - `SimulationError::NonFiniteValue` if fixed-width binning meets a NaN
    ///   or infinite value
    pub fn from_values(values: &[f64], binning: Binning) -> Result<Self, SimulationError> {
        if values.is_empty() {
            return Err(SimulationError::EmptyEnsemble);
        }

        let buckets = match binning {
            Binning::Exact => exact_buckets(values),
            Binning::FixedWidth { width } => fixed_width_buckets(values, width)?,
        };

        Ok(Self { binning, buckets })
    }

    /// Bucketing rule used.
    #[inline]
    pub fn binning(&self) -> Binning {
        self.binning
    }

    /// Buckets, ascending by key.
    #[inline]
    pub fn buckets(&self) -> &[Bucket] {
        &self.buckets
    }

    /// Iterates over `(key, count)` pairs, ascending by key.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (f64, usize)> + '_ {
        self.buckets.iter().map(|b| (b.key, b.count))
    }

    /// Number of buckets.
    #[inline]
    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    /// True when there are no buckets.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// Sum of counts.
    pub fn total(&self) -> usize {
        self.buckets.iter().map(|b| b.count).sum()
    }

    /// Count stored under `key`, zero if absent.
    pub fn count_of(&self, key: f64) -> usize {
        self.buckets
            .iter()
            .find(|b| b.key == key)
            .map_or(0, |b| b.count)
    }

    /// Largest bucket count.
    pub fn max_count(&self) -> usize {
        self.buckets.iter().map(|b| b.count).max().unwrap_or(0)
    }
}

fn exact_buckets(values: &[f64]) -> Vec<Bucket> {
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);

    let mut buckets: Vec<Bucket> = Vec::new();
    for value in sorted {
        match buckets.last_mut() {
            Some(last) if last.key == value => last.count += 1,
            _ => buckets.push(Bucket {
                key: value,
                count: 1,
            }),
        }
    }
    buckets
}

fn fixed_width_buckets(values: &[f64], width: f64) -> Result<Vec<Bucket>, SimulationError> {
    if let Some(&value) = values.iter().find(|v| !v.is_finite()) {
        return Err(SimulationError::NonFiniteValue(value));
    }

    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let origin = min.floor();

    // Round-half-up onto centres origin + k * width
    let position = |v: f64| ((v - origin) / width + 0.5).floor();

    // Highest index checked in f64 so the usize casts below cannot saturate
    let span = position(max);
    if !span.is_finite() || span >= MAX_BINS as f64 {
        return Err(SimulationError::TooManyBins {
            bins: (span as usize).saturating_add(1),
            limit: MAX_BINS,
        });
    }

    let mut counts = vec![0usize; span as usize + 1];
    for &value in values {
        counts[position(value) as usize] += 1;
    }

    Ok(counts
        .into_iter()
        .enumerate()
        .map(|(k, count)| Bucket {
            key: origin + k as f64 * width,
            count,
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_binning_for_value_kind() {
        assert_eq!(Binning::for_value_kind(ValueKind::Discrete), Binning::Exact);
        assert_eq!(
            Binning::for_value_kind(ValueKind::Continuous),
            Binning::FixedWidth { width: 1.0 }
        );
    }

    #[test]
    fn test_fixed_width_validation() {
        assert!(Binning::fixed_width(0.5).is_some());
        assert!(Binning::fixed_width(0.0).is_none());
        assert!(Binning::fixed_width(-1.0).is_none());
        assert!(Binning::fixed_width(f64::INFINITY).is_none());
    }

    #[test]
    fn test_exact_buckets_sorted() {
        let dist =
            Distribution::from_values(&[3.0, -1.0, 3.0, 0.0, -1.0, 3.0], Binning::Exact).unwrap();

        assert_eq!(
            dist.iter().collect::<Vec<_>>(),
            vec![(-1.0, 2), (0.0, 1), (3.0, 3)]
        );
        assert_eq!(dist.total(), 6);
        assert_eq!(dist.count_of(3.0), 3);
        assert_eq!(dist.count_of(2.0), 0);
        assert_eq!(dist.max_count(), 3);
    }

    #[test]
    fn test_exact_single_value() {
        let dist = Distribution::from_values(&[5.0, 5.0, 5.0], Binning::Exact).unwrap();
        assert_eq!(dist.iter().collect::<Vec<_>>(), vec![(5.0, 3)]);
    }

    #[test]
    fn test_exact_merges_signed_zero() {
        let dist = Distribution::from_values(&[0.0, -0.0, 0.0], Binning::Exact).unwrap();
        assert_eq!(dist.len(), 1);
        assert_eq!(dist.total(), 3);
    }

    #[test]
    fn test_fixed_width_centres() {
        // origin = floor(-0.75) = -1; centres -1, 0, 1
        let values = [-0.75, -0.2, 0.1, 0.4, 0.9];
        let dist = Distribution::from_values(&values, Binning::FixedWidth { width: 1.0 }).unwrap();

        assert_eq!(
            dist.iter().collect::<Vec<_>>(),
            vec![(-1.0, 1), (0.0, 3), (1.0, 1)]
        );
    }

    #[test]
    fn test_fixed_width_half_way_goes_up() {
        // origin = 0; 0.5 sits between centres 0 and 1
        let dist =
            Distribution::from_values(&[0.0, 0.5, 1.5], Binning::FixedWidth { width: 1.0 }).unwrap();

        assert_eq!(
            dist.iter().collect::<Vec<_>>(),
            vec![(0.0, 1), (1.0, 1), (2.0, 1)]
        );
    }

    #[test]
    fn test_fixed_width_keeps_empty_interior_bins() {
        let dist =
            Distribution::from_values(&[0.0, 3.0], Binning::FixedWidth { width: 1.0 }).unwrap();

        assert_eq!(
            dist.iter().collect::<Vec<_>>(),
            vec![(0.0, 1), (1.0, 0), (2.0, 0), (3.0, 1)]
        );
        assert_eq!(dist.total(), 2);
    }

    #[test]
    fn test_fixed_width_custom() {
        let dist = Distribution::from_values(
            &[0.1, 0.2, 0.3, 0.6],
            Binning::fixed_width(0.25).unwrap(),
        )
        .unwrap();

        let keys: Vec<f64> = dist.iter().map(|(k, _)| k).collect();
        assert_relative_eq!(keys[0], 0.0);
        assert_relative_eq!(keys[1], 0.25);
        assert_eq!(dist.total(), 4);
        assert_eq!(dist.count_of(0.25), 2);
    }

    #[test]
    fn test_too_many_bins() {
        let result = Distribution::from_values(&[0.0, 1.0], Binning::FixedWidth { width: 1e-9 });
        assert!(matches!(result, Err(SimulationError::TooManyBins { .. })));
    }

    #[test]
    fn test_tiny_width_is_rejected_not_overflowed() {
        let result = Distribution::from_values(&[0.0, 0.5, 1.0], Binning::FixedWidth { width: 1e-300 });
        assert!(matches!(
            result,
            Err(SimulationError::TooManyBins { limit: MAX_BINS, .. })
        ));
    }

    #[test]
    fn test_wide_spread_is_rejected_not_overflowed() {
        let result = Distribution::from_values(&[0.0, 1e20], Binning::FixedWidth { width: 1.0 });
        assert!(matches!(result, Err(SimulationError::TooManyBins { .. })));

        // Exact buckets are unaffected by spread
        let dist = Distribution::from_values(&[0.0, 1e20], Binning::Exact).unwrap();
        assert_eq!(dist.len(), 2);
    }

    #[test]
    fn test_last_bin_under_limit() {
        let top = (MAX_BINS - 1) as f64;
        let dist = Distribution::from_values(&[0.0, top], Binning::FixedWidth { width: 1.0 }).unwrap();
        assert_eq!(dist.len(), MAX_BINS);
        assert_eq!(dist.total(), 2);

        let result = Distribution::from_values(&[0.0, top + 1.0], Binning::FixedWidth { width: 1.0 });
        assert_eq!(
            result,
            Err(SimulationError::TooManyBins {
                bins: MAX_BINS + 1,
                limit: MAX_BINS
            })
        );
    }

    #[test]
    fn test_non_finite_value_rejected() {
        let result = Distribution::from_values(&[0.0, f64::NAN], Binning::FixedWidth { width: 1.0 });
        assert!(matches!(result, Err(SimulationError::NonFiniteValue(v)) if v.is_nan()));

        let result =
            Distribution::from_values(&[f64::INFINITY], Binning::FixedWidth { width: 1.0 });
        assert_eq!(result, Err(SimulationError::NonFiniteValue(f64::INFINITY)));
    }

    #[test]
    fn test_empty_values() {
        assert_eq!(
            Distribution::from_values(&[], Binning::Exact),
            Err(SimulationError::EmptyEnsemble)
        );
    }
}
