//! Ensemble of simulated paths.
//!
//! # Memory Layout
//!
//! Paths are stored in row-major order: `values[path_idx * (n_steps + 1) + step_idx]`
//! where `step_idx = 0` holds the initial value 0.

use attack_models::{ModelKind, ValueKind};

/// Ordered collection of equal-length paths from one simulation request.
///
/// Immutable after generation. Paths are exposed as slices in generation
/// order, each indexed by step `0..=n_steps`.
///
/// # Examples
///
/// ```rust
/// use attack_engine::sim::Ensemble;
/// use attack_models::ValueKind;
///
/// let ensemble = Ensemble::from_paths(
///     vec![vec![0.0, 1.0, 2.0], vec![0.0, 0.0, 1.0]],
///     ValueKind::Discrete,
/// )
/// .unwrap();
///
/// assert_eq!(ensemble.n_paths(), 2);
/// assert_eq!(ensemble.n_steps(), 2);
/// assert_eq!(ensemble.final_values(), vec![2.0, 1.0]);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Ensemble {
    values: Vec<f64>,
    n_paths: usize,
    path_len: usize,
    model: Option<ModelKind>,
    value_kind: ValueKind,
    seed: Option<u64>,
}

impl Ensemble {
    /// Wraps row-major values produced by the simulator.
    pub(crate) fn from_raw(
        values: Vec<f64>,
        n_paths: usize,
        n_steps: usize,
        model: ModelKind,
        value_kind: ValueKind,
        seed: Option<u64>,
    ) -> Self {
        debug_assert_eq!(values.len(), n_paths * (n_steps + 1));
        Self {
            values,
            n_paths,
            path_len: n_steps + 1,
            model: Some(model),
            value_kind,
            seed,
        }
    }

    /// Builds an ensemble from externally produced paths.
    ///
    /// # Returns
    /// `None` if the paths differ in length or any path is empty.
    /// An empty `paths` vector yields an empty ensemble.
    pub fn from_paths(paths: Vec<Vec<f64>>, value_kind: ValueKind) -> Option<Self> {
        let path_len = paths.first().map_or(0, Vec::len);
        if paths.iter().any(|p| p.is_empty() || p.len() != path_len) {
            return None;
        }

        let n_paths = paths.len();
        let values = paths.into_iter().flatten().collect();
        Some(Self {
            values,
            n_paths,
            path_len,
            model: None,
            value_kind,
            seed: None,
        })
    }

    /// Number of paths.
    #[inline]
    pub fn n_paths(&self) -> usize {
        self.n_paths
    }

    /// Number of steps per path (path length minus one).
    #[inline]
    pub fn n_steps(&self) -> usize {
        self.path_len.saturating_sub(1)
    }

    /// Length of every path.
    #[inline]
    pub fn path_len(&self) -> usize {
        self.path_len
    }

    /// True when the ensemble holds no paths.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.n_paths == 0
    }

    /// Model that generated the ensemble, if known.
    #[inline]
    pub fn model(&self) -> Option<ModelKind> {
        self.model
    }

    /// Integer or real valued paths.
    #[inline]
    pub fn value_kind(&self) -> ValueKind {
        self.value_kind
    }

    /// Seed that reproduces this ensemble, if known.
    #[inline]
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Path `index`.
    ///
    /// # Panics
    /// Panics if `index >= n_paths()`.
    #[inline]
    pub fn path(&self, index: usize) -> &[f64] {
        let start = index * self.path_len;
        &self.values[start..start + self.path_len]
    }

    /// Path `index`, or `None` when out of range.
    pub fn get_path(&self, index: usize) -> Option<&[f64]> {
        (index < self.n_paths).then(|| self.path(index))
    }

    /// Iterates over paths in generation order.
    pub fn paths(&self) -> impl ExactSizeIterator<Item = &[f64]> + '_ {
        self.values.chunks_exact(self.path_len.max(1))
    }

    /// Last value of every path, in ensemble order.
    pub fn final_values(&self) -> Vec<f64> {
        self.paths().filter_map(|p| p.last().copied()).collect()
    }

    /// All values, row-major.
    #[inline]
    pub fn as_flat(&self) -> &[f64] {
        &self.values
    }

    /// Copies the paths into nested vectors.
    pub fn to_nested(&self) -> Vec<Vec<f64>> {
        self.paths().map(<[f64]>::to_vec).collect()
    }
}
