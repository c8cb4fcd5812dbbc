//! Deterministic replay source.

use super::UniformSource;

/// Cyclic replay of a fixed list of uniform draws.
///
/// After the last draw the sequence starts again from the first, so a short
/// list can drive arbitrarily long simulations. Two simulators fed equal
/// sequences produce bit-identical ensembles.
#[derive(Clone, Debug, PartialEq)]
pub struct FixedSequence {
    draws: Vec<f64>,
    cursor: usize,
}

impl FixedSequence {
    /// Creates a replay source.
    ///
    /// # Returns
    /// `None` if `draws` is empty or any draw lies outside `[0, 1)`.
    pub fn new(draws: Vec<f64>) -> Option<Self> {
        if draws.is_empty() || !draws.iter().all(|u| (0.0..1.0).contains(u)) {
            return None;
        }
        Some(Self { draws, cursor: 0 })
    }

    /// Replays the single value `u` forever.
    pub fn constant(u: f64) -> Option<Self> {
        Self::new(vec![u])
    }

    /// Number of draws consumed so far.
    #[inline]
    pub fn consumed(&self) -> usize {
        self.cursor
    }

    /// Rewinds to the first draw.
    pub fn reset(&mut self) {
        self.cursor = 0;
    }
}

impl UniformSource for FixedSequence {
    #[inline]
    fn next_uniform(&mut self) -> f64 {
        let u = self.draws[self.cursor % self.draws.len()];
        self.cursor += 1;
        u
    }
}
