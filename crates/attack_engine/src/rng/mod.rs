//! # Random Number Generation Infrastructure
//!
//! This module provides the uniform draw sources consumed by the path
//! simulator.
//!
//! ## Design Rationale
//!
//! - **Reproducibility**: `SimRng` is always seeded; unseeded runs pick a
//!   seed from entropy and report it
//! - **Substitutability**: the simulator is generic over [`UniformSource`],
//!   so tests can replay a fixed draw sequence
//! - **Static dispatch**: no `Box<dyn UniformSource>` in the trial loop
//!
//! ## Module Structure
//!
//! - [`SimRng`]: seeded PRNG wrapper around `rand::rngs::StdRng`
//! - [`FixedSequence`]: cyclic replay of a fixed list of draws
//!
//! ## Usage Example
//!
//! ```rust
//! use attack_engine::rng::{FixedSequence, SimRng, UniformSource};
//!
//! let mut rng = SimRng::from_seed(12345);
//! let u = rng.next_uniform();
//! assert!((0.0..1.0).contains(&u));
//!
//! let mut replay = FixedSequence::new(vec![0.1, 0.9]).unwrap();
//! assert_eq!(replay.next_uniform(), 0.1);
//! assert_eq!(replay.next_uniform(), 0.9);
//! assert_eq!(replay.next_uniform(), 0.1);
//! ```

mod prng;
mod sequence;

pub use prng::SimRng;
pub use sequence::FixedSequence;

/// Source of uniform draws in `[0, 1)`.
///
/// The path simulator consumes exactly one draw per step, in path order then
/// step order.
pub trait UniformSource {
    /// Next uniform value in `[0, 1)`.
    fn next_uniform(&mut self) -> f64;

    /// Seed that reproduces this source, if it has one.
    fn seed(&self) -> Option<u64> {
        None
    }
}

impl<S: UniformSource + ?Sized> UniformSource for &mut S {
    #[inline]
    fn next_uniform(&mut self) -> f64 {
        (**self).next_uniform()
    }

    fn seed(&self) -> Option<u64> {
        (**self).seed()
    }
}

#[cfg(test)]
mod tests;
