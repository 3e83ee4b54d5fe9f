//! Mutation operations for sequences.
//!
//! Point substitutions are applied independently at every position with a
//! fixed per-base probability. When a substitution fires, the replacement is
//! drawn uniformly from the three bases that differ from the current one
//! (a Jukes-Cantor style uniform model), so a fired mutation always changes
//! the base.

use crate::base::{Nucleotide, Sequence};
pub use crate::errors::MutationError;
use rand::Rng;

/// Uniform point-substitution model with a validated per-base rate.
///
/// The only constructor is [`PointMutation::new`], so every model in
/// existence holds a rate inside `[0.0, 1.0]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointMutation {
    rate: f64,
}

impl PointMutation {
    /// Create a model with per-base mutation probability `rate`.
    ///
    /// # Errors
    /// Returns `InvalidMutationRate` if `rate` is outside `[0.0, 1.0]` or NaN.
    pub fn new(rate: f64) -> Result<Self, MutationError> {
        if !(0.0..=1.0).contains(&rate) {
            return Err(MutationError::InvalidMutationRate(rate));
        }
        Ok(Self { rate })
    }

    /// Get the per-base mutation probability.
    #[inline]
    pub fn rate(&self) -> f64 {
        self.rate
    }

    /// Decide the fate of one base.
    #[inline]
    pub fn mutate_base<R: Rng + ?Sized>(&self, base: Nucleotide, rng: &mut R) -> Nucleotide {
        if rng.random::<f64>() >= self.rate {
            return base;
        }
        base.others()[rng.random_range(0..3)]
    }

    /// Return a mutated copy of `sequence`.
    ///
    /// With rate 0.0 the copy has identical content; with rate 1.0 every
    /// position differs from the input.
    pub fn mutate<R: Rng + ?Sized>(&self, sequence: &Sequence, rng: &mut R) -> Sequence {
        sequence.iter().map(|base| self.mutate_base(base, rng)).collect()
    }

    /// Like [`mutate`](Self::mutate), but also report the mutated positions
    /// in ascending order.
    pub fn mutate_tracked<R: Rng + ?Sized>(
        &self,
        sequence: &Sequence,
        rng: &mut R,
    ) -> (Sequence, Vec<usize>) {
        let mut positions = Vec::new();
        let mutated = sequence
            .iter()
            .enumerate()
            .map(|(i, base)| {
                let new_base = self.mutate_base(base, rng);
                if new_base != base {
                    positions.push(i);
                }
                new_base
            })
            .collect();
        (mutated, positions)
    }
}

/// Mutate `sequence` with per-base probability `rate`.
///
/// # Errors
/// Returns `InvalidMutationRate` if `rate` is outside `[0.0, 1.0]`.
pub fn mutate<R: Rng + ?Sized>(
    sequence: &Sequence,
    rate: f64,
    rng: &mut R,
) -> Result<Sequence, MutationError> {
    Ok(PointMutation::new(rate)?.mutate(sequence, rng))
}
