//! Random sequence generation.
//!
//! Parental material is drawn base by base, each base independent and
//! uniform over {A, C, G, T}.

use crate::base::{Nucleotide, Sequence};
pub use crate::errors::GenerationError;
use rand::Rng;

/// Generate a random sequence of exactly `length` bases.
///
/// # Errors
/// Returns `GenerationError::InvalidLength` when `length` is zero.
pub fn generate<R: Rng + ?Sized>(length: usize, rng: &mut R) -> Result<Sequence, GenerationError> {
    if length == 0 {
        return Err(GenerationError::InvalidLength(length));
    }
    Ok((0..length).map(|_| rng.random::<Nucleotide>()).collect())
}
