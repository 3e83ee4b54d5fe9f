//! Recombination operations for sequences.
//!
//! Meiosis is modeled as a single obligate crossover: exactly one break point
//! is drawn between two homologous sequences and the gamete takes the prefix
//! of the first homolog and the suffix of the second.

use crate::base::Sequence;
pub use crate::errors::RecombinationError;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Position at which a crossover splits two homologs.
///
/// Always within `[1, length - 1]` of the sequences it was drawn for, so both
/// homologs contribute at least one base.
///
/// Serialized as a bare integer. It is never deserialized on its own, since
/// the bound depends on the sequence it splits; see [`Gamete`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct CrossoverIndex(usize);

impl CrossoverIndex {
    /// Validate `position` for sequences of `length` bases.
    ///
    /// # Errors
    /// `TooShort` if `length < 2`, `InvalidPosition` if `position` is 0 or
    /// not below `length`.
    pub fn new(position: usize, length: usize) -> Result<Self, RecombinationError> {
        if length < 2 {
            return Err(RecombinationError::TooShort { length });
        }
        if position == 0 || position >= length {
            return Err(RecombinationError::InvalidPosition { position, length });
        }
        Ok(Self(position))
    }

    /// Draw a crossover position uniformly from `[1, length - 1]`.
    pub fn sample<R: Rng + ?Sized>(length: usize, rng: &mut R) -> Result<Self, RecombinationError> {
        if length < 2 {
            return Err(RecombinationError::TooShort { length });
        }
        Ok(Self(rng.random_range(1..length)))
    }

    /// The raw position.
    #[inline]
    pub fn get(self) -> usize {
        self.0
    }
}

impl fmt::Display for CrossoverIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A recombined haploid sequence together with the crossover that made it.
///
/// Deserialization checks the crossover against the sequence length.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawGamete")]
pub struct Gamete {
    pub sequence: Sequence,
    pub crossover: CrossoverIndex,
}

#[derive(Deserialize)]
struct RawGamete {
    sequence: Sequence,
    crossover: usize,
}

impl TryFrom<RawGamete> for Gamete {
    type Error = RecombinationError;

    fn try_from(raw: RawGamete) -> Result<Self, Self::Error> {
        let crossover = CrossoverIndex::new(raw.crossover, raw.sequence.len())?;
        Ok(Self {
            sequence: raw.sequence,
            crossover,
        })
    }
}

impl Gamete {
    /// Recombine two homologs into a gamete.
    pub fn from_homologs<R: Rng + ?Sized>(
        seq_a: &Sequence,
        seq_b: &Sequence,
        rng: &mut R,
    ) -> Result<Self, RecombinationError> {
        let (sequence, crossover) = recombine(seq_a, seq_b, rng)?;
        Ok(Self {
            sequence,
            crossover,
        })
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.sequence.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }
}

fn check_homologs(seq_a: &Sequence, seq_b: &Sequence) -> Result<usize, RecombinationError> {
    if seq_a.len() != seq_b.len() {
        return Err(RecombinationError::LengthMismatch {
            len1: seq_a.len(),
            len2: seq_b.len(),
        });
    }
    if seq_a.len() < 2 {
        return Err(RecombinationError::TooShort { length: seq_a.len() });
    }
    Ok(seq_a.len())
}

/// Perform a single crossover at a random position.
///
/// Returns the hybrid `seq_a[..index] ++ seq_b[index..]` and the index used.
///
/// # Errors
/// `LengthMismatch` if the sequences differ in length (checked first), then
/// `TooShort` if they have fewer than two bases.
pub fn recombine<R: Rng + ?Sized>(
    seq_a: &Sequence,
    seq_b: &Sequence,
    rng: &mut R,
) -> Result<(Sequence, CrossoverIndex), RecombinationError> {
    let length = check_homologs(seq_a, seq_b)?;
    let index = CrossoverIndex::sample(length, rng)?;
    let hybrid = splice(seq_a, seq_b, index);
    log::trace!("crossover at {index} of {length}");
    Ok((hybrid, index))
}

/// Perform a single crossover at a caller-chosen position.
///
/// # Errors
/// Same preconditions as [`recombine`], plus `InvalidPosition` if `position`
/// is outside `[1, length - 1]`.
pub fn crossover_at(
    seq_a: &Sequence,
    seq_b: &Sequence,
    position: usize,
) -> Result<Sequence, RecombinationError> {
    let length = check_homologs(seq_a, seq_b)?;
    let index = CrossoverIndex::new(position, length)?;
    Ok(splice(seq_a, seq_b, index))
}

fn splice(seq_a: &Sequence, seq_b: &Sequence, index: CrossoverIndex) -> Sequence {
    let at = index.get();
    seq_a.as_slice()[..at]
        .iter()
        .chain(seq_b.as_slice()[at..].iter())
        .copied()
        .collect()
}
