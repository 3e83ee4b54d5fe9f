use super::Nucleotide;
use crate::errors::InvalidSequence;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::ops::Range;
use std::str::FromStr;

/// Biological sequence backed by a vector of Nucleotides.
///
/// A `Sequence` is a value: once built it is never edited. Crossover and
/// mutation build new sequences from existing ones, so a parent handed to
/// the recombination engine is guaranteed to come back untouched.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Sequence(Vec<Nucleotide>);

impl Sequence {
    /// Create a `Sequence` from a vector of `Nucleotide`s.
    ///
    /// ```rust
    /// # use meiosim_sim::base::{Sequence, Nucleotide};
    /// let seq = Sequence::from_nucleotides(vec![Nucleotide::A, Nucleotide::T]);
    /// assert_eq!(seq.to_string(), "AT");
    /// ```
    pub fn from_nucleotides(nucleotides: Vec<Nucleotide>) -> Self {
        Self(nucleotides)
    }

    /// Return the length of the sequence in bases.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Return `true` if the sequence contains no bases.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Return the `Nucleotide` at `index`, or `None` if out of range.
    #[inline]
    pub fn get(&self, index: usize) -> Option<Nucleotide> {
        self.0.get(index).copied()
    }

    /// Borrow the underlying `Nucleotide` slice.
    #[inline]
    pub fn as_slice(&self) -> &[Nucleotide] {
        &self.0
    }

    /// Iterate over the bases.
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = Nucleotide> + '_ {
        self.0.iter().copied()
    }

    /// Copy the bases in `range` into a new `Sequence`.
    ///
    /// Panics if `range` is out of bounds, like slice indexing.
    pub fn slice(&self, range: Range<usize>) -> Sequence {
        Self(self.0[range].to_vec())
    }

    /// Build a new sequence holding `self` followed by `other`.
    pub fn concat(&self, other: &Sequence) -> Sequence {
        let mut data = Vec::with_capacity(self.len() + other.len());
        data.extend_from_slice(&self.0);
        data.extend_from_slice(&other.0);
        Self(data)
    }

    /// Number of positions at which two sequences differ.
    ///
    /// Only the overlapping prefix is compared; callers interested in equal
    /// length sequences should check lengths first.
    pub fn hamming_distance(&self, other: &Sequence) -> usize {
        self.0
            .iter()
            .zip(other.0.iter())
            .filter(|(a, b)| a != b)
            .count()
    }

    /// Fraction of G and C bases (0.0 for an empty sequence).
    pub fn gc_content(&self) -> f64 {
        if self.is_empty() {
            return 0.0;
        }
        let gc = self
            .0
            .iter()
            .filter(|n| matches!(n, Nucleotide::G | Nucleotide::C))
            .count();
        gc as f64 / self.len() as f64
    }
}

impl From<Vec<Nucleotide>> for Sequence {
    fn from(nucleotides: Vec<Nucleotide>) -> Self {
        Self(nucleotides)
    }
}

impl FromIterator<Nucleotide> for Sequence {
    fn from_iter<I: IntoIterator<Item = Nucleotide>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl fmt::Display for Sequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &nuc in &self.0 {
            write!(f, "{}", nuc.to_char())?;
        }
        Ok(())
    }
}

impl FromStr for Sequence {
    type Err = InvalidSequence;

    /// Parse a textual representation (e.g. "ACGT") into a `Sequence`.
    ///
    /// Bytes outside the DNA alphabet produce `InvalidBase` with the
    /// offending position, non-ASCII characters `InvalidChar`, and empty
    /// input `EmptySequence`. ASCII letters are accepted in either case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(InvalidSequence::EmptySequence);
        }
        let data: Result<Vec<Nucleotide>, _> = s
            .chars()
            .enumerate()
            .map(|(position, c)| {
                if !c.is_ascii() {
                    return Err(InvalidSequence::InvalidChar(c));
                }
                Nucleotide::try_from(c as u8)
                    .map_err(|source| InvalidSequence::InvalidBase { position, source })
            })
            .collect();

        Ok(Self(data?))
    }
}

// Sequences travel through JSON reports as plain "ACGT" strings.
impl Serialize for Sequence {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Sequence {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}
