use std::fmt;
use thiserror::Error;

/// Error returned when attempting to convert an invalid byte/character into
/// a `Nucleotide`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidNucleotide(pub u8);

impl fmt::Display for InvalidNucleotide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Invalid nucleotide byte: {} ('{}')", self.0, self.0 as char)
    }
}

impl std::error::Error for InvalidNucleotide {}

/// Error type for failures when constructing a `Sequence` from text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidSequence {
    /// A non-ASCII character was found.
    #[error("Invalid character in sequence: '{0}'")]
    InvalidChar(char),

    /// An ASCII byte at `position` is not a DNA base.
    #[error("Invalid base at position {position}: {source}")]
    InvalidBase {
        position: usize,
        #[source]
        source: InvalidNucleotide,
    },

    /// The sequence was empty when a non-empty sequence was required.
    #[error("Empty sequence not allowed")]
    EmptySequence,
}

/// Errors raised by the random sequence generator.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerationError {
    /// Requested length was zero.
    #[error("Invalid sequence length: {0} (must be at least 1)")]
    InvalidLength(usize),
}

/// Errors that can occur during recombination operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecombinationError {
    /// Sequences have different lengths
    #[error("Sequence length mismatch: {len1} vs {len2}")]
    LengthMismatch { len1: usize, len2: usize },
    /// Sequences are too short to hold a crossover point
    #[error("Sequence of length {length} is too short for crossover (need at least 2)")]
    TooShort { length: usize },
    /// Crossover index outside [1, length - 1]
    #[error("Invalid crossover position {position} for sequence of length {length}")]
    InvalidPosition { position: usize, length: usize },
}

/// Errors that can occur during mutation operations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MutationError {
    /// Invalid mutation rate (must be between 0.0 and 1.0)
    #[error("Invalid mutation rate: {0} (must be between 0.0 and 1.0)")]
    InvalidMutationRate(f64),
}

/// Errors produced by the mating orchestrator.
///
/// `UnknownPairingMode` is a configuration error and is always raised before
/// any sequence is generated.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MatingError {
    #[error("Invalid pairing type '{0}'. Choose: 'male_female', 'two_males', or 'two_females'")]
    UnknownPairingMode(String),
    #[error(transparent)]
    Generation(#[from] GenerationError),
    #[error(transparent)]
    Recombination(#[from] RecombinationError),
    #[error(transparent)]
    Mutation(#[from] MutationError),
}

/// Errors raised while loading, saving, or validating a `MatingConfig`.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Parse error: {0}")]
    Parse(String),
    #[error(transparent)]
    UnknownPairingMode(MatingError),
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

impl From<serde_json::Error> for ConfigError {
    fn from(e: serde_json::Error) -> Self {
        Self::Parse(format!("JSON error: {e}"))
    }
}
