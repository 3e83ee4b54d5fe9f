//! Mating configuration.
//!
//! This module holds the pairing modes, the role labels attached to each
//! mode, and the serializable `MatingConfig` that fully describes one run.

use crate::errors::{ConfigError, MatingError};
use crate::evolution::PointMutation;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;
use std::str::FromStr;

/// Default number of bases per parental sequence.
pub const DEFAULT_SEQUENCE_LENGTH: usize = 100;
/// Default per-base mutation probability.
pub const DEFAULT_MUTATION_RATE: f64 = 0.01;

/// Which kinds of parents contribute gametes.
///
/// All modes run the same algorithm; they only change the labels used when
/// reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum PairingMode {
    #[default]
    MaleFemale,
    TwoMales,
    TwoFemales,
}

impl PairingMode {
    /// All recognized modes.
    pub const ALL: [PairingMode; 3] = [Self::MaleFemale, Self::TwoMales, Self::TwoFemales];

    /// Canonical configuration name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::MaleFemale => "male_female",
            Self::TwoMales => "two_males",
            Self::TwoFemales => "two_females",
        }
    }

    /// Role labels attached to the four parents and two gametes.
    pub const fn roles(self) -> ParentRoles {
        match self {
            Self::MaleFemale => ParentRoles {
                banner: "Simulating Male + Female",
                parents: ["mom1", "mom2", "dad1", "dad2"],
                gametes: ["Egg", "Sperm"],
            },
            Self::TwoMales => ParentRoles {
                banner: "Simulating Two Males (Sperm + Sperm)",
                parents: ["male1a", "male1b", "male2a", "male2b"],
                gametes: ["Sperm 1", "Sperm 2"],
            },
            Self::TwoFemales => ParentRoles {
                banner: "Simulating Two Females (Egg + Egg)",
                parents: ["female1a", "female1b", "female2a", "female2b"],
                gametes: ["Egg 1", "Egg 2"],
            },
        }
    }
}

impl fmt::Display for PairingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PairingMode {
    type Err = MatingError;

    /// Parse a mode name. Matching is case-insensitive and accepts `-` in
    /// place of `_` (`Two-Males` parses as `two_males`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('-', "_");
        Self::ALL
            .into_iter()
            .find(|mode| mode.name() == normalized)
            .ok_or_else(|| MatingError::UnknownPairingMode(s.to_string()))
    }
}

impl TryFrom<String> for PairingMode {
    type Error = MatingError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<PairingMode> for String {
    fn from(mode: PairingMode) -> Self {
        mode.name().to_string()
    }
}

/// Labels for the participants of one mating.
///
/// `parents[0]` and `parents[1]` are the homologs of the first lineage,
/// `parents[2]` and `parents[3]` those of the second.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParentRoles {
    pub banner: &'static str,
    pub parents: [&'static str; 4],
    pub gametes: [&'static str; 2],
}

/// The master configuration struct.
/// Can be deserialized from a file to fully reproduce a mating run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawMatingConfig")]
pub struct MatingConfig {
    /// Pairing mode
    pub pairing: PairingMode,
    /// Bases per parental sequence
    pub sequence_length: usize,
    /// Per-base mutation probability applied to the child
    pub mutation_rate: f64,
    /// Optional RNG seed for reproducibility
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

/// On-disk shape of a `MatingConfig`, with the pairing mode still as text.
/// Missing fields take the defaults.
#[derive(Deserialize)]
struct RawMatingConfig {
    pairing: Option<String>,
    #[serde(default = "default_sequence_length")]
    sequence_length: usize,
    #[serde(default = "default_mutation_rate")]
    mutation_rate: f64,
    #[serde(default)]
    seed: Option<u64>,
}

impl TryFrom<RawMatingConfig> for MatingConfig {
    type Error = MatingError;

    fn try_from(raw: RawMatingConfig) -> Result<Self, Self::Error> {
        let pairing = match raw.pairing {
            Some(name) => name.parse()?,
            None => PairingMode::default(),
        };
        Ok(Self {
            pairing,
            sequence_length: raw.sequence_length,
            mutation_rate: raw.mutation_rate,
            seed: raw.seed,
        })
    }
}

fn default_sequence_length() -> usize {
    DEFAULT_SEQUENCE_LENGTH
}

fn default_mutation_rate() -> f64 {
    DEFAULT_MUTATION_RATE
}

impl Default for MatingConfig {
    fn default() -> Self {
        Self {
            pairing: PairingMode::default(),
            sequence_length: DEFAULT_SEQUENCE_LENGTH,
            mutation_rate: DEFAULT_MUTATION_RATE,
            seed: None,
        }
    }
}

impl MatingConfig {
    /// Create a configuration without a fixed seed.
    pub fn new(pairing: PairingMode, sequence_length: usize, mutation_rate: f64) -> Self {
        Self {
            pairing,
            sequence_length,
            mutation_rate,
            seed: None,
        }
    }

    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Check that the configuration can drive a mating run.
    ///
    /// Parental sequences need at least two bases for a crossover point to
    /// exist, and the mutation rate must be a probability.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.sequence_length < 2 {
            return Err(ConfigError::Invalid(format!(
                "sequence_length must be at least 2, got {}",
                self.sequence_length
            )));
        }
        PointMutation::new(self.mutation_rate)
            .map_err(|e| ConfigError::Invalid(e.to_string()))?;
        Ok(())
    }

    /// Parse a JSON document into a configuration.
    ///
    /// Malformed JSON is a `Parse` error; a well-formed document naming an
    /// unknown pairing mode is `UnknownPairingMode`.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let raw: RawMatingConfig = serde_json::from_str(json)?;
        raw.try_into().map_err(ConfigError::UnknownPairingMode)
    }

    /// Load a configuration from a JSON file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let reader = BufReader::new(File::open(path)?);
        let raw: RawMatingConfig = serde_json::from_reader(reader)?;
        raw.try_into().map_err(ConfigError::UnknownPairingMode)
    }

    /// Write the configuration as pretty-printed JSON.
    pub fn to_json_file(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let writer = BufWriter::new(File::create(path)?);
        serde_json::to_writer_pretty(writer, self)?;
        Ok(())
    }
}
