//! Mating simulation.
//!
//! This module ties the evolutionary operators together into a single mating
//! event and holds the configuration that describes a run.

mod configs;
mod mating;

pub use configs::{
    MatingConfig, PairingMode, ParentRoles, DEFAULT_MUTATION_RATE, DEFAULT_SEQUENCE_LENGTH,
};
pub use mating::{mate, mate_named, mate_replicates, mate_with_rng, GameteReport, MatingResult};
