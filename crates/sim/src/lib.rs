//! # Simulation Crate
//!
//! The `meiosim_sim` crate provides the core logic for simulating a single
//! round of sexual reproduction at the sequence level: random parental
//! sequences, meiotic crossover into gametes, and point mutation of the
//! resulting child genome.

pub mod base;
pub mod errors;
pub mod evolution;
pub mod simulation;
pub mod prelude;

pub use base::{Nucleotide, Sequence};
