//! Commonly used imports for convenience.
//!
//! # Example
//!
//! ```
//! use meiosim_sim::prelude::*;
//!
//! let config = MatingConfig::new(PairingMode::MaleFemale, 20, 0.01).with_seed(42);
//! let result = mate(&config).unwrap();
//! assert_eq!(result.child.len(), 40);
//! ```

pub use crate::base::{Nucleotide, Sequence};
pub use crate::errors::{self, MatingError};
pub use crate::evolution::{
    crossover_at, generate, mutate, recombine, CrossoverIndex, Gamete, PointMutation,
};
pub use crate::simulation::{
    mate, mate_named, mate_replicates, mate_with_rng, GameteReport, MatingConfig, MatingResult,
    PairingMode,
};
