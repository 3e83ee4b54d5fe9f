//! Evolution module providing sequence generation, recombination and mutation.
//!
//! - **Generation**: random parental sequences
//! - **Recombination**: single obligate crossover between homologs
//! - **Mutation**: independent per-base point substitutions

pub mod generation;
pub mod mutation;
pub mod recombination;

pub use generation::generate;
pub use mutation::{mutate, PointMutation};
pub use recombination::{crossover_at, recombine, CrossoverIndex, Gamete};
