//! Base types for sequence representation.
//!
//! This module provides the foundational types for representing nucleotides
//! and sequences in the meiosim library.

mod nucleotide;
mod sequence;

pub use nucleotide::Nucleotide;
pub use sequence::Sequence;
