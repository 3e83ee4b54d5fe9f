//! Shared default values for the command-line surface.
//! These values are used by both `init` and `run` (via clap).

use meiosim_sim::simulation::{DEFAULT_MUTATION_RATE, DEFAULT_SEQUENCE_LENGTH};

pub const CONFIG_PATH: &str = "mating.json";
pub const PAIRING: &str = "male_female";

pub const SEQUENCE_LENGTH: usize = DEFAULT_SEQUENCE_LENGTH;
pub const MUTATION_RATE: f64 = DEFAULT_MUTATION_RATE;

pub const OUTPUT_FORMAT: &str = "text";
pub const REPLICATES: usize = 1;

// Report layout
pub const FASTA_LINE_WIDTH: usize = 60;
pub const TRACK_WIDTH: usize = 60;
