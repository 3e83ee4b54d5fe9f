use clap::Args;
use std::path::PathBuf;

use crate::defaults;

#[derive(Args, Debug)]
pub struct InitArgs {
    /// Output configuration path
    #[arg(short, long, default_value = defaults::CONFIG_PATH)]
    pub output: PathBuf,

    /// Pairing mode (male_female, two_males, two_females)
    #[arg(short, long, default_value = defaults::PAIRING)]
    pub pairing: String,

    /// Bases per parental sequence
    #[arg(short = 'l', long, default_value_t = defaults::SEQUENCE_LENGTH)]
    pub length: usize,

    /// Per-base mutation probability applied to the child
    #[arg(short = 'm', long, default_value_t = defaults::MUTATION_RATE)]
    pub mutation_rate: f64,

    /// Random seed
    #[arg(long)]
    pub seed: Option<u64>,
}

#[derive(Args, Debug)]
pub struct RunArgs {
    /// Configuration file written by `meiosim init`
    ///
    /// Flags given on the command line override values from the file.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Pairing mode (male_female, two_males, two_females)
    #[arg(short, long)]
    pub pairing: Option<String>,

    /// Bases per parental sequence [default: 100]
    #[arg(short = 'l', long)]
    pub length: Option<usize>,

    /// Per-base mutation probability applied to the child [default: 0.01]
    #[arg(short = 'm', long)]
    pub mutation_rate: Option<f64>,

    /// Override random seed
    #[arg(long)]
    pub seed: Option<u64>,

    /// Output format (text, json, fasta)
    #[arg(short, long, default_value = defaults::OUTPUT_FORMAT)]
    pub format: String,

    /// Output file (stdout if not specified)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Number of independent mating events to run
    #[arg(short = 'r', long, default_value_t = defaults::REPLICATES)]
    pub replicates: usize,
}
