mod args;
mod commands;
pub mod defaults;
mod printing;

use anyhow::Result;
use clap::{Parser, Subcommand};

use args::{InitArgs, RunArgs};
use commands::{init, modes, run};

/// meiosim: A Meiosis & Mutation Simulator
///
/// This tool simulates one round of sexual reproduction: four random parental
/// sequences recombine into two gametes, which fuse and mutate into a child.
#[derive(Parser, Debug)]
#[command(name = "meiosim")]
#[command(author, version, about = "Simulates crossover, gamete fusion and point mutation", long_about = None)]
struct Cli {
    /// Number of threads to use for replicate runs
    ///
    /// If not specified, defaults to the number of logical CPUs.
    #[arg(short = 't', long, global = true)]
    threads: Option<usize>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Write a mating configuration file.
    ///
    /// Records the pairing mode, sequence length, mutation rate and seed so
    /// the run can be reproduced later.
    Init(InitArgs),

    /// Simulate a mating and report gametes, crossovers and the child genome.
    Run(Box<RunArgs>),

    /// List the pairing modes and the roles each one assigns.
    Modes,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    if let Some(threads) = cli.threads {
        rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build_global()?;
    }

    match cli.command {
        Commands::Init(args) => {
            init::init_config(&args)?;
        }
        Commands::Run(args) => {
            run::run_mating(&args)?;
        }
        Commands::Modes => {
            modes::list_modes();
        }
    }

    Ok(())
}
