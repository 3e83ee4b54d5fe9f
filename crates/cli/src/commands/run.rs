use anyhow::{Context, Result};
use meiosim_sim::simulation::{mate_replicates, MatingConfig, MatingResult};
use serde_json::json;
use std::path::PathBuf;

use crate::args::RunArgs;
use crate::printing::{format_fasta, format_report};

pub fn run_mating(args: &RunArgs) -> Result<()> {
    // Everything that can fail on configuration is resolved before any
    // simulation output is produced.
    let config = resolve_config(args)?;
    let format = args.format.as_str();
    if !matches!(format, "text" | "json" | "fasta") {
        anyhow::bail!("Unknown output format '{format}'. Use: text, json, or fasta");
    }
    if args.replicates == 0 {
        anyhow::bail!("--replicates must be at least 1");
    }

    // A single run is replicate 1 of a batch, so `-r 1` and `-r N` agree on
    // the first result for the same seed.
    let results: Vec<MatingResult> = mate_replicates(&config, args.replicates)?;
    log::info!(
        "completed {} mating event(s) in {} mode",
        results.len(),
        config.pairing
    );

    let content = match format {
        "json" => {
            let doc = json!({ "config": config, "results": results });
            let mut text = serde_json::to_string_pretty(&doc)?;
            text.push('\n');
            text
        }
        "fasta" => format_fasta(&results),
        _ => format_report(&config, &results),
    };

    write_output(&content, args.output.as_ref())
}

/// Merge the optional config file with command-line overrides.
fn resolve_config(args: &RunArgs) -> Result<MatingConfig> {
    let mut config = match &args.config {
        Some(path) => MatingConfig::from_json_file(path)
            .with_context(|| format!("Failed to load configuration {}", path.display()))?,
        None => MatingConfig::default(),
    };

    if let Some(pairing) = &args.pairing {
        config.pairing = pairing.parse()?;
    }
    if let Some(length) = args.length {
        config.sequence_length = length;
    }
    if let Some(rate) = args.mutation_rate {
        config.mutation_rate = rate;
    }
    if args.seed.is_some() {
        config.seed = args.seed;
    }

    config.validate().context("Invalid mating configuration")?;
    Ok(config)
}

fn write_output(content: &str, output: Option<&PathBuf>) -> Result<()> {
    match output {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            eprintln!("✓ Results written to: {}", path.display());
        }
        None => print!("{content}"),
    }
    Ok(())
}
