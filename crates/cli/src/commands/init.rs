use anyhow::{Context, Result};
use meiosim_sim::simulation::{MatingConfig, PairingMode};

use crate::args::InitArgs;
use crate::printing::print_parameters;

pub fn init_config(args: &InitArgs) -> Result<()> {
    let pairing: PairingMode = args.pairing.parse()?;

    let mut config = MatingConfig::new(pairing, args.length, args.mutation_rate);
    config.seed = args.seed;
    config.validate().context("Invalid mating configuration")?;

    println!("🧬 meiosim - Meiosis & Mutation Simulator");
    println!("=========================================\n");
    print_parameters(&config);

    config
        .to_json_file(&args.output)
        .with_context(|| format!("Failed to write {}", args.output.display()))?;
    log::info!("wrote configuration to {}", args.output.display());

    println!("\n✓ Configuration written: {}", args.output.display());
    println!("\nMating configuration initialized successfully!");
    println!(
        "\n💡 Use 'meiosim run --config {}' to simulate the mating",
        args.output.display()
    );

    Ok(())
}
