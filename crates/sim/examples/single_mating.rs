use meiosim_sim::prelude::*;
use std::str::FromStr;

fn main() {
    let a = Sequence::from_str("ATCG").unwrap();
    let b = Sequence::from_str("GCTA").unwrap();
    let hybrid = crossover_at(&a, &b, 2).unwrap();
    println!("{a} x {b} at 2 -> {hybrid}");

    let config = MatingConfig::new(PairingMode::MaleFemale, 30, 0.05).with_seed(42);
    let result = mate(&config).unwrap();

    println!("{}", result.roles().banner);
    for report in result.gamete_reports() {
        println!(
            "{:>6} (crossover {:>2}): {}",
            report.label, report.crossover, report.result
        );
    }
    println!(" Child: {}", result.child);
    println!("{} mutation(s) at {:?}", result.mutations.len(), result.mutations);
}
