//! Integration tests for a full mating run.

use meiosim_sim::base::{Nucleotide, Sequence};
use meiosim_sim::errors::{MatingError, RecombinationError};
use meiosim_sim::evolution::{crossover_at, generate, mutate, recombine};
use meiosim_sim::simulation::{mate, mate_named, mate_replicates, MatingConfig, PairingMode};
use rand::SeedableRng;
use rand_xoshiro::Xoshiro256PlusPlus;
use std::str::FromStr;

fn is_dna(seq: &Sequence) -> bool {
    seq.iter().all(|n| Nucleotide::ALL.contains(&n))
}

#[test]
fn test_default_run_shapes() {
    let config = MatingConfig::default().with_seed(42);
    let result = mate(&config).unwrap();

    assert_eq!(result.gamete1.len(), 100);
    assert_eq!(result.gamete2.len(), 100);
    assert_eq!(result.child.len(), 200);
    assert!(is_dna(&result.child));
    assert!(result.parents.iter().all(is_dna));
}

#[test]
fn test_scenario_forced_crossover() {
    let a = Sequence::from_str("ATCG").unwrap();
    let b = Sequence::from_str("GCTA").unwrap();
    assert_eq!(crossover_at(&a, &b, 2).unwrap().to_string(), "ATTA");
}

#[test]
fn test_scenario_full_mutation() {
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(42);
    let mutated = mutate(&Sequence::from_str("AAAA").unwrap(), 1.0, &mut rng).unwrap();
    assert_eq!(mutated.len(), 4);
    assert!(!mutated.to_string().contains('A'));
}

#[test]
fn test_scenario_unknown_mode() {
    let result = mate_named("UnknownMode", 100, 0.01, None);
    assert!(matches!(result, Err(MatingError::UnknownPairingMode(_))));
}

#[test]
fn test_error_scenarios() {
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(1);
    let one_a = generate(1, &mut rng).unwrap();
    let one_b = generate(1, &mut rng).unwrap();
    assert_eq!(
        recombine(&one_a, &one_b, &mut rng),
        Err(RecombinationError::TooShort { length: 1 })
    );

    let three = generate(3, &mut rng).unwrap();
    let four = generate(4, &mut rng).unwrap();
    assert_eq!(
        recombine(&three, &four, &mut rng),
        Err(RecombinationError::LengthMismatch { len1: 3, len2: 4 })
    );
}

#[test]
fn test_every_mode_is_deterministic() {
    for mode in PairingMode::ALL {
        let config = MatingConfig::new(mode, 64, 0.02).with_seed(31337);
        let r1 = mate(&config).unwrap();
        let r2 = mate(&config).unwrap();
        assert_eq!(r1.gamete1, r2.gamete1);
        assert_eq!(r1.gamete2, r2.gamete2);
        assert_eq!(r1.child, r2.child);
    }
}

#[test]
fn test_child_halves_trace_back_to_gametes() {
    let config = MatingConfig::new(PairingMode::TwoFemales, 500, 0.01).with_seed(8);
    let result = mate(&config).unwrap();

    let zygote = result.zygote();
    assert_eq!(zygote.slice(0..500), result.gamete1.sequence);
    assert_eq!(zygote.slice(500..1000), result.gamete2.sequence);

    for &pos in &result.mutations {
        assert_ne!(result.child.get(pos), zygote.get(pos));
    }
    assert_eq!(
        result.child.hamming_distance(&zygote),
        result.mutations.len()
    );
}

#[test]
fn test_replicates_match_across_thread_pools() {
    let config = MatingConfig::new(PairingMode::MaleFemale, 50, 0.05).with_seed(5);

    let single = rayon::ThreadPoolBuilder::new()
        .num_threads(1)
        .build()
        .unwrap()
        .install(|| mate_replicates(&config, 6).unwrap());
    let multi = rayon::ThreadPoolBuilder::new()
        .num_threads(4)
        .build()
        .unwrap()
        .install(|| mate_replicates(&config, 6).unwrap());

    assert_eq!(single, multi);
}

#[test]
fn test_config_file_drives_run() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    std::fs::write(
        &path,
        r#"{ "pairing": "two_males", "sequence_length": 12, "mutation_rate": 0.0, "seed": 3 }"#,
    )
    .unwrap();

    let config = MatingConfig::from_json_file(&path).unwrap();
    config.validate().unwrap();
    let result = mate(&config).unwrap();
    assert_eq!(result.pairing, PairingMode::TwoMales);
    assert_eq!(result.child, result.zygote());
}
