//! The mating orchestrator.
//!
//! One mating event generates four parental sequences, recombines each pair
//! into a gamete, concatenates the gametes and mutates the result into the
//! child genome.

use crate::base::Sequence;
use crate::errors::MatingError;
use crate::evolution::{crossover_at, generate, CrossoverIndex, Gamete, PointMutation};
use crate::simulation::{MatingConfig, PairingMode, ParentRoles};
use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

/// Everything produced by one mating event.
///
/// A deserialized result is checked for internal consistency: each gamete
/// must be its parents spliced at the recorded crossover, and `mutations`
/// must list exactly the positions where the child differs from the zygote.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawMatingResult")]
pub struct MatingResult {
    pub pairing: PairingMode,
    /// Parental homologs; `[0]`/`[1]` form gamete 1, `[2]`/`[3]` gamete 2.
    pub parents: [Sequence; 4],
    pub gamete1: Gamete,
    pub gamete2: Gamete,
    pub child: Sequence,
    /// Child positions where a point mutation was applied, ascending.
    pub mutations: Vec<usize>,
}

#[derive(Deserialize)]
struct RawMatingResult {
    pairing: PairingMode,
    parents: [Sequence; 4],
    gamete1: Gamete,
    gamete2: Gamete,
    child: Sequence,
    mutations: Vec<usize>,
}

impl TryFrom<RawMatingResult> for MatingResult {
    type Error = String;

    fn try_from(raw: RawMatingResult) -> Result<Self, Self::Error> {
        let result = MatingResult {
            pairing: raw.pairing,
            parents: raw.parents,
            gamete1: raw.gamete1,
            gamete2: raw.gamete2,
            child: raw.child,
            mutations: raw.mutations,
        };

        for (n, report) in result.gamete_reports().iter().enumerate() {
            let expected = crossover_at(report.parent_a, report.parent_b, report.crossover.get())
                .map_err(|e| format!("gamete{}: {e}", n + 1))?;
            if &expected != report.result {
                return Err(format!(
                    "gamete{} does not match its parents spliced at {}",
                    n + 1,
                    report.crossover
                ));
            }
        }

        let zygote = result.zygote();
        if result.child.len() != zygote.len() {
            return Err(format!(
                "child has {} bases, expected {}",
                result.child.len(),
                zygote.len()
            ));
        }
        let diffs: Vec<usize> = (0..zygote.len())
            .filter(|&i| zygote.get(i) != result.child.get(i))
            .collect();
        if diffs != result.mutations {
            return Err("mutations do not match the child's differences from the zygote".into());
        }

        Ok(result)
    }
}

/// Data handed to a reporter for one gamete.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameteReport<'a> {
    pub parent_a: &'a Sequence,
    pub parent_b: &'a Sequence,
    pub result: &'a Sequence,
    pub crossover: CrossoverIndex,
    pub label: &'static str,
}

impl MatingResult {
    /// Role labels for this result's pairing mode.
    pub fn roles(&self) -> ParentRoles {
        self.pairing.roles()
    }

    /// The two gametes concatenated, before mutation.
    pub fn zygote(&self) -> Sequence {
        self.gamete1.sequence.concat(&self.gamete2.sequence)
    }

    /// Per-gamete report data, in gamete order.
    pub fn gamete_reports(&self) -> [GameteReport<'_>; 2] {
        let labels = self.roles().gametes;
        [
            GameteReport {
                parent_a: &self.parents[0],
                parent_b: &self.parents[1],
                result: &self.gamete1.sequence,
                crossover: self.gamete1.crossover,
                label: labels[0],
            },
            GameteReport {
                parent_a: &self.parents[2],
                parent_b: &self.parents[3],
                result: &self.gamete2.sequence,
                crossover: self.gamete2.crossover,
                label: labels[1],
            },
        ]
    }
}

/// Run one mating event with an explicit random source.
///
/// The mutation rate is validated before anything is generated, so an invalid
/// rate consumes no randomness.
pub fn mate_with_rng<R: Rng + ?Sized>(
    pairing: PairingMode,
    length: usize,
    rate: f64,
    rng: &mut R,
) -> Result<MatingResult, MatingError> {
    let mutation = PointMutation::new(rate)?;
    let roles = pairing.roles();
    log::info!("{} ({length} bp, mutation rate {rate})", roles.banner);

    let parents = [
        generate(length, rng)?,
        generate(length, rng)?,
        generate(length, rng)?,
        generate(length, rng)?,
    ];

    let gamete1 = Gamete::from_homologs(&parents[0], &parents[1], rng)?;
    let gamete2 = Gamete::from_homologs(&parents[2], &parents[3], rng)?;
    log::debug!(
        "{}: {} x {} crossover at {}",
        roles.gametes[0],
        roles.parents[0],
        roles.parents[1],
        gamete1.crossover
    );
    log::debug!(
        "{}: {} x {} crossover at {}",
        roles.gametes[1],
        roles.parents[2],
        roles.parents[3],
        gamete2.crossover
    );

    let zygote = gamete1.sequence.concat(&gamete2.sequence);
    let (child, mutations) = mutation.mutate_tracked(&zygote, rng);
    log::debug!("{} point mutations in child of {} bp", mutations.len(), child.len());

    Ok(MatingResult {
        pairing,
        parents,
        gamete1,
        gamete2,
        child,
        mutations,
    })
}

/// Run one mating event as described by `config`.
///
/// Uses `config.seed` when present, otherwise seeds from system entropy.
pub fn mate(config: &MatingConfig) -> Result<MatingResult, MatingError> {
    let mut rng = rng_from_seed(config.seed);
    mate_with_rng(
        config.pairing,
        config.sequence_length,
        config.mutation_rate,
        &mut rng,
    )
}

/// Run one mating event with the pairing mode given by name.
///
/// An unrecognized name fails with `UnknownPairingMode` before any sequence
/// is generated.
pub fn mate_named(
    pairing: &str,
    length: usize,
    rate: f64,
    seed: Option<u64>,
) -> Result<MatingResult, MatingError> {
    let pairing: PairingMode = pairing.parse()?;
    let mut rng = rng_from_seed(seed);
    mate_with_rng(pairing, length, rate, &mut rng)
}

/// Run `replicates` independent mating events in parallel.
///
/// Each event gets its own seed drawn up front from a master RNG seeded by
/// `config.seed`, so a seeded batch is reproducible regardless of how many
/// threads execute it.
pub fn mate_replicates(
    config: &MatingConfig,
    replicates: usize,
) -> Result<Vec<MatingResult>, MatingError> {
    let mut master = rng_from_seed(config.seed);
    let seeds: Vec<u64> = (0..replicates).map(|_| master.random()).collect();

    seeds
        .par_iter()
        .map(|&seed| {
            let mut local_rng = Xoshiro256PlusPlus::seed_from_u64(seed);
            mate_with_rng(
                config.pairing,
                config.sequence_length,
                config.mutation_rate,
                &mut local_rng,
            )
        })
        .collect()
}

fn rng_from_seed(seed: Option<u64>) -> Xoshiro256PlusPlus {
    match seed {
        Some(seed) => Xoshiro256PlusPlus::seed_from_u64(seed),
        None => Xoshiro256PlusPlus::from_seed(rand::rng().random()),
    }
}
