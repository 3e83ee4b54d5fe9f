use meiosim_sim::simulation::{GameteReport, MatingConfig, MatingResult};
use meiosim_sim::Sequence;

use crate::defaults::{FASTA_LINE_WIDTH, TRACK_WIDTH};

pub fn print_parameters(config: &MatingConfig) {
    print!("{}", format_parameters(config));
}

pub fn format_parameters(config: &MatingConfig) -> String {
    let seed = match config.seed {
        Some(seed) => seed.to_string(),
        None => "Random".to_string(),
    };
    [
        "📋 Mating Configuration".to_string(),
        format!("  • Pairing: {} [-p, --pairing]", config.pairing),
        format!(
            "  • Sequence Length: {} bp [-l, --length]",
            config.sequence_length
        ),
        format!(
            "  • Mutation Rate: {:.2e} /bp [-m, --mutation-rate]",
            config.mutation_rate
        ),
        format!("  • Random Seed: {seed} [--seed]"),
    ]
    .iter()
    .map(|line| format!("{line}\n"))
    .collect()
}

/// Human readable report for one or more mating results.
pub fn format_report(config: &MatingConfig, results: &[MatingResult]) -> String {
    let mut out = String::new();
    if let Some(first) = results.first() {
        out.push_str(&format!("🧬 {}\n\n", first.roles().banner));
    }
    out.push_str(&format_parameters(config));

    for (i, result) in results.iter().enumerate() {
        if results.len() > 1 {
            out.push_str(&format!("\n━━ Replicate {} ━━\n", i + 1));
        }
        out.push_str(&format_result(result));
    }
    out
}

fn format_result(result: &MatingResult) -> String {
    let mut out = String::new();
    let reports = result.gamete_reports();

    out.push('\n');
    for (i, report) in reports.iter().enumerate() {
        out.push_str(&format!(
            "Gamete {} ({}): {}\n",
            i + 1,
            report.label,
            report.result
        ));
    }

    out.push_str("\n🔀 Recombination\n");
    for report in &reports {
        out.push_str(&format_crossover(report));
    }

    out.push_str(&format!("\n👶 Child DNA: {}\n", result.child));
    out.push_str(&format!(
        "  • Length: {} bp, GC content: {:.1}%\n",
        result.child.len(),
        result.child.gc_content() * 100.0
    ));
    if result.mutations.is_empty() {
        out.push_str("⚡ Mutations: none\n");
    } else {
        let positions: Vec<String> = result.mutations.iter().map(|p| p.to_string()).collect();
        out.push_str(&format!(
            "⚡ Mutations: {} at positions {}\n",
            result.mutations.len(),
            positions.join(", ")
        ));
    }
    out
}

fn format_crossover(report: &GameteReport<'_>) -> String {
    let roles_line = format!(
        "  • {} recombination at index {}",
        report.label, report.crossover
    );
    format!(
        "{roles_line}\n    {}\n    ⟵ from parent 1 | from parent 2 ⟶\n",
        crossover_track(report.result.len(), report.crossover.get(), TRACK_WIDTH)
    )
}

/// Draw a fixed-width track of a sequence of `len` bases split at `index`:
/// `=` for bases taken from the first parent, `-` for the second and `|` at
/// the crossover.
pub fn crossover_track(len: usize, index: usize, width: usize) -> String {
    if len == 0 || width == 0 {
        return String::new();
    }
    let cols = width.min(len);
    // Column of the split, kept strictly inside the track so both sides show.
    let split = ((index * cols) as f64 / len as f64).round() as usize;
    let split = split.clamp(1, cols.saturating_sub(1).max(1));

    let mut track = String::with_capacity(cols + 1);
    track.push_str(&"=".repeat(split));
    track.push('|');
    track.push_str(&"-".repeat(cols.saturating_sub(split)));
    track
}

/// FASTA records for parents, gametes and child of every result.
pub fn format_fasta(results: &[MatingResult]) -> String {
    let mut out = String::new();
    for (i, result) in results.iter().enumerate() {
        let prefix = if results.len() > 1 {
            format!("rep{}_", i + 1)
        } else {
            String::new()
        };
        let roles = result.roles();

        for (label, parent) in roles.parents.iter().zip(result.parents.iter()) {
            push_record(&mut out, &format!("{prefix}{label}"), parent);
        }
        for (n, report) in result.gamete_reports().iter().enumerate() {
            let header = format!(
                "{prefix}gamete{} label={} crossover={}",
                n + 1,
                report.label.replace(' ', "_"),
                report.crossover
            );
            push_record(&mut out, &header, report.result);
        }
        let header = format!("{prefix}child mutations={}", result.mutations.len());
        push_record(&mut out, &header, &result.child);
    }
    out
}

fn push_record(out: &mut String, header: &str, seq: &Sequence) {
    out.push('>');
    out.push_str(header);
    out.push('\n');
    let text = seq.to_string();
    // Sequence text is pure ASCII, so byte chunks are valid UTF-8.
    for line in text.as_bytes().chunks(FASTA_LINE_WIDTH) {
        out.push_str(std::str::from_utf8(line).unwrap_or_default());
        out.push('\n');
    }
}
