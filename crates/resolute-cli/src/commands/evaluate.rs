//! Evaluate command.

use crate::config::{parse_policy, SearchArgs};
use clap::Args;
use resolute_kit::{evaluate_with, PolicySummary};
use std::path::PathBuf;

#[derive(Args)]
pub struct EvaluateArgs {
    /// Number of atoms per sampled problem
    #[arg(short, long, default_value_t = 2)]
    pub atoms: usize,

    /// Number of sampled problems
    #[arg(short, long, default_value_t = 100)]
    pub samples: usize,

    /// Reference policy
    #[arg(long, default_value = "smallest")]
    pub baseline: String,

    /// Policy under test
    #[arg(long)]
    pub candidate: String,

    /// Number of parallel workers (0 = auto; 1 for stable timings)
    #[arg(long, default_value_t = 0)]
    pub workers: usize,

    /// Write the full JSON report to this file
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    #[command(flatten)]
    pub search: SearchArgs,
}

fn print_summary(role: &str, summary: &PolicySummary) {
    println!(
        "{:<10} {:<14} {:>7} {:>9} {:>7} {:>6} {:>11.1} {:>10.4}s",
        role,
        summary.policy,
        summary.proved,
        summary.disproved,
        summary.unknown,
        summary.wrong,
        summary.mean_steps,
        summary.mean_time.as_secs_f64()
    );
}

pub fn run(args: EvaluateArgs) -> anyhow::Result<()> {
    let baseline = parse_policy(&args.baseline)?;
    let candidate = parse_policy(&args.candidate)?;
    let config = args.search.prover_config()?;

    let report = evaluate_with(
        args.atoms,
        args.samples,
        baseline,
        candidate,
        &config,
        args.workers,
    )?;

    println!(
        "{:<10} {:<14} {:>7} {:>9} {:>7} {:>6} {:>11} {:>11}",
        "role", "policy", "proved", "disproved", "unknown", "wrong", "mean steps", "mean time"
    );
    print_summary("baseline", &report.baseline);
    print_summary("candidate", &report.candidate);
    println!("disagreements: {}", report.disagreements);

    if let Some(output) = &args.output {
        let file = std::fs::File::create(output)?;
        serde_json::to_writer_pretty(std::io::BufWriter::new(file), &report)?;
        tracing::info!("Report written to {:?}", output);
    }

    if !report.is_consistent() {
        anyhow::bail!("Evaluation found inconsistent outcomes");
    }
    Ok(())
}
