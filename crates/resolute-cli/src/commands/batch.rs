//! Batch command.

use crate::config::SearchArgs;
use clap::Args;
use rayon::prelude::*;
use resolute_format::load_problem;
use resolute_kit::{Prover, ProverConfig, RunReport};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

const PROBLEM_EXTENSIONS: [&str; 5] = ["txt", "prop", "cnf", "dimacs", "json"];

#[derive(Args, Debug)]
pub struct BatchArgs {
    /// Input directory containing problem files
    #[arg(long)]
    pub input_dir: PathBuf,

    /// Output directory for reports
    #[arg(long)]
    pub output_dir: PathBuf,

    /// Number of parallel workers (0 = auto)
    #[arg(long, default_value_t = 0)]
    pub workers: usize,

    /// Include refutations in the reports
    #[arg(long)]
    pub proof: bool,

    /// Cross-check every outcome with the model checker
    #[arg(long)]
    pub check: bool,

    #[command(flatten)]
    pub search: SearchArgs,
}

fn is_problem_file(path: &Path) -> bool {
    path.is_file()
        && path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| PROBLEM_EXTENSIONS.contains(&e))
}

/// Report stem for a problem file: its path below the input directory with
/// separators folded to `__`, extension kept. `sub/a.txt` becomes `sub__a.txt`.
fn report_stem(input_dir: &Path, path: &Path) -> String {
    let relative = path.strip_prefix(input_dir).unwrap_or(path);
    let parts: Vec<_> = relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect();
    parts.join("__")
}

pub fn run(args: BatchArgs) -> anyhow::Result<()> {
    tracing::info!("Starting batch processing from {:?}", args.input_dir);
    let config = args.search.prover_config()?;

    let mut jobs = Vec::new();
    let mut stems = HashSet::new();
    for entry in WalkDir::new(&args.input_dir).sort_by_file_name() {
        let entry = entry?;
        if !is_problem_file(entry.path()) {
            continue;
        }
        let stem = report_stem(&args.input_dir, entry.path());
        if !stems.insert(stem.clone()) {
            anyhow::bail!("{:?} would overwrite the report {}.json", entry.path(), stem);
        }
        jobs.push((entry.into_path(), stem));
    }
    tracing::info!("Found {} files to process", jobs.len());

    fs::create_dir_all(&args.output_dir)?;

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(args.workers)
        .build()?;

    let failures = pool.install(|| {
        jobs.par_iter()
            .filter(|(path, stem)| {
                let report_path = args.output_dir.join(format!("{stem}.json"));
                match process_file(path, stem, &report_path, &config, args.proof, args.check) {
                    Ok(()) => false,
                    Err(e) => {
                        tracing::error!("Failed to process {:?}: {:#}", path, e);
                        true
                    }
                }
            })
            .count()
    });

    tracing::info!("Batch processing complete");
    println!("c processed: {}, failed: {}", jobs.len() - failures, failures);
    if failures > 0 {
        anyhow::bail!("{} of {} problems failed", failures, jobs.len());
    }
    Ok(())
}

fn process_file(
    path: &Path,
    name: &str,
    report_path: &Path,
    config: &ProverConfig,
    proof: bool,
    check: bool,
) -> anyhow::Result<()> {
    tracing::info!("Processing {}", name);

    let premises = load_problem(path, None)?;
    let prover = Prover::from_premises(premises, config.clone());
    let result = prover.prove()?;

    let mut report =
        RunReport::new(prover.premises(), config.policy.as_str(), &result).with_name(name);
    if proof {
        report = report.with_proof(&result);
    }
    if check {
        report = report.with_check(prover.check());
        if !report.is_sound() {
            tracing::warn!("{}: {} contradicts the model checker", name, result.outcome);
        }
    }
    report.write_to(report_path)?;

    println!("{} {}", result.outcome, path.display());
    tracing::info!("Finished {} [{}] in {:?}", name, result.outcome, result.stats.elapsed);
    Ok(())
}
