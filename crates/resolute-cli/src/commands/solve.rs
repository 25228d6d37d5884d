//! Solve command.

use crate::config::{parse_format, SearchArgs};
use clap::Args;
use resolute_format::{load_problem, parse_cnf};
use resolute_kit::{Outcome, Prover, RunReport};
use std::path::PathBuf;

#[derive(Args)]
pub struct SolveArgs {
    /// Input file path
    #[arg(required_unless_present = "cnf", conflicts_with = "cnf")]
    pub input: Option<PathBuf>,

    /// Problem given inline in text syntax, e.g. "¬p ∨ q ∧ p ∧ ¬q"
    #[arg(long)]
    pub cnf: Option<String>,

    /// Input format (auto-detect from extension if not specified)
    #[arg(short, long, value_parser = ["text", "dimacs", "cnf", "json"])]
    pub format: Option<String>,

    /// Write a JSON report to this file
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Print the refutation when one is found
    #[arg(long)]
    pub proof: bool,

    /// Print the consumed pairs in order
    #[arg(long)]
    pub history: bool,

    /// Cross-check the outcome with the model checker
    #[arg(long)]
    pub check: bool,

    #[command(flatten)]
    pub search: SearchArgs,
}

pub fn run(args: SolveArgs) -> anyhow::Result<()> {
    let premises = match (&args.input, &args.cnf) {
        (_, Some(text)) => parse_cnf(text)?,
        (Some(path), None) => {
            tracing::info!("Loading problem from {:?}", path);
            load_problem(path, parse_format(args.format.as_deref())?)?
        }
        (None, None) => anyhow::bail!("No problem given"),
    };

    let config = args.search.prover_config()?;
    let policy = config.policy;
    let prover = Prover::from_premises(premises, config);
    tracing::info!(
        "Problem: {} atoms, {} clauses",
        prover.num_atoms(),
        prover.num_clauses()
    );

    let result = prover.prove()?;

    println!("s {}", result.outcome);
    println!("c reason: {}", result.reason);
    println!(
        "c steps: {}, clauses: {}, pending pairs: {}",
        result.stats.steps,
        result.final_state().clauses().len(),
        result.final_state().pairs().len()
    );
    println!("c time: {:.3}s", result.stats.elapsed.as_secs_f64());

    if args.proof {
        match result.proof() {
            Some(proof) => print!("{proof}"),
            None => println!("c no proof"),
        }
    }
    if args.history {
        for (i, pair) in result.history.pair_history().iter().enumerate() {
            println!("{}. {}", i + 1, pair);
        }
    }

    let mut report = RunReport::new(prover.premises(), policy.as_str(), &result);
    if let Some(name) = args.input.as_ref().and_then(|p| p.file_stem()) {
        report = report.with_name(name.to_string_lossy());
    }
    if args.proof {
        report = report.with_proof(&result);
    }
    if args.history {
        report = report.with_pair_history(&result);
    }
    if args.check {
        let satisfiable = prover.check();
        report = report.with_check(satisfiable);
        println!("c model check: {}", if satisfiable { "satisfiable" } else { "unsatisfiable" });
        if !report.is_sound() {
            tracing::error!("Outcome {} contradicts the model checker", result.outcome);
        }
    }

    if let Some(output) = &args.output {
        report.write_to(output)?;
        tracing::info!("Report written to {:?}", output);
    }

    if args.check && !report.is_sound() {
        anyhow::bail!("{} contradicts the model checker", result.outcome);
    }
    if result.outcome == Outcome::Unknown {
        tracing::warn!("Search stopped without a verdict ({})", result.reason);
    }
    Ok(())
}
