//! Convert command.

use crate::config::parse_format;
use clap::Args;
use resolute_format::{load_problem, render_problem, ProblemFormat};
use std::fs;
use std::path::PathBuf;

#[derive(Args)]
pub struct ConvertArgs {
    /// Input file path
    #[arg(required = true)]
    pub input: PathBuf,

    /// Output file path
    #[arg(required = true)]
    pub output: PathBuf,

    /// Input format
    #[arg(short = 'f', long, value_parser = ["text", "dimacs", "cnf", "json"])]
    pub from: Option<String>,

    /// Output format
    #[arg(short = 't', long, value_parser = ["text", "dimacs", "cnf", "json"])]
    pub to: Option<String>,
}

pub fn run(args: ConvertArgs) -> anyhow::Result<()> {
    let premises = load_problem(&args.input, parse_format(args.from.as_deref())?)?;
    let output_format = parse_format(args.to.as_deref())?
        .unwrap_or_else(|| ProblemFormat::from_path(&args.output));

    fs::write(&args.output, render_problem(&premises, output_format)?)?;

    println!(
        "Converted {} -> {} ({} clauses, {})",
        args.input.display(),
        args.output.display(),
        premises.len(),
        output_format
    );
    Ok(())
}
