//! Resolute CLI - Command-line interface for the resolution prover.

mod commands;
mod config;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "resolute")]
#[command(author, version, about = "Propositional Resolution Prover", long_about = None)]
struct Cli {
    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Decide whether a clause set is refutable
    Solve(commands::solve::SolveArgs),
    /// Generate problems by sampling or enumeration
    Generate(commands::generate::GenerateArgs),
    /// Compare two selection policies on sampled problems
    Evaluate(commands::evaluate::EvaluateArgs),
    /// Solve every problem file in a directory
    Batch(commands::batch::BatchArgs),
    /// Convert between file formats
    Convert(commands::convert::ConvertArgs),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let filter = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Solve(args) => commands::solve::run(args),
        Commands::Generate(args) => commands::generate::run(args),
        Commands::Evaluate(args) => commands::evaluate::run(args),
        Commands::Batch(args) => commands::batch::run(args),
        Commands::Convert(args) => commands::convert::run(args),
    }
}
