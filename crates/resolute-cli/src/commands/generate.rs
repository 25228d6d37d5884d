//! Generate command.

use crate::config::parse_format;
use clap::{ArgGroup, Args};
use resolute_format::{render_problem, ProblemFormat};
use resolute_kit::{sample, CnfEnumerator, PremiseSet, XorShift64};
use std::fs;
use std::path::PathBuf;

#[derive(Args)]
#[command(group(ArgGroup::new("mode").required(true).args(["sample", "exhaust"])))]
pub struct GenerateArgs {
    /// Number of atoms (p0, p1, ...)
    #[arg(short, long)]
    pub atoms: usize,

    /// Draw random problems
    #[arg(long)]
    pub sample: bool,

    /// Enumerate every problem in order
    #[arg(long)]
    pub exhaust: bool,

    /// Number of sampled problems
    #[arg(short, long, default_value_t = 1)]
    pub count: usize,

    /// Stop enumerating after this many problems
    #[arg(short, long)]
    pub limit: Option<usize>,

    /// Sampler seed
    #[arg(long, default_value_t = 0)]
    pub seed: u64,

    /// Output format
    #[arg(short, long, default_value = "text", value_parser = ["text", "dimacs", "cnf", "json"])]
    pub format: String,

    /// Write one file per problem into this directory instead of stdout
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,
}

pub fn run(args: GenerateArgs) -> anyhow::Result<()> {
    let format = parse_format(Some(args.format.as_str()))?.unwrap_or(ProblemFormat::Text);

    let problems: Box<dyn Iterator<Item = anyhow::Result<PremiseSet>>> = if args.exhaust {
        let cnfs = CnfEnumerator::new(args.atoms)?;
        let universe = cnfs.universe_len();
        match cnfs.total() {
            Some(total) => tracing::info!("Enumerating {} problems over {} clauses", total, universe),
            None => tracing::info!("Enumerating problems over {} clauses", universe),
        }
        if args.limit.is_none() && cnfs.total().map_or(true, |t| t > 1 << 20) {
            anyhow::bail!("Enumeration over {} atoms is too large without --limit", args.atoms);
        }
        Box::new(cnfs.take(args.limit.unwrap_or(usize::MAX)).map(Ok))
    } else {
        let mut rng = XorShift64::new(args.seed);
        let atoms = args.atoms;
        Box::new((0..args.count).map(move |_| Ok(sample(atoms, &mut rng)?)))
    };

    if let Some(dir) = &args.output_dir {
        fs::create_dir_all(dir)?;
    }

    let mut written = 0usize;
    for (i, premises) in problems.enumerate() {
        let rendered = render_problem(&premises?, format)?;
        match &args.output_dir {
            Some(dir) => {
                let path = dir.join(format!("problem_{i:05}.{}", format.extension()));
                fs::write(&path, rendered)?;
            }
            None => print!("{rendered}"),
        }
        written += 1;
    }

    tracing::info!("Generated {} problems", written);
    Ok(())
}
