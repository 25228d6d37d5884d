//! Search options shared by every subcommand that runs the prover.

use anyhow::Context;
use clap::Args;
use resolute_format::ProblemFormat;
use resolute_kit::{PolicyKind, ProverConfig, SearchConfig};
use std::time::Duration;

#[derive(Args, Debug, Clone)]
pub struct SearchArgs {
    /// Timeout in seconds per search
    #[arg(short, long, default_value_t = 60.0)]
    pub timeout: f64,

    /// Stop after this many resolution steps
    #[arg(long)]
    pub max_steps: Option<usize>,

    /// Pair selection policy
    #[arg(short, long, default_value = "first",
          value_parser = ["first", "smallest", "complementary", "random"])]
    pub policy: String,

    /// Seed for the random policy and the problem sampler
    #[arg(long, default_value_t = 0)]
    pub seed: u64,
}

impl SearchArgs {
    pub fn prover_config(&self) -> anyhow::Result<ProverConfig> {
        let timeout = Duration::try_from_secs_f64(self.timeout)
            .with_context(|| format!("Invalid timeout {}", self.timeout))?;
        Ok(ProverConfig {
            search: SearchConfig {
                timeout,
                max_steps: self.max_steps,
            },
            policy: self.policy_kind()?,
            seed: self.seed,
        })
    }

    pub fn policy_kind(&self) -> anyhow::Result<PolicyKind> {
        parse_policy(&self.policy)
    }
}

pub fn parse_policy(name: &str) -> anyhow::Result<PolicyKind> {
    name.parse::<PolicyKind>()
        .with_context(|| format!("Invalid policy '{name}'"))
}

/// Resolves an optional `--format` value.
pub fn parse_format(name: Option<&str>) -> anyhow::Result<Option<ProblemFormat>> {
    name.map(|n| n.parse::<ProblemFormat>())
        .transpose()
        .context("Invalid problem format")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(timeout: f64, policy: &str) -> SearchArgs {
        SearchArgs {
            timeout,
            max_steps: Some(10),
            policy: policy.to_string(),
            seed: 3,
        }
    }

    #[test]
    fn test_prover_config() {
        let config = args(1.5, "smallest").prover_config().unwrap();
        assert_eq!(config.search.timeout, Duration::from_millis(1500));
        assert_eq!(config.search.max_steps, Some(10));
        assert_eq!(config.policy, PolicyKind::Smallest);
        assert_eq!(config.seed, 3);
    }

    #[test]
    fn test_rejects_bad_values() {
        assert!(args(-1.0, "first").prover_config().is_err());
        assert!(args(f64::NAN, "first").prover_config().is_err());
        assert!(args(1.0, "greedy").prover_config().is_err());
    }

    #[test]
    fn test_parse_format() {
        assert_eq!(parse_format(None).unwrap(), None);
        assert_eq!(parse_format(Some("cnf")).unwrap(), Some(ProblemFormat::Dimacs));
        assert!(parse_format(Some("xml")).is_err());
    }
}
