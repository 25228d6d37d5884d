//! Policy comparison harness.
//!
//! Samples random problems, runs a baseline and a candidate policy on each,
//! and cross-checks every definite answer against the model checker.

use crate::generate::sample;
use crate::prover::ProverConfig;
use rayon::prelude::*;
use resolute_base::{PremiseSet, XorShift64};
use resolute_core::{is_satisfiable, run, Outcome, PolicyKind};
use serde::{Serialize, Serializer};
use std::time::{Duration, Instant};
use tracing::{info, warn};

fn as_secs<S: Serializer>(d: &Duration, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_f64(d.as_secs_f64())
}

/// One policy's run on one problem.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct RunRecord {
    pub outcome: Outcome,
    pub steps: usize,
    #[serde(serialize_with = "as_secs")]
    pub run_time: Duration,
}

/// Both runs on one sampled problem.
#[derive(Debug, Clone, Serialize)]
pub struct SampleRecord {
    pub index: usize,
    pub clauses: usize,
    /// Model checker verdict.
    pub satisfiable: bool,
    pub baseline: RunRecord,
    pub candidate: RunRecord,
}

impl SampleRecord {
    /// Both outcomes are definite and differ.
    pub fn disagrees(&self) -> bool {
        self.baseline.outcome.is_definite()
            && self.candidate.outcome.is_definite()
            && self.baseline.outcome != self.candidate.outcome
    }
}

/// Aggregate figures for one policy.
#[derive(Debug, Clone, Default, Serialize)]
pub struct PolicySummary {
    pub policy: String,
    pub proved: usize,
    pub disproved: usize,
    pub unknown: usize,
    /// Definite outcomes contradicting the model checker.
    pub wrong: usize,
    pub total_steps: usize,
    pub mean_steps: f64,
    #[serde(serialize_with = "as_secs")]
    pub total_time: Duration,
    #[serde(serialize_with = "as_secs")]
    pub mean_time: Duration,
}

impl PolicySummary {
    fn collect<'a>(
        policy: PolicyKind,
        records: impl Iterator<Item = (&'a RunRecord, bool)>,
    ) -> Self {
        let mut summary = Self {
            policy: policy.to_string(),
            ..Self::default()
        };
        let mut runs = 0u32;
        for (record, satisfiable) in records {
            runs += 1;
            match record.outcome {
                Outcome::Proved => summary.proved += 1,
                Outcome::Disproved => summary.disproved += 1,
                Outcome::Unknown => summary.unknown += 1,
            }
            if record.outcome.as_bool() == Some(satisfiable) {
                summary.wrong += 1;
            }
            summary.total_steps += record.steps;
            summary.total_time += record.run_time;
        }
        if runs > 0 {
            summary.mean_steps = summary.total_steps as f64 / f64::from(runs);
            summary.mean_time = summary.total_time / runs;
        }
        summary
    }
}

/// Result of comparing two policies.
#[derive(Debug, Clone, Serialize)]
pub struct EvaluationReport {
    pub num_atoms: usize,
    pub num_samples: usize,
    pub seed: u64,
    pub baseline: PolicySummary,
    pub candidate: PolicySummary,
    /// Samples where both policies were definite but disagreed.
    pub disagreements: usize,
    pub samples: Vec<SampleRecord>,
}

impl EvaluationReport {
    /// No disagreements and no answer contradicting the model checker.
    pub fn is_consistent(&self) -> bool {
        self.disagreements == 0 && self.baseline.wrong == 0 && self.candidate.wrong == 0
    }
}

fn run_one(
    premises: &PremiseSet,
    policy: PolicyKind,
    seed: u64,
    config: &ProverConfig,
) -> anyhow::Result<RunRecord> {
    let mut selector = policy.build(seed);
    let start = Instant::now();
    let result = run(premises, selector.as_mut(), &config.search)?;
    Ok(RunRecord {
        outcome: result.outcome,
        steps: result.stats.steps,
        run_time: start.elapsed(),
    })
}

/// Compares `candidate` against `baseline` on `num_samples` problems over
/// `num_atoms` atoms, sampled from `config.seed`.
///
/// Problems are drawn up front so the sample set only depends on the seed;
/// the runs themselves are spread over all cores. See [`evaluate_with`] for
/// timing-sensitive comparisons.
pub fn evaluate(
    num_atoms: usize,
    num_samples: usize,
    baseline: PolicyKind,
    candidate: PolicyKind,
    config: &ProverConfig,
) -> anyhow::Result<EvaluationReport> {
    evaluate_with(num_atoms, num_samples, baseline, candidate, config, 0)
}

/// [`evaluate`] on a pool of `workers` threads (0 = one per core).
///
/// Run times are wall-clock, so concurrent runs skew each other's timings
/// and can push searches near the timeout over it. `workers = 1` runs the
/// samples one after another.
pub fn evaluate_with(
    num_atoms: usize,
    num_samples: usize,
    baseline: PolicyKind,
    candidate: PolicyKind,
    config: &ProverConfig,
    workers: usize,
) -> anyhow::Result<EvaluationReport> {
    let mut rng = XorShift64::new(config.seed);
    let problems = (0..num_samples)
        .map(|_| sample(num_atoms, &mut rng))
        .collect::<Result<Vec<_>, _>>()?;

    info!(num_atoms, num_samples, workers, %baseline, %candidate, "evaluating policies");

    let pool = rayon::ThreadPoolBuilder::new().num_threads(workers).build()?;
    let samples = pool.install(|| {
        problems
            .par_iter()
            .enumerate()
            .map(|(index, premises)| -> anyhow::Result<SampleRecord> {
                let seed = config.seed.wrapping_add(index as u64);
                let record = SampleRecord {
                    index,
                    clauses: premises.len(),
                    satisfiable: is_satisfiable(premises),
                    baseline: run_one(premises, baseline, seed, config)?,
                    candidate: run_one(premises, candidate, seed, config)?,
                };
                if record.disagrees() {
                    warn!(
                        index,
                        baseline = %record.baseline.outcome,
                        candidate = %record.candidate.outcome,
                        "policies disagree"
                    );
                }
                Ok(record)
            })
            .collect::<anyhow::Result<Vec<_>>>()
    })?;

    let report = EvaluationReport {
        num_atoms,
        num_samples,
        seed: config.seed,
        baseline: PolicySummary::collect(
            baseline,
            samples.iter().map(|s| (&s.baseline, s.satisfiable)),
        ),
        candidate: PolicySummary::collect(
            candidate,
            samples.iter().map(|s| (&s.candidate, s.satisfiable)),
        ),
        disagreements: samples.iter().filter(|s| s.disagrees()).count(),
        samples,
    };

    if report.baseline.wrong + report.candidate.wrong > 0 {
        warn!(
            baseline = report.baseline.wrong,
            candidate = report.candidate.wrong,
            "outcomes contradict the model checker"
        );
    }
    info!(
        disagreements = report.disagreements,
        baseline_steps = report.baseline.total_steps,
        candidate_steps = report.candidate.total_steps,
        "evaluation finished"
    );
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_evaluate_small_problems() {
        let config = ProverConfig {
            seed: 42,
            ..ProverConfig::default()
        };
        let report = evaluate(2, 6, PolicyKind::Smallest, PolicyKind::Complementary, &config)
            .unwrap();

        assert_eq!(report.samples.len(), 6);
        assert!(report.is_consistent());
        let b = &report.baseline;
        assert_eq!(b.proved + b.disproved + b.unknown, 6);
        assert_eq!(b.policy, "smallest");
        assert_eq!(report.candidate.policy, "complementary");
        for s in &report.samples {
            assert_eq!(s.baseline.outcome.as_bool(), Some(!s.satisfiable));
        }
    }

    #[test]
    fn test_same_seed_same_problems() {
        let config = ProverConfig {
            seed: 5,
            ..ProverConfig::default()
        };
        let a = evaluate(1, 4, PolicyKind::First, PolicyKind::Random, &config).unwrap();
        let b = evaluate(1, 4, PolicyKind::First, PolicyKind::Random, &config).unwrap();
        let clauses = |r: &EvaluationReport| r.samples.iter().map(|s| s.clauses).collect::<Vec<_>>();
        assert_eq!(clauses(&a), clauses(&b));
        assert_eq!(a.baseline.total_steps, b.baseline.total_steps);
    }

    #[test]
    fn test_sequential_matches_parallel() {
        let config = ProverConfig {
            seed: 11,
            ..ProverConfig::default()
        };
        let parallel = evaluate(2, 5, PolicyKind::First, PolicyKind::Smallest, &config).unwrap();
        let sequential =
            evaluate_with(2, 5, PolicyKind::First, PolicyKind::Smallest, &config, 1).unwrap();

        let outcomes = |r: &EvaluationReport| {
            r.samples
                .iter()
                .map(|s| (s.index, s.baseline.outcome, s.candidate.outcome, s.candidate.steps))
                .collect::<Vec<_>>()
        };
        assert_eq!(outcomes(&parallel), outcomes(&sequential));
        assert_eq!(parallel.disagreements, sequential.disagreements);
    }

    #[test]
    fn test_report_serializes() {
        let report = evaluate(1, 2, PolicyKind::First, PolicyKind::Smallest, &ProverConfig::default())
            .unwrap();
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["num_atoms"], 1);
        assert!(json["baseline"]["mean_time"].is_f64());
        assert_eq!(json["samples"].as_array().map(Vec::len), Some(2));
    }

    #[test]
    fn test_disagreement_requires_definite_outcomes() {
        let finished = |outcome| RunRecord {
            outcome,
            steps: 0,
            run_time: Duration::ZERO,
        };
        let mut record = SampleRecord {
            index: 0,
            clauses: 0,
            satisfiable: true,
            baseline: finished(Outcome::Disproved),
            candidate: finished(Outcome::Unknown),
        };
        assert!(!record.disagrees());
        record.candidate = finished(Outcome::Proved);
        assert!(record.disagrees());
    }
}
