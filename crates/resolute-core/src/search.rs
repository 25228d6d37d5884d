//! The resolution search loop.

use crate::history::{History, StateView};
use crate::policy::SelectionPolicy;
use crate::proof::Proof;
use resolute_base::{PremiseSet, Result};
use serde::ser::SerializeStruct;
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;
use std::time::{Duration, Instant};
use tracing::{info, trace};

/// Limits for a single search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    /// Wall-clock budget, sampled once per iteration.
    pub timeout: Duration,
    /// Optional cap on resolution steps.
    pub max_steps: Option<usize>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(60),
            max_steps: None,
        }
    }
}

impl SearchConfig {
    #[must_use]
    pub fn with_timeout(timeout: Duration) -> Self {
        Self {
            timeout,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn max_steps(mut self, steps: usize) -> Self {
        self.max_steps = Some(steps);
        self
    }
}

/// Verdict of a search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    /// The empty clause was derived: the premises are unsatisfiable.
    Proved,
    /// No pairs remain: the premises are satisfiable.
    Disproved,
    /// A limit was hit first.
    Unknown,
}

impl Outcome {
    /// `Some(true)` when proved, `Some(false)` when disproved.
    #[must_use]
    pub const fn as_bool(self) -> Option<bool> {
        match self {
            Self::Proved => Some(true),
            Self::Disproved => Some(false),
            Self::Unknown => None,
        }
    }

    /// Whether the outcome is definite.
    #[must_use]
    pub const fn is_definite(self) -> bool {
        !matches!(self, Self::Unknown)
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Proved => "PROVED",
            Self::Disproved => "DISPROVED",
            Self::Unknown => "UNKNOWN",
        })
    }
}

/// Why the search stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StopReason {
    Contradiction,
    Exhausted,
    Timeout,
    StepLimit,
}

impl StopReason {
    #[must_use]
    pub const fn outcome(self) -> Outcome {
        match self {
            Self::Contradiction => Outcome::Proved,
            Self::Exhausted => Outcome::Disproved,
            Self::Timeout | Self::StepLimit => Outcome::Unknown,
        }
    }
}

impl fmt::Display for StopReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Contradiction => "contradiction",
            Self::Exhausted => "exhausted",
            Self::Timeout => "timeout",
            Self::StepLimit => "step limit",
        })
    }
}

/// Counters collected while searching.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchStats {
    pub steps: usize,
    /// Resolvents produced, duplicates included.
    pub resolvents: usize,
    pub new_clauses: usize,
    pub rediscoveries: usize,
    /// Longest pair queue observed.
    pub peak_pairs: usize,
    /// Time spent inside the selection policy.
    pub policy_time: Duration,
    pub elapsed: Duration,
}

impl Serialize for SearchStats {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut s = serializer.serialize_struct("SearchStats", 7)?;
        s.serialize_field("steps", &self.steps)?;
        s.serialize_field("resolvents", &self.resolvents)?;
        s.serialize_field("new_clauses", &self.new_clauses)?;
        s.serialize_field("rediscoveries", &self.rediscoveries)?;
        s.serialize_field("peak_pairs", &self.peak_pairs)?;
        s.serialize_field("policy_time", &self.policy_time.as_secs_f64())?;
        s.serialize_field("elapsed", &self.elapsed.as_secs_f64())?;
        s.end()
    }
}

/// Everything a finished search produced.
#[derive(Debug, Clone)]
pub struct SearchResult {
    pub outcome: Outcome,
    pub reason: StopReason,
    pub history: History,
    pub stats: SearchStats,
}

impl SearchResult {
    /// The state the search stopped in.
    #[must_use]
    pub fn final_state(&self) -> StateView<'_> {
        self.history.current()
    }

    /// Derivation of the empty clause, when one was found.
    #[must_use]
    pub fn proof(&self) -> Option<Proof> {
        Proof::extract(self.history.current_state())
    }
}

/// Runs resolution on `premises`, letting `policy` pick every pair.
///
/// Each iteration checks, in order: the timeout, the empty clause, an empty
/// pair queue, and the step limit. Only when none applies is the policy
/// consulted. A policy returning an out-of-range index aborts the run with
/// [`resolute_base::Error::SelectionOutOfRange`].
pub fn run<P: SelectionPolicy + ?Sized>(
    premises: &PremiseSet,
    policy: &mut P,
    config: &SearchConfig,
) -> Result<SearchResult> {
    let start = Instant::now();
    let mut history = History::new(premises);
    let mut stats = SearchStats {
        peak_pairs: history.current_state().pairs().len(),
        ..SearchStats::default()
    };

    info!(
        premises = premises.len(),
        policy = policy.name(),
        timeout = ?config.timeout,
        "starting resolution"
    );

    let reason = loop {
        let state = history.current_state();
        if start.elapsed() > config.timeout {
            break StopReason::Timeout;
        }
        if state.has_contradiction() {
            break StopReason::Contradiction;
        }
        if state.pairs().is_empty() {
            break StopReason::Exhausted;
        }
        if config.max_steps.is_some_and(|max| state.step_count() >= max) {
            break StopReason::StepLimit;
        }

        let picked = Instant::now();
        let index = policy.select(&history.current());
        stats.policy_time += picked.elapsed();

        history.step(index)?;
        let state = history.current_state();
        let delta = state.last_step();
        stats.steps += 1;
        stats.resolvents += delta.resolvents;
        stats.new_clauses += delta.new_clauses;
        stats.rediscoveries += delta.rediscovered;
        stats.peak_pairs = stats.peak_pairs.max(state.pairs().len());
        trace!(
            step = state.step_count(),
            index,
            clauses = state.clauses().len(),
            pairs = state.pairs().len(),
            "resolved pair"
        );
    };

    stats.elapsed = start.elapsed();
    let outcome = reason.outcome();
    info!(
        %outcome,
        %reason,
        steps = stats.steps,
        clauses = history.current_state().clauses().len(),
        elapsed = ?stats.elapsed,
        "resolution finished"
    );

    Ok(SearchResult {
        outcome,
        reason,
        history,
        stats,
    })
}
