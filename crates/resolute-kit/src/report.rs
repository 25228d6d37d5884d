//! JSON run reports.

use resolute_base::PremiseSet;
use resolute_core::{Outcome, SearchResult, SearchStats, StopReason};
use serde::Serialize;
use std::path::Path;

/// Summary of one search, as written by `resolute solve --output` and
/// `resolute batch`.
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub policy: String,
    /// Premises in text syntax.
    pub premises: Vec<String>,
    pub outcome: Outcome,
    pub reason: StopReason,
    pub stats: SearchStats,
    /// Clauses known when the search stopped.
    pub clauses: usize,
    /// Model checker verdict, when requested.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub satisfiable: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub proof: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pair_history: Option<Vec<String>>,
}

impl RunReport {
    /// Builds the basic report; proof, history and model check are opt-in.
    pub fn new(premises: &PremiseSet, policy: &str, result: &SearchResult) -> Self {
        Self {
            name: None,
            policy: policy.to_string(),
            premises: premises.iter().map(ToString::to_string).collect(),
            outcome: result.outcome,
            reason: result.reason,
            stats: result.stats.clone(),
            clauses: result.final_state().clauses().len(),
            satisfiable: None,
            proof: None,
            pair_history: None,
        }
    }

    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Attaches the refutation, if the search found one.
    #[must_use]
    pub fn with_proof(mut self, result: &SearchResult) -> Self {
        self.proof = result.proof().map(|p| p.lines());
        self
    }

    /// Attaches the consumed pairs in chronological order.
    #[must_use]
    pub fn with_pair_history(mut self, result: &SearchResult) -> Self {
        self.pair_history = Some(
            result
                .history
                .pair_history()
                .iter()
                .map(ToString::to_string)
                .collect(),
        );
        self
    }

    #[must_use]
    pub fn with_check(mut self, satisfiable: bool) -> Self {
        self.satisfiable = Some(satisfiable);
        self
    }

    /// Whether the model checker verdict, if any, matches the outcome.
    pub fn is_sound(&self) -> bool {
        match (self.outcome.as_bool(), self.satisfiable) {
            (Some(proved), Some(satisfiable)) => proved != satisfiable,
            _ => true,
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Writes the report as pretty JSON.
    pub fn write_to(&self, path: &Path) -> anyhow::Result<()> {
        let file = std::fs::File::create(path)?;
        serde_json::to_writer_pretty(std::io::BufWriter::new(file), self)?;
        Ok(())
    }
}
