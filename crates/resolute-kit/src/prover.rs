//! High-level prover API.

use resolute_base::{Clause, Literal, PremiseSet, Result};
use resolute_core::{
    is_satisfiable, run, PolicyKind, SearchConfig, SearchResult, SelectionPolicy,
};

/// Prover configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProverConfig {
    /// Search limits.
    pub search: SearchConfig,
    /// Built-in policy used by [`Prover::prove`].
    pub policy: PolicyKind,
    /// Seed for randomized policies.
    pub seed: u64,
}

/// Collects premises and runs resolution on them.
#[derive(Debug, Clone, Default)]
pub struct Prover {
    premises: PremiseSet,
    config: ProverConfig,
}

impl Prover {
    /// Creates a new prover with default configuration.
    pub fn new() -> Self {
        Self::with_config(ProverConfig::default())
    }

    /// Creates a new prover with custom configuration.
    pub fn with_config(config: ProverConfig) -> Self {
        Self {
            premises: PremiseSet::new(),
            config,
        }
    }

    /// Creates a prover over existing premises.
    pub fn from_premises(premises: PremiseSet, config: ProverConfig) -> Self {
        Self { premises, config }
    }

    /// Adds a clause (disjunction of literals). Returns `false` if it was
    /// already present.
    pub fn add_clause(&mut self, literals: impl IntoIterator<Item = Literal>) -> bool {
        self.premises.insert(Clause::new(literals))
    }

    pub fn premises(&self) -> &PremiseSet {
        &self.premises
    }

    pub fn config(&self) -> &ProverConfig {
        &self.config
    }

    pub fn config_mut(&mut self) -> &mut ProverConfig {
        &mut self.config
    }

    /// Returns the number of premises.
    pub fn num_clauses(&self) -> usize {
        self.premises.len()
    }

    /// Returns the number of distinct atoms.
    pub fn num_atoms(&self) -> usize {
        self.premises.atoms().len()
    }

    /// Runs the configured built-in policy.
    pub fn prove(&self) -> Result<SearchResult> {
        let mut policy = self.config.policy.build(self.config.seed);
        self.prove_with(policy.as_mut())
    }

    /// Runs with a caller-supplied policy.
    pub fn prove_with<P: SelectionPolicy + ?Sized>(&self, policy: &mut P) -> Result<SearchResult> {
        run(&self.premises, policy, &self.config.search)
    }

    /// Decides satisfiability by enumerating assignments.
    pub fn check(&self) -> bool {
        is_satisfiable(&self.premises)
    }
}
