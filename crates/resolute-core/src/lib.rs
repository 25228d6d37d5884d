//! # resolute-core
//!
//! The propositional resolution engine.
//!
//! Implements:
//! - The binary resolution rule over clauses
//! - Immutable resolver states sharing structure through persistent collections
//! - A history arena linking every state to its parent
//! - The search loop driven by a pluggable pair selection policy
//! - Proof extraction and a brute-force model checker for cross-validation

pub mod history;
pub mod model;
pub mod policy;
pub mod proof;
pub mod resolution;
pub mod search;
pub mod state;

pub use history::{History, StateView};
pub use model::{find_model, is_satisfiable, Assignment};
pub use policy::{
    ComplementaryRank, FirstPair, PolicyKind, RandomPair, SelectionPolicy, SmallestPair,
};
pub use proof::{Proof, ProofStep};
pub use resolution::{resolve, Resolvents};
pub use search::{run, Outcome, SearchConfig, SearchResult, SearchStats, StopReason};
pub use state::{ClausePair, ResolverState, StateId, StepDelta};
