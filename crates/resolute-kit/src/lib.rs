//! # resolute-kit
//!
//! The high-level API for Resolute.
//!
//! This crate provides:
//! - Collecting premises and proving them with a configured policy
//! - Generating problems exhaustively or by sampling
//! - Comparing selection policies against the model checker
//! - JSON run reports
//!
//! # Example
//!
//! ```
//! use resolute_kit::*;
//!
//! let mut prover = Prover::new();
//! prover.add_clause([Literal::negative("p"), Literal::positive("q")]);
//! prover.add_clause([Literal::positive("p")]);
//! prover.add_clause([Literal::negative("q")]);
//!
//! let result = prover.prove().unwrap();
//! match result.outcome {
//!     Outcome::Proved => println!("{}", result.proof().unwrap()),
//!     Outcome::Disproved => println!("Satisfiable"),
//!     Outcome::Unknown => println!("Timeout"),
//! }
//! ```

pub mod evaluate;
pub mod generate;
pub mod prover;
pub mod report;

// Re-export core types
pub use resolute_base::{Atom, Clause, Error, Literal, PremiseSet, Result, XorShift64};
pub use resolute_core::{
    Outcome, PolicyKind, Proof, SearchConfig, SearchResult, SearchStats, SelectionPolicy,
    StateView, StopReason,
};

pub use evaluate::{evaluate, evaluate_with, EvaluationReport, PolicySummary};
pub use generate::{clause_universe, literal_universe, sample, CnfEnumerator};
pub use prover::{Prover, ProverConfig};
pub use report::RunReport;
