//! # resolute-base
//!
//! Core types and utilities for the Resolute resolution prover.
//!
//! This crate provides the foundational building blocks used across all other
//! Resolute crates, including:
//!
//! - **Type System**: atoms, literals, clauses and premise sets
//! - **Error Types**: Unified error handling across the prover
//! - **Utilities**: Seeded PRNG used by policies and generators

pub mod error;
pub mod types;
pub mod utils;

pub use error::{Error, Result};
pub use types::{Atom, Clause, Literal, PremiseSet};
pub use utils::XorShift64;
