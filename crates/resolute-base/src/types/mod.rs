//! Propositional data model.
//!
//! Hierarchy:
//! - `Atom` → opaque propositional variable name
//! - `Literal` → atom with a polarity
//! - `Clause` → set of literals read as a disjunction (empty = ⊥)
//! - `PremiseSet` → set of clauses read as a conjunction (CNF)

mod clause;
mod literal;
mod premises;

pub use clause::Clause;
pub use literal::{Atom, Literal};
pub use premises::PremiseSet;
