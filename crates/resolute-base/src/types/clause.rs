//! Clauses: disjunctions of literals with set semantics.

use super::literal::{Atom, Literal};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::sync::Arc;

/// An immutable, duplicate-free disjunction of literals.
///
/// Equality and hashing are structural, so two derivations producing the
/// same literal set yield the same clause. The literal set is shared behind
/// an `Arc`; cloning a clause never copies literals.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Clause(Arc<BTreeSet<Literal>>);

impl Clause {
    /// Creates a clause from literals. Duplicates collapse.
    pub fn new(literals: impl IntoIterator<Item = Literal>) -> Self {
        Self(Arc::new(literals.into_iter().collect()))
    }

    /// The empty clause (⊥).
    #[must_use]
    pub fn empty() -> Self {
        Self(Arc::default())
    }

    /// Whether this is the empty clause.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of literals.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Membership test.
    #[must_use]
    pub fn contains(&self, literal: &Literal) -> bool {
        self.0.contains(literal)
    }

    /// Iterates the literals in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = &Literal> + '_ {
        self.0.iter()
    }

    /// Borrows the underlying literal set.
    #[must_use]
    pub fn literals(&self) -> &BTreeSet<Literal> {
        &self.0
    }

    /// Set union.
    #[must_use]
    pub fn union(&self, other: &Clause) -> Clause {
        Self::new(self.0.union(&other.0).cloned())
    }

    /// Set difference.
    #[must_use]
    pub fn difference(&self, other: &Clause) -> Clause {
        Self::new(self.0.difference(&other.0).cloned())
    }

    /// This clause with `literal` removed.
    #[must_use]
    pub fn without(&self, literal: &Literal) -> Clause {
        Self::new(self.0.iter().filter(|l| *l != literal).cloned())
    }

    /// Whether the clause contains some literal together with its negation.
    #[must_use]
    pub fn is_tautology(&self) -> bool {
        self.0.iter().any(|l| !l.negated && self.0.contains(&l.negate()))
    }

    /// Atoms occurring in the clause.
    pub fn atoms(&self) -> impl Iterator<Item = &Atom> + '_ {
        self.0.iter().map(|l| &l.atom)
    }

    /// Number of literals that have a complement in `other`.
    #[must_use]
    pub fn complementary_count(&self, other: &Clause) -> usize {
        self.0.iter().filter(|l| other.contains(&l.negate())).count()
    }
}

impl Default for Clause {
    fn default() -> Self {
        Self::empty()
    }
}

impl FromIterator<Literal> for Clause {
    fn from_iter<I: IntoIterator<Item = Literal>>(iter: I) -> Self {
        Self::new(iter)
    }
}

impl<'a> IntoIterator for &'a Clause {
    type Item = &'a Literal;
    type IntoIter = std::collections::btree_set::Iter<'a, Literal>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl From<Literal> for Clause {
    fn from(literal: Literal) -> Self {
        Self::new([literal])
    }
}

impl fmt::Display for Clause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("⊥");
        }
        for (i, lit) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" ∨ ")?;
            }
            write!(f, "{lit}")?;
        }
        Ok(())
    }
}
