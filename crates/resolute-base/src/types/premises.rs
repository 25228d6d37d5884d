//! Premise sets: CNF formulas as sets of clauses.

use super::clause::Clause;
use super::literal::Atom;
use indexmap::IndexSet;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// A set of clauses read as a conjunction.
///
/// Insertion order is preserved so that the initial pair queue, and with it
/// every run, is reproducible.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PremiseSet {
    clauses: IndexSet<Clause>,
}

impl PremiseSet {
    /// Creates an empty premise set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a clause. Returns `false` if it was already present.
    pub fn insert(&mut self, clause: Clause) -> bool {
        self.clauses.insert(clause)
    }

    /// Membership test.
    #[must_use]
    pub fn contains(&self, clause: &Clause) -> bool {
        self.clauses.contains(clause)
    }

    /// Number of clauses.
    #[must_use]
    pub fn len(&self) -> usize {
        self.clauses.len()
    }

    /// Whether the set has no clauses.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }

    /// Iterates clauses in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Clause> + '_ {
        self.clauses.iter()
    }

    /// Distinct atoms, sorted by name.
    #[must_use]
    pub fn atoms(&self) -> BTreeSet<Atom> {
        self.clauses
            .iter()
            .flat_map(|c| c.atoms().cloned())
            .collect()
    }

    /// Whether the empty clause is one of the premises.
    #[must_use]
    pub fn has_contradiction(&self) -> bool {
        self.clauses.iter().any(Clause::is_empty)
    }
}

impl FromIterator<Clause> for PremiseSet {
    fn from_iter<I: IntoIterator<Item = Clause>>(iter: I) -> Self {
        Self {
            clauses: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for PremiseSet {
    type Item = Clause;
    type IntoIter = indexmap::set::IntoIter<Clause>;

    fn into_iter(self) -> Self::IntoIter {
        self.clauses.into_iter()
    }
}

impl<'a> IntoIterator for &'a PremiseSet {
    type Item = &'a Clause;
    type IntoIter = indexmap::set::Iter<'a, Clause>;

    fn into_iter(self) -> Self::IntoIter {
        self.clauses.iter()
    }
}

impl Extend<Clause> for PremiseSet {
    fn extend<I: IntoIterator<Item = Clause>>(&mut self, iter: I) {
        self.clauses.extend(iter);
    }
}

/// Renders the infix form `p ∨ q ∧ ¬p`, which the text parser reads back.
/// The empty premise set renders as an empty string.
impl fmt::Display for PremiseSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, clause) in self.clauses.iter().enumerate() {
            if i > 0 {
                f.write_str(" ∧ ")?;
            }
            write!(f, "{clause}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Literal;

    #[test]
    fn test_duplicates_collapse() {
        let mut set = PremiseSet::new();
        assert!(set.insert(Clause::new([Literal::positive("p")])));
        assert!(!set.insert(Clause::new([Literal::positive("p")])));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_atoms_sorted() {
        let set: PremiseSet = [
            Clause::new([Literal::positive("q"), Literal::negative("p")]),
            Clause::new([Literal::positive("p")]),
        ]
        .into_iter()
        .collect();
        let names: Vec<_> = set.atoms().iter().map(|a| a.name().to_string()).collect();
        assert_eq!(names, vec!["p", "q"]);
    }

    #[test]
    fn test_display() {
        let set: PremiseSet = [
            Clause::new([Literal::positive("p"), Literal::positive("q")]),
            Clause::new([Literal::negative("p")]),
        ]
        .into_iter()
        .collect();
        assert_eq!(set.to_string(), "p ∨ q ∧ ¬p");
        assert!(!set.has_contradiction());
    }
}
