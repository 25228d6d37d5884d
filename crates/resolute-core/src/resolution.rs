//! Propositional binary resolution.

use resolute_base::{Clause, Literal};
use std::collections::btree_set;

/// Lazy sequence of the resolvents of two clauses.
///
/// Yields one clause per literal of the smaller parent whose complement
/// occurs in the other parent. The same clause may be yielded more than once.
pub struct Resolvents<'a> {
    small: &'a Clause,
    large: &'a Clause,
    literals: btree_set::Iter<'a, Literal>,
}

impl Iterator for Resolvents<'_> {
    type Item = Clause;

    fn next(&mut self) -> Option<Clause> {
        for p in self.literals.by_ref() {
            let complement = p.negate();
            if self.large.contains(&complement) {
                return Some(Clause::new(
                    self.small
                        .iter()
                        .filter(|l| *l != p)
                        .chain(self.large.iter().filter(|l| **l != complement))
                        .cloned(),
                ));
            }
        }
        None
    }
}

/// Resolves `left` against `right`.
///
/// The literals of the smaller clause drive the iteration (`left` on a tie).
/// Resolving `{p}` with `{¬p}` yields the empty clause; clauses without a
/// complementary pair yield nothing.
pub fn resolve<'a>(left: &'a Clause, right: &'a Clause) -> Resolvents<'a> {
    let (small, large) = if left.len() > right.len() {
        (right, left)
    } else {
        (left, right)
    };
    Resolvents {
        small,
        large,
        literals: small.literals().iter(),
    }
}
