//! Brute-force model checking.
//!
//! Enumerates every truth assignment over the atoms of a clause set. This is
//! exponential in the number of atoms and exists to cross-check the prover
//! on small instances; the search never calls it.

use resolute_base::{Atom, Clause};
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

/// A truth assignment over a set of atoms.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Assignment(BTreeMap<Atom, bool>);

impl Assignment {
    /// Value of `atom`, if assigned.
    #[must_use]
    pub fn get(&self, atom: &Atom) -> Option<bool> {
        self.0.get(atom).copied()
    }

    /// Whether some literal of `clause` is true. Unassigned atoms make
    /// their literals false.
    #[must_use]
    pub fn satisfies(&self, clause: &Clause) -> bool {
        clause
            .iter()
            .any(|l| self.get(&l.atom).is_some_and(|v| l.evaluate(v)))
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Atom, bool)> + '_ {
        self.0.iter().map(|(a, v)| (a, *v))
    }
}

impl fmt::Display for Assignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (atom, value)) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{atom} = {}", u8::from(*value))?;
        }
        Ok(())
    }
}

/// Finds a satisfying assignment, trying all-true first and ending with
/// all-false.
pub fn find_model<'a, I>(clauses: I) -> Option<Assignment>
where
    I: IntoIterator<Item = &'a Clause>,
{
    let clauses: Vec<&Clause> = clauses.into_iter().collect();
    let mut atoms: Vec<&Atom> = clauses.iter().flat_map(|c| c.atoms()).collect();
    atoms.sort();
    atoms.dedup();

    // odometer over the atoms; `false` digits mean "true"
    let mut digits = vec![false; atoms.len()];
    loop {
        let assignment = Assignment(
            atoms
                .iter()
                .zip(&digits)
                .map(|(atom, flipped)| ((*atom).clone(), !flipped))
                .collect(),
        );
        if clauses.iter().all(|c| assignment.satisfies(c)) {
            return Some(assignment);
        }

        let mut carry = true;
        for digit in digits.iter_mut().rev() {
            if !carry {
                break;
            }
            *digit = !*digit;
            carry = !*digit;
        }
        if carry {
            return None;
        }
    }
}

/// Whether some assignment satisfies every clause.
pub fn is_satisfiable<'a, I>(clauses: I) -> bool
where
    I: IntoIterator<Item = &'a Clause>,
{
    find_model(clauses).is_some()
}
