//! Problem generators.
//!
//! Atoms are named `p0`, `p1`, ... The literal universe lists the positive
//! literals before the negative ones. The clause universe holds every
//! non-empty subset of it, counted in binary with the last literal as the
//! lowest digit.

use resolute_base::{Clause, Error, Literal, PremiseSet, Result, XorShift64};

/// Atom counts above this produce a clause universe too large to build.
pub const MAX_ATOMS: usize = 8;

/// The `2n` literals over atoms `p0..p{n-1}`.
pub fn literal_universe(num_atoms: usize) -> Vec<Literal> {
    [false, true]
        .into_iter()
        .flat_map(|negated| (0..num_atoms).map(move |a| Literal::new(negated, format!("p{a}"))))
        .collect()
}

/// Every non-empty clause over `num_atoms` atoms, tautologies included.
pub fn clause_universe(num_atoms: usize) -> Result<Vec<Clause>> {
    if num_atoms > MAX_ATOMS {
        return Err(Error::InvalidArgument(format!(
            "clause universe over {num_atoms} atoms is too large (max {MAX_ATOMS})"
        )));
    }
    let literals = literal_universe(num_atoms);
    let width = literals.len();
    Ok((1u64..1 << width)
        .map(|bits| {
            literals
                .iter()
                .enumerate()
                .filter(|(i, _)| (bits >> (width - 1 - i)) & 1 == 1)
                .map(|(_, l)| l.clone())
                .collect()
        })
        .collect())
}

/// Lazily enumerates every CNF over `num_atoms` atoms, i.e. every subset of
/// the clause universe, starting with the empty CNF.
#[derive(Debug, Clone)]
pub struct CnfEnumerator {
    clauses: Vec<Clause>,
    included: Vec<bool>,
    done: bool,
}

impl CnfEnumerator {
    pub fn new(num_atoms: usize) -> Result<Self> {
        let clauses = clause_universe(num_atoms)?;
        Ok(Self {
            included: vec![false; clauses.len()],
            clauses,
            done: false,
        })
    }

    /// Restarts from the empty CNF.
    pub fn reset(&mut self) {
        self.included.iter_mut().for_each(|b| *b = false);
        self.done = false;
    }

    /// Size of the clause universe.
    pub fn universe_len(&self) -> usize {
        self.clauses.len()
    }

    /// Number of CNFs in a full enumeration, if it fits in a `u128`.
    pub fn total(&self) -> Option<u128> {
        u32::try_from(self.clauses.len())
            .ok()
            .and_then(|n| 1u128.checked_shl(n))
    }

    fn advance(&mut self) {
        for bit in self.included.iter_mut().rev() {
            *bit = !*bit;
            if *bit {
                return;
            }
        }
        self.done = true;
    }
}

impl Iterator for CnfEnumerator {
    type Item = PremiseSet;

    fn next(&mut self) -> Option<PremiseSet> {
        if self.done {
            return None;
        }
        let cnf = self
            .clauses
            .iter()
            .zip(&self.included)
            .filter(|&(_, &keep)| keep)
            .map(|(c, _)| c.clone())
            .collect();
        self.advance();
        Some(cnf)
    }
}

/// Draws a CNF that contains each clause of the universe with probability ½.
pub fn sample(num_atoms: usize, rng: &mut XorShift64) -> Result<PremiseSet> {
    Ok(clause_universe(num_atoms)?
        .into_iter()
        .filter(|_| rng.next_bool())
        .collect())
}
