//! Refutation proofs read back from a resolver state.

use crate::resolution::resolve;
use crate::state::{ClausePair, ResolverState};
use resolute_base::Clause;
use serde::Serialize;
use std::collections::{HashMap, HashSet};
use std::fmt;

/// One line of a proof.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProofStep {
    pub clause: Clause,
    /// The pair this clause was resolved from; `None` for premises.
    pub premises: Option<ClausePair>,
}

/// A derivation of the empty clause, premises before conclusions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Proof {
    steps: Vec<ProofStep>,
}

impl Proof {
    /// Walks the recorded inferences back from ⊥ to the premises, following
    /// each clause's first derivation. Returns `None` if ⊥ is not known.
    pub fn extract(state: &ResolverState) -> Option<Proof> {
        let bottom = Clause::empty();
        if !state.contains(&bottom) {
            return None;
        }

        let position: HashMap<&Clause, usize> = state
            .clauses()
            .iter()
            .enumerate()
            .map(|(i, c)| (c, i))
            .collect();

        let mut visited = HashSet::new();
        let mut steps = Vec::new();
        let mut to_visit = vec![bottom];
        while let Some(clause) = to_visit.pop() {
            let Some(&pos) = position.get(&clause) else {
                continue;
            };
            if !visited.insert(pos) {
                continue;
            }
            let premises = if pos < state.premise_count() {
                None
            } else {
                state.derivations(&clause).and_then(|d| d.front()).cloned()
            };
            if let Some(pair) = &premises {
                to_visit.push(pair.left.clone());
                to_visit.push(pair.right.clone());
            }
            steps.push((pos, ProofStep { clause, premises }));
        }

        // parents are always known before their resolvents
        steps.sort_by_key(|(pos, _)| *pos);
        Some(Proof {
            steps: steps.into_iter().map(|(_, step)| step).collect(),
        })
    }

    #[must_use]
    pub fn steps(&self) -> &[ProofStep] {
        &self.steps
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Number of resolution steps, premises excluded.
    #[must_use]
    pub fn inference_count(&self) -> usize {
        self.steps.iter().filter(|s| s.premises.is_some()).count()
    }

    /// Checks that every derived step is a resolvent of two earlier steps
    /// and that the last step is ⊥.
    #[must_use]
    pub fn verify(&self) -> bool {
        let mut known: HashSet<&Clause> = HashSet::new();
        for step in &self.steps {
            if let Some(pair) = &step.premises {
                if !known.contains(&pair.left) || !known.contains(&pair.right) {
                    return false;
                }
                if !resolve(&pair.left, &pair.right).any(|r| r == step.clause) {
                    return false;
                }
            }
            known.insert(&step.clause);
        }
        self.steps.last().is_some_and(|s| s.clause.is_empty())
    }

    /// Proof lines as rendered by `Display`.
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        let number: HashMap<&Clause, usize> = self
            .steps
            .iter()
            .enumerate()
            .map(|(i, s)| (&s.clause, i + 1))
            .collect();

        self.steps
            .iter()
            .enumerate()
            .map(|(i, step)| match &step.premises {
                None => format!("{}. {} [premise]", i + 1, step.clause),
                Some(pair) => format!(
                    "{}. {} [resolve {}, {}]",
                    i + 1,
                    step.clause,
                    number.get(&pair.left).copied().unwrap_or(0),
                    number.get(&pair.right).copied().unwrap_or(0),
                ),
            })
            .collect()
    }
}

impl fmt::Display for Proof {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in self.lines() {
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::policy::FirstPair;
    use crate::search::{run, SearchConfig};
    use resolute_base::{Literal, PremiseSet};

    fn modus_ponens() -> PremiseSet {
        // p → q, p, ¬q
        [
            Clause::new([Literal::negative("p"), Literal::positive("q")]),
            Clause::from(Literal::positive("p")),
            Clause::from(Literal::negative("q")),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_extract_modus_ponens() {
        let result = run(&modus_ponens(), &mut FirstPair, &SearchConfig::default()).unwrap();
        let proof = result.proof().unwrap();

        assert!(proof.verify());
        assert_eq!(proof.steps().last().map(|s| s.clause.clone()), Some(Clause::empty()));
        assert!(proof.inference_count() >= 2);
        assert!(proof.steps()[0].premises.is_none());
        for step in proof.steps().iter().filter(|s| s.premises.is_none()) {
            assert!(modus_ponens().contains(&step.clause));
        }
    }

    #[test]
    fn test_display_numbers_lines() {
        let premises: PremiseSet = [
            Clause::from(Literal::positive("p")),
            Clause::from(Literal::negative("p")),
        ]
        .into_iter()
        .collect();
        let result = run(&premises, &mut FirstPair, &SearchConfig::default()).unwrap();
        let text = result.proof().unwrap().to_string();
        assert_eq!(text, "1. p [premise]\n2. ¬p [premise]\n3. ⊥ [resolve 1, 2]\n");
    }

    #[test]
    fn test_no_proof_without_contradiction() {
        let premises: PremiseSet = [
            Clause::from(Literal::positive("p")),
            Clause::from(Literal::positive("q")),
        ]
        .into_iter()
        .collect();
        let result = run(&premises, &mut FirstPair, &SearchConfig::default()).unwrap();
        assert!(result.proof().is_none());
    }

    #[test]
    fn test_premise_contradiction_is_its_own_proof() {
        let premises: PremiseSet = [Clause::empty()].into_iter().collect();
        let state = ResolverState::initial(&premises);
        let proof = Proof::extract(&state).unwrap();
        assert_eq!(proof.len(), 1);
        assert!(proof.verify());
        assert_eq!(proof.to_string(), "1. ⊥ [premise]\n");
    }

    #[test]
    fn test_tampered_proof_fails_verification() {
        let result = run(&modus_ponens(), &mut FirstPair, &SearchConfig::default()).unwrap();
        let mut proof = result.proof().unwrap();
        proof.steps.remove(0);
        assert!(!proof.verify());
    }
}
