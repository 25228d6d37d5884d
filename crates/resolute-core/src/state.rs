//! Immutable resolver states.
//!
//! A state is a snapshot of the search: every clause known so far, the queue
//! of clause pairs not yet resolved, and the provenance of every derived
//! clause. Taking a step never modifies a state; it builds a successor that
//! shares structure with its parent through persistent collections, so the
//! whole chain can be retained cheaply.

use crate::resolution::resolve;
use im::{HashMap, HashSet, Vector};
use resolute_base::{Clause, Error, PremiseSet, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

/// Identifier of a state inside a [`History`](crate::History) arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StateId(usize);

impl StateId {
    /// The initial state of every history.
    pub const ROOT: StateId = StateId(0);

    pub(crate) const fn new(index: usize) -> Self {
        Self(index)
    }

    /// Position in the arena.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for StateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A candidate pair of clauses awaiting resolution.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ClausePair {
    pub left: Clause,
    pub right: Clause,
}

impl ClausePair {
    pub fn new(left: Clause, right: Clause) -> Self {
        Self { left, right }
    }

    /// Combined literal count of both clauses.
    #[must_use]
    pub fn size(&self) -> usize {
        self.left.len() + self.right.len()
    }

    /// Number of complementary literal pairs across the two clauses.
    #[must_use]
    pub fn complementary_count(&self) -> usize {
        self.left.complementary_count(&self.right)
    }
}

impl fmt::Display for ClausePair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}) · ({})", self.left, self.right)
    }
}

/// What a single step changed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepDelta {
    /// Resolvents produced by the consumed pair, duplicates included.
    pub resolvents: usize,
    /// Resolvents that were not yet known.
    pub new_clauses: usize,
    /// Resolvents that were already known.
    pub rediscovered: usize,
    /// Pairs enqueued for the new clauses.
    pub enqueued: usize,
}

/// Snapshot of the resolution search.
#[derive(Debug, Clone)]
pub struct ResolverState {
    id: StateId,
    /// Known clauses in the order they became known.
    clauses: Vector<Clause>,
    members: HashSet<Clause>,
    premise_count: usize,
    contradiction: bool,
    pairs: Vector<ClausePair>,
    inferences: HashMap<Clause, Vector<ClausePair>>,
    step_count: usize,
    parent: Option<StateId>,
    selected_index: Option<usize>,
    delta: StepDelta,
}

impl ResolverState {
    /// Builds the initial state: every premise, and every unordered pair of
    /// distinct premises queued in premise order.
    pub fn initial(premises: &PremiseSet) -> Self {
        let clauses: Vector<Clause> = premises.iter().cloned().collect();
        let members: HashSet<Clause> = clauses.iter().cloned().collect();

        let mut pairs = Vector::new();
        for (i, left) in clauses.iter().enumerate() {
            for right in clauses.iter().skip(i + 1) {
                pairs.push_back(ClausePair::new(left.clone(), right.clone()));
            }
        }

        Self {
            id: StateId::ROOT,
            premise_count: clauses.len(),
            contradiction: premises.has_contradiction(),
            clauses,
            members,
            pairs,
            inferences: HashMap::new(),
            step_count: 0,
            parent: None,
            selected_index: None,
            delta: StepDelta::default(),
        }
    }

    /// Resolves the pair at `index` and returns the successor state, which
    /// will live in the arena under `id`.
    ///
    /// Every resolvent records the consumed pair as a derivation. A resolvent
    /// that is not yet known is added and paired with every other known
    /// clause, including those added earlier in this same step.
    pub fn successor(&self, id: StateId, index: usize) -> Result<ResolverState> {
        if index >= self.pairs.len() {
            return Err(Error::SelectionOutOfRange {
                index,
                len: self.pairs.len(),
            });
        }

        let mut pairs = self.pairs.clone();
        let pair = pairs.remove(index);
        let mut clauses = self.clauses.clone();
        let mut members = self.members.clone();
        let mut inferences = self.inferences.clone();
        let mut contradiction = self.contradiction;
        let mut delta = StepDelta::default();

        for resolvent in resolve(&pair.left, &pair.right) {
            delta.resolvents += 1;
            inferences
                .entry(resolvent.clone())
                .or_insert_with(Vector::new)
                .push_back(pair.clone());

            if members.contains(&resolvent) {
                delta.rediscovered += 1;
                continue;
            }

            debug!(clause = %resolvent, step = self.step_count + 1, "derived new clause");
            for existing in clauses.iter() {
                pairs.push_back(ClausePair::new(resolvent.clone(), existing.clone()));
            }
            delta.new_clauses += 1;
            delta.enqueued += clauses.len();
            contradiction |= resolvent.is_empty();
            members.insert(resolvent.clone());
            clauses.push_back(resolvent);
        }

        Ok(Self {
            id,
            clauses,
            members,
            premise_count: self.premise_count,
            contradiction,
            pairs,
            inferences,
            step_count: self.step_count + 1,
            parent: Some(self.id),
            selected_index: Some(index),
            delta,
        })
    }

    /// This state's arena id.
    #[must_use]
    pub fn id(&self) -> StateId {
        self.id
    }

    /// Every known clause, premises first, then in derivation order.
    #[must_use]
    pub fn clauses(&self) -> &Vector<Clause> {
        &self.clauses
    }

    /// The premises this search started from.
    pub fn premises(&self) -> impl Iterator<Item = &Clause> + '_ {
        self.clauses.iter().take(self.premise_count)
    }

    /// Number of premises at the front of [`clauses`](Self::clauses).
    #[must_use]
    pub fn premise_count(&self) -> usize {
        self.premise_count
    }

    /// Whether `clause` is a premise.
    #[must_use]
    pub fn is_premise(&self, clause: &Clause) -> bool {
        self.premises().any(|c| c == clause)
    }

    /// Whether `clause` is known.
    #[must_use]
    pub fn contains(&self, clause: &Clause) -> bool {
        self.members.contains(clause)
    }

    /// Whether the empty clause is known.
    #[must_use]
    pub fn has_contradiction(&self) -> bool {
        self.contradiction
    }

    /// Pending pairs in queue order.
    #[must_use]
    pub fn pairs(&self) -> &Vector<ClausePair> {
        &self.pairs
    }

    /// Derived clause → every pair that produced it, in derivation order.
    #[must_use]
    pub fn inferences(&self) -> &HashMap<Clause, Vector<ClausePair>> {
        &self.inferences
    }

    /// Recorded derivations of `clause`, if any.
    #[must_use]
    pub fn derivations(&self, clause: &Clause) -> Option<&Vector<ClausePair>> {
        self.inferences.get(clause)
    }

    /// Number of resolution steps taken to reach this state.
    #[must_use]
    pub fn step_count(&self) -> usize {
        self.step_count
    }

    /// The state this one was derived from.
    #[must_use]
    pub fn parent_id(&self) -> Option<StateId> {
        self.parent
    }

    /// Index into the parent's pair queue consumed to produce this state.
    #[must_use]
    pub fn selected_index(&self) -> Option<usize> {
        self.selected_index
    }

    /// What the step producing this state changed.
    #[must_use]
    pub fn last_step(&self) -> StepDelta {
        self.delta
    }
}
