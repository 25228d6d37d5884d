//! The arena of every state a search has visited.

use crate::state::{ClausePair, ResolverState, StateId};
use resolute_base::{Error, PremiseSet, Result};
use std::ops::Deref;

/// Every state produced during a search, addressed by [`StateId`].
///
/// States are never removed. The current state is the most recent one
/// produced by [`History::step`], or the root before any step.
#[derive(Debug, Clone)]
pub struct History {
    states: Vec<ResolverState>,
    current: StateId,
}

impl History {
    /// Starts a history at the initial state for `premises`.
    pub fn new(premises: &PremiseSet) -> Self {
        Self {
            states: vec![ResolverState::initial(premises)],
            current: StateId::ROOT,
        }
    }

    /// View of the current state.
    #[must_use]
    pub fn current(&self) -> StateView<'_> {
        StateView {
            history: self,
            state: self.current_state(),
        }
    }

    /// The current state.
    #[must_use]
    pub fn current_state(&self) -> &ResolverState {
        &self.states[self.current.index()]
    }

    /// Looks up a state by id.
    #[must_use]
    pub fn get(&self, id: StateId) -> Option<StateView<'_>> {
        self.states.get(id.index()).map(|state| StateView {
            history: self,
            state,
        })
    }

    /// Number of states in the arena.
    #[must_use]
    pub fn len(&self) -> usize {
        self.states.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// Resolves the pair at `index` of the current state and makes the
    /// successor current.
    pub fn step(&mut self, index: usize) -> Result<StateId> {
        self.step_from(self.current, index)
    }

    /// Resolves the pair at `index` of state `from`. The successor becomes
    /// current, which allows branching from any earlier state.
    pub fn step_from(&mut self, from: StateId, index: usize) -> Result<StateId> {
        let parent = self
            .states
            .get(from.index())
            .ok_or_else(|| Error::InvalidArgument(format!("no state {from} in history")))?;
        let id = StateId::new(self.states.len());
        let next = parent.successor(id, index)?;
        self.states.push(next);
        self.current = id;
        Ok(id)
    }

    /// Pairs consumed along the path from the root to the current state.
    #[must_use]
    pub fn pair_history(&self) -> Vec<ClausePair> {
        let mut pairs: Vec<ClausePair> = self
            .current()
            .ancestors()
            .filter_map(|view| view.consumed_pair())
            .collect();
        pairs.reverse();
        pairs
    }

    /// Iterates over every state in creation order.
    pub fn iter(&self) -> impl Iterator<Item = StateView<'_>> + '_ {
        self.states.iter().map(move |state| StateView {
            history: self,
            state,
        })
    }
}

/// A state together with the history it lives in, so selection policies
/// can follow parent links.
#[derive(Debug, Clone, Copy)]
pub struct StateView<'a> {
    history: &'a History,
    state: &'a ResolverState,
}

impl<'a> StateView<'a> {
    /// The underlying state.
    #[must_use]
    pub fn state(&self) -> &'a ResolverState {
        self.state
    }


    /// The state this one was derived from.
    #[must_use]
    pub fn parent(&self) -> Option<StateView<'a>> {
        self.state.parent_id().and_then(|id| self.history.get(id))
    }

    /// This state, then its parent, and so on up to the root.
    pub fn ancestors(&self) -> impl Iterator<Item = StateView<'a>> {
        std::iter::successors(Some(*self), |view| view.parent())
    }

    /// The pair resolved to produce this state.
    #[must_use]
    pub fn consumed_pair(&self) -> Option<ClausePair> {
        let parent = self.parent()?;
        let index = self.state.selected_index()?;
        parent.state.pairs().get(index).cloned()
    }
}

impl Deref for StateView<'_> {
    type Target = ResolverState;

    fn deref(&self) -> &ResolverState {
        self.state
    }
}
