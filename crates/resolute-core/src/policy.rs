//! Pair selection policies.
//!
//! The search loop asks a [`SelectionPolicy`] which pending pair to resolve
//! next. Any `FnMut(&StateView) -> usize` closure is a policy, so ad-hoc
//! strategies need no new type.
//!
//! # Available Policies
//!
//! - [`FirstPair`] - FIFO, always the oldest pending pair
//! - [`SmallestPair`] - fewest combined literals
//! - [`ComplementaryRank`] - fewest literals, then most complementary pairs
//! - [`RandomPair`] - uniform choice from a seeded PRNG

use crate::history::StateView;
use crate::state::ClausePair;
use resolute_base::{Error, XorShift64};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Chooses the next pair to resolve.
///
/// Implementations are only called while the pair queue is non-empty and
/// must return an index into `view.pairs()`. An index out of range aborts
/// the search with [`Error::SelectionOutOfRange`].
pub trait SelectionPolicy {
    /// Index of the pair to resolve next.
    fn select(&mut self, view: &StateView<'_>) -> usize;

    /// Name used in logs and reports.
    fn name(&self) -> &str {
        "custom"
    }
}

impl<F> SelectionPolicy for F
where
    F: FnMut(&StateView<'_>) -> usize,
{
    fn select(&mut self, view: &StateView<'_>) -> usize {
        self(view)
    }
}

/// Always resolves the oldest pending pair.
#[derive(Debug, Clone, Copy, Default)]
pub struct FirstPair;

impl SelectionPolicy for FirstPair {
    fn select(&mut self, _view: &StateView<'_>) -> usize {
        0
    }

    fn name(&self) -> &str {
        "first"
    }
}

/// Resolves the pair with the fewest combined literals, the oldest on ties.
#[derive(Debug, Clone, Copy, Default)]
pub struct SmallestPair;

impl SelectionPolicy for SmallestPair {
    fn select(&mut self, view: &StateView<'_>) -> usize {
        // min_by_key keeps the first minimum
        view.pairs()
            .iter()
            .enumerate()
            .min_by_key(|(_, pair)| pair.size())
            .map_or(0, |(i, _)| i)
    }

    fn name(&self) -> &str {
        "smallest"
    }
}

/// Among the pairs with the fewest combined literals, resolves the one with
/// the most complementary literal pairs. Ties go to the oldest.
#[derive(Debug, Clone, Copy, Default)]
pub struct ComplementaryRank;

impl ComplementaryRank {
    fn rank(pair: &ClausePair) -> (usize, std::cmp::Reverse<usize>) {
        (pair.size(), std::cmp::Reverse(pair.complementary_count()))
    }
}

impl SelectionPolicy for ComplementaryRank {
    fn select(&mut self, view: &StateView<'_>) -> usize {
        view.pairs()
            .iter()
            .enumerate()
            .min_by_key(|(_, pair)| Self::rank(pair))
            .map_or(0, |(i, _)| i)
    }

    fn name(&self) -> &str {
        "complementary"
    }
}

/// Resolves a uniformly random pending pair.
#[derive(Debug, Clone)]
pub struct RandomPair {
    rng: XorShift64,
}

impl RandomPair {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: XorShift64::new(seed),
        }
    }
}

impl SelectionPolicy for RandomPair {
    fn select(&mut self, view: &StateView<'_>) -> usize {
        match view.pairs().len() {
            0 => 0,
            len => self.rng.below(len),
        }
    }

    fn name(&self) -> &str {
        "random"
    }
}

/// The built-in policies, selectable by name.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PolicyKind {
    #[default]
    First,
    Smallest,
    Complementary,
    Random,
}

impl PolicyKind {
    /// Every built-in policy.
    pub const ALL: [PolicyKind; 4] = [
        PolicyKind::First,
        PolicyKind::Smallest,
        PolicyKind::Complementary,
        PolicyKind::Random,
    ];

    /// Instantiates the policy. `seed` only matters for [`PolicyKind::Random`].
    #[must_use]
    pub fn build(self, seed: u64) -> Box<dyn SelectionPolicy + Send> {
        match self {
            Self::First => Box::new(FirstPair),
            Self::Smallest => Box::new(SmallestPair),
            Self::Complementary => Box::new(ComplementaryRank),
            Self::Random => Box::new(RandomPair::new(seed)),
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::First => "first",
            Self::Smallest => "smallest",
            Self::Complementary => "complementary",
            Self::Random => "random",
        }
    }
}

impl FromStr for PolicyKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        match s.to_ascii_lowercase().as_str() {
            "first" | "fifo" => Ok(Self::First),
            "smallest" | "baseline" => Ok(Self::Smallest),
            "complementary" => Ok(Self::Complementary),
            "random" => Ok(Self::Random),
            _ => Err(Error::UnknownPolicy(s.to_string())),
        }
    }
}

impl fmt::Display for PolicyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
