//! Atoms and literals.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// An opaque propositional variable.
///
/// Cloning is cheap: the name is shared behind an `Arc`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Atom(Arc<str>);

impl Atom {
    /// Creates an atom with the given name.
    #[must_use]
    pub fn new(name: impl AsRef<str>) -> Self {
        Self(Arc::from(name.as_ref()))
    }

    /// Returns the atom name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.0
    }

    /// Creates the positive literal of this atom.
    #[must_use]
    pub fn pos(&self) -> Literal {
        Literal::positive(self.clone())
    }

    /// Creates the negated literal of this atom.
    #[must_use]
    pub fn neg(&self) -> Literal {
        Literal::negative(self.clone())
    }
}

impl From<&str> for Atom {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for Atom {
    fn from(name: String) -> Self {
        Self(Arc::from(name))
    }
}

impl fmt::Display for Atom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A literal is an atom with optional negation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Literal {
    /// The underlying atom.
    pub atom: Atom,
    /// Whether this literal is negated.
    pub negated: bool,
}

impl Literal {
    /// Creates a literal from a polarity flag and an atom.
    pub fn new(negated: bool, atom: impl Into<Atom>) -> Self {
        Self {
            atom: atom.into(),
            negated,
        }
    }

    /// Creates a positive literal.
    pub fn positive(atom: impl Into<Atom>) -> Self {
        Self::new(false, atom)
    }

    /// Creates a negated literal.
    pub fn negative(atom: impl Into<Atom>) -> Self {
        Self::new(true, atom)
    }

    /// Negates this literal.
    #[must_use]
    pub fn negate(&self) -> Self {
        Self {
            atom: self.atom.clone(),
            negated: !self.negated,
        }
    }

    /// Same atom, opposite polarity.
    #[must_use]
    pub fn is_complementary(&self, other: &Literal) -> bool {
        self.atom == other.atom && self.negated != other.negated
    }

    /// Truth value of this literal when its atom is assigned `value`.
    #[must_use]
    pub fn evaluate(&self, value: bool) -> bool {
        value != self.negated
    }
}

impl std::ops::Not for Literal {
    type Output = Literal;

    fn not(self) -> Self::Output {
        Self {
            atom: self.atom,
            negated: !self.negated,
        }
    }
}

impl std::ops::Not for &Literal {
    type Output = Literal;

    fn not(self) -> Self::Output {
        self.negate()
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.negated {
            f.write_str("¬")?;
        }
        write!(f, "{}", self.atom)
    }
}
