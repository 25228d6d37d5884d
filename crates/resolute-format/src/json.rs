//! JSON problem format.
//!
//! ```json
//! {
//!   "name": "modus-ponens",
//!   "clauses": [
//!     [{"atom": "p", "negated": true}, {"atom": "q", "negated": false}],
//!     [{"atom": "p", "negated": false}],
//!     [{"atom": "q", "negated": true}]
//!   ]
//! }
//! ```

use resolute_base::PremiseSet;
use serde::{Deserialize, Serialize};

/// A named problem document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct JsonProblem {
    /// Optional human-readable name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// The premises.
    pub clauses: PremiseSet,
}

impl JsonProblem {
    /// Wraps a premise set.
    #[must_use]
    pub fn new(name: Option<String>, clauses: PremiseSet) -> Self {
        Self { name, clauses }
    }

    /// Parses from JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Serializes to JSON string.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Parses from JSON reader.
    pub fn from_reader<R: std::io::Read>(reader: R) -> Result<Self, serde_json::Error> {
        serde_json::from_reader(reader)
    }

    /// Writes to JSON writer.
    pub fn to_writer<W: std::io::Write>(&self, writer: W) -> Result<(), serde_json::Error> {
        serde_json::to_writer_pretty(writer, self)
    }
}
