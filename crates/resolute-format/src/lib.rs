//! # resolute-format
//!
//! Problem file parsing and serialization for Resolute.
//!
//! Supports:
//! - **Text**: infix CNF such as `¬p ∨ q ∧ p ∧ ¬q`
//! - **DIMACS CNF**: Standard SAT competition format
//! - **JSON**: Native document with named atoms

pub mod dimacs;
pub mod json;
pub mod text;

pub use dimacs::DimacsCnf;
pub use json::JsonProblem;
pub use text::{is_atom_name, parse_cnf, render_cnf, Parser, Token, Tokenizer};

use resolute_base::{Error, PremiseSet, Result};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

/// Supported problem formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProblemFormat {
    Text,
    Dimacs,
    Json,
}

impl ProblemFormat {
    /// Detects the format from a file extension, defaulting to text.
    #[must_use]
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some("cnf" | "dimacs") => Self::Dimacs,
            Some("json") => Self::Json,
            _ => Self::Text,
        }
    }

    /// Conventional file extension.
    #[must_use]
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Text => "txt",
            Self::Dimacs => "cnf",
            Self::Json => "json",
        }
    }
}

impl FromStr for ProblemFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "text" | "txt" => Ok(Self::Text),
            "dimacs" | "cnf" => Ok(Self::Dimacs),
            "json" => Ok(Self::Json),
            _ => Err(Error::UnknownFormat(s.to_string())),
        }
    }
}

impl fmt::Display for ProblemFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Text => "text",
            Self::Dimacs => "dimacs",
            Self::Json => "json",
        })
    }
}

/// Parses problem content in the given format.
pub fn parse_problem(content: &str, format: ProblemFormat) -> Result<PremiseSet> {
    match format {
        ProblemFormat::Text => parse_cnf(content),
        ProblemFormat::Dimacs => DimacsCnf::from_str(content)?.to_premises(),
        ProblemFormat::Json => JsonProblem::from_json(content)
            .map(|p| p.clauses)
            .map_err(|e| Error::Serialization(e.to_string())),
    }
}

/// Renders a premise set in the given format.
pub fn render_problem(premises: &PremiseSet, format: ProblemFormat) -> Result<String> {
    match format {
        ProblemFormat::Text => render_cnf(premises),
        ProblemFormat::Dimacs => Ok(DimacsCnf::from_premises(premises)?.to_dimacs()),
        ProblemFormat::Json => JsonProblem::new(None, premises.clone())
            .to_json()
            .map_err(|e| Error::Serialization(e.to_string())),
    }
}

/// Reads a problem file, detecting the format from the extension unless
/// one is given.
pub fn load_problem(path: &Path, format: Option<ProblemFormat>) -> Result<PremiseSet> {
    let content = std::fs::read_to_string(path)?;
    parse_problem(&content, format.unwrap_or_else(|| ProblemFormat::from_path(path)))
}
