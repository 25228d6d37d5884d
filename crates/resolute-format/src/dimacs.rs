//! DIMACS CNF format parser.
//!
//! Standard format used in SAT competitions. Variable `n` becomes the atom
//! `x{n}` unless a `c atom <n> <name>` comment line names it; the writer
//! emits such comments so atom names survive a round trip.

use resolute_base::{Atom, Clause, Error, Literal, PremiseSet, Result};
use std::collections::{BTreeMap, HashMap};
use std::io::{BufRead, BufReader, Read};

/// A DIMACS CNF formula.
#[derive(Debug, Clone)]
pub struct DimacsCnf {
    /// Number of variables.
    pub num_vars: usize,
    /// Clauses as vectors of literals.
    pub clauses: Vec<Vec<i64>>,
    /// Names from `c atom <n> <name>` comments.
    pub names: BTreeMap<u64, String>,
}

impl DimacsCnf {
    /// Parses DIMACS CNF from a reader.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let reader = BufReader::new(reader);
        let mut num_vars = 0;
        let mut clauses = Vec::new();
        let mut names = BTreeMap::new();
        let mut header_found = false;
        let mut clause = Vec::new();

        for (idx, line) in reader.lines().enumerate() {
            let line_no = idx + 1;
            let line = line?;
            let line = line.trim();

            if line.is_empty() || line.starts_with('%') {
                continue;
            }

            if let Some(comment) = line.strip_prefix('c') {
                if let Some((var, name)) = atom_comment(comment) {
                    let var: u64 = var
                        .parse()
                        .map_err(|e| Error::parse(line_no, format!("Invalid atom comment: {e}")))?;
                    if name.is_empty() {
                        return Err(Error::parse(line_no, format!("Atom comment for {var} has no name")));
                    }
                    names.insert(var, name.to_string());
                }
                continue;
            }

            if line.starts_with('p') {
                let parts: Vec<&str> = line.split_whitespace().collect();
                if parts.len() < 4 || parts[1] != "cnf" {
                    return Err(Error::parse(line_no, "Malformed header, expected 'p cnf <vars> <clauses>'"));
                }
                num_vars = parts[2]
                    .parse()
                    .map_err(|e| Error::parse(line_no, format!("Invalid variable count: {e}")))?;
                let num_clauses: usize = parts[3]
                    .parse()
                    .map_err(|e| Error::parse(line_no, format!("Invalid clause count: {e}")))?;
                header_found = true;
                clauses.reserve(num_clauses);
                continue;
            }

            if !header_found {
                return Err(Error::parse(line_no, "DIMACS header 'p cnf ...' not found"));
            }

            // A clause may span lines; only `0` terminates it.
            for token in line.split_whitespace() {
                let lit: i64 = token
                    .parse()
                    .map_err(|e| Error::parse(line_no, format!("Invalid literal '{token}': {e}")))?;
                if lit == 0 {
                    clauses.push(std::mem::take(&mut clause));
                } else {
                    clause.push(lit);
                }
            }
        }

        if !clause.is_empty() {
            clauses.push(clause);
        }

        Ok(Self {
            num_vars,
            clauses,
            names,
        })
    }

    /// Parses DIMACS CNF from a string.
    pub fn from_str(s: &str) -> Result<Self> {
        Self::from_reader(s.as_bytes())
    }

    /// Numbers the atoms of a premise set (sorted by name, starting at 1).
    ///
    /// Fails on atom names that would not survive a `c atom` comment line.
    pub fn from_premises(premises: &PremiseSet) -> Result<Self> {
        let atoms = premises.atoms();
        if let Some(atom) = atoms.iter().find(|a| !is_comment_name(a.name())) {
            return Err(Error::InvalidArgument(format!(
                "atom {:?} cannot be named in a DIMACS comment",
                atom.name()
            )));
        }
        let ids: HashMap<&Atom, i64> = atoms
            .iter()
            .enumerate()
            .map(|(i, atom)| (atom, i as i64 + 1))
            .collect();

        let clauses = premises
            .iter()
            .map(|clause| {
                clause
                    .iter()
                    .map(|lit| {
                        let id = ids[&lit.atom];
                        if lit.negated { -id } else { id }
                    })
                    .collect()
            })
            .collect();

        let names = atoms
            .iter()
            .enumerate()
            .map(|(i, atom)| (i as u64 + 1, atom.name().to_string()))
            .collect();

        Ok(Self {
            num_vars: atoms.len(),
            clauses,
            names,
        })
    }

    /// Converts to DIMACS string.
    #[must_use]
    pub fn to_dimacs(&self) -> String {
        let mut out = String::new();
        for (var, name) in &self.names {
            out.push_str(&format!("c atom {var} {name}\n"));
        }
        out.push_str(&format!("p cnf {} {}\n", self.num_vars, self.clauses.len()));
        for clause in &self.clauses {
            for lit in clause {
                out.push_str(&format!("{lit} "));
            }
            out.push_str("0\n");
        }
        out
    }

    /// Atom for a variable: its comment name, or `x{n}`.
    fn atom(&self, var: u64) -> Atom {
        match self.names.get(&var) {
            Some(name) => Atom::new(name),
            None => Atom::from(format!("x{var}")),
        }
    }

    /// Converts to a premise set.
    ///
    /// Two variables that end up with the same atom name (a `c atom` comment
    /// reusing a default `x{n}` name, or one name given twice) are an error
    /// instead of being merged.
    pub fn to_premises(&self) -> Result<PremiseSet> {
        let mut atoms: HashMap<u64, Atom> = HashMap::new();
        let mut owners: HashMap<Atom, u64> = HashMap::new();
        for var in self.clauses.iter().flatten().map(|l| l.unsigned_abs()) {
            if atoms.contains_key(&var) {
                continue;
            }
            let atom = self.atom(var);
            if let Some(other) = owners.insert(atom.clone(), var) {
                return Err(Error::InvalidArgument(format!(
                    "variables {other} and {var} both name atom '{atom}'"
                )));
            }
            atoms.insert(var, atom);
        }

        Ok(self
            .clauses
            .iter()
            .map(|lits| {
                Clause::new(
                    lits.iter()
                        .map(|&l| Literal::new(l < 0, atoms[&l.unsigned_abs()].clone())),
                )
            })
            .collect())
    }
}

/// Splits `atom <n> <name>` off a comment body. The name runs to the end of
/// the line and may contain spaces.
fn atom_comment(comment: &str) -> Option<(&str, &str)> {
    let rest = comment.trim_start().strip_prefix("atom")?;
    if !rest.starts_with(char::is_whitespace) {
        return None;
    }
    let rest = rest.trim_start();
    let (var, name) = rest.split_once(char::is_whitespace).unwrap_or((rest, ""));
    Some((var, name.trim()))
}

fn is_comment_name(name: &str) -> bool {
    !name.is_empty() && name.trim() == name && !name.contains(['\n', '\r'])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_dimacs() {
        let input = r"
c This is a comment
p cnf 3 2
1 -2 0
2 3 0
";
        let cnf = DimacsCnf::from_str(input).unwrap();
        assert_eq!(cnf.num_vars, 3);
        assert_eq!(cnf.clauses.len(), 2);
        assert_eq!(cnf.clauses[0], vec![1, -2]);
        assert_eq!(cnf.clauses[1], vec![2, 3]);
    }

    #[test]
    fn test_default_atom_names() {
        let cnf = DimacsCnf::from_str("p cnf 2 1\n1 -2 0\n").unwrap();
        let premises = cnf.to_premises().unwrap();
        let clause = Clause::new([Literal::positive("x1"), Literal::negative("x2")]);
        assert!(premises.contains(&clause));
    }

    #[test]
    fn test_clause_spanning_lines_and_empty_clause() {
        let cnf = DimacsCnf::from_str("p cnf 2 2\n1\n2 0\n0\n").unwrap();
        assert_eq!(cnf.clauses, vec![vec![1, 2], vec![]]);
        assert!(cnf.to_premises().unwrap().has_contradiction());
    }

    #[test]
    fn test_named_round_trip() {
        let premises: PremiseSet = [
            Clause::new([Literal::positive("rain"), Literal::negative("sun")]),
            Clause::new([Literal::positive("sun")]),
        ]
        .into_iter()
        .collect();

        let text = DimacsCnf::from_premises(&premises).unwrap().to_dimacs();
        assert!(text.contains("c atom 1 rain"));
        let back = DimacsCnf::from_str(&text).unwrap().to_premises().unwrap();
        assert_eq!(back, premises);
    }

    #[test]
    fn test_names_with_spaces_round_trip() {
        let premises: PremiseSet = [
            Clause::new([Literal::positive("heavy rain"), Literal::negative("x-1")]),
            Clause::new([Literal::positive("x-1")]),
        ]
        .into_iter()
        .collect();

        let text = DimacsCnf::from_premises(&premises).unwrap().to_dimacs();
        let cnf = DimacsCnf::from_str(&text).unwrap();
        assert_eq!(cnf.names.get(&1).map(String::as_str), Some("heavy rain"));
        assert_eq!(cnf.to_premises().unwrap(), premises);
    }

    #[test]
    fn test_unwritable_names() {
        for name in ["line\nbreak", " padded"] {
            let premises: PremiseSet = [Clause::new([Literal::positive(name)])].into_iter().collect();
            assert!(matches!(
                DimacsCnf::from_premises(&premises),
                Err(Error::InvalidArgument(_))
            ));
        }
    }

    #[test]
    fn test_atom_comment_without_name() {
        let err = DimacsCnf::from_str("c atom 1\np cnf 1 1\n1 0\n").unwrap_err();
        assert!(matches!(err, Error::Parse { line: 1, .. }));
        // Ordinary comments that merely start with the word are ignored.
        assert!(DimacsCnf::from_str("c atomic clauses\np cnf 1 1\n1 0\n").is_ok());
    }

    #[test]
    fn test_default_name_collision() {
        let cnf = DimacsCnf::from_str("c atom 1 x2\np cnf 2 2\n1 0\n-2 0\n").unwrap();
        assert!(matches!(cnf.to_premises(), Err(Error::InvalidArgument(_))));

        let cnf = DimacsCnf::from_str("c atom 1 p\nc atom 2 p\np cnf 2 1\n1 2 0\n").unwrap();
        assert!(matches!(cnf.to_premises(), Err(Error::InvalidArgument(_))));

        // Unused names do not clash.
        let cnf = DimacsCnf::from_str("c atom 3 x1\np cnf 2 1\n1 -2 0\n").unwrap();
        assert_eq!(cnf.to_premises().unwrap().atoms().len(), 2);
    }

    #[test]
    fn test_missing_header() {
        let err = DimacsCnf::from_str("1 2 0\n").unwrap_err();
        assert!(matches!(err, Error::Parse { line: 1, .. }));
    }

    #[test]
    fn test_invalid_literal() {
        let err = DimacsCnf::from_str("p cnf 1 1\n1 a 0\n").unwrap_err();
        assert!(matches!(err, Error::Parse { line: 2, .. }));
    }
}
