//! Infix CNF text format.
//!
//! Grammar (whitespace and newlines are insignificant):
//!
//! ```text
//! cnf     := ε | clause (AND clause)*
//! clause  := "⊥" | literal (OR literal)*
//! literal := NOT* atom
//! AND     := "∧" | "&" | "/\"
//! OR      := "∨" | "|" | "\/"
//! NOT     := "¬" | "~" | "!"
//! ```

use resolute_base::{Clause, Error, Literal, PremiseSet, Result};
use std::iter::Peekable;
use std::str::Chars;

#[derive(Debug, PartialEq, Clone)]
pub enum Token {
    Atom(String),
    Not,
    Or,
    And,
    Bottom,
    EOF,
}

fn is_atom_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Whether `name` reads back as a single atom token.
#[must_use]
pub fn is_atom_name(name: &str) -> bool {
    !name.is_empty() && name.chars().all(is_atom_char)
}

pub struct Tokenizer<'a> {
    input: Peekable<Chars<'a>>,
    line: usize,
}

impl<'a> Tokenizer<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            input: input.chars().peekable(),
            line: 1,
        }
    }

    /// Current 1-based line.
    pub fn line(&self) -> usize {
        self.line
    }

    pub fn next_token(&mut self) -> Result<Token> {
        self.skip_whitespace();

        let Some(&c) = self.input.peek() else {
            return Ok(Token::EOF);
        };
        match c {
            '∧' | '&' => {
                self.input.next();
                Ok(Token::And)
            }
            '∨' | '|' => {
                self.input.next();
                Ok(Token::Or)
            }
            '¬' | '~' | '!' => {
                self.input.next();
                Ok(Token::Not)
            }
            '⊥' => {
                self.input.next();
                Ok(Token::Bottom)
            }
            '/' => self.parse_digraph('\\', Token::And),
            '\\' => self.parse_digraph('/', Token::Or),
            c if is_atom_char(c) => Ok(self.parse_atom()),
            _ => Err(Error::parse(self.line, format!("unexpected character '{c}'"))),
        }
    }

    fn skip_whitespace(&mut self) {
        while let Some(&c) = self.input.peek() {
            if !c.is_whitespace() {
                break;
            }
            if c == '\n' {
                self.line += 1;
            }
            self.input.next();
        }
    }

    fn parse_digraph(&mut self, second: char, token: Token) -> Result<Token> {
        let first = self.input.next();
        match self.input.next() {
            Some(c) if c == second => Ok(token),
            _ => Err(Error::parse(
                self.line,
                format!("expected '{}{second}'", first.unwrap_or_default()),
            )),
        }
    }

    fn parse_atom(&mut self) -> Token {
        let mut s = String::new();
        while let Some(&c) = self.input.peek() {
            if is_atom_char(c) {
                s.push(c);
                self.input.next();
            } else {
                break;
            }
        }
        Token::Atom(s)
    }
}

pub struct Parser<'a> {
    tokenizer: Tokenizer<'a>,
    current_token: Token,
}

impl<'a> Parser<'a> {
    pub fn new(input: &'a str) -> Result<Self> {
        let mut tokenizer = Tokenizer::new(input);
        let current_token = tokenizer.next_token()?;
        Ok(Self {
            tokenizer,
            current_token,
        })
    }

    fn advance(&mut self) -> Result<()> {
        self.current_token = self.tokenizer.next_token()?;
        Ok(())
    }

    fn error(&self, message: impl Into<String>) -> Error {
        Error::parse(self.tokenizer.line(), message)
    }

    pub fn parse(&mut self) -> Result<PremiseSet> {
        let mut premises = PremiseSet::new();
        if self.current_token == Token::EOF {
            return Ok(premises);
        }
        loop {
            premises.insert(self.parse_clause()?);
            match self.current_token {
                Token::And => self.advance()?,
                Token::EOF => return Ok(premises),
                ref other => return Err(self.error(format!("expected '∧' or end of input, found {other:?}"))),
            }
        }
    }

    fn parse_clause(&mut self) -> Result<Clause> {
        if self.current_token == Token::Bottom {
            self.advance()?;
            return Ok(Clause::empty());
        }
        let mut literals = vec![self.parse_literal()?];
        while self.current_token == Token::Or {
            self.advance()?;
            literals.push(self.parse_literal()?);
        }
        Ok(Clause::new(literals))
    }

    fn parse_literal(&mut self) -> Result<Literal> {
        let mut negated = false;
        while self.current_token == Token::Not {
            negated = !negated;
            self.advance()?;
        }
        match std::mem::replace(&mut self.current_token, Token::EOF) {
            Token::Atom(name) => {
                self.advance()?;
                Ok(Literal::new(negated, name))
            }
            other => {
                let message = format!("expected literal, found {other:?}");
                self.current_token = other;
                Err(self.error(message))
            }
        }
    }
}

/// Parses infix CNF text into a premise set.
pub fn parse_cnf(input: &str) -> Result<PremiseSet> {
    Parser::new(input)?.parse()
}

/// Renders a premise set as infix text.
///
/// Atoms read from other formats may hold characters the tokenizer rejects;
/// those are refused rather than written out unreadable.
pub fn render_cnf(premises: &PremiseSet) -> Result<String> {
    if let Some(atom) = premises.atoms().into_iter().find(|a| !is_atom_name(a.name())) {
        return Err(Error::InvalidArgument(format!(
            "atom {:?} cannot be written as infix text",
            atom.name()
        )));
    }
    Ok(format!("{premises}\n"))
}
