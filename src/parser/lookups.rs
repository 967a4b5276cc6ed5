use std::collections::HashMap;

use lazy_static::lazy_static;

use crate::{
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
    Position,
};

lazy_static! {
    pub static ref DEFAULT_PRECEDENCE: HashMap<char, i32> = {
        let mut map = HashMap::new();
        map.insert('<', 10);
        map.insert('+', 20);
        map.insert('-', 20);
        map.insert('*', 40);
        map
    };
}

/// Characters the grammar already gives a meaning to.
const RESERVED_OPERATORS: [char; 6] = ['(', ')', ',', ';', '.', '#'];

/// Binary operator precedences. Higher binds tighter; every entry is strictly positive.
#[derive(Debug, Clone, PartialEq)]
pub struct PrecedenceTable(HashMap<char, i32>);

impl Default for PrecedenceTable {
    fn default() -> Self {
        PrecedenceTable(DEFAULT_PRECEDENCE.clone())
    }
}

impl PrecedenceTable {
    pub fn empty() -> Self {
        PrecedenceTable(HashMap::new())
    }

    /// Adds or overrides the precedence of `op`.
    pub fn insert(&mut self, op: char, precedence: i32) -> Result<(), Error> {
        if precedence <= 0 || !op.is_ascii_punctuation() || RESERVED_OPERATORS.contains(&op) {
            return Err(Error::new(
                ErrorImpl::InvalidPrecedence {
                    binding: format!("{}={}", op, precedence),
                },
                Position::null(),
            ));
        }

        self.0.insert(op, precedence);
        Ok(())
    }

    /// Returns `-1` for characters that are not binary operators.
    pub fn get(&self, op: char) -> i32 {
        *self.0.get(&op).unwrap_or(&-1)
    }

    pub fn get_token_precedence(&self, kind: &TokenKind) -> i32 {
        match kind {
            TokenKind::Char(c) if c.is_ascii() => self.get(*c),
            _ => -1,
        }
    }

    /// Parses an `<op>=<precedence>` binding such as `/=40`.
    pub fn parse_binding(binding: &str) -> Result<(char, i32), Error> {
        let invalid = || {
            Error::new(
                ErrorImpl::InvalidPrecedence {
                    binding: binding.to_string(),
                },
                Position::null(),
            )
        };

        let mut chars = binding.chars();
        let op = chars.next().ok_or_else(invalid)?;

        let precedence = chars
            .as_str()
            .strip_prefix('=')
            .and_then(|precedence| precedence.trim().parse().ok())
            .ok_or_else(invalid)?;

        Ok((op, precedence))
    }
}
