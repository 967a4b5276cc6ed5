//! Parser state and the whole-source entry point.
//!
//! The parser keeps a single "current token" register filled from the scanner.
//! Grammar routines in `expr` and `toplevel` inspect it, and call
//! [`Parser::advance`] to consume it.

use std::io::Read;

use crate::{
    ast::statements::TopLevel,
    errors::errors::{Error, ErrorImpl},
    lexer::{
        lexer::Lexer,
        tokens::{Token, TokenKind},
    },
    Position,
};

use super::{lookups::PrecedenceTable, toplevel::parse_item};

/// The main parser structure that maintains parsing state.
pub struct Parser<R: Read> {
    /// Token source
    lexer: Lexer<R>,
    /// The one-token lookahead
    current: Token,
    /// Binary operator precedences
    precedence: PrecedenceTable,
}

impl<R: Read> Parser<R> {
    /// Creates a parser with the default precedence table and loads the first token.
    pub fn new(lexer: Lexer<R>) -> Result<Self, Error> {
        Parser::with_precedence(lexer, PrecedenceTable::default())
    }

    pub fn with_precedence(mut lexer: Lexer<R>, precedence: PrecedenceTable) -> Result<Self, Error> {
        let current = lexer.next_token()?;

        Ok(Parser {
            lexer,
            current,
            precedence,
        })
    }

    /// Returns the current token without advancing.
    pub fn current_token(&self) -> &Token {
        &self.current
    }

    /// Returns the kind of the current token.
    pub fn current_token_kind(&self) -> &TokenKind {
        &self.current.kind
    }

    /// Loads the next token and returns the one it replaced.
    pub fn advance(&mut self) -> Result<Token, Error> {
        let next = self.lexer.next_token()?;
        Ok(std::mem::replace(&mut self.current, next))
    }

    /// Precedence of the current token, `-1` when it is not a binary operator.
    pub fn get_token_precedence(&self) -> i32 {
        self.precedence.get_token_precedence(&self.current.kind)
    }

    /// The current token as a binary operator with its precedence.
    pub fn current_binop(&self) -> Option<(char, i32)> {
        match self.current.kind {
            TokenKind::Char(op) if self.get_token_precedence() > 0 => {
                Some((op, self.get_token_precedence()))
            }
            _ => None,
        }
    }

    pub fn get_precedence_table(&self) -> &PrecedenceTable {
        &self.precedence
    }

    /// Returns the position of the current token.
    pub fn get_position(&self) -> Position {
        self.current.span.start.clone()
    }

    /// Builds an error describing the current token.
    pub fn error_at_current(&self, error_impl: impl FnOnce(String) -> ErrorImpl) -> Error {
        Error::new(error_impl(self.current.kind.to_string()), self.get_position())
    }
}

/// Parses every top-level construct in `source`.
///
/// `;` separators are skipped. Parsing stops at the first error.
pub fn parse(source: &str, file: Option<String>) -> Result<Vec<TopLevel>, Error> {
    let mut parser = Parser::new(Lexer::from_source(source, file))?;
    let mut items = vec![];

    loop {
        match parser.current_token_kind() {
            TokenKind::EOF => return Ok(items),
            TokenKind::Char(';') => {
                parser.advance()?;
            }
            _ => items.push(parse_item(&mut parser)?),
        }
    }
}
