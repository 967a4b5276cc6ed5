//! Read loop around the parser.
//!
//! The driver asks for one top-level construct at a time and reports whether it
//! parsed. After a failed construct it consumes one more token so the next
//! attempt starts past the offending input.

use std::io::{Read, Write};

use crate::{
    ast::statements::TopLevel,
    errors::errors::{Error, ErrorImpl},
    format_error,
    lexer::tokens::TokenKind,
    parser::{parser::Parser, toplevel::parse_item},
    Position,
};

pub const PROMPT: &str = "ready> ";

#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Parsed(TopLevel),
    Failed(Error),
}

impl Outcome {
    /// The status line reported for this outcome.
    pub fn describe(&self) -> &'static str {
        match self {
            Outcome::Parsed(TopLevel::Definition(_)) => "Parsed a function definition.",
            Outcome::Parsed(TopLevel::Extern(_)) => "Parsed an extern.",
            Outcome::Parsed(TopLevel::Expression(_)) => "Parsed a top-level expression.",
            Outcome::Failed(_) => "Failed to parse.",
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Summary {
    pub parsed: usize,
    pub failed: usize,
}

#[derive(Debug, Default, Clone, Copy)]
pub struct DriverOptions<'a> {
    /// Write a prompt to stderr before each read
    pub prompt: bool,
    /// Print the tree of every parsed construct
    pub show_ast: bool,
    /// Source text, used to quote the offending line in error reports
    pub source: Option<&'a str>,
}

pub struct Driver<R: Read> {
    parser: Parser<R>,
}

impl<R: Read> Driver<R> {
    pub fn new(parser: Parser<R>) -> Self {
        Driver { parser }
    }

    pub fn get_parser(&self) -> &Parser<R> {
        &self.parser
    }

    /// Parses the next top-level construct.
    ///
    /// Returns `Ok(None)` at end-of-stream. Structural failures come back as
    /// `Outcome::Failed` with the lookahead already moved past the offending
    /// token; only read failures are returned as `Err`.
    pub fn step(&mut self) -> Result<Option<Outcome>, Error> {
        loop {
            match self.parser.current_token_kind() {
                TokenKind::EOF => return Ok(None),
                TokenKind::Char(';') => {
                    self.parser.advance()?;
                }
                _ => break,
            }
        }

        match parse_item(&mut self.parser) {
            Ok(item) => Ok(Some(Outcome::Parsed(item))),
            Err(error) if error.is_fatal() => Err(error),
            Err(error) => {
                self.parser.advance()?;
                Ok(Some(Outcome::Failed(error)))
            }
        }
    }

    /// Runs [`Driver::step`] until end-of-stream, writing status lines to `out`.
    pub fn run<W: Write>(&mut self, out: &mut W, options: DriverOptions<'_>) -> Result<Summary, Error> {
        let mut summary = Summary::default();

        while let Some(outcome) = self.step()? {
            writeln!(out, "{}", outcome.describe()).map_err(write_error)?;

            match &outcome {
                Outcome::Parsed(item) => {
                    summary.parsed += 1;
                    if options.show_ast {
                        writeln!(out, "{:#?}", item).map_err(write_error)?;
                    }
                }
                Outcome::Failed(error) => {
                    summary.failed += 1;
                    writeln!(out, "{}", format_error(error, options.source)).map_err(write_error)?;
                }
            }

            if options.prompt {
                eprint!("{}", PROMPT);
            }
        }

        Ok(summary)
    }
}

fn write_error(error: std::io::Error) -> Error {
    Error::new(
        ErrorImpl::Io {
            message: error.to_string(),
        },
        Position::null(),
    )
}
