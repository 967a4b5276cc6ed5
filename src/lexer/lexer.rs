use std::{
    io::{Bytes, Read},
    rc::Rc,
};

use lazy_static::lazy_static;
use regex::Regex;

use crate::{
    errors::errors::{Error, ErrorImpl},
    Position, Span, MK_SPAN, MK_TOKEN,
};

use super::tokens::{Token, TokenKind, RESERVED_LOOKUP};

lazy_static! {
    // Longest prefix of a digit/'.' run that a decimal float parser accepts.
    static ref NUMBER_PREFIX: Regex = Regex::new(r"^(\d+\.?\d*|\.\d+)").unwrap();
}

/// Single-character lookahead scanner over a byte source.
///
/// The lookahead persists across calls to [`Lexer::next_token`]; it is seeded
/// with a blank so the first call always starts by skipping whitespace.
pub struct Lexer<R: Read> {
    source: Bytes<R>,
    /// `None` once the source is exhausted
    last_char: Option<char>,
    /// Offset of `last_char` in the source
    char_start: u32,
    /// Saturates on streams longer than `u32::MAX` bytes
    consumed: u32,
    exhausted: bool,
    file: Rc<String>,
}

impl<R: Read> Lexer<R> {
    pub fn new(reader: R, file: Option<String>) -> Lexer<R> {
        let file_name = if let Some(file) = file {
            Rc::new(file)
        } else {
            Rc::new(String::from("shell"))
        };

        Lexer {
            source: reader.bytes(),
            last_char: Some(' '),
            char_start: 0,
            consumed: 0,
            exhausted: false,
            file: file_name,
        }
    }

    fn read_char(&mut self) -> Result<(), Error> {
        if self.exhausted {
            return Ok(());
        }

        match self.source.next() {
            Some(Ok(byte)) => {
                self.char_start = self.consumed;
                self.consumed = self.consumed.saturating_add(1);
                self.last_char = Some(byte as char);
            }
            Some(Err(error)) => {
                return Err(Error::new(
                    ErrorImpl::Io {
                        message: error.to_string(),
                    },
                    Position(self.consumed, Rc::clone(&self.file)),
                ))
            }
            None => {
                self.char_start = self.consumed;
                self.last_char = None;
                self.exhausted = true;
            }
        }

        Ok(())
    }

    fn make_token(&self, kind: TokenKind, start: u32) -> Token {
        MK_TOKEN!(kind, MK_SPAN!(start, self.char_start, self.file))
    }

    /// Scans the next token.
    ///
    /// Once the source reports end-of-stream every call yields `EOF`. The only
    /// error is a failed read on the underlying source.
    pub fn next_token(&mut self) -> Result<Token, Error> {
        loop {
            while matches!(self.last_char, Some(c) if is_space(c)) {
                self.read_char()?;
            }

            let start = self.char_start;

            let Some(c) = self.last_char else {
                return Ok(self.make_token(TokenKind::EOF, start));
            };

            if c.is_ascii_alphabetic() {
                let mut identifier = String::from(c);
                self.read_char()?;

                while let Some(c) = self.last_char.filter(char::is_ascii_alphanumeric) {
                    identifier.push(c);
                    self.read_char()?;
                }

                let kind = match RESERVED_LOOKUP.get(identifier.as_str()) {
                    Some(kind) => kind.clone(),
                    None => TokenKind::Identifier(identifier),
                };

                return Ok(self.make_token(kind, start));
            }

            if c.is_ascii_digit() || c == '.' {
                let mut number = String::new();

                while let Some(c) = self.last_char.filter(|c| c.is_ascii_digit() || *c == '.') {
                    number.push(c);
                    self.read_char()?;
                }

                return Ok(self.make_token(TokenKind::Number(parse_number(&number)), start));
            }

            if c == '#' {
                while !matches!(self.last_char, None | Some('\n') | Some('\r')) {
                    self.read_char()?;
                }

                continue;
            }

            self.read_char()?;
            return Ok(self.make_token(TokenKind::Char(c), start));
        }
    }
}

impl<'a> Lexer<&'a [u8]> {
    pub fn from_source(source: &'a str, file: Option<String>) -> Self {
        Lexer::new(source.as_bytes(), file)
    }
}

/// The C `isspace` class, which includes vertical tab unlike `char::is_ascii_whitespace`.
fn is_space(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\x0b' | '\x0c' | '\r')
}

/// Parses the longest valid float prefix of a digit/'.' run.
///
/// `1.2.3` scans as `1.2`, a lone `.` as `0`.
pub fn parse_number(text: &str) -> f64 {
    NUMBER_PREFIX
        .find(text)
        .and_then(|prefix| prefix.as_str().parse().ok())
        .unwrap_or(0.0)
}

pub fn tokenize(source: &str, file: Option<String>) -> Result<Vec<Token>, Error> {
    let mut lex = Lexer::from_source(source, file);
    let mut tokens = vec![];

    loop {
        let token = lex.next_token()?;
        let done = token.is_eof();
        tokens.push(token);

        if done {
            return Ok(tokens);
        }
    }
}
