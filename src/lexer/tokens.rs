use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

use crate::Span;

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("def", TokenKind::Def);
        map.insert("extern", TokenKind::Extern);
        map
    };
}

/// Token kinds produced by the scanner.
///
/// Anything the scanner does not recognise as a keyword, identifier or number
/// surfaces verbatim as `Char`, which is how operators and punctuation reach
/// the parser.
#[derive(Debug, PartialEq, Clone)]
pub enum TokenKind {
    EOF,
    Def,
    Extern,
    Identifier(String),
    Number(f64),
    Char(char),
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TokenKind::EOF => write!(f, "EOF"),
            TokenKind::Def => write!(f, "def"),
            TokenKind::Extern => write!(f, "extern"),
            TokenKind::Identifier(name) => write!(f, "{}", name),
            TokenKind::Number(value) => write!(f, "{}", value),
            TokenKind::Char(c) => write!(f, "{}", c),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

impl Token {
    pub fn is_char(&self, c: char) -> bool {
        self.kind == TokenKind::Char(c)
    }

    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::EOF
    }
}
