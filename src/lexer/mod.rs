//! Lexical analysis module for the parser.
//!
//! This module contains the scanner that pulls characters one at a time
//! from a byte source and hands out a token at a time. It handles:
//!
//! - Recognition of the `def` and `extern` keywords and identifiers
//! - Permissive numeric literals
//! - Single-character operator and punctuation tokens
//! - Token position tracking for error reporting
//! - `#` line comments and whitespace handling

pub mod lexer;
pub mod tokens;
