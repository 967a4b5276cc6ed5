//! Parser module for building an Abstract Syntax Tree (AST).
//!
//! This module contains the recursive-descent parser that turns the scanner's
//! token stream into AST nodes, one top-level construct at a time. Binary
//! operator chains are parsed by precedence climbing over a configurable
//! precedence table. It handles:
//!
//! - Function definitions (`def`) and external declarations (`extern`)
//! - Top-level expressions, wrapped in anonymous functions
//! - Expression parsing (binary ops, calls, variables, numbers, grouping)
//!
//! Every routine consumes tokens through a one-token lookahead and either
//! returns a complete node or an error; it never backtracks.

pub mod expr;
pub mod lookups;
pub mod parser;
pub mod toplevel;
