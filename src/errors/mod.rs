//! Error types and error handling for the parser.
//!
//! This module defines the error types used by the scanner, the parser and
//! the driver loop. It includes:
//!
//! - Error structures with source position information
//! - Specific error variants for structural parse failures
//! - Error formatting and display functionality
//! - Helpful error messages and suggestions

pub mod errors;
