//! Utility macros for the scanner.
//!
//! This module defines helper macros used by the lexer:
//!
//! - `MK_TOKEN!` - Creates a Token instance
//! - `MK_SPAN!` - Creates a Span between two byte offsets of one source
//!
//! These macros reduce boilerplate in the lexer implementation.

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$kind` - The TokenKind
/// * `$span` - The source span
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::Number(42.0), span);
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $span:expr) => {
        Token {
            kind: $kind,
            span: $span,
        }
    };
}

/// Creates a Span between two byte offsets of the same source.
///
/// # Arguments
///
/// * `$start` - Offset of the first byte
/// * `$end` - Offset one past the last byte
/// * `$file` - `Rc<String>` naming the source
///
/// # Example
///
/// ```ignore
/// let span = MK_SPAN!(0, 3, lexer.file);
/// ```
#[macro_export]
macro_rules! MK_SPAN {
    ($start:expr, $end:expr, $file:expr) => {
        Span {
            start: Position($start, Rc::clone(&$file)),
            end: Position($end, Rc::clone(&$file)),
        }
    };
}
