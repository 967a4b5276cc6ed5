use std::fmt::Display;

use thiserror::Error;

use crate::Position;

#[derive(Debug, Clone, PartialEq)]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_inner(&self) -> &ErrorImpl {
        &self.internal_error
    }

    /// Read failures on the character source are the only errors the driver
    /// cannot recover from by skipping a token.
    pub fn is_fatal(&self) -> bool {
        matches!(self.internal_error, ErrorImpl::Io { .. })
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnexpectedToken { .. } => "UnexpectedToken",
            ErrorImpl::ExpectedClosingParen { .. } => "ExpectedClosingParen",
            ErrorImpl::ExpectedArgumentSeparator { .. } => "ExpectedArgumentSeparator",
            ErrorImpl::ExpectedFunctionName { .. } => "ExpectedFunctionName",
            ErrorImpl::ExpectedPrototypeOpenParen { .. } => "ExpectedPrototypeOpenParen",
            ErrorImpl::ExpectedPrototypeCloseParen { .. } => "ExpectedPrototypeCloseParen",
            ErrorImpl::InvalidPrecedence { .. } => "InvalidPrecedence",
            ErrorImpl::Io { .. } => "Io",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnexpectedToken { token } => ErrorTip::Suggestion(format!(
                "unknown token `{}` when expecting an expression",
                token
            )),
            ErrorImpl::ExpectedClosingParen { token } => {
                ErrorTip::Suggestion(format!("expected `)`, found `{}`", token))
            }
            ErrorImpl::ExpectedArgumentSeparator { token } => ErrorTip::Suggestion(format!(
                "expected `)` or `,` in argument list, found `{}`",
                token
            )),
            ErrorImpl::ExpectedFunctionName { token } => ErrorTip::Suggestion(format!(
                "expected function name in prototype, found `{}`",
                token
            )),
            ErrorImpl::ExpectedPrototypeOpenParen { token } => ErrorTip::Suggestion(format!(
                "expected `(` in prototype, found `{}`",
                token
            )),
            ErrorImpl::ExpectedPrototypeCloseParen { token } => ErrorTip::Suggestion(format!(
                "expected `)` in prototype, found `{}`",
                token
            )),
            ErrorImpl::InvalidPrecedence { binding } => ErrorTip::Suggestion(format!(
                "`{}` is not a valid binding, use `<op>=<precedence>` with a positive precedence",
                binding
            )),
            ErrorImpl::Io { .. } => ErrorTip::None,
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} at {}@{}", self.internal_error, self.position.1, self.position.0)
    }
}

impl std::error::Error for Error {}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ErrorImpl {
    #[error("unknown token when expecting an expression: {token:?}")]
    UnexpectedToken { token: String },
    #[error("expected ')': {token:?}")]
    ExpectedClosingParen { token: String },
    #[error("expected ')' or ',' in argument list: {token:?}")]
    ExpectedArgumentSeparator { token: String },
    #[error("expected function name in prototype: {token:?}")]
    ExpectedFunctionName { token: String },
    #[error("expected '(' in prototype: {token:?}")]
    ExpectedPrototypeOpenParen { token: String },
    #[error("expected ')' in prototype: {token:?}")]
    ExpectedPrototypeCloseParen { token: String },
    #[error("invalid operator precedence binding: {binding:?}")]
    InvalidPrecedence { binding: String },
    #[error("failed to read source: {message}")]
    Io { message: String },
}
