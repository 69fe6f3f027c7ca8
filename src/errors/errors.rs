use std::fmt::Display;

use thiserror::Error;

use crate::{lexer::tokens::TokenKind, Position};

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

    pub fn get_position(&self) -> Position {
        self.position
    }

    pub fn get_kind(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnknownToken { .. } => "UnknownToken",
            ErrorImpl::MalformedNumber { .. } => "MalformedNumber",
            ErrorImpl::UnparsableNumber { .. } => "UnparsableNumber",
            ErrorImpl::UnexpectedToken { .. } => "UnexpectedToken",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnknownToken { .. } => ErrorTip::None,
            ErrorImpl::MalformedNumber { literal } => ErrorTip::Suggestion(format!(
                "Number `{}` contains more than one decimal point",
                literal
            )),
            ErrorImpl::UnparsableNumber { literal } => {
                ErrorTip::Suggestion(format!("`{}` is not a valid real number", literal))
            }
            ErrorImpl::UnexpectedToken { expected, actual } => {
                ErrorTip::Suggestion(format!("Expected {}, got {}", expected, actual))
            }
        }
    }
}

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
    #[error("unknown token: {token:?}")]
    UnknownToken { token: char },
    #[error("multiple decimal points in number: {literal:?}")]
    MalformedNumber { literal: String },
    #[error("could not parse number: {literal:?}")]
    UnparsableNumber { literal: String },
    #[error("expected {expected}, got {actual}")]
    UnexpectedToken {
        expected: TokenKind,
        actual: TokenKind,
    },
}
