//! Unit tests for error handling.
//!
//! This module contains tests for error types and error reporting.

use crate::errors::errors::{Error, ErrorImpl, ErrorTip};
use crate::lexer::tokens::TokenKind;
use crate::Position;

#[test]
fn test_error_creation() {
    let error = Error::new(ErrorImpl::UnknownToken { token: '#' }, Position(10));

    assert_eq!(error.get_error_name(), "UnknownToken");
    assert_eq!(error.get_kind(), &ErrorImpl::UnknownToken { token: '#' });
}

#[test]
fn test_error_position() {
    let error = Error::new(
        ErrorImpl::MalformedNumber {
            literal: "1.2.".to_string(),
        },
        Position(42),
    );

    assert_eq!(error.get_position(), Position(42));
}

#[test]
fn test_unexpected_token_error_message() {
    let kind = ErrorImpl::UnexpectedToken {
        expected: TokenKind::CloseParen,
        actual: TokenKind::Epsilon,
    };

    assert_eq!(format!("{}", kind), "expected ')', got end of expression");
}

#[test]
fn test_unknown_token_has_no_tip() {
    let error = Error::new(ErrorImpl::UnknownToken { token: '@' }, Position(0));

    assert!(matches!(error.get_tip(), ErrorTip::None));
}

#[test]
fn test_malformed_number_tip() {
    let error = Error::new(
        ErrorImpl::MalformedNumber {
            literal: "1.2.".to_string(),
        },
        Position(0),
    );

    match error.get_tip() {
        ErrorTip::Suggestion(suggestion) => {
            assert_eq!(
                suggestion,
                "Number `1.2.` contains more than one decimal point"
            );
        }
        ErrorTip::None => panic!("expected a suggestion"),
    }
}

#[test]
fn test_unexpected_token_tip() {
    let error = Error::new(
        ErrorImpl::UnexpectedToken {
            expected: TokenKind::CloseParen,
            actual: TokenKind::Comma,
        },
        Position(3),
    );

    match error.get_tip() {
        ErrorTip::Suggestion(suggestion) => {
            assert_eq!(suggestion, "Expected ')', got ','");
        }
        ErrorTip::None => panic!("expected a suggestion"),
    }
}
