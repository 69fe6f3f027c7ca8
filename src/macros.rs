//! Utility macros for the lexer.
//!
//! This module defines the helper macro used to declare the single-character
//! lexer rules without repeating the same predicate and matcher boilerplate
//! for every operator and punctuation token.

/// Creates a lexer rule for a single-character token.
///
/// The generated predicate accepts exactly `$char` and the matcher consumes
/// that one character and yields `$token`. Both closures capture nothing, so
/// they coerce to the plain function pointers `LexerRule` stores.
///
/// # Example
///
/// ```ignore
/// MK_SINGLE_CHAR_RULE!(10, '+', Token::Plus)
/// ```
#[macro_export]
macro_rules! MK_SINGLE_CHAR_RULE {
    ($weight:expr, $char:literal, $token:expr) => {
        LexerRule {
            weight: $weight,
            predicate: |c: char| c == $char,
            matcher: |reader: &mut LexerReader| {
                reader.read();
                Ok($token)
            },
        }
    };
}
