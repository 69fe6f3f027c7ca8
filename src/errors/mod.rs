//! Error types for lexing and parsing.
//!
//! This module defines the errors surfaced to the caller of `parse` and
//! `tokenize`:
//!
//! - Error structure carrying the source position of the failure
//! - Specific error variants for lexical and grammatical failures
//! - Error names and suggestion messages for rendering diagnostics
//!
//! Internal contract violations (a lexer rule consuming nothing, position
//! lookup before scanning) are fatal assertions, not error variants.

pub mod errors;

#[cfg(test)]
mod tests;
