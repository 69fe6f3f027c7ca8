//! Lexical analysis for expression text.
//!
//! This module converts raw expression text into a stream of positioned
//! tokens for parsing. It handles:
//!
//! - Character-level reading with bounded lookahead
//! - Rule-driven classification with weight-ordered rule selection
//! - Lazy tokenization with whitespace filtering
//! - Eager buffering with parser-facing pop/peek access
//! - Mapping token positions back to line/column pairs

pub mod position;
pub mod reader;
pub mod rules;
pub mod tokenizer;
pub mod tokens;
pub mod walker;
