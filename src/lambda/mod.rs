//! Parser for the lambda calculus dialect.
//!
//! Reuses the lexer infrastructure with its own rule set (no numbers, `λ`
//! and `.` as tokens) and produces its own closed set of node variants with
//! a matching visitor contract.

pub mod nodes;
pub mod parser;
pub mod visitor;
