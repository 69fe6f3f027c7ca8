//! Parser module for building an Abstract Syntax Tree.
//!
//! This module contains the recursive descent parser that transforms the
//! token stream into an AST. One method implements one grammar production;
//! every production is resolved with at most one token of lookahead (plus one
//! extra token to tell a function call from a variable), so there is no
//! backtracking.

pub mod parser;

#[cfg(test)]
mod tests;
