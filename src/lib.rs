//! A parsing front end for arithmetic expressions.
//!
//! The pipeline has three stages: a rule-driven lexer classifies characters
//! into tokens, a buffered token walker gives the parser bounded lookahead
//! with source-position tracking, and a recursive descent parser builds an
//! abstract syntax tree that downstream visitors consume.
//!
//! The `lambda` module parses a lambda calculus dialect with the same lexer
//! infrastructure.

#![allow(clippy::module_inception)]

use crate::{
    ast::nodes::Node,
    errors::errors::{Error, ErrorTip},
    lexer::{rules::ARITHMETIC_RULES, tokenizer::Tokenizer, tokens::Lexeme},
    parser::parser::Parser,
};

pub mod ast;
pub mod errors;
pub mod lambda;
pub mod lexer;
pub mod macros;
pub mod parser;

/// An absolute character offset into the expression being parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position(pub u32);

/// A 1-based line and column pair derived from a [`Position`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LinePosition {
    pub line: usize,
    pub column: usize,
}

/// Parses an arithmetic expression into its AST root.
pub fn parse(expression: &str) -> Result<Node, Error> {
    Parser::new().parse(expression)
}

/// Tokenizes an arithmetic expression, for diagnostic tooling.
pub fn tokenize(expression: &str) -> Result<Vec<Lexeme>, Error> {
    Tokenizer::new(ARITHMETIC_RULES.clone())
        .scan(expression)
        .collect()
}

pub fn get_line_at_position(source: &str, position: u32) -> (usize, String, usize) {
    let pos = position as usize;

    let mut start = 0;
    let mut line_number = 1;
    let mut last_line = (1, String::new(), 0);

    for line in source.split_inclusive('\n') {
        let end = start + line.chars().count();

        if (start..end).contains(&pos) {
            let line_pos = pos - start;
            return (line_number, line.to_string(), line_pos);
        }

        last_line = (line_number, line.to_string(), end - start);
        start = end;
        line_number += 1;
    }

    // An offset at or past the end of the source (an empty expression, or
    // an error at the end-of-expression sentinel) points just past the last
    // line.
    last_line
}

pub fn display_error(error: &Error, source: &str) {
    /*
        Error: message
          |
        2 | 1 + #
          | ----^
    */

    let position = error.get_position();
    let (line, line_text, line_pos) = get_line_at_position(source, position.0);

    let line_string = line.to_string();
    let padding = line_string.len() + 2;

    if let ErrorTip::None = error.get_tip() {
        println!("Error: {}", error.get_error_name());
    } else {
        println!("Error: {} ({})", error.get_error_name(), error.get_tip());
    }
    println!("{:>padding$}", "|");

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(&line_text);
    println!("{} | {}", line_string, line_text_removed.trim());

    // The error can sit inside the stripped indentation (end-of-expression
    // errors carry offset 0), so the caret column saturates at the line start.
    let arrows = line_pos.saturating_sub(removed_whitespace) + 1;

    println!("{:>padding$} {:->arrows$}", "|", "^");
}

fn remove_starting_whitespace(string: &str) -> (String, usize) {
    let mut start = 0;
    for c in string.chars() {
        if c == ' ' {
            start += 1;
        } else {
            break;
        }
    }

    (String::from(&string[start..]), start)
}
