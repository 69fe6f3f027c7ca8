use lazy_static::lazy_static;

use crate::{
    errors::errors::{Error, ErrorImpl},
    Position, MK_SINGLE_CHAR_RULE,
};

use super::{reader::LexerReader, tokens::Token};

pub type RulePredicate = fn(char) -> bool;
pub type RuleMatcher = fn(&mut LexerReader) -> Result<Token, Error>;

/// One lexer rule: a predicate deciding whether the rule applies to the
/// current lookahead character, a weight for priority tie-breaking between
/// overlapping predicates, and a matcher that consumes at least one character
/// and builds the token.
#[derive(Clone, Copy)]
pub struct LexerRule {
    pub weight: i32,
    pub predicate: RulePredicate,
    pub matcher: RuleMatcher,
}

lazy_static! {
    /// The rule set for the arithmetic dialect, built once and shared across
    /// parses.
    pub static ref ARITHMETIC_RULES: LexerRules = LexerRules::arithmetic();
    /// The rule set for the lambda calculus dialect.
    pub static ref LAMBDA_RULES: LexerRules = LexerRules::lambda();
}

#[derive(Clone)]
pub struct LexerRules {
    rules: Vec<LexerRule>,
}

impl LexerRules {
    /// Orders the rules by descending weight; the sort is stable, so rules of
    /// equal weight keep their declaration order.
    pub fn new(mut rules: Vec<LexerRule>) -> LexerRules {
        rules.sort_by(|a, b| b.weight.cmp(&a.weight));
        LexerRules { rules }
    }

    /// Rules for arithmetic expressions. The number rule outweighs the
    /// single-character rules so that `.5` and `5.` scan as numbers.
    pub fn arithmetic() -> LexerRules {
        LexerRules::new(vec![
            LexerRule {
                weight: 30,
                predicate: |c: char| c.is_ascii_digit() || c == '.',
                matcher: scan_number,
            },
            LexerRule {
                weight: 20,
                predicate: |c: char| c.is_ascii_alphabetic(),
                matcher: scan_identifier,
            },
            MK_SINGLE_CHAR_RULE!(10, '-', Token::Minus),
            MK_SINGLE_CHAR_RULE!(10, '+', Token::Plus),
            MK_SINGLE_CHAR_RULE!(10, '*', Token::Multiply),
            MK_SINGLE_CHAR_RULE!(10, '/', Token::Divide),
            MK_SINGLE_CHAR_RULE!(10, '%', Token::Modulo),
            MK_SINGLE_CHAR_RULE!(10, '^', Token::Power),
            MK_SINGLE_CHAR_RULE!(10, '(', Token::OpenParen),
            MK_SINGLE_CHAR_RULE!(10, ')', Token::CloseParen),
            MK_SINGLE_CHAR_RULE!(10, ',', Token::Comma),
            MK_SINGLE_CHAR_RULE!(10, 'λ', Token::Lambda),
            LexerRule {
                weight: 0,
                predicate: |c: char| c.is_whitespace(),
                matcher: scan_whitespace,
            },
        ])
    }

    /// Rules for the lambda calculus dialect. There is no number rule, so a
    /// standalone `.` lexes as the abstraction dot.
    pub fn lambda() -> LexerRules {
        LexerRules::new(vec![
            LexerRule {
                weight: 20,
                predicate: |c: char| c.is_ascii_alphabetic(),
                matcher: scan_identifier,
            },
            MK_SINGLE_CHAR_RULE!(10, 'λ', Token::Lambda),
            MK_SINGLE_CHAR_RULE!(10, '.', Token::Dot),
            MK_SINGLE_CHAR_RULE!(10, '(', Token::OpenParen),
            MK_SINGLE_CHAR_RULE!(10, ')', Token::CloseParen),
            LexerRule {
                weight: 0,
                predicate: |c: char| c.is_whitespace(),
                matcher: scan_whitespace,
            },
        ])
    }

    /// The highest-weighted rule whose predicate accepts `current`.
    pub fn find_rule(&self, current: char) -> Option<&LexerRule> {
        self.rules.iter().find(|rule| (rule.predicate)(current))
    }
}

fn scan_number(reader: &mut LexerReader) -> Result<Token, Error> {
    let start = reader.position();
    let mut literal = String::new();
    let mut decimal_exists = false;

    while let Some(digit) = reader.peek(0) {
        if !digit.is_ascii_digit() && digit != '.' {
            break;
        }

        reader.read();
        literal.push(digit);

        if digit == '.' {
            if decimal_exists {
                return Err(Error::new(
                    ErrorImpl::MalformedNumber { literal },
                    Position(start as u32),
                ));
            }
            decimal_exists = true;
        }
    }

    match literal.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(Token::Number(value)),
        _ => Err(Error::new(
            ErrorImpl::UnparsableNumber { literal },
            Position(start as u32),
        )),
    }
}

fn scan_identifier(reader: &mut LexerReader) -> Result<Token, Error> {
    let mut name = String::new();

    // The leading character is a letter (the predicate saw it); the rest of
    // the run may contain digits.
    while let Some(c) = reader.peek(0) {
        if !c.is_ascii_alphanumeric() {
            break;
        }

        reader.read();
        name.push(c);
    }

    Ok(Token::Identifier(name))
}

fn scan_whitespace(reader: &mut LexerReader) -> Result<Token, Error> {
    while let Some(c) = reader.peek(0) {
        if !c.is_whitespace() {
            break;
        }

        reader.read();
    }

    Ok(Token::Whitespace)
}
