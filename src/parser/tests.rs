//! Unit tests for the parser module.
//!
//! This module contains structural tests for the grammar:
//! - Operator precedence and associativity
//! - Function vs. variable disambiguation
//! - Unary minus placement
//! - Error positions and expected-token reporting

use crate::ast::nodes::{BinaryOperator, Node, UnaryOperator};
use crate::errors::errors::ErrorImpl;
use crate::lexer::tokens::TokenKind;
use crate::Position;

use super::parser::Parser;

fn parse(expression: &str) -> Result<Node, crate::errors::errors::Error> {
    Parser::new().parse(expression)
}

fn number(value: f64) -> Node {
    Node::Number(value)
}

fn binary(operator: BinaryOperator, left: Node, right: Node) -> Node {
    Node::BinaryOperator {
        operator,
        left: Box::new(left),
        right: Box::new(right),
    }
}

fn negate(operand: Node) -> Node {
    Node::UnaryOperator {
        operator: UnaryOperator::Negate,
        operand: Box::new(operand),
    }
}

#[test]
fn test_parse_number() {
    assert_eq!(parse("42").unwrap(), number(42.0));
    assert_eq!(parse("3.14").unwrap(), number(3.14));
}

#[test]
fn test_parse_addition() {
    assert_eq!(
        parse("1+2").unwrap(),
        binary(BinaryOperator::Plus, number(1.0), number(2.0))
    );
}

#[test]
fn test_parse_additive_is_left_associative() {
    assert_eq!(
        parse("1-2+3").unwrap(),
        binary(
            BinaryOperator::Plus,
            binary(BinaryOperator::Minus, number(1.0), number(2.0)),
            number(3.0)
        )
    );
}

#[test]
fn test_parse_multiplication_binds_tighter_than_addition() {
    assert_eq!(
        parse("2+3*4").unwrap(),
        binary(
            BinaryOperator::Plus,
            number(2.0),
            binary(BinaryOperator::Multiply, number(3.0), number(4.0))
        )
    );
}

#[test]
fn test_parse_power_is_right_associative() {
    // 2^3^2 is 2^(3^2), not (2^3)^2.
    assert_eq!(
        parse("2^3^2").unwrap(),
        binary(
            BinaryOperator::Power,
            number(2.0),
            binary(BinaryOperator::Power, number(3.0), number(2.0))
        )
    );
}

#[test]
fn test_parse_power_binds_tighter_than_multiplication() {
    assert_eq!(
        parse("2*3^2").unwrap(),
        binary(
            BinaryOperator::Multiply,
            number(2.0),
            binary(BinaryOperator::Power, number(3.0), number(2.0))
        )
    );
}

#[test]
fn test_parse_unary_minus() {
    assert_eq!(
        parse("-3+4").unwrap(),
        binary(BinaryOperator::Plus, negate(number(3.0)), number(4.0))
    );
}

#[test]
fn test_parse_parentheses_override_precedence() {
    assert_eq!(
        parse("(2+3)*4").unwrap(),
        binary(
            BinaryOperator::Multiply,
            binary(BinaryOperator::Plus, number(2.0), number(3.0)),
            number(4.0)
        )
    );
}

#[test]
fn test_parse_unary_minus_inside_parentheses() {
    // Parentheses re-enter the Expression production, so unary minus is
    // allowed again inside them.
    assert_eq!(
        parse("2*(-3+4)").unwrap(),
        binary(
            BinaryOperator::Multiply,
            number(2.0),
            binary(BinaryOperator::Plus, negate(number(3.0)), number(4.0))
        )
    );
}

#[test]
fn test_parse_variable() {
    assert_eq!(parse("x").unwrap(), Node::Variable("x".to_string()));
}

#[test]
fn test_parse_function_call() {
    assert_eq!(
        parse("max(1,2)").unwrap(),
        Node::Function {
            name: "max".to_string(),
            parameters: vec![number(1.0), number(2.0)],
        }
    );
}

#[test]
fn test_identifier_adjacent_to_paren_is_a_function() {
    assert_eq!(
        parse("x(1)").unwrap(),
        Node::Function {
            name: "x".to_string(),
            parameters: vec![number(1.0)],
        }
    );
}

#[test]
fn test_parse_nested_function_call() {
    assert_eq!(
        parse("max(1, min(x, 3))").unwrap(),
        Node::Function {
            name: "max".to_string(),
            parameters: vec![
                number(1.0),
                Node::Function {
                    name: "min".to_string(),
                    parameters: vec![Node::Variable("x".to_string()), number(3.0)],
                },
            ],
        }
    );
}

#[test]
fn test_parse_whitespace_invariance() {
    assert_eq!(parse("1 + 2").unwrap(), parse("1+2").unwrap());
    assert_eq!(parse(" max( 1 , 2 ) ").unwrap(), parse("max(1,2)").unwrap());
}

#[test]
fn test_parse_is_deterministic() {
    let mut parser = Parser::new();

    let first = parser.parse("2 + 3 * max(x, 4)").unwrap();
    let second = parser.parse("2 + 3 * max(x, 4)").unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_parse_missing_closing_parenthesis() {
    let error = parse("(1+2").unwrap_err();

    assert_eq!(
        error.get_kind(),
        &ErrorImpl::UnexpectedToken {
            expected: TokenKind::CloseParen,
            actual: TokenKind::Epsilon,
        }
    );
}

#[test]
fn test_parse_malformed_number() {
    let error = parse("1.2.3").unwrap_err();

    assert_eq!(
        error.get_kind(),
        &ErrorImpl::MalformedNumber {
            literal: "1.2.".to_string()
        }
    );
}

#[test]
fn test_parse_empty_input() {
    let error = parse("").unwrap_err();

    assert_eq!(
        error.get_kind(),
        &ErrorImpl::UnexpectedToken {
            expected: TokenKind::Number,
            actual: TokenKind::Epsilon,
        }
    );
}

#[test]
fn test_parse_rejects_trailing_tokens() {
    let error = parse("1 2").unwrap_err();

    assert_eq!(
        error.get_kind(),
        &ErrorImpl::UnexpectedToken {
            expected: TokenKind::Epsilon,
            actual: TokenKind::Number,
        }
    );
    assert_eq!(error.get_position(), Position(2));
}

#[test]
fn test_parse_modulo_is_not_in_the_grammar() {
    // '%' lexes fine but no production consumes it.
    let error = parse("4%2").unwrap_err();

    assert_eq!(
        error.get_kind(),
        &ErrorImpl::UnexpectedToken {
            expected: TokenKind::Epsilon,
            actual: TokenKind::Modulo,
        }
    );
}

#[test]
fn test_parse_function_with_missing_separator() {
    let error = parse("max(1 2)").unwrap_err();

    assert_eq!(
        error.get_kind(),
        &ErrorImpl::UnexpectedToken {
            expected: TokenKind::CloseParen,
            actual: TokenKind::Number,
        }
    );
}

#[test]
fn test_parse_operator_without_operand() {
    let error = parse("1+*2").unwrap_err();

    assert_eq!(
        error.get_kind(),
        &ErrorImpl::UnexpectedToken {
            expected: TokenKind::Number,
            actual: TokenKind::Multiply,
        }
    );
    assert_eq!(error.get_position(), Position(2));
}
