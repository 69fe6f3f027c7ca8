//! Recursive descent parser for arithmetic expressions with real numbers,
//! implementing the following grammar in EBNF:
//!
//! ```text
//! Expression := [ "-" ] Term { ("+" | "-") Term }
//! Term       := PowerTerm { ("*" | "/") PowerTerm }
//! PowerTerm  := Factor { "^" Factor }
//! Factor     := RealNumber | "(" Expression ")" | Function | Variable
//! Function   := Identifier "(" Expression { "," Expression } ")"
//! Variable   := Identifier
//! ```
//!
//! Operator precedence, lowest to highest: unary minus, additive,
//! multiplicative, power, primary. The power operator is right-associative.

use crate::{
    ast::nodes::{BinaryOperator, Node, UnaryOperator},
    errors::errors::{Error, ErrorImpl},
    lexer::{
        rules::{LexerRules, ARITHMETIC_RULES},
        tokenizer::Tokenizer,
        tokens::{Lexeme, Token, TokenKind},
        walker::TokenWalker,
    },
};

/// The recursive descent parser. Holds the token walker for the current
/// parse; the lexer rule set it was built with is reused across parses.
pub struct Parser {
    walker: TokenWalker,
}

impl Parser {
    /// Creates a parser over the shared arithmetic rule set.
    pub fn new() -> Parser {
        Parser::with_rules(ARITHMETIC_RULES.clone())
    }

    /// Wires the full object tree explicitly: rule set into tokenizer into
    /// walker. There is no hidden global state beyond the rule statics.
    pub fn with_rules(rules: LexerRules) -> Parser {
        Parser {
            walker: TokenWalker::new(Tokenizer::new(rules)),
        }
    }

    /// Parses an expression into its AST root.
    ///
    /// Every error aborts the whole parse and is surfaced immediately; there
    /// is no recovery or partial result.
    pub fn parse(&mut self, expression: &str) -> Result<Node, Error> {
        self.walker.scan(expression)?;

        let root = self.parse_expression()?;
        self.consume(TokenKind::Epsilon)?;

        Ok(root)
    }

    /// Expression := [ "-" ] Term { ("+" | "-") Term }
    ///
    /// Unary minus binds only at the start of a full expression; a
    /// parenthesized subexpression re-enters this production and permits it
    /// again.
    fn parse_expression(&mut self) -> Result<Node, Error> {
        let mut result = if self.walker.next_is(TokenKind::Minus, 0) {
            self.walker.pop();
            Node::UnaryOperator {
                operator: UnaryOperator::Negate,
                operand: Box::new(self.parse_term()?),
            }
        } else {
            self.parse_term()?
        };

        loop {
            let operator = if self.walker.next_is(TokenKind::Plus, 0) {
                BinaryOperator::Plus
            } else if self.walker.next_is(TokenKind::Minus, 0) {
                BinaryOperator::Minus
            } else {
                break;
            };

            self.walker.pop();
            result = Node::BinaryOperator {
                operator,
                left: Box::new(result),
                right: Box::new(self.parse_term()?),
            };
        }

        Ok(result)
    }

    /// Term := PowerTerm { ("*" | "/") PowerTerm }
    fn parse_term(&mut self) -> Result<Node, Error> {
        let mut result = self.parse_power_term()?;

        loop {
            let operator = if self.walker.next_is(TokenKind::Multiply, 0) {
                BinaryOperator::Multiply
            } else if self.walker.next_is(TokenKind::Divide, 0) {
                BinaryOperator::Divide
            } else {
                break;
            };

            self.walker.pop();
            result = Node::BinaryOperator {
                operator,
                left: Box::new(result),
                right: Box::new(self.parse_power_term()?),
            };
        }

        Ok(result)
    }

    /// PowerTerm := Factor { "^" Factor }
    ///
    /// Exponentiation nests to the right: `2^3^2` is `2^(3^2)`. A left fold
    /// over the repetition would get this wrong, so the exponent recurses
    /// into this production instead.
    fn parse_power_term(&mut self) -> Result<Node, Error> {
        let base = self.parse_factor()?;

        if !self.walker.next_is(TokenKind::Power, 0) {
            return Ok(base);
        }

        self.walker.pop();
        let exponent = self.parse_power_term()?;

        Ok(Node::BinaryOperator {
            operator: BinaryOperator::Power,
            left: Box::new(base),
            right: Box::new(exponent),
        })
    }

    /// Factor := RealNumber | "(" Expression ")" | Function | Variable
    ///
    /// An identifier immediately followed by an opening parenthesis is a
    /// function call; any other identifier is a variable. This is the one
    /// place needing a second token of lookahead.
    fn parse_factor(&mut self) -> Result<Node, Error> {
        let lexeme = self.walker.peek(0);

        match &lexeme.token {
            Token::Number(_) => self.parse_number(),
            Token::OpenParen => {
                self.walker.pop();
                let expression = self.parse_expression()?;
                self.consume(TokenKind::CloseParen)?;
                Ok(expression)
            }
            Token::Identifier(_) => {
                if self.walker.next_is(TokenKind::OpenParen, 1) {
                    self.parse_function()
                } else {
                    self.parse_variable()
                }
            }
            token => Err(Error::new(
                ErrorImpl::UnexpectedToken {
                    expected: TokenKind::Number,
                    actual: token.kind(),
                },
                lexeme.position,
            )),
        }
    }

    /// Function := Identifier "(" Expression { "," Expression } ")"
    fn parse_function(&mut self) -> Result<Node, Error> {
        let name = self.consume_identifier()?;
        self.consume(TokenKind::OpenParen)?;

        let mut parameters = vec![self.parse_expression()?];
        while self.walker.next_is(TokenKind::Comma, 0) {
            self.walker.pop();
            parameters.push(self.parse_expression()?);
        }

        self.consume(TokenKind::CloseParen)?;

        Ok(Node::Function { name, parameters })
    }

    /// Variable := Identifier
    fn parse_variable(&mut self) -> Result<Node, Error> {
        Ok(Node::Variable(self.consume_identifier()?))
    }

    fn parse_number(&mut self) -> Result<Node, Error> {
        let lexeme = self.walker.pop();

        match lexeme.token {
            Token::Number(value) => Ok(Node::Number(value)),
            token => Err(Error::new(
                ErrorImpl::UnexpectedToken {
                    expected: TokenKind::Number,
                    actual: token.kind(),
                },
                lexeme.position,
            )),
        }
    }

    /// Pops the next lexeme and checks its kind against `expected`. Running
    /// into the end of the input pops the epsilon lexeme, so it is reported
    /// as an ordinary kind mismatch with `actual` being end-of-expression.
    fn consume(&mut self, expected: TokenKind) -> Result<Lexeme, Error> {
        let lexeme = self.walker.pop();

        if lexeme.token.kind() != expected {
            return Err(Error::new(
                ErrorImpl::UnexpectedToken {
                    expected,
                    actual: lexeme.token.kind(),
                },
                lexeme.position,
            ));
        }

        Ok(lexeme)
    }

    fn consume_identifier(&mut self) -> Result<String, Error> {
        let lexeme = self.walker.pop();

        match lexeme.token {
            Token::Identifier(name) => Ok(name),
            token => Err(Error::new(
                ErrorImpl::UnexpectedToken {
                    expected: TokenKind::Identifier,
                    actual: token.kind(),
                },
                lexeme.position,
            )),
        }
    }
}

impl Default for Parser {
    fn default() -> Self {
        Parser::new()
    }
}
