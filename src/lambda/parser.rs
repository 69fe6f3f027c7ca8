//! Recursive descent parser for lambda calculus terms:
//!
//! ```text
//! Term        := Application | "λ" Identifier "." Term
//! Application := Atom { Atom }
//! Atom        := Identifier | "(" Term ")"
//! ```
//!
//! Application is left-associative: `x y z` is `(x y) z`.

use crate::{
    errors::errors::{Error, ErrorImpl},
    lexer::{
        rules::{LexerRules, LAMBDA_RULES},
        tokenizer::Tokenizer,
        tokens::{Token, TokenKind},
        walker::TokenWalker,
    },
};

use super::nodes::LambdaExpression;

pub struct LambdaParser {
    walker: TokenWalker,
}

impl LambdaParser {
    pub fn new() -> LambdaParser {
        LambdaParser::with_rules(LAMBDA_RULES.clone())
    }

    pub fn with_rules(rules: LexerRules) -> LambdaParser {
        LambdaParser {
            walker: TokenWalker::new(Tokenizer::new(rules)),
        }
    }

    pub fn parse(&mut self, expression: &str) -> Result<LambdaExpression, Error> {
        self.walker.scan(expression)?;

        let root = self.parse_term()?;
        self.consume(TokenKind::Epsilon)?;

        Ok(root)
    }

    /// Term := Application | "λ" Identifier "." Term
    fn parse_term(&mut self) -> Result<LambdaExpression, Error> {
        if !self.walker.next_is(TokenKind::Lambda, 0) {
            return self.parse_application();
        }

        self.walker.pop();
        let parameter = self.consume_identifier()?;
        self.consume(TokenKind::Dot)?;
        let body = self.parse_term()?;

        Ok(LambdaExpression::Abstraction {
            parameter,
            body: Box::new(body),
        })
    }

    /// Application := Atom { Atom }
    fn parse_application(&mut self) -> Result<LambdaExpression, Error> {
        let mut result = self.parse_atom()?;

        while self.walker.next_is(TokenKind::Identifier, 0)
            || self.walker.next_is(TokenKind::OpenParen, 0)
        {
            let argument = self.parse_atom()?;
            result = LambdaExpression::Application {
                function: Box::new(result),
                argument: Box::new(argument),
            };
        }

        Ok(result)
    }

    /// Atom := Identifier | "(" Term ")"
    fn parse_atom(&mut self) -> Result<LambdaExpression, Error> {
        let lexeme = self.walker.peek(0);

        match &lexeme.token {
            Token::Identifier(_) => Ok(LambdaExpression::Variable(self.consume_identifier()?)),
            Token::OpenParen => {
                self.walker.pop();
                let term = self.parse_term()?;
                self.consume(TokenKind::CloseParen)?;
                Ok(term)
            }
            token => Err(Error::new(
                ErrorImpl::UnexpectedToken {
                    expected: TokenKind::Identifier,
                    actual: token.kind(),
                },
                lexeme.position,
            )),
        }
    }

    fn consume(&mut self, expected: TokenKind) -> Result<(), Error> {
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

        Ok(())
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

impl Default for LambdaParser {
    fn default() -> Self {
        LambdaParser::new()
    }
}
