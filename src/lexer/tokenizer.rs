use crate::{
    errors::errors::{Error, ErrorImpl},
    Position,
};

use super::{
    reader::LexerReader,
    rules::LexerRules,
    tokens::{Lexeme, TokenKind},
};

/// Drives a [`LexerReader`] through a [`LexerRules`] set, producing a lazy
/// sequence of positioned lexemes. Restartable only by calling `scan` again
/// over new input.
pub struct Tokenizer {
    rules: LexerRules,
}

impl Tokenizer {
    pub fn new(rules: LexerRules) -> Tokenizer {
        Tokenizer { rules }
    }

    pub fn scan<'a>(&'a self, expression: &str) -> TokenStream<'a> {
        TokenStream {
            rules: &self.rules,
            reader: LexerReader::new(expression),
        }
    }
}

/// A single-pass, forward-only stream of lexemes. Whitespace tokens are
/// produced by the whitespace rule and filtered here, never yielded.
pub struct TokenStream<'a> {
    rules: &'a LexerRules,
    reader: LexerReader,
}

impl Iterator for TokenStream<'_> {
    type Item = Result<Lexeme, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let current = self.reader.peek(0)?;
            let start = self.reader.position();

            let rule = match self.rules.find_rule(current) {
                Some(rule) => *rule,
                None => {
                    return Some(Err(Error::new(
                        ErrorImpl::UnknownToken { token: current },
                        Position(start as u32),
                    )))
                }
            };

            let token = match (rule.matcher)(&mut self.reader) {
                Ok(token) => token,
                Err(error) => return Some(Err(error)),
            };

            // A matcher that consumes nothing would loop here forever; that
            // is a broken rule, not a malformed expression.
            assert!(
                self.reader.position() > start,
                "lexer rule consumed no input at position {}",
                start
            );

            if token.kind() != TokenKind::Whitespace {
                return Some(Ok(Lexeme::new(token, Position(start as u32))));
            }
        }
    }
}
