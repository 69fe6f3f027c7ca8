use crate::{errors::errors::Error, LinePosition};

use super::{
    position::LinePositionCalculator,
    tokenizer::Tokenizer,
    tokens::{Lexeme, TokenKind},
};

/// A buffered walker over the lexeme sequence. `scan` drains the tokenizer
/// eagerly so that the parser's lookahead operations are simple index reads.
pub struct TokenWalker {
    tokenizer: Tokenizer,
    lexems: Vec<Lexeme>,
    position_calculator: Option<LinePositionCalculator>,
    current_index: usize,
}

impl TokenWalker {
    pub fn new(tokenizer: Tokenizer) -> TokenWalker {
        TokenWalker {
            tokenizer,
            lexems: vec![],
            position_calculator: None,
            current_index: 0,
        }
    }

    /// Tokenizes `expression` into the internal buffer and resets the read
    /// index. Must be called before `pop`, `peek` or position calculation;
    /// the previous buffer is discarded.
    pub fn scan(&mut self, expression: &str) -> Result<(), Error> {
        self.current_index = 0;
        self.position_calculator = Some(LinePositionCalculator::new(expression));
        self.lexems = self
            .tokenizer
            .scan(expression)
            .collect::<Result<Vec<Lexeme>, Error>>()?;

        Ok(())
    }

    /// Returns the lexeme at the current index and advances. At or past the
    /// end of the buffer this returns the epsilon lexeme without advancing,
    /// so repeated pops at the end are idempotent.
    pub fn pop(&mut self) -> Lexeme {
        if !self.valid_token(0) {
            return Lexeme::epsilon();
        }

        let lexeme = self.lexems[self.current_index].clone();
        self.current_index += 1;
        lexeme
    }

    /// Returns the lexeme `look_ahead` positions ahead without consuming it.
    pub fn peek(&self, look_ahead: usize) -> Lexeme {
        if !self.valid_token(look_ahead) {
            return Lexeme::epsilon();
        }

        self.lexems[self.current_index + look_ahead].clone()
    }

    pub fn next_is(&self, kind: TokenKind, look_ahead: usize) -> bool {
        self.peek(look_ahead).token.kind() == kind
    }

    /// Maps a lexeme back to its line and column. Calling this before `scan`
    /// is a caller bug and panics.
    pub fn calculate_line_position(&self, lexeme: &Lexeme) -> LinePosition {
        self.position_calculator
            .as_ref()
            .expect("Call scan first before you try to calculate a position")
            .calculate(lexeme.position)
    }

    fn valid_token(&self, look_ahead: usize) -> bool {
        self.current_index + look_ahead < self.lexems.len()
    }
}
