/// A character-level cursor over the expression text with bounded forward
/// lookahead. The reader has no lexical knowledge; absence of a character is
/// represented with `None`, never an error.
pub struct LexerReader {
    expression: Vec<char>,
    position: usize,
}

impl LexerReader {
    pub fn new(expression: &str) -> LexerReader {
        LexerReader {
            expression: expression.chars().collect(),
            position: 0,
        }
    }

    /// The current character offset. Monotonically non-decreasing.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Returns the character `look_ahead` positions ahead without advancing.
    pub fn peek(&self, look_ahead: usize) -> Option<char> {
        self.expression.get(self.position + look_ahead).copied()
    }

    /// Returns the current character and advances by one. Past the end of
    /// the input this returns `None` and the position stays put.
    pub fn read(&mut self) -> Option<char> {
        let result = self.peek(0);
        if result.is_some() {
            self.position += 1;
        }

        result
    }
}
