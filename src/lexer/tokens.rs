use std::fmt::Display;

use crate::Position;

/// A classified lexical unit. Tokens are immutable value objects; the
/// `Whitespace` token only exists inside the tokenizer and is filtered out
/// before lexemes are yielded.
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    Number(f64),
    Identifier(String),

    Minus,
    Plus,
    Multiply,
    Divide,
    Modulo,
    Power,

    OpenParen,
    CloseParen,
    Comma,

    Lambda,
    Dot,

    Whitespace,

    /// Signifies the end of the input.
    Epsilon,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Number,
    Identifier,

    Minus,
    Plus,
    Multiply,
    Divide,
    Modulo,
    Power,

    OpenParen,
    CloseParen,
    Comma,

    Lambda,
    Dot,

    Whitespace,
    Epsilon,
}

impl Token {
    pub fn kind(&self) -> TokenKind {
        match self {
            Token::Number(_) => TokenKind::Number,
            Token::Identifier(_) => TokenKind::Identifier,
            Token::Minus => TokenKind::Minus,
            Token::Plus => TokenKind::Plus,
            Token::Multiply => TokenKind::Multiply,
            Token::Divide => TokenKind::Divide,
            Token::Modulo => TokenKind::Modulo,
            Token::Power => TokenKind::Power,
            Token::OpenParen => TokenKind::OpenParen,
            Token::CloseParen => TokenKind::CloseParen,
            Token::Comma => TokenKind::Comma,
            Token::Lambda => TokenKind::Lambda,
            Token::Dot => TokenKind::Dot,
            Token::Whitespace => TokenKind::Whitespace,
            Token::Epsilon => TokenKind::Epsilon,
        }
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let description = match self {
            TokenKind::Number => "number",
            TokenKind::Identifier => "identifier",
            TokenKind::Minus => "'-'",
            TokenKind::Plus => "'+'",
            TokenKind::Multiply => "'*'",
            TokenKind::Divide => "'/'",
            TokenKind::Modulo => "'%'",
            TokenKind::Power => "'^'",
            TokenKind::OpenParen => "'('",
            TokenKind::CloseParen => "')'",
            TokenKind::Comma => "','",
            TokenKind::Lambda => "'λ'",
            TokenKind::Dot => "'.'",
            TokenKind::Whitespace => "whitespace",
            TokenKind::Epsilon => "end of expression",
        };

        write!(f, "{}", description)
    }
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Token::Number(value) => write!(f, "{}", value),
            Token::Identifier(name) => write!(f, "{}", name),
            token => write!(f, "{}", token.kind()),
        }
    }
}

/// A token paired with the position at which its scan began.
#[derive(Debug, Clone, PartialEq)]
pub struct Lexeme {
    pub token: Token,
    pub position: Position,
}

impl Lexeme {
    pub fn new(token: Token, position: Position) -> Self {
        Lexeme { token, position }
    }

    /// The synthetic end-of-stream lexeme returned once the walker has run
    /// past its last buffered token.
    pub fn epsilon() -> Self {
        Lexeme {
            token: Token::Epsilon,
            position: Position(0),
        }
    }
}
