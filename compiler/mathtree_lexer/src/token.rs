//! Token types and the tokens the lexer produces.
//!
//! A [`Token`] pairs its [`TokenType`] with the exact text it was read from.

use std::fmt;

/// Represents the type of a token in an arithmetic expression.
///
/// The set is closed: every token the lexer can produce falls into exactly
/// one of these categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TokenType {
    /// `(`
    OpeningBracket,
    /// `)`
    ClosingBracket,
    /// `+`, binary addition or unary plus
    Plus,
    /// `-`, binary subtraction or unary minus
    Minus,
    /// `*`
    Asterisk,
    /// `/`
    Slash,
    /// `^`
    Caret,
    /// An unsigned number literal such as `42` or `3.14`
    Number,
    /// `sqrt`
    SquareRoot,
    /// `log`, optionally followed by `_<base>`
    Log,
    /// End-of-input sentinel
    Stop,
}

impl TokenType {
    /// Every token type that has a canonical symbol.
    pub const SYMBOLIC: [TokenType; 9] = [
        TokenType::OpeningBracket,
        TokenType::ClosingBracket,
        TokenType::Plus,
        TokenType::Minus,
        TokenType::Asterisk,
        TokenType::Slash,
        TokenType::Caret,
        TokenType::SquareRoot,
        TokenType::Log,
    ];

    /// Returns the canonical symbol used both to emit and to recognise this
    /// token type, or `None` for numbers and the stop sentinel.
    pub const fn symbol(self) -> Option<&'static str> {
        match self {
            TokenType::OpeningBracket => Some("("),
            TokenType::ClosingBracket => Some(")"),
            TokenType::Plus => Some("+"),
            TokenType::Minus => Some("-"),
            TokenType::Asterisk => Some("*"),
            TokenType::Slash => Some("/"),
            TokenType::Caret => Some("^"),
            TokenType::SquareRoot => Some("sqrt"),
            TokenType::Log => Some("log"),
            TokenType::Number | TokenType::Stop => None,
        }
    }

    /// Returns the delimiter separating the symbol from an appended argument.
    ///
    /// Only logarithms have one: `log_2` is the base-2 logarithm.
    pub const fn delimiter(self) -> Option<&'static str> {
        match self {
            TokenType::Log => Some("_"),
            _ => None,
        }
    }
}

impl fmt::Display for TokenType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.symbol() {
            Some(symbol) => write!(f, "'{symbol}'"),
            None if *self == TokenType::Number => f.write_str("number"),
            None => f.write_str("end of input"),
        }
    }
}

/// A token: its type plus the exact text it was matched from.
///
/// Equality is structural, so two tokens are equal when both the type and the
/// lexeme are.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Token {
    /// The type of the token
    pub token_type: TokenType,
    /// The original source text of the token
    pub lexeme: String,
}

impl Token {
    /// Creates a new token.
    pub fn new<S: Into<String>>(token_type: TokenType, lexeme: S) -> Self {
        Self {
            token_type,
            lexeme: lexeme.into(),
        }
    }

    /// Creates the end-of-input sentinel.
    pub fn stop() -> Self {
        Self::new(TokenType::Stop, "")
    }

    /// Returns true if this is the end-of-input sentinel.
    pub fn is_stop(&self) -> bool {
        self.token_type == TokenType::Stop
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_stop() {
            f.write_str("end of input")
        } else {
            write!(f, "'{}'", self.lexeme)
        }
    }
}
