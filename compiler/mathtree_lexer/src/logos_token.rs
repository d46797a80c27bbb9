//! Logos-generated recogniser for the fixed-text symbols of the grammar.

use logos::Logos;

use crate::token::TokenType;

/// Raw symbol recogniser used by [`crate::SymbolMatcher`].
///
/// Only fixed-text tokens live here; numbers and the `log_<base>` form are
/// recognised by their own matchers.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SymbolToken {
    /// `(`
    #[token("(")]
    OpeningBracket,
    /// `)`
    #[token(")")]
    ClosingBracket,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Asterisk,
    /// `/`
    #[token("/")]
    Slash,
    /// `^`
    #[token("^")]
    Caret,
    /// `sqrt`
    #[token("sqrt")]
    SquareRoot,
    /// `log`
    #[token("log")]
    Log,
}

impl From<SymbolToken> for TokenType {
    fn from(token: SymbolToken) -> Self {
        match token {
            SymbolToken::OpeningBracket => TokenType::OpeningBracket,
            SymbolToken::ClosingBracket => TokenType::ClosingBracket,
            SymbolToken::Plus => TokenType::Plus,
            SymbolToken::Minus => TokenType::Minus,
            SymbolToken::Asterisk => TokenType::Asterisk,
            SymbolToken::Slash => TokenType::Slash,
            SymbolToken::Caret => TokenType::Caret,
            SymbolToken::SquareRoot => TokenType::SquareRoot,
            SymbolToken::Log => TokenType::Log,
        }
    }
}
