//! Token matchers.
//!
//! Each matcher tries to recognise one kind of token starting exactly at a
//! given offset. Matchers are stateless apart from their fixed configuration
//! and never produce partial tokens: either the token fits from the offset or
//! nothing is returned.

use logos::Logos;

use crate::logos_token::SymbolToken;
use crate::numbers::leading_unsigned;
use crate::token::{Token, TokenType};

/// Responsible for constructing a token from a string at a given offset.
pub trait TokenMatcher {
    /// Returns the token starting at byte offset `start` of `source`, or
    /// `None` if this matcher cannot build one there.
    fn match_at(&self, source: &str, start: usize) -> Option<Token>;
}

/// Matches the canonical symbols of a fixed set of token types.
#[derive(Debug, Clone)]
pub struct SymbolMatcher {
    token_types: Vec<TokenType>,
}

impl SymbolMatcher {
    /// Creates a matcher for the given token types.
    ///
    /// Types without a canonical symbol (numbers, the stop sentinel) can never
    /// match and are ignored.
    pub fn new<I: IntoIterator<Item = TokenType>>(token_types: I) -> Self {
        Self {
            token_types: token_types
                .into_iter()
                .filter(|t| t.symbol().is_some())
                .collect(),
        }
    }

    /// Returns the token types this matcher recognises.
    pub fn token_types(&self) -> &[TokenType] {
        &self.token_types
    }
}

impl TokenMatcher for SymbolMatcher {
    fn match_at(&self, source: &str, start: usize) -> Option<Token> {
        let rest = source.get(start..)?;
        let mut lexer = SymbolToken::lexer(rest);
        let token_type = TokenType::from(lexer.next()?.ok()?);
        if lexer.span().start != 0 || !self.token_types.contains(&token_type) {
            return None;
        }
        Some(Token::new(token_type, lexer.slice()))
    }
}

/// Matches unsigned decimal numbers with at most one decimal point.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnsignedNumberMatcher;

impl TokenMatcher for UnsignedNumberMatcher {
    fn match_at(&self, source: &str, start: usize) -> Option<Token> {
        let number = leading_unsigned(source.get(start..)?)?;
        Some(Token::new(TokenType::Number, number))
    }
}

/// Matches `log` and `log_<number>`.
///
/// When `log_` is not followed by a valid number only the bare `log` is
/// matched and the base defaults to 10 later on.
#[derive(Debug, Clone)]
pub struct LogarithmMatcher {
    symbol_matcher: SymbolMatcher,
    number_matcher: UnsignedNumberMatcher,
}

impl LogarithmMatcher {
    /// Creates a logarithm matcher.
    pub fn new() -> Self {
        Self {
            symbol_matcher: SymbolMatcher::new([TokenType::Log]),
            number_matcher: UnsignedNumberMatcher,
        }
    }
}

impl Default for LogarithmMatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl TokenMatcher for LogarithmMatcher {
    fn match_at(&self, source: &str, start: usize) -> Option<Token> {
        let log = self.symbol_matcher.match_at(source, start)?;
        let Some(delimiter) = TokenType::Log.delimiter() else {
            return Some(log);
        };

        let delimiter_start = start + log.lexeme.len();
        let has_delimiter = source
            .get(delimiter_start..)
            .is_some_and(|rest| rest.starts_with(delimiter));
        if !has_delimiter {
            return Some(log);
        }

        match self
            .number_matcher
            .match_at(source, delimiter_start + delimiter.len())
        {
            Some(base) => Some(Token::new(
                TokenType::Log,
                format!("{}{}{}", log.lexeme, delimiter, base.lexeme),
            )),
            None => Some(log),
        }
    }
}
