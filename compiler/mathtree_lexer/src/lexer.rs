//! The arithmetic lexer.
//!
//! [`ArithmeticLexer`] walks the input once, skipping whitespace and asking
//! its matchers, in registration order, for the token at the current offset.
//! The first matcher that answers wins.

#[cfg(feature = "logging")]
use log::trace;

use crate::error::LexError;
use crate::matchers::{LogarithmMatcher, SymbolMatcher, TokenMatcher, UnsignedNumberMatcher};
use crate::token::{Token, TokenType};

/// A stateful source of tokens that can be rewound or pointed at new text.
pub trait Lexer {
    /// Returns the next token, or [`TokenType::Stop`] once the input is
    /// exhausted. Calling again after Stop keeps returning Stop.
    fn next_token(&mut self) -> Result<Token, LexError>;

    /// Rewinds the cursor to the start of the current text.
    fn reset(&mut self);

    /// Replaces the text and rewinds the cursor.
    fn reset_with(&mut self, text: String);
}

/// Lexer for arithmetic expressions.
pub struct ArithmeticLexer {
    text: String,
    position: usize,
    matchers: Vec<Box<dyn TokenMatcher>>,
    exhausted: bool,
}

impl ArithmeticLexer {
    /// Creates a lexer over `text` with the standard matchers: symbols first,
    /// then unsigned numbers, then logarithms.
    pub fn new<S: Into<String>>(text: S) -> Self {
        Self::with_matchers(text, Self::standard_matchers())
    }

    /// Creates a lexer with a custom, ordered list of matchers.
    pub fn with_matchers<S: Into<String>>(text: S, matchers: Vec<Box<dyn TokenMatcher>>) -> Self {
        Self {
            text: text.into(),
            position: 0,
            matchers,
            exhausted: false,
        }
    }

    /// The matchers used by [`ArithmeticLexer::new`].
    ///
    /// `log` is left out of the symbol matcher so that the logarithm matcher
    /// sees it and can pick up an explicit `_<base>`.
    pub fn standard_matchers() -> Vec<Box<dyn TokenMatcher>> {
        let symbols = TokenType::SYMBOLIC
            .into_iter()
            .filter(|t| *t != TokenType::Log);
        vec![
            Box::new(SymbolMatcher::new(symbols)),
            Box::new(UnsignedNumberMatcher),
            Box::new(LogarithmMatcher::new()),
        ]
    }

    /// The text being scanned.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The byte offset of the cursor.
    pub fn position(&self) -> usize {
        self.position
    }

    fn skip_whitespace(&mut self) {
        let rest = &self.text[self.position..];
        self.position += rest.len() - rest.trim_start().len();
    }
}

impl Lexer for ArithmeticLexer {
    fn next_token(&mut self) -> Result<Token, LexError> {
        self.skip_whitespace();
        if self.position >= self.text.len() {
            return Ok(Token::stop());
        }

        let start = self.position;
        let matched = self
            .matchers
            .iter()
            .find_map(|matcher| matcher.match_at(&self.text, start));

        match matched {
            Some(token) => {
                self.position += token.lexeme.len();
                #[cfg(feature = "logging")]
                trace!(
                    "lexed {:?} {:?} at {}",
                    token.token_type,
                    token.lexeme,
                    start
                );
                Ok(token)
            }
            None => {
                let symbol = self.text[start..].chars().next().unwrap_or_default();
                #[cfg(feature = "logging")]
                trace!("no matcher for {symbol:?} at {start}");
                Err(LexError::UnrecognisedSymbol {
                    index: start,
                    symbol,
                })
            }
        }
    }

    fn reset(&mut self) {
        self.position = 0;
        self.exhausted = false;
    }

    fn reset_with(&mut self, text: String) {
        self.text = text;
        self.reset();
    }
}

impl Iterator for ArithmeticLexer {
    type Item = Result<Token, LexError>;

    /// Yields tokens up to, but not including, Stop. A lexical error is
    /// yielded once and ends the iteration.
    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted {
            return None;
        }
        match self.next_token() {
            Ok(token) if token.is_stop() => {
                self.exhausted = true;
                None
            }
            Ok(token) => Some(Ok(token)),
            Err(err) => {
                self.exhausted = true;
                Some(Err(err))
            }
        }
    }
}

/// Splits `text` into tokens, excluding the final Stop.
pub fn tokenize(text: &str) -> Result<Vec<Token>, LexError> {
    ArithmeticLexer::new(text).collect()
}
