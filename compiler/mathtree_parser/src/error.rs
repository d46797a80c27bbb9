//! Errors raised while parsing an expression.

use mathtree_ast::EvalError;
use mathtree_lexer::{LexError, Token};
use thiserror::Error;

/// A fatal parse failure.
///
/// The parser stops at the first problem. Run the validator first to get
/// every syntax problem of an input at once.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseError {
    /// The lexer met a character no matcher accepts.
    #[error(transparent)]
    Lex(#[from] LexError),

    /// A token that cannot start an expression.
    #[error("expected a prefix parselet for {0}")]
    MissingPrefixParselet(Token),

    /// A group was not closed where it should have been.
    #[error("expected a closing bracket, found {0}")]
    MissingClosingBracket(Token),

    /// Tokens left over after a complete expression.
    #[error("unexpected {0} after the end of the expression")]
    TrailingInput(Token),

    /// A `log_` token whose base is not a number.
    #[error("cannot read a logarithm base from \"{0}\"")]
    InvalidLogarithmBase(String),

    /// Brackets, signs, functions or operators nested past the parser's
    /// limit.
    #[error("expression nested deeper than {limit} levels")]
    NestingTooDeep {
        /// The nesting limit that was exceeded.
        limit: usize,
    },

    /// A node could not be built, e.g. a literal overflowed.
    #[error(transparent)]
    Domain(#[from] EvalError),
}

/// Result of a parse.
pub type ParseResult<T> = Result<T, ParseError>;
