//! Errors raised while tokenising an expression.

use thiserror::Error;

/// A fatal lexical error. Scanning stops at the first one.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexError {
    /// A non-whitespace character that no token matcher accepts.
    #[error("unrecognised symbol '{symbol}' at index {index}")]
    UnrecognisedSymbol {
        /// Byte offset of the offending character
        index: usize,
        /// The offending character
        symbol: char,
    },
}

impl LexError {
    /// Returns the byte offset the error refers to.
    pub fn index(&self) -> usize {
        match self {
            LexError::UnrecognisedSymbol { index, .. } => *index,
        }
    }
}
