//! MathTree lexical analyzer
//!
//! This crate turns the text of an arithmetic expression into a stream of
//! tokens for the parser. Recognition is split into independent token
//! matchers (symbols, unsigned numbers, logarithms) that the lexer tries in a
//! fixed order at every position.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod error;
pub mod lexer;
pub mod logos_token;
pub mod matchers;
pub mod numbers;
pub mod token;

// Re-export the main types for convenience
pub use error::LexError;
pub use lexer::{tokenize, ArithmeticLexer, Lexer};
pub use logos_token::SymbolToken;
pub use matchers::{LogarithmMatcher, SymbolMatcher, TokenMatcher, UnsignedNumberMatcher};
pub use token::{Token, TokenType};
