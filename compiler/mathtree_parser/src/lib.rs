//! Pratt parser and syntax validator for MathTree arithmetic expressions.
//!
//! [`ArithmeticParser`] turns text into an [`ExpressionNode`] tree, stopping
//! at the first problem. [`validate`] reports every syntax problem of a text
//! at once and is meant to run first.

pub mod arithmetic;
pub mod diagnostics;
pub mod error;
pub mod grammar;
pub mod parselets;
pub mod pratt;
pub mod validator;

// Re-export the main types for convenience
pub use arithmetic::{parse, ArithmeticParser};
pub use diagnostics::Diagnostic;
pub use error::{ParseError, ParseResult};
pub use grammar::{Priority, LOWEST};
pub use mathtree_ast::ExpressionNode;
pub use pratt::{ExpressionParser, PrattParser, MAX_NESTING_DEPTH};
pub use validator::{validate, SyntaxError, SyntaxErrorKind};
