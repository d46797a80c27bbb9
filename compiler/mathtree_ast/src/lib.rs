//! Expression tree for MathTree arithmetic expressions.
//!
//! This crate defines the nodes a parser builds, their evaluation with
//! domain checks, their fully parenthesised printed form and, with the
//! `serde` feature, a JSON representation.

pub mod ast;
pub mod error;

// Re-export commonly used types
pub use ast::{
    BinaryExpressionNode, BinaryOperator, ExpressionNode, LogarithmNode, NumberNode,
    DEFAULT_LOG_BASE,
};
pub use error::{EvalError, EvalResult};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A result type for serialisation helpers.
#[cfg(feature = "serde")]
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Serializes a tree (or any serialisable value) to pretty JSON.
///
/// # Example
///
/// ```
/// use mathtree_ast::{to_json, ExpressionNode};
///
/// let expr = ExpressionNode::number(42.0).unwrap();
/// let json = to_json(&expr).unwrap();
/// assert!(json.contains(r#""Number": 42.0"#));
/// ```
#[cfg(feature = "serde")]
pub fn to_json<T: Serialize>(value: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

/// Deserializes a tree from JSON.
///
/// Literals and logarithm bases are checked again, so a tree read back this
/// way obeys the same invariants as a parsed one.
#[cfg(feature = "serde")]
pub fn from_json<T: for<'de> Deserialize<'de>>(json: &str) -> Result<T> {
    Ok(serde_json::from_str(json)?)
}
