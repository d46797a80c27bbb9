//! Domain errors raised while building or evaluating an expression tree.

use thiserror::Error;

/// A mathematically undefined or non-real operation.
///
/// These are fatal for the evaluation that raised them but leave the tree
/// untouched, so the same tree can still be printed or inspected.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EvalError {
    /// Division by exactly zero.
    #[error("division by zero")]
    DivisionByZero,

    /// `0^0` or zero raised to a negative power.
    #[error("{base}^{exponent} is undefined")]
    UndefinedPower {
        /// The base of the power
        base: f64,
        /// The exponent of the power
        exponent: f64,
    },

    /// A negative base raised to a non-integer power.
    #[error("{base}^{exponent} is not a real number")]
    NonRealPower {
        /// The base of the power
        base: f64,
        /// The exponent of the power
        exponent: f64,
    },

    /// Square root of a negative, infinite or NaN value.
    #[error("square root of {0} is not a real number")]
    InvalidRadicand(f64),

    /// Logarithm of zero or of a negative value.
    #[error("logarithm of non-positive value {0}")]
    NonPositiveLogarithm(f64),

    /// A logarithm base that is non-finite, non-positive or exactly one.
    #[error("invalid logarithm base {0}")]
    InvalidLogarithmBase(f64),

    /// Literal text that is not an unsigned decimal number.
    #[error("invalid number literal \"{0}\"")]
    InvalidLiteral(String),

    /// Literal whose value does not fit in a finite double.
    #[error("number literal \"{0}\" is not finite")]
    NonFiniteLiteral(String),
}

/// Result of evaluating an expression.
pub type EvalResult<T = f64> = Result<T, EvalError>;
