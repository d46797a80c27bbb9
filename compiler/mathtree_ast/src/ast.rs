//! Expression tree nodes.
//!
//! The tree is a closed sum type. Every node can be evaluated to a double,
//! printed in fully parenthesised infix form and asked for its direct
//! subexpressions. Nodes are immutable once built; the constructors that can
//! fail check their domain up front so that a built tree is always printable.

use std::fmt;

use mathtree_lexer::numbers::is_unsigned_number;
use mathtree_lexer::TokenType;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{EvalError, EvalResult};

/// The base used by `log` when none is written.
pub const DEFAULT_LOG_BASE: f64 = 10.0;

/// A node of an arithmetic expression tree.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ExpressionNode {
    /// A finite number literal.
    Number(NumberNode),
    /// `left <op> right`.
    Binary(Box<BinaryExpressionNode>),
    /// Unary minus.
    Negation(Box<ExpressionNode>),
    /// `sqrt x`.
    SquareRoot(Box<ExpressionNode>),
    /// `log_b x`.
    Logarithm(Box<LogarithmNode>),
}

/// A finite number.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "f64", into = "f64"))]
pub struct NumberNode {
    value: f64,
}

impl NumberNode {
    /// Wraps `value`, rejecting infinities and NaN.
    pub fn new(value: f64) -> EvalResult<Self> {
        if value.is_finite() {
            Ok(Self { value })
        } else {
            Err(EvalError::NonFiniteLiteral(value.to_string()))
        }
    }

    /// Parses an unsigned decimal literal such as `42`, `3.14`, `2.` or `.5`.
    pub fn parse(text: &str) -> EvalResult<Self> {
        if !is_unsigned_number(text) {
            return Err(EvalError::InvalidLiteral(text.to_string()));
        }
        let value: f64 = text
            .parse()
            .map_err(|_| EvalError::InvalidLiteral(text.to_string()))?;
        if !value.is_finite() {
            return Err(EvalError::NonFiniteLiteral(text.to_string()));
        }
        Ok(Self { value })
    }

    /// The stored value.
    pub fn value(self) -> f64 {
        self.value
    }
}

impl TryFrom<f64> for NumberNode {
    type Error = EvalError;

    fn try_from(value: f64) -> EvalResult<Self> {
        Self::new(value)
    }
}

impl From<NumberNode> for f64 {
    fn from(node: NumberNode) -> Self {
        node.value
    }
}

/// A binary operation.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BinaryExpressionNode {
    /// Left operand
    pub left: ExpressionNode,
    /// The operator
    pub operator: BinaryOperator,
    /// Right operand
    pub right: ExpressionNode,
}

/// The five binary operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum BinaryOperator {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`
    Div,
    /// `^`
    Pow,
}

impl BinaryOperator {
    /// Maps an operator token type to its operator.
    pub fn from_token_type(token_type: TokenType) -> Option<Self> {
        match token_type {
            TokenType::Plus => Some(Self::Add),
            TokenType::Minus => Some(Self::Sub),
            TokenType::Asterisk => Some(Self::Mul),
            TokenType::Slash => Some(Self::Div),
            TokenType::Caret => Some(Self::Pow),
            _ => None,
        }
    }

    /// The token type the operator is written with.
    pub fn token_type(self) -> TokenType {
        match self {
            Self::Add => TokenType::Plus,
            Self::Sub => TokenType::Minus,
            Self::Mul => TokenType::Asterisk,
            Self::Div => TokenType::Slash,
            Self::Pow => TokenType::Caret,
        }
    }

    /// The printed symbol.
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Pow => "^",
        }
    }

    /// Applies the operator, failing on division by zero and on powers that
    /// are undefined or not real.
    pub fn apply(self, left: f64, right: f64) -> EvalResult {
        match self {
            Self::Add => Ok(left + right),
            Self::Sub => Ok(left - right),
            Self::Mul => Ok(left * right),
            Self::Div if right == 0.0 => Err(EvalError::DivisionByZero),
            Self::Div => Ok(left / right),
            Self::Pow if left == 0.0 && right <= 0.0 => Err(EvalError::UndefinedPower {
                base: left,
                exponent: right,
            }),
            Self::Pow if left < 0.0 && right.fract() != 0.0 => Err(EvalError::NonRealPower {
                base: left,
                exponent: right,
            }),
            Self::Pow => Ok(left.powf(right)),
        }
    }
}

/// A logarithm with a validated base.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(try_from = "LogarithmParts", into = "LogarithmParts")
)]
pub struct LogarithmNode {
    operand: ExpressionNode,
    base: f64,
}

impl LogarithmNode {
    /// Builds a logarithm; the base must be finite, positive and not one.
    pub fn new(operand: ExpressionNode, base: f64) -> EvalResult<Self> {
        if !base.is_finite() || base <= 0.0 || base == 1.0 {
            return Err(EvalError::InvalidLogarithmBase(base));
        }
        Ok(Self { operand, base })
    }

    /// The argument of the logarithm.
    pub fn operand(&self) -> &ExpressionNode {
        &self.operand
    }

    /// The base of the logarithm.
    pub fn base(&self) -> f64 {
        self.base
    }
}

#[cfg(feature = "serde")]
#[derive(Serialize, Deserialize)]
struct LogarithmParts {
    operand: ExpressionNode,
    base: f64,
}

#[cfg(feature = "serde")]
impl TryFrom<LogarithmParts> for LogarithmNode {
    type Error = EvalError;

    fn try_from(parts: LogarithmParts) -> EvalResult<Self> {
        Self::new(parts.operand, parts.base)
    }
}

#[cfg(feature = "serde")]
impl From<LogarithmNode> for LogarithmParts {
    fn from(node: LogarithmNode) -> Self {
        Self {
            operand: node.operand,
            base: node.base,
        }
    }
}

impl ExpressionNode {
    /// A number leaf.
    pub fn number(value: f64) -> EvalResult<Self> {
        NumberNode::new(value).map(Self::Number)
    }

    /// A binary operation node.
    pub fn binary(left: ExpressionNode, operator: BinaryOperator, right: ExpressionNode) -> Self {
        Self::Binary(Box::new(BinaryExpressionNode {
            left,
            operator,
            right,
        }))
    }

    /// A negation node.
    pub fn negation(operand: ExpressionNode) -> Self {
        Self::Negation(Box::new(operand))
    }

    /// A square root node.
    pub fn square_root(operand: ExpressionNode) -> Self {
        Self::SquareRoot(Box::new(operand))
    }

    /// A logarithm node.
    pub fn logarithm(operand: ExpressionNode, base: f64) -> EvalResult<Self> {
        LogarithmNode::new(operand, base).map(|node| Self::Logarithm(Box::new(node)))
    }

    /// Evaluates the tree.
    pub fn evaluate(&self) -> EvalResult {
        match self {
            Self::Number(number) => Ok(number.value()),
            Self::Binary(binary) => {
                let left = binary.left.evaluate()?;
                let right = binary.right.evaluate()?;
                binary.operator.apply(left, right)
            }
            Self::Negation(operand) => Ok(-operand.evaluate()?),
            Self::SquareRoot(operand) => {
                let value = operand.evaluate()?;
                if value < 0.0 || !value.is_finite() {
                    return Err(EvalError::InvalidRadicand(value));
                }
                Ok(value.sqrt())
            }
            Self::Logarithm(log) => {
                let value = log.operand.evaluate()?;
                if value <= 0.0 || value.is_nan() {
                    return Err(EvalError::NonPositiveLogarithm(value));
                }
                Ok(value.ln() / log.base.ln())
            }
        }
    }

    /// Renders the fully parenthesised infix form.
    pub fn print(&self) -> String {
        self.to_string()
    }

    /// The direct children of this node, left to right.
    pub fn subexpressions(&self) -> Vec<&ExpressionNode> {
        match self {
            Self::Number(_) => Vec::new(),
            Self::Binary(binary) => vec![&binary.left, &binary.right],
            Self::Negation(operand) | Self::SquareRoot(operand) => vec![operand.as_ref()],
            Self::Logarithm(log) => vec![&log.operand],
        }
    }

    /// Number of nodes in the tree, this one included.
    pub fn node_count(&self) -> usize {
        1 + self
            .subexpressions()
            .into_iter()
            .map(ExpressionNode::node_count)
            .sum::<usize>()
    }
}

impl fmt::Display for ExpressionNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(number) => write!(f, "{}", number.value()),
            Self::Binary(binary) => write!(
                f,
                "({}{}{})",
                binary.left,
                binary.operator.symbol(),
                binary.right
            ),
            Self::Negation(operand) => write!(f, "(-{operand})"),
            Self::SquareRoot(operand) => write!(f, "sqrt({operand})"),
            Self::Logarithm(log) if log.base == DEFAULT_LOG_BASE => {
                write!(f, "log({})", log.operand)
            }
            Self::Logarithm(log) => write!(f, "log_{}({})", log.base, log.operand),
        }
    }
}
