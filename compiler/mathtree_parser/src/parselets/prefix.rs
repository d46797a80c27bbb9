use mathtree_ast::{ExpressionNode, NumberNode, DEFAULT_LOG_BASE};
use mathtree_lexer::numbers::leading_unsigned;
use mathtree_lexer::{Token, TokenType};

use super::PrefixParselet;
use crate::error::{ParseError, ParseResult};
use crate::grammar::Priority;
use crate::pratt::ExpressionParser;

/// Turns a number token into a leaf.
#[derive(Debug, Clone, Copy, Default)]
pub struct NumberParselet;

impl PrefixParselet for NumberParselet {
    fn parse(
        &self,
        _parser: &mut dyn ExpressionParser,
        token: &Token,
    ) -> ParseResult<ExpressionNode> {
        Ok(ExpressionNode::Number(NumberNode::parse(&token.lexeme)?))
    }
}

/// Parses a bracketed expression. The brackets leave no node behind.
#[derive(Debug, Clone, Copy, Default)]
pub struct GroupParselet;

impl PrefixParselet for GroupParselet {
    fn parse(
        &self,
        parser: &mut dyn ExpressionParser,
        _token: &Token,
    ) -> ParseResult<ExpressionNode> {
        let inner = parser.parse()?;
        let closing = parser.consume_token()?;
        if closing.token_type != TokenType::ClosingBracket {
            return Err(ParseError::MissingClosingBracket(closing));
        }
        Ok(inner)
    }
}

/// Unary minus.
#[derive(Debug, Clone, Copy)]
pub struct NegativeSignParselet {
    priority: Priority,
}

impl NegativeSignParselet {
    /// Operands are parsed at `priority`.
    pub fn new(priority: Priority) -> Self {
        Self { priority }
    }
}

impl PrefixParselet for NegativeSignParselet {
    fn parse(
        &self,
        parser: &mut dyn ExpressionParser,
        _token: &Token,
    ) -> ParseResult<ExpressionNode> {
        Ok(ExpressionNode::negation(parser.parse_with_priority(self.priority)?))
    }
}

/// Unary plus; yields its operand unchanged.
#[derive(Debug, Clone, Copy)]
pub struct PositiveSignParselet {
    priority: Priority,
}

impl PositiveSignParselet {
    /// Operands are parsed at `priority`.
    pub fn new(priority: Priority) -> Self {
        Self { priority }
    }
}

impl PrefixParselet for PositiveSignParselet {
    fn parse(
        &self,
        parser: &mut dyn ExpressionParser,
        _token: &Token,
    ) -> ParseResult<ExpressionNode> {
        parser.parse_with_priority(self.priority)
    }
}

/// `sqrt x`.
#[derive(Debug, Clone, Copy)]
pub struct SquareRootParselet {
    priority: Priority,
}

impl SquareRootParselet {
    /// Operands are parsed at `priority`.
    pub fn new(priority: Priority) -> Self {
        Self { priority }
    }
}

impl PrefixParselet for SquareRootParselet {
    fn parse(
        &self,
        parser: &mut dyn ExpressionParser,
        _token: &Token,
    ) -> ParseResult<ExpressionNode> {
        Ok(ExpressionNode::square_root(
            parser.parse_with_priority(self.priority)?,
        ))
    }
}

/// `log x` and `log_b x`.
#[derive(Debug, Clone, Copy)]
pub struct LogarithmParselet {
    priority: Priority,
}

impl LogarithmParselet {
    /// Operands are parsed at `priority`.
    pub fn new(priority: Priority) -> Self {
        Self { priority }
    }

    /// Reads the base out of a `log` or `log_<number>` lexeme.
    pub fn base(lexeme: &str) -> ParseResult<f64> {
        let symbol = TokenType::Log.symbol().unwrap_or("log");
        let Some(rest) = lexeme.strip_prefix(symbol) else {
            return Err(ParseError::InvalidLogarithmBase(lexeme.to_string()));
        };
        if rest.is_empty() {
            return Ok(DEFAULT_LOG_BASE);
        }

        let delimiter = TokenType::Log.delimiter().unwrap_or("_");
        rest.strip_prefix(delimiter)
            .and_then(leading_unsigned)
            .and_then(|number| number.parse().ok())
            .ok_or_else(|| ParseError::InvalidLogarithmBase(lexeme.to_string()))
    }
}

impl PrefixParselet for LogarithmParselet {
    fn parse(
        &self,
        parser: &mut dyn ExpressionParser,
        token: &Token,
    ) -> ParseResult<ExpressionNode> {
        let base = Self::base(&token.lexeme)?;
        let operand = parser.parse_with_priority(self.priority)?;
        Ok(ExpressionNode::logarithm(operand, base)?)
    }
}
