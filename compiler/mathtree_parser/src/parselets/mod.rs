//! Parselets: the per-token strategies the Pratt engine dispatches to.
//!
//! A prefix parselet turns a token that starts an expression into a node. An
//! infix parselet receives the expression parsed so far and extends it. Both
//! read further operands through the [`ExpressionParser`] they are handed.

mod infix;
mod prefix;

pub use infix::{Associativity, BinaryOperatorParselet};
pub use prefix::{
    GroupParselet, LogarithmParselet, NegativeSignParselet, NumberParselet, PositiveSignParselet,
    SquareRootParselet,
};

use mathtree_ast::ExpressionNode;
use mathtree_lexer::Token;

use crate::error::ParseResult;
use crate::grammar::Priority;
use crate::pratt::ExpressionParser;

/// Builds an expression from a token that starts one.
pub trait PrefixParselet {
    /// Parses the expression introduced by `token`, which is already consumed.
    fn parse(
        &self,
        parser: &mut dyn ExpressionParser,
        token: &Token,
    ) -> ParseResult<ExpressionNode>;
}

/// Extends an expression with an operator that follows it.
pub trait InfixParselet {
    /// Parses the rest of the operation introduced by `token`, which is
    /// already consumed, with `left` as its left operand.
    fn parse(
        &self,
        parser: &mut dyn ExpressionParser,
        left: ExpressionNode,
        token: &Token,
    ) -> ParseResult<ExpressionNode>;

    /// The operator's binding priority.
    fn priority(&self) -> Priority;
}
