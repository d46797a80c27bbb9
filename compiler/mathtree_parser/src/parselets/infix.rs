use mathtree_ast::{BinaryOperator, ExpressionNode};
use mathtree_lexer::Token;

use super::InfixParselet;
use crate::error::ParseResult;
use crate::grammar::Priority;
use crate::pratt::ExpressionParser;

/// Grouping of a chain of operators with the same priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Associativity {
    /// `a-b-c` is `(a-b)-c`.
    Left,
    /// `a^b^c` is `a^(b^c)`.
    Right,
}

/// Builds a binary node from the left operand and an operand parsed after
/// the operator.
#[derive(Debug, Clone, Copy)]
pub struct BinaryOperatorParselet {
    operator: BinaryOperator,
    priority: Priority,
    associativity: Associativity,
}

impl BinaryOperatorParselet {
    /// Creates a parselet for `operator`.
    pub fn new(operator: BinaryOperator, priority: Priority, associativity: Associativity) -> Self {
        Self {
            operator,
            priority,
            associativity,
        }
    }

    /// A left-associative operator.
    pub fn left(operator: BinaryOperator, priority: Priority) -> Self {
        Self::new(operator, priority, Associativity::Left)
    }

    /// A right-associative operator.
    pub fn right(operator: BinaryOperator, priority: Priority) -> Self {
        Self::new(operator, priority, Associativity::Right)
    }

    /// The threshold the right operand is parsed at.
    ///
    /// Lowering it by one for right-associative operators lets the recursive
    /// call absorb the next operator of the same priority.
    pub fn operand_priority(&self) -> Priority {
        match self.associativity {
            Associativity::Left => self.priority,
            Associativity::Right => self.priority.saturating_sub(1),
        }
    }
}

impl InfixParselet for BinaryOperatorParselet {
    fn parse(
        &self,
        parser: &mut dyn ExpressionParser,
        left: ExpressionNode,
        _token: &Token,
    ) -> ParseResult<ExpressionNode> {
        let right = parser.parse_with_priority(self.operand_priority())?;
        Ok(ExpressionNode::binary(left, self.operator, right))
    }

    fn priority(&self) -> Priority {
        self.priority
    }
}
