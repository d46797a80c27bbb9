//! The arithmetic parser: a [`PrattParser`] over an [`ArithmeticLexer`] with
//! the standard parselets registered from the grammar table.

use log::debug;
use mathtree_ast::{BinaryOperator, ExpressionNode};
use mathtree_lexer::{ArithmeticLexer, Lexer, TokenType};

use crate::error::ParseResult;
use crate::grammar::{prefix_priority, EXPONENT, INFIX_PRIORITIES, SIGN};
use crate::parselets::{
    Associativity, BinaryOperatorParselet, GroupParselet, LogarithmParselet, NegativeSignParselet,
    NumberParselet, PositiveSignParselet, SquareRootParselet,
};
use crate::pratt::{ExpressionParser, PrattParser};
use crate::validator::{self, SyntaxError};

/// Parser for arithmetic expressions.
///
/// A parser owns its text; [`ArithmeticParser::reset_with`] points it at a
/// new expression.
pub struct ArithmeticParser {
    inner: PrattParser<ArithmeticLexer>,
}

impl ArithmeticParser {
    /// Creates a parser for `text`.
    pub fn new<S: Into<String>>(text: S) -> Self {
        let mut inner = PrattParser::new(ArithmeticLexer::new(text));

        inner.register_prefix(TokenType::Number, NumberParselet);
        inner.register_prefix(TokenType::OpeningBracket, GroupParselet);
        inner.register_prefix(
            TokenType::Plus,
            PositiveSignParselet::new(prefix_priority(TokenType::Plus).unwrap_or(SIGN)),
        );
        inner.register_prefix(
            TokenType::Minus,
            NegativeSignParselet::new(prefix_priority(TokenType::Minus).unwrap_or(SIGN)),
        );
        inner.register_prefix(
            TokenType::SquareRoot,
            SquareRootParselet::new(prefix_priority(TokenType::SquareRoot).unwrap_or(EXPONENT)),
        );
        inner.register_prefix(
            TokenType::Log,
            LogarithmParselet::new(prefix_priority(TokenType::Log).unwrap_or(EXPONENT)),
        );

        for (&token_type, &priority) in INFIX_PRIORITIES.iter() {
            let Some(operator) = BinaryOperator::from_token_type(token_type) else {
                continue;
            };
            let associativity = match operator {
                BinaryOperator::Pow => Associativity::Right,
                _ => Associativity::Left,
            };
            inner.register_infix(
                token_type,
                BinaryOperatorParselet::new(operator, priority, associativity),
            );
        }

        Self { inner }
    }

    /// Parses the whole text into a tree.
    ///
    /// The parser can be called again afterwards and parses the same text
    /// from the start.
    pub fn parse(&mut self) -> ParseResult<ExpressionNode> {
        debug!("parsing {:?}", self.inner.lexer().text());
        self.inner.parse()
    }

    /// Replaces the text to parse.
    pub fn reset_with<S: Into<String>>(&mut self, text: S) {
        self.inner.lexer_mut().reset_with(text.into());
    }

    /// The text being parsed.
    pub fn text(&self) -> &str {
        self.inner.lexer().text()
    }

    /// Reports every syntax problem in `text`, sorted by index.
    pub fn validate(text: &str) -> Vec<SyntaxError> {
        validator::validate(text)
    }
}

/// Parses `text` in one go.
pub fn parse(text: &str) -> ParseResult<ExpressionNode> {
    ArithmeticParser::new(text).parse()
}
