//! The precedence-climbing engine.
//!
//! [`PrattParser`] knows nothing about arithmetic. It pulls tokens from a
//! [`Lexer`], hands each one to the parselet registered for its type and keeps
//! folding infix operators into the left operand while their priority is
//! above the current threshold.

use std::collections::HashMap;
use std::ops::{Deref, DerefMut};
use std::rc::Rc;

use log::{debug, trace};
use mathtree_ast::ExpressionNode;
use mathtree_lexer::{Lexer, Token, TokenType};

use crate::error::{ParseError, ParseResult};
use crate::grammar::{Priority, LOWEST};
use crate::parselets::{InfixParselet, PrefixParselet};

/// Maximum nesting depth of a parsed expression, to prevent stack overflow.
///
/// Every operator, sign, function and bracket pair adds a level, so this
/// bounds both the parser's recursion and the height of the trees it builds.
pub const MAX_NESTING_DEPTH: usize = 256;

/// The view of a parser that parselets use to read their operands.
pub trait ExpressionParser {
    /// Parses an expression that absorbs infix operators whose priority is
    /// strictly greater than `priority`.
    fn parse_with_priority(&mut self, priority: Priority) -> ParseResult<ExpressionNode>;

    /// Parses an expression at the lowest threshold.
    fn parse(&mut self) -> ParseResult<ExpressionNode> {
        self.parse_with_priority(LOWEST)
    }

    /// Removes and returns the next token.
    fn consume_token(&mut self) -> ParseResult<Token>;

    /// Returns the next token without consuming it.
    fn peek_token(&mut self) -> ParseResult<&Token>;
}

/// A table-driven Pratt parser over any [`Lexer`].
///
/// The outermost call of [`ExpressionParser::parse_with_priority`] requires
/// the whole input to be consumed, then drops the lookahead and rewinds the
/// lexer whether parsing succeeded, failed or a parselet panicked. Nested
/// calls made by parselets leave that state alone.
pub struct PrattParser<L> {
    lexer: L,
    lookahead: Option<Token>,
    prefix_parselets: HashMap<TokenType, Rc<dyn PrefixParselet>>,
    infix_parselets: HashMap<TokenType, Rc<dyn InfixParselet>>,
    depth: usize,
    max_depth: usize,
    /// Tallest operand returned by a nested call since the enclosing
    /// parselet started.
    nested_height: usize,
}

impl<L: Lexer> PrattParser<L> {
    /// Creates a parser with no parselets registered.
    pub fn new(lexer: L) -> Self {
        Self {
            lexer,
            lookahead: None,
            prefix_parselets: HashMap::new(),
            infix_parselets: HashMap::new(),
            depth: 0,
            max_depth: MAX_NESTING_DEPTH,
            nested_height: 0,
        }
    }

    /// Registers the parselet for tokens that start an expression.
    pub fn register_prefix<P: PrefixParselet + 'static>(
        &mut self,
        token_type: TokenType,
        parselet: P,
    ) {
        self.prefix_parselets.insert(token_type, Rc::new(parselet));
    }

    /// Registers the parselet for tokens that continue an expression.
    pub fn register_infix<P: InfixParselet + 'static>(
        &mut self,
        token_type: TokenType,
        parselet: P,
    ) {
        self.infix_parselets.insert(token_type, Rc::new(parselet));
    }

    /// Lowers or raises the nesting limit, which defaults to
    /// [`MAX_NESTING_DEPTH`].
    pub fn set_max_depth(&mut self, limit: usize) {
        self.max_depth = limit;
    }

    /// The underlying lexer.
    pub fn lexer(&self) -> &L {
        &self.lexer
    }

    /// Mutable access to the underlying lexer, e.g. to point it at new text.
    pub fn lexer_mut(&mut self) -> &mut L {
        &mut self.lexer
    }

    /// Parses one expression and returns it with its nesting depth.
    fn parse_expression(&mut self, priority: Priority) -> ParseResult<(ExpressionNode, usize)> {
        let token = self.consume_token()?;
        let prefix = self
            .prefix_parselets
            .get(&token.token_type)
            .cloned()
            .ok_or_else(|| ParseError::MissingPrefixParselet(token.clone()))?;
        trace!("prefix {token} at depth {}", self.depth);

        let outer = std::mem::take(&mut self.nested_height);
        let result = self.fold_operators(prefix, &token, priority);
        self.nested_height = outer;
        result
    }

    fn fold_operators(
        &mut self,
        prefix: Rc<dyn PrefixParselet>,
        token: &Token,
        priority: Priority,
    ) -> ParseResult<(ExpressionNode, usize)> {
        let mut left = prefix.parse(self, token)?;
        let mut height = self.check_height(self.nested_height + 1)?;
        while let Some(infix) = self.next_infix(priority)? {
            let token = self.consume_token()?;
            trace!("infix {token} above threshold {priority}");
            self.nested_height = 0;
            left = infix.parse(self, left, &token)?;
            height = self.check_height(height.max(self.nested_height) + 1)?;
        }
        Ok((left, height))
    }

    fn check_height(&self, height: usize) -> ParseResult<usize> {
        if height > self.max_depth {
            Err(ParseError::NestingTooDeep {
                limit: self.max_depth,
            })
        } else {
            Ok(height)
        }
    }

    fn next_infix(&mut self, threshold: Priority) -> ParseResult<Option<Rc<dyn InfixParselet>>> {
        let token_type = self.peek_token()?.token_type;
        Ok(self
            .infix_parselets
            .get(&token_type)
            .filter(|infix| infix.priority() > threshold)
            .cloned())
    }

    fn expect_end(&mut self) -> ParseResult<()> {
        let next = self.peek_token()?;
        if next.is_stop() {
            Ok(())
        } else {
            Err(ParseError::TrailingInput(next.clone()))
        }
    }
}

/// Holds one level of [`PrattParser`] recursion.
///
/// Dropping the guard leaves the level. Leaving the outermost level drops the
/// lookahead and rewinds the lexer, also while unwinding from a panic.
struct DepthGuard<'a, L: Lexer> {
    parser: &'a mut PrattParser<L>,
}

impl<'a, L: Lexer> DepthGuard<'a, L> {
    fn enter(parser: &'a mut PrattParser<L>) -> Self {
        parser.depth += 1;
        Self { parser }
    }

    fn is_outermost(&self) -> bool {
        self.parser.depth == 1
    }
}

impl<L: Lexer> Deref for DepthGuard<'_, L> {
    type Target = PrattParser<L>;

    fn deref(&self) -> &Self::Target {
        self.parser
    }
}

impl<L: Lexer> DerefMut for DepthGuard<'_, L> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.parser
    }
}

impl<L: Lexer> Drop for DepthGuard<'_, L> {
    fn drop(&mut self) {
        self.parser.depth -= 1;
        if self.parser.depth == 0 {
            self.parser.lookahead = None;
            self.parser.nested_height = 0;
            self.parser.lexer.reset();
        }
    }
}

impl<L: Lexer> ExpressionParser for PrattParser<L> {
    fn parse_with_priority(&mut self, priority: Priority) -> ParseResult<ExpressionNode> {
        let mut level = DepthGuard::enter(self);
        let result = if level.depth > level.max_depth {
            Err(ParseError::NestingTooDeep {
                limit: level.max_depth,
            })
        } else {
            level.parse_expression(priority)
        };

        if !level.is_outermost() {
            return result.map(|(expr, height)| {
                level.nested_height = level.nested_height.max(height);
                expr
            });
        }

        let result = result.and_then(|(expr, _)| level.expect_end().map(|()| expr));
        match &result {
            Ok(expr) => debug!("parsed {expr}"),
            Err(err) => debug!("parse failed: {err}"),
        }
        result
    }

    fn consume_token(&mut self) -> ParseResult<Token> {
        match self.lookahead.take() {
            Some(token) => Ok(token),
            None => Ok(self.lexer.next_token()?),
        }
    }

    fn peek_token(&mut self) -> ParseResult<&Token> {
        let token = match self.lookahead.take() {
            Some(token) => token,
            None => self.lexer.next_token()?,
        };
        Ok(self.lookahead.insert(token))
    }
}
