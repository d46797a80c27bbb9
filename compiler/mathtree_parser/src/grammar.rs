//! Operator priorities.
//!
//! The table below is the only place priorities are defined. The parser
//! registers its parselets from it and the validator classifies operators
//! with it, so the two always agree on what an operator is.

use std::collections::HashMap;

use lazy_static::lazy_static;
use mathtree_lexer::TokenType;

/// Binding power of an operator. Higher binds tighter.
pub type Priority = i32;

/// Threshold below every real priority; any infix operator exceeds it.
pub const LOWEST: Priority = Priority::MIN;

/// `+` and `-` as binary operators.
pub const SUM: Priority = 1;
/// `*` and `/`.
pub const PRODUCT: Priority = 2;
/// `+` and `-` as signs.
pub const SIGN: Priority = 3;
/// `^`, `sqrt` and `log`.
pub const EXPONENT: Priority = 4;

lazy_static! {
    /// Priorities of tokens used as binary operators.
    pub static ref INFIX_PRIORITIES: HashMap<TokenType, Priority> = HashMap::from([
        (TokenType::Plus, SUM),
        (TokenType::Minus, SUM),
        (TokenType::Asterisk, PRODUCT),
        (TokenType::Slash, PRODUCT),
        (TokenType::Caret, EXPONENT),
    ]);

    /// Priorities at which prefix operators parse their operand.
    pub static ref PREFIX_PRIORITIES: HashMap<TokenType, Priority> = HashMap::from([
        (TokenType::Plus, SIGN),
        (TokenType::Minus, SIGN),
        (TokenType::SquareRoot, EXPONENT),
        (TokenType::Log, EXPONENT),
    ]);
}

/// Priority of `token_type` as a binary operator.
pub fn infix_priority(token_type: TokenType) -> Option<Priority> {
    INFIX_PRIORITIES.get(&token_type).copied()
}

/// Priority of `token_type` as a prefix operator.
pub fn prefix_priority(token_type: TokenType) -> Option<Priority> {
    PREFIX_PRIORITIES.get(&token_type).copied()
}

/// True for tokens that are a binary operator.
pub fn is_binary_operator(token_type: TokenType) -> bool {
    INFIX_PRIORITIES.contains_key(&token_type)
}

/// True for binary operators that may also be written as a sign.
pub fn is_sign(token_type: TokenType) -> bool {
    is_binary_operator(token_type) && PREFIX_PRIORITIES.contains_key(&token_type)
}

/// True for prefix-only operators (`sqrt`, `log`).
pub fn is_function(token_type: TokenType) -> bool {
    PREFIX_PRIORITIES.contains_key(&token_type) && !is_binary_operator(token_type)
}
