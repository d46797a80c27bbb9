//! Human-readable diagnostics for syntax, parse and domain errors.

use std::fmt::Write as _;

use mathtree_ast::EvalError;
use mathtree_lexer::LexError;

use crate::error::ParseError;
use crate::validator::{SyntaxError, SyntaxErrorKind};

/// A user-facing description of a problem in an expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// One-line message
    pub message: String,
    /// Byte offset of the offending character, when known
    pub index: Option<usize>,
    /// Suggestion on how to fix it
    pub help: Option<String>,
}

impl Diagnostic {
    /// Create a diagnostic from a validator record.
    pub fn from_syntax_error(error: &SyntaxError) -> Self {
        Self {
            message: error.message(),
            index: Some(error.index),
            help: help_for_kind(error.kind).map(str::to_string),
        }
    }

    /// Create a diagnostic for a failed parse.
    pub fn from_parse_error(error: &ParseError) -> Self {
        let index = match error {
            ParseError::Lex(lex) => Some(lex.index()),
            _ => None,
        };
        let help = match error {
            ParseError::NestingTooDeep { .. } => {
                Some("Drop redundant brackets or signs, or split the expression up.".to_string())
            }
            _ => None,
        };
        Self {
            message: format!("Logic error. {error}"),
            index,
            help,
        }
    }

    /// Create a diagnostic for a failed evaluation.
    pub fn from_eval_error(error: &EvalError) -> Self {
        let help = match error {
            EvalError::DivisionByZero => Some("Check the divisor of every '/'."),
            EvalError::NonRealPower { .. } => {
                Some("A negative number can only be raised to an integer power.")
            }
            EvalError::InvalidRadicand(_) => Some("'sqrt' needs a non-negative operand."),
            EvalError::NonPositiveLogarithm(_) => Some("'log' needs a positive operand."),
            _ => None,
        };
        Self {
            message: format!("Logic error. {error}"),
            index: None,
            help: help.map(str::to_string),
        }
    }

    /// Renders the message, the source line with a caret under the offending
    /// character when the index is known, and the help text.
    pub fn render(&self, source: &str) -> String {
        let mut out = self.message.clone();
        if let Some(index) = self.index {
            let column = source
                .get(..index)
                .map_or(index, |prefix| prefix.chars().count());
            let _ = write!(out, "\n  {source}\n  {}^", " ".repeat(column));
        }
        if let Some(help) = &self.help {
            let _ = write!(out, "\n  help: {help}");
        }
        out
    }
}

impl From<&SyntaxError> for Diagnostic {
    fn from(error: &SyntaxError) -> Self {
        Self::from_syntax_error(error)
    }
}

impl From<&LexError> for Diagnostic {
    fn from(error: &LexError) -> Self {
        Self::from_parse_error(&ParseError::Lex(error.clone()))
    }
}

/// Provide a default help message for a syntax error kind
fn help_for_kind(kind: SyntaxErrorKind) -> Option<&'static str> {
    match kind {
        SyntaxErrorKind::UnpairedOpeningBracket => Some("Did you forget a matching ')' later?"),
        SyntaxErrorKind::UnpairedClosingBracket => Some("Did you forget a matching '(' earlier?"),
        SyntaxErrorKind::MissingOperator => {
            Some("Write the operator explicitly, e.g. '2*(3)' rather than '2(3)'.")
        }
        SyntaxErrorKind::IncompleteOperation => None,
        SyntaxErrorKind::UnrecognisedSymbol => {
            Some("Only numbers, brackets, + - * / ^, sqrt and log are understood.")
        }
        SyntaxErrorKind::NothingBetweenBrackets => None,
    }
}
