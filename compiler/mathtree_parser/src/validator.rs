//! Multi-error syntax validation.
//!
//! [`validate`] scans the raw text once, without building a tree, and reports
//! every structural defect it finds as an `(index, kind)` pair. It tokenises
//! with the same matchers as the lexer and classifies operators with the same
//! priority table as the parser, so an input with no reported errors is one
//! the parser accepts, unless it nests deeper than
//! [`MAX_NESTING_DEPTH`](crate::pratt::MAX_NESTING_DEPTH). Only the parser
//! enforces that limit; the scan here does not recurse.

use std::fmt;

use log::{debug, trace};
use mathtree_lexer::{ArithmeticLexer, TokenType};

use crate::grammar::{is_binary_operator, is_function, is_sign};

/// The kinds of defect the validator reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SyntaxErrorKind {
    /// A `(` that is never closed.
    UnpairedOpeningBracket,
    /// A `)` with no `(` to close.
    UnpairedClosingBracket,
    /// An operator with a missing operand.
    IncompleteOperation,
    /// Two operands with no operator between them.
    MissingOperator,
    /// A character that is not part of any token.
    UnrecognisedSymbol,
    /// `()` with only whitespace inside.
    NothingBetweenBrackets,
}

/// One defect and the byte offset of the character it refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SyntaxError {
    /// Byte offset into the validated text
    pub index: usize,
    /// What is wrong
    pub kind: SyntaxErrorKind,
}

impl SyntaxError {
    /// Creates a record.
    pub fn new(index: usize, kind: SyntaxErrorKind) -> Self {
        Self { index, kind }
    }

    /// The message shown to users.
    pub fn message(&self) -> String {
        let index = self.index;
        match self.kind {
            SyntaxErrorKind::UnpairedClosingBracket => format!("Unpaired ')' at index {index}."),
            SyntaxErrorKind::UnpairedOpeningBracket => format!("Unpaired '(' at index {index}."),
            SyntaxErrorKind::MissingOperator => format!("Missing operator at index {index}."),
            SyntaxErrorKind::IncompleteOperation => {
                format!("Operation with a missing operand at index {index}.")
            }
            SyntaxErrorKind::UnrecognisedSymbol => format!("Unrecognised symbol at index {index}."),
            SyntaxErrorKind::NothingBetweenBrackets => {
                format!("Nothing between brackets starting at index {index}.")
            }
        }
    }
}

impl fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message())
    }
}

/// The last significant thing seen by the scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Previous {
    Start,
    Number,
    OpeningBracket,
    ClosingBracket,
    Operator(usize),
    Function(usize),
    Unrecognised,
}

impl Previous {
    fn is_operand(self) -> bool {
        matches!(self, Previous::Number | Previous::ClosingBracket)
    }
}

struct Scan {
    errors: Vec<SyntaxError>,
    open_brackets: Vec<usize>,
    previous: Previous,
}

impl Scan {
    fn report(&mut self, index: usize, kind: SyntaxErrorKind) {
        trace!("{kind:?} at {index}");
        self.errors.push(SyntaxError::new(index, kind));
    }

    fn token(&mut self, index: usize, token_type: TokenType) {
        self.previous = match token_type {
            TokenType::OpeningBracket => {
                if self.previous.is_operand() {
                    self.report(index, SyntaxErrorKind::MissingOperator);
                }
                self.open_brackets.push(index);
                Previous::OpeningBracket
            }
            TokenType::ClosingBracket => {
                match self.open_brackets.pop() {
                    Some(opening) if self.previous == Previous::OpeningBracket => {
                        self.report(opening, SyntaxErrorKind::NothingBetweenBrackets);
                    }
                    Some(_) => {}
                    None => self.report(index, SyntaxErrorKind::UnpairedClosingBracket),
                }
                if let Previous::Operator(operator) | Previous::Function(operator) = self.previous {
                    self.report(operator, SyntaxErrorKind::IncompleteOperation);
                }
                Previous::ClosingBracket
            }
            TokenType::Number => {
                if self.previous.is_operand() {
                    self.report(index, SyntaxErrorKind::MissingOperator);
                }
                Previous::Number
            }
            t if is_function(t) => {
                if self.previous.is_operand() {
                    self.report(index, SyntaxErrorKind::MissingOperator);
                }
                Previous::Function(index)
            }
            t if is_binary_operator(t) => {
                let needs_left_operand = matches!(
                    self.previous,
                    Previous::Start
                        | Previous::OpeningBracket
                        | Previous::Operator(_)
                        | Previous::Function(_)
                );
                if needs_left_operand && !is_sign(t) {
                    self.report(index, SyntaxErrorKind::IncompleteOperation);
                }
                Previous::Operator(index)
            }
            _ => self.previous,
        };
    }

    fn finish(mut self) -> Vec<SyntaxError> {
        if let Previous::Operator(operator) | Previous::Function(operator) = self.previous {
            self.report(operator, SyntaxErrorKind::IncompleteOperation);
        }
        for opening in std::mem::take(&mut self.open_brackets) {
            self.report(opening, SyntaxErrorKind::UnpairedOpeningBracket);
        }
        self.errors.sort_by_key(|error| error.index);
        self.errors
    }
}

/// Reports every syntax problem in `text`, sorted by index.
///
/// Whitespace is insignificant. Empty or blank input has no syntax errors.
/// Nesting depth is not checked.
pub fn validate(text: &str) -> Vec<SyntaxError> {
    let matchers = ArithmeticLexer::standard_matchers();
    let mut scan = Scan {
        errors: Vec::new(),
        open_brackets: Vec::new(),
        previous: Previous::Start,
    };

    let mut position = 0;
    while let Some(ch) = text[position..].chars().next() {
        if ch.is_whitespace() {
            position += ch.len_utf8();
            continue;
        }
        match matchers.iter().find_map(|m| m.match_at(text, position)) {
            Some(token) => {
                scan.token(position, token.token_type);
                position += token.lexeme.len();
            }
            None => {
                scan.report(position, SyntaxErrorKind::UnrecognisedSymbol);
                scan.previous = Previous::Unrecognised;
                position += ch.len_utf8();
            }
        }
    }

    let errors = scan.finish();
    debug!("validated {text:?}: {} error(s)", errors.len());
    errors
}
