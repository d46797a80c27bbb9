//! Validate, parse and evaluate expressions, writing what a user should see.

use std::io::{self, Write};

use log::info;
use mathtree_ast::{to_json, EvalError, ExpressionNode};
use mathtree_lexer::tokenize;
use mathtree_parser::{validate, ArithmeticParser, Diagnostic, ParseError, SyntaxError};

/// How the tree of a valid expression is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Fully parenthesised infix form
    #[default]
    Text,
    /// JSON dump of the tree
    Json,
}

/// Options for [`solve_to`].
#[derive(Debug, Clone, Copy, Default)]
pub struct SolveOptions {
    /// How to show the tree
    pub mode: OutputMode,
    /// Also list the tokens of the expression
    pub show_tokens: bool,
}

/// What happened to one expression.
#[derive(Debug)]
pub enum Outcome {
    /// The validator found problems; nothing was parsed.
    Invalid(Vec<SyntaxError>),
    /// The text validated but the parser still refused it.
    ParseFailed(ParseError),
    /// A tree was built; evaluating it gave this result.
    Evaluated {
        /// The parsed tree
        tree: ExpressionNode,
        /// Its value or the domain error that stopped evaluation
        result: Result<f64, EvalError>,
    },
}

impl Outcome {
    /// True when a numeric result was produced.
    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Evaluated { result: Ok(_), .. })
    }
}

/// Validates `text` and, if it is clean, parses and evaluates it.
pub fn solve(text: &str) -> Outcome {
    let errors = validate(text);
    if !errors.is_empty() {
        info!("{} syntax error(s) in {text:?}", errors.len());
        return Outcome::Invalid(errors);
    }
    match ArithmeticParser::new(text).parse() {
        Ok(tree) => {
            let result = tree.evaluate();
            Outcome::Evaluated { tree, result }
        }
        Err(error) => Outcome::ParseFailed(error),
    }
}

/// Solves `text` and writes the report: results to `out`, problems to `err`.
///
/// Returns whether a result was produced.
pub fn solve_to(
    text: &str,
    options: SolveOptions,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> io::Result<bool> {
    if options.show_tokens {
        match tokenize(text) {
            Ok(tokens) => {
                let listed: Vec<String> = tokens.iter().map(ToString::to_string).collect();
                writeln!(out, "Tokens: {}", listed.join(" "))?;
            }
            Err(error) => writeln!(err, "{}", Diagnostic::from(&error).render(text))?,
        }
    }

    let outcome = solve(text);
    match &outcome {
        Outcome::Invalid(errors) => {
            for error in errors {
                writeln!(err, "{}", Diagnostic::from(error).render(text))?;
            }
        }
        Outcome::ParseFailed(error) => {
            writeln!(err, "{}", Diagnostic::from_parse_error(error).render(text))?;
        }
        Outcome::Evaluated { tree, result } => {
            match options.mode {
                OutputMode::Text => writeln!(out, "Expression parsed as {tree}")?,
                OutputMode::Json => {
                    let json = to_json(tree).map_err(io::Error::other)?;
                    writeln!(out, "{json}")?;
                }
            }
            match result {
                Ok(value) => writeln!(out, "Result is {value}")?,
                Err(error) => {
                    writeln!(err, "{}", Diagnostic::from_eval_error(error).render(text))?
                }
            }
        }
    }
    Ok(outcome.is_success())
}
