use mathtree::{solve, solve_to, OutputMode, Outcome, SolveOptions};
use mathtree_ast::{from_json, to_json, EvalError, ExpressionNode};
use mathtree_parser::{parse, ArithmeticParser, SyntaxErrorKind};
use pretty_assertions::assert_eq;
use tests::init_test_logger;

fn result_of(text: &str) -> Result<f64, EvalError> {
    match solve(text) {
        Outcome::Evaluated { result, .. } => result,
        other => panic!("{text:?} did not evaluate: {other:?}"),
    }
}

#[test]
fn test_documented_results() {
    init_test_logger();
    let cases = [
        ("1-3-10", -12.0),
        ("15/3/5", 1.0),
        ("2^3^0", 2.0),
        ("10+2*5-20/2", 10.0),
        ("2*(3*(1+1)+(3*2))", 24.0),
        ("((-2.3))", -2.3),
        ("sqrtsqrt16", 2.0),
        ("sqrt2 ^ 0", 1.0),
    ];
    for (text, expected) in cases {
        assert_eq!(result_of(text), Ok(expected), "{text:?}");
    }
}

#[test]
fn test_documented_domain_failures() {
    assert_eq!(result_of("7/0"), Err(EvalError::DivisionByZero));
    assert!(matches!(result_of("0^0"), Err(EvalError::UndefinedPower { .. })));
    assert!(matches!(result_of("(-8)^0.5"), Err(EvalError::NonRealPower { .. })));
    assert!(matches!(result_of("log(0)"), Err(EvalError::NonPositiveLogarithm(_))));
    assert!(ExpressionNode::logarithm(ExpressionNode::number(2.0).unwrap(), 0.0).is_err());
    let two = ExpressionNode::number(2.0).unwrap();
    assert!(ExpressionNode::logarithm(two, f64::INFINITY).is_err());
}

#[test]
fn test_documented_validator_indices() {
    let kinds = |text: &str| match solve(text) {
        Outcome::Invalid(errors) => errors
            .into_iter()
            .map(|e| (e.index, e.kind))
            .collect::<Vec<_>>(),
        other => panic!("{text:?} should be invalid: {other:?}"),
    };
    assert_eq!(
        kinds("2-(1 + (3"),
        vec![
            (2, SyntaxErrorKind::UnpairedOpeningBracket),
            (7, SyntaxErrorKind::UnpairedOpeningBracket)
        ]
    );
    assert_eq!(kinds("(2-1) )-3"), vec![(6, SyntaxErrorKind::UnpairedClosingBracket)]);
    assert_eq!(kinds("2(3-1)"), vec![(1, SyntaxErrorKind::MissingOperator)]);
    assert_eq!(kinds("()"), vec![(0, SyntaxErrorKind::NothingBetweenBrackets)]);
    assert_eq!(kinds("2+3-"), vec![(3, SyntaxErrorKind::IncompleteOperation)]);
}

#[test]
fn test_report_for_a_session() {
    let mut out = Vec::new();
    let mut err = Vec::new();
    let mut successes = 0;
    for line in ["2*(3+4)", "2(3)", "sqrt-1"] {
        if solve_to(line, SolveOptions::default(), &mut out, &mut err).unwrap() {
            successes += 1;
        }
    }
    assert_eq!(successes, 1);
    let out = String::from_utf8(out).unwrap();
    let err = String::from_utf8(err).unwrap();
    assert_eq!(
        out,
        "Expression parsed as (2*(3+4))\nResult is 14\nExpression parsed as sqrt((-1))\n"
    );
    assert!(err.starts_with("Missing operator at index 1."), "{err}");
    assert!(err.contains("Logic error. square root of -1 is not a real number"), "{err}");
}

#[test]
fn test_json_output_round_trips() {
    let mut out = Vec::new();
    let options = SolveOptions {
        mode: OutputMode::Json,
        show_tokens: false,
    };
    assert!(solve_to("log_2 8 - 1", options, &mut out, &mut Vec::new()).unwrap());
    let out = String::from_utf8(out).unwrap();
    let json = out.split("\nResult is").next().unwrap();
    let tree: ExpressionNode = from_json(json).unwrap();
    assert_eq!(tree, parse("log_2 8 - 1").unwrap());
    assert_eq!(to_json(&tree).unwrap(), json);
}

#[test]
fn test_one_parser_many_inputs() {
    let mut parser = ArithmeticParser::new("1");
    for (text, expected) in [("1+1", 2.0), ("2^10", 1024.0), ("-(4)", -4.0), ("sqrt 9", 3.0)] {
        parser.reset_with(text);
        assert_eq!(parser.parse().unwrap().evaluate(), Ok(expected), "{text:?}");
    }
}
