use mathtree_parser::SyntaxErrorKind::{self, *};
use mathtree_parser::{parse, validate};
use pretty_assertions::assert_eq;

fn errors(text: &str) -> Vec<(usize, SyntaxErrorKind)> {
    validate(text).into_iter().map(|e| (e.index, e.kind)).collect()
}

fn assert_valid(text: &str) {
    assert_eq!(errors(text), vec![], "{text:?}");
    assert!(parse(text).is_ok(), "{text:?} validated but did not parse");
}

#[test]
fn test_two_operators_in_a_row() {
    assert_eq!(
        errors("1**1*/1*^1+*1-*1"),
        vec![
            (2, IncompleteOperation),
            (5, IncompleteOperation),
            (8, IncompleteOperation),
            (11, IncompleteOperation),
            (14, IncompleteOperation),
        ]
    );
}

#[test]
fn test_chained_signs_are_allowed() {
    assert_valid("1++ 2+-3-+4--5* -6 ++++ 4");
    assert_valid("-(-(+1))");
}

#[test]
fn test_operator_before_closing_bracket() {
    assert_eq!(
        errors("2+(3-)+(9+)+5"),
        vec![(4, IncompleteOperation), (9, IncompleteOperation)]
    );
    assert_eq!(
        errors("2+(3- )+(9+ )+5"),
        vec![(4, IncompleteOperation), (10, IncompleteOperation)]
    );
}

#[test]
fn test_missing_operator_before_bracket() {
    assert_eq!(errors("2(3-1)"), vec![(1, MissingOperator)]);
    assert_eq!(errors("2.(3-1)"), vec![(2, MissingOperator)]);
    assert_eq!(errors("2 (3-1)"), vec![(2, MissingOperator)]);
}

#[test]
fn test_missing_operator_after_bracket() {
    assert_eq!(errors("2+(3-1)3"), vec![(7, MissingOperator)]);
    assert_eq!(errors("2+(3-1) 3"), vec![(8, MissingOperator)]);
}

#[test]
fn test_extra_decimal_points() {
    assert_eq!(errors("2.2.2+3"), vec![(3, MissingOperator)]);
    assert_eq!(errors("2..2+3"), vec![(2, MissingOperator)]);
}

#[test]
fn test_unrecognised_symbols() {
    assert!(errors("2+a*3").contains(&(2, UnrecognisedSymbol)));
    assert_eq!(errors("2^x"), vec![(2, UnrecognisedSymbol)]);
    assert_eq!(
        errors("sqr4"),
        vec![
            (0, UnrecognisedSymbol),
            (1, UnrecognisedSymbol),
            (2, UnrecognisedSymbol)
        ]
    );
}

#[test]
fn test_square_root_placement() {
    for text in ["sqrt4", "    sqrt4", "(sqrt4)", "( sqrt4)", "sqrtsqrt4", "2*sqrt4", "sqrt-4"] {
        assert_eq!(errors(text), vec![], "{text:?}");
    }
    assert_eq!(errors("2sqrt4"), vec![(1, MissingOperator)]);
    assert_eq!(errors("2 sqrt4"), vec![(2, MissingOperator)]);
    assert_eq!(errors("(1)sqrt4"), vec![(3, MissingOperator)]);
}

#[test]
fn test_logarithm_placement() {
    for text in [
        "log10",
        "    log10",
        "(log10)",
        "( log10)",
        "loglog_2(2^10)",
        "log log_2 (2^10)",
    ] {
        assert_valid(text);
    }
    assert_eq!(errors("2log10"), vec![(1, MissingOperator)]);
    assert_eq!(errors("2 log_2 8"), vec![(2, MissingOperator)]);
}

#[test]
fn test_nothing_between_brackets() {
    assert_eq!(errors("()"), vec![(0, NothingBetweenBrackets)]);
    assert_eq!(errors("(    )"), vec![(0, NothingBetweenBrackets)]);
    assert_eq!(errors("1+( )"), vec![(2, NothingBetweenBrackets)]);
}

#[test]
fn test_operator_without_left_operand() {
    assert_eq!(errors("*3"), vec![(0, IncompleteOperation)]);
    assert_eq!(errors(" *3"), vec![(1, IncompleteOperation)]);
    assert_eq!(errors("(*3)"), vec![(1, IncompleteOperation)]);
    assert_eq!(errors("( *3)"), vec![(2, IncompleteOperation)]);
}

#[test]
fn test_trailing_operator() {
    assert_eq!(errors("2+3-"), vec![(3, IncompleteOperation)]);
    assert_eq!(errors("2+3 - "), vec![(4, IncompleteOperation)]);
    assert_eq!(errors("sqrt"), vec![(0, IncompleteOperation)]);
}

#[test]
fn test_unpaired_brackets() {
    assert_eq!(
        errors("2-(1 + (3"),
        vec![(2, UnpairedOpeningBracket), (7, UnpairedOpeningBracket)]
    );
    assert_eq!(errors("(2-1) )-3"), vec![(6, UnpairedClosingBracket)]);
    assert_eq!(
        errors(")("),
        vec![
            (0, UnpairedClosingBracket),
            (1, MissingOperator),
            (1, UnpairedOpeningBracket)
        ]
    );
}

#[test]
fn test_results_are_sorted() {
    let found = validate("(2+)*3)+ (");
    let indices: Vec<usize> = found.iter().map(|e| e.index).collect();
    let mut sorted = indices.clone();
    sorted.sort();
    assert_eq!(indices, sorted);
    assert_eq!(found.len(), 3);
}

#[test]
fn test_blank_input() {
    assert_eq!(errors(""), vec![]);
    assert_eq!(errors(" \t "), vec![]);
}
