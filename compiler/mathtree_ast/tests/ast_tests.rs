use mathtree_ast::{BinaryOperator, EvalError, ExpressionNode};
use pretty_assertions::assert_eq;

fn num(value: f64) -> ExpressionNode {
    ExpressionNode::number(value).unwrap()
}

fn bin(left: ExpressionNode, operator: BinaryOperator, right: ExpressionNode) -> ExpressionNode {
    ExpressionNode::binary(left, operator, right)
}

/// Collects every node of a tree in pre-order using only `subexpressions`.
fn preorder(node: &ExpressionNode) -> Vec<String> {
    let mut out = vec![node.print()];
    for child in node.subexpressions() {
        out.extend(preorder(child));
    }
    out
}

#[test]
fn test_left_grouped_subtraction() {
    // (1-3)-10
    let tree = bin(
        bin(num(1.0), BinaryOperator::Sub, num(3.0)),
        BinaryOperator::Sub,
        num(10.0),
    );
    assert_eq!(tree.evaluate(), Ok(-12.0));
    assert_eq!(tree.print(), "((1-3)-10)");
}

#[test]
fn test_right_grouped_power() {
    // 2^(3^0)
    let tree = bin(
        num(2.0),
        BinaryOperator::Pow,
        bin(num(3.0), BinaryOperator::Pow, num(0.0)),
    );
    assert_eq!(tree.evaluate(), Ok(2.0));
}

#[test]
fn test_repeated_evaluation_is_stable() {
    let tree = ExpressionNode::square_root(ExpressionNode::square_root(num(16.0)));
    assert_eq!(tree.evaluate(), Ok(2.0));
    assert_eq!(tree.evaluate(), Ok(2.0));
}

#[test]
fn test_domain_error_leaves_tree_intact() {
    let tree = bin(
        num(0.0),
        BinaryOperator::Pow,
        ExpressionNode::negation(num(1.0)),
    );
    assert_eq!(
        tree.evaluate(),
        Err(EvalError::UndefinedPower {
            base: 0.0,
            exponent: -1.0
        })
    );
    assert_eq!(tree.print(), "(0^(-1))");
}

#[test]
fn test_negative_base_with_fractional_exponent() {
    let tree = bin(
        ExpressionNode::negation(num(8.0)),
        BinaryOperator::Pow,
        num(0.5),
    );
    assert!(matches!(tree.evaluate(), Err(EvalError::NonRealPower { .. })));
}

#[test]
fn test_log_of_negative_fails() {
    let tree = ExpressionNode::logarithm(ExpressionNode::negation(num(1.0)), 10.0).unwrap();
    assert_eq!(tree.evaluate(), Err(EvalError::NonPositiveLogarithm(-1.0)));
}

#[test]
fn test_preorder_walk() {
    let tree = bin(
        ExpressionNode::logarithm(num(8.0), 2.0).unwrap(),
        BinaryOperator::Mul,
        ExpressionNode::negation(num(3.0)),
    );
    assert_eq!(
        preorder(&tree),
        vec!["(log_2(8)*(-3))", "log_2(8)", "8", "(-3)", "3"]
    );
    assert_eq!(tree.node_count(), 5);
}

#[test]
fn test_error_messages() {
    assert_eq!(EvalError::DivisionByZero.to_string(), "division by zero");
    assert_eq!(
        EvalError::InvalidLogarithmBase(1.0).to_string(),
        "invalid logarithm base 1"
    );
    assert_eq!(
        EvalError::NonFiniteLiteral("1e999".into()).to_string(),
        "number literal \"1e999\" is not finite"
    );
}
