use extree::{EvalError, ExpressionTree, InnerError};
use rstest::rstest;

#[rstest]
#[case::bare_literal("0", 0)]
#[case::bare_literal_multi_digit("12345", 12345)]
#[case::add("(3)+(4)", 7)]
#[case::sub("(10)-(4)", 6)]
#[case::mul("(6)*(7)", 42)]
#[case::div_truncates("(7)/(2)", 3)]
#[case::pow("(2)^(8)", 256)]
#[case::nested("((2)+(3))*(4)", 20)]
#[case::right_nested("(2)*((3)+(4))", 14)]
#[case::both_nested("((1)+(2))*((3)+(4))", 21)]
#[case::deeply_nested("(((((1)+(1))+(1))+(1))+(1))", 5)]
fn test_result(#[case] expr: &str, #[case] expected: i64) {
    let tree = ExpressionTree::parse(expr).unwrap();
    assert_eq!(tree.result().unwrap(), expected);
}

#[rstest]
#[case::add("(3)+(4)", "3 + 4", "3 4 +")]
#[case::nested("((2)+(3))*(4)", "2 + 3 * 4", "2 3 + 4 *")]
#[case::bare_literal("42", "42", "42")]
fn test_renderings(#[case] expr: &str, #[case] expected_in: &str, #[case] expected_post: &str) {
    let tree = ExpressionTree::parse(expr).unwrap();
    assert_eq!(tree.in_order().to_string(), expected_in);
    assert_eq!(tree.post_order().to_string(), expected_post);
}

#[test]
fn test_division_by_zero_propagates() {
    let tree = ExpressionTree::parse("(5)/(0)").unwrap();
    let err = tree.result().unwrap_err();
    assert!(matches!(
        err.cause,
        InnerError::Eval(EvalError::ZeroDivision(_))
    ));
}

#[test]
fn test_copies_do_not_alias() {
    let original = ExpressionTree::parse("((2)+(3))*(4)").unwrap();
    let mut copy = original.clone();

    assert_eq!(copy.result().unwrap(), original.result().unwrap());

    copy.set_expression("(9)*(9)").unwrap();
    assert_eq!(copy.result().unwrap(), 81);
    assert_eq!(original.result().unwrap(), 20);
    assert_eq!(original.in_order().to_string(), "2 + 3 * 4");
    assert_eq!(original.post_order().to_string(), "2 3 + 4 *");
}

#[test]
fn test_empty_tree() {
    let tree = ExpressionTree::new();
    assert!(tree.is_empty());
    assert_eq!(tree.result().unwrap(), 0);
    assert_eq!(tree.in_order().to_string(), "");
    assert_eq!(tree.post_order().to_string(), "");
}

#[test]
fn test_self_assignment_keeps_result_and_renderings() {
    let mut tree = ExpressionTree::parse("((2)+(3))*(4)").unwrap();
    tree = tree.clone();
    assert_eq!(tree.result().unwrap(), 20);
    assert_eq!(tree.in_order().to_string(), "2 + 3 * 4");
    assert_eq!(tree.post_order().to_string(), "2 3 + 4 *");
}

#[test]
fn test_malformed_input_is_accepted_until_evaluation() {
    // No structural validation at parse time: these all build best-effort
    // trees whose absent operands evaluate as 0.
    for (expr, expected) in [("(3)+", 3), ("+(4)", 4), ("((2)+(3)", 5)] {
        let tree = ExpressionTree::parse(expr).unwrap();
        assert_eq!(tree.result().unwrap(), expected, "{expr}");
    }
}

#[test]
fn test_unknown_character_is_rejected_at_parse_time() {
    let err = ExpressionTree::parse("(3)$(4)").unwrap_err();
    assert!(matches!(err.cause, InnerError::Lexer(_)));
}
