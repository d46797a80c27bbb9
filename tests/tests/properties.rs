use mathtree_parser::{parse, validate};
use proptest::prelude::*;
use tests::{arb_expression, init_test_logger};

fn arb_fragments() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop::sample::select(vec![
            "1", "0", "7", ".", "+", "-", "*", "/", "^", "(", ")", "sqrt", "log", "log_2", " ",
        ]),
        1..16,
    )
    .prop_map(|parts| parts.concat())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(512))]

    #[test]
    fn prop_generated_expressions_validate_and_parse(text in arb_expression()) {
        init_test_logger();
        prop_assert_eq!(validate(&text), vec![]);
        prop_assert!(parse(&text).is_ok(), "{:?} did not parse", text);
    }

    #[test]
    fn prop_printed_tree_parses_back_to_the_same_tree(text in arb_expression()) {
        let tree = parse(&text).unwrap();
        let printed = tree.print();
        let reparsed = parse(&printed).unwrap();
        prop_assert_eq!(&reparsed, &tree, "{:?} printed as {:?}", text, printed);
        prop_assert_eq!(reparsed.print(), printed);
    }

    #[test]
    fn prop_validator_agrees_with_parser(text in arb_fragments()) {
        prop_assume!(!text.trim().is_empty());
        let errors = validate(&text);
        let parsed = parse(&text);
        if errors.is_empty() {
            prop_assert!(parsed.is_ok(), "{:?} validated but failed with {:?}", text, parsed);
        } else {
            prop_assert!(parsed.is_err(), "{:?} parsed despite {:?}", text, errors);
        }
    }

    #[test]
    fn prop_validator_never_panics(text in "\\PC{0,40}") {
        let errors = validate(&text);
        prop_assert!(errors.windows(2).all(|w| w[0].index <= w[1].index));
        prop_assert!(errors.iter().all(|e| e.index < text.len().max(1)));
    }
}
