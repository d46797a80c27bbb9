//! Shared helpers for the cross-crate tests.

use proptest::prelude::*;

/// Initialise logging once for a test binary.
pub fn init_test_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Unsigned literals in every accepted shape: `7`, `3.25`, `2.`, `.5`.
pub fn arb_number() -> impl Strategy<Value = String> {
    prop_oneof![
        "[0-9]{1,3}",
        "[0-9]{1,3}\\.[0-9]{1,2}",
        "[1-9]\\.",
        "\\.[0-9]{1,2}",
    ]
}

/// Syntactically valid expressions.
///
/// Every generated text passes validation and parses; evaluation may still
/// hit a domain error.
pub fn arb_expression() -> impl Strategy<Value = String> {
    let leaf = arb_number();
    leaf.prop_recursive(4, 32, 2, |inner| {
        prop_oneof![
            (
                inner.clone(),
                prop::sample::select(vec!["+", "-", "*", "/", "^", " + ", " * "]),
                inner.clone()
            )
                .prop_map(|(l, op, r)| format!("{l}{op}{r}")),
            inner.clone().prop_map(|e| format!("({e})")),
            inner.clone().prop_map(|e| format!("-{e}")),
            inner.clone().prop_map(|e| format!("+{e}")),
            inner.clone().prop_map(|e| format!("sqrt{e}")),
            inner.clone().prop_map(|e| format!("log({e})")),
            inner.prop_map(|e| format!("log_2 {e}")),
        ]
    })
}
