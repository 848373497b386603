//! Property-based tests for message interpolation and argument handling.

use nebula_schema_validator::messages::has_tokens;
use nebula_schema_validator::options::coerce_arguments;
use nebula_schema_validator::{RuleRegistry, ValidateOptions, interpolate, rule_fn, validate};
use proptest::prelude::*;
use serde_json::{Value, json};

fn template_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop_oneof![
            "[a-zA-Z ,.]{0,8}",
            (0usize..6).prop_map(|n| format!("{{ARGS[{n}]}}")),
        ],
        0..6,
    )
    .prop_map(|parts| parts.concat())
}

fn args_strategy() -> impl Strategy<Value = Vec<Value>> {
    prop::collection::vec(
        prop_oneof![
            any::<i32>().prop_map(|n| json!(n)),
            "[a-z]{0,6}".prop_map(|s| json!(s)),
            any::<bool>().prop_map(|b| json!(b)),
        ],
        0..4,
    )
}

proptest! {
    #[test]
    fn interpolation_leaves_no_tokens(template in template_strategy(), args in args_strategy()) {
        let message = interpolate(&template, &args);
        prop_assert!(!has_tokens(&message));
    }

    #[test]
    fn plain_template_is_unchanged(template in "[a-zA-Z ,.]{0,32}", args in args_strategy()) {
        prop_assert_eq!(interpolate(&template, &args), template);
    }

    #[test]
    fn scalar_arguments_become_one_element(n in any::<i64>()) {
        prop_assert_eq!(coerce_arguments(Some(json!(n))), vec![json!(n)]);
    }

    #[test]
    fn absent_value_always_passes(pass_if_empty in any::<bool>(), args in args_strategy()) {
        let descriptor = validate(
            &RuleRegistry::new(),
            ValidateOptions::with_fn(rule_fn(|_, _| false))
                .with_arguments(Value::Array(args))
                .with_pass_if_empty(pass_if_empty),
        )
        .unwrap();
        prop_assert!(descriptor.is_valid(None));
    }

    #[test]
    fn bound_arguments_reach_the_rule(args in args_strategy()) {
        let expected = args.clone();
        let descriptor = validate(
            &RuleRegistry::new(),
            ValidateOptions::with_fn(rule_fn(move |_, seen| seen == expected.as_slice()))
                .with_arguments(Value::Array(args)),
        )
        .unwrap();
        prop_assert!(descriptor.is_valid(Some(&json!("x"))));
    }
}
