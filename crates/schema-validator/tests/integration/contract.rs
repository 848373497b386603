//! The descriptor contract a schema hook relies on.

use nebula_schema_validator::messages::has_tokens;
use nebula_schema_validator::{
    Error, RuleFn, RuleRegistry, ValidateOptions, predicate, rule_fn, validate,
};
use pretty_assertions::assert_eq;
use serde_json::{Value, json};

fn at_least_arg_chars() -> RuleFn {
    rule_fn(|value, args| {
        let min = args.first().and_then(Value::as_u64).unwrap_or(0);
        value
            .as_str()
            .is_some_and(|s| (s.chars().count() as u64) >= min)
    })
}

#[test]
fn function_rule_yields_callable_and_resolved_message() {
    let registry = RuleRegistry::new();
    let descriptor = validate(
        &registry,
        ValidateOptions::with_fn(predicate(|_| true))
            .with_arguments(json!(["a", "b"]))
            .with_message("{ARGS[0]} then {ARGS[1]} then {ARGS[5]}"),
    )
    .unwrap();

    assert!(descriptor.is_valid(Some(&json!("anything"))));
    assert_eq!(descriptor.message(), "a then b then ");
    assert!(!has_tokens(descriptor.message()));
}

#[test]
fn unresolvable_name_fails() {
    let err = validate(&RuleRegistry::new(), ValidateOptions::new("noSuchRule123")).unwrap_err();
    assert_eq!(err, Error::unknown_rule("noSuchRule123"));
}

#[test]
fn length_predicate_with_pass_if_empty() {
    // `v.len() > 3` with argument 4 bound and ignored by the predicate.
    let longer_than_three = predicate(|v| v.as_str().is_some_and(|s| s.chars().count() > 3));
    let descriptor = validate(
        &RuleRegistry::new(),
        ValidateOptions::with_fn(longer_than_three)
            .with_arguments(4)
            .with_message("{ARGS[0]}")
            .with_pass_if_empty(true),
    )
    .unwrap();

    assert_eq!(descriptor.message(), "4");
    assert!(descriptor.is_valid(None));
    assert!(descriptor.is_valid(Some(&json!(""))));
    assert!(!descriptor.is_valid(Some(&json!("ab"))));
    assert!(descriptor.is_valid(Some(&json!("abcd"))));
}

#[test]
fn arguments_reach_the_rule() {
    let descriptor = validate(
        &RuleRegistry::new(),
        ValidateOptions::with_fn(at_least_arg_chars()).with_arguments(3),
    )
    .unwrap();
    assert!(descriptor.is_valid(Some(&json!("abc"))));
    assert!(!descriptor.is_valid(Some(&json!("ab"))));
}

#[test]
fn absent_passes_without_pass_if_empty_but_empty_does_not() {
    let descriptor = validate(&RuleRegistry::new(), ValidateOptions::new("isEmail")).unwrap();

    assert!(descriptor.is_valid(None));
    assert!(!descriptor.is_valid(Some(&json!(""))));
    assert!(!descriptor.is_valid(Some(&json!(null))));
}

#[test]
fn passthrough_fields_are_copied() {
    let descriptor = validate(
        &RuleRegistry::new(),
        ValidateOptions::new("isEmail")
            .with_extra("foo", "bar")
            .with_extra("type", json!("isEmail"))
            .with_extra("nested", json!({"a": [1, 2]})),
    )
    .unwrap();

    assert_eq!(descriptor.get("foo"), Some(&json!("bar")));
    assert_eq!(descriptor.get("type"), Some(&json!("isEmail")));
    assert_eq!(descriptor.get("nested"), Some(&json!({"a": [1, 2]})));
    assert_eq!(
        descriptor.to_json(),
        json!({
            "message": "Should be a valid email address",
            "foo": "bar",
            "type": "isEmail",
            "nested": {"a": [1, 2]}
        })
    );
}

#[test]
fn named_library_rule_with_arguments() {
    let descriptor = validate(
        &RuleRegistry::new(),
        ValidateOptions::new("isLength")
            .with_arguments(json!([3, 50]))
            .with_message("Name should be between {ARGS[0]} and {ARGS[1]} characters"),
    )
    .unwrap();

    assert_eq!(
        descriptor.message(),
        "Name should be between 3 and 50 characters"
    );
    assert!(descriptor.is_valid(Some(&json!("Alice"))));
    assert!(!descriptor.is_valid(Some(&json!("Al"))));
    assert!(!descriptor.is_valid(Some(&json!("x".repeat(51)))));
}

#[test]
fn check_reports_failure_message() {
    let descriptor = validate(
        &RuleRegistry::new(),
        ValidateOptions::new("matches")
            .with_arguments(json!(["^[a-z]+$", "i"]))
            .with_message("Only letters allowed"),
    )
    .unwrap();

    assert!(descriptor.check(Some(&json!("Hello"))).is_ok());
    let failure = descriptor.check(Some(&json!("Hello1"))).unwrap_err();
    assert_eq!(failure.message, "Only letters allowed");
    assert_eq!(failure.rule.as_deref(), Some("matches"));
}
