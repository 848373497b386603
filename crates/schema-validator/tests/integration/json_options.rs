//! Descriptors built from JSON schema definitions.

use nebula_schema_validator::{Error, RuleRegistry, ValidateOptions, predicate, validate_json};
use pretty_assertions::assert_eq;
use rstest::rstest;
use serde_json::{Value, json};

#[rstest]
#[case::email(json!({"validator": "isEmail"}), json!("user@example.com"), true)]
#[case::email_rejected(json!({"validator": "isEmail"}), json!("user@"), false)]
#[case::url(json!({"validator": "isURL"}), json!("https://example.com/path?q=1"), true)]
#[case::int_range(
    json!({"validator": "isInt", "arguments": {"min": 1, "max": 10}}),
    json!("7"),
    true
)]
#[case::int_out_of_range(
    json!({"validator": "isInt", "arguments": {"min": 1, "max": 10}}),
    json!("11"),
    false
)]
#[case::contains(json!({"validator": "contains", "arguments": "@"}), json!("a@b"), true)]
#[case::is_in(json!({"validator": "isIn", "arguments": [["red", "green"]]}), json!("blue"), false)]
#[case::matches(json!({"validator": "matches", "arguments": ["^\\d{3}$"]}), json!("123"), true)]
#[case::uuid(
    json!({"validator": "isUUID", "arguments": 4}),
    json!("3b241101-e2bb-4255-8caf-4136c566a962"),
    true
)]
fn library_rules_from_json(#[case] options: Value, #[case] value: Value, #[case] expected: bool) {
    let descriptor = validate_json(&RuleRegistry::new(), options).unwrap();
    assert_eq!(descriptor.is_valid(Some(&value)), expected);
}

#[test]
fn table_messages_are_interpolated() {
    let descriptor = validate_json(
        &RuleRegistry::new(),
        json!({"validator": "contains", "arguments": "@"}),
    )
    .unwrap();
    assert_eq!(descriptor.message(), "Should contain @");
}

#[test]
fn pass_if_empty_from_json() {
    let descriptor = validate_json(
        &RuleRegistry::new(),
        json!({"validator": "isEmail", "passIfEmpty": true}),
    )
    .unwrap();
    assert!(descriptor.is_valid(Some(&json!(""))));
    assert!(descriptor.is_valid(Some(&json!(null))));
    assert!(!descriptor.is_valid(Some(&json!("nope"))));
}

#[test]
fn missing_validator_key() {
    let err = validate_json(&RuleRegistry::new(), json!({"message": "x"})).unwrap_err();
    assert_eq!(err, Error::MissingValidator);
}

#[rstest]
#[case(json!({"validator": 42}))]
#[case(json!({"validator": "isEmail", "passIfEmpty": 1}))]
#[case(json!(["isEmail"]))]
fn malformed_options(#[case] options: Value) {
    let err = validate_json(&RuleRegistry::new(), options).unwrap_err();
    assert!(matches!(err, Error::WrongType { .. }));
}

#[test]
fn json_options_with_function_rule() {
    let options = ValidateOptions::from_json_with_rule(
        json!({"arguments": [2], "message": "Need {ARGS[0]} items", "ui": "list"}),
        predicate(|v| v.as_array().is_some_and(|a| a.len() >= 2)),
    )
    .unwrap();
    let descriptor = nebula_schema_validator::validate(&RuleRegistry::new(), options).unwrap();

    assert_eq!(descriptor.message(), "Need 2 items");
    assert_eq!(
        descriptor.to_json(),
        json!({"message": "Need 2 items", "ui": "list"})
    );
    assert!(descriptor.is_valid(Some(&json!([1, 2]))));
    assert!(!descriptor.is_valid(Some(&json!([1]))));
}

#[test]
fn builder_extras_fail_like_json_options() {
    let registry = RuleRegistry::new();
    let built = ValidateOptions::new("isEmail").with_extra("passIfEmpty", "yes");
    let from_builder = nebula_schema_validator::validate(&registry, built).unwrap_err();
    let options = json!({"validator": "isEmail", "passIfEmpty": "yes"});
    let from_json = validate_json(&registry, options).unwrap_err();
    assert_eq!(from_builder, from_json);
}
