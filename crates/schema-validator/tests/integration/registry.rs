//! Custom rule registration seen from the outside.

use std::sync::Arc;
use std::thread;

use nebula_schema_validator::{
    DynamicRule, Error, RuleRegistry, SchemaValidator, ValidateOptions, predicate, validate,
    validate_json,
};
use pretty_assertions::assert_eq;
use serde_json::json;

#[test]
fn extended_rule_resolves_by_name_with_its_message() {
    let registry = RuleRegistry::new();
    registry
        .extend("isFoo", predicate(|v| v == &json!("foo")), "Should be foo")
        .unwrap();

    let descriptor = validate(&registry, ValidateOptions::new("isFoo")).unwrap();
    assert_eq!(descriptor.message(), "Should be foo");
    assert!(descriptor.is_valid(Some(&json!("foo"))));
    assert!(!descriptor.is_valid(Some(&json!("bar"))));
}

#[test]
fn second_registration_fails_and_first_survives() {
    let registry = RuleRegistry::new();
    registry
        .extend("isFoo", predicate(|v| v == &json!("foo")), "first")
        .unwrap();

    let err = registry
        .extend("isFoo", predicate(|_| true), "second")
        .unwrap_err();
    assert_eq!(err, Error::duplicate_rule("isFoo"));

    let descriptor = validate(&registry, ValidateOptions::new("isFoo")).unwrap();
    assert_eq!(descriptor.message(), "first");
    assert!(!descriptor.is_valid(Some(&json!("bar"))));
}

#[test]
fn empty_name_is_rejected() {
    let registry = RuleRegistry::new();
    assert_eq!(
        registry.extend("", predicate(|_| true), "x").unwrap_err(),
        Error::EmptyName
    );
}

#[test]
fn non_function_rule_is_rejected() {
    let registry = RuleRegistry::new();
    let err = registry
        .extend_dynamic(
            &json!("isBad"),
            DynamicRule::from(json!("notAFunction")),
            None,
        )
        .unwrap_err();
    assert!(matches!(err, Error::WrongType { .. }));
    assert!(!registry.contains("isBad"));
}

#[test]
fn unregistered_name_is_unknown_in_a_fresh_registry() {
    let first = RuleRegistry::new();
    first.extend_default("isFoo", predicate(|_| true)).unwrap();

    let second = RuleRegistry::new();
    let err = validate_json(&second, json!({"validator": "isFoo"})).unwrap_err();
    assert_eq!(err, Error::unknown_rule("isFoo"));
}

#[test]
fn concurrent_registration_admits_one_winner() {
    let validators = SchemaValidator::new();
    let handles: Vec<_> = (0..8)
        .map(|i| {
            let validators = validators.clone();
            thread::spawn(move || {
                validators
                    .extend("isShared", predicate(|_| true), format!("from {i}"))
                    .is_ok()
            })
        })
        .collect();

    let winners = handles
        .into_iter()
        .map(|h| h.join().unwrap())
        .filter(|ok| *ok)
        .count();
    assert_eq!(winners, 1);
    assert_eq!(validators.registry().len(), 1);
}

#[test]
fn shared_registry_serves_many_schemas() {
    let registry = Arc::new(RuleRegistry::new());
    let is_even = predicate(|v| v.as_i64().is_some_and(|n| n % 2 == 0));
    registry.extend("isEven", is_even, "Should be even").unwrap();

    let a = SchemaValidator::with_registry(Arc::clone(&registry));
    let b = SchemaValidator::with_registry(registry);

    let da = a.validate(ValidateOptions::new("isEven")).unwrap();
    let db = b
        .validate_json(json!({"validator": "isEven", "message": "Even please"}))
        .unwrap();
    assert!(da.is_valid(Some(&json!(4))));
    assert!(!db.is_valid(Some(&json!(3))));
    assert_eq!(db.message(), "Even please");
}
