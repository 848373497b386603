//! # nebula-schema-validator
//!
//! Adapts named validation rules into field validator descriptors for schema
//! validation hooks.
//!
//! A schema field declares *which rule to run, with which arguments, and what
//! to say on failure*; [`validate`] turns that declaration into a
//! [`ValidatorDescriptor`] holding a `bool`-returning validator, the resolved
//! message and any passthrough options.
//!
//! ## Quick Start
//!
//! ```
//! use nebula_schema_validator::{RuleRegistry, ValidateOptions, predicate, validate};
//! use serde_json::json;
//!
//! let registry = RuleRegistry::new();
//!
//! // Built-in rule, message from the default table.
//! let email = validate(&registry, ValidateOptions::new("isEmail").with_pass_if_empty(true))?;
//! assert!(email.is_valid(Some(&json!("user@example.com"))));
//! assert!(email.is_valid(Some(&json!(""))));
//! assert_eq!(email.message(), "Should be a valid email address");
//!
//! // Custom rule, registered once, referenced by name.
//! registry.extend("isFoo", predicate(|v| v == &json!("foo")), "Should be foo")?;
//! let foo = validate(&registry, ValidateOptions::new("isFoo"))?;
//! assert!(!foo.is_valid(Some(&json!("bar"))));
//! # Ok::<(), nebula_schema_validator::Error>(())
//! ```
//!
//! ## Rule resolution
//!
//! A rule is either a function ([`RuleRef::Function`]) or a name
//! ([`RuleRef::Name`]). Names resolve against the built-in [`library`]
//! first and the caller's [`RuleRegistry`] second.
//!
//! ## Messages
//!
//! The first non-empty of: the caller's message, the registry default for the
//! rule, the built-in default (see [`default_error_messages`]), `"Error"`.
//! `{ARGS[n]}` tokens are replaced with the nth argument.
//!
//! ## Runtime semantics
//!
//! An absent value always passes. With `passIfEmpty`, null and empty values
//! pass as well. Everything else goes to the rule.

pub mod builder;
pub mod descriptor;
pub mod error;
pub mod library;
pub mod messages;
pub mod options;
pub mod registry;
pub mod rule;
pub mod value;

pub use builder::{SchemaValidator, resolve_rule, validate, validate_all, validate_json};
pub use descriptor::{FieldValidator, FieldValidatorFn, ValidatorDescriptor};
pub use error::{Error, Result, ValidationFailure};
pub use messages::{default_error_messages, interpolate};
pub use options::ValidateOptions;
pub use registry::{DynamicRule, RuleRegistry};
pub use rule::{RuleFn, RuleRef, predicate, rule_fn};
