//! Field validator descriptors
//!
//! A [`ValidatorDescriptor`] is what a schema's field-validation hook
//! consumes: a `validator` callable returning `bool`, a `message` used on
//! failure, and whatever passthrough options the caller attached.

use std::fmt;
use std::sync::Arc;

use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::ValidationFailure;
use crate::rule::RuleFn;
use crate::value::is_empty;

// ============================================================================
// FIELD VALIDATOR
// ============================================================================

/// A field validator as a plain shared closure.
pub type FieldValidatorFn = Arc<dyn Fn(Option<&Value>) -> bool + Send + Sync>;

/// The callable half of a descriptor.
///
/// Absent values (`None`) always pass. When built with `pass_if_empty`,
/// null and empty values pass too. Anything else is handed to the rule
/// together with the bound arguments.
///
/// Numbers and booleans are never empty: `0` and `false` reach the rule even
/// with `pass_if_empty` set.
#[derive(Clone)]
pub struct FieldValidator {
    rule: RuleFn,
    arguments: Arc<[Value]>,
    pass_if_empty: bool,
}

impl FieldValidator {
    pub(crate) fn new(rule: RuleFn, arguments: Vec<Value>, pass_if_empty: bool) -> Self {
        Self {
            rule,
            arguments: arguments.into(),
            pass_if_empty,
        }
    }

    /// Runs the rule against `value`.
    #[must_use]
    pub fn call(&self, value: Option<&Value>) -> bool {
        self.call_with(value, &[])
    }

    /// Runs the rule with `extra` appended after the bound arguments.
    #[must_use]
    pub fn call_with(&self, value: Option<&Value>, extra: &[Value]) -> bool {
        let Some(value) = value else {
            return true;
        };
        if self.pass_if_empty && is_empty(value) {
            return true;
        }
        if extra.is_empty() {
            (self.rule)(value, &self.arguments[..])
        } else {
            let args: Vec<Value> = self.arguments.iter().chain(extra).cloned().collect();
            (self.rule)(value, &args[..])
        }
    }

    /// Arguments bound at construction.
    #[must_use]
    pub fn arguments(&self) -> &[Value] {
        &self.arguments
    }

    /// Whether empty or null values skip the rule.
    #[must_use]
    pub fn pass_if_empty(&self) -> bool {
        self.pass_if_empty
    }

    /// Converts into a plain shared closure for hooks that take one.
    #[must_use]
    pub fn into_fn(self) -> FieldValidatorFn {
        Arc::new(move |value: Option<&Value>| self.call(value))
    }
}

impl fmt::Debug for FieldValidator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldValidator")
            .field("arguments", &self.arguments)
            .field("pass_if_empty", &self.pass_if_empty)
            .finish_non_exhaustive()
    }
}

// ============================================================================
// DESCRIPTOR
// ============================================================================

/// A ready-to-attach field validator with its message and passthrough options.
///
/// Serializes to `{"message": ..., ...extra}`; the callable is skipped.
#[derive(Debug, Clone, Serialize)]
pub struct ValidatorDescriptor {
    #[serde(skip)]
    validator: FieldValidator,
    #[serde(skip)]
    rule_name: Option<String>,
    message: String,
    #[serde(flatten)]
    extra: Map<String, Value>,
}

impl ValidatorDescriptor {
    pub(crate) fn new(
        validator: FieldValidator,
        rule_name: Option<String>,
        message: String,
        extra: Map<String, Value>,
    ) -> Self {
        Self {
            validator,
            rule_name,
            message,
            extra,
        }
    }

    /// The field validator.
    #[must_use]
    pub fn validator(&self) -> &FieldValidator {
        &self.validator
    }

    /// The resolved failure message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Passthrough options.
    #[must_use]
    pub fn extra(&self) -> &Map<String, Value> {
        &self.extra
    }

    /// Looks up a passthrough option.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.extra.get(key)
    }

    /// Name of the rule, if the descriptor was built from a named rule.
    #[must_use]
    pub fn rule_name(&self) -> Option<&str> {
        self.rule_name.as_deref()
    }

    /// Shorthand for `self.validator().call(value)`.
    #[must_use]
    pub fn is_valid(&self, value: Option<&Value>) -> bool {
        self.validator.call(value)
    }

    /// Runs the validator and turns a rejection into a [`ValidationFailure`].
    ///
    /// # Errors
    ///
    /// Returns the failure carrying this descriptor's message when the value
    /// is rejected.
    pub fn check(&self, value: Option<&Value>) -> Result<(), ValidationFailure> {
        if self.validator.call(value) {
            Ok(())
        } else {
            Err(ValidationFailure::new(
                self.rule_name.clone(),
                self.message.clone(),
            ))
        }
    }

    /// The serializable part as a JSON object: `message` plus passthrough
    /// options.
    #[must_use]
    pub fn to_json(&self) -> Value {
        let mut map = self.extra.clone();
        map.insert("message".to_owned(), Value::String(self.message.clone()));
        Value::Object(map)
    }

    /// Splits the descriptor into its validator, message and passthrough
    /// options.
    #[must_use]
    pub fn into_parts(self) -> (FieldValidator, String, Map<String, Value>) {
        (self.validator, self.message, self.extra)
    }
}
