//! Options for building a field validator descriptor
//!
//! Options can be assembled with the typed builder or parsed from a JSON
//! mapping using the camelCase keys schema definitions are written in:
//!
//! ```json
//! { "validator": "isLength", "arguments": [3, 50], "passIfEmpty": true,
//!   "message": "Name should be between {ARGS[0]} and {ARGS[1]} characters",
//!   "type": "isLength" }
//! ```
//!
//! Keys other than the four reserved ones are kept as passthrough options and
//! copied onto the descriptor.

use serde_json::{Map, Value};

use crate::error::{Error, Result};
use crate::rule::{RuleFn, RuleRef};
use crate::value::type_name;

/// Option keys consumed while building a descriptor.
pub const RESERVED_KEYS: [&str; 4] = ["validator", "arguments", "passIfEmpty", "message"];

/// Reads a `validator` option. Only a rule name can arrive as a value.
fn parse_validator(value: Value) -> Result<RuleRef> {
    match value {
        Value::String(name) => Ok(RuleRef::Name(name)),
        other => Err(Error::wrong_type(
            "validator",
            "a function or a string",
            type_name(&other),
        )),
    }
}

/// Reads a `passIfEmpty` option; null counts as unset.
fn parse_pass_if_empty(value: Value) -> Result<bool> {
    match value {
        Value::Null => Ok(false),
        Value::Bool(flag) => Ok(flag),
        other => Err(Error::wrong_type("passIfEmpty", "a boolean", type_name(&other))),
    }
}

/// Reads a `message` option. Anything but a string is ignored.
fn parse_message(value: Value) -> Option<String> {
    match value {
        Value::String(message) => Some(message),
        _ => None,
    }
}

/// Coerces an `arguments` option into a positional sequence.
///
/// An array is used as-is, any other value becomes a one-element sequence,
/// and an absent option is empty.
#[must_use]
pub fn coerce_arguments(arguments: Option<Value>) -> Vec<Value> {
    match arguments {
        None => Vec::new(),
        Some(Value::Array(items)) => items,
        Some(single) => vec![single],
    }
}

// ============================================================================
// VALIDATE OPTIONS
// ============================================================================

/// Options for [`validate`](crate::validate).
///
/// # Examples
///
/// ```
/// use nebula_schema_validator::ValidateOptions;
/// use serde_json::json;
///
/// let options = ValidateOptions::new("isLength")
///     .with_arguments(json!([3, 50]))
///     .with_pass_if_empty(true)
///     .with_message("Should be between {ARGS[0]} and {ARGS[1]} characters")
///     .with_extra("type", json!("isLength"));
///
/// assert_eq!(options.arguments(), &[json!(3), json!(50)]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ValidateOptions {
    pub(crate) rule: Option<RuleRef>,
    pub(crate) arguments: Vec<Value>,
    pub(crate) pass_if_empty: bool,
    pub(crate) message: Option<String>,
    pub(crate) extra: Map<String, Value>,
    /// First shape error hit by [`with_extra`](Self::with_extra), raised by
    /// [`validate`](crate::validate).
    pub(crate) shape_error: Option<Error>,
}

impl ValidateOptions {
    /// Creates options for the given rule.
    pub fn new(rule: impl Into<RuleRef>) -> Self {
        Self {
            rule: Some(rule.into()),
            ..Self::default()
        }
    }

    /// Creates options from a rule function.
    #[must_use]
    pub fn with_fn(rule: RuleFn) -> Self {
        Self::new(RuleRef::Function(rule))
    }

    /// Parses options from a JSON mapping.
    ///
    /// A string `validator` is a rule name. Use
    /// [`from_json_with_rule`](Self::from_json_with_rule) to pair a mapping
    /// with a rule function. A `message` that is not a string is ignored, the
    /// same as an absent one.
    ///
    /// # Errors
    ///
    /// [`Error::WrongType`] if `options` is not an object, `validator` is
    /// present but not a string, or `passIfEmpty` is neither a boolean nor
    /// null.
    pub fn from_json(options: Value) -> Result<Self> {
        let mut map = into_object(options)?;
        let rule = map.remove("validator").map(parse_validator).transpose()?;
        Self::from_map(rule, map)
    }

    /// Parses options from a JSON mapping, running `rule` as the validator.
    ///
    /// Any `validator` key in the mapping is discarded.
    ///
    /// # Errors
    ///
    /// Same shape errors as [`from_json`](Self::from_json), except for
    /// `validator`.
    pub fn from_json_with_rule(options: Value, rule: RuleFn) -> Result<Self> {
        let mut map = into_object(options)?;
        map.remove("validator");
        Self::from_map(Some(RuleRef::Function(rule)), map)
    }

    fn from_map(rule: Option<RuleRef>, mut map: Map<String, Value>) -> Result<Self> {
        let arguments = coerce_arguments(map.remove("arguments"));
        let pass_if_empty = match map.remove("passIfEmpty") {
            Some(value) => parse_pass_if_empty(value)?,
            None => false,
        };
        let message = map.remove("message").and_then(parse_message);
        Ok(Self {
            rule,
            arguments,
            pass_if_empty,
            message,
            extra: map,
            shape_error: None,
        })
    }

    /// Sets the positional arguments, coercing a single value to a sequence.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_arguments(mut self, arguments: impl Into<Value>) -> Self {
        self.arguments = coerce_arguments(Some(arguments.into()));
        self
    }

    /// Skips the rule for empty or null values.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_pass_if_empty(mut self, pass_if_empty: bool) -> Self {
        self.pass_if_empty = pass_if_empty;
        self
    }

    /// Sets the failure message template.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Adds a passthrough option.
    ///
    /// Reserved keys are checked the same way [`from_json`](Self::from_json)
    /// checks them and routed to their typed setters instead. A `validator`
    /// that is not a string or a `passIfEmpty` that is not a boolean is kept
    /// as a shape error and reported by [`validate`](crate::validate). A
    /// `message` that is not a string is ignored.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_extra(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        let key = key.into();
        let value = value.into();
        match key.as_str() {
            "arguments" => self.arguments = coerce_arguments(Some(value)),
            "passIfEmpty" => match parse_pass_if_empty(value) {
                Ok(flag) => self.pass_if_empty = flag,
                Err(err) => self.record_shape_error(err),
            },
            "message" => {
                if let Some(message) = parse_message(value) {
                    self.message = Some(message);
                }
            }
            "validator" => match parse_validator(value) {
                Ok(rule) => self.rule = Some(rule),
                Err(err) => self.record_shape_error(err),
            },
            _ => {
                self.extra.insert(key, value);
            }
        }
        self
    }

    fn record_shape_error(&mut self, err: Error) {
        if self.shape_error.is_none() {
            self.shape_error = Some(err);
        }
    }

    /// The rule reference, if one was given.
    #[must_use]
    pub fn rule(&self) -> Option<&RuleRef> {
        self.rule.as_ref()
    }

    /// Positional arguments passed to the rule after the value.
    #[must_use]
    pub fn arguments(&self) -> &[Value] {
        &self.arguments
    }

    /// Whether empty or null values skip the rule.
    #[must_use]
    pub fn pass_if_empty(&self) -> bool {
        self.pass_if_empty
    }

    /// The caller-supplied message template.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Passthrough options.
    #[must_use]
    pub fn extra(&self) -> &Map<String, Value> {
        &self.extra
    }

    /// The first shape error recorded by [`with_extra`](Self::with_extra).
    #[must_use]
    pub fn shape_error(&self) -> Option<&Error> {
        self.shape_error.as_ref()
    }
}

impl TryFrom<Value> for ValidateOptions {
    type Error = Error;

    fn try_from(options: Value) -> Result<Self> {
        Self::from_json(options)
    }
}

fn into_object(options: Value) -> Result<Map<String, Value>> {
    match options {
        Value::Object(map) => Ok(map),
        other => Err(Error::wrong_type("options", "an object", type_name(&other))),
    }
}
