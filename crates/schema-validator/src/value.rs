//! Type inspection and text coercion over JSON values
//!
//! Field values and rule arguments are carried as [`serde_json::Value`].
//! Absence is modelled separately as `Option::None`, so `Value::Null` is
//! "present but null".

use std::borrow::Cow;

use serde_json::Value;

/// Returns a short type name used in error messages.
#[must_use]
pub fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Returns `true` for null, empty strings, empty arrays and empty objects.
///
/// Numbers and booleans are never empty.
#[must_use]
pub fn is_empty(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(map) => map.is_empty(),
        Value::Bool(_) | Value::Number(_) => false,
    }
}

/// Returns `true` when the value is absent or null.
#[must_use]
pub fn is_nil(value: Option<&Value>) -> bool {
    matches!(value, None | Some(Value::Null))
}

/// Coerces a value to the text a rule inspects.
///
/// Strings are borrowed as-is, null becomes empty text, scalars use their
/// display form and composites are rendered as compact JSON.
#[must_use]
pub fn to_text(value: &Value) -> Cow<'_, str> {
    match value {
        Value::String(s) => Cow::Borrowed(s.as_str()),
        Value::Null => Cow::Borrowed(""),
        Value::Bool(b) => Cow::Borrowed(if *b { "true" } else { "false" }),
        Value::Number(n) => Cow::Owned(n.to_string()),
        Value::Array(_) | Value::Object(_) => Cow::Owned(value.to_string()),
    }
}

/// Renders an argument for message interpolation.
///
/// Arrays are joined with commas, so `["a", "b"]` renders as `a,b`.
#[must_use]
pub fn to_display(value: &Value) -> String {
    match value {
        Value::Null => "null".to_owned(),
        Value::Array(items) => items
            .iter()
            .map(to_display)
            .collect::<Vec<_>>()
            .join(","),
        other => to_text(other).into_owned(),
    }
}

/// Reads a value as an `f64`, parsing numeric strings.
#[must_use]
pub fn as_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}
