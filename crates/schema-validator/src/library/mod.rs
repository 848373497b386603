//! Built-in named rules
//!
//! Every rule has the shape `(value, args...) -> bool` and uses validator.js
//! naming (`isEmail`, `isLength`, ...), so option sets written against that
//! vocabulary resolve here unchanged. Values are coerced to text before
//! inspection (see [`to_text`](crate::value::to_text)).
//!
//! Rules never panic and never error: malformed arguments make the rule
//! report `false`.
//!
//! # Categories
//!
//! - **Content**: `contains`, `equals`, `matches`, `isIn`, `isEmpty`
//! - **Charset**: `isAlpha`, `isAlphanumeric`, `isAscii`, `isLowercase`,
//!   `isUppercase`, `isNumeric`, `isHexadecimal`
//! - **Length**: `isLength`, `isByteLength`
//! - **Numeric**: `isInt`, `isFloat`, `isDecimal`, `isDivisibleBy`,
//!   `isBoolean`, `isPort`
//! - **Format**: `isEmail`, `isURL`, `isFQDN`, `isIP`, `isUUID`,
//!   `isMACAddress`, `isHexColor`, `isJSON`, `isBase64`

use std::borrow::Cow;
use std::sync::Arc;

use serde_json::Value;

use crate::rule::RuleFn;
use crate::value::{as_number, to_text};

pub mod format;
pub mod numeric;
pub mod string;

type BuiltinRule = fn(&Value, &[Value]) -> bool;

static RULES: &[(&str, BuiltinRule)] = &[
    // Content
    ("contains", string::contains),
    ("equals", string::equals),
    ("matches", string::matches),
    ("isIn", string::is_in),
    ("isEmpty", string::is_empty),
    // Charset
    ("isAlpha", string::is_alpha),
    ("isAlphanumeric", string::is_alphanumeric),
    ("isAscii", string::is_ascii),
    ("isLowercase", string::is_lowercase),
    ("isUppercase", string::is_uppercase),
    ("isNumeric", string::is_numeric),
    ("isHexadecimal", string::is_hexadecimal),
    // Length
    ("isLength", string::is_length),
    ("isByteLength", string::is_byte_length),
    // Numeric
    ("isInt", numeric::is_int),
    ("isFloat", numeric::is_float),
    ("isDecimal", numeric::is_decimal),
    ("isDivisibleBy", numeric::is_divisible_by),
    ("isBoolean", numeric::is_boolean),
    ("isPort", numeric::is_port),
    // Format
    ("isEmail", format::is_email),
    ("isURL", format::is_url),
    ("isFQDN", format::is_fqdn),
    ("isIP", format::is_ip),
    ("isUUID", format::is_uuid),
    ("isMACAddress", format::is_mac_address),
    ("isHexColor", format::is_hex_color),
    ("isJSON", format::is_json),
    ("isBase64", format::is_base64),
];

/// Looks up a built-in rule by name.
#[must_use]
pub fn lookup(name: &str) -> Option<RuleFn> {
    RULES
        .iter()
        .find(|(rule, _)| *rule == name)
        .map(|&(_, f)| Arc::new(f) as RuleFn)
}

/// Returns `true` if a built-in rule has this name.
#[must_use]
pub fn contains(name: &str) -> bool {
    RULES.iter().any(|(rule, _)| *rule == name)
}

/// Names of all built-in rules, in table order.
pub fn names() -> impl Iterator<Item = &'static str> {
    RULES.iter().map(|(name, _)| *name)
}

// ============================================================================
// ARGUMENT HELPERS
// ============================================================================

/// The nth argument as text, if present.
fn arg_text(args: &[Value], idx: usize) -> Option<Cow<'_, str>> {
    args.get(idx).map(to_text)
}

/// Reads `key` from an options-object argument as a number.
fn option_number(options: Option<&Value>, key: &str) -> Option<f64> {
    options.and_then(|o| o.get(key)).and_then(as_number)
}

/// Resolves `(min, max)` bounds from either `[min, max]` or `[{min, max}]`.
///
/// Missing `min` is 0; missing `max` is unbounded. Negative or fractional
/// values are truncated towards zero.
fn length_bounds(args: &[Value]) -> (usize, Option<usize>) {
    let to_len = |n: f64| if n.is_sign_negative() { 0 } else { n as usize };
    match args.first() {
        Some(options @ Value::Object(_)) => (
            option_number(Some(options), "min").map_or(0, to_len),
            option_number(Some(options), "max").map(to_len),
        ),
        _ => (
            args.first().and_then(as_number).map_or(0, to_len),
            args.get(1).and_then(as_number).map(to_len),
        ),
    }
}
