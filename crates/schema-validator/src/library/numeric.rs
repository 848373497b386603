//! Numeric rules
//!
//! Numbers arrive as text (form input, query strings) as often as they arrive
//! as JSON numbers, so every rule here works on the coerced text.

use std::sync::LazyLock;

use regex::Regex;
use serde_json::Value;

use super::option_number;
use crate::value::{as_number, to_text};

static INT_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[-+]?(?:0|[1-9][0-9]*)$").unwrap());

static INT_LEADING_ZEROES_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[-+]?[0-9]+$").unwrap());

static FLOAT_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[-+]?(?:[0-9]+)?(?:\.[0-9]*)?(?:[eE][-+]?[0-9]+)?$").unwrap()
});

static DECIMAL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[-+]?(?:[0-9]+)?(?:\.[0-9]+)?$").unwrap());

const PORT_MAX: f64 = 65_535.0;

/// Checks `min` / `max` keys of an optional options object.
fn in_bounds(n: f64, options: Option<&Value>) -> bool {
    option_number(options, "min").is_none_or(|min| n >= min)
        && option_number(options, "max").is_none_or(|max| n <= max)
}

// ============================================================================
// INTEGER / FLOAT / DECIMAL
// ============================================================================

/// `isInt(value, {min, max, allow_leading_zeroes}?)`.
pub fn is_int(value: &Value, args: &[Value]) -> bool {
    let text = to_text(value);
    let options = args.first();
    let leading_zeroes = options
        .and_then(|o| o.get("allow_leading_zeroes"))
        .and_then(Value::as_bool)
        .unwrap_or(false);
    let shape = if leading_zeroes {
        &*INT_LEADING_ZEROES_REGEX
    } else {
        &*INT_REGEX
    };
    shape.is_match(&text) && text.parse::<f64>().is_ok_and(|n| in_bounds(n, options))
}

/// `isFloat(value, {min, max}?)`.
pub fn is_float(value: &Value, args: &[Value]) -> bool {
    let text = to_text(value);
    if matches!(&*text, "" | "." | "+" | "-") || !FLOAT_REGEX.is_match(&text) {
        return false;
    }
    text.parse::<f64>()
        .is_ok_and(|n| in_bounds(n, args.first()))
}

/// `isDecimal(value)`: optional sign, digits, optional fractional part.
pub fn is_decimal(value: &Value, _args: &[Value]) -> bool {
    let text = to_text(value);
    let digits = text.trim_start_matches(['+', '-']);
    !digits.is_empty() && DECIMAL_REGEX.is_match(&text)
}

// ============================================================================
// DIVISIBILITY
// ============================================================================

/// `isDivisibleBy(value, divisor)`.
///
/// A zero or missing divisor never divides.
pub fn is_divisible_by(value: &Value, args: &[Value]) -> bool {
    let Some(divisor) = args.first().and_then(as_number) else {
        return false;
    };
    if divisor == 0.0 {
        return false;
    }
    is_float(value, &[]) && to_text(value).parse::<f64>().is_ok_and(|n| n % divisor == 0.0)
}

// ============================================================================
// BOOLEAN / PORT
// ============================================================================

/// `isBoolean(value)`: one of `true`, `false`, `1`, `0`.
pub fn is_boolean(value: &Value, _args: &[Value]) -> bool {
    matches!(&*to_text(value), "true" | "false" | "1" | "0")
}

/// `isPort(value)`: an integer in `0..=65535`.
pub fn is_port(value: &Value, _args: &[Value]) -> bool {
    is_int(value, &[serde_json::json!({ "min": 0, "max": PORT_MAX })])
}
