//! Content, charset and length rules

use std::sync::LazyLock;

use regex::{Regex, RegexBuilder};
use serde_json::Value;

use super::{arg_text, length_bounds};
use crate::value::to_text;

static NUMERIC_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[+-]?([0-9]*[.])?[0-9]+$").unwrap());

static HEXADECIMAL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?i)(0x|0h)?[0-9a-f]+$").unwrap());

// ============================================================================
// CONTENT
// ============================================================================

/// `contains(value, seed)`: the text contains `seed`.
pub fn contains(value: &Value, args: &[Value]) -> bool {
    let seed = arg_text(args, 0).unwrap_or_default();
    to_text(value).contains(&*seed)
}

/// `equals(value, comparison)`: the text equals `comparison`.
pub fn equals(value: &Value, args: &[Value]) -> bool {
    arg_text(args, 0).is_some_and(|other| to_text(value) == other)
}

/// `matches(value, pattern, flags?)`: the text matches a regular expression.
///
/// Flags follow JavaScript spelling: `i` (case-insensitive), `m` (multi-line)
/// and `s` (dot matches newline). Unknown flags are ignored. An invalid
/// pattern never matches.
pub fn matches(value: &Value, args: &[Value]) -> bool {
    let Some(pattern) = arg_text(args, 0) else {
        return false;
    };
    let flags = arg_text(args, 1).unwrap_or_default();
    RegexBuilder::new(&pattern)
        .case_insensitive(flags.contains('i'))
        .multi_line(flags.contains('m'))
        .dot_matches_new_line(flags.contains('s'))
        .build()
        .is_ok_and(|re| re.is_match(&to_text(value)))
}

/// `isIn(value, options)`: the text is one of the allowed options.
///
/// `options` may be an array (element match), an object (key match) or a
/// string (substring match).
pub fn is_in(value: &Value, args: &[Value]) -> bool {
    let text = to_text(value);
    match args.first() {
        Some(Value::Array(options)) => options.iter().any(|o| to_text(o) == text),
        Some(Value::Object(options)) => options.contains_key(&*text),
        Some(Value::String(options)) => options.contains(&*text),
        _ => false,
    }
}

/// `isEmpty(value)`: the text has zero length.
pub fn is_empty(value: &Value, _args: &[Value]) -> bool {
    to_text(value).is_empty()
}

// ============================================================================
// CHARSET
// ============================================================================

/// `isAlpha(value)`: non-empty, ASCII letters only.
pub fn is_alpha(value: &Value, _args: &[Value]) -> bool {
    non_empty_all(value, |c| c.is_ascii_alphabetic())
}

/// `isAlphanumeric(value)`: non-empty, ASCII letters and digits only.
pub fn is_alphanumeric(value: &Value, _args: &[Value]) -> bool {
    non_empty_all(value, |c| c.is_ascii_alphanumeric())
}

/// `isAscii(value)`: non-empty, ASCII only.
pub fn is_ascii(value: &Value, _args: &[Value]) -> bool {
    non_empty_all(value, |c| c.is_ascii())
}

/// `isLowercase(value)`: the text has no uppercase characters.
pub fn is_lowercase(value: &Value, _args: &[Value]) -> bool {
    let text = to_text(value);
    text == text.to_lowercase()
}

/// `isUppercase(value)`: the text has no lowercase characters.
pub fn is_uppercase(value: &Value, _args: &[Value]) -> bool {
    let text = to_text(value);
    text == text.to_uppercase()
}

/// `isNumeric(value)`: optional sign, digits, optional single decimal point.
pub fn is_numeric(value: &Value, _args: &[Value]) -> bool {
    NUMERIC_REGEX.is_match(&to_text(value))
}

/// `isHexadecimal(value)`: hex digits with an optional `0x`/`0h` prefix.
pub fn is_hexadecimal(value: &Value, _args: &[Value]) -> bool {
    HEXADECIMAL_REGEX.is_match(&to_text(value))
}

fn non_empty_all(value: &Value, pred: impl Fn(char) -> bool) -> bool {
    let text = to_text(value);
    !text.is_empty() && text.chars().all(pred)
}

// ============================================================================
// LENGTH
// ============================================================================

/// `isLength(value, min, max?)` or `isLength(value, {min, max})`.
///
/// Counts Unicode scalar values.
pub fn is_length(value: &Value, args: &[Value]) -> bool {
    within(to_text(value).chars().count(), args)
}

/// `isByteLength(value, min, max?)` or `isByteLength(value, {min, max})`.
///
/// Counts UTF-8 bytes.
pub fn is_byte_length(value: &Value, args: &[Value]) -> bool {
    within(to_text(value).len(), args)
}

fn within(len: usize, args: &[Value]) -> bool {
    let (min, max) = length_bounds(args);
    len >= min && max.is_none_or(|max| len <= max)
}
