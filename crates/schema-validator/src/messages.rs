//! Default error messages and `{ARGS[n]}` templating
//!
//! The default table ships as a JSON asset compiled into the crate and is
//! parsed once on first access. It is read-only at runtime.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::{Captures, Regex};
use serde_json::Value;

use crate::value::to_display;

/// Message used when no other template applies.
pub const FALLBACK_MESSAGE: &str = "Error";

static DEFAULT_MESSAGES_JSON: &str = include_str!("default_messages.json");

static DEFAULT_MESSAGES: LazyLock<BTreeMap<String, String>> = LazyLock::new(|| {
    serde_json::from_str(DEFAULT_MESSAGES_JSON).expect("default_messages.json is valid")
});

static ARGS_TOKEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\{ARGS\[(\d+)\]\}").expect("valid ARGS token pattern")
});

// ============================================================================
// DEFAULT TABLE
// ============================================================================

/// The built-in message templates, keyed by rule-library name.
#[must_use]
pub fn default_error_messages() -> &'static BTreeMap<String, String> {
    &DEFAULT_MESSAGES
}

/// Looks up the built-in template for a rule name.
#[must_use]
pub fn default_message(rule: &str) -> Option<&'static str> {
    DEFAULT_MESSAGES.get(rule).map(String::as_str)
}

/// Returns the first non-empty candidate, or [`FALLBACK_MESSAGE`].
#[must_use]
pub fn first_message<'a, I>(candidates: I) -> &'a str
where
    I: IntoIterator<Item = Option<&'a str>>,
{
    candidates
        .into_iter()
        .flatten()
        .find(|m| !m.is_empty())
        .unwrap_or(FALLBACK_MESSAGE)
}

// ============================================================================
// TEMPLATING
// ============================================================================

/// Replaces every `{ARGS[n]}` token with the nth argument rendered as text.
///
/// Indices past the end of `args` render as empty text.
///
/// ```
/// use nebula_schema_validator::messages::interpolate;
/// use serde_json::json;
///
/// let msg = interpolate("between {ARGS[0]} and {ARGS[1]}{ARGS[7]}", &[json!(2), json!(8)]);
/// assert_eq!(msg, "between 2 and 8");
/// ```
#[must_use]
pub fn interpolate(template: &str, args: &[Value]) -> String {
    ARGS_TOKEN
        .replace_all(template, |caps: &Captures<'_>| {
            caps[1]
                .parse::<usize>()
                .ok()
                .and_then(|idx| args.get(idx))
                .map(to_display)
                .unwrap_or_default()
        })
        .into_owned()
}

/// Returns `true` if the text still contains an `{ARGS[n]}` token.
#[must_use]
pub fn has_tokens(text: &str) -> bool {
    ARGS_TOKEN.is_match(text)
}
