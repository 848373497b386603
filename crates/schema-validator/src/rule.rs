//! Rule functions and rule references

use std::fmt;
use std::sync::Arc;

use serde_json::Value;

/// A validation rule: the candidate value followed by positional arguments.
pub type RuleFn = Arc<dyn Fn(&Value, &[Value]) -> bool + Send + Sync>;

/// Wraps a closure into a [`RuleFn`].
///
/// ```
/// use nebula_schema_validator::rule_fn;
/// use serde_json::json;
///
/// let longer_than = rule_fn(|value, args| {
///     let min = args.first().and_then(|a| a.as_u64()).unwrap_or(0) as usize;
///     value.as_str().is_some_and(|s| s.chars().count() > min)
/// });
/// assert!(longer_than(&json!("abcd"), &[json!(3)]));
/// ```
pub fn rule_fn<F>(f: F) -> RuleFn
where
    F: Fn(&Value, &[Value]) -> bool + Send + Sync + 'static,
{
    Arc::new(f)
}

/// Wraps a single-argument predicate into a [`RuleFn`] that ignores arguments.
pub fn predicate<F>(f: F) -> RuleFn
where
    F: Fn(&Value) -> bool + Send + Sync + 'static,
{
    Arc::new(move |value: &Value, _args: &[Value]| f(value))
}

// ============================================================================
// RULE REFERENCE
// ============================================================================

/// The rule a descriptor should run: a function, or a name to resolve.
///
/// Names resolve against the rule library first, then the custom registry.
#[derive(Clone)]
pub enum RuleRef {
    /// A rule supplied directly.
    Function(RuleFn),
    /// A rule looked up by name.
    Name(String),
}

impl RuleRef {
    /// Creates a reference to a named rule.
    pub fn name(name: impl Into<String>) -> Self {
        Self::Name(name.into())
    }

    /// Creates a reference from a closure.
    pub fn function<F>(f: F) -> Self
    where
        F: Fn(&Value, &[Value]) -> bool + Send + Sync + 'static,
    {
        Self::Function(rule_fn(f))
    }

    /// Returns the rule name, if this is a named reference.
    #[must_use]
    pub fn as_name(&self) -> Option<&str> {
        match self {
            Self::Name(name) => Some(name.as_str()),
            Self::Function(_) => None,
        }
    }
}

impl fmt::Debug for RuleRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Function(_) => f.write_str("RuleRef::Function(..)"),
            Self::Name(name) => f.debug_tuple("RuleRef::Name").field(name).finish(),
        }
    }
}

impl From<&str> for RuleRef {
    fn from(name: &str) -> Self {
        Self::Name(name.to_owned())
    }
}

impl From<String> for RuleRef {
    fn from(name: String) -> Self {
        Self::Name(name)
    }
}

impl From<RuleFn> for RuleRef {
    fn from(rule: RuleFn) -> Self {
        Self::Function(rule)
    }
}
