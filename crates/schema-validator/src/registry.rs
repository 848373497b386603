//! Registry of custom validation rules
//!
//! Custom rules extend the built-in [`library`](crate::library) by name. A
//! registry is an ordinary value owned by the caller: create it, register
//! rules with [`RuleRegistry::extend`], then hand it to
//! [`validate`](crate::validate). Share it behind an `Arc` when several
//! schemas need the same rules.
//!
//! Entries are write-once. There is no update or removal.

use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::fmt;

use parking_lot::RwLock;
use serde_json::Value;
use tracing::debug;

use crate::error::{Error, Result};
use crate::messages::FALLBACK_MESSAGE;
use crate::rule::RuleFn;
use crate::value::type_name;

// ============================================================================
// RULE REGISTRY
// ============================================================================

/// Caller-owned store of custom rules and their default messages.
///
/// Writes take a short exclusive lock; lookups clone the rule out under a
/// shared lock, so a registry can be shared across threads.
#[derive(Default)]
pub struct RuleRegistry {
    rules: RwLock<HashMap<String, CustomRule>>,
}

#[derive(Clone)]
struct CustomRule {
    rule: RuleFn,
    message: String,
}

impl RuleRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `rule` under `name` with `message` as its default message.
    ///
    /// # Errors
    ///
    /// - [`Error::EmptyName`] if `name` is empty.
    /// - [`Error::DuplicateRule`] if `name` is already registered.
    ///
    /// # Examples
    ///
    /// ```
    /// use nebula_schema_validator::{RuleRegistry, predicate};
    /// use serde_json::json;
    ///
    /// let registry = RuleRegistry::new();
    /// registry
    ///     .extend("isFoo", predicate(|v| v == &json!("foo")), "Must be foo")
    ///     .unwrap();
    /// assert!(registry.contains("isFoo"));
    /// assert!(registry.extend("isFoo", predicate(|_| true), "again").is_err());
    /// ```
    pub fn extend(
        &self,
        name: impl Into<String>,
        rule: RuleFn,
        message: impl Into<String>,
    ) -> Result<()> {
        let name = name.into();
        if name.is_empty() {
            return Err(Error::EmptyName);
        }

        match self.rules.write().entry(name) {
            Entry::Occupied(entry) => Err(Error::duplicate_rule(entry.key().clone())),
            Entry::Vacant(entry) => {
                debug!(rule = %entry.key(), "registered custom validation rule");
                entry.insert(CustomRule {
                    rule,
                    message: message.into(),
                });
                Ok(())
            }
        }
    }

    /// Registers `rule` under `name` with the fallback message `"Error"`.
    ///
    /// # Errors
    ///
    /// Same as [`extend`](Self::extend).
    pub fn extend_default(&self, name: impl Into<String>, rule: RuleFn) -> Result<()> {
        self.extend(name, rule, FALLBACK_MESSAGE)
    }

    /// Registers a rule from loosely typed input, checking each part's shape.
    ///
    /// Used when registration data arrives as JSON, e.g. from a plugin
    /// manifest. A missing `message` defaults to `"Error"`.
    ///
    /// # Errors
    ///
    /// [`Error::WrongType`] if `name` is not a string, `rule` is not a
    /// function or `message` is present but not a string; otherwise the
    /// errors of [`extend`](Self::extend).
    pub fn extend_dynamic(
        &self,
        name: &Value,
        rule: DynamicRule,
        message: Option<&Value>,
    ) -> Result<()> {
        let Value::String(name) = name else {
            return Err(Error::wrong_type("name", "a string", type_name(name)));
        };
        let rule = match rule {
            DynamicRule::Function(rule) => rule,
            DynamicRule::Value(other) => {
                return Err(Error::wrong_type("fn", "a function", type_name(&other)));
            }
        };
        let message = match message {
            None => FALLBACK_MESSAGE,
            Some(Value::String(message)) => message.as_str(),
            Some(other) => return Err(Error::wrong_type("msg", "a string", type_name(other))),
        };
        self.extend(name.as_str(), rule, message)
    }

    /// Returns the rule registered under `name`.
    #[must_use]
    pub fn lookup(&self, name: &str) -> Option<RuleFn> {
        self.rules.read().get(name).map(|r| r.rule.clone())
    }

    /// Returns the default message registered with `name`.
    #[must_use]
    pub fn default_message(&self, name: &str) -> Option<String> {
        self.rules.read().get(name).map(|r| r.message.clone())
    }

    /// Returns `true` if `name` is registered.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.rules.read().contains_key(name)
    }

    /// Number of registered rules.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.read().len()
    }

    /// Returns `true` if nothing is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.read().is_empty()
    }

    /// Registered names, sorted.
    #[must_use]
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.rules.read().keys().cloned().collect();
        names.sort_unstable();
        names
    }
}

impl fmt::Debug for RuleRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RuleRegistry")
            .field("rules", &self.names())
            .finish()
    }
}

// ============================================================================
// DYNAMIC RULE INPUT
// ============================================================================

/// The rule half of a loosely typed registration.
#[derive(Clone)]
pub enum DynamicRule {
    /// A callable rule.
    Function(RuleFn),
    /// Anything else; always rejected.
    Value(Value),
}

impl From<RuleFn> for DynamicRule {
    fn from(rule: RuleFn) -> Self {
        Self::Function(rule)
    }
}

impl From<Value> for DynamicRule {
    fn from(value: Value) -> Self {
        Self::Value(value)
    }
}

impl fmt::Debug for DynamicRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Function(_) => f.write_str("DynamicRule::Function(..)"),
            Self::Value(v) => f.debug_tuple("DynamicRule::Value").field(v).finish(),
        }
    }
}
