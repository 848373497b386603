//! Error types for descriptor construction and rule registration
//!
//! Construction errors are raised synchronously by [`validate`](crate::validate)
//! and [`RuleRegistry::extend`](crate::RuleRegistry::extend). A field validator
//! that rejects a value is not an error in this sense; see
//! [`ValidationFailure`] for the runtime counterpart.

use std::borrow::Cow;

/// Result type for descriptor construction and registry operations.
pub type Result<T> = std::result::Result<T, Error>;

// ============================================================================
// CONSTRUCTION ERROR
// ============================================================================

/// Errors raised while building a descriptor or registering a rule.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// The `validator` option was not supplied.
    #[error("validator option undefined")]
    MissingValidator,

    /// An option had the wrong shape.
    #[error("{field} must be {expected}, got {received}")]
    WrongType {
        /// Name of the offending option or argument.
        field: Cow<'static, str>,
        /// What the option should have been.
        expected: Cow<'static, str>,
        /// Type name of what was actually received.
        received: Cow<'static, str>,
    },

    /// A rule name resolved neither in the rule library nor in the registry.
    #[error("validator `{name}` does not exist in the rule library or the custom registry")]
    UnknownRule {
        /// The name that failed to resolve.
        name: String,
    },

    /// A custom rule with this name is already registered.
    #[error("validator `{name}` already exists")]
    DuplicateRule {
        /// The colliding name.
        name: String,
    },

    /// A custom rule was registered with an empty name.
    #[error("name is required")]
    EmptyName,
}

impl Error {
    /// Creates a [`Error::WrongType`] error.
    pub fn wrong_type(
        field: impl Into<Cow<'static, str>>,
        expected: impl Into<Cow<'static, str>>,
        received: impl Into<Cow<'static, str>>,
    ) -> Self {
        Self::WrongType {
            field: field.into(),
            expected: expected.into(),
            received: received.into(),
        }
    }

    /// Creates a [`Error::UnknownRule`] error.
    pub fn unknown_rule(name: impl Into<String>) -> Self {
        Self::UnknownRule { name: name.into() }
    }

    /// Creates a [`Error::DuplicateRule`] error.
    pub fn duplicate_rule(name: impl Into<String>) -> Self {
        Self::DuplicateRule { name: name.into() }
    }

    /// Short machine-readable code for the error kind.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::MissingValidator => "missing_validator",
            Self::WrongType { .. } => "wrong_type",
            Self::UnknownRule { .. } => "unknown_rule",
            Self::DuplicateRule { .. } => "duplicate_rule",
            Self::EmptyName => "empty_name",
        }
    }
}

// ============================================================================
// RUNTIME FAILURE
// ============================================================================

/// A value rejected by a field validator.
///
/// Carries the already-interpolated message so a schema hook can surface it
/// without knowing anything about the rule.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct ValidationFailure {
    /// Rule name, when the descriptor was built from a named rule.
    pub rule: Option<String>,
    /// The resolved failure message.
    pub message: String,
}

impl ValidationFailure {
    /// Creates a new failure.
    pub fn new(rule: Option<String>, message: impl Into<String>) -> Self {
        Self {
            rule,
            message: message.into(),
        }
    }
}
