//! Descriptor construction
//!
//! [`validate`] turns [`ValidateOptions`] into a [`ValidatorDescriptor`]:
//!
//! 1. resolve the rule reference (library first, then the registry);
//! 2. pick the message template: caller message, registry default, built-in
//!    default, then `"Error"`;
//! 3. interpolate `{ARGS[n]}` tokens with the bound arguments;
//! 4. bind rule, arguments and `passIfEmpty` into a [`FieldValidator`].
//!
//! All failures happen here, synchronously. The resulting validator never
//! errors; it only answers `true` or `false`.

use std::collections::BTreeMap;
use std::sync::Arc;

use serde_json::Value;
use tracing::{debug, trace};

use crate::descriptor::{FieldValidator, ValidatorDescriptor};
use crate::error::{Error, Result};
use crate::library;
use crate::messages::{self, first_message, interpolate};
use crate::options::ValidateOptions;
use crate::registry::RuleRegistry;
use crate::rule::{RuleFn, RuleRef};

// ============================================================================
// RESOLUTION
// ============================================================================

/// Resolves a rule reference to a callable rule.
///
/// Returns the rule together with its name when the reference was a name.
///
/// # Errors
///
/// [`Error::UnknownRule`] if a name is found neither in the rule library nor
/// in `registry`.
pub fn resolve_rule(registry: &RuleRegistry, rule: RuleRef) -> Result<(RuleFn, Option<String>)> {
    match rule {
        RuleRef::Function(rule) => Ok((rule, None)),
        RuleRef::Name(name) => {
            if let Some(rule) = library::lookup(&name) {
                trace!(rule = %name, source = "library", "resolved validation rule");
                return Ok((rule, Some(name)));
            }
            if let Some(rule) = registry.lookup(&name) {
                trace!(rule = %name, source = "registry", "resolved validation rule");
                return Ok((rule, Some(name)));
            }
            debug!(rule = %name, "validation rule not found");
            Err(Error::unknown_rule(name))
        }
    }
}

// ============================================================================
// VALIDATE
// ============================================================================

/// Builds a field validator descriptor.
///
/// # Errors
///
/// - [`Error::WrongType`] if a reserved option added through
///   [`ValidateOptions::with_extra`] had the wrong shape.
/// - [`Error::MissingValidator`] if no rule was given.
/// - [`Error::UnknownRule`] if a rule name does not resolve.
///
/// # Examples
///
/// ```
/// use nebula_schema_validator::{RuleRegistry, ValidateOptions, validate};
/// use serde_json::json;
///
/// let registry = RuleRegistry::new();
/// let descriptor = validate(
///     &registry,
///     ValidateOptions::new("isLength")
///         .with_arguments(json!([3, 50]))
///         .with_message("Name should be between {ARGS[0]} and {ARGS[1]} characters"),
/// )
/// .unwrap();
///
/// assert_eq!(descriptor.message(), "Name should be between 3 and 50 characters");
/// assert!(descriptor.is_valid(Some(&json!("Alice"))));
/// assert!(!descriptor.is_valid(Some(&json!("Al"))));
/// ```
pub fn validate(registry: &RuleRegistry, options: ValidateOptions) -> Result<ValidatorDescriptor> {
    let ValidateOptions {
        rule,
        arguments,
        pass_if_empty,
        message,
        mut extra,
        shape_error,
    } = options;

    if let Some(err) = shape_error {
        return Err(err);
    }
    let rule = rule.ok_or(Error::MissingValidator)?;
    let (rule, name) = resolve_rule(registry, rule)?;

    let registry_message = name.as_deref().and_then(|n| registry.default_message(n));
    let template = first_message([
        message.as_deref(),
        registry_message.as_deref(),
        name.as_deref().and_then(messages::default_message),
    ]);
    let message = interpolate(template, &arguments);

    // Computed fields win over passthrough keys of the same name.
    extra.remove("validator");
    extra.remove("message");

    Ok(ValidatorDescriptor::new(
        FieldValidator::new(rule, arguments, pass_if_empty),
        name,
        message,
        extra,
    ))
}

/// Parses `options` from JSON and builds a descriptor.
///
/// # Errors
///
/// Shape errors from [`ValidateOptions::from_json`], then the errors of
/// [`validate`].
pub fn validate_json(registry: &RuleRegistry, options: Value) -> Result<ValidatorDescriptor> {
    validate(registry, ValidateOptions::from_json(options)?)
}

/// Builds one descriptor per option set, stopping at the first error.
///
/// # Errors
///
/// The first error any option set produces.
pub fn validate_all<I>(registry: &RuleRegistry, options: I) -> Result<Vec<ValidatorDescriptor>>
where
    I: IntoIterator<Item = ValidateOptions>,
{
    options
        .into_iter()
        .map(|options| validate(registry, options))
        .collect()
}

// ============================================================================
// SCHEMA VALIDATOR
// ============================================================================

/// A registry bundled with the descriptor builder.
///
/// Cloning shares the registry, so rules registered through one handle are
/// visible through every clone.
///
/// ```
/// use nebula_schema_validator::{SchemaValidator, ValidateOptions, predicate};
/// use serde_json::json;
///
/// let validators = SchemaValidator::new();
/// validators
///     .extend("isFoo", predicate(|v| v == &json!("foo")), "Must be foo")
///     .unwrap();
///
/// let descriptor = validators.validate(ValidateOptions::new("isFoo")).unwrap();
/// assert_eq!(descriptor.message(), "Must be foo");
/// assert!(descriptor.is_valid(Some(&json!("foo"))));
/// ```
#[derive(Debug, Clone, Default)]
pub struct SchemaValidator {
    registry: Arc<RuleRegistry>,
}

impl SchemaValidator {
    /// Creates a validator with an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a validator over an existing registry.
    #[must_use]
    pub fn with_registry(registry: Arc<RuleRegistry>) -> Self {
        Self { registry }
    }

    /// The shared registry.
    #[must_use]
    pub fn registry(&self) -> &Arc<RuleRegistry> {
        &self.registry
    }

    /// See [`validate`].
    ///
    /// # Errors
    ///
    /// Same as [`validate`].
    pub fn validate(&self, options: ValidateOptions) -> Result<ValidatorDescriptor> {
        validate(&self.registry, options)
    }

    /// See [`validate_json`].
    ///
    /// # Errors
    ///
    /// Same as [`validate_json`].
    pub fn validate_json(&self, options: Value) -> Result<ValidatorDescriptor> {
        validate_json(&self.registry, options)
    }

    /// See [`RuleRegistry::extend`].
    ///
    /// # Errors
    ///
    /// Same as [`RuleRegistry::extend`].
    pub fn extend(
        &self,
        name: impl Into<String>,
        rule: RuleFn,
        message: impl Into<String>,
    ) -> Result<()> {
        self.registry.extend(name, rule, message)
    }

    /// The built-in default message table.
    #[must_use]
    pub fn default_error_messages(&self) -> &'static BTreeMap<String, String> {
        messages::default_error_messages()
    }
}
