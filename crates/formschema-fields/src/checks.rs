//! Consistency checks for field definitions.
//!
//! The field model accepts inverted bounds, mismatched defaults, and broken
//! patterns as-is. The checks here report those problems as
//! [`CheckMessage`]s so a caller can decide what to do with them;
//! [`FormField::validate`] turns error-level findings into a [`SchemaError`].
//!
//! ## Built-in checks
//!
//! | Id | Level | Condition |
//! |---|---|---|
//! | `fields.E001` | Error | empty name |
//! | `fields.E002` | Error | `minimum > maximum` |
//! | `fields.E003` | Error | `min_length > max_length` |
//! | `fields.E004` | Error | pattern does not compile |
//! | `fields.E005` | Error | default's primitive type does not match the kind |
//! | `fields.W001` | Warning | exclusive flag without its bound |
//! | `fields.W002` | Warning | equal bounds with an exclusive flag |
//! | `fields.W003` | Warning | default outside the constraints |
//! | `fields.W004` | Warning | string default does not fit its format |
//!
//! ## Examples
//!
//! ```
//! use formschema_fields::checks::CheckRegistry;
//! use formschema_fields::constraints::NumericConstraints;
//! use formschema_fields::{FieldOptions, FormField, IntegerField};
//!
//! let field: FormField = IntegerField::new(
//!     "age",
//!     "Age",
//!     FieldOptions::new(),
//!     None,
//!     Some(NumericConstraints::new().minimum(10.0).maximum(1.0)),
//! )
//! .into();
//!
//! let messages = CheckRegistry::with_builtins().run_checks(None, &field);
//! assert_eq!(messages[0].id.as_deref(), Some("fields.E002"));
//! assert!(field.validate().is_err());
//! ```

use std::collections::HashMap;

use formschema_core::checks::CheckMessage;
use formschema_core::error::{SchemaError, SchemaResult, ValidationError};
use formschema_core::value::Value;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::field::Field;
use crate::form_field::FormField;
use crate::format::StringFormat;
use crate::kind::Kind;

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+\-]+@[a-zA-Z0-9.\-]+\.[a-zA-Z]{2,}$").expect("valid regex")
});

/// A check function that inspects one field and returns diagnostic messages.
pub type CheckFn = fn(&FormField) -> Vec<CheckMessage>;

/// A registered check with associated tags.
struct RegisteredCheck {
    func: CheckFn,
    tags: Vec<String>,
}

/// Registry for field check functions.
///
/// Check functions can be registered with tags, and then run all at once
/// or filtered by tag.
pub struct CheckRegistry {
    checks: Vec<RegisteredCheck>,
}

impl CheckRegistry {
    /// Creates a new empty check registry.
    pub const fn new() -> Self {
        Self { checks: Vec::new() }
    }

    /// Creates a new check registry pre-loaded with the built-in checks.
    ///
    /// Tags: `identity`, `bounds`, `patterns`, `defaults`.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        registry.register(check_name, &["identity"]);
        registry.register(check_numeric_bounds, &["bounds"]);
        registry.register(check_length_bounds, &["bounds"]);
        registry.register(check_pattern, &["patterns"]);
        registry.register(check_default_type, &["defaults"]);
        registry.register(check_default_in_bounds, &["defaults", "bounds"]);
        registry.register(check_default_format, &["defaults"]);
        registry
    }

    /// Registers a check function with the given tags.
    pub fn register(&mut self, func: CheckFn, tags: &[&str]) {
        self.checks.push(RegisteredCheck {
            func,
            tags: tags.iter().map(|t| (*t).to_string()).collect(),
        });
    }

    /// Runs all registered checks (or only those matching the given tags)
    /// against one field and collects the resulting messages.
    pub fn run_checks(&self, tags: Option<&[&str]>, field: &FormField) -> Vec<CheckMessage> {
        let mut messages = Vec::new();

        for check in &self.checks {
            let should_run = tags.map_or(true, |filter_tags| {
                filter_tags.iter().any(|t| check.tags.iter().any(|c| c == t))
            });

            if should_run {
                messages.extend((check.func)(field));
            }
        }

        messages
    }

    /// Returns the number of registered checks.
    pub fn len(&self) -> usize {
        self.checks.len()
    }

    /// Returns `true` if no checks are registered.
    pub fn is_empty(&self) -> bool {
        self.checks.is_empty()
    }
}

impl Default for CheckRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl FormField {
    /// Runs the built-in checks against this field.
    pub fn check(&self) -> Vec<CheckMessage> {
        CheckRegistry::with_builtins().run_checks(None, self)
    }

    /// Fails if any built-in check reports an error.
    ///
    /// Warnings are logged and otherwise ignored.
    pub fn validate(&self) -> SchemaResult<()> {
        let messages = self.check();
        let mut errors = Vec::new();

        for message in messages {
            if message.is_error() {
                errors.push(ValidationError::new(
                    message.msg,
                    message.id.unwrap_or_default(),
                ));
            } else if message.is_serious() {
                tracing::warn!(field = self.name(), "{message}");
            }
        }

        if errors.is_empty() {
            return Ok(());
        }

        let mut field_errors = HashMap::new();
        field_errors.insert(self.name().to_string(), errors);
        Err(SchemaError::InvalidField(ValidationError::with_field_errors(
            field_errors,
        )))
    }
}

// ============================================================
// Built-in checks
// ============================================================

/// Checks that the field has a non-blank name.
fn check_name(field: &FormField) -> Vec<CheckMessage> {
    if field.name().trim().is_empty() {
        return vec![CheckMessage::error(
            "Field name is empty.",
            Some("Give every field a unique, non-empty name."),
            None,
            Some("fields.E001"),
        )];
    }
    Vec::new()
}

/// Checks that numeric bounds describe a non-empty range.
#[allow(clippy::float_cmp)]
fn check_numeric_bounds(field: &FormField) -> Vec<CheckMessage> {
    let mut messages = Vec::new();
    let Some(constraints) = field.numeric_constraints() else {
        return messages;
    };

    if constraints.exclusive_minimum && constraints.minimum.is_none() {
        messages.push(CheckMessage::warning(
            "exclusiveMinimum is set but minimum is not.",
            Some("Set a minimum or drop the exclusive flag."),
            Some(field.name()),
            Some("fields.W001"),
        ));
    }
    if constraints.exclusive_maximum && constraints.maximum.is_none() {
        messages.push(CheckMessage::warning(
            "exclusiveMaximum is set but maximum is not.",
            Some("Set a maximum or drop the exclusive flag."),
            Some(field.name()),
            Some("fields.W001"),
        ));
    }

    if let (Some(min), Some(max)) = (field.minimum(), field.maximum()) {
        if min > max {
            messages.push(CheckMessage::error(
                format!("minimum ({min}) is greater than maximum ({max})."),
                Some("Swap the bounds."),
                Some(field.name()),
                Some("fields.E002"),
            ));
        } else if min == max
            && (constraints.exclusive_minimum || constraints.exclusive_maximum)
        {
            messages.push(CheckMessage::warning(
                format!("Bounds are both {min} with an exclusive flag; no value is accepted."),
                None,
                Some(field.name()),
                Some("fields.W002"),
            ));
        }
    }

    messages
}

/// Checks that `min_length <= max_length`.
fn check_length_bounds(field: &FormField) -> Vec<CheckMessage> {
    if let (Some(min), Some(max)) = (field.min_length(), field.max_length()) {
        if min > max {
            return vec![CheckMessage::error(
                format!("minLength ({min}) is greater than maxLength ({max})."),
                Some("Swap the lengths."),
                Some(field.name()),
                Some("fields.E003"),
            )];
        }
    }
    Vec::new()
}

/// Checks that the pattern compiles.
fn check_pattern(field: &FormField) -> Vec<CheckMessage> {
    let Some(pattern) = field.as_string().and_then(|f| f.pattern()) else {
        return Vec::new();
    };
    match Regex::new(pattern) {
        Ok(_) => Vec::new(),
        Err(e) => vec![CheckMessage::error(
            format!("pattern is not a valid regular expression: {e}"),
            None,
            Some(field.name()),
            Some("fields.E004"),
        )],
    }
}

/// Checks that the default's primitive type fits the kind.
///
/// Number fields accept integer defaults as well as floats.
fn check_default_type(field: &FormField) -> Vec<CheckMessage> {
    let Some(default) = field.raw_default_value() else {
        return Vec::new();
    };
    let fits = matches!(
        (field.kind(), default),
        (Kind::Boolean, Value::Bool(_))
            | (Kind::Integer, Value::Int(_))
            | (Kind::Number, Value::Int(_) | Value::Float(_))
            | (Kind::String, Value::String(_))
    );
    if fits {
        return Vec::new();
    }
    vec![CheckMessage::error(
        format!(
            "Default value {default:?} is a {} but the field is a {}.",
            default.type_name(),
            field.kind()
        ),
        None,
        Some(field.name()),
        Some("fields.E005"),
    )]
}

/// Checks that a well-typed default satisfies the field's own constraints.
fn check_default_in_bounds(field: &FormField) -> Vec<CheckMessage> {
    let Some(default) = field.raw_default_value() else {
        return Vec::new();
    };
    let mut problems = Vec::new();

    if let (Some(constraints), Some(n)) = (field.numeric_constraints(), default.as_f64()) {
        if let Some(min) = constraints.minimum {
            if n < min || (constraints.exclusive_minimum && n <= min) {
                problems.push(format!("Default {n} is below the minimum {min}."));
            }
        }
        if let Some(max) = constraints.maximum {
            if n > max || (constraints.exclusive_maximum && n >= max) {
                problems.push(format!("Default {n} is above the maximum {max}."));
            }
        }
    }

    if let (Some(constraints), Some(s)) = (field.string_constraints(), default.as_str()) {
        let len = s.chars().count();
        if constraints.min_length.is_some_and(|min| len < min) {
            problems.push(format!("Default has {len} characters, fewer than minLength."));
        }
        if constraints.max_length.is_some_and(|max| len > max) {
            problems.push(format!("Default has {len} characters, more than maxLength."));
        }
        if let Some(Ok(re)) = constraints.pattern.as_deref().map(Regex::new) {
            if !re.is_match(s) {
                problems.push("Default does not match the pattern.".to_string());
            }
        }
    }

    problems
        .into_iter()
        .map(|msg| CheckMessage::warning(msg, None, Some(field.name()), Some("fields.W003")))
        .collect()
}

/// Checks that a string default parses for the field's format.
fn check_default_format(field: &FormField) -> Vec<CheckMessage> {
    let (Some(string), Some(s)) = (
        field.as_string(),
        field.raw_default_value().and_then(Value::as_str),
    ) else {
        return Vec::new();
    };
    let format = string.format();
    if s.is_empty() || fits_format(format, s) {
        return Vec::new();
    }
    vec![CheckMessage::warning(
        format!("Default '{s}' is not a valid {format}."),
        None,
        Some(field.name()),
        Some("fields.W004"),
    )]
}

fn fits_format(format: StringFormat, s: &str) -> bool {
    match format {
        StringFormat::Date => chrono::NaiveDate::parse_from_str(s, "%Y-%m-%d").is_ok(),
        StringFormat::Datetime => {
            chrono::DateTime::parse_from_rfc3339(s).is_ok()
                || chrono::NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S").is_ok()
        }
        StringFormat::Time => {
            chrono::NaiveTime::parse_from_str(s, "%H:%M:%S").is_ok()
                || chrono::NaiveTime::parse_from_str(s, "%H:%M").is_ok()
        }
        StringFormat::Email => EMAIL_RE.is_match(s),
        StringFormat::Uuid => uuid::Uuid::parse_str(s).is_ok(),
        StringFormat::Text => true,
    }
}
