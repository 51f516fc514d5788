//! Core error types for formschema.
//!
//! [`SchemaError`] covers collection errors (duplicate or missing fields),
//! field validation failures, configuration problems, and serialization.
//! The field model itself never fails at construction; these errors come from
//! the opt-in strict paths and from loading definitions.

use std::collections::HashMap;
use std::fmt;

use thiserror::Error;

/// Represents a validation error with optional field-level errors.
///
/// Validation errors can be either simple (a single message) or compound
/// (containing per-field error lists).
///
/// # Examples
///
/// ```
/// use formschema_core::error::ValidationError;
///
/// // Simple validation error
/// let err = ValidationError::new("minimum is greater than maximum", "inverted_bounds");
///
/// // Field-level validation errors
/// let mut field_errors = std::collections::HashMap::new();
/// field_errors.insert(
///     "age".to_string(),
///     vec![ValidationError::new("minimum is greater than maximum", "inverted_bounds")],
/// );
/// let err = ValidationError::with_field_errors(field_errors);
/// ```
#[derive(Debug, Clone)]
pub struct ValidationError {
    /// The primary error message.
    pub message: String,
    /// A short code identifying the failure (e.g. "inverted_bounds", "fields.E002").
    pub code: String,
    /// Additional parameters providing context for the error message.
    pub params: HashMap<String, String>,
    /// Per-field validation errors, keyed by field name.
    pub field_errors: HashMap<String, Vec<Self>>,
}

impl ValidationError {
    /// Creates a new `ValidationError` with a message and code.
    pub fn new(message: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            code: code.into(),
            params: HashMap::new(),
            field_errors: HashMap::new(),
        }
    }

    /// Creates a `ValidationError` containing per-field errors.
    pub fn with_field_errors(field_errors: HashMap<String, Vec<Self>>) -> Self {
        Self {
            message: String::new(),
            code: String::new(),
            params: HashMap::new(),
            field_errors,
        }
    }

    /// Adds a parameter to this validation error.
    #[must_use]
    pub fn with_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.insert(key.into(), value.into());
        self
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.message.is_empty() {
            write!(f, "{}", self.message)?;
        } else if !self.field_errors.is_empty() {
            let mut first = true;
            for (field, errors) in &self.field_errors {
                for error in errors {
                    if !first {
                        write!(f, "; ")?;
                    }
                    write!(f, "{field}: {error}")?;
                    first = false;
                }
            }
        }
        Ok(())
    }
}

impl std::error::Error for ValidationError {}

/// The primary error type for formschema.
#[derive(Error, Debug)]
pub enum SchemaError {
    // ── Collection errors ────────────────────────────────────────────

    /// A field with the same name is already part of the collection.
    #[error("duplicate field name: {name}")]
    DuplicateField {
        /// The conflicting field name.
        name: String,
    },

    /// No field with the given name exists in the collection.
    #[error("field not found: {name}")]
    FieldNotFound {
        /// The requested field name.
        name: String,
    },

    // ── Validation ───────────────────────────────────────────────────

    /// A field definition failed its consistency checks.
    #[error("Invalid field: {0}")]
    InvalidField(ValidationError),

    // ── Configuration ────────────────────────────────────────────────

    /// A configuration value is missing or invalid.
    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    // ── Serialization ────────────────────────────────────────────────

    /// An error occurred during serialization or deserialization.
    #[error("Serialization error: {0}")]
    SerializationError(String),

    // ── IO ───────────────────────────────────────────────────────────

    /// An I/O error occurred.
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl SchemaError {
    /// Returns a short, stable code for the error category.
    pub const fn code(&self) -> &'static str {
        match self {
            Self::DuplicateField { .. } => "duplicate_field",
            Self::FieldNotFound { .. } => "field_not_found",
            Self::InvalidField(_) => "invalid_field",
            Self::ConfigurationError(_) => "configuration",
            Self::SerializationError(_) => "serialization",
            Self::IoError(_) => "io",
        }
    }
}

impl From<serde_json::Error> for SchemaError {
    fn from(err: serde_json::Error) -> Self {
        Self::SerializationError(err.to_string())
    }
}

/// A convenience type alias for `Result<T, SchemaError>`.
pub type SchemaResult<T> = Result<T, SchemaError>;
