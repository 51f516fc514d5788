use serde::{Deserialize, Serialize};

use crate::constraints::StringConstraints;
use crate::field::{sealed, Field, FieldMeta, FieldOptions};
use crate::format::StringFormat;
use crate::kind::Kind;

/// A text input with optional length and pattern constraints and a format.
///
/// # Examples
///
/// ```
/// use formschema_fields::{Field, FieldOptions, StringField, StringFormat};
/// use formschema_fields::constraints::StringConstraints;
///
/// let email = StringField::new(
///     "email",
///     "Email",
///     FieldOptions::new(),
///     Some(StringFormat::Email),
///     Some(StringConstraints::new().max_length(254)),
/// );
/// assert_eq!(email.max_length(), Some(254));
/// assert!(email.minimum().is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StringField {
    #[serde(flatten)]
    meta: FieldMeta,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    format: Option<StringFormat>,
    #[serde(flatten)]
    constraints: StringConstraints,
}

impl StringField {
    /// Creates a string field. Omitted constraints become an empty set.
    pub fn new(
        name: impl Into<String>,
        title: impl Into<String>,
        options: FieldOptions,
        format: Option<StringFormat>,
        constraints: Option<StringConstraints>,
    ) -> Self {
        let meta = FieldMeta::new(name, title, options);
        tracing::trace!(name = meta.name(), kind = %Kind::String, ?format, "constructing field");
        Self {
            meta,
            format,
            constraints: constraints.unwrap_or_default(),
        }
    }

    /// The format, `text` when none was given.
    pub fn format(&self) -> StringFormat {
        self.format.unwrap_or_default()
    }

    /// [`describe`](Field::describe) followed by the resolved format, e.g.
    /// `Field: x[string] required:false,text`.
    pub fn dump(&self) -> String {
        tracing::debug!(field = ?self, "dumping field");
        format!("{},{}", self.describe(), self.format())
    }

    /// The full constraint set.
    pub const fn constraints(&self) -> &StringConstraints {
        &self.constraints
    }

    /// The regular expression values must match, if any.
    pub fn pattern(&self) -> Option<&str> {
        self.constraints.pattern.as_deref()
    }
}

impl sealed::Sealed for StringField {
    fn meta_mut(&mut self, _: sealed::Token) -> &mut FieldMeta {
        &mut self.meta
    }
}

impl Field for StringField {
    fn meta(&self) -> &FieldMeta {
        &self.meta
    }

    fn kind(&self) -> Kind {
        Kind::String
    }

    fn min_length(&self) -> Option<usize> {
        self.constraints.min_length
    }

    fn max_length(&self) -> Option<usize> {
        self.constraints.max_length
    }

    fn minimum(&self) -> Option<f64> {
        None
    }

    fn maximum(&self) -> Option<f64> {
        None
    }
}
