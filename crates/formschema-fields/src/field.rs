//! The base field contract shared by every variant.
//!
//! [`FieldMeta`] holds the metadata common to all kinds and performs the
//! empty-string normalisation of defaults and descriptions. [`Field`] is the
//! uniform query surface: every variant answers all four constraint probes,
//! reporting `None` for the ones its kind does not own.
//!
//! The trait is sealed. The four variants in [`crate::variants`] and the
//! [`FormField`](crate::FormField) sum type are its only implementors.

use std::fmt;

use formschema_core::value::{Value, EMPTY};
use serde::{Deserialize, Serialize};

use crate::kind::Kind;

pub(crate) mod sealed {
    use super::FieldMeta;

    /// Only `crate::field` can build one, so only the provided setters on
    /// [`Field`](super::Field) reach metadata mutably.
    pub struct Token(pub(super) ());

    /// Implemented only by the field types in this crate.
    pub trait Sealed {
        fn meta_mut(&mut self, token: Token) -> &mut FieldMeta;
    }
}

/// Optional construction arguments shared by every variant.
///
/// The defaults are: not required, nullable, no default value, no description.
///
/// # Examples
///
/// ```
/// use formschema_fields::FieldOptions;
///
/// let opts = FieldOptions::new().required(true).nullable(false);
/// assert!(opts.required);
/// assert!(!opts.nullable);
/// assert!(opts.default_value.is_none());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct FieldOptions {
    /// Whether a value must be supplied.
    pub required: bool,
    /// Whether an explicit null is a valid value.
    pub nullable: bool,
    /// Initial default value.
    pub default_value: Option<Value>,
    /// Initial description.
    pub description: Option<String>,
}

impl Default for FieldOptions {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldOptions {
    /// Creates options with the default flags.
    pub const fn new() -> Self {
        Self {
            required: false,
            nullable: true,
            default_value: None,
            description: None,
        }
    }

    /// Sets whether the field is required.
    #[must_use]
    pub const fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    /// Sets whether the field is nullable.
    #[must_use]
    pub const fn nullable(mut self, nullable: bool) -> Self {
        self.nullable = nullable;
        self
    }

    /// Sets the default value.
    #[must_use]
    pub fn default_value(mut self, value: impl Into<Value>) -> Self {
        self.default_value = Some(value.into());
        self
    }

    /// Sets the description.
    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

const fn default_nullable() -> bool {
    true
}

/// Metadata shared by every field variant.
///
/// Name and flags are fixed at construction. Title, default value, and
/// description stay mutable. Absence of a default or description is kept
/// internally; [`default_value`](Self::default_value) and
/// [`description`](Self::description) read it back as the empty string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldMeta {
    name: String,
    title: String,
    #[serde(default)]
    required: bool,
    #[serde(default = "default_nullable")]
    nullable: bool,
    #[serde(rename = "default", default, skip_serializing_if = "Option::is_none")]
    default_value: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    description: Option<String>,
}

impl FieldMeta {
    pub(crate) fn new(name: impl Into<String>, title: impl Into<String>, options: FieldOptions) -> Self {
        Self {
            name: name.into(),
            title: title.into(),
            required: options.required,
            nullable: options.nullable,
            default_value: options.default_value,
            description: options.description,
        }
    }

    /// The field identifier.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The display label.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Replaces the display label.
    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    /// Whether a value must be supplied.
    pub const fn required(&self) -> bool {
        self.required
    }

    /// Whether an explicit null is a valid value.
    pub const fn nullable(&self) -> bool {
        self.nullable
    }

    /// The default value, or the empty string if none was set.
    pub fn default_value(&self) -> &Value {
        self.default_value.as_ref().unwrap_or(&EMPTY)
    }

    /// The default value as stored, `None` if never set.
    pub const fn raw_default_value(&self) -> Option<&Value> {
        self.default_value.as_ref()
    }

    /// Stores a new default. Its primitive type is not checked against the kind.
    pub fn set_default_value(&mut self, value: impl Into<Value>) {
        self.default_value = Some(value.into());
    }

    /// Forgets the default value.
    pub fn clear_default_value(&mut self) {
        self.default_value = None;
    }

    /// The description, or the empty string if none was set.
    pub fn description(&self) -> &str {
        self.description.as_deref().unwrap_or("")
    }

    /// The description as stored, `None` if never set.
    pub fn raw_description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Replaces the description.
    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = Some(description.into());
    }

    /// Forgets the description.
    pub fn clear_description(&mut self) {
        self.description = None;
    }
}

/// The query contract every field variant implements.
///
/// Only `meta`, `kind`, and the four probes are implemented per variant;
/// everything else is provided on top of [`FieldMeta`]. Name, `required`, and
/// `nullable` are fixed at construction: the setters below are the only way
/// to change a field, and they cover the title, default, and description.
///
/// ```compile_fail
/// use formschema_fields::{BooleanField, Field, FieldOptions};
///
/// let mut active = BooleanField::new("active", "Active", FieldOptions::new());
/// let other = BooleanField::new("other", "Other", FieldOptions::new());
/// *active.meta_mut() = other.meta().clone();
/// ```
pub trait Field: sealed::Sealed + fmt::Debug {
    /// Shared metadata.
    fn meta(&self) -> &FieldMeta;

    /// The kind, fixed by the variant type.
    fn kind(&self) -> Kind;

    /// Minimum string length, if this kind owns it and it was set.
    fn min_length(&self) -> Option<usize>;

    /// Maximum string length, if this kind owns it and it was set.
    fn max_length(&self) -> Option<usize>;

    /// Lower numeric bound, if this kind owns it and it was set.
    fn minimum(&self) -> Option<f64>;

    /// Upper numeric bound, if this kind owns it and it was set.
    fn maximum(&self) -> Option<f64>;

    /// The field identifier.
    fn name(&self) -> &str {
        self.meta().name()
    }

    /// Whether a value must be supplied.
    fn required(&self) -> bool {
        self.meta().required()
    }

    /// Whether an explicit null is a valid value.
    fn nullable(&self) -> bool {
        self.meta().nullable()
    }

    /// The display label.
    fn title(&self) -> &str {
        self.meta().title()
    }

    /// Replaces the display label.
    fn set_title(&mut self, title: impl Into<String>)
    where
        Self: Sized,
    {
        self.meta_mut(sealed::Token(())).set_title(title);
    }

    /// The default value; the empty string when none was set.
    fn default_value(&self) -> &Value {
        self.meta().default_value()
    }

    /// The default value without normalisation.
    fn raw_default_value(&self) -> Option<&Value> {
        self.meta().raw_default_value()
    }

    /// Stores a new default. No type-matching against [`Field::kind`] happens here;
    /// see the checks module for that.
    fn set_default_value(&mut self, value: impl Into<Value>)
    where
        Self: Sized,
    {
        self.meta_mut(sealed::Token(())).set_default_value(value);
    }

    /// Forgets the default value.
    fn clear_default_value(&mut self) {
        self.meta_mut(sealed::Token(())).clear_default_value();
    }

    /// The description; the empty string when none was set.
    fn description(&self) -> &str {
        self.meta().description()
    }

    /// The description without normalisation.
    fn raw_description(&self) -> Option<&str> {
        self.meta().raw_description()
    }

    /// Replaces the description. The empty string reads back the same as
    /// never set.
    fn set_description(&mut self, description: impl Into<String>)
    where
        Self: Sized,
    {
        self.meta_mut(sealed::Token(())).set_description(description);
    }

    /// Forgets the description.
    fn clear_description(&mut self) {
        self.meta_mut(sealed::Token(())).clear_description();
    }

    /// One-line summary for logs, e.g. `Field: age[integer] required:true`.
    fn describe(&self) -> String {
        format!(
            "Field: {}[{}] required:{}",
            self.name(),
            self.kind(),
            self.required()
        )
    }
}
