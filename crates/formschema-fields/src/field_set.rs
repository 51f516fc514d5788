//! An ordered collection of uniquely-named fields.
//!
//! A [`FieldSet`] is the unit a form or an object schema is built from. It
//! keeps fields in insertion order and refuses a second field with a name it
//! already holds. In strict mode every added field must also pass
//! [`FormField::validate`].
//!
//! ```
//! use formschema_core::OpenApiVersion;
//! use formschema_fields::{BooleanField, FieldOptions, FieldSet, StringField};
//!
//! let mut set = FieldSet::new();
//! set.add(StringField::new("name", "Name", FieldOptions::new().required(true), None, None))
//!     .unwrap();
//! set.add(BooleanField::new("active", "Active", FieldOptions::new())).unwrap();
//!
//! assert_eq!(set.names(), ["name", "active"]);
//! let schema = set.to_object_schema(OpenApiVersion::V3_1);
//! assert_eq!(schema["required"], serde_json::json!(["name"]));
//! ```

use formschema_core::settings::{OpenApiVersion, Settings};
use formschema_core::{CheckMessage, SchemaError, SchemaResult, Value};

use crate::checks::CheckRegistry;
use crate::export::object_schema;
use crate::field::Field;
use crate::form_field::FormField;

/// Fields in insertion order, unique by name.
///
/// Fields are only reachable immutably. Metadata changes go through the
/// name-keyed setters, so a field can never be swapped for another one.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldSet {
    fields: Vec<FormField>,
    strict: bool,
}

impl FieldSet {
    /// Creates an empty, lenient set.
    pub const fn new() -> Self {
        Self {
            fields: Vec::new(),
            strict: false,
        }
    }

    /// Creates an empty set that validates every field on [`add`](Self::add).
    pub const fn strict() -> Self {
        Self {
            fields: Vec::new(),
            strict: true,
        }
    }

    /// Creates an empty set whose strictness follows `settings.strict`.
    pub const fn from_settings(settings: &Settings) -> Self {
        Self {
            fields: Vec::new(),
            strict: settings.strict,
        }
    }

    /// Whether added fields must pass validation.
    pub const fn is_strict(&self) -> bool {
        self.strict
    }

    /// Appends a field.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError::DuplicateField`] when a field with the same name
    /// is already present, and [`SchemaError::InvalidField`] when the set is
    /// strict and the field fails validation. The set is unchanged on error.
    pub fn add(&mut self, field: impl Into<FormField>) -> SchemaResult<()> {
        let field = field.into();
        if self.contains(field.name()) {
            return Err(SchemaError::DuplicateField {
                name: field.name().to_string(),
            });
        }
        if self.strict {
            if let Err(e) = field.validate() {
                tracing::warn!(field = field.name(), error = %e, "rejected field");
                return Err(e);
            }
        }
        tracing::debug!(field = field.name(), kind = %field.kind(), "added field");
        self.fields.push(field);
        Ok(())
    }

    /// The field with this name, if any.
    pub fn get(&self, name: &str) -> Option<&FormField> {
        self.fields.iter().find(|f| f.name() == name)
    }

    /// Replaces the title of the named field.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError::FieldNotFound`] if no field has that name.
    pub fn set_title(&mut self, name: &str, title: impl Into<String>) -> SchemaResult<()> {
        self.update(name, |f| f.set_title(title))
    }

    /// Stores a new default on the named field.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError::FieldNotFound`] if no field has that name, and
    /// [`SchemaError::InvalidField`] when the set is strict and the new default
    /// does not fit the field. The field is unchanged on error.
    pub fn set_default_value(
        &mut self,
        name: &str,
        value: impl Into<Value>,
    ) -> SchemaResult<()> {
        self.update(name, |f| f.set_default_value(value))
    }

    /// Forgets the default value of the named field.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError::FieldNotFound`] if no field has that name.
    pub fn clear_default_value(&mut self, name: &str) -> SchemaResult<()> {
        self.update(name, |f| f.clear_default_value())
    }

    /// Replaces the description of the named field.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError::FieldNotFound`] if no field has that name.
    pub fn set_description(
        &mut self,
        name: &str,
        description: impl Into<String>,
    ) -> SchemaResult<()> {
        self.update(name, |f| f.set_description(description))
    }

    /// Forgets the description of the named field.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError::FieldNotFound`] if no field has that name.
    pub fn clear_description(&mut self, name: &str) -> SchemaResult<()> {
        self.update(name, |f| f.clear_description())
    }

    /// Applies a metadata change to the named field. A strict set validates
    /// the changed copy before keeping it.
    fn update(&mut self, name: &str, change: impl FnOnce(&mut FormField)) -> SchemaResult<()> {
        let strict = self.strict;
        let Some(field) = self.fields.iter_mut().find(|f| f.name() == name) else {
            return Err(SchemaError::FieldNotFound {
                name: name.to_string(),
            });
        };

        if strict {
            let mut candidate = field.clone();
            change(&mut candidate);
            if let Err(e) = candidate.validate() {
                tracing::warn!(field = name, error = %e, "rejected update");
                return Err(e);
            }
            *field = candidate;
        } else {
            change(field);
        }
        tracing::debug!(field = name, "updated field");
        Ok(())
    }

    /// Removes and returns the named field.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError::FieldNotFound`] if no field has that name.
    pub fn remove(&mut self, name: &str) -> SchemaResult<FormField> {
        let Some(index) = self.fields.iter().position(|f| f.name() == name) else {
            return Err(SchemaError::FieldNotFound {
                name: name.to_string(),
            });
        };
        tracing::debug!(field = name, "removed field");
        Ok(self.fields.remove(index))
    }

    /// Whether a field with this name is present.
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Iterates over the fields in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, FormField> {
        self.fields.iter()
    }

    /// The number of fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether the set holds no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Field names in insertion order.
    pub fn names(&self) -> Vec<&str> {
        self.fields.iter().map(Field::name).collect()
    }

    /// Names of the required fields, in insertion order.
    pub fn required_names(&self) -> Vec<&str> {
        self.fields
            .iter()
            .filter(|f| f.required())
            .map(Field::name)
            .collect()
    }

    /// Runs every check in `registry` over every field.
    pub fn check(&self, registry: &CheckRegistry) -> Vec<CheckMessage> {
        self.fields
            .iter()
            .flat_map(|f| registry.run_checks(None, f))
            .collect()
    }

    /// Exports the set as an OpenAPI `object` schema.
    pub fn to_object_schema(&self, version: OpenApiVersion) -> serde_json::Value {
        object_schema(&self.fields, version)
    }

    /// Parses a JSON array of field definitions into a lenient set.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError::SerializationError`] for malformed input and
    /// [`SchemaError::DuplicateField`] when two definitions share a name.
    pub fn from_json_str(s: &str) -> SchemaResult<Self> {
        let mut set = Self::new();
        set.extend_from_json_str(s)?;
        Ok(set)
    }

    /// Parses a JSON array of field definitions and adds each one in order.
    ///
    /// # Errors
    ///
    /// Fails like [`add`](Self::add) on the first rejected definition. Fields
    /// before it stay added.
    pub fn extend_from_json_str(&mut self, s: &str) -> SchemaResult<()> {
        let fields: Vec<FormField> = serde_json::from_str(s)?;
        for field in fields {
            self.add(field)?;
        }
        Ok(())
    }

    /// Serializes the field definitions as a pretty-printed JSON array.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError::SerializationError`] if serialization fails.
    pub fn to_json_string(&self) -> SchemaResult<String> {
        Ok(serde_json::to_string_pretty(&self.fields)?)
    }
}

impl<'a> IntoIterator for &'a FieldSet {
    type Item = &'a FormField;
    type IntoIter = std::slice::Iter<'a, FormField>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constraints::NumericConstraints;
    use crate::field::FieldOptions;
    use crate::variants::{BooleanField, IntegerField, StringField};

    fn inverted_age() -> IntegerField {
        IntegerField::new(
            "age",
            "Age",
            FieldOptions::new(),
            None,
            Some(NumericConstraints::new().minimum(10.0).maximum(1.0)),
        )
    }

    #[test]
    fn test_add_and_lookup() {
        let mut set = FieldSet::new();
        set.add(BooleanField::new("active", "Active", FieldOptions::new()))
            .unwrap();
        assert_eq!(set.len(), 1);
        assert!(set.contains("active"));
        assert!(!set.contains("missing"));
        assert_eq!(set.get("active").unwrap().title(), "Active");
    }

    #[test]
    fn test_duplicate_name_rejected() {
        let mut set = FieldSet::new();
        set.add(BooleanField::new("x", "X", FieldOptions::new())).unwrap();
        let err = set
            .add(StringField::new("x", "Other", FieldOptions::new(), None, None))
            .unwrap_err();
        assert!(matches!(err, SchemaError::DuplicateField { ref name } if name == "x"));
        assert_eq!(set.len(), 1);
        assert_eq!(set.get("x").unwrap().title(), "X");
    }

    #[test]
    fn test_strict_rejects_invalid_field() {
        let mut strict = FieldSet::strict();
        let err = strict.add(inverted_age()).unwrap_err();
        assert_eq!(err.code(), "invalid_field");
        assert!(strict.is_empty());

        let mut lenient = FieldSet::new();
        lenient.add(inverted_age()).unwrap();
        assert_eq!(lenient.len(), 1);
    }

    #[test]
    fn test_from_settings() {
        let settings = Settings {
            strict: true,
            ..Settings::default()
        };
        assert!(FieldSet::from_settings(&settings).is_strict());
        assert!(!FieldSet::from_settings(&Settings::default()).is_strict());
    }

    #[test]
    fn test_remove() {
        let mut set = FieldSet::new();
        set.add(BooleanField::new("a", "A", FieldOptions::new())).unwrap();
        set.add(BooleanField::new("b", "B", FieldOptions::new())).unwrap();
        let removed = set.remove("a").unwrap();
        assert_eq!(removed.name(), "a");
        assert_eq!(set.names(), ["b"]);
        assert!(matches!(
            set.remove("a"),
            Err(SchemaError::FieldNotFound { .. })
        ));
    }

    #[test]
    fn test_metadata_setters_by_name() {
        let mut set = FieldSet::new();
        set.add(BooleanField::new("a", "A", FieldOptions::new())).unwrap();
        set.set_title("a", "Renamed").unwrap();
        set.set_description("a", "Help").unwrap();
        set.set_default_value("a", true).unwrap();

        let field = set.get("a").unwrap();
        assert_eq!(field.title(), "Renamed");
        assert_eq!(field.description(), "Help");
        assert_eq!(field.raw_default_value(), Some(&Value::Bool(true)));

        set.clear_description("a").unwrap();
        set.clear_default_value("a").unwrap();
        let field = set.get("a").unwrap();
        assert!(field.raw_description().is_none());
        assert!(field.raw_default_value().is_none());
        assert_eq!(set.names(), ["a"]);
        assert!(set.required_names().is_empty());
    }

    #[test]
    fn test_setters_on_missing_field() {
        let mut set = FieldSet::new();
        assert!(matches!(
            set.set_title("nope", "Nope"),
            Err(SchemaError::FieldNotFound { ref name }) if name == "nope"
        ));
        assert!(set.clear_description("nope").is_err());
    }

    #[test]
    fn test_strict_set_rejects_invalid_default() {
        let mut set = FieldSet::strict();
        set.add(BooleanField::new("a", "A", FieldOptions::new())).unwrap();
        set.add(IntegerField::new("b", "B", FieldOptions::new(), None, None))
            .unwrap();
        let before = set.clone();

        let err = set.set_default_value("b", "not a number").unwrap_err();
        assert_eq!(err.code(), "invalid_field");
        assert_eq!(set, before);

        set.set_default_value("b", 7).unwrap();
        assert_eq!(set.names(), ["a", "b"]);

        let again = FieldSet::from_json_str(&set.to_json_string().unwrap()).unwrap();
        assert_eq!(again.names(), ["a", "b"]);
    }

    #[test]
    fn test_check_covers_every_field() {
        let mut set = FieldSet::new();
        set.add(inverted_age()).unwrap();
        set.add(BooleanField::new("ok", "Ok", FieldOptions::new())).unwrap();
        let messages = set.check(&CheckRegistry::with_builtins());
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].id.as_deref(), Some("fields.E002"));
    }

    #[test]
    fn test_iteration_order() {
        let mut set = FieldSet::new();
        for name in ["c", "a", "b"] {
            set.add(BooleanField::new(name, name, FieldOptions::new())).unwrap();
        }
        let names: Vec<&str> = (&set).into_iter().map(Field::name).collect();
        assert_eq!(names, ["c", "a", "b"]);
        assert_eq!(set.iter().count(), 3);
    }

    #[test]
    fn test_json_round_trip() {
        let json = r#"[
            {"type": "string", "name": "email", "title": "Email", "format": "email", "required": true},
            {"type": "integer", "name": "age", "title": "Age", "minimum": 0, "maximum": 150}
        ]"#;
        let set = FieldSet::from_json_str(json).unwrap();
        assert_eq!(set.names(), ["email", "age"]);
        assert_eq!(set.required_names(), ["email"]);

        let text = set.to_json_string().unwrap();
        let again = FieldSet::from_json_str(&text).unwrap();
        assert_eq!(again, set);
    }

    #[test]
    fn test_from_json_duplicate_and_malformed() {
        let dup = r#"[
            {"type": "boolean", "name": "a", "title": "A"},
            {"type": "boolean", "name": "a", "title": "A"}
        ]"#;
        assert!(matches!(
            FieldSet::from_json_str(dup),
            Err(SchemaError::DuplicateField { .. })
        ));
        assert!(matches!(
            FieldSet::from_json_str("{not json"),
            Err(SchemaError::SerializationError(_))
        ));
    }
}
