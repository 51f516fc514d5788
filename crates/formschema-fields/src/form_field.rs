//! The closed sum type over the four field variants.
//!
//! [`FormField`] lets heterogeneous fields live in one collection while still
//! answering the whole [`Field`] contract. It is also the serde entry point:
//! definitions are tagged by `"type"` with the lowercase kind name.
//!
//! ```
//! use formschema_fields::{Field, FormField, Kind};
//!
//! let field: FormField = serde_json::from_str(
//!     r#"{"type": "integer", "name": "age", "title": "Age", "minimum": 0}"#,
//! ).unwrap();
//! assert_eq!(field.kind(), Kind::Integer);
//! assert_eq!(field.minimum(), Some(0.0));
//! assert_eq!(field.format_name(), Some("int32"));
//! ```

use serde::{Deserialize, Serialize};

use crate::constraints::{NumericConstraints, StringConstraints};
use crate::field::{sealed, Field, FieldMeta};
use crate::kind::Kind;
use crate::variants::{BooleanField, IntegerField, NumberField, StringField};

/// Any field, tagged by kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum FormField {
    /// A boolean field.
    Boolean(BooleanField),
    /// An integer field.
    Integer(IntegerField),
    /// A number field.
    Number(NumberField),
    /// A string field.
    String(StringField),
}

impl FormField {
    /// The resolved format name, or `None` for boolean fields, which have no
    /// format concept.
    pub fn format_name(&self) -> Option<&'static str> {
        match self {
            Self::Boolean(_) => None,
            Self::Integer(f) => Some(f.format().as_str()),
            Self::Number(f) => Some(f.format().as_str()),
            Self::String(f) => Some(f.format().as_str()),
        }
    }

    /// [`describe`](Field::describe) plus the resolved format. Boolean
    /// fields have no format and dump as their description alone.
    pub fn dump(&self) -> String {
        match self {
            Self::Boolean(f) => {
                tracing::debug!(field = ?f, "dumping field");
                f.describe()
            }
            Self::Integer(f) => f.dump(),
            Self::Number(f) => f.dump(),
            Self::String(f) => f.dump(),
        }
    }

    /// The numeric constraint set, for integer and number fields.
    pub const fn numeric_constraints(&self) -> Option<&NumericConstraints> {
        match self {
            Self::Integer(f) => Some(f.constraints()),
            Self::Number(f) => Some(f.constraints()),
            Self::Boolean(_) | Self::String(_) => None,
        }
    }

    /// The string constraint set, for string fields.
    pub const fn string_constraints(&self) -> Option<&StringConstraints> {
        match self {
            Self::String(f) => Some(f.constraints()),
            _ => None,
        }
    }

    /// The boolean variant, if this is one.
    pub const fn as_boolean(&self) -> Option<&BooleanField> {
        match self {
            Self::Boolean(f) => Some(f),
            _ => None,
        }
    }

    /// The integer variant, if this is one.
    pub const fn as_integer(&self) -> Option<&IntegerField> {
        match self {
            Self::Integer(f) => Some(f),
            _ => None,
        }
    }

    /// The number variant, if this is one.
    pub const fn as_number(&self) -> Option<&NumberField> {
        match self {
            Self::Number(f) => Some(f),
            _ => None,
        }
    }

    /// The string variant, if this is one.
    pub const fn as_string(&self) -> Option<&StringField> {
        match self {
            Self::String(f) => Some(f),
            _ => None,
        }
    }
}

impl sealed::Sealed for FormField {
    fn meta_mut(&mut self, token: sealed::Token) -> &mut FieldMeta {
        match self {
            Self::Boolean(f) => sealed::Sealed::meta_mut(f, token),
            Self::Integer(f) => sealed::Sealed::meta_mut(f, token),
            Self::Number(f) => sealed::Sealed::meta_mut(f, token),
            Self::String(f) => sealed::Sealed::meta_mut(f, token),
        }
    }
}

impl Field for FormField {
    fn meta(&self) -> &FieldMeta {
        match self {
            Self::Boolean(f) => f.meta(),
            Self::Integer(f) => f.meta(),
            Self::Number(f) => f.meta(),
            Self::String(f) => f.meta(),
        }
    }

    fn kind(&self) -> Kind {
        match self {
            Self::Boolean(_) => Kind::Boolean,
            Self::Integer(_) => Kind::Integer,
            Self::Number(_) => Kind::Number,
            Self::String(_) => Kind::String,
        }
    }

    fn min_length(&self) -> Option<usize> {
        match self {
            Self::Boolean(f) => f.min_length(),
            Self::Integer(f) => f.min_length(),
            Self::Number(f) => f.min_length(),
            Self::String(f) => f.min_length(),
        }
    }

    fn max_length(&self) -> Option<usize> {
        match self {
            Self::Boolean(f) => f.max_length(),
            Self::Integer(f) => f.max_length(),
            Self::Number(f) => f.max_length(),
            Self::String(f) => f.max_length(),
        }
    }

    fn minimum(&self) -> Option<f64> {
        match self {
            Self::Boolean(f) => f.minimum(),
            Self::Integer(f) => f.minimum(),
            Self::Number(f) => f.minimum(),
            Self::String(f) => f.minimum(),
        }
    }

    fn maximum(&self) -> Option<f64> {
        match self {
            Self::Boolean(f) => f.maximum(),
            Self::Integer(f) => f.maximum(),
            Self::Number(f) => f.maximum(),
            Self::String(f) => f.maximum(),
        }
    }
}

impl From<BooleanField> for FormField {
    fn from(f: BooleanField) -> Self {
        Self::Boolean(f)
    }
}

impl From<IntegerField> for FormField {
    fn from(f: IntegerField) -> Self {
        Self::Integer(f)
    }
}

impl From<NumberField> for FormField {
    fn from(f: NumberField) -> Self {
        Self::Number(f)
    }
}

impl From<StringField> for FormField {
    fn from(f: StringField) -> Self {
        Self::String(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::FieldOptions;
    use crate::format::{NumberFormat, StringFormat};
    use formschema_core::Value;

    fn all_kinds() -> Vec<FormField> {
        vec![
            BooleanField::new("active", "Active", FieldOptions::new()).into(),
            IntegerField::new(
                "age",
                "Age",
                FieldOptions::new(),
                None,
                Some(NumericConstraints::new().minimum(0.0)),
            )
            .into(),
            NumberField::new("price", "Price", FieldOptions::new(), None, None).into(),
            StringField::new(
                "name",
                "Name",
                FieldOptions::new(),
                None,
                Some(StringConstraints::new().min_length(1)),
            )
            .into(),
        ]
    }

    #[test]
    fn test_kind_matches_variant() {
        let kinds: Vec<Kind> = all_kinds().iter().map(Field::kind).collect();
        assert_eq!(kinds, Kind::ALL);
    }

    #[test]
    fn test_format_resolution_is_total() {
        let names: Vec<Option<&str>> = all_kinds().iter().map(FormField::format_name).collect();
        assert_eq!(names, [None, Some("int32"), Some("double"), Some("text")]);
    }

    #[test]
    fn test_dump_per_kind() {
        let dumps: Vec<String> = all_kinds().iter().map(FormField::dump).collect();
        assert_eq!(
            dumps,
            [
                "Field: active[boolean] required:false",
                "Field: age[integer] required:false,int32",
                "Field: price[number] required:false,double",
                "Field: name[string] required:false,text",
            ]
        );
    }

    #[test]
    fn test_probes_delegate() {
        let fields = all_kinds();
        assert!(fields[0].minimum().is_none());
        assert_eq!(fields[1].minimum(), Some(0.0));
        assert!(fields[1].min_length().is_none());
        assert!(fields[2].maximum().is_none());
        assert_eq!(fields[3].min_length(), Some(1));
        assert!(fields[3].minimum().is_none());
    }

    #[test]
    fn test_constraint_accessors() {
        let fields = all_kinds();
        assert!(fields[0].numeric_constraints().is_none());
        assert!(fields[1].numeric_constraints().is_some());
        assert!(fields[2].string_constraints().is_none());
        assert!(fields[3].string_constraints().is_some());
        assert!(fields[1].as_integer().is_some());
        assert!(fields[1].as_number().is_none());
        assert!(fields[0].as_boolean().is_some());
        assert!(fields[3].as_string().is_some());
    }

    #[test]
    fn test_mutation_through_enum() {
        let mut field: FormField = all_kinds().remove(1);
        field.set_title("Years");
        field.set_default_value(21);
        assert_eq!(field.title(), "Years");
        assert_eq!(field.default_value(), &Value::Int(21));
        assert_eq!(field.kind(), Kind::Integer);
        assert_eq!(field.minimum(), Some(0.0));
    }

    #[test]
    fn test_serde_round_trip_keeps_absence() {
        let mut field: FormField = StringField::new(
            "email",
            "Email",
            FieldOptions::new().required(true),
            Some(StringFormat::Email),
            Some(StringConstraints::new().max_length(254)),
        )
        .into();
        field.set_description("");

        let json = serde_json::to_value(&field).unwrap();
        assert_eq!(json["type"], "string");
        assert_eq!(json["format"], "email");
        assert_eq!(json["maxLength"], 254);
        assert_eq!(json["description"], "");
        assert!(json.get("default").is_none());
        assert!(json.get("minLength").is_none());

        let parsed: FormField = serde_json::from_value(json).unwrap();
        assert_eq!(parsed, field);
        assert_eq!(parsed.raw_description(), Some(""));
        assert!(parsed.raw_default_value().is_none());
    }

    #[test]
    fn test_deserialize_number_definition() {
        let field: FormField = serde_json::from_str(
            r#"{"type": "number", "name": "ratio", "title": "Ratio",
                "format": "float", "minimum": 0, "maximum": 1,
                "exclusiveMaximum": true, "default": 0.5}"#,
        )
        .unwrap();
        let number = field.as_number().unwrap();
        assert_eq!(number.format(), NumberFormat::Float);
        assert_eq!(field.minimum(), Some(0.0));
        assert_eq!(field.maximum(), Some(1.0));
        assert!(number.exclusive_maximum());
        assert_eq!(field.default_value(), &Value::Float(0.5));
        assert!(field.nullable());
        assert!(!field.required());
    }

    #[test]
    fn test_deserialize_unknown_type_fails() {
        let result: Result<FormField, _> =
            serde_json::from_str(r#"{"type": "enum", "name": "x", "title": "X"}"#);
        assert!(result.is_err());
    }
}
