//! OpenAPI schema fragments for fields.
//!
//! [`field_schema`] turns one field into the schema object an OpenAPI document
//! would carry for it. Only constraints that were actually set are emitted;
//! a missing default or description is omitted rather than written as `""`.
//!
//! The two supported dialects differ in two places:
//!
//! | | 3.0 | 3.1 |
//! |---|---|---|
//! | nullable | `"nullable": true` | `"type": [kind, "null"]` |
//! | exclusive bound | `"minimum": m, "exclusiveMinimum": true` | `"exclusiveMinimum": m` |

use formschema_core::settings::OpenApiVersion;
use serde_json::{json, Map, Value as Json};

use crate::constraints::NumericConstraints;
use crate::field::Field;
use crate::form_field::FormField;
use crate::kind::Kind;

/// Builds the schema object for one field.
///
/// # Examples
///
/// ```
/// use formschema_core::settings::OpenApiVersion;
/// use formschema_fields::constraints::NumericConstraints;
/// use formschema_fields::export::field_schema;
/// use formschema_fields::{FieldOptions, FormField, IntegerField};
///
/// let age: FormField = IntegerField::new(
///     "age",
///     "Age",
///     FieldOptions::new().nullable(false),
///     None,
///     Some(NumericConstraints::new().minimum(0.0).maximum(150.0)),
/// )
/// .into();
///
/// assert_eq!(
///     field_schema(&age, OpenApiVersion::V3_0),
///     serde_json::json!({
///         "type": "integer",
///         "format": "int32",
///         "title": "Age",
///         "minimum": 0,
///         "maximum": 150
///     })
/// );
/// ```
pub fn field_schema(field: &FormField, version: OpenApiVersion) -> Json {
    let mut schema = Map::new();
    let kind = field.kind();

    if field.nullable() && version == OpenApiVersion::V3_1 {
        schema.insert("type".into(), json!([kind.as_str(), "null"]));
    } else {
        schema.insert("type".into(), json!(kind.as_str()));
    }

    if let Some(format) = openapi_format(field) {
        schema.insert("format".into(), json!(format));
    }

    schema.insert("title".into(), json!(field.title()));

    if let Some(description) = field.raw_description() {
        schema.insert("description".into(), json!(description));
    }
    if let Some(default) = field.raw_default_value() {
        schema.insert("default".into(), default.to_json());
    }
    if field.nullable() && version == OpenApiVersion::V3_0 {
        schema.insert("nullable".into(), json!(true));
    }

    if let Some(constraints) = field.numeric_constraints() {
        insert_numeric(&mut schema, constraints, kind, version);
    }

    if let Some(min) = field.min_length() {
        schema.insert("minLength".into(), json!(min));
    }
    if let Some(max) = field.max_length() {
        schema.insert("maxLength".into(), json!(max));
    }
    if let Some(pattern) = field.as_string().and_then(|f| f.pattern()) {
        schema.insert("pattern".into(), json!(pattern));
    }

    Json::Object(schema)
}

/// Builds an `object` schema whose properties are the given fields, in order.
///
/// `required` lists the required fields and is left out when empty.
pub fn object_schema<'a>(
    fields: impl IntoIterator<Item = &'a FormField>,
    version: OpenApiVersion,
) -> Json {
    let mut properties = Map::new();
    let mut required = Vec::new();

    for field in fields {
        let _span = formschema_core::logging::field_span(field.name()).entered();
        tracing::debug!("exporting {}", field.describe());
        properties.insert(field.name().to_string(), field_schema(field, version));
        if field.required() {
            required.push(json!(field.name()));
        }
    }

    let mut schema = Map::new();
    schema.insert("type".into(), json!("object"));
    schema.insert("properties".into(), Json::Object(properties));
    if !required.is_empty() {
        schema.insert("required".into(), Json::Array(required));
    }
    Json::Object(schema)
}

impl FormField {
    /// Shorthand for [`field_schema`].
    pub fn to_openapi(&self, version: OpenApiVersion) -> Json {
        field_schema(self, version)
    }
}

fn openapi_format(field: &FormField) -> Option<&'static str> {
    match field {
        FormField::Boolean(_) => None,
        FormField::Integer(f) => Some(f.format().as_str()),
        FormField::Number(f) => Some(f.format().as_str()),
        FormField::String(f) => f.format().openapi_name(),
    }
}

fn insert_numeric(
    schema: &mut Map<String, Json>,
    constraints: &NumericConstraints,
    kind: Kind,
    version: OpenApiVersion,
) {
    let bounds = [
        ("minimum", "exclusiveMinimum", constraints.minimum, constraints.exclusive_minimum),
        ("maximum", "exclusiveMaximum", constraints.maximum, constraints.exclusive_maximum),
    ];

    for (key, exclusive_key, bound, exclusive) in bounds {
        // An exclusive flag without a bound has nothing to export.
        let Some(bound) = bound else { continue };
        let bound = number_json(bound, kind);
        match (exclusive, version) {
            (false, _) => {
                schema.insert(key.into(), bound);
            }
            (true, OpenApiVersion::V3_0) => {
                schema.insert(key.into(), bound);
                schema.insert(exclusive_key.into(), json!(true));
            }
            (true, OpenApiVersion::V3_1) => {
                schema.insert(exclusive_key.into(), bound);
            }
        }
    }
}

/// Integer fields export whole-number bounds as JSON integers.
#[allow(clippy::cast_possible_truncation)]
fn number_json(n: f64, kind: Kind) -> Json {
    if kind == Kind::Integer && n.fract() == 0.0 && n.abs() < 9.0e15 {
        return json!(n as i64);
    }
    serde_json::Number::from_f64(n).map_or(Json::Null, Json::Number)
}
