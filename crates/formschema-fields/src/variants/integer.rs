use serde::{Deserialize, Serialize};

use crate::constraints::NumericConstraints;
use crate::field::{sealed, Field, FieldMeta, FieldOptions};
use crate::format::IntegerFormat;
use crate::kind::Kind;

/// A whole-number input with optional bounds and an int32/int64 format.
///
/// # Examples
///
/// ```
/// use formschema_fields::{Field, FieldOptions, IntegerField, IntegerFormat};
/// use formschema_fields::constraints::NumericConstraints;
///
/// let age = IntegerField::new(
///     "age",
///     "Age",
///     FieldOptions::new().required(true).nullable(false),
///     None,
///     Some(NumericConstraints::new().minimum(0.0).maximum(150.0)),
/// );
/// assert_eq!(age.minimum(), Some(0.0));
/// assert_eq!(age.format(), IntegerFormat::Int32);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntegerField {
    #[serde(flatten)]
    meta: FieldMeta,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    format: Option<IntegerFormat>,
    #[serde(flatten)]
    constraints: NumericConstraints,
}

impl IntegerField {
    /// Creates an integer field. Omitted constraints become an empty set.
    pub fn new(
        name: impl Into<String>,
        title: impl Into<String>,
        options: FieldOptions,
        format: Option<IntegerFormat>,
        constraints: Option<NumericConstraints>,
    ) -> Self {
        let meta = FieldMeta::new(name, title, options);
        tracing::trace!(name = meta.name(), kind = %Kind::Integer, ?format, "constructing field");
        Self {
            meta,
            format,
            constraints: constraints.unwrap_or_default(),
        }
    }

    /// The format, `int32` when none was given.
    pub fn format(&self) -> IntegerFormat {
        self.format.unwrap_or_default()
    }

    /// [`describe`](Field::describe) followed by the resolved format, e.g.
    /// `Field: x[integer] required:false,int32`.
    pub fn dump(&self) -> String {
        tracing::debug!(field = ?self, "dumping field");
        format!("{},{}", self.describe(), self.format())
    }

    /// The full constraint set.
    pub const fn constraints(&self) -> &NumericConstraints {
        &self.constraints
    }

    /// Whether the lower bound is exclusive.
    pub const fn exclusive_minimum(&self) -> bool {
        self.constraints.exclusive_minimum
    }

    /// Whether the upper bound is exclusive.
    pub const fn exclusive_maximum(&self) -> bool {
        self.constraints.exclusive_maximum
    }
}

impl sealed::Sealed for IntegerField {
    fn meta_mut(&mut self, _: sealed::Token) -> &mut FieldMeta {
        &mut self.meta
    }
}

impl Field for IntegerField {
    fn meta(&self) -> &FieldMeta {
        &self.meta
    }

    fn kind(&self) -> Kind {
        Kind::Integer
    }

    fn min_length(&self) -> Option<usize> {
        None
    }

    fn max_length(&self) -> Option<usize> {
        None
    }

    fn minimum(&self) -> Option<f64> {
        self.constraints.minimum
    }

    fn maximum(&self) -> Option<f64> {
        self.constraints.maximum
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn age() -> IntegerField {
        IntegerField::new(
            "age",
            "Age",
            FieldOptions::new().required(true).nullable(false),
            None,
            Some(NumericConstraints::new().minimum(0.0).maximum(150.0)),
        )
    }

    #[test]
    fn test_age_scenario() {
        let f = age();
        assert_eq!(f.kind(), Kind::Integer);
        assert!(f.required());
        assert!(!f.nullable());
        assert_eq!(f.minimum(), Some(0.0));
        assert_eq!(f.maximum(), Some(150.0));
        assert!(f.min_length().is_none());
        assert!(f.max_length().is_none());
        assert_eq!(f.format(), IntegerFormat::Int32);
        assert_eq!(f.format().to_string(), "int32");
    }

    #[test]
    fn test_omitted_constraints_are_absent_not_zero() {
        let f = IntegerField::new("n", "N", FieldOptions::new(), Some(IntegerFormat::Int64), None);
        assert!(f.minimum().is_none());
        assert!(f.maximum().is_none());
        assert!(f.constraints().is_empty());
        assert!(!f.exclusive_minimum());
        assert_eq!(f.format(), IntegerFormat::Int64);
    }

    #[test]
    fn test_exclusive_flags() {
        let f = IntegerField::new(
            "count",
            "Count",
            FieldOptions::new(),
            None,
            Some(NumericConstraints::new().minimum(0.0).exclusive_minimum(true)),
        );
        assert!(f.exclusive_minimum());
        assert!(!f.exclusive_maximum());
        assert_eq!(f.minimum(), Some(0.0));
    }

    #[test]
    fn test_mutation_keeps_shape() {
        let mut f = age();
        f.set_title("Your age");
        f.set_default_value(30);
        f.set_description("In years");
        assert_eq!(f.name(), "age");
        assert_eq!(f.kind(), Kind::Integer);
        assert!(f.required());
        assert!(!f.nullable());
        assert_eq!(f.minimum(), Some(0.0));
        assert_eq!(f.maximum(), Some(150.0));
        assert_eq!(f.format(), IntegerFormat::Int32);
    }

    #[test]
    fn test_dump_appends_resolved_format() {
        let age = IntegerField::new("age", "Age", FieldOptions::new().required(true), None, None);
        assert_eq!(age.dump(), "Field: age[integer] required:true,int32");

        let id = IntegerField::new("id", "Id", FieldOptions::new(), Some(IntegerFormat::Int64), None);
        assert_eq!(id.dump(), "Field: id[integer] required:false,int64");
    }
}
