use serde::{Deserialize, Serialize};

use crate::constraints::NumericConstraints;
use crate::field::{sealed, Field, FieldMeta, FieldOptions};
use crate::format::NumberFormat;
use crate::kind::Kind;

/// A floating-point input with optional bounds and a float/double format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NumberField {
    #[serde(flatten)]
    meta: FieldMeta,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    format: Option<NumberFormat>,
    #[serde(flatten)]
    constraints: NumericConstraints,
}

impl NumberField {
    /// Creates a number field. Omitted constraints become an empty set.
    pub fn new(
        name: impl Into<String>,
        title: impl Into<String>,
        options: FieldOptions,
        format: Option<NumberFormat>,
        constraints: Option<NumericConstraints>,
    ) -> Self {
        let meta = FieldMeta::new(name, title, options);
        tracing::trace!(name = meta.name(), kind = %Kind::Number, ?format, "constructing field");
        Self {
            meta,
            format,
            constraints: constraints.unwrap_or_default(),
        }
    }

    /// The format, `double` when none was given.
    pub fn format(&self) -> NumberFormat {
        self.format.unwrap_or_default()
    }

    /// [`describe`](Field::describe) followed by the resolved format, e.g.
    /// `Field: x[number] required:false,double`.
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

impl sealed::Sealed for NumberField {
    fn meta_mut(&mut self, _: sealed::Token) -> &mut FieldMeta {
        &mut self.meta
    }
}

impl Field for NumberField {
    fn meta(&self) -> &FieldMeta {
        &self.meta
    }

    fn kind(&self) -> Kind {
        Kind::Number
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

    #[test]
    fn test_constraints_omitted() {
        let f = NumberField::new("price", "Price", FieldOptions::new(), None, None);
        assert_eq!(f.kind(), Kind::Number);
        assert!(f.minimum().is_none());
        assert!(f.maximum().is_none());
        assert!(f.min_length().is_none());
        assert!(f.max_length().is_none());
        assert_eq!(f.format(), NumberFormat::Double);
        assert_eq!(f.format().to_string(), "double");
    }

    #[test]
    fn test_bounds_and_format() {
        let f = NumberField::new(
            "ratio",
            "Ratio",
            FieldOptions::new(),
            Some(NumberFormat::Float),
            Some(
                NumericConstraints::new()
                    .minimum(0.0)
                    .maximum(1.0)
                    .exclusive_maximum(true),
            ),
        );
        assert_eq!(f.minimum(), Some(0.0));
        assert_eq!(f.maximum(), Some(1.0));
        assert!(f.exclusive_maximum());
        assert_eq!(f.format(), NumberFormat::Float);
    }

    #[test]
    fn test_only_maximum() {
        let f = NumberField::new(
            "discount",
            "Discount",
            FieldOptions::new(),
            None,
            Some(NumericConstraints::new().maximum(0.5)),
        );
        assert!(f.minimum().is_none());
        assert_eq!(f.maximum(), Some(0.5));
    }

    #[test]
    fn test_dump_appends_resolved_format() {
        let f = NumberField::new("price", "Price", FieldOptions::new(), None, None);
        assert_eq!(f.dump(), "Field: price[number] required:false,double");
    }
}
