use serde::{Deserialize, Serialize};

use crate::field::{sealed, Field, FieldMeta, FieldOptions};
use crate::kind::Kind;

/// A `true`/`false` input. Owns no constraints and no format.
///
/// # Examples
///
/// ```
/// use formschema_fields::{BooleanField, Field, FieldOptions, Kind};
///
/// let active = BooleanField::new("active", "Active", FieldOptions::new());
/// assert_eq!(active.kind(), Kind::Boolean);
/// assert!(active.minimum().is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BooleanField {
    #[serde(flatten)]
    meta: FieldMeta,
}

impl BooleanField {
    /// Creates a boolean field.
    pub fn new(name: impl Into<String>, title: impl Into<String>, options: FieldOptions) -> Self {
        let meta = FieldMeta::new(name, title, options);
        tracing::trace!(name = meta.name(), kind = %Kind::Boolean, "constructing field");
        Self { meta }
    }
}

impl sealed::Sealed for BooleanField {
    fn meta_mut(&mut self, _: sealed::Token) -> &mut FieldMeta {
        &mut self.meta
    }
}

impl Field for BooleanField {
    fn meta(&self) -> &FieldMeta {
        &self.meta
    }

    fn kind(&self) -> Kind {
        Kind::Boolean
    }

    fn min_length(&self) -> Option<usize> {
        None
    }

    fn max_length(&self) -> Option<usize> {
        None
    }

    fn minimum(&self) -> Option<f64> {
        None
    }

    fn maximum(&self) -> Option<f64> {
        None
    }
}
