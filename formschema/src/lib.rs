//! # formschema
//!
//! A typed field model for OpenAPI-style form schemas.
//!
//! This is the meta-crate that re-exports the sub-crates for convenient access.
//! You can depend on `formschema` to get everything, or depend on
//! `formschema-core` or `formschema-fields` directly.
//!
//! ```
//! use formschema::prelude::*;
//!
//! let mut set = FieldSet::from_settings(&Settings::default());
//! set.add(IntegerField::new("age", "Age", FieldOptions::new(), None, None))
//!     .unwrap();
//! assert_eq!(set.get("age").map(Field::kind), Some(Kind::Integer));
//! ```

/// Settings, logging, checks, values, and error types.
pub use formschema_core as core;

/// Field kinds, formats, constraints, collections, and `OpenAPI` export.
pub use formschema_fields as fields;

/// Re-exports of third-party crates that appear in the public API.
pub use serde;
pub use serde_json;
pub use tracing;
pub use tracing_subscriber;

/// The types most callers need.
pub mod prelude {
    pub use formschema_core::{
        CheckLevel, CheckMessage, OpenApiVersion, SchemaError, SchemaResult, Settings, Value,
    };
    pub use formschema_fields::constraints::{NumericConstraints, StringConstraints};
    pub use formschema_fields::{
        BooleanField, CheckRegistry, Field, FieldOptions, FieldSet, FormField, IntegerField,
        IntegerFormat, Kind, NumberField, NumberFormat, StringField, StringFormat,
    };
}
