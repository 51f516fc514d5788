//! The four concrete field variants.
//!
//! Each variant pairs the shared [`FieldMeta`](crate::field::FieldMeta) with
//! the constraint set and format its kind owns. These mirror the OpenAPI
//! primitive types one to one.

pub mod boolean;
pub mod integer;
pub mod number;
pub mod string;

pub use boolean::BooleanField;
pub use integer::IntegerField;
pub use number::NumberField;
pub use string::StringField;
