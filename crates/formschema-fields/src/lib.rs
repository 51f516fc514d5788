//! # formschema-fields
//!
//! The field model for formschema. A field is one typed input in a form or an
//! object schema: it has a [`Kind`] that never changes, shared metadata
//! ([`FieldMeta`]), an optional [`format`] and a kind-specific constraint set.
//!
//! ## Architecture
//!
//! The hierarchy is closed. Four concrete variants ([`BooleanField`],
//! [`IntegerField`], [`NumberField`], [`StringField`]) implement the sealed
//! [`Field`] trait, and [`FormField`] is the enum over them for heterogeneous
//! collections and serde. Every field answers the same four constraint probes
//! (`min_length`, `max_length`, `minimum`, `maximum`); a probe a kind does not
//! own is always `None`.
//!
//! Construction never fails. Semantic problems such as inverted bounds are
//! reported by the [`checks`] framework and rejected only by
//! [`FormField::validate`] or a strict [`FieldSet`].
//!
//! ## Module Overview
//!
//! - [`kind`] - The four primitive kinds
//! - [`format`] - Per-kind format enums
//! - [`constraints`] - Numeric and string constraint sets
//! - [`field`] - The [`Field`] trait, [`FieldMeta`], and [`FieldOptions`]
//! - [`variants`] - The concrete field structs
//! - [`form_field`] - The [`FormField`] sum type
//! - [`checks`] - Consistency checks over fields
//! - [`export`] - OpenAPI schema fragments
//! - [`field_set`] - Ordered, uniquely-named collections of fields

// - doc_markdown: OpenAPI and similar names read better without backticks
// - return_self_not_must_use: builder methods are self-documenting
// - module_name_repetitions: FieldMeta, FieldSet etc. are the natural names
#![allow(clippy::doc_markdown)]
#![allow(clippy::return_self_not_must_use)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]

pub mod checks;
pub mod constraints;
pub mod export;
pub mod field;
pub mod field_set;
pub mod form_field;
pub mod format;
pub mod kind;
pub mod variants;

pub use checks::CheckRegistry;
pub use field::{Field, FieldMeta, FieldOptions};
pub use field_set::FieldSet;
pub use form_field::FormField;
pub use format::{IntegerFormat, NumberFormat, StringFormat};
pub use kind::Kind;
pub use variants::{BooleanField, IntegerField, NumberField, StringField};
