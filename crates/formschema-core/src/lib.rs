//! # formschema-core
//!
//! Core types, settings, logging, and error types for formschema.
//! This crate has no dependency on the field model and provides the foundation
//! the other crates build on.
//!
//! ## Modules
//!
//! - [`error`] - Error types and result aliases
//! - [`value`] - Primitive values used for field defaults
//! - [`settings`] - Library settings and global configuration
//! - [`settings_loader`] - Loading settings from TOML, JSON, and the environment
//! - [`checks`] - Diagnostic message types produced by field checks
//! - [`logging`] - Tracing-based logging integration

pub mod checks;
pub mod error;
pub mod logging;
pub mod settings;
pub mod settings_loader;
pub mod value;

// Re-export the most commonly used types at the crate root.
pub use checks::{CheckLevel, CheckMessage};
pub use error::{SchemaError, SchemaResult, ValidationError};
pub use settings::{OpenApiVersion, Settings, SETTINGS};
pub use value::Value;
