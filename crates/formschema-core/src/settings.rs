//! Settings for formschema.
//!
//! This module provides the [`Settings`] struct, which holds library
//! configuration, and [`LazySettings`], a globally-accessible, lazily-initialized
//! settings instance.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

use crate::error::SchemaError;

/// The OpenAPI dialect used when exporting schema fragments.
///
/// The two versions differ in how they spell nullability and exclusive bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum OpenApiVersion {
    /// OpenAPI 3.0: `nullable: true`, boolean `exclusiveMinimum`/`exclusiveMaximum`.
    #[default]
    #[serde(rename = "3.0")]
    V3_0,
    /// OpenAPI 3.1: `type: [kind, "null"]`, numeric `exclusiveMinimum`/`exclusiveMaximum`.
    #[serde(rename = "3.1")]
    V3_1,
}

impl OpenApiVersion {
    /// Returns the version string, e.g. `"3.0"`.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::V3_0 => "3.0",
            Self::V3_1 => "3.1",
        }
    }
}

impl fmt::Display for OpenApiVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OpenApiVersion {
    type Err = SchemaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "3.0" | "3.0.0" | "3.0.3" => Ok(Self::V3_0),
            "3.1" | "3.1.0" => Ok(Self::V3_1),
            other => Err(SchemaError::ConfigurationError(format!(
                "Unsupported OpenAPI version '{other}'"
            ))),
        }
    }
}

/// The complete set of library settings.
///
/// Use [`SETTINGS`] to access the global instance.
///
/// # Examples
///
/// ```
/// use formschema_core::settings::{OpenApiVersion, Settings};
///
/// let settings = Settings::default();
/// assert!(settings.debug);
/// assert!(!settings.strict);
/// assert_eq!(settings.openapi_version, OpenApiVersion::V3_0);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Whether debug mode is enabled (pretty log output).
    pub debug: bool,

    /// The log level (e.g. "info", "debug", "warn").
    pub log_level: String,

    /// Whether field collections reject fields that fail error-level checks.
    pub strict: bool,

    /// The OpenAPI dialect used by the exporter.
    pub openapi_version: OpenApiVersion,

    /// Custom settings that don't fit into the above categories.
    pub extra: HashMap<String, serde_json::Value>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            debug: true,
            log_level: "info".to_string(),
            strict: false,
            openapi_version: OpenApiVersion::V3_0,
            extra: HashMap::new(),
        }
    }
}

/// A lazily-initialized, globally-accessible settings container.
///
/// Call [`configure`](LazySettings::configure) once at startup to set the
/// settings, then use [`get`](LazySettings::get) to access them.
pub struct LazySettings {
    inner: OnceLock<Settings>,
}

impl Default for LazySettings {
    fn default() -> Self {
        Self::new()
    }
}

impl LazySettings {
    /// Creates a new, unconfigured `LazySettings`.
    pub const fn new() -> Self {
        Self {
            inner: OnceLock::new(),
        }
    }

    /// Configures the global settings. Must be called exactly once.
    ///
    /// # Panics
    ///
    /// Panics if settings have already been configured.
    pub fn configure(&self, settings: Settings) {
        self.inner
            .set(settings)
            .expect("Settings have already been configured");
    }

    /// Returns a reference to the configured settings.
    ///
    /// # Panics
    ///
    /// Panics if settings have not been configured.
    pub fn get(&self) -> &Settings {
        self.inner
            .get()
            .expect("Settings have not been configured. Call SETTINGS.configure() first.")
    }

    /// Returns the configured settings, or `None` before `configure` is called.
    pub fn try_get(&self) -> Option<&Settings> {
        self.inner.get()
    }

    /// Returns `true` if settings have been configured.
    pub fn is_configured(&self) -> bool {
        self.inner.get().is_some()
    }
}

/// The global settings instance.
pub static SETTINGS: LazySettings = LazySettings::new();
