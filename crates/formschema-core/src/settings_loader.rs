//! Settings loading from configuration files.
//!
//! This module provides functions to load [`Settings`] from TOML files, JSON
//! files, and to apply environment variable overrides.
//!
//! ## Loading Order
//!
//! 1. Start with default settings.
//! 2. Load from a TOML or JSON file (overriding defaults).
//! 3. Apply environment variable overrides (highest priority).
//!
//! ## Environment Variable Mapping
//!
//! | Env Var | Setting |
//! |---|---|
//! | `FORMSCHEMA_DEBUG` | `debug` |
//! | `FORMSCHEMA_LOG_LEVEL` | `log_level` |
//! | `FORMSCHEMA_STRICT` | `strict` |
//! | `FORMSCHEMA_OPENAPI_VERSION` | `openapi_version` ("3.0" or "3.1") |
//!
//! ## Examples
//!
//! ```rust,no_run
//! use formschema_core::settings_loader;
//!
//! let settings = settings_loader::from_toml_file("config/formschema.toml").unwrap();
//! let settings = settings_loader::from_json_file_with_env("config/formschema.json").unwrap();
//! ```

use std::path::Path;

use crate::error::SchemaError;
use crate::settings::{OpenApiVersion, Settings};

/// Loads settings from a TOML string.
///
/// Any fields not present in the TOML keep their default values.
///
/// # Errors
///
/// Returns an error if the TOML is malformed or cannot be deserialized.
pub fn from_toml_str(toml_str: &str) -> Result<Settings, SchemaError> {
    // TOML is converted to JSON and merged over the serialized defaults so
    // that partial files work.
    let toml_value: toml::Value = toml::from_str(toml_str)
        .map_err(|e| SchemaError::ConfigurationError(format!("Failed to parse TOML: {e}")))?;

    merge_over_defaults(toml_to_json(toml_value), "TOML")
}

/// Loads settings from a TOML file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or the TOML is malformed.
pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Settings, SchemaError> {
    let content = read_file(path.as_ref(), "TOML")?;
    from_toml_str(&content)
}

/// Loads settings from a TOML file and then applies environment variable overrides.
///
/// # Errors
///
/// Returns an error if the file cannot be read or the TOML is malformed.
pub fn from_toml_file_with_env(path: impl AsRef<Path>) -> Result<Settings, SchemaError> {
    let mut settings = from_toml_file(path)?;
    apply_env_overrides(&mut settings);
    Ok(settings)
}

/// Loads settings from a JSON string.
///
/// # Errors
///
/// Returns an error if the JSON is malformed or cannot be deserialized.
pub fn from_json_str(json_str: &str) -> Result<Settings, SchemaError> {
    let json_value: serde_json::Value = serde_json::from_str(json_str)
        .map_err(|e| SchemaError::ConfigurationError(format!("Failed to parse JSON: {e}")))?;

    merge_over_defaults(json_value, "JSON")
}

/// Loads settings from a JSON file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or the JSON is malformed.
pub fn from_json_file(path: impl AsRef<Path>) -> Result<Settings, SchemaError> {
    let content = read_file(path.as_ref(), "JSON")?;
    from_json_str(&content)
}

/// Loads settings from a JSON file and then applies environment variable overrides.
///
/// # Errors
///
/// Returns an error if the file cannot be read or the JSON is malformed.
pub fn from_json_file_with_env(path: impl AsRef<Path>) -> Result<Settings, SchemaError> {
    let mut settings = from_json_file(path)?;
    apply_env_overrides(&mut settings);
    Ok(settings)
}

/// Loads settings from just environment variables (starting from defaults).
pub fn from_env() -> Settings {
    let mut settings = Settings::default();
    apply_env_overrides(&mut settings);
    settings
}

/// Applies environment variable overrides to a settings struct.
///
/// Boolean variables accept "true"/"1"/"yes"; anything else reads as false.
/// An unparseable `FORMSCHEMA_OPENAPI_VERSION` is ignored with a warning.
pub fn apply_env_overrides(settings: &mut Settings) {
    if let Ok(val) = std::env::var("FORMSCHEMA_DEBUG") {
        settings.debug = parse_flag(&val);
    }

    if let Ok(val) = std::env::var("FORMSCHEMA_LOG_LEVEL") {
        settings.log_level = val;
    }

    if let Ok(val) = std::env::var("FORMSCHEMA_STRICT") {
        settings.strict = parse_flag(&val);
    }

    if let Ok(val) = std::env::var("FORMSCHEMA_OPENAPI_VERSION") {
        match val.parse::<OpenApiVersion>() {
            Ok(version) => settings.openapi_version = version,
            Err(e) => tracing::warn!("Ignoring FORMSCHEMA_OPENAPI_VERSION: {e}"),
        }
    }
}

// ============================================================
// Helpers
// ============================================================

fn parse_flag(val: &str) -> bool {
    matches!(val.to_lowercase().as_str(), "true" | "1" | "yes")
}

fn read_file(path: &Path, format: &str) -> Result<String, SchemaError> {
    std::fs::read_to_string(path).map_err(|e| {
        SchemaError::ConfigurationError(format!(
            "Failed to read {format} file '{}': {e}",
            path.display()
        ))
    })
}

fn merge_over_defaults(value: serde_json::Value, format: &str) -> Result<Settings, SchemaError> {
    let default_json = serde_json::to_value(Settings::default()).map_err(|e| {
        SchemaError::ConfigurationError(format!("Failed to serialize default settings: {e}"))
    })?;

    let merged = merge_json(default_json, value);
    serde_json::from_value(merged).map_err(|e| {
        SchemaError::ConfigurationError(format!("Failed to deserialize settings from {format}: {e}"))
    })
}

/// Converts a TOML value to a `serde_json::Value`.
fn toml_to_json(value: toml::Value) -> serde_json::Value {
    match value {
        toml::Value::String(s) => serde_json::Value::String(s),
        toml::Value::Integer(i) => serde_json::json!(i),
        toml::Value::Float(f) => serde_json::json!(f),
        toml::Value::Boolean(b) => serde_json::Value::Bool(b),
        toml::Value::Datetime(dt) => serde_json::Value::String(dt.to_string()),
        toml::Value::Array(arr) => {
            serde_json::Value::Array(arr.into_iter().map(toml_to_json).collect())
        }
        toml::Value::Table(table) => {
            let map: serde_json::Map<String, serde_json::Value> = table
                .into_iter()
                .map(|(k, v)| (k, toml_to_json(v)))
                .collect();
            serde_json::Value::Object(map)
        }
    }
}

/// Deep-merges two JSON values. The `override_val` takes precedence.
fn merge_json(base: serde_json::Value, override_val: serde_json::Value) -> serde_json::Value {
    match (base, override_val) {
        (serde_json::Value::Object(mut base_map), serde_json::Value::Object(override_map)) => {
            for (key, override_v) in override_map {
                let merged = if let Some(base_v) = base_map.remove(&key) {
                    merge_json(base_v, override_v)
                } else {
                    override_v
                };
                base_map.insert(key, merged);
            }
            serde_json::Value::Object(base_map)
        }
        (_, override_val) => override_val,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── TOML loading ────────────────────────────────────────────────

    #[test]
    fn test_from_toml_str_basic() {
        let toml = r#"
            strict = true
            log_level = "debug"
            openapi_version = "3.1"
        "#;

        let settings = from_toml_str(toml).unwrap();
        assert!(settings.strict);
        assert_eq!(settings.log_level, "debug");
        assert_eq!(settings.openapi_version, OpenApiVersion::V3_1);
        // Defaults preserved
        assert!(settings.debug);
    }

    #[test]
    fn test_from_toml_str_empty() {
        let settings = from_toml_str("").unwrap();
        assert_eq!(settings.log_level, "info");
        assert!(!settings.strict);
    }

    #[test]
    fn test_from_toml_str_invalid() {
        let result = from_toml_str("this is [not toml");
        assert!(matches!(result, Err(SchemaError::ConfigurationError(_))));
    }

    #[test]
    fn test_from_toml_str_bad_version() {
        let result = from_toml_str(r#"openapi_version = "2.0""#);
        assert!(result.is_err());
    }

    #[test]
    fn test_from_toml_str_extra() {
        let toml = r#"
            [extra]
            team = "forms"
        "#;
        let settings = from_toml_str(toml).unwrap();
        assert_eq!(settings.extra.get("team"), Some(&serde_json::json!("forms")));
    }

    // ── JSON loading ────────────────────────────────────────────────

    #[test]
    fn test_from_json_str_basic() {
        let settings = from_json_str(r#"{"debug": false, "strict": true}"#).unwrap();
        assert!(!settings.debug);
        assert!(settings.strict);
        assert_eq!(settings.openapi_version, OpenApiVersion::V3_0);
    }

    #[test]
    fn test_from_json_str_empty_object() {
        let settings = from_json_str("{}").unwrap();
        assert!(settings.debug);
    }

    #[test]
    fn test_from_json_str_invalid() {
        assert!(from_json_str("{not json").is_err());
    }

    // ── File loading ────────────────────────────────────────────────

    #[test]
    fn test_from_toml_file() {
        let dir = std::env::temp_dir().join("formschema_test_toml");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("settings.toml");
        std::fs::write(&path, "strict = true\n").unwrap();

        let settings = from_toml_file(&path).unwrap();
        assert!(settings.strict);

        std::fs::remove_file(&path).ok();
        std::fs::remove_dir(&dir).ok();
    }

    #[test]
    fn test_from_json_file() {
        let dir = std::env::temp_dir().join("formschema_test_json");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("settings.json");
        std::fs::write(&path, r#"{"log_level": "warn"}"#).unwrap();

        let settings = from_json_file(&path).unwrap();
        assert_eq!(settings.log_level, "warn");

        std::fs::remove_file(&path).ok();
        std::fs::remove_dir(&dir).ok();
    }

    #[test]
    fn test_from_toml_file_missing() {
        let result = from_toml_file("/nonexistent/path/formschema.toml");
        assert!(matches!(result, Err(SchemaError::ConfigurationError(_))));
    }

    #[test]
    fn test_from_json_file_missing() {
        assert!(from_json_file("/nonexistent/path/formschema.json").is_err());
    }

    // ── Environment variable overrides ──────────────────────────────
    // Each test uses its own variable so they can run in parallel.

    #[test]
    fn test_apply_env_overrides_log_level() {
        let mut settings = Settings::default();
        std::env::set_var("FORMSCHEMA_LOG_LEVEL", "trace");
        apply_env_overrides(&mut settings);
        assert_eq!(settings.log_level, "trace");
        std::env::remove_var("FORMSCHEMA_LOG_LEVEL");
    }

    #[test]
    fn test_apply_env_overrides_strict() {
        let mut settings = Settings::default();
        std::env::set_var("FORMSCHEMA_STRICT", "yes");
        apply_env_overrides(&mut settings);
        assert!(settings.strict);
        std::env::remove_var("FORMSCHEMA_STRICT");
    }

    #[test]
    fn test_apply_env_overrides_debug_false() {
        let mut settings = Settings::default();
        std::env::set_var("FORMSCHEMA_DEBUG", "0");
        apply_env_overrides(&mut settings);
        assert!(!settings.debug);
        std::env::remove_var("FORMSCHEMA_DEBUG");
    }

    #[test]
    fn test_apply_env_overrides_openapi_version() {
        let mut settings = Settings::default();
        std::env::set_var("FORMSCHEMA_OPENAPI_VERSION", "bogus");
        apply_env_overrides(&mut settings);
        assert_eq!(settings.openapi_version, OpenApiVersion::V3_0);

        std::env::set_var("FORMSCHEMA_OPENAPI_VERSION", "3.1");
        apply_env_overrides(&mut settings);
        assert_eq!(settings.openapi_version, OpenApiVersion::V3_1);
        std::env::remove_var("FORMSCHEMA_OPENAPI_VERSION");
    }

    // ── Helpers ─────────────────────────────────────────────────────

    #[test]
    fn test_merge_json_nested() {
        let base = serde_json::json!({"a": {"b": 1, "c": 2}});
        let over = serde_json::json!({"a": {"c": 3}});
        let merged = merge_json(base, over);
        assert_eq!(merged, serde_json::json!({"a": {"b": 1, "c": 3}}));
    }

    #[test]
    fn test_toml_to_json() {
        let value: toml::Value = toml::from_str("x = 1\ny = [true, \"s\"]").unwrap();
        assert_eq!(
            toml_to_json(value),
            serde_json::json!({"x": 1, "y": [true, "s"]})
        );
    }
}
