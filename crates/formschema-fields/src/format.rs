//! Format refinements for the integer, number, and string kinds.
//!
//! A format only signals representation or precision. Each enum's `Default`
//! is the format a field reports when none was given at construction.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Integer width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IntegerFormat {
    /// Signed 32-bit.
    #[default]
    Int32,
    /// Signed 64-bit.
    Int64,
}

impl IntegerFormat {
    /// Every integer format.
    pub const ALL: [Self; 2] = [Self::Int32, Self::Int64];

    /// Returns the format name, e.g. `"int32"`.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Int32 => "int32",
            Self::Int64 => "int64",
        }
    }
}

/// Floating-point precision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NumberFormat {
    /// Single precision.
    Float,
    /// Double precision.
    #[default]
    Double,
}

impl NumberFormat {
    /// Every number format.
    pub const ALL: [Self; 2] = [Self::Float, Self::Double];

    /// Returns the format name, e.g. `"double"`.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Float => "float",
            Self::Double => "double",
        }
    }
}

/// Semantic refinement of a string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StringFormat {
    /// Full date, `YYYY-MM-DD`.
    Date,
    /// Date and time. Also accepted as `date-time` when reading definitions.
    #[serde(alias = "date-time")]
    Datetime,
    /// Time of day.
    Time,
    /// Email address.
    Email,
    /// Free text.
    #[default]
    Text,
    /// UUID.
    Uuid,
}

impl StringFormat {
    /// Every string format.
    pub const ALL: [Self; 6] = [
        Self::Date,
        Self::Datetime,
        Self::Time,
        Self::Email,
        Self::Text,
        Self::Uuid,
    ];

    /// Returns the format name, e.g. `"email"`.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Date => "date",
            Self::Datetime => "datetime",
            Self::Time => "time",
            Self::Email => "email",
            Self::Text => "text",
            Self::Uuid => "uuid",
        }
    }

    /// Returns the name used in an OpenAPI document.
    ///
    /// `datetime` is spelled `date-time` there, and `text` has no OpenAPI
    /// counterpart so it maps to `None`.
    pub const fn openapi_name(self) -> Option<&'static str> {
        match self {
            Self::Datetime => Some("date-time"),
            Self::Text => None,
            other => Some(other.as_str()),
        }
    }
}

macro_rules! impl_format_display {
    ($($ty:ty),*) => {
        $(
            impl fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(self.as_str())
                }
            }
        )*
    };
}

impl_format_display!(IntegerFormat, NumberFormat, StringFormat);
