//! The closed set of basic field kinds.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The OpenAPI primitive type of a field.
///
/// The set is fixed by the OpenAPI data model and is not meant to be extended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Kind {
    /// `true` / `false`.
    Boolean,
    /// Whole numbers.
    Integer,
    /// Floating-point numbers.
    Number,
    /// Text.
    String,
}

impl Kind {
    /// Every kind, in declaration order.
    pub const ALL: [Self; 4] = [Self::Boolean, Self::Integer, Self::Number, Self::String];

    /// Returns the OpenAPI type name, e.g. `"integer"`.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Boolean => "boolean",
            Self::Integer => "integer",
            Self::Number => "number",
            Self::String => "string",
        }
    }

    /// Returns `true` for the kinds that own numeric bounds.
    pub const fn is_numeric(self) -> bool {
        matches!(self, Self::Integer | Self::Number)
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
