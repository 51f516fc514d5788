//! Kind-specific constraint sets.
//!
//! A constraint that was not given is `None`, never a zero bound. Both structs
//! are plain data; once handed to a field they are only reachable by shared
//! reference.

use serde::{Deserialize, Serialize};

/// Bounds owned by the integer and number kinds.
///
/// # Examples
///
/// ```
/// use formschema_fields::constraints::NumericConstraints;
///
/// let c = NumericConstraints::new().minimum(0.0).maximum(150.0);
/// assert_eq!(c.minimum, Some(0.0));
/// assert!(!c.exclusive_maximum);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NumericConstraints {
    /// Lower bound.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub minimum: Option<f64>,
    /// Whether `minimum` itself is excluded.
    #[serde(default, skip_serializing_if = "is_false")]
    pub exclusive_minimum: bool,
    /// Upper bound.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub maximum: Option<f64>,
    /// Whether `maximum` itself is excluded.
    #[serde(default, skip_serializing_if = "is_false")]
    pub exclusive_maximum: bool,
}

impl NumericConstraints {
    /// Creates an empty constraint set.
    pub const fn new() -> Self {
        Self {
            minimum: None,
            exclusive_minimum: false,
            maximum: None,
            exclusive_maximum: false,
        }
    }

    /// Sets the lower bound.
    #[must_use]
    pub const fn minimum(mut self, minimum: f64) -> Self {
        self.minimum = Some(minimum);
        self
    }

    /// Sets the upper bound.
    #[must_use]
    pub const fn maximum(mut self, maximum: f64) -> Self {
        self.maximum = Some(maximum);
        self
    }

    /// Marks the lower bound as exclusive.
    #[must_use]
    pub const fn exclusive_minimum(mut self, exclusive: bool) -> Self {
        self.exclusive_minimum = exclusive;
        self
    }

    /// Marks the upper bound as exclusive.
    #[must_use]
    pub const fn exclusive_maximum(mut self, exclusive: bool) -> Self {
        self.exclusive_maximum = exclusive;
        self
    }

    /// Returns `true` if no constraint is set.
    pub const fn is_empty(&self) -> bool {
        self.minimum.is_none()
            && self.maximum.is_none()
            && !self.exclusive_minimum
            && !self.exclusive_maximum
    }
}

/// Length and pattern constraints owned by the string kind.
///
/// # Examples
///
/// ```
/// use formschema_fields::constraints::StringConstraints;
///
/// let c = StringConstraints::new().max_length(254);
/// assert_eq!(c.max_length, Some(254));
/// assert!(c.min_length.is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StringConstraints {
    /// Minimum length in characters.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_length: Option<usize>,
    /// Maximum length in characters.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_length: Option<usize>,
    /// A regular expression the value must match.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,
}

impl StringConstraints {
    /// Creates an empty constraint set.
    pub const fn new() -> Self {
        Self {
            min_length: None,
            max_length: None,
            pattern: None,
        }
    }

    /// Sets the minimum length.
    #[must_use]
    pub const fn min_length(mut self, min_length: usize) -> Self {
        self.min_length = Some(min_length);
        self
    }

    /// Sets the maximum length.
    #[must_use]
    pub const fn max_length(mut self, max_length: usize) -> Self {
        self.max_length = Some(max_length);
        self
    }

    /// Sets the pattern.
    #[must_use]
    pub fn pattern(mut self, pattern: impl Into<String>) -> Self {
        self.pattern = Some(pattern.into());
        self
    }

    /// Returns `true` if no constraint is set.
    pub const fn is_empty(&self) -> bool {
        self.min_length.is_none() && self.max_length.is_none() && self.pattern.is_none()
    }
}

#[allow(clippy::trivially_copy_pass_by_ref)]
const fn is_false(b: &bool) -> bool {
    !*b
}
