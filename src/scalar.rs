//! Scalar nodes and their resolved YAML type tags.

use std::fmt;

/// Resolved YAML type of a scalar, deciding how it re-serializes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScalarTag {
    /// String value
    String,
    /// Integer value
    Integer,
    /// Float value
    Float,
    /// Boolean value
    Boolean,
    /// Null value
    Null,
}

/// A scalar node: literal text plus the type tag it resolves to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scalar {
    text: String,
    tag: ScalarTag,
}

impl Scalar {
    /// Create a scalar from raw text and an explicit tag
    pub fn new(text: impl Into<String>, tag: ScalarTag) -> Self {
        Self {
            text: text.into(),
            tag,
        }
    }

    /// Create a null scalar
    pub fn null() -> Self {
        Self::new("null", ScalarTag::Null)
    }

    /// The literal text of the scalar
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The type tag of the scalar
    pub fn tag(&self) -> ScalarTag {
        self.tag
    }

    /// Replace the literal text, keeping the tag
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    /// Concatenate `prefix` in front of the text.
    ///
    /// The result re-tags as a string: the combined text no longer reads as
    /// the original type.
    pub fn prepend(&mut self, prefix: &str) {
        self.text.insert_str(0, prefix);
        self.tag = ScalarTag::String;
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

impl From<String> for Scalar {
    fn from(value: String) -> Self {
        Self::new(value, ScalarTag::String)
    }
}

impl From<&str> for Scalar {
    fn from(value: &str) -> Self {
        Self::new(value, ScalarTag::String)
    }
}

impl From<bool> for Scalar {
    fn from(value: bool) -> Self {
        Self::new(if value { "true" } else { "false" }, ScalarTag::Boolean)
    }
}

impl From<i32> for Scalar {
    fn from(value: i32) -> Self {
        Self::new(value.to_string(), ScalarTag::Integer)
    }
}

impl From<i64> for Scalar {
    fn from(value: i64) -> Self {
        Self::new(value.to_string(), ScalarTag::Integer)
    }
}

impl From<u32> for Scalar {
    fn from(value: u32) -> Self {
        Self::new(value.to_string(), ScalarTag::Integer)
    }
}

impl From<f32> for Scalar {
    fn from(value: f32) -> Self {
        let text = if value.is_nan() {
            ".nan".to_string()
        } else if value == f32::INFINITY {
            ".inf".to_string()
        } else if value == f32::NEG_INFINITY {
            "-.inf".to_string()
        } else {
            value.to_string()
        };
        Self::new(text, ScalarTag::Float)
    }
}

impl From<f64> for Scalar {
    fn from(value: f64) -> Self {
        let text = if value.is_nan() {
            ".nan".to_string()
        } else if value == f64::INFINITY {
            ".inf".to_string()
        } else if value == f64::NEG_INFINITY {
            "-.inf".to_string()
        } else {
            value.to_string()
        };
        Self::new(text, ScalarTag::Float)
    }
}
