//! Validation errors for the data contracts
//!
//! Every contract check reports the first violated constraint as a
//! [`ValidationError`]: the path of the offending field plus a typed
//! [`ValidationReason`].

use std::fmt;

/// Path used when the value being validated is not an object at all.
pub const ROOT_PATH: &str = "$";

/// A single contract violation
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid field '{field}': {reason}")]
pub struct ValidationError {
    /// Dotted/indexed path of the field (e.g. `post.variations[0].caption`)
    pub field: String,

    /// Which constraint failed
    pub reason: ValidationReason,
}

impl ValidationError {
    /// Create error for field
    #[inline]
    #[must_use]
    pub fn new(field: impl Into<String>, reason: ValidationReason) -> Self {
        Self {
            field: field.into(),
            reason,
        }
    }

    /// Key is absent (or null)
    #[inline]
    #[must_use]
    pub fn missing(field: impl Into<String>) -> Self {
        Self::new(field, ValidationReason::Missing)
    }

    /// Value has the wrong JSON type
    #[inline]
    #[must_use]
    pub fn wrong_type(field: impl Into<String>, expected: JsonKind) -> Self {
        Self::new(field, ValidationReason::WrongType { expected })
    }

    /// Prefix the field path with an enclosing key
    #[must_use]
    pub fn nested_in(mut self, parent: &str) -> Self {
        if self.field == ROOT_PATH {
            self.field = parent.to_string();
        } else if self.field.starts_with('[') {
            self.field = format!("{parent}{}", self.field);
        } else {
            self.field = format!("{parent}.{}", self.field);
        }
        self
    }
}

/// Constraint that failed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationReason {
    /// Required key absent or null
    Missing,

    /// Value is not of the expected JSON kind
    WrongType {
        /// Kind the contract requires
        expected: JsonKind,
    },

    /// Text is empty or whitespace only
    Blank,

    /// Sequence must hold at least one element
    EmptyList,

    /// Number has a fractional part
    NotInteger,

    /// Integer outside the inclusive range
    OutOfRange {
        /// Lower bound (inclusive)
        min: i64,
        /// Upper bound (inclusive)
        max: i64,
    },
}

impl fmt::Display for ValidationReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Missing => write!(f, "required field is missing"),
            Self::WrongType { expected } => write!(f, "expected {expected}"),
            Self::Blank => write!(f, "must not be empty or whitespace"),
            Self::EmptyList => write!(f, "must contain at least one entry"),
            Self::NotInteger => write!(f, "must be an integer"),
            Self::OutOfRange { min, max } => write!(f, "must be between {min} and {max}"),
        }
    }
}

/// JSON value kinds named in type errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JsonKind {
    /// JSON object
    Object,
    /// JSON array
    Array,
    /// JSON string
    String,
    /// JSON number
    Number,
}

impl fmt::Display for JsonKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Object => "object",
            Self::Array => "array",
            Self::String => "string",
            Self::Number => "number",
        };
        f.write_str(name)
    }
}

/// Result alias for contract validation
pub type ValidationResult<T> = Result<T, ValidationError>;
