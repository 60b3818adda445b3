//! Errors raised while defining or checking attributes.

/// Error type for attribute construction.
///
/// These fire while a schema is being declared: a range whose bounds are
/// inverted, a bound that does not fit the target width, or a bound given as
/// a string that does not parse.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AttributeError {
    /// `min > max`; the range would be empty.
    #[error("empty range: min `{min}` is greater than max `{max}`")]
    EmptyRange { min: String, max: String },

    /// A bound cannot be represented in the target scalar type.
    #[error("range bound `{value}` does not fit in {target}")]
    RangeOverflow { value: String, target: &'static str },

    /// A bound given as a string could not be parsed.
    #[error("cannot parse range bound `{input}` as {target}")]
    Parse { input: String, target: &'static str },
}

impl AttributeError {
    /// Broad error category for grouping in logs.
    #[must_use]
    pub fn category(&self) -> &str {
        match self {
            Self::EmptyRange { .. } | Self::RangeOverflow { .. } => "range",
            Self::Parse { .. } => "format",
        }
    }

    /// Machine-readable error code for programmatic handling.
    #[must_use]
    pub fn code(&self) -> &str {
        match self {
            Self::EmptyRange { .. } => "ATTR_EMPTY_RANGE",
            Self::RangeOverflow { .. } => "ATTR_RANGE_OVERFLOW",
            Self::Parse { .. } => "ATTR_PARSE",
        }
    }

    /// Attribute errors are schema authoring bugs; retrying never helps.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        false
    }
}

/// A concrete value fell outside an attached range.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("value `{value}` is out of range [{min}, {max}]")]
pub struct RangeError {
    /// The rejected value, rendered with `Display`.
    pub value: String,
    /// Inclusive lower bound.
    pub min: String,
    /// Inclusive upper bound.
    pub max: String,
}

impl RangeError {
    /// Machine-readable error code.
    #[must_use]
    pub fn code(&self) -> &str {
        "ATTR_OUT_OF_RANGE"
    }
}
