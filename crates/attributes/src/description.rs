//! Human-facing documentation for schema nodes.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Free-form text describing a field or block. Has no validation effect.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Description(String);

impl Description {
    /// Creates a description.
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    /// The text, empty when nothing was set.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Description {
    fn from(text: &str) -> Self {
        Self(text.to_owned())
    }
}

impl From<String> for Description {
    fn from(text: String) -> Self {
        Self(text)
    }
}

impl fmt::Display for Description {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
