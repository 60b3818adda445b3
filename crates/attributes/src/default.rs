//! Fallback values for fields that receive no input.

use serde::{Deserialize, Serialize};

/// A value substituted by a defaulting importer when the data source has
/// nothing at a field's path.
///
/// The value is not validated here; the owning field re-checks it against
/// its other attributes every time it is used.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DefaultValue<T>(pub T);

impl<T> DefaultValue<T> {
    /// Wraps `value`.
    pub fn new(value: T) -> Self {
        Self(value)
    }

    /// The fallback value.
    pub fn value(&self) -> &T {
        &self.0
    }

    /// Unwraps the fallback value.
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> From<T> for DefaultValue<T> {
    fn from(value: T) -> Self {
        Self(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wraps_and_unwraps() {
        let default = DefaultValue::new(42u8);
        assert_eq!(*default.value(), 42);
        assert_eq!(default.into_inner(), 42);
    }

    #[test]
    fn serializes_as_bare_value() {
        let json = serde_json::to_string(&DefaultValue(3.5f32)).unwrap();
        assert_eq!(json, "3.5");
    }
}
