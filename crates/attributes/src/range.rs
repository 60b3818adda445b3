//! Inclusive value ranges.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{AttributeError, RangeError};
use crate::numeric::{self, Scalar};

/// An inclusive, non-empty range `[min, max]`.
///
/// The invariant `min <= max` is checked on every construction path,
/// including deserialization.
///
/// # Examples
///
/// ```
/// use structure_attributes::Range;
///
/// let auto = Range::new(-10, 10).unwrap();
/// let narrow: Range<i8> = auto.cast().unwrap();
/// let wide: Range<i64> = narrow.into();
/// assert_eq!(wide, Range::new(-10, 10).unwrap());
/// assert!(auto.cast::<u8>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(
    try_from = "RangeRepr<T>",
    bound(deserialize = "T: Deserialize<'de> + PartialOrd + fmt::Display")
)]
pub struct Range<T> {
    min: T,
    max: T,
}

#[derive(Deserialize)]
struct RangeRepr<T> {
    min: T,
    max: T,
}

impl<T: PartialOrd + fmt::Display> TryFrom<RangeRepr<T>> for Range<T> {
    type Error = AttributeError;

    fn try_from(repr: RangeRepr<T>) -> Result<Self, Self::Error> {
        Self::new(repr.min, repr.max)
    }
}

impl<T: PartialOrd + fmt::Display> Range<T> {
    /// Creates `[min, max]`. Fails with `EmptyRange` when `min > max`.
    ///
    /// Unordered bounds (a NaN) are treated as empty as well.
    pub fn new(min: T, max: T) -> Result<Self, AttributeError> {
        if min <= max {
            Ok(Self { min, max })
        } else {
            Err(AttributeError::EmptyRange {
                min: min.to_string(),
                max: max.to_string(),
            })
        }
    }

    /// Inclusive lower bound.
    pub fn min(&self) -> &T {
        &self.min
    }

    /// Inclusive upper bound.
    pub fn max(&self) -> &T {
        &self.max
    }

    /// Whether `value` lies within `[min, max]`.
    pub fn contains(&self, value: &T) -> bool {
        self.min <= *value && *value <= self.max
    }

    /// Rejects `value` unless it lies within `[min, max]`.
    pub fn check(&self, value: &T) -> Result<(), RangeError> {
        if self.contains(value) {
            Ok(())
        } else {
            Err(RangeError {
                value: value.to_string(),
                min: self.min.to_string(),
                max: self.max.to_string(),
            })
        }
    }
}

impl<T: Scalar> Range<T> {
    /// `[min, T::MAX]`. Fails like [`Range::new`] for an unordered bound (NaN).
    pub fn at_least(min: T) -> Result<Self, AttributeError> {
        Self::new(min, T::MAX)
    }

    /// `[T::MIN, max]`. Fails like [`Range::new`] for an unordered bound (NaN).
    pub fn at_most(max: T) -> Result<Self, AttributeError> {
        Self::new(T::MIN, max)
    }

    /// The whole domain of `T`.
    pub fn full() -> Self {
        Self {
            min: T::MIN,
            max: T::MAX,
        }
    }

    /// Parses both bounds from strings, then checks ordering.
    pub fn parse(min: &str, max: &str) -> Result<Self, AttributeError> {
        Self::new(numeric::parse(min)?, numeric::parse(max)?)
    }

    /// Converts to a range over `U`.
    ///
    /// Narrowing fails with `RangeOverflow` when either bound is outside
    /// `U`'s domain; widening always succeeds (see also the `From` impls).
    pub fn cast<U: Scalar>(self) -> Result<Range<U>, AttributeError> {
        Ok(Range {
            min: numeric::cast(self.min)?,
            max: numeric::cast(self.max)?,
        })
    }
}

impl<T: fmt::Display> fmt::Display for Range<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.min, self.max)
    }
}

/// Shorthand for [`Range::new`], letting the literal types pick the width.
pub fn mk_range<T: PartialOrd + fmt::Display>(min: T, max: T) -> Result<Range<T>, AttributeError> {
    Range::new(min, max)
}

// Lossless widening. Both bounds widen monotonically, so ordering is kept.
macro_rules! widen {
    ($from:ty => [$($to:ty),+ $(,)?]) => {$(
        impl From<Range<$from>> for Range<$to> {
            fn from(range: Range<$from>) -> Self {
                Self {
                    min: <$to>::from(range.min),
                    max: <$to>::from(range.max),
                }
            }
        }
    )+};
}

widen!(i8 => [i16, i32, i64, f32, f64]);
widen!(i16 => [i32, i64, f32, f64]);
widen!(i32 => [i64, f64]);
widen!(u8 => [u16, u32, u64, i16, i32, i64, f32, f64]);
widen!(u16 => [u32, u64, i32, i64, f32, f64]);
widen!(u32 => [u64, i64, f64]);
widen!(f32 => [f64]);
