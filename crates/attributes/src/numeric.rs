//! Scalar domains and checked conversions between them.
//!
//! Every range bound and every numeric literal travels through [`Number`],
//! a width-independent representation. Converting *into* a concrete scalar
//! is checked: an integer that the target type cannot represent exactly is
//! rejected instead of being truncated, wrapped or rounded. Fractional
//! values are only accepted by float targets, which round them to the
//! nearest representable value within their finite domain.

use std::fmt;
use std::str::FromStr;

use crate::error::AttributeError;

/// A numeric value independent of storage width.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub enum Number {
    /// Any integer from `i64::MIN` to `u64::MAX`.
    Int(i128),
    /// An IEEE-754 double.
    Float(f64),
}

impl Number {
    /// Converts into `T`, returning `None` when `T` cannot hold the value.
    #[must_use]
    pub fn cast<T: Scalar>(self) -> Option<T> {
        T::from_number(self)
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(v) => write!(f, "{v}"),
            Self::Float(v) => write!(f, "{v}"),
        }
    }
}

/// A totally-ordered primitive with a natural minimum and maximum.
///
/// Implemented for every primitive integer up to 64 bits and for `f32`/`f64`.
pub trait Scalar:
    Copy + PartialOrd + fmt::Display + fmt::Debug + FromStr + Send + Sync + 'static
{
    /// Smallest representable value.
    const MIN: Self;
    /// Largest representable value.
    const MAX: Self;
    /// Primitive type name, used in error messages.
    const NAME: &'static str;

    /// Widens into a [`Number`]. Never fails.
    fn to_number(self) -> Number;

    /// Narrows from a [`Number`], `None` if out of domain or inexact.
    fn from_number(number: Number) -> Option<Self>;
}

macro_rules! impl_integer_scalar {
    ($($ty:ty),+ $(,)?) => {$(
        impl Scalar for $ty {
            const MIN: Self = <$ty>::MIN;
            const MAX: Self = <$ty>::MAX;
            const NAME: &'static str = stringify!($ty);

            fn to_number(self) -> Number {
                Number::Int(i128::from(self))
            }

            fn from_number(number: Number) -> Option<Self> {
                match number {
                    Number::Int(v) => <$ty>::try_from(v).ok(),
                    Number::Float(v) => {
                        if !v.is_finite() || v.fract() != 0.0 {
                            return None;
                        }
                        // Saturating cast; the round-trip check rejects anything that saturated.
                        let wide = v as i128;
                        if wide as f64 == v {
                            <$ty>::try_from(wide).ok()
                        } else {
                            None
                        }
                    }
                }
            }
        }
    )+};
}

impl_integer_scalar!(i8, i16, i32, i64, u8, u16, u32, u64);

impl Scalar for f32 {
    const MIN: Self = f32::MIN;
    const MAX: Self = f32::MAX;
    const NAME: &'static str = "f32";

    fn to_number(self) -> Number {
        Number::Float(f64::from(self))
    }

    fn from_number(number: Number) -> Option<Self> {
        match number {
            Number::Int(v) => {
                let narrow = v as f32;
                (narrow as i128 == v).then_some(narrow)
            }
            Number::Float(v) if v.is_finite() && v.abs() > f64::from(f32::MAX) => None,
            Number::Float(v) => Some(v as f32),
        }
    }
}

impl Scalar for f64 {
    const MIN: Self = f64::MIN;
    const MAX: Self = f64::MAX;
    const NAME: &'static str = "f64";

    fn to_number(self) -> Number {
        Number::Float(self)
    }

    fn from_number(number: Number) -> Option<Self> {
        match number {
            Number::Int(v) => {
                let wide = v as f64;
                (wide as i128 == v).then_some(wide)
            }
            Number::Float(v) => Some(v),
        }
    }
}

/// Parses `input` as `T`, reporting the target type on failure.
pub fn parse<T: Scalar>(input: &str) -> Result<T, AttributeError> {
    input.parse().map_err(|_| AttributeError::Parse {
        input: input.to_owned(),
        target: T::NAME,
    })
}

/// Converts `value` into `U`, failing when `U` cannot represent it.
pub fn cast<T: Scalar, U: Scalar>(value: T) -> Result<U, AttributeError> {
    value
        .to_number()
        .cast::<U>()
        .ok_or_else(|| AttributeError::RangeOverflow {
            value: value.to_string(),
            target: U::NAME,
        })
}
