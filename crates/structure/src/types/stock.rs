//! Field kinds for the primitive storage types.
//!
//! Each kind comes with an alias, so `UInt8::new("a")` declares a field
//! storing a `u8`. Numeric kinds accept [`Literal::Number`] of any width
//! and reject values their storage cannot hold exactly.

use structure_attributes::{AttributeError, numeric};

use super::kind::mismatch;
use super::{Field, FieldKind};
use crate::error::{ParseError, Result};
use crate::literal::Literal;

macro_rules! numeric_kinds {
    ($($(#[$meta:meta])* $kind:ident, $alias:ident => $ty:ty;)+) => {$(
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $kind {}

        impl FieldKind for $kind {
            type Storage = $ty;
            const TYPE_NAME: &'static str = stringify!($alias);

            fn parse(input: &str) -> std::result::Result<$ty, ParseError> {
                numeric::parse::<$ty>(input).map_err(|_| ParseError::new(input, Self::TYPE_NAME))
            }

            fn from_literal(literal: &Literal) -> Result<$ty> {
                match literal {
                    Literal::Number(number) => number.cast::<$ty>().ok_or_else(|| {
                        AttributeError::RangeOverflow {
                            value: number.to_string(),
                            target: Self::TYPE_NAME,
                        }
                        .into()
                    }),
                    Literal::Value(value) => value
                        .downcast_ref::<$ty>()
                        .copied()
                        .ok_or_else(|| mismatch(Self::TYPE_NAME, literal)),
                    other => Err(mismatch(Self::TYPE_NAME, other)),
                }
            }
        }

        #[doc = concat!("A field storing a `", stringify!($ty), "`.")]
        pub type $alias = Field<$kind>;
    )+};
}

numeric_kinds! {
    UInt8Kind, UInt8 => u8;
    UInt16Kind, UInt16 => u16;
    UInt32Kind, UInt32 => u32;
    UInt64Kind, UInt64 => u64;
    Int8Kind, Int8 => i8;
    Int16Kind, Int16 => i16;
    Int32Kind, Int32 => i32;
    Int64Kind, Int64 => i64;
    /// Single precision. Literals are rounded to the nearest `f32`.
    FloatKind, Float => f32;
    DoubleKind, Double => f64;
}

/// `true`/`false`, also `1`/`0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BoolKind {}

impl FieldKind for BoolKind {
    type Storage = bool;
    const TYPE_NAME: &'static str = "Bool";

    fn parse(input: &str) -> std::result::Result<bool, ParseError> {
        match input {
            "true" | "1" => Ok(true),
            "false" | "0" => Ok(false),
            _ => Err(ParseError::new(input, Self::TYPE_NAME)),
        }
    }

    fn from_literal(literal: &Literal) -> Result<bool> {
        match literal {
            Literal::Bool(value) => Ok(*value),
            other => Err(mismatch(Self::TYPE_NAME, other)),
        }
    }
}

/// A field storing a `bool`.
pub type Bool = Field<BoolKind>;

/// Free text, taken verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextKind {}

impl FieldKind for TextKind {
    type Storage = String;
    const TYPE_NAME: &'static str = "Text";

    fn parse(input: &str) -> std::result::Result<String, ParseError> {
        Ok(input.to_owned())
    }
}

/// A field storing a `String`.
pub type Text = Field<TextKind>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Structure;
    use rstest::rstest;
    use structure_attributes::Number;

    #[rstest]
    #[case::max("255", Some(255))]
    #[case::zero("0", Some(0))]
    #[case::overflow("256", None)]
    #[case::negative("-1", None)]
    #[case::garbage("x1", None)]
    #[case::empty("", None)]
    fn uint8_parse(#[case] input: &str, #[case] expected: Option<u8>) {
        assert_eq!(UInt8Kind::parse(input).ok(), expected);
    }

    #[test]
    fn numeric_literals_are_checked() {
        let lit = Literal::Number(Number::Int(-1));
        assert!(UInt32Kind::from_literal(&lit).is_err());
        assert_eq!(Int64Kind::from_literal(&lit).unwrap(), -1);

        let lit = Literal::Number(Number::Float(2.5));
        assert!(Int32Kind::from_literal(&lit).is_err());
        assert_eq!(DoubleKind::from_literal(&lit).unwrap(), 2.5);

        let lit = Literal::Number(Number::Float(4.0));
        assert_eq!(UInt16Kind::from_literal(&lit).unwrap(), 4);
    }

    #[test]
    fn integer_literals_are_not_rounded_into_floats() {
        let err = FloatKind::from_literal(&Literal::from(16_777_217)).unwrap_err();
        assert_eq!(err.code(), "STRUCT_ATTRIBUTE");
        assert_eq!(
            FloatKind::from_literal(&Literal::from(16_777_216)).unwrap(),
            16_777_216.0
        );
        assert!(DoubleKind::from_literal(&Literal::from(u64::MAX)).is_err());
        assert_eq!(DoubleKind::from_literal(&Literal::from(-3)).unwrap(), -3.0);
    }

    #[test]
    fn exact_values_downcast() {
        assert_eq!(UInt64Kind::from_literal(&Literal::value(9u64)).unwrap(), 9);
        assert!(UInt64Kind::from_literal(&Literal::value(9u32)).is_err());
        assert!(Int8Kind::from_literal(&Literal::Bool(true)).is_err());
    }

    #[rstest]
    #[case("true", Some(true))]
    #[case("1", Some(true))]
    #[case("false", Some(false))]
    #[case("0", Some(false))]
    #[case("yes", None)]
    fn bool_parse(#[case] input: &str, #[case] expected: Option<bool>) {
        assert_eq!(BoolKind::parse(input).ok(), expected);
    }

    #[test]
    fn text_is_verbatim_and_needs_text_literals() {
        assert_eq!(TextKind::parse(" a b ").unwrap(), " a b ");
        assert!(TextKind::from_literal(&Literal::Bool(false)).is_err());
        assert_eq!(
            TextKind::from_literal(&Literal::value(String::from("x"))).unwrap(),
            "x"
        );
    }

    #[test]
    fn type_names() {
        assert_eq!(UInt8::new("a").type_name(), "UInt8");
        assert_eq!(Int64::new("a").type_name(), "Int64");
        assert_eq!(Float::new("a").type_name(), "Float");
        assert_eq!(Double::new("a").type_name(), "Double");
        assert_eq!(Bool::new("a").type_name(), "Bool");
        assert_eq!(Text::new("a").type_name(), "Text");
    }
}
