use std::fmt;

use crate::error::{Error, ParseError, Result};
use crate::literal::Literal;

/// Binds a storage type and a parsing rule to a [`Field`](super::Field).
///
/// New field kinds are added by implementing this trait on a marker type.
/// Attribute checks live on the field, so they apply uniformly whether a
/// value arrives as a literal or is parsed from a string.
///
/// ```
/// use structure::{Field, FieldKind, ParseError};
///
/// #[derive(Debug)]
/// enum Port {}
///
/// impl FieldKind for Port {
///     type Storage = u16;
///     const TYPE_NAME: &'static str = "Port";
///
///     fn parse(input: &str) -> Result<u16, ParseError> {
///         input
///             .strip_prefix(':')
///             .and_then(|port| port.parse().ok())
///             .ok_or_else(|| ParseError::new(input, Self::TYPE_NAME))
///     }
/// }
///
/// let port = Field::<Port>::new("port");
/// assert_eq!(*port.parse_value(":8080").unwrap().get(), 8080);
/// assert!(port.parse_value("8080").is_err());
/// ```
pub trait FieldKind: 'static {
    /// The resolved value type.
    type Storage: Clone + PartialOrd + fmt::Display + fmt::Debug + Send + Sync + 'static;

    /// Reported by [`Structure::type_name`](super::Structure::type_name).
    const TYPE_NAME: &'static str;

    /// Converts a raw string. Fails with the offending input.
    fn parse(input: &str) -> std::result::Result<Self::Storage, ParseError>;

    /// Converts a typed literal.
    ///
    /// [`Literal::Text`], [`Literal::Default`] and [`Literal::Tree`] are
    /// handled by the field before this is called. The default accepts only
    /// an exact [`Literal::Value`] of the storage type.
    fn from_literal(literal: &Literal) -> Result<Self::Storage> {
        match literal {
            Literal::Value(value) => value
                .downcast_ref::<Self::Storage>()
                .cloned()
                .ok_or_else(|| mismatch(Self::TYPE_NAME, literal)),
            other => Err(mismatch(Self::TYPE_NAME, other)),
        }
    }
}

pub(crate) fn mismatch(type_name: &str, literal: &Literal) -> Error {
    Error::shape(format!(
        "a {} literal cannot initialise a {type_name} field",
        literal.kind()
    ))
}
