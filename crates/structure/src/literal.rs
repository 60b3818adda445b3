//! Literal trees consumed by [`Structure::with`](crate::Structure::with).
//!
//! A literal tree mirrors the schema: one leaf literal per field, one
//! [`Literal::Tree`] per block or array, in declared field order.
//!
//! ```
//! use structure::{Literal, ValueBuilder};
//!
//! // Shaped like `Block("root", UInt8("a"), Block("sub", Float("x"), Text("y")))`.
//! let builder = ValueBuilder::new(vec![
//!     Literal::from(42),
//!     Literal::from(vec![Literal::from(1.5), Literal::from("hello")]),
//! ]);
//! assert!(matches!(builder.literal(), Literal::Tree(items) if items.len() == 2));
//! ```

use std::any::Any;

use structure_attributes::{Number, Scalar};

/// A single node of a literal tree.
#[derive(Debug)]
pub enum Literal {
    /// A number of any width; leaves cast it into their storage, checked.
    Number(Number),
    /// A boolean.
    Bool(bool),
    /// The string form of a value, run through the leaf's parsing rule.
    Text(String),
    /// An exact storage value, for field kinds with non-primitive storage.
    Value(Box<dyn Any>),
    /// Take the leaf's default attribute. On a block, applies to every leaf.
    Default,
    /// Literals for the children of a block or the elements of an array.
    Tree(Vec<Literal>),
}

impl Literal {
    /// Wraps an exact storage value.
    pub fn value<T: Any>(value: T) -> Self {
        Self::Value(Box::new(value))
    }

    /// Collects literals for a block or array.
    pub fn tree<I>(items: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Literal>,
    {
        Self::Tree(items.into_iter().map(Into::into).collect())
    }

    /// Short label for error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Number(_) => "number",
            Self::Bool(_) => "bool",
            Self::Text(_) => "text",
            Self::Value(_) => "value",
            Self::Default => "default",
            Self::Tree(_) => "tree",
        }
    }
}

macro_rules! number_literal {
    ($($ty:ty),+ $(,)?) => {$(
        impl From<$ty> for Literal {
            fn from(value: $ty) -> Self {
                Self::Number(value.to_number())
            }
        }
    )+};
}

number_literal!(i8, i16, i32, i64, u8, u16, u32, u64, f32, f64);

impl From<bool> for Literal {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<&str> for Literal {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for Literal {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<Vec<Literal>> for Literal {
    fn from(items: Vec<Literal>) -> Self {
        Self::Tree(items)
    }
}

/// Supplies literal values, eagerly and in schema order, to
/// [`Structure::with`](crate::Structure::with).
#[derive(Debug)]
pub struct ValueBuilder {
    root: Literal,
}

impl ValueBuilder {
    /// Wraps the literal for the root structure.
    pub fn new(root: impl Into<Literal>) -> Self {
        Self { root: root.into() }
    }

    /// The root literal.
    pub fn literal(&self) -> &Literal {
        &self.root
    }
}

impl From<Literal> for ValueBuilder {
    fn from(root: Literal) -> Self {
        Self { root }
    }
}

impl From<Vec<Literal>> for ValueBuilder {
    fn from(items: Vec<Literal>) -> Self {
        Self::new(items)
    }
}
