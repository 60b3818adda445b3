//! # structure
//!
//! Declarative, typed descriptions of hierarchical records, and the
//! machinery to turn raw input into validated value trees.
//!
//! A schema is a tree of [`Structure`] nodes: typed [`Field`] leaves carrying
//! attributes such as a [`Range`](attributes::Range) or a default, grouped by
//! [`Block`]s and arrays. A schema produces a value tree either from literals
//! ([`Structure::with`]) or by importing every leaf from a path-addressed
//! source ([`Structure::with_importer`]). Every leaf is checked against its
//! attributes; construction yields a complete tree or an error naming the
//! failing location.
//!
//! ```
//! use structure::prelude::*;
//!
//! let schema = Block::new("root")
//!     .with_field(UInt8::new("a").with_default(42))
//!     .with_field(Float::new("b"));
//!
//! // Literal-driven: one literal per leaf, in declared order.
//! let value = schema
//!     .with(&ValueBuilder::new(vec![Literal::Default, Literal::from(2.75)]))
//!     .unwrap();
//! assert_eq!(value.as_block().unwrap().get("a").unwrap().get::<u8>(), Some(&42));
//!
//! // A leaf with neither a value nor a default fails the whole construction.
//! assert!(schema
//!     .with(&ValueBuilder::new(vec![Literal::Default, Literal::Default]))
//!     .is_err());
//! ```

pub use structure_attributes as attributes;

pub mod error;
pub mod importer;
pub mod literal;
pub mod node;
pub mod path;
pub mod types;
pub mod value;

pub use error::{Error, ParseError, Result};
pub use importer::{
    DEFAULT_MAX_ELEMENTS, DataSource, DefaultImporter, ImportConfig, JsonSource, MapSource,
    SourceImporter, ValueImporter,
};
pub use literal::{Literal, ValueBuilder};
pub use node::Node;
pub use types::{Block, Field, FieldKind, GenericField, PrefixedArray, Structure, VarArray, stock};
pub use value::{ArrayValue, BlockValue, FieldValue, GenericFieldValue, StructureValue};

pub mod prelude {
    pub use crate::attributes::{DefaultValue, Description, Range, mk_range};
    pub use crate::error::Error;
    pub use crate::importer::{DataSource, DefaultImporter, JsonSource, MapSource, ValueImporter};
    pub use crate::literal::{Literal, ValueBuilder};
    pub use crate::types::{Block, Field, FieldKind, GenericField, PrefixedArray, Structure, VarArray};
    pub use crate::value::{GenericFieldValue, StructureValue};

    pub use crate::types::stock::*;
}
