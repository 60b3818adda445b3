//! The schema tree: atomic fields, blocks and arrays.

mod array;
mod block;
mod field;
mod kind;
pub mod stock;

use std::collections::BTreeMap;
use std::fmt;

pub use array::{PrefixedArray, VarArray};
pub use block::Block;
pub use field::Field;
pub use kind::FieldKind;

use crate::error::Result;
use crate::importer::ValueImporter;
use crate::literal::{Literal, ValueBuilder};
use crate::node::Node;
use crate::path;
use crate::value::{GenericFieldValue, StructureValue};

/// A named schema node, atomic or aggregate.
///
/// Each node answers two independent construction requests:
/// [`with`](Structure::with) consumes a literal tree supplied eagerly in
/// schema order, [`with_importer`](Structure::with_importer) resolves every
/// leaf lazily by path. Both recurse through the tree, and both either
/// return a complete value tree or fail at the first invalid leaf.
///
/// Schema trees are read-only once assembled, so nodes are `Send + Sync`
/// and may be shared across threads.
pub trait Structure: fmt::Debug + Send + Sync {
    /// The node's name and attribute bag.
    fn node(&self) -> &Node;

    /// Mutable access to the attribute bag.
    fn node_mut(&mut self) -> &mut Node;

    /// The concrete kind, e.g. `"Block"` or `"UInt8"`.
    fn type_name(&self) -> String;

    /// Literal-driven construction hook. `position` names this node.
    fn build(&self, literal: &Literal, position: &str) -> Result<StructureValue<'_>>;

    /// Importer-driven construction hook. `path` already ends with this node's name.
    fn import(&self, importer: &mut dyn ValueImporter, path: &str)
    -> Result<StructureValue<'_>>;

    /// The node's name.
    fn name(&self) -> &str {
        self.node().name()
    }

    /// The node's description, empty when none was attached.
    fn description(&self) -> &str {
        self.node().description()
    }

    /// Read-only view of the attribute bag.
    fn attributes(&self) -> &BTreeMap<String, String> {
        self.node().attributes()
    }

    /// Sets an attribute; the last write for a key wins.
    fn set_attribute(&mut self, key: &str, value: &str) {
        self.node_mut().set_attribute(key, value);
    }

    /// Builds a value tree from literals.
    fn with(&self, builder: &ValueBuilder) -> Result<StructureValue<'_>> {
        self.build(builder.literal(), &path::escape(self.name()))
    }

    /// Builds a value tree by importing every leaf below `base/<name>`.
    fn with_importer(
        &self,
        importer: &mut dyn ValueImporter,
        base: &str,
    ) -> Result<StructureValue<'_>> {
        self.import(importer, &path::join(base, self.name()))
    }
}

/// An atomic schema node that can produce a leaf value from a string.
pub trait GenericField: Structure {
    /// Parses `raw` with the field's parsing rule, then checks attributes.
    fn with_str(&self, raw: &str) -> Result<Box<dyn GenericFieldValue + '_>>;

    /// Builds a leaf from the default attribute, checked like any other
    /// value. `None` when the field has no default.
    fn with_default_value(&self) -> Option<Result<Box<dyn GenericFieldValue + '_>>>;

    /// Whether a default attribute is attached.
    fn has_default(&self) -> bool;
}
