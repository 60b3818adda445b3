use structure_attributes::Description;
use tracing::debug;

use super::Structure;
use crate::error::{Error, Result};
use crate::importer::ValueImporter;
use crate::literal::Literal;
use crate::node::Node;
use crate::path;
use crate::value::{BlockValue, StructureValue};

/// An ordered aggregate of child structures.
///
/// Children are owned, kept in declaration order and may themselves be
/// blocks. Only [`Structure`] implementors can be added, so composing a
/// non-schema type is a compile error.
///
/// ```
/// use structure::stock::{Float, UInt8};
/// use structure::{Block, Structure};
///
/// let block = Block::new("root")
///     .with_field(UInt8::new("a").with_default(42))
///     .with_field(Float::new("b"));
///
/// let names: Vec<_> = block.fields().iter().map(|f| f.name()).collect();
/// assert_eq!(names, ["a", "b"]);
/// ```
#[derive(Debug)]
pub struct Block {
    node: Node,
    fields: Vec<Box<dyn Structure>>,
}

impl Block {
    /// Creates a block with no children.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            node: Node::new(name),
            fields: Vec::new(),
        }
    }

    /// Appends a child.
    #[must_use]
    pub fn with_field(mut self, field: impl Structure + 'static) -> Self {
        self.add_field(field);
        self
    }

    /// Appends a child in place.
    pub fn add_field(&mut self, field: impl Structure + 'static) {
        self.fields.push(Box::new(field));
    }

    /// Attaches a description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<Description>) -> Self {
        self.node.set_description(description);
        self
    }

    /// Children in declaration order.
    pub fn fields(&self) -> Vec<&dyn Structure> {
        self.fields.iter().map(|field| &**field).collect()
    }

    /// The first child named `name`.
    pub fn field(&self, name: &str) -> Option<&dyn Structure> {
        self.fields
            .iter()
            .find(|field| field.name() == name)
            .map(|field| &**field)
    }

    /// Number of children.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether the block has no children.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl Structure for Block {
    fn node(&self) -> &Node {
        &self.node
    }

    fn node_mut(&mut self) -> &mut Node {
        &mut self.node
    }

    fn type_name(&self) -> String {
        "Block".to_owned()
    }

    fn build(&self, literal: &Literal, position: &str) -> Result<StructureValue<'_>> {
        let children = match literal {
            Literal::Tree(items) if items.len() == self.fields.len() => self
                .fields
                .iter()
                .zip(items)
                .map(|(field, item)| field.build(item, &path::join(position, field.name())))
                .collect::<Result<Vec<_>>>()?,
            Literal::Tree(items) => {
                return Err(Error::shape(format!(
                    "block `{}` has {} fields, got {} literals",
                    self.name(),
                    self.fields.len(),
                    items.len()
                ))
                .at_position(position));
            }
            Literal::Default => self
                .fields
                .iter()
                .map(|field| field.build(&Literal::Default, &path::join(position, field.name())))
                .collect::<Result<Vec<_>>>()?,
            other => {
                return Err(Error::shape(format!(
                    "block `{}` needs a tree literal, got {}",
                    self.name(),
                    other.kind()
                ))
                .at_position(position));
            }
        };

        debug!(block = self.name(), fields = children.len(), "block built");
        Ok(StructureValue::Block(BlockValue::new(self, children)))
    }

    fn import(&self, importer: &mut dyn ValueImporter, path: &str) -> Result<StructureValue<'_>> {
        let mut children = Vec::with_capacity(self.fields.len());
        for field in &self.fields {
            children.push(field.with_importer(&mut *importer, path)?);
        }

        debug!(block = self.name(), path, "block imported");
        Ok(StructureValue::Block(BlockValue::new(self, children)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::literal::ValueBuilder;
    use crate::types::stock::{Float, Text, UInt8};
    use pretty_assertions::assert_eq;

    fn sample() -> Block {
        Block::new("root")
            .with_field(UInt8::new("a").with_default(42))
            .with_field(Float::new("b"))
            .with_field(Block::new("sub").with_field(Text::new("c")))
    }

    #[test]
    fn description_defaults_to_empty() {
        let block = Block::new("root").with_field(UInt8::new("a"));
        assert_eq!(block.description(), "");
        assert_eq!(block.fields()[0].description(), "");

        let block = Block::new("root").with_description("top level");
        assert_eq!(block.description(), "top level");
        assert_eq!(block.type_name(), "Block");
    }

    #[test]
    fn lookup_by_name() {
        let block = sample();
        assert_eq!(block.len(), 3);
        assert_eq!(block.field("b").map(Structure::type_name).as_deref(), Some("Float"));
        assert!(block.field("missing").is_none());
        assert!(Block::new("e").is_empty());
    }

    #[test]
    fn build_mirrors_the_schema() {
        let block = sample();
        let builder = ValueBuilder::new(vec![
            Literal::from(1),
            Literal::from(2.5),
            Literal::from(vec![Literal::from("hi")]),
        ]);
        let value = block.with(&builder).unwrap();
        let root = value.as_block().unwrap();

        assert_eq!(root.len(), 3);
        assert_eq!(root.get("a").unwrap().get::<u8>(), Some(&1));
        assert_eq!(root.get("b").unwrap().get::<f32>(), Some(&2.5));
        let sub = root.get("sub").unwrap().as_block().unwrap();
        assert_eq!(sub.get("c").unwrap().get::<String>().map(String::as_str), Some("hi"));
    }

    #[test]
    fn wrong_arity_is_a_shape_error() {
        let err = sample()
            .with(&ValueBuilder::new(vec![Literal::from(1)]))
            .unwrap_err();
        assert_eq!(err.location(), Some("root"));
        assert_eq!(err.root_cause().code(), "STRUCT_SHAPE");
    }

    #[test]
    fn nested_failure_reports_the_leaf_position() {
        let builder = ValueBuilder::new(vec![
            Literal::from(1),
            Literal::from(2.5),
            Literal::from(vec![Literal::from(3)]),
        ]);
        let err = sample().with(&builder).unwrap_err();
        assert_eq!(err.location(), Some("root/sub/c"));
    }

    #[test]
    fn default_literal_propagates_to_every_leaf() {
        let block = Block::new("root").with_field(UInt8::new("a").with_default(42));
        let value = block.with(&ValueBuilder::new(Literal::Default)).unwrap();
        assert_eq!(value.as_block().unwrap().get("a").unwrap().get::<u8>(), Some(&42));

        let err = sample().with(&ValueBuilder::new(Literal::Default)).unwrap_err();
        assert_eq!(err.location(), Some("root/b"));
    }
}
