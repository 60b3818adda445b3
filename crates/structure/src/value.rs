//! The value tree: resolved data, isomorphic to the schema that built it.
//!
//! Values borrow their schema (`'s`) for names and re-validation, own their
//! children, and are never mutated after construction.

use std::any::Any;
use std::fmt;

use crate::types::{Block, Field, FieldKind, GenericField, Structure};

/// Type-erased leaf value.
pub trait GenericFieldValue: fmt::Debug {
    /// The field that produced this value.
    fn field(&self) -> &dyn GenericField;

    /// The stored value, for downcasting to the field's storage type.
    fn storage(&self) -> &dyn Any;

    /// The stored value rendered with `Display`.
    fn to_display_string(&self) -> String;
}

impl dyn GenericFieldValue + '_ {
    /// The stored value, if the field's storage type is `T`.
    pub fn get<T: Any>(&self) -> Option<&T> {
        self.storage().downcast_ref()
    }

    /// The producing field's name.
    pub fn name(&self) -> &str {
        self.field().name()
    }
}

/// A resolved leaf of kind `K`.
pub struct FieldValue<'s, K: FieldKind> {
    field: &'s Field<K>,
    value: K::Storage,
}

impl<'s, K: FieldKind> FieldValue<'s, K> {
    /// Pairs an already validated value with its field.
    pub(crate) fn new(field: &'s Field<K>, value: K::Storage) -> Self {
        Self { field, value }
    }

    /// The stored value.
    pub fn get(&self) -> &K::Storage {
        &self.value
    }

    /// The producing field.
    pub fn field(&self) -> &'s Field<K> {
        self.field
    }

    /// Gives up the field reference and returns the stored value.
    pub fn into_inner(self) -> K::Storage {
        self.value
    }
}

impl<K: FieldKind> fmt::Debug for FieldValue<'_, K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldValue")
            .field("field", &self.field.name())
            .field("type", &K::TYPE_NAME)
            .field("value", &self.value)
            .finish()
    }
}

impl<K: FieldKind> GenericFieldValue for FieldValue<'_, K> {
    fn field(&self) -> &dyn GenericField {
        self.field
    }

    fn storage(&self) -> &dyn Any {
        &self.value
    }

    fn to_display_string(&self) -> String {
        self.value.to_string()
    }
}

/// Values of a block's fields, in declared order.
#[derive(Debug)]
pub struct BlockValue<'s> {
    block: &'s Block,
    fields: Vec<StructureValue<'s>>,
}

impl<'s> BlockValue<'s> {
    pub(crate) fn new(block: &'s Block, fields: Vec<StructureValue<'s>>) -> Self {
        Self { block, fields }
    }

    /// The producing block.
    pub fn block(&self) -> &'s Block {
        self.block
    }

    /// Child values in declared order.
    pub fn fields(&self) -> &[StructureValue<'s>] {
        &self.fields
    }

    /// The value of the child named `name`.
    pub fn get(&self, name: &str) -> Option<&StructureValue<'s>> {
        self.fields.iter().find(|value| value.name() == name)
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

/// Elements of an array, plus its count field when it has one.
#[derive(Debug)]
pub struct ArrayValue<'s> {
    array: &'s dyn Structure,
    count: Option<Box<dyn GenericFieldValue + 's>>,
    elements: Vec<StructureValue<'s>>,
}

impl<'s> ArrayValue<'s> {
    pub(crate) fn new(
        array: &'s dyn Structure,
        count: Option<Box<dyn GenericFieldValue + 's>>,
        elements: Vec<StructureValue<'s>>,
    ) -> Self {
        Self {
            array,
            count,
            elements,
        }
    }

    /// The producing array.
    pub fn array(&self) -> &'s dyn Structure {
        self.array
    }

    /// The count prefix, for prefixed arrays.
    pub fn count(&self) -> Option<&(dyn GenericFieldValue + 's)> {
        self.count.as_deref()
    }

    /// Elements in index order.
    pub fn elements(&self) -> &[StructureValue<'s>] {
        &self.elements
    }

    /// The element at `index`.
    pub fn get(&self, index: usize) -> Option<&StructureValue<'s>> {
        self.elements.get(index)
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Whether the array has no elements.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}

/// A node of the value tree.
#[derive(Debug)]
pub enum StructureValue<'s> {
    /// A resolved leaf.
    Field(Box<dyn GenericFieldValue + 's>),
    /// A resolved block.
    Block(BlockValue<'s>),
    /// A resolved array.
    Array(ArrayValue<'s>),
}

impl<'s> StructureValue<'s> {
    /// Name of the schema node that produced this value.
    pub fn name(&self) -> &str {
        match self {
            Self::Field(value) => value.name(),
            Self::Block(value) => value.block.name(),
            Self::Array(value) => value.array.name(),
        }
    }

    /// The leaf value, if this is a field.
    pub fn as_field(&self) -> Option<&(dyn GenericFieldValue + 's)> {
        match self {
            Self::Field(value) => Some(value.as_ref()),
            _ => None,
        }
    }

    /// The block value, if this is a block.
    pub fn as_block(&self) -> Option<&BlockValue<'s>> {
        match self {
            Self::Block(value) => Some(value),
            _ => None,
        }
    }

    /// The array value, if this is an array.
    pub fn as_array(&self) -> Option<&ArrayValue<'s>> {
        match self {
            Self::Array(value) => Some(value),
            _ => None,
        }
    }

    /// The leaf's stored value, if this is a field with storage type `T`.
    pub fn get<T: Any>(&self) -> Option<&T> {
        self.as_field()?.get()
    }

    fn render(&self, f: &mut fmt::Formatter<'_>, depth: usize) -> fmt::Result {
        let indent = "  ".repeat(depth);
        match self {
            Self::Field(value) => {
                writeln!(f, "{indent}{} = {}", value.name(), value.to_display_string())
            }
            Self::Block(value) => {
                writeln!(f, "{indent}{} {{", value.block.name())?;
                for child in &value.fields {
                    child.render(f, depth + 1)?;
                }
                writeln!(f, "{indent}}}")
            }
            Self::Array(value) => {
                writeln!(f, "{indent}{} [", value.array.name())?;
                if let Some(count) = &value.count {
                    writeln!(
                        f,
                        "{indent}  {} = {}",
                        count.name(),
                        count.to_display_string()
                    )?;
                }
                for element in &value.elements {
                    element.render(f, depth + 1)?;
                }
                writeln!(f, "{indent}]")
            }
        }
    }
}

impl fmt::Display for StructureValue<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.render(f, 0)
    }
}
