use std::fmt;

use structure_attributes::{AttributeError, Description, Scalar, numeric};
use tracing::debug;

use super::{Field, FieldKind, Structure};
use crate::error::{Error, Result};
use crate::importer::ValueImporter;
use crate::literal::Literal;
use crate::node::Node;
use crate::path;
use crate::value::{ArrayValue, StructureValue};

/// A homogeneous sequence whose length is only known from the data.
///
/// Elements are addressed by index below the array's path (`/root/list/0`,
/// `/root/list/1`, ...). On import, elements are read until the source has
/// nothing at the next index.
#[derive(Debug)]
pub struct VarArray {
    node: Node,
    element: Box<dyn Structure>,
}

impl VarArray {
    /// Creates an array of `element`. The element's own name is not part
    /// of the path.
    pub fn new(name: impl Into<String>, element: impl Structure + 'static) -> Self {
        Self {
            node: Node::new(name),
            element: Box::new(element),
        }
    }

    /// Attaches a description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<Description>) -> Self {
        self.node.set_description(description);
        self
    }

    /// The element schema.
    pub fn element(&self) -> &dyn Structure {
        &*self.element
    }
}

impl Structure for VarArray {
    fn node(&self) -> &Node {
        &self.node
    }

    fn node_mut(&mut self) -> &mut Node {
        &mut self.node
    }

    fn type_name(&self) -> String {
        "VarArray".to_owned()
    }

    fn build(&self, literal: &Literal, position: &str) -> Result<StructureValue<'_>> {
        let elements = build_elements(self, &*self.element, literal, position)?;
        Ok(StructureValue::Array(ArrayValue::new(self, None, elements)))
    }

    fn import(&self, importer: &mut dyn ValueImporter, path: &str) -> Result<StructureValue<'_>> {
        let limit = importer.max_elements();
        let mut elements = Vec::new();
        loop {
            let element_path = path::index(path, elements.len());
            if !importer.contains(&element_path) {
                break;
            }
            if elements.len() == limit {
                return Err(too_many_elements(self, limit).at_path(path));
            }
            elements.push(self.element.import(&mut *importer, &element_path)?);
        }

        debug!(array = self.name(), path, elements = elements.len(), "array imported");
        Ok(StructureValue::Array(ArrayValue::new(self, None, elements)))
    }
}

/// A homogeneous sequence preceded by an explicit count field of kind `K`.
///
/// The count lives next to the elements, at `<array path>/<count name>`.
/// Attributes on the count field, such as a range, bound the length.
///
/// ```
/// use structure::stock::{UInt8, UInt8Kind};
/// use structure::{Literal, PrefixedArray, Structure, ValueBuilder};
///
/// let bytes = PrefixedArray::<UInt8Kind>::new("bytes", UInt8::new("u8"), "count")
///     .with_description("length-prefixed bytes");
///
/// let value = bytes.with(&ValueBuilder::new(Literal::tree([1u8, 2, 3]))).unwrap();
/// let array = value.as_array().unwrap();
/// assert_eq!(array.count().unwrap().get::<u8>(), Some(&3));
/// assert_eq!(array.len(), 3);
/// ```
pub struct PrefixedArray<K: FieldKind> {
    node: Node,
    element: Box<dyn Structure>,
    count: Field<K>,
}

impl<K: FieldKind> PrefixedArray<K>
where
    K::Storage: Scalar,
{
    /// Creates an array of `element` whose length is stored in a field
    /// named `count_name`.
    pub fn new(
        name: impl Into<String>,
        element: impl Structure + 'static,
        count_name: impl Into<String>,
    ) -> Self {
        Self {
            node: Node::new(name),
            element: Box::new(element),
            count: Field::new(count_name),
        }
    }

    /// Replaces the count field, e.g. to attach a range to it.
    #[must_use]
    pub fn with_count(mut self, count: Field<K>) -> Self {
        self.count = count;
        self
    }

    /// Attaches a description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<Description>) -> Self {
        self.node.set_description(description);
        self
    }

    /// The element schema.
    pub fn element(&self) -> &dyn Structure {
        &*self.element
    }

    /// The count field.
    pub fn count(&self) -> &Field<K> {
        &self.count
    }

    fn count_from_len(len: usize) -> Result<K::Storage> {
        let len = u64::try_from(len).map_err(|_| AttributeError::RangeOverflow {
            value: len.to_string(),
            target: "u64",
        })?;
        Ok(numeric::cast(len)?)
    }

    fn len_from_count(count: K::Storage) -> Result<usize> {
        let wide: u64 = numeric::cast(count)?;
        usize::try_from(wide).map_err(|_| {
            AttributeError::RangeOverflow {
                value: wide.to_string(),
                target: "usize",
            }
            .into()
        })
    }
}

impl<K: FieldKind> fmt::Debug for PrefixedArray<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PrefixedArray")
            .field("node", &self.node)
            .field("element", &self.element)
            .field("count", &self.count)
            .finish()
    }
}

impl<K: FieldKind> Structure for PrefixedArray<K>
where
    K::Storage: Scalar,
{
    fn node(&self) -> &Node {
        &self.node
    }

    fn node_mut(&mut self) -> &mut Node {
        &mut self.node
    }

    fn type_name(&self) -> String {
        format!("PrefixedArray<{}>", K::TYPE_NAME)
    }

    fn build(&self, literal: &Literal, position: &str) -> Result<StructureValue<'_>> {
        let elements = build_elements(self, &*self.element, literal, position)?;
        let count_position = path::join(position, self.count.name());
        let count = Self::count_from_len(elements.len())
            .and_then(|count| self.count.with_value(count))
            .map_err(|err| err.at_position(&count_position))?;

        Ok(StructureValue::Array(ArrayValue::new(
            self,
            Some(Box::new(count)),
            elements,
        )))
    }

    fn import(&self, importer: &mut dyn ValueImporter, path: &str) -> Result<StructureValue<'_>> {
        let count_path = path::join(path, self.count.name());
        let limit = importer.max_elements();
        let count = importer.import(&self.count, &count_path)?;
        let len = count
            .get::<K::Storage>()
            .ok_or_else(|| Error::shape(format!("count is not a {}", K::TYPE_NAME)))
            .and_then(|count| Self::len_from_count(*count))
            .and_then(|len| {
                if len > limit {
                    Err(too_many_elements(self, limit))
                } else {
                    Ok(len)
                }
            })
            .map_err(|err| err.at_path(&count_path))?;

        let elements = (0..len)
            .map(|i| self.element.import(&mut *importer, &path::index(path, i)))
            .collect::<Result<Vec<_>>>()?;

        debug!(array = self.name(), path, elements = len, "array imported");
        Ok(StructureValue::Array(ArrayValue::new(self, Some(count), elements)))
    }
}

fn too_many_elements(array: &dyn Structure, limit: usize) -> Error {
    Error::shape(format!(
        "array `{}` exceeds the limit of {limit} elements",
        array.name()
    ))
}

fn build_elements<'s>(
    array: &dyn Structure,
    element: &'s dyn Structure,
    literal: &Literal,
    position: &str,
) -> Result<Vec<StructureValue<'s>>> {
    match literal {
        Literal::Tree(items) => items
            .iter()
            .enumerate()
            .map(|(i, item)| element.build(item, &path::index(position, i)))
            .collect(),
        other => Err(Error::shape(format!(
            "array `{}` needs a tree literal, got {}",
            array.name(),
            other.kind()
        ))
        .at_position(position)),
    }
}
