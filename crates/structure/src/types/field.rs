use std::fmt;
use std::marker::PhantomData;

use structure_attributes::{DefaultValue, Description, Range, RangeError, Scalar};
use tracing::trace;

use super::kind::mismatch;
use super::{FieldKind, GenericField, Structure};
use crate::error::{Error, Result};
use crate::importer::ValueImporter;
use crate::literal::Literal;
use crate::node::Node;
use crate::value::{FieldValue, GenericFieldValue, StructureValue};

/// An atomic schema node of kind `K`.
///
/// Attributes are attached with the `with_*` builders. Every value the
/// field produces, whether from a literal, a string or its own default,
/// is checked against the attached range first.
///
/// ```
/// use structure::attributes::Range;
/// use structure::stock::Int8;
///
/// let field = Int8::new("offset")
///     .with_description("signed offset")
///     .try_with_range(Range::new(-10, 10).unwrap())
///     .unwrap();
///
/// assert_eq!(*field.parse_value("-10").unwrap().get(), -10);
/// assert!(field.parse_value("11").is_err());
/// ```
pub struct Field<K: FieldKind> {
    node: Node,
    range: Option<Range<K::Storage>>,
    default: Option<DefaultValue<K::Storage>>,
    kind: PhantomData<fn() -> K>,
}

impl<K: FieldKind> Field<K> {
    /// Creates a field with no attributes.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            node: Node::new(name),
            range: None,
            default: None,
            kind: PhantomData,
        }
    }

    /// Attaches a description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<Description>) -> Self {
        self.node.set_description(description);
        self
    }

    /// Sets a free-form attribute.
    #[must_use]
    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.node.set_attribute(key, value);
        self
    }

    /// Attaches a range, replacing any previous one.
    #[must_use]
    pub fn with_range(mut self, range: Range<K::Storage>) -> Self {
        self.range = Some(range);
        self
    }

    /// Attaches a range whose bounds are parsed with the field's own rule.
    pub fn with_range_str(self, min: &str, max: &str) -> Result<Self> {
        let range = Range::new(K::parse(min)?, K::parse(max)?)?;
        Ok(self.with_range(range))
    }

    /// Attaches a default value. It is range-checked when used, not here.
    #[must_use]
    pub fn with_default(mut self, value: K::Storage) -> Self {
        self.default = Some(DefaultValue::new(value));
        self
    }

    /// The attached range.
    pub fn range(&self) -> Option<&Range<K::Storage>> {
        self.range.as_ref()
    }

    /// The attached default.
    pub fn default_value(&self) -> Option<&K::Storage> {
        self.default.as_ref().map(DefaultValue::value)
    }

    /// Checks `value` against every attached attribute.
    pub fn validate(&self, value: &K::Storage) -> std::result::Result<(), RangeError> {
        match &self.range {
            Some(range) => range.check(value),
            None => Ok(()),
        }
    }

    /// Parses and validates `raw` without building a value.
    pub fn parse_checked(&self, raw: &str) -> Result<K::Storage> {
        let value = K::parse(raw)?;
        self.validate(&value)?;
        Ok(value)
    }

    /// Validates `value` and pairs it with this field.
    pub fn with_value(&self, value: K::Storage) -> Result<FieldValue<'_, K>> {
        self.validate(&value)?;
        Ok(FieldValue::new(self, value))
    }

    /// Parses `raw`, validates it and pairs it with this field.
    pub fn parse_value(&self, raw: &str) -> Result<FieldValue<'_, K>> {
        self.with_value(K::parse(raw)?)
    }

    fn resolve(&self, literal: &Literal) -> Result<K::Storage> {
        match literal {
            Literal::Default => self
                .default_value()
                .cloned()
                .ok_or_else(|| Error::shape(format!("field `{}` has no default", self.name()))),
            Literal::Text(raw) => Ok(K::parse(raw)?),
            Literal::Tree(_) => Err(mismatch(K::TYPE_NAME, literal)),
            other => K::from_literal(other),
        }
    }
}

impl<K: FieldKind> Field<K>
where
    K::Storage: Scalar,
{
    /// Attaches a range over another numeric type, narrowing it into the
    /// field's storage. Fails when a bound does not fit.
    pub fn try_with_range<U: Scalar>(self, range: Range<U>) -> Result<Self> {
        Ok(self.with_range(range.cast()?))
    }
}

impl<K: FieldKind> Clone for Field<K> {
    fn clone(&self) -> Self {
        Self {
            node: self.node.clone(),
            range: self.range.clone(),
            default: self.default.clone(),
            kind: PhantomData,
        }
    }
}

impl<K: FieldKind> fmt::Debug for Field<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Field")
            .field("name", &self.node.name())
            .field("type", &K::TYPE_NAME)
            .field("range", &self.range)
            .field("default", &self.default)
            .finish_non_exhaustive()
    }
}

impl<K: FieldKind> Structure for Field<K> {
    fn node(&self) -> &Node {
        &self.node
    }

    fn node_mut(&mut self) -> &mut Node {
        &mut self.node
    }

    fn type_name(&self) -> String {
        K::TYPE_NAME.to_owned()
    }

    fn build(&self, literal: &Literal, position: &str) -> Result<StructureValue<'_>> {
        let value = self
            .resolve(literal)
            .and_then(|value| self.with_value(value))
            .map_err(|err| err.at_position(position))?;
        trace!(position, value = %value.get(), "field built");
        Ok(StructureValue::Field(Box::new(value)))
    }

    fn import(&self, importer: &mut dyn ValueImporter, path: &str) -> Result<StructureValue<'_>> {
        importer.import(self, path).map(StructureValue::Field)
    }
}

impl<K: FieldKind> GenericField for Field<K> {
    fn with_str(&self, raw: &str) -> Result<Box<dyn GenericFieldValue + '_>> {
        Ok(Box::new(self.parse_value(raw)?))
    }

    fn with_default_value(&self) -> Option<Result<Box<dyn GenericFieldValue + '_>>> {
        let value = self.default_value()?.clone();
        Some(
            self.with_value(value)
                .map(|value| Box::new(value) as Box<dyn GenericFieldValue + '_>),
        )
    }

    fn has_default(&self) -> bool {
        self.default.is_some()
    }
}
