//! The name, attribute bag and description shared by every schema node.

use std::collections::BTreeMap;

use structure_attributes::Description;

/// The data every schema node carries: its name, a free-form key/value
/// attribute bag and an optional description.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Node {
    name: String,
    attributes: BTreeMap<String, String>,
    description: Description,
}

impl Node {
    /// Creates a node with no attributes.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// The node's name, fixed at construction.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Sets `key` to `value`, replacing any previous value.
    pub fn set_attribute(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.attributes.insert(key.into(), value.into());
    }

    /// Read-only view of the attribute bag.
    pub fn attributes(&self) -> &BTreeMap<String, String> {
        &self.attributes
    }

    /// The description, empty when none was set.
    pub fn description(&self) -> &str {
        self.description.as_str()
    }

    /// Replaces the description.
    pub fn set_description(&mut self, description: impl Into<Description>) {
        self.description = description.into();
    }
}
