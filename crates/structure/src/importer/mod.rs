//! Importer-driven construction.
//!
//! A [`ValueImporter`] resolves one leaf at a time from its path. The stock
//! [`SourceImporter`] reads raw strings from a [`DataSource`] and parses them
//! with the leaf's own rule; [`DefaultImporter`] wraps any importer and falls
//! back to the leaf's default attribute when the path is absent.
//!
//! ```
//! use structure::stock::{Float, UInt8};
//! use structure::{Block, DefaultImporter, MapSource, Structure};
//!
//! let schema = Block::new("root")
//!     .with_field(UInt8::new("a").with_default(42))
//!     .with_field(Float::new("b"));
//!
//! let source: MapSource = [("/root/b", "2.75")].into_iter().collect();
//! let mut importer = DefaultImporter::from_source(source);
//! let value = schema.with_importer(&mut importer, "").unwrap();
//!
//! let root = value.as_block().unwrap();
//! assert_eq!(root.get("a").unwrap().get::<u8>(), Some(&42));
//! assert_eq!(root.get("b").unwrap().get::<f32>(), Some(&2.75));
//! ```

mod default;
mod source;

pub use default::DefaultImporter;
pub use source::{DataSource, JsonSource, MapSource};

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::error::{Error, Result};
use crate::types::GenericField;
use crate::value::GenericFieldValue;

/// Resolves leaf values by path.
pub trait ValueImporter {
    /// Produces a validated value for `field` from whatever is stored at
    /// `path`.
    ///
    /// Absence must be reported as an error for which
    /// [`Error::is_not_found`] holds, so that wrappers can tell it apart
    /// from parse and validation failures.
    fn import<'s>(
        &mut self,
        field: &'s dyn GenericField,
        path: &str,
    ) -> Result<Box<dyn GenericFieldValue + 's>>;

    /// Whether any data exists at `path` or below it. Arrays use this to
    /// find their length.
    fn contains(&self, path: &str) -> bool;

    /// Upper bound on the number of elements a single array may import.
    fn max_elements(&self) -> usize {
        DEFAULT_MAX_ELEMENTS
    }
}

/// Element limit used when an importer does not configure its own.
pub const DEFAULT_MAX_ELEMENTS: usize = 65_536;

impl<I: ValueImporter + ?Sized> ValueImporter for &mut I {
    fn import<'s>(
        &mut self,
        field: &'s dyn GenericField,
        path: &str,
    ) -> Result<Box<dyn GenericFieldValue + 's>> {
        (**self).import(field, path)
    }

    fn contains(&self, path: &str) -> bool {
        (**self).contains(path)
    }

    fn max_elements(&self) -> usize {
        (**self).max_elements()
    }
}

/// How raw strings are treated before parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImportConfig {
    /// Trim surrounding whitespace.
    pub trim_whitespace: bool,
    /// Treat an empty string as "no value at this path".
    pub empty_is_absent: bool,
    /// Largest array an import may produce. A source that answers every
    /// path would otherwise never end a variable-length array.
    pub max_elements: usize,
}

impl Default for ImportConfig {
    fn default() -> Self {
        Self {
            trim_whitespace: true,
            empty_is_absent: false,
            max_elements: DEFAULT_MAX_ELEMENTS,
        }
    }
}

/// Imports leaves by parsing the raw strings of a [`DataSource`].
#[derive(Debug, Clone, Default)]
pub struct SourceImporter<S> {
    source: S,
    config: ImportConfig,
}

impl<S: DataSource> SourceImporter<S> {
    /// Reads from `source` with the default config.
    pub fn new(source: S) -> Self {
        Self {
            source,
            config: ImportConfig::default(),
        }
    }

    /// Replaces the config.
    #[must_use]
    pub fn with_config(mut self, config: ImportConfig) -> Self {
        self.config = config;
        self
    }

    /// The wrapped source.
    pub fn source(&self) -> &S {
        &self.source
    }

    /// The active config.
    pub fn config(&self) -> &ImportConfig {
        &self.config
    }

    fn raw(&self, path: &str) -> Option<String> {
        let mut raw = self.source.lookup(path)?;
        if self.config.trim_whitespace {
            let trimmed = raw.trim();
            if trimmed.len() != raw.len() {
                raw = trimmed.to_owned();
            }
        }
        (!(self.config.empty_is_absent && raw.is_empty())).then_some(raw)
    }
}

impl<S: DataSource> ValueImporter for SourceImporter<S> {
    fn import<'s>(
        &mut self,
        field: &'s dyn GenericField,
        path: &str,
    ) -> Result<Box<dyn GenericFieldValue + 's>> {
        let Some(raw) = self.raw(path) else {
            debug!(path, "no value at path");
            return Err(Error::not_found_at(path));
        };

        trace!(path, raw = %raw, field = %field.type_name(), "importing leaf");
        field.with_str(&raw).map_err(|err| err.at_path(path))
    }

    fn contains(&self, path: &str) -> bool {
        self.source.contains(path)
    }

    fn max_elements(&self) -> usize {
        self.config.max_elements
    }
}
