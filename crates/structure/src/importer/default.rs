use tracing::debug;

use super::{DataSource, SourceImporter, ValueImporter};
use crate::error::{Error, Result};
use crate::types::GenericField;
use crate::value::GenericFieldValue;

/// Falls back to a field's default attribute when the inner importer finds
/// nothing at a path.
///
/// Only absence triggers the fallback. A value that is present but fails to
/// parse or validate is reported as is, never replaced by the default.
#[derive(Debug, Clone, Default)]
pub struct DefaultImporter<I> {
    inner: I,
}

impl<I: ValueImporter> DefaultImporter<I> {
    /// Wraps `inner`.
    pub fn new(inner: I) -> Self {
        Self { inner }
    }

    /// The wrapped importer.
    pub fn inner(&self) -> &I {
        &self.inner
    }

    /// Unwraps the inner importer.
    pub fn into_inner(self) -> I {
        self.inner
    }
}

impl<S: DataSource> DefaultImporter<SourceImporter<S>> {
    /// Wraps a [`SourceImporter`] over `source` with the default config.
    pub fn from_source(source: S) -> Self {
        Self::new(SourceImporter::new(source))
    }
}

impl<I: ValueImporter> ValueImporter for DefaultImporter<I> {
    fn import<'s>(
        &mut self,
        field: &'s dyn GenericField,
        path: &str,
    ) -> Result<Box<dyn GenericFieldValue + 's>> {
        match self.inner.import(field, path) {
            Err(err) if err.is_not_found() => match field.with_default_value() {
                Some(value) => {
                    debug!(path, "substituting default");
                    value.map_err(|err| err.at_path(path))
                }
                None => Err(Error::MissingValue {
                    path: path.to_owned(),
                }),
            },
            other => other,
        }
    }

    fn contains(&self, path: &str) -> bool {
        self.inner.contains(path)
    }

    fn max_elements(&self) -> usize {
        self.inner.max_elements()
    }
}
