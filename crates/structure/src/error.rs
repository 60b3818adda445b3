//! Error types for schema definition and value construction.

use structure_attributes::{AttributeError, RangeError};

/// A raw string could not be converted to a field's storage type.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("cannot parse `{input}` as {type_name}")]
pub struct ParseError {
    /// The offending input, verbatim.
    pub input: String,
    /// Name of the field kind that rejected it.
    pub type_name: &'static str,
}

impl ParseError {
    /// Creates a parse error for `input`.
    pub fn new(input: impl Into<String>, type_name: &'static str) -> Self {
        Self {
            input: input.into(),
            type_name,
        }
    }
}

/// Error type for value construction.
///
/// Leaf failures (`Parse`, `Attribute`, `Range`, `Shape`, `NotFound`) are
/// wrapped exactly once with their location: `Build` carries the traversal
/// position of a literal-driven construction, `Import` the path of an
/// importer-driven one. Nothing is ever returned alongside an error; a
/// failed construction yields no partial tree.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A string failed the field's parsing rule.
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// An attribute could not be built, or a literal did not fit the storage type.
    #[error(transparent)]
    Attribute(#[from] AttributeError),

    /// A value violated an attached range.
    #[error(transparent)]
    Range(#[from] RangeError),

    /// The literal tree does not have the schema's shape.
    #[error("shape mismatch: {reason}")]
    Shape { reason: String },

    /// Literal-driven construction failed at `position`.
    #[error("build failed at `{position}`: {source}")]
    Build {
        position: String,
        #[source]
        source: Box<Error>,
    },

    /// Importer-driven construction failed at `path`.
    #[error("import failed at `{path}`: {source}")]
    Import {
        path: String,
        #[source]
        source: Box<Error>,
    },

    /// The data source has nothing at the requested path.
    #[error("no value at path")]
    NotFound,

    /// Neither the data source nor a default attribute supplied a value.
    #[error("no value and no default at `{path}`")]
    MissingValue { path: String },
}

/// Result alias for construction.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Builds a shape mismatch.
    pub fn shape(reason: impl Into<String>) -> Self {
        Self::Shape {
            reason: reason.into(),
        }
    }

    /// The "nothing at this path" failure a data-source importer reports.
    pub fn not_found_at(path: &str) -> Self {
        Self::NotFound.at_path(path)
    }

    /// Wraps `self` with an importer path.
    #[must_use]
    pub fn at_path(self, path: &str) -> Self {
        Self::Import {
            path: path.to_owned(),
            source: Box::new(self),
        }
    }

    /// Wraps `self` with a builder traversal position.
    #[must_use]
    pub fn at_position(self, position: &str) -> Self {
        Self::Build {
            position: position.to_owned(),
            source: Box::new(self),
        }
    }

    /// Whether this failure only means "the source has no value here".
    ///
    /// Parse and validation failures return `false`; a defaulting importer
    /// must never mask them.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        match self {
            Self::NotFound => true,
            Self::Import { source, .. } => source.is_not_found(),
            _ => false,
        }
    }

    /// The innermost error, with location wrappers removed.
    #[must_use]
    pub fn root_cause(&self) -> &Self {
        match self {
            Self::Build { source, .. } | Self::Import { source, .. } => source.root_cause(),
            other => other,
        }
    }

    /// The importer path or builder position this error is attached to.
    #[must_use]
    pub fn location(&self) -> Option<&str> {
        match self {
            Self::Build { position, .. } => Some(position),
            Self::Import { path, .. } | Self::MissingValue { path } => Some(path),
            _ => None,
        }
    }

    /// Broad error category for grouping in logs.
    #[must_use]
    pub fn category(&self) -> &str {
        match self {
            Self::Parse(_) => "format",
            Self::Attribute(_) | Self::Range(_) => "validation",
            Self::Shape { .. } | Self::Build { .. } => "build",
            Self::Import { .. } => "import",
            Self::NotFound | Self::MissingValue { .. } => "lookup",
        }
    }

    /// Machine-readable error code for programmatic handling.
    #[must_use]
    pub fn code(&self) -> &str {
        match self {
            Self::Parse(_) => "STRUCT_PARSE",
            Self::Attribute(_) => "STRUCT_ATTRIBUTE",
            Self::Range(_) => "STRUCT_RANGE",
            Self::Shape { .. } => "STRUCT_SHAPE",
            Self::Build { .. } => "STRUCT_BUILD",
            Self::Import { .. } => "STRUCT_IMPORT",
            Self::NotFound => "STRUCT_NOT_FOUND",
            Self::MissingValue { .. } => "STRUCT_MISSING_VALUE",
        }
    }

    /// Construction is deterministic; retrying with the same input never helps.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        false
    }
}
