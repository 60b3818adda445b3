//! # structure-attributes
//!
//! Optional facets attached to schema fields: value [`Range`]s, fallback
//! [`DefaultValue`]s and [`Description`]s.
//!
//! Attributes are plain data plus validation predicates. They know nothing
//! about fields, blocks or value trees; `structure` applies them.
//!
//! ```
//! use structure_attributes::{Range, mk_range};
//!
//! let range: Range<u16> = Range::parse("3", "3").unwrap();
//! assert!(range.check(&3).is_ok());
//! assert!(range.check(&4).is_err());
//!
//! assert!(mk_range(20, 10).is_err());
//! ```

pub mod default;
pub mod description;
pub mod error;
pub mod numeric;
pub mod range;

pub use default::DefaultValue;
pub use description::Description;
pub use error::{AttributeError, RangeError};
pub use numeric::{Number, Scalar};
pub use range::{Range, mk_range};
