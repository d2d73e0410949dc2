//! webmstream-schema: the Matroska/WebM element schema
//!
//! Element IDs, the kind of value each element carries, and which elements may
//! appear inside which container.
//!
//! # Example
//!
//! ```
//! use webmstream_schema::{ids, Context, ElementKind, Registry};
//!
//! let registry = Registry::global();
//! let entry = registry.lookup(Context::Info, ids::TIMESTAMP_SCALE).unwrap();
//! assert_eq!(entry.name, "TimestampScale");
//! assert_eq!(entry.kind, ElementKind::UInt);
//! ```

pub mod ids;
pub mod kind;
pub mod registry;

pub use kind::ElementKind;
pub use registry::{Context, Registry, SchemaEntry};
