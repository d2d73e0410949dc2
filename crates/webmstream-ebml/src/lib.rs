//! webmstream-ebml: EBML wire primitives
//!
//! Everything here works on raw bytes and knows nothing about which element
//! IDs exist; the schema lives in `webmstream-schema`.
//!
//! # Modules
//!
//! - `cursor` - Bounded reader that reports absolute stream offsets
//! - `vint` - Variable-length integers (IDs, sizes, signed lace deltas)
//! - `scalar` - Fixed-width payload decoders (uint, int, float, string, date)
//! - `source` - Pull interface over chunked input with resumable reads
//! - `block` - SimpleBlock/Block headers and the three lacing schemes

pub mod block;
pub mod cursor;
pub mod error;
pub mod scalar;
pub mod source;
pub mod vint;

pub use block::{Block, BlockFlags, Lacing};
pub use cursor::Cursor;
pub use error::{Error, Result};
pub use source::{ByteSource, ChunkedSource};
pub use vint::VarInt;
