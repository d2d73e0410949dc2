//! webmstream - Resumable EBML/WebM decoder
//!
//! Decodes the Matroska/WebM element tree from chunked input into either a
//! stream of [`Event`]s or a buffered [`Document`].
//!
//! # Modules
//!
//! - `walker` - Schema-driven, resumable tree walker
//! - `decoder` - Push-style [`StreamDecoder`] and buffered entry points
//! - `document` - Tree assembly and navigation
//! - `info` - Segment and track summaries
//! - `config` - Limits and policies
//! - `channel` - Tokio adapter (feature `tokio`)
//!
//! # Example
//!
//! ```
//! use webmstream::{decode_all, DecoderConfig};
//!
//! // EBML header with DocType "webm"
//! let data = [0x1A, 0x45, 0xDF, 0xA3, 0x87, 0x42, 0x82, 0x84, b'w', b'e', b'b', b'm'];
//! let doc = decode_all(&data, DecoderConfig::default()).unwrap();
//! assert_eq!(doc.doc_type(), Some("webm"));
//! ```

pub mod config;
pub mod decoder;
pub mod diagnostic;
pub mod document;
pub mod error;
pub mod event;
pub mod info;
pub mod value;
pub mod walker;

#[cfg(feature = "tokio")]
pub mod channel;

pub use config::{DecoderConfig, UnknownSizePolicy};
pub use decoder::{decode_all, decode_events, decode_reader, EventSink, StreamDecoder};
pub use diagnostic::{Diagnostic, DiagnosticKind};
pub use document::{Document, Node, NodeContent, TreeBuilder};
pub use error::{Error, Result};
pub use event::Event;
pub use info::{SegmentInfo, TrackInfo, TrackType};
pub use value::Value;
pub use walker::{ElementHeader, Step, Walker};

pub use webmstream_ebml::{Block, BlockFlags, Lacing};
pub use webmstream_schema::{ids, Context, ElementKind, Registry};
