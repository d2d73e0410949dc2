//! Error types for webmstream.
//!
//! Everything here is structural: the decoder cannot find the next element
//! boundary and stops. Problems confined to one element are reported as
//! [`Diagnostic`](crate::Diagnostic) events instead.

use std::io;
use thiserror::Error;

/// Result type for webmstream operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for webmstream operations.
#[derive(Debug, Error)]
pub enum Error {
    /// Wire-level decoding failure.
    #[error(transparent)]
    Ebml(#[from] webmstream_ebml::Error),

    /// A child element extends past the end of its container.
    #[error(
        "Element 0x{id:X} at offset {offset} overruns its container: needs {needed} bytes, {remaining} remain"
    )]
    ElementOverrun {
        offset: u64,
        id: u32,
        needed: u64,
        remaining: u64,
    },

    /// The stream ended inside one or more sized containers.
    #[error("Stream truncated at offset {offset} with {open} container(s) open")]
    Truncated { offset: u64, open: usize },

    /// An element declared unknown size where that is not allowed.
    #[error("Element 0x{id:X} at offset {offset} has unknown size")]
    UnknownSizeRejected { offset: u64, id: u32 },

    /// An element ID longer than the configured maximum.
    #[error("Element ID at offset {offset} is {length} bytes long")]
    OversizedId { offset: u64, length: usize },

    /// Containers nested deeper than the configured maximum.
    #[error("Nesting depth {depth} exceeded at offset {offset}")]
    MaxDepthExceeded { offset: u64, depth: usize },

    /// Invalid configuration.
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl Error {
    /// Create a configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Absolute stream offset at which decoding stopped, when known.
    pub fn offset(&self) -> Option<u64> {
        match self {
            Error::Ebml(e) => e.offset(),
            Error::ElementOverrun { offset, .. }
            | Error::Truncated { offset, .. }
            | Error::UnknownSizeRejected { offset, .. }
            | Error::OversizedId { offset, .. }
            | Error::MaxDepthExceeded { offset, .. } => Some(*offset),
            Error::Config(_) | Error::Io(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overrun_display() {
        let err = Error::ElementOverrun {
            offset: 12,
            id: 0x2AD7B1,
            needed: 10,
            remaining: 4,
        };
        assert_eq!(
            err.to_string(),
            "Element 0x2AD7B1 at offset 12 overruns its container: needs 10 bytes, 4 remain"
        );
        assert_eq!(err.offset(), Some(12));
    }

    #[test]
    fn test_wrapped_ebml_offset() {
        let err: Error = webmstream_ebml::Error::MalformedVarInt { offset: 7 }.into();
        assert_eq!(err.offset(), Some(7));
        assert_eq!(
            err.to_string(),
            "Malformed variable-length integer at offset 7"
        );
    }

    #[test]
    fn test_config_has_no_offset() {
        assert_eq!(Error::config("bad").offset(), None);
    }
}
