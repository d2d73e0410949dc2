//! Error types for webmstream-ebml.

use thiserror::Error;

/// Result type for webmstream-ebml operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for EBML wire decoding.
///
/// Offsets are absolute byte positions in the input stream. Variants fall into
/// three groups: source signals (more data needed, stream ended), structural
/// failures that desynchronize the stream, and content failures confined to a
/// single element payload.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Not enough bytes are buffered yet; retry after more input arrives.
    #[error("Insufficient data at offset {offset}: need {needed} bytes, have {available}")]
    InsufficientData {
        offset: u64,
        needed: usize,
        available: usize,
    },

    /// The source is finished and no more bytes will arrive.
    #[error("End of stream at offset {offset}")]
    EndOfStream { offset: u64 },

    /// A variable-length integer started with a zero byte.
    #[error("Malformed variable-length integer at offset {offset}")]
    MalformedVarInt { offset: u64 },

    /// A size field declared a length the codec cannot represent.
    #[error("Size field too large at offset {offset}: {length} bytes")]
    SizeTooLarge { offset: u64, length: usize },

    /// Integer payload wider than 8 bytes.
    #[error("Invalid integer width: {width} bytes")]
    InvalidIntWidth { width: usize },

    /// Float payload that is neither 4 nor 8 bytes.
    #[error("Invalid float width: {width} bytes")]
    InvalidFloatWidth { width: usize },

    /// Date payload that is not 8 bytes.
    #[error("Invalid date width: {width} bytes")]
    InvalidDateWidth { width: usize },

    /// Fixed-size lacing whose data does not split evenly.
    #[error("Uneven fixed lacing: {data_size} bytes across {frame_count} frames")]
    UnevenFixedLacing { data_size: u64, frame_count: usize },

    /// Lacing mode outside 0..=3.
    #[error("Unsupported lacing mode: {0}")]
    UnsupportedLacingMode(u8),

    /// An EBML lace delta produced a negative frame size.
    #[error("Invalid lace size {size} at offset {offset}")]
    InvalidLaceSize { offset: u64, size: i64 },

    /// A track number or lace size inside a block payload is not a valid
    /// vint. The block's own span is still known.
    #[error("Malformed block payload at offset {offset}")]
    MalformedBlock { offset: u64 },

    /// Lace sizes add up to more than the block carries.
    #[error("Lacing overrun at offset {offset}: need {needed} bytes, have {available}")]
    LacingOverrun {
        offset: u64,
        needed: u64,
        available: u64,
    },
}

impl Error {
    /// Whether this is the "try again with more bytes" signal.
    pub fn is_insufficient(&self) -> bool {
        matches!(self, Error::InsufficientData { .. })
    }

    /// Whether this error desynchronizes the stream.
    ///
    /// Structural errors cannot be skipped because the element boundary that
    /// would be skipped to is itself unknown.
    pub fn is_structural(&self) -> bool {
        matches!(
            self,
            Error::MalformedVarInt { .. } | Error::SizeTooLarge { .. } | Error::EndOfStream { .. }
        )
    }

    /// Absolute stream offset, when the error carries one.
    pub fn offset(&self) -> Option<u64> {
        match self {
            Error::InsufficientData { offset, .. }
            | Error::EndOfStream { offset }
            | Error::MalformedVarInt { offset }
            | Error::SizeTooLarge { offset, .. }
            | Error::InvalidLaceSize { offset, .. }
            | Error::MalformedBlock { offset }
            | Error::LacingOverrun { offset, .. } => Some(*offset),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insufficient_is_not_structural() {
        let err = Error::InsufficientData {
            offset: 10,
            needed: 4,
            available: 1,
        };
        assert!(err.is_insufficient());
        assert!(!err.is_structural());
        assert_eq!(err.offset(), Some(10));
    }

    #[test]
    fn test_malformed_display() {
        let err = Error::MalformedVarInt { offset: 42 };
        assert_eq!(
            err.to_string(),
            "Malformed variable-length integer at offset 42"
        );
        assert!(err.is_structural());
    }

    #[test]
    fn test_malformed_block_is_content_error() {
        let err = Error::MalformedBlock { offset: 12 };
        assert!(!err.is_structural());
        assert_eq!(err.offset(), Some(12));
    }

    #[test]
    fn test_content_errors_have_no_offset() {
        assert_eq!(Error::InvalidFloatWidth { width: 3 }.offset(), None);
        assert_eq!(
            Error::InvalidDateWidth { width: 4 }.to_string(),
            "Invalid date width: 4 bytes"
        );
    }
}
