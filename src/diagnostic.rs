//! Non-fatal decoding problems.
//!
//! A diagnostic means one element's payload was unusable. The walker skipped
//! the element's declared span and carried on with its parent.

use std::fmt;

use webmstream_schema::Context;

/// What went wrong with an element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagnosticKind {
    /// Block content did not match the element's declared size.
    SizeMismatch,
    /// Integer payload wider than 8 bytes.
    InvalidIntWidth,
    /// Float payload that is neither 4 nor 8 bytes.
    InvalidFloatWidth,
    /// Date payload that is not 8 bytes.
    InvalidDateWidth,
    /// Fixed-size lacing that does not split evenly.
    UnevenFixedLacing,
    /// Reserved lacing bits.
    UnsupportedLacingMode,
    /// EBML lacing produced a negative frame size.
    InvalidLaceSize,
    /// Zero-led vint in a block header or lace table.
    MalformedBlock,
    /// The EBML header announced a DocType outside the configured set.
    DocTypeMismatch,
    /// Leaf payload above the configured in-memory limit.
    ElementTooLarge,
}

impl DiagnosticKind {
    /// Map a content error from the wire layer. Structural and source errors
    /// have no diagnostic form.
    pub fn from_content_error(err: &webmstream_ebml::Error) -> Option<Self> {
        use webmstream_ebml::Error as E;

        match err {
            E::InvalidIntWidth { .. } => Some(Self::InvalidIntWidth),
            E::InvalidFloatWidth { .. } => Some(Self::InvalidFloatWidth),
            E::InvalidDateWidth { .. } => Some(Self::InvalidDateWidth),
            E::UnevenFixedLacing { .. } => Some(Self::UnevenFixedLacing),
            E::UnsupportedLacingMode(_) => Some(Self::UnsupportedLacingMode),
            E::InvalidLaceSize { .. } => Some(Self::InvalidLaceSize),
            E::LacingOverrun { .. } => Some(Self::SizeMismatch),
            E::MalformedBlock { .. } => Some(Self::MalformedBlock),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::SizeMismatch => "size_mismatch",
            Self::InvalidIntWidth => "invalid_int_width",
            Self::InvalidFloatWidth => "invalid_float_width",
            Self::InvalidDateWidth => "invalid_date_width",
            Self::UnevenFixedLacing => "uneven_fixed_lacing",
            Self::UnsupportedLacingMode => "unsupported_lacing_mode",
            Self::InvalidLaceSize => "invalid_lace_size",
            Self::MalformedBlock => "malformed_block",
            Self::DocTypeMismatch => "doc_type_mismatch",
            Self::ElementTooLarge => "element_too_large",
        }
    }
}

impl fmt::Display for DiagnosticKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A skipped element and the reason it was skipped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    /// Element the problem was found in.
    pub id: u32,
    /// Container body the element sat in.
    pub context: Context,
    /// Absolute offset of the element header.
    pub offset: u64,
    /// Human-readable detail.
    pub message: String,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} in element 0x{:X} ({}) at offset {}: {}",
            self.kind, self.id, self.context, self.offset, self.message
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_error_mapping() {
        use webmstream_ebml::Error as E;

        assert_eq!(
            DiagnosticKind::from_content_error(&E::InvalidFloatWidth { width: 3 }),
            Some(DiagnosticKind::InvalidFloatWidth)
        );
        assert_eq!(
            DiagnosticKind::from_content_error(&E::LacingOverrun {
                offset: 0,
                needed: 10,
                available: 2
            }),
            Some(DiagnosticKind::SizeMismatch)
        );
        assert_eq!(
            DiagnosticKind::from_content_error(&E::MalformedBlock { offset: 9 }),
            Some(DiagnosticKind::MalformedBlock)
        );
        assert_eq!(
            DiagnosticKind::from_content_error(&E::MalformedVarInt { offset: 0 }),
            None
        );
    }

    #[test]
    fn test_display() {
        let diag = Diagnostic {
            kind: DiagnosticKind::InvalidDateWidth,
            id: 0x4461,
            context: Context::Info,
            offset: 40,
            message: "Invalid date width: 4 bytes".into(),
        };
        assert_eq!(
            diag.to_string(),
            "invalid_date_width in element 0x4461 (Info) at offset 40: Invalid date width: 4 bytes"
        );
    }
}
