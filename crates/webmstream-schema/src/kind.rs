//! Element value kinds.

use std::fmt;

/// How an element's payload is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementKind {
    /// Holds child elements.
    Container,
    /// Big-endian unsigned integer, 0 to 8 bytes.
    UInt,
    /// Big-endian signed integer, 0 to 8 bytes.
    Int,
    /// IEEE-754 float, 4 or 8 bytes.
    Float,
    /// ASCII or UTF-8 text, NUL padded.
    String,
    /// Opaque bytes.
    Binary,
    /// Nanoseconds since 2001-01-01T00:00:00 UTC, 8 bytes.
    Date,
}

impl ElementKind {
    /// Check if this kind holds child elements.
    pub fn is_container(&self) -> bool {
        matches!(self, Self::Container)
    }

    /// Short lowercase name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Container => "container",
            Self::UInt => "uint",
            Self::Int => "int",
            Self::Float => "float",
            Self::String => "string",
            Self::Binary => "binary",
            Self::Date => "date",
        }
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
