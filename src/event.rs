//! Streaming decoder output.

use crate::{Diagnostic, Value};

/// One step of the element tree, in stream order.
///
/// Offsets are absolute byte positions in the input.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// A container header was read; its children follow.
    ContainerEnter {
        id: u32,
        /// Offset of the element header.
        offset: u64,
        /// Body size, `None` for unknown-size containers.
        size: Option<u64>,
        header_len: usize,
    },
    /// A leaf element and its decoded value.
    Leaf { id: u32, offset: u64, value: Value },
    /// The container opened by the matching `ContainerEnter` is complete.
    ContainerExit {
        id: u32,
        /// Offset just past the container's last byte.
        offset: u64,
    },
    /// An element not defined for the enclosing container. Its payload was
    /// skipped.
    UnknownElement { id: u32, offset: u64, size: u64 },
    /// An element whose payload could not be decoded and was skipped.
    Diagnostic(Diagnostic),
}

impl Event {
    /// Element ID the event refers to.
    pub fn id(&self) -> u32 {
        match self {
            Event::ContainerEnter { id, .. }
            | Event::Leaf { id, .. }
            | Event::ContainerExit { id, .. }
            | Event::UnknownElement { id, .. } => *id,
            Event::Diagnostic(diag) => diag.id,
        }
    }

    /// Absolute offset the event refers to.
    pub fn offset(&self) -> u64 {
        match self {
            Event::ContainerEnter { offset, .. }
            | Event::Leaf { offset, .. }
            | Event::ContainerExit { offset, .. }
            | Event::UnknownElement { offset, .. } => *offset,
            Event::Diagnostic(diag) => diag.offset,
        }
    }

    pub fn is_diagnostic(&self) -> bool {
        matches!(self, Event::Diagnostic(_))
    }
}
