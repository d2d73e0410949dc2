//! Buffered assembly of the element tree.

use webmstream_schema::{ids, ElementKind, Registry};

use crate::decoder::EventSink;
use crate::{Diagnostic, Event, Value};

/// One decoded element.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub id: u32,
    /// Absolute offset of the element header.
    pub offset: u64,
    pub kind: ElementKind,
    pub content: NodeContent,
}

/// Either a decoded value or the children of a container.
#[derive(Debug, Clone, PartialEq)]
pub enum NodeContent {
    Value(Value),
    Children(Vec<Node>),
}

impl Node {
    /// Matroska name of the element.
    pub fn name(&self) -> &'static str {
        Registry::global().name(self.id).unwrap_or("Unknown")
    }

    pub fn is_container(&self) -> bool {
        matches!(self.content, NodeContent::Children(_))
    }

    pub fn value(&self) -> Option<&Value> {
        match &self.content {
            NodeContent::Value(value) => Some(value),
            NodeContent::Children(_) => None,
        }
    }

    /// Children of a container; empty for leaves.
    pub fn children(&self) -> &[Node] {
        match &self.content {
            NodeContent::Children(children) => children,
            NodeContent::Value(_) => &[],
        }
    }

    /// First child with `id`.
    pub fn child(&self, id: u32) -> Option<&Node> {
        self.children().iter().find(|node| node.id == id)
    }

    /// Every child with `id`, in stream order.
    pub fn children_with_id(&self, id: u32) -> impl Iterator<Item = &Node> {
        self.children().iter().filter(move |node| node.id == id)
    }

    /// Follow a path of child IDs.
    pub fn find(&self, path: &[u32]) -> Option<&Node> {
        path.iter().try_fold(self, |node, &id| node.child(id))
    }

    pub fn uint(&self, id: u32) -> Option<u64> {
        self.child(id).and_then(Node::value).and_then(Value::as_uint)
    }

    pub fn float(&self, id: u32) -> Option<f64> {
        self.child(id).and_then(Node::value).and_then(Value::as_float)
    }

    pub fn string(&self, id: u32) -> Option<&str> {
        self.child(id).and_then(Node::value).and_then(Value::as_str)
    }
}

/// An element skipped because the schema does not define it where it
/// appeared.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnknownElement {
    pub id: u32,
    pub offset: u64,
    pub size: u64,
}

/// A fully decoded input.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Document {
    /// Top-level elements, normally an EBML header followed by a Segment.
    pub roots: Vec<Node>,
    pub diagnostics: Vec<Diagnostic>,
    pub unknown: Vec<UnknownElement>,
}

impl Document {
    pub fn ebml_header(&self) -> Option<&Node> {
        self.roots.iter().find(|node| node.id == ids::EBML)
    }

    /// DocType announced by the EBML header.
    pub fn doc_type(&self) -> Option<&str> {
        self.ebml_header()?.string(ids::DOC_TYPE)
    }

    /// First Segment.
    pub fn segment(&self) -> Option<&Node> {
        self.segments().next()
    }

    /// All Segments, for chained streams.
    pub fn segments(&self) -> impl Iterator<Item = &Node> {
        self.roots.iter().filter(|node| node.id == ids::SEGMENT)
    }

    /// Follow a path of IDs from the top level.
    pub fn find(&self, path: &[u32]) -> Option<&Node> {
        let (first, rest) = path.split_first()?;
        self.roots
            .iter()
            .find(|node| node.id == *first)?
            .find(rest)
    }

    pub fn has_diagnostics(&self) -> bool {
        !self.diagnostics.is_empty()
    }
}

/// [`EventSink`] that assembles events into a [`Document`].
#[derive(Debug, Default)]
pub struct TreeBuilder {
    open: Vec<Node>,
    document: Document,
}

impl TreeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    fn attach(&mut self, node: Node) {
        match self.open.last_mut() {
            Some(Node {
                content: NodeContent::Children(children),
                ..
            }) => children.push(node),
            _ => self.document.roots.push(node),
        }
    }

    /// Close any containers still open and return the document.
    pub fn finish(mut self) -> Document {
        while let Some(node) = self.open.pop() {
            self.attach(node);
        }
        self.document
    }
}

impl EventSink for TreeBuilder {
    fn event(&mut self, event: Event) {
        match event {
            Event::ContainerEnter { id, offset, .. } => self.open.push(Node {
                id,
                offset,
                kind: ElementKind::Container,
                content: NodeContent::Children(Vec::new()),
            }),
            Event::Leaf { id, offset, value } => self.attach(Node {
                id,
                offset,
                kind: value.kind(),
                content: NodeContent::Value(value),
            }),
            Event::ContainerExit { .. } => {
                if let Some(node) = self.open.pop() {
                    self.attach(node);
                }
            }
            Event::UnknownElement { id, offset, size } => {
                self.document
                    .unknown
                    .push(UnknownElement { id, offset, size })
            }
            Event::Diagnostic(diag) => self.document.diagnostics.push(diag),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn leaf(id: u32, offset: u64, value: Value) -> Event {
        Event::Leaf { id, offset, value }
    }

    #[test]
    fn test_builds_nested_tree() {
        let mut builder = TreeBuilder::new();
        let events = vec![
            Event::ContainerEnter { id: ids::SEGMENT, offset: 0, size: Some(12), header_len: 5 },
            Event::ContainerEnter { id: ids::INFO, offset: 5, size: Some(7), header_len: 5 },
            leaf(ids::TIMESTAMP_SCALE, 10, Value::UInt(1_000_000)),
            Event::ContainerExit { id: ids::INFO, offset: 17 },
            Event::UnknownElement { id: 0x4FFF, offset: 17, size: 0 },
            Event::ContainerExit { id: ids::SEGMENT, offset: 19 },
        ];
        for event in events {
            builder.event(event);
        }
        let doc = builder.finish();

        assert_eq!(doc.roots.len(), 1);
        let segment = doc.segment().unwrap();
        assert_eq!(segment.name(), "Segment");
        assert_eq!(
            segment.find(&[ids::INFO]).unwrap().uint(ids::TIMESTAMP_SCALE),
            Some(1_000_000)
        );
        assert_eq!(
            doc.find(&[ids::SEGMENT, ids::INFO, ids::TIMESTAMP_SCALE])
                .unwrap()
                .kind,
            ElementKind::UInt
        );
        assert_eq!(doc.unknown.len(), 1);
        assert!(!doc.has_diagnostics());
    }

    #[test]
    fn test_finish_closes_open_containers() {
        let mut builder = TreeBuilder::new();
        builder.event(Event::ContainerEnter { id: ids::SEGMENT, offset: 0, size: None, header_len: 5 });
        builder.event(Event::ContainerEnter { id: ids::CLUSTER, offset: 5, size: None, header_len: 5 });
        builder.event(leaf(ids::TIMESTAMP, 10, Value::UInt(0)));

        let doc = builder.finish();
        let cluster = doc.segment().unwrap().child(ids::CLUSTER).unwrap();
        assert_eq!(cluster.uint(ids::TIMESTAMP), Some(0));
    }

    #[test]
    fn test_leaf_accessors_on_leaf() {
        let node = Node {
            id: ids::TITLE,
            offset: 0,
            kind: ElementKind::String,
            content: NodeContent::Value(Value::String("x".into())),
        };
        assert!(!node.is_container());
        assert!(node.children().is_empty());
        assert_eq!(node.find(&[]), Some(&node));
        assert_eq!(node.name(), "Title");
    }
}
