//! Resumable element tree walker.
//!
//! The walker never blocks and never owns input. Each call to
//! [`Walker::step`] inspects what the [`ByteSource`] has buffered and either
//! produces the next [`Event`], asks for more data, or reports the end of the
//! tree. All traversal state lives in an explicit stack of open containers,
//! so suspending on a partial header and resuming after the next chunk costs
//! nothing: bytes are only consumed once a whole header or payload is
//! available.
//!
//! Every container tracks the absolute offset of its end. The remaining
//! budget of a container is that end minus the current position, and a
//! child whose `header + size` exceeds it aborts decoding with
//! [`Error::ElementOverrun`].

use std::collections::VecDeque;

use bytes::Bytes;
use webmstream_ebml::{scalar, vint, Block, ByteSource, Cursor};
use webmstream_schema::{ids, Context, ElementKind, Registry, SchemaEntry};

use crate::config::{DecoderConfig, UnknownSizePolicy};
use crate::diagnostic::{Diagnostic, DiagnosticKind};
use crate::error::{Error, Result};
use crate::{Event, Value};

/// A decoded element header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ElementHeader {
    pub id: u32,
    /// Absolute offset of the first ID byte.
    pub offset: u64,
    /// ID length plus size length.
    pub header_len: usize,
    /// Payload size, `None` for unknown size.
    pub size: Option<u64>,
}

impl ElementHeader {
    /// Absolute offset of the payload.
    pub fn body_offset(&self) -> u64 {
        self.offset + self.header_len as u64
    }

    /// Total bytes the element takes in its parent, when known.
    pub fn total_len(&self) -> Option<u64> {
        self.size
            .map(|size| size.saturating_add(self.header_len as u64))
    }
}

/// Outcome of one [`Walker::step`].
#[derive(Debug, Clone, PartialEq)]
pub enum Step {
    Event(Event),
    /// Nothing more can be decoded until the source receives more bytes.
    NeedMoreData,
    /// The tree is complete.
    Finished,
}

#[derive(Debug, Clone, Copy)]
struct Frame {
    id: u32,
    context: Context,
    /// Absolute end offset, `None` while the size is unknown.
    end: Option<u64>,
}

#[derive(Debug, Clone, Copy)]
enum State {
    Header,
    Payload {
        header: ElementHeader,
        kind: ElementKind,
        context: Context,
    },
    Skip {
        remaining: u64,
    },
    Finished,
}

/// Schema-driven recursive descent over an EBML stream.
#[derive(Debug)]
pub struct Walker {
    config: DecoderConfig,
    registry: &'static Registry,
    stack: Vec<Frame>,
    root_budget: Option<u64>,
    root_end: Option<u64>,
    state: State,
    queue: VecDeque<Event>,
}

impl Walker {
    /// Walker for an open-ended stream.
    pub fn new(config: DecoderConfig) -> Self {
        Self {
            config,
            registry: Registry::global(),
            stack: Vec::new(),
            root_budget: None,
            root_end: None,
            state: State::Header,
            queue: VecDeque::new(),
        }
    }

    /// Walker whose top level holds exactly `budget` bytes, counted from the
    /// source position at the first step.
    pub fn with_budget(config: DecoderConfig, budget: u64) -> Self {
        Self {
            root_budget: Some(budget),
            ..Self::new(config)
        }
    }

    pub fn config(&self) -> &DecoderConfig {
        &self.config
    }

    /// Number of open containers.
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// Context of the innermost open container.
    pub fn context(&self) -> Context {
        self.stack
            .last()
            .map(|frame| frame.context)
            .unwrap_or(Context::TopLevel)
    }

    pub fn is_finished(&self) -> bool {
        matches!(self.state, State::Finished) && self.queue.is_empty()
    }

    /// Advance until an event is ready, more data is needed, or the tree ends.
    ///
    /// After an error the walker is finished.
    pub fn step<S: ByteSource + ?Sized>(&mut self, source: &mut S) -> Result<Step> {
        if let Some(budget) = self.root_budget.take() {
            self.root_end = Some(source.position().saturating_add(budget));
        }

        loop {
            if let Some(event) = self.queue.pop_front() {
                return Ok(Step::Event(event));
            }

            let outcome = match self.state {
                State::Finished => return Ok(Step::Finished),
                State::Header => self.read_header(source),
                State::Payload {
                    header,
                    kind,
                    context,
                } => self.read_payload(source, header, kind, context),
                State::Skip { remaining } => self.skip(source, remaining),
            };

            match outcome {
                Ok(Some(step)) => return Ok(step),
                Ok(None) => continue,
                Err(e) => {
                    tracing::debug!("Decoding stopped: {e}");
                    self.state = State::Finished;
                    self.stack.clear();
                    self.queue.clear();
                    return Err(e);
                }
            }
        }
    }

    fn read_header<S: ByteSource + ?Sized>(&mut self, source: &mut S) -> Result<Option<Step>> {
        let pos = source.position();

        // Close the innermost container once the nearest known budget is spent.
        if let Some(end) = self.effective_end() {
            if pos >= end {
                match self.stack.pop() {
                    Some(frame) => self.exit(frame, pos),
                    None => self.state = State::Finished,
                }
                return Ok(None);
            }
        }

        if source.is_exhausted() {
            return self.end_of_stream(pos).map(|()| None);
        }

        let mut cur = Cursor::new(source.chunk(), pos);

        let id = match vint::read_id(&mut cur) {
            Ok(id) => id,
            Err(e) if e.is_insufficient() => return self.suspend_header(source, pos),
            Err(e) => return Err(e.into()),
        };
        if id.length > self.config.id_length_limit() {
            return Err(Error::OversizedId {
                offset: pos,
                length: id.length,
            });
        }
        let id = id.value as u32;

        let context = self.context();
        let entry = self.registry.lookup(context, id);

        if entry.is_none() && self.closes_unknown_sized(id) {
            if let Some(frame) = self.stack.pop() {
                tracing::warn!(
                    "Closing unknown-size {} at offset {}: 0x{:X} belongs to an ancestor",
                    self.element_name(frame.id),
                    pos,
                    id
                );
                self.exit(frame, pos);
            }
            return Ok(None);
        }

        let size = match vint::read_size_limited(&mut cur, self.config.size_length_limit()) {
            Ok(size) => size,
            Err(e) if e.is_insufficient() => return self.suspend_header(source, pos),
            Err(e) => return Err(e.into()),
        };

        let header = ElementHeader {
            id,
            offset: pos,
            header_len: cur.consumed(),
            size: (!size.is_unknown_size()).then_some(size.value),
        };

        self.check_budget(&header)?;

        let Some(entry) = entry else {
            return self.unknown_element(source, header);
        };

        match entry.children {
            Some(children) => {
                if self.config.unknown_size == UnknownSizePolicy::Reject && header.size.is_none() {
                    return Err(Error::UnknownSizeRejected { offset: pos, id });
                }
                if self.stack.len() >= self.config.max_depth {
                    return Err(Error::MaxDepthExceeded {
                        offset: pos,
                        depth: self.stack.len() + 1,
                    });
                }
                source.advance(header.header_len);
                self.enter(header, entry, children);
            }
            None => {
                // Leaves cannot be skipped without a size.
                let Some(size) = header.size else {
                    return Err(Error::UnknownSizeRejected { offset: pos, id });
                };
                source.advance(header.header_len);

                if size > self.config.max_element_size {
                    self.diagnose(
                        DiagnosticKind::ElementTooLarge,
                        &header,
                        context,
                        format!(
                            "{size} byte payload exceeds the {} byte limit",
                            self.config.max_element_size
                        ),
                    );
                    self.state = State::Skip { remaining: size };
                } else {
                    self.state = State::Payload {
                        header,
                        kind: entry.kind,
                        context,
                    };
                }
            }
        }

        Ok(None)
    }

    fn unknown_element<S: ByteSource + ?Sized>(
        &mut self,
        source: &mut S,
        header: ElementHeader,
    ) -> Result<Option<Step>> {
        let Some(size) = header.size else {
            return Err(Error::UnknownSizeRejected {
                offset: header.offset,
                id: header.id,
            });
        };

        tracing::debug!(
            "Skipping unknown element 0x{:X} ({} bytes) at offset {} in {}",
            header.id,
            size,
            header.offset,
            self.context()
        );

        source.advance(header.header_len);
        self.queue.push_back(Event::UnknownElement {
            id: header.id,
            offset: header.offset,
            size,
        });
        self.state = State::Skip { remaining: size };
        Ok(None)
    }

    fn read_payload<S: ByteSource + ?Sized>(
        &mut self,
        source: &mut S,
        header: ElementHeader,
        kind: ElementKind,
        context: Context,
    ) -> Result<Option<Step>> {
        let size = header.size.unwrap_or(0) as usize;

        let payload = match source.read(size) {
            Ok(payload) => payload,
            Err(e) if e.is_insufficient() => {
                tracing::debug!(
                    "Waiting for {} byte payload of {} at offset {}",
                    size,
                    self.element_name(header.id),
                    header.offset
                );
                return Ok(Some(Step::NeedMoreData));
            }
            Err(_) => return Err(self.truncated(source.position() + source.available() as u64)),
        };

        self.state = State::Header;

        match self.decode(&header, kind, payload) {
            Ok(value) => {
                tracing::trace!(
                    "{} at offset {}: {:?}",
                    self.element_name(header.id),
                    header.offset,
                    value
                );
                let doc_type = (header.id == ids::DOC_TYPE && context == Context::EbmlHeader)
                    .then(|| value.as_str().map(str::to_owned))
                    .flatten();

                self.queue.push_back(Event::Leaf {
                    id: header.id,
                    offset: header.offset,
                    value,
                });

                if let Some(doc_type) = doc_type {
                    if !self.config.accepts_doc_type(&doc_type) {
                        self.diagnose(
                            DiagnosticKind::DocTypeMismatch,
                            &header,
                            context,
                            format!("unexpected DocType '{doc_type}'"),
                        );
                    }
                }
            }
            Err(e) => match DiagnosticKind::from_content_error(&e) {
                Some(kind) => self.diagnose(kind, &header, context, e.to_string()),
                None => return Err(e.into()),
            },
        }

        Ok(None)
    }

    fn decode(
        &self,
        header: &ElementHeader,
        kind: ElementKind,
        payload: Bytes,
    ) -> webmstream_ebml::Result<Value> {
        let value = match kind {
            ElementKind::UInt => Value::UInt(scalar::uint(&payload)?),
            ElementKind::Int => Value::Int(scalar::int(&payload)?),
            ElementKind::Float => Value::Float(scalar::float(&payload)?),
            ElementKind::String => Value::String(scalar::string(&payload)),
            ElementKind::Date => Value::Date(scalar::date(&payload)?),
            ElementKind::Binary if self.config.parse_blocks && ids::is_block(header.id) => {
                Value::Block(Block::parse(payload, header.body_offset())?)
            }
            ElementKind::Binary | ElementKind::Container => {
                Value::Binary(scalar::binary(payload))
            }
        };
        Ok(value)
    }

    fn skip<S: ByteSource + ?Sized>(&mut self, source: &mut S, remaining: u64) -> Result<Option<Step>> {
        let remaining = remaining - source.skip(remaining);
        if remaining == 0 {
            self.state = State::Header;
            return Ok(None);
        }

        self.state = State::Skip { remaining };
        if source.is_finished() {
            return Err(self.truncated(source.position()));
        }
        Ok(Some(Step::NeedMoreData))
    }

    fn suspend_header<S: ByteSource + ?Sized>(
        &self,
        source: &S,
        pos: u64,
    ) -> Result<Option<Step>> {
        if source.is_finished() {
            return Err(self.truncated(pos));
        }
        tracing::debug!(
            "Suspending at offset {} with {} byte(s) of a header buffered",
            pos,
            source.available()
        );
        Ok(Some(Step::NeedMoreData))
    }

    /// The source is exhausted at an element boundary.
    fn end_of_stream(&mut self, pos: u64) -> Result<()> {
        let sized_open = self.stack.iter().any(|frame| frame.end.is_some())
            || self.root_end.is_some_and(|end| end > pos);
        if sized_open {
            return Err(self.truncated(pos));
        }

        while let Some(frame) = self.stack.pop() {
            tracing::debug!(
                "Closing unknown-size {} at end of stream",
                self.element_name(frame.id)
            );
            self.exit(frame, pos);
        }
        self.state = State::Finished;
        Ok(())
    }

    fn check_budget(&self, header: &ElementHeader) -> Result<()> {
        let Some(end) = self.effective_end() else {
            return Ok(());
        };
        let remaining = end - header.offset;
        let needed = header
            .total_len()
            .unwrap_or(header.header_len as u64);
        if needed > remaining {
            return Err(Error::ElementOverrun {
                offset: header.offset,
                id: header.id,
                needed,
                remaining,
            });
        }
        Ok(())
    }

    /// End of the innermost container with a known size, or of the top level.
    fn effective_end(&self) -> Option<u64> {
        self.stack
            .iter()
            .rev()
            .find_map(|frame| frame.end)
            .or(self.root_end)
    }

    /// Whether `id`, invalid in the innermost container, ends it because that
    /// container has unknown size and an ancestor accepts `id`.
    fn closes_unknown_sized(&self, id: u32) -> bool {
        let Some((innermost, ancestors)) = self.stack.split_last() else {
            return false;
        };
        if innermost.end.is_some() {
            return false;
        }
        self.registry.allows(Context::TopLevel, id)
            || ancestors
                .iter()
                .any(|frame| self.registry.allows(frame.context, id))
    }

    fn enter(&mut self, header: ElementHeader, entry: &SchemaEntry, children: Context) {
        let end = header
            .size
            .map(|size| header.body_offset().saturating_add(size));

        match header.size {
            Some(size) => tracing::debug!(
                "Entering {} at offset {} ({} bytes)",
                entry.name,
                header.offset,
                size
            ),
            None => tracing::debug!(
                "Entering {} at offset {} (unknown size)",
                entry.name,
                header.offset
            ),
        }

        self.stack.push(Frame {
            id: header.id,
            context: children,
            end,
        });
        self.queue.push_back(Event::ContainerEnter {
            id: header.id,
            offset: header.offset,
            size: header.size,
            header_len: header.header_len,
        });
    }

    fn exit(&mut self, frame: Frame, pos: u64) {
        tracing::debug!("Leaving {} at offset {}", self.element_name(frame.id), pos);
        self.queue.push_back(Event::ContainerExit {
            id: frame.id,
            offset: pos,
        });
    }

    fn diagnose(
        &mut self,
        kind: DiagnosticKind,
        header: &ElementHeader,
        context: Context,
        message: String,
    ) {
        tracing::warn!(
            "Skipping {} at offset {}: {}",
            self.element_name(header.id),
            header.offset,
            message
        );
        self.queue.push_back(Event::Diagnostic(Diagnostic {
            kind,
            id: header.id,
            context,
            offset: header.offset,
            message,
        }));
    }

    fn truncated(&self, offset: u64) -> Error {
        Error::Truncated {
            offset,
            open: self.stack.len(),
        }
    }

    fn element_name(&self, id: u32) -> &'static str {
        self.registry.name(id).unwrap_or("unknown element")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use webmstream_ebml::ChunkedSource;

    fn element(id: u32, payload: &[u8]) -> Vec<u8> {
        let mut out = vint::encode_id(id);
        out.extend(vint::encode_size(payload.len() as u64, 1).unwrap());
        out.extend_from_slice(payload);
        out
    }

    fn unknown_sized(id: u32, payload: &[u8]) -> Vec<u8> {
        let mut out = vint::encode_id(id);
        out.push(0xFF);
        out.extend_from_slice(payload);
        out
    }

    fn drain(walker: &mut Walker, source: &mut ChunkedSource) -> Result<Vec<Event>> {
        let mut events = Vec::new();
        loop {
            match walker.step(source)? {
                Step::Event(event) => events.push(event),
                Step::NeedMoreData | Step::Finished => return Ok(events),
            }
        }
    }

    #[test]
    fn test_sized_container_closes_on_budget() {
        let info = element(ids::INFO, &element(ids::TIMESTAMP_SCALE, &[0x0F, 0x42, 0x40]));
        let data = element(ids::SEGMENT, &info);
        let mut source = ChunkedSource::from_complete(&data);
        let mut walker = Walker::new(DecoderConfig::default());

        let events = drain(&mut walker, &mut source).unwrap();
        assert_eq!(events.len(), 5);
        assert_matches!(events[0], Event::ContainerEnter { id: ids::SEGMENT, offset: 0, size: Some(_), header_len: 5 });
        assert_matches!(events[1], Event::ContainerEnter { id: ids::INFO, .. });
        assert_matches!(
            &events[2],
            Event::Leaf { id: ids::TIMESTAMP_SCALE, value: Value::UInt(1_000_000), .. }
        );
        assert_matches!(events[3], Event::ContainerExit { id: ids::INFO, .. });
        assert_matches!(events[4], Event::ContainerExit { id: ids::SEGMENT, offset } if offset == data.len() as u64);
        assert!(walker.is_finished());
    }

    #[test]
    fn test_resumes_across_every_split() {
        let info = element(ids::INFO, &element(ids::TITLE, b"live\0\0"));
        let data = element(ids::SEGMENT, &info);

        let mut whole = ChunkedSource::from_complete(&data);
        let expected = drain(&mut Walker::new(DecoderConfig::default()), &mut whole).unwrap();

        for split in 1..data.len() {
            let mut source = ChunkedSource::new();
            let mut walker = Walker::new(DecoderConfig::default());
            source.push(&data[..split]);
            let mut events = drain(&mut walker, &mut source).unwrap();
            source.push(&data[split..]);
            source.finish();
            events.extend(drain(&mut walker, &mut source).unwrap());
            assert_eq!(events, expected, "split at {split}");
        }
    }

    #[test]
    fn test_child_overrun() {
        // Info declares 3 bytes but its child needs 7.
        let mut info = vint::encode_id(ids::INFO);
        info.push(0x83);
        info.extend(element(ids::TIMESTAMP_SCALE, &[1, 2, 3]));
        let data = element(ids::SEGMENT, &info);

        let mut source = ChunkedSource::from_complete(&data);
        let err = drain(&mut Walker::new(DecoderConfig::default()), &mut source).unwrap_err();
        assert_matches!(
            err,
            Error::ElementOverrun { id: ids::TIMESTAMP_SCALE, needed: 7, remaining: 3, offset: 10 }
        );
    }

    #[test]
    fn test_unknown_element_skipped() {
        let mut body = element(0x4FFF, &[0xAA; 3]);
        body.extend(element(ids::TIMESTAMP_SCALE, &[0x01]));
        let data = element(ids::INFO, &body);

        let mut walker = Walker::new(DecoderConfig::default());
        walker.stack.push(Frame {
            id: ids::SEGMENT,
            context: Context::Segment,
            end: None,
        });
        let mut source = ChunkedSource::from_complete(&data);
        let events = drain(&mut walker, &mut source).unwrap();

        assert_matches!(events[1], Event::UnknownElement { id: 0x4FFF, size: 3, offset: 5 });
        assert_matches!(&events[2], Event::Leaf { id: ids::TIMESTAMP_SCALE, .. });
    }

    #[test]
    fn test_content_error_becomes_diagnostic() {
        let mut body = element(ids::DURATION, &[0, 0, 0]);
        body.extend(element(ids::TIMESTAMP_SCALE, &[0x01]));
        let data = element(ids::SEGMENT, &element(ids::INFO, &body));

        let mut source = ChunkedSource::from_complete(&data);
        let events = drain(&mut Walker::new(DecoderConfig::default()), &mut source).unwrap();

        assert_matches!(
            &events[2],
            Event::Diagnostic(Diagnostic { kind: DiagnosticKind::InvalidFloatWidth, context: Context::Info, .. })
        );
        assert_matches!(&events[3], Event::Leaf { value: Value::UInt(1), .. });
    }

    #[test]
    fn test_unknown_size_cluster_closed_by_sibling() {
        let mut clusters = unknown_sized(ids::CLUSTER, &element(ids::TIMESTAMP, &[0]));
        clusters.extend(unknown_sized(ids::CLUSTER, &element(ids::TIMESTAMP, &[1])));
        let data = unknown_sized(ids::SEGMENT, &clusters);

        let mut source = ChunkedSource::from_complete(&data);
        let events = drain(&mut Walker::new(DecoderConfig::default()), &mut source).unwrap();

        let kinds: Vec<_> = events
            .iter()
            .map(|e| match e {
                Event::ContainerEnter { id, .. } => format!("+{id:X}"),
                Event::ContainerExit { id, .. } => format!("-{id:X}"),
                Event::Leaf { id, .. } => format!("{id:X}"),
                other => format!("{other:?}"),
            })
            .collect();
        assert_eq!(
            kinds,
            vec!["+18538067", "+1F43B675", "E7", "-1F43B675", "+1F43B675", "E7", "-1F43B675", "-18538067"]
        );
    }

    #[test]
    fn test_unknown_size_rejected_by_policy() {
        let data = unknown_sized(ids::SEGMENT, &[]);
        let config = DecoderConfig {
            unknown_size: UnknownSizePolicy::Reject,
            ..Default::default()
        };
        let mut source = ChunkedSource::from_complete(&data);
        let err = drain(&mut Walker::new(config), &mut source).unwrap_err();
        assert_matches!(err, Error::UnknownSizeRejected { offset: 0, id: ids::SEGMENT });
    }

    #[test]
    fn test_unknown_size_leaf_is_structural() {
        let data = element(ids::SEGMENT, &element(ids::INFO, &unknown_sized(ids::TITLE, b"x")));
        let mut source = ChunkedSource::from_complete(&data);
        let err = drain(&mut Walker::new(DecoderConfig::default()), &mut source).unwrap_err();
        assert_matches!(err, Error::UnknownSizeRejected { id: ids::TITLE, .. });
    }

    #[test]
    fn test_truncated_inside_sized_container() {
        let data = element(ids::SEGMENT, &element(ids::INFO, &element(ids::TITLE, b"abc")));
        let mut source = ChunkedSource::from_complete(&data[..data.len() - 5]);
        let err = drain(&mut Walker::new(DecoderConfig::default()), &mut source).unwrap_err();
        assert_matches!(err, Error::Truncated { open: 2, .. });
    }

    #[test]
    fn test_oversized_id() {
        let data = [0x08, 0x01, 0x02, 0x03, 0x04, 0x80];
        let mut source = ChunkedSource::from_complete(data);
        let err = drain(&mut Walker::new(DecoderConfig::default()), &mut source).unwrap_err();
        assert_matches!(err, Error::OversizedId { offset: 0, length: 5 });
    }

    #[test]
    fn test_malformed_header() {
        let mut source = ChunkedSource::from_complete([0x00, 0x80]);
        let err = drain(&mut Walker::new(DecoderConfig::default()), &mut source).unwrap_err();
        assert_matches!(err, Error::Ebml(webmstream_ebml::Error::MalformedVarInt { offset: 0 }));
        assert_eq!(err.offset(), Some(0));
    }

    #[test]
    fn test_max_depth() {
        let data = element(ids::SEGMENT, &element(ids::INFO, &[]));
        let config = DecoderConfig {
            max_depth: 1,
            ..Default::default()
        };
        let mut source = ChunkedSource::from_complete(&data);
        let err = drain(&mut Walker::new(config), &mut source).unwrap_err();
        assert_matches!(err, Error::MaxDepthExceeded { depth: 2, .. });
    }

    #[test]
    fn test_element_too_large_is_skipped_incrementally() {
        let payload = vec![0u8; 40];
        let mut body = element(ids::CODEC_PRIVATE, &payload);
        body.extend(element(ids::TRACK_NUMBER, &[1]));
        let data = element(ids::TRACK_ENTRY, &body);

        let config = DecoderConfig {
            max_element_size: 16,
            ..Default::default()
        };
        let mut walker = Walker::new(config);
        walker.stack.push(Frame {
            id: ids::TRACKS,
            context: Context::Tracks,
            end: None,
        });

        let mut source = ChunkedSource::new();
        source.push(&data[..10]);
        let mut events = drain(&mut walker, &mut source).unwrap();
        source.push(&data[10..]);
        source.finish();
        events.extend(drain(&mut walker, &mut source).unwrap());

        assert_matches!(
            &events[1],
            Event::Diagnostic(Diagnostic { kind: DiagnosticKind::ElementTooLarge, id: ids::CODEC_PRIVATE, .. })
        );
        assert_matches!(&events[2], Event::Leaf { id: ids::TRACK_NUMBER, value: Value::UInt(1), .. });
    }

    #[test]
    fn test_root_budget_overrun() {
        let mut data = vint::encode_id(0x4FFF);
        data.push(0x90);
        data.extend_from_slice(&[0; 4]);

        let mut source = ChunkedSource::from_complete(&data);
        let mut walker = Walker::with_budget(DecoderConfig::default(), data.len() as u64);
        let err = drain(&mut walker, &mut source).unwrap_err();
        assert_matches!(err, Error::ElementOverrun { id: 0x4FFF, needed: 19, remaining: 7, .. });
    }
}
