//! Decoder entry points.
//!
//! [`StreamDecoder`] is the push-style interface for chunked input: feed it
//! bytes as they arrive and it hands events to an [`EventSink`] as soon as
//! they are complete. [`decode_all`] runs the same walker over a complete
//! buffer and assembles a [`Document`].

use std::io::Read;

use webmstream_ebml::{ByteSource, ChunkedSource};

use crate::config::DecoderConfig;
use crate::document::{Document, TreeBuilder};
use crate::error::Result;
use crate::walker::{Step, Walker};
use crate::Event;

/// Read size used by [`decode_reader`].
const READ_CHUNK_SIZE: usize = 64 * 1024;

/// Receiver of decoded events.
pub trait EventSink {
    fn event(&mut self, event: Event);
}

impl<F: FnMut(Event)> EventSink for F {
    fn event(&mut self, event: Event) {
        self(event)
    }
}

impl EventSink for Vec<Event> {
    fn event(&mut self, event: Event) {
        self.push(event);
    }
}

/// Incremental decoder over chunked input.
#[derive(Debug)]
pub struct StreamDecoder {
    walker: Walker,
    source: ChunkedSource,
}

impl StreamDecoder {
    pub fn new(config: DecoderConfig) -> Self {
        for warning in config.validate() {
            tracing::warn!("Decoder config: {warning}");
        }
        Self {
            walker: Walker::new(config),
            source: ChunkedSource::new(),
        }
    }

    /// Buffer another chunk of input.
    pub fn push(&mut self, chunk: &[u8]) {
        self.source.push(chunk);
    }

    /// Signal that no more input will arrive.
    pub fn finish(&mut self) {
        self.source.finish();
    }

    /// Decode the next event from buffered input.
    pub fn poll(&mut self) -> Result<Step> {
        self.walker.step(&mut self.source)
    }

    /// Hand every event decodable from buffered input to `sink`.
    ///
    /// Returns `true` once the element tree is complete.
    pub fn drain<S: EventSink + ?Sized>(&mut self, sink: &mut S) -> Result<bool> {
        loop {
            match self.poll()? {
                Step::Event(event) => sink.event(event),
                Step::NeedMoreData => return Ok(false),
                Step::Finished => return Ok(true),
            }
        }
    }

    /// Push `chunk` and drain.
    pub fn feed<S: EventSink + ?Sized>(&mut self, chunk: &[u8], sink: &mut S) -> Result<bool> {
        self.push(chunk);
        self.drain(sink)
    }

    /// Finish the input and drain the remaining events.
    pub fn end<S: EventSink + ?Sized>(&mut self, sink: &mut S) -> Result<()> {
        self.finish();
        self.drain(sink)?;
        if self.source.available() > 0 {
            tracing::debug!(
                "Ignoring {} trailing byte(s) after the element tree",
                self.source.available()
            );
        }
        Ok(())
    }

    /// Absolute offset of the next undecoded byte.
    pub fn position(&self) -> u64 {
        self.source.position()
    }

    /// Bytes buffered but not yet decoded.
    pub fn buffered(&self) -> usize {
        self.source.available()
    }

    /// Number of open containers.
    pub fn depth(&self) -> usize {
        self.walker.depth()
    }

    pub fn is_finished(&self) -> bool {
        self.walker.is_finished()
    }
}

impl Default for StreamDecoder {
    fn default() -> Self {
        Self::new(DecoderConfig::default())
    }
}

/// Decode a complete buffer into events. The top level holds exactly
/// `data.len()` bytes.
pub fn decode_events<S: EventSink + ?Sized>(
    data: &[u8],
    config: DecoderConfig,
    sink: &mut S,
) -> Result<()> {
    let mut source = ChunkedSource::from_complete(data);
    let mut walker = Walker::with_budget(config, data.len() as u64);
    loop {
        match walker.step(&mut source)? {
            Step::Event(event) => sink.event(event),
            Step::NeedMoreData | Step::Finished => return Ok(()),
        }
    }
}

/// Decode a complete buffer into a [`Document`].
pub fn decode_all(data: &[u8], config: DecoderConfig) -> Result<Document> {
    let mut builder = TreeBuilder::new();
    decode_events(data, config, &mut builder)?;
    Ok(builder.finish())
}

/// Decode everything `reader` yields, streaming events to `sink`.
pub fn decode_reader<R: Read, S: EventSink + ?Sized>(
    mut reader: R,
    config: DecoderConfig,
    sink: &mut S,
) -> Result<()> {
    let mut decoder = StreamDecoder::new(config);
    let mut buf = vec![0u8; READ_CHUNK_SIZE];
    loop {
        let n = reader.read(&mut buf)?;
        if n == 0 {
            return decoder.end(sink);
        }
        if decoder.feed(&buf[..n], sink)? {
            return Ok(());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use assert_matches::assert_matches;
    use webmstream_ebml::vint;
    use webmstream_schema::ids;

    fn element(id: u32, payload: &[u8]) -> Vec<u8> {
        let mut out = vint::encode_id(id);
        out.extend(vint::encode_size(payload.len() as u64, 1).unwrap());
        out.extend_from_slice(payload);
        out
    }

    fn sample() -> Vec<u8> {
        let mut data = element(ids::EBML, &element(ids::DOC_TYPE, b"webm"));
        data.extend(element(
            ids::SEGMENT,
            &element(ids::INFO, &element(ids::TIMESTAMP_SCALE, &[0x0F, 0x42, 0x40])),
        ));
        data
    }

    #[test]
    fn test_closure_sink() {
        let mut count = 0;
        let mut sink = |_event: Event| count += 1;
        decode_events(&sample(), DecoderConfig::default(), &mut sink).unwrap();
        assert_eq!(count, 8);
    }

    #[test]
    fn test_byte_at_a_time() {
        let data = sample();
        let mut expected = Vec::new();
        decode_events(&data, DecoderConfig::default(), &mut expected).unwrap();

        let mut decoder = StreamDecoder::default();
        let mut events = Vec::new();
        for byte in &data {
            assert!(!decoder.feed(std::slice::from_ref(byte), &mut events).unwrap());
        }
        decoder.end(&mut events).unwrap();

        assert_eq!(events, expected);
        assert!(decoder.is_finished());
        assert_eq!(decoder.position(), data.len() as u64);
    }

    #[test]
    fn test_reader_input() {
        let data = sample();
        let mut events = Vec::new();
        decode_reader(data.as_slice(), DecoderConfig::default(), &mut events).unwrap();
        assert_eq!(events.len(), 8);
    }

    #[test]
    fn test_truncated_buffer_overruns_top_level() {
        let data = sample();
        let err = decode_all(&data[..data.len() - 1], DecoderConfig::default()).unwrap_err();
        assert_matches!(err, Error::ElementOverrun { id: ids::SEGMENT, .. });
    }

    #[test]
    fn test_truncated_stream() {
        let data = sample();
        let mut decoder = StreamDecoder::default();
        let mut events = Vec::new();
        decoder.feed(&data[..data.len() - 1], &mut events).unwrap();
        let err = decoder.end(&mut events).unwrap_err();
        assert_matches!(err, Error::Truncated { open: 2, .. });
    }
}
