//! Pull-style byte sources.
//!
//! A source hands out a contiguous view of the bytes buffered so far and lets
//! the decoder commit consumption separately, so a header or lace table that
//! straddles a chunk boundary is simply re-read once more bytes arrive.

use bytes::{Buf, Bytes, BytesMut};

use crate::{Error, Result};

/// Byte-oriented input for the decoder.
pub trait ByteSource {
    /// Bytes buffered and not yet consumed.
    fn available(&self) -> usize;

    /// Contiguous view of the buffered bytes.
    fn chunk(&self) -> &[u8];

    /// Absolute stream offset of `chunk()[0]`.
    fn position(&self) -> u64;

    /// Whether the producer has signalled that no more bytes will arrive.
    fn is_finished(&self) -> bool;

    /// Commit `n` buffered bytes as consumed.
    fn advance(&mut self, n: usize);

    /// Take exactly `n` bytes.
    ///
    /// Fails with [`Error::InsufficientData`] while more input may still
    /// arrive and with [`Error::EndOfStream`] once the source is finished.
    /// Nothing is consumed on failure.
    fn read(&mut self, n: usize) -> Result<Bytes> {
        self.ensure(n)?;
        let bytes = Bytes::copy_from_slice(&self.chunk()[..n]);
        self.advance(n);
        Ok(bytes)
    }

    /// Drop up to `n` bytes, returning how many were dropped.
    fn skip(&mut self, n: u64) -> u64 {
        let step = n.min(self.available() as u64);
        self.advance(step as usize);
        step
    }

    /// Check that `n` bytes are buffered.
    fn ensure(&self, n: usize) -> Result<()> {
        let available = self.available();
        if available >= n {
            Ok(())
        } else if self.is_finished() {
            Err(Error::EndOfStream {
                offset: self.position() + available as u64,
            })
        } else {
            Err(Error::InsufficientData {
                offset: self.position(),
                needed: n,
                available,
            })
        }
    }

    /// Whether every byte has been consumed and none will follow.
    fn is_exhausted(&self) -> bool {
        self.is_finished() && self.available() == 0
    }
}

/// Growable source fed by discrete chunks, such as inbound network messages.
#[derive(Debug, Default)]
pub struct ChunkedSource {
    buf: BytesMut,
    offset: u64,
    finished: bool,
}

impl ChunkedSource {
    /// Create an empty, open source.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a finished source holding all of `data`.
    pub fn from_complete(data: impl AsRef<[u8]>) -> Self {
        let mut source = Self::new();
        source.push(data.as_ref());
        source.finish();
        source
    }

    /// Append a chunk.
    pub fn push(&mut self, chunk: &[u8]) {
        if self.finished {
            tracing::warn!(
                "Dropping {} bytes pushed after end of stream at offset {}",
                chunk.len(),
                self.offset
            );
            return;
        }
        self.buf.extend_from_slice(chunk);
    }

    /// Mark the end of the stream.
    pub fn finish(&mut self) {
        self.finished = true;
    }

    /// Total bytes consumed so far.
    pub fn consumed(&self) -> u64 {
        self.offset
    }
}

impl ByteSource for ChunkedSource {
    fn available(&self) -> usize {
        self.buf.len()
    }

    fn chunk(&self) -> &[u8] {
        &self.buf
    }

    fn position(&self) -> u64 {
        self.offset
    }

    fn is_finished(&self) -> bool {
        self.finished
    }

    fn advance(&mut self, n: usize) {
        self.buf.advance(n);
        self.offset += n as u64;
    }

    fn read(&mut self, n: usize) -> Result<Bytes> {
        self.ensure(n)?;
        self.offset += n as u64;
        Ok(self.buf.split_to(n).freeze())
    }
}
