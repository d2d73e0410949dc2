//! Bounded byte cursor with absolute stream offsets.

use crate::{Error, Result};

/// Forward-only reader over a borrowed byte slice.
///
/// `base` is the absolute stream offset of `buf[0]`, so every error raised
/// while reading carries the position it happened at. Reads never partially
/// consume: a read that cannot be satisfied leaves the cursor where it was.
#[derive(Debug, Clone)]
pub struct Cursor<'a> {
    buf: &'a [u8],
    pos: usize,
    base: u64,
}

impl<'a> Cursor<'a> {
    /// Create a cursor over `buf`, which starts at stream offset `base`.
    pub fn new(buf: &'a [u8], base: u64) -> Self {
        Self { buf, pos: 0, base }
    }

    /// Absolute stream offset of the next unread byte.
    pub fn position(&self) -> u64 {
        self.base + self.pos as u64
    }

    /// Bytes consumed since the cursor was created.
    pub fn consumed(&self) -> usize {
        self.pos
    }

    /// Bytes left to read.
    pub fn remaining(&self) -> usize {
        self.buf.len() - self.pos
    }

    /// Look at the next byte without consuming it.
    pub fn peek_u8(&self) -> Result<u8> {
        self.buf
            .get(self.pos)
            .copied()
            .ok_or_else(|| self.insufficient(1))
    }

    /// Read one byte.
    pub fn read_u8(&mut self) -> Result<u8> {
        let b = self.peek_u8()?;
        self.pos += 1;
        Ok(b)
    }

    /// Read a big-endian signed 16-bit integer.
    pub fn read_i16(&mut self) -> Result<i16> {
        let bytes = self.read_slice(2)?;
        Ok(i16::from_be_bytes([bytes[0], bytes[1]]))
    }

    /// Read `len` bytes as a borrowed slice.
    pub fn read_slice(&mut self, len: usize) -> Result<&'a [u8]> {
        if self.remaining() < len {
            return Err(self.insufficient(len));
        }
        let slice = &self.buf[self.pos..self.pos + len];
        self.pos += len;
        Ok(slice)
    }

    /// Skip `len` bytes.
    pub fn skip(&mut self, len: usize) -> Result<()> {
        self.read_slice(len).map(|_| ())
    }

    /// The unread tail.
    pub fn rest(&self) -> &'a [u8] {
        &self.buf[self.pos..]
    }

    fn insufficient(&self, needed: usize) -> Error {
        Error::InsufficientData {
            offset: self.position(),
            needed,
            available: self.remaining(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn test_reads_advance_position() {
        let data = [0x01, 0xFF, 0xFE, 0x07];
        let mut cur = Cursor::new(&data, 100);

        assert_eq!(cur.read_u8().unwrap(), 0x01);
        assert_eq!(cur.read_i16().unwrap(), -2);
        assert_eq!(cur.position(), 103);
        assert_eq!(cur.consumed(), 3);
        assert_eq!(cur.rest(), &[0x07]);
    }

    #[test]
    fn test_short_read_does_not_consume() {
        let data = [0xAA, 0xBB];
        let mut cur = Cursor::new(&data, 0);
        cur.read_u8().unwrap();

        assert_matches!(
            cur.read_slice(4),
            Err(Error::InsufficientData {
                offset: 1,
                needed: 4,
                available: 1
            })
        );
        assert_eq!(cur.remaining(), 1);
    }
}
