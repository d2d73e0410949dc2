//! EBML variable-length integers.
//!
//! The count of leading zero bits in the first byte, plus one, gives the
//! encoded length. Element IDs keep the marker bit as part of their value;
//! sizes and lace deltas mask it off.

use crate::{Cursor, Error, Result};

/// Longest encoding the codec accepts.
pub const MAX_LENGTH: usize = 8;

/// Longest element ID the Matroska schema uses. Longer IDs still decode but
/// are flagged as oversized.
pub const MAX_ID_LENGTH: usize = 4;

/// A decoded variable-length integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VarInt {
    /// Encoded length in bytes (1..=8).
    pub length: usize,
    /// Decoded value.
    pub value: u64,
}

impl VarInt {
    /// Whether an ID-style read produced more bytes than any schema ID uses.
    pub fn is_oversized_id(&self) -> bool {
        self.length > MAX_ID_LENGTH
    }

    /// Whether a size-style read hit the reserved all-ones "unknown size"
    /// pattern for its length.
    pub fn is_unknown_size(&self) -> bool {
        self.value == unknown_size_marker(self.length)
    }
}

/// The all-ones value for a size of `length` bytes.
pub fn unknown_size_marker(length: usize) -> u64 {
    (1u64 << (7 * length)) - 1
}

/// Encoded length implied by a first byte, `None` for 0x00.
pub fn encoded_length(first: u8) -> Option<usize> {
    if first == 0 {
        None
    } else {
        Some(first.leading_zeros() as usize + 1)
    }
}

/// Read an element ID. The marker bit is kept.
pub fn read_id(cur: &mut Cursor<'_>) -> Result<VarInt> {
    let offset = cur.position();
    let first = cur.peek_u8()?;
    let length = encoded_length(first).ok_or(Error::MalformedVarInt { offset })?;

    let bytes = cur.read_slice(length)?;
    let value = bytes.iter().fold(0u64, |acc, &b| (acc << 8) | b as u64);

    Ok(VarInt { length, value })
}

/// Read an element size with the default 8-byte limit.
pub fn read_size(cur: &mut Cursor<'_>) -> Result<VarInt> {
    read_size_limited(cur, MAX_LENGTH)
}

/// Read an element size, rejecting encodings longer than `max_length`.
///
/// `max_length` is the stream's EBMLMaxSizeLength; it never exceeds 8.
pub fn read_size_limited(cur: &mut Cursor<'_>, max_length: usize) -> Result<VarInt> {
    let offset = cur.position();
    let first = cur.peek_u8()?;
    let length = encoded_length(first).ok_or(Error::MalformedVarInt { offset })?;
    if length > max_length.min(MAX_LENGTH) {
        return Err(Error::SizeTooLarge { offset, length });
    }

    let bytes = cur.read_slice(length)?;
    let marker = 0x80u8 >> (length - 1);
    let head = (bytes[0] & !marker) as u64;
    let value = bytes[1..].iter().fold(head, |acc, &b| (acc << 8) | b as u64);

    Ok(VarInt { length, value })
}

/// Read a signed lace delta.
///
/// The unsigned payload is shifted down by half its range: a length of `n`
/// bytes covers `-2^(7n-1)..=2^(7n-1) - 1`.
pub fn read_signed(cur: &mut Cursor<'_>) -> Result<i64> {
    let raw = read_size(cur)?;
    Ok(signed_from_raw(raw))
}

/// Convert an unsigned vint payload to its signed value.
pub fn signed_from_raw(raw: VarInt) -> i64 {
    raw.value as i64 - signed_bias(raw.length)
}

fn signed_bias(length: usize) -> i64 {
    1i64 << (7 * length - 1)
}

/// Shortest size encoding able to hold `value` without colliding with the
/// unknown-size marker.
pub fn min_size_length(value: u64) -> usize {
    (1..=MAX_LENGTH)
        .find(|&len| value < unknown_size_marker(len))
        .unwrap_or(MAX_LENGTH)
}

/// Encode `value` as a size of exactly `length` bytes.
///
/// Returns `None` when `value` does not fit. The unknown-size marker is
/// accepted so callers can write live, unsized containers.
pub fn encode_size(value: u64, length: usize) -> Option<Vec<u8>> {
    if length == 0 || length > MAX_LENGTH || value > unknown_size_marker(length) {
        return None;
    }
    let marker = 1u64 << (7 * length);
    let word = (value | marker).to_be_bytes();
    Some(word[MAX_LENGTH - length..].to_vec())
}

/// Encode a signed lace delta in exactly `length` bytes.
pub fn encode_signed(value: i64, length: usize) -> Option<Vec<u8>> {
    if length == 0 || length > MAX_LENGTH {
        return None;
    }
    let raw = value.checked_add(signed_bias(length))?;
    if raw < 0 || raw as u64 > unknown_size_marker(length) {
        return None;
    }
    encode_size(raw as u64, length)
}

/// Big-endian bytes of an element ID, marker included.
pub fn encode_id(id: u32) -> Vec<u8> {
    let bytes = id.to_be_bytes();
    let skip = (id.leading_zeros() / 8).min(3) as usize;
    bytes[skip..].to_vec()
}
