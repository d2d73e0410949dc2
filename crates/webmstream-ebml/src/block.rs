//! SimpleBlock and Block payloads.
//!
//! A block starts with the track number (an ID-style vint, marker bit kept),
//! a signed 16-bit timestamp relative to the enclosing cluster and a flags
//! byte. When the lacing bits are set, a frame count and a lace size table
//! follow before the frame data.
//! Frames are handed out as zero-copy slices of the element payload.

use bytes::Bytes;

use crate::{vint, Cursor, Error, Result};

/// Frame packing used by a block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Lacing {
    /// A single frame.
    #[default]
    None,
    /// Sizes as runs of 255-valued bytes.
    Xiph,
    /// Equal-sized frames.
    FixedSize,
    /// First size as a vint, the rest as signed deltas.
    Ebml,
}

impl Lacing {
    /// Two-bit mode as stored in the flags byte.
    pub fn mode(self) -> u8 {
        match self {
            Lacing::None => 0,
            Lacing::Xiph => 1,
            Lacing::FixedSize => 2,
            Lacing::Ebml => 3,
        }
    }
}

impl TryFrom<u8> for Lacing {
    type Error = Error;

    fn try_from(mode: u8) -> Result<Self> {
        match mode {
            0 => Ok(Lacing::None),
            1 => Ok(Lacing::Xiph),
            2 => Ok(Lacing::FixedSize),
            3 => Ok(Lacing::Ebml),
            other => Err(Error::UnsupportedLacingMode(other)),
        }
    }
}

/// Decoded block flags.
///
/// `keyframe` and `discardable` are only defined for SimpleBlock; in a Block
/// those bits are reserved and normally zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BlockFlags {
    pub keyframe: bool,
    pub invisible: bool,
    pub lacing: Lacing,
    pub discardable: bool,
}

impl BlockFlags {
    pub const KEYFRAME: u8 = 0x80;
    pub const INVISIBLE: u8 = 0x08;
    pub const LACING: u8 = 0x06;
    pub const DISCARDABLE: u8 = 0x01;

    /// Decode a flags byte.
    pub fn from_byte(byte: u8) -> Result<Self> {
        Ok(Self {
            keyframe: byte & Self::KEYFRAME != 0,
            invisible: byte & Self::INVISIBLE != 0,
            lacing: Lacing::try_from((byte & Self::LACING) >> 1)?,
            discardable: byte & Self::DISCARDABLE != 0,
        })
    }

    /// Encode back to a flags byte.
    pub fn to_byte(self) -> u8 {
        let mut byte = self.lacing.mode() << 1;
        if self.keyframe {
            byte |= Self::KEYFRAME;
        }
        if self.invisible {
            byte |= Self::INVISIBLE;
        }
        if self.discardable {
            byte |= Self::DISCARDABLE;
        }
        byte
    }
}

/// A SimpleBlock or Block split into its frames.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    /// Track number as encoded, marker bit included (`0x81` for track 1).
    pub track_number: u64,
    /// Timestamp relative to the cluster, in track timestamp units.
    pub relative_timestamp: i16,
    /// Header flags.
    pub flags: BlockFlags,
    /// Frame payloads in stream order.
    pub frames: Vec<Bytes>,
}

impl Block {
    /// Parse a block from its complete element payload.
    ///
    /// `offset` is the absolute stream offset of `payload[0]`. Lace tables
    /// that would read past the payload yield [`Error::LacingOverrun`], and a
    /// zero-led vint in the header or lace table yields
    /// [`Error::MalformedBlock`].
    pub fn parse(payload: Bytes, offset: u64) -> Result<Self> {
        let mut cur = Cursor::new(&payload, offset);

        let track_number = vint::read_id(&mut cur).map_err(|e| overrun(e, &payload, offset))?;
        let relative_timestamp = cur.read_i16().map_err(|e| overrun(e, &payload, offset))?;
        let flags_byte = cur.read_u8().map_err(|e| overrun(e, &payload, offset))?;
        let flags = BlockFlags::from_byte(flags_byte)?;

        let sizes = lace_sizes(&mut cur, flags.lacing)
            .map_err(|e| overrun(e, &payload, offset))?;

        let mut frames = Vec::with_capacity(sizes.len());
        let mut start = cur.consumed();
        for size in sizes {
            let end = start + size as usize;
            frames.push(payload.slice(start..end));
            start = end;
        }

        Ok(Self {
            track_number: track_number.value,
            relative_timestamp,
            flags,
            frames,
        })
    }

    /// Whether more than one frame is packed in this block.
    pub fn is_laced(&self) -> bool {
        self.flags.lacing != Lacing::None
    }

    /// Total bytes of frame data.
    pub fn data_len(&self) -> usize {
        self.frames.iter().map(Bytes::len).sum()
    }
}

/// Compute every frame size from the lace table. The returned sizes add up
/// to exactly the bytes left in `cur` after the table.
fn lace_sizes(cur: &mut Cursor<'_>, lacing: Lacing) -> Result<Vec<u64>> {
    if lacing == Lacing::None {
        return Ok(vec![cur.remaining() as u64]);
    }

    // Data size as the block header sees it: count byte plus lace table plus
    // frames.
    let data_size = cur.remaining() as u64;
    let frame_count = cur.read_u8()? as usize + 1;
    let mut sizes = Vec::with_capacity(frame_count);

    match lacing {
        Lacing::None => unreachable!("handled above"),
        Lacing::Xiph => {
            for _ in 0..frame_count - 1 {
                let mut size = 0u64;
                loop {
                    let b = cur.read_u8()?;
                    size += b as u64;
                    if b != 255 {
                        break;
                    }
                }
                sizes.push(size);
            }
        }
        Lacing::Ebml => {
            if frame_count > 1 {
                let first = vint::read_size(cur)?.value;
                sizes.push(first);
                let mut previous = first as i64;
                for _ in 1..frame_count - 1 {
                    let offset = cur.position();
                    let size = previous + vint::read_signed(cur)?;
                    if size < 0 {
                        return Err(Error::InvalidLaceSize { offset, size });
                    }
                    sizes.push(size as u64);
                    previous = size;
                }
            }
        }
        Lacing::FixedSize => {
            let frame_data = data_size - 1;
            if frame_data % frame_count as u64 != 0 {
                return Err(Error::UnevenFixedLacing {
                    data_size: frame_data,
                    frame_count,
                });
            }
            return Ok(vec![frame_data / frame_count as u64; frame_count]);
        }
    }

    let laced: u64 = sizes.iter().sum();
    let remaining = cur.remaining() as u64;
    if laced > remaining {
        return Err(Error::LacingOverrun {
            offset: cur.position(),
            needed: laced,
            available: remaining,
        });
    }
    sizes.push(remaining - laced);
    Ok(sizes)
}

/// Confine header and lace table failures to the block. Running out of bytes
/// within a complete payload is an overrun, not a wait for input, and a bad
/// vint cannot desynchronize anything past the payload.
fn overrun(err: Error, payload: &[u8], offset: u64) -> Error {
    match err {
        Error::MalformedVarInt { offset } | Error::SizeTooLarge { offset, .. } => {
            Error::MalformedBlock { offset }
        }
        Error::InsufficientData {
            offset: at, needed, ..
        } => Error::LacingOverrun {
            offset: at,
            needed: (at - offset) + needed as u64,
            available: payload.len() as u64,
        },
        other => other,
    }
}
