//! Shared byte builders for integration tests.
//!
//! Each helper returns the complete encoded element, header included, so
//! streams are assembled by nesting and concatenating calls.

#![allow(dead_code)]

use webmstream::ids;
use webmstream_ebml::vint;

/// Route decoder logs to the test writer. Set `RUST_LOG=webmstream=debug` to
/// see them.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Element with a minimal-length size field.
pub fn element(id: u32, payload: &[u8]) -> Vec<u8> {
    let len = payload.len() as u64;
    let mut out = vint::encode_id(id);
    out.extend(vint::encode_size(len, vint::min_size_length(len)).expect("size fits"));
    out.extend_from_slice(payload);
    out
}

/// Container holding `children` in order.
pub fn master(id: u32, children: &[Vec<u8>]) -> Vec<u8> {
    element(id, &children.concat())
}

/// Container with the one-byte unknown-size marker.
pub fn unknown_sized(id: u32, children: &[Vec<u8>]) -> Vec<u8> {
    let mut out = vint::encode_id(id);
    out.push(0xFF);
    out.extend(children.concat());
    out
}

pub fn uint(id: u32, value: u64) -> Vec<u8> {
    let bytes = value.to_be_bytes();
    let skip = (value.leading_zeros() / 8).min(7) as usize;
    element(id, &bytes[skip..])
}

pub fn float(id: u32, value: f64) -> Vec<u8> {
    element(id, &value.to_be_bytes())
}

pub fn string(id: u32, value: &str) -> Vec<u8> {
    element(id, value.as_bytes())
}

/// EBML header announcing `doc_type`.
pub fn ebml_header(doc_type: &str) -> Vec<u8> {
    master(
        ids::EBML,
        &[
            uint(ids::EBML_VERSION, 1),
            uint(ids::EBML_READ_VERSION, 1),
            uint(ids::EBML_MAX_ID_LENGTH, 4),
            uint(ids::EBML_MAX_SIZE_LENGTH, 8),
            string(ids::DOC_TYPE, doc_type),
            uint(ids::DOC_TYPE_VERSION, 4),
            uint(ids::DOC_TYPE_READ_VERSION, 2),
        ],
    )
}

/// SimpleBlock header for a one-byte track number, written `0x80 | track`.
pub fn block_header(track: u8, timestamp: i16, flags: u8) -> Vec<u8> {
    let mut out = vec![0x80 | track];
    out.extend_from_slice(&timestamp.to_be_bytes());
    out.push(flags);
    out
}

/// Xiph lace size: runs of 255 plus a terminating byte.
pub fn xiph_size(mut size: usize, out: &mut Vec<u8>) {
    while size >= 255 {
        out.push(255);
        size -= 255;
    }
    out.push(size as u8);
}

/// One VP8 track, one Opus track.
pub fn av_tracks() -> Vec<u8> {
    master(
        ids::TRACKS,
        &[
            master(
                ids::TRACK_ENTRY,
                &[
                    uint(ids::TRACK_NUMBER, 1),
                    uint(ids::TRACK_UID, 0xA1B2),
                    uint(ids::TRACK_TYPE, 1),
                    string(ids::CODEC_ID, "V_VP8"),
                    master(
                        ids::VIDEO,
                        &[uint(ids::PIXEL_WIDTH, 1280), uint(ids::PIXEL_HEIGHT, 720)],
                    ),
                ],
            ),
            master(
                ids::TRACK_ENTRY,
                &[
                    uint(ids::TRACK_NUMBER, 2),
                    uint(ids::TRACK_TYPE, 2),
                    string(ids::CODEC_ID, "A_OPUS"),
                    element(ids::CODEC_PRIVATE, b"OpusHead"),
                    string(ids::LANGUAGE, "und"),
                    master(
                        ids::AUDIO,
                        &[float(ids::SAMPLING_FREQUENCY, 48000.0), uint(ids::CHANNELS, 2)],
                    ),
                ],
            ),
        ],
    )
}

/// Header, Info, Tracks and one cluster with a keyframe on each track, as a
/// live muxer would write it: unknown-size Segment and Cluster.
pub fn live_stream() -> Vec<u8> {
    let mut video = block_header(1, 0, 0x80);
    video.extend_from_slice(&[0x9D; 64]);
    let mut audio = block_header(2, 3, 0x80);
    audio.extend_from_slice(&[0xFC; 20]);

    let mut data = ebml_header("webm");
    data.extend(unknown_sized(
        ids::SEGMENT,
        &[
            master(
                ids::INFO,
                &[
                    uint(ids::TIMESTAMP_SCALE, 1_000_000),
                    string(ids::MUXING_APP, "webmstream-test"),
                    string(ids::WRITING_APP, "webmstream-test"),
                ],
            ),
            av_tracks(),
            unknown_sized(
                ids::CLUSTER,
                &[
                    uint(ids::TIMESTAMP, 0),
                    element(ids::SIMPLE_BLOCK, &video),
                    element(ids::SIMPLE_BLOCK, &audio),
                ],
            ),
        ],
    ));
    data
}
