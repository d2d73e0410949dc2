//! Segment and track summaries derived from a decoded [`Document`].

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

use webmstream_schema::ids;

use crate::document::{Document, Node};
use crate::Value;

/// Default TimestampScale: one millisecond in nanoseconds.
pub const DEFAULT_TIMESTAMP_SCALE: u64 = 1_000_000;

/// Segment-level metadata from the Info element.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SegmentInfo {
    /// Nanoseconds per timestamp tick.
    pub timestamp_scale: u64,
    /// Duration in timestamp ticks.
    pub duration: Option<f64>,
    pub date: Option<DateTime<Utc>>,
    pub title: Option<String>,
    pub muxing_app: Option<String>,
    pub writing_app: Option<String>,
}

impl SegmentInfo {
    /// Read the Info element of the first Segment.
    pub fn from_document(doc: &Document) -> Option<Self> {
        let info = doc.segment()?.child(ids::INFO)?;
        Some(Self::from_node(info))
    }

    /// Read an Info element.
    pub fn from_node(info: &Node) -> Self {
        Self {
            timestamp_scale: info
                .uint(ids::TIMESTAMP_SCALE)
                .unwrap_or(DEFAULT_TIMESTAMP_SCALE),
            duration: info.float(ids::DURATION),
            date: info
                .child(ids::DATE_UTC)
                .and_then(Node::value)
                .and_then(Value::as_date),
            title: info.string(ids::TITLE).map(str::to_owned),
            muxing_app: info.string(ids::MUXING_APP).map(str::to_owned),
            writing_app: info.string(ids::WRITING_APP).map(str::to_owned),
        }
    }

    /// Duration as wall-clock time.
    pub fn duration(&self) -> Option<Duration> {
        let ticks = self.duration?;
        let nanos = ticks * self.timestamp_scale as f64;
        (nanos.is_finite() && nanos >= 0.0).then(|| Duration::from_nanos(nanos as u64))
    }
}

/// Matroska TrackType.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrackType {
    Video,
    Audio,
    Complex,
    Logo,
    Subtitle,
    Buttons,
    Control,
    Metadata,
    Other(u64),
}

impl From<u64> for TrackType {
    fn from(value: u64) -> Self {
        match value {
            1 => TrackType::Video,
            2 => TrackType::Audio,
            3 => TrackType::Complex,
            0x10 => TrackType::Logo,
            0x11 => TrackType::Subtitle,
            0x12 => TrackType::Buttons,
            0x20 => TrackType::Control,
            0x21 => TrackType::Metadata,
            other => TrackType::Other(other),
        }
    }
}

/// One TrackEntry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackInfo {
    pub number: u64,
    pub uid: Option<u64>,
    pub track_type: Option<TrackType>,
    pub codec_id: Option<String>,
    /// Short human-readable codec name.
    pub codec: Option<String>,
    #[serde(skip)]
    pub codec_private: Option<bytes::Bytes>,
    pub name: Option<String>,
    /// Language, preferring the BCP 47 form. Defaults to "eng".
    pub language: String,
    pub default: bool,
    pub width: Option<u64>,
    pub height: Option<u64>,
    pub sampling_frequency: Option<f64>,
    pub channels: Option<u64>,
}

impl TrackInfo {
    /// All TrackEntry elements of the first Segment.
    pub fn from_document(doc: &Document) -> Vec<Self> {
        doc.segment()
            .and_then(|segment| segment.child(ids::TRACKS))
            .map(|tracks| {
                tracks
                    .children_with_id(ids::TRACK_ENTRY)
                    .filter_map(Self::from_node)
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Read a TrackEntry. Entries without a TrackNumber are ignored.
    pub fn from_node(entry: &Node) -> Option<Self> {
        let Some(number) = entry.uint(ids::TRACK_NUMBER) else {
            tracing::warn!("TrackEntry at offset {} has no TrackNumber", entry.offset);
            return None;
        };

        let codec_id = entry.string(ids::CODEC_ID).map(str::to_owned);
        let video = entry.child(ids::VIDEO);
        let audio = entry.child(ids::AUDIO);

        Some(Self {
            number,
            uid: entry.uint(ids::TRACK_UID),
            track_type: entry.uint(ids::TRACK_TYPE).map(TrackType::from),
            codec: codec_id.as_deref().map(codec_id_to_name),
            codec_id,
            codec_private: entry
                .child(ids::CODEC_PRIVATE)
                .and_then(Node::value)
                .and_then(Value::as_binary)
                .cloned(),
            name: entry.string(ids::NAME).map(str::to_owned),
            language: entry
                .string(ids::LANGUAGE_BCP47)
                .or_else(|| entry.string(ids::LANGUAGE))
                .unwrap_or("eng")
                .to_owned(),
            default: entry.uint(ids::FLAG_DEFAULT).map_or(true, |flag| flag != 0),
            width: video.and_then(|v| v.uint(ids::PIXEL_WIDTH)),
            height: video.and_then(|v| v.uint(ids::PIXEL_HEIGHT)),
            sampling_frequency: audio.and_then(|a| a.float(ids::SAMPLING_FREQUENCY)),
            channels: audio.and_then(|a| a.uint(ids::CHANNELS)),
        })
    }
}

/// Map a Matroska CodecID to a short codec name.
pub fn codec_id_to_name(codec_id: &str) -> String {
    match codec_id {
        // Video codecs
        "V_VP8" => "VP8".to_string(),
        "V_VP9" => "VP9".to_string(),
        "V_AV1" => "AV1".to_string(),
        "V_MPEG4/ISO/AVC" => "AVC".to_string(),
        "V_MPEGH/ISO/HEVC" => "HEVC".to_string(),
        "V_THEORA" => "Theora".to_string(),

        // Audio codecs
        "A_OPUS" => "Opus".to_string(),
        "A_VORBIS" => "Vorbis".to_string(),
        "A_AAC" | "A_AAC/MPEG4/LC" | "A_AAC/MPEG2/LC" => "AAC".to_string(),
        "A_FLAC" => "FLAC".to_string(),
        "A_MPEG/L3" => "MP3".to_string(),
        "A_PCM/INT/LIT" | "A_PCM/INT/BIG" => "PCM".to_string(),
        "A_PCM/FLOAT/IEEE" => "PCM Float".to_string(),

        // Subtitle codecs
        "S_TEXT/WEBVTT" | "D_WEBVTT/SUBTITLES" | "D_WEBVTT/CAPTIONS" => "WebVTT".to_string(),
        "S_TEXT/UTF8" => "SRT".to_string(),
        "S_TEXT/ASS" | "S_TEXT/SSA" => "ASS".to_string(),

        // Unknown: drop the track-type prefix
        other => other
            .strip_prefix("V_")
            .or_else(|| other.strip_prefix("A_"))
            .or_else(|| other.strip_prefix("S_"))
            .unwrap_or(other)
            .to_string(),
    }
}
