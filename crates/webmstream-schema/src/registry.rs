//! Per-context element registry.
//!
//! Each [`Context`] names the body of one container type and owns a static
//! table of the elements allowed in it. [`Registry`] indexes those tables once
//! per process and is shared read-only afterwards.

use std::collections::HashMap;
use std::fmt;
use std::sync::OnceLock;

use crate::ids::*;
use crate::ElementKind;

/// The body of a container, as seen by the walker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Context {
    TopLevel,
    EbmlHeader,
    DocTypeExtension,
    Segment,
    SeekHead,
    Seek,
    Info,
    ChapterTranslate,
    Cluster,
    SilentTracks,
    BlockGroup,
    BlockAdditions,
    BlockMore,
    Slices,
    TimeSlice,
    ReferenceFrame,
    Tracks,
    TrackEntry,
    BlockAdditionMapping,
    TrackTranslate,
    Video,
    Colour,
    MasteringMetadata,
    Projection,
    Audio,
    TrackOperation,
    TrackCombinePlanes,
    TrackPlane,
    TrackJoinBlocks,
    ContentEncodings,
    ContentEncoding,
    ContentCompression,
    ContentEncryption,
    ContentEncAesSettings,
    Cues,
    CuePoint,
    CueTrackPositions,
    CueReference,
    Attachments,
    AttachedFile,
    Chapters,
    EditionEntry,
    EditionDisplay,
    ChapterAtom,
    ChapterTrack,
    ChapterDisplay,
    ChapProcess,
    ChapProcessCommand,
    Tags,
    Tag,
    Targets,
    SimpleTag,
}

impl Context {
    pub const ALL: [Context; 52] = [
        Context::TopLevel,
        Context::EbmlHeader,
        Context::DocTypeExtension,
        Context::Segment,
        Context::SeekHead,
        Context::Seek,
        Context::Info,
        Context::ChapterTranslate,
        Context::Cluster,
        Context::SilentTracks,
        Context::BlockGroup,
        Context::BlockAdditions,
        Context::BlockMore,
        Context::Slices,
        Context::TimeSlice,
        Context::ReferenceFrame,
        Context::Tracks,
        Context::TrackEntry,
        Context::BlockAdditionMapping,
        Context::TrackTranslate,
        Context::Video,
        Context::Colour,
        Context::MasteringMetadata,
        Context::Projection,
        Context::Audio,
        Context::TrackOperation,
        Context::TrackCombinePlanes,
        Context::TrackPlane,
        Context::TrackJoinBlocks,
        Context::ContentEncodings,
        Context::ContentEncoding,
        Context::ContentCompression,
        Context::ContentEncryption,
        Context::ContentEncAesSettings,
        Context::Cues,
        Context::CuePoint,
        Context::CueTrackPositions,
        Context::CueReference,
        Context::Attachments,
        Context::AttachedFile,
        Context::Chapters,
        Context::EditionEntry,
        Context::EditionDisplay,
        Context::ChapterAtom,
        Context::ChapterTrack,
        Context::ChapterDisplay,
        Context::ChapProcess,
        Context::ChapProcessCommand,
        Context::Tags,
        Context::Tag,
        Context::Targets,
        Context::SimpleTag,
    ];

    /// Elements declared for this context, excluding the global ones.
    pub fn entries(self) -> &'static [SchemaEntry] {
        match self {
            Context::TopLevel => TOP_LEVEL,
            Context::EbmlHeader => EBML_HEADER,
            Context::DocTypeExtension => DOC_TYPE_EXTENSION_BODY,
            Context::Segment => SEGMENT_BODY,
            Context::SeekHead => SEEK_HEAD_BODY,
            Context::Seek => SEEK_BODY,
            Context::Info => INFO_BODY,
            Context::ChapterTranslate => CHAPTER_TRANSLATE_BODY,
            Context::Cluster => CLUSTER_BODY,
            Context::SilentTracks => SILENT_TRACKS_BODY,
            Context::BlockGroup => BLOCK_GROUP_BODY,
            Context::BlockAdditions => BLOCK_ADDITIONS_BODY,
            Context::BlockMore => BLOCK_MORE_BODY,
            Context::Slices => SLICES_BODY,
            Context::TimeSlice => TIME_SLICE_BODY,
            Context::ReferenceFrame => REFERENCE_FRAME_BODY,
            Context::Tracks => TRACKS_BODY,
            Context::TrackEntry => TRACK_ENTRY_BODY,
            Context::BlockAdditionMapping => BLOCK_ADDITION_MAPPING_BODY,
            Context::TrackTranslate => TRACK_TRANSLATE_BODY,
            Context::Video => VIDEO_BODY,
            Context::Colour => COLOUR_BODY,
            Context::MasteringMetadata => MASTERING_METADATA_BODY,
            Context::Projection => PROJECTION_BODY,
            Context::Audio => AUDIO_BODY,
            Context::TrackOperation => TRACK_OPERATION_BODY,
            Context::TrackCombinePlanes => TRACK_COMBINE_PLANES_BODY,
            Context::TrackPlane => TRACK_PLANE_BODY,
            Context::TrackJoinBlocks => TRACK_JOIN_BLOCKS_BODY,
            Context::ContentEncodings => CONTENT_ENCODINGS_BODY,
            Context::ContentEncoding => CONTENT_ENCODING_BODY,
            Context::ContentCompression => CONTENT_COMPRESSION_BODY,
            Context::ContentEncryption => CONTENT_ENCRYPTION_BODY,
            Context::ContentEncAesSettings => CONTENT_ENC_AES_SETTINGS_BODY,
            Context::Cues => CUES_BODY,
            Context::CuePoint => CUE_POINT_BODY,
            Context::CueTrackPositions => CUE_TRACK_POSITIONS_BODY,
            Context::CueReference => CUE_REFERENCE_BODY,
            Context::Attachments => ATTACHMENTS_BODY,
            Context::AttachedFile => ATTACHED_FILE_BODY,
            Context::Chapters => CHAPTERS_BODY,
            Context::EditionEntry => EDITION_ENTRY_BODY,
            Context::EditionDisplay => EDITION_DISPLAY_BODY,
            Context::ChapterAtom => CHAPTER_ATOM_BODY,
            Context::ChapterTrack => CHAPTER_TRACK_BODY,
            Context::ChapterDisplay => CHAPTER_DISPLAY_BODY,
            Context::ChapProcess => CHAP_PROCESS_BODY,
            Context::ChapProcessCommand => CHAP_PROCESS_COMMAND_BODY,
            Context::Tags => TAGS_BODY,
            Context::Tag => TAG_BODY,
            Context::Targets => TARGETS_BODY,
            Context::SimpleTag => SIMPLE_TAG_BODY,
        }
    }
}

impl fmt::Display for Context {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// One element definition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SchemaEntry {
    /// Encoded element ID, marker bits included.
    pub id: u32,
    /// Matroska element name.
    pub name: &'static str,
    pub kind: ElementKind,
    /// Body context for containers, `None` for leaves.
    pub children: Option<Context>,
}

const fn leaf(id: u32, name: &'static str, kind: ElementKind) -> SchemaEntry {
    SchemaEntry {
        id,
        name,
        kind,
        children: None,
    }
}

const fn master(id: u32, name: &'static str, children: Context) -> SchemaEntry {
    SchemaEntry {
        id,
        name,
        kind: ElementKind::Container,
        children: Some(children),
    }
}

const fn uint(id: u32, name: &'static str) -> SchemaEntry {
    leaf(id, name, ElementKind::UInt)
}

const fn int(id: u32, name: &'static str) -> SchemaEntry {
    leaf(id, name, ElementKind::Int)
}

const fn float(id: u32, name: &'static str) -> SchemaEntry {
    leaf(id, name, ElementKind::Float)
}

const fn string(id: u32, name: &'static str) -> SchemaEntry {
    leaf(id, name, ElementKind::String)
}

const fn binary(id: u32, name: &'static str) -> SchemaEntry {
    leaf(id, name, ElementKind::Binary)
}

const fn date(id: u32, name: &'static str) -> SchemaEntry {
    leaf(id, name, ElementKind::Date)
}

/// Elements allowed inside every container.
pub static GLOBAL: &[SchemaEntry] = &[binary(CRC_32, "CRC-32"), binary(VOID, "Void")];

static TOP_LEVEL: &[SchemaEntry] = &[
    master(EBML, "EBML", Context::EbmlHeader),
    master(SEGMENT, "Segment", Context::Segment),
];

static EBML_HEADER: &[SchemaEntry] = &[
    uint(EBML_VERSION, "EBMLVersion"),
    uint(EBML_READ_VERSION, "EBMLReadVersion"),
    uint(EBML_MAX_ID_LENGTH, "EBMLMaxIDLength"),
    uint(EBML_MAX_SIZE_LENGTH, "EBMLMaxSizeLength"),
    string(DOC_TYPE, "DocType"),
    uint(DOC_TYPE_VERSION, "DocTypeVersion"),
    uint(DOC_TYPE_READ_VERSION, "DocTypeReadVersion"),
    master(DOC_TYPE_EXTENSION, "DocTypeExtension", Context::DocTypeExtension),
];

static DOC_TYPE_EXTENSION_BODY: &[SchemaEntry] = &[
    string(DOC_TYPE_EXTENSION_NAME, "DocTypeExtensionName"),
    uint(DOC_TYPE_EXTENSION_VERSION, "DocTypeExtensionVersion"),
];

static SEGMENT_BODY: &[SchemaEntry] = &[
    master(SEEK_HEAD, "SeekHead", Context::SeekHead),
    master(INFO, "Info", Context::Info),
    master(TRACKS, "Tracks", Context::Tracks),
    master(CHAPTERS, "Chapters", Context::Chapters),
    master(CLUSTER, "Cluster", Context::Cluster),
    master(CUES, "Cues", Context::Cues),
    master(ATTACHMENTS, "Attachments", Context::Attachments),
    master(TAGS, "Tags", Context::Tags),
];

static SEEK_HEAD_BODY: &[SchemaEntry] = &[master(SEEK, "Seek", Context::Seek)];

static SEEK_BODY: &[SchemaEntry] = &[
    binary(SEEK_ID, "SeekID"),
    uint(SEEK_POSITION, "SeekPosition"),
];

static INFO_BODY: &[SchemaEntry] = &[
    binary(SEGMENT_UUID, "SegmentUUID"),
    string(SEGMENT_FILENAME, "SegmentFilename"),
    binary(PREV_UUID, "PrevUUID"),
    string(PREV_FILENAME, "PrevFilename"),
    binary(NEXT_UUID, "NextUUID"),
    string(NEXT_FILENAME, "NextFilename"),
    binary(SEGMENT_FAMILY, "SegmentFamily"),
    master(CHAPTER_TRANSLATE, "ChapterTranslate", Context::ChapterTranslate),
    uint(TIMESTAMP_SCALE, "TimestampScale"),
    float(DURATION, "Duration"),
    date(DATE_UTC, "DateUTC"),
    string(TITLE, "Title"),
    string(MUXING_APP, "MuxingApp"),
    string(WRITING_APP, "WritingApp"),
];

static CHAPTER_TRANSLATE_BODY: &[SchemaEntry] = &[
    binary(CHAPTER_TRANSLATE_ID, "ChapterTranslateID"),
    uint(CHAPTER_TRANSLATE_CODEC, "ChapterTranslateCodec"),
    uint(CHAPTER_TRANSLATE_EDITION_UID, "ChapterTranslateEditionUID"),
];

static CLUSTER_BODY: &[SchemaEntry] = &[
    uint(TIMESTAMP, "Timestamp"),
    master(SILENT_TRACKS, "SilentTracks", Context::SilentTracks),
    uint(POSITION, "Position"),
    uint(PREV_SIZE, "PrevSize"),
    binary(SIMPLE_BLOCK, "SimpleBlock"),
    master(BLOCK_GROUP, "BlockGroup", Context::BlockGroup),
    binary(ENCRYPTED_BLOCK, "EncryptedBlock"),
];

static SILENT_TRACKS_BODY: &[SchemaEntry] = &[uint(SILENT_TRACK_NUMBER, "SilentTrackNumber")];

static BLOCK_GROUP_BODY: &[SchemaEntry] = &[
    binary(BLOCK, "Block"),
    binary(BLOCK_VIRTUAL, "BlockVirtual"),
    master(BLOCK_ADDITIONS, "BlockAdditions", Context::BlockAdditions),
    uint(BLOCK_DURATION, "BlockDuration"),
    uint(REFERENCE_PRIORITY, "ReferencePriority"),
    int(REFERENCE_BLOCK, "ReferenceBlock"),
    int(REFERENCE_VIRTUAL, "ReferenceVirtual"),
    binary(CODEC_STATE, "CodecState"),
    int(DISCARD_PADDING, "DiscardPadding"),
    master(SLICES, "Slices", Context::Slices),
    master(REFERENCE_FRAME, "ReferenceFrame", Context::ReferenceFrame),
];

static BLOCK_ADDITIONS_BODY: &[SchemaEntry] = &[master(BLOCK_MORE, "BlockMore", Context::BlockMore)];

static BLOCK_MORE_BODY: &[SchemaEntry] = &[
    binary(BLOCK_ADDITIONAL, "BlockAdditional"),
    uint(BLOCK_ADD_ID, "BlockAddID"),
];

static SLICES_BODY: &[SchemaEntry] = &[master(TIME_SLICE, "TimeSlice", Context::TimeSlice)];

static TIME_SLICE_BODY: &[SchemaEntry] = &[
    uint(LACE_NUMBER, "LaceNumber"),
    uint(FRAME_NUMBER, "FrameNumber"),
    uint(BLOCK_ADDITION_ID, "BlockAdditionID"),
    uint(DELAY, "Delay"),
    uint(SLICE_DURATION, "SliceDuration"),
];

static REFERENCE_FRAME_BODY: &[SchemaEntry] = &[
    uint(REFERENCE_OFFSET, "ReferenceOffset"),
    uint(REFERENCE_TIMESTAMP, "ReferenceTimestamp"),
];

static TRACKS_BODY: &[SchemaEntry] = &[master(TRACK_ENTRY, "TrackEntry", Context::TrackEntry)];

static TRACK_ENTRY_BODY: &[SchemaEntry] = &[
    uint(TRACK_NUMBER, "TrackNumber"),
    uint(TRACK_UID, "TrackUID"),
    uint(TRACK_TYPE, "TrackType"),
    uint(FLAG_ENABLED, "FlagEnabled"),
    uint(FLAG_DEFAULT, "FlagDefault"),
    uint(FLAG_FORCED, "FlagForced"),
    uint(FLAG_HEARING_IMPAIRED, "FlagHearingImpaired"),
    uint(FLAG_VISUAL_IMPAIRED, "FlagVisualImpaired"),
    uint(FLAG_TEXT_DESCRIPTIONS, "FlagTextDescriptions"),
    uint(FLAG_ORIGINAL, "FlagOriginal"),
    uint(FLAG_COMMENTARY, "FlagCommentary"),
    uint(FLAG_LACING, "FlagLacing"),
    uint(MIN_CACHE, "MinCache"),
    uint(MAX_CACHE, "MaxCache"),
    uint(DEFAULT_DURATION, "DefaultDuration"),
    uint(DEFAULT_DECODED_FIELD_DURATION, "DefaultDecodedFieldDuration"),
    float(TRACK_TIMESTAMP_SCALE, "TrackTimestampScale"),
    int(TRACK_OFFSET, "TrackOffset"),
    uint(MAX_BLOCK_ADDITION_ID, "MaxBlockAdditionID"),
    master(
        BLOCK_ADDITION_MAPPING,
        "BlockAdditionMapping",
        Context::BlockAdditionMapping,
    ),
    string(NAME, "Name"),
    string(LANGUAGE, "Language"),
    string(LANGUAGE_BCP47, "LanguageBCP47"),
    string(CODEC_ID, "CodecID"),
    binary(CODEC_PRIVATE, "CodecPrivate"),
    string(CODEC_NAME, "CodecName"),
    uint(ATTACHMENT_LINK, "AttachmentLink"),
    string(CODEC_SETTINGS, "CodecSettings"),
    string(CODEC_INFO_URL, "CodecInfoURL"),
    string(CODEC_DOWNLOAD_URL, "CodecDownloadURL"),
    uint(CODEC_DECODE_ALL, "CodecDecodeAll"),
    uint(TRACK_OVERLAY, "TrackOverlay"),
    uint(CODEC_DELAY, "CodecDelay"),
    uint(SEEK_PRE_ROLL, "SeekPreRoll"),
    master(TRACK_TRANSLATE, "TrackTranslate", Context::TrackTranslate),
    master(VIDEO, "Video", Context::Video),
    master(AUDIO, "Audio", Context::Audio),
    master(TRACK_OPERATION, "TrackOperation", Context::TrackOperation),
    uint(TRICK_TRACK_UID, "TrickTrackUID"),
    binary(TRICK_TRACK_SEGMENT_UID, "TrickTrackSegmentUID"),
    uint(TRICK_TRACK_FLAG, "TrickTrackFlag"),
    uint(TRICK_MASTER_TRACK_UID, "TrickMasterTrackUID"),
    binary(TRICK_MASTER_TRACK_SEGMENT_UID, "TrickMasterTrackSegmentUID"),
    master(CONTENT_ENCODINGS, "ContentEncodings", Context::ContentEncodings),
];

static BLOCK_ADDITION_MAPPING_BODY: &[SchemaEntry] = &[
    uint(BLOCK_ADD_ID_VALUE, "BlockAddIDValue"),
    string(BLOCK_ADD_ID_NAME, "BlockAddIDName"),
    uint(BLOCK_ADD_ID_TYPE, "BlockAddIDType"),
    binary(BLOCK_ADD_ID_EXTRA_DATA, "BlockAddIDExtraData"),
];

static TRACK_TRANSLATE_BODY: &[SchemaEntry] = &[
    binary(TRACK_TRANSLATE_TRACK_ID, "TrackTranslateTrackID"),
    uint(TRACK_TRANSLATE_CODEC, "TrackTranslateCodec"),
    uint(TRACK_TRANSLATE_EDITION_UID, "TrackTranslateEditionUID"),
];

static VIDEO_BODY: &[SchemaEntry] = &[
    uint(FLAG_INTERLACED, "FlagInterlaced"),
    uint(FIELD_ORDER, "FieldOrder"),
    uint(STEREO_MODE, "StereoMode"),
    uint(ALPHA_MODE, "AlphaMode"),
    uint(OLD_STEREO_MODE, "OldStereoMode"),
    uint(PIXEL_WIDTH, "PixelWidth"),
    uint(PIXEL_HEIGHT, "PixelHeight"),
    uint(PIXEL_CROP_BOTTOM, "PixelCropBottom"),
    uint(PIXEL_CROP_TOP, "PixelCropTop"),
    uint(PIXEL_CROP_LEFT, "PixelCropLeft"),
    uint(PIXEL_CROP_RIGHT, "PixelCropRight"),
    uint(DISPLAY_WIDTH, "DisplayWidth"),
    uint(DISPLAY_HEIGHT, "DisplayHeight"),
    uint(DISPLAY_UNIT, "DisplayUnit"),
    uint(ASPECT_RATIO_TYPE, "AspectRatioType"),
    binary(UNCOMPRESSED_FOURCC, "UncompressedFourCC"),
    float(GAMMA_VALUE, "GammaValue"),
    float(FRAME_RATE, "FrameRate"),
    master(COLOUR, "Colour", Context::Colour),
    master(PROJECTION, "Projection", Context::Projection),
];

static COLOUR_BODY: &[SchemaEntry] = &[
    uint(MATRIX_COEFFICIENTS, "MatrixCoefficients"),
    uint(BITS_PER_CHANNEL, "BitsPerChannel"),
    uint(CHROMA_SUBSAMPLING_HORZ, "ChromaSubsamplingHorz"),
    uint(CHROMA_SUBSAMPLING_VERT, "ChromaSubsamplingVert"),
    uint(CB_SUBSAMPLING_HORZ, "CbSubsamplingHorz"),
    uint(CB_SUBSAMPLING_VERT, "CbSubsamplingVert"),
    uint(CHROMA_SITING_HORZ, "ChromaSitingHorz"),
    uint(CHROMA_SITING_VERT, "ChromaSitingVert"),
    uint(RANGE, "Range"),
    uint(TRANSFER_CHARACTERISTICS, "TransferCharacteristics"),
    uint(PRIMARIES, "Primaries"),
    uint(MAX_CLL, "MaxCLL"),
    uint(MAX_FALL, "MaxFALL"),
    master(
        MASTERING_METADATA,
        "MasteringMetadata",
        Context::MasteringMetadata,
    ),
];

static MASTERING_METADATA_BODY: &[SchemaEntry] = &[
    float(PRIMARY_R_CHROMATICITY_X, "PrimaryRChromaticityX"),
    float(PRIMARY_R_CHROMATICITY_Y, "PrimaryRChromaticityY"),
    float(PRIMARY_G_CHROMATICITY_X, "PrimaryGChromaticityX"),
    float(PRIMARY_G_CHROMATICITY_Y, "PrimaryGChromaticityY"),
    float(PRIMARY_B_CHROMATICITY_X, "PrimaryBChromaticityX"),
    float(PRIMARY_B_CHROMATICITY_Y, "PrimaryBChromaticityY"),
    float(WHITE_POINT_CHROMATICITY_X, "WhitePointChromaticityX"),
    float(WHITE_POINT_CHROMATICITY_Y, "WhitePointChromaticityY"),
    float(LUMINANCE_MAX, "LuminanceMax"),
    float(LUMINANCE_MIN, "LuminanceMin"),
];

static PROJECTION_BODY: &[SchemaEntry] = &[
    uint(PROJECTION_TYPE, "ProjectionType"),
    binary(PROJECTION_PRIVATE, "ProjectionPrivate"),
    float(PROJECTION_POSE_YAW, "ProjectionPoseYaw"),
    float(PROJECTION_POSE_PITCH, "ProjectionPosePitch"),
    float(PROJECTION_POSE_ROLL, "ProjectionPoseRoll"),
];

static AUDIO_BODY: &[SchemaEntry] = &[
    float(SAMPLING_FREQUENCY, "SamplingFrequency"),
    float(OUTPUT_SAMPLING_FREQUENCY, "OutputSamplingFrequency"),
    uint(CHANNELS, "Channels"),
    binary(CHANNEL_POSITIONS, "ChannelPositions"),
    uint(BIT_DEPTH, "BitDepth"),
    uint(EMPHASIS, "Emphasis"),
];

static TRACK_OPERATION_BODY: &[SchemaEntry] = &[
    master(
        TRACK_COMBINE_PLANES,
        "TrackCombinePlanes",
        Context::TrackCombinePlanes,
    ),
    master(TRACK_JOIN_BLOCKS, "TrackJoinBlocks", Context::TrackJoinBlocks),
];

static TRACK_COMBINE_PLANES_BODY: &[SchemaEntry] =
    &[master(TRACK_PLANE, "TrackPlane", Context::TrackPlane)];

static TRACK_PLANE_BODY: &[SchemaEntry] = &[
    uint(TRACK_PLANE_UID, "TrackPlaneUID"),
    uint(TRACK_PLANE_TYPE, "TrackPlaneType"),
];

static TRACK_JOIN_BLOCKS_BODY: &[SchemaEntry] = &[uint(TRACK_JOIN_UID, "TrackJoinUID")];

static CONTENT_ENCODINGS_BODY: &[SchemaEntry] =
    &[master(CONTENT_ENCODING, "ContentEncoding", Context::ContentEncoding)];

static CONTENT_ENCODING_BODY: &[SchemaEntry] = &[
    uint(CONTENT_ENCODING_ORDER, "ContentEncodingOrder"),
    uint(CONTENT_ENCODING_SCOPE, "ContentEncodingScope"),
    uint(CONTENT_ENCODING_TYPE, "ContentEncodingType"),
    master(
        CONTENT_COMPRESSION,
        "ContentCompression",
        Context::ContentCompression,
    ),
    master(
        CONTENT_ENCRYPTION,
        "ContentEncryption",
        Context::ContentEncryption,
    ),
];

static CONTENT_COMPRESSION_BODY: &[SchemaEntry] = &[
    uint(CONTENT_COMP_ALGO, "ContentCompAlgo"),
    binary(CONTENT_COMP_SETTINGS, "ContentCompSettings"),
];

static CONTENT_ENCRYPTION_BODY: &[SchemaEntry] = &[
    uint(CONTENT_ENC_ALGO, "ContentEncAlgo"),
    binary(CONTENT_ENC_KEY_ID, "ContentEncKeyID"),
    master(
        CONTENT_ENC_AES_SETTINGS,
        "ContentEncAESSettings",
        Context::ContentEncAesSettings,
    ),
    binary(CONTENT_SIGNATURE, "ContentSignature"),
    binary(CONTENT_SIG_KEY_ID, "ContentSigKeyID"),
    uint(CONTENT_SIG_ALGO, "ContentSigAlgo"),
    uint(CONTENT_SIG_HASH_ALGO, "ContentSigHashAlgo"),
];

static CONTENT_ENC_AES_SETTINGS_BODY: &[SchemaEntry] =
    &[uint(AES_SETTINGS_CIPHER_MODE, "AESSettingsCipherMode")];

static CUES_BODY: &[SchemaEntry] = &[master(CUE_POINT, "CuePoint", Context::CuePoint)];

static CUE_POINT_BODY: &[SchemaEntry] = &[
    uint(CUE_TIME, "CueTime"),
    master(
        CUE_TRACK_POSITIONS,
        "CueTrackPositions",
        Context::CueTrackPositions,
    ),
];

static CUE_TRACK_POSITIONS_BODY: &[SchemaEntry] = &[
    uint(CUE_TRACK, "CueTrack"),
    uint(CUE_CLUSTER_POSITION, "CueClusterPosition"),
    uint(CUE_RELATIVE_POSITION, "CueRelativePosition"),
    uint(CUE_DURATION, "CueDuration"),
    uint(CUE_BLOCK_NUMBER, "CueBlockNumber"),
    uint(CUE_CODEC_STATE, "CueCodecState"),
    master(CUE_REFERENCE, "CueReference", Context::CueReference),
];

static CUE_REFERENCE_BODY: &[SchemaEntry] = &[
    uint(CUE_REF_TIME, "CueRefTime"),
    uint(CUE_REF_CLUSTER, "CueRefCluster"),
    uint(CUE_REF_NUMBER, "CueRefNumber"),
    uint(CUE_REF_CODEC_STATE, "CueRefCodecState"),
];

static ATTACHMENTS_BODY: &[SchemaEntry] =
    &[master(ATTACHED_FILE, "AttachedFile", Context::AttachedFile)];

static ATTACHED_FILE_BODY: &[SchemaEntry] = &[
    string(FILE_DESCRIPTION, "FileDescription"),
    string(FILE_NAME, "FileName"),
    string(FILE_MEDIA_TYPE, "FileMediaType"),
    binary(FILE_DATA, "FileData"),
    uint(FILE_UID, "FileUID"),
    binary(FILE_REFERRAL, "FileReferral"),
    uint(FILE_USED_START_TIME, "FileUsedStartTime"),
    uint(FILE_USED_END_TIME, "FileUsedEndTime"),
];

static CHAPTERS_BODY: &[SchemaEntry] =
    &[master(EDITION_ENTRY, "EditionEntry", Context::EditionEntry)];

static EDITION_ENTRY_BODY: &[SchemaEntry] = &[
    uint(EDITION_UID, "EditionUID"),
    uint(EDITION_FLAG_HIDDEN, "EditionFlagHidden"),
    uint(EDITION_FLAG_DEFAULT, "EditionFlagDefault"),
    uint(EDITION_FLAG_ORDERED, "EditionFlagOrdered"),
    master(EDITION_DISPLAY, "EditionDisplay", Context::EditionDisplay),
    master(CHAPTER_ATOM, "ChapterAtom", Context::ChapterAtom),
];

static EDITION_DISPLAY_BODY: &[SchemaEntry] = &[
    string(EDITION_STRING, "EditionString"),
    string(EDITION_LANGUAGE_IETF, "EditionLanguageIETF"),
];

static CHAPTER_ATOM_BODY: &[SchemaEntry] = &[
    master(CHAPTER_ATOM, "ChapterAtom", Context::ChapterAtom),
    uint(CHAPTER_UID, "ChapterUID"),
    string(CHAPTER_STRING_UID, "ChapterStringUID"),
    uint(CHAPTER_TIME_START, "ChapterTimeStart"),
    uint(CHAPTER_TIME_END, "ChapterTimeEnd"),
    uint(CHAPTER_FLAG_HIDDEN, "ChapterFlagHidden"),
    uint(CHAPTER_FLAG_ENABLED, "ChapterFlagEnabled"),
    binary(CHAPTER_SEGMENT_UUID, "ChapterSegmentUUID"),
    uint(CHAPTER_SKIP_TYPE, "ChapterSkipType"),
    uint(CHAPTER_SEGMENT_EDITION_UID, "ChapterSegmentEditionUID"),
    uint(CHAPTER_PHYSICAL_EQUIV, "ChapterPhysicalEquiv"),
    master(CHAPTER_TRACK, "ChapterTrack", Context::ChapterTrack),
    master(CHAPTER_DISPLAY, "ChapterDisplay", Context::ChapterDisplay),
    master(CHAP_PROCESS, "ChapProcess", Context::ChapProcess),
];

static CHAPTER_TRACK_BODY: &[SchemaEntry] = &[uint(CHAPTER_TRACK_UID, "ChapterTrackUID")];

static CHAPTER_DISPLAY_BODY: &[SchemaEntry] = &[
    string(CHAP_STRING, "ChapString"),
    string(CHAP_LANGUAGE, "ChapLanguage"),
    string(CHAP_LANGUAGE_BCP47, "ChapLanguageBCP47"),
    string(CHAP_COUNTRY, "ChapCountry"),
];

static CHAP_PROCESS_BODY: &[SchemaEntry] = &[
    uint(CHAP_PROCESS_CODEC_ID, "ChapProcessCodecID"),
    binary(CHAP_PROCESS_PRIVATE, "ChapProcessPrivate"),
    master(
        CHAP_PROCESS_COMMAND,
        "ChapProcessCommand",
        Context::ChapProcessCommand,
    ),
];

static CHAP_PROCESS_COMMAND_BODY: &[SchemaEntry] = &[
    uint(CHAP_PROCESS_TIME, "ChapProcessTime"),
    binary(CHAP_PROCESS_DATA, "ChapProcessData"),
];

static TAGS_BODY: &[SchemaEntry] = &[master(TAG, "Tag", Context::Tag)];

static TAG_BODY: &[SchemaEntry] = &[
    master(TARGETS, "Targets", Context::Targets),
    master(SIMPLE_TAG, "SimpleTag", Context::SimpleTag),
];

static TARGETS_BODY: &[SchemaEntry] = &[
    uint(TARGET_TYPE_VALUE, "TargetTypeValue"),
    string(TARGET_TYPE, "TargetType"),
    uint(TAG_TRACK_UID, "TagTrackUID"),
    uint(TAG_EDITION_UID, "TagEditionUID"),
    uint(TAG_CHAPTER_UID, "TagChapterUID"),
    uint(TAG_ATTACHMENT_UID, "TagAttachmentUID"),
];

static SIMPLE_TAG_BODY: &[SchemaEntry] = &[
    master(SIMPLE_TAG, "SimpleTag", Context::SimpleTag),
    string(TAG_NAME, "TagName"),
    string(TAG_LANGUAGE, "TagLanguage"),
    string(TAG_LANGUAGE_BCP47, "TagLanguageBCP47"),
    uint(TAG_DEFAULT, "TagDefault"),
    uint(TAG_DEFAULT_BOGUS, "TagDefaultBogus"),
    string(TAG_STRING, "TagString"),
    binary(TAG_BINARY, "TagBinary"),
];

/// Indexed view over every context table.
#[derive(Debug)]
pub struct Registry {
    by_context: HashMap<(Context, u32), &'static SchemaEntry>,
    by_id: HashMap<u32, &'static SchemaEntry>,
}

impl Registry {
    /// Build the index from the static tables.
    pub fn new() -> Self {
        let mut by_context = HashMap::new();
        let mut by_id = HashMap::new();

        for context in Context::ALL {
            for entry in context.entries() {
                by_context.insert((context, entry.id), entry);
                by_id.entry(entry.id).or_insert(entry);
            }
        }
        for entry in GLOBAL {
            by_id.entry(entry.id).or_insert(entry);
        }

        tracing::debug!(
            "Built element registry: {} contexts, {} element IDs",
            Context::ALL.len(),
            by_id.len()
        );

        Self { by_context, by_id }
    }

    /// Process-wide registry, built on first use.
    pub fn global() -> &'static Registry {
        static REGISTRY: OnceLock<Registry> = OnceLock::new();
        REGISTRY.get_or_init(Registry::new)
    }

    /// Resolve `id` inside `context`, falling back to the global elements.
    pub fn lookup(&self, context: Context, id: u32) -> Option<&'static SchemaEntry> {
        self.by_context
            .get(&(context, id))
            .copied()
            .or_else(|| GLOBAL.iter().find(|entry| entry.id == id))
    }

    /// Whether `id` is declared in `context` or is a global element.
    pub fn allows(&self, context: Context, id: u32) -> bool {
        self.lookup(context, id).is_some()
    }

    /// Context-free lookup by ID.
    pub fn entry(&self, id: u32) -> Option<&'static SchemaEntry> {
        self.by_id.get(&id).copied()
    }

    /// Matroska name for `id`, if known anywhere in the schema.
    pub fn name(&self, id: u32) -> Option<&'static str> {
        self.entry(id).map(|entry| entry.name)
    }

    /// Number of distinct element IDs.
    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_top_level_context() {
        let registry = Registry::global();
        let ebml = registry.lookup(Context::TopLevel, EBML).unwrap();
        assert_eq!(ebml.name, "EBML");
        assert_eq!(ebml.children, Some(Context::EbmlHeader));

        let segment = registry.lookup(Context::TopLevel, SEGMENT).unwrap();
        assert_eq!(segment.kind, ElementKind::Container);
        assert!(registry.lookup(Context::TopLevel, CLUSTER).is_none());
    }

    #[test]
    fn test_lookup_is_context_sensitive() {
        let registry = Registry::global();
        assert!(registry.lookup(Context::Info, TIMESTAMP_SCALE).is_some());
        assert!(registry.lookup(Context::Tracks, TIMESTAMP_SCALE).is_none());
        assert_eq!(
            registry.lookup(Context::Cluster, TIMESTAMP).unwrap().kind,
            ElementKind::UInt
        );
    }

    #[test]
    fn test_global_elements_everywhere() {
        let registry = Registry::global();
        for context in Context::ALL {
            assert_eq!(registry.lookup(context, VOID).unwrap().name, "Void");
            assert_eq!(registry.lookup(context, CRC_32).unwrap().name, "CRC-32");
        }
    }

    #[test]
    fn test_every_container_has_children() {
        for context in Context::ALL {
            for entry in context.entries() {
                assert_eq!(
                    entry.kind.is_container(),
                    entry.children.is_some(),
                    "{} in {}",
                    entry.name,
                    context
                );
            }
        }
    }

    #[test]
    fn test_recursive_contexts() {
        let registry = Registry::global();
        let atom = registry.lookup(Context::ChapterAtom, CHAPTER_ATOM).unwrap();
        assert_eq!(atom.children, Some(Context::ChapterAtom));
        let tag = registry.lookup(Context::SimpleTag, SIMPLE_TAG).unwrap();
        assert_eq!(tag.children, Some(Context::SimpleTag));
    }

    #[test]
    fn test_scalar_kinds() {
        let registry = Registry::global();
        assert_eq!(registry.entry(DURATION).unwrap().kind, ElementKind::Float);
        assert_eq!(registry.entry(DATE_UTC).unwrap().kind, ElementKind::Date);
        assert_eq!(registry.entry(DOC_TYPE).unwrap().kind, ElementKind::String);
        assert_eq!(registry.entry(REFERENCE_BLOCK).unwrap().kind, ElementKind::Int);
        assert_eq!(registry.entry(CODEC_PRIVATE).unwrap().kind, ElementKind::Binary);
    }

    #[test]
    fn test_names() {
        let registry = Registry::global();
        assert_eq!(registry.name(SIMPLE_BLOCK), Some("SimpleBlock"));
        assert_eq!(registry.name(TRACK_ENTRY), Some("TrackEntry"));
        assert_eq!(registry.name(0x1234_5678), None);
        assert!(registry.len() > 150);
    }

    #[test]
    fn test_no_duplicate_ids_within_context() {
        for context in Context::ALL {
            let entries = context.entries();
            for (i, a) in entries.iter().enumerate() {
                for b in &entries[i + 1..] {
                    assert_ne!(a.id, b.id, "{} and {} in {}", a.name, b.name, context);
                }
            }
        }
    }
}
