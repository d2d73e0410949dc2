//! Matroska/WebM element IDs.
//!
//! Values are the encoded IDs including their length marker bits, exactly as
//! they appear on the wire.

// EBML header
pub const EBML: u32 = 0x1A45DFA3;
pub const EBML_VERSION: u32 = 0x4286;
pub const EBML_READ_VERSION: u32 = 0x42F7;
pub const EBML_MAX_ID_LENGTH: u32 = 0x42F2;
pub const EBML_MAX_SIZE_LENGTH: u32 = 0x42F3;
pub const DOC_TYPE: u32 = 0x4282;
pub const DOC_TYPE_VERSION: u32 = 0x4287;
pub const DOC_TYPE_READ_VERSION: u32 = 0x4285;
pub const DOC_TYPE_EXTENSION: u32 = 0x4281;
pub const DOC_TYPE_EXTENSION_NAME: u32 = 0x4283;
pub const DOC_TYPE_EXTENSION_VERSION: u32 = 0x4284;

// Global elements, valid in every container
pub const CRC_32: u32 = 0xBF;
pub const VOID: u32 = 0xEC;

// Segment and its top-level children
pub const SEGMENT: u32 = 0x18538067;
pub const SEEK_HEAD: u32 = 0x114D9B74;
pub const INFO: u32 = 0x1549A966;
pub const TRACKS: u32 = 0x1654AE6B;
pub const CHAPTERS: u32 = 0x1043A770;
pub const CLUSTER: u32 = 0x1F43B675;
pub const CUES: u32 = 0x1C53BB6B;
pub const ATTACHMENTS: u32 = 0x1941A469;
pub const TAGS: u32 = 0x1254C367;

// SeekHead
pub const SEEK: u32 = 0x4DBB;
pub const SEEK_ID: u32 = 0x53AB;
pub const SEEK_POSITION: u32 = 0x53AC;

// Info
pub const SEGMENT_UUID: u32 = 0x73A4;
pub const SEGMENT_FILENAME: u32 = 0x7384;
pub const PREV_UUID: u32 = 0x3CB923;
pub const PREV_FILENAME: u32 = 0x3C83AB;
pub const NEXT_UUID: u32 = 0x3EB923;
pub const NEXT_FILENAME: u32 = 0x3E83BB;
pub const SEGMENT_FAMILY: u32 = 0x4444;
pub const CHAPTER_TRANSLATE: u32 = 0x6924;
pub const CHAPTER_TRANSLATE_ID: u32 = 0x69A5;
pub const CHAPTER_TRANSLATE_CODEC: u32 = 0x69BF;
pub const CHAPTER_TRANSLATE_EDITION_UID: u32 = 0x69FC;
pub const TIMESTAMP_SCALE: u32 = 0x2AD7B1;
pub const DURATION: u32 = 0x4489;
pub const DATE_UTC: u32 = 0x4461;
pub const TITLE: u32 = 0x7BA9;
pub const MUXING_APP: u32 = 0x4D80;
pub const WRITING_APP: u32 = 0x5741;

// Cluster
pub const TIMESTAMP: u32 = 0xE7;
pub const SILENT_TRACKS: u32 = 0x5854;
pub const SILENT_TRACK_NUMBER: u32 = 0x58D7;
pub const POSITION: u32 = 0xA7;
pub const PREV_SIZE: u32 = 0xAB;
pub const SIMPLE_BLOCK: u32 = 0xA3;
pub const BLOCK_GROUP: u32 = 0xA0;
pub const ENCRYPTED_BLOCK: u32 = 0xAF;

// BlockGroup
pub const BLOCK: u32 = 0xA1;
pub const BLOCK_VIRTUAL: u32 = 0xA2;
pub const BLOCK_ADDITIONS: u32 = 0x75A1;
pub const BLOCK_MORE: u32 = 0xA6;
pub const BLOCK_ADD_ID: u32 = 0xEE;
pub const BLOCK_ADDITIONAL: u32 = 0xA5;
pub const BLOCK_DURATION: u32 = 0x9B;
pub const REFERENCE_PRIORITY: u32 = 0xFA;
pub const REFERENCE_BLOCK: u32 = 0xFB;
pub const REFERENCE_VIRTUAL: u32 = 0xFD;
pub const CODEC_STATE: u32 = 0xA4;
pub const DISCARD_PADDING: u32 = 0x75A2;
pub const SLICES: u32 = 0x8E;
pub const TIME_SLICE: u32 = 0xE8;
pub const LACE_NUMBER: u32 = 0xCC;
pub const FRAME_NUMBER: u32 = 0xCD;
pub const BLOCK_ADDITION_ID: u32 = 0xCB;
pub const DELAY: u32 = 0xCE;
pub const SLICE_DURATION: u32 = 0xCF;
pub const REFERENCE_FRAME: u32 = 0xC8;
pub const REFERENCE_OFFSET: u32 = 0xC9;
pub const REFERENCE_TIMESTAMP: u32 = 0xCA;

// Tracks
pub const TRACK_ENTRY: u32 = 0xAE;
pub const TRACK_NUMBER: u32 = 0xD7;
pub const TRACK_UID: u32 = 0x73C5;
pub const TRACK_TYPE: u32 = 0x83;
pub const FLAG_ENABLED: u32 = 0xB9;
pub const FLAG_DEFAULT: u32 = 0x88;
pub const FLAG_FORCED: u32 = 0x55AA;
pub const FLAG_HEARING_IMPAIRED: u32 = 0x55AB;
pub const FLAG_VISUAL_IMPAIRED: u32 = 0x55AC;
pub const FLAG_TEXT_DESCRIPTIONS: u32 = 0x55AD;
pub const FLAG_ORIGINAL: u32 = 0x55AE;
pub const FLAG_COMMENTARY: u32 = 0x55AF;
pub const FLAG_LACING: u32 = 0x9C;
pub const MIN_CACHE: u32 = 0x6DE7;
pub const MAX_CACHE: u32 = 0x6DF8;
pub const DEFAULT_DURATION: u32 = 0x23E383;
pub const DEFAULT_DECODED_FIELD_DURATION: u32 = 0x234E7A;
pub const TRACK_TIMESTAMP_SCALE: u32 = 0x23314F;
pub const TRACK_OFFSET: u32 = 0x537F;
pub const MAX_BLOCK_ADDITION_ID: u32 = 0x55EE;
pub const BLOCK_ADDITION_MAPPING: u32 = 0x41E4;
pub const BLOCK_ADD_ID_VALUE: u32 = 0x41F0;
pub const BLOCK_ADD_ID_NAME: u32 = 0x41A4;
pub const BLOCK_ADD_ID_TYPE: u32 = 0x41E7;
pub const BLOCK_ADD_ID_EXTRA_DATA: u32 = 0x41ED;
pub const NAME: u32 = 0x536E;
pub const LANGUAGE: u32 = 0x22B59C;
pub const LANGUAGE_BCP47: u32 = 0x22B59D;
pub const CODEC_ID: u32 = 0x86;
pub const CODEC_PRIVATE: u32 = 0x63A2;
pub const CODEC_NAME: u32 = 0x258688;
pub const ATTACHMENT_LINK: u32 = 0x7446;
pub const CODEC_SETTINGS: u32 = 0x3A9697;
pub const CODEC_INFO_URL: u32 = 0x3B4040;
pub const CODEC_DOWNLOAD_URL: u32 = 0x26B240;
pub const CODEC_DECODE_ALL: u32 = 0xAA;
pub const TRACK_OVERLAY: u32 = 0x6FAB;
pub const CODEC_DELAY: u32 = 0x56AA;
pub const SEEK_PRE_ROLL: u32 = 0x56BB;
pub const TRACK_TRANSLATE: u32 = 0x6624;
pub const TRACK_TRANSLATE_TRACK_ID: u32 = 0x66A5;
pub const TRACK_TRANSLATE_CODEC: u32 = 0x66BF;
pub const TRACK_TRANSLATE_EDITION_UID: u32 = 0x66FC;
pub const VIDEO: u32 = 0xE0;
pub const AUDIO: u32 = 0xE1;
pub const TRACK_OPERATION: u32 = 0xE2;
pub const TRACK_COMBINE_PLANES: u32 = 0xE3;
pub const TRACK_PLANE: u32 = 0xE4;
pub const TRACK_PLANE_UID: u32 = 0xE5;
pub const TRACK_PLANE_TYPE: u32 = 0xE6;
pub const TRACK_JOIN_BLOCKS: u32 = 0xE9;
pub const TRACK_JOIN_UID: u32 = 0xED;
pub const TRICK_TRACK_UID: u32 = 0xC0;
pub const TRICK_TRACK_SEGMENT_UID: u32 = 0xC1;
pub const TRICK_TRACK_FLAG: u32 = 0xC6;
pub const TRICK_MASTER_TRACK_UID: u32 = 0xC7;
pub const TRICK_MASTER_TRACK_SEGMENT_UID: u32 = 0xC4;
pub const CONTENT_ENCODINGS: u32 = 0x6D80;

// Video
pub const FLAG_INTERLACED: u32 = 0x9A;
pub const FIELD_ORDER: u32 = 0x9D;
pub const STEREO_MODE: u32 = 0x53B8;
pub const ALPHA_MODE: u32 = 0x53C0;
pub const OLD_STEREO_MODE: u32 = 0x53B9;
pub const PIXEL_WIDTH: u32 = 0xB0;
pub const PIXEL_HEIGHT: u32 = 0xBA;
pub const PIXEL_CROP_BOTTOM: u32 = 0x54AA;
pub const PIXEL_CROP_TOP: u32 = 0x54BB;
pub const PIXEL_CROP_LEFT: u32 = 0x54CC;
pub const PIXEL_CROP_RIGHT: u32 = 0x54DD;
pub const DISPLAY_WIDTH: u32 = 0x54B0;
pub const DISPLAY_HEIGHT: u32 = 0x54BA;
pub const DISPLAY_UNIT: u32 = 0x54B2;
pub const ASPECT_RATIO_TYPE: u32 = 0x54B3;
pub const UNCOMPRESSED_FOURCC: u32 = 0x2EB524;
pub const GAMMA_VALUE: u32 = 0x2FB523;
pub const FRAME_RATE: u32 = 0x2383E3;
pub const COLOUR: u32 = 0x55B0;
pub const PROJECTION: u32 = 0x7670;

// Colour
pub const MATRIX_COEFFICIENTS: u32 = 0x55B1;
pub const BITS_PER_CHANNEL: u32 = 0x55B2;
pub const CHROMA_SUBSAMPLING_HORZ: u32 = 0x55B3;
pub const CHROMA_SUBSAMPLING_VERT: u32 = 0x55B4;
pub const CB_SUBSAMPLING_HORZ: u32 = 0x55B5;
pub const CB_SUBSAMPLING_VERT: u32 = 0x55B6;
pub const CHROMA_SITING_HORZ: u32 = 0x55B7;
pub const CHROMA_SITING_VERT: u32 = 0x55B8;
pub const RANGE: u32 = 0x55B9;
pub const TRANSFER_CHARACTERISTICS: u32 = 0x55BA;
pub const PRIMARIES: u32 = 0x55BB;
pub const MAX_CLL: u32 = 0x55BC;
pub const MAX_FALL: u32 = 0x55BD;
pub const MASTERING_METADATA: u32 = 0x55D0;
pub const PRIMARY_R_CHROMATICITY_X: u32 = 0x55D1;
pub const PRIMARY_R_CHROMATICITY_Y: u32 = 0x55D2;
pub const PRIMARY_G_CHROMATICITY_X: u32 = 0x55D3;
pub const PRIMARY_G_CHROMATICITY_Y: u32 = 0x55D4;
pub const PRIMARY_B_CHROMATICITY_X: u32 = 0x55D5;
pub const PRIMARY_B_CHROMATICITY_Y: u32 = 0x55D6;
pub const WHITE_POINT_CHROMATICITY_X: u32 = 0x55D7;
pub const WHITE_POINT_CHROMATICITY_Y: u32 = 0x55D8;
pub const LUMINANCE_MAX: u32 = 0x55D9;
pub const LUMINANCE_MIN: u32 = 0x55DA;

// Projection
pub const PROJECTION_TYPE: u32 = 0x7671;
pub const PROJECTION_PRIVATE: u32 = 0x7672;
pub const PROJECTION_POSE_YAW: u32 = 0x7673;
pub const PROJECTION_POSE_PITCH: u32 = 0x7674;
pub const PROJECTION_POSE_ROLL: u32 = 0x7675;

// Audio
pub const SAMPLING_FREQUENCY: u32 = 0xB5;
pub const OUTPUT_SAMPLING_FREQUENCY: u32 = 0x78B5;
pub const CHANNELS: u32 = 0x9F;
pub const CHANNEL_POSITIONS: u32 = 0x7D7B;
pub const BIT_DEPTH: u32 = 0x6264;
pub const EMPHASIS: u32 = 0x52F1;

// ContentEncodings
pub const CONTENT_ENCODING: u32 = 0x6240;
pub const CONTENT_ENCODING_ORDER: u32 = 0x5031;
pub const CONTENT_ENCODING_SCOPE: u32 = 0x5032;
pub const CONTENT_ENCODING_TYPE: u32 = 0x5033;
pub const CONTENT_COMPRESSION: u32 = 0x5034;
pub const CONTENT_COMP_ALGO: u32 = 0x4254;
pub const CONTENT_COMP_SETTINGS: u32 = 0x4255;
pub const CONTENT_ENCRYPTION: u32 = 0x5035;
pub const CONTENT_ENC_ALGO: u32 = 0x47E1;
pub const CONTENT_ENC_KEY_ID: u32 = 0x47E2;
pub const CONTENT_ENC_AES_SETTINGS: u32 = 0x47E7;
pub const AES_SETTINGS_CIPHER_MODE: u32 = 0x47E8;
pub const CONTENT_SIGNATURE: u32 = 0x47E3;
pub const CONTENT_SIG_KEY_ID: u32 = 0x47E4;
pub const CONTENT_SIG_ALGO: u32 = 0x47E5;
pub const CONTENT_SIG_HASH_ALGO: u32 = 0x47E6;

// Cues
pub const CUE_POINT: u32 = 0xBB;
pub const CUE_TIME: u32 = 0xB3;
pub const CUE_TRACK_POSITIONS: u32 = 0xB7;
pub const CUE_TRACK: u32 = 0xF7;
pub const CUE_CLUSTER_POSITION: u32 = 0xF1;
pub const CUE_RELATIVE_POSITION: u32 = 0xF0;
pub const CUE_DURATION: u32 = 0xB2;
pub const CUE_BLOCK_NUMBER: u32 = 0x5378;
pub const CUE_CODEC_STATE: u32 = 0xEA;
pub const CUE_REFERENCE: u32 = 0xDB;
pub const CUE_REF_TIME: u32 = 0x96;
pub const CUE_REF_CLUSTER: u32 = 0x97;
pub const CUE_REF_NUMBER: u32 = 0x535F;
pub const CUE_REF_CODEC_STATE: u32 = 0xEB;

// Attachments
pub const ATTACHED_FILE: u32 = 0x61A7;
pub const FILE_DESCRIPTION: u32 = 0x467E;
pub const FILE_NAME: u32 = 0x466E;
pub const FILE_MEDIA_TYPE: u32 = 0x4660;
pub const FILE_DATA: u32 = 0x465C;
pub const FILE_UID: u32 = 0x46AE;
pub const FILE_REFERRAL: u32 = 0x4675;
pub const FILE_USED_START_TIME: u32 = 0x4661;
pub const FILE_USED_END_TIME: u32 = 0x4662;

// Chapters
pub const EDITION_ENTRY: u32 = 0x45B9;
pub const EDITION_UID: u32 = 0x45BC;
pub const EDITION_FLAG_HIDDEN: u32 = 0x45BD;
pub const EDITION_FLAG_DEFAULT: u32 = 0x45DB;
pub const EDITION_FLAG_ORDERED: u32 = 0x45DD;
pub const EDITION_DISPLAY: u32 = 0x4520;
pub const EDITION_STRING: u32 = 0x4521;
pub const EDITION_LANGUAGE_IETF: u32 = 0x45E4;
pub const CHAPTER_ATOM: u32 = 0xB6;
pub const CHAPTER_UID: u32 = 0x73C4;
pub const CHAPTER_STRING_UID: u32 = 0x5654;
pub const CHAPTER_TIME_START: u32 = 0x91;
pub const CHAPTER_TIME_END: u32 = 0x92;
pub const CHAPTER_FLAG_HIDDEN: u32 = 0x98;
pub const CHAPTER_FLAG_ENABLED: u32 = 0x4598;
pub const CHAPTER_SEGMENT_UUID: u32 = 0x6E67;
pub const CHAPTER_SKIP_TYPE: u32 = 0x4588;
pub const CHAPTER_SEGMENT_EDITION_UID: u32 = 0x6EBC;
pub const CHAPTER_PHYSICAL_EQUIV: u32 = 0x63C3;
pub const CHAPTER_TRACK: u32 = 0x8F;
pub const CHAPTER_TRACK_UID: u32 = 0x89;
pub const CHAPTER_DISPLAY: u32 = 0x80;
pub const CHAP_STRING: u32 = 0x85;
pub const CHAP_LANGUAGE: u32 = 0x437C;
pub const CHAP_LANGUAGE_BCP47: u32 = 0x437D;
pub const CHAP_COUNTRY: u32 = 0x437E;
pub const CHAP_PROCESS: u32 = 0x6944;
pub const CHAP_PROCESS_CODEC_ID: u32 = 0x6955;
pub const CHAP_PROCESS_PRIVATE: u32 = 0x450D;
pub const CHAP_PROCESS_COMMAND: u32 = 0x6911;
pub const CHAP_PROCESS_TIME: u32 = 0x6922;
pub const CHAP_PROCESS_DATA: u32 = 0x6933;

// Tags
pub const TAG: u32 = 0x7373;
pub const TARGETS: u32 = 0x63C0;
pub const TARGET_TYPE_VALUE: u32 = 0x68CA;
pub const TARGET_TYPE: u32 = 0x63CA;
pub const TAG_TRACK_UID: u32 = 0x63C5;
pub const TAG_EDITION_UID: u32 = 0x63C9;
pub const TAG_CHAPTER_UID: u32 = 0x63C4;
pub const TAG_ATTACHMENT_UID: u32 = 0x63C6;
pub const SIMPLE_TAG: u32 = 0x67C8;
pub const TAG_NAME: u32 = 0x45A3;
pub const TAG_LANGUAGE: u32 = 0x447A;
pub const TAG_LANGUAGE_BCP47: u32 = 0x447B;
pub const TAG_DEFAULT: u32 = 0x4484;
pub const TAG_DEFAULT_BOGUS: u32 = 0x44B4;
pub const TAG_STRING: u32 = 0x4487;
pub const TAG_BINARY: u32 = 0x4485;

/// Whether `id` carries block data that the lacing reconstructor handles.
pub fn is_block(id: u32) -> bool {
    id == SIMPLE_BLOCK || id == BLOCK
}
