//! Decoder configuration.
//!
//! [`DecoderConfig`] is deserialized from JSON. Every field has a default, so
//! an empty `{}` document is valid and yields [`DecoderConfig::default`].

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{Error, Result};

/// How unknown-size elements are treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum UnknownSizePolicy {
    /// Accept unknown-size containers; they close on the first element that
    /// belongs to an ancestor.
    #[default]
    Allow,
    /// Treat any unknown size as a structural error.
    Reject,
}

/// Decoder limits and policies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DecoderConfig {
    /// Longest element ID accepted, in bytes.
    pub max_id_length: usize,
    /// Longest element size field accepted, in bytes.
    pub max_size_length: usize,
    pub unknown_size: UnknownSizePolicy,
    /// Largest leaf payload buffered in memory. Larger leaves are skipped.
    pub max_element_size: u64,
    /// Deepest container nesting allowed.
    pub max_depth: usize,
    /// Accepted DocType values. Anything else raises a diagnostic.
    pub doc_types: Vec<String>,
    /// Split SimpleBlock/Block payloads into frames. When off, blocks are
    /// delivered as binary.
    pub parse_blocks: bool,
}

impl Default for DecoderConfig {
    fn default() -> Self {
        Self {
            max_id_length: 4,
            max_size_length: 8,
            unknown_size: UnknownSizePolicy::Allow,
            max_element_size: 64 * 1024 * 1024,
            max_depth: 32,
            doc_types: vec!["webm".to_string(), "matroska".to_string()],
            parse_blocks: true,
        }
    }
}

impl DecoderConfig {
    /// Deserialize a `DecoderConfig` from a JSON string.
    pub fn from_json(json_str: &str) -> Result<Self> {
        serde_json::from_str(json_str).map_err(|e| Error::config(format!("parse error: {e}")))
    }

    /// Load configuration from a file path, falling back to defaults if the
    /// path is `None`, missing, or unparsable.
    ///
    /// A loaded file is validated: each warning is logged and the length
    /// limits come back clamped to what the decoder enforces.
    pub fn load_or_default(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            return Self::default();
        };

        match std::fs::read_to_string(path) {
            Ok(contents) => match Self::from_json(&contents) {
                Ok(config) => {
                    for warning in config.validate() {
                        tracing::warn!("Decoder config {}: {warning}", path.display());
                    }
                    tracing::debug!("Loaded decoder config from {}", path.display());
                    config.clamped()
                }
                Err(e) => {
                    tracing::warn!("Failed to parse decoder config {}: {e}", path.display());
                    Self::default()
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::info!("No decoder config at {}; using defaults", path.display());
                Self::default()
            }
            Err(e) => {
                tracing::warn!("Failed to read decoder config {}: {e}", path.display());
                Self::default()
            }
        }
    }

    /// Return a list of validation warnings (non-fatal issues).
    ///
    /// Out-of-range values are clamped by the decoder, so none of these stop
    /// decoding.
    pub fn validate(&self) -> Vec<String> {
        let mut warnings = Vec::new();

        if !(1..=4).contains(&self.max_id_length) {
            warnings.push(format!(
                "max_id_length {} is outside 1..=4; clamped",
                self.max_id_length
            ));
        }
        if !(1..=8).contains(&self.max_size_length) {
            warnings.push(format!(
                "max_size_length {} is outside 1..=8; clamped",
                self.max_size_length
            ));
        }
        if self.max_depth == 0 {
            warnings.push("max_depth is 0; no container can be entered".into());
        }
        if self.max_element_size == 0 {
            warnings.push("max_element_size is 0; every non-empty leaf will be skipped".into());
        }
        if self.doc_types.is_empty() {
            warnings.push("doc_types is empty; every DocType will be reported".into());
        }

        warnings
    }

    /// Copy with the length limits pulled into the range the codec supports.
    pub fn clamped(self) -> Self {
        Self {
            max_id_length: self.id_length_limit(),
            max_size_length: self.size_length_limit(),
            ..self
        }
    }

    /// Effective ID length limit.
    pub(crate) fn id_length_limit(&self) -> usize {
        self.max_id_length.clamp(1, 4)
    }

    /// Effective size field length limit.
    pub(crate) fn size_length_limit(&self) -> usize {
        self.max_size_length.clamp(1, 8)
    }

    pub(crate) fn accepts_doc_type(&self, doc_type: &str) -> bool {
        self.doc_types.is_empty() || self.doc_types.iter().any(|d| d == doc_type)
    }
}
