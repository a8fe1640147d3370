//! Coarse quality tiers
//!
//! The archive exposes no structured resolution metadata, so quality is a
//! bucket inferred from filename substrings, not a measured resolution.

use serde::{Deserialize, Serialize};

/// Quality levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum QualityTier {
    #[serde(rename = "1080P")]
    P1080,
    #[serde(rename = "720P")]
    P720,
    #[serde(rename = "480P")]
    P480,
    #[serde(rename = "unknown")]
    Unknown,
}

impl QualityTier {
    /// Infer a tier from a file name.
    ///
    /// Case-insensitive substring containment, anywhere in the name. Checked
    /// highest tier first so "1080" wins over an incidental "480" in the
    /// same name.
    #[must_use]
    pub fn from_file_name(name: &str) -> Self {
        let lower = name.to_ascii_lowercase();
        if lower.contains("1080") {
            Self::P1080
        } else if lower.contains("720") {
            Self::P720
        } else if lower.contains("480") {
            Self::P480
        } else {
            Self::Unknown
        }
    }

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::P1080 => "1080P",
            Self::P720 => "720P",
            Self::P480 => "480P",
            Self::Unknown => "unknown",
        }
    }

    /// Nominal vertical resolution, if the tier carries one.
    #[must_use]
    pub const fn height(&self) -> Option<u32> {
        match self {
            Self::P1080 => Some(1080),
            Self::P720 => Some(720),
            Self::P480 => Some(480),
            Self::Unknown => None,
        }
    }
}
