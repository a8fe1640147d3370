//! Playable links and subtitles

use arcstream_providers::QualityTier;
use serde::{Deserialize, Serialize};

/// One directly playable media link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractorLink {
    /// Name of the provider or extractor that produced the link.
    pub source: String,
    /// Display label for the link picker.
    pub name: String,
    pub url: String,
    pub quality: QualityTier,
}

/// Subtitle track attached to a link resolution.
///
/// Carried for host-interface completeness; the archive providers emit
/// none.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubtitleFile {
    pub lang: String,
    pub url: String,
}

/// Result of resolving one episode/track payload.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ResolvedLinks {
    pub links: Vec<ExtractorLink>,
    pub subtitles: Vec<SubtitleFile>,
}

impl ResolvedLinks {
    #[must_use]
    pub fn from_links(links: Vec<ExtractorLink>) -> Self {
        Self { links, subtitles: Vec::new() }
    }
}
