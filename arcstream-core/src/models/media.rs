//! Search results, detail pages and episode payloads

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Kind of a playable title.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Movie,
    Music,
    Series,
    Other,
}

/// One search or browse hit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResponse {
    pub title: String,
    /// Details URL, later passed back to `MediaProvider::load`.
    pub url: String,
    pub kind: MediaKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub poster_url: Option<String>,
}

/// Named row on the provider's home page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HomePageList {
    pub name: String,
    pub items: Vec<SearchResponse>,
    pub horizontal_images: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HomePage {
    pub lists: Vec<HomePageList>,
    pub has_next: bool,
}

/// Cast/crew entry shown on a detail page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CastMember {
    pub name: String,
    pub role: String,
}

/// Fields shared by movie and series detail pages.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MediaDetails {
    pub title: String,
    pub url: String,
    pub kind: MediaKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plot: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub creators: Vec<CastMember>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub poster_url: Option<String>,
}

/// Canonical representation of a loaded detail page.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "shape", rename_all = "lowercase")]
pub enum LoadResponse {
    Movie { details: MediaDetails, data: LoadData },
    Series { details: MediaDetails, episodes: Vec<Episode> },
}

impl LoadResponse {
    #[must_use]
    pub const fn details(&self) -> &MediaDetails {
        match self {
            Self::Movie { details, .. } | Self::Series { details, .. } => details,
        }
    }
}

/// One playable entry of a series-shaped title.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Episode {
    /// Serialized [`LoadData`], round-tripped through the host between
    /// `load` and `load_links`.
    pub data: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub season: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub episode: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub poster_url: Option<String>,
}

/// Per-episode payload handed back by the host for link resolution.
///
/// The URL set is ordered so link emission is deterministic across calls.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoadData {
    #[serde(default)]
    pub urls: BTreeSet<String>,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: PlaylistKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PlaylistKind {
    /// Direct candidate URLs, one logical episode or track.
    VideoPlaylist,
    /// No direct URLs; `name` is an item identifier whose details page the
    /// link extractor should scrape.
    Details,
}

impl LoadData {
    #[must_use]
    pub fn playlist(urls: BTreeSet<String>, name: impl Into<String>) -> Self {
        Self { urls, name: name.into(), kind: PlaylistKind::VideoPlaylist }
    }

    #[must_use]
    pub fn details(identifier: impl Into<String>) -> Self {
        Self { urls: BTreeSet::new(), name: identifier.into(), kind: PlaylistKind::Details }
    }

    pub fn encode(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    pub fn decode(data: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_data_round_trip() {
        let mut urls = BTreeSet::new();
        urls.insert("https://ia1.us.archive.org/0/items/x/Ep1_720p.mp4".to_string());
        urls.insert("https://ia1.us.archive.org/0/items/x/Ep1_480p.mp4".to_string());
        let data = LoadData::playlist(urls, "Ep1");

        let encoded = data.encode().unwrap();
        assert!(encoded.contains(r#""type":"video-playlist""#));
        assert_eq!(LoadData::decode(&encoded).unwrap(), data);
    }

    #[test]
    fn test_load_data_urls_are_sorted() {
        let mut urls = BTreeSet::new();
        urls.insert("https://host/b.mp4".to_string());
        urls.insert("https://host/a.mp4".to_string());
        let data = LoadData::playlist(urls, "x");
        let ordered: Vec<&String> = data.urls.iter().collect();
        assert_eq!(ordered, vec!["https://host/a.mp4", "https://host/b.mp4"]);
    }

    #[test]
    fn test_details_payload_has_no_urls() {
        let data = LoadData::details("apollo11");
        assert!(data.urls.is_empty());
        assert_eq!(data.kind, PlaylistKind::Details);
    }
}
