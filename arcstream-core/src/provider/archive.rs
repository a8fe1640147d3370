//! Internet Archive MediaProvider Adapter
//!
//! Maps the archive's search and metadata records into the host data model.
//! The interesting part is the load mapping: an item's files are grouped by
//! normalized base name, and the group count decides whether the item is
//! presented as a single movie/track or as a series-shaped playlist.

use std::collections::{BTreeMap, BTreeSet};
use std::sync::Arc;

use arcstream_providers::archive::{classify, ArchiveClient, MetadataResult, SearchDoc};
use arcstream_providers::QualityTier;
use async_trait::async_trait;
use percent_encoding::percent_decode_str;

use crate::config::{ArchiveConfig, CacheConfig};
use crate::extractor::{ArchiveExtractor, LinkExtractor};
use crate::models::{
    CastMember, Episode, ExtractorLink, HomePage, HomePageList, LoadData, LoadResponse,
    MediaDetails, MediaKind, PlaylistKind, ResolvedLinks, SearchResponse,
};

use super::{MediaProvider, ProviderContext, ProviderError, Result};

/// Internet Archive MediaProvider
pub struct ArchiveProvider {
    client: ArchiveClient,
    extractor: Arc<ArchiveExtractor>,
    rows: u32,
}

/// One logical episode/track candidate built from grouped files.
struct EpisodeGroup {
    title: String,
    /// Name of the first file seen for the group; episode numbering is
    /// taken from it.
    lead_file: String,
    urls: BTreeSet<String>,
    poster_url: Option<String>,
}

impl ArchiveProvider {
    pub fn new(archive: &ArchiveConfig, cache: &CacheConfig) -> Result<Self> {
        Ok(Self {
            client: ArchiveClient::new(archive.main_url.as_str())?,
            extractor: Arc::new(ArchiveExtractor::new(&archive.main_url, cache)?),
            rows: archive.rows,
        })
    }

    /// The link extractor registered alongside this provider.
    #[must_use]
    pub fn extractor(&self) -> Arc<ArchiveExtractor> {
        Arc::clone(&self.extractor)
    }

    #[must_use]
    pub fn main_url(&self) -> &str {
        self.client.main_url()
    }

    fn map_search_doc(&self, doc: &SearchDoc) -> SearchResponse {
        let kind = if doc.mediatype.as_deref() == Some("audio") {
            MediaKind::Music
        } else {
            MediaKind::Movie
        };
        SearchResponse {
            title: doc.title.clone().unwrap_or_else(|| doc.identifier.clone()),
            url: self.client.details_url(&doc.identifier),
            kind,
            poster_url: Some(self.client.poster_url(&doc.identifier)),
        }
    }

    fn map_details(&self, result: &MetadataResult, kind: MediaKind) -> MediaDetails {
        let metadata = &result.metadata;
        let tags = if metadata.subject.len() == 1 && metadata.subject[0].contains(';') {
            metadata.subject[0].split(';').map(|tag| tag.trim().to_string()).collect()
        } else {
            metadata.subject.clone()
        };
        MediaDetails {
            title: metadata.title.clone().unwrap_or_else(|| metadata.identifier.clone()),
            url: self.client.details_url(&metadata.identifier),
            kind,
            plot: metadata.description.clone(),
            year: metadata.date.as_deref().and_then(classify::year),
            tags,
            creators: metadata
                .creator
                .iter()
                .map(|name| CastMember { name: name.clone(), role: "Creator".to_string() })
                .collect(),
            poster_url: Some(self.client.poster_url(&metadata.identifier)),
        }
    }

    /// Map a metadata record to a movie or series load response.
    ///
    /// Items whose playable files collapse into a single logical group (or
    /// whose mediatype is audio) stay movie/track-shaped; everything else
    /// becomes a series with one episode per group so the host can resume
    /// and download individual entries.
    fn map_load_response(&self, result: &MetadataResult) -> Result<LoadResponse> {
        let groups = group_files(result);
        let audio = result.metadata.mediatype.as_deref() == Some("audio");

        if groups.len() <= 1 || audio {
            let kind = if audio { MediaKind::Music } else { MediaKind::Movie };
            return Ok(LoadResponse::Movie {
                details: self.map_details(result, kind),
                data: LoadData::details(&result.metadata.identifier),
            });
        }

        let mut episodes = Vec::with_capacity(groups.len());
        for group in groups.into_values() {
            let (season, episode) = classify::episode_info(&group.lead_file);
            episodes.push(Episode {
                data: LoadData::playlist(group.urls, group.title.clone()).encode()?,
                name: group.title,
                season,
                episode,
                poster_url: group.poster_url,
            });
        }
        // Unnumbered entries sort ahead of numbered ones.
        episodes.sort_by(|a, b| (a.season, a.episode).cmp(&(b.season, b.episode)));

        Ok(LoadResponse::Series {
            details: self.map_details(result, MediaKind::Series),
            episodes,
        })
    }

    fn playlist_links(&self, data: &LoadData) -> Vec<ExtractorLink> {
        data.urls
            .iter()
            .map(|url| {
                let file_name = url.rsplit('/').next().unwrap_or(url.as_str());
                let name = if data.urls.len() > 1 {
                    playlist_label(file_name)
                } else {
                    data.name.clone()
                };
                ExtractorLink {
                    source: self.name().to_string(),
                    name,
                    url: url.clone(),
                    quality: QualityTier::from_file_name(file_name),
                }
            })
            .collect()
    }
}

/// Partition an item's playable files into logical groups keyed by
/// normalized base name. `BTreeMap` keeps group order deterministic.
fn group_files(result: &MetadataResult) -> BTreeMap<String, EpisodeGroup> {
    let mut groups: BTreeMap<String, EpisodeGroup> = BTreeMap::new();
    for file in result.files.iter().filter(|file| classify::is_playable_video(file)) {
        let key = classify::grouping_key(&file.name);
        let group = groups.entry(key).or_insert_with(|| EpisodeGroup {
            title: classify::group_title(&file.name),
            lead_file: file.name.clone(),
            urls: BTreeSet::new(),
            poster_url: None,
        });
        group.urls.insert(ArchiveClient::download_url(&result.server, &result.dir, &file.name));
        if group.poster_url.is_none() {
            group.poster_url = thumbnail_url(result, &file.name);
        }
    }
    groups
}

/// Thumbnail derivative generated from a given source file, if the item
/// carries one.
fn thumbnail_url(result: &MetadataResult, file_name: &str) -> Option<String> {
    result
        .files
        .iter()
        .find(|file| file.format == "Thumbnail" && file.original.as_deref() == Some(file_name))
        .map(|thumb| ArchiveClient::download_url(&result.server, &result.dir, &thumb.name))
}

/// Label for one candidate of a multi-URL playlist entry:
/// decoded stem plus extension, `Ep1_512kb.mp4` → `Ep1 512kb (mp4)`.
fn playlist_label(file_name: &str) -> String {
    let decoded = percent_decode_str(file_name).decode_utf8_lossy().into_owned();
    match decoded.rsplit_once('.') {
        Some((stem, extension)) => format!("{} ({extension})", stem.replace('_', " ")),
        None => decoded.replace('_', " "),
    }
}

#[async_trait]
impl MediaProvider for ArchiveProvider {
    fn name(&self) -> &'static str {
        "Internet Archive"
    }

    fn has_main_page(&self) -> bool {
        true
    }

    async fn main_page(&self, _ctx: &ProviderContext<'_>, page: u32) -> Result<HomePage> {
        let result = self.client.advanced_search("mediatype:(movies)", self.rows, page).await?;
        let items: Vec<SearchResponse> =
            result.response.docs.iter().map(|doc| self.map_search_doc(doc)).collect();
        Ok(HomePage {
            lists: vec![HomePageList {
                name: "Featured".to_string(),
                items,
                horizontal_images: true,
            }],
            has_next: false,
        })
    }

    async fn search(&self, _ctx: &ProviderContext<'_>, query: &str) -> Result<Vec<SearchResponse>> {
        let full_query = format!("{query} mediatype:(movies OR audio)");
        let result = self.client.advanced_search(&full_query, self.rows, 1).await?;
        Ok(result.response.docs.iter().map(|doc| self.map_search_doc(doc)).collect())
    }

    async fn load(&self, _ctx: &ProviderContext<'_>, url: &str) -> Result<LoadResponse> {
        let identifier = url
            .trim_end_matches('/')
            .rsplit('/')
            .next()
            .filter(|id| !id.is_empty())
            .ok_or_else(|| ProviderError::InvalidUrl(url.to_string()))?;
        let result = self.client.metadata(identifier).await?;
        self.map_load_response(&result)
    }

    async fn load_links(&self, ctx: &ProviderContext<'_>, data: &str) -> Result<ResolvedLinks> {
        let data = LoadData::decode(data)?;
        match data.kind {
            PlaylistKind::VideoPlaylist => Ok(ResolvedLinks::from_links(self.playlist_links(&data))),
            PlaylistKind::Details => {
                let page_url = self.extractor.extractor_url(&data.name);
                let links = self.extractor.resolve(ctx, &page_url).await?;
                Ok(ResolvedLinks::from_links(links))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use arcstream_providers::archive::{ArchiveFile, ItemMetadata};

    fn provider() -> ArchiveProvider {
        ArchiveProvider::new(&ArchiveConfig::default(), &CacheConfig::default()).unwrap()
    }

    fn video_file(name: &str) -> ArchiveFile {
        ArchiveFile {
            name: name.to_string(),
            source: Some("original".to_string()),
            format: "MPEG4".to_string(),
            original: None,
            length: Some("1200.0".to_string()),
        }
    }

    fn metadata_result(mediatype: &str, files: Vec<ArchiveFile>) -> MetadataResult {
        MetadataResult {
            metadata: ItemMetadata {
                identifier: "test-item".to_string(),
                mediatype: Some(mediatype.to_string()),
                title: Some("Test Item".to_string()),
                description: Some("A test item.".to_string()),
                subject: vec!["sci-fi; public domain".to_string()],
                creator: vec!["Prelinger".to_string()],
                date: Some("1959-01-01".to_string()),
            },
            files,
            dir: "/0/items/test-item".to_string(),
            server: "ia1.us.archive.org".to_string(),
        }
    }

    #[test]
    fn test_single_group_maps_to_movie() {
        let result = metadata_result(
            "movies",
            vec![video_file("Feature_480p.mp4"), video_file("Feature_720p.mp4")],
        );
        let load = provider().map_load_response(&result).unwrap();
        match load {
            LoadResponse::Movie { details, data } => {
                assert_eq!(details.kind, MediaKind::Movie);
                assert_eq!(details.year, Some(1959));
                assert_eq!(details.tags, vec!["sci-fi", "public domain"]);
                assert_eq!(details.creators[0].role, "Creator");
                assert_eq!(data, LoadData::details("test-item"));
            }
            LoadResponse::Series { .. } => panic!("expected movie shape"),
        }
    }

    #[test]
    fn test_multi_group_maps_to_series_with_url_sets() {
        let result = metadata_result(
            "movies",
            vec![
                video_file("Ep1_480p.mp4"),
                video_file("Ep1_720p.mp4"),
                video_file("Ep2_480p.mp4"),
            ],
        );
        let load = provider().map_load_response(&result).unwrap();
        match load {
            LoadResponse::Series { details, episodes } => {
                assert_eq!(details.kind, MediaKind::Series);
                assert_eq!(episodes.len(), 2);
                assert_eq!(episodes[0].name, "Ep1");
                assert_eq!(episodes[1].name, "Ep2");

                let first = LoadData::decode(&episodes[0].data).unwrap();
                assert_eq!(first.urls.len(), 2);
                assert!(first
                    .urls
                    .contains("https://ia1.us.archive.org/0/items/test-item/Ep1_720p.mp4"));
                let second = LoadData::decode(&episodes[1].data).unwrap();
                assert_eq!(second.urls.len(), 1);
            }
            LoadResponse::Movie { .. } => panic!("expected series shape"),
        }
    }

    #[test]
    fn test_audio_never_maps_to_series() {
        let result = metadata_result(
            "audio",
            vec![video_file("Track_01.mp4"), video_file("Track_02.mp4")],
        );
        let load = provider().map_load_response(&result).unwrap();
        match load {
            LoadResponse::Movie { details, .. } => assert_eq!(details.kind, MediaKind::Music),
            LoadResponse::Series { .. } => panic!("audio items stay track-shaped"),
        }
    }

    #[test]
    fn test_short_and_non_video_files_ignored() {
        let mut stub = video_file("Stub.mp4");
        stub.length = Some("3.0".to_string());
        let mut text = video_file("Notes.txt");
        text.format = "Text".to_string();
        let result = metadata_result("movies", vec![video_file("Feature.mp4"), stub, text]);

        let load = provider().map_load_response(&result).unwrap();
        assert!(matches!(load, LoadResponse::Movie { .. }));
    }

    #[test]
    fn test_episodes_sorted_by_season_then_episode() {
        let result = metadata_result(
            "movies",
            vec![
                video_file("Show_S02E01.mp4"),
                video_file("Show_S01E02.mp4"),
                video_file("Show_S01E01.mp4"),
            ],
        );
        let load = provider().map_load_response(&result).unwrap();
        match load {
            LoadResponse::Series { episodes, .. } => {
                let order: Vec<(Option<u32>, Option<u32>)> =
                    episodes.iter().map(|e| (e.season, e.episode)).collect();
                assert_eq!(
                    order,
                    vec![(Some(1), Some(1)), (Some(1), Some(2)), (Some(2), Some(1))]
                );
            }
            LoadResponse::Movie { .. } => panic!("expected series shape"),
        }
    }

    #[test]
    fn test_thumbnail_linked_by_original() {
        let thumb = ArchiveFile {
            name: "Ep1_480p.thumbs/frame001.jpg".to_string(),
            source: Some("derivative".to_string()),
            format: "Thumbnail".to_string(),
            original: Some("Ep1_480p.mp4".to_string()),
            length: None,
        };
        let mut files = vec![video_file("Ep1_480p.mp4"), video_file("Ep2_480p.mp4")];
        files.push(thumb);
        let result = metadata_result("movies", files);

        let load = provider().map_load_response(&result).unwrap();
        match load {
            LoadResponse::Series { episodes, .. } => {
                assert_eq!(
                    episodes[0].poster_url.as_deref(),
                    Some("https://ia1.us.archive.org/0/items/test-item/Ep1_480p.thumbs/frame001.jpg")
                );
                assert!(episodes[1].poster_url.is_none());
            }
            LoadResponse::Movie { .. } => panic!("expected series shape"),
        }
    }

    #[tokio::test]
    async fn test_playlist_links_label_and_quality() {
        let mut urls = BTreeSet::new();
        urls.insert("https://ia1.us.archive.org/0/items/x/Ep1_480p.mp4".to_string());
        urls.insert("https://ia1.us.archive.org/0/items/x/Ep1_1080p.mkv".to_string());
        let data = LoadData::playlist(urls, "Ep1");

        let links = provider().playlist_links(&data);
        assert_eq!(links.len(), 2);
        assert_eq!(links[0].name, "Ep1 1080p (mkv)");
        assert_eq!(links[0].quality, QualityTier::P1080);
        assert_eq!(links[1].quality, QualityTier::P480);
    }

    #[tokio::test]
    async fn test_single_url_playlist_keeps_group_name() {
        let mut urls = BTreeSet::new();
        urls.insert("https://ia1.us.archive.org/0/items/x/Ep2_480p.mp4".to_string());
        let data = LoadData::playlist(urls, "Ep2");

        let links = provider().playlist_links(&data);
        assert_eq!(links.len(), 1);
        assert_eq!(links[0].name, "Ep2");
    }

    #[tokio::test]
    async fn test_load_rejects_empty_identifier() {
        let ctx = ProviderContext::new();
        let err = provider().load(&ctx, "").await.unwrap_err();
        assert!(matches!(err, ProviderError::InvalidUrl(_)));
    }
}
