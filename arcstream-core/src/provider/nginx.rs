//! Nginx MediaProvider Adapter
//!
//! Serves a personal nginx autoindex file server. Unlike the archive
//! provider there is no fixed upstream: the server address and basic-auth
//! credentials arrive in the per-request context, materialized from the
//! sync plugin's stored login (`sync::NginxAuth::provider_auth`).

use std::collections::BTreeSet;

use arcstream_providers::archive::classify;
use arcstream_providers::archive::details::has_media_extension;
use arcstream_providers::nginx::{DirEntry, NginxClient};
use arcstream_providers::QualityTier;
use async_trait::async_trait;

use crate::models::{
    Episode, ExtractorLink, HomePage, HomePageList, LoadData, LoadResponse, MediaDetails,
    MediaKind, PlaylistKind, ResolvedLinks, SearchResponse,
};

use super::{MediaProvider, ProviderContext, ProviderError, Result};

/// Nginx MediaProvider
///
/// Stateless; a client is built per request from the context credentials.
#[derive(Default)]
pub struct NginxProvider;

impl NginxProvider {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    fn client_for(&self, ctx: &ProviderContext<'_>) -> Result<NginxClient> {
        let auth = ctx.auth.ok_or_else(|| {
            ProviderError::MissingAuth("no nginx server configured; log in first".to_string())
        })?;
        let client = match (&auth.username, &auth.password) {
            (Some(username), password) => NginxClient::with_credentials(
                auth.base_url.as_str(),
                username.as_str(),
                password.clone().unwrap_or_default(),
            )?,
            (None, _) => NginxClient::new(auth.base_url.as_str())?,
        };
        Ok(client)
    }

    fn map_entry(&self, client: &NginxClient, entry: &DirEntry) -> Option<SearchResponse> {
        if !entry.is_directory() && !has_media_extension(&entry.href) {
            return None;
        }
        let kind = if entry.is_directory() { MediaKind::Series } else { MediaKind::Movie };
        Some(SearchResponse {
            title: entry.name.clone(),
            url: client.url_for(&entry.href),
            kind,
            poster_url: None,
        })
    }

    fn file_link(&self, url: &str, name: &str) -> ExtractorLink {
        let file_name = url.rsplit('/').next().unwrap_or(url);
        ExtractorLink {
            source: self.name().to_string(),
            name: name.to_string(),
            url: url.to_string(),
            quality: QualityTier::from_file_name(file_name),
        }
    }
}

#[async_trait]
impl MediaProvider for NginxProvider {
    fn name(&self) -> &'static str {
        "Nginx"
    }

    fn has_main_page(&self) -> bool {
        true
    }

    async fn main_page(&self, ctx: &ProviderContext<'_>, _page: u32) -> Result<HomePage> {
        let client = self.client_for(ctx)?;
        let entries = client.list("").await?;
        let items: Vec<SearchResponse> =
            entries.iter().filter_map(|entry| self.map_entry(&client, entry)).collect();
        Ok(HomePage {
            lists: vec![HomePageList {
                name: "Files".to_string(),
                items,
                horizontal_images: false,
            }],
            has_next: false,
        })
    }

    /// Autoindex has no search endpoint; the root listing is filtered by
    /// case-insensitive substring instead.
    async fn search(&self, ctx: &ProviderContext<'_>, query: &str) -> Result<Vec<SearchResponse>> {
        let client = self.client_for(ctx)?;
        let needle = query.to_lowercase();
        let entries = client.list("").await?;
        Ok(entries
            .iter()
            .filter(|entry| entry.name.to_lowercase().contains(&needle))
            .filter_map(|entry| self.map_entry(&client, entry))
            .collect())
    }

    async fn load(&self, ctx: &ProviderContext<'_>, url: &str) -> Result<LoadResponse> {
        let client = self.client_for(ctx)?;
        let path = url
            .strip_prefix(client.base_url())
            .ok_or_else(|| ProviderError::InvalidUrl(url.to_string()))?;

        let title = classify::base_name(url.trim_end_matches('/'));
        let details = MediaDetails {
            title: title.clone(),
            url: url.to_string(),
            kind: if url.ends_with('/') { MediaKind::Series } else { MediaKind::Movie },
            plot: None,
            year: None,
            tags: Vec::new(),
            creators: Vec::new(),
            poster_url: None,
        };

        if !url.ends_with('/') {
            // A single file: one playable item.
            let mut urls = BTreeSet::new();
            urls.insert(url.to_string());
            return Ok(LoadResponse::Movie {
                details,
                data: LoadData::playlist(urls, title),
            });
        }

        let entries = client.list(path).await?;
        let media_files: Vec<&DirEntry> = entries
            .iter()
            .filter(|entry| !entry.is_directory() && has_media_extension(&entry.href))
            .collect();

        if media_files.len() <= 1 {
            let mut urls = BTreeSet::new();
            if let Some(file) = media_files.first() {
                urls.insert(format!("{}{}", client.url_for(path), file.href));
            }
            return Ok(LoadResponse::Movie {
                details: MediaDetails { kind: MediaKind::Movie, ..details },
                data: LoadData::playlist(urls, title),
            });
        }

        let mut episodes: Vec<Episode> = media_files
            .iter()
            .map(|file| {
                let (season, episode) = classify::episode_info(&file.name);
                let mut urls = BTreeSet::new();
                urls.insert(format!("{}{}", client.url_for(path), file.href));
                let name = classify::base_name(&file.name);
                Ok(Episode {
                    data: LoadData::playlist(urls, name.clone()).encode()?,
                    name,
                    season,
                    episode,
                    poster_url: None,
                })
            })
            .collect::<Result<_>>()?;
        episodes.sort_by(|a, b| {
            (a.season, a.episode, &a.name).cmp(&(b.season, b.episode, &b.name))
        });

        Ok(LoadResponse::Series { details, episodes })
    }

    async fn load_links(&self, _ctx: &ProviderContext<'_>, data: &str) -> Result<ResolvedLinks> {
        let data = LoadData::decode(data)?;
        if data.kind != PlaylistKind::VideoPlaylist {
            return Err(ProviderError::Unsupported(
                "nginx entries resolve directly, not via an extractor".to_string(),
            ));
        }
        let links = data
            .urls
            .iter()
            .map(|url| self.file_link(url, &data.name))
            .collect();
        Ok(ResolvedLinks::from_links(links))
    }
}
