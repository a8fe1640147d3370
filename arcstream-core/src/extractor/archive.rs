//! Internet Archive link extractor
//!
//! Scrapes an item's details page for direct download links, with the
//! `og:video` meta tag as fallback for items that expose no download
//! anchors. Resolved link sets are kept in a bounded TTL cache keyed by
//! page URL, so repeat resolutions of an unchanged page cost one fetch.

use std::sync::Arc;
use std::time::Duration;

use arcstream_providers::archive::{details, ArchiveClient};
use arcstream_providers::QualityTier;
use async_trait::async_trait;
use percent_encoding::percent_decode_str;
use tracing::debug;

use crate::cache::PageCache;
use crate::config::CacheConfig;
use crate::models::ExtractorLink;
use crate::provider::{ProviderContext, Result};

use super::LinkExtractor;

pub struct ArchiveExtractor {
    client: ArchiveClient,
    cache: PageCache<Arc<Vec<ExtractorLink>>>,
}

impl ArchiveExtractor {
    pub fn new(main_url: &str, cache: &CacheConfig) -> Result<Self> {
        Ok(Self {
            client: ArchiveClient::new(main_url)?,
            cache: PageCache::new(
                cache.page_capacity,
                Duration::from_secs(cache.page_ttl_minutes * 60),
            ),
        })
    }

    /// Candidate media URLs on a details page: download anchors first,
    /// `og:video` meta tag when there are none.
    fn candidate_urls(&self, html: &str) -> Vec<String> {
        let anchors = details::download_links(html);
        if !anchors.is_empty() {
            return anchors
                .into_iter()
                .map(|href| {
                    if href.starts_with("http://") || href.starts_with("https://") {
                        href
                    } else {
                        format!("{}{href}", self.client.main_url())
                    }
                })
                .collect();
        }
        details::og_video(html).into_iter().collect()
    }

    fn links_from_page(&self, html: &str) -> Vec<ExtractorLink> {
        self.candidate_urls(html)
            .into_iter()
            .map(|url| {
                let file_name = url.rsplit('/').next().unwrap_or(url.as_str()).to_string();
                ExtractorLink {
                    source: self.name().to_string(),
                    name: display_label(&file_name),
                    quality: QualityTier::from_file_name(&file_name),
                    url,
                }
            })
            .collect()
    }
}

/// Percent-decoded file name with the extension moved into a suffix:
/// `Some%20Movie.mp4` becomes `Some Movie (mp4)`.
fn display_label(file_name: &str) -> String {
    let decoded = percent_decode_str(file_name).decode_utf8_lossy().into_owned();
    match decoded.rsplit_once('.') {
        Some((stem, extension)) => format!("{stem} ({extension})"),
        None => decoded,
    }
}

#[async_trait]
impl LinkExtractor for ArchiveExtractor {
    fn name(&self) -> &'static str {
        "Internet Archive"
    }

    fn extractor_url(&self, id: &str) -> String {
        self.client.details_url(id)
    }

    async fn resolve(
        &self,
        _ctx: &ProviderContext<'_>,
        page_url: &str,
    ) -> Result<Vec<ExtractorLink>> {
        if let Some(links) = self.cache.get(page_url).await {
            debug!(page_url, "details page cache hit");
            return Ok((*links).clone());
        }

        let html = self.client.fetch_page(page_url).await?;
        let links = Arc::new(self.links_from_page(&html));
        self.cache.insert(page_url.to_string(), Arc::clone(&links)).await;
        Ok((*links).clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CacheConfig;

    fn extractor() -> ArchiveExtractor {
        ArchiveExtractor::new("https://archive.org", &CacheConfig::default()).unwrap()
    }

    #[test]
    fn test_extractor_url() {
        assert_eq!(
            extractor().extractor_url("apollo11"),
            "https://archive.org/details/apollo11"
        );
    }

    #[test]
    fn test_links_prefer_download_anchors() {
        let html = r#"
            <html><head>
              <meta property="og:video" content="https://archive.org/download/x/fallback.mp4"/>
            </head><body>
              <a href="/download/x/Feature%20Film_1080p.mp4">file</a>
            </body></html>
        "#;
        let links = extractor().links_from_page(html);
        assert_eq!(links.len(), 1);
        assert_eq!(links[0].url, "https://archive.org/download/x/Feature%20Film_1080p.mp4");
        assert_eq!(links[0].name, "Feature Film_1080p (mp4)");
        assert_eq!(links[0].quality, QualityTier::P1080);
    }

    #[test]
    fn test_links_fall_back_to_og_video() {
        let html = r#"
            <html><head>
              <meta property="og:video" content="https://archive.org/download/x/stream_480p.mp4"/>
            </head><body><a href="/details/y">related</a></body></html>
        "#;
        let links = extractor().links_from_page(html);
        assert_eq!(links.len(), 1);
        assert_eq!(links[0].quality, QualityTier::P480);
    }

    #[test]
    fn test_display_label_decodes_and_strips_extension() {
        assert_eq!(display_label("Some%20Movie.mp4"), "Some Movie (mp4)");
        assert_eq!(display_label("bare-name"), "bare-name");
    }
}
