// Link Extractors
//
// An extractor turns a details-page URL into directly playable links. Each
// plugin registers at most one extractor next to its provider.

pub mod archive;

pub use archive::ArchiveExtractor;

use async_trait::async_trait;

use crate::models::ExtractorLink;
use crate::provider::{ProviderContext, Result};

/// Link extractor trait
#[async_trait]
pub trait LinkExtractor: Send + Sync {
    /// Extractor name shown to the host.
    fn name(&self) -> &'static str;

    /// Page URL this extractor scrapes for a given item id.
    fn extractor_url(&self, id: &str) -> String;

    /// Resolve a details-page URL into playable links.
    ///
    /// Returns an empty list when the page exposes no playable media.
    async fn resolve(&self, ctx: &ProviderContext<'_>, page_url: &str)
        -> Result<Vec<ExtractorLink>>;
}
