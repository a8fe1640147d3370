// Media Provider Traits
//
// Core interface for the provider system

use async_trait::async_trait;

use crate::models::{HomePage, LoadResponse, ResolvedLinks, SearchResponse};

use super::{ProviderContext, ProviderError, Result};

/// Media provider trait
///
/// One implementation per content source. Every operation takes the
/// per-request [`ProviderContext`] and returns a typed result; an empty
/// result list is `Ok`, a failure always carries a reason.
#[async_trait]
pub trait MediaProvider: Send + Sync {
    /// Provider name shown to the host (e.g. "Internet Archive").
    fn name(&self) -> &'static str;

    /// Whether the provider can serve a browseable home page.
    fn has_main_page(&self) -> bool {
        false
    }

    /// Home-page listing for the given 1-based page number.
    async fn main_page(&self, ctx: &ProviderContext<'_>, page: u32) -> Result<HomePage> {
        let _ = (ctx, page);
        Err(ProviderError::Unsupported(format!("{} has no main page", self.name())))
    }

    /// Free-text search.
    async fn search(&self, ctx: &ProviderContext<'_>, query: &str) -> Result<Vec<SearchResponse>>;

    /// Load the detail page behind a search result URL.
    async fn load(&self, ctx: &ProviderContext<'_>, url: &str) -> Result<LoadResponse>;

    /// Resolve an episode/track payload (the serialized `LoadData` emitted
    /// by `load`) into playable links.
    async fn load_links(&self, ctx: &ProviderContext<'_>, data: &str) -> Result<ResolvedLinks>;
}
