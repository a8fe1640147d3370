//! Bounded page-result cache (Moka in-memory)
//!
//! Keyed by page URL. Capacity-bounded with TTL expiry, so a changed remote
//! page is re-fetched once the entry ages out instead of being served
//! forever.

use std::time::Duration;

use moka::future::CacheBuilder;

/// URL-keyed cache over any cloneable value.
#[derive(Clone)]
pub struct PageCache<V: Clone + Send + Sync + 'static> {
    inner: moka::future::Cache<String, V>,
}

impl<V: Clone + Send + Sync + 'static> PageCache<V> {
    /// Create a cache bounded by entry count and time-to-live.
    #[must_use]
    pub fn new(max_capacity: u64, ttl: Duration) -> Self {
        let inner = CacheBuilder::new(max_capacity).time_to_live(ttl).build();
        Self { inner }
    }

    pub async fn get(&self, url: &str) -> Option<V> {
        self.inner.get(url).await
    }

    pub async fn insert(&self, url: String, value: V) {
        self.inner.insert(url, value).await;
    }

    /// Number of live entries, after flushing pending maintenance. Test
    /// support.
    pub async fn entry_count(&self) -> u64 {
        self.inner.run_pending_tasks().await;
        self.inner.entry_count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_insert_and_get() {
        let cache: PageCache<String> = PageCache::new(8, Duration::from_secs(60));
        assert!(cache.get("https://archive.org/details/x").await.is_none());

        cache
            .insert("https://archive.org/details/x".to_string(), "parsed".to_string())
            .await;
        assert_eq!(
            cache.get("https://archive.org/details/x").await.as_deref(),
            Some("parsed")
        );
        assert_eq!(cache.entry_count().await, 1);
    }

    #[tokio::test]
    async fn test_capacity_bound_evicts() {
        let cache: PageCache<u32> = PageCache::new(2, Duration::from_secs(60));
        for i in 0..10u32 {
            cache.insert(format!("url-{i}"), i).await;
        }
        assert!(cache.entry_count().await <= 2);
    }
}
