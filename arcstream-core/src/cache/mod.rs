//! Caching layers
//!
//! One bounded in-memory cache backs the link extractor's details-page
//! lookups. Entries are evicted by capacity and TTL; nothing lives for the
//! process lifetime.

pub mod page_cache;

pub use page_cache::PageCache;
