// ArcStream Provider Clients
//
// This crate contains pure HTTP client implementations for the content
// sources ArcStream can play from. These clients are independent of the
// host-facing provider traits and can be used standalone or wrapped by the
// adapters in `arcstream-core`.
//
// Architecture:
// - arcstream-providers: Pure HTTP clients + wire types (Internet Archive, Nginx)
// - arcstream-core/provider: MediaProvider trait implementations (adapters calling these clients)
// - arcstream-core/extractor: link extraction over the clients, with caching

// Shared error types
pub mod error;

// Shared quality tiers
pub mod quality;

// HTTP clients (no provider-trait dependency)
pub mod archive;
pub mod nginx;

// Re-export client types for convenience
pub use archive::ArchiveClient;
pub use error::ProviderClientError;
pub use nginx::NginxClient;
pub use quality::QualityTier;
