// ArcStream Core
//
// Host-facing layer of the provider system:
//
// Tier 1: arcstream-providers (pure HTTP clients)
//   - archive::ArchiveClient, nginx::NginxClient
//   - Independent libraries with no provider-trait dependency
//
// Tier 2: arcstream-core/provider (MediaProvider adapters)
//   - ArchiveProvider, NginxProvider
//   - Call arcstream-providers clients and map wire records into the host
//     data model (search results, load responses, playable links)
//
// Tier 3: arcstream-core/extractor, cache, sync
//   - link extraction over cached details pages
//   - the nginx credential sync plugin and its key-value store

pub mod cache;
pub mod config;
pub mod extractor;
pub mod logging;
pub mod models;
pub mod provider;
pub mod sync;

pub use config::Config;
pub use provider::{ProviderContext, ProviderError, ProviderRegistry};
