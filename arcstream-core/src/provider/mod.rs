// Media Provider System
//
// Core traits and types plus the adapters over the HTTP clients:
//
// - traits: the MediaProvider interface every content source implements
// - context: per-request configuration (base URL override, credentials)
// - error: one error taxonomy for every provider operation
// - registry: provider/extractor registration, one of each per plugin
// - archive / nginx: MediaProvider implementations

pub mod context;
pub mod error;
pub mod registry;
pub mod traits;

// MediaProvider implementations (adapters)
pub mod archive;
pub mod nginx;

pub use context::*;
pub use error::*;
pub use registry::*;
pub use traits::*;

pub use archive::ArchiveProvider;
pub use nginx::NginxProvider;

use std::sync::Arc;

use crate::config::Config;

/// Build a registry with the built-in plugins registered: the Internet
/// Archive provider with its link extractor, and the nginx provider.
pub fn builtin_registry(config: &Config) -> Result<ProviderRegistry> {
    let mut registry = ProviderRegistry::new();

    let archive = ArchiveProvider::new(&config.archive, &config.cache)?;
    registry.register_extractor(archive.extractor());
    registry.register_provider(Arc::new(archive));

    registry.register_provider(Arc::new(NginxProvider::new()));

    Ok(registry)
}
