// Provider Registry
//
// Each plugin contributes one media-source provider and, when it can turn
// details pages into playable links, one link extractor. The registry is
// populated once at startup and read-only afterwards.

use std::collections::HashMap;
use std::sync::Arc;

use crate::extractor::LinkExtractor;

use super::MediaProvider;

/// Registry of providers and link extractors, keyed by their names.
#[derive(Default)]
pub struct ProviderRegistry {
    providers: HashMap<String, Arc<dyn MediaProvider>>,
    extractors: HashMap<String, Arc<dyn LinkExtractor>>,
}

impl ProviderRegistry {
    /// Create new empty registry
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a media-source provider under its own name.
    pub fn register_provider(&mut self, provider: Arc<dyn MediaProvider>) {
        self.providers.insert(provider.name().to_string(), provider);
    }

    /// Register a link extractor under its own name.
    pub fn register_extractor(&mut self, extractor: Arc<dyn LinkExtractor>) {
        self.extractors.insert(extractor.name().to_string(), extractor);
    }

    /// Get a provider by name.
    #[must_use]
    pub fn provider(&self, name: &str) -> Option<Arc<dyn MediaProvider>> {
        self.providers.get(name).cloned()
    }

    /// Get an extractor by name.
    #[must_use]
    pub fn extractor(&self, name: &str) -> Option<Arc<dyn LinkExtractor>> {
        self.extractors.get(name).cloned()
    }

    /// Names of all registered providers.
    #[must_use]
    pub fn provider_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.providers.keys().cloned().collect();
        names.sort();
        names
    }
}
