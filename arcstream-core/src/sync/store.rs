//! Account-scoped key-value store
//!
//! The host owns credential persistence and hands plugins a namespaced
//! store. `MemoryStore` is the in-process implementation used by the CLI
//! and by tests.

use dashmap::DashMap;

/// Namespaced key-value store, keyed by (account index, key).
pub trait KeyValueStore: Send + Sync {
    fn get(&self, account: u32, key: &str) -> Option<String>;
    fn set(&self, account: u32, key: &str, value: String);
    fn remove(&self, account: u32, key: &str);
}

/// In-memory store backed by a concurrent map.
#[derive(Default)]
pub struct MemoryStore {
    entries: DashMap<(u32, String), String>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, account: u32, key: &str) -> Option<String> {
        self.entries.get(&(account, key.to_string())).map(|entry| entry.clone())
    }

    fn set(&self, account: u32, key: &str, value: String) {
        self.entries.insert((account, key.to_string()), value);
    }

    fn remove(&self, account: u32, key: &str) {
        self.entries.remove(&(account, key.to_string()));
    }
}
