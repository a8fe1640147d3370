// Provider Context
//
// Per-request configuration for provider execution. Account-scoped state
// (server override, credentials) travels through here instead of living in
// provider-level statics, so two accounts can be served concurrently
// without leaking configuration into each other.

use serde::{Deserialize, Serialize};

/// Account-scoped provider configuration, typically materialized by a sync
/// plugin login (see `sync::NginxAuth::provider_auth`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderAuth {
    /// Server the provider should talk to instead of its default.
    pub base_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

/// Provider execution context
#[derive(Debug, Clone, Copy, Default)]
pub struct ProviderContext<'a> {
    /// Base URL override for providers with a configurable server.
    pub base_url: Option<&'a str>,

    /// Credentials for providers that require them.
    pub auth: Option<&'a ProviderAuth>,
}

impl<'a> ProviderContext<'a> {
    /// Create new context with defaults
    #[must_use]
    pub const fn new() -> Self {
        Self { base_url: None, auth: None }
    }

    /// Set base URL override
    #[must_use]
    pub const fn with_base_url(mut self, base_url: &'a str) -> Self {
        self.base_url = Some(base_url);
        self
    }

    /// Set account credentials
    #[must_use]
    pub const fn with_auth(mut self, auth: &'a ProviderAuth) -> Self {
        self.auth = Some(auth);
        self
    }
}
