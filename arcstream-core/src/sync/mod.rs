// Sync Providers
//
// A sync provider keeps account-scoped login state for a content source.
// Stored records are materialized into per-request `ProviderAuth` values;
// nothing is written to provider-level statics.

pub mod nginx;
pub mod store;

pub use nginx::NginxAuth;
pub use store::{KeyValueStore, MemoryStore};

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::provider::Result;

/// Login form submitted by the host UI.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginForm {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub server: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

/// Opaque token handed back to the host after a successful login.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthToken {
    pub payload: String,
}

/// Current login state for one account, as shown in the host's account
/// switcher.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginInfo {
    pub name: String,
    pub account: u32,
}

/// Sync provider trait
///
/// Login overwrites any previous record for the account; there are no
/// logout, refresh or expiry transitions.
#[async_trait]
pub trait SyncProvider: Send + Sync {
    /// Provider name shown to the host (e.g. "Nginx").
    fn name(&self) -> &'static str;

    /// Stable key prefix for stored records.
    fn id_prefix(&self) -> &'static str;

    /// Validate and persist a login form for an account.
    async fn login(&self, account: u32, form: LoginForm) -> Result<AuthToken>;

    /// Login state for an account, if one is stored.
    fn login_info(&self, account: u32) -> Option<LoginInfo>;
}
