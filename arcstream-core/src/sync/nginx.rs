//! Nginx credential sync
//!
//! Persists one `{server, username, password}` record per account and turns
//! it into the per-request `ProviderAuth` the nginx provider consumes.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use crate::provider::{ProviderAuth, ProviderError, Result};

use super::{AuthToken, KeyValueStore, LoginForm, LoginInfo, SyncProvider};

/// Store key for the nginx login record.
pub const NGINX_USER_KEY: &str = "nginx_user";

pub struct NginxAuth {
    store: Arc<dyn KeyValueStore>,
}

impl NginxAuth {
    #[must_use]
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    fn stored_form(&self, account: u32) -> Option<LoginForm> {
        let json = self.store.get(account, NGINX_USER_KEY)?;
        serde_json::from_str(&json).ok()
    }

    /// Materialize the stored login into per-request provider
    /// configuration. Returns `None` when the account has never logged in.
    #[must_use]
    pub fn provider_auth(&self, account: u32) -> Option<ProviderAuth> {
        let form = self.stored_form(account)?;
        let server = form.server?;
        Some(ProviderAuth {
            base_url: server.trim_end_matches('/').to_string(),
            username: form.username,
            password: form.password,
        })
    }
}

#[async_trait]
impl SyncProvider for NginxAuth {
    fn name(&self) -> &'static str {
        "Nginx"
    }

    fn id_prefix(&self) -> &'static str {
        "nginx"
    }

    async fn login(&self, account: u32, form: LoginForm) -> Result<AuthToken> {
        if form.server.as_deref().is_none_or(|server| server.trim().is_empty()) {
            return Err(ProviderError::MissingField("server"));
        }

        let payload = serde_json::to_string(&form)?;
        self.store.set(account, NGINX_USER_KEY, payload.clone());
        debug!(account, "nginx login stored");
        Ok(AuthToken { payload })
    }

    fn login_info(&self, account: u32) -> Option<LoginInfo> {
        let form = self.stored_form(account)?;
        let name = form
            .username
            .filter(|username| !username.is_empty())
            .or(form.server)?;
        Some(LoginInfo { name, account })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sync::MemoryStore;

    fn auth_provider() -> NginxAuth {
        NginxAuth::new(Arc::new(MemoryStore::new()))
    }

    fn form(server: &str, username: &str) -> LoginForm {
        LoginForm {
            server: Some(server.to_string()),
            username: Some(username.to_string()),
            password: Some("secret".to_string()),
        }
    }

    #[tokio::test]
    async fn test_login_requires_server() {
        let auth = auth_provider();
        let err = auth.login(0, LoginForm::default()).await.unwrap_err();
        assert!(matches!(err, ProviderError::MissingField("server")));

        let blank = LoginForm { server: Some("  ".to_string()), ..LoginForm::default() };
        let err = auth.login(0, blank).await.unwrap_err();
        assert!(matches!(err, ProviderError::MissingField("server")));
        assert!(auth.login_info(0).is_none());
    }

    #[tokio::test]
    async fn test_login_persists_and_reports_info() {
        let auth = auth_provider();
        let token = auth.login(0, form("https://media.example.com/", "alice")).await.unwrap();
        assert!(token.payload.contains("alice"));

        let info = auth.login_info(0).unwrap();
        assert_eq!(info.name, "alice");
        assert_eq!(info.account, 0);
    }

    #[tokio::test]
    async fn test_login_info_falls_back_to_server() {
        let auth = auth_provider();
        let form = LoginForm {
            server: Some("https://media.example.com".to_string()),
            username: None,
            password: None,
        };
        auth.login(1, form).await.unwrap();
        assert_eq!(auth.login_info(1).unwrap().name, "https://media.example.com");
    }

    #[tokio::test]
    async fn test_relogin_overwrites_and_auth_reflects_latest() {
        let auth = auth_provider();
        auth.login(0, form("https://old.example.com/", "alice")).await.unwrap();
        auth.login(0, form("https://new.example.com/", "bob")).await.unwrap();

        let provider_auth = auth.provider_auth(0).unwrap();
        assert_eq!(provider_auth.base_url, "https://new.example.com");
        assert_eq!(provider_auth.username.as_deref(), Some("bob"));
        assert_eq!(provider_auth.password.as_deref(), Some("secret"));
    }

    #[tokio::test]
    async fn test_provider_auth_none_before_login() {
        assert!(auth_provider().provider_auth(0).is_none());
    }
}
