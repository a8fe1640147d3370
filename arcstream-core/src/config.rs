use config::{Config as ConfigBuilder, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};

use crate::provider::ProviderAuth;

/// Application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub archive: ArchiveConfig,
    pub nginx: NginxConfig,
    pub cache: CacheConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ArchiveConfig {
    /// Base URL of the archive site.
    pub main_url: String,
    /// Rows requested per search/home-page query.
    pub rows: u32,
}

impl Default for ArchiveConfig {
    fn default() -> Self {
        Self { main_url: "https://archive.org".to_string(), rows: 26 }
    }
}

/// Static nginx account configuration, used by the CLI when no sync login
/// has been performed.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct NginxConfig {
    pub server: Option<String>,
    pub username: Option<String>,
    pub password: Option<String>,
}

impl NginxConfig {
    /// Per-request provider auth, when a server is configured.
    #[must_use]
    pub fn provider_auth(&self) -> Option<ProviderAuth> {
        let server = self.server.as_deref()?.trim_end_matches('/');
        if server.is_empty() {
            return None;
        }
        Some(ProviderAuth {
            base_url: server.to_string(),
            username: self.username.clone(),
            password: self.password.clone(),
        })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    /// Maximum number of details pages kept in the extractor cache.
    pub page_capacity: u64,
    /// Minutes before a cached page result expires and is re-fetched.
    pub page_ttl_minutes: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self { page_capacity: 256, page_ttl_minutes: 15 }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level or env-filter directive (e.g. "info", "arcstream=debug").
    pub level: String,
    /// "pretty" or "json".
    pub format: String,
    /// Optional log file; stderr when unset.
    pub file_path: Option<String>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: "info".to_string(), format: "pretty".to_string(), file_path: None }
    }
}

impl Config {
    /// Load from a config file, with `ARCSTREAM__`-prefixed environment
    /// variables layered on top.
    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        ConfigBuilder::builder()
            .add_source(File::with_name(path))
            .add_source(Environment::with_prefix("ARCSTREAM").separator("__"))
            .build()?
            .try_deserialize()
    }

    /// Load from environment variables only.
    pub fn from_env() -> Result<Self, ConfigError> {
        ConfigBuilder::builder()
            .add_source(Environment::with_prefix("ARCSTREAM").separator("__"))
            .build()?
            .try_deserialize()
    }

    /// Load configuration for the CLI.
    ///
    /// Search order: explicit path argument, `ARCSTREAM_CONFIG_PATH`,
    /// `./arcstream.toml`, then environment variables over defaults.
    pub fn load(path: Option<&str>) -> anyhow::Result<Self> {
        let path = path
            .map(ToString::to_string)
            .or_else(|| std::env::var("ARCSTREAM_CONFIG_PATH").ok())
            .filter(|p| std::path::Path::new(p).exists())
            .or_else(|| {
                std::path::Path::new("arcstream.toml")
                    .exists()
                    .then(|| "arcstream.toml".to_string())
            });

        let config = match path {
            Some(path) => Self::from_file(&path)?,
            None => Self::from_env().unwrap_or_default(),
        };
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.archive.main_url, "https://archive.org");
        assert_eq!(config.archive.rows, 26);
        assert_eq!(config.cache.page_capacity, 256);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_nginx_provider_auth_requires_server() {
        let nginx = NginxConfig::default();
        assert!(nginx.provider_auth().is_none());

        let nginx = NginxConfig {
            server: Some("https://media.example.com/".to_string()),
            username: Some("user".to_string()),
            password: None,
        };
        let auth = nginx.provider_auth().unwrap();
        assert_eq!(auth.base_url, "https://media.example.com");
        assert_eq!(auth.username.as_deref(), Some("user"));
    }
}
