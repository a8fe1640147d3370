//! Nginx autoindex HTTP client

use std::sync::LazyLock;
use std::time::Duration;

use percent_encoding::percent_decode_str;
use reqwest::Client;
use scraper::{Html, Selector};

use crate::error::{check_response, text_with_limit, ProviderClientError};

use super::types::{DirEntry, EntryKind};

/// Shared HTTP client for all nginx requests (connection pooling).
static SHARED_CLIENT: LazyLock<Client> = LazyLock::new(|| {
    Client::builder()
        .connect_timeout(Duration::from_secs(10))
        .timeout(Duration::from_secs(30))
        .pool_max_idle_per_host(10)
        .build()
        .expect("Failed to build nginx shared HTTP client")
});

static INDEX_ANCHOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("a[href]").expect("valid anchor selector"));

/// Nginx autoindex client
///
/// One instance per account configuration: base URL plus optional basic-auth
/// credentials, both supplied explicitly by the caller.
pub struct NginxClient {
    base_url: String,
    username: Option<String>,
    password: Option<String>,
    client: Client,
}

impl NginxClient {
    /// Create a client for an unauthenticated server.
    pub fn new(base_url: impl Into<String>) -> Result<Self, ProviderClientError> {
        let base_url: String = base_url.into();
        let base_url = base_url.trim_end_matches('/').to_string();
        url::Url::parse(&base_url)
            .map_err(|e| ProviderClientError::InvalidConfig(format!("invalid server URL: {e}")))?;
        Ok(Self {
            base_url,
            username: None,
            password: None,
            client: SHARED_CLIENT.clone(),
        })
    }

    /// Create a client with basic-auth credentials.
    pub fn with_credentials(
        base_url: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Result<Self, ProviderClientError> {
        let mut client = Self::new(base_url)?;
        client.username = Some(username.into());
        client.password = Some(password.into());
        Ok(client)
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL for a path inside the served tree.
    #[must_use]
    pub fn url_for(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// List a directory of the autoindex tree.
    ///
    /// `path` is relative to the server root and may be empty for the root
    /// listing.
    pub async fn list(&self, path: &str) -> Result<Vec<DirEntry>, ProviderClientError> {
        let url = self.url_for(path);
        let mut request = self.client.get(&url);
        if let Some(ref username) = self.username {
            request = request.basic_auth(username, self.password.as_deref());
        }

        let response = check_response(request.send().await?)?;
        let html = text_with_limit(response).await?;
        Ok(parse_autoindex(&html))
    }
}

/// Parse an nginx autoindex HTML page into directory entries.
///
/// The parent-directory link and external/query hrefs are skipped; an entry
/// with a trailing slash is a directory.
#[must_use]
pub fn parse_autoindex(html: &str) -> Vec<DirEntry> {
    let document = Html::parse_document(html);
    document
        .select(&INDEX_ANCHOR)
        .filter_map(|element| element.value().attr("href"))
        .filter(|href| {
            !href.is_empty()
                && *href != "../"
                && !href.starts_with('?')
                && !href.starts_with("http://")
                && !href.starts_with("https://")
        })
        .map(|href| {
            let kind = if href.ends_with('/') { EntryKind::Directory } else { EntryKind::File };
            let name = percent_decode_str(href.trim_end_matches('/'))
                .decode_utf8_lossy()
                .into_owned();
            DirEntry { name, href: href.to_string(), kind }
        })
        .collect()
}
