//! Internet Archive HTTP Client

use std::sync::LazyLock;
use std::time::Duration;

use reqwest::Client;

use crate::error::{check_response, json_with_limit, text_with_limit, ProviderClientError};

use super::types::{MetadataResult, SearchResult};

/// Shared HTTP client for all archive requests (connection pooling).
/// A small redirect budget is kept because the metadata and details
/// endpoints bounce requests between mirror nodes.
static SHARED_CLIENT: LazyLock<Client> = LazyLock::new(|| {
    Client::builder()
        .connect_timeout(Duration::from_secs(10))
        .timeout(Duration::from_secs(30))
        .pool_max_idle_per_host(10)
        .redirect(reqwest::redirect::Policy::limited(5))
        .build()
        .expect("Failed to build archive shared HTTP client")
});

/// Internet Archive HTTP Client
///
/// Provides methods for the three read surfaces the provider consumes:
/// - advanced search (`advancedsearch.php`, JSON)
/// - item metadata (`/metadata/{identifier}`, JSON)
/// - item details page (`/details/{identifier}`, HTML)
pub struct ArchiveClient {
    main_url: String,
    client: Client,
}

impl ArchiveClient {
    /// Create a new archive client (reuses shared connection pool).
    pub fn new(main_url: impl Into<String>) -> Result<Self, ProviderClientError> {
        let main_url: String = main_url.into();
        let main_url = main_url.trim_end_matches('/').to_string();
        url::Url::parse(&main_url)
            .map_err(|e| ProviderClientError::InvalidConfig(format!("invalid main URL: {e}")))?;
        Ok(Self {
            main_url,
            client: SHARED_CLIENT.clone(),
        })
    }

    #[must_use]
    pub fn main_url(&self) -> &str {
        &self.main_url
    }

    /// Run a lucene-like query against the advanced search endpoint.
    pub async fn advanced_search(
        &self,
        query: &str,
        rows: u32,
        page: u32,
    ) -> Result<SearchResult, ProviderClientError> {
        let url = format!("{}/advancedsearch.php", self.main_url);
        let response = self
            .client
            .get(&url)
            .query(&[("q", query)])
            .query(&[("fl[]", "identifier"), ("fl[]", "title"), ("fl[]", "mediatype")])
            .query(&[("rows", rows.to_string()), ("page", page.to_string())])
            .query(&[("output", "json")])
            .send()
            .await?;

        json_with_limit(check_response(response)?).await
    }

    /// Fetch the full metadata record for one item.
    pub async fn metadata(&self, identifier: &str) -> Result<MetadataResult, ProviderClientError> {
        let url = format!("{}/metadata/{identifier}", self.main_url);
        let response = self.client.get(&url).send().await?;
        json_with_limit(check_response(response)?).await
    }

    /// Fetch a page (details page or any other archive URL) as HTML text.
    pub async fn fetch_page(&self, url: &str) -> Result<String, ProviderClientError> {
        let response = self.client.get(url).send().await?;
        text_with_limit(check_response(response)?).await
    }

    /// Details page URL for an identifier.
    #[must_use]
    pub fn details_url(&self, identifier: &str) -> String {
        format!("{}/details/{identifier}", self.main_url)
    }

    /// Poster image URL for an identifier.
    #[must_use]
    pub fn poster_url(&self, identifier: &str) -> String {
        format!("{}/services/img/{identifier}", self.main_url)
    }

    /// Direct download URL for a file, served from the item's storage node.
    #[must_use]
    pub fn download_url(server: &str, dir: &str, file_name: &str) -> String {
        format!("https://{server}{dir}/{file_name}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[test]
    fn test_new_trims_trailing_slash() {
        let client = ArchiveClient::new("https://archive.org/").unwrap();
        assert_eq!(client.main_url(), "https://archive.org");
        assert!(ArchiveClient::new("").is_err());
    }

    #[test]
    fn test_url_helpers() {
        let client = ArchiveClient::new("https://archive.org").unwrap();
        assert_eq!(client.details_url("apollo11"), "https://archive.org/details/apollo11");
        assert_eq!(client.poster_url("apollo11"), "https://archive.org/services/img/apollo11");
        assert_eq!(
            ArchiveClient::download_url("ia1.us.archive.org", "/0/items/apollo11", "launch.mp4"),
            "https://ia1.us.archive.org/0/items/apollo11/launch.mp4"
        );
    }

    #[tokio::test]
    async fn test_advanced_search_builds_query_and_decodes() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/advancedsearch.php"))
            .and(query_param("q", "apollo mediatype:(movies OR audio)"))
            .and(query_param("rows", "26"))
            .and(query_param("page", "1"))
            .and(query_param("output", "json"))
            .respond_with(ResponseTemplate::new(200).set_body_string(
                r#"{"response":{"numFound":1,"docs":[{"identifier":"apollo11","title":"Apollo 11","mediatype":"movies"}]}}"#,
            ))
            .mount(&server)
            .await;

        let client = ArchiveClient::new(server.uri()).unwrap();
        let result = client
            .advanced_search("apollo mediatype:(movies OR audio)", 26, 1)
            .await
            .unwrap();
        assert_eq!(result.response.docs.len(), 1);
        assert_eq!(result.response.docs[0].identifier, "apollo11");
    }

    #[tokio::test]
    async fn test_metadata_http_error_is_typed() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/metadata/missing"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let client = ArchiveClient::new(server.uri()).unwrap();
        let err = client.metadata("missing").await.unwrap_err();
        assert!(matches!(err, ProviderClientError::Http { .. }));
    }

    #[tokio::test]
    async fn test_metadata_malformed_json_is_parse_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/metadata/broken"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>not json</html>"))
            .mount(&server)
            .await;

        let client = ArchiveClient::new(server.uri()).unwrap();
        let err = client.metadata("broken").await.unwrap_err();
        assert!(matches!(err, ProviderClientError::Parse(_)));
    }
}
