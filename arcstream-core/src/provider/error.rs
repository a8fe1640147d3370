// Provider Error Types

use arcstream_providers::ProviderClientError;

/// Provider-specific errors
///
/// One taxonomy for every provider operation: callers always see either a
/// successful (possibly empty) result or a typed reason, never a silently
/// swallowed failure.
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error("Missing authentication: {0}")]
    MissingAuth(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Resource not found")]
    NotFound,

    #[error("Provider API error: {0}")]
    Api(String),

    #[error("Unsupported operation: {0}")]
    Unsupported(String),
}

pub type Result<T> = std::result::Result<T, ProviderError>;

impl From<ProviderClientError> for ProviderError {
    fn from(error: ProviderClientError) -> Self {
        match error {
            ProviderClientError::Network(msg) => Self::Network(msg),
            ProviderClientError::Http { status, .. } if status == 404 => Self::NotFound,
            ProviderClientError::Http { .. } => Self::Api(error.to_string()),
            ProviderClientError::Parse(msg) => Self::Parse(msg),
            ProviderClientError::Auth(msg) => Self::MissingAuth(msg),
            ProviderClientError::InvalidConfig(msg) | ProviderClientError::InvalidHeader(msg) => {
                Self::InvalidConfig(msg)
            }
            ProviderClientError::ResponseTooLarge { .. } => Self::Api(error.to_string()),
        }
    }
}

impl From<serde_json::Error> for ProviderError {
    fn from(error: serde_json::Error) -> Self {
        Self::Parse(error.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_error_mapping() {
        let err: ProviderError = ProviderClientError::Network("timed out".to_string()).into();
        assert!(matches!(err, ProviderError::Network(_)));

        let err: ProviderError = ProviderClientError::Http {
            status: arcstream_providers::error::StatusCode::NOT_FOUND,
            url: "https://archive.org/metadata/x".to_string(),
        }
        .into();
        assert!(matches!(err, ProviderError::NotFound));

        let err: ProviderError = ProviderClientError::Parse("bad json".to_string()).into();
        assert!(matches!(err, ProviderError::Parse(_)));
    }
}
