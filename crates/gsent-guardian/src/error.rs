use thiserror::Error;

/// Errors returned while fetching a results page.
///
/// `Http` and `UnexpectedStatus` are transport-level failures. `ApiError`,
/// `Deserialize` and `MissingField` mean the response arrived but did not
/// have the expected shape (see [`FetchError::is_parse_error`]).
#[derive(Debug, Error)]
pub enum FetchError {
    /// Network, TLS or timeout failure from the underlying HTTP client.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-2xx HTTP status. `url` never contains the API key.
    #[error("unexpected HTTP status {status} from {url}: {}", .message.as_deref().unwrap_or("no message"))]
    UnexpectedStatus {
        status: u16,
        url: String,
        message: Option<String>,
    },

    /// The API answered 2xx with `"status": "error"`.
    #[error("Guardian API error: {0}")]
    ApiError(String),

    /// The body could not be deserialized into the expected type.
    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    /// A required field was absent or blank.
    #[error("missing field `{field}` in {context}")]
    MissingField { context: String, field: String },

    #[error("invalid base URL \"{base_url}\": {reason}")]
    InvalidBaseUrl { base_url: String, reason: String },
}

impl FetchError {
    /// `true` when the response was received but malformed.
    #[must_use]
    pub fn is_parse_error(&self) -> bool {
        matches!(
            self,
            FetchError::ApiError(_) | FetchError::Deserialize { .. } | FetchError::MissingField { .. }
        )
    }
}
