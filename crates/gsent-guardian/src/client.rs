//! HTTP client for the Guardian content-search API.
//!
//! Wraps `reqwest` with query construction, API key handling, retry and
//! typed response decoding. Use [`GuardianClient::with_base_url`] to point
//! at a mock server in tests.

use std::time::Duration;

use gsent_core::config::{DEFAULT_GUARDIAN_BASE_URL, DEFAULT_USER_AGENT};
use gsent_core::{AppConfig, RunRequest};
use reqwest::{Client, Url};

use crate::error::FetchError;
use crate::normalize::normalize_response;
use crate::retry::retry_with_backoff;
use crate::source::{ArticleSource, SearchPage};
use crate::types::{ErrorEnvelope, SearchEnvelope};

const DEFAULT_MAX_RETRIES: u32 = 3;
const DEFAULT_BACKOFF_BASE_MS: u64 = 1_000;

/// Results per page. Fixed for every request.
pub const PAGE_SIZE: u32 = 10;

pub struct GuardianClient {
    client: Client,
    api_key: String,
    search_url: Url,
    max_retries: u32,
    backoff_base_ms: u64,
}

impl GuardianClient {
    /// Creates a client pointed at the production API.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(api_key: &str, timeout_secs: u64) -> Result<Self, FetchError> {
        Self::with_base_url(api_key, timeout_secs, DEFAULT_USER_AGENT, DEFAULT_GUARDIAN_BASE_URL)
    }

    /// Creates a client with a custom base URL (for testing with wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::Http`] if the `reqwest::Client` cannot be
    /// constructed, or [`FetchError::InvalidBaseUrl`] if `base_url` does not
    /// parse.
    pub fn with_base_url(
        api_key: &str,
        timeout_secs: u64,
        user_agent: &str,
        base_url: &str,
    ) -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;

        // Exactly one trailing slash, so `join` appends rather than replaces.
        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let search_url = Url::parse(&normalised)
            .and_then(|base| base.join("search"))
            .map_err(|e| FetchError::InvalidBaseUrl {
                base_url: base_url.to_string(),
                reason: e.to_string(),
            })?;

        Ok(Self {
            client,
            api_key: api_key.to_owned(),
            search_url,
            max_retries: DEFAULT_MAX_RETRIES,
            backoff_base_ms: DEFAULT_BACKOFF_BASE_MS,
        })
    }

    /// Builds a client from the application configuration.
    ///
    /// # Errors
    ///
    /// Same as [`GuardianClient::with_base_url`].
    pub fn from_config(config: &AppConfig) -> Result<Self, FetchError> {
        Ok(Self::with_base_url(
            &config.guardian_api_key,
            config.request_timeout_secs,
            &config.user_agent,
            &config.guardian_base_url,
        )?
        .with_retry(config.max_retries, config.retry_backoff_base_ms))
    }

    /// Overrides the retry budget and back-off base delay.
    #[must_use]
    pub fn with_retry(mut self, max_retries: u32, backoff_base_ms: u64) -> Self {
        self.max_retries = max_retries;
        self.backoff_base_ms = backoff_base_ms;
        self
    }

    /// Fetches one page of search results for `request`.
    ///
    /// Transient failures are retried; the last error is returned once the
    /// retry budget is spent.
    ///
    /// # Errors
    ///
    /// - [`FetchError::Http`] on network failure or timeout.
    /// - [`FetchError::UnexpectedStatus`] on a non-2xx status.
    /// - [`FetchError::ApiError`], [`FetchError::Deserialize`] or
    ///   [`FetchError::MissingField`] when the body has an unexpected shape.
    pub async fn search_page(
        &self,
        request: &RunRequest,
        page: u32,
    ) -> Result<SearchPage, FetchError> {
        let url = self.build_search_url(request, page);
        let url = &url;
        retry_with_backoff(self.max_retries, self.backoff_base_ms, move || {
            self.request_page(url, page)
        })
        .await
    }

    /// Builds the search URL with percent-encoded query parameters.
    fn build_search_url(&self, request: &RunRequest, page: u32) -> Url {
        let mut url = self.search_url.clone();
        url.query_pairs_mut()
            .append_pair("q", request.keyword())
            .append_pair("api-key", &self.api_key)
            .append_pair(
                "from-date",
                &request.from_date().format("%Y-%m-%d").to_string(),
            )
            .append_pair("page-size", &PAGE_SIZE.to_string())
            .append_pair("page", &page.to_string())
            .append_pair("order-by", "relevance");
        url
    }

    async fn request_page(&self, url: &Url, page: u32) -> Result<SearchPage, FetchError> {
        let context = format!("search page {page}");
        tracing::debug!(url = %redact(url), page, "requesting search page");

        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(reqwest::Error::without_url)?;
        let status = response.status();
        let body = response.text().await.map_err(reqwest::Error::without_url)?;

        if !status.is_success() {
            let message = serde_json::from_str::<ErrorEnvelope>(&body)
                .ok()
                .and_then(|e| e.response.message);
            return Err(FetchError::UnexpectedStatus {
                status: status.as_u16(),
                url: redact(url),
                message,
            });
        }

        let envelope: SearchEnvelope =
            serde_json::from_str(&body).map_err(|source| FetchError::Deserialize {
                context: context.clone(),
                source,
            })?;

        let total_pages = envelope.response.pages;
        let articles = normalize_response(envelope.response, &context)?;

        Ok(SearchPage {
            page,
            total_pages,
            articles,
        })
    }
}

impl ArticleSource for GuardianClient {
    async fn fetch_page(&self, request: &RunRequest, page: u32) -> Result<SearchPage, FetchError> {
        self.search_page(request, page).await
    }
}

/// Renders `url` with the `api-key` parameter removed, for logs and errors.
fn redact(url: &Url) -> String {
    let kept: Vec<(String, String)> = url
        .query_pairs()
        .filter(|(k, _)| k != "api-key")
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect();
    let mut redacted = url.clone();
    redacted.query_pairs_mut().clear().extend_pairs(kept);
    redacted.to_string()
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
