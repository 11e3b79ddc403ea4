//! Guardian content-search API response types.
//!
//! Every response is wrapped in `{"response": {...}}`. On success
//! `response.status` is `"ok"` and the page entries live at
//! `response.results`; on failure `status` is `"error"` with a `message`.

use serde::Deserialize;

/// Top-level envelope: `{ "response": { ... } }`.
#[derive(Debug, Deserialize)]
pub struct SearchEnvelope {
    pub response: SearchResponse,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResponse {
    pub status: String,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub total: Option<u64>,
    #[serde(default)]
    pub current_page: Option<u32>,
    /// Number of pages available for the query at the requested page size.
    #[serde(default)]
    pub pages: Option<u32>,
    #[serde(default)]
    pub results: Option<Vec<SearchResult>>,
}

/// One entry of `response.results`. Unknown fields are ignored.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult {
    pub web_title: String,
    pub section_name: String,
    pub web_url: String,
    pub api_url: String,
}

/// Error body returned with non-2xx statuses.
#[derive(Debug, Deserialize)]
pub struct ErrorEnvelope {
    pub response: ErrorResponse,
}

#[derive(Debug, Deserialize)]
pub struct ErrorResponse {
    #[serde(default)]
    pub message: Option<String>,
}
