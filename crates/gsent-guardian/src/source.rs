use std::future::Future;

use gsent_core::{RawArticle, RunRequest};

use crate::error::FetchError;

/// One fetched results page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchPage {
    /// 1-based page number.
    pub page: u32,
    /// Pages available for the query, when the API reported it.
    pub total_pages: Option<u32>,
    /// Entries in API order.
    pub articles: Vec<RawArticle>,
}

/// Anything that can produce results pages for a run.
///
/// [`crate::GuardianClient`] is the production implementation; tests supply
/// canned pages.
pub trait ArticleSource {
    fn fetch_page(
        &self,
        request: &RunRequest,
        page: u32,
    ) -> impl Future<Output = Result<SearchPage, FetchError>> + Send;
}
