//! Conversion from wire types into [`RawArticle`]s.

use gsent_core::RawArticle;

use crate::error::FetchError;
use crate::types::{SearchResponse, SearchResult};

/// Validate a decoded response and convert its entries in API order.
///
/// # Errors
///
/// - [`FetchError::ApiError`] when `status` is not `"ok"`.
/// - [`FetchError::MissingField`] when `results` is absent or an entry has a
///   blank title or URL.
pub fn normalize_response(
    response: SearchResponse,
    context: &str,
) -> Result<Vec<RawArticle>, FetchError> {
    if !response.status.eq_ignore_ascii_case("ok") {
        return Err(FetchError::ApiError(
            response
                .message
                .unwrap_or_else(|| format!("status \"{}\"", response.status)),
        ));
    }

    let results = response.results.ok_or_else(|| FetchError::MissingField {
        context: context.to_string(),
        field: "response.results".to_string(),
    })?;

    results
        .into_iter()
        .enumerate()
        .map(|(index, result)| normalize_result(result, &format!("{context} result {index}")))
        .collect()
}

/// Convert one entry, rejecting blank required fields.
///
/// # Errors
///
/// Returns [`FetchError::MissingField`] for a blank `webTitle` or `webUrl`.
pub fn normalize_result(result: SearchResult, context: &str) -> Result<RawArticle, FetchError> {
    let title = result.web_title.trim().to_string();
    if title.is_empty() {
        return Err(FetchError::MissingField {
            context: context.to_string(),
            field: "webTitle".to_string(),
        });
    }
    if result.web_url.trim().is_empty() {
        return Err(FetchError::MissingField {
            context: context.to_string(),
            field: "webUrl".to_string(),
        });
    }

    Ok(RawArticle {
        title,
        section: result.section_name,
        web_url: result.web_url,
        api_url: result.api_url,
    })
}
