use chrono::NaiveDate;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RequestError {
    #[error("keyword must not be blank")]
    BlankKeyword,

    #[error("page count must be at least 1")]
    ZeroPages,
}

/// Parameters of one pipeline run. Immutable once constructed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunRequest {
    keyword: String,
    from_date: NaiveDate,
    page_count: u32,
}

impl RunRequest {
    /// # Errors
    ///
    /// Returns [`RequestError::BlankKeyword`] for an empty or whitespace-only
    /// keyword and [`RequestError::ZeroPages`] when `page_count` is 0.
    pub fn new(
        keyword: impl Into<String>,
        from_date: NaiveDate,
        page_count: u32,
    ) -> Result<Self, RequestError> {
        let keyword = keyword.into();
        if keyword.trim().is_empty() {
            return Err(RequestError::BlankKeyword);
        }
        if page_count == 0 {
            return Err(RequestError::ZeroPages);
        }
        Ok(Self {
            keyword,
            from_date,
            page_count,
        })
    }

    #[must_use]
    pub fn keyword(&self) -> &str {
        &self.keyword
    }

    #[must_use]
    pub fn from_date(&self) -> NaiveDate {
        self.from_date
    }

    #[must_use]
    pub fn page_count(&self) -> u32 {
        self.page_count
    }
}
