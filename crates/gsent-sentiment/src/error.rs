use gsent_core::Dataset;
use gsent_guardian::FetchError;
use thiserror::Error;

/// A run that did not complete.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// A page failed and the run was aborted; nothing was kept.
    #[error("page {page} failed: {source}")]
    Page {
        page: u32,
        #[source]
        source: FetchError,
    },

    /// A page failed; `dataset` holds the records of the pages before it.
    #[error("page {page} failed after {} records were collected: {source}", .dataset.len())]
    Partial {
        page: u32,
        dataset: Dataset,
        #[source]
        source: FetchError,
    },
}

impl PipelineError {
    /// The page whose fetch failed.
    #[must_use]
    pub fn page(&self) -> u32 {
        match self {
            PipelineError::Page { page, .. } | PipelineError::Partial { page, .. } => *page,
        }
    }

    #[must_use]
    pub fn fetch_error(&self) -> &FetchError {
        match self {
            PipelineError::Page { source, .. } | PipelineError::Partial { source, .. } => source,
        }
    }

    /// Records collected before the failure, if the run kept them.
    #[must_use]
    pub fn partial_dataset(&self) -> Option<&Dataset> {
        match self {
            PipelineError::Page { .. } => None,
            PipelineError::Partial { dataset, .. } => Some(dataset),
        }
    }
}
