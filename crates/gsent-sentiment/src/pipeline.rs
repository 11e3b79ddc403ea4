//! Run orchestration: fetch pages, classify headlines, accumulate a dataset.

use futures::stream::{self, StreamExt};
use gsent_core::{Dataset, RunRequest};
use gsent_guardian::{ArticleSource, FetchError};

use crate::classifier::ArticleClassifier;
use crate::error::PipelineError;
use crate::scorer::SentimentScorer;

/// What to do with already collected records when a page fails.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FailurePolicy {
    /// Fail the run and discard everything.
    #[default]
    Abort,
    /// Fail the run but hand back the records of the pages before the failure.
    KeepPartial,
}

/// Handling of articles that appear on more than one page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DedupMode {
    /// Keep every record, duplicates included.
    #[default]
    Keep,
    /// Keep only the first record per URL.
    ByUrl,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunOptions {
    /// Maximum page requests in flight. `1` fetches strictly sequentially.
    pub fetch_concurrency: usize,
    pub failure_policy: FailurePolicy,
    pub dedup: DedupMode,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            fetch_concurrency: 1,
            failure_policy: FailurePolicy::Abort,
            dedup: DedupMode::Keep,
        }
    }
}

/// Drives an [`ArticleSource`] over the requested pages and classifies every
/// headline into the run's [`Dataset`].
pub struct PipelineRunner<A, S> {
    source: A,
    classifier: ArticleClassifier<S>,
    options: RunOptions,
}

impl<A, S> PipelineRunner<A, S>
where
    A: ArticleSource,
    S: SentimentScorer,
{
    pub fn new(source: A, scorer: S, options: RunOptions) -> Self {
        Self {
            source,
            classifier: ArticleClassifier::new(scorer),
            options,
        }
    }

    #[must_use]
    pub fn options(&self) -> RunOptions {
        self.options
    }

    /// Run the pipeline for `request`.
    ///
    /// 1. Request pages `1..=page_count` (up to `fetch_concurrency` at once).
    /// 2. Consume results strictly in page order.
    /// 3. Classify each article in the order the API returned it.
    /// 4. Stop early once the API reports no further pages.
    ///
    /// # Errors
    ///
    /// The first failing page ends the run. Under [`FailurePolicy::Abort`]
    /// this is [`PipelineError::Page`]; under [`FailurePolicy::KeepPartial`]
    /// it is [`PipelineError::Partial`] carrying the records collected so far.
    pub async fn run(&self, request: &RunRequest) -> Result<Dataset, PipelineError> {
        let page_count = request.page_count();
        let concurrency = self.options.fetch_concurrency.max(1);

        tracing::info!(
            keyword = request.keyword(),
            from_date = %request.from_date(),
            pages = page_count,
            concurrency,
            "starting run"
        );

        // `buffered` yields in input order regardless of completion order.
        let source = &self.source;
        let mut pages = stream::iter(1..=page_count)
            .map(move |page| async move { (page, source.fetch_page(request, page).await) })
            .buffered(concurrency);

        let mut dataset = Dataset::new();

        while let Some((page, result)) = pages.next().await {
            let search_page = match result {
                Ok(search_page) => search_page,
                Err(source) => return Err(self.fail(page, dataset, source)),
            };

            tracing::info!(page, articles = search_page.articles.len(), "scraping page");

            for raw in search_page.articles {
                let record = self.classifier.classify(raw);
                tracing::info!(
                    page,
                    title = %record.title,
                    sentiment = %record.sentiment_label,
                    subjectivity = %record.subjectivity_label,
                    "classified headline"
                );
                dataset.push(record);
            }

            if let Some(total) = search_page.total_pages {
                if total <= page && page < page_count {
                    tracing::info!(
                        last_page = page,
                        requested = page_count,
                        "no further pages available"
                    );
                    break;
                }
            }
        }

        let dataset = self.apply_dedup(dataset);
        tracing::info!(records = dataset.len(), "run complete");
        Ok(dataset)
    }

    fn fail(&self, page: u32, dataset: Dataset, source: FetchError) -> PipelineError {
        tracing::error!(page, error = %source, "page fetch failed");
        match self.options.failure_policy {
            FailurePolicy::Abort => PipelineError::Page { page, source },
            FailurePolicy::KeepPartial => PipelineError::Partial {
                page,
                dataset: self.apply_dedup(dataset),
                source,
            },
        }
    }

    fn apply_dedup(&self, dataset: Dataset) -> Dataset {
        match self.options.dedup {
            DedupMode::Keep => dataset,
            DedupMode::ByUrl => {
                let before = dataset.len();
                let deduped = dataset.dedup_by_url();
                let dropped = before - deduped.len();
                if dropped > 0 {
                    tracing::debug!(dropped, "removed duplicate articles by URL");
                }
                deduped
            }
        }
    }
}

#[cfg(test)]
#[path = "pipeline_test.rs"]
mod tests;
