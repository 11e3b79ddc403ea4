//! Run the pipeline and hand the results to the exporters.

use std::io::Write;
use std::path::PathBuf;

use chrono::{DateTime, Local};
use gsent_core::{Dataset, RunRequest};
use gsent_guardian::ArticleSource;
use gsent_sentiment::{summarize, PipelineRunner, SentimentScorer};

use crate::{chart, export};

/// Where and how to present a finished dataset.
#[derive(Debug, Clone)]
pub(crate) struct OutputSettings {
    pub(crate) output_dir: PathBuf,
    pub(crate) chart: bool,
    pub(crate) summary_json: bool,
}

/// Run the pipeline, then write the CSV and print the chart and summary.
///
/// On a failure that carries a partial dataset, the partial data is exported
/// before the error is returned.
///
/// # Errors
///
/// Returns the pipeline error (nothing is written unless it carried a partial
/// dataset), or an export error.
pub(crate) async fn run_and_export<A, S, W>(
    runner: &PipelineRunner<A, S>,
    request: &RunRequest,
    settings: &OutputSettings,
    timestamp: DateTime<Local>,
    out: &mut W,
) -> anyhow::Result<PathBuf>
where
    A: ArticleSource,
    S: SentimentScorer,
    W: Write,
{
    match runner.run(request).await {
        Ok(dataset) => present(request.keyword(), &dataset, settings, timestamp, out),
        Err(err) => {
            let Some(partial) = err.partial_dataset() else {
                return Err(err.into());
            };
            let path = present(request.keyword(), partial, settings, timestamp, out)?;
            tracing::warn!(
                path = %path.display(),
                records = partial.len(),
                "exported partial results"
            );
            Err(anyhow::Error::new(err).context(format!(
                "run failed; partial results written to {}",
                path.display()
            )))
        }
    }
}

fn present<W: Write>(
    keyword: &str,
    dataset: &Dataset,
    settings: &OutputSettings,
    timestamp: DateTime<Local>,
    out: &mut W,
) -> anyhow::Result<PathBuf> {
    let counts = summarize(dataset);

    if settings.chart {
        write!(out, "{}", chart::render(keyword, &counts))?;
    }
    if settings.summary_json {
        writeln!(out, "{}", serde_json::to_string_pretty(&counts)?)?;
    }

    let path = export::export_csv(&settings.output_dir, keyword, timestamp, dataset)?;
    writeln!(out, "wrote {} records to {}", dataset.len(), path.display())?;
    Ok(path)
}

#[cfg(test)]
#[path = "run_test.rs"]
mod tests;
