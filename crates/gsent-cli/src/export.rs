//! CSV export of a run's dataset.

use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};
use gsent_core::{ArticleRecord, Dataset};
use serde::Serialize;

/// One CSV row. Field order is the column order.
#[derive(Debug, Serialize)]
struct CsvRow<'a> {
    title: &'a str,
    section: &'a str,
    published_at: String,
    url: &'a str,
    polarity: f64,
    subjectivity: f64,
    sentiment_label: String,
    subjectivity_label: String,
}

impl<'a> From<&'a ArticleRecord> for CsvRow<'a> {
    fn from(record: &'a ArticleRecord) -> Self {
        Self {
            title: &record.title,
            section: &record.section,
            published_at: record
                .published_at
                .map(|d| d.format("%Y-%m-%d").to_string())
                .unwrap_or_default(),
            url: &record.url,
            polarity: record.polarity,
            subjectivity: record.subjectivity,
            sentiment_label: record.sentiment_label.to_string(),
            subjectivity_label: record.subjectivity_label.to_string(),
        }
    }
}

const HEADER: [&str; 8] = [
    "title",
    "section",
    "published_at",
    "url",
    "polarity",
    "subjectivity",
    "sentiment_label",
    "subjectivity_label",
];

/// Write `dataset` as CSV to `writer`. The header row is written even for an
/// empty dataset.
///
/// # Errors
///
/// Returns an error if serialization or the underlying writer fails.
pub(crate) fn write_csv<W: Write>(writer: W, dataset: &Dataset) -> anyhow::Result<()> {
    let mut csv = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);
    csv.write_record(HEADER)?;
    for record in dataset {
        csv.serialize(CsvRow::from(record))?;
    }
    csv.flush()?;
    Ok(())
}

/// Replace every keyword character outside `[A-Za-z0-9_-]` with `_`.
pub(crate) fn sanitize_keyword(keyword: &str) -> String {
    keyword
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '_' || c == '-' {
                c
            } else {
                '_'
            }
        })
        .collect()
}

/// `Guardian_{keyword}_sentiment_{timestamp}.csv`
pub(crate) fn csv_file_name(keyword: &str, timestamp: DateTime<Local>) -> String {
    format!(
        "Guardian_{}_sentiment_{}.csv",
        sanitize_keyword(keyword),
        timestamp.format("%Y-%m-%dT%H-%M-%S")
    )
}

/// Create `output_dir` if needed and write the dataset to a timestamped CSV
/// file inside it.
///
/// # Errors
///
/// Returns an error if the directory or file cannot be created or written.
pub(crate) fn export_csv(
    output_dir: &Path,
    keyword: &str,
    timestamp: DateTime<Local>,
    dataset: &Dataset,
) -> anyhow::Result<PathBuf> {
    std::fs::create_dir_all(output_dir).map_err(|e| {
        anyhow::anyhow!(
            "failed to create output directory {}: {e}",
            output_dir.display()
        )
    })?;

    let path = output_dir.join(csv_file_name(keyword, timestamp));
    let file = std::fs::File::create(&path)
        .map_err(|e| anyhow::anyhow!("failed to create {}: {e}", path.display()))?;
    write_csv(std::io::BufWriter::new(file), dataset)?;

    tracing::info!(path = %path.display(), records = dataset.len(), "wrote csv");
    Ok(path)
}
