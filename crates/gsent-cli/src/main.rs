mod chart;
mod export;
mod run;

use std::path::PathBuf;

use chrono::{Local, NaiveDate};
use clap::{Parser, ValueEnum};
use gsent_core::RunRequest;
use gsent_guardian::GuardianClient;
use gsent_sentiment::{DedupMode, FailurePolicy, LexiconScorer, PipelineRunner, RunOptions};
use tracing_subscriber::EnvFilter;

use crate::run::{run_and_export, OutputSettings};

#[derive(Debug, Parser)]
#[command(name = "gsent")]
#[command(about = "Score the sentiment of Guardian headlines matching a keyword")]
struct Cli {
    /// Search keyword
    keyword: String,

    /// Earliest publication date, `YYYY-MM-DD`
    from_date: NaiveDate,

    /// Number of result pages to fetch (10 articles per page)
    #[arg(value_parser = clap::value_parser!(u32).range(1..))]
    pages: u32,

    /// Directory for the CSV file [default: GSENT_OUTPUT_DIR or .]
    #[arg(long)]
    output_dir: Option<PathBuf>,

    /// Page requests in flight at once [default: GSENT_FETCH_CONCURRENCY or 1]
    #[arg(long, value_parser = clap::value_parser!(u16).range(1..))]
    concurrency: Option<u16>,

    /// On a failed page, still export the pages collected before it
    #[arg(long)]
    keep_partial: bool,

    /// Duplicate handling across pages
    #[arg(long, value_enum, default_value_t = Dedup::Keep)]
    dedup: Dedup,

    /// Print the label counts as JSON
    #[arg(long)]
    summary_json: bool,

    /// Skip the text chart
    #[arg(long)]
    no_chart: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Dedup {
    /// Keep every record
    Keep,
    /// Keep the first record per URL
    Url,
}

impl From<Dedup> for DedupMode {
    fn from(value: Dedup) -> Self {
        match value {
            Dedup::Keep => DedupMode::Keep,
            Dedup::Url => DedupMode::ByUrl,
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let config = gsent_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let request = RunRequest::new(cli.keyword.as_str(), cli.from_date, cli.pages)?;
    let options = RunOptions {
        fetch_concurrency: cli
            .concurrency
            .map_or(config.fetch_concurrency, usize::from),
        failure_policy: if cli.keep_partial {
            FailurePolicy::KeepPartial
        } else {
            FailurePolicy::Abort
        },
        dedup: cli.dedup.into(),
    };
    let settings = OutputSettings {
        output_dir: cli.output_dir.unwrap_or_else(|| config.output_dir.clone()),
        chart: !cli.no_chart,
        summary_json: cli.summary_json,
    };

    let client = GuardianClient::from_config(&config)?;
    let runner = PipelineRunner::new(client, LexiconScorer::new(), options);

    let mut stdout = std::io::stdout().lock();
    run_and_export(&runner, &request, &settings, Local::now(), &mut stdout).await?;
    Ok(())
}
