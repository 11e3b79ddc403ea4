//! Shared data model and configuration for the headline sentiment pipeline.

mod app_config;
pub mod article;
pub mod config;
pub mod dates;
pub mod request;
pub mod summary;

use thiserror::Error;

pub use app_config::AppConfig;
pub use article::{ArticleRecord, Dataset, RawArticle, SentimentLabel, SubjectivityLabel};
pub use config::{load_app_config, load_app_config_from_env};
pub use dates::published_date_from_api_url;
pub use request::{RequestError, RunRequest};
pub use summary::SummaryCounts;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
