//! Headline sentiment pipeline.
//!
//! Fetches results pages through an [`gsent_guardian::ArticleSource`],
//! scores each headline once with a [`SentimentScorer`], buckets the scores
//! into labels and tallies the labels into [`gsent_core::SummaryCounts`].

pub mod aggregate;
pub mod classifier;
pub mod error;
pub mod pipeline;
pub mod scorer;

pub use aggregate::summarize;
pub use classifier::{sentiment_label, subjectivity_label, ArticleClassifier};
pub use error::PipelineError;
pub use pipeline::{DedupMode, FailurePolicy, PipelineRunner, RunOptions};
pub use scorer::{LexiconScorer, SentimentScorer, SentimentScores};
