//! Client for the Guardian content-search API.
//!
//! Fetches one results page at a time for a [`gsent_core::RunRequest`] and
//! normalizes each entry into a [`gsent_core::RawArticle`]. Transient
//! failures are retried with exponential back-off.

pub mod client;
pub mod error;
pub mod normalize;
pub(crate) mod retry;
pub mod source;
pub mod types;

pub use client::{GuardianClient, PAGE_SIZE};
pub use error::FetchError;
pub use source::{ArticleSource, SearchPage};
