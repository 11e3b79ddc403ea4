use std::collections::HashSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One entry of a search results page, before scoring.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawArticle {
    pub title: String,
    pub section: String,
    pub web_url: String,
    /// Canonical resource identifier; the publication date is derived from it.
    pub api_url: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SentimentLabel {
    Negative,
    Neutral,
    Positive,
}

impl std::fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SentimentLabel::Negative => write!(f, "Negative"),
            SentimentLabel::Neutral => write!(f, "Neutral"),
            SentimentLabel::Positive => write!(f, "Positive"),
        }
    }
}

/// Subjectivity bucket. `Undefined` is reserved for a score of exactly 0.5.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SubjectivityLabel {
    Objective,
    Subjective,
    Undefined,
}

impl std::fmt::Display for SubjectivityLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SubjectivityLabel::Objective => write!(f, "Objective"),
            SubjectivityLabel::Subjective => write!(f, "Subjective"),
            SubjectivityLabel::Undefined => write!(f, "Undefined"),
        }
    }
}

/// A scored and labelled headline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArticleRecord {
    pub title: String,
    pub section: String,
    /// `None` when the resource identifier did not yield a parseable date.
    pub published_at: Option<NaiveDate>,
    pub url: String,
    /// In `[-1.0, 1.0]`.
    pub polarity: f64,
    /// In `[0.0, 1.0]`.
    pub subjectivity: f64,
    pub sentiment_label: SentimentLabel,
    pub subjectivity_label: SubjectivityLabel,
}

/// Records of one run, in fetch order (page ascending, then API order).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    records: Vec<ArticleRecord>,
}

impl Dataset {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, record: ArticleRecord) {
        self.records.push(record);
    }

    pub fn extend(&mut self, records: impl IntoIterator<Item = ArticleRecord>) {
        self.records.extend(records);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    #[must_use]
    pub fn records(&self) -> &[ArticleRecord] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ArticleRecord> {
        self.records.iter()
    }

    #[must_use]
    pub fn into_records(self) -> Vec<ArticleRecord> {
        self.records
    }

    /// Drop every record whose URL was already seen, keeping the first one.
    #[must_use]
    pub fn dedup_by_url(mut self) -> Self {
        let mut seen: HashSet<String> = HashSet::new();
        self.records.retain(|record| seen.insert(record.url.clone()));
        self
    }
}

impl From<Vec<ArticleRecord>> for Dataset {
    fn from(records: Vec<ArticleRecord>) -> Self {
        Self { records }
    }
}

impl FromIterator<ArticleRecord> for Dataset {
    fn from_iter<I: IntoIterator<Item = ArticleRecord>>(iter: I) -> Self {
        Self {
            records: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Dataset {
    type Item = &'a ArticleRecord;
    type IntoIter = std::slice::Iter<'a, ArticleRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

impl IntoIterator for Dataset {
    type Item = ArticleRecord;
    type IntoIter = std::vec::IntoIter<ArticleRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.into_iter()
    }
}
