//! Score-to-label bucketing.

use gsent_core::{
    published_date_from_api_url, ArticleRecord, RawArticle, SentimentLabel, SubjectivityLabel,
};

use crate::scorer::SentimentScorer;

/// Subjectivity midpoint. Scores exactly here are [`SubjectivityLabel::Undefined`].
pub const SUBJECTIVITY_MIDPOINT: f64 = 0.5;

/// `< 0` is negative, `> 0` positive, anything else (including `0.0`) neutral.
#[must_use]
pub fn sentiment_label(polarity: f64) -> SentimentLabel {
    if polarity < 0.0 {
        SentimentLabel::Negative
    } else if polarity > 0.0 {
        SentimentLabel::Positive
    } else {
        SentimentLabel::Neutral
    }
}

/// `< 0.5` is objective, `> 0.5` subjective, exactly `0.5` undefined.
#[must_use]
pub fn subjectivity_label(subjectivity: f64) -> SubjectivityLabel {
    if subjectivity < SUBJECTIVITY_MIDPOINT {
        SubjectivityLabel::Objective
    } else if subjectivity > SUBJECTIVITY_MIDPOINT {
        SubjectivityLabel::Subjective
    } else {
        SubjectivityLabel::Undefined
    }
}

/// Turns raw articles into labelled records.
pub struct ArticleClassifier<S> {
    scorer: S,
}

impl<S: SentimentScorer> ArticleClassifier<S> {
    pub fn new(scorer: S) -> Self {
        Self { scorer }
    }

    /// Score the title once and derive both labels from that single result.
    ///
    /// An unparseable resource identifier leaves `published_at` empty; the
    /// record is still returned.
    pub fn classify(&self, raw: RawArticle) -> ArticleRecord {
        let scores = self.scorer.score(&raw.title);
        let published_at = published_date_from_api_url(&raw.api_url);
        if published_at.is_none() {
            tracing::debug!(api_url = %raw.api_url, "could not derive publication date");
        }

        ArticleRecord {
            title: raw.title,
            section: raw.section,
            published_at,
            url: raw.web_url,
            polarity: scores.polarity,
            subjectivity: scores.subjectivity,
            sentiment_label: sentiment_label(scores.polarity),
            subjectivity_label: subjectivity_label(scores.subjectivity),
        }
    }
}
