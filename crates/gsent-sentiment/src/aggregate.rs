use gsent_core::{Dataset, SentimentLabel, SubjectivityLabel, SummaryCounts};

/// Tally sentiment and subjectivity labels in one pass.
///
/// `Undefined` subjectivity goes to `undefined`, never to objective or
/// subjective.
#[must_use]
pub fn summarize(dataset: &Dataset) -> SummaryCounts {
    let mut counts = SummaryCounts::default();
    for record in dataset {
        match record.sentiment_label {
            SentimentLabel::Negative => counts.negative += 1,
            SentimentLabel::Positive => counts.positive += 1,
            SentimentLabel::Neutral => counts.neutral += 1,
        }
        match record.subjectivity_label {
            SubjectivityLabel::Objective => counts.objective += 1,
            SubjectivityLabel::Subjective => counts.subjective += 1,
            SubjectivityLabel::Undefined => counts.undefined += 1,
        }
    }
    counts
}
