use serde::{Deserialize, Serialize};

/// Label tallies over a dataset.
///
/// `undefined` holds records whose subjectivity was exactly 0.5; they are
/// never counted as objective or subjective.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryCounts {
    pub negative: usize,
    pub positive: usize,
    pub neutral: usize,
    pub objective: usize,
    pub subjective: usize,
    pub undefined: usize,
}

impl SummaryCounts {
    /// Chart bars in display order: `Neg, Pos, Neu, Obj, Sub`.
    #[must_use]
    pub fn bars(&self) -> [(&'static str, usize); 5] {
        [
            ("Neg", self.negative),
            ("Pos", self.positive),
            ("Neu", self.neutral),
            ("Obj", self.objective),
            ("Sub", self.subjective),
        ]
    }

    #[must_use]
    pub fn sentiment_total(&self) -> usize {
        self.negative + self.positive + self.neutral
    }

    #[must_use]
    pub fn subjectivity_total(&self) -> usize {
        self.objective + self.subjective + self.undefined
    }
}
