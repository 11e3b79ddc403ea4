//! Headline polarity and subjectivity scoring.
//!
//! [`SentimentScorer`] is the seam the classifier depends on. [`LexiconScorer`]
//! is a word-lexicon implementation in the style of adjective-polarity
//! lexicons: each known word carries a polarity in `[-1.0, 1.0]` and a
//! subjectivity in `[0.0, 1.0]`, modifiers adjust the next known word, and
//! the text score is the mean over known words.

/// Polarity in `[-1.0, 1.0]` and subjectivity in `[0.0, 1.0]`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SentimentScores {
    pub polarity: f64,
    pub subjectivity: f64,
}

impl SentimentScores {
    #[must_use]
    pub fn new(polarity: f64, subjectivity: f64) -> Self {
        Self {
            polarity,
            subjectivity,
        }
    }

    /// Score returned for text with nothing to score.
    #[must_use]
    pub fn neutral() -> Self {
        Self::default()
    }
}

/// Maps text to sentiment scores.
///
/// Implementations must be deterministic, side-effect free, and return
/// [`SentimentScores::neutral`] rather than fail on empty or very short text.
pub trait SentimentScorer {
    fn score(&self, text: &str) -> SentimentScores;
}

impl<T: SentimentScorer + ?Sized> SentimentScorer for &T {
    fn score(&self, text: &str) -> SentimentScores {
        (**self).score(text)
    }
}

/// `(word, polarity, subjectivity)`. Keys are lowercase single words.
pub(crate) const LEXICON: &[(&str, f64, f64)] = &[
    // Positive
    ("amazing", 0.6, 0.9),
    ("beautiful", 0.85, 1.0),
    ("best", 1.0, 0.3),
    ("better", 0.5, 0.5),
    ("boost", 0.3, 0.4),
    ("breakthrough", 0.5, 0.6),
    ("celebrate", 0.5, 0.6),
    ("clean", 0.37, 0.69),
    ("excellent", 1.0, 1.0),
    ("fantastic", 0.4, 0.9),
    ("free", 0.4, 0.8),
    ("good", 0.7, 0.6),
    ("great", 0.8, 0.75),
    ("happy", 0.8, 1.0),
    ("hope", 0.3, 0.6),
    ("hopeful", 0.5, 0.7),
    ("impressive", 1.0, 1.0),
    ("improve", 0.3, 0.4),
    ("improved", 0.4, 0.45),
    ("love", 0.5, 0.6),
    ("lucky", 0.33, 1.0),
    ("nice", 0.6, 1.0),
    ("perfect", 1.0, 1.0),
    ("popular", 0.6, 0.8),
    ("positive", 0.23, 0.55),
    ("progress", 0.2, 0.3),
    ("record", 0.1, 0.2),
    ("safe", 0.5, 0.5),
    ("strong", 0.43, 0.73),
    ("success", 0.3, 0.4),
    ("successful", 0.75, 0.95),
    ("welcome", 0.8, 0.9),
    ("win", 0.8, 0.4),
    ("wins", 0.8, 0.4),
    ("wonderful", 1.0, 1.0),
    // Negative
    ("angry", -0.5, 1.0),
    ("attack", -0.4, 0.3),
    ("bad", -0.7, 0.67),
    ("catastrophe", -0.8, 0.8),
    ("catastrophic", -0.9, 0.9),
    ("collapse", -0.5, 0.5),
    ("crisis", -0.5, 0.6),
    ("dangerous", -0.6, 0.9),
    ("dead", -0.2, 0.4),
    ("deadly", -0.6, 0.7),
    ("disaster", -0.7, 0.8),
    ("disastrous", -0.9, 0.9),
    ("fail", -0.5, 0.3),
    ("failed", -0.5, 0.3),
    ("failure", -0.32, 0.3),
    ("fear", -0.4, 0.6),
    ("fears", -0.4, 0.6),
    ("grim", -0.5, 0.8),
    ("horrific", -1.0, 1.0),
    ("poor", -0.4, 0.6),
    ("sad", -0.5, 1.0),
    ("scandal", -0.6, 0.7),
    ("terrible", -1.0, 1.0),
    ("threat", -0.4, 0.5),
    ("toxic", -0.6, 0.8),
    ("warning", -0.3, 0.4),
    ("worse", -0.4, 0.6),
    ("worst", -1.0, 1.0),
    ("wrong", -0.5, 0.9),
    // Near-neutral but opinionated or factual
    ("big", 0.0, 0.1),
    ("first", 0.25, 0.33),
    ("high", 0.16, 0.54),
    ("last", 0.0, 0.07),
    ("low", 0.0, 0.3),
    ("major", 0.06, 0.5),
    ("new", 0.14, 0.45),
    ("old", 0.1, 0.2),
    ("public", 0.0, 0.07),
    ("real", 0.2, 0.3),
];

/// Multipliers applied to the next scored word.
const INTENSIFIERS: &[(&str, f64)] = &[
    ("deeply", 1.4),
    ("extremely", 1.5),
    ("highly", 1.3),
    ("incredibly", 1.5),
    ("quite", 1.1),
    ("really", 1.2),
    ("slightly", 0.5),
    ("somewhat", 0.7),
    ("very", 1.3),
];

const NEGATIONS: &[&str] = &["no", "not", "never", "without"];

/// Words that do not break a pending modifier ("not a good idea").
const TRANSPARENT: &[&str] = &["a", "an", "the"];

/// Negated polarity is flipped and halved.
const NEGATION_FACTOR: f64 = -0.5;

#[derive(Debug, Clone, Copy, Default)]
pub struct LexiconScorer;

impl LexiconScorer {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl SentimentScorer for LexiconScorer {
    /// Split into lowercase words, score known words, return the means.
    ///
    /// Returns `(0.0, 0.0)` when no word is in the lexicon.
    fn score(&self, text: &str) -> SentimentScores {
        let mut polarity_sum = 0.0_f64;
        let mut subjectivity_sum = 0.0_f64;
        let mut scored = 0_u32;

        let mut negate = false;
        let mut intensity: Option<f64> = None;

        for word in tokenize(text) {
            if is_negation(&word) {
                negate = true;
                continue;
            }
            if let Some(factor) = intensifier(&word) {
                intensity = Some(factor);
                continue;
            }
            if TRANSPARENT.contains(&word.as_str()) {
                continue;
            }

            if let Some((polarity, subjectivity)) = lookup(&word) {
                let factor = intensity.unwrap_or(1.0);
                let mut p = (polarity * factor).clamp(-1.0, 1.0);
                let s = (subjectivity * factor).clamp(0.0, 1.0);
                if negate {
                    p *= NEGATION_FACTOR;
                }
                polarity_sum += p;
                subjectivity_sum += s;
                scored += 1;
            }

            negate = false;
            intensity = None;
        }

        if scored == 0 {
            return SentimentScores::neutral();
        }

        let n = f64::from(scored);
        SentimentScores {
            polarity: (polarity_sum / n).clamp(-1.0, 1.0),
            subjectivity: (subjectivity_sum / n).clamp(0.0, 1.0),
        }
    }
}

/// Lowercase words; apostrophes are kept so contractions stay whole.
fn tokenize(text: &str) -> impl Iterator<Item = String> + '_ {
    text.split(|c: char| !(c.is_alphanumeric() || c == '\'' || c == '\u{2019}'))
        .map(|w| {
            w.trim_matches(|c: char| c == '\'' || c == '\u{2019}')
                .replace('\u{2019}', "'")
                .to_lowercase()
        })
        .filter(|w| !w.is_empty())
}

fn is_negation(word: &str) -> bool {
    NEGATIONS.contains(&word) || word.ends_with("n't")
}

fn intensifier(word: &str) -> Option<f64> {
    INTENSIFIERS
        .iter()
        .find(|(w, _)| *w == word)
        .map(|&(_, factor)| factor)
}

fn lookup(word: &str) -> Option<(f64, f64)> {
    LEXICON
        .iter()
        .find(|(w, _, _)| *w == word)
        .map(|&(_, p, s)| (p, s))
}
