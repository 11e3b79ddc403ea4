//! Text bar chart of the label counts.

use std::fmt::Write;

use gsent_core::SummaryCounts;

/// Width of the longest bar, in glyphs.
const MAX_BAR_WIDTH: usize = 40;

const SENTIMENT_GLYPH: char = '#';
const SUBJECTIVITY_GLYPH: char = '=';

/// Render the five `Neg, Pos, Neu, Obj, Sub` bars, scaled to the largest
/// count. A non-zero count always gets at least one glyph.
pub(crate) fn render(keyword: &str, counts: &SummaryCounts) -> String {
    let bars = counts.bars();
    let max = bars.iter().map(|&(_, n)| n).max().unwrap_or(0);
    let count_width = max.to_string().len();

    let mut out = String::new();
    let _ = writeln!(
        out,
        "Sentiment surrounding the keyword ({keyword}) in the Guardian headlines"
    );
    out.push('\n');

    for (i, (label, count)) in bars.into_iter().enumerate() {
        // First three bars are sentiment, the rest subjectivity.
        let glyph = if i < 3 {
            SENTIMENT_GLYPH
        } else {
            SUBJECTIVITY_GLYPH
        };
        let bar: String = std::iter::repeat_n(glyph, bar_width(count, max)).collect();
        let _ = writeln!(
            out,
            "{label} | {bar:<MAX_BAR_WIDTH$} {count:>count_width$}"
        );
    }

    out.push('\n');
    let _ = writeln!(
        out,
        "{SENTIMENT_GLYPH} Sentiment   {SUBJECTIVITY_GLYPH} Subjectivity"
    );
    out
}

fn bar_width(count: usize, max: usize) -> usize {
    if count == 0 || max == 0 {
        return 0;
    }
    (count * MAX_BAR_WIDTH / max).max(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn counts(sentiment: [usize; 3], subjectivity: [usize; 2]) -> SummaryCounts {
        SummaryCounts {
            negative: sentiment[0],
            positive: sentiment[1],
            neutral: sentiment[2],
            objective: subjectivity[0],
            subjective: subjectivity[1],
            undefined: 0,
        }
    }

    #[test]
    fn title_names_keyword() {
        let chart = render("climate", &SummaryCounts::default());
        assert!(chart.starts_with("Sentiment surrounding the keyword (climate)"));
    }

    #[test]
    fn bars_appear_in_fixed_order_with_glyph_groups() {
        let chart = render("climate", &counts([1, 2, 3], [4, 5]));
        let rows: Vec<&str> = chart.lines().filter(|l| l.contains(" | ")).collect();
        let labels: Vec<&str> = rows.iter().map(|r| &r[..3]).collect();
        assert_eq!(labels, ["Neg", "Pos", "Neu", "Obj", "Sub"]);
        for row in &rows[..3] {
            assert!(row.contains('#') && !row.contains('='), "{row}");
        }
        for row in &rows[3..] {
            assert!(row.contains('=') && !row.contains('#'), "{row}");
        }
    }

    #[test]
    fn largest_count_gets_full_width() {
        let chart = render("k", &counts([10, 5, 0], [1, 0]));
        let neg = chart.lines().find(|l| l.starts_with("Neg")).unwrap();
        let pos = chart.lines().find(|l| l.starts_with("Pos")).unwrap();
        let neu = chart.lines().find(|l| l.starts_with("Neu")).unwrap();
        let obj = chart.lines().find(|l| l.starts_with("Obj")).unwrap();
        assert_eq!(neg.matches('#').count(), MAX_BAR_WIDTH);
        assert_eq!(pos.matches('#').count(), MAX_BAR_WIDTH / 2);
        assert_eq!(neu.matches('#').count(), 0);
        assert_eq!(obj.matches('=').count(), MAX_BAR_WIDTH / 10);
        assert!(neg.trim_end().ends_with("10"));
    }

    #[test]
    fn small_nonzero_count_is_visible() {
        assert_eq!(bar_width(1, 1000), 1);
        assert_eq!(bar_width(0, 1000), 0);
        assert_eq!(bar_width(0, 0), 0);
    }
}
