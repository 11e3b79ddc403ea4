//! Publication date derivation from Guardian resource identifiers.
//!
//! Identifiers look like `https://content.guardianapis.com/world/2023/jan/05/slug`.
//! Splitting on `/` puts the year, month and day at positions 4, 5 and 6.

use chrono::NaiveDate;

const YEAR_SEGMENT: usize = 4;
const MONTH_SEGMENT: usize = 5;
const DAY_SEGMENT: usize = 6;

const MONTHS: [&str; 12] = [
    "jan", "feb", "mar", "apr", "may", "jun", "jul", "aug", "sep", "oct", "nov", "dec",
];

/// Derive the publication date from an article's resource identifier.
///
/// Month segments are accepted as short or long English names in any case
/// (`jan`, `January`, `SEPT`) or as numbers. Returns `None` when a segment is
/// missing or the three segments do not form a valid calendar date.
#[must_use]
pub fn published_date_from_api_url(api_url: &str) -> Option<NaiveDate> {
    let segments: Vec<&str> = api_url.split('/').collect();
    let year = segments.get(YEAR_SEGMENT)?;
    let month = segments.get(MONTH_SEGMENT)?;
    let day = segments.get(DAY_SEGMENT)?;
    parse_lenient_date(year, month, day)
}

fn parse_lenient_date(year: &str, month: &str, day: &str) -> Option<NaiveDate> {
    let year: i32 = year.trim().parse().ok()?;
    let month = parse_month(month.trim())?;
    let day: u32 = day.trim().parse().ok()?;
    NaiveDate::from_ymd_opt(year, month, day)
}

fn parse_month(raw: &str) -> Option<u32> {
    if let Ok(n) = raw.parse::<u32>() {
        return (1..=12).contains(&n).then_some(n);
    }
    if raw.len() < 3 || !raw.is_ascii() {
        return None;
    }
    let lower = raw.to_ascii_lowercase();
    let prefix = &lower[..3];
    let index = MONTHS.iter().position(|m| *m == prefix)?;
    // Reject words that merely start like a month ("marble").
    let full = chrono::Month::try_from(u8::try_from(index + 1).ok()?)
        .ok()?
        .name()
        .to_ascii_lowercase();
    if full.starts_with(&lower) {
        u32::try_from(index + 1).ok()
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn parses_standard_identifier() {
        let url = "https://content.guardianapis.com/world/2023/jan/05/some-headline";
        assert_eq!(published_date_from_api_url(url), Some(ymd(2023, 1, 5)));
    }

    #[test]
    fn month_name_is_case_insensitive() {
        let url = "https://content.guardianapis.com/environment/2022/DEC/31/x";
        assert_eq!(published_date_from_api_url(url), Some(ymd(2022, 12, 31)));
    }

    #[test]
    fn accepts_long_and_numeric_months() {
        assert_eq!(parse_lenient_date("2021", "September", "9"), Some(ymd(2021, 9, 9)));
        assert_eq!(parse_lenient_date("2021", "sept", "9"), Some(ymd(2021, 9, 9)));
        assert_eq!(parse_lenient_date("2021", "03", "1"), Some(ymd(2021, 3, 1)));
    }

    #[test]
    fn rejects_words_that_only_share_a_month_prefix() {
        assert_eq!(parse_lenient_date("2021", "marble", "1"), None);
    }

    #[test]
    fn missing_segments_return_none() {
        assert_eq!(
            published_date_from_api_url("https://content.guardianapis.com/world"),
            None
        );
        assert_eq!(published_date_from_api_url(""), None);
    }

    #[test]
    fn non_date_segments_return_none() {
        let url = "https://content.guardianapis.com/world/live/2023/jan/05/blog";
        assert_eq!(published_date_from_api_url(url), None);
    }

    #[test]
    fn impossible_calendar_date_returns_none() {
        let url = "https://content.guardianapis.com/world/2023/feb/30/x";
        assert_eq!(published_date_from_api_url(url), None);
    }
}
