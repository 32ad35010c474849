//! Date normalization to calendar dates.
//!
//! News articles rarely carry ISO dates; they say "Friday" or "yesterday"
//! and rely on the publication date. These rules resolve such expressions
//! against a reference date:
//!
//! - a bare weekday naming the reference date's own weekday means the same
//!   day (an article published Friday saying "Friday" means that Friday);
//! - any other weekday resolves to its most recent past occurrence;
//! - "yesterday" / "today" / "tonight" / "last week" / "last month" are
//!   offsets from the reference date.

use chrono::{Datelike, Duration, NaiveDate, Weekday};
use once_cell::sync::Lazy;
use regex::Regex;

const MONTHS: &[(&str, u32)] = &[
    ("january", 1),
    ("february", 2),
    ("march", 3),
    ("april", 4),
    ("may", 5),
    ("june", 6),
    ("july", 7),
    ("august", 8),
    ("september", 9),
    ("october", 10),
    ("november", 11),
    ("december", 12),
];

const WEEKDAYS: &[(&str, Weekday)] = &[
    ("monday", Weekday::Mon),
    ("tuesday", Weekday::Tue),
    ("wednesday", Weekday::Wed),
    ("thursday", Weekday::Thu),
    ("friday", Weekday::Fri),
    ("saturday", Weekday::Sat),
    ("sunday", Weekday::Sun),
];

static ISO_DATE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b(\d{4})-(\d{2})-(\d{2})\b").unwrap());
static US_SLASH_DATE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b(\d{1,2})/(\d{1,2})/(\d{4})\b").unwrap());
static WRITTEN_DATE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(january|february|march|april|may|june|july|august|september|october|november|december)\s+(\d{1,2})(?:,?\s*(\d{4}))?\b")
        .unwrap()
});
static WRITTEN_DATE_EU: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(\d{1,2})\s+(january|february|march|april|may|june|july|august|september|october|november|december)(?:\s+(\d{4}))?\b")
        .unwrap()
});

fn month_number(name: &str) -> Option<u32> {
    let name = name.to_lowercase();
    MONTHS.iter().find(|(m, _)| *m == name).map(|&(_, n)| n)
}

/// Normalize a date expression to a calendar date.
///
/// Explicit formats (ISO, `MM/DD/YYYY`, "March 15, 2024", "15 March 2024")
/// parse directly; a written date missing its year borrows the reference
/// year. Relative expressions need a reference date and return `None`
/// without one.
#[must_use]
pub fn normalize_date(text: &str, reference: Option<NaiveDate>) -> Option<NaiveDate> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }

    if let Some(caps) = ISO_DATE.captures(text) {
        return NaiveDate::from_ymd_opt(
            caps[1].parse().ok()?,
            caps[2].parse().ok()?,
            caps[3].parse().ok()?,
        );
    }

    if let Some(caps) = US_SLASH_DATE.captures(text) {
        return NaiveDate::from_ymd_opt(
            caps[3].parse().ok()?,
            caps[1].parse().ok()?,
            caps[2].parse().ok()?,
        );
    }

    if let Some(caps) = WRITTEN_DATE.captures(text) {
        let month = month_number(&caps[1])?;
        let day: u32 = caps[2].parse().ok()?;
        let year = caps
            .get(3)
            .and_then(|y| y.as_str().parse().ok())
            .or_else(|| reference.map(|r| r.year()))?;
        return NaiveDate::from_ymd_opt(year, month, day);
    }

    if let Some(caps) = WRITTEN_DATE_EU.captures(text) {
        let day: u32 = caps[1].parse().ok()?;
        let month = month_number(&caps[2])?;
        let year = caps
            .get(3)
            .and_then(|y| y.as_str().parse().ok())
            .or_else(|| reference.map(|r| r.year()))?;
        return NaiveDate::from_ymd_opt(year, month, day);
    }

    relative_date(text, reference?)
}

/// Resolve a relative expression against a reference date.
fn relative_date(text: &str, reference: NaiveDate) -> Option<NaiveDate> {
    let lower = text.to_lowercase();

    for &(name, weekday) in WEEKDAYS {
        if lower.contains(name) {
            let days_back =
                (reference.weekday().num_days_from_monday() as i64
                    - weekday.num_days_from_monday() as i64)
                    .rem_euclid(7);
            // Same weekday as the reference date means the same day.
            return Some(reference - Duration::days(days_back));
        }
    }

    if lower.contains("yesterday") {
        Some(reference - Duration::days(1))
    } else if lower.contains("today") || lower.contains("tonight") {
        Some(reference)
    } else if lower.contains("last week") {
        Some(reference - Duration::days(7))
    } else if lower.contains("last month") {
        Some(reference - Duration::days(30))
    } else {
        None
    }
}

/// Extract and normalize a date from an article metadata string.
///
/// Scans for the first recognizable date pattern and parses it without a
/// reference (publication dates are absolute).
#[must_use]
pub fn parse_article_date(metadata: &str) -> Option<NaiveDate> {
    for pattern in [&*ISO_DATE, &*US_SLASH_DATE, &*WRITTEN_DATE, &*WRITTEN_DATE_EU] {
        if let Some(m) = pattern.find(metadata) {
            if let Some(date) = normalize_date(m.as_str(), None) {
                return Some(date);
            }
        }
    }
    None
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn never_panics(text in ".{0,60}") {
            let reference = NaiveDate::from_ymd_opt(2024, 3, 15);
            let _ = normalize_date(&text, reference);
            let _ = parse_article_date(&text);
        }

        #[test]
        fn weekday_always_within_week(day_offset in 0i64..3650) {
            let reference = NaiveDate::from_ymd_opt(2020, 1, 1).unwrap()
                + chrono::Duration::days(day_offset);
            for (name, _) in super::WEEKDAYS {
                let resolved = normalize_date(name, Some(reference)).unwrap();
                let gap = (reference - resolved).num_days();
                prop_assert!((0..7).contains(&gap));
            }
        }
    }
}
