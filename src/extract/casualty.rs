//! Casualty-count extraction.
//!
//! A fixed, ordered list of regexes over the sentence text, with two rules
//! that matter for correctness:
//!
//! 1. Age expressions ("22-year-old") are masked before any counting, so an
//!    age is never mistaken for a casualty count.
//! 2. The combined "N dead and M injured" pattern is tried before the
//!    separate death/injury lists, so a combined report is read as one
//!    statement instead of two partial ones.
//!
//! Extracted integers outside (0, 10 000) are extraction noise and are
//! discarded, not stored.

use once_cell::sync::Lazy;
use regex::Regex;

/// Upper bound (exclusive) for a plausible casualty count.
const MAX_PLAUSIBLE_COUNT: u32 = 10_000;

/// Death and injury counts extracted from one sentence.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CasualtyCounts {
    /// Number of deaths, when stated.
    pub deaths: Option<u32>,
    /// Number of injuries, when stated.
    pub injuries: Option<u32>,
}

impl CasualtyCounts {
    /// True when either count is present.
    #[must_use]
    pub fn any(&self) -> bool {
        self.deaths.is_some() || self.injuries.is_some()
    }
}

static AGE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b\d+[-\s](?:year|month|week|day)s?[-\s]old\b").unwrap());

static COMBINED_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"\b(\d+)\s+(?:people\s+|persons\s+|civilians\s+|soldiers\s+|others\s+)?(?:dead|killed)\s+and\s+(\d+)\s+(?:people\s+|persons\s+|others\s+)?(?:injured|wounded|hurt)\b",
    )
    .unwrap()
});

static DEATH_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    vec![
        Regex::new(r"\b(\d+)\s+(?:people|persons|civilians|soldiers|villagers|residents|students|worshippers|others)?\s*(?:were\s+|was\s+)?(?:killed|dead|died|deaths)\b").unwrap(),
        Regex::new(r"\b(?:killed|killing|dead|died)\s+(?:at\s+least\s+|more\s+than\s+|about\s+)?(\d+)\b").unwrap(),
        Regex::new(r"\b(\d+)\s+(?:killed|dead|died)\b").unwrap(),
    ]
});

static INJURY_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    vec![
        Regex::new(r"\b(\d+)\s+(?:people|persons|civilians|soldiers|villagers|residents|students|others)?\s*(?:were\s+|was\s+)?(?:injured|wounded|hurt)\b").unwrap(),
        Regex::new(r"\b(?:injured|injuring|wounded|wounding|hurt)\s+(?:at\s+least\s+|more\s+than\s+|about\s+)?(\d+)\b").unwrap(),
        Regex::new(r"\b(\d+)\s+(?:injured|wounded|hurt)\b").unwrap(),
    ]
});

/// Extract casualty counts from sentence text.
#[must_use]
pub fn extract_casualties(text: &str) -> CasualtyCounts {
    let lower = text.to_lowercase();
    // Ages out first, so "22-year-old" can never feed a count pattern.
    let masked = AGE_PATTERN.replace_all(&lower, " ");

    if let Some(caps) = COMBINED_PATTERN.captures(&masked) {
        let deaths = parse_plausible(&caps[1]);
        let injuries = parse_plausible(&caps[2]);
        if deaths.is_some() || injuries.is_some() {
            return CasualtyCounts { deaths, injuries };
        }
    }

    let deaths = first_plausible(&DEATH_PATTERNS, &masked);
    let injuries = first_plausible(&INJURY_PATTERNS, &masked);
    CasualtyCounts { deaths, injuries }
}

fn first_plausible(patterns: &[Regex], text: &str) -> Option<u32> {
    for pattern in patterns {
        if let Some(caps) = pattern.captures(text) {
            if let Some(n) = parse_plausible(&caps[1]) {
                return Some(n);
            }
        }
    }
    None
}

fn parse_plausible(digits: &str) -> Option<u32> {
    let n: u32 = digits.parse().ok()?;
    if n > 0 && n < MAX_PLAUSIBLE_COUNT {
        Some(n)
    } else {
        log::debug!("discarding implausible casualty count {n}");
        None
    }
}
