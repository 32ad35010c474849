//! Text similarity helpers for event clustering.
//!
//! The coreference pass compares actor and location strings across events.
//! These comparisons are deliberately crude (lowercase exact, substring,
//! word-set Jaccard) - the cluster score, not any single comparison, decides
//! whether two mentions corefer.

use std::collections::HashSet;

/// Outcome of comparing two actor/location strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextMatch {
    /// Identical after lowercasing.
    Exact,
    /// One string contains the other.
    Substring,
    /// No match.
    None,
}

/// Compare two strings for clustering purposes.
#[must_use]
pub fn text_match(a: &str, b: &str) -> TextMatch {
    let a = a.trim().to_lowercase();
    let b = b.trim().to_lowercase();
    if a.is_empty() || b.is_empty() {
        return TextMatch::None;
    }
    if a == b {
        TextMatch::Exact
    } else if a.contains(&b) || b.contains(&a) {
        TextMatch::Substring
    } else {
        TextMatch::None
    }
}

/// Word-level Jaccard similarity in [0, 1].
#[must_use]
pub fn jaccard_word_similarity(a: &str, b: &str) -> f64 {
    let a = a.to_lowercase();
    let b = b.to_lowercase();
    let words_a: HashSet<&str> = a.split_whitespace().collect();
    let words_b: HashSet<&str> = b.split_whitespace().collect();

    let intersection = words_a.intersection(&words_b).count();
    let union = words_a.union(&words_b).count();

    if union == 0 {
        0.0
    } else {
        intersection as f64 / union as f64
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn match_is_symmetric(a in "[a-zA-Z ]{0,30}", b in "[a-zA-Z ]{0,30}") {
            prop_assert_eq!(text_match(&a, &b), text_match(&b, &a));
        }

        #[test]
        fn jaccard_bounded(a in "[a-zA-Z ]{0,30}", b in "[a-zA-Z ]{0,30}") {
            let sim = jaccard_word_similarity(&a, &b);
            prop_assert!((0.0..=1.0).contains(&sim));
        }
    }
}
