//! Reciprocal-violence split.
//!
//! "Clashes between the Hema and Lendu communities left 20 dead" describes
//! mutual violence between two parties. Such a mention becomes two directed
//! events (X against Y, Y against X), both flagged `reciprocal_violence`, so
//! neither direction is ever merged away by the later passes. The original
//! casualty counts ride on the first of the pair only - counting them twice
//! would double the incident's toll.
//!
//! Each sentence is tested at most once; the first matching pattern wins.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::event::{Actor, ActorProvenance, Event, Victim};
use crate::extract::actor::is_plausible_actor;
use crate::extract::extract_casualties;
use crate::gazetteer::Gazetteer;
use crate::scoring;

static RECIPROCAL_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    // A capitalized run stops at the first lowercase word, so "the Hema and
    // Lendu communities" captures "Hema" / "Lendu".
    let capitalized = r"[A-Z][\w'’\-]*(?:\s+[A-Z][\w'’\-]*)*";
    vec![
        Regex::new(&format!(
            r"(?:[Cc]lash(?:es)?|[Ff]ighting|[Cc]onflicts?)\s+between\s+(?:the\s+)?({capitalized})\s+and\s+(?:the\s+)?({capitalized})"
        ))
        .unwrap(),
        Regex::new(&format!(
            r"({capitalized})\s+and\s+(?:the\s+)?({capitalized})(?:\s+(?:fighters|communities|groups|tribes|forces|militias|men))?\s+(?:clashed|fought|battled)"
        ))
        .unwrap(),
    ]
});

/// Split reciprocal-violence mentions into directed event pairs.
#[must_use]
pub fn split(events: Vec<Event>, gazetteer: &Gazetteer) -> Vec<Event> {
    let mut result: Vec<Event> = Vec::new();
    let mut processed_sentences: Vec<usize> = Vec::new();

    for event in events {
        let sentence = event.sentence_index;
        if processed_sentences.contains(&sentence) {
            // This sentence already split; its remaining events are
            // superseded by the directed pair.
            if result
                .iter()
                .any(|e| e.sentence_index == sentence && e.reciprocal_violence)
            {
                continue;
            }
            result.push(event);
            continue;
        }
        processed_sentences.push(sentence);

        match match_parties(&event.sentence_text, gazetteer) {
            Some((first, second)) => {
                log::debug!(
                    "reciprocal split at sentence {sentence}: {first} / {second}"
                );
                let (a, b) = directed_pair(&event, &first, &second);
                result.push(a);
                result.push(b);
            }
            None => result.push(event),
        }
    }

    result
}

/// Try the reciprocal patterns against a sentence, returning both parties
/// when each passes the actor plausibility filter.
fn match_parties(text: &str, gazetteer: &Gazetteer) -> Option<(String, String)> {
    for pattern in RECIPROCAL_PATTERNS.iter() {
        if let Some(caps) = pattern.captures(text) {
            let first = caps[1].trim().to_string();
            let second = caps[2].trim().to_string();
            if is_plausible_actor(&first, gazetteer) && is_plausible_actor(&second, gazetteer) {
                return Some((first, second));
            }
        }
    }
    None
}

/// Build the two directed events from a template event.
fn directed_pair(template: &Event, first: &str, second: &str) -> (Event, Event) {
    let counts = extract_casualties(&template.sentence_text);

    let mut forward = template.clone();
    forward.reciprocal_violence = true;
    forward.actor = Some(Actor::new(first, ActorProvenance::ReciprocalPattern));
    forward.victim = Some(Victim::new(second).with_counts(counts.deaths, counts.injuries));
    scoring::rescore(&mut forward);

    let mut backward = template.clone();
    backward.reciprocal_violence = true;
    backward.actor = Some(Actor::new(second, ActorProvenance::ReciprocalPattern));
    backward.victim = Some(Victim::new(first));
    scoring::rescore(&mut backward);

    (forward, backward)
}
