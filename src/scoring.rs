//! Confidence and completeness scoring.
//!
//! Both scores are pure functions of an event's slots and are recomputed
//! whenever consolidation changes those slots. The weights are a behavioral
//! contract shared with the consolidation thresholds, so they live here as
//! named constants rather than inline literals.

use crate::event::{ActorKind, Event};
use crate::types::Confidence;

/// Number of 5W1H slots (what/who/whom/where/when/how).
const SLOT_COUNT: f64 = 6.0;

/// Weight for a resolved actor.
const WHO_WEIGHT: f64 = 0.25;
/// Weight for a resolved victim.
const WHOM_WEIGHT: f64 = 0.25;
/// Bonus when the victim carries extracted casualty counts.
const CASUALTY_BONUS: f64 = 0.10;
/// Weight for a resolved location.
const WHERE_WEIGHT: f64 = 0.15;
/// Weight for a resolved time.
const WHEN_WEIGHT: f64 = 0.10;
/// Weight for a resolved method.
const HOW_WEIGHT: f64 = 0.10;
/// Bonus when the actor's coarse type resolved to something concrete.
const ACTOR_TYPE_BONUS: f64 = 0.05;

/// Slot completeness: filled slots / 6, rounded to two decimals.
///
/// The "what" slot is derived from the trigger and is always filled, so the
/// result is never below 1/6 for a real event.
#[must_use]
pub fn completeness(event: &Event) -> Confidence {
    let filled = 1 // what
        + usize::from(event.actor.is_some())
        + usize::from(event.victim.is_some())
        + usize::from(event.place.is_some())
        + usize::from(event.time.is_some())
        + usize::from(event.method.is_some());
    Confidence::saturating(filled as f64 / SLOT_COUNT).rounded2()
}

/// Weighted slot confidence, capped at 1.0.
#[must_use]
pub fn confidence(event: &Event) -> Confidence {
    let mut score = 0.0;

    if let Some(actor) = &event.actor {
        score += WHO_WEIGHT;
        if actor.kind != ActorKind::Unknown {
            score += ACTOR_TYPE_BONUS;
        }
    }
    if let Some(victim) = &event.victim {
        score += WHOM_WEIGHT;
        if victim.has_casualties() {
            score += CASUALTY_BONUS;
        }
    }
    if event.place.is_some() {
        score += WHERE_WEIGHT;
    }
    if event.time.is_some() {
        score += WHEN_WEIGHT;
    }
    if event.method.is_some() {
        score += HOW_WEIGHT;
    }

    Confidence::saturating(score).rounded2()
}

/// Recompute and store both scores on an event.
pub fn rescore(event: &mut Event) {
    event.confidence = confidence(event);
    event.completeness = completeness(event);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::{Actor, ActorProvenance, Method, Place, PlaceKind, TimeExpr, TimeKind, Trigger, TriggerKind, Victim};

    fn base_event() -> Event {
        Event::new(
            Trigger {
                word: "killed".to_string(),
                lemma: "kill".to_string(),
                pos: "VBD".to_string(),
                index: 2,
                sentence_index: 0,
                kind: TriggerKind::Verb,
            },
            "Gunmen killed three people.",
        )
    }

    #[test]
    fn empty_event_scores() {
        let e = base_event();
        assert_eq!(completeness(&e).get(), 0.17); // what only: 1/6 rounded
        assert_eq!(confidence(&e).get(), 0.0);
    }

    #[test]
    fn full_event_scores() {
        let mut e = base_event();
        e.actor = Some(Actor::new("militants", ActorProvenance::DependencyParse));
        e.victim = Some(Victim::new("three people").with_counts(Some(3), None));
        e.place = Some(Place::new("Maiduguri", PlaceKind::Named));
        e.time = Some(TimeExpr::new("Friday", TimeKind::Relative));
        e.method = Some(Method::new(vec!["gun".to_string()], vec![]));
        assert_eq!(completeness(&e).get(), 1.0);
        // 0.25 + 0.05 + 0.25 + 0.10 + 0.15 + 0.10 + 0.10 = 1.0
        assert_eq!(confidence(&e).get(), 1.0);
    }

    #[test]
    fn casualty_bonus_requires_counts() {
        let mut e = base_event();
        e.victim = Some(Victim::new("residents"));
        assert_eq!(confidence(&e).get(), 0.25);
        e.victim = Some(Victim::new("residents").with_counts(Some(4), None));
        assert_eq!(confidence(&e).get(), 0.35);
    }

    #[test]
    fn unknown_actor_gets_no_type_bonus() {
        let mut e = base_event();
        e.actor = Some(Actor::new("somebody", ActorProvenance::NounPhrase));
        assert_eq!(confidence(&e).get(), 0.25);
        e.actor = Some(Actor::new("police officers", ActorProvenance::DependencyParse));
        assert_eq!(confidence(&e).get(), 0.30);
    }

    #[test]
    fn rescore_updates_in_place() {
        let mut e = base_event();
        e.place = Some(Place::new("Beni", PlaceKind::Named));
        rescore(&mut e);
        assert_eq!(e.confidence.get(), 0.15);
        assert_eq!(e.completeness.get(), 0.33);
    }
}
