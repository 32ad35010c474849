//! Similar-event merge.
//!
//! Two mentions within adjacent sentences (gap of at most
//! [`MERGE_MAX_SENTENCE_GAP`](super::MERGE_MAX_SENTENCE_GAP)) describe the
//! same incident when their trigger lemmas share a semantic family, form a
//! describing pair (bomb/explosion), or when they agree on both location and
//! death count. The merge is field-wise and non-destructive: a missing slot
//! or sub-field is filled from the other side, nothing present is
//! overwritten.
//!
//! The pass iterates to a fixpoint, so running it again on its own output
//! changes nothing.

use crate::event::Event;
use crate::lexicon::{self, DESCRIBING_PAIRS};
use crate::scoring;

use super::MERGE_MAX_SENTENCE_GAP;

/// Merge near-duplicate mentions. Reciprocal events are never merged.
#[must_use]
pub fn merge_similar(mut events: Vec<Event>) -> Vec<Event> {
    loop {
        let (merged, changed) = merge_pass(events);
        events = merged;
        if !changed {
            return events;
        }
    }
}

fn merge_pass(events: Vec<Event>) -> (Vec<Event>, bool) {
    let mut result: Vec<Event> = Vec::new();
    let mut changed = false;

    for event in events {
        if event.reciprocal_violence {
            result.push(event);
            continue;
        }
        match result
            .iter_mut()
            .find(|t| !t.reciprocal_violence && can_merge(t, &event))
        {
            Some(target) => {
                absorb(target, event);
                changed = true;
            }
            None => result.push(event),
        }
    }

    (result, changed)
}

/// Merge criterion for a pair of non-reciprocal events.
fn can_merge(a: &Event, b: &Event) -> bool {
    let gap = a.sentence_index.abs_diff(b.sentence_index);
    if gap > MERGE_MAX_SENTENCE_GAP {
        return false;
    }

    let same_family = matches!(
        (
            lexicon::trigger_family(&a.trigger.lemma),
            lexicon::trigger_family(&b.trigger.lemma),
        ),
        (Some(fa), Some(fb)) if fa == fb
    );
    if same_family {
        return true;
    }

    if lexicon::pair_matches(DESCRIBING_PAIRS, &a.trigger.lemma, &b.trigger.lemma) {
        return true;
    }

    same_place_and_deaths(a, b)
}

fn same_place_and_deaths(a: &Event, b: &Event) -> bool {
    let same_place = match (&a.place, &b.place) {
        (Some(pa), Some(pb)) => pa.text.eq_ignore_ascii_case(&pb.text),
        _ => false,
    };
    let same_deaths = matches!((a.deaths(), b.deaths()), (Some(da), Some(db)) if da == db);
    same_place && same_deaths
}

/// Fill the target's missing slots and sub-fields from the source, then
/// rescore.
fn absorb(target: &mut Event, source: Event) {
    match (&mut target.actor, source.actor) {
        (None, Some(actor)) => target.actor = Some(actor),
        (Some(t), Some(s)) => {
            if t.kind == crate::event::ActorKind::Unknown {
                t.kind = s.kind;
            }
            if !t.known_group && s.known_group {
                t.known_group = true;
            }
            for (k, v) in s.metadata {
                t.metadata.entry(k).or_insert(v);
            }
        }
        _ => {}
    }

    match (&mut target.victim, source.victim) {
        (None, Some(victim)) => target.victim = Some(victim),
        (Some(t), Some(s)) => {
            if t.deaths.is_none() {
                t.deaths = s.deaths;
            }
            if t.injuries.is_none() {
                t.injuries = s.injuries;
            }
            if t.kind == crate::event::VictimKind::Unknown {
                t.kind = s.kind;
            }
        }
        _ => {}
    }

    match (&mut target.place, source.place) {
        (None, Some(place)) => target.place = Some(place),
        (Some(t), Some(s)) => {
            if t.country.is_none() {
                t.country = s.country;
            }
        }
        _ => {}
    }

    match (&mut target.time, source.time) {
        (None, Some(time)) => target.time = Some(time),
        (Some(t), Some(s)) => {
            if t.normalized.is_none() {
                t.normalized = s.normalized;
            }
        }
        _ => {}
    }

    match (&mut target.method, source.method) {
        (None, Some(method)) => target.method = Some(method),
        (Some(t), Some(s)) => {
            if t.weapons.is_empty() {
                t.weapons = s.weapons;
            }
            if t.tactics.is_empty() {
                t.tactics = s.tactics;
            }
        }
        _ => {}
    }

    target.cluster_size += source.cluster_size;
    for idx in source.source_sentences {
        if !target.source_sentences.contains(&idx) {
            target.source_sentences.push(idx);
        }
    }
    target.source_sentences.sort_unstable();
    target.inferred = target.inferred && source.inferred;

    scoring::rescore(target);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::{
        Actor, ActorProvenance, Place, PlaceKind, Trigger, TriggerKind, Victim,
    };

    fn event(lemma: &str, sentence_index: usize) -> Event {
        let mut e = Event::new(
            Trigger {
                word: lemma.to_string(),
                lemma: lemma.to_string(),
                pos: "VBD".to_string(),
                index: 1,
                sentence_index,
                kind: TriggerKind::Verb,
            },
            format!("Sentence {sentence_index}."),
        );
        scoring::rescore(&mut e);
        e
    }

    #[test]
    fn same_family_merges() {
        let mut a = event("kill", 0);
        a.victim = Some(Victim::new("villagers").with_counts(Some(10), None));
        let mut b = event("massacre", 1);
        b.place = Some(Place::new("Beni", PlaceKind::Named));

        let merged = merge_similar(vec![a, b]);
        assert_eq!(merged.len(), 1);
        let e = &merged[0];
        assert_eq!(e.deaths(), Some(10));
        assert_eq!(e.place.as_ref().unwrap().text, "Beni");
        assert_eq!(e.cluster_size, 2);
        assert_eq!(e.source_sentences, vec![0, 1]);
    }

    #[test]
    fn describing_pair_merges() {
        let a = event("bomb", 0);
        let b = event("explosion", 1);
        assert_eq!(merge_similar(vec![a, b]).len(), 1);
    }

    #[test]
    fn distant_sentences_do_not_merge() {
        let a = event("kill", 0);
        let b = event("kill", 5);
        assert_eq!(merge_similar(vec![a, b]).len(), 2);
    }

    #[test]
    fn unrelated_triggers_do_not_merge() {
        let a = event("kidnap", 0);
        let b = event("burn", 1);
        assert_eq!(merge_similar(vec![a, b]).len(), 2);
    }

    #[test]
    fn same_place_and_deaths_merges() {
        let mut a = event("kidnap", 0);
        a.place = Some(Place::new("Gao", PlaceKind::Named));
        a.victim = Some(Victim::new("people").with_counts(Some(4), None));
        let mut b = event("burn", 1);
        b.place = Some(Place::new("Gao", PlaceKind::Named));
        b.victim = Some(Victim::new("villagers").with_counts(Some(4), None));

        assert_eq!(merge_similar(vec![a, b]).len(), 1);
    }

    #[test]
    fn merge_is_non_destructive() {
        let mut a = event("kill", 0);
        a.actor = Some(Actor::new("Boko Haram", ActorProvenance::DependencyParse));
        a.victim = Some(Victim::new("soldiers").with_counts(Some(3), None));
        let mut b = event("kill", 0);
        b.actor = Some(Actor::new("gunmen", ActorProvenance::NounPhrase));
        b.victim = Some(Victim::new("people").with_counts(Some(99), Some(7)));

        let merged = merge_similar(vec![a, b]);
        assert_eq!(merged.len(), 1);
        let e = &merged[0];
        // Target side wins where present; missing sub-fields are filled.
        assert_eq!(e.actor.as_ref().unwrap().text, "Boko Haram");
        assert_eq!(e.deaths(), Some(3));
        assert_eq!(e.injuries(), Some(7));
    }

    #[test]
    fn reciprocal_events_never_merge() {
        let mut a = event("clash", 0);
        a.reciprocal_violence = true;
        let mut b = event("clash", 0);
        b.reciprocal_violence = true;
        let c = event("clash", 0);

        let merged = merge_similar(vec![a, b, c]);
        assert_eq!(merged.len(), 3);
    }

    #[test]
    fn merge_is_idempotent() {
        let mut a = event("kill", 0);
        a.place = Some(Place::new("Gao", PlaceKind::Named));
        let b = event("massacre", 1);
        let c = event("shoot", 4);

        let once = merge_similar(vec![a, b, c]);
        let twice = merge_similar(once.clone());
        assert_eq!(once.len(), twice.len());
        for (x, y) in once.iter().zip(twice.iter()) {
            assert_eq!(x.trigger.lemma, y.trigger.lemma);
            assert_eq!(x.cluster_size, y.cluster_size);
        }
    }
}
