//! Coreference-based clustering.
//!
//! Later sentences restate an incident with different triggers ("detonated"
//! ... "the explosion"). This pass scores every unordered pair of
//! non-reciprocal events and connects pairs scoring at least
//! [`CLUSTER_EDGE_THRESHOLD`](super::CLUSTER_EDGE_THRESHOLD); connected
//! components of the resulting graph are clusters. Each cluster collapses
//! into its earliest member under richer-wins rules.
//!
//! Reciprocal events bypass this pass entirely: a directed half of a
//! reciprocal pair must never be absorbed into anything.

use petgraph::unionfind::UnionFind;

use crate::event::{Event, TriggerKind};
use crate::lexicon::{self, RELATED_TRIGGER_PAIRS};
use crate::scoring;
use crate::similarity::{text_match, TextMatch};

use super::CLUSTER_EDGE_THRESHOLD;

// Pairwise score contributions.
const SAME_ACTOR: f64 = 3.0;
const ACTOR_SUBSTRING: f64 = 2.0;
const SAME_LOCATION: f64 = 3.0;
const SAME_DEATHS: f64 = 5.0;
const SAME_INJURIES: f64 = 3.0;
const NEAR_SENTENCES: f64 = 1.0;
const CLOSE_SENTENCES: f64 = 0.5;
const RELATED_TRIGGERS: f64 = 2.0;
const SAME_TRIGGER: f64 = 1.0;

/// Sentence gap treated as "near".
const NEAR_GAP: usize = 3;
/// Sentence gap treated as "close".
const CLOSE_GAP: usize = 5;

/// Cluster coreferent events and collapse each cluster.
#[must_use]
pub fn cluster(events: Vec<Event>) -> Vec<Event> {
    let n = events.len();
    if n < 2 {
        return events;
    }

    let mut uf: UnionFind<usize> = UnionFind::new(n);
    for i in 0..n {
        for j in (i + 1)..n {
            if events[i].reciprocal_violence || events[j].reciprocal_violence {
                continue;
            }
            if pair_score(&events[i], &events[j]) >= CLUSTER_EDGE_THRESHOLD {
                uf.union(i, j);
            }
        }
    }

    // Group indices by component root, preserving event order.
    let mut components: Vec<(usize, Vec<usize>)> = Vec::new();
    for i in 0..n {
        let root = uf.find(i);
        match components.iter_mut().find(|(r, _)| *r == root) {
            Some((_, members)) => members.push(i),
            None => components.push((root, vec![i])),
        }
    }

    let mut by_index: Vec<Option<Event>> = events.into_iter().map(Some).collect();
    let mut result: Vec<Event> = Vec::new();

    for (_, members) in components {
        let mut iter = members.iter();
        let first = *iter.next().expect("component is never empty");
        let mut canonical = by_index[first].take().expect("event taken once");
        for &member in iter {
            let event = by_index[member].take().expect("event taken once");
            absorb_richer(&mut canonical, event);
        }
        if members.len() > 1 {
            log::debug!(
                "clustered {} mentions into sentence {} event",
                members.len(),
                canonical.sentence_index
            );
        }
        result.push(canonical);
    }

    result
}

/// Pairwise coreference score for two non-reciprocal events.
#[must_use]
pub fn pair_score(a: &Event, b: &Event) -> f64 {
    let mut score = 0.0;

    if let (Some(actor_a), Some(actor_b)) = (&a.actor, &b.actor) {
        match text_match(&actor_a.text, &actor_b.text) {
            TextMatch::Exact => score += SAME_ACTOR,
            TextMatch::Substring => score += ACTOR_SUBSTRING,
            TextMatch::None => {}
        }
    }

    if let (Some(place_a), Some(place_b)) = (&a.place, &b.place) {
        if place_a.text.eq_ignore_ascii_case(&place_b.text) {
            score += SAME_LOCATION;
        }
    }

    if let (Some(da), Some(db)) = (a.deaths(), b.deaths()) {
        if da == db {
            score += SAME_DEATHS;
        }
    }
    if let (Some(ia), Some(ib)) = (a.injuries(), b.injuries()) {
        if ia == ib {
            score += SAME_INJURIES;
        }
    }

    let gap = a.sentence_index.abs_diff(b.sentence_index);
    if gap <= NEAR_GAP {
        score += NEAR_SENTENCES;
    } else if gap <= CLOSE_GAP {
        score += CLOSE_SENTENCES;
    }

    if lexicon::pair_matches(RELATED_TRIGGER_PAIRS, &a.trigger.lemma, &b.trigger.lemma) {
        score += RELATED_TRIGGERS;
    }
    if a.trigger.lemma.eq_ignore_ascii_case(&b.trigger.lemma) {
        score += SAME_TRIGGER;
    }

    score
}

/// Collapse a cluster member into the canonical event, richer-wins.
fn absorb_richer(canonical: &mut Event, other: Event) {
    // Named victims override generic ones.
    match (&mut canonical.victim, other.victim) {
        (None, Some(victim)) => canonical.victim = Some(victim),
        (Some(t), Some(s)) => {
            if t.is_generic() && !s.is_generic() {
                t.text = s.text;
                t.kind = s.kind;
            }
            if t.deaths.is_none() {
                t.deaths = s.deaths;
            }
            if t.injuries.is_none() {
                t.injuries = s.injuries;
            }
        }
        _ => {}
    }

    // Weapon and tactic lists are unioned.
    match (&mut canonical.method, other.method) {
        (None, Some(method)) => canonical.method = Some(method),
        (Some(t), Some(s)) => {
            for weapon in s.weapons {
                if !t.weapons.contains(&weapon) {
                    t.weapons.push(weapon);
                }
            }
            for tactic in s.tactics {
                if !t.tactics.contains(&tactic) {
                    t.tactics.push(tactic);
                }
            }
        }
        _ => {}
    }

    // An action-verb trigger is more specific than an event noun.
    if canonical.trigger.kind == TriggerKind::Noun && other.trigger.kind == TriggerKind::Verb {
        canonical.trigger = other.trigger;
        canonical.class = crate::event::EventClass::from_trigger_lemma(&canonical.trigger.lemma);
    }

    if canonical.actor.is_none() {
        canonical.actor = other.actor;
    }
    if canonical.place.is_none() {
        canonical.place = other.place;
    }
    if canonical.time.is_none() {
        canonical.time = other.time;
    }

    canonical.cluster_size += other.cluster_size;
    for idx in other.source_sentences {
        if !canonical.source_sentences.contains(&idx) {
            canonical.source_sentences.push(idx);
        }
    }
    canonical.source_sentences.sort_unstable();
    canonical.inferred = canonical.inferred && other.inferred;

    scoring::rescore(canonical);
}
