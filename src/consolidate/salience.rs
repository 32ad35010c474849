//! Salience filtering - keep the newsworthy incidents, drop background
//! mentions.
//!
//! News articles mention past incidents for context ("last year militants
//! killed dozens in the same district"). The salience score favors events
//! reported early, with casualties, named victims and complete slots, and
//! penalizes speculative sentences and simple-past retrospectives deep in
//! the article.
//!
//! Reciprocal events are always kept. If no other event reaches the keep
//! threshold, the single highest-scoring one survives - most articles
//! report one primary incident, and an article that produced events must
//! not come out empty.

use crate::context::ArticleContext;
use crate::event::Event;
use crate::lexicon;

use super::SALIENCE_KEEP_THRESHOLD;

// Score contributions.
const EARLY_SENTENCE: i32 = 3;
const HAS_CASUALTIES: i32 = 4;
const NAMED_VICTIM: i32 = 2;
const HIGH_COMPLETENESS: i32 = 2;
const HIGH_CONFIDENCE: i32 = 2;
const LOCATION_IN_LEAD: i32 = 2;
const LATE_SIMPLE_PAST: i32 = -1;
const SPECULATIVE_SENTENCE: i32 = -3;

/// Sentence index still considered "early".
const EARLY_SENTENCE_MAX: usize = 2;
/// Sentence index beyond which a simple-past trigger reads as background.
const LATE_SENTENCE_MIN: usize = 4;
/// Completeness/confidence level considered "high".
const HIGH_SCORE: f64 = 0.8;

/// Filter events by salience.
#[must_use]
pub fn filter(events: Vec<Event>, ctx: &ArticleContext) -> Vec<Event> {
    if events.is_empty() {
        return events;
    }

    let scores: Vec<i32> = events.iter().map(|e| salience_score(e, ctx)).collect();

    let any_keeper = events
        .iter()
        .zip(&scores)
        .any(|(e, &s)| !e.reciprocal_violence && s >= SALIENCE_KEEP_THRESHOLD);

    // Fallback: no non-reciprocal event is salient enough on its own, so
    // keep the single best one (first wins a tie).
    let best_index = if any_keeper {
        None
    } else {
        events
            .iter()
            .enumerate()
            .filter(|(_, e)| !e.reciprocal_violence)
            .max_by(|(i, _), (j, _)| {
                scores[*i]
                    .cmp(&scores[*j])
                    .then_with(|| j.cmp(i)) // earlier index wins ties
            })
            .map(|(i, _)| i)
    };

    events
        .into_iter()
        .enumerate()
        .filter(|(i, e)| {
            e.reciprocal_violence
                || scores[*i] >= SALIENCE_KEEP_THRESHOLD
                || Some(*i) == best_index
        })
        .map(|(_, e)| e)
        .collect()
}

/// Salience score for one event.
#[must_use]
pub fn salience_score(event: &Event, ctx: &ArticleContext) -> i32 {
    let mut score = 0;

    if event.sentence_index <= EARLY_SENTENCE_MAX {
        score += EARLY_SENTENCE;
    }
    if event.has_casualties() {
        score += HAS_CASUALTIES;
    }
    if event
        .victim
        .as_ref()
        .map(|v| !v.is_generic())
        .unwrap_or(false)
    {
        score += NAMED_VICTIM;
    }
    if event.completeness.get() >= HIGH_SCORE {
        score += HIGH_COMPLETENESS;
    }
    if event.confidence.get() >= HIGH_SCORE {
        score += HIGH_CONFIDENCE;
    }
    if let Some(place) = &event.place {
        if !ctx.lead_text.is_empty()
            && ctx
                .lead_text
                .to_lowercase()
                .contains(&place.text.to_lowercase())
        {
            score += LOCATION_IN_LEAD;
        }
    }
    if event.trigger.pos == "VBD" && event.sentence_index >= LATE_SENTENCE_MIN {
        score += LATE_SIMPLE_PAST;
    }
    if is_speculative(&event.sentence_text) {
        score += SPECULATIVE_SENTENCE;
    }

    score
}

/// Does the sentence carry a modal/conditional marker?
fn is_speculative(text: &str) -> bool {
    let lower = text.to_lowercase();
    if lexicon::MODAL_PHRASES.iter().any(|p| lower.contains(p)) {
        return true;
    }
    lower
        .split(|c: char| !c.is_alphanumeric())
        .any(|w| lexicon::MODAL_MARKERS.contains(&w))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::{Trigger, TriggerKind, Victim};
    use crate::scoring;

    fn event(sentence_index: usize, pos: &str, sentence_text: &str) -> Event {
        let mut e = Event::new(
            Trigger {
                word: "killed".to_string(),
                lemma: "kill".to_string(),
                pos: pos.to_string(),
                index: 1,
                sentence_index,
                kind: TriggerKind::Verb,
            },
            sentence_text,
        );
        scoring::rescore(&mut e);
        e
    }

    fn with_casualties(mut e: Event, deaths: u32) -> Event {
        e.victim = Some(Victim::new("villagers").with_counts(Some(deaths), None));
        scoring::rescore(&mut e);
        e
    }

    #[test]
    fn early_casualty_event_is_kept() {
        // +3 early, +4 casualties, +2 named victim >= 7.
        let e = with_casualties(event(0, "VBD", "Gunmen killed 10 villagers."), 10);
        let kept = filter(vec![e], &ArticleContext::default());
        assert_eq!(kept.len(), 1);
    }

    #[test]
    fn speculative_sentence_is_penalized() {
        let salient = with_casualties(event(0, "VBD", "Gunmen killed 10 villagers."), 10);
        let speculative = with_casualties(
            event(0, "VBD", "More villagers could be killed if the army withdraws."),
            10,
        );
        let ctx = ArticleContext::default();
        assert!(salience_score(&speculative, &ctx) < salience_score(&salient, &ctx));
    }

    #[test]
    fn fallback_keeps_single_best() {
        // Neither event reaches 7; only the better one survives.
        let weak = event(8, "VBD", "Soldiers killed militants last year.");
        let better = with_casualties(event(6, "VBN", "Rebels killed 4 people."), 4);
        let kept = filter(vec![weak, better], &ArticleContext::default());
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].sentence_index, 6);
    }

    #[test]
    fn fallback_never_empties_nonempty_input() {
        let weak = event(9, "VBD", "Fighting killed people in the nineties.");
        let kept = filter(vec![weak], &ArticleContext::default());
        assert_eq!(kept.len(), 1);
    }

    #[test]
    fn empty_input_stays_empty() {
        assert!(filter(vec![], &ArticleContext::default()).is_empty());
    }

    #[test]
    fn reciprocal_always_kept() {
        let mut weak = event(9, "VBD", "Communities clashed.");
        weak.reciprocal_violence = true;
        let strong = with_casualties(event(0, "VBD", "Gunmen killed 10 villagers."), 10);
        let kept = filter(vec![weak, strong], &ArticleContext::default());
        assert_eq!(kept.len(), 2);
    }

    #[test]
    fn lead_location_bonus() {
        let ctx = ArticleContext {
            lead_text: "Explosion rocks Mogadishu market.".to_string(),
            ..ArticleContext::default()
        };
        let mut with_place = with_casualties(event(5, "VBN", "The blast killed 5 people."), 5);
        with_place.place = Some(crate::event::Place::new(
            "Mogadishu",
            crate::event::PlaceKind::Named,
        ));
        scoring::rescore(&mut with_place);
        let without = with_casualties(event(5, "VBN", "The blast killed 5 people."), 5);
        assert!(salience_score(&with_place, &ctx) > salience_score(&without, &ctx));
    }
}
