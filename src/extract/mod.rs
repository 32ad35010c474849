//! 5W1H extraction - one event per trigger, six slots resolved by layered
//! strategy cascades.
//!
//! Each slot module exposes a `resolve` function trying its strategies in a
//! fixed order and returning on the first success. A strategy that finds
//! nothing returns `None`; the slot stays empty and lowers the event's
//! completeness and confidence instead of failing the sentence.

pub mod actor;
pub mod casualty;
pub mod method;
pub mod place;
pub mod time;
pub mod victim;

pub use casualty::{extract_casualties, CasualtyCounts};

use crate::annotation::SentenceAnnotation;
use crate::context::ArticleContext;
use crate::event::{Event, PlaceKind, TimeKind, Trigger};
use crate::gazetteer::Gazetteer;
use crate::scoring;

/// Modifier relations pulled into a noun phrase around its head.
const MODIFIER_RELATIONS: &[&str] = &["det", "amod", "compound", "nummod", "nmod", "case"];

/// Expand a head token into its full noun phrase.
///
/// Collects the head plus its direct modifier dependents and returns the
/// sorted 1-based token indices of the phrase.
#[must_use]
pub(crate) fn expand_noun_phrase(head: usize, sentence: &SentenceAnnotation) -> Vec<usize> {
    let mut indices = vec![head];
    for arc in sentence.dependents_of(head) {
        if MODIFIER_RELATIONS.contains(&arc.relation.as_str()) {
            indices.push(arc.dependent);
        }
    }
    indices.sort_unstable();
    indices.dedup();
    indices
}

/// Join the words of a token-index span.
#[must_use]
pub(crate) fn phrase_text(indices: &[usize], sentence: &SentenceAnnotation) -> String {
    indices
        .iter()
        .filter_map(|&i| sentence.token(i))
        .map(|t| t.word.as_str())
        .collect::<Vec<_>>()
        .join(" ")
}

/// The 5W1H extractor.
#[derive(Debug, Clone, Copy, Default)]
pub struct FiveW1HExtractor {
    gazetteer: Gazetteer,
}

impl FiveW1HExtractor {
    /// Create an extractor backed by the static gazetteer.
    #[must_use]
    pub fn new(gazetteer: Gazetteer) -> Self {
        Self { gazetteer }
    }

    /// Extract an event for one trigger.
    ///
    /// Slots that no strategy resolves stay `None`. Slots propagated from
    /// article context (a `Propagated` place or `Inferred` time) mark the
    /// event as `inferred`.
    #[must_use]
    pub fn extract(
        &self,
        trigger: Trigger,
        sentence: &SentenceAnnotation,
        ctx: &ArticleContext,
    ) -> Event {
        let mut event = Event::new(trigger, sentence.text.clone());

        event.actor = actor::resolve(&event.trigger, sentence, ctx, &self.gazetteer);
        event.victim = victim::resolve(&event.trigger, sentence);
        event.place = place::resolve(sentence, ctx, &self.gazetteer);
        event.time = time::resolve(sentence, ctx);
        event.method = method::resolve(&event.trigger, sentence);

        let propagated_place = matches!(
            event.place.as_ref().map(|p| p.kind),
            Some(PlaceKind::Propagated)
        );
        let inferred_time = matches!(
            event.time.as_ref().map(|t| t.kind),
            Some(TimeKind::Inferred)
        );
        event.inferred = propagated_place || inferred_time;

        scoring::rescore(&mut event);
        log::debug!(
            "extracted {:?} event at sentence {} (confidence {})",
            event.class,
            event.sentence_index,
            event.confidence
        );
        event
    }
}
