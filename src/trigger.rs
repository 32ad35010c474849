//! Trigger detection - finding the tokens that anchor violent-event
//! mentions.
//!
//! A token is a trigger when its POS/lemma pair hits the violence lexicon:
//! verbs (`VB*`) against the verb table, nouns (`NN*`) against the event-noun
//! table. A sentence may yield zero or several triggers; each becomes one
//! candidate event downstream.

use crate::annotation::SentenceAnnotation;
use crate::event::{Trigger, TriggerKind};
use crate::lexicon;
use crate::types::Confidence;

/// Maximum contribution of trigger count to the sentence score.
const TRIGGER_SCORE_CAP: f64 = 0.5;
/// Maximum contribution of violence-term density.
const DENSITY_SCORE_CAP: f64 = 0.3;
/// Maximum contribution of entity density.
const ENTITY_SCORE_CAP: f64 = 0.2;

/// Detects violence triggers in annotated sentences.
#[derive(Debug, Clone, Copy, Default)]
pub struct TriggerDetector;

impl TriggerDetector {
    /// Create a detector.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Detect triggers in a sentence, in token order.
    #[must_use]
    pub fn detect(&self, sentence: &SentenceAnnotation, sentence_index: usize) -> Vec<Trigger> {
        let mut triggers = Vec::new();

        for token in &sentence.tokens {
            let lemma = token.lemma_lower();
            let kind = if token.pos.starts_with("VB") && lexicon::is_violence_verb(&lemma) {
                Some(TriggerKind::Verb)
            } else if token.pos.starts_with("NN") && lexicon::is_violence_noun(&lemma) {
                Some(TriggerKind::Noun)
            } else {
                None
            };

            if let Some(kind) = kind {
                triggers.push(Trigger {
                    word: token.word.clone(),
                    lemma,
                    pos: token.pos.clone(),
                    index: token.index,
                    sentence_index,
                    kind,
                });
            }
        }

        triggers
    }

    /// Advisory 0-1 score for how likely the sentence describes a violent
    /// event: trigger density + violence-term density + entity density.
    ///
    /// This is not the per-event salience score used by the consolidator;
    /// it is a cheap pre-filter signal for callers that want one.
    #[must_use]
    pub fn score_sentence(&self, sentence: &SentenceAnnotation, sentence_index: usize) -> Confidence {
        let triggers = self.detect(sentence, sentence_index);
        if triggers.is_empty() {
            return Confidence::MIN;
        }

        let token_count = sentence.tokens.len().max(1);

        let base = (triggers.len() as f64 / 5.0).min(TRIGGER_SCORE_CAP);

        let violence_terms = sentence
            .tokens
            .iter()
            .filter(|t| lexicon::is_violence_term(&t.lemma_lower()))
            .count();
        let density = (violence_terms as f64 / token_count as f64).min(DENSITY_SCORE_CAP);

        let entity_score = (sentence.entities.len() as f64 / 10.0).min(ENTITY_SCORE_CAP);

        Confidence::saturating(base + density + entity_score)
    }
}
