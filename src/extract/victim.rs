//! Victim ("whom") resolution.
//!
//! Strategies, in order:
//!
//! 1. dependency object of the trigger (excluding location/date/time
//!    tokens), expanded to a noun phrase and carrying the sentence's
//!    casualty counts;
//! 2. casualty counts with no object and no victim noun in the sentence -
//!    synthesize a generic "casualties" victim carrying the counts;
//! 3. nearest following PERSON entity (the named-victim case);
//! 4. a victim noun co-located with a casualty count.
//!
//! Counts always come from the full sentence text, so the combined
//! "N dead and M injured" pattern wins regardless of which tokens the
//! dependency object happens to cover.

use crate::annotation::SentenceAnnotation;
use crate::event::{Trigger, Victim};
use crate::lexicon;

use super::casualty::{self, CasualtyCounts};
use super::{expand_noun_phrase, phrase_text};

/// Object relations that link a trigger to its victim.
const OBJECT_RELATIONS: &[&str] = &["dobj", "obj", "nmod", "obl", "iobj"];

/// Entity tags excluded from object candidates.
const EXCLUDED_NER: &[&str] = &["LOCATION", "DATE", "TIME"];

/// Resolve the victim slot for a trigger.
#[must_use]
pub fn resolve(trigger: &Trigger, sentence: &SentenceAnnotation) -> Option<Victim> {
    let counts = casualty::extract_casualties(&sentence.text);

    dependency_object(trigger, sentence, counts)
        .or_else(|| synthesized_casualties(sentence, counts))
        .or_else(|| following_person(trigger, sentence))
        .or_else(|| victim_noun_with_count(sentence, counts))
}

/// Strategy 1: dependency object, noun-phrase expanded.
fn dependency_object(
    trigger: &Trigger,
    sentence: &SentenceAnnotation,
    counts: CasualtyCounts,
) -> Option<Victim> {
    let arc = sentence.dependents_of(trigger.index).find(|arc| {
        if !OBJECT_RELATIONS.contains(&arc.relation.as_str()) {
            return false;
        }
        sentence
            .token(arc.dependent)
            .map(|t| {
                t.ner
                    .as_deref()
                    .map(|n| !EXCLUDED_NER.contains(&n.to_uppercase().as_str()))
                    .unwrap_or(true)
            })
            .unwrap_or(false)
    })?;

    let span = expand_noun_phrase(arc.dependent, sentence);
    let text = phrase_text(&span, sentence);
    if text.is_empty() {
        return None;
    }
    Some(Victim::new(text).with_counts(counts.deaths, counts.injuries))
}

/// Strategy 2: counts but no object and no victim noun to name.
fn synthesized_casualties(
    sentence: &SentenceAnnotation,
    counts: CasualtyCounts,
) -> Option<Victim> {
    if !counts.any() {
        return None;
    }
    // A victim noun in the sentence means strategy 4 can produce a richer
    // record; only synthesize when there is nothing better to name.
    if victim_noun(sentence).is_some() {
        return None;
    }
    Some(Victim::new("casualties").with_counts(counts.deaths, counts.injuries))
}

/// Strategy 3: nearest following PERSON entity.
fn following_person(trigger: &Trigger, sentence: &SentenceAnnotation) -> Option<Victim> {
    let trigger_offset = sentence.token_char_offset(trigger.index)?;

    let mut best: Option<(usize, &str)> = None;
    for entity in &sentence.entities {
        if entity.entity_type != crate::annotation::EntityType::Person {
            continue;
        }
        if let Some(pos) = sentence.text.find(&entity.text) {
            if pos > trigger_offset && best.map(|(p, _)| pos < p).unwrap_or(true) {
                best = Some((pos, &entity.text));
            }
        }
    }

    best.map(|(_, text)| Victim::new(text))
}

/// Strategy 4: victim noun co-located with a casualty count.
fn victim_noun_with_count(
    sentence: &SentenceAnnotation,
    counts: CasualtyCounts,
) -> Option<Victim> {
    if !counts.any() {
        return None;
    }
    let token = victim_noun(sentence)?;
    Some(Victim::new(token).with_counts(counts.deaths, counts.injuries))
}

/// First victim noun in the sentence, if any.
fn victim_noun(sentence: &SentenceAnnotation) -> Option<String> {
    sentence
        .tokens
        .iter()
        .find(|t| lexicon::VICTIM_NOUNS.contains(&t.lemma_lower().as_str()))
        .map(|t| t.word.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::annotation::{DependencyArc, Entity, EntityType, Token};
    use crate::event::{TriggerKind, VictimKind};

    fn trig(lemma: &str, index: usize) -> Trigger {
        Trigger {
            word: lemma.to_string(),
            lemma: lemma.to_string(),
            pos: "VBD".to_string(),
            index,
            sentence_index: 0,
            kind: TriggerKind::Verb,
        }
    }

    #[test]
    fn object_with_counts() {
        // "Gunmen killed 12 people"
        let tokens = vec![
            Token::new("Gunmen", "gunman", "NNS", 1),
            Token::new("killed", "kill", "VBD", 2),
            Token::new("12", "12", "CD", 3),
            Token::new("people", "people", "NNS", 4),
        ];
        let deps = vec![
            DependencyArc::new(2, 1, "nsubj"),
            DependencyArc::new(2, 4, "dobj"),
            DependencyArc::new(4, 3, "nummod"),
        ];
        let sentence = SentenceAnnotation::new(tokens, vec![], deps).unwrap();
        let victim = resolve(&trig("kill", 2), &sentence).unwrap();
        assert_eq!(victim.text, "12 people");
        assert_eq!(victim.deaths, Some(12));
    }

    #[test]
    fn location_object_is_excluded() {
        // "Militants attacked Maiduguri" - the nmod target is a LOCATION.
        let tokens = vec![
            Token::new("Militants", "militant", "NNS", 1),
            Token::new("attacked", "attack", "VBD", 2),
            Token::new("Maiduguri", "Maiduguri", "NNP", 3).with_ner("LOCATION"),
        ];
        let deps = vec![
            DependencyArc::new(2, 1, "nsubj"),
            DependencyArc::new(2, 3, "dobj"),
        ];
        let sentence = SentenceAnnotation::new(tokens, vec![], deps).unwrap();
        assert!(resolve(&trig("attack", 2), &sentence).is_none());
    }

    #[test]
    fn synthesized_when_no_object_or_noun() {
        // "The blast killed 7" - no dependencies, no victim noun.
        let tokens = vec![
            Token::new("The", "the", "DT", 1),
            Token::new("blast", "blast", "NN", 2),
            Token::new("killed", "kill", "VBD", 3),
            Token::new("7", "7", "CD", 4),
        ];
        let sentence = SentenceAnnotation::new(tokens, vec![], vec![]).unwrap();
        let victim = resolve(&trig("kill", 3), &sentence).unwrap();
        assert_eq!(victim.text, "casualties");
        assert_eq!(victim.deaths, Some(7));
        assert!(victim.is_generic());
        assert_eq!(victim.kind, VictimKind::Unknown);
    }

    #[test]
    fn victim_noun_beats_generic() {
        // "The blast killed 7 villagers" without usable dependencies.
        let tokens = vec![
            Token::new("The", "the", "DT", 1),
            Token::new("blast", "blast", "NN", 2),
            Token::new("killed", "kill", "VBD", 3),
            Token::new("7", "7", "CD", 4),
            Token::new("villagers", "villager", "NNS", 5),
        ];
        let sentence = SentenceAnnotation::new(tokens, vec![], vec![]).unwrap();
        let victim = resolve(&trig("kill", 3), &sentence).unwrap();
        assert_eq!(victim.text, "villagers");
        assert_eq!(victim.deaths, Some(7));
        assert_eq!(victim.kind, VictimKind::Civilian);
    }

    #[test]
    fn named_person_victim() {
        // "Gunmen assassinated Ahmed Wali" - no counts, PERSON entity after
        // the trigger.
        let tokens = vec![
            Token::new("Gunmen", "gunman", "NNS", 1),
            Token::new("assassinated", "assassinate", "VBD", 2),
            Token::new("Ahmed", "Ahmed", "NNP", 3).with_ner("PERSON"),
            Token::new("Wali", "Wali", "NNP", 4).with_ner("PERSON"),
        ];
        let sentence = SentenceAnnotation::new(
            tokens,
            vec![Entity::new("Ahmed Wali", EntityType::Person)],
            vec![],
        )
        .unwrap();
        let victim = resolve(&trig("assassinate", 2), &sentence).unwrap();
        assert_eq!(victim.text, "Ahmed Wali");
        assert!(!victim.is_generic());
    }

    #[test]
    fn nothing_resolves_to_none() {
        let tokens = vec![
            Token::new("They", "they", "PRP", 1),
            Token::new("clashed", "clash", "VBD", 2),
        ];
        let sentence = SentenceAnnotation::new(tokens, vec![], vec![]).unwrap();
        assert!(resolve(&trig("clash", 2), &sentence).is_none());
    }
}
