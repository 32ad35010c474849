//! Method ("how") resolution - weapons and tactics.
//!
//! Multi-word weapon terms are scanned over the raw sentence text (the
//! token stream splits "improvised explosive device" into three tokens);
//! single terms match on lemmas. When nothing is found, a weapon category
//! is inferred from the trigger lemma itself.

use crate::annotation::SentenceAnnotation;
use crate::event::{Method, Trigger};
use crate::lexicon;

/// Resolve the method slot for a trigger.
#[must_use]
pub fn resolve(trigger: &Trigger, sentence: &SentenceAnnotation) -> Option<Method> {
    let lower_text = sentence.text.to_lowercase();

    let mut weapons: Vec<String> = Vec::new();
    let mut tactics: Vec<String> = Vec::new();

    for term in lexicon::MULTIWORD_WEAPON_TERMS {
        if lower_text.contains(term) {
            push_unique(&mut weapons, term);
        }
    }

    for token in &sentence.tokens {
        let lemma = token.lemma_lower();
        if lexicon::WEAPON_TERMS.contains(&lemma.as_str()) {
            push_unique(&mut weapons, &lemma);
        }
        if lexicon::TACTIC_TERMS.contains(&lemma.as_str()) {
            push_unique(&mut tactics, &lemma);
        }
    }

    // Hyphenated tactic terms may not survive tokenization.
    for term in lexicon::TACTIC_TERMS {
        if term.contains('-') && lower_text.contains(term) {
            push_unique(&mut tactics, term);
        }
    }

    if !weapons.is_empty() || !tactics.is_empty() {
        return Some(Method::new(weapons, tactics));
    }

    inferred_from_trigger(&trigger.lemma)
}

/// Infer a weapon category from the trigger lemma.
fn inferred_from_trigger(lemma: &str) -> Option<Method> {
    let lemma = lemma.to_lowercase();
    if ["bomb", "explode", "detonate", "blast"]
        .iter()
        .any(|t| lemma.contains(t))
    {
        Some(Method::new(vec!["explosives".to_string()], vec![]))
    } else if ["shoot", "fire", "gun"].iter().any(|t| lemma.contains(t)) {
        Some(Method::new(vec!["firearms".to_string()], vec![]))
    } else {
        None
    }
}

fn push_unique(list: &mut Vec<String>, term: &str) {
    if !list.iter().any(|t| t == term) {
        list.push(term.to_string());
    }
}
