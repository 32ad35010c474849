//! Actor ("who") resolution.
//!
//! Five strategies, tried in order, first success wins:
//!
//! 1. article-wide responsibility-claim patterns, cross-matched to a known
//!    ORGANIZATION entity when possible;
//! 2. title/lead-sentence actor patterns ("Three police officers",
//!    "A suicide bomber", "armed gang");
//! 3. dependency subject of the trigger, expanded to a full noun phrase;
//! 4. nearest preceding ORGANIZATION/PERSON entity within 100 characters of
//!    the trigger;
//! 5. nearest preceding noun phrase within 5 tokens.
//!
//! Every candidate string passes the actor plausibility filter before it is
//! accepted.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::annotation::{EntityType, SentenceAnnotation};
use crate::context::ArticleContext;
use crate::event::{Actor, ActorKind, ActorProvenance, Trigger};
use crate::gazetteer::Gazetteer;
use crate::lexicon;

use super::{expand_noun_phrase, phrase_text};

/// Character window for the nearest-preceding-entity strategy.
const NEARBY_ENTITY_WINDOW: usize = 100;
/// Token window for the nearest-preceding-noun-phrase strategy.
const NEARBY_PHRASE_WINDOW: usize = 5;

/// Subject relations that link a trigger to its actor.
const SUBJECT_RELATIONS: &[&str] = &["nsubj", "nsubjpass", "agent", "csubj"];

static CLAIM_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    vec![
        Regex::new(
            r"([A-Z][\w'’\-]*(?:\s+[A-Z][\w'’\-]*)*)\s+(?:has\s+|have\s+|had\s+)?(?:claimed|claims|took|takes)\s+responsibility",
        )
        .unwrap(),
        Regex::new(
            r"([A-Z][\w'’\-]*(?:\s+[A-Z][\w'’\-]*)*)\s+said\s+(?:it|they)\s+(?:was|were)\s+responsible",
        )
        .unwrap(),
    ]
});

static TITLE_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    vec![
        Regex::new(
            r"(?i)\b((?:a|an|one|two|three|four|five|six|seven|eight|nine|ten|\d+)\s+(?:[a-z\-]+\s+){0,2}?(?:officers?|bombers?|gunmen|gunman|militants?|soldiers?|attackers?|assailants?|robbers?|bandits?|fighters?|herdsmen))\b",
        )
        .unwrap(),
        Regex::new(r"(?i)\b(armed\s+(?:gang|men|group|robbers|assailants|herdsmen))\b").unwrap(),
    ]
});

/// Resolve the actor slot for a trigger.
#[must_use]
pub fn resolve(
    trigger: &Trigger,
    sentence: &SentenceAnnotation,
    ctx: &ArticleContext,
    gazetteer: &Gazetteer,
) -> Option<Actor> {
    responsibility_claim(sentence, ctx, gazetteer)
        .or_else(|| title_pattern(ctx, gazetteer))
        .or_else(|| dependency_subject(trigger, sentence, gazetteer))
        .or_else(|| nearby_entity(trigger, sentence, gazetteer))
        .or_else(|| nearby_noun_phrase(trigger, sentence, gazetteer))
}

/// Strategy 1: responsibility-claim patterns over the article text (falling
/// back to the sentence when the caller supplied no article text).
fn responsibility_claim(
    sentence: &SentenceAnnotation,
    ctx: &ArticleContext,
    gazetteer: &Gazetteer,
) -> Option<Actor> {
    let haystack = ctx.article_text.as_deref().unwrap_or(&sentence.text);

    for pattern in CLAIM_PATTERNS.iter() {
        if let Some(caps) = pattern.captures(haystack) {
            let candidate = caps[1].trim().to_string();
            // Prefer a known organization whose name overlaps the capture.
            let resolved = ctx
                .organizations
                .iter()
                .chain(sentence.entities.iter().filter_map(|e| {
                    (e.entity_type == EntityType::Organization).then_some(&e.text)
                }))
                .find(|org| {
                    candidate.to_lowercase().contains(&org.to_lowercase())
                        || org.to_lowercase().contains(&candidate.to_lowercase())
                })
                .cloned()
                .unwrap_or(candidate);

            if is_plausible_actor(&resolved, gazetteer) {
                return Some(enrich(
                    Actor::new(resolved, ActorProvenance::ResponsibilityClaim),
                    gazetteer,
                ));
            }
        }
    }
    None
}

/// Strategy 2: number/article + actor-noun patterns in the lead sentence.
fn title_pattern(ctx: &ArticleContext, gazetteer: &Gazetteer) -> Option<Actor> {
    if ctx.lead_text.is_empty() {
        return None;
    }
    for pattern in TITLE_PATTERNS.iter() {
        if let Some(caps) = pattern.captures(&ctx.lead_text) {
            let candidate = caps[1].trim().to_string();
            if is_plausible_actor(&candidate, gazetteer) {
                return Some(enrich(
                    Actor::new(candidate, ActorProvenance::TitlePattern),
                    gazetteer,
                ));
            }
        }
    }
    None
}

/// Strategy 3: dependency subject of the trigger, noun-phrase expanded.
fn dependency_subject(
    trigger: &Trigger,
    sentence: &SentenceAnnotation,
    gazetteer: &Gazetteer,
) -> Option<Actor> {
    let arc = sentence
        .dependents_of(trigger.index)
        .find(|arc| SUBJECT_RELATIONS.contains(&arc.relation.as_str()))?;

    let span = expand_noun_phrase(arc.dependent, sentence);
    let text = phrase_text(&span, sentence);
    if is_plausible_actor(&text, gazetteer) {
        Some(enrich(
            Actor::new(text, ActorProvenance::DependencyParse),
            gazetteer,
        ))
    } else {
        None
    }
}

/// Strategy 4: nearest preceding ORGANIZATION/PERSON entity within the
/// character window.
fn nearby_entity(
    trigger: &Trigger,
    sentence: &SentenceAnnotation,
    gazetteer: &Gazetteer,
) -> Option<Actor> {
    let trigger_offset = sentence.token_char_offset(trigger.index)?;

    let mut best: Option<(usize, &str)> = None;
    for entity in &sentence.entities {
        if !matches!(
            entity.entity_type,
            EntityType::Organization | EntityType::Person
        ) {
            continue;
        }
        if let Some(pos) = sentence.text.find(&entity.text) {
            if pos < trigger_offset && trigger_offset - pos <= NEARBY_ENTITY_WINDOW {
                // Nearest = largest starting offset before the trigger.
                if best.map(|(p, _)| pos > p).unwrap_or(true) {
                    best = Some((pos, &entity.text));
                }
            }
        }
    }

    let (_, text) = best?;
    if is_plausible_actor(text, gazetteer) {
        Some(enrich(
            Actor::new(text, ActorProvenance::NearbyEntity),
            gazetteer,
        ))
    } else {
        None
    }
}

/// Strategy 5: nearest preceding noun phrase within the token window.
fn nearby_noun_phrase(
    trigger: &Trigger,
    sentence: &SentenceAnnotation,
    gazetteer: &Gazetteer,
) -> Option<Actor> {
    let start = trigger.index.saturating_sub(NEARBY_PHRASE_WINDOW).max(1);
    for index in (start..trigger.index).rev() {
        let token = sentence.token(index)?;
        if token.pos.starts_with("NN") {
            let span = expand_noun_phrase(index, sentence);
            let text = phrase_text(&span, sentence);
            if is_plausible_actor(&text, gazetteer) {
                return Some(enrich(
                    Actor::new(text, ActorProvenance::NounPhrase),
                    gazetteer,
                ));
            }
        }
    }
    None
}

/// Attach gazetteer knowledge (known group, kind, metadata) to an actor.
fn enrich(mut actor: Actor, gazetteer: &Gazetteer) -> Actor {
    let record = gazetteer
        .lookup_group(&actor.text)
        .or_else(|| gazetteer.groups_in(&actor.text).into_iter().next());
    if let Some(record) = record {
        actor.known_group = true;
        actor.kind = match record.kind {
            "TERRORIST" => ActorKind::Terrorist,
            "REBEL" => ActorKind::Rebel,
            _ => actor.kind,
        };
        actor
            .metadata
            .insert("group".to_string(), record.name.to_string());
        if let Some(country) = record.country {
            actor
                .metadata
                .insert("country".to_string(), country.to_string());
        }
    }
    actor
}

/// Actor plausibility filter.
///
/// Known actor keywords are accepted before any rejection rule applies.
/// Rejections: empty strings, pure function/time words, place-looking
/// phrases. A multi-word phrase with every word capitalized is accepted as a
/// likely organization name.
#[must_use]
pub fn is_plausible_actor(text: &str, gazetteer: &Gazetteer) -> bool {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return false;
    }

    let words: Vec<&str> = trimmed.split_whitespace().collect();

    // Unconditional accept: any known actor keyword.
    if words.iter().any(|w| {
        lexicon::is_actor_keyword(w.trim_matches(|c: char| !c.is_alphanumeric() && c != '-'))
    }) {
        return true;
    }

    // Reject: nothing but function/time words.
    let all_noise = words.iter().all(|w| {
        let lower = w.to_lowercase();
        lexicon::FUNCTION_WORDS.contains(&lower.as_str())
            || lexicon::TEMPORAL_WORDS.contains(&lower.as_str())
    });
    if all_noise {
        return false;
    }

    // Reject: place-looking phrases.
    let lower = trimmed.to_lowercase();
    if lower.starts_with("in ") || lower.starts_with("at ") || lower.starts_with("near ") {
        return false;
    }
    if gazetteer.lookup_location(trimmed).is_some() {
        return false;
    }

    // Accept: multi-word phrase with every word capitalized (likely an
    // organization name).
    if words.len() >= 2
        && words
            .iter()
            .all(|w| w.chars().next().map(char::is_uppercase).unwrap_or(false))
    {
        return true;
    }

    true
}
