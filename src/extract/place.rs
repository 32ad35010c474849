//! Location ("where") resolution.
//!
//! Strategies, in order:
//!
//! 1. first LOCATION entity in the sentence, carrying gazetteer metadata;
//! 2. "in <Capitalized token>" preposition fallback;
//! 3. propagation of the article's lead location.

use crate::annotation::{EntityType, SentenceAnnotation};
use crate::context::ArticleContext;
use crate::event::{Place, PlaceKind};
use crate::gazetteer::Gazetteer;

/// Resolve the place slot for a sentence.
#[must_use]
pub fn resolve(
    sentence: &SentenceAnnotation,
    ctx: &ArticleContext,
    gazetteer: &Gazetteer,
) -> Option<Place> {
    location_entity(sentence, gazetteer)
        .or_else(|| preposition_fallback(sentence, gazetteer))
        .or_else(|| ctx.lead_location.clone())
}

/// Strategy 1: first LOCATION entity.
fn location_entity(sentence: &SentenceAnnotation, gazetteer: &Gazetteer) -> Option<Place> {
    let entity = sentence.first_entity(&EntityType::Location)?;
    let mut place = Place::new(entity.text.clone(), PlaceKind::Named);
    let country = entity.metadata.get("country").cloned().or_else(|| {
        gazetteer
            .lookup_location(&entity.text)
            .and_then(|r| r.country.map(str::to_string))
    });
    if let Some(country) = country {
        place = place.with_country(country);
    }
    Some(place)
}

/// Strategy 2: "in <Proper>" pattern over tokens.
fn preposition_fallback(sentence: &SentenceAnnotation, gazetteer: &Gazetteer) -> Option<Place> {
    for window in sentence.tokens.windows(2) {
        let (prep, candidate) = (&window[0], &window[1]);
        if prep.lemma_lower() == "in" && candidate.pos.starts_with("NNP") {
            let mut place = Place::new(candidate.word.clone(), PlaceKind::Inferred);
            if let Some(record) = gazetteer.lookup_location(&candidate.word) {
                if let Some(country) = record.country {
                    place = place.with_country(country);
                }
            }
            return Some(place);
        }
    }
    None
}
