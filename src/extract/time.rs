//! Time ("when") resolution.
//!
//! Strategies, in order:
//!
//! 1. first DATE entity, normalized against the article's publication date;
//! 2. first temporal keyword (weekdays, "yesterday", time-of-day words),
//!    normalized the same way;
//! 3. the publication date itself, as an inferred time.

use crate::annotation::{EntityType, SentenceAnnotation};
use crate::context::ArticleContext;
use crate::dates;
use crate::event::{TimeExpr, TimeKind};
use crate::lexicon;

/// Resolve the time slot for a sentence.
#[must_use]
pub fn resolve(sentence: &SentenceAnnotation, ctx: &ArticleContext) -> Option<TimeExpr> {
    date_entity(sentence, ctx)
        .or_else(|| temporal_keyword(sentence, ctx))
        .or_else(|| publication_date(ctx))
}

/// Strategy 1: first DATE entity.
fn date_entity(sentence: &SentenceAnnotation, ctx: &ArticleContext) -> Option<TimeExpr> {
    let entity = sentence.first_entity(&EntityType::Date)?;
    let mut expr = TimeExpr::new(entity.text.clone(), TimeKind::Explicit);
    if let Some(date) = dates::normalize_date(&entity.text, ctx.publication_date) {
        expr = expr.with_normalized(date);
    }
    Some(expr)
}

/// Strategy 2: first temporal keyword token.
fn temporal_keyword(sentence: &SentenceAnnotation, ctx: &ArticleContext) -> Option<TimeExpr> {
    let token = sentence
        .tokens
        .iter()
        .find(|t| lexicon::TEMPORAL_WORDS.contains(&t.lemma_lower().as_str()))?;
    let mut expr = TimeExpr::new(token.word.clone(), TimeKind::Relative);
    if let Some(date) = dates::normalize_date(&token.word, ctx.publication_date) {
        expr = expr.with_normalized(date);
    }
    Some(expr)
}

/// Strategy 3: fall back to the publication date.
fn publication_date(ctx: &ArticleContext) -> Option<TimeExpr> {
    let date = ctx.publication_date?;
    Some(TimeExpr::new(date.to_string(), TimeKind::Inferred).with_normalized(date))
}
