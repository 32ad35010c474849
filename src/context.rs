//! Article-level context, collected once and passed read-only into
//! per-sentence extraction.
//!
//! Context propagation (filling a missing where/when slot from what the
//! article as a whole establishes) is modeled as an explicit value rather
//! than mutation of shared state, so per-article processing stays purely
//! functional and trivially parallel across articles.

use chrono::NaiveDate;

use crate::annotation::{ArticleAnnotation, EntityType};
use crate::dates;
use crate::event::Place;
use crate::gazetteer::Gazetteer;

/// Read-only article-level context for slot extraction and consolidation.
#[derive(Debug, Clone, Default)]
pub struct ArticleContext {
    /// Full cleaned article text, when supplied.
    pub article_text: Option<String>,
    /// Parsed publication date, when supplied and parseable.
    pub publication_date: Option<NaiveDate>,
    /// Text of the lead (first) sentence; empty for an empty article.
    pub lead_text: String,
    /// First location mentioned in the article, with country when known.
    pub lead_location: Option<Place>,
    /// Organization entity texts in article order.
    pub organizations: Vec<String>,
    /// Person entity texts in article order.
    pub persons: Vec<String>,
    /// First DATE entity text in the article.
    pub lead_date: Option<String>,
}

impl ArticleContext {
    /// Collect context from an annotated article.
    #[must_use]
    pub fn collect(article: &ArticleAnnotation, gazetteer: &Gazetteer) -> Self {
        let mut ctx = ArticleContext {
            article_text: article.text.clone(),
            publication_date: article
                .published
                .as_deref()
                .and_then(dates::parse_article_date),
            lead_text: article
                .sentences
                .first()
                .map(|s| s.text.clone())
                .unwrap_or_default(),
            ..ArticleContext::default()
        };

        for sentence in &article.sentences {
            for entity in &sentence.entities {
                match entity.entity_type {
                    EntityType::Location => {
                        if ctx.lead_location.is_none() {
                            let mut place =
                                Place::new(entity.text.clone(), crate::event::PlaceKind::Propagated);
                            let country = entity.metadata.get("country").cloned().or_else(|| {
                                gazetteer
                                    .lookup_location(&entity.text)
                                    .and_then(|r| r.country.map(str::to_string))
                            });
                            if let Some(country) = country {
                                place = place.with_country(country);
                            }
                            ctx.lead_location = Some(place);
                        }
                    }
                    EntityType::Organization => ctx.organizations.push(entity.text.clone()),
                    EntityType::Person => ctx.persons.push(entity.text.clone()),
                    EntityType::Date => {
                        if ctx.lead_date.is_none() {
                            ctx.lead_date = Some(entity.text.clone());
                        }
                    }
                    _ => {}
                }
            }
        }

        ctx
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::annotation::{Entity, SentenceAnnotation, Token};

    fn sentence(words: &[(&str, &str, &str)], entities: Vec<Entity>) -> SentenceAnnotation {
        let tokens = words
            .iter()
            .enumerate()
            .map(|(i, (w, l, p))| Token::new(*w, *l, *p, i + 1))
            .collect();
        SentenceAnnotation::new(tokens, entities, vec![]).unwrap()
    }

    #[test]
    fn collects_lead_location_and_orgs() {
        let s0 = sentence(
            &[("Explosion", "explosion", "NN"), ("in", "in", "IN"), ("Mogadishu", "Mogadishu", "NNP")],
            vec![Entity::new("Mogadishu", EntityType::Location)],
        );
        let s1 = sentence(
            &[("Al-Shabaab", "Al-Shabaab", "NNP"), ("claimed", "claim", "VBD")],
            vec![Entity::new("Al-Shabaab", EntityType::Organization)],
        );
        let article = ArticleAnnotation::new(vec![s0, s1]).with_published("March 15, 2024");
        let ctx = ArticleContext::collect(&article, &Gazetteer::new());

        let place = ctx.lead_location.unwrap();
        assert_eq!(place.text, "Mogadishu");
        assert_eq!(place.country.as_deref(), Some("Somalia"));
        assert_eq!(ctx.organizations, vec!["Al-Shabaab"]);
        assert_eq!(
            ctx.publication_date,
            NaiveDate::from_ymd_opt(2024, 3, 15)
        );
        assert!(ctx.lead_text.starts_with("Explosion"));
    }

    #[test]
    fn empty_article_degrades() {
        let ctx = ArticleContext::collect(&ArticleAnnotation::default(), &Gazetteer::new());
        assert!(ctx.lead_location.is_none());
        assert!(ctx.publication_date.is_none());
        assert!(ctx.lead_text.is_empty());
    }
}
