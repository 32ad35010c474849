//! # vex
//!
//! Violent-incident extraction from annotated news text.
//!
//! Given per-sentence linguistic annotations (tokens, POS tags, named
//! entities, dependency arcs), vex:
//!
//! - detects violent-act **triggers** from a violence lexicon;
//! - extracts a **5W1H** record (Who/What/Whom/Where/When/How) per trigger
//!   through layered fallback strategies;
//! - **consolidates** mentions of the same real-world incident in four
//!   fixed-order passes (reciprocal-violence split, similar-event merge,
//!   coreference clustering, salience filtering);
//! - classifies each surviving incident into a three-level **taxonomy**.
//!
//! ## Quick start
//!
//! ```rust
//! use vex::prelude::*;
//!
//! let tokens = vec![
//!     Token::new("Militants", "militant", "NNS", 1),
//!     Token::new("killed", "kill", "VBD", 2),
//!     Token::new("15", "15", "CD", 3),
//!     Token::new("civilians", "civilian", "NNS", 4),
//!     Token::new("in", "in", "IN", 5),
//!     Token::new("Maiduguri", "Maiduguri", "NNP", 6).with_ner("LOCATION"),
//! ];
//! let deps = vec![
//!     DependencyArc::new(2, 1, "nsubj"),
//!     DependencyArc::new(2, 4, "dobj"),
//!     DependencyArc::new(4, 3, "nummod"),
//! ];
//! let entities = vec![Entity::new("Maiduguri", EntityType::Location)];
//! let sentence = SentenceAnnotation::new(tokens, entities, deps).unwrap();
//! let article = ArticleAnnotation::new(vec![sentence]);
//!
//! let pipeline = ExtractionPipeline::new();
//! let events = pipeline.extract(&article);
//!
//! assert_eq!(events.len(), 1);
//! assert_eq!(events[0].actor.as_ref().unwrap().text, "Militants");
//! assert_eq!(events[0].deaths(), Some(15));
//! assert!(!events[0].level1.is_empty());
//! ```
//!
//! ## Design
//!
//! - **Typed records, not open maps**: every slot is a struct with
//!   defined-optional fields; missing-field handling is a compile-time
//!   concern.
//! - **First success wins**: each 5W1H slot is an ordered list of strategy
//!   functions sharing one signature; the first non-`None` result is taken.
//! - **Explicit article context**: article-level propagation flows through a
//!   read-only [`ArticleContext`] value, never shared mutable state.
//! - **Stateless and deterministic**: all lexicons and gazetteers are static
//!   read-only tables; processing order is fixed, so independent articles
//!   can be processed concurrently by construction.
//!
//! Missing optional inputs (dependencies, entities, article text, the
//! publication date) never raise: the affected slot stays unresolved and the
//! event's confidence drops instead.

#![warn(missing_docs)]

pub mod annotation;
pub mod consolidate;
pub mod context;
pub mod dates;
pub mod error;
pub mod event;
pub mod extract;
pub mod gazetteer;
pub mod lexicon;
pub mod scoring;
pub mod similarity;
pub mod taxonomy;
pub mod trigger;
pub mod types;

pub use annotation::{
    ArticleAnnotation, DependencyArc, Entity, EntityType, SentenceAnnotation, Token,
};
pub use consolidate::Consolidator;
pub use context::ArticleContext;
pub use error::{Error, Result};
pub use event::{
    Actor, ActorKind, ActorProvenance, Event, EventClass, Method, Place, PlaceKind, TimeExpr,
    TimeKind, Trigger, TriggerKind, Victim, VictimKind,
};
pub use extract::{CasualtyCounts, FiveW1HExtractor};
pub use gazetteer::Gazetteer;
pub use taxonomy::{TaxonomyClassifier, TaxonomyLabels};
pub use trigger::TriggerDetector;
pub use types::Confidence;

pub mod prelude {
    //! Commonly used items, re-exported for convenience.
    //!
    //! ```rust
    //! use vex::prelude::*;
    //!
    //! let pipeline = ExtractionPipeline::new();
    //! let events = pipeline.extract(&ArticleAnnotation::default());
    //! assert!(events.is_empty());
    //! ```
    pub use crate::annotation::{
        ArticleAnnotation, DependencyArc, Entity, EntityType, SentenceAnnotation, Token,
    };
    pub use crate::error::{Error, Result};
    pub use crate::event::{
        Actor, ActorKind, ActorProvenance, Event, EventClass, Method, Place, PlaceKind, TimeExpr,
        TimeKind, Trigger, TriggerKind, Victim, VictimKind,
    };
    pub use crate::types::Confidence;
    pub use crate::ExtractionPipeline;
}

/// The full extraction pipeline: triggers, 5W1H, consolidation, taxonomy.
///
/// Stateless between articles; one instance can process any number of
/// articles, concurrently if the caller wishes.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExtractionPipeline {
    detector: TriggerDetector,
    extractor: FiveW1HExtractor,
    consolidator: Consolidator,
    classifier: TaxonomyClassifier,
}

impl ExtractionPipeline {
    /// Create a pipeline backed by the built-in lexicon and gazetteer.
    #[must_use]
    pub fn new() -> Self {
        let gazetteer = Gazetteer::new();
        Self {
            detector: TriggerDetector::new(),
            extractor: FiveW1HExtractor::new(gazetteer),
            consolidator: Consolidator::new(gazetteer),
            classifier: TaxonomyClassifier::new(),
        }
    }

    /// Extract the canonical event list for one article.
    ///
    /// Provider entities are first backfilled with gazetteer hits (African
    /// locations and armed groups the provider's NER tends to miss). Then
    /// sentences are processed in article order and triggers in token
    /// order; the consolidator's four passes run in their fixed order, the
    /// confidence floor applies, and every surviving event receives its
    /// three taxonomy labels.
    #[must_use]
    pub fn extract(&self, article: &ArticleAnnotation) -> Vec<Event> {
        let gazetteer = Gazetteer::new();

        let enhanced = ArticleAnnotation {
            sentences: article
                .sentences
                .iter()
                .map(|s| SentenceAnnotation {
                    entities: gazetteer.enhance_entities(&s.entities, &s.text),
                    ..s.clone()
                })
                .collect(),
            text: article.text.clone(),
            published: article.published.clone(),
        };
        let ctx = ArticleContext::collect(&enhanced, &gazetteer);

        let mut events = Vec::new();
        for (sentence_index, sentence) in enhanced.sentences.iter().enumerate() {
            for trigger in self.detector.detect(sentence, sentence_index) {
                events.push(self.extractor.extract(trigger, sentence, &ctx));
            }
        }
        log::debug!("extracted {} raw events", events.len());

        let mut events = self.consolidator.consolidate(events, &ctx);
        for event in &mut events {
            self.classifier.apply(event);
        }
        log::debug!("{} canonical events after consolidation", events.len());
        events
    }

    /// Advisory violence score for a single sentence (see
    /// [`TriggerDetector::score_sentence`]).
    #[must_use]
    pub fn score_sentence(&self, sentence: &SentenceAnnotation, index: usize) -> Confidence {
        self.detector.score_sentence(sentence, index)
    }
}
