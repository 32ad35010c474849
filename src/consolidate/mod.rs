//! Event consolidation - turning per-trigger extractions into one canonical
//! event per real-world incident.
//!
//! Four passes run in a fixed order, each consuming the previous pass's
//! output:
//!
//! 1. [`reciprocal`] - split mutual-violence mentions into two directed
//!    events;
//! 2. [`merge`] - merge near-duplicate mentions within adjacent sentences;
//! 3. [`cluster`] - article-wide coreference clustering by pairwise score;
//! 4. [`salience`] - keep newsworthy events, suppress background mentions.
//!
//! A final confidence floor drops events below [`CONFIDENCE_FLOOR`].
//!
//! The thresholds here are empirically tuned magic numbers; they are named
//! constants so they can move without touching control flow.

pub mod cluster;
pub mod merge;
pub mod reciprocal;
pub mod salience;

use crate::context::ArticleContext;
use crate::event::Event;
use crate::gazetteer::Gazetteer;

/// Maximum sentence-index distance for the merge pass.
pub const MERGE_MAX_SENTENCE_GAP: usize = 2;
/// Minimum pairwise score for a cluster edge.
pub const CLUSTER_EDGE_THRESHOLD: f64 = 4.0;
/// Minimum salience score to keep an event outright.
pub const SALIENCE_KEEP_THRESHOLD: i32 = 7;
/// Events below this confidence are dropped at the end.
pub const CONFIDENCE_FLOOR: f64 = 0.30;

/// The four-pass event consolidator.
#[derive(Debug, Clone, Copy, Default)]
pub struct Consolidator {
    gazetteer: Gazetteer,
}

impl Consolidator {
    /// Create a consolidator backed by the static gazetteer.
    #[must_use]
    pub fn new(gazetteer: Gazetteer) -> Self {
        Self { gazetteer }
    }

    /// Run all four passes and the confidence floor.
    #[must_use]
    pub fn consolidate(&self, events: Vec<Event>, ctx: &ArticleContext) -> Vec<Event> {
        let events = reciprocal::split(events, &self.gazetteer);
        let events = merge::merge_similar(events);
        let events = cluster::cluster(events);
        let events = salience::filter(events, ctx);

        let before = events.len();
        let kept: Vec<Event> = events
            .into_iter()
            .filter(|e| e.confidence.get() >= CONFIDENCE_FLOOR)
            .collect();
        if kept.len() < before {
            log::debug!(
                "confidence floor dropped {} of {} events",
                before - kept.len(),
                before
            );
        }
        kept
    }
}
