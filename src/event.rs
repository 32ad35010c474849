//! Event records and their 5W1H slots.
//!
//! An [`Event`] is created once per (sentence, trigger) pair, mutated in
//! place by the consolidation passes (slots filled, flags set, scores
//! recomputed), and destroyed either by being absorbed into another event's
//! cluster or by falling under the final confidence floor.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::lexicon::{self, TriggerFamily};
use crate::types::Confidence;

// =============================================================================
// Trigger
// =============================================================================

/// Whether a trigger token was matched as a verb or an event noun.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TriggerKind {
    /// Matched against the violence-verb lexicon (POS `VB*`).
    Verb,
    /// Matched against the violence-noun lexicon (POS `NN*`).
    Noun,
}

/// A token whose lemma indicates a violent act, anchoring one event.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Trigger {
    /// Surface form.
    pub word: String,
    /// Lowercased lemma.
    pub lemma: String,
    /// Part-of-speech tag of the token.
    pub pos: String,
    /// 1-based token index within the sentence.
    pub index: usize,
    /// 0-based sentence index within the article.
    pub sentence_index: usize,
    /// Verb or noun trigger.
    pub kind: TriggerKind,
}

// =============================================================================
// Slot records
// =============================================================================

/// Coarse classification of an actor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ActorKind {
    /// State/security-force actor (army, police, ...).
    State,
    /// Terrorist actor.
    Terrorist,
    /// Rebel/insurgent actor.
    Rebel,
    /// Criminal actor (gang, bandits, ...).
    Criminal,
    /// Communal/ethnic actor.
    Communal,
    /// Could not be classified.
    #[default]
    Unknown,
}

impl ActorKind {
    /// Infer the actor kind from an actor phrase.
    #[must_use]
    pub fn from_text(text: &str) -> Self {
        let lower = text.to_lowercase();
        let has = |terms: &[&str]| terms.iter().any(|t| lower.contains(t));
        // State terms first: "police officers" must not classify as Unknown
        // because "officer" also appears in victim tables.
        if has(lexicon::STATE_ACTOR_TERMS) {
            ActorKind::State
        } else if has(lexicon::TERRORIST_ACTOR_TERMS) {
            ActorKind::Terrorist
        } else if has(lexicon::REBEL_ACTOR_TERMS) {
            ActorKind::Rebel
        } else if has(lexicon::CRIMINAL_ACTOR_TERMS) {
            ActorKind::Criminal
        } else if has(lexicon::COMMUNAL_ACTOR_TERMS)
            || lexicon::ETHNIC_GROUPS.iter().any(|g| lower.contains(g))
        {
            ActorKind::Communal
        } else {
            ActorKind::Unknown
        }
    }
}

/// Which strategy produced an actor slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActorProvenance {
    /// Article-wide "claimed responsibility" pattern.
    ResponsibilityClaim,
    /// Title/lead-sentence actor pattern.
    TitlePattern,
    /// Dependency subject of the trigger.
    DependencyParse,
    /// Nearest preceding ORGANIZATION/PERSON entity.
    NearbyEntity,
    /// Nearest preceding noun phrase.
    NounPhrase,
    /// Propagated from article-level context.
    ArticleContext,
    /// Synthesized by the reciprocal-violence split.
    ReciprocalPattern,
}

/// The "who" slot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Actor {
    /// Actor phrase text.
    pub text: String,
    /// Coarse actor type.
    pub kind: ActorKind,
    /// True when the actor matched a known armed group in the gazetteer.
    pub known_group: bool,
    /// Gazetteer metadata, when known.
    pub metadata: BTreeMap<String, String>,
    /// Which strategy produced this actor.
    pub provenance: ActorProvenance,
}

impl Actor {
    /// Create an actor, inferring the kind from its text.
    #[must_use]
    pub fn new(text: impl Into<String>, provenance: ActorProvenance) -> Self {
        let text = text.into();
        let kind = ActorKind::from_text(&text);
        Self {
            text,
            kind,
            known_group: false,
            metadata: BTreeMap::new(),
            provenance,
        }
    }

    /// Override the inferred kind.
    #[must_use]
    pub fn with_kind(mut self, kind: ActorKind) -> Self {
        self.kind = kind;
        self
    }

    /// Mark this actor as a known armed group.
    #[must_use]
    pub fn known(mut self) -> Self {
        self.known_group = true;
        self
    }
}

/// Coarse classification of a victim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum VictimKind {
    /// Civilian victim.
    Civilian,
    /// Combatant victim.
    Combatant,
    /// Could not be classified.
    #[default]
    Unknown,
}

impl VictimKind {
    /// Infer the victim kind from a victim phrase.
    #[must_use]
    pub fn from_text(text: &str) -> Self {
        let lower = text.to_lowercase();
        if lexicon::CIVILIAN_INDICATORS.iter().any(|t| lower.contains(t)) {
            VictimKind::Civilian
        } else if lexicon::COMBATANT_INDICATORS.iter().any(|t| lower.contains(t)) {
            VictimKind::Combatant
        } else {
            VictimKind::Unknown
        }
    }
}

/// The "whom" slot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Victim {
    /// Victim phrase text ("casualties" when synthesized from counts alone).
    pub text: String,
    /// Death count, when extracted. Always in (0, 10 000).
    pub deaths: Option<u32>,
    /// Injury count, when extracted. Always in (0, 10 000).
    pub injuries: Option<u32>,
    /// Coarse victim type.
    pub kind: VictimKind,
}

impl Victim {
    /// Create a victim, inferring the kind from its text.
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let kind = VictimKind::from_text(&text);
        Self {
            text,
            deaths: None,
            injuries: None,
            kind,
        }
    }

    /// Attach casualty counts.
    #[must_use]
    pub fn with_counts(mut self, deaths: Option<u32>, injuries: Option<u32>) -> Self {
        self.deaths = deaths;
        self.injuries = injuries;
        self
    }

    /// True when any casualty count is present.
    #[must_use]
    pub fn has_casualties(&self) -> bool {
        self.deaths.is_some() || self.injuries.is_some()
    }

    /// True when the victim is a synthesized/generic placeholder rather
    /// than a named or described victim.
    #[must_use]
    pub fn is_generic(&self) -> bool {
        let lower = self.text.to_lowercase();
        let words: Vec<&str> = lower
            .split_whitespace()
            .filter(|w| w.chars().any(|c| c.is_alphabetic()))
            .collect();
        words.is_empty()
            || words
                .iter()
                .all(|w| matches!(*w, "casualties" | "people" | "persons" | "victims"))
    }
}

/// How a location was resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlaceKind {
    /// Explicit LOCATION entity.
    Named,
    /// Inferred from an "in <Proper>" preposition pattern.
    Inferred,
    /// Propagated from the article's lead location.
    Propagated,
}

/// The "where" slot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Place {
    /// Location text.
    pub text: String,
    /// How the location was resolved.
    pub kind: PlaceKind,
    /// Containing country, when the gazetteer knows it.
    pub country: Option<String>,
}

impl Place {
    /// Create a place.
    #[must_use]
    pub fn new(text: impl Into<String>, kind: PlaceKind) -> Self {
        Self {
            text: text.into(),
            kind,
            country: None,
        }
    }

    /// Attach a country.
    #[must_use]
    pub fn with_country(mut self, country: impl Into<String>) -> Self {
        self.country = Some(country.into());
        self
    }
}

/// How a time expression was resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeKind {
    /// Explicit DATE entity.
    Explicit,
    /// Relative temporal keyword ("Friday", "yesterday").
    Relative,
    /// Inferred from the article's publication date.
    Inferred,
}

/// The "when" slot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimeExpr {
    /// Time expression text.
    pub text: String,
    /// How the expression was resolved.
    pub kind: TimeKind,
    /// Normalized calendar date, when resolvable.
    pub normalized: Option<NaiveDate>,
}

impl TimeExpr {
    /// Create a time expression.
    #[must_use]
    pub fn new(text: impl Into<String>, kind: TimeKind) -> Self {
        Self {
            text: text.into(),
            kind,
            normalized: None,
        }
    }

    /// Attach a normalized date.
    #[must_use]
    pub fn with_normalized(mut self, date: NaiveDate) -> Self {
        self.normalized = Some(date);
        self
    }
}

/// The "how" slot: weapons and tactics.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Method {
    /// Weapon terms found (or inferred from the trigger).
    pub weapons: Vec<String>,
    /// Tactic terms found.
    pub tactics: Vec<String>,
}

impl Method {
    /// Create a method slot.
    #[must_use]
    pub fn new(weapons: Vec<String>, tactics: Vec<String>) -> Self {
        Self { weapons, tactics }
    }

    /// True when neither weapons nor tactics were found.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.weapons.is_empty() && self.tactics.is_empty()
    }
}

// =============================================================================
// Event class ("what")
// =============================================================================

/// Preliminary event classification derived from the trigger lemma.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum EventClass {
    /// Killing / murder / massacre.
    Killing,
    /// Bombing / explosion.
    Bombing,
    /// Shooting.
    Shooting,
    /// Kidnapping / abduction.
    Kidnapping,
    /// Armed attack / raid / ambush.
    ArmedAttack,
    /// Unspecified violence.
    #[default]
    Violence,
}

impl EventClass {
    /// Map a trigger lemma to its event class.
    #[must_use]
    pub fn from_trigger_lemma(lemma: &str) -> Self {
        match lexicon::trigger_family(lemma) {
            Some(TriggerFamily::Kill) => EventClass::Killing,
            Some(TriggerFamily::Bomb) => EventClass::Bombing,
            Some(TriggerFamily::Shoot) => EventClass::Shooting,
            Some(TriggerFamily::Kidnap) => EventClass::Kidnapping,
            Some(TriggerFamily::Attack) => EventClass::ArmedAttack,
            Some(TriggerFamily::Injure) | Some(TriggerFamily::Destroy) | None => {
                EventClass::Violence
            }
        }
    }

    /// Snake-case label used in output records.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            EventClass::Killing => "killing",
            EventClass::Bombing => "bombing",
            EventClass::Shooting => "shooting",
            EventClass::Kidnapping => "kidnapping",
            EventClass::ArmedAttack => "armed_attack",
            EventClass::Violence => "violence",
        }
    }
}

// =============================================================================
// Event
// =============================================================================

/// One extracted (and later consolidated) violent incident.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Event {
    /// 0-based index of the sentence the trigger came from.
    pub sentence_index: usize,
    /// Sentence text, kept for salience and taxonomy keyword checks.
    pub sentence_text: String,
    /// The anchoring trigger.
    pub trigger: Trigger,
    /// Event class ("what") - always present.
    pub class: EventClass,
    /// Actor ("who").
    pub actor: Option<Actor>,
    /// Victim ("whom").
    pub victim: Option<Victim>,
    /// Location ("where").
    pub place: Option<Place>,
    /// Time ("when").
    pub time: Option<TimeExpr>,
    /// Method ("how").
    pub method: Option<Method>,
    /// Extraction confidence.
    pub confidence: Confidence,
    /// Slot completeness.
    pub completeness: Confidence,
    /// Set by the reciprocal-violence split; such events are never merged
    /// or clustered with any other event.
    pub reciprocal_violence: bool,
    /// True when a slot was propagated from article context rather than
    /// found in the sentence.
    pub inferred: bool,
    /// Number of raw events consolidated into this one (1 = no merge).
    pub cluster_size: usize,
    /// Sorted sentence indices that contributed to this event.
    pub source_sentences: Vec<usize>,
    /// Taxonomy level 1 (empty until classification).
    pub level1: String,
    /// Taxonomy level 2 (empty until classification).
    pub level2: String,
    /// Taxonomy level 3 (empty until classification).
    pub level3: String,
}

impl Event {
    /// Create a bare event for a trigger; slots start empty and scores at 0.
    #[must_use]
    pub fn new(trigger: Trigger, sentence_text: impl Into<String>) -> Self {
        let sentence_index = trigger.sentence_index;
        let class = EventClass::from_trigger_lemma(&trigger.lemma);
        Self {
            sentence_index,
            sentence_text: sentence_text.into(),
            trigger,
            class,
            actor: None,
            victim: None,
            place: None,
            time: None,
            method: None,
            confidence: Confidence::MIN,
            completeness: Confidence::MIN,
            reciprocal_violence: false,
            inferred: false,
            cluster_size: 1,
            source_sentences: vec![sentence_index],
            level1: String::new(),
            level2: String::new(),
            level3: String::new(),
        }
    }

    /// True when any casualty count is attached to the victim slot.
    #[must_use]
    pub fn has_casualties(&self) -> bool {
        self.victim
            .as_ref()
            .map(Victim::has_casualties)
            .unwrap_or(false)
    }

    /// Death count, when present.
    #[must_use]
    pub fn deaths(&self) -> Option<u32> {
        self.victim.as_ref().and_then(|v| v.deaths)
    }

    /// Injury count, when present.
    #[must_use]
    pub fn injuries(&self) -> Option<u32> {
        self.victim.as_ref().and_then(|v| v.injuries)
    }
}
