//! Violence lexicon - the read-only term tables driving trigger detection,
//! slot extraction, and consolidation.
//!
//! All tables are `static` and safe for unsynchronized concurrent reads.
//! Terms are matched against lowercased lemmas unless noted otherwise.

use once_cell::sync::Lazy;
use std::collections::HashSet;

// =============================================================================
// Trigger terms
// =============================================================================

/// Violence action verbs (trigger when POS starts with "VB").
pub const VIOLENCE_VERBS: &[&str] = &[
    // Killing
    "kill", "slay", "murder", "execute", "assassinate", "massacre",
    // Attacking
    "attack", "assault", "raid", "ambush", "storm",
    // Shooting
    "shoot", "fire", "gun",
    // Bombing
    "bomb", "explode", "detonate", "blast",
    // Abducting
    "kidnap", "abduct", "seize", "capture",
    // Fighting
    "fight", "clash", "battle",
    // Injuring
    "wound", "injure", "hurt", "harm",
    // Destroying
    "destroy", "burn", "raze",
];

/// Violence event nouns (trigger when POS starts with "NN").
pub const VIOLENCE_NOUNS: &[&str] = &[
    "attack", "assault", "raid", "ambush", "bombing", "explosion", "shooting",
    "massacre", "killing", "murder", "assassination", "kidnapping", "abduction",
    "clash", "battle", "violence", "bloodshed", "carnage",
];

/// Outcome nouns counted toward violence-term density but not triggers.
pub const OUTCOME_NOUNS: &[&str] = &[
    "death", "casualty", "victim", "fatality", "injury", "wounded",
];

// =============================================================================
// Actor terms
// =============================================================================

/// Generic actor nouns. A candidate actor phrase containing one of these is
/// accepted by the plausibility filter unconditionally.
pub const ACTOR_TERMS: &[&str] = &[
    "militant", "militants", "militia", "militias", "rebel", "rebels",
    "insurgent", "insurgents", "terrorist", "terrorists", "extremist",
    "extremists", "jihadist", "jihadists", "gunman", "gunmen", "fighter",
    "fighters", "attacker", "attackers", "assailant", "assailants",
    "perpetrator", "perpetrators", "soldier", "soldiers", "troop", "troops",
    "force", "forces", "military", "army", "police", "officer", "officers",
    "gang", "robber", "robbers", "bandit", "bandits", "herdsmen", "bomber",
    "bombers", "protester", "protesters", "demonstrator", "demonstrators",
    "community", "communities", "tribesmen",
];

/// Ethnic/communal group names treated as plausible actors. These show up
/// in reciprocal-violence reporting ("clashes between X and Y").
pub const ETHNIC_GROUPS: &[&str] = &[
    "hema", "lendu", "hutu", "tutsi", "fulani", "dinka", "nuer", "oromo",
    "amhara", "somali", "tuareg", "dogon", "bambara", "nguni", "luo",
];

/// Keywords implying a state/security-force actor.
pub const STATE_ACTOR_TERMS: &[&str] = &[
    "military", "army", "police", "soldier", "soldiers", "troop", "troops",
    "force", "forces", "officer", "officers", "security",
];

/// Keywords implying a terrorist actor.
pub const TERRORIST_ACTOR_TERMS: &[&str] =
    &["militant", "militants", "extremist", "extremists", "jihadist", "jihadists", "terrorist", "terrorists"];

/// Keywords implying a rebel actor.
pub const REBEL_ACTOR_TERMS: &[&str] =
    &["rebel", "rebels", "insurgent", "insurgents", "fighter", "fighters"];

/// Keywords implying a criminal actor.
pub const CRIMINAL_ACTOR_TERMS: &[&str] =
    &["gunman", "gunmen", "gang", "gangs", "robber", "robbers", "bandit", "bandits", "criminal", "criminals"];

/// Keywords implying a communal actor.
pub const COMMUNAL_ACTOR_TERMS: &[&str] =
    &["community", "communities", "ethnic", "tribal", "clan", "tribesmen", "villagers", "herdsmen"];

// =============================================================================
// Victim terms
// =============================================================================

/// Victim nouns scanned by the keyword fallback strategy.
pub const VICTIM_NOUNS: &[&str] = &[
    "civilian", "civilians", "people", "person", "persons", "resident",
    "residents", "villager", "villagers", "student", "students", "child",
    "children", "woman", "women", "man", "men", "worshipper", "worshippers",
    "passenger", "passengers", "farmer", "farmers", "officer", "officers",
    "soldier", "soldiers", "worker", "workers",
];

/// Indicators that the victim is a civilian.
pub const CIVILIAN_INDICATORS: &[&str] = &[
    "civilian", "people", "resident", "villager", "child", "woman", "student",
    "worshipper", "passenger", "farmer", "protester", "demonstrator",
];

/// Indicators that the victim is a combatant.
pub const COMBATANT_INDICATORS: &[&str] =
    &["soldier", "troop", "military", "police", "fighter", "officer", "militant"];

// =============================================================================
// Weapons and tactics
// =============================================================================

/// Single-token weapon terms (matched on lemma).
pub const WEAPON_TERMS: &[&str] = &[
    "gun", "rifle", "pistol", "firearm", "ak-47", "kalashnikov", "bomb",
    "explosive", "ied", "grenade", "dynamite", "rocket", "missile", "mortar",
    "artillery", "rpg", "knife", "machete", "blade", "bullet",
];

/// Multi-word weapon terms (matched on lowercased sentence text).
pub const MULTIWORD_WEAPON_TERMS: &[&str] = &[
    "improvised explosive device",
    "car bomb",
    "suicide vest",
    "rocket-propelled grenade",
    "machine gun",
];

/// Tactic terms (matched on lemma or lowercased sentence text).
pub const TACTIC_TERMS: &[&str] = &[
    "ambush", "raid", "assault", "suicide", "car-bomb", "roadside",
    "crossfire", "siege", "crackdown",
];

// =============================================================================
// Time and discourse markers
// =============================================================================

/// Temporal keywords for the relative-time fallback.
pub const TEMPORAL_WORDS: &[&str] = &[
    "yesterday", "today", "tonight", "monday", "tuesday", "wednesday",
    "thursday", "friday", "saturday", "sunday", "morning", "afternoon",
    "evening", "night", "overnight", "dawn",
];

/// Modal/conditional markers that mark a sentence as speculative.
pub const MODAL_MARKERS: &[&str] =
    &["would", "could", "might", "may", "should", "if"];

/// Multi-word conditional markers.
pub const MODAL_PHRASES: &[&str] = &["in case"];

/// Function words rejected outright as actor candidates.
pub const FUNCTION_WORDS: &[&str] = &[
    "the", "a", "an", "it", "they", "he", "she", "we", "you", "this", "that",
    "these", "those", "who", "which", "what", "there", "here", "its", "their",
    "his", "her", "one", "some", "any", "all", "both",
];

// =============================================================================
// Trigger families (merge pass + event classification)
// =============================================================================

/// A semantic family of trigger lemmas. Two triggers in the same family
/// describe the same kind of act and are merge candidates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TriggerFamily {
    /// kill, murder, massacre, ...
    Kill,
    /// bomb, explode, detonate, ...
    Bomb,
    /// shoot, fire, gun, ...
    Shoot,
    /// attack, assault, raid, storm, ambush, ...
    Attack,
    /// injure, wound, hurt, harm, ...
    Injure,
    /// kidnap, abduct, seize, capture, ...
    Kidnap,
    /// destroy, burn, raze, ...
    Destroy,
}

const KILL_FAMILY: &[&str] = &[
    "kill", "murder", "assassinate", "execute", "massacre", "slay", "killing",
    "assassination",
];
const BOMB_FAMILY: &[&str] = &[
    "bomb", "explode", "detonate", "blast", "bombing", "explosion",
];
const SHOOT_FAMILY: &[&str] = &["shoot", "fire", "gun", "shooting"];
const ATTACK_FAMILY: &[&str] = &[
    "attack", "assault", "raid", "storm", "ambush", "clash", "battle", "fight",
];
const INJURE_FAMILY: &[&str] = &["injure", "wound", "hurt", "harm", "injury"];
const KIDNAP_FAMILY: &[&str] = &[
    "kidnap", "abduct", "seize", "capture", "kidnapping", "abduction",
];
const DESTROY_FAMILY: &[&str] = &["destroy", "burn", "raze"];

/// Look up the semantic family of a trigger lemma.
#[must_use]
pub fn trigger_family(lemma: &str) -> Option<TriggerFamily> {
    let lemma = lemma.to_lowercase();
    let l = lemma.as_str();
    if KILL_FAMILY.contains(&l) {
        Some(TriggerFamily::Kill)
    } else if BOMB_FAMILY.contains(&l) {
        Some(TriggerFamily::Bomb)
    } else if SHOOT_FAMILY.contains(&l) {
        Some(TriggerFamily::Shoot)
    } else if ATTACK_FAMILY.contains(&l) {
        Some(TriggerFamily::Attack)
    } else if INJURE_FAMILY.contains(&l) {
        Some(TriggerFamily::Injure)
    } else if KIDNAP_FAMILY.contains(&l) {
        Some(TriggerFamily::Kidnap)
    } else if DESTROY_FAMILY.contains(&l) {
        Some(TriggerFamily::Destroy)
    } else {
        None
    }
}

/// Lemma pairs where one trigger *describes* the other mention of the same
/// act (merge pass).
pub const DESCRIBING_PAIRS: &[(&str, &str)] = &[
    ("bomb", "explosion"),
    ("bombing", "explosion"),
    ("attack", "killing"),
    ("attack", "raid"),
    ("shooting", "killing"),
];

/// Lemma pairs that commonly co-refer across sentences (cluster pass).
pub const RELATED_TRIGGER_PAIRS: &[(&str, &str)] = &[
    ("detonate", "explosion"),
    ("bomb", "explosion"),
    ("explode", "bombing"),
    ("attack", "kill"),
    ("shoot", "kill"),
    ("raid", "attack"),
];

/// Check an unordered lemma pair against a pair table.
#[must_use]
pub fn pair_matches(table: &[(&str, &str)], a: &str, b: &str) -> bool {
    let (a, b) = (a.to_lowercase(), b.to_lowercase());
    table
        .iter()
        .any(|&(x, y)| (a == x && b == y) || (a == y && b == x))
}

// =============================================================================
// Aggregate lookups
// =============================================================================

/// Every violence-related term, for density scoring.
static ALL_TERMS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    VIOLENCE_VERBS
        .iter()
        .chain(VIOLENCE_NOUNS)
        .chain(OUTCOME_NOUNS)
        .chain(ACTOR_TERMS)
        .chain(WEAPON_TERMS)
        .copied()
        .collect()
});

/// Category of a violence-related term.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TermCategory {
    /// Violence action verb.
    Verb,
    /// Violence event noun.
    Noun,
    /// Actor term.
    Actor,
    /// Weapon term.
    Weapon,
    /// Not a violence term.
    Other,
}

/// Is this word violence-related at all?
#[must_use]
pub fn is_violence_term(word: &str) -> bool {
    ALL_TERMS.contains(word.to_lowercase().as_str())
}

/// Categorize a violence term. Verbs win over nouns, nouns over actors,
/// actors over weapons, mirroring lookup priority in the original tables.
#[must_use]
pub fn term_category(word: &str) -> TermCategory {
    let word = word.to_lowercase();
    let w = word.as_str();
    if VIOLENCE_VERBS.contains(&w) {
        TermCategory::Verb
    } else if VIOLENCE_NOUNS.contains(&w) {
        TermCategory::Noun
    } else if ACTOR_TERMS.contains(&w) {
        TermCategory::Actor
    } else if WEAPON_TERMS.contains(&w) {
        TermCategory::Weapon
    } else {
        TermCategory::Other
    }
}

/// Is this lemma a violence verb?
#[must_use]
pub fn is_violence_verb(lemma: &str) -> bool {
    VIOLENCE_VERBS.contains(&lemma.to_lowercase().as_str())
}

/// Is this lemma a violence noun?
#[must_use]
pub fn is_violence_noun(lemma: &str) -> bool {
    VIOLENCE_NOUNS.contains(&lemma.to_lowercase().as_str())
}

/// Is this word a known actor keyword (generic or ethnic)?
#[must_use]
pub fn is_actor_keyword(word: &str) -> bool {
    let word = word.to_lowercase();
    let w = word.as_str();
    ACTOR_TERMS.contains(&w) || ETHNIC_GROUPS.contains(&w)
}
