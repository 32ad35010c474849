//! Three-level taxonomy classification of consolidated events.
//!
//! Level 1 is decided by actor signals in fixed priority; Level 2 branches
//! within Level 1; Level 3 refines Level 2 with weapon/tactic/keyword
//! checks and falls back to the Level 2 value when nothing finer applies.
//! Every event that reaches classification gets all three levels populated.

use crate::event::{ActorKind, Event, VictimKind};

/// Level-1 category names.
pub const POLITICAL_VIOLENCE: &str = "Political Violence";
/// State violence against civilians.
pub const STATE_VIOLENCE: &str = "State Violence Against Civilians";
/// Communal violence.
pub const COMMUNAL_VIOLENCE: &str = "Communal Violence";
/// Criminal violence.
pub const CRIMINAL_VIOLENCE: &str = "Criminal Violence";

const STATE_INDICATORS: &[&str] = &["state", "police", "military", "soldier", "officer", "security force"];
const CRIMINAL_INDICATORS: &[&str] = &["gang", "robber", "bandit", "criminal"];
const TERRORISM_GROUP_INDICATORS: &[&str] = &["shabaab", "boko", "haram", "al-qaeda", "isis", "aqim", "jnim"];
const COMMUNAL_INDICATORS: &[&str] = &["community", "ethnic", "tribal", "clan"];
const ELECTION_INDICATORS: &[&str] = &["protest", "election", "opposition", "demonstrator", "voting", "poll"];
const PROTEST_VICTIM_INDICATORS: &[&str] = &["protest", "demonstrator", "rally", "opposition supporter"];
const ETHNIC_INDICATORS: &[&str] = &["community", "ethnic", "tribal", "hema", "lendu", "hutu", "tutsi"];
const RELIGIOUS_INDICATORS: &[&str] = &["muslim", "christian", "sectarian", "religious"];
const RESOURCE_INDICATORS: &[&str] = &["land", "water", "grazing", "cattle"];
const ROBBERY_INDICATORS: &[&str] = &["rob", "robbery", "bank", "stole", "loot", "robbed"];
const KIDNAP_INDICATORS: &[&str] = &["kidnap", "abduct", "hostage"];

/// Taxonomy labels for one event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaxonomyLabels {
    /// High-level category.
    pub level1: String,
    /// Mid-level category.
    pub level2: String,
    /// Specific event type.
    pub level3: String,
}

/// Stateless three-level classifier.
#[derive(Debug, Clone, Copy, Default)]
pub struct TaxonomyClassifier;

impl TaxonomyClassifier {
    /// Create a classifier.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Classify an event. All three returned levels are non-empty.
    #[must_use]
    pub fn classify(&self, event: &Event) -> TaxonomyLabels {
        let features = Features::of(event);
        let level1 = self.level1(&features);
        let level2 = self.level2(level1, &features);
        let level3 = self.level3(level1, &level2, &features);
        TaxonomyLabels {
            level1: level1.to_string(),
            level2,
            level3,
        }
    }

    /// Classify and write the labels onto the event.
    pub fn apply(&self, event: &mut Event) {
        let labels = self.classify(event);
        event.level1 = labels.level1;
        event.level2 = labels.level2;
        event.level3 = labels.level3;
    }

    fn level1(&self, f: &Features) -> &'static str {
        if (f.actor_kind == ActorKind::State || contains_any(&f.actor_text, STATE_INDICATORS))
            && f.victim_kind == VictimKind::Civilian
        {
            return STATE_VIOLENCE;
        }
        if f.actor_kind == ActorKind::Criminal || contains_any(&f.actor_text, CRIMINAL_INDICATORS)
        {
            return CRIMINAL_VIOLENCE;
        }
        if matches!(f.actor_kind, ActorKind::Terrorist | ActorKind::Rebel)
            || contains_any(&f.actor_text, TERRORISM_GROUP_INDICATORS)
        {
            return POLITICAL_VIOLENCE;
        }
        if f.actor_kind == ActorKind::Communal || contains_any(&f.actor_text, COMMUNAL_INDICATORS)
        {
            return COMMUNAL_VIOLENCE;
        }
        if contains_any(&f.actor_text, ELECTION_INDICATORS) {
            return POLITICAL_VIOLENCE;
        }
        // Unknown armed actors default to political violence.
        POLITICAL_VIOLENCE
    }

    fn level2(&self, level1: &str, f: &Features) -> String {
        match level1 {
            POLITICAL_VIOLENCE => {
                if f.actor_kind == ActorKind::Terrorist
                    || contains_any(&f.actor_text, TERRORISM_GROUP_INDICATORS)
                    || f.tactics.iter().any(|t| t.contains("suicide"))
                    || f.actor_text.contains("suicide")
                {
                    "Terrorism".to_string()
                } else if contains_any(&f.actor_text, ELECTION_INDICATORS)
                    || contains_any(&f.sentence_text, ELECTION_INDICATORS)
                {
                    "Election Violence".to_string()
                } else {
                    "Insurgency".to_string()
                }
            }
            STATE_VIOLENCE => {
                if contains_any(&f.victim_text, PROTEST_VICTIM_INDICATORS)
                    || contains_any(&f.sentence_text, PROTEST_VICTIM_INDICATORS)
                {
                    "State Repression of Protests".to_string()
                } else {
                    "Extrajudicial Killings".to_string()
                }
            }
            COMMUNAL_VIOLENCE => {
                if contains_any(&f.actor_text, ETHNIC_INDICATORS) {
                    "Ethnic/Tribal Conflict".to_string()
                } else if contains_any(&f.actor_text, RELIGIOUS_INDICATORS) {
                    "Religious Violence".to_string()
                } else if contains_any(&f.actor_text, RESOURCE_INDICATORS) {
                    "Resource Conflict".to_string()
                } else {
                    "Ethnic/Tribal Conflict".to_string()
                }
            }
            CRIMINAL_VIOLENCE => {
                if contains_any(&f.trigger_lemma, ROBBERY_INDICATORS)
                    || contains_any(&f.actor_text, ROBBERY_INDICATORS)
                    || contains_any(&f.sentence_text, ROBBERY_INDICATORS)
                {
                    "Armed Robbery/Banditry".to_string()
                } else if contains_any(&f.trigger_lemma, KIDNAP_INDICATORS)
                    || contains_any(&f.sentence_text, KIDNAP_INDICATORS)
                {
                    "Kidnapping for Ransom".to_string()
                } else {
                    "Gang Violence".to_string()
                }
            }
            _ => "Unknown".to_string(),
        }
    }

    fn level3(&self, _level1: &str, level2: &str, f: &Features) -> String {
        match level2 {
            "Terrorism" => {
                if f.tactics.iter().any(|t| t.contains("suicide")) {
                    if f.weapons
                        .iter()
                        .any(|w| w.contains("car") || w.contains("vehicle"))
                    {
                        return "Car Bombing".to_string();
                    }
                    return "Suicide Bombing".to_string();
                }
                if f.trigger_lemma.contains("kidnap") || f.trigger_lemma.contains("abduct") {
                    return "Kidnapping".to_string();
                }
                if f.trigger_lemma.contains("assassin") {
                    return "Assassination".to_string();
                }
                "Armed Assault".to_string()
            }
            "Election Violence" => {
                if f.actor_text.contains("protest")
                    || f.actor_text.contains("demonstr")
                    || f.sentence_text.contains("protest")
                {
                    "Protest Violence".to_string()
                } else if f.actor_text.contains("poll")
                    || f.actor_text.contains("voting")
                    || f.sentence_text.contains("poll")
                {
                    "Poll Violence".to_string()
                } else {
                    "Campaign Violence".to_string()
                }
            }
            "Extrajudicial Killings" => {
                if f.actor_text.contains("police") {
                    "Police Shooting".to_string()
                } else if f.actor_text.contains("military") || f.actor_text.contains("soldier") {
                    "Military Execution".to_string()
                } else {
                    "Targeted Killing".to_string()
                }
            }
            "State Repression of Protests" => {
                if f.trigger_lemma.contains("disperse") {
                    "Dispersal Violence".to_string()
                } else if f.sentence_text.contains("crackdown") {
                    "Crackdown".to_string()
                } else {
                    "Police Violence".to_string()
                }
            }
            "Ethnic/Tribal Conflict" => {
                if f.trigger_lemma.contains("massacre") {
                    "Massacre".to_string()
                } else if f.trigger_lemma.contains("raid") || f.trigger_lemma.contains("attack") {
                    "Raid".to_string()
                } else {
                    "Armed Clash".to_string()
                }
            }
            "Armed Robbery/Banditry" => {
                if f.actor_text.contains("bank")
                    || f.trigger_lemma.contains("bank")
                    || f.sentence_text.contains("bank")
                {
                    "Bank Robbery".to_string()
                } else if f.actor_text.contains("highway")
                    || f.actor_text.contains("road")
                    || f.sentence_text.contains("highway")
                {
                    "Highway Robbery".to_string()
                } else {
                    "Armed Robbery/Banditry".to_string()
                }
            }
            "Kidnapping for Ransom" => {
                if f.trigger_lemma.contains("hostage") || f.sentence_text.contains("hostage") {
                    "Hostage Taking".to_string()
                } else {
                    "Abduction".to_string()
                }
            }
            other => other.to_string(),
        }
    }
}

/// Lowercased event features feeding the keyword checks.
struct Features {
    actor_kind: ActorKind,
    actor_text: String,
    victim_kind: VictimKind,
    victim_text: String,
    trigger_lemma: String,
    weapons: Vec<String>,
    tactics: Vec<String>,
    sentence_text: String,
}

impl Features {
    fn of(event: &Event) -> Self {
        Self {
            actor_kind: event.actor.as_ref().map(|a| a.kind).unwrap_or_default(),
            actor_text: event
                .actor
                .as_ref()
                .map(|a| a.text.to_lowercase())
                .unwrap_or_default(),
            victim_kind: event.victim.as_ref().map(|v| v.kind).unwrap_or_default(),
            victim_text: event
                .victim
                .as_ref()
                .map(|v| v.text.to_lowercase())
                .unwrap_or_default(),
            trigger_lemma: event.trigger.lemma.to_lowercase(),
            weapons: event
                .method
                .as_ref()
                .map(|m| m.weapons.iter().map(|w| w.to_lowercase()).collect())
                .unwrap_or_default(),
            tactics: event
                .method
                .as_ref()
                .map(|m| m.tactics.iter().map(|t| t.to_lowercase()).collect())
                .unwrap_or_default(),
            sentence_text: event.sentence_text.to_lowercase(),
        }
    }
}

fn contains_any(haystack: &str, needles: &[&str]) -> bool {
    needles.iter().any(|n| haystack.contains(n))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::{
        Actor, ActorProvenance, Method, Trigger, TriggerKind, Victim,
    };

    fn event(trigger_lemma: &str, sentence_text: &str) -> Event {
        Event::new(
            Trigger {
                word: trigger_lemma.to_string(),
                lemma: trigger_lemma.to_string(),
                pos: "VBD".to_string(),
                index: 1,
                sentence_index: 0,
                kind: TriggerKind::Verb,
            },
            sentence_text,
        )
    }

    #[test]
    fn suicide_bombing_by_known_group() {
        let mut e = event("attack", "Al-Shabaab suicide bomber attacked the hotel.");
        e.actor = Some(Actor::new("Al-Shabaab", ActorProvenance::ResponsibilityClaim));
        e.victim = Some(Victim::new("civilians"));
        e.method = Some(Method::new(
            vec!["explosive".to_string()],
            vec!["suicide".to_string()],
        ));

        let labels = TaxonomyClassifier::new().classify(&e);
        assert_eq!(labels.level1, POLITICAL_VIOLENCE);
        assert_eq!(labels.level2, "Terrorism");
        assert_eq!(labels.level3, "Suicide Bombing");
    }

    #[test]
    fn car_bombing_with_vehicle_weapon() {
        let mut e = event("bomb", "A car bomb exploded at the checkpoint.");
        e.actor = Some(Actor::new("militants", ActorProvenance::DependencyParse));
        e.method = Some(Method::new(
            vec!["car bomb".to_string()],
            vec!["suicide".to_string()],
        ));

        let labels = TaxonomyClassifier::new().classify(&e);
        assert_eq!(labels.level3, "Car Bombing");
    }

    #[test]
    fn police_shooting_civilians() {
        let mut e = event("shoot", "Police opened fire on protesters.");
        e.actor = Some(Actor::new("police officers", ActorProvenance::DependencyParse));
        e.victim = Some(Victim::new("protesters"));

        let labels = TaxonomyClassifier::new().classify(&e);
        assert_eq!(labels.level1, STATE_VIOLENCE);
        assert_eq!(labels.level2, "State Repression of Protests");
        assert_eq!(labels.level3, "Police Violence");
    }

    #[test]
    fn police_killing_without_protest_context() {
        let mut e = event("kill", "Police killed two residents during the raid.");
        e.actor = Some(Actor::new("police", ActorProvenance::DependencyParse));
        e.victim = Some(Victim::new("residents"));

        let labels = TaxonomyClassifier::new().classify(&e);
        assert_eq!(labels.level1, STATE_VIOLENCE);
        assert_eq!(labels.level2, "Extrajudicial Killings");
        assert_eq!(labels.level3, "Police Shooting");
    }

    #[test]
    fn ethnic_clash() {
        let mut e = event("clash", "Hema and Lendu communities clashed.");
        e.actor = Some(Actor::new("Hema community", ActorProvenance::ReciprocalPattern));
        e.victim = Some(Victim::new("Lendu community"));

        let labels = TaxonomyClassifier::new().classify(&e);
        assert_eq!(labels.level1, COMMUNAL_VIOLENCE);
        assert_eq!(labels.level2, "Ethnic/Tribal Conflict");
        assert_eq!(labels.level3, "Armed Clash");
    }

    #[test]
    fn bank_robbery() {
        let mut e = event("rob", "An armed gang robbed the bank in Lagos.");
        e.actor = Some(Actor::new("armed gang", ActorProvenance::TitlePattern));

        let labels = TaxonomyClassifier::new().classify(&e);
        assert_eq!(labels.level1, CRIMINAL_VIOLENCE);
        assert_eq!(labels.level2, "Armed Robbery/Banditry");
        assert_eq!(labels.level3, "Bank Robbery");
    }

    #[test]
    fn unknown_actor_defaults_to_political() {
        let e = event("attack", "The village was attacked overnight.");
        let labels = TaxonomyClassifier::new().classify(&e);
        assert_eq!(labels.level1, POLITICAL_VIOLENCE);
        assert_eq!(labels.level2, "Insurgency");
        // Level 3 falls back to the level 2 value.
        assert_eq!(labels.level3, "Insurgency");
    }

    #[test]
    fn levels_never_empty() {
        let triggers = ["kill", "bomb", "shoot", "kidnap", "attack", "burn"];
        let classifier = TaxonomyClassifier::new();
        for lemma in triggers {
            let mut e = event(lemma, "Something happened.");
            classifier.apply(&mut e);
            assert!(!e.level1.is_empty());
            assert!(!e.level2.is_empty());
            assert!(!e.level3.is_empty());
        }
    }
}
