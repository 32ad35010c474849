//! African location and armed-group gazetteer.
//!
//! The annotation provider's NER misses many African place names and armed
//! groups. [`Gazetteer::enhance_entities`] backfills those as entities with
//! subtype and metadata, and slot extraction consults the same tables to
//! attach country information to locations and group metadata to actors.

use std::collections::BTreeMap;

use crate::annotation::{Entity, EntityType};

/// A gazetteer location record.
#[derive(Debug, Clone, Copy)]
pub struct LocationRecord {
    /// Canonical name.
    pub name: &'static str,
    /// COUNTRY / CITY / STATE / REGION.
    pub kind: &'static str,
    /// Containing country, when the record is not itself a country.
    pub country: Option<&'static str>,
    /// Geographic region.
    pub region: Option<&'static str>,
}

/// A gazetteer armed-group record.
#[derive(Debug, Clone, Copy)]
pub struct GroupRecord {
    /// Canonical (short) name.
    pub name: &'static str,
    /// TERRORIST or REBEL.
    pub kind: &'static str,
    /// Expanded name, when the short form is an acronym.
    pub full_name: Option<&'static str>,
    /// Primary country of operation.
    pub country: Option<&'static str>,
}

const LOCATIONS: &[LocationRecord] = &[
    // Countries
    LocationRecord { name: "Nigeria", kind: "COUNTRY", country: None, region: Some("West Africa") },
    LocationRecord { name: "Somalia", kind: "COUNTRY", country: None, region: Some("East Africa") },
    LocationRecord { name: "Mali", kind: "COUNTRY", country: None, region: Some("West Africa") },
    LocationRecord { name: "Kenya", kind: "COUNTRY", country: None, region: Some("East Africa") },
    LocationRecord { name: "Ethiopia", kind: "COUNTRY", country: None, region: Some("East Africa") },
    LocationRecord { name: "Sudan", kind: "COUNTRY", country: None, region: Some("North Africa") },
    LocationRecord { name: "South Sudan", kind: "COUNTRY", country: None, region: Some("East Africa") },
    LocationRecord { name: "Democratic Republic of Congo", kind: "COUNTRY", country: None, region: Some("Central Africa") },
    LocationRecord { name: "DRC", kind: "COUNTRY", country: None, region: Some("Central Africa") },
    LocationRecord { name: "Central African Republic", kind: "COUNTRY", country: None, region: Some("Central Africa") },
    LocationRecord { name: "Senegal", kind: "COUNTRY", country: None, region: Some("West Africa") },
    // Cities
    LocationRecord { name: "Mogadishu", kind: "CITY", country: Some("Somalia"), region: None },
    LocationRecord { name: "Nairobi", kind: "CITY", country: Some("Kenya"), region: None },
    LocationRecord { name: "Lagos", kind: "CITY", country: Some("Nigeria"), region: None },
    LocationRecord { name: "Maiduguri", kind: "CITY", country: Some("Nigeria"), region: None },
    LocationRecord { name: "Addis Ababa", kind: "CITY", country: Some("Ethiopia"), region: None },
    LocationRecord { name: "Gao", kind: "CITY", country: Some("Mali"), region: None },
    LocationRecord { name: "Kidal", kind: "CITY", country: Some("Mali"), region: None },
    LocationRecord { name: "Bamako", kind: "CITY", country: Some("Mali"), region: None },
    LocationRecord { name: "Beni", kind: "CITY", country: Some("Democratic Republic of Congo"), region: None },
    LocationRecord { name: "Dakar", kind: "CITY", country: Some("Senegal"), region: None },
    LocationRecord { name: "Kainama", kind: "CITY", country: Some("Democratic Republic of Congo"), region: None },
    LocationRecord { name: "Westlands", kind: "CITY", country: Some("Kenya"), region: None },
    // States / regions
    LocationRecord { name: "Borno State", kind: "STATE", country: Some("Nigeria"), region: None },
    LocationRecord { name: "Adamawa State", kind: "STATE", country: Some("Nigeria"), region: None },
    LocationRecord { name: "Oromia", kind: "REGION", country: Some("Ethiopia"), region: None },
    LocationRecord { name: "Tigray", kind: "REGION", country: Some("Ethiopia"), region: None },
    LocationRecord { name: "North Kivu", kind: "REGION", country: Some("Democratic Republic of Congo"), region: None },
    LocationRecord { name: "Lower Shabelle", kind: "REGION", country: Some("Somalia"), region: None },
];

const ARMED_GROUPS: &[GroupRecord] = &[
    GroupRecord { name: "Boko Haram", kind: "TERRORIST", full_name: None, country: Some("Nigeria") },
    GroupRecord { name: "Al-Shabaab", kind: "TERRORIST", full_name: None, country: Some("Somalia") },
    GroupRecord { name: "AQIM", kind: "TERRORIST", full_name: Some("Al-Qaeda in the Islamic Maghreb"), country: None },
    GroupRecord { name: "JNIM", kind: "TERRORIST", full_name: Some("Jama'at Nasr al-Islam wal Muslimin"), country: None },
    GroupRecord { name: "ISIS-WA", kind: "TERRORIST", full_name: Some("Islamic State West Africa Province"), country: None },
    GroupRecord { name: "M23", kind: "REBEL", full_name: None, country: Some("Democratic Republic of Congo") },
    GroupRecord { name: "ADF", kind: "REBEL", full_name: Some("Allied Democratic Forces"), country: None },
    GroupRecord { name: "LRA", kind: "REBEL", full_name: Some("Lord's Resistance Army"), country: None },
    GroupRecord { name: "FDLR", kind: "REBEL", full_name: None, country: None },
    GroupRecord { name: "OLA", kind: "REBEL", full_name: Some("Oromo Liberation Army"), country: None },
];

/// Read-only gazetteer over the static tables.
#[derive(Debug, Clone, Copy, Default)]
pub struct Gazetteer;

impl Gazetteer {
    /// Create a gazetteer.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Look up a location by name (case-insensitive).
    #[must_use]
    pub fn lookup_location(&self, name: &str) -> Option<&'static LocationRecord> {
        LOCATIONS
            .iter()
            .find(|r| r.name.eq_ignore_ascii_case(name.trim()))
    }

    /// Look up an armed group by short or full name (case-insensitive).
    #[must_use]
    pub fn lookup_group(&self, name: &str) -> Option<&'static GroupRecord> {
        let name = name.trim();
        ARMED_GROUPS.iter().find(|r| {
            r.name.eq_ignore_ascii_case(name)
                || r.full_name
                    .map(|f| f.eq_ignore_ascii_case(name))
                    .unwrap_or(false)
        })
    }

    /// Find gazetteer locations mentioned in free text.
    #[must_use]
    pub fn locations_in(&self, text: &str) -> Vec<&'static LocationRecord> {
        let lower = text.to_lowercase();
        LOCATIONS
            .iter()
            .filter(|r| contains_term(&lower, &r.name.to_lowercase()))
            .collect()
    }

    /// Find armed groups mentioned in free text (short or full name).
    #[must_use]
    pub fn groups_in(&self, text: &str) -> Vec<&'static GroupRecord> {
        let lower = text.to_lowercase();
        ARMED_GROUPS
            .iter()
            .filter(|r| {
                contains_term(&lower, &r.name.to_lowercase())
                    || r.full_name
                        .map(|f| contains_term(&lower, &f.to_lowercase()))
                        .unwrap_or(false)
            })
            .collect()
    }

    /// Backfill provider entities with gazetteer hits missing from them.
    ///
    /// Locations become LOCATION entities with subtype and country metadata;
    /// armed groups become ORGANIZATION entities with a TERRORIST/REBEL
    /// subtype and a `known_group` metadata flag. Entities the provider
    /// already produced are left untouched.
    #[must_use]
    pub fn enhance_entities(&self, entities: &[Entity], text: &str) -> Vec<Entity> {
        let mut enhanced = entities.to_vec();

        for record in self.locations_in(text) {
            let already = enhanced
                .iter()
                .any(|e| e.text.eq_ignore_ascii_case(record.name));
            if !already {
                let mut metadata = BTreeMap::new();
                if let Some(country) = record.country {
                    metadata.insert("country".to_string(), country.to_string());
                }
                if let Some(region) = record.region {
                    metadata.insert("region".to_string(), region.to_string());
                }
                let mut entity =
                    Entity::new(record.name, EntityType::Location).with_subtype(record.kind);
                entity.metadata = metadata;
                enhanced.push(entity);
            }
        }

        for record in self.groups_in(text) {
            let already = enhanced
                .iter()
                .any(|e| e.text.eq_ignore_ascii_case(record.name));
            if !already {
                let mut entity =
                    Entity::new(record.name, EntityType::Organization).with_subtype(record.kind);
                entity
                    .metadata
                    .insert("known_group".to_string(), "true".to_string());
                if let Some(full) = record.full_name {
                    entity
                        .metadata
                        .insert("full_name".to_string(), full.to_string());
                }
                if let Some(country) = record.country {
                    entity
                        .metadata
                        .insert("country".to_string(), country.to_string());
                }
                enhanced.push(entity);
            }
        }

        enhanced
    }
}

/// Whole-word containment: "mali" must not hit inside "somalia".
fn contains_term(haystack: &str, needle: &str) -> bool {
    if needle.is_empty() {
        return false;
    }
    let mut search_from = 0;
    while let Some(pos) = haystack[search_from..].find(needle) {
        let start = search_from + pos;
        let end = start + needle.len();
        let before_ok = start == 0
            || !haystack[..start]
                .chars()
                .next_back()
                .map(char::is_alphanumeric)
                .unwrap_or(false);
        let after_ok = end == haystack.len()
            || !haystack[end..]
                .chars()
                .next()
                .map(char::is_alphanumeric)
                .unwrap_or(false);
        if before_ok && after_ok {
            return true;
        }
        search_from = end;
    }
    false
}
