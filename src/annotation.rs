//! Input boundary: per-sentence linguistic annotations.
//!
//! The annotation provider (an external collaborator) supplies tokens with
//! POS/lemma/NER tags, named entities, and dependency arcs. This module
//! defines those records and normalizes them once at construction, so the
//! extraction code never has to second-guess the input again.
//!
//! # Index convention
//!
//! Dependency arcs are stored **1-based**, with governor `0` reserved for the
//! synthetic ROOT node. Providers that emit 0-based arcs are detected by a
//! single rule - an arc whose *dependent* is 0 can only be 0-based, since no
//! real token is ever the 0th dependent under the 1-based convention - and
//! the whole arc list is shifted by +1 once. Extraction logic downstream
//! assumes the canonical convention unconditionally.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// One token of a sentence, as tagged by the annotation provider.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Token {
    /// Surface form.
    pub word: String,
    /// Lemma (lowercased by the provider; we lowercase again defensively).
    pub lemma: String,
    /// Part-of-speech tag (Penn Treebank style: VBD, NNS, NNP, ...).
    pub pos: String,
    /// 1-based index within the sentence.
    pub index: usize,
    /// Entity tag for this token, if any (LOCATION, DATE, ...).
    pub ner: Option<String>,
}

impl Token {
    /// Create a token with the given 1-based index.
    #[must_use]
    pub fn new(
        word: impl Into<String>,
        lemma: impl Into<String>,
        pos: impl Into<String>,
        index: usize,
    ) -> Self {
        Self {
            word: word.into(),
            lemma: lemma.into(),
            pos: pos.into(),
            index,
            ner: None,
        }
    }

    /// Attach an entity tag.
    #[must_use]
    pub fn with_ner(mut self, ner: impl Into<String>) -> Self {
        self.ner = Some(ner.into());
        self
    }

    /// Lowercased lemma.
    #[must_use]
    pub fn lemma_lower(&self) -> String {
        self.lemma.to_lowercase()
    }
}

/// Entity type classification, following the provider's coarse NER tags.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityType {
    /// Location / place (LOCATION, GPE).
    Location,
    /// Organization, including armed groups (ORGANIZATION).
    Organization,
    /// Person name (PERSON).
    Person,
    /// Date expression (DATE).
    Date,
    /// Time-of-day expression (TIME).
    Time,
    /// Any other provider tag.
    Other(String),
}

impl EntityType {
    /// Convert to the provider's label string.
    #[must_use]
    pub fn as_label(&self) -> &str {
        match self {
            EntityType::Location => "LOCATION",
            EntityType::Organization => "ORGANIZATION",
            EntityType::Person => "PERSON",
            EntityType::Date => "DATE",
            EntityType::Time => "TIME",
            EntityType::Other(s) => s.as_str(),
        }
    }

    /// Parse from a provider label.
    #[must_use]
    pub fn from_label(label: &str) -> Self {
        match label.to_uppercase().as_str() {
            "LOCATION" | "LOC" | "GPE" | "CITY" | "COUNTRY" => EntityType::Location,
            "ORGANIZATION" | "ORG" => EntityType::Organization,
            "PERSON" | "PER" => EntityType::Person,
            "DATE" => EntityType::Date,
            "TIME" => EntityType::Time,
            other => EntityType::Other(other.to_string()),
        }
    }
}

impl std::fmt::Display for EntityType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_label())
    }
}

/// A named entity span recognized in a sentence.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Entity {
    /// Contiguous surface text of the span.
    pub text: String,
    /// Coarse entity type.
    pub entity_type: EntityType,
    /// Finer subtype when known (e.g. CITY, TERRORIST, REBEL).
    pub subtype: Option<String>,
    /// Free-form metadata (country, region, full_name, ...).
    pub metadata: BTreeMap<String, String>,
}

impl Entity {
    /// Create an entity with no subtype or metadata.
    #[must_use]
    pub fn new(text: impl Into<String>, entity_type: EntityType) -> Self {
        Self {
            text: text.into(),
            entity_type,
            subtype: None,
            metadata: BTreeMap::new(),
        }
    }

    /// Attach a subtype.
    #[must_use]
    pub fn with_subtype(mut self, subtype: impl Into<String>) -> Self {
        self.subtype = Some(subtype.into());
        self
    }

    /// Attach a metadata entry.
    #[must_use]
    pub fn with_metadata(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }
}

/// A dependency arc between two tokens (1-based; governor 0 = ROOT).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DependencyArc {
    /// Governor token index (0 for the synthetic ROOT).
    pub governor: usize,
    /// Dependent token index.
    pub dependent: usize,
    /// Relation label (nsubj, dobj, nmod, ...).
    pub relation: String,
}

impl DependencyArc {
    /// Create an arc with the canonical 1-based indices.
    #[must_use]
    pub fn new(governor: usize, dependent: usize, relation: impl Into<String>) -> Self {
        Self {
            governor,
            dependent,
            relation: relation.into(),
        }
    }
}

/// One sentence's worth of annotation, normalized.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SentenceAnnotation {
    /// Tokens in sentence order.
    pub tokens: Vec<Token>,
    /// Named entities recognized in this sentence.
    pub entities: Vec<Entity>,
    /// Dependency arcs, normalized to 1-based indices.
    pub dependencies: Vec<DependencyArc>,
    /// Sentence text, reconstructed from tokens at construction.
    pub text: String,
}

impl SentenceAnnotation {
    /// Build a sentence annotation, normalizing arc indices once.
    ///
    /// An arc list containing a dependent of 0 is treated as 0-based and
    /// every index is shifted by +1. After normalization, any arc whose
    /// governor or dependent exceeds the token count is a contract violation
    /// on the provider's side and yields [`Error::InvalidAnnotation`].
    pub fn new(
        tokens: Vec<Token>,
        entities: Vec<Entity>,
        mut dependencies: Vec<DependencyArc>,
    ) -> Result<Self> {
        let zero_based = dependencies.iter().any(|arc| arc.dependent == 0);
        if zero_based {
            for arc in &mut dependencies {
                arc.governor += 1;
                arc.dependent += 1;
            }
        }

        let n = tokens.len();
        for arc in &dependencies {
            if arc.governor > n || arc.dependent > n || arc.dependent == 0 {
                return Err(Error::invalid_annotation(format!(
                    "dependency arc {}:{}->{} out of range for {} tokens",
                    arc.relation, arc.governor, arc.dependent, n
                )));
            }
        }

        let text = tokens
            .iter()
            .map(|t| t.word.as_str())
            .collect::<Vec<_>>()
            .join(" ");

        Ok(Self {
            tokens,
            entities,
            dependencies,
            text,
        })
    }

    /// Token at a 1-based index.
    #[must_use]
    pub fn token(&self, index: usize) -> Option<&Token> {
        index.checked_sub(1).and_then(|i| self.tokens.get(i))
    }

    /// Character offset of a 1-based token index within [`Self::text`].
    ///
    /// Tokens are joined by single spaces, so the offset is the sum of the
    /// preceding word lengths plus separators.
    #[must_use]
    pub fn token_char_offset(&self, index: usize) -> Option<usize> {
        if index == 0 || index > self.tokens.len() {
            return None;
        }
        let mut offset = 0;
        for token in &self.tokens[..index - 1] {
            offset += token.word.chars().count() + 1;
        }
        Some(offset)
    }

    /// Dependents of a governor token, with their relation labels.
    pub fn dependents_of(&self, governor: usize) -> impl Iterator<Item = &DependencyArc> {
        self.dependencies
            .iter()
            .filter(move |arc| arc.governor == governor)
    }

    /// First entity of the given type, in annotation order.
    #[must_use]
    pub fn first_entity(&self, entity_type: &EntityType) -> Option<&Entity> {
        self.entities
            .iter()
            .find(|e| &e.entity_type == entity_type)
    }
}

/// A whole article's annotations plus the optional article-level inputs.
///
/// Both `text` and `published` are optional and their absence degrades
/// gracefully: the responsibility-claim strategy and date normalization
/// simply find nothing.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ArticleAnnotation {
    /// Sentences in article order.
    pub sentences: Vec<SentenceAnnotation>,
    /// Full cleaned article text, when the caller has it.
    pub text: Option<String>,
    /// Publication date string (e.g. "March 15, 2024"), when known.
    pub published: Option<String>,
}

impl ArticleAnnotation {
    /// Create an article from sentences only.
    #[must_use]
    pub fn new(sentences: Vec<SentenceAnnotation>) -> Self {
        Self {
            sentences,
            text: None,
            published: None,
        }
    }

    /// Attach the full article text.
    #[must_use]
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Attach the publication date string.
    #[must_use]
    pub fn with_published(mut self, published: impl Into<String>) -> Self {
        self.published = Some(published.into());
        self
    }
}
