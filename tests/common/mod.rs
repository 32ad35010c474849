//! Shared builders for integration tests.

#![allow(dead_code)]

use vex::{ArticleAnnotation, DependencyArc, Entity, SentenceAnnotation, Token};

/// Build a token with a 1-based index.
pub fn tok(word: &str, lemma: &str, pos: &str, index: usize) -> Token {
    Token::new(word, lemma, pos, index)
}

/// Build a sentence from (word, lemma, pos) triples.
pub fn sent(words: &[(&str, &str, &str)]) -> SentenceAnnotation {
    sent_with(words, vec![], vec![])
}

/// Build a sentence with entities and dependency arcs.
pub fn sent_with(
    words: &[(&str, &str, &str)],
    entities: Vec<Entity>,
    dependencies: Vec<DependencyArc>,
) -> SentenceAnnotation {
    let tokens = words
        .iter()
        .enumerate()
        .map(|(i, (w, l, p))| tok(w, l, p, i + 1))
        .collect();
    SentenceAnnotation::new(tokens, entities, dependencies).expect("valid test sentence")
}

/// Build an article from sentences.
pub fn article(sentences: Vec<SentenceAnnotation>) -> ArticleAnnotation {
    ArticleAnnotation::new(sentences)
}

/// A benign filler sentence with no triggers.
pub fn filler() -> SentenceAnnotation {
    sent(&[
        ("The", "the", "DT"),
        ("regional", "regional", "JJ"),
        ("council", "council", "NN"),
        ("met", "meet", "VBD"),
        ("again", "again", "RB"),
        (".", ".", "."),
    ])
}
