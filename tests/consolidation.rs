//! Consolidator integration tests: reciprocal split, merge behavior across
//! passes, clustering, and the salience fallback.

mod common;

use common::{article, filler, sent_with};
use vex::consolidate::merge::merge_similar;
use vex::{DependencyArc, ExtractionPipeline};

fn reciprocal_article() -> vex::ArticleAnnotation {
    let words = [
        ("Clashes", "clash", "NNS"),
        ("between", "between", "IN"),
        ("the", "the", "DT"),
        ("Hema", "Hema", "NNP"),
        ("and", "and", "CC"),
        ("Lendu", "Lendu", "NNP"),
        ("communities", "community", "NNS"),
        ("left", "leave", "VBD"),
        ("20", "20", "CD"),
        ("dead", "dead", "JJ"),
        (".", ".", "."),
    ];
    article(vec![sent_with(&words, vec![], vec![])])
}

#[test]
fn reciprocal_mention_splits_into_two_directed_events() {
    let events = ExtractionPipeline::new().extract(&reciprocal_article());

    assert_eq!(events.len(), 2, "expected a directed pair: {events:#?}");
    assert!(events.iter().all(|e| e.reciprocal_violence));

    let actors: Vec<&str> = events
        .iter()
        .map(|e| e.actor.as_ref().unwrap().text.as_str())
        .collect();
    assert_eq!(actors, vec!["Hema", "Lendu"]);

    // Casualties ride on the first of the pair only.
    assert_eq!(events[0].deaths(), Some(20));
    assert_eq!(events[1].deaths(), None);

    // Never merged or clustered with anything.
    assert!(events.iter().all(|e| e.cluster_size == 1));

    // Communal taxonomy for ethnic parties.
    assert_eq!(events[0].level1, "Communal Violence");
    assert_eq!(events[0].level2, "Ethnic/Tribal Conflict");
}

#[test]
fn reciprocal_pair_survives_adjacent_mergeable_mentions() {
    // A follow-up sentence that would merge with anything mergeable.
    let follow_up = [
        ("The", "the", "DT"),
        ("fighting", "fight", "NN"),
        ("killed", "kill", "VBD"),
        ("20", "20", "CD"),
        ("people", "people", "NNS"),
        (".", ".", "."),
    ];
    let deps = vec![
        DependencyArc::new(3, 5, "dobj"),
        DependencyArc::new(5, 4, "nummod"),
    ];
    let mut art = reciprocal_article();
    art.sentences.push(sent_with(&follow_up, vec![], deps));

    let events = ExtractionPipeline::new().extract(&art);
    let reciprocal: Vec<_> = events.iter().filter(|e| e.reciprocal_violence).collect();

    assert_eq!(reciprocal.len(), 2);
    assert!(reciprocal.iter().all(|e| e.cluster_size == 1));
}

#[test]
fn adjacent_mentions_of_one_incident_merge() {
    // "Militants bombed the market." / "The explosion killed 6 people."
    let s0 = {
        let words = [
            ("Militants", "militant", "NNS"),
            ("bombed", "bomb", "VBD"),
            ("the", "the", "DT"),
            ("market", "market", "NN"),
            (".", ".", "."),
        ];
        let deps = vec![
            DependencyArc::new(2, 1, "nsubj"),
            DependencyArc::new(2, 4, "dobj"),
        ];
        sent_with(&words, vec![], deps)
    };
    let s1 = {
        let words = [
            ("The", "the", "DT"),
            ("explosion", "explosion", "NN"),
            ("killed", "kill", "VBD"),
            ("6", "6", "CD"),
            ("people", "people", "NNS"),
            (".", ".", "."),
        ];
        let deps = vec![
            DependencyArc::new(3, 5, "dobj"),
            DependencyArc::new(5, 4, "nummod"),
        ];
        sent_with(&words, vec![], deps)
    };

    let events = ExtractionPipeline::new().extract(&article(vec![s0, s1]));

    assert_eq!(events.len(), 1, "bomb/explosion/kill must merge: {events:#?}");
    let event = &events[0];
    assert_eq!(event.actor.as_ref().unwrap().text, "Militants");
    assert_eq!(event.deaths(), Some(6));
    assert!(event.cluster_size >= 2);
    assert_eq!(event.source_sentences, vec![0, 1]);
}

#[test]
fn salience_fallback_keeps_single_best_event() {
    // Five benign sentences push both event mentions deep into the article;
    // neither reaches the keep threshold.
    let mut sentences = vec![filler(), filler(), filler(), filler(), filler()];

    // Sentence 5: weak mention.
    sentences.push(sent_with(
        &[
            ("Rebels", "rebel", "NNS"),
            ("attacked", "attack", "VBD"),
            ("a", "a", "DT"),
            ("convoy", "convoy", "NN"),
            (".", ".", "."),
        ],
        vec![],
        vec![DependencyArc::new(2, 1, "nsubj")],
    ));
    sentences.push(filler());
    sentences.push(filler());
    // Sentence 8: richer mention (named victims), still below threshold.
    sentences.push(sent_with(
        &[
            ("Bandits", "bandit", "NNS"),
            ("kidnapped", "kidnap", "VBD"),
            ("5", "5", "CD"),
            ("teachers", "teacher", "NNS"),
            (".", ".", "."),
        ],
        vec![],
        vec![
            DependencyArc::new(2, 1, "nsubj"),
            DependencyArc::new(2, 4, "dobj"),
            DependencyArc::new(4, 3, "nummod"),
        ],
    ));

    let events = ExtractionPipeline::new().extract(&article(sentences));

    assert_eq!(events.len(), 1, "fallback keeps exactly one: {events:#?}");
    assert_eq!(events[0].sentence_index, 8);
}

#[test]
fn merge_pass_is_idempotent_on_pipeline_output() {
    let events = ExtractionPipeline::new().extract(&responsibility_like_article());
    let remerged = merge_similar(events.clone());

    assert_eq!(events.len(), remerged.len());
    for (a, b) in events.iter().zip(remerged.iter()) {
        assert_eq!(a.trigger.lemma, b.trigger.lemma);
        assert_eq!(a.cluster_size, b.cluster_size);
        assert_eq!(a.source_sentences, b.source_sentences);
    }
}

fn responsibility_like_article() -> vex::ArticleAnnotation {
    let s0 = sent_with(
        &[
            ("Gunmen", "gunman", "NNS"),
            ("attacked", "attack", "VBD"),
            ("a", "a", "DT"),
            ("village", "village", "NN"),
            (".", ".", "."),
        ],
        vec![],
        vec![
            DependencyArc::new(2, 1, "nsubj"),
            DependencyArc::new(2, 4, "dobj"),
        ],
    );
    let s1 = sent_with(
        &[
            ("The", "the", "DT"),
            ("raid", "raid", "NN"),
            ("killed", "kill", "VBD"),
            ("9", "9", "CD"),
            ("villagers", "villager", "NNS"),
            (".", ".", "."),
        ],
        vec![],
        vec![
            DependencyArc::new(3, 5, "dobj"),
            DependencyArc::new(5, 4, "nummod"),
        ],
    );
    article(vec![s0, s1])
}

#[test]
fn cross_sentence_clustering_by_actor_and_location() {
    use vex::{Entity, EntityType};

    // Sentence 0 and sentence 6 describe the same incident; the gap rules
    // out the merge pass, so only clustering can join them.
    let s0 = sent_with(
        &[
            ("Al-Shabaab", "Al-Shabaab", "NNP"),
            ("attacked", "attack", "VBD"),
            ("a", "a", "DT"),
            ("hotel", "hotel", "NN"),
            ("in", "in", "IN"),
            ("Mogadishu", "Mogadishu", "NNP"),
            (".", ".", "."),
        ],
        vec![Entity::new("Mogadishu", EntityType::Location)],
        vec![
            DependencyArc::new(2, 1, "nsubj"),
            DependencyArc::new(2, 4, "dobj"),
        ],
    );
    let mut sentences = vec![s0, filler(), filler(), filler(), filler(), filler()];
    sentences.push(sent_with(
        &[
            ("Al-Shabaab", "Al-Shabaab", "NNP"),
            ("raided", "raid", "VBD"),
            ("the", "the", "DT"),
            ("district", "district", "NN"),
            ("in", "in", "IN"),
            ("Mogadishu", "Mogadishu", "NNP"),
            (".", ".", "."),
        ],
        vec![Entity::new("Mogadishu", EntityType::Location)],
        vec![
            DependencyArc::new(2, 1, "nsubj"),
            DependencyArc::new(2, 4, "dobj"),
        ],
    ));

    let events = ExtractionPipeline::new().extract(&article(sentences));

    assert_eq!(events.len(), 1, "same actor + place must cluster: {events:#?}");
    assert_eq!(events[0].cluster_size, 2);
    assert_eq!(events[0].source_sentences, vec![0, 6]);
}
