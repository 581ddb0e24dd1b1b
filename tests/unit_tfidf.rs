// Unit tests for TF-IDF scoring through the engine.
//
// Checks the scoring formula, the cache lifecycle (NotComputed until
// computed, invalidated by registration) and top-k ordering.

use textacular::analysis::tfidf::idf;
use textacular::analysis::{AnalysisEngine, AnalysisError};
use textacular::text::tokenizer::FrequencyTable;

fn engine_with(docs: &[(&str, &str)]) -> AnalysisEngine {
    let mut engine = AnalysisEngine::default();
    for (label, text) in docs {
        engine.load_text(*label, text);
    }
    engine
}

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-12
}

// ============================================================
// Scores
// ============================================================

#[test]
fn scores_follow_tf_times_idf() {
    let mut engine = engine_with(&[
        ("A", "cat dog dog"),
        ("B", "dog bird"),
        ("C", "fish fish fish fish"),
    ]);
    let table = engine.compute_tfidf();

    let a = table.get("A").unwrap();
    assert!(close(a["cat"], (1.0 / 3.0) * (3.0f64 / 2.0).ln()));
    assert!(close(a["dog"], (2.0 / 3.0) * (3.0f64 / 3.0).ln()));

    let c = table.get("C").unwrap();
    assert!(close(c["fish"], 1.0 * (3.0f64 / 2.0).ln()));
}

#[test]
fn full_mapping_is_kept_per_document() {
    let mut engine = engine_with(&[("A", "a b c d e f g"), ("B", "a")]);
    let table = engine.compute_tfidf();
    assert_eq!(table.get("A").unwrap().len(), 7);
    assert_eq!(table.get("B").unwrap().len(), 1);
}

#[test]
fn idf_bounded_by_ln_n_for_present_words() {
    let mut engine = engine_with(&[
        ("A", "one two three"),
        ("B", "two three four"),
        ("C", "three four five"),
        ("D", "five six"),
    ]);
    let n = engine.len();
    engine.compute_tfidf();

    for (label, table) in engine.documents() {
        for (word, _) in table.iter() {
            let df = engine
                .documents()
                .values()
                .filter(|t| t.count(word) > 0)
                .count();
            assert!(df >= 1, "{word} in {label} must count itself");
            assert!(idf(n, df) <= (n as f64).ln());
        }
    }
}

#[test]
fn single_document_scores_are_negative() {
    // N = 1, df = 1 -> idf = ln(1/2)
    let mut engine = engine_with(&[("A", "solo solo")]);
    let table = engine.compute_tfidf();
    assert!(close(table.get("A").unwrap()["solo"], (0.5f64).ln()));
}

#[test]
fn empty_document_scores_zero_without_affecting_others() {
    let mut engine = engine_with(&[("A", "cat dog"), ("B", "dog")]);
    let mut ghost = FrequencyTable::new();
    ghost.set_count("cat", 0);
    engine.register("Empty", ghost);

    let table = engine.compute_tfidf().clone();
    assert_eq!(table.get("Empty").unwrap()["cat"], 0.0);

    // The zero-count entry does not raise df("cat"): N = 3, df = 1
    assert!(close(table.get("A").unwrap()["cat"], 0.5 * (3.0f64 / 2.0).ln()));

    // A document registered from empty text has no words at all
    engine.load_text("Blank", "");
    let table = engine.compute_tfidf();
    assert!(table.get("Blank").unwrap().is_empty());
}

#[test]
fn compute_is_idempotent() {
    let mut engine = engine_with(&[("A", "cat dog dog"), ("B", "dog bird")]);
    let first = engine.compute_tfidf().clone();
    let second = engine.compute_tfidf().clone();
    assert_eq!(first, second);
}

// ============================================================
// tfidf_top_k
// ============================================================

#[test]
fn top_k_before_compute_is_not_computed() {
    let engine = engine_with(&[("A", "cat")]);
    assert_eq!(engine.tfidf_top_k("A", 3), Err(AnalysisError::NotComputed));
    assert_eq!(engine.tfidf_series(3), Err(AnalysisError::NotComputed));
}

#[test]
fn top_k_unknown_label() {
    let mut engine = engine_with(&[("A", "cat")]);
    engine.compute_tfidf();
    assert_eq!(
        engine.tfidf_top_k("Nope", 3),
        Err(AnalysisError::UnknownLabel("Nope".to_string()))
    );
}

#[test]
fn top_k_orders_by_score_descending() {
    let mut engine = engine_with(&[
        ("A", "rare common common common"),
        ("B", "common other"),
        ("C", "other filler"),
    ]);
    engine.compute_tfidf();
    let view = engine.tfidf_top_k("A", 2).unwrap();

    assert_eq!(view.label, "A");
    assert_eq!(view.words.len(), 2);
    assert!(view.scores[0] >= view.scores[1]);
    assert_eq!(view.words[0], "rare");
}

#[test]
fn top_k_ties_keep_document_order() {
    let mut engine = engine_with(&[("A", "beta alpha gamma"), ("B", "delta")]);
    engine.compute_tfidf();
    let view = engine.tfidf_top_k("A", 2).unwrap();
    assert_eq!(view.words, vec!["beta", "alpha"]);
}

#[test]
fn top_k_zero_is_empty() {
    let mut engine = engine_with(&[("A", "cat")]);
    engine.compute_tfidf();
    let view = engine.tfidf_top_k("A", 0).unwrap();
    assert!(view.words.is_empty() && view.scores.is_empty());
}

#[test]
fn registration_invalidates_previous_scores() {
    let mut engine = engine_with(&[("A", "cat")]);
    engine.compute_tfidf();
    engine.load_text("B", "dog");
    assert_eq!(engine.tfidf_top_k("A", 1), Err(AnalysisError::NotComputed));

    engine.compute_tfidf();
    assert!(engine.tfidf_top_k("B", 1).is_ok());
}

#[test]
fn series_has_one_entry_per_document() {
    let mut engine = engine_with(&[("A", "x y"), ("B", "y z"), ("C", "z w")]);
    engine.compute_tfidf();
    let series = engine.tfidf_series(1).unwrap();
    let labels: Vec<&str> = series.iter().map(|v| v.label.as_str()).collect();
    assert_eq!(labels, vec!["A", "B", "C"]);
    assert!(series.iter().all(|v| v.words.len() == 1));
}
