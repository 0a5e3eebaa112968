//! End-to-end pipeline properties over a live session.

use crate::{ScoringSession, SnippetSampler};

fn session_with(reviews: &[&str]) -> ScoringSession {
    let mut session = ScoringSession::with_default_lexicon().unwrap();
    session.ingest(reviews.iter().copied());
    session
}

#[test]
fn repeated_reports_are_identical() {
    let session = session_with(&[
        "This is fragrance-free and light.",
        "Feels sticky and heavy.",
        "Gentle and soothing, no irritation after a full day of wear.",
    ]);

    let first = session.compute_report("Rose Tint", "liquid blush");
    let second = session.compute_report("Rose Tint", "liquid blush");
    assert_eq!(first, second);

    // Bit-identical down to the serialized form.
    assert_eq!(
        serde_json::to_string(&first).unwrap(),
        serde_json::to_string(&second).unwrap()
    );
}

#[test]
fn two_review_scenario_matches_formula() {
    let session = session_with(&[
        "This is fragrance-free and light.",
        "Feels sticky and heavy.",
    ]);
    let lexicon = session.lexicon();
    let model = session.compute_model();

    let fragrance_free = lexicon.id_of("fragrance-free").unwrap();
    let sticky = lexicon.id_of("sticky").unwrap();
    let heavy = lexicon.id_of("heavy").unwrap();

    assert_eq!(model.pos_counts.len(), 1);
    assert_eq!(model.pos_counts.count(fragrance_free), 1);
    assert_eq!(model.neg_counts.len(), 2);
    assert_eq!(model.neg_counts.count(sticky), 1);
    assert_eq!(model.neg_counts.count(heavy), 1);

    // pos = 3, neg = 6: round(100 * 3 / (3 + 6 + 2)) = 27.
    assert_eq!(model.raw_score, 27);
    assert_eq!(model.confidence, 24);
    assert_eq!(model.score, 56);
}

#[test]
fn lone_negated_cue_scores_positive() {
    let session = session_with(&["not sticky"]);
    let model = session.compute_model();

    // "not sticky" is itself a positive phrase, and the negated "sticky"
    // inverts to the positive side: no negative evidence remains.
    assert!(!model.pos_counts.is_empty());
    assert!(model.neg_counts.is_empty());
    assert!(model.raw_score > 0);
}

#[test]
fn empty_corpus_reports_neutral_default() {
    let session = ScoringSession::with_default_lexicon().unwrap();
    let report = session.compute_report("Unseen Product", "beauty product");

    assert_eq!(report.total_reviews, 0);
    assert_eq!(report.confidence, 0);
    assert_eq!(report.score, 65);
    assert!(report.top_positive_cues.is_empty());
    assert!(report.top_negative_cues.is_empty());
    assert!(report.sample_quotes.is_empty());
}

#[test]
fn scores_stay_in_bounds_as_corpus_grows() {
    let mut session = ScoringSession::with_default_lexicon().unwrap();
    let mut last_confidence = 0;

    for i in 0..120 {
        session.ingest(vec![format!("review number {} feels sticky and heavy today", i)]);
        let model = session.compute_model();
        assert!(model.score <= 100);
        assert!(model.raw_score <= 100);
        assert!(model.confidence <= 100);
        assert!(
            model.confidence >= last_confidence,
            "confidence dipped at review {}",
            i
        );
        last_confidence = model.confidence;
    }
    assert_eq!(last_confidence, 100);
}

#[test]
fn quotes_come_from_the_current_corpus() {
    let session = session_with(&[
        "The texture stayed sticky for hours and ruined my makeup base.",
        "Another day another sticky disappointment with this formula.",
    ]);
    let report = session.compute_report("Rose Tint", "liquid blush");

    assert!(!report.sample_quotes.is_empty());
    for quote in &report.sample_quotes {
        assert!(
            session.corpus().iter().any(|review| review.contains(quote)),
            "quote not drawn from corpus: {}",
            quote
        );
    }
}

#[test]
fn snippet_cap_applies_to_reports() {
    let reviews: Vec<String> = (0..10)
        .map(|i| format!("Review {} found it sticky and heavy from the very first use.", i))
        .collect();

    let mut session = ScoringSession::with_default_lexicon().unwrap();
    session.ingest(reviews.clone());
    let report = session.compute_report("Rose Tint", "liquid blush");
    assert_eq!(report.sample_quotes.len(), 3);

    let mut wide = ScoringSession::with_default_lexicon()
        .unwrap()
        .with_sampler(SnippetSampler::new().with_want(5));
    wide.ingest(reviews);
    let report = wide.compute_report("Rose Tint", "liquid blush");
    assert_eq!(report.sample_quotes.len(), 5);
}

#[test]
fn product_change_resets_scoring() {
    let mut session = ScoringSession::with_default_lexicon().unwrap();
    session.reset_for_new_product("Old Product");
    session.ingest(vec!["Feels sticky and heavy on application, very disappointing."]);
    assert!(session.compute_model().raw_score < 50);

    session.reset_for_new_product("New Product");
    let report = session.compute_report("New Product", "beauty product");
    assert_eq!(report.total_reviews, 0);
    assert_eq!(report.score, 65);
}

#[test]
fn report_serializes_with_camel_case_keys() {
    let session = session_with(&["This is fragrance-free and light."]);
    let report = session.compute_report("Rose Tint", "liquid blush");
    let value = serde_json::to_value(&report).unwrap();
    let object = value.as_object().unwrap();

    for key in [
        "productName",
        "productType",
        "score",
        "rawScore",
        "confidence",
        "totalReviews",
        "topPositiveCues",
        "topNegativeCues",
        "sampleQuotes",
    ]
    .iter()
    {
        assert!(object.contains_key(*key), "missing key {}", key);
    }
}
