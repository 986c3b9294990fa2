use chrono::{Duration, TimeZone, Utc};

use tessera_core::models::Provenance;
use tessera_core::{Category, ScoredCandidate};
use tessera_retrieval::boost_freshness;
use tessera_retrieval::freshness::decay;
use test_fixtures::builders::{doc, doc_at};

fn candidate(doc: tessera_core::CandidateDocument, score: f64) -> ScoredCandidate {
    ScoredCandidate::from_fused(doc, score, Provenance::default())
}

fn now() -> chrono::DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 6, 1, 12, 0, 0).unwrap()
}

fn rfc3339_days_ago(days: i64) -> String {
    (now() - Duration::days(days)).to_rfc3339()
}

#[test]
fn non_conversational_candidates_are_unchanged() {
    let ts = rfc3339_days_ago(1);
    let input = vec![
        candidate(doc_at("code", Category::Code, "fn a()", &ts), 0.4),
        candidate(doc_at("deploy", Category::Deploy, "kind: Deployment", &ts), 0.2),
    ];
    let out = boost_freshness(input.clone(), 14.0, 0.3, now());
    assert_eq!(out, input);
}

#[test]
fn decay_is_one_half_at_the_half_life() {
    assert!((decay(14.0, 14.0) - 0.5).abs() < 1e-12);
    assert!((decay(28.0, 14.0) - 0.25).abs() < 1e-12);

    let chat = candidate(doc_at("c", Category::Chat, "hi", &rfc3339_days_ago(14)), 0.0);
    let out = boost_freshness(vec![chat], 14.0, 1.0, now());
    assert!((out[0].final_score - 0.5).abs() < 1e-9);
    assert_eq!(out[0].boosted_score, Some(out[0].final_score));
    assert_eq!(out[0].fused_score, Some(0.0));
}

#[test]
fn blend_follows_weight() {
    let meeting = candidate(doc_at("m", Category::Meeting, "notes", &rfc3339_days_ago(14)), 0.8);
    let out = boost_freshness(vec![meeting], 14.0, 0.25, now());
    let expected = 0.75 * 0.8 + 0.25 * 0.5;
    assert!((out[0].final_score - expected).abs() < 1e-9);
}

#[test]
fn malformed_or_missing_timestamps_pass_through() {
    let input = vec![
        candidate(doc_at("bad", Category::Chat, "x", "last tuesday"), 0.3),
        candidate(doc("none", Category::Meeting, "y"), 0.2),
    ];
    let out = boost_freshness(input.clone(), 14.0, 0.5, now());
    assert_eq!(out, input);
}

#[test]
fn newer_conversation_overtakes_older() {
    let input = vec![
        candidate(doc_at("old", Category::Chat, "x", &rfc3339_days_ago(90)), 0.031),
        candidate(doc_at("new", Category::Chat, "y", &rfc3339_days_ago(0)), 0.030),
    ];
    let out = boost_freshness(input, 14.0, 0.3, now());
    assert_eq!(out[0].unit_id, "new");
    assert_eq!(out[1].unit_id, "old");
}

#[test]
fn reranked_score_is_the_base_when_present() {
    let mut chat = candidate(doc_at("c", Category::Chat, "x", &rfc3339_days_ago(14)), 0.01);
    chat.set_reranked(0.9);
    let out = boost_freshness(vec![chat], 14.0, 0.5, now());
    let expected = 0.5 * 0.9 + 0.5 * 0.5;
    assert!((out[0].final_score - expected).abs() < 1e-9);
    assert_eq!(out[0].reranked_score, Some(0.9));
}

#[test]
fn accepts_sql_style_and_epoch_timestamps() {
    let sql = (now() - Duration::days(14)).format("%Y-%m-%d %H:%M:%S").to_string();
    let epoch = (now() - Duration::days(14)).timestamp().to_string();
    let out = boost_freshness(
        vec![
            candidate(doc_at("sql", Category::Chat, "x", &sql), 0.0),
            candidate(doc_at("epoch", Category::Chat, "y", &epoch), 0.0),
        ],
        14.0,
        1.0,
        now(),
    );
    for c in &out {
        assert!((c.final_score - 0.5).abs() < 1e-9, "{}", c.unit_id);
    }
}

#[test]
fn non_positive_half_life_skips_the_stage() {
    let input = vec![candidate(doc_at("c", Category::Chat, "x", &rfc3339_days_ago(3)), 0.2)];
    assert_eq!(boost_freshness(input.clone(), 0.0, 0.3, now()), input);
}
