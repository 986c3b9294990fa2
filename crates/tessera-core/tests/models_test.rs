use tessera_core::models::{sort_best_first, Provenance, StageHit, UnitMetadata};
use tessera_core::{derive_id, ByteRange, CandidateDocument, Category, RawContentUnit, ScoredCandidate};

fn doc(id: &str, category: Category) -> CandidateDocument {
    CandidateDocument {
        unit_id: id.to_string(),
        text: format!("text of {id}"),
        category,
        timestamp: None,
        repository: None,
        service: None,
    }
}

#[test]
fn raw_unit_id_is_derived_from_uri_and_range() {
    let unit = RawContentUnit::new(
        "git://payments/src/charge.rs",
        ByteRange::new(100, 420),
        "code",
        "fn charge() {}",
    );
    assert_eq!(unit.id(), derive_id("git://payments/src/charge.rs", 100, 420));
    assert_eq!(unit.byte_range().len(), 320);
}

#[test]
fn raw_unit_builders_keep_identity() {
    let base = RawContentUnit::new("slack://eng/C1", ByteRange::new(0, 10), "chat_message", "hi");
    let id = base.id().to_string();
    let unit = base
        .with_context_prefix("#eng-oncall")
        .with_timestamp("2026-10-01T09:00:00Z")
        .with_metadata(UnitMetadata {
            service: Some("payments".to_string()),
            ..UnitMetadata::default()
        });
    assert_eq!(unit.id(), id);
    assert_eq!(unit.context_prefix(), "#eng-oncall");
    assert_eq!(unit.timestamp(), Some("2026-10-01T09:00:00Z"));
    assert_eq!(unit.metadata().service.as_deref(), Some("payments"));
}

#[test]
fn hydrated_candidate_starts_at_fused_score() {
    let provenance = Provenance {
        dense: Some(StageHit { rank: 1, raw_score: 0.12 }),
        ..Provenance::default()
    };
    let c = ScoredCandidate::from_fused(doc("a", Category::Code), 0.05, provenance);
    assert_eq!(c.fused_score, Some(0.05));
    assert_eq!(c.final_score, 0.05);
    assert_eq!(c.base_score(), 0.05);
    assert!(c.boosted_score.is_none());
    assert!(c.reranked_score.is_none());
}

#[test]
fn base_score_follows_latest_stage() {
    let mut c = ScoredCandidate::from_fused(doc("a", Category::Code), 0.05, Provenance::default());
    c.set_reranked(0.9);
    assert_eq!(c.base_score(), 0.9);
    c.set_boosted(0.95);
    assert_eq!(c.base_score(), 0.95);
    assert_eq!(c.reranked_score, Some(0.9));
}

#[test]
fn sort_best_first_is_descending_and_stable() {
    let mut cs = vec![
        ScoredCandidate::from_fused(doc("a", Category::Code), 0.1, Provenance::default()),
        ScoredCandidate::from_fused(doc("b", Category::Code), 0.3, Provenance::default()),
        ScoredCandidate::from_fused(doc("c", Category::Code), 0.1, Provenance::default()),
    ];
    sort_best_first(&mut cs);
    let ids: Vec<&str> = cs.iter().map(|c| c.unit_id.as_str()).collect();
    assert_eq!(ids, vec!["b", "a", "c"]);
}
