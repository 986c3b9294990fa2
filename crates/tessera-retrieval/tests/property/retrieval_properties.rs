use std::collections::BTreeSet;

use chrono::{TimeZone, Utc};
use proptest::prelude::*;

use tessera_core::models::Provenance;
use tessera_core::{Category, RankedHit, ScoredCandidate};
use tessera_retrieval::{boost_freshness, fuse, rerank, IntentBooster};
use test_fixtures::builders::doc_at;
use test_fixtures::fakes::ScriptedScorer;

fn ranking() -> impl Strategy<Value = Vec<RankedHit>> {
    prop::collection::vec(0u8..30, 0..25).prop_map(|ids| {
        ids.into_iter()
            .enumerate()
            .map(|(i, id)| RankedHit::new(format!("u{id}"), i as f64))
            .collect()
    })
}

fn category() -> impl Strategy<Value = Category> {
    prop::sample::select(Category::ALL.to_vec())
}

fn candidates() -> impl Strategy<Value = Vec<ScoredCandidate>> {
    prop::collection::vec((category(), 0.0f64..1.0, 0i64..400), 0..20).prop_map(|rows| {
        let mut out: Vec<ScoredCandidate> = rows
            .into_iter()
            .enumerate()
            .map(|(i, (cat, score, days_ago))| {
                let ts = (Utc.with_ymd_and_hms(2026, 6, 1, 0, 0, 0).unwrap()
                    - chrono::Duration::days(days_ago))
                .to_rfc3339();
                let id = format!("u{i}");
                ScoredCandidate::from_fused(doc_at(&id, cat, &id, &ts), score, Provenance::default())
            })
            .collect();
        tessera_core::models::sort_best_first(&mut out);
        out
    })
}

fn id_set(c: &[ScoredCandidate]) -> BTreeSet<String> {
    c.iter().map(|c| c.unit_id.clone()).collect()
}

proptest! {
    #[test]
    fn fused_ids_are_exactly_the_unique_dense_ids(
        dense in ranking(),
        code in ranking(),
        nlp in ranking(),
    ) {
        let fused = fuse(&dense, &code, &nlp, 60);
        let fused_ids: BTreeSet<&str> = fused.iter().map(|c| c.unit_id.as_str()).collect();
        let dense_ids: BTreeSet<&str> = dense.iter().map(|h| h.unit_id.as_str()).collect();
        prop_assert_eq!(fused.len(), fused_ids.len());
        prop_assert_eq!(fused_ids, dense_ids);
    }

    #[test]
    fn fused_output_is_sorted_best_first(dense in ranking(), code in ranking(), nlp in ranking()) {
        let fused = fuse(&dense, &code, &nlp, 60);
        for pair in fused.windows(2) {
            prop_assert!(pair[0].fused_score >= pair[1].fused_score);
        }
    }

    #[test]
    fn intent_boost_preserves_the_candidate_set(
        input in candidates(),
        query in prop::sample::select(vec!["kubernetes outage", "terraform vpc", "who said", "nothing"]),
    ) {
        let out = IntentBooster::builtin().boost_intent(query, input.clone());
        prop_assert_eq!(out.len(), input.len());
        prop_assert_eq!(id_set(&out), id_set(&input));
        for pair in out.windows(2) {
            prop_assert!(pair[0].final_score >= pair[1].final_score);
        }
    }

    #[test]
    fn rerank_returns_min_of_k_and_n(input in candidates(), k in 0usize..30) {
        let scorer = ScriptedScorer::new(&[]);
        let n = input.len();
        let out = rerank("q", input, Some(k), &scorer).unwrap();
        prop_assert_eq!(out.len(), k.min(n));
    }

    #[test]
    fn freshness_never_touches_non_conversational_scores(
        input in candidates(),
        half_life in 0.5f64..60.0,
        weight in 0.0f64..=1.0,
    ) {
        let now = Utc.with_ymd_and_hms(2026, 6, 1, 0, 0, 0).unwrap();
        let out = boost_freshness(input.clone(), half_life, weight, now);
        prop_assert_eq!(id_set(&out), id_set(&input));
        for c in out.iter().filter(|c| !c.category.is_conversational()) {
            let before = input.iter().find(|i| i.unit_id == c.unit_id).unwrap();
            prop_assert_eq!(c.final_score, before.final_score);
            prop_assert_eq!(c.boosted_score, None);
        }
    }
}
