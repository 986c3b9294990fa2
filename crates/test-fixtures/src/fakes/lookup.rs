use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use tessera_core::errors::TesseraResult;
use tessera_core::traits::ICandidateLookup;
use tessera_core::CandidateDocument;

/// Lookup backed by a map. Unknown ids are omitted from the result.
#[derive(Default)]
pub struct MapLookup {
    docs: HashMap<String, CandidateDocument>,
    calls: AtomicUsize,
}

impl MapLookup {
    pub fn new(docs: impl IntoIterator<Item = CandidateDocument>) -> Self {
        Self {
            docs: docs.into_iter().map(|d| (d.unit_id.clone(), d)).collect(),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl ICandidateLookup for MapLookup {
    fn lookup(&self, unit_ids: &[String]) -> TesseraResult<HashMap<String, CandidateDocument>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(unit_ids
            .iter()
            .filter_map(|id| self.docs.get(id).map(|d| (id.clone(), d.clone())))
            .collect())
    }
}
