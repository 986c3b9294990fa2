//! Terse constructors for test data.

use tessera_core::models::UnitMetadata;
use tessera_core::{ByteRange, CandidateDocument, Category, RankedHit, RawContentUnit};

/// A raw unit at `uri` covering `[0, text.len())`.
pub fn raw_unit(uri: &str, source_type: &str, text: &str) -> RawContentUnit {
    RawContentUnit::new(uri, ByteRange::new(0, text.len() as u64), source_type, text)
}

/// A raw unit carrying a file path in its metadata.
pub fn raw_unit_at_path(uri: &str, source_type: &str, file_path: &str, text: &str) -> RawContentUnit {
    raw_unit(uri, source_type, text).with_metadata(UnitMetadata {
        file_path: Some(file_path.to_string()),
        ..UnitMetadata::default()
    })
}

/// Best-first hits with descending placeholder scores.
pub fn hits(ids: &[&str]) -> Vec<RankedHit> {
    ids.iter()
        .enumerate()
        .map(|(i, id)| RankedHit::new(*id, 1.0 / (i as f64 + 1.0)))
        .collect()
}

/// A candidate document with no timestamp, repository or service.
pub fn doc(id: &str, category: Category, text: &str) -> CandidateDocument {
    CandidateDocument {
        unit_id: id.to_string(),
        text: text.to_string(),
        category,
        timestamp: None,
        repository: None,
        service: None,
    }
}

/// A candidate document with a timestamp.
pub fn doc_at(id: &str, category: Category, text: &str, timestamp: &str) -> CandidateDocument {
    CandidateDocument {
        timestamp: Some(timestamp.to_string()),
        ..doc(id, category, text)
    }
}
