//! Shared test support for the Tessera workspace: golden fixture loading,
//! fake collaborators for every external trait, builders, and log capture.

pub mod builders;
pub mod fakes;
pub mod logs;

use serde::de::DeserializeOwned;
use std::path::PathBuf;

/// Root directory of the golden fixtures.
fn fixtures_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("golden")
}

/// Load and deserialize a JSON fixture file.
///
/// # Panics
/// Panics if the file doesn't exist or can't be deserialized.
pub fn load_fixture<T: DeserializeOwned>(relative_path: &str) -> T {
    let path = fixtures_root().join(relative_path);
    let content = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e));
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse fixture {}: {}", path.display(), e))
}

/// Check that a fixture file exists.
pub fn fixture_exists(relative_path: &str) -> bool {
    fixtures_root().join(relative_path).exists()
}

/// One golden scrubber case.
#[derive(Debug, Clone, serde::Deserialize)]
pub struct ScrubCase {
    pub name: String,
    pub source_type: String,
    #[serde(default)]
    pub file_path: Option<String>,
    pub input: String,
    /// Substrings that must not survive scrubbing.
    #[serde(default)]
    pub must_not_contain: Vec<String>,
    /// Substrings that must survive scrubbing.
    #[serde(default)]
    pub must_contain: Vec<String>,
    pub entities_found: usize,
    pub secrets_found: usize,
    #[serde(default)]
    pub entity_types: Vec<String>,
}

/// One golden fusion case: three rankings and the expected fused order.
#[derive(Debug, Clone, serde::Deserialize)]
pub struct FusionCase {
    pub name: String,
    pub dense: Vec<String>,
    pub lexical_code: Vec<String>,
    pub lexical_nlp: Vec<String>,
    pub expected_order: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_golden_files_exist() {
        let files = [
            "privacy/scrub_cases.json",
            "privacy/false_positives.json",
            "retrieval/fusion_cases.json",
        ];
        for f in &files {
            assert!(fixture_exists(f), "Missing fixture: {}", f);
        }
    }

    #[test]
    fn golden_files_parse() {
        let scrub: Vec<ScrubCase> = load_fixture("privacy/scrub_cases.json");
        assert!(!scrub.is_empty());
        let fp: Vec<ScrubCase> = load_fixture("privacy/false_positives.json");
        assert!(!fp.is_empty());
        let fusion: Vec<FusionCase> = load_fixture("retrieval/fusion_cases.json");
        assert!(!fusion.is_empty());
    }
}
