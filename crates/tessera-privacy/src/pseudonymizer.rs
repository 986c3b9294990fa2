//! Seeded, deterministic pseudonyms.
//!
//! The same `(entity_type, text)` pair always maps to the same replacement
//! for the lifetime of the process, and for a given seed across processes.
//! Text is compared case-insensitively so `Alice@Corp.io` and
//! `alice@corp.io` share one pseudonym.

use dashmap::DashMap;

/// Hex characters of the keyed digest kept in each pseudonym.
const PSEUDONYM_HEX_LEN: usize = 8;

pub struct Pseudonymizer {
    key: [u8; 32],
    cache: DashMap<(String, String), String>,
}

impl Pseudonymizer {
    pub fn new(seed: u64) -> Self {
        let key = blake3::derive_key("tessera pseudonymizer v1", &seed.to_le_bytes());
        Self {
            key,
            cache: DashMap::new(),
        }
    }

    /// Replacement for one entity, e.g. `[EMAIL_3f9a0c12]`.
    pub fn pseudonym(&self, entity_type: &str, text: &str) -> String {
        let key = (entity_type.to_string(), text.to_lowercase());
        if let Some(existing) = self.cache.get(&key) {
            return existing.value().clone();
        }
        // Generation is a pure function of the key, so a racing insert of the
        // same key stores the same value.
        let generated = self.generate(entity_type, &key.1);
        self.cache.entry(key).or_insert(generated).value().clone()
    }

    fn generate(&self, entity_type: &str, normalized: &str) -> String {
        let mut hasher = blake3::Hasher::new_keyed(&self.key);
        hasher.update(entity_type.as_bytes());
        hasher.update(&[0]);
        hasher.update(normalized.as_bytes());
        let digest = hasher.finalize().to_hex();
        format!("[{entity_type}_{}]", &digest.as_str()[..PSEUDONYM_HEX_LEN])
    }

    /// Number of distinct entities seen so far.
    pub fn len(&self) -> usize {
        self.cache.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }
}
