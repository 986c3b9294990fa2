//! Deterministic content-unit identity.
//!
//! A unit id is a pure function of `(source_uri, byte_start, byte_end)`.
//! Re-crawling the same byte range of the same source reproduces the same id,
//! which incremental re-ingestion relies on to detect unchanged content.

/// Number of hex characters kept from the blake3 digest (64 bits).
pub const UNIT_ID_HEX_LEN: usize = 16;

/// Derive the stable identifier for a byte range of a source.
///
/// The tuple is hashed with blake3 over a length-delimited little-endian
/// encoding, so `("ab", 1, 2)` and `("a", ...)` can never collide by
/// concatenation. No process-local state is involved.
pub fn derive_id(source_uri: &str, byte_start: u64, byte_end: u64) -> String {
    let mut hasher = blake3::Hasher::new();
    hasher.update(&(source_uri.len() as u64).to_le_bytes());
    hasher.update(source_uri.as_bytes());
    hasher.update(&byte_start.to_le_bytes());
    hasher.update(&byte_end.to_le_bytes());
    let digest = hasher.finalize().to_hex();
    digest.as_str()[..UNIT_ID_HEX_LEN].to_string()
}
