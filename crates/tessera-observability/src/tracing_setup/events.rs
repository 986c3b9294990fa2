//! Structured log events for key system operations.
//!
//! Each function emits a `tracing` event with structured fields. Events are
//! observational only; nothing reads them back.

/// A SENSITIVE unit was scrubbed before certification.
pub fn sensitive_unit_scrubbed(unit_id: &str, entities_found: usize, secrets_found: usize) {
    tracing::warn!(
        event = "unit_scrubbed",
        unit_id = %unit_id,
        tier = "SENSITIVE",
        entities_found = entities_found,
        secrets_found = secrets_found,
        "sensitive unit scrubbed"
    );
}

/// A MAYBE_SENSITIVE unit was scrubbed before certification.
pub fn maybe_sensitive_unit_scrubbed(unit_id: &str, entities_found: usize, secrets_found: usize) {
    tracing::info!(
        event = "unit_scrubbed",
        unit_id = %unit_id,
        tier = "MAYBE_SENSITIVE",
        entities_found = entities_found,
        secrets_found = secrets_found,
        "maybe-sensitive unit scrubbed"
    );
}

/// The scrubber failed and the unit was not certified.
pub fn scrubber_failed(unit_id: &str, tier: &str, error: &str) {
    tracing::error!(
        event = "scrubber_failed",
        unit_id = %unit_id,
        tier = %tier,
        error = %error,
        "scrubber failed, unit rejected"
    );
}

/// A batch of units finished certification.
pub fn batch_certified(units: usize, scrubbed: usize) {
    tracing::info!(
        event = "batch_certified",
        units = units,
        scrubbed = scrubbed,
        "batch certified"
    );
}

/// A query finished the full pipeline.
pub fn query_completed(candidates: usize, returned: usize, reranked: bool) {
    tracing::info!(
        event = "query_completed",
        candidates = candidates,
        returned = returned,
        reranked = reranked,
        "query completed"
    );
}

/// The rerank stage did not run for this query.
pub fn rerank_skipped(reason: &str) {
    tracing::debug!(event = "rerank_skipped", reason = %reason, "rerank skipped");
}

/// A component fell back to a documented default.
pub fn degradation_triggered(component: &str, failure: &str, fallback: &str) {
    tracing::warn!(
        event = "degradation_triggered",
        component = %component,
        failure = %failure,
        fallback = %fallback,
        "degradation triggered"
    );
}
