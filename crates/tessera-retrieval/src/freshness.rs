//! Recency decay for conversational content.
//!
//! `decay = exp(-ln 2 · age_days / half_life_days)`, blended into the
//! candidate's base score with `weight`. Only chat and meeting candidates
//! with a parseable timestamp are touched.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use tracing::debug;

use tessera_core::models::sort_best_first;
use tessera_core::ScoredCandidate;
use tessera_observability::events;

const SECONDS_PER_DAY: f64 = 86_400.0;

/// Parse a source timestamp.
///
/// Accepts RFC 3339, `YYYY-MM-DD HH:MM:SS` and `YYYY-MM-DDTHH:MM:SS` (UTC),
/// `YYYY-MM-DD` (midnight UTC), and integer epoch seconds.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Some(ts.with_timezone(&Utc));
    }
    for format in ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(naive.and_utc());
        }
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return date.and_hms_opt(0, 0, 0).map(|naive| naive.and_utc());
    }
    if raw.bytes().all(|b| b.is_ascii_digit()) {
        return raw.parse::<i64>().ok().and_then(|secs| DateTime::from_timestamp(secs, 0));
    }
    None
}

/// Age in days, clamped at zero for timestamps in the future.
pub fn age_days(timestamp: DateTime<Utc>, now: DateTime<Utc>) -> f64 {
    (now - timestamp).num_seconds().max(0) as f64 / SECONDS_PER_DAY
}

/// Exponential decay with the given half-life. 1.0 at age 0, 0.5 at one
/// half-life.
pub fn decay(age_days: f64, half_life_days: f64) -> f64 {
    (-std::f64::consts::LN_2 * age_days / half_life_days).exp()
}

/// Reweight conversational candidates by recency and re-sort.
///
/// Candidates that are not conversational, or whose timestamp is missing or
/// unparseable, keep their score. A non-positive half-life disables the stage.
pub fn boost_freshness(
    mut candidates: Vec<ScoredCandidate>,
    half_life_days: f64,
    weight: f64,
    now: DateTime<Utc>,
) -> Vec<ScoredCandidate> {
    if half_life_days.is_nan() || half_life_days <= 0.0 {
        events::degradation_triggered("freshness", "half_life_days must be > 0", "stage skipped");
        return candidates;
    }
    let weight = if weight.is_nan() { 0.0 } else { weight.clamp(0.0, 1.0) };

    let mut boosted = 0usize;
    for candidate in &mut candidates {
        if !candidate.category.is_conversational() {
            continue;
        }
        let Some(raw) = candidate.timestamp.as_deref() else {
            continue;
        };
        let Some(ts) = parse_timestamp(raw) else {
            debug!(unit_id = %candidate.unit_id, timestamp = %raw, "unparseable timestamp, freshness skipped");
            continue;
        };
        let d = decay(age_days(ts, now), half_life_days);
        let score = (1.0 - weight) * candidate.base_score() + weight * d;
        candidate.set_boosted(score);
        boosted += 1;
    }

    debug!(boosted, total = candidates.len(), "freshness boost applied");
    sort_best_first(&mut candidates);
    candidates
}
