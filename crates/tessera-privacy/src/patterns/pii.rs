//! Personal and health identifiers.
//!
//! Patterns with a `value` capture group replace only that group, so the
//! label ("MRN:", "patient") survives and keeps the text readable.

use regex::Regex;
use std::sync::LazyLock;

use super::{EntityKind, Pattern};

macro_rules! pii_pattern {
    ($name:ident, $regex_str:expr) => {
        pub static $name: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new($regex_str).ok());
    };
}

// ── Contact ────────────────────────────────────────────────────────────────
pii_pattern!(
    RE_EMAIL,
    r"\b[A-Za-z0-9._%+\-]+@[A-Za-z0-9.\-]+\.[A-Za-z]{2,}\b"
);
// Separators are optional. `\b` anchors a bare area code; a country code
// or parenthesized area code anchors the match itself.
pii_pattern!(
    RE_PHONE,
    r"(?:(?:\+|\b)1[-.\s]?(?:\(\d{3}\)|\d{3})|\(\d{3}\)|\b\d{3})[-.\s]?\d{3}[-.\s]?\d{4}\b"
);

// ── Government / financial ─────────────────────────────────────────────────
pii_pattern!(RE_SSN, r"\b\d{3}-\d{2}-\d{4}\b");
pii_pattern!(
    RE_CREDIT_CARD,
    r"\b(?:4\d{3}|5[1-5]\d{2}|3[47]\d{2}|6(?:011|5\d{2}))[-\s]?\d{4}[-\s]?\d{4}[-\s]?\d{3,4}\b"
);

// ── Network ────────────────────────────────────────────────────────────────
pii_pattern!(
    RE_IPV4,
    r"\b(?:(?:25[0-5]|2[0-4]\d|[01]?\d\d?)\.){3}(?:25[0-5]|2[0-4]\d|[01]?\d\d?)\b"
);

// ── People ─────────────────────────────────────────────────────────────────
pii_pattern!(
    RE_TITLED_NAME,
    r"\b(?:Mr|Mrs|Ms|Dr|Prof)\.\s+(?P<value>[A-Z][a-z]+(?:\s+[A-Z][a-z]+)?)"
);
pii_pattern!(
    RE_DOB,
    r"(?i)\b(?:dob|date of birth|born(?: on)?)\s*[:\-]?\s*(?P<value>\d{1,2}[/\-]\d{1,2}[/\-]\d{2,4}|\d{4}-\d{2}-\d{2})"
);

// ── Health (PHI) ───────────────────────────────────────────────────────────
pii_pattern!(
    RE_MRN,
    r"(?i)\b(?:mrn|medical record(?: number| no\.?)?)\s*[:#]?\s*(?P<value>\d[A-Z0-9]{5,11}|[A-Z]{1,3}\d{5,10})\b"
);
pii_pattern!(
    RE_HEALTH_PLAN_ID,
    r"(?i)\b(?:member|policy|subscriber)\s+(?:id|number|no\.?)\s*[:#]?\s*(?P<value>[A-Z]{0,4}\d[A-Z0-9]{5,14})\b"
);
pii_pattern!(RE_NPI, r"(?i)\bnpi\s*[:#]?\s*(?P<value>\d{10})\b");
pii_pattern!(
    RE_PATIENT_NAME,
    r"\b(?:[Pp]atient|[Pp]t\.)\s*[:\-]?\s*(?P<value>[A-Z][a-z]+\s+[A-Z][a-z]+)"
);

/// Every PII and PHI pattern, in scan order.
pub fn all_patterns() -> Vec<Pattern> {
    vec![
        Pattern::new("email", "EMAIL", EntityKind::Pii, &RE_EMAIL, 0.95),
        Pattern::new("phone", "PHONE", EntityKind::Pii, &RE_PHONE, 0.80),
        Pattern::new("ssn", "SSN", EntityKind::Pii, &RE_SSN, 0.95),
        Pattern::new("credit_card", "CREDIT_CARD", EntityKind::Pii, &RE_CREDIT_CARD, 0.90),
        Pattern::new("ipv4", "IP_ADDRESS", EntityKind::Pii, &RE_IPV4, 0.60),
        Pattern::new("titled_name", "PERSON", EntityKind::Pii, &RE_TITLED_NAME, 0.85),
        Pattern::new("date_of_birth", "DATE_OF_BIRTH", EntityKind::Phi, &RE_DOB, 0.95),
        Pattern::new("mrn", "MEDICAL_RECORD_NUMBER", EntityKind::Phi, &RE_MRN, 0.95),
        Pattern::new("health_plan_id", "HEALTH_PLAN_ID", EntityKind::Phi, &RE_HEALTH_PLAN_ID, 0.90),
        Pattern::new("npi", "PROVIDER_ID", EntityKind::Phi, &RE_NPI, 0.90),
        Pattern::new("patient_name", "PERSON", EntityKind::Phi, &RE_PATIENT_NAME, 0.90),
    ]
}
