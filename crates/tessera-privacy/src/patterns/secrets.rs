//! Credentials, tokens and keys.

use regex::Regex;
use std::sync::LazyLock;

use super::{EntityKind, Pattern};

macro_rules! secret_pattern {
    ($name:ident, $regex_str:expr) => {
        pub static $name: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new($regex_str).ok());
    };
}

// ── Cloud providers ────────────────────────────────────────────────────────
secret_pattern!(RE_AWS_ACCESS_KEY, r"\b(?:AKIA|ASIA)[0-9A-Z]{16}\b");
secret_pattern!(
    RE_AWS_SECRET_KEY,
    r#"(?i)aws_secret_access_key\s*[=:]\s*['"]?(?P<value>[A-Za-z0-9/+=]{40})"#
);

// ── Source control / chat ──────────────────────────────────────────────────
secret_pattern!(RE_GITHUB_TOKEN, r"\bgh[pousr]_[A-Za-z0-9]{36,}\b");
secret_pattern!(RE_SLACK_TOKEN, r"\bxox[abprs]-[A-Za-z0-9-]{10,}\b");

// ── Tokens ─────────────────────────────────────────────────────────────────
secret_pattern!(
    RE_JWT,
    r"\beyJ[A-Za-z0-9_-]{10,}\.[A-Za-z0-9_-]{10,}\.[A-Za-z0-9_-]{10,}\b"
);
secret_pattern!(
    RE_BEARER,
    r"(?i)\bbearer\s+(?P<value>[A-Za-z0-9\-._~+/]{20,}=*)"
);

// ── Private keys (PEM) ─────────────────────────────────────────────────────
secret_pattern!(
    RE_PRIVATE_KEY_BLOCK,
    r"-----BEGIN (?:RSA |EC |DSA |OPENSSH )?PRIVATE KEY-----[\s\S]*?-----END (?:RSA |EC |DSA |OPENSSH )?PRIVATE KEY-----"
);
secret_pattern!(
    RE_PRIVATE_KEY_HEADER,
    r"-----BEGIN (?:RSA |EC |DSA |OPENSSH )?PRIVATE KEY-----"
);

// ── Assignments ────────────────────────────────────────────────────────────
secret_pattern!(
    RE_GENERIC_API_KEY,
    r#"(?i)\b(?:api[_-]?key|secret[_-]?key|access[_-]?token|auth[_-]?token|client[_-]?secret)\s*[=:]\s*['"]?(?P<value>[A-Za-z0-9_\-./+=]{16,})"#
);
secret_pattern!(
    RE_PASSWORD,
    r#"(?i)\b(?:password|passwd|pwd)\s*[=:]\s*['"]?(?P<value>[^\s'"]{6,})"#
);

// ── Connection strings (credentials only) ──────────────────────────────────
secret_pattern!(
    RE_CONNECTION_CREDENTIALS,
    r"\b(?:postgres(?:ql)?|mysql|mongodb(?:\+srv)?|redis|amqps?)://(?P<value>[^:\s/@]+:[^@\s]+)@"
);

/// Every secret pattern, in scan order.
pub fn all_patterns() -> Vec<Pattern> {
    vec![
        Pattern::new("aws_access_key", "AWS_KEY", EntityKind::Secret, &RE_AWS_ACCESS_KEY, 0.95),
        Pattern::new("aws_secret_key", "AWS_SECRET", EntityKind::Secret, &RE_AWS_SECRET_KEY, 0.95),
        Pattern::new("github_token", "GITHUB_TOKEN", EntityKind::Secret, &RE_GITHUB_TOKEN, 0.95),
        Pattern::new("slack_token", "SLACK_TOKEN", EntityKind::Secret, &RE_SLACK_TOKEN, 0.95),
        Pattern::new("jwt", "JWT", EntityKind::Secret, &RE_JWT, 0.90),
        Pattern::new("bearer_token", "BEARER_TOKEN", EntityKind::Secret, &RE_BEARER, 0.85),
        Pattern::new("private_key_block", "PRIVATE_KEY", EntityKind::Secret, &RE_PRIVATE_KEY_BLOCK, 0.99),
        Pattern::new("private_key_header", "PRIVATE_KEY", EntityKind::Secret, &RE_PRIVATE_KEY_HEADER, 0.95),
        Pattern::new("generic_api_key", "API_KEY", EntityKind::Secret, &RE_GENERIC_API_KEY, 0.80),
        Pattern::new("password", "PASSWORD", EntityKind::Secret, &RE_PASSWORD, 0.80),
        Pattern::new("connection_credentials", "CREDENTIALS", EntityKind::Secret, &RE_CONNECTION_CREDENTIALS, 0.95),
    ]
}
