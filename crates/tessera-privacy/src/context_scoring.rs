//! Context-aware confidence adjustment for pattern matches.
//!
//! Lowers confidence for matches in test fixtures and comments and drops
//! obvious placeholders, so documentation examples are not counted as leaks.
//! Scoring only ever removes matches whose adjusted confidence falls below
//! [`MIN_CONFIDENCE_THRESHOLD`]; it never adds matches.

/// Context signals that can adjust pattern confidence.
#[derive(Debug, Clone, Default)]
pub struct ScoringContext<'a> {
    /// File path (if known), used for test-file and `.env` detection.
    pub file_path: Option<&'a str>,
    /// Whether the match is inside a code comment.
    pub in_comment: bool,
    /// Whether the match looks like a placeholder (`example.com`, `xxxx`, `[EMAIL]`).
    pub is_placeholder: bool,
}

const TEST_FILE_ADJUSTMENT: f64 = -0.20;
const COMMENT_ADJUSTMENT: f64 = -0.15;
const ENV_FILE_ADJUSTMENT: f64 = 0.10;

/// Matches below this are dropped.
pub const MIN_CONFIDENCE_THRESHOLD: f64 = 0.40;

/// Adjust the base confidence of a match. `None` means skip the match.
pub fn adjust_confidence(base_confidence: f64, ctx: &ScoringContext<'_>) -> Option<f64> {
    if ctx.is_placeholder {
        return None;
    }

    let mut adjusted = base_confidence;

    if let Some(path) = ctx.file_path {
        let lower = path.to_lowercase();
        if is_test_file(&lower) {
            adjusted += TEST_FILE_ADJUSTMENT;
        }
        if is_env_file(&lower) {
            adjusted += ENV_FILE_ADJUSTMENT;
        }
    }

    if ctx.in_comment {
        adjusted += COMMENT_ADJUSTMENT;
    }

    adjusted = adjusted.clamp(0.0, 1.0);
    if adjusted < MIN_CONFIDENCE_THRESHOLD {
        return None;
    }
    Some(adjusted)
}

fn is_test_file(path: &str) -> bool {
    path.contains("/tests/")
        || path.contains("/test/")
        || path.contains("__tests__")
        || path.contains("fixtures")
        || path.contains("_test.")
        || path.contains(".test.")
        || path.contains(".spec.")
}

fn is_env_file(path: &str) -> bool {
    path.ends_with(".env") || path.contains(".env.") || path.ends_with(".envrc")
}

/// Whether the byte offset sits on a line that starts a comment.
pub fn is_in_comment(text: &str, offset: usize) -> bool {
    let line_start = text[..offset].rfind('\n').map_or(0, |i| i + 1);
    let line = text[line_start..offset].trim_start();
    line.starts_with("//") || line.starts_with('#') || line.starts_with("--") || line.starts_with("/*")
}

/// Obvious non-secrets: documentation examples, masked values, and Tessera's
/// own placeholders (which keeps scrubbing idempotent).
pub fn looks_like_placeholder(matched: &str) -> bool {
    let trimmed = matched.trim_end_matches(|c: char| matches!(c, ',' | '.' | ';' | ')' | '"' | '\''));
    if trimmed.starts_with('[') && trimmed.ends_with(']') {
        return true;
    }
    let lower = trimmed.to_lowercase();
    lower.contains("example.com")
        || lower.contains("example.org")
        || lower.contains("xxxx")
        || lower.contains("changeme")
        || lower.contains("your_")
        || lower.contains("<redacted>")
        || lower.chars().all(|c| c == '*')
}
