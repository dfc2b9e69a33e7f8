use std::sync::LazyLock;

use regex::{Captures, Regex};

// Bearer tokens in Authorization headers
static BEARER_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Bearer\s+[A-Za-z0-9\-_\.]+").expect("static regex"));

// Classic and fine-grained GitHub tokens: ghp_, gho_, ghu_, ghs_, ghr_, github_pat_
static GITHUB_TOKEN_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(?:gh[pousr]_[A-Za-z0-9]{20,}|github_pat_[A-Za-z0-9_]{20,})").expect("static regex")
});

// token=..., "token": "..." and friends
static TOKEN_FIELD_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"["']?(?:api_key|apikey|token|secret)["']?\s*[:=]\s*["']?([A-Za-z0-9\-_\.]{20,})["']?"#)
        .expect("static regex")
});

/// Redacts credentials from text before it is shown or logged.
#[derive(Debug, Clone, Copy, Default)]
pub struct SecretScrubber;

impl SecretScrubber {
    pub const fn new() -> Self {
        Self
    }

    /// Scrub a message of sensitive data
    pub fn scrub_message(&self, message: &str) -> String {
        let scrubbed = BEARER_PATTERN.replace_all(message, "Bearer [TOKEN_REDACTED]");
        let scrubbed = GITHUB_TOKEN_PATTERN.replace_all(&scrubbed, "[TOKEN_REDACTED]");
        TOKEN_FIELD_PATTERN
            .replace_all(&scrubbed, |caps: &Captures| {
                // Keep the field name, drop the value
                let full_match = &caps[0];
                if let Some(colon_pos) = full_match.find(':') {
                    format!("{}:[REDACTED]", &full_match[..colon_pos])
                } else if let Some(eq_pos) = full_match.find('=') {
                    format!("{}=[REDACTED]", &full_match[..eq_pos])
                } else {
                    "[REDACTED]".to_string()
                }
            })
            .into_owned()
    }
}
