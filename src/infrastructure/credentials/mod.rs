//! Credentials management infrastructure
//!
//! The GitHub token is only ever read from the environment; it never
//! appears in configuration files. A missing token is not an error:
//! requests are then sent unauthenticated, at GitHub's lower rate limit.

use tracing::{debug, warn};

/// Environment variable holding the GitHub token.
pub const GITHUB_TOKEN_VAR: &str = "GITHUB_TOKEN";

/// Read the GitHub token from [`GITHUB_TOKEN_VAR`].
///
/// Unset, empty and whitespace-only values all yield `None`.
pub fn github_token_from_env() -> Option<String> {
    match std::env::var(GITHUB_TOKEN_VAR) {
        Ok(token) if !token.trim().is_empty() => {
            debug!("using GitHub token from {GITHUB_TOKEN_VAR}");
            Some(token.trim().to_string())
        }
        _ => {
            warn!("{GITHUB_TOKEN_VAR} not set, sending unauthenticated requests");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_present() {
        temp_env::with_var(GITHUB_TOKEN_VAR, Some("ghp_abc123"), || {
            assert_eq!(github_token_from_env().as_deref(), Some("ghp_abc123"));
        });
    }

    #[test]
    fn test_token_missing_is_none() {
        temp_env::with_var_unset(GITHUB_TOKEN_VAR, || {
            assert!(github_token_from_env().is_none());
        });
    }

    #[test]
    fn test_blank_token_is_none() {
        temp_env::with_var(GITHUB_TOKEN_VAR, Some("   "), || {
            assert!(github_token_from_env().is_none());
        });
    }
}
