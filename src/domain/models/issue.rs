//! Issues and comments as the rest of the pipeline sees them.
//!
//! These are decoupled from the GitHub wire format; the adapter maps its
//! response payloads into these types.

use std::fmt;

use serde::{Deserialize, Serialize};

/// An item from the repository's issue tracker.
///
/// GitHub's issue listing also returns pull requests; `is_pull_request`
/// records whether the pull-request marker was present so the fetcher can
/// drop them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Issue {
    pub number: u64,
    pub title: String,
    pub body: Option<String>,
    pub author: String,
    /// ISO 8601 creation timestamp, kept verbatim.
    pub created_at: String,
    pub is_pull_request: bool,
}

/// A discussion comment attached to an issue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    /// Number of the issue this comment belongs to.
    pub issue_number: u64,
    pub id: u64,
    pub body: Option<String>,
    pub author: String,
    pub author_type: AuthorType,
    /// ISO 8601 creation timestamp, kept verbatim.
    pub created_at: String,
}

impl Comment {
    /// Whether the comment was written by a human account.
    pub fn is_from_user(&self) -> bool {
        self.author_type == AuthorType::User
    }
}

/// Account classification reported by GitHub for a comment's author.
///
/// Only `User` matters to the pipeline; everything else (`Bot`,
/// `Organization`, ...) is kept as its raw string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum AuthorType {
    User,
    Other(String),
}

impl From<String> for AuthorType {
    fn from(value: String) -> Self {
        if value == "User" {
            Self::User
        } else {
            Self::Other(value)
        }
    }
}

impl From<AuthorType> for String {
    fn from(value: AuthorType) -> Self {
        value.to_string()
    }
}

impl fmt::Display for AuthorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::User => f.write_str("User"),
            Self::Other(kind) => f.write_str(kind),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_author_type_from_string() {
        assert_eq!(AuthorType::from("User".to_string()), AuthorType::User);
        assert_eq!(
            AuthorType::from("Bot".to_string()),
            AuthorType::Other("Bot".to_string())
        );
        // Classification is case-sensitive, as GitHub reports it.
        assert_eq!(
            AuthorType::from("user".to_string()),
            AuthorType::Other("user".to_string())
        );
    }

    #[test]
    fn test_comment_is_from_user() {
        let mut comment = Comment {
            issue_number: 1,
            id: 10,
            body: None,
            author: "octocat".to_string(),
            author_type: AuthorType::User,
            created_at: "2024-01-01T00:00:00Z".to_string(),
        };
        assert!(comment.is_from_user());

        comment.author_type = AuthorType::Other("Bot".to_string());
        assert!(!comment.is_from_user());
    }
}
