//! GitHub Issues API response models.
//!
//! These structs map to the GitHub REST API v3 JSON payloads. Only the
//! fields the export reads are declared; everything else is ignored.

use serde::{Deserialize, Serialize};

use crate::domain::models::{AuthorType, Comment, Issue};

/// An issue returned by the GitHub API.
///
/// Issues and pull requests share the same endpoint. Pull requests carry
/// a non-null `pull_request` object; plain issues omit it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GitHubIssue {
    /// Sequential number within the repository (e.g., 42 → "#42").
    pub number: u64,
    pub title: String,
    /// Issue body text (may be absent or null).
    #[serde(default)]
    pub body: Option<String>,
    pub user: GitHubUser,
    /// ISO 8601 timestamp of creation.
    pub created_at: String,
    /// Present when this item is actually a pull request.
    #[serde(default)]
    pub pull_request: Option<serde_json::Value>,
}

/// A comment returned by `GET /repos/{owner}/{repo}/issues/{number}/comments`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GitHubComment {
    pub id: u64,
    #[serde(default)]
    pub body: Option<String>,
    pub user: GitHubUser,
    pub created_at: String,
}

/// The account that authored an issue or comment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GitHubUser {
    pub login: String,
    /// "User", "Bot", "Organization", ...
    #[serde(rename = "type")]
    pub kind: String,
}

impl From<GitHubIssue> for Issue {
    fn from(issue: GitHubIssue) -> Self {
        Self {
            number: issue.number,
            title: issue.title,
            body: issue.body,
            author: issue.user.login,
            created_at: issue.created_at,
            is_pull_request: issue.pull_request.is_some(),
        }
    }
}

impl GitHubComment {
    /// Map into the domain model; the API payload does not carry the
    /// parent issue number, so the caller supplies it.
    pub fn into_comment(self, issue_number: u64) -> Comment {
        Comment {
            issue_number,
            id: self.id,
            body: self.body,
            author: self.user.login,
            author_type: AuthorType::from(self.user.kind),
            created_at: self.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_issue_deserialization() {
        let json = r#"{
            "id": 1,
            "number": 42,
            "title": "Fix login bug",
            "body": "Users cannot log in after the last deploy.",
            "state": "open",
            "user": { "login": "alice", "type": "User" },
            "labels": [{ "name": "bug", "color": "d73a4a" }],
            "updated_at": "2024-01-15T10:30:00Z",
            "html_url": "https://github.com/org/repo/issues/42",
            "created_at": "2024-01-14T08:00:00Z"
        }"#;
        let issue: Issue = serde_json::from_str::<GitHubIssue>(json).unwrap().into();
        assert_eq!(issue.number, 42);
        assert_eq!(issue.title, "Fix login bug");
        assert_eq!(issue.author, "alice");
        assert_eq!(issue.created_at, "2024-01-14T08:00:00Z");
        assert!(issue.body.is_some());
        assert!(!issue.is_pull_request);
    }

    #[test]
    fn test_null_body_deserialization() {
        let json = r#"{
            "number": 1,
            "title": "Minimal issue",
            "body": null,
            "user": { "login": "bob", "type": "User" },
            "created_at": "2024-01-09T00:00:00Z"
        }"#;
        let issue: GitHubIssue = serde_json::from_str(json).unwrap();
        assert!(issue.body.is_none());
        assert!(issue.pull_request.is_none());
    }

    #[test]
    fn test_pr_detection_via_pull_request_field() {
        let json = r#"{
            "number": 99,
            "title": "Add feature X",
            "user": { "login": "carol", "type": "User" },
            "pull_request": { "url": "https://api.github.com/repos/org/repo/pulls/99" },
            "created_at": "2024-01-15T09:00:00Z"
        }"#;
        let issue: Issue = serde_json::from_str::<GitHubIssue>(json).unwrap().into();
        assert!(issue.is_pull_request);
    }

    #[test]
    fn test_missing_user_is_rejected() {
        let json = r#"{ "number": 5, "title": "t", "created_at": "2024-01-15T09:00:00Z" }"#;
        assert!(serde_json::from_str::<GitHubIssue>(json).is_err());
    }

    #[test]
    fn test_comment_deserialization() {
        let json = r#"{
            "id": 123456,
            "body": "Duplicate of #12",
            "user": { "login": "github-actions[bot]", "type": "Bot" },
            "created_at": "2024-01-16T12:00:00Z",
            "issue_url": "https://api.github.com/repos/org/repo/issues/7"
        }"#;
        let comment = serde_json::from_str::<GitHubComment>(json)
            .unwrap()
            .into_comment(7);
        assert_eq!(comment.issue_number, 7);
        assert_eq!(comment.id, 123_456);
        assert_eq!(comment.author, "github-actions[bot]");
        assert_eq!(comment.author_type, AuthorType::Other("Bot".to_string()));
    }
}
