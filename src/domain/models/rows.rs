//! Row shapes of the two CSV files the pipeline produces.

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::issue::{Comment, Issue};

/// Identifies what a log row describes: the issue body itself or one of
/// its comments.
///
/// Issue rows use the synthetic `issue-<number>` form so they can never be
/// mistaken for a numeric comment id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommentRef {
    Issue(u64),
    Comment(u64),
}

impl fmt::Display for CommentRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Issue(number) => write!(f, "issue-{number}"),
            Self::Comment(id) => write!(f, "{id}"),
        }
    }
}

/// One row of the issue/comment log.
///
/// Field names map onto the log's header; reading the file back uses the
/// same struct.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogRow {
    #[serde(rename = "Issue Number")]
    pub issue_number: u64,
    #[serde(rename = "Issue Title")]
    pub issue_title: String,
    #[serde(rename = "Comment ID")]
    pub comment_id: String,
    #[serde(rename = "Comment Body")]
    pub comment_body: String,
    #[serde(rename = "Comment Author")]
    pub comment_author: String,
    #[serde(rename = "Comment Created At")]
    pub comment_created_at: String,
    #[serde(rename = "Relations")]
    pub relations: String,
}

impl LogRow {
    /// Header line of the log, in column order.
    pub const HEADER: [&'static str; 7] = [
        "Issue Number",
        "Issue Title",
        "Comment ID",
        "Comment Body",
        "Comment Author",
        "Comment Created At",
        "Relations",
    ];

    /// Row describing the issue's own body. `relations` is left empty.
    pub fn for_issue(issue: &Issue) -> Self {
        Self {
            issue_number: issue.number,
            issue_title: issue.title.clone(),
            comment_id: CommentRef::Issue(issue.number).to_string(),
            comment_body: collapse_newlines(issue.body.as_deref()),
            comment_author: issue.author.clone(),
            comment_created_at: issue.created_at.clone(),
            relations: String::new(),
        }
    }

    /// Row describing one comment of `issue`. `relations` is left empty.
    pub fn for_comment(issue: &Issue, comment: &Comment) -> Self {
        Self {
            issue_number: issue.number,
            issue_title: issue.title.clone(),
            comment_id: CommentRef::Comment(comment.id).to_string(),
            comment_body: collapse_newlines(comment.body.as_deref()),
            comment_author: comment.author.clone(),
            comment_created_at: comment.created_at.clone(),
            relations: String::new(),
        }
    }

    /// Attach the relation string computed for this row's body.
    pub fn with_relations(mut self, relations: String) -> Self {
        self.relations = relations;
        self
    }

    /// The individual references listed in the `Relations` column.
    pub fn relation_tokens(&self) -> impl Iterator<Item = &str> {
        self.relations
            .split(", ")
            .map(str::trim)
            .filter(|token| !token.is_empty())
    }
}

/// Replace every literal `\n` with a single space; absent text becomes empty.
pub fn collapse_newlines(text: Option<&str>) -> String {
    text.map(|t| t.replace('\n', " ")).unwrap_or_default()
}

/// Aggregated references for one issue, built from every log row that
/// carries its number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelationEntry {
    pub issue_number: u64,
    /// Title from the last row seen for this issue.
    pub title: String,
    pub related: BTreeSet<u64>,
}

impl RelationEntry {
    pub fn new(issue_number: u64, title: impl Into<String>) -> Self {
        Self {
            issue_number,
            title: title.into(),
            related: BTreeSet::new(),
        }
    }

    /// Related issue numbers, ascending, joined with `", "`.
    pub fn related_issues(&self) -> String {
        self.related
            .iter()
            .map(u64::to_string)
            .collect::<Vec<_>>()
            .join(", ")
    }

    pub fn to_row(&self) -> RelationRow {
        RelationRow {
            issue_number: self.issue_number,
            related_issues: self.related_issues(),
            title: self.title.clone(),
        }
    }
}

/// One row of the adjacency table written for graph import.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelationRow {
    pub issue_number: u64,
    pub related_issues: String,
    pub title: String,
}
