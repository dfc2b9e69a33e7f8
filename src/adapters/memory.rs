//! In-memory issue source for testing

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::models::{Comment, Issue};
use crate::domain::ports::{IssueSource, Page};

/// Serves a fixed list of issues and comments, paging them the way the
/// GitHub API does.
///
/// Every call is recorded so tests can assert on the request sequence.
#[derive(Debug, Default)]
pub struct InMemoryIssueSource {
    /// Issues in listing order (newest first).
    issues: Vec<Issue>,
    comments: HashMap<u64, Vec<Comment>>,
    /// Page size used when `list_comments` is called without a page.
    default_comment_page: usize,
    /// Issue whose comment listing fails, to exercise error propagation.
    failing_issue: Option<u64>,
    calls: Mutex<Vec<String>>,
}

impl InMemoryIssueSource {
    pub fn new(issues: Vec<Issue>) -> Self {
        Self {
            issues,
            default_comment_page: 30,
            ..Self::default()
        }
    }

    pub fn with_comments(mut self, issue_number: u64, comments: Vec<Comment>) -> Self {
        self.comments.insert(issue_number, comments);
        self
    }

    pub fn with_default_comment_page(mut self, size: usize) -> Self {
        self.default_comment_page = size;
        self
    }

    pub fn failing_comments_for(mut self, issue_number: u64) -> Self {
        self.failing_issue = Some(issue_number);
        self
    }

    /// Calls made so far, e.g. `issues page=1` or `comments 7 page=-`.
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().map(|c| c.clone()).unwrap_or_default()
    }

    fn record(&self, call: String) {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(call);
        }
    }
}

fn slice_page<T: Clone>(items: &[T], page: Page) -> Vec<T> {
    let per_page = page.per_page as usize;
    let start = (page.number.saturating_sub(1) as usize).saturating_mul(per_page);
    items.iter().skip(start).take(per_page).cloned().collect()
}

#[async_trait]
impl IssueSource for InMemoryIssueSource {
    async fn list_issues(&self, page: Page) -> DomainResult<Vec<Issue>> {
        self.record(format!("issues page={}", page.number));
        Ok(slice_page(&self.issues, page))
    }

    async fn list_comments(
        &self,
        issue_number: u64,
        page: Option<Page>,
    ) -> DomainResult<Vec<Comment>> {
        let label = page.map_or_else(|| "-".to_string(), |p| p.number.to_string());
        self.record(format!("comments {issue_number} page={label}"));

        if self.failing_issue == Some(issue_number) {
            return Err(DomainError::HttpStatus {
                status: 500,
                url: format!("memory://issues/{issue_number}/comments"),
                body: "simulated failure".to_string(),
            });
        }

        let comments = self.comments.get(&issue_number).map_or(&[][..], Vec::as_slice);
        let page = page.unwrap_or(Page {
            number: 1,
            per_page: u32::try_from(self.default_comment_page).unwrap_or(u32::MAX),
        });
        Ok(slice_page(comments, page))
    }
}
