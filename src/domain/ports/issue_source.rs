use async_trait::async_trait;

use crate::domain::errors::DomainResult;
use crate::domain::models::{Comment, Issue};

/// One page of a paginated listing (1-based).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    pub number: u32,
    pub per_page: u32,
}

impl Page {
    pub const fn first(per_page: u32) -> Self {
        Self { number: 1, per_page }
    }

    pub const fn next(self) -> Self {
        Self {
            number: self.number + 1,
            per_page: self.per_page,
        }
    }
}

/// Read-only access to a repository's issue tracker.
///
/// Implementations return raw pages: pull requests and bot comments are
/// still present and are filtered by the fetch services.
#[async_trait]
pub trait IssueSource: Send + Sync {
    /// List one page of issues, newest first, in every state.
    async fn list_issues(&self, page: Page) -> DomainResult<Vec<Issue>>;

    /// List comments on an issue.
    ///
    /// With `page: None` a single request without paging parameters is
    /// made and the tracker's default first page comes back.
    async fn list_comments(&self, issue_number: u64, page: Option<Page>)
        -> DomainResult<Vec<Comment>>;
}
