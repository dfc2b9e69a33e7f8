//! Retrieval of human-authored comments for an issue.

use std::sync::Arc;

use tracing::debug;

use crate::domain::errors::DomainResult;
use crate::domain::models::{Comment, FetchConfig};
use crate::domain::ports::{IssueSource, Page};

/// Fetches an issue's comments and keeps only those written by `User`
/// accounts.
pub struct CommentFetcher {
    source: Arc<dyn IssueSource>,
    /// `None` sends a single request without paging parameters.
    page_size: Option<u32>,
}

impl CommentFetcher {
    /// Follow every comment page, `page_size` comments at a time.
    pub fn paginated(source: Arc<dyn IssueSource>, page_size: u32) -> Self {
        Self {
            source,
            page_size: Some(page_size),
        }
    }

    /// Only request the tracker's default first page of comments.
    pub fn first_page_only(source: Arc<dyn IssueSource>) -> Self {
        Self {
            source,
            page_size: None,
        }
    }

    pub fn from_config(source: Arc<dyn IssueSource>, config: &FetchConfig) -> Self {
        if config.paginate_comments {
            Self::paginated(source, config.page_size)
        } else {
            Self::first_page_only(source)
        }
    }

    /// Human-authored comments on `issue_number`, in API order.
    pub async fn fetch_human_comments(&self, issue_number: u64) -> DomainResult<Vec<Comment>> {
        let comments = match self.page_size {
            Some(per_page) => self.fetch_all_pages(issue_number, per_page).await?,
            None => self.source.list_comments(issue_number, None).await?,
        };

        let total = comments.len();
        let kept: Vec<Comment> = comments.into_iter().filter(Comment::is_from_user).collect();
        debug!(
            issue_number,
            total,
            dropped = total - kept.len(),
            "fetched comments"
        );
        Ok(kept)
    }

    async fn fetch_all_pages(&self, issue_number: u64, per_page: u32) -> DomainResult<Vec<Comment>> {
        let mut comments = Vec::new();
        let mut page = Page::first(per_page);
        loop {
            let batch = self.source.list_comments(issue_number, Some(page)).await?;
            let short_page = batch.len() < per_page as usize;
            comments.extend(batch);
            if short_page {
                return Ok(comments);
            }
            page = page.next();
        }
    }
}
