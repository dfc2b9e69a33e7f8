//! Paginated retrieval of a repository's most recent issues.

use std::sync::Arc;

use tracing::{debug, info};

use crate::domain::errors::DomainResult;
use crate::domain::models::{FetchConfig, Issue};
use crate::domain::ports::{IssueSource, Page};

/// Walks the issue listing newest-first, dropping pull requests, until
/// `max_issues` issues are collected or the listing runs dry.
pub struct IssueFetcher {
    source: Arc<dyn IssueSource>,
    max_issues: usize,
    page_size: u32,
}

impl IssueFetcher {
    pub fn new(source: Arc<dyn IssueSource>, max_issues: usize, page_size: u32) -> Self {
        Self {
            source,
            max_issues,
            page_size,
        }
    }

    pub fn from_config(source: Arc<dyn IssueSource>, config: &FetchConfig) -> Self {
        Self::new(source, config.max_issues, config.page_size)
    }

    /// Fetch up to `max_issues` issues, newest first.
    ///
    /// Fewer are returned only when the source is exhausted first. Any
    /// page failure aborts the whole fetch.
    pub async fn fetch_latest(&self) -> DomainResult<Vec<Issue>> {
        let mut issues: Vec<Issue> = Vec::new();
        let mut page = Page::first(self.page_size);

        while issues.len() < self.max_issues {
            let batch = self.source.list_issues(page).await?;
            if batch.is_empty() {
                debug!(page = page.number, "issue listing exhausted");
                break;
            }

            let fetched = batch.len();
            let before = issues.len();
            issues.extend(batch.into_iter().filter(|issue| !issue.is_pull_request));

            info!(
                page = page.number,
                fetched,
                kept = issues.len() - before,
                total = issues.len(),
                "fetched issue page"
            );
            page = page.next();
        }

        issues.truncate(self.max_issues);
        Ok(issues)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::InMemoryIssueSource;

    fn item(number: u64, is_pull_request: bool) -> Issue {
        Issue {
            number,
            title: format!("Item {number}"),
            body: None,
            author: "alice".to_string(),
            created_at: "2024-01-01T00:00:00Z".to_string(),
            is_pull_request,
        }
    }

    /// Numbers descending from `count`, every third one a pull request.
    fn listing(count: u64) -> Vec<Issue> {
        (1..=count).rev().map(|n| item(n, n % 3 == 0)).collect()
    }

    #[tokio::test]
    async fn test_filters_pull_requests() {
        let source = Arc::new(InMemoryIssueSource::new(listing(9)));
        let fetcher = IssueFetcher::new(source, 100, 4);

        let issues = fetcher.fetch_latest().await.unwrap();
        let numbers: Vec<u64> = issues.iter().map(|i| i.number).collect();
        assert_eq!(numbers, vec![8, 7, 5, 4, 2, 1]);
        assert!(issues.iter().all(|i| !i.is_pull_request));
    }

    #[tokio::test]
    async fn test_stops_at_empty_page() {
        let source = Arc::new(InMemoryIssueSource::new(listing(9)));
        let fetcher = IssueFetcher::new(source.clone(), 100, 4);
        fetcher.fetch_latest().await.unwrap();

        // 9 items over pages of 4: pages 1-3 have data, page 4 is empty.
        assert_eq!(
            source.calls(),
            vec!["issues page=1", "issues page=2", "issues page=3", "issues page=4"]
        );
    }

    #[tokio::test]
    async fn test_truncates_to_max_issues() {
        let source = Arc::new(InMemoryIssueSource::new(listing(30)));
        let fetcher = IssueFetcher::new(source.clone(), 5, 10);

        let issues = fetcher.fetch_latest().await.unwrap();
        assert_eq!(issues.len(), 5);
        assert_eq!(issues[0].number, 29);
        // The first page already yields 6 issues, so no second request.
        assert_eq!(source.calls(), vec!["issues page=1"]);
    }

    #[tokio::test]
    async fn test_keeps_paging_past_pull_request_only_pages() {
        let mut items: Vec<Issue> = (10..=13).rev().map(|n| item(n, true)).collect();
        items.push(item(2, false));
        items.push(item(1, false));
        let source = Arc::new(InMemoryIssueSource::new(items));
        let fetcher = IssueFetcher::new(source, 2, 2);

        let issues = fetcher.fetch_latest().await.unwrap();
        let numbers: Vec<u64> = issues.iter().map(|i| i.number).collect();
        assert_eq!(numbers, vec![2, 1]);
    }

    #[tokio::test]
    async fn test_empty_repository() {
        let source = Arc::new(InMemoryIssueSource::new(Vec::new()));
        let fetcher = IssueFetcher::new(source, 10, 100);
        assert!(fetcher.fetch_latest().await.unwrap().is_empty());
    }
}
