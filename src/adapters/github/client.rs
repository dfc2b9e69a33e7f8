//! GitHub HTTP client.
//!
//! Wraps the GitHub REST API v3 read endpoints used by the export. Every
//! call is a single request without retries; a failing response is
//! returned to the caller as is.

use std::fmt;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::models::{Comment, GitHubConfig, Issue};
use crate::domain::ports::{IssueSource, Page};

use super::models::{GitHubComment, GitHubIssue};

/// HTTP client for one GitHub repository.
///
/// Requests carry a bearer token when one was supplied and are sent
/// unauthenticated otherwise.
#[derive(Clone)]
pub struct GitHubClient {
    /// The underlying HTTP client.
    http: Client,
    /// API base URL without a trailing slash.
    api_base_url: String,
    owner: String,
    repo: String,
    user_agent: String,
    /// Personal access token or fine-grained token.
    token: Option<String>,
}

impl GitHubClient {
    /// Create a client for the repository named in `config`.
    pub fn new(config: &GitHubConfig, token: Option<String>) -> DomainResult<Self> {
        let mut builder = Client::builder();
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let http = builder
            .build()
            .map_err(|e| DomainError::Transport(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            http,
            api_base_url: config.api_base_url.trim_end_matches('/').to_string(),
            owner: config.owner.clone(),
            repo: config.repo.clone(),
            user_agent: config.user_agent.clone(),
            token: token.filter(|t| !t.is_empty()),
        })
    }

    /// Whether requests are sent with an `Authorization` header.
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    fn issues_url(&self) -> String {
        format!(
            "{}/repos/{}/{}/issues",
            self.api_base_url, self.owner, self.repo
        )
    }

    /// Build a GET request with the standard GitHub headers.
    fn request(&self, url: &str) -> reqwest::RequestBuilder {
        let req = self
            .http
            .get(url)
            .header("Accept", "application/vnd.github+json")
            .header("X-GitHub-Api-Version", "2022-11-28")
            .header("User-Agent", &self.user_agent);
        match &self.token {
            Some(token) => req.header("Authorization", format!("Bearer {token}")),
            None => req,
        }
    }

    /// Send a GET request and decode a JSON body, mapping each failure
    /// class onto its own error variant.
    async fn get_json<T: DeserializeOwned>(
        &self,
        url: &str,
        query: &[(&str, String)],
    ) -> DomainResult<T> {
        let resp = self
            .request(url)
            .query(query)
            .send()
            .await
            .map_err(|e| DomainError::Transport(format!("GET {url} failed: {e}")))?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(DomainError::HttpStatus {
                status: status.as_u16(),
                url: url.to_string(),
                body,
            });
        }

        resp.json::<T>()
            .await
            .map_err(|e| DomainError::MalformedResponse(format!("GET {url}: {e}")))
    }

    /// List one page of issues, newest first, in any state.
    ///
    /// Note: GitHub's `/issues` endpoint also returns pull requests.
    /// Callers are responsible for filtering them out via the
    /// `pull_request` field.
    pub async fn list_issues_page(&self, page: Page) -> DomainResult<Vec<GitHubIssue>> {
        let url = self.issues_url();
        let query = [
            ("per_page", page.per_page.to_string()),
            ("state", "all".to_string()),
            ("sort", "created".to_string()),
            ("direction", "desc".to_string()),
            ("page", page.number.to_string()),
        ];
        self.get_json(&url, &query).await
    }

    /// List comments on an issue. With `page: None` no paging parameters
    /// are sent.
    pub async fn list_issue_comments(
        &self,
        issue_number: u64,
        page: Option<Page>,
    ) -> DomainResult<Vec<GitHubComment>> {
        let url = format!("{}/{}/comments", self.issues_url(), issue_number);
        let query = match page {
            Some(page) => vec![
                ("per_page", page.per_page.to_string()),
                ("page", page.number.to_string()),
            ],
            None => Vec::new(),
        };
        self.get_json(&url, &query).await
    }
}

impl fmt::Debug for GitHubClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GitHubClient")
            .field("api_base_url", &self.api_base_url)
            .field("owner", &self.owner)
            .field("repo", &self.repo)
            .field("authenticated", &self.token.is_some())
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl IssueSource for GitHubClient {
    async fn list_issues(&self, page: Page) -> DomainResult<Vec<Issue>> {
        let issues = self.list_issues_page(page).await?;
        Ok(issues.into_iter().map(Issue::from).collect())
    }

    async fn list_comments(
        &self,
        issue_number: u64,
        page: Option<Page>,
    ) -> DomainResult<Vec<Comment>> {
        let comments = self.list_issue_comments(issue_number, page).await?;
        Ok(comments
            .into_iter()
            .map(|c| c.into_comment(issue_number))
            .collect())
    }
}
