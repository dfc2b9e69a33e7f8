//! Common test utilities for integration tests
//!
//! GitHub API payload builders and config helpers shared by the mock
//! server tests.

#![allow(dead_code)]

use std::path::Path;

use issue_graph::{Config, GitHubConfig};
use serde_json::{json, Value};

/// An issue payload as returned by `GET /repos/{owner}/{repo}/issues`.
pub fn issue_json(number: u64, title: &str, body: Option<&str>) -> Value {
    json!({
        "id": number * 1000,
        "number": number,
        "title": title,
        "body": body,
        "state": "open",
        "user": { "login": format!("user{number}"), "type": "User" },
        "labels": [],
        "created_at": format!("2024-01-{:02}T00:00:00Z", number % 28 + 1),
        "updated_at": "2024-02-01T00:00:00Z",
        "html_url": format!("https://github.com/metabase/metabase/issues/{number}")
    })
}

/// A pull request as it appears in the issue listing.
pub fn pull_request_json(number: u64) -> Value {
    let mut value = issue_json(number, "Some PR", Some("fixes #1"));
    value["pull_request"] = json!({
        "url": format!("https://api.github.com/repos/metabase/metabase/pulls/{number}")
    });
    value
}

/// A comment payload as returned by the issue comments endpoint.
pub fn comment_json(id: u64, body: &str, login: &str, kind: &str) -> Value {
    json!({
        "id": id,
        "body": body,
        "user": { "login": login, "type": kind },
        "created_at": "2024-03-01T12:00:00Z",
        "issue_url": "https://api.github.com/repos/metabase/metabase/issues/1"
    })
}

/// GitHub settings pointing at a mock server.
pub fn github_config(base_url: &str) -> GitHubConfig {
    GitHubConfig {
        api_base_url: base_url.to_string(),
        ..GitHubConfig::default()
    }
}

/// Full config pointing at a mock server, writing into `dir`.
pub fn config_for(base_url: &str, dir: &Path) -> Config {
    let mut config = Config::default();
    config.github = github_config(base_url);
    config.output.issue_log_path = dir.join("metabase_issues_filtered.csv");
    config.output.relations_path = dir.join("issues_relations.csv");
    config
}
