//! Cross-reference extraction from issue and comment text.

use regex::Regex;

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::models::GitHubConfig;

/// Finds references to other issues of one repository.
///
/// Two forms are recognised: the `#123` shorthand and a full issue link
/// such as `https://github.com/<owner>/<repo>/issues/123`. Links to other
/// repositories are ignored; a `#123` shorthand is always taken to point
/// at this repository.
#[derive(Debug, Clone)]
pub struct RelationExtractor {
    pattern: Regex,
}

impl RelationExtractor {
    /// Build an extractor for `<web_base_url>/<owner>/<repo>`.
    pub fn for_repository(web_base_url: &str, owner: &str, repo: &str) -> DomainResult<Self> {
        let prefix = format!(
            "{}/{}/{}/issues/",
            web_base_url.trim_end_matches('/'),
            owner,
            repo
        );
        let pattern = Regex::new(&format!("(?:#|{})([0-9]+)", regex::escape(&prefix)))
            .map_err(|e| DomainError::ValidationFailed(format!("invalid relation pattern: {e}")))?;
        Ok(Self { pattern })
    }

    pub fn from_config(config: &GitHubConfig) -> DomainResult<Self> {
        Self::for_repository(&config.web_base_url, &config.owner, &config.repo)
    }

    /// Referenced issue numbers in order of appearance, duplicates kept.
    pub fn references<'a>(&'a self, text: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.pattern
            .captures_iter(text)
            .filter_map(|caps| caps.get(1))
            .map(|m| m.as_str())
    }

    /// Relation string for a text blob: every reference joined with
    /// `", "`. Empty when the text is absent or references nothing.
    pub fn extract(&self, text: Option<&str>) -> String {
        text.map(|t| self.references(t).collect::<Vec<_>>().join(", "))
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metabase() -> RelationExtractor {
        RelationExtractor::for_repository("https://github.com", "metabase", "metabase").unwrap()
    }

    #[test]
    fn test_mixed_shorthand_and_links_keep_order_and_duplicates() {
        let text = "See #12 and https://github.com/metabase/metabase/issues/34 also #12";
        assert_eq!(metabase().extract(Some(text)), "12, 34, 12");
    }

    #[test]
    fn test_absent_or_empty_text() {
        assert_eq!(metabase().extract(None), "");
        assert_eq!(metabase().extract(Some("")), "");
        assert_eq!(metabase().extract(Some("no references here")), "");
    }

    #[test]
    fn test_bare_hash_without_digits_is_ignored() {
        assert_eq!(metabase().extract(Some("# heading and #abc and #")), "");
    }

    #[test]
    fn test_links_to_other_repositories_are_ignored() {
        let text = "https://github.com/other/project/issues/99 and https://github.com/metabase/metabase/pull/5";
        assert_eq!(metabase().extract(Some(text)), "");
    }

    #[test]
    fn test_link_with_fragment() {
        let text = "https://github.com/metabase/metabase/issues/4521#issuecomment-123";
        assert_eq!(metabase().extract(Some(text)), "4521");
    }

    #[test]
    fn test_self_reference_is_kept() {
        // Issue #7 mentioning itself still yields 7.
        assert_eq!(metabase().extract(Some("this is #7")), "7");
    }

    #[test]
    fn test_repository_name_is_escaped() {
        let extractor =
            RelationExtractor::for_repository("https://github.com/", "foo.bar", "a+b").unwrap();
        assert_eq!(
            extractor.extract(Some("https://github.com/foo.bar/a+b/issues/3")),
            "3"
        );
        assert_eq!(
            extractor.extract(Some("https://github.com/fooxbar/aab/issues/3")),
            ""
        );
    }

    #[test]
    fn test_from_config_uses_web_base_url() {
        let config = GitHubConfig {
            owner: "acme".to_string(),
            repo: "widgets".to_string(),
            web_base_url: "https://git.example.com".to_string(),
            ..GitHubConfig::default()
        };
        let extractor = RelationExtractor::from_config(&config).unwrap();
        assert_eq!(
            extractor.extract(Some("https://git.example.com/acme/widgets/issues/8 #9")),
            "8, 9"
        );
    }
}
