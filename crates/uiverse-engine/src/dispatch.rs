//! Query parsing and validation for the tool surface.
//!
//! Maps a `"<framework> <link>"` query to an extraction, rejecting bad input
//! before any browser is launched. A link that is exactly the site prefix
//! carries no component path and yields a fixed notice instead of an
//! extraction.

use url::Url;

use crate::browser::SessionConfig;
use crate::error::ExtractError;
use crate::markdown;
use crate::strategy::{self, Framework};

/// Required prefix for every component link.
pub const UIVERSE_PREFIX: &str = "https://uiverse.io/";

/// Returned when the link names the site but no component.
pub const NO_PATH_NOTICE: &str =
    "> The link does not specify a component path; nothing was extracted.";

/// Split a query into its framework and link parts.
///
/// The framework part is not validated here: a prefix-only link must produce
/// the no-path notice even when the framework name is unknown, so framework
/// parsing happens after the path check in [`run_query`].
pub fn split_query(query: &str) -> Result<(&str, &str), ExtractError> {
    let trimmed = query.trim();
    if trimmed.is_empty() {
        return Err(ExtractError::EmptyQuery);
    }
    trimmed
        .split_once(char::is_whitespace)
        .map(|(framework, link)| (framework, link.trim_start()))
        .ok_or(ExtractError::MalformedQuery)
}

/// Check that the link is a well-formed uiverse.io URL.
pub fn validate_url(link: &str) -> Result<(), ExtractError> {
    if !link.starts_with(UIVERSE_PREFIX) {
        return Err(ExtractError::InvalidUrl(format!(
            "link must start with {}",
            UIVERSE_PREFIX
        )));
    }
    Url::parse(link).map_err(|e| ExtractError::InvalidUrl(e.to_string()))?;
    Ok(())
}

/// Whether the link carries a component path beyond the site prefix.
pub fn has_component_path(link: &str) -> bool {
    link.len() > UIVERSE_PREFIX.len()
}

/// Validate and run a full extraction for an explicit framework + link pair.
pub async fn run_extraction(
    framework: Framework,
    link: &str,
    config: &SessionConfig,
) -> Result<String, ExtractError> {
    validate_url(link)?;
    if !has_component_path(link) {
        return Err(ExtractError::InvalidUrl(
            "link does not name a component".to_string(),
        ));
    }
    let rendered = strategy::extract(framework, link, config).await?;
    Ok(markdown::one_line(&rendered))
}

/// Parse a `"<framework> <link>"` query and run it.
///
/// A prefix-only link returns [`NO_PATH_NOTICE`] without touching a browser.
/// The result is scrubbed of CR/LF once more at this boundary.
pub async fn run_query(query: &str, config: &SessionConfig) -> Result<String, ExtractError> {
    let (framework_raw, link) = split_query(query)?;
    validate_url(link)?;

    if !has_component_path(link) {
        return Ok(NO_PATH_NOTICE.to_string());
    }

    let framework: Framework = framework_raw.parse()?;
    let rendered = strategy::extract(framework, link, config).await?;
    Ok(markdown::one_line(&rendered))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_query() {
        let (framework, link) = split_query("HTML https://uiverse.io/a/b").unwrap();
        assert_eq!(framework, "HTML");
        assert_eq!(link, "https://uiverse.io/a/b");
    }

    #[test]
    fn test_split_query_trims() {
        let (framework, link) = split_query("  React   https://uiverse.io/x/y  ").unwrap();
        assert_eq!(framework, "React");
        assert_eq!(link, "https://uiverse.io/x/y");
    }

    #[test]
    fn test_split_query_empty() {
        assert!(matches!(split_query(""), Err(ExtractError::EmptyQuery)));
        assert!(matches!(split_query("   "), Err(ExtractError::EmptyQuery)));
    }

    #[test]
    fn test_split_query_missing_link() {
        assert!(matches!(
            split_query("HTML"),
            Err(ExtractError::MalformedQuery)
        ));
    }

    #[test]
    fn test_validate_url_accepts_component_links() {
        assert!(validate_url("https://uiverse.io/Na3ar-17/evil-dragon-24").is_ok());
        assert!(validate_url("https://uiverse.io/").is_ok());
    }

    #[test]
    fn test_validate_url_rejects_other_sites() {
        let err = validate_url("https://example.com/button").unwrap_err();
        assert!(matches!(err, ExtractError::InvalidUrl(_)));
    }

    #[test]
    fn test_has_component_path() {
        assert!(has_component_path("https://uiverse.io/Na3ar-17/evil-dragon-24"));
        assert!(!has_component_path("https://uiverse.io/"));
    }

    #[tokio::test]
    async fn test_prefix_only_query_returns_notice_without_browser() {
        // No Chrome involved: the notice short-circuits before any launch.
        let out = run_query("HTML https://uiverse.io/", &SessionConfig::default())
            .await
            .unwrap();
        assert_eq!(out, NO_PATH_NOTICE);
    }

    #[tokio::test]
    async fn test_prefix_only_query_ignores_framework_validity() {
        let out = run_query("angular https://uiverse.io/", &SessionConfig::default())
            .await
            .unwrap();
        assert_eq!(out, NO_PATH_NOTICE);
    }

    #[tokio::test]
    async fn test_unknown_framework_query_errors() {
        let err = run_query(
            "angular https://uiverse.io/some-user/some-button",
            &SessionConfig::default(),
        )
        .await
        .unwrap_err();
        assert!(matches!(err, ExtractError::UnsupportedFramework(_)));
    }

    #[tokio::test]
    async fn test_wrong_site_query_errors() {
        let err = run_query("HTML https://example.com/x", &SessionConfig::default())
            .await
            .unwrap_err();
        assert!(matches!(err, ExtractError::InvalidUrl(_)));
    }

    #[test]
    fn test_notice_is_single_line() {
        assert!(!NO_PATH_NOTICE.contains('\n'));
        assert!(!NO_PATH_NOTICE.contains('\r'));
    }
}
