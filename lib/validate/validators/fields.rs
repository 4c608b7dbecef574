//! Top-level optional field validation.

use crate::model::Icon;
use url::Url;

use super::super::codes::ErrorCode;
use super::super::result::{ValidationIssue, ValidationResult};

//--------------------------------------------------------------------------------------------------
// Constants
//--------------------------------------------------------------------------------------------------

/// The only scheme allowed for externally reachable URLs.
pub const SCHEME_HTTPS: &str = "https";

//--------------------------------------------------------------------------------------------------
// Functions
//--------------------------------------------------------------------------------------------------

/// Validate `websiteUrl` when present: absolute and HTTPS.
pub fn validate_website_url(website_url: &str) -> ValidationResult {
    if website_url.is_empty() {
        return Ok(());
    }

    check_absolute_https(website_url)
        .map(|_| ())
        .map_err(|details| ValidationIssue::new(ErrorCode::WebsiteUrlInvalid, "websiteUrl", details))
}

/// Validate `title` when present: not only whitespace.
pub fn validate_title(title: &str) -> ValidationResult {
    if !title.is_empty() && title.trim().is_empty() {
        return Err(ValidationIssue::new(
            ErrorCode::TitleBlank,
            "title",
            "title cannot be only whitespace",
        ));
    }
    Ok(())
}

/// Validate every icon `src`: absolute and HTTPS.
pub fn validate_icons(icons: &[Icon]) -> ValidationResult {
    for (i, icon) in icons.iter().enumerate() {
        check_absolute_https(&icon.src).map_err(|details| {
            ValidationIssue::new(
                ErrorCode::IconInvalid,
                format!("icons[{}].src", i),
                format!("invalid icon at index {}: {}", i, details),
            )
        })?;
    }
    Ok(())
}

/// Check that a URL parses, is absolute and uses HTTPS.
/// Returns a human-readable reason on failure.
pub fn check_absolute_https(raw: &str) -> Result<Url, String> {
    let parsed = match Url::parse(raw) {
        Ok(u) => u,
        Err(url::ParseError::RelativeUrlWithoutBase) => {
            return Err(format!("`{}` must be absolute (include scheme)", raw));
        }
        Err(e) => return Err(format!("`{}` is not a valid URL: {}", raw, e)),
    };

    if parsed.scheme() != SCHEME_HTTPS {
        return Err(format!(
            "`{}` must use https scheme (got {})",
            raw,
            parsed.scheme()
        ));
    }

    Ok(parsed)
}
