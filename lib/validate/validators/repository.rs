//! Repository reference validation.

use crate::model::Repository;
use regex::Regex;
use std::sync::LazyLock;

use super::super::codes::ErrorCode;
use super::super::result::{ValidationIssue, ValidationResult};

//--------------------------------------------------------------------------------------------------
// Constants
//--------------------------------------------------------------------------------------------------

/// GitHub source kind.
pub const SOURCE_GITHUB: &str = "github";

/// GitLab source kind.
pub const SOURCE_GITLAB: &str = "gitlab";

static GITHUB_URL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^https?://(www\.)?github\.com/[A-Za-z0-9_.-]+/[A-Za-z0-9_.-]+/?$")
        .expect("Invalid regex pattern")
});

static GITLAB_URL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^https?://(www\.)?gitlab\.com/[A-Za-z0-9_.-]+(/[A-Za-z0-9_.-]+)+/?$")
        .expect("Invalid regex pattern")
});

static SUBFOLDER_SEGMENT_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z0-9._-]+$").expect("Invalid regex pattern"));

//--------------------------------------------------------------------------------------------------
// Functions
//--------------------------------------------------------------------------------------------------

/// Validate the repository reference; skipped when both url and source are empty.
pub fn validate_repository(repository: Option<&Repository>) -> ValidationResult {
    let Some(repo) = repository else {
        return Ok(());
    };
    if repo.url.is_empty() && repo.source.is_empty() {
        return Ok(());
    }

    if !is_valid_repository_url(&repo.source, &repo.url) {
        return Err(ValidationIssue::new(
            ErrorCode::RepositoryInvalidUrl,
            "repository.url",
            format!(
                "`{}` is not a valid repository URL for source `{}`",
                repo.url, repo.source
            ),
        )
        .with_help("supported sources: github, gitlab"));
    }

    if !repo.subfolder.is_empty() && !is_valid_subfolder_path(&repo.subfolder) {
        return Err(ValidationIssue::new(
            ErrorCode::RepositoryInvalidSubfolder,
            "repository.subfolder",
            format!("`{}` is not a safe relative path", repo.subfolder),
        )
        .with_help("use a relative path without `..`, e.g. src/server"));
    }

    Ok(())
}

/// Check a repository URL against the host pattern of its source kind.
pub fn is_valid_repository_url(source: &str, url: &str) -> bool {
    match source {
        SOURCE_GITHUB => GITHUB_URL_REGEX.is_match(url),
        SOURCE_GITLAB => GITLAB_URL_REGEX.is_match(url),
        _ => false,
    }
}

/// Check that a subfolder is a relative path that stays inside the repository.
pub fn is_valid_subfolder_path(path: &str) -> bool {
    if path.is_empty() {
        return true;
    }

    if path.starts_with('/') || path.ends_with('/') || path.contains('\\') {
        return false;
    }

    path.split('/').all(|segment| {
        !segment.is_empty()
            && segment != "."
            && segment != ".."
            && SUBFOLDER_SEGMENT_REGEX.is_match(segment)
    })
}
