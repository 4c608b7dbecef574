//! Version string validation.
//!
//! Versions are not required to be strict semver, but they must name one
//! specific release: range and wildcard syntaxes are rejected.

use regex::Regex;
use std::sync::LazyLock;

use super::super::codes::ErrorCode;
use super::super::result::{ValidationIssue, ValidationResult};

//--------------------------------------------------------------------------------------------------
// Constants
//--------------------------------------------------------------------------------------------------

/// Version reserved for registry-internal "latest" resolution.
pub const RESERVED_VERSION: &str = "latest";

// Digit and whitespace classes below are spelled out as ASCII; `\d` and `\s`
// would also match non-ASCII digits and spaces.

/// `^1.2.3`, `~1.2.3`, `>=1.0.0`, `<=1.0.0`, `>1.0.0`, `<1.0.0`, `=1.0.0`
static COMPARATOR_RANGE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[\t\n\f\r ]*(?:\^|~|>=|<=|>|<|=)[\t\n\f\r ]*v?[0-9]+(?:\.[0-9]+){0,3}(?:-[0-9A-Za-z.-]+)?[\t\n\f\r ]*$",
    )
    .expect("Invalid regex pattern")
});

/// `1.2.3 - 2.0.0`
static HYPHEN_RANGE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[\t\n\f\r ]*v?[0-9]+(?:\.[0-9]+){0,3}(?:-[0-9A-Za-z.-]+)?[\t\n\f\r ]-[\t\n\f\r ]*v?[0-9]+(?:\.[0-9]+){0,3}(?:-[0-9A-Za-z.-]+)?[\t\n\f\r ]*$",
    )
    .expect("Invalid regex pattern")
});

/// `1.2 || 1.3`
static OR_RANGE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[\t\n\f\r ]*(?:v?[0-9]+(?:\.[0-9]+){0,3}(?:-[0-9A-Za-z.-]+)?[\t\n\f\r ]*)(?:\|\|[\t\n\f\r ]*v?[0-9]+(?:\.[0-9]+){0,3}(?:-[0-9A-Za-z.-]+)?[\t\n\f\r ]*)+$",
    )
    .expect("Invalid regex pattern")
});

/// `1.2.*`, `1.2.x`, `1.2.X`, `1.x`; also matches plain dotted versions,
/// which are only rejected when a wildcard segment is present.
static DOTTED_VERSION_LIKE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[\t\n\f\r ]*(?:v?[0-9]+|x|X|\*)(?:\.(?:[0-9]+|x|X|\*)){1,2}(?:-[0-9A-Za-z.-]+)?[\t\n\f\r ]*$",
    )
    .expect("Invalid regex pattern")
});

//--------------------------------------------------------------------------------------------------
// Functions
//--------------------------------------------------------------------------------------------------

/// Validate that a version names one specific release.
pub fn validate_version(version: &str) -> ValidationResult {
    if version == RESERVED_VERSION {
        return Err(ValidationIssue::new(
            ErrorCode::VersionReserved,
            "version",
            "version string `latest` is reserved",
        )
        .with_help("publish a specific version such as 1.0.0"));
    }

    if looks_like_version_range(version) {
        return Err(ValidationIssue::new(
            ErrorCode::VersionLooksLikeRange,
            "version",
            format!(
                "`{}` looks like a version range; a specific version is required",
                version
            ),
        )
        .with_help("use a specific version such as 1.2.3"));
    }

    Ok(())
}

/// Detect semver range syntaxes and wildcard patterns.
pub fn looks_like_version_range(version: &str) -> bool {
    let trimmed = version.trim();
    if trimmed.is_empty() {
        return false;
    }

    if COMPARATOR_RANGE_REGEX.is_match(trimmed)
        || HYPHEN_RANGE_REGEX.is_match(trimmed)
        || OR_RANGE_REGEX.is_match(trimmed)
    {
        return true;
    }

    if DOTTED_VERSION_LIKE_REGEX.is_match(trimmed) {
        return trimmed.contains(['x', 'X', '*']);
    }

    false
}
