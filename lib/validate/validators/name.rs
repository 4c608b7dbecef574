//! Server name parsing.

use regex::Regex;
use std::sync::LazyLock;

use super::super::codes::ErrorCode;
use super::super::result::{ValidationIssue, ValidationResult};

//--------------------------------------------------------------------------------------------------
// Constants
//--------------------------------------------------------------------------------------------------

/// Namespace: alphanumeric at both ends, dots and hyphens inside.
const NAMESPACE_PATTERN: &str = r"[a-zA-Z0-9][a-zA-Z0-9.-]*[a-zA-Z0-9]";

/// Name part: alphanumeric at both ends, dots, underscores and hyphens inside.
const NAME_PART_PATTERN: &str = r"[a-zA-Z0-9][a-zA-Z0-9._-]*[a-zA-Z0-9]";

static NAMESPACE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!("^{}$", NAMESPACE_PATTERN)).expect("Invalid regex pattern")
});

static NAME_PART_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!("^{}$", NAME_PART_PATTERN)).expect("Invalid regex pattern")
});

static SERVER_NAME_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!("^{}/{}$", NAMESPACE_PATTERN, NAME_PART_PATTERN))
        .expect("Invalid regex pattern")
});

const FORMAT_HELP: &str = "use format 'dns-namespace/name' (e.g., 'com.example.api/server')";

//--------------------------------------------------------------------------------------------------
// Types
//--------------------------------------------------------------------------------------------------

/// A server name split into its namespace and name part.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServerName<'a> {
    /// Reverse-DNS namespace (e.g., `com.example`).
    pub namespace: &'a str,
    /// Name within the namespace.
    pub name: &'a str,
}

//--------------------------------------------------------------------------------------------------
// Functions
//--------------------------------------------------------------------------------------------------

/// Parse and validate a `namespace/name` server name.
pub fn parse_server_name(name: &str) -> ValidationResult<ServerName<'_>> {
    if name.is_empty() {
        return Err(ValidationIssue::new(
            ErrorCode::NameRequired,
            "name",
            "server name is required",
        ));
    }

    let Some((namespace, name_part)) = name.split_once('/') else {
        return Err(ValidationIssue::new(
            ErrorCode::NameMalformed,
            "name",
            format!("`{}` must be in format 'dns-namespace/name'", name),
        )
        .with_help(FORMAT_HELP));
    };

    if name_part.contains('/') {
        return Err(ValidationIssue::new(
            ErrorCode::NameMultipleSlashes,
            "name",
            format!("`{}` contains multiple slashes", name),
        )
        .with_help(FORMAT_HELP));
    }

    if namespace.is_empty() || name_part.is_empty() {
        return Err(ValidationIssue::new(
            ErrorCode::NameMalformed,
            "name",
            format!(
                "`{}` must have non-empty namespace and name parts",
                name
            ),
        )
        .with_help(FORMAT_HELP));
    }

    if !SERVER_NAME_REGEX.is_match(name) {
        if !NAMESPACE_REGEX.is_match(namespace) {
            return Err(ValidationIssue::new(
                ErrorCode::NameMalformed,
                "name",
                format!(
                    "namespace '{}' is invalid. Namespace must start and end with alphanumeric characters, and may contain dots and hyphens in the middle",
                    namespace
                ),
            ));
        }
        if !NAME_PART_REGEX.is_match(name_part) {
            return Err(ValidationIssue::new(
                ErrorCode::NameMalformed,
                "name",
                format!(
                    "name '{}' is invalid. Name must start and end with alphanumeric characters, and may contain dots, underscores, and hyphens in the middle",
                    name_part
                ),
            ));
        }
        return Err(ValidationIssue::new(
            ErrorCode::NameMalformed,
            "name",
            format!("invalid format for '{}'", name),
        ));
    }

    Ok(ServerName {
        namespace,
        name: name_part,
    })
}

/// Validate a server name, discarding the parsed parts.
pub fn validate_server_name(name: &str) -> ValidationResult {
    parse_server_name(name).map(|_| ())
}
