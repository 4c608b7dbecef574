//! Validation result types.

use serde::Serialize;
use thiserror::Error;

use super::codes::ErrorCode;

//--------------------------------------------------------------------------------------------------
// Types
//--------------------------------------------------------------------------------------------------

/// Outcome of a validation step. Validation is fail-fast, so the error side
/// carries exactly one issue.
pub type ValidationResult<T = ()> = Result<T, ValidationIssue>;

/// A validation failure.
#[derive(Debug, Clone, PartialEq, Serialize, Error)]
#[error("[{code}] {message} at {location}: {details}")]
pub struct ValidationIssue {
    /// Error code.
    pub code: ErrorCode,

    /// Short description (e.g., "invalid websiteUrl").
    pub message: String,

    /// Location in the manifest (e.g., "packages[0].transport.url").
    pub location: String,

    /// Detailed explanation naming the offending value.
    pub details: String,

    /// Optional help suggestion.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub help: Option<String>,
}

//--------------------------------------------------------------------------------------------------
// Methods
//--------------------------------------------------------------------------------------------------

impl ValidationIssue {
    /// Create an issue whose message is the code's summary.
    pub fn new(code: ErrorCode, location: impl Into<String>, details: impl Into<String>) -> Self {
        Self {
            code,
            message: code.summary().into(),
            location: location.into(),
            details: details.into(),
            help: None,
        }
    }

    /// Attach a help suggestion.
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }

    /// Prefix the location, for issues raised by a nested validator.
    pub fn within(mut self, parent: &str) -> Self {
        self.location = if self.location.is_empty() {
            parent.to_string()
        } else {
            format!("{}.{}", parent, self.location)
        };
        self
    }
}
