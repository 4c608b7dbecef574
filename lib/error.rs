//! Error types for mcp-registry.

use thiserror::Error;

//--------------------------------------------------------------------------------------------------
// Types
//--------------------------------------------------------------------------------------------------

/// Result type for mcp-registry operations.
pub type RegistryResult<T> = Result<T, RegistryError>;

/// Error type for mcp-registry operations.
#[derive(Debug, Error)]
pub enum RegistryError {
    /// The import source could not be read or fetched.
    #[error("Import source unreachable: {source_locator}: {reason}")]
    SourceUnreachable {
        /// The locator that was being read.
        source_locator: String,
        /// Why the fetch failed.
        reason: String,
    },

    /// The import source was read but could not be decoded as a whole.
    #[error("Failed to decode seed data from {source_locator}: {reason}")]
    DecodeFailure {
        /// The locator that was being decoded.
        source_locator: String,
        /// Decoder error message.
        reason: String,
    },

    /// The catalog source kept paginating past the configured guard.
    #[error("Pagination aborted for {source_locator}: {reason}")]
    PaginationLimit {
        /// The catalog locator.
        source_locator: String,
        /// Which guard tripped.
        reason: String,
    },

    /// Some records could not be created.
    #[error("Failed to import {} servers", .0.failed.len())]
    ImportIncomplete(crate::importer::ImportReport),

    /// Invalid configuration value.
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// HTTP client error.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

