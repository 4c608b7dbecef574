//! Constants for mcp-registry.
//!
//! Schema versions, limits, and environment variable names used across the
//! validator and the importer.

use std::time::Duration;

//--------------------------------------------------------------------------------------------------
// Constants
//--------------------------------------------------------------------------------------------------

/// The current server.json schema version.
pub const CURRENT_SCHEMA_VERSION: &str = "2025-10-17";

/// The previous server.json schema version, still accepted.
pub const LEGACY_SCHEMA_VERSION_20250929: &str = "2025-09-29";

/// All schema versions a manifest may declare.
pub const SUPPORTED_SCHEMA_VERSIONS: &[&str] =
    &[CURRENT_SCHEMA_VERSION, LEGACY_SCHEMA_VERSION_20250929];

/// Base URL under which schema versions are published.
pub const SCHEMA_BASE_URL: &str = "https://static.modelcontextprotocol.io/schemas";

/// Key under `_meta` holding publisher-controlled extension data.
pub const PUBLISHER_PROVIDED_META_KEY: &str = "io.modelcontextprotocol.registry/publisher-provided";

/// Key under `_meta` holding registry-assigned metadata.
pub const OFFICIAL_META_KEY: &str = "io.modelcontextprotocol.registry/official";

/// Maximum serialized size of the publisher-provided extension.
pub const MAX_PUBLISHER_EXTENSION_BYTES: usize = 4 * 1024;

/// Path segment identifying a paginated catalog endpoint.
pub const CATALOG_PATH_SEGMENT: &str = "/v0/servers";

/// Query parameter used to echo a catalog cursor.
pub const CURSOR_QUERY_PARAM: &str = "cursor";

/// Seed locator selecting the seed file compiled into the binary.
pub const EMBEDDED_SEED_SOURCE: &str = "embedded";

/// Seed data compiled into the binary.
pub const EMBEDDED_SEED_JSON: &str = include_str!("../data/seed.json");

/// Environment variable for the seed source locator.
pub const SEED_FROM_ENV: &str = "MCP_REGISTRY_SEED_FROM";

/// Environment variable toggling registry ownership validation.
pub const ENABLE_REGISTRY_VALIDATION_ENV: &str = "MCP_REGISTRY_ENABLE_REGISTRY_VALIDATION";

/// Environment variable for the overall import deadline in seconds.
pub const SEED_TIMEOUT_ENV: &str = "MCP_REGISTRY_SEED_TIMEOUT_SECS";

/// Environment variable for the per-request HTTP timeout in seconds.
pub const HTTP_TIMEOUT_ENV: &str = "MCP_REGISTRY_HTTP_TIMEOUT_SECS";

/// Environment variable for the catalog page limit.
pub const SEED_MAX_PAGES_ENV: &str = "MCP_REGISTRY_SEED_MAX_PAGES";

/// Default overall import deadline.
pub const DEFAULT_SEED_TIMEOUT: Duration = Duration::from_secs(5 * 60);

/// Default per-request HTTP timeout.
pub const DEFAULT_HTTP_TIMEOUT: Duration = Duration::from_secs(60);

/// Default upper bound on catalog pages.
pub const DEFAULT_MAX_PAGES: usize = 1000;

//--------------------------------------------------------------------------------------------------
// Functions
//--------------------------------------------------------------------------------------------------

/// Full schema URL for the current schema version.
pub fn current_schema_url() -> String {
    format!("{}/{}/server.schema.json", SCHEMA_BASE_URL, CURRENT_SCHEMA_VERSION)
}
