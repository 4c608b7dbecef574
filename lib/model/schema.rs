//! Schema version support.

use crate::constants::SUPPORTED_SCHEMA_VERSIONS;

//--------------------------------------------------------------------------------------------------
// Functions
//--------------------------------------------------------------------------------------------------

/// Returns true if the schema URL references one of the supported schema versions.
///
/// Containment rather than equality, so both bare versions and full schema URLs match.
pub fn is_supported_schema_version(schema_url: &str) -> bool {
    if schema_url.is_empty() {
        return false;
    }

    SUPPORTED_SCHEMA_VERSIONS
        .iter()
        .any(|version| schema_url.contains(version))
}

//--------------------------------------------------------------------------------------------------
// Tests
//--------------------------------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{LEGACY_SCHEMA_VERSION_20250929, current_schema_url};

    #[test]
    fn accepts_full_urls_and_bare_versions() {
        assert!(is_supported_schema_version(&current_schema_url()));
        assert!(is_supported_schema_version(LEGACY_SCHEMA_VERSION_20250929));
        assert!(is_supported_schema_version(
            "https://static.modelcontextprotocol.io/schemas/2025-09-29/server.schema.json"
        ));
    }

    #[test]
    fn rejects_unknown_and_empty() {
        assert!(!is_supported_schema_version(""));
        assert!(!is_supported_schema_version(
            "https://static.modelcontextprotocol.io/schemas/2025-07-09/server.schema.json"
        ));
    }
}
