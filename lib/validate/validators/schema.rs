//! Schema version gate.

use crate::constants::SUPPORTED_SCHEMA_VERSIONS;
use crate::model::is_supported_schema_version;

use super::super::codes::ErrorCode;
use super::super::result::{ValidationIssue, ValidationResult};

//--------------------------------------------------------------------------------------------------
// Functions
//--------------------------------------------------------------------------------------------------

/// Reject a missing or unsupported `$schema`.
pub fn validate_schema(schema: &str) -> ValidationResult {
    if schema.is_empty() {
        return Err(ValidationIssue::new(
            ErrorCode::SchemaMissing,
            "$schema",
            "`$schema` field is required",
        )
        .with_help(format!(
            "reference a supported version: {}",
            SUPPORTED_SCHEMA_VERSIONS.join(", ")
        )));
    }

    if !is_supported_schema_version(schema) {
        return Err(ValidationIssue::new(
            ErrorCode::SchemaUnsupported,
            "$schema",
            format!(
                "schema version `{}` is not supported. Supported versions: {}",
                schema,
                SUPPORTED_SCHEMA_VERSIONS.join(", ")
            ),
        ));
    }

    Ok(())
}
