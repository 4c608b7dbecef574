//! Publisher extension size gate.

use crate::constants::{MAX_PUBLISHER_EXTENSION_BYTES, PUBLISHER_PROVIDED_META_KEY};
use crate::model::ServerJson;

use super::super::codes::ErrorCode;
use super::super::result::{ValidationIssue, ValidationResult};

//--------------------------------------------------------------------------------------------------
// Constants
//--------------------------------------------------------------------------------------------------

/// Characters written as a six-byte `\uXXXX` escape by HTML-safe JSON encoders.
const HTML_ESCAPED: [char; 5] = ['<', '>', '&', '\u{2028}', '\u{2029}'];

//--------------------------------------------------------------------------------------------------
// Functions
//--------------------------------------------------------------------------------------------------

/// Reject a publisher-provided `_meta` payload larger than 4KB once serialized.
pub fn validate_publisher_extensions(server: &ServerJson) -> ValidationResult {
    let Some(extension) = server.publisher_provided() else {
        return Ok(());
    };

    let location = format!("_meta.{}", PUBLISHER_PROVIDED_META_KEY);

    // Serializing a `Value` only fails for non-string map keys, which JSON cannot produce.
    let encoded = serde_json::to_string(extension).map_err(|e| {
        ValidationIssue::new(
            ErrorCode::ExtensionTooLarge,
            location.clone(),
            format!("failed to serialize extension: {}", e),
        )
    })?;
    let size = html_safe_len(&encoded);

    if size > MAX_PUBLISHER_EXTENSION_BYTES {
        return Err(ValidationIssue::new(
            ErrorCode::ExtensionTooLarge,
            location,
            format!(
                "extension exceeds {}KB limit ({} bytes)",
                MAX_PUBLISHER_EXTENSION_BYTES / 1024,
                size
            ),
        ));
    }

    Ok(())
}

/// Byte length of compact JSON once `<`, `>`, `&`, U+2028 and U+2029 are
/// written as `\uXXXX` escapes.
///
/// These characters only occur inside string literals of encoded JSON, so
/// every occurrence is one escape.
fn html_safe_len(encoded: &str) -> usize {
    encoded
        .chars()
        .map(|c| {
            if HTML_ESCAPED.contains(&c) {
                6
            } else {
                c.len_utf8()
            }
        })
        .sum()
}

//--------------------------------------------------------------------------------------------------
// Tests
//--------------------------------------------------------------------------------------------------
