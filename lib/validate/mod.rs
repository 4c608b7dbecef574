//! Server manifest validation.

mod codes;
mod result;

pub mod validators;

#[cfg(test)]
mod tests;

//--------------------------------------------------------------------------------------------------
// Re-Exports
//--------------------------------------------------------------------------------------------------

pub use codes::ErrorCode;
pub use result::{ValidationIssue, ValidationResult};
pub use validators::{
    NoopOwnershipValidator, PackageOwnershipValidator, parse_server_name,
    validate_publish_request, validate_server_json,
};
