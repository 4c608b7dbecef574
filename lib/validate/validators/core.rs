//! Manifest validation entry points.

use crate::config::Config;
use crate::model::ServerJson;

use super::super::codes::ErrorCode;
use super::super::result::{ValidationIssue, ValidationResult};
use super::extensions::validate_publisher_extensions;
use super::fields::{validate_icons, validate_title, validate_website_url};
use super::name::validate_server_name;
use super::namespace::{validate_remote_namespace_match, validate_website_namespace_match};
use super::ownership::PackageOwnershipValidator;
use super::packages::validate_package;
use super::repository::validate_repository;
use super::schema::validate_schema;
use super::transport::validate_remote_transport;
use super::version::validate_version;

//--------------------------------------------------------------------------------------------------
// Types
//--------------------------------------------------------------------------------------------------

/// A single manifest rule.
pub type ManifestCheck = fn(&ServerJson) -> ValidationResult;

//--------------------------------------------------------------------------------------------------
// Constants
//--------------------------------------------------------------------------------------------------

/// Manifest rules in evaluation order. The first failure wins.
pub const MANIFEST_CHECKS: &[(&str, ManifestCheck)] = &[
    ("schema", check_schema),
    ("name", check_name),
    ("version", check_version),
    ("repository", check_repository),
    ("websiteUrl", check_website_url),
    ("title", check_title),
    ("icons", check_icons),
    ("packages", check_packages),
    ("remotes", check_remotes),
    ("remote namespace", validate_remote_namespace_match),
    ("websiteUrl namespace", validate_website_namespace_match),
];

//--------------------------------------------------------------------------------------------------
// Functions
//--------------------------------------------------------------------------------------------------

/// Validate a manifest. Pure; the manifest is only read.
pub fn validate_server_json(server: &ServerJson) -> ValidationResult {
    MANIFEST_CHECKS
        .iter()
        .try_for_each(|(_, check)| check(server))
}

/// Validate a publish request: extension size, the manifest itself, then
/// (when enabled) registry ownership of every package.
pub async fn validate_publish_request(
    server: &ServerJson,
    config: &Config,
    ownership: &dyn PackageOwnershipValidator,
) -> ValidationResult {
    validate_publisher_extensions(server)?;
    validate_server_json(server)?;

    if config.enable_registry_validation {
        for (i, package) in server.packages.iter().enumerate() {
            if let Err(e) = ownership.validate_package(package, &server.name).await {
                return Err(ValidationIssue::new(
                    ErrorCode::RegistryOwnershipViolation,
                    format!("packages[{}]", i),
                    format!(
                        "registry validation failed for package {} ({}): {}",
                        i, package.identifier, e
                    ),
                ));
            }
        }
    }

    Ok(())
}

fn check_schema(server: &ServerJson) -> ValidationResult {
    validate_schema(&server.schema)
}

fn check_name(server: &ServerJson) -> ValidationResult {
    validate_server_name(&server.name)
}

fn check_version(server: &ServerJson) -> ValidationResult {
    validate_version(&server.version)
}

fn check_repository(server: &ServerJson) -> ValidationResult {
    validate_repository(server.repository.as_ref())
}

fn check_website_url(server: &ServerJson) -> ValidationResult {
    validate_website_url(&server.website_url)
}

fn check_title(server: &ServerJson) -> ValidationResult {
    validate_title(&server.title)
}

fn check_icons(server: &ServerJson) -> ValidationResult {
    validate_icons(&server.icons)
}

fn check_packages(server: &ServerJson) -> ValidationResult {
    server
        .packages
        .iter()
        .enumerate()
        .try_for_each(|(i, package)| validate_package(package, i))
}

fn check_remotes(server: &ServerJson) -> ValidationResult {
    server
        .remotes
        .iter()
        .enumerate()
        .try_for_each(|(i, remote)| validate_remote_transport(remote, i))
}
