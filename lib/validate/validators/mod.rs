//! Validation functions for server manifests.

mod core;
mod extensions;
mod fields;
mod name;
mod namespace;
mod ownership;
mod packages;
mod repository;
mod schema;
mod transport;
mod version;

//--------------------------------------------------------------------------------------------------
// Re-Exports
//--------------------------------------------------------------------------------------------------

pub use self::core::{MANIFEST_CHECKS, ManifestCheck, validate_publish_request, validate_server_json};
pub use extensions::validate_publisher_extensions;
pub use fields::{check_absolute_https, validate_icons, validate_title, validate_website_url};
pub use name::{ServerName, parse_server_name, validate_server_name};
pub use namespace::{
    check_url_matches_namespace, extract_publisher_domain, is_local_host,
    is_valid_host_for_domain, validate_remote_namespace_match, validate_website_namespace_match,
};
pub use ownership::{NoopOwnershipValidator, PackageOwnershipValidator};
pub use packages::{
    collect_available_variables, validate_argument, validate_argument_value_fields,
    validate_named_argument_name, validate_package,
};
pub use repository::{is_valid_repository_url, is_valid_subfolder_path, validate_repository};
pub use schema::validate_schema;
pub use transport::{
    is_valid_remote_url, is_valid_templated_url, validate_package_transport,
    validate_remote_transport,
};
pub use version::{RESERVED_VERSION, looks_like_version_range, validate_version};
