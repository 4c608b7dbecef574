//! Namespace ownership checks.
//!
//! A server named `com.example/weather` may only point at hosts under
//! `example.com`. Local development hosts are exempt.

use crate::model::ServerJson;
use url::Url;

use super::super::codes::ErrorCode;
use super::super::result::{ValidationIssue, ValidationResult};
use super::fields::SCHEME_HTTPS;

//--------------------------------------------------------------------------------------------------
// Functions
//--------------------------------------------------------------------------------------------------

/// Validate that every remote URL is hosted under the publisher's domain.
pub fn validate_remote_namespace_match(server: &ServerJson) -> ValidationResult {
    for (i, remote) in server.remotes.iter().enumerate() {
        check_url_matches_namespace(&remote.url, &server.name).map_err(|issue| {
            let details = format!(
                "remote URL {} does not match namespace {}: {}",
                remote.url, server.name, issue.details
            );
            ValidationIssue {
                location: format!("remotes[{}].url", i),
                details,
                ..issue
            }
        })?;
    }
    Ok(())
}

/// Validate that `websiteUrl`, when present, is hosted under the publisher's domain.
pub fn validate_website_namespace_match(server: &ServerJson) -> ValidationResult {
    if server.website_url.is_empty() {
        return Ok(());
    }

    check_url_matches_namespace(&server.website_url, &server.name).map_err(|issue| {
        let details = format!(
            "websiteUrl {} does not match namespace {}: {}",
            server.website_url, server.name, issue.details
        );
        ValidationIssue {
            location: "websiteUrl".into(),
            details,
            ..issue
        }
    })
}

/// Check one URL against the domain derived from a server name's namespace.
pub fn check_url_matches_namespace(raw_url: &str, server_name: &str) -> ValidationResult {
    let url = Url::parse(raw_url).map_err(|e| {
        ValidationIssue::new(
            ErrorCode::TransportInvalidUrl,
            "",
            format!("invalid URL format: {}", e),
        )
    })?;

    if url.scheme() != SCHEME_HTTPS {
        return Err(ValidationIssue::new(
            ErrorCode::TransportInvalidUrl,
            "",
            format!("URL must use https scheme (got {})", url.scheme()),
        ));
    }

    let host = match url.host_str() {
        Some(h) if !h.is_empty() => h,
        _ => {
            return Err(ValidationIssue::new(
                ErrorCode::TransportInvalidUrl,
                "",
                "URL must have a valid hostname",
            ));
        }
    };

    if is_local_host(host) {
        return Ok(());
    }

    let Some(publisher_domain) = extract_publisher_domain(server_name) else {
        return Err(ValidationIssue::new(
            ErrorCode::InvalidNamespaceFormat,
            "name",
            format!("cannot extract domain from {}", server_name),
        )
        .with_help("namespaces need at least two labels, e.g. com.example"));
    };

    if !is_valid_host_for_domain(host, &publisher_domain) {
        return Err(ValidationIssue::new(
            ErrorCode::NamespaceMismatch,
            "",
            format!(
                "host {} does not match publisher domain {}",
                host, publisher_domain
            ),
        )
        .with_help(format!(
            "host the endpoint under {} or publish under a namespace you own",
            publisher_domain
        )));
    }

    Ok(())
}

/// Convert a reverse-DNS namespace to a domain: `com.example/x` → `example.com`.
///
/// Returns `None` when fewer than two labels are present. The result is
/// lowercased to compare against parsed hosts, which the URL parser lowercases.
pub fn extract_publisher_domain(server_name: &str) -> Option<String> {
    let namespace = server_name
        .split_once('/')
        .map(|(ns, _)| ns)
        .unwrap_or(server_name);

    let labels: Vec<&str> = namespace.split('.').collect();
    if labels.len() < 2 {
        return None;
    }

    Some(
        labels
            .into_iter()
            .rev()
            .collect::<Vec<_>>()
            .join(".")
            .to_ascii_lowercase(),
    )
}

/// True when `host` is the domain itself or one of its subdomains.
pub fn is_valid_host_for_domain(host: &str, publisher_domain: &str) -> bool {
    host == publisher_domain
        || host
            .strip_suffix(publisher_domain)
            .is_some_and(|prefix| prefix.ends_with('.'))
}

/// Local development hosts skip the domain comparison.
pub fn is_local_host(host: &str) -> bool {
    host == "localhost" || host.ends_with(".localhost") || host == "127.0.0.1"
}
