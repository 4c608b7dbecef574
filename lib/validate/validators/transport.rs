//! Transport validation for packages and remotes.

use crate::model::{Transport, TransportType};
use crate::vars::{extract_template_vars, has_template_vars, substitute_stand_ins};
use url::Url;

use super::super::codes::ErrorCode;
use super::super::result::{ValidationIssue, ValidationResult};
use super::fields::SCHEME_HTTPS;
use super::namespace::is_local_host;

//--------------------------------------------------------------------------------------------------
// Functions
//--------------------------------------------------------------------------------------------------

/// Validate a package transport. Network URLs may use `{name}` placeholders
/// drawn from `available_variables`.
pub fn validate_package_transport(
    transport: &Transport,
    available_variables: &[String],
) -> ValidationResult {
    let Some(kind) = transport.kind() else {
        return Err(unsupported_type(transport, "transport.type", "stdio, streamable-http, sse"));
    };

    if kind == TransportType::Stdio {
        if !transport.url.is_empty() {
            return Err(ValidationIssue::new(
                ErrorCode::TransportInvalidUrl,
                "transport.url",
                format!(
                    "url must be empty for {} transport type, got: {}",
                    kind, transport.url
                ),
            ));
        }
        return Ok(());
    }

    if transport.url.is_empty() {
        return Err(url_required(kind, "transport.url"));
    }

    let undefined: Vec<String> = extract_template_vars(&transport.url)
        .into_iter()
        .filter(|var| !available_variables.contains(var))
        .collect();
    if !undefined.is_empty() {
        return Err(ValidationIssue::new(
            ErrorCode::UndefinedTemplateVariable,
            "transport.url",
            format!(
                "template variables {:?} in URL {} reference undefined variables. Available variables: {:?}",
                undefined, transport.url, available_variables
            ),
        )
        .with_help("declare the variable as an environment variable or argument of this package"));
    }

    if !is_valid_templated_url(&transport.url) {
        return Err(ValidationIssue::new(
            ErrorCode::TransportInvalidUrl,
            "transport.url",
            format!("`{}` is not a valid URL", transport.url),
        ));
    }

    Ok(())
}

/// Validate a manifest-level remote. Only network transports with a concrete,
/// public HTTPS URL are allowed.
pub fn validate_remote_transport(remote: &Transport, index: usize) -> ValidationResult {
    let location = format!("remotes[{}]", index);

    let kind = match remote.kind() {
        Some(kind) if kind.is_network() => kind,
        _ => {
            return Err(unsupported_type(
                remote,
                &format!("{}.type", location),
                "streamable-http, sse",
            ));
        }
    };

    if remote.url.is_empty() {
        return Err(url_required(kind, &format!("{}.url", location)));
    }

    if let Err(reason) = check_remote_url(&remote.url) {
        return Err(ValidationIssue::new(
            ErrorCode::TransportInvalidUrl,
            format!("{}.url", location),
            format!("`{}` {}", remote.url, reason),
        ));
    }

    Ok(())
}

/// Check that a possibly templated URL parses with a scheme and host once
/// placeholders are replaced by stand-ins.
pub fn is_valid_templated_url(raw: &str) -> bool {
    let candidate = substitute_stand_ins(raw);
    match Url::parse(&candidate) {
        Ok(url) => !url.scheme().is_empty() && url.host_str().is_some_and(|h| !h.is_empty()),
        Err(_) => false,
    }
}

/// Check that a URL is usable as a hosted remote.
pub fn is_valid_remote_url(raw: &str) -> bool {
    check_remote_url(raw).is_ok()
}

fn check_remote_url(raw: &str) -> Result<(), String> {
    if has_template_vars(raw) {
        return Err("must not contain template variables".into());
    }

    let url = Url::parse(raw).map_err(|e| format!("is not a valid URL: {}", e))?;

    if url.scheme() != SCHEME_HTTPS {
        return Err(format!("must use https scheme (got {})", url.scheme()));
    }

    match url.host_str() {
        None | Some("") => Err("must have a hostname".into()),
        Some(host) if is_local_host(host) => Err("must not point at localhost".into()),
        Some(_) => Ok(()),
    }
}

fn unsupported_type(transport: &Transport, location: &str, allowed: &str) -> ValidationIssue {
    ValidationIssue::new(
        ErrorCode::TransportUnsupportedType,
        location,
        format!("unsupported transport type: `{}`", transport.transport_type),
    )
    .with_help(format!("supported types: {}", allowed))
}

fn url_required(kind: TransportType, location: &str) -> ValidationIssue {
    ValidationIssue::new(
        ErrorCode::TransportUrlRequired,
        location,
        format!("url is required for {} transport type", kind),
    )
}
