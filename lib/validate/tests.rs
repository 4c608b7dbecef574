//! Validation tests.

use super::codes::ErrorCode;
use super::validators::*;
use crate::config::Config;
use crate::model::{Argument, KeyValueInput, Package, Repository, ServerJson, Transport};
use async_trait::async_trait;
use serde_json::json;

fn manifest() -> ServerJson {
    serde_json::from_value(json!({
        "$schema": "https://static.modelcontextprotocol.io/schemas/2025-10-17/server.schema.json",
        "name": "com.example/weather",
        "description": "Weather forecasts",
        "version": "1.0.0",
        "title": "Weather",
        "websiteUrl": "https://docs.example.com/weather",
        "repository": {
            "url": "https://github.com/example/weather",
            "source": "github",
            "subfolder": "servers/weather"
        },
        "icons": [{ "src": "https://example.com/icon.png" }],
        "packages": [{
            "registryType": "npm",
            "identifier": "@example/weather",
            "version": "1.0.0",
            "transport": { "type": "stdio" },
            "packageArguments": [
                { "type": "named", "name": "--units", "value": "metric" }
            ],
            "environmentVariables": [{ "name": "WEATHER_API_KEY", "isSecret": true }]
        }],
        "remotes": [{ "type": "streamable-http", "url": "https://mcp.example.com/weather" }]
    }))
    .unwrap()
}

fn http_package(url: &str) -> Package {
    Package {
        identifier: "example-server".into(),
        version: "1.0.0".into(),
        transport: Transport::new("streamable-http", url),
        ..Default::default()
    }
}

fn code_of(result: super::ValidationResult) -> ErrorCode {
    result.expect_err("expected validation to fail").code
}

// -- orchestrator --

#[test]
fn test_valid_manifest() {
    assert_eq!(validate_server_json(&manifest()), Ok(()));
}

#[test]
fn test_validation_does_not_mutate() {
    let server = manifest();
    let before = serde_json::to_vec(&server).unwrap();
    validate_server_json(&server).unwrap();
    let after = serde_json::to_vec(&server).unwrap();
    assert_eq!(before, after);
}

#[test]
fn test_first_failure_wins() {
    let mut server = manifest();
    server.schema.clear();
    server.name = "a/b/c".into();
    server.version = "latest".into();
    assert_eq!(code_of(validate_server_json(&server)), ErrorCode::SchemaMissing);

    server.schema = crate::constants::current_schema_url();
    assert_eq!(code_of(validate_server_json(&server)), ErrorCode::NameMultipleSlashes);
}

#[test]
fn test_check_table_order() {
    let names: Vec<&str> = MANIFEST_CHECKS.iter().map(|(name, _)| *name).collect();
    assert_eq!(
        names,
        vec![
            "schema",
            "name",
            "version",
            "repository",
            "websiteUrl",
            "title",
            "icons",
            "packages",
            "remotes",
            "remote namespace",
            "websiteUrl namespace",
        ]
    );
}

// -- schema --

#[test]
fn test_schema_gate() {
    assert_eq!(code_of(validate_schema("")), ErrorCode::SchemaMissing);
    assert_eq!(
        code_of(validate_schema(
            "https://static.modelcontextprotocol.io/schemas/2024-01-01/server.schema.json"
        )),
        ErrorCode::SchemaUnsupported
    );
    assert!(validate_schema("2025-09-29").is_ok());
}

// -- name --

#[test]
fn test_name_multiple_slashes() {
    for name in ["com.example/a/b", "a/b/c/d", "com.example//x", "//"] {
        assert_eq!(
            code_of(validate_server_name(name)),
            ErrorCode::NameMultipleSlashes,
            "{}",
            name
        );
    }
}

#[test]
fn test_name_required_and_malformed() {
    assert_eq!(code_of(validate_server_name("")), ErrorCode::NameRequired);
    assert_eq!(code_of(validate_server_name("no-slash")), ErrorCode::NameMalformed);
    assert_eq!(code_of(validate_server_name("/server")), ErrorCode::NameMalformed);
    assert_eq!(code_of(validate_server_name("com.example/")), ErrorCode::NameMalformed);
}

#[test]
fn test_name_reports_failing_side() {
    let issue = validate_server_name("-com.example/server").unwrap_err();
    assert_eq!(issue.code, ErrorCode::NameMalformed);
    assert!(issue.details.contains("namespace '-com.example'"));

    let issue = validate_server_name("com.example/server_").unwrap_err();
    assert_eq!(issue.code, ErrorCode::NameMalformed);
    assert!(issue.details.contains("name 'server_'"));
}

#[test]
fn test_name_parts() {
    let parsed = parse_server_name("io.github.user/my_server-v2.0").unwrap();
    assert_eq!(parsed.namespace, "io.github.user");
    assert_eq!(parsed.name, "my_server-v2.0");

    // Underscores are only allowed in the name part.
    assert!(validate_server_name("io.git_hub/server").is_err());
}

// -- version --

#[test]
fn test_specific_versions_accepted() {
    for version in ["1", "1.2", "1.2.3", "1.2.3.4", "v1.2.3", "1.0.0-beta.1", "2024.01.15", ""] {
        assert!(validate_version(version).is_ok(), "{}", version);
    }
}

#[test]
fn test_ranges_rejected() {
    for version in [
        "^1.2.3", "~1.2.3", ">=1.0.0", "<=1.0.0", ">1.0.0", "<1.0.0", "=1.0.0", "1.2.*", "1.x",
        "1.2.X", "1 - 2", "1.2.3 - 2.0.0", "1.2 || 1.3",
    ] {
        assert_eq!(
            code_of(validate_version(version)),
            ErrorCode::VersionLooksLikeRange,
            "{}",
            version
        );
    }
}

#[test]
fn test_latest_reserved() {
    assert_eq!(code_of(validate_version("latest")), ErrorCode::VersionReserved);
}

#[test]
fn test_non_ascii_digits_are_not_ranges() {
    for version in ["^١.٢.٣", "١.x", "~\u{2003}1.2.3"] {
        assert!(!looks_like_version_range(version), "{}", version);
        assert!(validate_version(version).is_ok(), "{}", version);
    }
}

#[test]
fn test_package_version_checked() {
    let mut server = manifest();
    server.packages[0].version = "^1.0.0".into();
    let issue = validate_server_json(&server).unwrap_err();
    assert_eq!(issue.code, ErrorCode::VersionLooksLikeRange);
    assert_eq!(issue.location, "packages[0].version");
}

// -- urls --

#[test]
fn test_website_url() {
    assert!(validate_website_url("").is_ok());
    assert!(validate_website_url("https://example.com/docs").is_ok());
    assert_eq!(
        code_of(validate_website_url("http://example.com")),
        ErrorCode::WebsiteUrlInvalid
    );
    assert_eq!(
        code_of(validate_website_url("example.com/docs")),
        ErrorCode::WebsiteUrlInvalid
    );
}

#[test]
fn test_icons() {
    let mut server = manifest();
    server.icons[0].src = "data:image/png;base64,AAAA".into();
    let issue = validate_server_json(&server).unwrap_err();
    assert_eq!(issue.code, ErrorCode::IconInvalid);
    assert_eq!(issue.location, "icons[0].src");
}

#[test]
fn test_title_blank() {
    assert!(validate_title("").is_ok());
    assert_eq!(code_of(validate_title("   \t")), ErrorCode::TitleBlank);
}

// -- repository --

#[test]
fn test_repository() {
    assert!(validate_repository(None).is_ok());
    assert!(validate_repository(Some(&Repository::default())).is_ok());

    let repo = Repository {
        url: "https://gitlab.com/group/sub/project".into(),
        source: "gitlab".into(),
        ..Default::default()
    };
    assert!(validate_repository(Some(&repo)).is_ok());

    let repo = Repository {
        url: "https://bitbucket.org/user/repo".into(),
        source: "github".into(),
        ..Default::default()
    };
    assert_eq!(code_of(validate_repository(Some(&repo))), ErrorCode::RepositoryInvalidUrl);

    let repo = Repository {
        url: "https://github.com/éxample/weather".into(),
        source: "github".into(),
        ..Default::default()
    };
    assert_eq!(code_of(validate_repository(Some(&repo))), ErrorCode::RepositoryInvalidUrl);

    // A source without a URL is not skipped.
    let repo = Repository {
        source: "github".into(),
        ..Default::default()
    };
    assert_eq!(code_of(validate_repository(Some(&repo))), ErrorCode::RepositoryInvalidUrl);
}

#[test]
fn test_subfolder() {
    assert!(is_valid_subfolder_path("src/server"));
    assert!(is_valid_subfolder_path("packages/my.server-v2"));
    assert!(!is_valid_subfolder_path("../outside"));
    assert!(!is_valid_subfolder_path("/absolute"));
    assert!(!is_valid_subfolder_path("trailing/"));
    assert!(!is_valid_subfolder_path("a//b"));
    assert!(!is_valid_subfolder_path("a\\b"));
    assert!(!is_valid_subfolder_path("a/./b"));

    let repo = Repository {
        url: "https://github.com/example/mono".into(),
        source: "github".into(),
        subfolder: "src/../../etc".into(),
        ..Default::default()
    };
    assert_eq!(
        code_of(validate_repository(Some(&repo))),
        ErrorCode::RepositoryInvalidSubfolder
    );
}

// -- namespace ownership --

#[test]
fn test_namespace_match() {
    assert!(check_url_matches_namespace("https://example.com/mcp", "com.example/server").is_ok());
    assert!(
        check_url_matches_namespace("https://api.eu.example.com/mcp", "com.example/server").is_ok()
    );
}

#[test]
fn test_namespace_mismatch() {
    assert_eq!(
        code_of(check_url_matches_namespace("https://evil.com/mcp", "com.example/server")),
        ErrorCode::NamespaceMismatch
    );
    assert_eq!(
        code_of(check_url_matches_namespace("https://notexample.com/mcp", "com.example/server")),
        ErrorCode::NamespaceMismatch
    );
}

#[test]
fn test_namespace_requires_https() {
    assert!(check_url_matches_namespace("http://example.com/mcp", "com.example/server").is_err());
}

#[test]
fn test_namespace_localhost_exempt() {
    for url in [
        "https://localhost:8080/mcp",
        "https://app.localhost/mcp",
        "https://127.0.0.1:3000/mcp",
    ] {
        assert!(check_url_matches_namespace(url, "com.example/server").is_ok(), "{}", url);
    }
}

#[test]
fn test_namespace_format() {
    assert_eq!(extract_publisher_domain("com.example/x").as_deref(), Some("example.com"));
    assert_eq!(
        extract_publisher_domain("io.github.user/x").as_deref(),
        Some("user.github.io")
    );
    assert_eq!(extract_publisher_domain("example/x"), None);
    assert_eq!(
        code_of(check_url_matches_namespace("https://example.com", "example/server")),
        ErrorCode::InvalidNamespaceFormat
    );
}

#[test]
fn test_namespace_mixed_case() {
    assert_eq!(extract_publisher_domain("com.Example/x").as_deref(), Some("example.com"));
    assert!(check_url_matches_namespace("https://Example.com/mcp", "com.Example/server").is_ok());
    assert!(check_url_matches_namespace("https://api.EXAMPLE.com/mcp", "COM.example/server").is_ok());

    let mut server = manifest();
    server.name = "com.Example/weather".into();
    server.remotes[0].url = "https://mcp.Example.com/weather".into();
    server.website_url = "https://docs.example.com/weather".into();
    assert!(validate_server_json(&server).is_ok());
}

#[test]
fn test_remote_and_website_namespace_in_manifest() {
    let mut server = manifest();
    server.remotes[0].url = "https://evil.com/mcp".into();
    let issue = validate_server_json(&server).unwrap_err();
    assert_eq!(issue.code, ErrorCode::NamespaceMismatch);
    assert_eq!(issue.location, "remotes[0].url");

    let mut server = manifest();
    server.website_url = "https://evil.com".into();
    let issue = validate_server_json(&server).unwrap_err();
    assert_eq!(issue.code, ErrorCode::NamespaceMismatch);
    assert_eq!(issue.location, "websiteUrl");
}

#[test]
fn test_insecure_remote_rejected() {
    let mut server = manifest();
    server.remotes[0].url = "http://example.com/mcp".into();
    assert_eq!(code_of(validate_server_json(&server)), ErrorCode::TransportInvalidUrl);
}

// -- package transports --

#[test]
fn test_stdio_with_url_fails() {
    let transport = Transport::new("stdio", "https://example.com");
    assert_eq!(
        code_of(validate_package_transport(&transport, &[])),
        ErrorCode::TransportInvalidUrl
    );
}

#[test]
fn test_http_without_url_fails() {
    let transport = Transport::new("streamable-http", "");
    assert_eq!(
        code_of(validate_package_transport(&transport, &[])),
        ErrorCode::TransportUrlRequired
    );
}

#[test]
fn test_unknown_transport_type() {
    let transport = Transport::new("websocket", "wss://example.com");
    assert_eq!(
        code_of(validate_package_transport(&transport, &[])),
        ErrorCode::TransportUnsupportedType
    );
}

#[test]
fn test_template_variable_from_argument() {
    let mut package = http_package("https://example.com/{port}");
    assert_eq!(
        code_of(validate_package(&package, 0)),
        ErrorCode::UndefinedTemplateVariable
    );

    package.package_arguments.push(Argument::named("port"));
    assert!(validate_package(&package, 0).is_ok());
}

#[test]
fn test_template_variable_from_value_hint_and_env() {
    let mut package = http_package("http://localhost:{port}/mcp/{tenant}");
    package.runtime_arguments.push(Argument::positional("port"));
    package.environment_variables.push(KeyValueInput {
        name: "tenant".into(),
        ..Default::default()
    });
    assert!(validate_package(&package, 0).is_ok());
}

#[test]
fn test_undefined_template_lists_available() {
    let mut package = http_package("https://example.com/{missing}");
    package.environment_variables.push(KeyValueInput {
        name: "API_KEY".into(),
        ..Default::default()
    });
    let issue = validate_package(&package, 3).unwrap_err();
    assert_eq!(issue.code, ErrorCode::UndefinedTemplateVariable);
    assert_eq!(issue.location, "packages[3].transport.url");
    assert!(issue.details.contains("API_KEY"));
    assert!(issue.details.contains("missing"));
}

#[test]
fn test_malformed_package_url() {
    let package = http_package("not a url");
    assert_eq!(code_of(validate_package(&package, 0)), ErrorCode::TransportInvalidUrl);
}

// -- remotes --

#[test]
fn test_remote_transport_rules() {
    assert!(validate_remote_transport(&Transport::new("sse", "https://example.com/sse"), 0).is_ok());
    assert_eq!(
        code_of(validate_remote_transport(&Transport::new("stdio", ""), 0)),
        ErrorCode::TransportUnsupportedType
    );
    assert_eq!(
        code_of(validate_remote_transport(&Transport::new("sse", ""), 0)),
        ErrorCode::TransportUrlRequired
    );
    assert_eq!(
        code_of(validate_remote_transport(
            &Transport::new("streamable-http", "https://example.com/{tenant}"),
            0
        )),
        ErrorCode::TransportInvalidUrl
    );
    assert_eq!(
        code_of(validate_remote_transport(
            &Transport::new("streamable-http", "https://localhost/mcp"),
            1
        )),
        ErrorCode::TransportInvalidUrl
    );
    assert!(!is_valid_remote_url("https://127.0.0.1/mcp"));
}

// -- arguments --

#[test]
fn test_value_starts_with_name() {
    let mut arg = Argument::named("--port");
    arg.value = "--port 8080".into();
    assert_eq!(code_of(validate_argument(&arg)), ErrorCode::ArgumentValueStartsWithName);

    arg.value = "8080".into();
    assert!(validate_argument(&arg).is_ok());

    arg.default = "--port=3000".into();
    let issue = validate_argument(&arg).unwrap_err();
    assert_eq!(issue.code, ErrorCode::ArgumentValueStartsWithName);
    assert_eq!(issue.location, "default");
}

#[test]
fn test_named_argument_name_rules() {
    assert!(validate_named_argument_name("--directory").is_ok());
    assert!(validate_named_argument_name("-v").is_ok());
    assert_eq!(
        code_of(validate_named_argument_name("")),
        ErrorCode::ArgumentNameRequired
    );
    for name in ["--directory <path>", "--port 8080", "$PORT", "<flag>"] {
        assert_eq!(
            code_of(validate_named_argument_name(name)),
            ErrorCode::ArgumentInvalidCharacters,
            "{}",
            name
        );
    }
}

#[test]
fn test_positional_arguments_skip_name_checks() {
    let mut arg = Argument::positional("path");
    arg.value = "path/to/dir".into();
    assert!(validate_argument(&arg).is_ok());
}

#[test]
fn test_argument_location_in_manifest() {
    let mut server = manifest();
    server.packages[0].package_arguments[0].name = "--units <unit>".into();
    let issue = validate_server_json(&server).unwrap_err();
    assert_eq!(issue.code, ErrorCode::ArgumentInvalidCharacters);
    assert_eq!(issue.location, "packages[0].packageArguments[0].name");
}

#[test]
fn test_identifier_with_spaces() {
    let mut server = manifest();
    server.packages[0].identifier = "@example/ weather".into();
    assert_eq!(
        code_of(validate_server_json(&server)),
        ErrorCode::PackageIdentifierHasSpaces
    );
}

// -- publish --

struct RejectAll;

#[async_trait]
impl PackageOwnershipValidator for RejectAll {
    async fn validate_package(&self, package: &Package, server_name: &str) -> anyhow::Result<()> {
        anyhow::bail!(
            "package {} does not declare mcpName {}",
            package.identifier,
            server_name
        )
    }
}

#[tokio::test]
async fn test_publish_extension_too_large() {
    let mut server = manifest();
    server.meta = Some(crate::model::ServerMeta {
        publisher_provided: Some(json!({ "blob": "x".repeat(5000) })),
    });
    let issue = validate_publish_request(&server, &Config::default(), &NoopOwnershipValidator)
        .await
        .unwrap_err();
    assert_eq!(issue.code, ErrorCode::ExtensionTooLarge);

    server.meta = Some(crate::model::ServerMeta {
        publisher_provided: Some(json!({ "tool": "my-publisher", "build": 42 })),
    });
    assert!(
        validate_publish_request(&server, &Config::default(), &NoopOwnershipValidator)
            .await
            .is_ok()
    );
}

#[tokio::test]
async fn test_publish_extension_checked_before_manifest() {
    let mut server = manifest();
    server.name.clear();
    server.meta = Some(crate::model::ServerMeta {
        publisher_provided: Some(json!("y".repeat(4096))),
    });
    let issue = validate_publish_request(&server, &Config::default(), &NoopOwnershipValidator)
        .await
        .unwrap_err();
    assert_eq!(issue.code, ErrorCode::ExtensionTooLarge);
}

#[tokio::test]
async fn test_publish_ownership() {
    let server = manifest();

    let issue = validate_publish_request(&server, &Config::default(), &RejectAll)
        .await
        .unwrap_err();
    assert_eq!(issue.code, ErrorCode::RegistryOwnershipViolation);
    assert!(issue.details.contains("@example/weather"));

    let config = Config {
        enable_registry_validation: false,
        ..Config::default()
    };
    assert!(validate_publish_request(&server, &config, &RejectAll).await.is_ok());
}
