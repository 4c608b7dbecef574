//! Validation error codes.

use serde::Serialize;
use std::fmt;

//--------------------------------------------------------------------------------------------------
// Types
//--------------------------------------------------------------------------------------------------

/// Validation error codes.
///
/// Every code rejects the manifest; validation stops at the first one raised.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ErrorCode {
    /// E001: `$schema` is missing.
    #[serde(rename = "E001")]
    SchemaMissing,

    /// E002: `$schema` references an unsupported schema version.
    #[serde(rename = "E002")]
    SchemaUnsupported,

    /// E003: `name` is missing.
    #[serde(rename = "E003")]
    NameRequired,

    /// E004: `name` contains more than one `/`.
    #[serde(rename = "E004")]
    NameMultipleSlashes,

    /// E005: `name` is not `namespace/name` with valid parts.
    #[serde(rename = "E005")]
    NameMalformed,

    /// E006: version is the reserved string `latest`.
    #[serde(rename = "E006")]
    VersionReserved,

    /// E007: version looks like a range or wildcard rather than a specific version.
    #[serde(rename = "E007")]
    VersionLooksLikeRange,

    /// E008: repository URL does not match its declared source.
    #[serde(rename = "E008")]
    RepositoryInvalidUrl,

    /// E009: repository subfolder is not a safe relative path.
    #[serde(rename = "E009")]
    RepositoryInvalidSubfolder,

    /// E010: `websiteUrl` is not an absolute HTTPS URL.
    #[serde(rename = "E010")]
    WebsiteUrlInvalid,

    /// E011: `title` is present but only whitespace.
    #[serde(rename = "E011")]
    TitleBlank,

    /// E012: icon `src` is not an absolute HTTPS URL.
    #[serde(rename = "E012")]
    IconInvalid,

    /// E013: package identifier contains whitespace.
    #[serde(rename = "E013")]
    PackageIdentifierHasSpaces,

    /// E014: named argument has no name.
    #[serde(rename = "E014")]
    ArgumentNameRequired,

    /// E015: named argument name contains `<`, `>`, space, or `$`.
    #[serde(rename = "E015")]
    ArgumentInvalidCharacters,

    /// E016: argument value or default starts with the argument name.
    #[serde(rename = "E016")]
    ArgumentValueStartsWithName,

    /// E017: transport type is not supported in this position.
    #[serde(rename = "E017")]
    TransportUnsupportedType,

    /// E018: network transport has no URL.
    #[serde(rename = "E018")]
    TransportUrlRequired,

    /// E019: transport URL is malformed or not allowed.
    #[serde(rename = "E019")]
    TransportInvalidUrl,

    /// E020: transport URL references an undefined template variable.
    #[serde(rename = "E020")]
    UndefinedTemplateVariable,

    /// E021: URL host is outside the publisher's namespace domain.
    #[serde(rename = "E021")]
    NamespaceMismatch,

    /// E022: namespace cannot be turned into a domain.
    #[serde(rename = "E022")]
    InvalidNamespaceFormat,

    /// E023: publisher-provided extension exceeds the size limit.
    #[serde(rename = "E023")]
    ExtensionTooLarge,

    /// E024: publisher is not authorized for a declared package.
    #[serde(rename = "E024")]
    RegistryOwnershipViolation,
}

//--------------------------------------------------------------------------------------------------
// Methods
//--------------------------------------------------------------------------------------------------

impl ErrorCode {
    /// Short, lowercase description of the failure class.
    pub fn summary(&self) -> &'static str {
        match self {
            ErrorCode::SchemaMissing => "missing $schema",
            ErrorCode::SchemaUnsupported => "unsupported schema version",
            ErrorCode::NameRequired => "missing server name",
            ErrorCode::NameMultipleSlashes => "server name has multiple slashes",
            ErrorCode::NameMalformed => "invalid server name format",
            ErrorCode::VersionReserved => "reserved version string",
            ErrorCode::VersionLooksLikeRange => "version looks like a range",
            ErrorCode::RepositoryInvalidUrl => "invalid repository URL",
            ErrorCode::RepositoryInvalidSubfolder => "invalid repository subfolder",
            ErrorCode::WebsiteUrlInvalid => "invalid websiteUrl",
            ErrorCode::TitleBlank => "blank title",
            ErrorCode::IconInvalid => "invalid icon",
            ErrorCode::PackageIdentifierHasSpaces => "package identifier has spaces",
            ErrorCode::ArgumentNameRequired => "missing argument name",
            ErrorCode::ArgumentInvalidCharacters => "invalid argument name",
            ErrorCode::ArgumentValueStartsWithName => "argument value starts with name",
            ErrorCode::TransportUnsupportedType => "unsupported transport type",
            ErrorCode::TransportUrlRequired => "missing transport url",
            ErrorCode::TransportInvalidUrl => "invalid transport url",
            ErrorCode::UndefinedTemplateVariable => "undefined template variable",
            ErrorCode::NamespaceMismatch => "url does not match namespace",
            ErrorCode::InvalidNamespaceFormat => "invalid namespace format",
            ErrorCode::ExtensionTooLarge => "publisher extension too large",
            ErrorCode::RegistryOwnershipViolation => "package ownership check failed",
        }
    }
}

//--------------------------------------------------------------------------------------------------
// Trait Implementations
//--------------------------------------------------------------------------------------------------

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let code = match self {
            ErrorCode::SchemaMissing => "E001",
            ErrorCode::SchemaUnsupported => "E002",
            ErrorCode::NameRequired => "E003",
            ErrorCode::NameMultipleSlashes => "E004",
            ErrorCode::NameMalformed => "E005",
            ErrorCode::VersionReserved => "E006",
            ErrorCode::VersionLooksLikeRange => "E007",
            ErrorCode::RepositoryInvalidUrl => "E008",
            ErrorCode::RepositoryInvalidSubfolder => "E009",
            ErrorCode::WebsiteUrlInvalid => "E010",
            ErrorCode::TitleBlank => "E011",
            ErrorCode::IconInvalid => "E012",
            ErrorCode::PackageIdentifierHasSpaces => "E013",
            ErrorCode::ArgumentNameRequired => "E014",
            ErrorCode::ArgumentInvalidCharacters => "E015",
            ErrorCode::ArgumentValueStartsWithName => "E016",
            ErrorCode::TransportUnsupportedType => "E017",
            ErrorCode::TransportUrlRequired => "E018",
            ErrorCode::TransportInvalidUrl => "E019",
            ErrorCode::UndefinedTemplateVariable => "E020",
            ErrorCode::NamespaceMismatch => "E021",
            ErrorCode::InvalidNamespaceFormat => "E022",
            ErrorCode::ExtensionTooLarge => "E023",
            ErrorCode::RegistryOwnershipViolation => "E024",
        };
        write!(f, "{}", code)
    }
}
