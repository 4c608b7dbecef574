//! Server manifest type definitions.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

//--------------------------------------------------------------------------------------------------
// Types
//--------------------------------------------------------------------------------------------------

/// A published server manifest (`server.json`).
///
/// Deserialization is deliberately lenient: enum-like fields stay as strings so
/// that an unknown value surfaces as a validation failure for this one record
/// instead of a decode failure for the whole batch.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServerJson {
    /// Schema URL identifying the manifest schema version.
    #[serde(rename = "$schema", default)]
    pub schema: String,

    /// Reverse-DNS namespaced server name, `namespace/name`.
    #[serde(default)]
    pub name: String,

    /// Human-readable description.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,

    /// Specific version of this server.
    #[serde(default)]
    pub version: String,

    /// Optional display title.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub title: String,

    /// Homepage or documentation URL.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub website_url: String,

    /// Source repository.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repository: Option<Repository>,

    /// Icons for display.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub icons: Vec<Icon>,

    /// Installable packages.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub packages: Vec<Package>,

    /// Hosted remote endpoints.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub remotes: Vec<Transport>,

    /// Extension metadata.
    #[serde(rename = "_meta", default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<ServerMeta>,
}

/// Extension metadata attached to a manifest.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ServerMeta {
    /// Opaque publisher-controlled data, size-bounded at publish time.
    #[serde(
        rename = "io.modelcontextprotocol.registry/publisher-provided",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub publisher_provided: Option<serde_json::Value>,
}

/// Source repository reference.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Repository {
    /// Repository URL.
    #[serde(default)]
    pub url: String,

    /// Hosting service kind (e.g., `github`).
    #[serde(default)]
    pub source: String,

    /// Host-specific repository identifier.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub id: String,

    /// Relative path to the server inside a monorepo.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub subfolder: String,
}

/// Display icon.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Icon {
    /// Absolute HTTPS URL of the image.
    #[serde(default)]
    pub src: String,

    /// MIME type of the image.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mime_type: Option<String>,

    /// Sizes the image is suitable for (e.g., `48x48`).
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sizes: Vec<String>,

    /// Intended UI theme (`light` or `dark`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme: Option<String>,
}

/// An installable package distribution of a server.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Package {
    /// Package registry kind (e.g., `npm`, `pypi`, `oci`).
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub registry_type: String,

    /// Base URL of the package registry.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub registry_base_url: String,

    /// Package identifier within its registry.
    #[serde(default)]
    pub identifier: String,

    /// Package version.
    #[serde(default)]
    pub version: String,

    /// SHA-256 of the package file, for file-based registries.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub file_sha256: String,

    /// Runtime used to launch the package (e.g., `npx`, `uvx`).
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub runtime_hint: String,

    /// How clients talk to the running package.
    #[serde(default)]
    pub transport: Transport,

    /// Arguments passed to the runtime.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub runtime_arguments: Vec<Argument>,

    /// Arguments passed to the package.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub package_arguments: Vec<Argument>,

    /// Environment variables the package reads.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub environment_variables: Vec<KeyValueInput>,
}

/// Transport configuration for a package or a remote.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Transport {
    /// Transport type (`stdio`, `streamable-http`, `sse`).
    #[serde(rename = "type", default)]
    pub transport_type: String,

    /// Endpoint URL; empty for stdio.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub url: String,

    /// HTTP headers sent to the endpoint.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub headers: Vec<KeyValueInput>,
}

/// Known transport types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransportType {
    /// Standard input/output.
    Stdio,
    /// Streamable HTTP.
    StreamableHttp,
    /// Server-sent events.
    Sse,
}

/// A runtime or package argument.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Argument {
    /// Argument type (`named` or `positional`).
    #[serde(rename = "type", default)]
    pub argument_type: String,

    /// Flag name for named arguments (e.g., `--port`).
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,

    /// Placeholder hint for the value, usable as a template variable.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub value_hint: String,

    /// Fixed value.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub value: String,

    /// Default value.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub default: String,

    /// Human-readable description.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,

    /// Whether the argument must be supplied.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub is_required: bool,

    /// Whether the argument may be repeated.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub is_repeated: bool,

    /// Whether the value is secret.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub is_secret: bool,

    /// Allowed values.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub choices: Vec<String>,
}

/// Known argument types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArgumentType {
    /// `--flag value` style argument.
    Named,
    /// Bare positional argument.
    Positional,
}

/// A named input such as an environment variable or header.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeyValueInput {
    /// Variable or header name.
    #[serde(default)]
    pub name: String,

    /// Human-readable description.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,

    /// Fixed value.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub value: String,

    /// Default value.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub default: String,

    /// Whether the input must be supplied.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub is_required: bool,

    /// Whether the value is secret.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub is_secret: bool,
}

/// A manifest together with registry-assigned metadata, as served by a catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerResponse {
    /// The manifest as published.
    pub server: ServerJson,

    /// Registry metadata.
    #[serde(rename = "_meta", default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<serde_json::Value>,
}

/// One page of a paginated catalog listing.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ServerListResponse {
    /// Entries on this page.
    #[serde(default)]
    pub servers: Vec<ServerResponse>,

    /// Pagination metadata.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<ListMetadata>,
}

/// Pagination metadata of a catalog page.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListMetadata {
    /// Opaque cursor for the next page; absent or empty on the last page.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_cursor: Option<String>,

    /// Number of entries on this page.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub count: Option<usize>,
}

//--------------------------------------------------------------------------------------------------
// Methods
//--------------------------------------------------------------------------------------------------

impl ServerJson {
    /// The publisher-provided extension payload, if any.
    pub fn publisher_provided(&self) -> Option<&serde_json::Value> {
        self.meta.as_ref().and_then(|m| m.publisher_provided.as_ref())
    }
}

impl Transport {
    /// Create a transport of the given type and URL.
    pub fn new(transport_type: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            transport_type: transport_type.into(),
            url: url.into(),
            headers: Vec::new(),
        }
    }

    /// The parsed transport type, if known.
    pub fn kind(&self) -> Option<TransportType> {
        self.transport_type.parse().ok()
    }
}

impl TransportType {
    /// Whether this transport reaches the server over the network.
    pub fn is_network(&self) -> bool {
        matches!(self, TransportType::StreamableHttp | TransportType::Sse)
    }
}

impl Argument {
    /// Create a named argument.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            argument_type: "named".into(),
            name: name.into(),
            ..Default::default()
        }
    }

    /// Create a positional argument with a value hint.
    pub fn positional(value_hint: impl Into<String>) -> Self {
        Self {
            argument_type: "positional".into(),
            value_hint: value_hint.into(),
            ..Default::default()
        }
    }

    /// The parsed argument type, if known.
    pub fn kind(&self) -> Option<ArgumentType> {
        match self.argument_type.as_str() {
            "named" => Some(ArgumentType::Named),
            "positional" => Some(ArgumentType::Positional),
            _ => None,
        }
    }
}

//--------------------------------------------------------------------------------------------------
// Trait Implementations
//--------------------------------------------------------------------------------------------------

impl FromStr for TransportType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "stdio" => Ok(TransportType::Stdio),
            "streamable-http" => Ok(TransportType::StreamableHttp),
            "sse" => Ok(TransportType::Sse),
            other => Err(format!("unknown transport type: {}", other)),
        }
    }
}

impl fmt::Display for TransportType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransportType::Stdio => write!(f, "stdio"),
            TransportType::StreamableHttp => write!(f, "streamable-http"),
            TransportType::Sse => write!(f, "sse"),
        }
    }
}
