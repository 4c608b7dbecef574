//! Server manifest types and the schema-version gate.

mod schema;
mod types;

//--------------------------------------------------------------------------------------------------
// Re-Exports
//--------------------------------------------------------------------------------------------------

pub use schema::is_supported_schema_version;
pub use types::{
    Argument, ArgumentType, Icon, KeyValueInput, ListMetadata, Package, Repository, ServerJson,
    ServerListResponse, ServerMeta, ServerResponse, Transport, TransportType,
};
