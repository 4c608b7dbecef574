//! `mcp-registry` library.

pub mod commands;
pub mod config;
pub mod constants;
pub mod error;
pub mod handlers;
pub mod importer;
pub mod model;
pub mod service;
pub mod styles;
pub mod validate;
pub mod vars;

//--------------------------------------------------------------------------------------------------
// Re-Exports
//--------------------------------------------------------------------------------------------------

pub use commands::*;
pub use config::*;
pub use constants::*;
pub use error::*;
pub use importer::*;
pub use model::*;
pub use service::*;
pub use validate::*;
pub use vars::*;
