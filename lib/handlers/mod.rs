//! Command handlers.

mod import_cmd;
mod validate_cmd;

//--------------------------------------------------------------------------------------------------
// Re-Exports
//--------------------------------------------------------------------------------------------------

pub use import_cmd::{import_source, seed};
pub use validate_cmd::validate_file;
