//! CLI command definitions.

use crate::styles::styles;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

//--------------------------------------------------------------------------------------------------
// Constants
//--------------------------------------------------------------------------------------------------

const VALIDATE_EXAMPLES: &str = "\
Examples:
  registry validate server.json              Validate a single manifest
  registry validate data/seed.json           Validate every manifest in a seed file
  registry validate server.json --publish    Apply publish-time checks too
  registry validate server.json --json       JSON output for parsing";

const IMPORT_EXAMPLES: &str = "\
Examples:
  registry import data/seed.json                             Import a local seed file
  registry import https://example.com/seed.json              Import a remote seed file
  registry import https://registry.example.com/v0/servers    Import a paginated catalog
  registry import embedded                                   Import the built-in seed
  registry import <catalog> --max-pages 10 --timeout 30      Bound a catalog import";

const SEED_EXAMPLES: &str = "\
Examples:
  MCP_REGISTRY_SEED_FROM=embedded registry seed
  MCP_REGISTRY_SEED_FROM=https://registry.example.com/v0/servers registry seed";

const CLI_EXAMPLES: &str = "\
Examples:
  registry validate server.json              Check a manifest before publishing
  registry import data/seed.json             Load manifests into a registry
  registry seed                              Seed from MCP_REGISTRY_SEED_FROM";

//--------------------------------------------------------------------------------------------------
// Types
//--------------------------------------------------------------------------------------------------

/// MCP Registry - Validate and import MCP server manifests.
#[derive(Debug, Parser)]
#[command(name = "registry", author, version, styles=styles())]
#[command(about = "Validate and import MCP server manifests", after_help = CLI_EXAMPLES)]
pub struct Cli {
    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Validate a server.json manifest or a seed file of manifests.
    #[command(after_help = VALIDATE_EXAMPLES)]
    Validate {
        /// Path to a manifest or a JSON array of manifests.
        file: PathBuf,

        /// Run publish-time checks (extension size, package ownership).
        #[arg(long)]
        publish: bool,

        /// Output as JSON.
        #[arg(long)]
        json: bool,

        /// Show only failures, no details.
        #[arg(short, long)]
        quiet: bool,
    },

    /// Import manifests from a file, URL, or catalog.
    #[command(after_help = IMPORT_EXAMPLES)]
    Import {
        /// Local path, seed file URL, catalog URL, or `embedded`.
        source: String,

        /// Overall deadline in seconds.
        #[arg(long, value_name = "SECS")]
        timeout: Option<u64>,

        /// Maximum catalog pages to fetch.
        #[arg(long, value_name = "N")]
        max_pages: Option<usize>,

        /// Output the report as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Import from the source configured in MCP_REGISTRY_SEED_FROM.
    #[command(after_help = SEED_EXAMPLES)]
    Seed {
        /// Output the report as JSON.
        #[arg(long)]
        json: bool,
    },
}

//--------------------------------------------------------------------------------------------------
// Tests
//--------------------------------------------------------------------------------------------------
