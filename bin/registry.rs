//! `registry` is the primary CLI binary.

use clap::Parser;
use colored::Colorize;
use mcp_registry::handlers;
use mcp_registry::{Cli, Command, RegistryError, RegistryResult};
use tracing_subscriber::EnvFilter;

//--------------------------------------------------------------------------------------------------
// Functions
//--------------------------------------------------------------------------------------------------

#[tokio::main]
async fn main() {
    init_tracing();

    if let Err(e) = run().await {
        print_error(&e);
        std::process::exit(1);
    }
}

/// Print an error with appropriate formatting based on error type.
fn print_error(e: &RegistryError) {
    println!();
    match e {
        RegistryError::SourceUnreachable {
            source_locator,
            reason,
        } => {
            println!("  {} Import source unreachable", "error".bright_red().bold());
            println!();
            println!("    {}: {}", "Source".dimmed(), source_locator.bright_white());
            println!("    {}: {}", "Reason".dimmed(), reason);
        }
        RegistryError::DecodeFailure {
            source_locator,
            reason,
        } => {
            println!("  {} Could not decode seed data", "error".bright_red().bold());
            println!();
            println!("    {}: {}", "Source".dimmed(), source_locator.bright_white());
            println!("    {}: {}", "Reason".dimmed(), reason);
            println!();
            println!(
                "    {}: seed files must be a JSON array of server.json manifests",
                "hint".bright_blue().bold()
            );
        }
        RegistryError::PaginationLimit {
            source_locator,
            reason,
        } => {
            println!("  {} Catalog pagination aborted", "error".bright_red().bold());
            println!();
            println!("    {}: {}", "Source".dimmed(), source_locator.bright_white());
            println!("    {}: {}", "Reason".dimmed(), reason);
            println!();
            println!(
                "    {}: raise the limit with {}",
                "hint".bright_blue().bold(),
                "--max-pages".bright_white()
            );
        }
        RegistryError::ImportIncomplete(report) => {
            println!(
                "  {} Failed to import {} of {} servers",
                "error".bright_red().bold(),
                report.failed.len(),
                report.total
            );
            println!();
            for record in &report.failed {
                println!("    {} → {}", record.name.bright_white(), record.reason);
            }
        }
        RegistryError::Config(msg) => {
            println!("  {} Invalid configuration", "error".bright_red().bold());
            println!();
            println!("    {}", msg);
        }
        _ => {
            let msg = e.to_string();
            match msg.split_once(": ") {
                Some((prefix, rest)) if prefix.ends_with("error") => {
                    println!(
                        "  {} {}",
                        format!("error[{}]", prefix.to_lowercase().replace(" error", ""))
                            .bright_red()
                            .bold(),
                        rest.dimmed()
                    );
                }
                _ => println!("  {} {}", "error".bright_red().bold(), msg),
            }
        }
    }
    println!();
}

/// Initialize tracing from RUST_LOG, defaulting to `info`.
fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .init();
}

async fn run() -> RegistryResult<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Validate {
            file,
            publish,
            json,
            quiet,
        } => handlers::validate_file(file, publish, json, quiet).await,
        Command::Import {
            source,
            timeout,
            max_pages,
            json,
        } => handlers::import_source(source, timeout, max_pages, json).await,
        Command::Seed { json } => handlers::seed(json).await,
    }
}
