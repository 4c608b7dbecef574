//! Import and seed command handlers.

use crate::config::Config;
use crate::constants::SEED_FROM_ENV;
use crate::error::{RegistryError, RegistryResult};
use crate::importer::{ImportReport, Importer, RecordFailure};
use crate::service::{MemoryRegistryService, RegistryService};
use colored::Colorize;
use std::sync::Arc;
use std::time::Duration;
use tokio_util::sync::CancellationToken;

//--------------------------------------------------------------------------------------------------
// Functions
//--------------------------------------------------------------------------------------------------

/// Import manifests from `source` into an in-memory registry.
pub async fn import_source(
    source: String,
    timeout: Option<u64>,
    max_pages: Option<usize>,
    json_output: bool,
) -> RegistryResult<()> {
    let mut config = Config::from_env()?;
    if let Some(secs) = timeout {
        config.seed_timeout = Duration::from_secs(secs);
    }
    if let Some(pages) = max_pages {
        config.max_pages = pages;
    }

    run_import(&source, &config, json_output).await
}

/// Import from the configured seed source.
pub async fn seed(json_output: bool) -> RegistryResult<()> {
    let config = Config::from_env()?;
    if config.seed_from.is_empty() {
        return Err(RegistryError::Config(format!(
            "{} is not set; nothing to seed",
            SEED_FROM_ENV
        )));
    }

    let source = config.seed_from.clone();
    run_import(&source, &config, json_output).await
}

async fn run_import(source: &str, config: &Config, json_output: bool) -> RegistryResult<()> {
    let store: Arc<dyn RegistryService> = Arc::new(MemoryRegistryService::new());
    let cancel = CancellationToken::new();
    let importer = Importer::new(store, config)?.with_cancellation(cancel.clone());

    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            cancel.cancel();
        }
    });

    let (report, result) = match importer.import(source).await {
        Ok(report) => (report, Ok(())),
        Err(RegistryError::ImportIncomplete(report)) => {
            (report.clone(), Err(RegistryError::ImportIncomplete(report)))
        }
        Err(e) => return Err(e),
    };

    if json_output {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        output_report(&report);
    }

    result
}

/// Print an import report.
fn output_report(report: &ImportReport) {
    println!("  Imported from {}\n", report.source.bold());

    for name in &report.created {
        println!("  {} {}", "✓".bright_green(), name);
    }
    for record in &report.invalid {
        print_failure(record, "invalid".bright_yellow().to_string());
    }
    for record in &report.failed {
        print_failure(record, "failed".bright_red().to_string());
    }

    println!();
    println!(
        "  {} created, {} invalid, {} failed ({} total)",
        report.created.len().to_string().bright_green(),
        report.invalid.len().to_string().bright_yellow(),
        report.failed.len().to_string().bright_red(),
        report.total
    );
}

fn print_failure(record: &RecordFailure, label: String) {
    let name = if record.name.is_empty() {
        "(unnamed)"
    } else {
        record.name.as_str()
    };
    println!("  {} {} [{}]", "✗".bright_red(), name, label);
    println!("      {} {}", "└─".dimmed(), record.reason.dimmed());
}
