//! Manifest validation command handler.

use crate::config::Config;
use crate::error::{RegistryError, RegistryResult};
use crate::model::ServerJson;
use crate::validate::{
    NoopOwnershipValidator, ValidationIssue, validate_publish_request, validate_server_json,
};
use colored::Colorize;
use serde_json::Value;
use std::path::{Path, PathBuf};

//--------------------------------------------------------------------------------------------------
// Types
//--------------------------------------------------------------------------------------------------

/// Validation outcome for one manifest in the file.
struct Checked {
    server: ServerJson,
    issue: Option<ValidationIssue>,
}

//--------------------------------------------------------------------------------------------------
// Functions
//--------------------------------------------------------------------------------------------------

/// Validate a manifest file or a seed array of manifests.
pub async fn validate_file(
    file: PathBuf,
    publish: bool,
    json_output: bool,
    quiet: bool,
) -> RegistryResult<()> {
    let bytes = tokio::fs::read(&file).await?;
    let servers = decode_manifests(&bytes, &file)?;

    let config = Config::from_env()?;
    let mut checked = Vec::with_capacity(servers.len());
    for server in servers {
        let outcome = if publish {
            validate_publish_request(&server, &config, &NoopOwnershipValidator).await
        } else {
            validate_server_json(&server)
        };
        checked.push(Checked {
            server,
            issue: outcome.err(),
        });
    }

    if json_output {
        output_json(&checked)?;
    } else if quiet {
        output_quiet(&checked);
    } else {
        output_full(&checked, &file, publish);
    }

    check_exit_status(&checked);
    Ok(())
}

/// Accept either one manifest object or an array of them.
fn decode_manifests(bytes: &[u8], file: &Path) -> RegistryResult<Vec<ServerJson>> {
    let decode_failure = |e: serde_json::Error| RegistryError::DecodeFailure {
        source_locator: file.display().to_string(),
        reason: e.to_string(),
    };

    let value: Value = serde_json::from_slice(bytes).map_err(decode_failure)?;
    if value.is_array() {
        serde_json::from_value(value).map_err(decode_failure)
    } else {
        serde_json::from_value(value)
            .map(|server| vec![server])
            .map_err(decode_failure)
    }
}

/// Output results as JSON.
fn output_json(checked: &[Checked]) -> RegistryResult<()> {
    let output: Vec<Value> = checked
        .iter()
        .map(|c| {
            serde_json::json!({
                "name": c.server.name,
                "version": c.server.version,
                "valid": c.issue.is_none(),
                "error": c.issue,
            })
        })
        .collect();
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

/// Output failures only.
fn output_quiet(checked: &[Checked]) {
    for (server, issue) in failures(checked) {
        println!(
            "  {} {}: {}: {}",
            format!("error[{}]", issue.code).bright_red(),
            display_name(server),
            issue.message,
            issue.details
        );
    }
}

/// Output every manifest with its outcome.
fn output_full(checked: &[Checked], file: &Path, publish: bool) {
    let mode = if publish {
        "publish".bright_yellow()
    } else {
        "manifest".bright_green()
    };
    println!("  Validating {} ({})\n", file.display().to_string().bold(), mode);

    for c in checked {
        let Some(issue) = &c.issue else {
            println!("  {} {}", "✓".bright_green(), display_name(&c.server));
            continue;
        };

        println!("  {} {}", "✗".bright_red(), display_name(&c.server).bold());
        println!(
            "    {}: → {}",
            format!("error[{}]", issue.code).bright_red().bold(),
            issue.location.bold()
        );
        if let Some(help) = &issue.help {
            println!("        {} {}", "├─".dimmed(), issue.details.dimmed());
            println!(
                "        {} {}: {}",
                "└─".dimmed(),
                "help".bright_green().dimmed(),
                help.dimmed()
            );
        } else {
            println!("        {} {}", "└─".dimmed(), issue.details.dimmed());
        }
    }

    println!();
    let failed = failures(checked).count();
    if failed == 0 {
        println!("  {} {} valid", "✓".bright_green(), plural(checked.len(), "manifest"));
    } else {
        println!(
            "  {} {} of {} invalid",
            "✗".bright_red(),
            failed,
            plural(checked.len(), "manifest")
        );
    }
}

fn failures(checked: &[Checked]) -> impl Iterator<Item = (&ServerJson, &ValidationIssue)> {
    checked
        .iter()
        .filter_map(|c| c.issue.as_ref().map(|issue| (&c.server, issue)))
}

fn display_name(server: &ServerJson) -> String {
    match (server.name.is_empty(), server.version.is_empty()) {
        (true, _) => "(unnamed)".to_string(),
        (false, true) => server.name.clone(),
        (false, false) => format!("{}@{}", server.name, server.version),
    }
}

fn plural(count: usize, noun: &str) -> String {
    if count == 1 {
        format!("1 {}", noun)
    } else {
        format!("{} {}s", count, noun)
    }
}

/// Exit with error status when any manifest failed.
fn check_exit_status(checked: &[Checked]) {
    if failures(checked).next().is_some() {
        std::process::exit(1);
    }
}

//--------------------------------------------------------------------------------------------------
// Tests
//--------------------------------------------------------------------------------------------------
