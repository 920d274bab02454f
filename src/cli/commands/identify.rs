//! Identify command implementation.

use super::print_json;
use crate::core::identity::extract_identity;
use crate::models::config::OutputFormat;
use crate::models::identity::IdentityCandidate;
use crate::Result;
use colored::Colorize;

/// Extract and print the identity of a single release name.
pub fn identify(filename: &str, folder: &str, debug: bool, format: OutputFormat) -> Result<()> {
    let identity = extract_identity(filename, folder, debug);

    match format {
        OutputFormat::Json => print_json(&identity)?,
        OutputFormat::Text => print_identity(&identity),
    }

    Ok(())
}

fn print_identity(identity: &IdentityCandidate) {
    if identity.is_empty() {
        println!(
            "{}",
            "⚠ Could not extract a title or year, please enter them manually".yellow()
        );
        return;
    }

    let missing = || "-".dimmed().to_string();
    println!(
        "{:<10} {}",
        "Title:".bold(),
        identity
            .primary_title
            .as_deref()
            .map(|t| t.cyan().to_string())
            .unwrap_or_else(missing)
    );
    println!(
        "{:<10} {}",
        "AKA:".bold(),
        identity.secondary_title.clone().unwrap_or_else(missing)
    );
    println!(
        "{:<10} {}",
        "Year:".bold(),
        identity.year.clone().unwrap_or_else(missing)
    );
}
