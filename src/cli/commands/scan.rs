//! Scan command implementation.

use super::print_json;
use crate::core::scanner;
use crate::models::config::OutputFormat;
use crate::Result;
use colored::Colorize;
use std::path::Path;

/// Scan a directory and print the identity of every release found.
pub fn scan(path: &Path, debug: bool, format: OutputFormat) -> Result<()> {
    let result = scanner::scan_releases(path, debug)?;

    if format == OutputFormat::Json {
        return print_json(&result);
    }

    println!("{}", format!("📁 Scanning {}", path.display()).bold().cyan());
    println!();

    if result.releases.is_empty() {
        println!("No media files found.");
        return Ok(());
    }

    for release in &result.releases {
        let name = release
            .path
            .strip_prefix(path)
            .unwrap_or(&release.path)
            .display()
            .to_string();
        if release.identity.is_empty() {
            println!("{}  {}", name, "(unidentified)".yellow());
        } else {
            println!("{}  {}", name, release.identity.to_string().green());
        }
    }

    let unidentified = result.unidentified().count();
    println!();
    println!(
        "{} releases, {} unidentified, {} extras skipped",
        result.releases.len(),
        if unidentified > 0 {
            unidentified.to_string().yellow().to_string()
        } else {
            unidentified.to_string()
        },
        result.skipped
    );

    Ok(())
}
