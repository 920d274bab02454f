//! Name command implementation.

use super::print_json;
use crate::core::identity::extract_identity;
use crate::generators::{synthesize_name, SynthesizedName};
use crate::models::config::OutputFormat;
use crate::models::release::{load_metadata, ReleaseMetadata};
use crate::Result;
use colored::Colorize;
use std::path::Path;

/// Load a metadata file, taking a missing title or year from the release name.
///
/// The identity is only extracted when `title` or `year` is empty and a
/// file or folder name was given; fields already set are never replaced.
pub fn prepare_metadata(
    metadata_path: &Path,
    filename: Option<&str>,
    folder: Option<&str>,
    debug: bool,
) -> Result<ReleaseMetadata> {
    let mut meta = load_metadata(metadata_path)?;

    let incomplete = meta.title.trim().is_empty() || meta.year.trim().is_empty();
    if incomplete && (filename.is_some() || folder.is_some()) {
        let identity =
            extract_identity(filename.unwrap_or(""), folder.unwrap_or(""), debug);
        if identity.is_empty() {
            tracing::warn!("No identity found in the release name, enter title and year manually");
        } else {
            tracing::debug!("Filling metadata from {}", identity);
            meta.fill_identity(&identity);
        }
    }

    Ok(meta)
}

/// Build and print the release name for a metadata file.
pub fn name(
    metadata_path: &Path,
    filename: Option<&str>,
    folder: Option<&str>,
    debug: bool,
    format: OutputFormat,
) -> Result<()> {
    let meta = prepare_metadata(metadata_path, filename, folder, debug)?;

    let name = match synthesize_name(&meta) {
        Ok(name) => name,
        Err(e) => {
            if e.needs_respecify() {
                eprintln!("{}", e.to_string().red());
                eprintln!(
                    "{}",
                    "Re-run with corrected --category, --type or --source values".yellow()
                );
            }
            return Err(e);
        }
    };

    match format {
        OutputFormat::Json => print_json(&name)?,
        OutputFormat::Text => print_name(&name),
    }

    Ok(())
}

fn print_name(name: &SynthesizedName) {
    println!("{:<12} {}", "Name:".bold(), name.name_with_tag.cyan());
    println!("{:<12} {}", "Without tag:".bold(), name.name_without_tag);
    println!("{:<12} {}", "File name:".bold(), name.filesystem_safe);

    if !name.potential_missing.is_empty() {
        println!();
        println!(
            "{} {}",
            "Check:".yellow(),
            name.potential_missing.join(", ")
        );
    }
}
