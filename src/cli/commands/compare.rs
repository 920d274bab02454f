//! Compare command implementation.
//!
//! Diffs our BDInfo report against a duplicate release's report.

use super::print_json;
use crate::cli::args::CompareArgs;
use crate::core::bdinfo::diff_tracks;
use crate::models::config::{OutputConfig, OutputFormat};
use crate::models::report::{DiffPrefix, DiffReport};
use crate::utils::fs::{local_summary_path, read_text_or_empty};
use crate::Result;
use colored::Colorize;
use std::path::PathBuf;

/// Compare reports and print the result.
pub fn compare(args: &CompareArgs, output: &OutputConfig, format: OutputFormat) -> Result<()> {
    let other = read_text_or_empty(&args.other)?;

    let mine_path: PathBuf = match (&args.mine, &args.summary_dir) {
        (Some(mine), _) => mine.clone(),
        (None, Some(dir)) => local_summary_path(dir, &other),
        (None, None) => return Err(crate::Error::other("No report of ours given")),
    };
    tracing::debug!("Using our report {}", mine_path.display());
    let mine = read_text_or_empty(&mine_path)?;

    let label = args.label.clone().unwrap_or_else(|| {
        args.other
            .file_stem()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_default()
    });

    let report = diff_tracks(&mine, &other, &label);

    match format {
        OutputFormat::Json => print_json(&report)?,
        OutputFormat::Text => print_report(&report, output.show_matches),
    }

    Ok(())
}

fn print_report(report: &DiffReport, show_matches: bool) {
    println!("{}", format!("Comparing with {}", report.label).bold().cyan());
    println!();

    for entry in &report.entries {
        match entry.prefix {
            DiffPrefix::Removed => {
                println!("{}", format!("[-] YOURS: {}", entry.content).red());
            }
            DiffPrefix::Added => {
                println!("{}", format!("[+] DUPLICATE: {}", entry.content).green());
            }
            DiffPrefix::Match if show_matches => {
                println!("{}", format!("[ ] MATCH: {}", entry.content).white());
            }
            DiffPrefix::Match => {}
        }
    }

    if report.advisory.is_some() {
        println!();
        println!("{}", report.advisory_message().yellow());
    } else {
        println!();
        println!(
            "{} removed, {} added",
            report.count(DiffPrefix::Removed),
            report.count(DiffPrefix::Added)
        );
    }
}
