//! Command line argument definitions.

use crate::models::config::OutputFormat;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Release Tools - name, identify and compare media releases
#[derive(Parser, Debug)]
#[command(name = "release-tools")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format (defaults to the configured format)
    #[arg(long, global = true, value_enum)]
    pub format: Option<OutputFormat>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Extract title, alternative title and year from a release name
    Identify {
        /// File name or path of the release
        #[arg(value_name = "FILENAME")]
        filename: String,

        /// Release folder name
        #[arg(long, value_name = "NAME", default_value = "")]
        folder: String,

        /// Trace every extraction rule
        #[arg(long)]
        debug: bool,
    },

    /// Extract identities for every media file in a directory
    Scan {
        /// Directory to scan
        #[arg(value_name = "DIR")]
        path: PathBuf,

        /// Trace every extraction rule
        #[arg(long)]
        debug: bool,
    },

    /// Build the release name from a metadata JSON file
    Name {
        /// Path to the metadata JSON file
        #[arg(value_name = "METADATA_JSON")]
        metadata: PathBuf,

        /// Release file name, used when the metadata has no title or year
        #[arg(long, value_name = "FILENAME")]
        filename: Option<String>,

        /// Release folder name, used when the metadata has no title or year
        #[arg(long, value_name = "NAME")]
        folder: Option<String>,

        /// Trace every extraction rule
        #[arg(long)]
        debug: bool,
    },

    /// Compare our BDInfo report with a duplicate release's report
    Compare(CompareArgs),
}

#[derive(Args, Debug)]
#[command(group(
    clap::ArgGroup::new("ours")
        .required(true)
        .args(["mine", "summary_dir"]),
))]
pub struct CompareArgs {
    /// Report of the duplicate release
    #[arg(value_name = "OTHER_REPORT")]
    pub other: PathBuf,

    /// Our report file
    #[arg(long, value_name = "FILE")]
    pub mine: Option<PathBuf>,

    /// Directory holding our BD_SUMMARY files
    #[arg(long, value_name = "DIR")]
    pub summary_dir: Option<PathBuf>,

    /// Display name of the duplicate release
    #[arg(long, value_name = "NAME")]
    pub label: Option<String>,
}
