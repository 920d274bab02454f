//! Release directory scanner.
//!
//! Walks a directory for media files and extracts an identity for each,
//! using the file name and the name of the folder it sits in.

use super::identity::extract_identity;
use crate::models::identity::IdentityCandidate;
use crate::utils::fs::{ensure_directory, is_media_file};
use crate::Result;
use serde::Serialize;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// A media file and the identity extracted from its name.
#[derive(Debug, Clone, Serialize)]
pub struct ScannedRelease {
    pub path: PathBuf,
    /// Name of the containing folder, empty for files in the scan root.
    pub folder: String,
    pub identity: IdentityCandidate,
}

/// Result of scanning a directory.
#[derive(Debug, Default, Serialize)]
pub struct ScanResult {
    /// Releases found, sorted by path.
    pub releases: Vec<ScannedRelease>,
    /// Sample and extras files that were skipped.
    pub skipped: usize,
    /// Total files scanned.
    pub total_files_scanned: usize,
}

impl ScanResult {
    /// Releases whose name yielded nothing.
    pub fn unidentified(&self) -> impl Iterator<Item = &ScannedRelease> {
        self.releases.iter().filter(|r| r.identity.is_empty())
    }
}

/// Directory names whose files are bonus material rather than releases.
const EXTRAS_NAMES: &[&str] = &[
    "extras",
    "extra",
    "featurettes",
    "featurette",
    "sample",
    "samples",
    "bonus",
];

/// Check if a file is a sample or sits in an extras directory.
fn is_extra(path: &Path) -> bool {
    let in_extras_dir = path
        .parent()
        .into_iter()
        .flat_map(|p| p.components())
        .any(|c| match c {
            std::path::Component::Normal(name) => {
                let name = name.to_string_lossy().to_lowercase();
                EXTRAS_NAMES.contains(&name.as_str())
            }
            _ => false,
        });

    let filename = path
        .file_name()
        .map(|n| n.to_string_lossy().to_lowercase())
        .unwrap_or_default();
    let is_sample = filename.contains("sample") && !filename.contains("sampler");

    in_extras_dir || is_sample
}

/// Scan a directory for release files and extract their identities.
pub fn scan_releases(path: &Path, debug: bool) -> Result<ScanResult> {
    ensure_directory(path)?;

    let mut result = ScanResult::default();

    for entry in WalkDir::new(path)
        .follow_links(false)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|e| e.ok())
    {
        if !entry.file_type().is_file() {
            continue;
        }
        result.total_files_scanned += 1;

        let entry_path = entry.path();
        if !is_media_file(entry_path) {
            continue;
        }

        let relative = entry_path.strip_prefix(path).unwrap_or(entry_path);
        if is_extra(relative) {
            tracing::debug!("Skipping extra: {}", entry_path.display());
            result.skipped += 1;
            continue;
        }

        let filename = entry.file_name().to_string_lossy().to_string();
        let folder = entry_path
            .parent()
            .filter(|p| *p != path)
            .and_then(|p| p.file_name())
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();

        let identity = extract_identity(&filename, &folder, debug);
        tracing::debug!("{} -> {}", filename, identity);

        result.releases.push(ScannedRelease {
            path: entry_path.to_path_buf(),
            folder,
            identity,
        });
    }

    tracing::info!(
        "Scanned {} files, {} releases, {} skipped",
        result.total_files_scanned,
        result.releases.len(),
        result.skipped
    );

    Ok(result)
}
