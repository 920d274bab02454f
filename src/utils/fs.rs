//! File system utilities.

use crate::Result;
use std::path::{Path, PathBuf};

/// Extensions recognised as media files.
const MEDIA_EXTENSIONS: &[&str] = &[
    "mkv", "mp4", "avi", "mov", "wmv", "m4v", "ts", "m2ts", "flv", "webm", "mpg", "mpeg", "iso",
    "vob",
];

/// Summary file written for a standard BDInfo scan.
pub const BD_SUMMARY_FILE: &str = "BD_SUMMARY_00.txt";

/// Summary file written for an extended BDInfo scan.
pub const BD_SUMMARY_EXT_FILE: &str = "BD_SUMMARY_EXT_00.txt";

/// Check if a path exists and is a directory.
pub fn ensure_directory(path: &Path) -> Result<()> {
    if !path.exists() {
        return Err(crate::Error::PathNotFound(path.display().to_string()));
    }
    if !path.is_dir() {
        return Err(crate::Error::NotADirectory(path.display().to_string()));
    }
    Ok(())
}

/// Get file extension in lowercase.
pub fn get_extension(path: &Path) -> Option<String> {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase())
}

/// Check if a file is a media file based on extension.
pub fn is_media_file(path: &Path) -> bool {
    get_extension(path)
        .map(|ext| MEDIA_EXTENSIONS.contains(&ext.as_str()))
        .unwrap_or(false)
}

/// Final path component with a media extension removed.
///
/// Release names are full of dots, so only known media extensions are
/// treated as extensions.
pub fn release_stem(name: &str) -> String {
    let path = Path::new(name);
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| name.to_string());

    if is_media_file(Path::new(&file_name)) {
        if let Some(stem) = Path::new(&file_name).file_stem() {
            return stem.to_string_lossy().to_string();
        }
    }
    file_name
}

/// Read a text file, treating a missing file as empty text.
pub fn read_text_or_empty(path: &Path) -> Result<String> {
    if !path.exists() {
        tracing::debug!("{} not found, using empty text", path.display());
        return Ok(String::new());
    }
    Ok(std::fs::read_to_string(path)?)
}

/// Whether a report is an extended (playlist) BDInfo report.
pub fn is_extended_report(report: &str) -> bool {
    report.contains("PLAYLIST REPORT:") || report.contains("DISC INFO:")
}

/// Pick the local summary matching the kind of the duplicate's report.
pub fn local_summary_path(summary_dir: &Path, other_report: &str) -> PathBuf {
    if is_extended_report(other_report) {
        summary_dir.join(BD_SUMMARY_EXT_FILE)
    } else {
        summary_dir.join(BD_SUMMARY_FILE)
    }
}
