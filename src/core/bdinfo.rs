//! BDInfo report comparison.
//!
//! Compares the stream lines of our technical report against the report of
//! a release already on the tracker, so the operator can judge whether the
//! upload is a duplicate.

use crate::models::report::{Advisory, DiffEntry, DiffPrefix, DiffReport, TrackLine};
use crate::utils::diff::{diff_lines, LineOp};
use regex::Regex;

/// Extract normalized stream lines from a report, in report order.
///
/// Bracketed spans such as `[Language Flag]` markup are removed first.
/// Spans never cross a line, so a stray `[` only affects its own line.
pub fn track_lines(report: &str) -> Vec<TrackLine> {
    let stripped = match Regex::new(r"\[[^\]\n]*\]") {
        Ok(re) => re.replace_all(report, "").to_string(),
        Err(_) => report.to_string(),
    };

    stripped.lines().filter_map(TrackLine::parse).collect()
}

/// Compare our report with a duplicate release's report.
///
/// Lines only in `mine_report_text` are `Removed`, lines only in
/// `other_report_text` are `Added`. Entries are ordered video, audio,
/// subtitle and alphabetically within each kind.
pub fn diff_tracks(
    mine_report_text: &str,
    other_report_text: &str,
    other_release_label: &str,
) -> DiffReport {
    let mine = track_lines(mine_report_text);
    let other = track_lines(other_report_text);
    let mine: Vec<&str> = mine.iter().map(TrackLine::as_str).collect();
    let other: Vec<&str> = other.iter().map(TrackLine::as_str).collect();

    tracing::debug!(
        "Comparing {} track lines against {} from {}",
        mine.len(),
        other.len(),
        other_release_label
    );

    let mut entries: Vec<DiffEntry> = diff_lines(&mine, &other)
        .into_iter()
        .map(|op| match op {
            LineOp::Left(content) => (DiffPrefix::Removed, content),
            LineOp::Right(content) => (DiffPrefix::Added, content),
            LineOp::Both(content) => (DiffPrefix::Match, content),
        })
        .filter(|(_, content)| !content.trim().is_empty())
        .map(|(prefix, content)| DiffEntry {
            prefix,
            content: content.to_string(),
        })
        .collect();

    // Stable: equal keys keep alignment order.
    entries.sort_by_cached_key(DiffEntry::sort_key);

    let advisory = if other_report_text.trim().is_empty() {
        Some(Advisory::MissingReport)
    } else if !entries.iter().any(DiffEntry::is_change) {
        Some(Advisory::NoDifferences)
    } else {
        None
    };

    if let Some(advisory) = advisory {
        tracing::debug!("{}", advisory.message(other_release_label));
    }

    DiffReport {
        label: other_release_label.to_string(),
        entries,
        advisory,
    }
}
