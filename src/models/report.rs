//! Technical report comparison models.

use serde::{Deserialize, Serialize};

/// Marker the report format uses for a stream bitrate.
pub const BITRATE_MARKER: &str = "kbps";

/// Stream kind of a track line, in report order (video, audio, subtitle).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrackKind {
    Video = 0,
    Audio = 1,
    Subtitle = 2,
}

impl TrackKind {
    /// Classify a track line by its content.
    pub fn classify(content: &str) -> Self {
        let lower = content.to_lowercase();
        if lower.contains("fps") {
            TrackKind::Video
        } else if lower.contains("subtitle") || lower.contains("presentation graphics") {
            TrackKind::Subtitle
        } else {
            TrackKind::Audio
        }
    }

    pub fn priority(self) -> u8 {
        self as u8
    }
}

/// A normalized stream line from a BDInfo-style report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackLine(String);

impl TrackLine {
    /// Normalize a raw report line; `None` unless it carries a bitrate.
    pub fn parse(line: &str) -> Option<Self> {
        if !line.contains(BITRATE_MARKER) {
            return None;
        }
        let normalized = line.split_whitespace().collect::<Vec<_>>().join(" ");
        if normalized.is_empty() {
            None
        } else {
            Some(TrackLine(normalized))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn kind(&self) -> TrackKind {
        TrackKind::classify(&self.0)
    }
}

/// Side of the comparison a line belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiffPrefix {
    /// Only in our report.
    Removed,
    /// Only in the duplicate's report.
    Added,
    /// In both reports.
    Match,
}

/// One classified line of the comparison.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffEntry {
    pub prefix: DiffPrefix,
    pub content: String,
}

impl DiffEntry {
    pub fn kind(&self) -> TrackKind {
        TrackKind::classify(&self.content)
    }

    /// Sort key: stream kind, then lowercased content.
    pub fn sort_key(&self) -> (u8, String) {
        (self.kind().priority(), self.content.to_lowercase())
    }

    pub fn is_change(&self) -> bool {
        self.prefix != DiffPrefix::Match
    }
}

/// Advisory shown when the comparison has nothing to show the operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Advisory {
    /// The duplicate release has no technical report.
    MissingReport,
    /// Both reports list the same tracks.
    NoDifferences,
}

impl Advisory {
    pub fn message(&self, label: &str) -> String {
        match self {
            Advisory::MissingReport => format!(
                "Warning for dupe {}: no technical report found for duplicate release",
                label
            ),
            Advisory::NoDifferences => format!(
                "Warning for dupe {}: no differences found between your report and the duplicate release's report",
                label
            ),
        }
    }
}

/// Result of comparing our report with a duplicate's report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffReport {
    /// Display label of the duplicate release.
    pub label: String,
    /// Classified lines, video then audio then subtitles.
    pub entries: Vec<DiffEntry>,
    pub advisory: Option<Advisory>,
}

impl DiffReport {
    pub fn count(&self, prefix: DiffPrefix) -> usize {
        self.entries.iter().filter(|e| e.prefix == prefix).count()
    }

    pub fn has_changes(&self) -> bool {
        self.entries.iter().any(DiffEntry::is_change)
    }

    /// Advisory text, empty when differences were found.
    pub fn advisory_message(&self) -> String {
        self.advisory
            .map(|a| a.message(&self.label))
            .unwrap_or_default()
    }
}
