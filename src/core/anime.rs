//! Anime release name parsing.
//!
//! Fansub releases such as `[SubsPlease] Show Name - 05 (1080p) [ABCD1234].mkv`
//! do not follow scene conventions, so they get their own two-stage parse:
//! a generic guess that strips tags and technical info, then an anime-specific
//! pass that drops the release group and episode designators.

use crate::utils::fs::release_stem;
use crate::utils::text::{collapse_whitespace, trim_separators};
use regex::Regex;
use std::sync::LazyLock;

/// Bracketed, parenthesized and braced tags.
static TAGS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [r"\[[^\]]*\]", r"\([^)]*\)", r"\{[^}]*\}"]
        .iter()
        .filter_map(|p| Regex::new(p).ok())
        .collect()
});

/// Technical tokens that end the title part of a name.
static TECHNICAL: LazyLock<Option<Regex>> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\b(?:\d{3,4}[pi]|4k|x26[45]|h\.?26[45]|hevc|avc|web-?dl|webrip|bluray|bdrip|aac|flac|opus|10bit|8bit|multi-?subs?)\b",
    )
    .ok()
});

/// Episode designators, tried in order; the title ends where the first one starts.
static EPISODE_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        // Show - S02E05
        r"(?i)(?:^|\s+)-\s+S\d{1,2}E\d{1,4}",
        // Show - 05, Show - 05v2, Show - 05.5
        r"(?:^|\s+)-\s+\d{1,4}(?:\.\d)?(?:v\d)?(?:\s|$)",
        // Show S02E05
        r"(?i)\s+S\d{1,2}E\d{1,4}\b",
        // Show E05, Show EP05, Show Episode 5
        r"(?i)\s+(?:E|EP|Episode)\s*\d{1,4}(?:v\d)?\b",
    ]
    .iter()
    .filter_map(|p| Regex::new(p).ok())
    .collect()
});

/// Guess the title part of a media file or folder name.
///
/// Drops the extension, every bracketed or parenthesized tag and anything
/// from the first technical token onwards.
pub fn guess_title(name: &str) -> Option<String> {
    let mut work = release_stem(name);

    for re in TAGS.iter() {
        work = re.replace_all(&work, " ").to_string();
    }

    work = work.replace('_', " ");
    if !work.contains(' ') {
        work = work.replace('.', " ");
    }

    if let Some(ref re) = *TECHNICAL {
        if let Some(m) = re.find(&work) {
            work.truncate(m.start());
        }
    }

    let guess = collapse_whitespace(trim_separators(&collapse_whitespace(&work)));
    if guess.is_empty() {
        None
    } else {
        Some(guess)
    }
}

/// Extract the anime title from a guessed title.
pub fn parse_anime_title(guess: &str) -> Option<String> {
    let mut work = collapse_whitespace(guess);

    if let Ok(re) = Regex::new(r"^\[[^\]]+\]\s*") {
        work = re.replace(&work, "").to_string();
    }

    for re in EPISODE_PATTERNS.iter() {
        if let Some(m) = re.find(&work) {
            work.truncate(m.start());
            break;
        }
    }

    let title = collapse_whitespace(trim_separators(&work));
    if title.is_empty() {
        None
    } else {
        Some(title)
    }
}
