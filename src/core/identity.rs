//! Identity extraction from release names.
//!
//! Recovers a `(title, secondary title, year)` triple from folder and file
//! names produced by many different naming conventions. Rules are tried in
//! a fixed order and the first one that produces a candidate wins:
//!
//! 1. **AKA**: `Title.AKA.Other.Title.2014...`
//! 2. **Leading year**: names starting with a year (`2012.2009.1080p...`)
//! 3. **SubsPlease**: fansub anime names
//! 4. **Positional markers**: title is everything before the first
//!    technical marker (year, date, resolution, season, source)
//! 5. **Year fallback**: any standalone year in the file name
//!
//! Extraction never fails; missing signals degrade to `None` fields.

use super::anime;
use crate::models::identity::IdentityCandidate;
use crate::utils::fs::release_stem;
use crate::utils::text::{
    collapse_whitespace, dots_to_spaces, first_year, is_year, remove_token, standalone_years,
    trim_separators, trim_trailing_separators,
};
use chrono::NaiveDate;
use regex::Regex;

/// Tokens removed from the title region, in order.
const TITLE_NOISE: &[&str] = &[
    "Director's Cut",
    "Directors Cut",
    "Extended Cut",
    "Extended Edition",
    "Theatrical Cut",
    "Unrated",
    "Remastered",
    "BluRay",
    "Blu-Ray",
    "BDRip",
    "BRRip",
    "WEB-DL",
    "WEBDL",
    "WEBRip",
    "HDTV",
    "HDRip",
    "DVDRip",
    "DVD",
    "REMUX",
    "UHD",
    "NTSC",
    "PAL",
    "R1",
    "R2",
    "R3",
    "R4",
    "R5",
    "R6",
];

/// Release type and source vocabulary that ends a title.
const RELEASE_MARKER_PATTERN: &str = r"(?i)\b(?:WEB-?DL|WEB-?Rip|Blu-?Ray|BDRip|BRRip|REMUX|HDRip|DVDRip|DVD[59]?|BD25|BD50|BD66|BD100|HD-?DVD|HDTV|UHD|HDR10|HDR|DOVI|REPACK|Season)(?:[\s._\-]|$)";

/// State shared between rules during one extraction.
struct ExtractionContext<'a> {
    /// Base file name without directory or media extension.
    base: String,
    /// Fallback folder or collection name.
    folder: &'a str,
    debug: bool,
    /// Year a name started with, when the leading-year rule did not finish.
    leading_year: Option<String>,
    /// Base name after the leading year.
    remainder: Option<String>,
}

impl ExtractionContext<'_> {
    fn trace(&self, rule: &str, message: std::fmt::Arguments<'_>) {
        if self.debug {
            tracing::debug!("[{}] {}", rule, message);
        }
    }
}

type Rule = fn(&mut ExtractionContext<'_>) -> Option<IdentityCandidate>;

/// Extraction rules in priority order.
const RULES: &[(&str, Rule)] = &[
    ("aka", aka_rule),
    ("leading-year", leading_year_rule),
    ("subsplease", subsplease_rule),
    ("positional", positional_rule),
    ("year-fallback", year_fallback_rule),
];

/// Extract a best-effort identity from a release file name.
///
/// `base_filename` may be a path; only its last component is used and a
/// known media extension is dropped. `fallback_folder_name` is the release
/// folder (or collection) name used by the positional rules. With `debug`
/// set, every rule logs what it saw.
pub fn extract_identity(
    base_filename: &str,
    fallback_folder_name: &str,
    debug: bool,
) -> IdentityCandidate {
    let mut ctx = ExtractionContext {
        base: release_stem(base_filename),
        folder: fallback_folder_name,
        debug,
        leading_year: None,
        remainder: None,
    };

    for (name, rule) in RULES {
        if let Some(candidate) = rule(&mut ctx) {
            ctx.trace(name, format_args!("matched: {:?}", candidate));
            return candidate;
        }
    }

    IdentityCandidate::default()
}

fn non_empty(s: String) -> Option<String> {
    if s.is_empty() {
        None
    } else {
        Some(s)
    }
}

/// Convert a raw title fragment to display form.
fn clean_title(s: &str) -> Option<String> {
    non_empty(collapse_whitespace(trim_separators(&dots_to_spaces(s))))
}

fn aka_rule(ctx: &mut ExtractionContext<'_>) -> Option<IdentityCandidate> {
    let re = Regex::new(r"(?i)( aka |\.aka\.)").ok()?;
    let m = re.find(&ctx.base)?;

    let primary_part = ctx.base[..m.start()].trim();
    let secondary_part = ctx.base[m.end()..].trim();
    ctx.trace(
        "aka",
        format_args!("primary '{}', secondary '{}'", primary_part, secondary_part),
    );

    let mut year = first_year(primary_part).map(|(_, y)| y.to_string());

    let numeric = Regex::new(r"^(\d+)").ok().and_then(|re| {
        re.captures(secondary_part)
            .and_then(|caps| caps.get(1).map(|n| n.as_str().to_string()))
    });

    let secondary = match numeric {
        Some(number) => number,
        None => {
            let stop = Regex::new(r"\b(?:(?:18|19|20)\d{2}|BluRay|REMUX|\d+p|DTS-HD|AVC)\b")
                .ok()
                .and_then(|re| re.find(secondary_part));
            match stop {
                Some(stop) => {
                    if is_year(stop.as_str()) && year.is_none() {
                        year = Some(stop.as_str().to_string());
                    }
                    secondary_part[..stop.start()].to_string()
                }
                None => secondary_part.to_string(),
            }
        }
    };

    Some(IdentityCandidate::new(
        clean_title(primary_part),
        clean_title(&secondary),
        year,
    ))
}

fn leading_year_rule(ctx: &mut ExtractionContext<'_>) -> Option<IdentityCandidate> {
    let token = ctx.base.get(..4)?;
    let next_is_digit = ctx
        .base
        .get(4..)
        .and_then(|rest| rest.chars().next())
        .is_some_and(|c| c.is_ascii_digit());
    if !is_year(token) || next_is_digit {
        return None;
    }

    let token = token.to_string();
    let rest = ctx.base[4..]
        .trim_start_matches(['.', ' ', '_', '-'])
        .to_string();

    if let Some((_, year)) = first_year(&rest) {
        return Some(IdentityCandidate::new(
            Some(token),
            None,
            Some(year.to_string()),
        ));
    }

    ctx.trace(
        "leading-year",
        format_args!("no second year, continuing with '{}'", rest),
    );
    ctx.leading_year = Some(token);
    ctx.remainder = Some(rest);
    None
}

fn subsplease_rule(ctx: &mut ExtractionContext<'_>) -> Option<IdentityCandidate> {
    if !ctx.folder.to_lowercase().contains("subsplease") {
        return None;
    }

    let guess = anime::guess_title(ctx.folder)?;
    ctx.trace("subsplease", format_args!("guessed '{}'", guess));
    let title = anime::parse_anime_title(&guess)?;
    Some(IdentityCandidate::new(Some(title), None, None))
}

/// A marker that can end the title region.
#[derive(Debug, Clone, Copy)]
struct Marker {
    kind: &'static str,
    start: usize,
}

/// Collapse `YYYY.YYYY` to its first year, returning the second year.
fn collapse_double_year(source: &str) -> Option<(String, String)> {
    let years = standalone_years(source);
    for pair in years.windows(2) {
        let (first_start, _) = pair[0];
        let (second_start, second) = pair[1];
        let first_end = first_start + 4;
        if second_start == first_end + 1 && &source[first_end..second_start] == "." {
            let collapsed = format!("{}{}", &source[..first_end], &source[second_start + 4..]);
            return Some((collapsed, second.to_string()));
        }
    }
    None
}

/// First valid `YYYY.MM.DD` date.
fn find_date(s: &str) -> Option<usize> {
    let re = Regex::new(r"\b((?:18|19|20)\d{2})\.(\d{2})\.(\d{2})\b").ok()?;
    let start = re.captures_iter(s).find_map(|caps| {
        let year = caps.get(1)?.as_str().parse().ok()?;
        let month = caps.get(2)?.as_str().parse().ok()?;
        let day = caps.get(3)?.as_str().parse().ok()?;
        NaiveDate::from_ymd_opt(year, month, day)?;
        caps.get(0).map(|m| m.start())
    });
    start
}

fn find_pattern(s: &str, pattern: &str) -> Option<usize> {
    Regex::new(pattern).ok()?.find(s).map(|m| m.start())
}

fn positional_rule(ctx: &mut ExtractionContext<'_>) -> Option<IdentityCandidate> {
    let source = if !ctx.folder.trim().is_empty() {
        release_stem(ctx.folder)
    } else if let Some(ref rest) = ctx.remainder {
        rest.clone()
    } else {
        ctx.base.clone()
    };
    if source.trim().is_empty() {
        return None;
    }

    // A double year keeps its first year as part of the title.
    let (working, double_year) = match collapse_double_year(&source) {
        Some((collapsed, second)) => (collapsed, Some(second)),
        None => (source, None),
    };
    ctx.trace(
        "positional",
        format_args!("working '{}', double year {:?}", working, double_year),
    );

    // Underscores are word characters to the regex engine; scan a copy
    // where they are spaces so markers after them still match.
    let scan = working.replace('_', " ");

    let mut markers = Vec::new();
    let date = find_date(&scan);
    if let Some(start) = date {
        markers.push(Marker { kind: "date", start });
    }

    let mut bare_year = None;
    if date.is_none() && double_year.is_none() {
        if let Some((start, year)) = first_year(&scan) {
            markers.push(Marker { kind: "year", start });
            bare_year = Some(year.to_string());
        }
    }

    let patterns: [(&'static str, &str); 4] = [
        (
            "resolution",
            r"(?i)\b(?:480|576|720|1080|1440|2160|4320)[pi]\b",
        ),
        ("season-episode", r"(?i)\bS\d{1,3}E\d{1,4}"),
        ("season", r"(?i)\bS\d{1,3}\b"),
        ("release", RELEASE_MARKER_PATTERN),
    ];
    for (kind, pattern) in patterns {
        if let Some(start) = find_pattern(&scan, pattern) {
            markers.push(Marker { kind, start });
        }
    }

    let first = markers.iter().min_by_key(|m| m.start).copied();
    let region = match first {
        Some(marker) => {
            ctx.trace(
                "positional",
                format_args!("title ends at {} marker ({})", marker.kind, marker.start),
            );
            &working[..marker.start]
        }
        None => working.as_str(),
    };
    let mut region = trim_trailing_separators(region).to_string();

    // "Title (Other Title 2019..." leaves an unmatched parenthesis.
    let mut secondary = None;
    if let Some(open) = region.rfind('(') {
        if !region[open..].contains(')') {
            secondary = clean_title(&region[open + 1..]);
            region = trim_trailing_separators(&region[..open]).to_string();
        }
    }

    for token in TITLE_NOISE {
        region = remove_token(&region, token);
    }
    let mut title = dots_to_spaces(&region);

    if let Ok(re) = Regex::new(r"\(([^)]*)\)") {
        let inner = re
            .captures(&title)
            .and_then(|caps| caps.get(1).map(|m| m.as_str().to_string()));
        if let Some(inner) = inner {
            if secondary.is_none() {
                secondary = non_empty(collapse_whitespace(&inner));
            }
            title = collapse_whitespace(&re.replace(&title, " "));
        }
    }

    let title = non_empty(collapse_whitespace(trim_separators(&title)))?;
    let year = double_year
        .or(bare_year)
        .or_else(|| ctx.leading_year.clone());

    Some(IdentityCandidate::new(Some(title), secondary, year))
}

fn year_fallback_rule(ctx: &mut ExtractionContext<'_>) -> Option<IdentityCandidate> {
    let year = first_year(&ctx.base).map(|(_, y)| y.to_string());
    ctx.trace("year-fallback", format_args!("year {:?}", year));
    Some(IdentityCandidate::year_only(year))
}
