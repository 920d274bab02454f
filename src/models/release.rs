//! Release metadata models.

use crate::{Error, Result};
use serde::{Deserialize, Deserializer, Serialize};
use std::path::Path;

/// Release category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Category {
    Movie,
    Tv,
}

impl Category {
    /// Parse a category value (case-insensitive).
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_uppercase().as_str() {
            "MOVIE" => Some(Category::Movie),
            "TV" => Some(Category::Tv),
            _ => None,
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Category::Movie => write!(f, "MOVIE"),
            Category::Tv => write!(f, "TV"),
        }
    }
}

/// Release type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ReleaseType {
    Disc,
    Remux,
    Encode,
    WebDl,
    WebRip,
    Hdtv,
    DvdRip,
}

impl ReleaseType {
    /// Parse a release type value (case-insensitive).
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_uppercase().as_str() {
            "DISC" => Some(ReleaseType::Disc),
            "REMUX" => Some(ReleaseType::Remux),
            "ENCODE" => Some(ReleaseType::Encode),
            "WEBDL" => Some(ReleaseType::WebDl),
            "WEBRIP" => Some(ReleaseType::WebRip),
            "HDTV" => Some(ReleaseType::Hdtv),
            "DVDRIP" => Some(ReleaseType::DvdRip),
            _ => None,
        }
    }
}

impl std::fmt::Display for ReleaseType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            ReleaseType::Disc => "DISC",
            ReleaseType::Remux => "REMUX",
            ReleaseType::Encode => "ENCODE",
            ReleaseType::WebDl => "WEBDL",
            ReleaseType::WebRip => "WEBRIP",
            ReleaseType::Hdtv => "HDTV",
            ReleaseType::DvdRip => "DVDRIP",
        };
        write!(f, "{}", s)
    }
}

/// Disc structure of a full-disc release.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiscType {
    Bdmv,
    Dvd,
    HdDvd,
}

impl DiscType {
    /// Parse the `is_disc` value. Empty or unknown values are not a disc.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            "BDMV" => Some(DiscType::Bdmv),
            "DVD" => Some(DiscType::Dvd),
            "HDDVD" => Some(DiscType::HdDvd),
            _ => None,
        }
    }
}

/// Source family used to pick the remux template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFamily {
    /// BluRay or HDDVD.
    BluRay,
    /// PAL DVD, NTSC DVD or plain DVD.
    Dvd,
}

impl SourceFamily {
    pub fn of(source: &str) -> Option<Self> {
        match source.trim() {
            "BluRay" | "HDDVD" => Some(SourceFamily::BluRay),
            "PAL DVD" | "NTSC DVD" | "DVD" => Some(SourceFamily::Dvd),
            _ => None,
        }
    }
}

/// Structured release metadata supplied by the calling pipeline.
///
/// Every field is optional in the input mapping and defaults to empty.
/// `category` and `type` are kept as raw strings so unknown values reach the
/// name synthesizer, which reports them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReleaseMetadata {
    /// `MOVIE` or `TV`.
    pub category: String,
    /// `DISC`, `REMUX`, `ENCODE`, `WEBDL`, `WEBRIP`, `HDTV` or `DVDRIP`.
    #[serde(rename = "type")]
    pub release_type: String,
    pub source: String,
    pub title: String,
    /// Alternative title.
    pub aka: String,
    #[serde(deserialize_with = "string_or_number")]
    pub year: String,
    /// Operator-supplied year, used when positive.
    #[serde(deserialize_with = "optional_integer")]
    pub manual_year: Option<i64>,
    pub resolution: String,
    pub audio: String,
    pub service: String,
    pub season: String,
    pub episode: String,
    pub part: String,
    pub repack: String,
    #[serde(rename = "3D", alias = "is_3d")]
    pub three_d: String,
    /// Release group tag including its leading separator, e.g. `-GROUP`.
    pub tag: String,
    pub uhd: String,
    pub hdr: String,
    /// Hybrid web/disc source flag.
    pub webdv: bool,
    pub manual_episode_title: String,
    pub daily_episode_title: String,
    /// `BDMV`, `DVD`, `HDDVD` or empty.
    pub is_disc: String,
    pub video_codec: String,
    pub video_encode: String,
    pub region: String,
    pub dvd_size: String,
    pub edition: String,
    /// Air date for daily shows; blanks year, season and episode for TV.
    pub manual_date: Option<String>,
    /// Year used in the metadata search. When present but empty, TV names omit the year.
    #[serde(deserialize_with = "optional_string_or_number")]
    pub search_year: Option<String>,
    pub no_season: bool,
    pub no_year: bool,
    pub no_aka: bool,
    /// Log the synthesis inputs.
    pub debug: bool,
}

impl ReleaseMetadata {
    pub fn category(&self) -> Option<Category> {
        Category::parse(&self.category)
    }

    pub fn release_type(&self) -> Option<ReleaseType> {
        ReleaseType::parse(&self.release_type)
    }

    pub fn disc_type(&self) -> Option<DiscType> {
        DiscType::parse(&self.is_disc)
    }

    pub fn source_family(&self) -> Option<SourceFamily> {
        SourceFamily::of(&self.source)
    }

    /// Fill `title`/`year` from an extracted identity when they are still empty.
    pub fn fill_identity(&mut self, identity: &super::identity::IdentityCandidate) {
        if self.title.trim().is_empty() {
            if let Some(ref title) = identity.primary_title {
                self.title = title.clone();
            }
        }
        if self.aka.trim().is_empty() {
            if let Some(ref secondary) = identity.secondary_title {
                self.aka = format!("AKA {}", secondary);
            }
        }
        if self.year.trim().is_empty() {
            if let Some(ref year) = identity.year {
                self.year = year.clone();
            }
        }
    }
}

/// Load release metadata from a JSON file.
pub fn load_metadata(path: &Path) -> Result<ReleaseMetadata> {
    if !path.exists() {
        return Err(Error::PathNotFound(path.display().to_string()));
    }
    let content = std::fs::read_to_string(path)?;
    serde_json::from_str(&content)
        .map_err(|e| Error::InvalidMetadata(format!("{}: {}", path.display(), e)))
}

#[derive(Deserialize)]
#[serde(untagged)]
enum StringOrNumber {
    String(String),
    Number(i64),
}

impl From<StringOrNumber> for String {
    fn from(value: StringOrNumber) -> Self {
        match value {
            StringOrNumber::String(s) => s,
            StringOrNumber::Number(n) => n.to_string(),
        }
    }
}

fn string_or_number<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<StringOrNumber>::deserialize(deserializer)?
        .map(String::from)
        .unwrap_or_default())
}

fn optional_string_or_number<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<StringOrNumber>::deserialize(deserializer)?.map(String::from))
}

fn optional_integer<'de, D>(deserializer: D) -> std::result::Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<StringOrNumber>::deserialize(deserializer)? {
        None => Ok(None),
        Some(StringOrNumber::Number(n)) => Ok(Some(n)),
        Some(StringOrNumber::String(s)) if s.trim().is_empty() => Ok(None),
        Some(StringOrNumber::String(s)) => s
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| serde::de::Error::custom(format!("invalid integer: {:?}", s))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::identity::IdentityCandidate;

    #[test]
    fn test_parse_category_and_type() {
        assert_eq!(Category::parse("movie"), Some(Category::Movie));
        assert_eq!(Category::parse("TV"), Some(Category::Tv));
        assert_eq!(Category::parse("MUSIC"), None);
        assert_eq!(ReleaseType::parse("webdl"), Some(ReleaseType::WebDl));
        assert_eq!(ReleaseType::parse("BOGUS"), None);
        assert_eq!(ReleaseType::DvdRip.to_string(), "DVDRIP");
    }

    #[test]
    fn test_source_family() {
        assert_eq!(SourceFamily::of("BluRay"), Some(SourceFamily::BluRay));
        assert_eq!(SourceFamily::of("HDDVD"), Some(SourceFamily::BluRay));
        assert_eq!(SourceFamily::of("NTSC DVD"), Some(SourceFamily::Dvd));
        assert_eq!(SourceFamily::of("Web"), None);
    }

    #[test]
    fn test_deserialize_mapping() {
        let json = r#"{
            "category": "MOVIE",
            "type": "ENCODE",
            "title": "Heat",
            "year": 1995,
            "3D": "3D",
            "search_year": "",
            "unknown_field": "ignored"
        }"#;
        let meta: ReleaseMetadata = serde_json::from_str(json).unwrap();
        assert_eq!(meta.year, "1995");
        assert_eq!(meta.three_d, "3D");
        assert_eq!(meta.search_year.as_deref(), Some(""));
        assert_eq!(meta.release_type(), Some(ReleaseType::Encode));
        assert!(meta.manual_year.is_none());
        assert!(!meta.webdv);
    }

    #[test]
    fn test_manual_year_string_or_number() {
        let parse = |json: &str| serde_json::from_str::<ReleaseMetadata>(json);
        assert_eq!(parse(r#"{"manual_year": "0"}"#).unwrap().manual_year, Some(0));
        assert_eq!(parse(r#"{"manual_year": -1}"#).unwrap().manual_year, Some(-1));
        assert_eq!(parse(r#"{"manual_year": " 1996 "}"#).unwrap().manual_year, Some(1996));
        assert_eq!(parse(r#"{"manual_year": ""}"#).unwrap().manual_year, None);
        assert_eq!(parse(r#"{"manual_year": null}"#).unwrap().manual_year, None);
        assert!(parse(r#"{"manual_year": "soon"}"#).is_err());
    }

    #[test]
    fn test_fill_identity_only_empty_fields() {
        let mut meta = ReleaseMetadata {
            year: "2001".to_string(),
            ..Default::default()
        };
        let identity = IdentityCandidate {
            primary_title: Some("Amelie".to_string()),
            secondary_title: Some("Le Fabuleux Destin".to_string()),
            year: Some("2002".to_string()),
        };
        meta.fill_identity(&identity);
        assert_eq!(meta.title, "Amelie");
        assert_eq!(meta.aka, "AKA Le Fabuleux Destin");
        assert_eq!(meta.year, "2001");
    }
}
