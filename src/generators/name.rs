//! Release name synthesis.
//!
//! Builds the canonical release name from structured metadata using the
//! template for the release's category, type and source.

use super::templates::{find_template, Field, Segment, Template};
use crate::models::release::{Category, ReleaseMetadata};
use crate::utils::text::collapse_whitespace;
use crate::{Error, Result};
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Characters that are not allowed in file names.
const UNSAFE_CHARS: &[char] = &['<', '>', ':', '"', '/', '\\', '|', '?', '*'];

/// A synthesized release name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SynthesizedName {
    /// Name without the release group tag.
    pub name_without_tag: String,
    /// Name with the release group tag appended.
    pub name_with_tag: String,
    /// `name_with_tag` with unsafe file name characters replaced by `-`.
    pub filesystem_safe: String,
    /// Fields the operator should double-check.
    pub potential_missing: Vec<String>,
}

/// Field values after overrides are applied.
#[derive(Debug, Default)]
struct NameFields {
    title: String,
    aka: String,
    year: String,
    three_d: String,
    edition: String,
    hybrid: String,
    repack: String,
    resolution: String,
    region: String,
    uhd: String,
    source: String,
    hdr: String,
    video_codec: String,
    video_encode: String,
    audio: String,
    dvd_size: String,
    service: String,
    season: String,
    episode: String,
    episode_title: String,
    part: String,
}

impl NameFields {
    fn from_metadata(meta: &ReleaseMetadata, category: Category) -> Self {
        let mut fields = NameFields {
            title: meta.title.clone(),
            aka: meta.aka.clone(),
            year: meta.year.clone(),
            three_d: meta.three_d.clone(),
            edition: strip_hybrid(&meta.edition),
            hybrid: if meta.webdv { "Hybrid".to_string() } else { String::new() },
            repack: meta.repack.clone(),
            resolution: meta.resolution.clone(),
            region: meta.region.clone(),
            uhd: meta.uhd.clone(),
            source: meta.source.clone(),
            hdr: meta.hdr.clone(),
            video_codec: meta.video_codec.clone(),
            video_encode: meta.video_encode.clone(),
            audio: meta.audio.clone(),
            dvd_size: meta.dvd_size.clone(),
            service: meta.service.clone(),
            season: meta.season.clone(),
            episode: meta.episode.clone(),
            episode_title: String::new(),
            part: meta.part.clone(),
        };

        if let Some(year) = meta.manual_year.filter(|y| *y > 0) {
            fields.year = year.to_string();
        }
        if fields.resolution == "OTHER" {
            fields.resolution.clear();
        }

        fields.episode_title = if !meta.manual_episode_title.is_empty() {
            meta.manual_episode_title.clone()
        } else {
            meta.daily_episode_title.clone()
        };

        if category == Category::Tv {
            if meta.search_year.as_deref().is_some_and(|y| y.trim().is_empty()) {
                fields.year.clear();
            }
            if meta.manual_date.as_deref().is_some_and(|d| !d.trim().is_empty()) {
                fields.year.clear();
                fields.season.clear();
                fields.episode.clear();
            }
        }

        if meta.no_season {
            fields.season.clear();
        }
        if meta.no_year {
            fields.year.clear();
        }
        if meta.no_aka {
            fields.aka.clear();
        }

        fields
    }

    fn get(&self, field: Field) -> &str {
        match field {
            Field::Title => &self.title,
            Field::Aka => &self.aka,
            Field::Year => &self.year,
            Field::ThreeD => &self.three_d,
            Field::Edition => &self.edition,
            Field::Hybrid => &self.hybrid,
            Field::Repack => &self.repack,
            Field::Resolution => &self.resolution,
            Field::Region => &self.region,
            Field::Uhd => &self.uhd,
            Field::Source => &self.source,
            Field::Hdr => &self.hdr,
            Field::VideoCodec => &self.video_codec,
            Field::VideoEncode => &self.video_encode,
            Field::Audio => &self.audio,
            Field::DvdSize => &self.dvd_size,
            Field::Service => &self.service,
            Field::Season => &self.season,
            Field::Episode => &self.episode,
            Field::EpisodeTitle => &self.episode_title,
            Field::Part => &self.part,
        }
    }

    fn render(&self, template: &Template) -> String {
        let parts: Vec<String> = template
            .segments
            .iter()
            .map(|segment| match segment {
                Segment::Field(field) => self.get(*field).to_string(),
                Segment::Literal(text) => text.to_string(),
                Segment::Joined(fields) => fields.iter().map(|f| self.get(*f)).collect(),
            })
            .collect();
        collapse_whitespace(&parts.join(" "))
    }
}

/// Remove the word `Hybrid` from an edition; it has its own segment.
fn strip_hybrid(edition: &str) -> String {
    match Regex::new(r"(?i)\bhybrid\b") {
        Ok(re) => collapse_whitespace(&re.replace_all(edition, " ")),
        Err(_) => edition.trim().to_string(),
    }
}

/// Replace characters that are not allowed in file names with `-`.
pub fn sanitize_filename(name: &str) -> String {
    name.chars()
        .map(|c| if UNSAFE_CHARS.contains(&c) { '-' } else { c })
        .collect()
}

/// Synthesize the release name for `meta`.
///
/// Fails with [`Error::NameSynthesis`] when no template exists for the
/// category, type and source. `meta` is never modified.
pub fn synthesize_name(meta: &ReleaseMetadata) -> Result<SynthesizedName> {
    let no_template = || Error::NameSynthesis {
        category: meta.category.clone(),
        release_type: meta.release_type.clone(),
        release_source: meta.source.clone(),
    };

    let category = meta.category().ok_or_else(no_template)?;
    let release_type = meta.release_type().ok_or_else(no_template)?;
    let template = find_template(category, release_type, meta.disc_type(), meta.source_family())
        .ok_or_else(no_template)?;

    let fields = NameFields::from_metadata(meta, category);
    if meta.debug {
        tracing::debug!("Name fields: {:?}", fields);
    }

    let name_without_tag = fields.render(template);
    let name_with_tag = format!("{}{}", name_without_tag, meta.tag);
    let filesystem_safe = sanitize_filename(&name_with_tag);

    tracing::debug!("Synthesized name: {}", name_with_tag);

    Ok(SynthesizedName {
        name_without_tag,
        name_with_tag,
        filesystem_safe,
        potential_missing: template
            .potential_missing
            .iter()
            .map(|s| s.to_string())
            .collect(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn meta(category: &str, release_type: &str) -> ReleaseMetadata {
        ReleaseMetadata {
            category: category.to_string(),
            release_type: release_type.to_string(),
            title: "Heat".to_string(),
            year: "1995".to_string(),
            resolution: "1080p".to_string(),
            source: "BluRay".to_string(),
            audio: "DTS-HD MA 5.1".to_string(),
            video_codec: "AVC".to_string(),
            video_encode: "x264".to_string(),
            tag: "-GRP".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_movie_encode() {
        let name = synthesize_name(&meta("MOVIE", "ENCODE")).unwrap();
        assert_eq!(name.name_without_tag, "Heat 1995 1080p BluRay DTS-HD MA 5.1 x264");
        assert_eq!(name.name_with_tag, "Heat 1995 1080p BluRay DTS-HD MA 5.1 x264-GRP");
        assert_eq!(name.potential_missing, vec!["edition", "description"]);
    }

    #[test]
    fn test_movie_bluray_remux() {
        let mut m = meta("MOVIE", "REMUX");
        m.hdr = "HDR".to_string();
        m.uhd = "UHD".to_string();
        m.resolution = "2160p".to_string();
        m.video_codec = "HEVC".to_string();
        let name = synthesize_name(&m).unwrap();
        assert_eq!(
            name.name_without_tag,
            "Heat 1995 2160p UHD BluRay REMUX HDR HEVC DTS-HD MA 5.1"
        );
    }

    #[test]
    fn test_tv_webdl_episode() {
        let mut m = meta("TV", "WEBDL");
        m.title = "Some Show".to_string();
        m.year = String::new();
        m.season = "S01".to_string();
        m.episode = "E02".to_string();
        m.service = "NF".to_string();
        m.audio = "DD+ 5.1".to_string();
        m.video_encode = "H.264".to_string();
        m.manual_episode_title = "Pilot".to_string();
        m.daily_episode_title = "Ignored".to_string();
        let name = synthesize_name(&m).unwrap();
        assert_eq!(
            name.name_with_tag,
            "Some Show S01E02 Pilot 1080p NF WEB-DL DD+ 5.1 H.264-GRP"
        );
    }

    #[test]
    fn test_tv_manual_date_blanks_numbering() {
        let mut m = meta("TV", "HDTV");
        m.season = "S01".to_string();
        m.episode = "E02".to_string();
        m.manual_date = Some("2024-03-14".to_string());
        m.daily_episode_title = "2024-03-14".to_string();
        let name = synthesize_name(&m).unwrap();
        assert_eq!(name.name_without_tag, "Heat 2024-03-14 1080p BluRay DTS-HD MA 5.1 x264");
    }

    #[test]
    fn test_tv_empty_search_year_blanks_year() {
        let mut m = meta("TV", "ENCODE");
        m.season = "S02".to_string();
        m.search_year = Some(String::new());
        let name = synthesize_name(&m).unwrap();
        assert!(name.name_without_tag.starts_with("Heat S02 "));

        // Movies ignore it
        let mut m = meta("MOVIE", "ENCODE");
        m.search_year = Some(String::new());
        assert!(synthesize_name(&m).unwrap().name_without_tag.starts_with("Heat 1995 "));
    }

    #[test]
    fn test_overrides() {
        let mut m = meta("TV", "ENCODE");
        m.aka = "AKA Other".to_string();
        m.season = "S01".to_string();
        m.episode = "E01".to_string();
        m.no_season = true;
        m.no_year = true;
        m.no_aka = true;
        let name = synthesize_name(&m).unwrap();
        assert_eq!(name.name_without_tag, "Heat E01 1080p BluRay DTS-HD MA 5.1 x264");
    }

    #[test]
    fn test_no_season_keeps_episode() {
        let m = ReleaseMetadata {
            category: "TV".to_string(),
            release_type: "ENCODE".to_string(),
            title: "Show".to_string(),
            source: "BluRay".to_string(),
            season: "S01".to_string(),
            episode: "E05".to_string(),
            no_season: true,
            ..Default::default()
        };
        let name = synthesize_name(&m).unwrap();
        assert_eq!(name.name_without_tag, "Show E05 BluRay");
    }

    #[test]
    fn test_manual_year_and_other_resolution() {
        let mut m = meta("MOVIE", "ENCODE");
        m.manual_year = Some(1996);
        m.resolution = "OTHER".to_string();
        let name = synthesize_name(&m).unwrap();
        assert_eq!(name.name_without_tag, "Heat 1996 BluRay DTS-HD MA 5.1 x264");

        m.manual_year = Some(0);
        assert!(synthesize_name(&m).unwrap().name_without_tag.starts_with("Heat 1995 "));

        m.manual_year = Some(-1);
        assert!(synthesize_name(&m).unwrap().name_without_tag.starts_with("Heat 1995 "));
    }

    #[test]
    fn test_hybrid() {
        let mut m = meta("MOVIE", "ENCODE");
        m.webdv = true;
        m.edition = "Hybrid Extended".to_string();
        let name = synthesize_name(&m).unwrap();
        assert_eq!(
            name.name_without_tag,
            "Heat 1995 Extended Hybrid 1080p BluRay DTS-HD MA 5.1 x264"
        );
    }

    #[test]
    fn test_strip_hybrid() {
        assert_eq!(strip_hybrid("Hybrid"), "");
        assert_eq!(strip_hybrid("Director's Cut HYBRID"), "Director's Cut");
        assert_eq!(strip_hybrid("Hybridized"), "Hybridized");
    }

    #[test]
    fn test_disc_types() {
        let mut m = meta("MOVIE", "DISC");
        m.is_disc = "DVD".to_string();
        m.source = "NTSC DVD".to_string();
        m.dvd_size = "DVD9".to_string();
        m.audio = "DD 5.1".to_string();
        let name = synthesize_name(&m).unwrap();
        assert_eq!(name.name_without_tag, "Heat 1995 NTSC DVD DVD9 DD 5.1");
        assert_eq!(name.potential_missing, vec!["edition", "distributor"]);

        m.is_disc = String::new();
        assert!(synthesize_name(&m).is_err());
    }

    #[test]
    fn test_tv_dvd_disc_joins_three_d() {
        let mut m = meta("TV", "DISC");
        m.is_disc = "DVD".to_string();
        m.source = "PAL DVD".to_string();
        m.season = "S01".to_string();
        m.three_d = "3D".to_string();
        m.dvd_size = "DVD5".to_string();
        m.audio = "DD 2.0".to_string();
        let name = synthesize_name(&m).unwrap();
        assert_eq!(name.name_without_tag, "Heat S013D PAL DVD DVD5 DD 2.0");
    }

    #[test]
    fn test_filesystem_safe() {
        let mut m = meta("MOVIE", "WEBRIP");
        m.title = "Mission: Impossible".to_string();
        m.service = "AMZN".to_string();
        let name = synthesize_name(&m).unwrap();
        assert!(name.name_with_tag.contains("Mission: Impossible"));
        assert!(name.filesystem_safe.starts_with("Mission- Impossible 1995"));
        assert_eq!(sanitize_filename(r#"a<b>c:d"e/f\g|h?i*j"#), "a-b-c-d-e-f-g-h-i-j");
    }

    #[test]
    fn test_unknown_type_fails_without_mutation() {
        let m = meta("MOVIE", "BOGUS");
        let before = m.clone();
        let err = synthesize_name(&m).unwrap_err();
        assert!(err.needs_respecify());
        assert!(err.to_string().contains("BOGUS"));
        assert_eq!(m, before);
    }

    #[test]
    fn test_names_are_normalized() {
        for category in ["MOVIE", "TV"] {
            for release_type in ["DISC", "REMUX", "ENCODE", "WEBDL", "WEBRIP", "HDTV", "DVDRIP"] {
                let mut m = meta(category, release_type);
                m.is_disc = "BDMV".to_string();
                m.repack = " ".to_string();
                let first = synthesize_name(&m).unwrap();
                let second = synthesize_name(&m).unwrap();
                assert_eq!(first, second);
                assert!(!first.name_without_tag.contains("  "));
                assert_eq!(first.name_without_tag.trim(), first.name_without_tag);
                assert!(first.name_with_tag.ends_with("-GRP"));
            }
        }
    }
}
