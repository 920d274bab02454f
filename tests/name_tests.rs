//! Integration tests for release name synthesis.
//!
//! Tests cover:
//! - Metadata JSON loading
//! - Names for common release types
//! - Unsupported category/type combinations
//! - Title and year taken from the release name

use release_tools::cli::commands::name::prepare_metadata;
use release_tools::models::release::load_metadata;
use release_tools::{synthesize_name, Error, ReleaseMetadata};
use std::fs;
use tempfile::TempDir;

fn write_metadata(dir: &TempDir, json: &str) -> std::path::PathBuf {
    let path = dir.path().join("meta.json");
    fs::write(&path, json).unwrap();
    path
}

#[test]
fn test_uhd_remux_from_json() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_metadata(
        &temp_dir,
        r#"{
            "category": "MOVIE",
            "type": "REMUX",
            "source": "BluRay",
            "title": "The Dark Knight",
            "year": 2008,
            "resolution": "2160p",
            "uhd": "UHD",
            "hdr": "HDR",
            "video_codec": "HEVC",
            "audio": "TrueHD Atmos 7.1",
            "tag": "-GRP"
        }"#,
    );

    let meta = load_metadata(&path).unwrap();
    let name = synthesize_name(&meta).unwrap();
    assert_eq!(
        name.name_with_tag,
        "The Dark Knight 2008 2160p UHD BluRay REMUX HDR HEVC TrueHD Atmos 7.1-GRP"
    );
    assert_eq!(name.filesystem_safe, name.name_with_tag);
    assert_eq!(name.potential_missing, vec!["edition", "description"]);
}

#[test]
fn test_tv_season_pack_webrip() {
    let meta = ReleaseMetadata {
        category: "TV".to_string(),
        release_type: "WEBRIP".to_string(),
        title: "Some Show".to_string(),
        year: "2019".to_string(),
        season: "S02".to_string(),
        resolution: "720p".to_string(),
        service: "AMZN".to_string(),
        audio: "DD+ 2.0".to_string(),
        video_encode: "x264".to_string(),
        tag: "-GRP".to_string(),
        ..Default::default()
    };

    let name = synthesize_name(&meta).unwrap();
    assert_eq!(
        name.name_without_tag,
        "Some Show 2019 S02 720p AMZN WEBRip DD+ 2.0 x264"
    );
}

#[test]
fn test_dvdrip() {
    let meta = ReleaseMetadata {
        category: "movie".to_string(),
        release_type: "dvdrip".to_string(),
        title: "Heat".to_string(),
        year: "1995".to_string(),
        source: "NTSC".to_string(),
        video_encode: "XviD".to_string(),
        audio: "AC3".to_string(),
        tag: "-GRP".to_string(),
        ..Default::default()
    };

    let name = synthesize_name(&meta).unwrap();
    assert_eq!(name.name_with_tag, "Heat 1995 NTSC XviD DVDRip AC3-GRP");
    assert!(name.potential_missing.is_empty());
}

#[test]
fn test_unknown_type_is_an_error() {
    let meta = ReleaseMetadata {
        category: "MOVIE".to_string(),
        release_type: "BOGUS".to_string(),
        source: "BluRay".to_string(),
        title: "Heat".to_string(),
        ..Default::default()
    };
    let before = meta.clone();

    match synthesize_name(&meta) {
        Err(Error::NameSynthesis {
            category,
            release_type,
            release_source,
        }) => {
            assert_eq!(category, "MOVIE");
            assert_eq!(release_type, "BOGUS");
            assert_eq!(release_source, "BluRay");
        }
        other => panic!("expected a naming error, got {:?}", other),
    }
    assert_eq!(meta, before);
}

#[test]
fn test_remux_from_web_source_is_an_error() {
    let meta = ReleaseMetadata {
        category: "TV".to_string(),
        release_type: "REMUX".to_string(),
        source: "Web".to_string(),
        ..Default::default()
    };
    assert!(synthesize_name(&meta).is_err());
}

#[test]
fn test_load_metadata_errors() {
    let temp_dir = TempDir::new().unwrap();

    let missing = load_metadata(&temp_dir.path().join("nope.json"));
    assert!(matches!(missing, Err(Error::PathNotFound(_))));

    let path = write_metadata(&temp_dir, "[1, 2, 3]");
    assert!(matches!(load_metadata(&path), Err(Error::InvalidMetadata(_))));
}

// ============================================================================
// Title and year from the release name
// ============================================================================

#[test]
fn test_missing_title_filled_from_folder() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_metadata(
        &temp_dir,
        r#"{
            "category": "MOVIE",
            "type": "ENCODE",
            "source": "BluRay",
            "resolution": "1080p",
            "video_encode": "x264",
            "tag": "-GRP"
        }"#,
    );

    let meta = prepare_metadata(
        &path,
        Some("grp-matrix.mkv"),
        Some("The.Matrix.1999.1080p.BluRay.x264-GRP"),
        false,
    )
    .unwrap();
    assert_eq!(meta.title, "The Matrix");
    assert_eq!(meta.year, "1999");

    let name = synthesize_name(&meta).unwrap();
    assert!(name.name_with_tag.starts_with("The Matrix 1999 1080p BluRay"));
}

#[test]
fn test_existing_title_is_kept() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_metadata(
        &temp_dir,
        r#"{
            "category": "MOVIE",
            "type": "ENCODE",
            "source": "BluRay",
            "title": "Matrix",
            "resolution": "1080p"
        }"#,
    );

    let meta = prepare_metadata(
        &path,
        None,
        Some("The.Matrix.1999.1080p.BluRay.x264-GRP"),
        false,
    )
    .unwrap();
    assert_eq!(meta.title, "Matrix");
    assert_eq!(meta.year, "1999");

    let untouched = prepare_metadata(&path, None, None, false).unwrap();
    assert_eq!(untouched.year, "");
}
