//! Release name templates.
//!
//! One row per `(category, type, variant)` leaf. Rows are data so each can be
//! checked on its own; the synthesizer only fills in field values.

use crate::models::release::{Category, DiscType, ReleaseType, SourceFamily};

/// A metadata value placed in a name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Title,
    Aka,
    Year,
    ThreeD,
    Edition,
    Hybrid,
    Repack,
    Resolution,
    Region,
    Uhd,
    Source,
    Hdr,
    VideoCodec,
    VideoEncode,
    Audio,
    DvdSize,
    Service,
    Season,
    Episode,
    EpisodeTitle,
    Part,
}

/// One space-separated part of a name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment {
    Field(Field),
    /// Fixed text such as `REMUX`.
    Literal(&'static str),
    /// Fields concatenated without separators, e.g. `S01` + `E02`.
    Joined(&'static [Field]),
}

/// Which releases of a category and type a row applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    Any,
    Disc(DiscType),
    Family(SourceFamily),
}

/// A name template row.
#[derive(Debug, Clone, Copy)]
pub struct Template {
    pub category: Category,
    pub release_type: ReleaseType,
    pub variant: Variant,
    pub segments: &'static [Segment],
    /// Fields the operator should double-check for this kind of release.
    pub potential_missing: &'static [&'static str],
}

use Field::*;
use Segment::{Field as F, Joined, Literal};

const SEASON_EPISODE: Segment = Joined(&[Season, Episode]);

const MISSING_DISC: &[&str] = &["edition", "region", "distributor"];
const MISSING_DVD_DISC: &[&str] = &["edition", "distributor"];
const MISSING_DESCRIPTION: &[&str] = &["edition", "description"];
const MISSING_SERVICE: &[&str] = &["edition", "service"];

/// Every supported template.
pub const TEMPLATES: &[Template] = &[
    // Movies
    Template {
        category: Category::Movie,
        release_type: ReleaseType::Disc,
        variant: Variant::Disc(DiscType::Bdmv),
        segments: &[
            F(Title), F(Aka), F(Year), F(ThreeD), F(Edition), F(Hybrid), F(Repack),
            F(Resolution), F(Region), F(Uhd), F(Source), F(Hdr), F(VideoCodec), F(Audio),
        ],
        potential_missing: MISSING_DISC,
    },
    Template {
        category: Category::Movie,
        release_type: ReleaseType::Disc,
        variant: Variant::Disc(DiscType::Dvd),
        segments: &[
            F(Title), F(Aka), F(Year), F(Edition), F(Repack), F(Source), F(DvdSize), F(Audio),
        ],
        potential_missing: MISSING_DVD_DISC,
    },
    Template {
        category: Category::Movie,
        release_type: ReleaseType::Disc,
        variant: Variant::Disc(DiscType::HdDvd),
        segments: &[
            F(Title), F(Aka), F(Year), F(Edition), F(Repack), F(Resolution), F(Source),
            F(VideoCodec), F(Audio),
        ],
        potential_missing: MISSING_DISC,
    },
    Template {
        category: Category::Movie,
        release_type: ReleaseType::Remux,
        variant: Variant::Family(SourceFamily::BluRay),
        segments: &[
            F(Title), F(Aka), F(Year), F(ThreeD), F(Edition), F(Hybrid), F(Repack),
            F(Resolution), F(Uhd), F(Source), Literal("REMUX"), F(Hdr), F(VideoCodec), F(Audio),
        ],
        potential_missing: MISSING_DESCRIPTION,
    },
    Template {
        category: Category::Movie,
        release_type: ReleaseType::Remux,
        variant: Variant::Family(SourceFamily::Dvd),
        segments: &[
            F(Title), F(Aka), F(Year), F(Edition), F(Repack), F(Source), Literal("REMUX"),
            F(Audio),
        ],
        potential_missing: MISSING_DESCRIPTION,
    },
    Template {
        category: Category::Movie,
        release_type: ReleaseType::Encode,
        variant: Variant::Any,
        segments: &[
            F(Title), F(Aka), F(Year), F(Edition), F(Hybrid), F(Repack), F(Resolution), F(Uhd),
            F(Source), F(Audio), F(Hdr), F(VideoEncode),
        ],
        potential_missing: MISSING_DESCRIPTION,
    },
    Template {
        category: Category::Movie,
        release_type: ReleaseType::WebDl,
        variant: Variant::Any,
        segments: &[
            F(Title), F(Aka), F(Year), F(Edition), F(Hybrid), F(Repack), F(Resolution), F(Uhd),
            F(Service), Literal("WEB-DL"), F(Audio), F(Hdr), F(VideoEncode),
        ],
        potential_missing: MISSING_SERVICE,
    },
    Template {
        category: Category::Movie,
        release_type: ReleaseType::WebRip,
        variant: Variant::Any,
        segments: &[
            F(Title), F(Aka), F(Year), F(Edition), F(Hybrid), F(Repack), F(Resolution), F(Uhd),
            F(Service), Literal("WEBRip"), F(Audio), F(Hdr), F(VideoEncode),
        ],
        potential_missing: MISSING_SERVICE,
    },
    Template {
        category: Category::Movie,
        release_type: ReleaseType::Hdtv,
        variant: Variant::Any,
        segments: &[
            F(Title), F(Aka), F(Year), F(Edition), F(Repack), F(Resolution), F(Source),
            F(Audio), F(VideoEncode),
        ],
        potential_missing: &[],
    },
    Template {
        category: Category::Movie,
        release_type: ReleaseType::DvdRip,
        variant: Variant::Any,
        segments: &[
            F(Title), F(Aka), F(Year), F(Source), F(VideoEncode), Literal("DVDRip"), F(Audio),
        ],
        potential_missing: &[],
    },
    // TV
    Template {
        category: Category::Tv,
        release_type: ReleaseType::Disc,
        variant: Variant::Disc(DiscType::Bdmv),
        segments: &[
            F(Title), F(Year), F(Aka), SEASON_EPISODE, F(ThreeD), F(Edition), F(Hybrid),
            F(Repack), F(Resolution), F(Region), F(Uhd), F(Source), F(Hdr), F(VideoCodec),
            F(Audio),
        ],
        potential_missing: MISSING_DISC,
    },
    Template {
        category: Category::Tv,
        release_type: ReleaseType::Disc,
        variant: Variant::Disc(DiscType::Dvd),
        segments: &[
            F(Title), F(Aka), Joined(&[Season, Episode, ThreeD]), F(Edition), F(Repack),
            F(Source), F(DvdSize), F(Audio),
        ],
        potential_missing: MISSING_DVD_DISC,
    },
    Template {
        category: Category::Tv,
        release_type: ReleaseType::Disc,
        variant: Variant::Disc(DiscType::HdDvd),
        segments: &[
            F(Title), F(Aka), F(Year), F(Edition), F(Repack), F(Resolution), F(Source),
            F(VideoCodec), F(Audio),
        ],
        potential_missing: MISSING_DISC,
    },
    Template {
        category: Category::Tv,
        release_type: ReleaseType::Remux,
        variant: Variant::Family(SourceFamily::BluRay),
        segments: &[
            F(Title), F(Year), F(Aka), SEASON_EPISODE, F(EpisodeTitle), F(Part), F(ThreeD),
            F(Edition), F(Hybrid), F(Repack), F(Resolution), F(Uhd), F(Source),
            Literal("REMUX"), F(Hdr), F(VideoCodec), F(Audio),
        ],
        potential_missing: MISSING_DESCRIPTION,
    },
    Template {
        category: Category::Tv,
        release_type: ReleaseType::Remux,
        variant: Variant::Family(SourceFamily::Dvd),
        segments: &[
            F(Title), F(Year), F(Aka), SEASON_EPISODE, F(EpisodeTitle), F(Part), F(Edition),
            F(Repack), F(Source), Literal("REMUX"), F(Audio),
        ],
        potential_missing: MISSING_DESCRIPTION,
    },
    Template {
        category: Category::Tv,
        release_type: ReleaseType::Encode,
        variant: Variant::Any,
        segments: &[
            F(Title), F(Year), F(Aka), SEASON_EPISODE, F(EpisodeTitle), F(Part), F(Edition),
            F(Hybrid), F(Repack), F(Resolution), F(Uhd), F(Source), F(Audio), F(Hdr),
            F(VideoEncode),
        ],
        potential_missing: MISSING_DESCRIPTION,
    },
    Template {
        category: Category::Tv,
        release_type: ReleaseType::WebDl,
        variant: Variant::Any,
        segments: &[
            F(Title), F(Year), F(Aka), SEASON_EPISODE, F(EpisodeTitle), F(Part), F(Edition),
            F(Hybrid), F(Repack), F(Resolution), F(Uhd), F(Service), Literal("WEB-DL"),
            F(Audio), F(Hdr), F(VideoEncode),
        ],
        potential_missing: MISSING_SERVICE,
    },
    Template {
        category: Category::Tv,
        release_type: ReleaseType::WebRip,
        variant: Variant::Any,
        segments: &[
            F(Title), F(Year), F(Aka), SEASON_EPISODE, F(EpisodeTitle), F(Part), F(Edition),
            F(Hybrid), F(Repack), F(Resolution), F(Uhd), F(Service), Literal("WEBRip"),
            F(Audio), F(Hdr), F(VideoEncode),
        ],
        potential_missing: MISSING_SERVICE,
    },
    Template {
        category: Category::Tv,
        release_type: ReleaseType::Hdtv,
        variant: Variant::Any,
        segments: &[
            F(Title), F(Year), F(Aka), SEASON_EPISODE, F(EpisodeTitle), F(Part), F(Edition),
            F(Repack), F(Resolution), F(Source), F(Audio), F(VideoEncode),
        ],
        potential_missing: &[],
    },
    Template {
        category: Category::Tv,
        release_type: ReleaseType::DvdRip,
        variant: Variant::Any,
        segments: &[F(Title), F(Aka), F(Season), F(Source), Literal("DVDRip"), F(VideoEncode)],
        potential_missing: &[],
    },
];

impl Variant {
    fn matches(&self, disc: Option<DiscType>, family: Option<SourceFamily>) -> bool {
        match self {
            Variant::Any => true,
            Variant::Disc(d) => disc == Some(*d),
            Variant::Family(f) => family == Some(*f),
        }
    }
}

/// Find the template for a release, if one exists.
pub fn find_template(
    category: Category,
    release_type: ReleaseType,
    disc: Option<DiscType>,
    family: Option<SourceFamily>,
) -> Option<&'static Template> {
    TEMPLATES.iter().find(|t| {
        t.category == category && t.release_type == release_type && t.variant.matches(disc, family)
    })
}
