//! Release Tools Library
//!
//! Identity extraction from release names, canonical release naming and
//! BDInfo report comparison for duplicate checks.

pub mod cli;
pub mod core;
pub mod error;
pub mod generators;
pub mod models;
pub mod utils;

pub use crate::core::bdinfo::diff_tracks;
pub use crate::core::identity::extract_identity;
pub use error::{Error, Result};
pub use generators::{synthesize_name, SynthesizedName};
pub use models::identity::IdentityCandidate;
pub use models::release::ReleaseMetadata;
pub use models::report::{DiffEntry, DiffPrefix, DiffReport};
