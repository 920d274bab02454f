//! Release name generators.

pub mod name;
pub mod templates;

pub use name::{sanitize_filename, synthesize_name, SynthesizedName};
