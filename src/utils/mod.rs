//! Utility modules.

pub mod diff;
pub mod fs;
pub mod text;
