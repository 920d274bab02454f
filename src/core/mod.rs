//! Core release analysis.

pub mod anime;
pub mod bdinfo;
pub mod identity;
pub mod scanner;
