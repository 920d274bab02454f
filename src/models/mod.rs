//! Data models.

pub mod config;
pub mod identity;
pub mod release;
pub mod report;
