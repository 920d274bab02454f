//! CLI command implementations.

pub mod compare;
pub mod identify;
pub mod name;
pub mod scan;

use crate::Result;
use serde::Serialize;

/// Print a value as pretty JSON.
pub(crate) fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
