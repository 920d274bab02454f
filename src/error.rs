//! Error types for the release tools.

use thiserror::Error;

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the release tools.
#[derive(Error, Debug)]
pub enum Error {
    // Naming errors
    #[error(
        "Unable to generate name for category '{category}', type '{release_type}', source '{release_source}'"
    )]
    NameSynthesis {
        category: String,
        release_type: String,
        release_source: String,
    },

    #[error("Invalid release metadata: {0}")]
    InvalidMetadata(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    // File system errors
    #[error("Path not found: {0}")]
    PathNotFound(String),

    #[error("Not a directory: {0}")]
    NotADirectory(String),

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // JSON errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // Generic errors
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create a generic error from a string.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        Error::Other(msg.into())
    }

    /// Whether the caller should ask the operator to re-specify category/type/source.
    pub fn needs_respecify(&self) -> bool {
        matches!(self, Error::NameSynthesis { .. })
    }
}
