//! Identity extracted from a release name.

use serde::{Deserialize, Serialize};

/// Best-effort `(title, secondary title, year)` recovered from a release name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdentityCandidate {
    /// Main title.
    pub primary_title: Option<String>,
    /// Alternative title (AKA or parenthesized).
    pub secondary_title: Option<String>,
    /// Four-digit year between 1800 and 2099.
    pub year: Option<String>,
}

impl IdentityCandidate {
    pub fn new(
        primary_title: Option<String>,
        secondary_title: Option<String>,
        year: Option<String>,
    ) -> Self {
        Self {
            primary_title,
            secondary_title,
            year,
        }
    }

    /// Only a year was recovered.
    pub fn year_only(year: Option<String>) -> Self {
        Self {
            year,
            ..Default::default()
        }
    }

    /// True when extraction failed and the caller needs manual input.
    pub fn is_empty(&self) -> bool {
        self.primary_title.is_none() && self.secondary_title.is_none() && self.year.is_none()
    }
}

impl std::fmt::Display for IdentityCandidate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let title = self.primary_title.as_deref().unwrap_or("?");
        write!(f, "{}", title)?;
        if let Some(ref secondary) = self.secondary_title {
            write!(f, " AKA {}", secondary)?;
        }
        if let Some(ref year) = self.year {
            write!(f, " ({})", year)?;
        }
        Ok(())
    }
}
