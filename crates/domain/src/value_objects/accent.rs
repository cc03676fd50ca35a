//! Accent value object
//!
//! Accents are selected through the Google top-level domain the synthesis
//! request is sent to (`com` for US English, `co.uk` for British English, ...).

use serde::{Deserialize, Serialize};
use std::fmt;

/// Top-level domain used when no accent is requested
pub const DEFAULT_ACCENT_TLD: &str = "com";

/// Placeholder value some hosts send instead of an empty voice
const DEFAULT_PLACEHOLDER: &str = "default";

/// Known English accent variants: (tld, label)
const KNOWN_ACCENTS: [(&str, &str); 7] = [
    ("com", "English (United States)"),
    ("co.uk", "English (United Kingdom)"),
    ("com.au", "English (Australia)"),
    ("ca", "English (Canada)"),
    ("co.in", "English (India)"),
    ("ie", "English (Ireland)"),
    ("co.za", "English (South Africa)"),
];

/// Regional voice variant, identified by its Google top-level domain
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Accent(String);

impl Accent {
    /// Normalize a caller-supplied voice parameter
    ///
    /// Empty values and the `default` placeholder map to `com`. Other values
    /// are kept as given (trimmed); the synthesizer decides whether the
    /// domain exists.
    #[must_use]
    pub fn normalize(voice: &str) -> Self {
        let voice = voice.trim();
        if voice.is_empty() || voice.eq_ignore_ascii_case(DEFAULT_PLACEHOLDER) {
            Self::default()
        } else {
            Self(voice.to_string())
        }
    }

    /// The top-level domain string
    #[must_use]
    pub fn tld(&self) -> &str {
        &self.0
    }

    /// Human-readable label for known accents
    #[must_use]
    pub fn label(&self) -> Option<&'static str> {
        KNOWN_ACCENTS
            .iter()
            .find(|(tld, _)| *tld == self.0)
            .map(|(_, label)| *label)
    }

    /// All known accent variants
    pub fn known() -> impl Iterator<Item = Self> {
        KNOWN_ACCENTS.iter().map(|(tld, _)| Self((*tld).to_string()))
    }
}

impl Default for Accent {
    fn default() -> Self {
        Self(DEFAULT_ACCENT_TLD.to_string())
    }
}

impl fmt::Display for Accent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
