//! Language value object

use serde::{Deserialize, Serialize};
use std::fmt;

/// A language the pipeline can recognize, translate and speak
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// English
    English,
    /// Russian
    Russian,
}

impl Language {
    /// ISO 639-1 code, as passed to the recognizer and the synthesizer
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::English => "en",
            Self::Russian => "ru",
        }
    }

    /// English name of the language, as used in translation instructions
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::English => "English",
            Self::Russian => "Russian",
        }
    }

    /// Whether the synthesizer offers regional accent variants
    ///
    /// Only English voices come in accent variants (US, UK, AU, ...).
    #[must_use]
    pub const fn supports_accents(&self) -> bool {
        matches!(self, Self::English)
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
