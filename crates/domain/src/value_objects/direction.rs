//! Translation direction value object
//!
//! A direction selects everything that differs between the two pipelines:
//! the language the recognizer listens for, the instruction sent to the
//! language model, and the language the synthesizer speaks.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::Language;
use crate::errors::DomainError;

/// Placeholder replaced by the source text in instruction templates
const TEXT_PLACEHOLDER: &str = "{text}";

const EN_RU_TEMPLATE: &str = "Translate the following English sentence into Russian.
Reply ONLY with the translation, no explanations, no formatting, no extra text.
English: {text}
Russian:";

const RU_EN_TEMPLATE: &str = "Translate the following Russian sentence into English.
Reply ONLY with the translation, no explanations, no formatting, no extra text.
Russian: {text}
English:";

/// Source→target language pair of a translation call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Direction {
    /// English speech in, Russian speech out
    #[default]
    #[serde(rename = "en-ru")]
    EnRu,
    /// Russian speech in, English speech out
    #[serde(rename = "ru-en")]
    RuEn,
}

impl Direction {
    /// Wire tag of the direction (`en-ru` / `ru-en`)
    #[must_use]
    pub const fn tag(&self) -> &'static str {
        match self {
            Self::EnRu => "en-ru",
            Self::RuEn => "ru-en",
        }
    }

    /// Language of the incoming speech and of the text to translate
    #[must_use]
    pub const fn source_language(&self) -> Language {
        match self {
            Self::EnRu => Language::English,
            Self::RuEn => Language::Russian,
        }
    }

    /// Language of the translation and of the synthesized speech
    #[must_use]
    pub const fn target_language(&self) -> Language {
        match self {
            Self::EnRu => Language::Russian,
            Self::RuEn => Language::English,
        }
    }

    /// Instruction template with a `{text}` placeholder
    #[must_use]
    pub const fn instruction_template(&self) -> &'static str {
        match self {
            Self::EnRu => EN_RU_TEMPLATE,
            Self::RuEn => RU_EN_TEMPLATE,
        }
    }

    /// Render the translation instruction for the given source text
    #[must_use]
    pub fn instruction_for(&self, text: &str) -> String {
        self.instruction_template().replace(TEXT_PLACEHOLDER, text)
    }

    /// Look up a direction by tag, without falling back
    #[must_use]
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag.trim().to_lowercase().as_str() {
            "en-ru" => Some(Self::EnRu),
            "ru-en" => Some(Self::RuEn),
            _ => None,
        }
    }

    /// Look up a direction by tag, using `en-ru` for unrecognized tags
    ///
    /// Callers that accept free-form tags should log when the fallback is
    /// taken; typed boundaries should use [`FromStr`] instead.
    #[must_use]
    pub fn from_tag_or_default(tag: &str) -> Self {
        Self::from_tag(tag).unwrap_or_default()
    }

    /// All supported directions
    #[must_use]
    pub const fn all() -> [Self; 2] {
        [Self::EnRu, Self::RuEn]
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tag())
    }
}

impl FromStr for Direction {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_tag(s).ok_or_else(|| DomainError::UnknownDirection(s.to_string()))
    }
}
