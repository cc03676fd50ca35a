//! Audio payloads, transcripts and voice descriptions

use serde::{Deserialize, Serialize};

/// Container formats the providers accept or produce
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AudioFormat {
    /// RIFF/WAVE
    #[default]
    Wav,
    /// MPEG-1 Layer III (what Google TTS returns)
    Mp3,
    /// Ogg container, usually Opus
    Ogg,
    /// FLAC
    Flac,
    /// WebM container
    Webm,
}

impl AudioFormat {
    /// File extension without the dot
    ///
    /// whisper.cpp sniffs the container from the file name, so temp files
    /// carry this suffix.
    #[must_use]
    pub const fn extension(&self) -> &'static str {
        match self {
            Self::Wav => "wav",
            Self::Mp3 => "mp3",
            Self::Ogg => "ogg",
            Self::Flac => "flac",
            Self::Webm => "webm",
        }
    }
}

/// Audio bytes tagged with their format
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AudioData {
    data: Vec<u8>,
    format: AudioFormat,
}

impl AudioData {
    #[must_use]
    pub const fn new(data: Vec<u8>, format: AudioFormat) -> Self {
        Self { data, format }
    }

    #[must_use]
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Take the bytes out
    #[must_use]
    pub fn into_data(self) -> Vec<u8> {
        self.data
    }

    #[must_use]
    pub const fn format(&self) -> AudioFormat {
        self.format
    }

    #[must_use]
    pub fn size_bytes(&self) -> usize {
        self.data.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

/// Text recognized in a recording
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transcription {
    /// Recognized text, markers removed
    pub text: String,
    /// Language the recognizer was told to expect (ISO 639-1 code)
    pub language: Option<String>,
}

impl Transcription {
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            language: None,
        }
    }

    #[must_use]
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    /// True when no speech was recognized
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.trim().is_empty()
    }
}

/// A voice variant offered by a synthesizer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VoiceInfo {
    /// Identifier passed back as the accent (for Google TTS, the top-level domain)
    pub id: String,
    /// Human-readable name
    pub name: String,
    /// Free-form note, e.g. the host serving the voice
    pub description: Option<String>,
    /// ISO 639-1 codes the voice can speak
    pub languages: Vec<String>,
}

impl VoiceInfo {
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: None,
            languages: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn with_languages(mut self, languages: &[&str]) -> Self {
        self.languages = languages.iter().map(|l| (*l).to_string()).collect();
        self
    }
}
