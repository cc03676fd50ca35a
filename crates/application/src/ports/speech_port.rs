//! Speech port - Interface for speech-to-text and text-to-speech operations

use async_trait::async_trait;
use domain::{Accent, AudioFormat, Language};
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Result of a transcription operation
#[derive(Debug, Clone)]
pub struct TranscriptionResult {
    /// Transcribed text
    pub text: String,
    /// Language the recognizer was asked for
    pub language: Language,
}

/// Result of a speech synthesis operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SynthesisResult {
    /// Generated audio data
    pub audio_data: Vec<u8>,
    /// Format of the audio
    pub format: AudioFormat,
}

impl SynthesisResult {
    /// A result carrying no audio
    #[must_use]
    pub const fn empty(format: AudioFormat) -> Self {
        Self {
            audio_data: Vec::new(),
            format,
        }
    }

    /// Whether any audio was produced
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.audio_data.is_empty()
    }
}

/// Information about an available voice variant
#[derive(Debug, Clone)]
pub struct VoiceInfo {
    /// Voice identifier (the accent's top-level domain)
    pub id: String,
    /// Human-readable name
    pub name: String,
    /// Language codes this voice supports
    pub languages: Vec<String>,
}

/// Port for speech processing operations
#[cfg_attr(test, automock)]
#[async_trait]
pub trait SpeechPort: Send + Sync {
    /// Transcribe audio data to text (Speech-to-Text)
    ///
    /// # Arguments
    /// * `audio_data` - Raw audio bytes
    /// * `format` - Format of the audio
    /// * `language` - Language spoken in the recording
    async fn transcribe(
        &self,
        audio_data: Vec<u8>,
        format: AudioFormat,
        language: Language,
    ) -> Result<TranscriptionResult, ApplicationError>;

    /// Synthesize speech from text (Text-to-Speech)
    ///
    /// # Arguments
    /// * `text` - Text to synthesize
    /// * `language` - Language to speak
    /// * `accent` - Regional variant; `None` leaves the choice to the synthesizer
    async fn synthesize(
        &self,
        text: String,
        language: Language,
        accent: Option<Accent>,
    ) -> Result<SynthesisResult, ApplicationError>;

    /// Check if the speech recognizer is installed and has its model
    async fn is_recognizer_available(&self) -> bool;

    /// Check if the speech synthesizer is reachable
    async fn is_synthesizer_available(&self) -> bool;

    /// List available voices for synthesis
    fn list_voices(&self) -> Vec<VoiceInfo>;

    /// Name of the recognition model
    fn recognizer_model(&self) -> String;
}
