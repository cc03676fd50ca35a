//! Recognizer and synthesizer traits
//!
//! Providers in [`crate::providers`] implement these; the infrastructure
//! layer holds them as `Arc<dyn …>` so either side can be swapped.

use async_trait::async_trait;

use crate::error::SpeechError;
use crate::types::{AudioData, Transcription, VoiceInfo};

/// Speech recognition
///
/// ```ignore
/// let transcription = stt.transcribe_with_language(audio, "ru").await?;
/// if transcription.is_empty() {
///     // silence
/// }
/// ```
#[async_trait]
pub trait SpeechToText: Send + Sync {
    /// Transcribe speech in `language` (ISO 639-1, e.g. "en", "ru")
    ///
    /// An empty `language` lets the provider detect it.
    async fn transcribe_with_language(
        &self,
        audio: AudioData,
        language: &str,
    ) -> Result<Transcription, SpeechError>;

    /// Whether the recognizer and its model are installed
    async fn is_available(&self) -> bool;

    /// Short model name for status output
    fn model_name(&self) -> &str;
}

/// Speech synthesis
#[async_trait]
pub trait TextToSpeech: Send + Sync {
    /// Speak `text` in `language`
    ///
    /// `accent` selects a regional variant; `None` means the provider
    /// default. Providers without variants ignore it.
    async fn synthesize(
        &self,
        text: &str,
        language: &str,
        accent: Option<&str>,
    ) -> Result<AudioData, SpeechError>;

    /// Accent variants that can be passed to [`TextToSpeech::synthesize`]
    fn list_accents(&self) -> Vec<VoiceInfo>;

    /// Whether the synthesis endpoint answers
    async fn is_available(&self) -> bool;

    /// Accent used when none is requested
    fn default_accent(&self) -> &str;
}
