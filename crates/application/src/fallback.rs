//! In-band fallback contract
//!
//! Hosts that cannot handle structured errors call these wrappers instead of
//! the service methods. Failures are replaced by fixed sentinel values:
//!
//! | Stage | Sentinel |
//! |-------|----------|
//! | speech-to-text | [`TRANSCRIPTION_ERROR`] |
//! | translation | [`TRANSLATION_ERROR_PREFIX`] followed by the error |
//! | text-to-speech | empty byte vector |
//!
//! Direction tags are parsed leniently: anything other than `en-ru` or
//! `ru-en` runs as `en-ru`, with a warning.

use domain::{AudioFormat, Direction};
use tracing::warn;

use crate::services::VoiceTranslationService;

/// Returned by [`speech_to_text`] when recognition fails
pub const TRANSCRIPTION_ERROR: &str = "Error transcribing audio";

/// Prefix of the message returned by [`translate`] when translation fails
pub const TRANSLATION_ERROR_PREFIX: &str = "Sorry, I encountered an error processing your message: ";

/// Parse a direction tag, falling back to `en-ru`
pub fn lenient_direction(tag: &str) -> Direction {
    Direction::from_tag(tag).unwrap_or_else(|| {
        warn!(tag = %tag, fallback = %Direction::default(), "Unknown direction tag");
        Direction::default()
    })
}

/// Recognize WAV audio, or return [`TRANSCRIPTION_ERROR`]
pub async fn speech_to_text(
    service: &VoiceTranslationService,
    audio_data: Vec<u8>,
    direction_tag: &str,
) -> String {
    let direction = lenient_direction(direction_tag);
    service
        .speech_to_text(audio_data, AudioFormat::Wav, direction)
        .await
        .unwrap_or_else(|_| TRANSCRIPTION_ERROR.to_string())
}

/// Translate text, or return an apology carrying the error message
pub async fn translate(
    service: &VoiceTranslationService,
    text: &str,
    direction_tag: &str,
) -> String {
    let direction = lenient_direction(direction_tag);
    service
        .translate(text, direction)
        .await
        .unwrap_or_else(|e| format!("{TRANSLATION_ERROR_PREFIX}{}", e.detail()))
}

/// Synthesize MP3 speech, or return no bytes
pub async fn text_to_speech(
    service: &VoiceTranslationService,
    text: &str,
    voice: &str,
    direction_tag: &str,
) -> Vec<u8> {
    let direction = lenient_direction(direction_tag);
    service
        .text_to_speech(text, voice, direction)
        .await
        .map(|result| result.audio_data)
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use domain::Language;

    use super::*;
    use crate::error::ApplicationError;
    use crate::ports::{
        InferenceResult, MockInferencePort, MockSpeechPort, SynthesisResult, TranscriptionResult,
    };

    fn service(speech: MockSpeechPort, inference: MockInferencePort) -> VoiceTranslationService {
        VoiceTranslationService::new(Arc::new(speech), Arc::new(inference))
    }

    #[test]
    fn lenient_direction_accepts_known_tags() {
        assert_eq!(lenient_direction("ru-en"), Direction::RuEn);
        assert_eq!(lenient_direction(" EN-RU "), Direction::EnRu);
    }

    #[test]
    fn lenient_direction_falls_back_to_en_ru() {
        assert_eq!(lenient_direction("de-fr"), Direction::EnRu);
        assert_eq!(lenient_direction(""), Direction::EnRu);
    }

    #[tokio::test]
    async fn speech_to_text_returns_sentinel_on_failure() {
        let mut speech = MockSpeechPort::new();
        speech
            .expect_transcribe()
            .returning(|_, _, _| Err(ApplicationError::Speech("corrupt".to_string())));

        let service = service(speech, MockInferencePort::new());
        let text = speech_to_text(&service, vec![1, 2], "en-ru").await;

        assert_eq!(text, "Error transcribing audio");
    }

    #[tokio::test]
    async fn speech_to_text_unknown_tag_listens_for_english() {
        let mut speech = MockSpeechPort::new();
        speech
            .expect_transcribe()
            .withf(|_, format, language| {
                *format == AudioFormat::Wav && *language == Language::English
            })
            .returning(|_, _, language| {
                Ok(TranscriptionResult {
                    text: "Hello".to_string(),
                    language,
                })
            });

        let service = service(speech, MockInferencePort::new());
        assert_eq!(speech_to_text(&service, vec![1], "xx-yy").await, "Hello");
    }

    #[tokio::test]
    async fn translate_returns_apology_on_failure() {
        let mut inference = MockInferencePort::new();
        inference
            .expect_generate_with_system()
            .returning(|_, _| Err(ApplicationError::Inference("model not found".to_string())));

        let service = service(MockSpeechPort::new(), inference);
        let text = translate(&service, "Hello", "en-ru").await;

        assert_eq!(
            text,
            "Sorry, I encountered an error processing your message: Inference error: model not found"
        );
    }

    #[tokio::test]
    async fn translate_passes_through_success() {
        let mut inference = MockInferencePort::new();
        inference.expect_generate_with_system().returning(|_, _| {
            Ok(InferenceResult {
                content: " Привет ".to_string(),
                model: "llama3.2".to_string(),
                tokens_used: None,
                latency_ms: 1,
            })
        });

        let service = service(MockSpeechPort::new(), inference);
        assert_eq!(translate(&service, "Hello", "en-ru").await, "Привет");
    }

    #[tokio::test]
    async fn text_to_speech_returns_empty_bytes_on_failure() {
        let mut speech = MockSpeechPort::new();
        speech
            .expect_synthesize()
            .returning(|_, _, _| Err(ApplicationError::ExternalService("offline".to_string())));

        let service = service(speech, MockInferencePort::new());
        let audio = text_to_speech(&service, "Привет", "com", "en-ru").await;

        assert!(audio.is_empty());
    }

    #[tokio::test]
    async fn text_to_speech_returns_audio_bytes() {
        let mut speech = MockSpeechPort::new();
        speech.expect_synthesize().returning(|_, _, _| {
            Ok(SynthesisResult {
                audio_data: vec![0xFF, 0xFB],
                format: AudioFormat::Mp3,
            })
        });

        let service = service(speech, MockInferencePort::new());
        let audio = text_to_speech(&service, "Hello", "default", "ru-en").await;

        assert_eq!(audio, vec![0xFF, 0xFB]);
    }
}
