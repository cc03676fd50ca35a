//! Voice translation service - The three-stage translation pipeline
//!
//! Orchestrates the flow:
//! 1. Transcribe audio in the source language (STT)
//! 2. Translate the text with the language model
//! 3. Synthesize the translation in the target language (TTS)
//!
//! Each stage can be called on its own. Failures surface as the stage's
//! typed error (`TranscriptionFailed`, `TranslationFailed`,
//! `SynthesisFailed`) and are logged here, at the stage boundary.

use std::{fmt, sync::Arc, time::Instant};

use domain::{Accent, AudioFormat, Direction};
use tracing::{debug, info, instrument, warn};

use super::translation_cleanup::clean_translation;
use crate::{
    error::ApplicationError,
    ports::{InferencePort, SpeechPort, SynthesisResult},
};

/// Result of running the whole pipeline
#[derive(Debug, Clone)]
pub struct TranslationOutcome {
    /// Direction the pipeline ran in
    pub direction: Direction,
    /// Text recognized in the recording
    pub source_text: String,
    /// Translated text
    pub translated_text: String,
    /// Spoken translation
    pub audio: SynthesisResult,
    /// Total processing time in milliseconds
    pub processing_time_ms: u64,
}

/// Service running speech recognition, translation and speech synthesis
pub struct VoiceTranslationService {
    speech_port: Arc<dyn SpeechPort>,
    inference_port: Arc<dyn InferencePort>,
}

impl fmt::Debug for VoiceTranslationService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VoiceTranslationService")
            .field("model", &self.inference_port.current_model())
            .field("recognizer", &self.speech_port.recognizer_model())
            .finish_non_exhaustive()
    }
}

impl VoiceTranslationService {
    /// Create a new voice translation service
    pub fn new(speech_port: Arc<dyn SpeechPort>, inference_port: Arc<dyn InferencePort>) -> Self {
        Self {
            speech_port,
            inference_port,
        }
    }

    /// Recognize speech in the direction's source language
    ///
    /// The returned text is trimmed and may be empty when the recording
    /// contains no speech.
    #[instrument(
        skip(self, audio_data),
        fields(audio_size = audio_data.len(), format = %format, direction = %direction)
    )]
    pub async fn speech_to_text(
        &self,
        audio_data: Vec<u8>,
        format: AudioFormat,
        direction: Direction,
    ) -> Result<String, ApplicationError> {
        let language = direction.source_language();

        let result = self
            .speech_port
            .transcribe(audio_data, format, language)
            .await
            .map_err(|e| {
                warn!(error = %e, "Transcription failed");
                ApplicationError::TranscriptionFailed(e.to_string())
            })?;

        let text = result.text.trim().to_string();
        info!(chars = text.chars().count(), language = %language, "Recognized speech");
        Ok(text)
    }

    /// Translate text in the given direction
    ///
    /// The model receives the direction's instruction with the text embedded
    /// as the system message and the raw text as the user message.
    #[instrument(skip(self, text), fields(text_len = text.len(), direction = %direction))]
    pub async fn translate(
        &self,
        text: &str,
        direction: Direction,
    ) -> Result<String, ApplicationError> {
        if text.trim().is_empty() {
            debug!("Nothing to translate");
            return Ok(String::new());
        }

        let instruction = direction.instruction_for(text);

        let result = self
            .inference_port
            .generate_with_system(&instruction, text)
            .await
            .map_err(|e| {
                warn!(error = %e, "Translation failed");
                ApplicationError::TranslationFailed(e.to_string())
            })?;

        let translation = clean_translation(&result.content);
        info!(
            model = %result.model,
            latency_ms = result.latency_ms,
            tokens = ?result.tokens_used,
            "Translated text"
        );
        Ok(translation)
    }

    /// Speak text in the direction's target language
    ///
    /// `voice` selects the accent and is honored only when the target language
    /// has accent variants; an empty or `default` voice means `com`.
    #[instrument(skip(self, text), fields(text_len = text.len(), direction = %direction))]
    pub async fn text_to_speech(
        &self,
        text: &str,
        voice: &str,
        direction: Direction,
    ) -> Result<SynthesisResult, ApplicationError> {
        let language = direction.target_language();
        let accent = language
            .supports_accents()
            .then(|| Accent::normalize(voice));

        debug!(language = %language, accent = ?accent, "Resolved voice");

        let result = self
            .speech_port
            .synthesize(text.to_string(), language, accent)
            .await
            .map_err(|e| {
                warn!(error = %e, "Synthesis failed");
                ApplicationError::SynthesisFailed(e.to_string())
            })?;

        info!(bytes = result.audio_data.len(), "Synthesized speech");
        Ok(result)
    }

    /// Run recognition, translation and synthesis in order
    ///
    /// When the recording holds no speech, nothing is translated and the
    /// outcome carries empty audio.
    #[instrument(
        skip(self, audio_data),
        fields(audio_size = audio_data.len(), direction = %direction)
    )]
    pub async fn process(
        &self,
        audio_data: Vec<u8>,
        format: AudioFormat,
        voice: &str,
        direction: Direction,
    ) -> Result<TranslationOutcome, ApplicationError> {
        let start = Instant::now();

        let source_text = self.speech_to_text(audio_data, format, direction).await?;
        let translated_text = self.translate(&source_text, direction).await?;

        let audio = if translated_text.is_empty() {
            if source_text.is_empty() {
                warn!("No speech recognized, skipping synthesis");
            } else {
                warn!("Model returned an empty translation, skipping synthesis");
            }
            SynthesisResult::empty(AudioFormat::Mp3)
        } else {
            self.text_to_speech(&translated_text, voice, direction)
                .await?
        };

        #[allow(clippy::cast_possible_truncation)]
        let processing_time_ms = start.elapsed().as_millis() as u64;

        info!(processing_time_ms, "Voice translation complete");

        Ok(TranslationOutcome {
            direction,
            source_text,
            translated_text,
            audio,
            processing_time_ms,
        })
    }

    /// Whether the language model backend answers
    pub async fn is_translator_healthy(&self) -> bool {
        self.inference_port.is_healthy().await
    }

    /// Whether the speech recognizer is ready
    pub async fn is_recognizer_available(&self) -> bool {
        self.speech_port.is_recognizer_available().await
    }

    /// Whether the speech synthesizer is reachable
    pub async fn is_synthesizer_available(&self) -> bool {
        self.speech_port.is_synthesizer_available().await
    }

    /// Models the language model backend can serve
    pub async fn available_models(&self) -> Result<Vec<String>, ApplicationError> {
        self.inference_port.list_models().await
    }

    /// Model used for translation
    pub fn translation_model(&self) -> String {
        self.inference_port.current_model()
    }

    /// Model used for recognition
    pub fn recognition_model(&self) -> String {
        self.speech_port.recognizer_model()
    }

    /// Voices offered by the synthesizer
    pub fn voices(&self) -> Vec<crate::ports::VoiceInfo> {
        self.speech_port.list_voices()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use domain::Language;
    use mockall::predicate::eq;

    use super::*;
    use crate::ports::{InferenceResult, MockInferencePort, MockSpeechPort, TranscriptionResult};

    fn inference_result(content: &str) -> InferenceResult {
        InferenceResult {
            content: content.to_string(),
            model: "llama3.2".to_string(),
            tokens_used: Some(20),
            latency_ms: 120,
        }
    }

    fn mp3(bytes: &[u8]) -> SynthesisResult {
        SynthesisResult {
            audio_data: bytes.to_vec(),
            format: AudioFormat::Mp3,
        }
    }

    fn service(speech: MockSpeechPort, inference: MockInferencePort) -> VoiceTranslationService {
        VoiceTranslationService::new(Arc::new(speech), Arc::new(inference))
    }

    mod speech_to_text {
        use super::*;

        #[tokio::test]
        async fn uses_source_language_of_direction() {
            let mut speech = MockSpeechPort::new();
            speech
                .expect_transcribe()
                .withf(|audio, format, language| {
                    *audio == vec![1u8, 2, 3]
                        && *format == AudioFormat::Ogg
                        && *language == Language::Russian
                })
                .times(1)
                .returning(|_, _, language| {
                    Ok(TranscriptionResult {
                        text: "  Привет, как дела? ".to_string(),
                        language,
                    })
                });

            let service = service(speech, MockInferencePort::new());
            let text = service
                .speech_to_text(vec![1, 2, 3], AudioFormat::Ogg, Direction::RuEn)
                .await
                .unwrap();

            assert_eq!(text, "Привет, как дела?");
        }

        #[tokio::test]
        async fn failure_is_transcription_failed() {
            let mut speech = MockSpeechPort::new();
            speech
                .expect_transcribe()
                .returning(|_, _, _| Err(ApplicationError::Speech("model missing".to_string())));

            let service = service(speech, MockInferencePort::new());
            let result = service
                .speech_to_text(vec![0], AudioFormat::Wav, Direction::EnRu)
                .await;

            match result {
                Err(ApplicationError::TranscriptionFailed(detail)) => {
                    assert!(detail.contains("model missing"));
                },
                other => unreachable!("Expected TranscriptionFailed, got {other:?}"),
            }
        }
    }

    mod translate {
        use super::*;

        #[tokio::test]
        async fn en_ru_sends_instruction_and_raw_text() {
            let mut inference = MockInferencePort::new();
            inference
                .expect_generate_with_system()
                .withf(|system, message| {
                    system.contains("English sentence into Russian")
                        && system.contains("English: Hello")
                        && system.ends_with("Russian:")
                        && message == "Hello"
                })
                .times(1)
                .returning(|_, _| Ok(inference_result("  \"Привет\"\n")));

            let service = service(MockSpeechPort::new(), inference);
            let translation = service.translate("Hello", Direction::EnRu).await.unwrap();

            assert_eq!(translation, "Привет");
        }

        #[tokio::test]
        async fn surrounding_whitespace_reaches_model_unchanged() {
            let mut inference = MockInferencePort::new();
            inference
                .expect_generate_with_system()
                .withf(|system, message| {
                    system.contains("English:  Hello \n") && message == " Hello \n"
                })
                .times(1)
                .returning(|_, _| Ok(inference_result("Привет")));

            let service = service(MockSpeechPort::new(), inference);
            let translation = service.translate(" Hello \n", Direction::EnRu).await.unwrap();

            assert_eq!(translation, "Привет");
        }

        #[tokio::test]
        async fn ru_en_uses_reverse_instruction() {
            let mut inference = MockInferencePort::new();
            inference
                .expect_generate_with_system()
                .withf(|system, _| {
                    system.contains("Russian sentence into English")
                        && system.contains("Russian: Привет")
                })
                .returning(|_, _| Ok(inference_result("Hello")));

            let service = service(MockSpeechPort::new(), inference);
            let translation = service.translate("Привет", Direction::RuEn).await.unwrap();

            assert_eq!(translation, "Hello");
        }

        #[tokio::test]
        async fn empty_text_skips_model() {
            let mut inference = MockInferencePort::new();
            inference.expect_generate_with_system().never();

            let service = service(MockSpeechPort::new(), inference);
            let translation =
                tokio_test::assert_ok!(service.translate("   ", Direction::EnRu).await);

            assert!(translation.is_empty());
        }

        #[tokio::test]
        async fn failure_is_translation_failed() {
            let mut inference = MockInferencePort::new();
            inference
                .expect_generate_with_system()
                .returning(|_, _| {
                    Err(ApplicationError::Inference("connection refused".to_string()))
                });

            let service = service(MockSpeechPort::new(), inference);
            let result = service.translate("Hello", Direction::EnRu).await;

            assert!(matches!(
                result,
                Err(ApplicationError::TranslationFailed(ref d)) if d.contains("connection refused")
            ));
        }
    }

    mod text_to_speech {
        use super::*;

        #[tokio::test]
        async fn en_ru_omits_accent() {
            let mut speech = MockSpeechPort::new();
            speech
                .expect_synthesize()
                .with(
                    eq("Привет".to_string()),
                    eq(Language::Russian),
                    eq(None::<Accent>),
                )
                .times(1)
                .returning(|_, _, _| Ok(mp3(b"ru")));

            let service = service(speech, MockInferencePort::new());
            let audio = service
                .text_to_speech("Привет", "co.uk", Direction::EnRu)
                .await
                .unwrap();

            assert_eq!(audio.audio_data, b"ru");
        }

        #[tokio::test]
        async fn ru_en_passes_requested_accent() {
            let mut speech = MockSpeechPort::new();
            speech
                .expect_synthesize()
                .with(
                    eq("Hello".to_string()),
                    eq(Language::English),
                    eq(Some(Accent::normalize("co.uk"))),
                )
                .times(1)
                .returning(|_, _, _| Ok(mp3(b"uk")));

            let service = service(speech, MockInferencePort::new());
            let audio = service
                .text_to_speech("Hello", "co.uk", Direction::RuEn)
                .await
                .unwrap();

            assert_eq!(audio.audio_data, b"uk");
        }

        #[tokio::test]
        async fn ru_en_default_voice_becomes_com() {
            for voice in ["", "default", "DEFAULT"] {
                let mut speech = MockSpeechPort::new();
                speech
                    .expect_synthesize()
                    .withf(|_, _, accent| {
                        accent.as_ref().map(Accent::tld) == Some("com")
                    })
                    .times(1)
                    .returning(|_, _, _| Ok(mp3(b"us")));

                let service = service(speech, MockInferencePort::new());
                let result = service.text_to_speech("Hello", voice, Direction::RuEn).await;

                assert!(result.is_ok(), "voice {voice:?} should normalize to com");
            }
        }

        #[tokio::test]
        async fn failure_is_synthesis_failed() {
            let mut speech = MockSpeechPort::new();
            speech
                .expect_synthesize()
                .returning(|_, _, _| Err(ApplicationError::RateLimited));

            let service = service(speech, MockInferencePort::new());
            let result = service.text_to_speech("Hello", "com", Direction::RuEn).await;

            assert!(matches!(result, Err(ApplicationError::SynthesisFailed(_))));
        }
    }

    mod process {
        use super::*;

        #[tokio::test]
        async fn runs_all_stages() {
            let mut speech = MockSpeechPort::new();
            speech.expect_transcribe().times(1).returning(|_, _, language| {
                Ok(TranscriptionResult {
                    text: "Good morning".to_string(),
                    language,
                })
            });
            speech
                .expect_synthesize()
                .with(
                    eq("Доброе утро".to_string()),
                    eq(Language::Russian),
                    eq(None::<Accent>),
                )
                .times(1)
                .returning(|_, _, _| Ok(mp3(b"mp3")));

            let mut inference = MockInferencePort::new();
            inference
                .expect_generate_with_system()
                .times(1)
                .returning(|_, _| Ok(inference_result("Доброе утро")));

            let service = service(speech, inference);
            let outcome = service
                .process(vec![1; 8], AudioFormat::Wav, "", Direction::EnRu)
                .await
                .unwrap();

            assert_eq!(outcome.direction, Direction::EnRu);
            assert_eq!(outcome.source_text, "Good morning");
            assert_eq!(outcome.translated_text, "Доброе утро");
            assert_eq!(outcome.audio.audio_data, b"mp3");
        }

        #[tokio::test]
        async fn silence_skips_translation_and_synthesis() {
            let mut speech = MockSpeechPort::new();
            speech.expect_transcribe().returning(|_, _, language| {
                Ok(TranscriptionResult {
                    text: String::new(),
                    language,
                })
            });
            speech.expect_synthesize().never();

            let mut inference = MockInferencePort::new();
            inference.expect_generate_with_system().never();

            let service = service(speech, inference);
            let outcome = service
                .process(vec![0; 8], AudioFormat::Wav, "com", Direction::EnRu)
                .await
                .unwrap();

            assert!(outcome.source_text.is_empty());
            assert!(outcome.audio.is_empty());
        }

        #[tokio::test]
        async fn empty_translation_skips_synthesis_but_keeps_source() {
            let mut speech = MockSpeechPort::new();
            speech.expect_transcribe().returning(|_, _, language| {
                Ok(TranscriptionResult {
                    text: "Hello".to_string(),
                    language,
                })
            });
            speech.expect_synthesize().never();

            let mut inference = MockInferencePort::new();
            inference
                .expect_generate_with_system()
                .times(1)
                .returning(|_, _| Ok(inference_result("\"\"")));

            let service = service(speech, inference);
            let outcome = service
                .process(vec![1; 8], AudioFormat::Wav, "com", Direction::EnRu)
                .await
                .unwrap();

            assert_eq!(outcome.source_text, "Hello");
            assert!(outcome.translated_text.is_empty());
            assert!(outcome.audio.is_empty());
        }

        #[tokio::test]
        async fn stops_at_first_failure() {
            let mut speech = MockSpeechPort::new();
            speech
                .expect_transcribe()
                .returning(|_, _, _| Err(ApplicationError::Speech("boom".to_string())));
            speech.expect_synthesize().never();

            let mut inference = MockInferencePort::new();
            inference.expect_generate_with_system().never();

            let service = service(speech, inference);
            let result = service
                .process(vec![0; 8], AudioFormat::Wav, "com", Direction::RuEn)
                .await;

            assert!(matches!(result, Err(ApplicationError::TranscriptionFailed(_))));
        }
    }
}
