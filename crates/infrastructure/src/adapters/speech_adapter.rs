//! Speech adapter - Implements SpeechPort using ai_speech crate

use std::sync::Arc;

use ai_speech::{
    AudioData, AudioFormat as AiAudioFormat, GoogleTtsProvider, SpeechConfig, SpeechError,
    SpeechToText, TextToSpeech, WhisperCppProvider,
};
use application::error::ApplicationError;
use application::ports::{SpeechPort, SynthesisResult, TranscriptionResult, VoiceInfo};
use async_trait::async_trait;
use domain::{Accent, AudioFormat, Language};
use tracing::{debug, instrument};

/// Adapter pairing a speech recognizer with a speech synthesizer
pub struct SpeechAdapter {
    recognizer: Arc<dyn SpeechToText>,
    synthesizer: Arc<dyn TextToSpeech>,
}

impl std::fmt::Debug for SpeechAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SpeechAdapter")
            .field("recognizer", &self.recognizer.model_name())
            .field("synthesizer", &self.synthesizer.default_accent())
            .finish()
    }
}

impl SpeechAdapter {
    /// Create the adapter with whisper.cpp recognition and Google synthesis
    ///
    /// # Errors
    ///
    /// Returns an error if either provider rejects its configuration.
    pub fn new(config: SpeechConfig) -> Result<Self, ApplicationError> {
        let recognizer = WhisperCppProvider::new(config.stt).map_err(Self::map_config_error)?;
        let synthesizer = GoogleTtsProvider::new(config.tts).map_err(Self::map_config_error)?;

        Ok(Self::with_providers(
            Arc::new(recognizer),
            Arc::new(synthesizer),
        ))
    }

    /// Create the adapter from already constructed providers
    pub fn with_providers(
        recognizer: Arc<dyn SpeechToText>,
        synthesizer: Arc<dyn TextToSpeech>,
    ) -> Self {
        Self {
            recognizer,
            synthesizer,
        }
    }

    fn map_config_error(e: SpeechError) -> ApplicationError {
        ApplicationError::Configuration(e.to_string())
    }

    /// Convert domain AudioFormat to ai_speech AudioFormat
    const fn domain_to_ai_format(format: AudioFormat) -> AiAudioFormat {
        match format {
            AudioFormat::Wav => AiAudioFormat::Wav,
            AudioFormat::Mp3 => AiAudioFormat::Mp3,
            AudioFormat::Ogg => AiAudioFormat::Ogg,
            AudioFormat::Flac => AiAudioFormat::Flac,
            AudioFormat::Webm => AiAudioFormat::Webm,
        }
    }

    /// Convert ai_speech AudioFormat to domain AudioFormat
    const fn ai_to_domain_format(format: AiAudioFormat) -> AudioFormat {
        match format {
            AiAudioFormat::Wav => AudioFormat::Wav,
            AiAudioFormat::Mp3 => AudioFormat::Mp3,
            AiAudioFormat::Ogg => AudioFormat::Ogg,
            AiAudioFormat::Flac => AudioFormat::Flac,
            AiAudioFormat::Webm => AudioFormat::Webm,
        }
    }

    /// Convert ai_speech error to application error
    fn map_error(e: SpeechError) -> ApplicationError {
        match e {
            SpeechError::Configuration(msg) => ApplicationError::Configuration(msg),
            SpeechError::ConnectionFailed(_)
            | SpeechError::RequestFailed(_)
            | SpeechError::Timeout(_) => ApplicationError::ExternalService(e.to_string()),
            SpeechError::RateLimited => ApplicationError::RateLimited,
            other => ApplicationError::Speech(other.to_string()),
        }
    }
}

#[async_trait]
impl SpeechPort for SpeechAdapter {
    #[instrument(skip(self, audio_data), fields(audio_size = audio_data.len(), format = %format))]
    async fn transcribe(
        &self,
        audio_data: Vec<u8>,
        format: AudioFormat,
        language: Language,
    ) -> Result<TranscriptionResult, ApplicationError> {
        let audio = AudioData::new(audio_data, Self::domain_to_ai_format(format));

        let transcription = self
            .recognizer
            .transcribe_with_language(audio, language.code())
            .await
            .map_err(Self::map_error)?;

        debug!(text_len = transcription.text.len(), "Transcription completed");

        Ok(TranscriptionResult {
            text: transcription.text,
            language,
        })
    }

    #[instrument(skip(self, text), fields(text_len = text.len(), language = language.code()))]
    async fn synthesize(
        &self,
        text: String,
        language: Language,
        accent: Option<Accent>,
    ) -> Result<SynthesisResult, ApplicationError> {
        let audio = self
            .synthesizer
            .synthesize(&text, language.code(), accent.as_ref().map(Accent::tld))
            .await
            .map_err(Self::map_error)?;

        let format = Self::ai_to_domain_format(audio.format());
        debug!(audio_size = audio.size_bytes(), format = %format, "Synthesis completed");

        Ok(SynthesisResult {
            audio_data: audio.into_data(),
            format,
        })
    }

    async fn is_recognizer_available(&self) -> bool {
        self.recognizer.is_available().await
    }

    async fn is_synthesizer_available(&self) -> bool {
        self.synthesizer.is_available().await
    }

    fn list_voices(&self) -> Vec<VoiceInfo> {
        self.synthesizer
            .list_accents()
            .into_iter()
            .map(|v| VoiceInfo {
                id: v.id,
                name: v.name,
                languages: v.languages,
            })
            .collect()
    }

    fn recognizer_model(&self) -> String {
        self.recognizer.model_name().to_string()
    }
}
