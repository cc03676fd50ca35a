//! Service wiring
//!
//! Builds the adapters from an [`AppConfig`] and hands them to the
//! translation service as trait objects.

use std::sync::Arc;

use application::{
    ApplicationError, VoiceTranslationService,
    ports::{InferencePort, SpeechPort},
};
use tracing::info;

use crate::adapters::{OllamaInferenceAdapter, SpeechAdapter};
use crate::config::AppConfig;

/// Build the voice translation service for `config`
///
/// # Errors
///
/// Returns a configuration error if any section is invalid.
pub fn build_service(config: &AppConfig) -> Result<VoiceTranslationService, ApplicationError> {
    config.validate().map_err(ApplicationError::Configuration)?;

    let inference: Arc<dyn InferencePort> =
        Arc::new(OllamaInferenceAdapter::new(config.inference.clone())?);
    let speech: Arc<dyn SpeechPort> = Arc::new(SpeechAdapter::new(config.speech.clone())?);

    info!(
        ollama = %config.inference.base_url,
        model = %config.inference.default_model,
        whisper_model = %config.speech.stt.model_path.display(),
        "Voice translation service ready"
    );

    Ok(VoiceTranslationService::new(speech, inference))
}
