//! Application-level errors

use thiserror::Error;

/// Errors that can occur in the application layer
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// Speech-to-text stage failed
    #[error("Transcription failed: {0}")]
    TranscriptionFailed(String),

    /// Translation stage failed
    #[error("Translation failed: {0}")]
    TranslationFailed(String),

    /// Text-to-speech stage failed
    #[error("Synthesis failed: {0}")]
    SynthesisFailed(String),

    /// Inference/AI error
    #[error("Inference error: {0}")]
    Inference(String),

    /// Speech provider error
    #[error("Speech error: {0}")]
    Speech(String),

    /// A backing service could not be reached
    #[error("External service error: {0}")]
    ExternalService(String),

    /// Rate limit exceeded
    #[error("Rate limit exceeded")]
    RateLimited,

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl ApplicationError {
    /// Message of a stage failure without the stage prefix
    ///
    /// For other variants this is the full display message.
    pub fn detail(&self) -> String {
        match self {
            Self::TranscriptionFailed(detail)
            | Self::TranslationFailed(detail)
            | Self::SynthesisFailed(detail) => detail.clone(),
            other => other.to_string(),
        }
    }
}
