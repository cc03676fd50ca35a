//! Speech processing errors

use thiserror::Error;

/// Errors raised by speech recognizers and synthesizers
#[derive(Debug, Error)]
pub enum SpeechError {
    /// Could not reach the speech endpoint
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// HTTP request could not be completed
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// Audio was rejected before processing
    #[error("Invalid audio: {0}")]
    InvalidAudio(String),

    /// The recognizer ran but did not produce a transcript
    #[error("Transcription failed: {0}")]
    TranscriptionFailed(String),

    /// The synthesizer refused the text or returned an error status
    #[error("Synthesis failed: {0}")]
    SynthesisFailed(String),

    /// Response did not have the expected shape
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Request exceeded the configured timeout
    #[error("Speech processing timeout after {0}ms")]
    Timeout(u64),

    /// The endpoint throttled us (HTTP 429)
    #[error("Rate limit exceeded")]
    RateLimited,

    /// Provider configuration is invalid
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Provider binary or model is missing
    #[error("Provider not available: {0}")]
    NotAvailable(String),
}

impl SpeechError {
    /// Map a transport error, reporting timeouts with the configured limit
    pub fn from_transport(err: &reqwest::Error, timeout_ms: u64) -> Self {
        if err.is_timeout() {
            Self::Timeout(timeout_ms)
        } else if err.is_connect() {
            Self::ConnectionFailed(err.to_string())
        } else {
            Self::RequestFailed(err.to_string())
        }
    }
}
