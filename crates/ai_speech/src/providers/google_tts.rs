//! Google Translate speech provider
//!
//! Implements `TextToSpeech` against the batch RPC endpoint behind Google
//! Translate's "listen" button, the same protocol the gTTS library speaks.
//!
//! # Protocol
//!
//! Each chunk of at most 100 characters is posted as a form field `f.req`
//! carrying the `jQ1olc` RPC. The response is a line-oriented JSON stream;
//! the line for `jQ1olc` holds a nested JSON string whose first element is
//! base64-encoded MP3 audio. Chunk audio is concatenated in order.
//!
//! The accent is chosen by the top-level domain the request is sent to.

use std::time::Duration;

use async_trait::async_trait;
use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use bytes::{Bytes, BytesMut};
use domain::{Accent, Language};
use reqwest::{Client, StatusCode};
use serde_json::Value;
use tracing::{debug, info, instrument, warn};

use crate::config::GoogleTtsConfig;
use crate::error::SpeechError;
use crate::ports::TextToSpeech;
use crate::text_chunker::{MAX_CHUNK_CHARS, split_text};
use crate::types::{AudioData, AudioFormat, VoiceInfo};

/// RPC identifier of the speech method
const RPC_ID: &str = "jQ1olc";

/// Path of the batch RPC endpoint below the Translate host
const BATCH_EXECUTE_PATH: &str = "/_/TranslateWebserverUi/data/batchexecute";

/// Text-to-speech provider backed by Google Translate
#[derive(Debug, Clone)]
pub struct GoogleTtsProvider {
    client: Client,
    config: GoogleTtsConfig,
}

impl GoogleTtsProvider {
    /// Create a new provider
    ///
    /// # Errors
    ///
    /// Returns `SpeechError::Configuration` if the configuration is invalid
    /// or the HTTP client cannot be built.
    pub fn new(config: GoogleTtsConfig) -> Result<Self, SpeechError> {
        config.validate().map_err(SpeechError::Configuration)?;

        let client = Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()
            .map_err(|e| SpeechError::Configuration(format!("Failed to build HTTP client: {e}")))?;

        info!(
            endpoint = %config.endpoint_template,
            default_accent = %config.default_accent,
            "Google TTS provider initialized"
        );

        Ok(Self { client, config })
    }

    /// Resolve the top-level domain to send a request to
    fn resolve_tld<'a>(&'a self, accent: Option<&'a str>) -> Result<&'a str, SpeechError> {
        let tld = accent
            .map(str::trim)
            .filter(|a| !a.is_empty())
            .unwrap_or(self.config.default_accent.as_str());

        if !tld.chars().all(|c| c.is_ascii_alphanumeric() || c == '.') {
            return Err(SpeechError::SynthesisFailed(format!(
                "Invalid accent '{tld}'"
            )));
        }

        Ok(tld)
    }

    /// Synthesize one chunk and return its MP3 bytes
    async fn synthesize_chunk(
        &self,
        url: &str,
        chunk: &str,
        language: &str,
    ) -> Result<Bytes, SpeechError> {
        let payload = build_rpc_payload(chunk, language, self.config.slow);

        let response = self
            .client
            .post(url)
            .form(&[("f.req", payload)])
            .send()
            .await
            .map_err(|e| SpeechError::from_transport(&e, self.config.timeout_ms))?;

        let status = response.status();
        if status == StatusCode::TOO_MANY_REQUESTS {
            return Err(SpeechError::RateLimited);
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(SpeechError::SynthesisFailed(format!(
                "Status {status}: {}",
                body.trim()
            )));
        }

        let body = response
            .text()
            .await
            .map_err(|e| SpeechError::from_transport(&e, self.config.timeout_ms))?;

        parse_audio_response(&body)
    }
}

/// Build the `f.req` form value for one chunk
pub(crate) fn build_rpc_payload(text: &str, language: &str, slow: bool) -> String {
    let speed = if slow { Value::Bool(true) } else { Value::Null };
    let parameters = serde_json::json!([text, language, speed, "null"]).to_string();
    serde_json::json!([[[RPC_ID, parameters, null, "generic"]]]).to_string()
}

/// Extract and decode the audio from a batch RPC response
pub(crate) fn parse_audio_response(body: &str) -> Result<Bytes, SpeechError> {
    for line in body.lines().filter(|l| l.contains(RPC_ID)) {
        let Ok(Value::Array(entries)) = serde_json::from_str::<Value>(line) else {
            continue;
        };

        for entry in entries {
            if entry.get(1).and_then(Value::as_str) != Some(RPC_ID) {
                continue;
            }

            let inner = entry.get(2).and_then(Value::as_str).ok_or_else(|| {
                SpeechError::SynthesisFailed("Speech endpoint returned no audio".to_string())
            })?;

            let inner: Value = serde_json::from_str(inner)
                .map_err(|e| SpeechError::InvalidResponse(format!("Malformed RPC payload: {e}")))?;

            let encoded = inner.get(0).and_then(Value::as_str).ok_or_else(|| {
                SpeechError::InvalidResponse("RPC payload carries no audio".to_string())
            })?;

            let audio = BASE64
                .decode(encoded)
                .map_err(|e| SpeechError::InvalidResponse(format!("Invalid base64 audio: {e}")))?;

            return Ok(Bytes::from(audio));
        }
    }

    Err(SpeechError::InvalidResponse(
        "No speech payload in response".to_string(),
    ))
}

#[async_trait]
impl TextToSpeech for GoogleTtsProvider {
    #[instrument(skip(self, text), fields(text_len = text.len()))]
    async fn synthesize(
        &self,
        text: &str,
        language: &str,
        accent: Option<&str>,
    ) -> Result<AudioData, SpeechError> {
        let chunks = split_text(text, MAX_CHUNK_CHARS);
        if chunks.is_empty() {
            return Err(SpeechError::SynthesisFailed(
                "No speakable text to synthesize".to_string(),
            ));
        }

        let tld = self.resolve_tld(accent)?;
        let url = format!("{}{BATCH_EXECUTE_PATH}", self.config.endpoint_for(tld));
        debug!(url = %url, chunks = chunks.len(), "Synthesizing speech");

        let mut audio = BytesMut::new();
        for chunk in &chunks {
            let bytes = self.synthesize_chunk(&url, chunk, language).await?;
            audio.extend_from_slice(&bytes);
        }

        info!(bytes = audio.len(), tld = %tld, "Synthesized speech");
        Ok(AudioData::new(audio.to_vec(), AudioFormat::Mp3))
    }

    fn list_accents(&self) -> Vec<VoiceInfo> {
        let languages = [Language::English.code()];
        Accent::known()
            .map(|accent| {
                let name = accent.label().unwrap_or_default();
                VoiceInfo::new(accent.tld(), name)
                    .with_description(format!("translate.google.{}", accent.tld()))
                    .with_languages(&languages)
            })
            .collect()
    }

    async fn is_available(&self) -> bool {
        let url = self.config.endpoint_for(&self.config.default_accent);
        match self
            .client
            .get(&url)
            .timeout(Duration::from_secs(5))
            .send()
            .await
        {
            Ok(response) => {
                let reachable = !response.status().is_server_error();
                debug!(status = %response.status(), "Speech endpoint probed");
                reachable
            },
            Err(e) => {
                warn!(error = %e, "Speech endpoint unreachable");
                false
            },
        }
    }

    fn default_accent(&self) -> &str {
        &self.config.default_accent
    }
}
