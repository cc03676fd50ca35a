//! Whisper.cpp Local Speech-to-Text Provider
//!
//! Implements `SpeechToText` using the whisper.cpp CLI for local transcription.
//!
//! # Prerequisites
//!
//! - whisper.cpp built with the `whisper-cli` binary available in PATH
//! - A multilingual GGML model file (e.g., ggml-base.bin, ggml-small.bin)
//!
//! ```bash
//! git clone https://github.com/ggerganov/whisper.cpp
//! cd whisper.cpp
//! cmake -B build && cmake --build build -j --config Release
//! ./models/download-ggml-model.sh base
//! ```
//!
//! Audio is handed to whisper.cpp through a temporary file which is removed
//! once the process finishes, whether or not transcription succeeded.

use std::path::Path;
use std::process::Stdio;

use async_trait::async_trait;
use tempfile::NamedTempFile;
use tokio::process::Command;
use tracing::{debug, error, instrument, warn};

use crate::config::LocalSttConfig;
use crate::error::SpeechError;
use crate::ports::SpeechToText;
use crate::types::{AudioData, Transcription};

/// Local STT provider using whisper.cpp
#[derive(Debug, Clone)]
pub struct WhisperCppProvider {
    config: LocalSttConfig,
}

impl WhisperCppProvider {
    /// Create a new whisper.cpp provider
    ///
    /// # Errors
    ///
    /// Returns `SpeechError::Configuration` if the configuration is invalid.
    pub fn new(config: LocalSttConfig) -> Result<Self, SpeechError> {
        config.validate().map_err(SpeechError::Configuration)?;
        Ok(Self { config })
    }

    fn executable(&self) -> &Path {
        &self.config.executable_path
    }

    fn model(&self) -> &Path {
        &self.config.model_path
    }

    /// Run whisper.cpp on an audio file and return its stdout transcript
    #[instrument(skip(self, audio_path), fields(model = %self.model().display()))]
    async fn run_whisper(
        &self,
        audio_path: &Path,
        language: Option<&str>,
    ) -> Result<String, SpeechError> {
        let mut cmd = Command::new(self.executable());

        cmd.arg("-m")
            .arg(self.model())
            .arg("-f")
            .arg(audio_path)
            .arg("-t")
            .arg(self.config.threads.to_string())
            .arg("--no-timestamps")
            .arg("-np");

        if let Some(lang) = language {
            cmd.arg("-l").arg(lang);
        }

        cmd.stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());

        debug!("Running whisper.cpp: {:?}", cmd);

        let output = cmd.output().await.map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                SpeechError::NotAvailable(format!(
                    "whisper.cpp not found at '{}'",
                    self.executable().display()
                ))
            } else {
                SpeechError::TranscriptionFailed(format!("Failed to run whisper.cpp: {e}"))
            }
        })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            error!("whisper.cpp failed: {}", stderr.trim());
            return Err(SpeechError::TranscriptionFailed(format!(
                "whisper.cpp exited with {}: {}",
                output.status,
                stderr.trim()
            )));
        }

        Ok(clean_transcript(&String::from_utf8_lossy(&output.stdout)))
    }

    /// Write audio data to a temporary file named with the format's extension
    async fn write_temp_audio(audio: &AudioData) -> Result<NamedTempFile, SpeechError> {
        let suffix = format!(".{}", audio.format().extension());
        let temp_file = NamedTempFile::with_suffix(&suffix).map_err(|e| {
            SpeechError::TranscriptionFailed(format!("Failed to create temp file: {e}"))
        })?;

        tokio::fs::write(temp_file.path(), audio.data())
            .await
            .map_err(|e| {
                SpeechError::TranscriptionFailed(format!("Failed to write audio data: {e}"))
            })?;

        Ok(temp_file)
    }
}

/// Join transcript lines, dropping whisper's non-speech markers like `[BLANK_AUDIO]`
fn clean_transcript(stdout: &str) -> String {
    stdout
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .filter(|line| !(line.starts_with('[') && line.ends_with(']')))
        .collect::<Vec<_>>()
        .join(" ")
}

#[async_trait]
impl SpeechToText for WhisperCppProvider {
    #[instrument(
        skip(self, audio),
        fields(format = ?audio.format(), size = audio.size_bytes(), language = %language)
    )]
    async fn transcribe_with_language(
        &self,
        audio: AudioData,
        language: &str,
    ) -> Result<Transcription, SpeechError> {
        if audio.is_empty() {
            return Err(SpeechError::InvalidAudio("Audio data is empty".to_string()));
        }

        let temp_file = Self::write_temp_audio(&audio).await?;
        debug!(path = %temp_file.path().display(), "Wrote audio to temp file");

        let lang = (!language.is_empty()).then_some(language);
        let result = self.run_whisper(temp_file.path(), lang).await;

        if let Err(e) = temp_file.close() {
            warn!(error = %e, "Failed to remove temp audio file");
        }

        let text = result?;
        if text.is_empty() {
            warn!("whisper.cpp returned empty transcription");
        }

        let mut transcription = Transcription::new(text);
        if let Some(lang) = lang {
            transcription = transcription.with_language(lang);
        }
        Ok(transcription)
    }

    async fn is_available(&self) -> bool {
        let executable_exists = self.executable().exists() || {
            Command::new(self.executable())
                .arg("--help")
                .stdout(Stdio::null())
                .stderr(Stdio::null())
                .status()
                .await
                .map(|s| s.success())
                .unwrap_or(false)
        };

        let model_exists = self.model().exists();

        debug!(
            "whisper.cpp availability: executable={}, model={}",
            executable_exists, model_exists
        );

        executable_exists && model_exists
    }

    fn model_name(&self) -> &str {
        self.model()
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("whisper.cpp")
    }
}
