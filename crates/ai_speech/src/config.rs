//! Configuration for speech processing

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Placeholder in the TTS endpoint template replaced by the accent's top-level domain
pub const TLD_PLACEHOLDER: &str = "{tld}";

/// Configuration for speech processing services
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SpeechConfig {
    /// Local speech-to-text (whisper.cpp)
    #[serde(default)]
    pub stt: LocalSttConfig,

    /// Text-to-speech (Google Translate speech endpoint)
    #[serde(default)]
    pub tts: GoogleTtsConfig,
}

impl SpeechConfig {
    /// Validate both sections
    ///
    /// # Errors
    ///
    /// Returns an error if either section is invalid.
    pub fn validate(&self) -> Result<(), String> {
        self.stt.validate()?;
        self.tts.validate()
    }
}

/// Configuration for the whisper.cpp recognizer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocalSttConfig {
    /// Path or name of the whisper.cpp executable
    #[serde(default = "default_executable_path")]
    pub executable_path: PathBuf,

    /// Path to the GGML model file
    #[serde(default = "default_model_path")]
    pub model_path: PathBuf,

    /// Number of threads passed to whisper.cpp
    #[serde(default = "default_threads")]
    pub threads: u16,
}

fn default_executable_path() -> PathBuf {
    PathBuf::from("whisper-cli")
}

// Multilingual model; the `.en` models cannot recognize Russian
fn default_model_path() -> PathBuf {
    PathBuf::from("models/ggml-base.bin")
}

const fn default_threads() -> u16 {
    4
}

impl Default for LocalSttConfig {
    fn default() -> Self {
        Self {
            executable_path: default_executable_path(),
            model_path: default_model_path(),
            threads: default_threads(),
        }
    }
}

impl LocalSttConfig {
    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn validate(&self) -> Result<(), String> {
        if self.executable_path.as_os_str().is_empty() {
            return Err("whisper.cpp executable path must not be empty".to_string());
        }

        if self.model_path.as_os_str().is_empty() {
            return Err("whisper.cpp model path must not be empty".to_string());
        }

        if self.threads == 0 {
            return Err("Thread count must be greater than 0".to_string());
        }

        Ok(())
    }
}

/// Configuration for the Google Translate speech endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoogleTtsConfig {
    /// Endpoint base URL; `{tld}` is replaced by the accent's top-level domain
    #[serde(default = "default_endpoint_template")]
    pub endpoint_template: String,

    /// Accent used when none is given or the language has no accents
    #[serde(default = "default_accent")]
    pub default_accent: String,

    /// Request slower speech
    #[serde(default)]
    pub slow: bool,

    /// Request timeout in milliseconds
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

fn default_endpoint_template() -> String {
    "https://translate.google.{tld}".to_string()
}

fn default_accent() -> String {
    "com".to_string()
}

const fn default_timeout_ms() -> u64 {
    30000 // 30 seconds
}

impl Default for GoogleTtsConfig {
    fn default() -> Self {
        Self {
            endpoint_template: default_endpoint_template(),
            default_accent: default_accent(),
            slow: false,
            timeout_ms: default_timeout_ms(),
        }
    }
}

impl GoogleTtsConfig {
    /// Resolve the endpoint base URL for an accent
    #[must_use]
    pub fn endpoint_for(&self, tld: &str) -> String {
        self.endpoint_template
            .replace(TLD_PLACEHOLDER, tld)
            .trim_end_matches('/')
            .to_string()
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn validate(&self) -> Result<(), String> {
        if !self.endpoint_template.starts_with("http://")
            && !self.endpoint_template.starts_with("https://")
        {
            return Err(format!(
                "TTS endpoint must start with http:// or https://, got '{}'",
                self.endpoint_template
            ));
        }

        if self.default_accent.trim().is_empty() {
            return Err("Default accent must not be empty".to_string());
        }

        if self.timeout_ms == 0 {
            return Err("Timeout must be greater than 0".to_string());
        }

        Ok(())
    }
}
