//! Application configuration
//!
//! Sources, lowest precedence first:
//! 1. Built-in defaults
//! 2. `config.toml` in the working directory, or an explicit file
//! 3. `VOICE_TRANSLATOR_*` environment variables, with `__` between nested
//!    keys (e.g. `VOICE_TRANSLATOR_SPEECH__STT__THREADS=8`)
//! 4. `OLLAMA_BASE_URL`

use std::path::Path;

use ai_core::{InferenceConfig, config::OLLAMA_BASE_URL_ENV};
use ai_speech::SpeechConfig;
use serde::{Deserialize, Serialize};

use crate::telemetry::LoggingConfig;

/// Prefix of environment variables read into the configuration
pub const ENV_PREFIX: &str = "VOICE_TRANSLATOR";

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Language model (Ollama) configuration
    #[serde(default)]
    pub inference: InferenceConfig,

    /// Speech recognition and synthesis configuration
    #[serde(default)]
    pub speech: SpeechConfig,

    /// Log output configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration, reading `path` instead of `config.toml` when given
    ///
    /// An explicit file must exist; the implicit `config.toml` is optional.
    pub fn load_from(path: Option<&Path>) -> Result<Self, config::ConfigError> {
        Self::build(path, None, std::env::var(OLLAMA_BASE_URL_ENV).ok())
    }

    /// Assemble the configuration from its sources
    ///
    /// `env` replaces the process environment for the prefixed variables.
    pub(crate) fn build(
        path: Option<&Path>,
        env: Option<config::Map<String, String>>,
        ollama_base_url: Option<String>,
    ) -> Result<Self, config::ConfigError> {
        let defaults = InferenceConfig::default();

        let file = match path {
            Some(path) => config::File::from(path).required(true),
            None => config::File::with_name("config").required(false),
        };

        let ollama_base_url = ollama_base_url.filter(|url| !url.trim().is_empty());

        let builder = config::Config::builder()
            // Start with defaults
            .set_default("inference.base_url", defaults.base_url)?
            .set_default("inference.default_model", defaults.default_model)?
            .add_source(file)
            // Override with environment variables (e.g., VOICE_TRANSLATOR_LOGGING__FORMAT)
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true)
                    .source(env),
            )
            .set_override_option("inference.base_url", ollama_base_url)?;

        let mut config: Self = builder.build()?.try_deserialize()?;
        let base_url = config.inference.base_url.clone();
        config.inference = config.inference.with_base_url(base_url);
        Ok(config)
    }

    /// Validate every section
    ///
    /// # Errors
    ///
    /// Returns a description of the first invalid setting.
    pub fn validate(&self) -> Result<(), String> {
        self.inference
            .validate()
            .map_err(|e| format!("inference: {e}"))?;
        self.speech.validate().map_err(|e| format!("speech: {e}"))?;
        self.logging.validate().map_err(|e| format!("logging: {e}"))
    }
}
