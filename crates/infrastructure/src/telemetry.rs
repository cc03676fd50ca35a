//! Log output initialization
//!
//! Sets up a `tracing-subscriber` registry with an `EnvFilter` and a console
//! formatter, either human-readable or JSON lines.

use serde::{Deserialize, Serialize};
use tracing::debug;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Console log format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable lines
    #[default]
    Text,
    /// One JSON object per event
    Json,
}

/// Configuration for log output
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Output format
    #[serde(default)]
    pub format: LogFormat,

    /// Filter directives (e.g., "info", "application=debug,ai_speech=trace")
    #[serde(default = "default_filter")]
    pub filter: String,
}

fn default_filter() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            format: LogFormat::default(),
            filter: default_filter(),
        }
    }
}

impl LoggingConfig {
    /// Validate the filter directives
    ///
    /// # Errors
    ///
    /// Returns an error if the filter cannot be parsed.
    pub fn validate(&self) -> Result<(), String> {
        EnvFilter::try_new(&self.filter)
            .map(|_| ())
            .map_err(|e| format!("Invalid log filter '{}': {e}", self.filter))
    }
}

/// Error type for log initialization
#[derive(Debug, thiserror::Error)]
pub enum TelemetryError {
    /// Filter directives could not be parsed
    #[error("Invalid log filter: {0}")]
    Filter(String),

    /// Failed to install the tracing subscriber
    #[error("Failed to initialize tracing: {0}")]
    Init(String),
}

/// Pick the filter directives: `RUST_LOG`, then the override, then the config
fn resolve_filter(
    config: &LoggingConfig,
    filter_override: Option<&str>,
    rust_log: Option<String>,
) -> String {
    rust_log
        .filter(|value| !value.trim().is_empty())
        .or_else(|| filter_override.map(str::to_string))
        .unwrap_or_else(|| config.filter.clone())
}

/// Install the global tracing subscriber
///
/// `filter_override` (typically derived from `-v` flags) replaces the
/// configured filter; `RUST_LOG` replaces both. Logs go to stderr so that
/// stdout stays free for command output.
///
/// # Errors
///
/// Returns an error if the filter is invalid or a subscriber is already set.
pub fn init_tracing(
    config: &LoggingConfig,
    filter_override: Option<&str>,
) -> Result<(), TelemetryError> {
    let directives = resolve_filter(
        config,
        filter_override,
        std::env::var(EnvFilter::DEFAULT_ENV).ok(),
    );
    let env_filter =
        EnvFilter::try_new(&directives).map_err(|e| TelemetryError::Filter(e.to_string()))?;

    let registry = tracing_subscriber::registry().with(env_filter);

    let result = match config.format {
        LogFormat::Text => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(true)
                    .with_writer(std::io::stderr),
            )
            .try_init(),
        LogFormat::Json => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_current_span(true)
                    .with_writer(std::io::stderr),
            )
            .try_init(),
    };
    result.map_err(|e| TelemetryError::Init(e.to_string()))?;

    debug!(filter = %directives, format = ?config.format, "Tracing initialized");
    Ok(())
}
