//! AI Core - Language-model inference
//!
//! Provides the `InferenceEngine` port and an Ollama implementation that
//! talks to the `/api/chat` endpoint of a local Ollama server.

pub mod config;
pub mod error;
pub mod ollama;
pub mod ports;

pub use config::InferenceConfig;
pub use error::InferenceError;
pub use ollama::OllamaInferenceEngine;
pub use ports::{
    InferenceEngine, InferenceMessage, InferenceRequest, InferenceResponse, TokenUsage,
};
