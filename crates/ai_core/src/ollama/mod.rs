//! Ollama inference engine implementation
//!
//! Connects to any Ollama-compatible server exposing `/api/chat` and `/api/tags`.

mod client;

pub use client::OllamaInferenceEngine;
