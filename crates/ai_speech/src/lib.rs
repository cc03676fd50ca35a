//! AI Speech - Speech-to-Text and Text-to-Speech abstractions
//!
//! Provides traits and implementations for speech processing:
//! - `SpeechToText` - Transcribe audio to text (STT)
//! - `TextToSpeech` - Synthesize speech from text (TTS)
//!
//! # Architecture
//!
//! This crate follows the ports & adapters pattern:
//! - `ports` module defines the traits (ports)
//! - `providers` module contains concrete implementations (adapters)
//!
//! # Supported Providers
//!
//! - whisper.cpp (local STT through the `whisper-cli` binary)
//! - Google Translate speech endpoint (TTS, the protocol used by gTTS)
//!
//! # Example
//!
//! ```ignore
//! use ai_speech::{
//!     AudioData, AudioFormat, GoogleTtsProvider, SpeechToText, TextToSpeech, WhisperCppProvider,
//! };
//!
//! let stt = WhisperCppProvider::new(config.stt)?;
//! let audio = AudioData::new(bytes, AudioFormat::Wav);
//! let transcription = stt.transcribe_with_language(audio, "en").await?;
//!
//! let tts = GoogleTtsProvider::new(config.tts)?;
//! let speech = tts.synthesize("Привет", "ru", None).await?;
//! ```

pub mod config;
pub mod error;
pub mod ports;
pub mod providers;
pub mod text_chunker;
pub mod types;

pub use config::{GoogleTtsConfig, LocalSttConfig, SpeechConfig};
pub use error::SpeechError;
pub use ports::{SpeechToText, TextToSpeech};
pub use providers::{GoogleTtsProvider, WhisperCppProvider};
pub use types::{AudioData, AudioFormat, Transcription, VoiceInfo};
