//! Speech processing provider implementations
//!
//! Contains concrete implementations of the `SpeechToText` and `TextToSpeech` traits.

pub mod google_tts;
pub mod whisper_cpp;

pub use google_tts::GoogleTtsProvider;
pub use whisper_cpp::WhisperCppProvider;
