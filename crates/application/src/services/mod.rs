//! Application services - Use case implementations

mod translation_cleanup;
mod translation_service;

pub use translation_cleanup::clean_translation;
pub use translation_service::{TranslationOutcome, VoiceTranslationService};
