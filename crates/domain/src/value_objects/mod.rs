//! Value Objects - Immutable, identity-less domain primitives

mod accent;
mod audio_format;
mod direction;
mod language;

pub use accent::{Accent, DEFAULT_ACCENT_TLD};
pub use audio_format::AudioFormat;
pub use direction::Direction;
pub use language::Language;
