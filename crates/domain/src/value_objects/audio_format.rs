//! Audio format value object

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

/// Container format of recorded or synthesized audio
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AudioFormat {
    /// WAV (PCM)
    #[default]
    Wav,
    /// MP3, the synthesizer's output format
    Mp3,
    /// OGG container (Vorbis or Opus)
    Ogg,
    /// FLAC
    Flac,
    /// WebM (browser recordings)
    Webm,
}

impl AudioFormat {
    /// File extension without the dot
    #[must_use]
    pub const fn extension(&self) -> &'static str {
        match self {
            Self::Wav => "wav",
            Self::Mp3 => "mp3",
            Self::Ogg => "ogg",
            Self::Flac => "flac",
            Self::Webm => "webm",
        }
    }

    /// Parse from a file extension, ignoring case and a leading dot
    #[must_use]
    pub fn from_extension(extension: &str) -> Option<Self> {
        match extension.trim_start_matches('.').to_lowercase().as_str() {
            "wav" | "wave" => Some(Self::Wav),
            "mp3" => Some(Self::Mp3),
            "ogg" | "oga" | "opus" => Some(Self::Ogg),
            "flac" => Some(Self::Flac),
            "webm" => Some(Self::Webm),
            _ => None,
        }
    }

    /// Infer the format of an audio file from its name, falling back to WAV
    #[must_use]
    pub fn from_path(path: &Path) -> Self {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(Self::from_extension)
            .unwrap_or_default()
    }
}

impl fmt::Display for AudioFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.extension())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_extension_is_case_insensitive() {
        assert_eq!(AudioFormat::from_extension("MP3"), Some(AudioFormat::Mp3));
        assert_eq!(AudioFormat::from_extension(".opus"), Some(AudioFormat::Ogg));
        assert_eq!(AudioFormat::from_extension("txt"), None);
    }

    #[test]
    fn from_path_falls_back_to_wav() {
        assert_eq!(
            AudioFormat::from_path(Path::new("clip.flac")),
            AudioFormat::Flac
        );
        assert_eq!(AudioFormat::from_path(Path::new("recording")), AudioFormat::Wav);
        assert_eq!(AudioFormat::from_path(Path::new("notes.txt")), AudioFormat::Wav);
    }

    #[test]
    fn display_is_extension() {
        assert_eq!(AudioFormat::Webm.to_string(), "webm");
    }

    #[test]
    fn serializes_lowercase() {
        let json = serde_json::to_string(&AudioFormat::Mp3).unwrap();
        assert_eq!(json, "\"mp3\"");
    }
}
