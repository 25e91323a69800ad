//! Audio file ingestion.
//!
//! The pipeline accepts exactly one format: MP3 (`audio/mpeg`). Validation
//! happens against the declared media type before any remote call is made.

use anyhow::{Context, Result};
use std::path::Path;

/// The only media type the pipeline accepts.
pub const ACCEPTED_MEDIA_TYPE: &str = "audio/mpeg";

/// A user-selected audio file: binary content plus declared media type.
///
/// Construction does not validate the media type; [`crate::Pipeline::submit_audio`]
/// rejects anything that is not `audio/mpeg`.
#[derive(Debug, Clone)]
pub struct AudioSubmission {
    pub data: Vec<u8>,
    pub media_type: String,
    pub file_name: String,
}

impl AudioSubmission {
    pub fn new(
        data: Vec<u8>,
        media_type: impl Into<String>,
        file_name: impl Into<String>,
    ) -> Self {
        Self {
            data,
            media_type: media_type.into(),
            file_name: file_name.into(),
        }
    }

    /// Read an audio file from disk, deriving the media type from its extension.
    pub fn from_path(path: &Path) -> Result<Self> {
        let data = std::fs::read(path)
            .with_context(|| format!("Failed to read audio file: {}", path.display()))?;

        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_lowercase();
        let file_name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("audio.mp3")
            .to_string();

        crate::verbose!(
            "Loaded {} ({:.1} KB, {})",
            file_name,
            data.len() as f64 / 1024.0,
            media_type_for_extension(&extension)
        );

        Ok(Self::new(data, media_type_for_extension(&extension), file_name))
    }

    /// Whether the declared media type is the single accepted audio format.
    pub fn is_accepted(&self) -> bool {
        self.media_type == ACCEPTED_MEDIA_TYPE
    }
}

/// Map a file extension to its declared media type.
///
/// Unknown extensions map to `application/octet-stream` so they are rejected
/// by submission validation rather than guessed at.
pub fn media_type_for_extension(extension: &str) -> &'static str {
    match extension {
        "mp3" => "audio/mpeg",
        "wav" => "audio/wav",
        "m4a" => "audio/mp4",
        "ogg" => "audio/ogg",
        "flac" => "audio/flac",
        "webm" => "audio/webm",
        "aac" => "audio/aac",
        "opus" => "audio/opus",
        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_media_type_for_extension() {
        assert_eq!(media_type_for_extension("mp3"), "audio/mpeg");
        assert_eq!(media_type_for_extension("wav"), "audio/wav");
        assert_eq!(media_type_for_extension("xyz"), "application/octet-stream");
        assert_eq!(media_type_for_extension(""), "application/octet-stream");
    }

    #[test]
    fn test_only_mp3_is_accepted() {
        let mp3 = AudioSubmission::new(vec![0xff, 0xfb], "audio/mpeg", "talk.mp3");
        assert!(mp3.is_accepted());

        let wav = AudioSubmission::new(vec![0x52], "audio/wav", "talk.wav");
        assert!(!wav.is_accepted());
    }

    #[test]
    fn test_from_path_derives_type_and_name() {
        let dir = std::env::temp_dir().join("voxdigest_audio_test");
        let _ = std::fs::create_dir_all(&dir);
        let path = dir.join("lecture.mp3");
        std::fs::write(&path, b"not really mp3 bytes").unwrap();

        let submission = AudioSubmission::from_path(&path).unwrap();
        assert_eq!(submission.media_type, "audio/mpeg");
        assert_eq!(submission.file_name, "lecture.mp3");
        assert_eq!(submission.data, b"not really mp3 bytes");

        let _ = std::fs::remove_file(&path);
        let _ = std::fs::remove_dir(&dir);
    }
}
