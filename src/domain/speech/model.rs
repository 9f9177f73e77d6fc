use super::language::LanguageCode;
use super::voice::Voice;
use chrono::{DateTime, Utc};
use std::path::{Path, PathBuf};

/// Audio container requested from the synthesis endpoint
pub const OUTPUT_FORMAT: &str = "mp3";

/// A single synthesis request as submitted to the endpoint
#[derive(Debug, Clone)]
pub struct GenerationRequest {
    pub text: String,
    pub voice: Voice,
    pub language: Option<LanguageCode>,
    pub format: &'static str,
}

impl GenerationRequest {
    pub fn new(text: impl Into<String>, voice: Voice, language: Option<LanguageCode>) -> Self {
        Self {
            text: text.into(),
            voice,
            language,
            format: OUTPUT_FORMAT,
        }
    }
}

/// A generated audio clip backed by a uniquely named temporary file.
///
/// The artifact owns its backing file: dropping it removes the file, so
/// replacing the held artifact, exporting it successfully, or ending the
/// process all reclaim the storage through the same path.
#[derive(Debug)]
pub struct AudioArtifact {
    path: PathBuf,
    created_at: DateTime<Utc>,
}

impl AudioArtifact {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            created_at: Utc::now(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// File name of the backing temp file, used as the suggested export name
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| format!("speech.{}", OUTPUT_FORMAT))
    }
}

impl Drop for AudioArtifact {
    fn drop(&mut self) {
        if let Err(e) = std::fs::remove_file(&self.path) {
            if e.kind() != std::io::ErrorKind::NotFound {
                tracing::warn!(
                    path = %self.path.display(),
                    error = %e,
                    "Failed to remove generated audio file"
                );
            }
        }
    }
}
