use crate::domain::speech::OUTPUT_FORMAT;
use std::io;
use std::path::PathBuf;
use uuid::Uuid;

/// Allocates uniquely named temporary files for generated audio clips
#[derive(Debug, Clone)]
pub struct ArtifactStorage {
    dir: PathBuf,
}

impl ArtifactStorage {
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    /// Write `audio_data` to a fresh `speech_<uuid>.mp3` and return its path.
    /// The random component keeps repeated generations from colliding.
    pub fn store(&self, audio_data: &[u8]) -> io::Result<PathBuf> {
        std::fs::create_dir_all(&self.dir)?;
        let path = self
            .dir
            .join(format!("speech_{}.{}", Uuid::new_v4(), OUTPUT_FORMAT));
        std::fs::write(&path, audio_data)?;
        tracing::debug!(path = %path.display(), size = audio_data.len(), "Audio clip stored");
        Ok(path)
    }
}
