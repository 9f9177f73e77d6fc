use crate::domain::playback::ExportError;
use std::path::{Path, PathBuf};

/// Capability interface over the export destination.
/// Accepts the clip bytes plus a suggested filename and reports the saved
/// location, a failure, or a user cancellation.
pub trait ExportTarget: Send + Sync {
    fn save(&self, bytes: &[u8], suggested_name: &str) -> Result<PathBuf, ExportError>;
}

/// Saves exported clips into a directory on the local filesystem
pub struct DirectoryExportTarget {
    dir: PathBuf,
}

impl DirectoryExportTarget {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

impl ExportTarget for DirectoryExportTarget {
    fn save(&self, bytes: &[u8], suggested_name: &str) -> Result<PathBuf, ExportError> {
        std::fs::create_dir_all(&self.dir)
            .map_err(|e| ExportError::Destination(e.to_string()))?;
        let destination = self.dir.join(Path::new(suggested_name));
        std::fs::write(&destination, bytes)
            .map_err(|e| ExportError::Destination(e.to_string()))?;
        Ok(destination)
    }
}
