#[derive(Debug, thiserror::Error)]
pub enum PlaybackError {
    #[error("Failed to play audio: {0}")]
    Engine(String),
}

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("no generated audio to export")]
    NothingToExport,
    #[error("export cancelled")]
    Cancelled,
    #[error("Export failed: {0}")]
    Destination(String),
}
