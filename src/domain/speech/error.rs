#[derive(Debug, thiserror::Error)]
pub enum GenerationError {
    /// Endpoint or transport failure, already phrased for the user
    #[error("{0}")]
    Synthesis(String),
    #[error("failed to store generated audio: {0}")]
    Storage(#[from] std::io::Error),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
