pub mod error;
pub mod service;

pub use error::{ExportError, PlaybackError};
pub use service::{PlaybackService, PlaybackState};
