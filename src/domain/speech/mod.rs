pub mod error;
pub mod language;
pub mod model;
pub mod service;
pub mod voice;

pub use error::GenerationError;
pub use language::LanguageCode;
pub use model::{AudioArtifact, GenerationRequest, OUTPUT_FORMAT};
pub use service::{SpeechService, SpeechServiceApi};
pub use voice::Voice;
