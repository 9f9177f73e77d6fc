use super::error::GenerationError;
use super::language::LanguageCode;
use super::model::{AudioArtifact, GenerationRequest};
use super::voice::Voice;
use crate::domain::preferences;
use crate::infrastructure::repositories::{PreferencesRepository, SynthesisRepository};
use crate::infrastructure::storage::ArtifactStorage;
use async_trait::async_trait;
use std::sync::Arc;

pub struct SpeechService {
    synthesis_repo: Arc<dyn SynthesisRepository>,
    preferences_repo: Arc<dyn PreferencesRepository>,
    storage: ArtifactStorage,
}

impl SpeechService {
    pub fn new(
        synthesis_repo: Arc<dyn SynthesisRepository>,
        preferences_repo: Arc<dyn PreferencesRepository>,
        storage: ArtifactStorage,
    ) -> Self {
        Self {
            synthesis_repo,
            preferences_repo,
            storage,
        }
    }
}

#[async_trait]
pub trait SpeechServiceApi: Send + Sync {
    /// Generate speech audio for the given text
    ///
    /// This operation:
    /// - Returns `Ok(None)` for empty text without touching the network or
    ///   the preference store (the boundary treats it as a no-op)
    /// - Persists the voice/language selection eagerly, before the network
    ///   call and regardless of its outcome
    /// - Submits the text to the synthesis endpoint (single attempt, no retry)
    /// - Writes the returned audio bytes to a freshly named temporary file
    ///
    /// Returns the audio artifact wrapping the new file.
    async fn generate(
        &self,
        text: &str,
        voice: Voice,
        language: Option<LanguageCode>,
    ) -> Result<Option<AudioArtifact>, GenerationError>;
}

#[async_trait]
impl SpeechServiceApi for SpeechService {
    async fn generate(
        &self,
        text: &str,
        voice: Voice,
        language: Option<LanguageCode>,
    ) -> Result<Option<AudioArtifact>, GenerationError> {
        // 1. Empty text never reaches the endpoint or the preference store
        if text.is_empty() {
            tracing::debug!("Skipping generation for empty text");
            return Ok(None);
        }

        tracing::info!(
            voice = %voice,
            language = ?language.map(|l| l.as_str()),
            text_length = text.len(),
            "Speech generation request"
        );

        // 2. Persist the selection at submission time, not gated on success
        preferences::persist_selection(self.preferences_repo.as_ref(), voice, language);

        // 3. Submit to the synthesis endpoint
        let request = GenerationRequest::new(text, voice, language);
        let audio_data = self
            .synthesis_repo
            .synthesize(&request)
            .await
            .map_err(GenerationError::Synthesis)?;

        // 4. Write the full body to a uniquely named temp file
        let path = self.storage.store(&audio_data)?;

        tracing::info!(
            path = %path.display(),
            audio_size_bytes = audio_data.len(),
            "Speech generated"
        );

        Ok(Some(AudioArtifact::new(path)))
    }
}
