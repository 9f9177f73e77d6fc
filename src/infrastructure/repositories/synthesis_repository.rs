use crate::domain::speech::GenerationRequest;
use async_trait::async_trait;

/// Repository for speech synthesis requests.
/// Abstracts the underlying synthesis provider and its transport.
///
/// Implementations are responsible for:
/// - Serializing the request into the provider's wire format
/// - Carrying the authorization credential
/// - Collapsing transport and status failures into a user-visible message
#[async_trait]
pub trait SynthesisRepository: Send + Sync {
    /// Submit one synthesis request and return the binary audio body
    ///
    /// A single attempt: no retries on any failure.
    ///
    /// # Errors
    /// Returns the user-visible message for the failure; a non-success
    /// response status maps to "Failed to generate speech"
    async fn synthesize(&self, request: &GenerationRequest) -> Result<Vec<u8>, String>;
}
