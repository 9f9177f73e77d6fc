use super::synthesis_repository::SynthesisRepository;
use crate::domain::speech::GenerationRequest;
use async_trait::async_trait;
use serde_json::json;
use std::time::Duration;

/// OpenAI speech API implementation of the synthesis repository
pub struct OpenAiSynthesisRepository {
    http_client: reqwest::Client,
    url: String,
    model: String,
    api_key: String,
}

impl OpenAiSynthesisRepository {
    pub fn new(
        url: String,
        model: String,
        api_key: String,
        request_timeout: Duration,
    ) -> Result<Self, String> {
        let http_client = reqwest::Client::builder()
            .timeout(request_timeout)
            .build()
            .map_err(|e| format!("Failed to create HTTP client: {}", e))?;

        Ok(Self {
            http_client,
            url,
            model,
            api_key,
        })
    }
}

#[async_trait]
impl SynthesisRepository for OpenAiSynthesisRepository {
    async fn synthesize(&self, request: &GenerationRequest) -> Result<Vec<u8>, String> {
        let start_time = std::time::Instant::now();

        let mut body = json!({
            "model": self.model,
            "input": request.text,
            "voice": request.voice.as_str(),
            "format": request.format,
        });
        if let Some(language) = request.language {
            body["language"] = json!(language.as_str());
        }

        tracing::info!(
            model = %self.model,
            voice = %request.voice,
            language = ?request.language.map(|l| l.as_str()),
            text_length = request.text.len(),
            "Calling synthesis endpoint"
        );

        let response = self
            .http_client
            .post(&self.url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "Synthesis request failed");
                format!("Speech request failed: {}", e)
            })?;

        let status = response.status();
        if !status.is_success() {
            tracing::error!(
                status = %status.as_u16(),
                voice = %request.voice,
                "Synthesis endpoint returned an error status"
            );
            return Err("Failed to generate speech".to_string());
        }

        let audio_bytes = response
            .bytes()
            .await
            .map_err(|e| format!("Failed to read audio response: {}", e))?
            .to_vec();

        tracing::info!(
            latency_ms = start_time.elapsed().as_millis() as u64,
            audio_size_bytes = audio_bytes.len(),
            "Synthesis completed"
        );

        Ok(audio_bytes)
    }
}
