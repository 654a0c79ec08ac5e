use super::sound_effect_repository::SoundEffectRepository;
use crate::domain::sound_effects::SoundEffectSpec;
use crate::domain::streaming::AudioStream;
use crate::infrastructure::elevenlabs::{audio_stream, expect_success, ElevenLabsClient};
use async_trait::async_trait;
use serde_json::json;
use std::sync::Arc;

/// ElevenLabs implementation of the sound effect repository
pub struct ElevenLabsSoundEffectRepository {
    client: Arc<ElevenLabsClient>,
}

impl ElevenLabsSoundEffectRepository {
    pub fn new(client: Arc<ElevenLabsClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl SoundEffectRepository for ElevenLabsSoundEffectRepository {
    async fn generate(&self, spec: &SoundEffectSpec) -> Result<AudioStream, String> {
        let start_time = std::time::Instant::now();

        let response = self
            .client
            .post("v1/sound-generation")
            .json(&json!({
                "text": spec.text,
                "duration_seconds": spec.duration_seconds,
                "prompt_influence": spec.prompt_influence,
            }))
            .send()
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "ElevenLabs sound generation call failed");
                format!("ElevenLabs error: {}", e)
            })?;

        let response = expect_success(response).await?;

        tracing::info!(
            provider = "elevenlabs",
            duration_seconds = spec.duration_seconds,
            prompt_influence = spec.prompt_influence,
            latency_ms = start_time.elapsed().as_millis(),
            "Sound generation response headers received"
        );

        Ok(audio_stream(response))
    }
}
