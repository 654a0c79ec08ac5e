use super::speech_repository::SpeechRepository;
use crate::domain::shared::AudioUpload;
use crate::domain::speech::{ConversionSpec, SynthesisSpec};
use crate::domain::streaming::AudioStream;
use crate::infrastructure::elevenlabs::{audio_stream, expect_success, ElevenLabsClient};
use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use serde_json::json;
use std::sync::Arc;

/// ElevenLabs implementation of the speech repository
pub struct ElevenLabsSpeechRepository {
    client: Arc<ElevenLabsClient>,
}

impl ElevenLabsSpeechRepository {
    pub fn new(client: Arc<ElevenLabsClient>) -> Self {
        Self { client }
    }

    fn synthesis_body(spec: &SynthesisSpec) -> serde_json::Value {
        let mut body = json!({
            "text": spec.text,
            "model_id": spec.model_id,
        });
        if let Some(settings) = &spec.voice_settings {
            body["voice_settings"] = json!(settings);
        }
        body
    }

    fn synthesis_query(spec: &SynthesisSpec) -> Vec<(&'static str, String)> {
        let mut query = vec![("output_format", spec.output_format.clone())];
        if let Some(latency) = spec.optimize_streaming_latency {
            query.push(("optimize_streaming_latency", latency.to_string()));
        }
        query
    }

    async fn request_audio(
        &self,
        path: String,
        spec: &SynthesisSpec,
    ) -> Result<AudioStream, String> {
        let start_time = std::time::Instant::now();

        let response = self
            .client
            .post(&path)
            .query(&Self::synthesis_query(spec))
            .json(&Self::synthesis_body(spec))
            .send()
            .await
            .map_err(|e| {
                tracing::error!(
                    error = %e,
                    voice_id = %spec.voice_id,
                    model_id = %spec.model_id,
                    "ElevenLabs text-to-speech call failed"
                );
                format!("ElevenLabs error: {}", e)
            })?;

        let response = expect_success(response).await?;

        tracing::info!(
            provider = "elevenlabs",
            voice_id = %spec.voice_id,
            model_id = %spec.model_id,
            output_format = %spec.output_format,
            text_length = spec.text.len(),
            latency_ms = start_time.elapsed().as_millis(),
            "Text-to-speech response headers received"
        );

        Ok(audio_stream(response))
    }
}

#[async_trait]
impl SpeechRepository for ElevenLabsSpeechRepository {
    async fn synthesize(&self, spec: &SynthesisSpec) -> Result<AudioStream, String> {
        self.request_audio(format!("v1/text-to-speech/{}", spec.voice_id), spec)
            .await
    }

    async fn synthesize_streamed(&self, spec: &SynthesisSpec) -> Result<AudioStream, String> {
        self.request_audio(format!("v1/text-to-speech/{}/stream", spec.voice_id), spec)
            .await
    }

    async fn convert(
        &self,
        spec: &ConversionSpec,
        audio: AudioUpload,
    ) -> Result<AudioStream, String> {
        let start_time = std::time::Instant::now();

        let settings_json = serde_json::to_string(&spec.voice_settings)
            .map_err(|e| format!("Failed to encode voice settings: {}", e))?;

        let audio_size = audio.data.len();
        let audio_part = Part::bytes(audio.data)
            .file_name(audio.file_name)
            .mime_str(&audio.content_type)
            .map_err(|e| format!("Invalid audio content type: {}", e))?;

        let form = Form::new()
            .part("audio", audio_part)
            .text("model_id", spec.model_id.clone())
            .text("voice_settings", settings_json)
            .text(
                "remove_background_noise",
                spec.remove_background_noise.to_string(),
            );

        let response = self
            .client
            .post(&format!("v1/speech-to-speech/{}", spec.target_voice_id))
            .multipart(form)
            .send()
            .await
            .map_err(|e| {
                tracing::error!(
                    error = %e,
                    target_voice_id = %spec.target_voice_id,
                    "ElevenLabs speech-to-speech call failed"
                );
                format!("ElevenLabs error: {}", e)
            })?;

        let response = expect_success(response).await?;

        tracing::info!(
            provider = "elevenlabs",
            target_voice_id = %spec.target_voice_id,
            model_id = %spec.model_id,
            audio_size_bytes = audio_size,
            latency_ms = start_time.elapsed().as_millis(),
            "Speech-to-speech response headers received"
        );

        Ok(audio_stream(response))
    }
}
