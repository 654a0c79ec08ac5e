use super::dubbing_repository::DubbingRepository;
use crate::domain::dubbing::{DubbingSubmission, TransformJob};
use crate::domain::jobs::JobStatus;
use crate::domain::shared::AudioUpload;
use crate::domain::streaming::AudioStream;
use crate::infrastructure::elevenlabs::{audio_stream, expect_success, ElevenLabsClient};
use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use serde::Deserialize;
use std::sync::Arc;

/// Dubbing mode: the provider transcribes, translates and re-voices
/// without manual intervention
const AUTOMATIC_MODE: &str = "automatic";

#[derive(Debug, Deserialize)]
struct CreateDubbingResponse {
    dubbing_id: String,
    #[serde(default)]
    expected_duration_sec: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct DubbingStatusResponse {
    status: String,
    #[serde(default)]
    error: Option<String>,
}

/// ElevenLabs implementation of the dubbing repository
pub struct ElevenLabsDubbingRepository {
    client: Arc<ElevenLabsClient>,
}

impl ElevenLabsDubbingRepository {
    pub fn new(client: Arc<ElevenLabsClient>) -> Self {
        Self { client }
    }

    /// Normalize the provider's status vocabulary.
    ///
    /// Unrecognized markers count as in-progress so the poll ceiling, not a
    /// parse failure, ends the wait.
    fn normalize_status(raw: &str) -> JobStatus {
        match raw {
            "dubbed" => JobStatus::Succeeded,
            "failed" => JobStatus::Failed,
            "pending" => JobStatus::Pending,
            _ => JobStatus::Processing,
        }
    }
}

#[async_trait]
impl DubbingRepository for ElevenLabsDubbingRepository {
    async fn submit(
        &self,
        submission: &DubbingSubmission,
        audio: AudioUpload,
    ) -> Result<TransformJob, String> {
        let audio_size = audio.data.len();
        let file_part = Part::bytes(audio.data)
            .file_name(audio.file_name)
            .mime_str(&audio.content_type)
            .map_err(|e| format!("Invalid audio content type: {}", e))?;

        let form = Form::new()
            .part("file", file_part)
            .text("name", submission.name.clone())
            .text("target_lang", submission.target_language.clone())
            .text("mode", AUTOMATIC_MODE)
            .text("num_speakers", submission.num_speakers.to_string());

        let response = self
            .client
            .post("v1/dubbing")
            .multipart(form)
            .send()
            .await
            .map_err(|e| {
                tracing::error!(
                    error = %e,
                    target_language = %submission.target_language,
                    "ElevenLabs dubbing submission failed"
                );
                format!("ElevenLabs error: {}", e)
            })?;

        let response = expect_success(response).await?;
        let created: CreateDubbingResponse = response
            .json()
            .await
            .map_err(|e| format!("Failed to parse dubbing response: {}", e))?;

        tracing::info!(
            provider = "elevenlabs",
            dubbing_id = %created.dubbing_id,
            target_language = %submission.target_language,
            audio_size_bytes = audio_size,
            expected_duration_sec = ?created.expected_duration_sec,
            "Dubbing job submitted"
        );

        Ok(TransformJob {
            job_id: created.dubbing_id,
            target_language: submission.target_language.clone(),
        })
    }

    async fn job_status(&self, job_id: &str) -> Result<JobStatus, String> {
        let response = self
            .client
            .get(&format!("v1/dubbing/{}", job_id))
            .send()
            .await
            .map_err(|e| format!("ElevenLabs error: {}", e))?;

        let response = expect_success(response).await?;
        let status: DubbingStatusResponse = response
            .json()
            .await
            .map_err(|e| format!("Failed to parse dubbing status: {}", e))?;

        tracing::debug!(
            dubbing_id = %job_id,
            status = %status.status,
            provider_error = ?status.error,
            "Dubbing status"
        );

        Ok(Self::normalize_status(&status.status))
    }

    async fn fetch_audio(
        &self,
        job_id: &str,
        language_code: &str,
    ) -> Result<AudioStream, String> {
        let response = self
            .client
            .get(&format!("v1/dubbing/{}/audio/{}", job_id, language_code))
            .send()
            .await
            .map_err(|e| format!("ElevenLabs error: {}", e))?;

        let response = expect_success(response).await?;

        tracing::info!(
            provider = "elevenlabs",
            dubbing_id = %job_id,
            language_code = %language_code,
            "Dubbed audio ready to stream"
        );

        Ok(audio_stream(response))
    }
}
