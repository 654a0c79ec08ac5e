use axum::{
    body::Body,
    extract::{Multipart, State},
    http::{HeaderMap, StatusCode},
};
use std::sync::Arc;
use tokio_util::sync::CancellationToken;

use super::audio_response;
use crate::{
    domain::{
        dubbing::{DubbingService, DubbingServiceApi},
        shared::AudioUpload,
    },
    error::{AppError, AppResult},
};

pub struct DubbingController {
    dubbing_service: Arc<DubbingService>,
    shutdown: CancellationToken,
}

impl DubbingController {
    pub fn new(dubbing_service: Arc<DubbingService>, shutdown: CancellationToken) -> Self {
        Self {
            dubbing_service,
            shutdown,
        }
    }

    /// POST /api/dubbing - Translate uploaded audio into the target language
    ///
    /// Submits a dubbing job, waits for it to finish (bounded poll loop) and
    /// returns the dubbed audio. The wait is tied to the server's shutdown
    /// token so an in-flight poll loop stops on graceful shutdown.
    pub async fn translate(
        State(controller): State<Arc<DubbingController>>,
        mut multipart: Multipart,
    ) -> AppResult<(StatusCode, HeaderMap, Body)> {
        let mut audio: Option<AudioUpload> = None;
        let mut target_language: Option<String> = None;
        let mut num_speakers: u32 = 0;

        while let Some(field) = multipart
            .next_field()
            .await
            .map_err(|e| AppError::Validation(format!("Invalid multipart payload: {}", e)))?
        {
            let name = field.name().map(str::to_string);
            match name.as_deref() {
                Some("audio") => {
                    let file_name = field.file_name().map(str::to_string);
                    let content_type = field.content_type().map(str::to_string);
                    let data = field
                        .bytes()
                        .await
                        .map_err(|e| {
                            AppError::Validation(format!("Failed to read audio field: {}", e))
                        })?
                        .to_vec();
                    audio = Some(AudioUpload::new(data, file_name, content_type));
                }
                Some("target_language") => {
                    target_language = Some(field.text().await.map_err(|e| {
                        AppError::Validation(format!("Failed to read target_language: {}", e))
                    })?);
                }
                Some("num_speakers") => {
                    let raw = field.text().await.map_err(|e| {
                        AppError::Validation(format!("Failed to read num_speakers: {}", e))
                    })?;
                    num_speakers = raw.parse().map_err(|_| {
                        AppError::Validation("num_speakers must be a non-negative integer".to_string())
                    })?;
                }
                _ => {}
            }
        }

        let (audio, target_language) = match (
            audio,
            target_language.filter(|l| !l.trim().is_empty()),
        ) {
            (Some(audio), Some(target_language)) => (audio, target_language),
            _ => {
                return Err(AppError::Validation(
                    "Audio file and target language are required".to_string(),
                ))
            }
        };

        let dubbed = controller
            .dubbing_service
            .translate(
                audio,
                target_language,
                num_speakers,
                controller.shutdown.child_token(),
            )
            .await
            .map_err(AppError::from)?;

        Ok(audio_response(dubbed))
    }
}
