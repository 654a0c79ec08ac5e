use axum::{
    body::Body,
    extract::{Multipart, State},
    http::{header, HeaderMap, StatusCode},
};
use std::sync::Arc;

use super::audio_response;
use crate::{
    domain::{
        shared::AudioUpload,
        speech::{
            ConversionSpec, SpeechService, SpeechServiceApi, StreamSynthesizeRequest,
            SynthesizeRequest,
        },
    },
    error::{AppError, AppResult},
};

pub struct SpeechController {
    speech_service: Arc<SpeechService>,
}

impl SpeechController {
    pub fn new(speech_service: Arc<SpeechService>) -> Self {
        Self { speech_service }
    }

    /// POST /api/speech/synthesize - Convert text to speech (buffered)
    pub async fn synthesize(
        State(controller): State<Arc<SpeechController>>,
        axum::Json(request): axum::Json<SynthesizeRequest>,
    ) -> AppResult<(StatusCode, HeaderMap, Body)> {
        // Validate input before any provider call
        let (spec, use_stream_endpoint) = request.into_spec().map_err(AppError::Validation)?;

        let audio = controller
            .speech_service
            .synthesize(spec, use_stream_endpoint)
            .await
            .map_err(AppError::from)?;

        Ok(audio_response(audio))
    }

    /// POST /api/speech/stream - Convert text to speech, relayed chunk by
    /// chunk for low-latency playback
    pub async fn stream(
        State(controller): State<Arc<SpeechController>>,
        axum::Json(request): axum::Json<StreamSynthesizeRequest>,
    ) -> AppResult<(StatusCode, HeaderMap, Body)> {
        let spec = request.into_spec().map_err(AppError::Validation)?;

        let stream = controller
            .speech_service
            .synthesize_chunked(spec)
            .await
            .map_err(AppError::from)?;

        let mut headers = HeaderMap::new();
        headers.insert(header::CONTENT_TYPE, "audio/mpeg".parse().unwrap());

        Ok((StatusCode::OK, headers, Body::from_stream(stream)))
    }

    /// POST /api/speech/convert - Re-voice uploaded audio onto a target voice
    pub async fn convert(
        State(controller): State<Arc<SpeechController>>,
        mut multipart: Multipart,
    ) -> AppResult<(StatusCode, HeaderMap, Body)> {
        let mut audio: Option<AudioUpload> = None;
        let mut target_voice_id: Option<String> = None;

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
                Some("target_voice_id") => {
                    target_voice_id = Some(field.text().await.map_err(|e| {
                        AppError::Validation(format!("Failed to read target_voice_id: {}", e))
                    })?);
                }
                _ => {}
            }
        }

        let (audio, target_voice_id) = match (
            audio,
            target_voice_id.filter(|v| !v.trim().is_empty()),
        ) {
            (Some(audio), Some(target_voice_id)) => (audio, target_voice_id),
            _ => {
                return Err(AppError::Validation(
                    "Audio file and target voice ID are required".to_string(),
                ))
            }
        };

        let converted = controller
            .speech_service
            .convert_voice(ConversionSpec::voice_clone_preset(target_voice_id), audio)
            .await
            .map_err(AppError::from)?;

        Ok(audio_response(converted))
    }
}
