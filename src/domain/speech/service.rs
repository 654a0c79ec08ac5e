use super::error::SpeechServiceError;
use super::{ConversionSpec, SynthesisSpec};
use crate::domain::shared::AudioUpload;
use crate::domain::streaming::{relay_buffered, relay_chunked, AudioStream};
use crate::infrastructure::repositories::SpeechRepository;
use async_trait::async_trait;
use std::sync::Arc;

/// Caller text cap, checked before any provider call
const MAX_TEXT_LENGTH: usize = 10_000;

pub struct SpeechService {
    speech_repo: Arc<dyn SpeechRepository>,
}

impl SpeechService {
    pub fn new(speech_repo: Arc<dyn SpeechRepository>) -> Self {
        Self { speech_repo }
    }

    fn guard_text(text: &str) -> Result<(), SpeechServiceError> {
        if text.trim().is_empty() {
            return Err(SpeechServiceError::Invalid(
                "Text cannot be empty".to_string(),
            ));
        }
        if text.len() > MAX_TEXT_LENGTH {
            return Err(SpeechServiceError::TooLarge(format!(
                "Text must be {} characters or less",
                MAX_TEXT_LENGTH
            )));
        }
        Ok(())
    }
}

#[async_trait]
pub trait SpeechServiceApi: Send + Sync {
    /// Synthesize speech and return the complete audio file.
    ///
    /// With `use_stream_endpoint` the provider's streaming endpoint produces
    /// the bytes, but the response is still drained to a full buffer.
    async fn synthesize(
        &self,
        spec: SynthesisSpec,
        use_stream_endpoint: bool,
    ) -> Result<Vec<u8>, SpeechServiceError>;

    /// Synthesize speech as a chunked stream: the first byte reaches the
    /// caller before the provider finishes producing the last one.
    async fn synthesize_chunked(
        &self,
        spec: SynthesisSpec,
    ) -> Result<AudioStream, SpeechServiceError>;

    /// Re-voice recorded audio onto a target voice (speech-to-speech).
    async fn convert_voice(
        &self,
        spec: ConversionSpec,
        audio: AudioUpload,
    ) -> Result<Vec<u8>, SpeechServiceError>;
}

#[async_trait]
impl SpeechServiceApi for SpeechService {
    async fn synthesize(
        &self,
        spec: SynthesisSpec,
        use_stream_endpoint: bool,
    ) -> Result<Vec<u8>, SpeechServiceError> {
        Self::guard_text(&spec.text)?;

        tracing::info!(
            voice_id = %spec.voice_id,
            model_id = %spec.model_id,
            output_format = %spec.output_format,
            text_length = spec.text.len(),
            use_stream_endpoint = use_stream_endpoint,
            "Speech synthesis request"
        );

        let stream = if use_stream_endpoint {
            self.speech_repo.synthesize_streamed(&spec).await
        } else {
            self.speech_repo.synthesize(&spec).await
        }
        .map_err(SpeechServiceError::Upstream)?;

        let audio = relay_buffered(stream)
            .await
            .map_err(|e| SpeechServiceError::StreamRead(e.0))?;

        tracing::info!(
            voice_id = %spec.voice_id,
            audio_size = audio.len(),
            "Speech synthesis completed"
        );

        Ok(audio)
    }

    async fn synthesize_chunked(
        &self,
        spec: SynthesisSpec,
    ) -> Result<AudioStream, SpeechServiceError> {
        Self::guard_text(&spec.text)?;

        tracing::info!(
            voice_id = %spec.voice_id,
            model_id = %spec.model_id,
            text_length = spec.text.len(),
            "Streaming speech synthesis request"
        );

        let stream = self
            .speech_repo
            .synthesize_streamed(&spec)
            .await
            .map_err(SpeechServiceError::Upstream)?;

        Ok(Box::pin(relay_chunked(stream)))
    }

    async fn convert_voice(
        &self,
        spec: ConversionSpec,
        audio: AudioUpload,
    ) -> Result<Vec<u8>, SpeechServiceError> {
        if audio.is_empty() {
            return Err(SpeechServiceError::Invalid(
                "Audio file cannot be empty".to_string(),
            ));
        }

        tracing::info!(
            target_voice_id = %spec.target_voice_id,
            model_id = %spec.model_id,
            audio_size = audio.data.len(),
            audio_content_type = %audio.content_type,
            "Voice conversion request"
        );

        let stream = self
            .speech_repo
            .convert(&spec, audio)
            .await
            .map_err(SpeechServiceError::Upstream)?;

        let converted = relay_buffered(stream)
            .await
            .map_err(|e| SpeechServiceError::StreamRead(e.0))?;

        tracing::info!(
            target_voice_id = %spec.target_voice_id,
            audio_size = converted.len(),
            "Voice conversion completed"
        );

        Ok(converted)
    }
}
