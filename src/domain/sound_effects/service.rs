use super::error::SoundEffectServiceError;
use super::{SoundEffectSpec, MAX_DURATION_SECONDS, MIN_DURATION_SECONDS};
use crate::domain::streaming::relay_buffered;
use crate::infrastructure::repositories::SoundEffectRepository;
use async_trait::async_trait;
use std::sync::Arc;

pub struct SoundEffectService {
    sound_effect_repo: Arc<dyn SoundEffectRepository>,
}

impl SoundEffectService {
    pub fn new(sound_effect_repo: Arc<dyn SoundEffectRepository>) -> Self {
        Self { sound_effect_repo }
    }

    fn guard_spec(spec: &SoundEffectSpec) -> Result<(), SoundEffectServiceError> {
        if !(MIN_DURATION_SECONDS..=MAX_DURATION_SECONDS).contains(&spec.duration_seconds) {
            return Err(SoundEffectServiceError::Invalid(format!(
                "Duration must be between {} and {} seconds",
                MIN_DURATION_SECONDS, MAX_DURATION_SECONDS
            )));
        }
        if !(0.0..=1.0).contains(&spec.prompt_influence) {
            return Err(SoundEffectServiceError::Invalid(
                "Prompt influence must be between 0 and 1".to_string(),
            ));
        }
        Ok(())
    }
}

#[async_trait]
pub trait SoundEffectServiceApi: Send + Sync {
    /// Generate a sound effect from a text description.
    async fn generate(&self, spec: SoundEffectSpec) -> Result<Vec<u8>, SoundEffectServiceError>;
}

#[async_trait]
impl SoundEffectServiceApi for SoundEffectService {
    async fn generate(&self, spec: SoundEffectSpec) -> Result<Vec<u8>, SoundEffectServiceError> {
        Self::guard_spec(&spec)?;

        tracing::info!(
            text_length = spec.text.len(),
            duration_seconds = spec.duration_seconds,
            prompt_influence = spec.prompt_influence,
            "Sound effect generation request"
        );

        let stream = self
            .sound_effect_repo
            .generate(&spec)
            .await
            .map_err(SoundEffectServiceError::Upstream)?;

        let audio = relay_buffered(stream)
            .await
            .map_err(|e| SoundEffectServiceError::StreamRead(e.0))?;

        tracing::info!(audio_size = audio.len(), "Sound effect generated");

        Ok(audio)
    }
}
