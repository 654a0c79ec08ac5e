use axum::{
    body::Body,
    extract::State,
    http::{HeaderMap, StatusCode},
    Json,
};
use std::sync::Arc;

use super::audio_response;
use crate::{
    domain::sound_effects::{SoundEffectRequest, SoundEffectService, SoundEffectServiceApi},
    error::{AppError, AppResult},
};

pub struct SoundEffectsController {
    sound_effect_service: Arc<SoundEffectService>,
}

impl SoundEffectsController {
    pub fn new(sound_effect_service: Arc<SoundEffectService>) -> Self {
        Self {
            sound_effect_service,
        }
    }

    /// POST /api/sound-effects - Generate a sound effect from a description
    pub async fn generate(
        State(controller): State<Arc<SoundEffectsController>>,
        Json(request): Json<SoundEffectRequest>,
    ) -> AppResult<(StatusCode, HeaderMap, Body)> {
        let spec = request.into_spec().map_err(AppError::Validation)?;

        let audio = controller
            .sound_effect_service
            .generate(spec)
            .await
            .map_err(AppError::from)?;

        Ok(audio_response(audio))
    }
}
