use axum::{
    extract::{Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::{
    domain::voices::{
        CreateVoiceRequest, DesignVoiceRequest, VoiceDescriptor, VoiceDraft, VoiceFilters,
        VoiceLibraryService, VoiceLibraryServiceApi, VoicePreview,
    },
    error::{AppError, AppResult},
};

/// Response for GET /api/voices
#[derive(Debug, Serialize, Deserialize)]
pub struct VoicesResponse {
    pub voices: Vec<VoiceDescriptor>,
}

/// Response for POST /api/voices/design
#[derive(Debug, Serialize, Deserialize)]
pub struct DesignVoiceResponse {
    pub previews: Vec<VoicePreview>,
}

/// Response for POST /api/voices
#[derive(Debug, Serialize, Deserialize)]
pub struct CreateVoiceResponse {
    pub voice: VoiceDescriptor,
}

pub struct VoicesController {
    voice_service: Arc<VoiceLibraryService>,
}

impl VoicesController {
    pub fn new(voice_service: Arc<VoiceLibraryService>) -> Self {
        Self { voice_service }
    }

    /// GET /api/voices - List the voice catalog, optionally filtered
    pub async fn list_voices(
        State(controller): State<Arc<VoicesController>>,
        Query(filters): Query<VoiceFilters>,
    ) -> AppResult<Json<VoicesResponse>> {
        let voices = controller
            .voice_service
            .list_voices(filters)
            .await
            .map_err(AppError::from)?;

        Ok(Json(VoicesResponse { voices }))
    }

    /// POST /api/voices/design - Generate voice previews from a description
    pub async fn design(
        State(controller): State<Arc<VoicesController>>,
        Json(request): Json<DesignVoiceRequest>,
    ) -> AppResult<Json<DesignVoiceResponse>> {
        let description = request
            .voice_description
            .filter(|d| !d.trim().is_empty())
            .ok_or_else(|| AppError::Validation("Voice description is required".to_string()))?;

        let previews = controller
            .voice_service
            .design_voice(description, request.text)
            .await
            .map_err(AppError::from)?;

        Ok(Json(DesignVoiceResponse { previews }))
    }

    /// POST /api/voices - Promote a generated preview into a permanent voice
    pub async fn create(
        State(controller): State<Arc<VoicesController>>,
        Json(request): Json<CreateVoiceRequest>,
    ) -> AppResult<Json<CreateVoiceResponse>> {
        let (voice_name, generated_voice_id) = match (
            request.voice_name.filter(|n| !n.trim().is_empty()),
            request.generated_voice_id.filter(|g| !g.trim().is_empty()),
        ) {
            (Some(voice_name), Some(generated_voice_id)) => (voice_name, generated_voice_id),
            _ => {
                return Err(AppError::Validation(
                    "Voice name and generated_voice_id are required".to_string(),
                ))
            }
        };

        let voice = controller
            .voice_service
            .create_voice(VoiceDraft {
                voice_name,
                voice_description: request.voice_description,
                generated_voice_id,
            })
            .await
            .map_err(AppError::from)?;

        Ok(Json(CreateVoiceResponse { voice }))
    }
}
