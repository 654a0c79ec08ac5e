use super::voice_repository::VoiceCatalogRepository;
use crate::domain::voices::{VoiceDescriptor, VoiceDraft, VoiceFilters, VoicePreview};
use crate::infrastructure::elevenlabs::{expect_success, ElevenLabsClient};
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;
use std::collections::HashMap;
use std::sync::Arc;

// ElevenLabs API response structures
#[derive(Debug, Deserialize)]
struct VoicesEnvelope {
    #[serde(default)]
    voices: Vec<ElevenLabsVoice>,
}

#[derive(Debug, Deserialize)]
struct ElevenLabsVoice {
    voice_id: String,
    name: String,
    #[serde(default)]
    category: Option<String>,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    labels: Option<HashMap<String, String>>,
    #[serde(default)]
    preview_url: Option<String>,
}

impl From<ElevenLabsVoice> for VoiceDescriptor {
    fn from(voice: ElevenLabsVoice) -> Self {
        VoiceDescriptor {
            voice_id: voice.voice_id,
            name: voice.name,
            category: voice.category,
            description: voice.description,
            labels: voice.labels.unwrap_or_default(),
            preview_url: voice.preview_url,
        }
    }
}

#[derive(Debug, Deserialize)]
struct PreviewsEnvelope {
    #[serde(default)]
    previews: Vec<ElevenLabsPreview>,
}

#[derive(Debug, Deserialize)]
struct ElevenLabsPreview {
    generated_voice_id: String,
    audio_base_64: String,
    #[serde(default)]
    media_type: Option<String>,
    #[serde(default)]
    duration_secs: Option<f64>,
}

impl From<ElevenLabsPreview> for VoicePreview {
    fn from(preview: ElevenLabsPreview) -> Self {
        VoicePreview {
            generated_voice_id: preview.generated_voice_id,
            audio_base_64: preview.audio_base_64,
            media_type: preview.media_type,
            duration_secs: preview.duration_secs,
        }
    }
}

/// ElevenLabs implementation of the voice catalog repository
pub struct ElevenLabsVoiceRepository {
    client: Arc<ElevenLabsClient>,
}

impl ElevenLabsVoiceRepository {
    pub fn new(client: Arc<ElevenLabsClient>) -> Self {
        Self { client }
    }

    fn filter_query(filters: &VoiceFilters) -> Vec<(&'static str, String)> {
        let mut query = Vec::new();
        if let Some(category) = &filters.category {
            query.push(("category", category.clone()));
        }
        if let Some(language) = &filters.language {
            query.push(("language", language.clone()));
        }
        if let Some(age) = &filters.age {
            query.push(("age", age.clone()));
        }
        if let Some(accent) = &filters.accent {
            query.push(("accent", accent.clone()));
        }
        if let Some(gender) = &filters.gender {
            query.push(("gender", gender.clone()));
        }
        query
    }

    async fn fetch_catalog(
        &self,
        path: &str,
        query: Vec<(&'static str, String)>,
    ) -> Result<Vec<VoiceDescriptor>, String> {
        let response = self
            .client
            .get(path)
            .query(&query)
            .send()
            .await
            .map_err(|e| {
                tracing::error!(error = %e, path = path, "ElevenLabs voice catalog call failed");
                format!("ElevenLabs error: {}", e)
            })?;

        let response = expect_success(response).await?;
        let envelope: VoicesEnvelope = response
            .json()
            .await
            .map_err(|e| format!("Failed to parse voice catalog: {}", e))?;

        Ok(envelope.voices.into_iter().map(VoiceDescriptor::from).collect())
    }
}

#[async_trait]
impl VoiceCatalogRepository for ElevenLabsVoiceRepository {
    async fn list_voices(&self) -> Result<Vec<VoiceDescriptor>, String> {
        self.fetch_catalog("v1/voices", Vec::new()).await
    }

    async fn search_voices(&self, filters: &VoiceFilters) -> Result<Vec<VoiceDescriptor>, String> {
        self.fetch_catalog("v2/voices", Self::filter_query(filters))
            .await
    }

    async fn design_voice(
        &self,
        description: &str,
        sample_text: &str,
    ) -> Result<Vec<VoicePreview>, String> {
        let response = self
            .client
            .post("v1/text-to-voice/create-previews")
            .json(&json!({
                "voice_description": description,
                "text": sample_text,
            }))
            .send()
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "ElevenLabs voice design call failed");
                format!("ElevenLabs error: {}", e)
            })?;

        let response = expect_success(response).await?;
        let envelope: PreviewsEnvelope = response
            .json()
            .await
            .map_err(|e| format!("Failed to parse voice previews: {}", e))?;

        Ok(envelope.previews.into_iter().map(VoicePreview::from).collect())
    }

    async fn create_voice(&self, draft: &VoiceDraft) -> Result<VoiceDescriptor, String> {
        let response = self
            .client
            .post("v1/text-to-voice/create-voice-from-preview")
            .json(&json!({
                "voice_name": draft.voice_name,
                "voice_description": draft.voice_description,
                "generated_voice_id": draft.generated_voice_id,
            }))
            .send()
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "ElevenLabs voice creation call failed");
                format!("ElevenLabs error: {}", e)
            })?;

        let response = expect_success(response).await?;
        let voice: ElevenLabsVoice = response
            .json()
            .await
            .map_err(|e| format!("Failed to parse created voice: {}", e))?;

        Ok(voice.into())
    }
}
