use super::error::VoiceLibraryServiceError;
use super::{
    VoiceDescriptor, VoiceDraft, VoiceFilters, VoicePreview, DEFAULT_PREVIEW_TEXT,
    MIN_SAMPLE_TEXT_LENGTH,
};
use crate::infrastructure::repositories::VoiceCatalogRepository;
use async_trait::async_trait;
use std::sync::Arc;

pub struct VoiceLibraryService {
    voice_repo: Arc<dyn VoiceCatalogRepository>,
    excluded_voice_ids: Vec<String>,
}

impl VoiceLibraryService {
    pub fn new(voice_repo: Arc<dyn VoiceCatalogRepository>, excluded_voice_ids: Vec<String>) -> Self {
        Self {
            voice_repo,
            excluded_voice_ids,
        }
    }

    fn without_excluded(&self, voices: Vec<VoiceDescriptor>) -> Vec<VoiceDescriptor> {
        voices
            .into_iter()
            .filter(|v| !self.excluded_voice_ids.contains(&v.voice_id))
            .collect()
    }
}

#[async_trait]
pub trait VoiceLibraryServiceApi: Send + Sync {
    /// List the voice catalog, optionally filtered. Configured excluded
    /// voices are removed after fetching, on both the filtered and the
    /// unfiltered path.
    async fn list_voices(
        &self,
        filters: VoiceFilters,
    ) -> Result<Vec<VoiceDescriptor>, VoiceLibraryServiceError>;

    /// Generate voice previews from a free-text description.
    async fn design_voice(
        &self,
        description: String,
        sample_text: Option<String>,
    ) -> Result<Vec<VoicePreview>, VoiceLibraryServiceError>;

    /// Promote a generated preview into a permanent voice.
    async fn create_voice(
        &self,
        draft: VoiceDraft,
    ) -> Result<VoiceDescriptor, VoiceLibraryServiceError>;
}

#[async_trait]
impl VoiceLibraryServiceApi for VoiceLibraryService {
    async fn list_voices(
        &self,
        filters: VoiceFilters,
    ) -> Result<Vec<VoiceDescriptor>, VoiceLibraryServiceError> {
        let voices = if filters.is_empty() {
            self.voice_repo.list_voices().await
        } else {
            self.voice_repo.search_voices(&filters).await
        }
        .map_err(VoiceLibraryServiceError::Upstream)?;

        let total = voices.len();
        let visible = self.without_excluded(voices);

        tracing::info!(
            total = total,
            visible = visible.len(),
            filtered = !filters.is_empty(),
            "Voice catalog fetched"
        );

        Ok(visible)
    }

    async fn design_voice(
        &self,
        description: String,
        sample_text: Option<String>,
    ) -> Result<Vec<VoicePreview>, VoiceLibraryServiceError> {
        if description.trim().is_empty() {
            return Err(VoiceLibraryServiceError::Invalid(
                "Voice description is required".to_string(),
            ));
        }

        let sample = match sample_text {
            Some(text) if text.len() < MIN_SAMPLE_TEXT_LENGTH => {
                return Err(VoiceLibraryServiceError::Invalid(format!(
                    "Sample text must be at least {} characters",
                    MIN_SAMPLE_TEXT_LENGTH
                )));
            }
            Some(text) => text,
            None => DEFAULT_PREVIEW_TEXT.to_string(),
        };

        tracing::info!(
            description_length = description.len(),
            sample_length = sample.len(),
            "Designing voice from description"
        );

        let previews = self
            .voice_repo
            .design_voice(&description, &sample)
            .await
            .map_err(VoiceLibraryServiceError::Upstream)?;

        tracing::info!(previews = previews.len(), "Voice previews generated");

        Ok(previews)
    }

    async fn create_voice(
        &self,
        draft: VoiceDraft,
    ) -> Result<VoiceDescriptor, VoiceLibraryServiceError> {
        if draft.voice_name.trim().is_empty() || draft.generated_voice_id.trim().is_empty() {
            return Err(VoiceLibraryServiceError::Invalid(
                "Voice name and generated_voice_id are required".to_string(),
            ));
        }

        tracing::info!(
            voice_name = %draft.voice_name,
            generated_voice_id = %draft.generated_voice_id,
            "Creating voice from preview"
        );

        self.voice_repo
            .create_voice(&draft)
            .await
            .map_err(VoiceLibraryServiceError::Upstream)
    }
}
