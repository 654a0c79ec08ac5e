use crate::domain::voices::{VoiceDescriptor, VoiceDraft, VoiceFilters, VoicePreview};
use async_trait::async_trait;

/// Repository for the provider's voice catalog and voice design operations.
#[async_trait]
pub trait VoiceCatalogRepository: Send + Sync {
    /// Fetch the full voice catalog.
    async fn list_voices(&self) -> Result<Vec<VoiceDescriptor>, String>;

    /// Fetch the catalog filtered by the provider's search parameters.
    async fn search_voices(&self, filters: &VoiceFilters) -> Result<Vec<VoiceDescriptor>, String>;

    /// Generate voice previews from a free-text description.
    async fn design_voice(
        &self,
        description: &str,
        sample_text: &str,
    ) -> Result<Vec<VoicePreview>, String>;

    /// Promote a generated preview into a permanent voice.
    async fn create_voice(&self, draft: &VoiceDraft) -> Result<VoiceDescriptor, String>;
}
