pub mod error;
pub mod service;

pub use error::VoiceLibraryServiceError;
pub use service::{VoiceLibraryService, VoiceLibraryServiceApi};

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Sample spoken when the caller does not supply one. The provider requires
/// at least [`MIN_SAMPLE_TEXT_LENGTH`] characters of sample text.
pub const DEFAULT_PREVIEW_TEXT: &str = "Hello, this is a preview of the generated voice. \
I can read articles, narrate stories, and bring characters to life in any style you choose.";

pub const MIN_SAMPLE_TEXT_LENGTH: usize = 100;

/// One entry of the provider's voice catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VoiceDescriptor {
    pub voice_id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub labels: HashMap<String, String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preview_url: Option<String>,
}

/// Optional catalog filters; an empty set selects the full listing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VoiceFilters {
    pub category: Option<String>,
    pub language: Option<String>,
    pub age: Option<String>,
    pub accent: Option<String>,
    pub gender: Option<String>,
}

impl VoiceFilters {
    pub fn is_empty(&self) -> bool {
        self.category.is_none()
            && self.language.is_none()
            && self.age.is_none()
            && self.accent.is_none()
            && self.gender.is_none()
    }
}

/// A generated-voice preview returned by the design operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VoicePreview {
    pub generated_voice_id: String,
    pub audio_base_64: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub media_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_secs: Option<f64>,
}

/// Request for POST /api/voices/design
#[derive(Debug, Serialize, Deserialize)]
pub struct DesignVoiceRequest {
    pub voice_description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

/// Request for POST /api/voices
#[derive(Debug, Serialize, Deserialize)]
pub struct CreateVoiceRequest {
    pub voice_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub voice_description: Option<String>,
    pub generated_voice_id: Option<String>,
}

/// Parameters for promoting a preview into a permanent voice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VoiceDraft {
    pub voice_name: String,
    pub voice_description: Option<String>,
    pub generated_voice_id: String,
}
