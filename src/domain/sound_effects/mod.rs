pub mod error;
pub mod service;

pub use error::SoundEffectServiceError;
pub use service::{SoundEffectService, SoundEffectServiceApi};

use serde::{Deserialize, Serialize};

pub const DEFAULT_DURATION_SECONDS: f64 = 10.0;
pub const DEFAULT_PROMPT_INFLUENCE: f64 = 0.3;

/// Provider limits on effect duration
pub const MIN_DURATION_SECONDS: f64 = 0.5;
pub const MAX_DURATION_SECONDS: f64 = 22.0;

/// Request for POST /api/sound-effects
#[derive(Debug, Serialize, Deserialize)]
pub struct SoundEffectRequest {
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_seconds: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prompt_influence: Option<f64>,
}

/// Fully-resolved generation parameters handed to the repository.
#[derive(Debug, Clone, PartialEq)]
pub struct SoundEffectSpec {
    pub text: String,
    pub duration_seconds: f64,
    pub prompt_influence: f64,
}

impl SoundEffectRequest {
    pub fn into_spec(self) -> Result<SoundEffectSpec, String> {
        let text = self
            .text
            .filter(|t| !t.trim().is_empty())
            .ok_or("Text description is required")?;

        Ok(SoundEffectSpec {
            text,
            duration_seconds: self.duration_seconds.unwrap_or(DEFAULT_DURATION_SECONDS),
            prompt_influence: self.prompt_influence.unwrap_or(DEFAULT_PROMPT_INFLUENCE),
        })
    }
}
