use crate::domain::sound_effects::SoundEffectSpec;
use crate::domain::streaming::AudioStream;
use async_trait::async_trait;

/// Repository for text-to-sound-effect generation.
#[async_trait]
pub trait SoundEffectRepository: Send + Sync {
    /// Generate a sound effect from a text description.
    async fn generate(&self, spec: &SoundEffectSpec) -> Result<AudioStream, String>;
}
