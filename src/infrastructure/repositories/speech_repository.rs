use crate::domain::shared::AudioUpload;
use crate::domain::speech::{ConversionSpec, SynthesisSpec};
use crate::domain::streaming::AudioStream;
use async_trait::async_trait;

/// Repository for speech synthesis and speech-to-speech operations.
/// Abstracts the underlying voice provider.
///
/// Implementations are responsible for:
/// - Mapping the resolved spec onto the provider's wire format
/// - Rejecting failed calls before any bytes are produced, so an upstream
///   error is never mistaken for empty audio
/// - Returning the response body as a chunk stream without buffering it
#[async_trait]
pub trait SpeechRepository: Send + Sync {
    /// Synthesize speech via the provider's standard endpoint.
    async fn synthesize(&self, spec: &SynthesisSpec) -> Result<AudioStream, String>;

    /// Synthesize speech via the provider's streaming endpoint, which
    /// starts producing audio before the full result exists.
    async fn synthesize_streamed(&self, spec: &SynthesisSpec) -> Result<AudioStream, String>;

    /// Re-voice uploaded audio onto the target voice.
    async fn convert(
        &self,
        spec: &ConversionSpec,
        audio: AudioUpload,
    ) -> Result<AudioStream, String>;
}
