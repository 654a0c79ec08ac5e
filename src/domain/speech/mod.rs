pub mod error;
pub mod service;

pub use error::SpeechServiceError;
pub use service::{SpeechService, SpeechServiceApi};

use serde::{Deserialize, Serialize};

pub const DEFAULT_TTS_MODEL: &str = "eleven_multilingual_v2";
/// Fastest model, used for the low-latency streaming path
pub const STREAMING_TTS_MODEL: &str = "eleven_flash_v2_5";
pub const SPEECH_TO_SPEECH_MODEL: &str = "eleven_english_sts_v2";

pub const DEFAULT_OUTPUT_FORMAT: &str = "mp3_44100_128";
/// Lower quality for faster first-byte on the streaming path
pub const STREAMING_OUTPUT_FORMAT: &str = "mp3_22050_32";
pub const STREAMING_LATENCY_MODE: u32 = 4;

/// Voice style parameters as sent to the provider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VoiceSettings {
    pub stability: f64,
    pub similarity_boost: f64,
    pub style: f64,
    pub use_speaker_boost: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub speed: Option<f64>,
}

/// Caller-supplied style overrides; unset fields fall back to the defaults
/// the provider documents for each knob.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VoiceSettingsParams {
    pub stability: Option<f64>,
    pub similarity_boost: Option<f64>,
    pub style: Option<f64>,
    pub use_speaker_boost: Option<bool>,
    pub speed: Option<f64>,
}

impl VoiceSettingsParams {
    pub fn resolve(&self) -> VoiceSettings {
        VoiceSettings {
            stability: self.stability.unwrap_or(0.5),
            similarity_boost: self.similarity_boost.unwrap_or(0.5),
            style: self.style.unwrap_or(0.0),
            use_speaker_boost: self.use_speaker_boost.unwrap_or(false),
            speed: Some(self.speed.unwrap_or(1.0)),
        }
    }

    /// Streaming synthesis does not accept a speed override.
    pub fn resolve_for_streaming(&self) -> VoiceSettings {
        VoiceSettings {
            speed: None,
            ..self.resolve()
        }
    }
}

/// Request for POST /api/speech/synthesize
#[derive(Debug, Serialize, Deserialize)]
pub struct SynthesizeRequest {
    pub text: Option<String>,
    pub voice_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub voice_settings: Option<VoiceSettingsParams>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_format: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub optimize_streaming_latency: Option<u32>,
    #[serde(default)]
    pub streaming: bool,
}

/// Request for POST /api/speech/stream
#[derive(Debug, Serialize, Deserialize)]
pub struct StreamSynthesizeRequest {
    pub text: Option<String>,
    pub voice_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub voice_settings: Option<VoiceSettingsParams>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub optimize_streaming_latency: Option<u32>,
}

/// Fully-resolved synthesis parameters handed to the repository.
#[derive(Debug, Clone, PartialEq)]
pub struct SynthesisSpec {
    pub text: String,
    pub voice_id: String,
    pub model_id: String,
    pub voice_settings: Option<VoiceSettings>,
    pub output_format: String,
    pub optimize_streaming_latency: Option<u32>,
}

impl SynthesizeRequest {
    /// Validate required fields and resolve defaults. The `streaming` flag
    /// selects the provider's stream endpoint; the response is still fully
    /// buffered either way.
    pub fn into_spec(self) -> Result<(SynthesisSpec, bool), String> {
        let text = self
            .text
            .filter(|t| !t.trim().is_empty())
            .ok_or("Text and voice_id are required")?;
        let voice_id = self
            .voice_id
            .filter(|v| !v.trim().is_empty())
            .ok_or("Text and voice_id are required")?;

        Ok((
            SynthesisSpec {
                text,
                voice_id,
                model_id: self
                    .model_id
                    .unwrap_or_else(|| DEFAULT_TTS_MODEL.to_string()),
                voice_settings: self.voice_settings.as_ref().map(VoiceSettingsParams::resolve),
                output_format: self
                    .output_format
                    .unwrap_or_else(|| DEFAULT_OUTPUT_FORMAT.to_string()),
                optimize_streaming_latency: self.optimize_streaming_latency,
            },
            self.streaming,
        ))
    }
}

impl StreamSynthesizeRequest {
    pub fn into_spec(self) -> Result<SynthesisSpec, String> {
        let text = self
            .text
            .filter(|t| !t.trim().is_empty())
            .ok_or("Text and voice_id are required")?;
        let voice_id = self
            .voice_id
            .filter(|v| !v.trim().is_empty())
            .ok_or("Text and voice_id are required")?;

        Ok(SynthesisSpec {
            text,
            voice_id,
            model_id: self
                .model_id
                .unwrap_or_else(|| STREAMING_TTS_MODEL.to_string()),
            voice_settings: self
                .voice_settings
                .as_ref()
                .map(VoiceSettingsParams::resolve_for_streaming),
            output_format: STREAMING_OUTPUT_FORMAT.to_string(),
            optimize_streaming_latency: Some(
                self.optimize_streaming_latency
                    .unwrap_or(STREAMING_LATENCY_MODE),
            ),
        })
    }
}

/// Fully-resolved speech-to-speech parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct ConversionSpec {
    pub target_voice_id: String,
    pub model_id: String,
    pub voice_settings: VoiceSettings,
    pub remove_background_noise: bool,
}

impl ConversionSpec {
    /// Style preset used for cloning a recorded voice onto a target voice.
    pub fn voice_clone_preset(target_voice_id: String) -> Self {
        Self {
            target_voice_id,
            model_id: SPEECH_TO_SPEECH_MODEL.to_string(),
            voice_settings: VoiceSettings {
                stability: 0.5,
                similarity_boost: 0.8,
                style: 0.2,
                use_speaker_boost: true,
                speed: None,
            },
            remove_background_noise: true,
        }
    }
}
