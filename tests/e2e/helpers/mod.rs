use anyhow::Result;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use wiremock::MockServer;

use voicelab_backend::controllers::dubbing::DubbingController;
use voicelab_backend::controllers::sound_effects::SoundEffectsController;
use voicelab_backend::controllers::speech::SpeechController;
use voicelab_backend::controllers::voices::VoicesController;
use voicelab_backend::domain::dubbing::DubbingService;
use voicelab_backend::domain::jobs::PollPolicy;
use voicelab_backend::domain::sound_effects::SoundEffectService;
use voicelab_backend::domain::speech::SpeechService;
use voicelab_backend::domain::voices::VoiceLibraryService;
use voicelab_backend::infrastructure::elevenlabs::ElevenLabsClient;
use voicelab_backend::infrastructure::http::build_router;
use voicelab_backend::infrastructure::repositories::{
    ElevenLabsDubbingRepository, ElevenLabsSoundEffectRepository, ElevenLabsSpeechRepository,
    ElevenLabsVoiceRepository,
};


use api_client::TestClient;

pub const TEST_API_KEY: &str = "test-api-key";

pub struct TestContext {
    pub client: TestClient,
    pub provider: MockServer,
    server: JoinHandle<()>,
}

impl TestContext {
    pub async fn new() -> Result<Self> {
        Self::builder().build().await
    }

    pub fn builder() -> TestContextBuilder {
        TestContextBuilder::default()
    }
}

impl Drop for TestContext {
    fn drop(&mut self) {
        self.server.abort();
    }
}

pub struct TestContextBuilder {
    excluded_voice_ids: Vec<String>,
    poll_max_attempts: u32,
}

impl Default for TestContextBuilder {
    fn default() -> Self {
        Self {
            excluded_voice_ids: Vec::new(),
            poll_max_attempts: 24,
        }
    }
}

impl TestContextBuilder {
    pub fn excluded_voices(mut self, ids: &[&str]) -> Self {
        self.excluded_voice_ids = ids.iter().map(|id| id.to_string()).collect();
        self
    }

    pub fn poll_max_attempts(mut self, max_attempts: u32) -> Self {
        self.poll_max_attempts = max_attempts;
        self
    }

    pub async fn build(self) -> Result<TestContext> {
        // One provider mock per test so expectations never leak
        let provider = MockServer::start().await;

        let elevenlabs_client = Arc::new(
            ElevenLabsClient::new(provider.uri(), TEST_API_KEY.to_string())
                .map_err(anyhow::Error::msg)?,
        );

        let speech_repo = Arc::new(ElevenLabsSpeechRepository::new(elevenlabs_client.clone()));
        let dubbing_repo = Arc::new(ElevenLabsDubbingRepository::new(elevenlabs_client.clone()));
        let voice_repo = Arc::new(ElevenLabsVoiceRepository::new(elevenlabs_client.clone()));
        let sound_effect_repo = Arc::new(ElevenLabsSoundEffectRepository::new(
            elevenlabs_client.clone(),
        ));

        let speech_service = Arc::new(SpeechService::new(speech_repo));
        // Millisecond cadence keeps poll-loop scenarios fast
        let dubbing_service = Arc::new(DubbingService::new(
            dubbing_repo,
            PollPolicy {
                interval: Duration::from_millis(10),
                max_attempts: self.poll_max_attempts,
            },
        ));
        let voice_service = Arc::new(VoiceLibraryService::new(
            voice_repo,
            self.excluded_voice_ids,
        ));
        let sound_effect_service = Arc::new(SoundEffectService::new(sound_effect_repo));

        let shutdown = CancellationToken::new();
        let app = build_router(
            elevenlabs_client,
            Arc::new(SpeechController::new(speech_service)),
            Arc::new(VoicesController::new(voice_service)),
            Arc::new(DubbingController::new(dubbing_service, shutdown)),
            Arc::new(SoundEffectsController::new(sound_effect_service)),
        );

        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        let server = tokio::spawn(async move {
            axum::serve(listener, app).await.expect("server failed");
        });

        Ok(TestContext {
            client: TestClient::new(&format!("http://{}", addr)),
            provider,
            server,
        })
    }
}
