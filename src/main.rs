use std::sync::Arc;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use voicelab_backend::domain::jobs::PollPolicy;
use voicelab_backend::infrastructure::config::{Config, LogFormat};
use voicelab_backend::infrastructure::elevenlabs::ElevenLabsClient;
use voicelab_backend::infrastructure::http::start_http_server;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = Config::from_env()?;

    // Initialize logging
    init_logging(&config);

    tracing::info!(
        "Starting VoiceLab Backend on {}:{}",
        config.host,
        config.port
    );

    // Create the shared voice service client (credentials and config only,
    // no per-request state)
    tracing::info!(
        base_url = %config.elevenlabs_base_url,
        excluded_voices = config.excluded_voice_ids.len(),
        "Initializing ElevenLabs client"
    );
    let elevenlabs_client = Arc::new(ElevenLabsClient::new(
        config.elevenlabs_base_url.clone(),
        config.elevenlabs_api_key.clone(),
    )?);

    let poll_policy = PollPolicy {
        interval: Duration::from_secs(config.dubbing_poll_interval_secs),
        max_attempts: config.dubbing_poll_max_attempts,
    };
    tracing::info!(
        poll_interval_secs = config.dubbing_poll_interval_secs,
        poll_max_attempts = config.dubbing_poll_max_attempts,
        "Dubbing poll policy configured"
    );

    let config = Arc::new(config);

    // Shutdown token: cancels in-flight dubbing poll loops and stops the
    // server on SIGINT
    let shutdown = CancellationToken::new();
    let shutdown_on_signal = shutdown.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            tracing::info!("Shutdown signal received");
            shutdown_on_signal.cancel();
        }
    });

    // === DEPENDENCY INJECTION SETUP ===
    // 1. Instantiate repositories (inject the shared provider client)
    tracing::info!("Instantiating repositories...");
    let speech_repo = Arc::new(
        voicelab_backend::infrastructure::repositories::ElevenLabsSpeechRepository::new(
            elevenlabs_client.clone(),
        ),
    );
    let dubbing_repo = Arc::new(
        voicelab_backend::infrastructure::repositories::ElevenLabsDubbingRepository::new(
            elevenlabs_client.clone(),
        ),
    );
    let voice_repo = Arc::new(
        voicelab_backend::infrastructure::repositories::ElevenLabsVoiceRepository::new(
            elevenlabs_client.clone(),
        ),
    );
    let sound_effect_repo = Arc::new(
        voicelab_backend::infrastructure::repositories::ElevenLabsSoundEffectRepository::new(
            elevenlabs_client.clone(),
        ),
    );

    // 2. Instantiate services (inject repositories)
    tracing::info!("Instantiating services...");
    let speech_service = Arc::new(voicelab_backend::domain::speech::SpeechService::new(
        speech_repo,
    ));
    let dubbing_service = Arc::new(voicelab_backend::domain::dubbing::DubbingService::new(
        dubbing_repo,
        poll_policy,
    ));
    let voice_service = Arc::new(voicelab_backend::domain::voices::VoiceLibraryService::new(
        voice_repo,
        config.excluded_voice_ids.clone(),
    ));
    let sound_effect_service = Arc::new(
        voicelab_backend::domain::sound_effects::SoundEffectService::new(sound_effect_repo),
    );

    // 3. Instantiate controllers (inject services)
    tracing::info!("Instantiating controllers...");
    let speech_controller = Arc::new(voicelab_backend::controllers::speech::SpeechController::new(
        speech_service,
    ));
    let dubbing_controller = Arc::new(
        voicelab_backend::controllers::dubbing::DubbingController::new(
            dubbing_service,
            shutdown.clone(),
        ),
    );
    let voices_controller = Arc::new(voicelab_backend::controllers::voices::VoicesController::new(
        voice_service,
    ));
    let sound_effects_controller = Arc::new(
        voicelab_backend::controllers::sound_effects::SoundEffectsController::new(
            sound_effect_service,
        ),
    );

    // Start HTTP server with all routes
    start_http_server(
        config,
        shutdown,
        elevenlabs_client,
        speech_controller,
        voices_controller,
        dubbing_controller,
        sound_effects_controller,
    )
    .await?;

    Ok(())
}

fn init_logging(config: &Config) {
    if config.log_format == LogFormat::Json {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "voicelab_backend=debug,tower_http=debug".into()),
            )
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "voicelab_backend=debug,tower_http=debug".into()),
            )
            .with(tracing_subscriber::fmt::layer().pretty())
            .init();
    }
}
