pub mod request_id;

use axum::{extract::DefaultBodyLimit, middleware, routing::get, routing::post, Router};
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::controllers::{
    dubbing::DubbingController, health, sound_effects::SoundEffectsController,
    speech::SpeechController, voices::VoicesController,
};
use crate::infrastructure::config::Config;
use crate::infrastructure::elevenlabs::ElevenLabsClient;
use request_id::request_id_middleware;

/// Upload cap for multipart audio endpoints, matching the provider's own
/// file-size limit
const MAX_UPLOAD_BYTES: usize = 100 * 1024 * 1024;

/// Assemble the application router with all routes configured
pub fn build_router(
    elevenlabs_client: Arc<ElevenLabsClient>,
    speech_controller: Arc<SpeechController>,
    voices_controller: Arc<VoicesController>,
    dubbing_controller: Arc<DubbingController>,
    sound_effects_controller: Arc<SoundEffectsController>,
) -> Router {
    // Speech routes; /convert accepts an audio upload
    let speech_routes = Router::new()
        .route("/api/speech/synthesize", post(SpeechController::synthesize))
        .route("/api/speech/stream", post(SpeechController::stream))
        .route("/api/speech/convert", post(SpeechController::convert))
        .with_state(speech_controller)
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES));

    // Voice catalog and voice design routes
    let voices_routes = Router::new()
        .route(
            "/api/voices",
            get(VoicesController::list_voices).post(VoicesController::create),
        )
        .route("/api/voices/design", post(VoicesController::design))
        .with_state(voices_controller);

    // Dubbing accepts an audio upload and holds the request open while the
    // provider job completes
    let dubbing_routes = Router::new()
        .route("/api/dubbing", post(DubbingController::translate))
        .with_state(dubbing_controller)
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES));

    let sound_effects_routes = Router::new()
        .route("/api/sound-effects", post(SoundEffectsController::generate))
        .with_state(sound_effects_controller);

    Router::new()
        .route("/health", get(health::health))
        .route("/health/ready", get(health::health_ready))
        .with_state(elevenlabs_client)
        .merge(speech_routes)
        .merge(voices_routes)
        .merge(dubbing_routes)
        .merge(sound_effects_routes)
        .layer(middleware::from_fn(request_id_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

/// Start the HTTP server; `shutdown` stops it gracefully and cancels any
/// in-flight poll loops
pub async fn start_http_server(
    config: Arc<Config>,
    shutdown: CancellationToken,
    elevenlabs_client: Arc<ElevenLabsClient>,
    speech_controller: Arc<SpeechController>,
    voices_controller: Arc<VoicesController>,
    dubbing_controller: Arc<DubbingController>,
    sound_effects_controller: Arc<SoundEffectsController>,
) -> Result<(), Box<dyn std::error::Error>> {
    let app = build_router(
        elevenlabs_client,
        speech_controller,
        voices_controller,
        dubbing_controller,
        sound_effects_controller,
    );

    let listener =
        tokio::net::TcpListener::bind(format!("{}:{}", config.host, config.port)).await?;

    tracing::info!("Server listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(async move { shutdown.cancelled().await })
        .await?;

    Ok(())
}
