pub mod dubbing;
pub mod health;
pub mod sound_effects;
pub mod speech;
pub mod voices;

use axum::{
    body::Body,
    http::{header, HeaderMap, StatusCode},
};

/// Complete audio file response with a known length
pub(crate) fn audio_response(audio: Vec<u8>) -> (StatusCode, HeaderMap, Body) {
    let mut headers = HeaderMap::new();
    headers.insert(header::CONTENT_TYPE, "audio/mpeg".parse().unwrap());
    headers.insert(
        header::CONTENT_LENGTH,
        audio.len().to_string().parse().unwrap(),
    );

    (StatusCode::OK, headers, Body::from(audio))
}
