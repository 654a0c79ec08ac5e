use crate::e2e::helpers;

use helpers::api_client::MultipartField;
use helpers::TestContext;
use hyper::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use serial_test::serial;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, ResponseTemplate};

fn audio_response(bytes: &[u8]) -> ResponseTemplate {
    ResponseTemplate::new(200)
        .insert_header("content-type", "audio/mpeg")
        .set_body_bytes(bytes.to_vec())
}

#[tokio::test]
#[serial]
async fn it_should_synthesize_text_to_speech() {
    let ctx = TestContext::new().await.unwrap();

    Mock::given(method("POST"))
        .and(path("/v1/text-to-speech/voice-1"))
        .and(header("xi-api-key", helpers::TEST_API_KEY))
        .and(query_param("output_format", "mp3_44100_128"))
        .and(body_json(json!({
            "text": "Hello, this is a test message.",
            "model_id": "eleven_multilingual_v2",
        })))
        .respond_with(audio_response(b"mp3-bytes"))
        .expect(1)
        .mount(&ctx.provider)
        .await;

    let response = ctx
        .client
        .post_json(
            "/api/speech/synthesize",
            &json!({
                "text": "Hello, this is a test message.",
                "voice_id": "voice-1"
            }),
        )
        .await
        .unwrap();

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.header("content-type"), Some("audio/mpeg"));
    assert_eq!(&response.body[..], b"mp3-bytes");
}

#[tokio::test]
#[serial]
async fn it_should_forward_voice_settings_with_per_field_defaults() {
    let ctx = TestContext::new().await.unwrap();

    Mock::given(method("POST"))
        .and(path("/v1/text-to-speech/voice-1"))
        .and(body_json(json!({
            "text": "Hello",
            "model_id": "eleven_multilingual_v2",
            "voice_settings": {
                "stability": 0.9,
                "similarity_boost": 0.5,
                "style": 0.0,
                "use_speaker_boost": false,
                "speed": 1.0
            }
        })))
        .respond_with(audio_response(b"ok"))
        .expect(1)
        .mount(&ctx.provider)
        .await;

    let response = ctx
        .client
        .post_json(
            "/api/speech/synthesize",
            &json!({
                "text": "Hello",
                "voice_id": "voice-1",
                "voice_settings": { "stability": 0.9 }
            }),
        )
        .await
        .unwrap();

    assert_eq!(response.status, StatusCode::OK);
}

#[tokio::test]
#[serial]
async fn it_should_use_the_stream_endpoint_when_streaming_flag_is_set() {
    let ctx = TestContext::new().await.unwrap();

    Mock::given(method("POST"))
        .and(path("/v1/text-to-speech/voice-1/stream"))
        .respond_with(audio_response(b"streamed-bytes"))
        .expect(1)
        .mount(&ctx.provider)
        .await;

    let response = ctx
        .client
        .post_json(
            "/api/speech/synthesize",
            &json!({
                "text": "Hello",
                "voice_id": "voice-1",
                "streaming": true
            }),
        )
        .await
        .unwrap();

    // Still a fully-buffered response, only the provider endpoint differs
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(&response.body[..], b"streamed-bytes");
}

#[tokio::test]
#[serial]
async fn it_should_relay_the_low_latency_stream_route() {
    let ctx = TestContext::new().await.unwrap();

    Mock::given(method("POST"))
        .and(path("/v1/text-to-speech/voice-1/stream"))
        .and(query_param("output_format", "mp3_22050_32"))
        .and(query_param("optimize_streaming_latency", "4"))
        .and(body_json(json!({
            "text": "Hello",
            "model_id": "eleven_flash_v2_5",
        })))
        .respond_with(audio_response(b"chunked-bytes"))
        .expect(1)
        .mount(&ctx.provider)
        .await;

    let response = ctx
        .client
        .post_json(
            "/api/speech/stream",
            &json!({
                "text": "Hello",
                "voice_id": "voice-1"
            }),
        )
        .await
        .unwrap();

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.header("content-type"), Some("audio/mpeg"));
    assert_eq!(&response.body[..], b"chunked-bytes");
}

#[tokio::test]
#[serial]
async fn it_should_reject_synthesis_without_required_fields() {
    let ctx = TestContext::new().await.unwrap();

    let response = ctx
        .client
        .post_json("/api/speech/synthesize", &json!({ "text": "Hello" }))
        .await
        .unwrap();

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    let body: Value = response.json().unwrap();
    assert_eq!(body["error"], "Invalid input: Text and voice_id are required");
    // No provider call was made
    assert!(ctx.provider.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
#[serial]
async fn it_should_surface_provider_failure_as_structured_error() {
    let ctx = TestContext::new().await.unwrap();

    Mock::given(method("POST"))
        .and(path("/v1/text-to-speech/voice-1"))
        .respond_with(
            ResponseTemplate::new(401).set_body_json(json!({"detail": "invalid api key"})),
        )
        .mount(&ctx.provider)
        .await;

    let response = ctx
        .client
        .post_json(
            "/api/speech/synthesize",
            &json!({ "text": "Hello", "voice_id": "voice-1" }),
        )
        .await
        .unwrap();

    // A failed provider call is a JSON error, never an empty audio body
    assert_eq!(response.status, StatusCode::BAD_GATEWAY);
    assert_eq!(response.header("content-type"), Some("application/json"));
    let body: Value = response.json().unwrap();
    assert!(body["error"].as_str().unwrap().contains("401"));
}

#[tokio::test]
#[serial]
async fn it_should_clone_a_voice_from_uploaded_audio() {
    let ctx = TestContext::new().await.unwrap();

    Mock::given(method("POST"))
        .and(path("/v1/speech-to-speech/target-voice"))
        .and(header("xi-api-key", helpers::TEST_API_KEY))
        .respond_with(audio_response(b"cloned-bytes"))
        .expect(1)
        .mount(&ctx.provider)
        .await;

    let response = ctx
        .client
        .post_multipart(
            "/api/speech/convert",
            &[
                MultipartField::file("audio", "sample.wav", "audio/wav", vec![0x52, 0x49, 0x46]),
                MultipartField::text("target_voice_id", "target-voice"),
            ],
        )
        .await
        .unwrap();

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.header("content-type"), Some("audio/mpeg"));
    assert_eq!(&response.body[..], b"cloned-bytes");
}

#[tokio::test]
#[serial]
async fn it_should_reject_clone_without_target_voice() {
    let ctx = TestContext::new().await.unwrap();

    let response = ctx
        .client
        .post_multipart(
            "/api/speech/convert",
            &[MultipartField::file(
                "audio",
                "sample.wav",
                "audio/wav",
                vec![0x01],
            )],
        )
        .await
        .unwrap();

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    let body: Value = response.json().unwrap();
    assert_eq!(
        body["error"],
        "Invalid input: Audio file and target voice ID are required"
    );
    assert!(ctx.provider.received_requests().await.unwrap().is_empty());
}
