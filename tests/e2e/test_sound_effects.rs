use crate::e2e::helpers;

use helpers::TestContext;
use hyper::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use serial_test::serial;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, ResponseTemplate};

#[tokio::test]
#[serial]
async fn it_should_generate_a_sound_effect_with_defaults() {
    let ctx = TestContext::new().await.unwrap();

    Mock::given(method("POST"))
        .and(path("/v1/sound-generation"))
        .and(body_json(json!({
            "text": "rain on a tin roof",
            "duration_seconds": 10.0,
            "prompt_influence": 0.3,
        })))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("content-type", "audio/mpeg")
                .set_body_bytes(b"sfx-bytes".to_vec()),
        )
        .expect(1)
        .mount(&ctx.provider)
        .await;

    let response = ctx
        .client
        .post_json(
            "/api/sound-effects",
            &json!({ "text": "rain on a tin roof" }),
        )
        .await
        .unwrap();

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.header("content-type"), Some("audio/mpeg"));
    assert_eq!(&response.body[..], b"sfx-bytes");
}

#[tokio::test]
#[serial]
async fn it_should_honor_caller_duration_and_influence() {
    let ctx = TestContext::new().await.unwrap();

    Mock::given(method("POST"))
        .and(path("/v1/sound-generation"))
        .and(body_json(json!({
            "text": "door creak",
            "duration_seconds": 2.5,
            "prompt_influence": 0.8,
        })))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(b"creak".to_vec()))
        .expect(1)
        .mount(&ctx.provider)
        .await;

    let response = ctx
        .client
        .post_json(
            "/api/sound-effects",
            &json!({
                "text": "door creak",
                "duration_seconds": 2.5,
                "prompt_influence": 0.8
            }),
        )
        .await
        .unwrap();

    assert_eq!(response.status, StatusCode::OK);
}

#[tokio::test]
#[serial]
async fn it_should_reject_a_missing_description() {
    let ctx = TestContext::new().await.unwrap();

    let response = ctx
        .client
        .post_json("/api/sound-effects", &json!({ "duration_seconds": 5.0 }))
        .await
        .unwrap();

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    let body: Value = response.json().unwrap();
    assert_eq!(body["error"], "Invalid input: Text description is required");
    assert!(ctx.provider.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
#[serial]
async fn it_should_reject_an_out_of_range_duration() {
    let ctx = TestContext::new().await.unwrap();

    let response = ctx
        .client
        .post_json(
            "/api/sound-effects",
            &json!({ "text": "explosion", "duration_seconds": 60.0 }),
        )
        .await
        .unwrap();

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert!(ctx.provider.received_requests().await.unwrap().is_empty());
}
