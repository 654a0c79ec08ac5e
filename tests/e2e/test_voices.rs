use crate::e2e::helpers;

use helpers::TestContext;
use hyper::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use serial_test::serial;
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, ResponseTemplate};

fn catalog_body() -> Value {
    json!({
        "voices": [
            {
                "voice_id": "voice-a",
                "name": "Aria",
                "category": "premade",
                "labels": { "language": "en", "gender": "female" },
                "preview_url": "https://storage.example/aria.mp3"
            },
            {
                "voice_id": "voice-hidden",
                "name": "Internal",
                "category": "cloned"
            },
            {
                "voice_id": "voice-b",
                "name": "Bruno",
                "category": "premade",
                "labels": { "language": "es", "gender": "male" }
            }
        ]
    })
}

#[tokio::test]
#[serial]
async fn it_should_list_the_voice_catalog() {
    let ctx = TestContext::new().await.unwrap();

    Mock::given(method("GET"))
        .and(path("/v1/voices"))
        .respond_with(ResponseTemplate::new(200).set_body_json(catalog_body()))
        .expect(1)
        .mount(&ctx.provider)
        .await;

    let response = ctx.client.get("/api/voices").await.unwrap();

    assert_eq!(response.status, StatusCode::OK);
    let body: Value = response.json().unwrap();
    let voices = body["voices"].as_array().unwrap();
    assert_eq!(voices.len(), 3);
    assert_eq!(voices[0]["voice_id"], "voice-a");
    assert_eq!(voices[0]["labels"]["gender"], "female");
}

#[tokio::test]
#[serial]
async fn it_should_never_list_excluded_voices() {
    let ctx = TestContext::builder()
        .excluded_voices(&["voice-hidden"])
        .build()
        .await
        .unwrap();

    Mock::given(method("GET"))
        .and(path("/v1/voices"))
        .respond_with(ResponseTemplate::new(200).set_body_json(catalog_body()))
        .mount(&ctx.provider)
        .await;

    let response = ctx.client.get("/api/voices").await.unwrap();

    assert_eq!(response.status, StatusCode::OK);
    let body: Value = response.json().unwrap();
    let ids: Vec<&str> = body["voices"]
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v["voice_id"].as_str().unwrap())
        .collect();
    assert_eq!(ids, vec!["voice-a", "voice-b"]);
}

#[tokio::test]
#[serial]
async fn it_should_search_with_filters() {
    let ctx = TestContext::builder()
        .excluded_voices(&["voice-hidden"])
        .build()
        .await
        .unwrap();

    Mock::given(method("GET"))
        .and(path("/v2/voices"))
        .and(query_param("category", "premade"))
        .and(query_param("language", "es"))
        .respond_with(ResponseTemplate::new(200).set_body_json(catalog_body()))
        .expect(1)
        .mount(&ctx.provider)
        .await;

    let response = ctx
        .client
        .get("/api/voices?category=premade&language=es")
        .await
        .unwrap();

    assert_eq!(response.status, StatusCode::OK);
    let body: Value = response.json().unwrap();
    // Exclusions apply to the filtered listing too
    assert_eq!(body["voices"].as_array().unwrap().len(), 2);
}

#[tokio::test]
#[serial]
async fn it_should_design_a_voice_from_a_description() {
    let ctx = TestContext::new().await.unwrap();

    let sample = "s".repeat(120);
    Mock::given(method("POST"))
        .and(path("/v1/text-to-voice/create-previews"))
        .and(body_json(json!({
            "voice_description": "A warm, deep narrator voice",
            "text": sample,
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "previews": [
                {
                    "generated_voice_id": "gen-1",
                    "audio_base_64": "QUJD",
                    "media_type": "audio/mpeg",
                    "duration_secs": 3.5
                }
            ]
        })))
        .expect(1)
        .mount(&ctx.provider)
        .await;

    let response = ctx
        .client
        .post_json(
            "/api/voices/design",
            &json!({
                "voice_description": "A warm, deep narrator voice",
                "text": sample
            }),
        )
        .await
        .unwrap();

    assert_eq!(response.status, StatusCode::OK);
    let body: Value = response.json().unwrap();
    assert_eq!(body["previews"][0]["generated_voice_id"], "gen-1");
    assert_eq!(body["previews"][0]["audio_base_64"], "QUJD");
}

#[tokio::test]
#[serial]
async fn it_should_reject_design_without_a_description() {
    let ctx = TestContext::new().await.unwrap();

    let response = ctx
        .client
        .post_json("/api/voices/design", &json!({ "text": "irrelevant" }))
        .await
        .unwrap();

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    let body: Value = response.json().unwrap();
    assert_eq!(body["error"], "Invalid input: Voice description is required");
    assert!(ctx.provider.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
#[serial]
async fn it_should_reject_a_sample_below_the_provider_minimum() {
    let ctx = TestContext::new().await.unwrap();

    let response = ctx
        .client
        .post_json(
            "/api/voices/design",
            &json!({
                "voice_description": "A warm narrator",
                "text": "too short"
            }),
        )
        .await
        .unwrap();

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert!(ctx.provider.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
#[serial]
async fn it_should_create_a_voice_from_a_preview() {
    let ctx = TestContext::new().await.unwrap();

    Mock::given(method("POST"))
        .and(path("/v1/text-to-voice/create-voice-from-preview"))
        .and(body_json(json!({
            "voice_name": "Narrator",
            "voice_description": "A warm narrator",
            "generated_voice_id": "gen-1",
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "voice_id": "voice-new",
            "name": "Narrator",
            "category": "generated"
        })))
        .expect(1)
        .mount(&ctx.provider)
        .await;

    let response = ctx
        .client
        .post_json(
            "/api/voices",
            &json!({
                "voice_name": "Narrator",
                "voice_description": "A warm narrator",
                "generated_voice_id": "gen-1"
            }),
        )
        .await
        .unwrap();

    assert_eq!(response.status, StatusCode::OK);
    let body: Value = response.json().unwrap();
    assert_eq!(body["voice"]["voice_id"], "voice-new");
    assert_eq!(body["voice"]["name"], "Narrator");
}

#[tokio::test]
#[serial]
async fn it_should_reject_creation_without_a_generated_voice_id() {
    let ctx = TestContext::new().await.unwrap();

    let response = ctx
        .client
        .post_json("/api/voices", &json!({ "voice_name": "Narrator" }))
        .await
        .unwrap();

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    let body: Value = response.json().unwrap();
    assert_eq!(
        body["error"],
        "Invalid input: Voice name and generated_voice_id are required"
    );
}
