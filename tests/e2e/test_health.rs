use crate::e2e::helpers;

use helpers::TestContext;
use hyper::StatusCode;
use serde_json::Value;
use serial_test::serial;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, ResponseTemplate};

#[tokio::test]
#[serial]
async fn it_should_respond_to_liveness_probe() {
    let ctx = TestContext::new().await.unwrap();

    let response = ctx.client.get("/health").await.unwrap();

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(&response.body[..], b"OK");
}

#[tokio::test]
#[serial]
async fn it_should_report_ready_when_provider_accepts_credentials() {
    let ctx = TestContext::new().await.unwrap();

    Mock::given(method("GET"))
        .and(path("/v1/user"))
        .and(header("xi-api-key", helpers::TEST_API_KEY))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "subscription": { "tier": "starter" }
        })))
        .mount(&ctx.provider)
        .await;

    let response = ctx.client.get("/health/ready").await.unwrap();

    assert_eq!(response.status, StatusCode::OK);
    let body: Value = response.json().unwrap();
    assert_eq!(body["status"], "ready");
    assert_eq!(body["voice_service"], "connected");
}

#[tokio::test]
#[serial]
async fn it_should_report_not_ready_when_provider_rejects_credentials() {
    let ctx = TestContext::new().await.unwrap();

    Mock::given(method("GET"))
        .and(path("/v1/user"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&ctx.provider)
        .await;

    let response = ctx.client.get("/health/ready").await.unwrap();

    assert_eq!(response.status, StatusCode::SERVICE_UNAVAILABLE);
    let body: Value = response.json().unwrap();
    assert_eq!(body["status"], "not_ready");
}

#[tokio::test]
#[serial]
async fn it_should_attach_a_request_id_to_every_response() {
    let ctx = TestContext::new().await.unwrap();

    let response = ctx.client.get("/health").await.unwrap();

    assert!(response.header("x-request-id").is_some());
}
