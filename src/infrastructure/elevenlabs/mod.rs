use crate::domain::streaming::{AudioStream, StreamReadError};
use futures::StreamExt;
use reqwest::{Client, RequestBuilder, Response};
use std::time::Duration;

pub const API_KEY_HEADER: &str = "xi-api-key";

/// Shared ElevenLabs client: one `reqwest::Client` per process plus the
/// credentials and base URL. Holds no per-request state, so a single
/// instance is constructed at startup and injected into every repository.
pub struct ElevenLabsClient {
    http: Client,
    base_url: String,
    api_key: String,
}

impl ElevenLabsClient {
    pub fn new(base_url: String, api_key: String) -> Result<Self, String> {
        // Connect timeout only: a total-duration timeout would sever long
        // chunked streams, so end-to-end deadlines stay with the deployment.
        let http = Client::builder()
            .connect_timeout(Duration::from_secs(10))
            .build()
            .map_err(|e| format!("Failed to build HTTP client: {}", e))?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    pub(crate) fn get(&self, path: &str) -> RequestBuilder {
        self.http
            .get(self.url(path))
            .header(API_KEY_HEADER, &self.api_key)
    }

    pub(crate) fn post(&self, path: &str) -> RequestBuilder {
        self.http
            .post(self.url(path))
            .header(API_KEY_HEADER, &self.api_key)
    }

    /// Verify the provider accepts the configured credentials.
    pub async fn check_connection(&self) -> Result<(), String> {
        let response = self
            .get("v1/user")
            .send()
            .await
            .map_err(|e| format!("voice service unreachable: {}", e))?;
        expect_success(response).await.map(|_| ())
    }
}

/// Reject non-2xx responses, surfacing the provider's error body. A call
/// that fails here produced no audio bytes, so the caller reports a
/// structured error instead of an empty audio body.
pub(crate) async fn expect_success(response: Response) -> Result<Response, String> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let detail = response.text().await.unwrap_or_default();
    if detail.is_empty() {
        Err(format!("voice service returned {}", status))
    } else {
        Err(format!("voice service returned {}: {}", status, detail))
    }
}

/// Expose a response body as a relayable chunk stream.
pub(crate) fn audio_stream(response: Response) -> AudioStream {
    Box::pin(
        response
            .bytes_stream()
            .map(|chunk| chunk.map_err(|e| StreamReadError(e.to_string()))),
    )
}
