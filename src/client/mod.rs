pub mod image_client;
pub mod text_client;

use crate::{
    config::BackendConfig,
    error::{truncate_chars, FieldGenError, Result, MAX_USER_MESSAGE_CHARS},
};
use reqwest::Client;
use serde_json::Value;

pub use image_client::ImageClient;
pub use text_client::TextClient;

/// Strategy implemented once per pipeline: where the request goes, what the
/// body looks like, and which response field carries the result.
pub(crate) trait Pipeline {
    type Output;

    const ENDPOINT_SUFFIX: &'static str;

    /// Build the JSON request body. Fails on malformed input (non-image
    /// attachments) before any I/O happens.
    fn body(&self) -> Result<Value>;

    /// Pull the pipeline's success value out of a parsed response body.
    /// `None` means the backend answered without the expected field.
    fn extract(body: &Value) -> Option<Self::Output>;
}

/// Strip one trailing slash, then append the pipeline path. Idempotent for
/// endpoints given with or without the slash.
pub(crate) fn endpoint_url(endpoint: &str, suffix: &str) -> String {
    format!("{}{}", endpoint.strip_suffix('/').unwrap_or(endpoint), suffix)
}

/// Shared HTTP dispatch for both pipelines: one POST, no retries, every
/// failure terminal for the invocation.
#[derive(Clone)]
pub(crate) struct Dispatcher {
    http: Client,
    endpoint: String,
    api_key: String,
}

impl Dispatcher {
    fn new(endpoint: String, api_key: String) -> Self {
        Self {
            http: Client::new(),
            endpoint,
            api_key,
        }
    }

    pub(crate) async fn send<P: Pipeline>(&self, request: &P) -> Result<P::Output> {
        let payload = request.body()?;
        let url = endpoint_url(&self.endpoint, P::ENDPOINT_SUFFIX);

        log::info!("📤 sending request to: {}", url);
        log::debug!("request payload: {}", payload);

        let response = self
            .http
            .post(&url)
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .header("x-api-key", &self.api_key)
            .json(&payload)
            .send()
            .await
            .map_err(|e| FieldGenError::Transport(e.to_string()))?;

        let status = response.status();
        let body_text = response
            .text()
            .await
            .map_err(|e| FieldGenError::Transport(e.to_string()))?;

        if !status.is_success() {
            let snippet = truncate_chars(&body_text, MAX_USER_MESSAGE_CHARS);
            log::error!("❌ request failed: {} - {}", status.as_u16(), snippet);
            return Err(FieldGenError::Backend(format!(
                "request failed: {} {}",
                status.as_u16(),
                snippet
            )));
        }

        let body: Value = serde_json::from_str(&body_text)
            .map_err(|e| FieldGenError::Semantic(format!("invalid response body: {}", e)))?;

        // Older backend versions gate success on a body-level marker, either
        // a `status` sentinel or a boolean `success`. Honor whichever is
        // present; absence of both is also success.
        if let Some(marker) = body.get("status").and_then(Value::as_str) {
            if marker != "success" {
                log::error!("❌ backend reported status: {}", marker);
                return Err(FieldGenError::Backend(format!(
                    "backend status: {}",
                    marker
                )));
            }
        }
        if let Some(ok) = body.get("success").and_then(Value::as_bool) {
            if !ok {
                return Err(FieldGenError::Backend("backend reported failure".into()));
            }
        }

        P::extract(&body)
            .ok_or_else(|| FieldGenError::Semantic("missing expected field in response".into()))
    }
}

/// Entry point for both generation pipelines, sharing one HTTP client.
#[derive(Clone)]
pub struct GenClient {
    text_client: TextClient,
    image_client: ImageClient,
}

impl GenClient {
    pub fn new(config: BackendConfig) -> Result<Self> {
        let (endpoint, api_key) = config.validated()?;
        let dispatcher = Dispatcher::new(endpoint, api_key);

        Ok(Self {
            text_client: TextClient::new(dispatcher.clone()),
            image_client: ImageClient::new(dispatcher),
        })
    }

    pub fn text(&self) -> &TextClient {
        &self.text_client
    }

    pub fn image(&self) -> &ImageClient {
        &self.image_client
    }
}
