use super::{parse_params, validate_inputs, FieldContext, FieldData, FieldHandler, FieldOutput};
use crate::{
    client::GenClient,
    config::BackendConfig,
    error::Result,
    models::{Attachment, SelectValue, TextGenerationRequest, TextModel, ThinkingLevel},
};
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;

/// Parameter bag for one text-field invocation, as the platform sends it.
#[derive(Debug, Default, Deserialize)]
struct TextFieldParams {
    #[serde(rename = "apiEndpoint", default)]
    api_endpoint: String,
    #[serde(rename = "apiKey", default)]
    api_key: String,
    #[serde(default)]
    prompt: String,
    #[serde(rename = "modelId", default)]
    model_id: Option<SelectValue<TextModel>>,
    #[serde(rename = "thinkingLevel", default)]
    thinking_level: Option<SelectValue<ThinkingLevel>>,
    #[serde(rename = "image", default)]
    image: Vec<Attachment>,
}

/// Text generation field shortcut.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextField;

impl TextField {
    pub fn new() -> Self {
        Self
    }

    async fn run(&self, params: Value) -> Result<String> {
        let params: TextFieldParams = parse_params(params)?;

        validate_inputs(&params.api_endpoint, &params.api_key, &params.prompt)?;

        let request = TextGenerationRequest {
            model: params.model_id.map(|m| m.value).unwrap_or_default(),
            thinking_level: params.thinking_level.map(|t| t.value).unwrap_or_default(),
            images: params.image,
            prompt: params.prompt,
        };

        let client = GenClient::new(
            BackendConfig::new()
                .with_endpoint(params.api_endpoint.as_str())
                .with_api_key(params.api_key.as_str()),
        )?;

        client.text().generate(request).await
    }
}

#[async_trait]
impl FieldHandler for TextField {
    async fn execute(&self, params: Value, context: &FieldContext) -> FieldOutput {
        log::info!(
            "🚀 text generation field started [req:{}] {}",
            context.correlation_id(),
            context.masked_summary()
        );

        match self.run(params).await {
            Ok(text) => {
                log::info!(
                    "✅ text generated [req:{}] ({} chars)",
                    context.correlation_id(),
                    text.chars().count()
                );
                FieldOutput::Success {
                    data: FieldData::Text(text),
                }
            }
            Err(e) => {
                log::error!(
                    "💥 text generation failed [req:{}]: {}",
                    context.correlation_id(),
                    e
                );
                FieldOutput::Error {
                    message: e.user_message(),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn missing_endpoint_wins_over_missing_prompt() {
        let out = TextField::new()
            .execute(json!({"apiKey": "k"}), &FieldContext::default())
            .await;
        assert!(out.message().unwrap().contains("endpoint"));
    }

    #[tokio::test]
    async fn missing_key_reported_second() {
        let out = TextField::new()
            .execute(json!({"apiEndpoint": "https://x"}), &FieldContext::default())
            .await;
        assert!(out.message().unwrap().contains("key"));
    }

    #[tokio::test]
    async fn missing_prompt_reported_last() {
        let out = TextField::new()
            .execute(
                json!({"apiEndpoint": "https://x", "apiKey": "k", "prompt": "   "}),
                &FieldContext::default(),
            )
            .await;
        assert!(out.message().unwrap().contains("prompt"));
    }

    #[tokio::test]
    async fn non_image_attachment_aborts_before_any_call() {
        // Endpoint is unroutable on purpose; the type check fires first so
        // the message names the offending type instead of a transport error.
        let out = TextField::new()
            .execute(
                json!({
                    "apiEndpoint": "https://example.invalid",
                    "apiKey": "k",
                    "prompt": "p",
                    "image": [{"type": "application/pdf", "tmp_url": "http://f"}],
                }),
                &FieldContext::default(),
            )
            .await;
        assert!(out.message().unwrap().contains("application/pdf"));
    }

    #[tokio::test]
    async fn malformed_bag_is_a_bounded_error() {
        let out = TextField::new()
            .execute(json!({"prompt": 42}), &FieldContext::default())
            .await;
        let message = out.message().unwrap();
        assert!(message.chars().count() <= 100);
    }
}
