use super::{Dispatcher, Pipeline};
use crate::{
    error::Result,
    models::{collect_image_urls, TextGenerationRequest, TextResponseBody},
};
use serde_json::{json, Value};

impl Pipeline for TextGenerationRequest {
    type Output = String;

    const ENDPOINT_SUFFIX: &'static str = "/api/generate-text";

    fn body(&self) -> Result<Value> {
        let image_urls = collect_image_urls(&self.images)?;

        let mut payload = json!({
            "model": self.model.as_str(),
            "prompt": self.prompt,
            "thinking_level": self.thinking_level.as_str(),
        });
        if !image_urls.is_empty() {
            payload["image_urls"] = json!(image_urls);
        }

        Ok(payload)
    }

    fn extract(body: &Value) -> Option<String> {
        let parsed: TextResponseBody = serde_json::from_value(body.clone()).ok()?;
        // An empty string is a failed generation, not an empty success.
        parsed.text.filter(|t| !t.is_empty())
    }
}

#[derive(Clone)]
pub struct TextClient {
    dispatcher: Dispatcher,
}

impl TextClient {
    pub(crate) fn new(dispatcher: Dispatcher) -> Self {
        Self { dispatcher }
    }

    pub async fn generate(&self, request: TextGenerationRequest) -> Result<String> {
        log::info!(
            "📝 generating text with model: {} ({} reference images)",
            request.model.as_str(),
            request.images.len()
        );
        self.dispatcher.send(&request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Attachment, TextModel, ThinkingLevel};

    fn request(images: Vec<Attachment>) -> TextGenerationRequest {
        TextGenerationRequest {
            model: TextModel::default(),
            thinking_level: ThinkingLevel::Low,
            images,
            prompt: "describe this".into(),
        }
    }

    #[test]
    fn body_carries_model_prompt_and_thinking_level() {
        let body = request(vec![]).body().unwrap();
        assert_eq!(body["model"], "gemini-3-pro-preview");
        assert_eq!(body["prompt"], "describe this");
        assert_eq!(body["thinking_level"], "LOW");
    }

    #[test]
    fn body_omits_image_urls_when_no_references() {
        let body = request(vec![]).body().unwrap();
        assert!(body.get("image_urls").is_none());
    }

    #[test]
    fn body_lists_image_urls_in_order() {
        let body = request(vec![
            Attachment {
                content_type: "image/png".into(),
                tmp_url: "http://a".into(),
            },
            Attachment {
                content_type: "image/jpeg".into(),
                tmp_url: "http://b".into(),
            },
        ])
        .body()
        .unwrap();
        assert_eq!(body["image_urls"], json!(["http://a", "http://b"]));
    }

    #[test]
    fn body_rejects_non_image_attachment() {
        let err = request(vec![Attachment {
            content_type: "video/mp4".into(),
            tmp_url: "http://v".into(),
        }])
        .body()
        .unwrap_err();
        assert!(err.to_string().contains("video/mp4"));
    }

    #[test]
    fn extract_requires_non_empty_text() {
        assert_eq!(
            TextGenerationRequest::extract(&json!({"text": "hello"})),
            Some("hello".into())
        );
        assert_eq!(TextGenerationRequest::extract(&json!({"text": ""})), None);
        assert_eq!(TextGenerationRequest::extract(&json!({})), None);
    }
}
