use super::{Dispatcher, Pipeline};
use crate::{
    error::Result,
    models::{collect_image_urls, GeneratedImage, ImageGenerationRequest, ImageResponseBody},
};
use serde_json::{json, Value};

impl Pipeline for ImageGenerationRequest {
    type Output = GeneratedImage;

    const ENDPOINT_SUFFIX: &'static str = "/api/generate-image";

    fn body(&self) -> Result<Value> {
        let image_urls = collect_image_urls(&self.images)?;

        let mut payload = json!({
            "prompt": self.prompt,
            "aspect_ratio": self.aspect_ratio.as_str(),
            "image_size": self.image_size.as_str(),
        });
        if !image_urls.is_empty() {
            payload["image_urls"] = json!(image_urls);
        }

        Ok(payload)
    }

    fn extract(body: &Value) -> Option<GeneratedImage> {
        let parsed: ImageResponseBody = serde_json::from_value(body.clone()).ok()?;
        let url = parsed.image_url.filter(|u| !u.is_empty())?;
        let filename = parsed
            .filename
            .filter(|f| !f.is_empty())
            .unwrap_or_else(GeneratedImage::default_filename);

        Some(GeneratedImage { url, filename })
    }
}

#[derive(Clone)]
pub struct ImageClient {
    dispatcher: Dispatcher,
}

impl ImageClient {
    pub(crate) fn new(dispatcher: Dispatcher) -> Self {
        Self { dispatcher }
    }

    pub async fn generate(&self, request: ImageGenerationRequest) -> Result<GeneratedImage> {
        log::info!(
            "🎨 generating image: ratio={} size={} ({} reference images)",
            request.aspect_ratio.as_str(),
            request.image_size.as_str(),
            request.images.len()
        );
        self.dispatcher.send(&request).await
    }
}
