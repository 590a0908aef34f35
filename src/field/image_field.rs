use super::{
    parse_params, validate_inputs, AttachmentDescriptor, FieldContext, FieldData, FieldHandler,
    FieldOutput,
};
use crate::{
    client::GenClient,
    config::BackendConfig,
    error::{truncate_chars, Result},
    models::{
        AspectRatio, Attachment, GeneratedImage, ImageGenerationRequest, ImageSize, SelectValue,
    },
};
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;

/// Parameter bag for one image-field invocation, as the platform sends it.
#[derive(Debug, Default, Deserialize)]
struct ImageFieldParams {
    #[serde(rename = "apiEndpoint", default)]
    api_endpoint: String,
    #[serde(rename = "apiKey", default)]
    api_key: String,
    #[serde(default)]
    prompt: String,
    #[serde(rename = "aspectRatio", default)]
    aspect_ratio: Option<SelectValue<AspectRatio>>,
    #[serde(rename = "imageSize", default)]
    image_size: Option<SelectValue<ImageSize>>,
    #[serde(rename = "image", default)]
    image: Vec<Attachment>,
}

/// Image generation field shortcut.
#[derive(Debug, Clone, Copy, Default)]
pub struct ImageField;

impl ImageField {
    pub fn new() -> Self {
        Self
    }

    async fn run(&self, params: Value) -> Result<GeneratedImage> {
        let params: ImageFieldParams = parse_params(params)?;

        validate_inputs(&params.api_endpoint, &params.api_key, &params.prompt)?;

        let request = ImageGenerationRequest {
            images: params.image,
            prompt: params.prompt,
            aspect_ratio: params.aspect_ratio.map(|r| r.value).unwrap_or_default(),
            image_size: params.image_size.map(|s| s.value).unwrap_or_default(),
        };

        let client = GenClient::new(
            BackendConfig::new()
                .with_endpoint(params.api_endpoint.as_str())
                .with_api_key(params.api_key.as_str()),
        )?;

        client.image().generate(request).await
    }
}

#[async_trait]
impl FieldHandler for ImageField {
    async fn execute(&self, params: Value, context: &FieldContext) -> FieldOutput {
        log::info!(
            "🚀 image generation field started [req:{}] {}",
            context.correlation_id(),
            context.masked_summary()
        );

        match self.run(params).await {
            Ok(image) => {
                log::info!(
                    "✅ image generated [req:{}], url: {}",
                    context.correlation_id(),
                    truncate_chars(&image.url, 100)
                );
                FieldOutput::Success {
                    data: FieldData::Attachments(vec![AttachmentDescriptor::url(
                        image.filename,
                        image.url,
                    )]),
                }
            }
            Err(e) => {
                log::error!(
                    "💥 image generation failed [req:{}]: {}",
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
