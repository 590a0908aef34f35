use super::common::Attachment;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AspectRatio {
    #[serde(rename = "1:1")]
    Square,
    #[serde(rename = "3:2")]
    ThreeTwo,
    #[serde(rename = "2:3")]
    TwoThree,
    #[serde(rename = "4:3")]
    FourThree,
    #[serde(rename = "3:4")]
    ThreeFour,
    #[serde(rename = "4:5")]
    FourFive,
    #[serde(rename = "5:4")]
    FiveFour,
    #[serde(rename = "9:16")]
    NineSixteen,
    #[serde(rename = "16:9")]
    SixteenNine,
    #[serde(rename = "21:9")]
    TwentyOneNine,
}

impl AspectRatio {
    pub fn as_str(&self) -> &'static str {
        match self {
            AspectRatio::Square => "1:1",
            AspectRatio::ThreeTwo => "3:2",
            AspectRatio::TwoThree => "2:3",
            AspectRatio::FourThree => "4:3",
            AspectRatio::ThreeFour => "3:4",
            AspectRatio::FourFive => "4:5",
            AspectRatio::FiveFour => "5:4",
            AspectRatio::NineSixteen => "9:16",
            AspectRatio::SixteenNine => "16:9",
            AspectRatio::TwentyOneNine => "21:9",
        }
    }
}

impl Default for AspectRatio {
    fn default() -> Self {
        AspectRatio::Square
    }
}

/// Resolution tier understood by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ImageSize {
    #[serde(rename = "1K")]
    OneK,
    #[serde(rename = "2K")]
    TwoK,
    #[serde(rename = "4K")]
    FourK,
}

impl ImageSize {
    pub fn as_str(&self) -> &'static str {
        match self {
            ImageSize::OneK => "1K",
            ImageSize::TwoK => "2K",
            ImageSize::FourK => "4K",
        }
    }
}

impl Default for ImageSize {
    fn default() -> Self {
        ImageSize::OneK
    }
}

#[derive(Debug, Clone)]
pub struct ImageGenerationRequest {
    pub images: Vec<Attachment>,
    pub prompt: String,
    pub aspect_ratio: AspectRatio,
    pub image_size: ImageSize,
}

/// Success body of the image endpoint.
#[derive(Debug, Deserialize)]
pub struct ImageResponseBody {
    pub image_url: Option<String>,
    pub filename: Option<String>,
}

/// Image-pipeline success value.
#[derive(Debug, Clone, Serialize)]
pub struct GeneratedImage {
    pub url: String,
    pub filename: String,
}

impl GeneratedImage {
    /// Fallback name when the backend omits one.
    pub fn default_filename() -> String {
        format!("generated-{}.png", chrono::Utc::now().timestamp_millis())
    }
}
