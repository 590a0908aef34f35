use super::common::Attachment;
use serde::{Deserialize, Serialize};

/// Backend model identifiers offered by the text field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TextModel {
    #[serde(rename = "gemini-3-pro-preview")]
    Gemini3ProPreview,
    #[serde(rename = "gemini-3-flash-preview")]
    Gemini3FlashPreview,
    #[serde(rename = "gemini-2.5-pro")]
    Gemini25Pro,
    #[serde(rename = "gemini-2.5-flash")]
    Gemini25Flash,
    #[serde(rename = "gemini-2.5-flash-lite")]
    Gemini25FlashLite,
}

impl TextModel {
    pub fn as_str(&self) -> &'static str {
        match self {
            TextModel::Gemini3ProPreview => "gemini-3-pro-preview",
            TextModel::Gemini3FlashPreview => "gemini-3-flash-preview",
            TextModel::Gemini25Pro => "gemini-2.5-pro",
            TextModel::Gemini25Flash => "gemini-2.5-flash",
            TextModel::Gemini25FlashLite => "gemini-2.5-flash-lite",
        }
    }
}

impl Default for TextModel {
    fn default() -> Self {
        TextModel::Gemini3ProPreview
    }
}

/// Quality/latency knob forwarded verbatim to the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ThinkingLevel {
    High,
    Low,
}

impl ThinkingLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            ThinkingLevel::High => "HIGH",
            ThinkingLevel::Low => "LOW",
        }
    }
}

impl Default for ThinkingLevel {
    fn default() -> Self {
        ThinkingLevel::High
    }
}

#[derive(Debug, Clone)]
pub struct TextGenerationRequest {
    pub model: TextModel,
    pub thinking_level: ThinkingLevel,
    pub images: Vec<Attachment>,
    pub prompt: String,
}

/// Success body of the text endpoint.
#[derive(Debug, Deserialize)]
pub struct TextResponseBody {
    pub text: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn model_wire_names_round_trip() {
        let v = serde_json::to_value(TextModel::Gemini25FlashLite).unwrap();
        assert_eq!(v, "gemini-2.5-flash-lite");
        let m: TextModel = serde_json::from_value(v).unwrap();
        assert_eq!(m, TextModel::Gemini25FlashLite);
    }

    #[test]
    fn thinking_level_defaults_high() {
        assert_eq!(ThinkingLevel::default().as_str(), "HIGH");
    }
}
