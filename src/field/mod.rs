pub mod image_field;
pub mod text_field;

use crate::error::{FieldGenError, Result};
use crate::logger::mask_secret;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

pub use image_field::ImageField;
pub use text_field::TextField;

/// Read-only invocation context supplied by the platform. Used for log
/// correlation only; credentials are masked before they reach a log line.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FieldContext {
    #[serde(rename = "logID", default)]
    pub log_id: Option<String>,
    #[serde(rename = "packID", default)]
    pub pack_id: Option<String>,
    #[serde(rename = "extensionID", default)]
    pub extension_id: Option<String>,
    #[serde(rename = "tenantKey", default)]
    pub tenant_key: Option<String>,
    #[serde(rename = "tenantAccessToken", default)]
    pub tenant_access_token: Option<String>,
    #[serde(rename = "baseID", default)]
    pub base_id: Option<String>,
    #[serde(rename = "tableID", default)]
    pub table_id: Option<String>,
    #[serde(rename = "disableCredential", default)]
    pub disable_credential: Option<bool>,
}

impl FieldContext {
    pub fn correlation_id(&self) -> &str {
        self.log_id.as_deref().unwrap_or("no_log_id")
    }

    /// Context summary safe to log: tokens keep only their last 8 chars.
    pub fn masked_summary(&self) -> Value {
        json!({
            "logID": self.correlation_id(),
            "packID": self.pack_id,
            "extensionID": self.extension_id,
            "tenantKey": self.tenant_key.as_deref().map(mask_secret),
            "hasTenantAccessToken": self.tenant_access_token.is_some(),
            "tenantAccessToken": self.tenant_access_token.as_deref().map(mask_secret),
            "baseID": self.base_id,
            "tableID": self.table_id,
            "disableCredential": self.disable_credential,
        })
    }
}

/// One generated attachment handed back to the platform as a URL reference.
#[derive(Debug, Clone, Serialize)]
pub struct AttachmentDescriptor {
    pub name: String,
    pub content: String,
    #[serde(rename = "contentType")]
    pub content_type: String,
}

impl AttachmentDescriptor {
    pub fn url(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            content: url.into(),
            content_type: "attachment/url".into(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum FieldData {
    Text(String),
    Attachments(Vec<AttachmentDescriptor>),
}

/// Result object returned to the platform. Error messages are always
/// bounded; see [`FieldGenError::user_message`].
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "code", rename_all = "lowercase")]
pub enum FieldOutput {
    Success { data: FieldData },
    Error { message: String },
}

impl FieldOutput {
    pub fn is_success(&self) -> bool {
        matches!(self, FieldOutput::Success { .. })
    }

    pub fn message(&self) -> Option<&str> {
        match self {
            FieldOutput::Success { .. } => None,
            FieldOutput::Error { message } => Some(message),
        }
    }
}

/// One pipeline behind the platform's execute contract. Implementations
/// never panic past this boundary and never return an unbounded message.
#[async_trait]
pub trait FieldHandler {
    async fn execute(&self, params: Value, context: &FieldContext) -> FieldOutput;
}

/// First violated precondition wins, checked in fixed order: endpoint,
/// then key, then prompt. No I/O happens on failure.
pub(crate) fn validate_inputs(endpoint: &str, api_key: &str, prompt: &str) -> Result<()> {
    if endpoint.trim().is_empty() {
        return Err(FieldGenError::Config("API endpoint is required".into()));
    }
    if api_key.trim().is_empty() {
        return Err(FieldGenError::Config("API key is required".into()));
    }
    if prompt.trim().is_empty() {
        return Err(FieldGenError::Config("prompt is required".into()));
    }
    Ok(())
}

pub(crate) fn parse_params<T: serde::de::DeserializeOwned>(params: Value) -> Result<T> {
    serde_json::from_value(params)
        .map_err(|e| FieldGenError::Unexpected(format!("malformed parameters: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_error_comes_before_prompt_error() {
        let err = validate_inputs("", "k", "").unwrap_err();
        assert!(err.to_string().contains("endpoint"));
    }

    #[test]
    fn key_error_comes_before_prompt_error() {
        let err = validate_inputs("https://x", "  ", "").unwrap_err();
        assert!(err.to_string().contains("key"));
    }

    #[test]
    fn prompt_checked_last() {
        let err = validate_inputs("https://x", "k", " \t").unwrap_err();
        assert!(err.to_string().contains("prompt"));
    }

    #[test]
    fn complete_inputs_pass() {
        assert!(validate_inputs("https://x", "k", "hello").is_ok());
    }

    #[test]
    fn masked_summary_never_leaks_tokens() {
        let ctx = FieldContext {
            tenant_access_token: Some("secret-token-123456789".into()),
            ..Default::default()
        };
        let summary = ctx.masked_summary().to_string();
        assert!(!summary.contains("secret-token-123456789"));
        assert!(summary.contains("***"));
    }

    #[test]
    fn output_serializes_with_code_tag() {
        let ok = FieldOutput::Success {
            data: FieldData::Text("hi".into()),
        };
        let v = serde_json::to_value(&ok).unwrap();
        assert_eq!(v["code"], "success");
        assert_eq!(v["data"], "hi");

        let err = FieldOutput::Error {
            message: "nope".into(),
        };
        let v = serde_json::to_value(&err).unwrap();
        assert_eq!(v["code"], "error");
        assert_eq!(v["message"], "nope");
    }

    #[test]
    fn attachment_descriptor_serializes_platform_shape() {
        let v = serde_json::to_value(AttachmentDescriptor::url("a.png", "http://img")).unwrap();
        assert_eq!(v["name"], "a.png");
        assert_eq!(v["content"], "http://img");
        assert_eq!(v["contentType"], "attachment/url");
    }
}
