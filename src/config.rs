use crate::error::{FieldGenError, Result};
use std::env;

/// Connection settings for the generation backend.
///
/// Field invocations receive endpoint and key from the platform parameter
/// bag; this struct exists for programmatic use and the demo runner.
#[derive(Debug, Clone, Default)]
pub struct BackendConfig {
    pub endpoint: Option<String>,
    pub api_key: Option<String>,
}

impl BackendConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_env() -> Self {
        let endpoint = env::var("FIELDGEN_API_ENDPOINT").ok();
        let api_key = env::var("FIELDGEN_API_KEY").ok();

        BackendConfig { endpoint, api_key }
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Checks endpoint then key, in that order, rejecting values that are
    /// empty after trimming.
    pub fn validated(self) -> Result<(String, String)> {
        let endpoint = self
            .endpoint
            .filter(|e| !e.trim().is_empty())
            .ok_or_else(|| FieldGenError::Config("API endpoint is required".into()))?;
        let api_key = self
            .api_key
            .filter(|k| !k.trim().is_empty())
            .ok_or_else(|| FieldGenError::Config("API key is required".into()))?;

        Ok((endpoint, api_key))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validated_rejects_missing_endpoint_first() {
        let err = BackendConfig::new().validated().unwrap_err();
        assert!(err.to_string().contains("endpoint"));
    }

    #[test]
    fn validated_rejects_whitespace_key() {
        let err = BackendConfig::new()
            .with_endpoint("https://x")
            .with_api_key("   ")
            .validated()
            .unwrap_err();
        assert!(err.to_string().contains("key"));
    }

    #[test]
    fn validated_accepts_complete_config() {
        let (endpoint, key) = BackendConfig::new()
            .with_endpoint("https://x")
            .with_api_key("k")
            .validated()
            .unwrap();
        assert_eq!(endpoint, "https://x");
        assert_eq!(key, "k");
    }
}
