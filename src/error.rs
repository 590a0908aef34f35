use thiserror::Error;

/// Maximum length of any message surfaced to the platform.
pub const MAX_USER_MESSAGE_CHARS: usize = 100;

#[derive(Debug, Error)]
pub enum FieldGenError {
    #[error("{0}")]
    Config(String),
    #[error("unsupported attachment type, only images are accepted, got: {0}")]
    InputType(String),
    #[error("call failed: {0}")]
    Transport(String),
    #[error("{0}")]
    Backend(String),
    #[error("generation failed: {0}")]
    Semantic(String),
    #[error("unexpected error: {0}")]
    Unexpected(String),
}

impl FieldGenError {
    /// Message handed back to the platform, capped at
    /// [`MAX_USER_MESSAGE_CHARS`] so stack traces and large response
    /// bodies never reach the end user.
    pub fn user_message(&self) -> String {
        truncate_chars(&self.to_string(), MAX_USER_MESSAGE_CHARS)
    }
}

pub type Result<T> = std::result::Result<T, FieldGenError>;

/// Truncate to at most `max` characters, respecting UTF-8 boundaries.
pub fn truncate_chars(s: &str, max: usize) -> String {
    match s.char_indices().nth(max) {
        Some((idx, _)) => s[..idx].to_string(),
        None => s.to_string(),
    }
}
