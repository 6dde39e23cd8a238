use crate::template::RequestTemplate;
use std::fmt;

/// Encodes an operation's body argument into the template, mutating body and
/// headers in place. Runs before template resolution, once per attempt; a
/// retried call re-encodes.
pub trait BodyEncoder: Send + Sync {
    fn encode_body(
        &self,
        value: &serde_json::Value,
        template: &mut RequestTemplate,
    ) -> Result<(), EncodeError>;
}

/// A body or form argument could not be encoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodeError {
    pub message: String,
}

impl EncodeError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for EncodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "encode error: {}", self.message)
    }
}

impl std::error::Error for EncodeError {}
