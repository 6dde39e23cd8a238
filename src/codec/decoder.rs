use crate::contract::ReturnType;
use serde_json::Value;
use std::{fmt, io};

/// Decodes a successful response body into the operation's declared result.
pub trait Decoder: Send + Sync {
    fn decode(
        &self,
        config_key: &str,
        body: &str,
        return_type: &ReturnType,
    ) -> Result<Value, DecodeError>;
}

/// The response body could not be read or parsed. Never retried.
#[derive(Debug)]
pub enum DecodeError {
    /// The body stream failed while being read.
    Read(io::Error),
    /// The body was read but does not parse into the declared type.
    Parse { config_key: String, message: String },
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecodeError::Read(source) => write!(f, "failed reading response body: {source}"),
            DecodeError::Parse {
                config_key,
                message,
            } => write!(f, "failed decoding response for {config_key}: {message}"),
        }
    }
}

impl std::error::Error for DecodeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DecodeError::Read(source) => Some(source),
            DecodeError::Parse { .. } => None,
        }
    }
}

impl From<io::Error> for DecodeError {
    fn from(source: io::Error) -> Self {
        DecodeError::Read(source)
    }
}

/// Fallback decoder returning the body verbatim. Selected automatically for
/// operations declaring `Unit` or `Raw` return types when no decoder is
/// registered.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextDecoder;

impl Decoder for TextDecoder {
    fn decode(
        &self,
        _config_key: &str,
        body: &str,
        return_type: &ReturnType,
    ) -> Result<Value, DecodeError> {
        Ok(match return_type {
            ReturnType::Unit => Value::Null,
            _ => Value::String(body.to_string()),
        })
    }
}
