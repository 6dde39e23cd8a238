use crate::http::{Request, RequestOptions, Response};
use std::{fmt, io};

/// Submits resolved requests over the wire.
///
/// Implementations must be safe for concurrent callers; TLS configuration is
/// an implementation concern. The call blocks until response headers arrive;
/// the response body may be a lazily-read stream.
pub trait Transport: Send + Sync {
    /// Executes `request` with the given per-operation options. Fails with a
    /// `TransportError` on network failure; a non-success status is a normal
    /// return.
    fn execute(
        &self,
        request: &Request,
        options: &RequestOptions,
    ) -> Result<Response, TransportError>;
}

/// I/O failure reaching the target. The only error class routed through the
/// retry policy.
#[derive(Debug)]
pub struct TransportError {
    pub message: String,
    pub source: Option<io::Error>,
}

impl TransportError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            source: None,
        }
    }

    pub fn with_source(message: impl Into<String>, source: io::Error) -> Self {
        Self {
            message: message.into(),
            source: Some(source),
        }
    }
}

impl fmt::Display for TransportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.source {
            Some(source) => write!(f, "transport error: {}: {source}", self.message),
            None => write!(f, "transport error: {}", self.message),
        }
    }
}

impl std::error::Error for TransportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|e| e as &(dyn std::error::Error + 'static))
    }
}

impl From<io::Error> for TransportError {
    fn from(source: io::Error) -> Self {
        Self::with_source("request failed", source)
    }
}
