use crate::constants::ERROR_BODY_SNIPPET_LEN;
use crate::http::Response;
use std::fmt;

/// Translates a response at or above the error-status threshold into the
/// failure surfaced to the caller. Consumes the response; its body, if any,
/// is read here at most once.
pub trait ErrorDecoder: Send + Sync {
    fn decode(&self, config_key: &str, response: Response) -> ApplicationError;
}

/// A non-success response, carrying enough context to diagnose it without
/// retaining the full body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApplicationError {
    pub config_key: String,
    pub status: u16,
    pub reason: String,
    pub headers: Vec<(String, String)>,
    /// Leading bytes of the body, when it could be read.
    pub body_snippet: Option<String>,
}

impl fmt::Display for ApplicationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "status {} {} calling {}",
            self.status, self.reason, self.config_key
        )?;
        if let Some(snippet) = &self.body_snippet {
            write!(f, ": {snippet}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ApplicationError {}

/// Default error decoder: keeps the status line, headers, and a bounded body
/// snippet.
#[derive(Debug, Clone, Copy, Default)]
pub struct StatusErrorDecoder;

impl ErrorDecoder for StatusErrorDecoder {
    fn decode(&self, config_key: &str, response: Response) -> ApplicationError {
        let snippet = response
            .body
            .and_then(|body| body.text().ok())
            .map(|mut text| {
                if text.len() > ERROR_BODY_SNIPPET_LEN {
                    let mut end = ERROR_BODY_SNIPPET_LEN;
                    while !text.is_char_boundary(end) {
                        end -= 1;
                    }
                    text.truncate(end);
                }
                text
            });
        ApplicationError {
            config_key: config_key.to_string(),
            status: response.status,
            reason: response.reason,
            headers: response.headers,
            body_snippet: snippet,
        }
    }
}
