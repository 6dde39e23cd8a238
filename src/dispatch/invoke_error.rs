use crate::codec::{ApplicationError, DecodeError, EncodeError, TransportError};
use std::fmt;

/// Failure of one invocation, classified for the propagation policy:
/// transport errors are the only retried class; everything else surfaces
/// verbatim.
#[derive(Debug)]
pub enum InvokeError {
    /// A required URI-override or body argument was absent.
    Argument { config_key: String, message: String },

    /// No handler is mapped for the requested config key.
    UnknownOperation { config_key: String },

    /// The body or form encoder failed.
    Encode {
        config_key: String,
        source: EncodeError,
    },

    /// I/O failure reaching the target, after the retry policy gave up.
    Transport(TransportError),

    /// The response body could not be read or parsed.
    Decode(DecodeError),

    /// The error decoder's translation of a non-success response.
    Application(ApplicationError),
}

impl fmt::Display for InvokeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvokeError::Argument {
                config_key,
                message,
            } => write!(f, "{config_key}: {message}"),
            InvokeError::UnknownOperation { config_key } => {
                write!(f, "no operation mapped for {config_key}")
            }
            InvokeError::Encode { config_key, source } => {
                write!(f, "{config_key}: {source}")
            }
            InvokeError::Transport(source) => source.fmt(f),
            InvokeError::Decode(source) => source.fmt(f),
            InvokeError::Application(source) => source.fmt(f),
        }
    }
}

impl std::error::Error for InvokeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            InvokeError::Encode { source, .. } => Some(source),
            InvokeError::Transport(source) => Some(source),
            InvokeError::Decode(source) => Some(source),
            InvokeError::Application(source) => Some(source),
            _ => None,
        }
    }
}

impl From<TransportError> for InvokeError {
    fn from(source: TransportError) -> Self {
        InvokeError::Transport(source)
    }
}

impl From<DecodeError> for InvokeError {
    fn from(source: DecodeError) -> Self {
        InvokeError::Decode(source)
    }
}

impl From<ApplicationError> for InvokeError {
    fn from(source: ApplicationError) -> Self {
        InvokeError::Application(source)
    }
}
