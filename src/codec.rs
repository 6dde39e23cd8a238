mod body_encoder;
mod decoder;
mod error_decoder;
mod form_encoder;
mod retryer;
mod transport;

pub use body_encoder::{BodyEncoder, EncodeError};
pub use decoder::{DecodeError, Decoder, TextDecoder};
pub use error_decoder::{ApplicationError, ErrorDecoder, StatusErrorDecoder};
pub use form_encoder::FormEncoder;
pub use retryer::{BackoffRetryer, Retryer};
pub use transport::{Transport, TransportError};
