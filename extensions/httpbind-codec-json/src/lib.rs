//! JSON and URL-encoded-form codecs for `httpbind` clients.
//!
//! Register `JsonBodyEncoder` and `JsonDecoder` on a `ClientBuilder` to send
//! and receive `application/json` payloads, and `UrlEncodedFormEncoder` for
//! operations with form parameters.

mod json_body_encoder;
mod json_decoder;
mod url_form_encoder;

pub use json_body_encoder::JsonBodyEncoder;
pub use json_decoder::JsonDecoder;
pub use url_form_encoder::UrlEncodedFormEncoder;
