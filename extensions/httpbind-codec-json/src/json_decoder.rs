use httpbind::codec::{DecodeError, Decoder};
use httpbind::contract::ReturnType;
use serde_json::Value;

/// Parses successful response bodies as JSON.
///
/// An empty or whitespace-only body decodes to `Value::Null`, so operations
/// whose server responds 204 still succeed.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonDecoder;

impl Decoder for JsonDecoder {
    fn decode(
        &self,
        config_key: &str,
        body: &str,
        _return_type: &ReturnType,
    ) -> Result<Value, DecodeError> {
        if body.trim().is_empty() {
            return Ok(Value::Null);
        }
        serde_json::from_str(body).map_err(|error| DecodeError::Parse {
            config_key: config_key.to_string(),
            message: error.to_string(),
        })
    }
}
