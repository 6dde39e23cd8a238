use httpbind::codec::{BodyEncoder, EncodeError};
use httpbind::constants::CONTENT_TYPE;
use httpbind::template::RequestTemplate;
use serde_json::Value;

/// Serializes the body argument as JSON and marks the request
/// `application/json` unless a content type was already declared.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonBodyEncoder;

impl BodyEncoder for JsonBodyEncoder {
    fn encode_body(&self, value: &Value, template: &mut RequestTemplate) -> Result<(), EncodeError> {
        let declared = template
            .headers()
            .iter()
            .any(|(name, _)| name.eq_ignore_ascii_case(CONTENT_TYPE));
        if !declared {
            template.set_header(CONTENT_TYPE, &["application/json"]);
        }
        template.set_body(Some(value.to_string()));
        Ok(())
    }
}
