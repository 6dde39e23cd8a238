use httpbind::codec::{EncodeError, FormEncoder};
use httpbind::constants::CONTENT_TYPE;
use httpbind::template::{uri_codec, RequestTemplate};

/// Encodes named form values as an `application/x-www-form-urlencoded` body.
#[derive(Debug, Clone, Copy, Default)]
pub struct UrlEncodedFormEncoder;

impl FormEncoder for UrlEncodedFormEncoder {
    fn encode_form(
        &self,
        values: &[(String, String)],
        template: &mut RequestTemplate,
    ) -> Result<(), EncodeError> {
        let body = values
            .iter()
            .map(|(name, value)| format!("{}={}", uri_codec::encode(name), uri_codec::encode(value)))
            .collect::<Vec<_>>()
            .join("&");
        template.set_header(CONTENT_TYPE, &["application/x-www-form-urlencoded"]);
        template.set_body(Some(body));
        Ok(())
    }
}
