use crate::codec::EncodeError;
use crate::template::RequestTemplate;

/// Encodes named form parameter values into the template.
///
/// Receives only the values whose names appear in the operation's form
/// parameter list, in declaration order; absent arguments are omitted.
pub trait FormEncoder: Send + Sync {
    fn encode_form(
        &self,
        form_values: &[(String, String)],
        template: &mut RequestTemplate,
    ) -> Result<(), EncodeError>;
}
