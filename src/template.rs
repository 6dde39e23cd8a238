mod request_template;
pub mod uri_codec;

pub use request_template::RequestTemplate;
