mod http_method;
mod request;
mod request_options;
mod response;
mod target;

pub use http_method::HttpMethod;
pub use request::Request;
pub use request_options::RequestOptions;
pub use response::{Response, ResponseBody};
pub use target::Target;
