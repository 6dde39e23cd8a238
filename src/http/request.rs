use crate::http::HttpMethod;

/// A fully-resolved request, produced once per invocation from a
/// `RequestTemplate` and discarded after use. Safe to replay: re-executing
/// the same request sends the same bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    pub method: HttpMethod,
    /// Absolute URL including the query string, if any.
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}
