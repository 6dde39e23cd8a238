use std::collections::HashMap;

use crate::constants::CONTENT_LENGTH;
use crate::http::{HttpMethod, Request};
use crate::template::uri_codec;

/// Mutable skeleton of an HTTP request, possibly containing `{name}`
/// placeholders in its URL, query values, header values, and body template.
///
/// Not safe for concurrent mutation: the contract parser builds one skeleton
/// per operation, and every invocation works on its own clone. `body` and
/// `body_template` are mutually exclusive; setting one clears the other.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestTemplate {
    method: Option<HttpMethod>,
    url: String,
    queries: Vec<(String, Option<String>)>,
    headers: Vec<(String, String)>,
    body: Option<String>,
    body_template: Option<String>,
}

impl RequestTemplate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn method(&self) -> Option<HttpMethod> {
        self.method
    }

    pub fn set_method(&mut self, method: HttpMethod) -> &mut Self {
        self.method = Some(method);
        self
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Appends to the URL. Any trailing `?k=v` pairs are pulled out into the
    /// query multimap.
    pub fn append(&mut self, value: &str) -> &mut Self {
        self.url.push_str(value);
        self.extract_queries_from_url();
        self
    }

    /// Inserts into the URL at `pos`, then applies the same query-extraction
    /// rule as [`append`](Self::append).
    pub fn insert(&mut self, pos: usize, value: &str) -> &mut Self {
        self.url.insert_str(pos, value);
        self.extract_queries_from_url();
        self
    }

    /// Replaces all query entries for `key`. An empty `values` slice removes
    /// them. Non-placeholder keys and values are percent-encoded on write;
    /// values beginning with `{` are stored raw, awaiting resolution.
    pub fn set_query(&mut self, key: &str, values: &[&str]) -> &mut Self {
        self.queries.retain(|(k, _)| k != key);
        if !values.is_empty() {
            let encoded_key = encode_if_not_placeholder(key);
            for value in values {
                self.queries
                    .push((encoded_key.clone(), Some(encode_if_not_placeholder(value))));
            }
        }
        self
    }

    /// Url-decoded copy of the query multimap, in entry order.
    pub fn queries(&self) -> Vec<(String, Option<String>)> {
        self.queries
            .iter()
            .map(|(k, v)| (uri_codec::decode(k), v.as_deref().map(uri_codec::decode)))
            .collect()
    }

    /// Replaces all header entries for `key`. An empty `values` slice removes
    /// them. Header values are never percent-encoded.
    pub fn set_header(&mut self, key: &str, values: &[&str]) -> &mut Self {
        self.headers.retain(|(k, _)| k != key);
        for value in values {
            self.headers.push((key.to_string(), value.to_string()));
        }
        self
    }

    pub fn headers(&self) -> &[(String, String)] {
        &self.headers
    }

    pub fn body(&self) -> Option<&str> {
        self.body.as_deref()
    }

    /// Sets the literal body and maintains the `Content-Length` header.
    /// Clears any body template.
    pub fn set_body(&mut self, body: Option<String>) -> &mut Self {
        if let Some(body) = body {
            let length = body.len().to_string();
            self.set_header(CONTENT_LENGTH, &[&length]);
            self.body = Some(body);
        } else {
            self.body = None;
        }
        self.body_template = None;
        self
    }

    pub fn body_template(&self) -> Option<&str> {
        self.body_template.as_deref()
    }

    /// Sets the body template, expanded at resolve time. Clears any literal
    /// body.
    pub fn set_body_template(&mut self, template: &str) -> &mut Self {
        self.body_template = Some(template.to_string());
        self.body = None;
        self
    }

    /// Expands `{name}` placeholders in `template` from `bindings` in a
    /// single left-to-right scan. Unresolved names stay literal, which allows
    /// staged resolution; this is never an error. Templates shorter than
    /// three characters cannot contain a placeholder and are returned
    /// unchanged.
    pub fn expand(template: &str, bindings: &HashMap<String, String>) -> String {
        if template.len() < 3 {
            return template.to_string();
        }
        let mut in_var = false;
        let mut var = String::new();
        let mut out = String::new();
        for c in template.chars() {
            match c {
                '{' => in_var = true,
                '}' => {
                    in_var = false;
                    match bindings.get(&var) {
                        Some(value) => out.push_str(value),
                        None => {
                            out.push('{');
                            out.push_str(&var);
                            out.push('}');
                        }
                    }
                    var.clear();
                }
                _ if in_var => var.push(c),
                _ => out.push(c),
            }
        }
        out
    }

    /// Resolves this template's placeholders against `bindings`, mutating and
    /// returning it. Callers resolving a cached skeleton must clone it first.
    ///
    /// Query and URL placeholders are substituted percent-encoded; `%2F` in
    /// the URL is folded back to `/` so path values that already contain
    /// slashes do not get double-segmented. A header whose stored value is
    /// wholly one placeholder takes the raw binding value; other header
    /// values are kept literal. A body template is expanded against the raw
    /// bindings, url-decoded, and stored as the literal body.
    pub fn resolve(&mut self, bindings: &HashMap<String, String>) -> &mut Self {
        let encoded: HashMap<String, String> = bindings
            .iter()
            .map(|(k, v)| (k.clone(), uri_codec::encode(v)))
            .collect();

        let query_line = Self::expand(&self.query_line(), &encoded);
        self.queries.clear();
        if let Some(stripped) = query_line.strip_prefix('?') {
            self.queries = parse_and_decode_queries(stripped);
        }

        self.url = Self::expand(&self.url, &encoded).replace("%2F", "/");

        self.headers = self
            .headers
            .iter()
            .map(|(key, value)| {
                let resolved = placeholder_name(value)
                    .and_then(|name| bindings.get(name))
                    .cloned()
                    .unwrap_or_else(|| value.clone());
                (key.clone(), resolved)
            })
            .collect();

        if let Some(body_template) = self.body_template.take() {
            let body = uri_codec::decode(&Self::expand(&body_template, bindings));
            self.set_body(Some(body));
        }
        self
    }

    /// The query string, `?k=v&k2=v2...`, with `=` omitted for valueless
    /// keys. Empty when no queries are registered.
    pub fn query_line(&self) -> String {
        let mut line = String::new();
        for (key, value) in &self.queries {
            line.push(if line.is_empty() { '?' } else { '&' });
            line.push_str(key);
            if let Some(value) = value {
                line.push('=');
                line.push_str(value);
            }
        }
        line
    }

    /// Snapshots this template into an immutable request.
    pub fn request(&self) -> Request {
        Request {
            method: self.method.unwrap_or_default(),
            url: format!("{}{}", self.url, self.query_line()),
            headers: self.headers.clone(),
            body: self.body.clone(),
        }
    }

    /// Splits the URL on its first `?` and merges the parsed pairs into the
    /// query multimap. Already-registered entries are never overwritten;
    /// newly-found literals are appended after them, preserving their
    /// relative order.
    fn extract_queries_from_url(&mut self) {
        if let Some(index) = self.url.find('?') {
            let line = self.url.split_off(index);
            let literals = parse_and_decode_queries(&line[1..]);
            self.queries.extend(literals);
        }
    }
}

fn parse_and_decode_queries(query_line: &str) -> Vec<(String, Option<String>)> {
    let mut queries = Vec::new();
    if query_line.is_empty() {
        return queries;
    }
    for pair in query_line.split('&') {
        // '=' can be a valid part of the value, so split on the first only
        match pair.split_once('=') {
            Some((key, value)) => {
                queries.push((uri_codec::decode(key), Some(uri_codec::decode(value))))
            }
            None => queries.push((uri_codec::decode(pair), None)),
        }
    }
    queries
}

fn encode_if_not_placeholder(value: &str) -> String {
    if value.starts_with('{') {
        value.to_string()
    } else {
        uri_codec::encode(value)
    }
}

/// Returns the inner name when `value` is wholly a single `{name}` token.
fn placeholder_name(value: &str) -> Option<&str> {
    let inner = value.strip_prefix('{')?.strip_suffix('}')?;
    if inner.is_empty() || inner.contains('{') || inner.contains('}') {
        return None;
    }
    Some(inner)
}
