use std::fmt;
use std::io::{self, Cursor, Read};

/// A connected response. The body, when present, is a lazily-read stream
/// that may be consumed at most once; unconsumed bodies are discarded when
/// the response is dropped.
#[derive(Debug)]
pub struct Response {
    pub status: u16,
    pub reason: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<ResponseBody>,
    pub content_length: Option<u64>,
}

impl Response {
    pub fn new(
        status: u16,
        reason: impl Into<String>,
        headers: Vec<(String, String)>,
        body: Option<ResponseBody>,
    ) -> Self {
        Self {
            status,
            reason: reason.into(),
            headers,
            body,
            content_length: None,
        }
    }

    pub fn content_length(mut self, length: u64) -> Self {
        self.content_length = Some(length);
        self
    }
}

/// Single-use response body stream.
pub struct ResponseBody {
    reader: Box<dyn Read + Send>,
}

impl ResponseBody {
    pub fn from_reader(reader: Box<dyn Read + Send>) -> Self {
        Self { reader }
    }

    pub fn from_text(text: impl Into<String>) -> Self {
        Self {
            reader: Box::new(Cursor::new(text.into().into_bytes())),
        }
    }

    /// Reads the stream to completion. Consumes the body; it cannot be read
    /// again.
    pub fn text(mut self) -> io::Result<String> {
        let mut buf = String::new();
        self.reader.read_to_string(&mut buf)?;
        Ok(buf)
    }
}

impl fmt::Debug for ResponseBody {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ResponseBody(..)")
    }
}
