use crate::constants::{DEFAULT_CONNECT_TIMEOUT, DEFAULT_READ_TIMEOUT};
use std::time::Duration;

/// Per-operation (or per-interface) request options, passed through to the
/// transport. Timeouts are the only control the core exposes; once issued, a
/// call runs to completion or I/O failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestOptions {
    pub connect_timeout: Duration,
    pub read_timeout: Duration,
}

impl RequestOptions {
    pub fn new(connect_timeout: Duration, read_timeout: Duration) -> Self {
        Self {
            connect_timeout,
            read_timeout,
        }
    }
}

impl Default for RequestOptions {
    fn default() -> Self {
        Self::new(DEFAULT_CONNECT_TIMEOUT, DEFAULT_READ_TIMEOUT)
    }
}
