use std::time::Duration;

/// Responses with a status at or above this value are routed through the
/// `ErrorDecoder` instead of the `Decoder`.
pub const ERROR_STATUS_THRESHOLD: u16 = 300;

pub const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(10);
pub const DEFAULT_READ_TIMEOUT: Duration = Duration::from_secs(60);

/// Default retry policy: total attempts, initial backoff, and backoff cap.
pub const DEFAULT_RETRY_MAX_ATTEMPTS: usize = 5;
pub const DEFAULT_RETRY_INITIAL_PERIOD: Duration = Duration::from_millis(100);
pub const DEFAULT_RETRY_MAX_PERIOD: Duration = Duration::from_secs(1);

/// Number of leading body bytes preserved in an `ApplicationError` snippet.
pub const ERROR_BODY_SNIPPET_LEN: usize = 256;

/// Parameter type name that designates a call-time full-URI override.
/// An unmarked parameter of this type replaces the target base URL for the
/// invocation that supplies it.
pub const URI_OVERRIDE_TYPE: &str = "Uri";

pub const CONTENT_TYPE: &str = "Content-Type";
pub const CONTENT_LENGTH: &str = "Content-Length";
pub const ACCEPT: &str = "Accept";
