use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use httpbind::codec::{
    BackoffRetryer, BodyEncoder, DecodeError, Decoder, EncodeError, Retryer, Transport,
    TransportError,
};
use httpbind::contract::{InterfaceSpec, OperationSpec, ParamSpec, ReturnType};
use httpbind::dispatch::{Arg, ClientBuilder, InvokeError};
use httpbind::http::{Request, RequestOptions, Response, ResponseBody, Target};
use httpbind::template::RequestTemplate;
use serde_json::{json, Value};

/// Fails the first `failures` calls, then answers 200 with a fixed body.
struct FlakyTransport {
    failures: usize,
    calls: AtomicUsize,
    body: &'static str,
}

impl FlakyTransport {
    fn new(failures: usize, body: &'static str) -> Arc<Self> {
        Arc::new(Self {
            failures,
            calls: AtomicUsize::new(0),
            body,
        })
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl Transport for FlakyTransport {
    fn execute(
        &self,
        _request: &Request,
        _options: &RequestOptions,
    ) -> Result<Response, TransportError> {
        let call = self.calls.fetch_add(1, Ordering::SeqCst);
        if call < self.failures {
            return Err(TransportError::new("connection reset"));
        }
        Ok(Response::new(
            200,
            "OK",
            vec![],
            Some(ResponseBody::from_text(self.body)),
        ))
    }
}

/// Counts how often the body encoder runs; a retried attempt re-encodes.
struct CountingEncoder {
    calls: AtomicUsize,
}

impl BodyEncoder for CountingEncoder {
    fn encode_body(&self, value: &Value, template: &mut RequestTemplate) -> Result<(), EncodeError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        template.set_body(Some(value.to_string()));
        Ok(())
    }
}

struct FailingDecoder;

impl Decoder for FailingDecoder {
    fn decode(&self, config_key: &str, _: &str, _: &ReturnType) -> Result<Value, DecodeError> {
        Err(DecodeError::Parse {
            config_key: config_key.to_string(),
            message: "bad payload".to_string(),
        })
    }
}

fn fast_retryer(max_attempts: usize) -> Arc<BackoffRetryer> {
    Arc::new(BackoffRetryer::new(
        max_attempts,
        Duration::from_millis(1),
        Duration::from_millis(2),
    ))
}

fn post_interface() -> InterfaceSpec {
    InterfaceSpec::new("GitHub").operation(
        OperationSpec::post("create")
            .path("/users")
            .param(ParamSpec::new("User"))
            .returns(ReturnType::Raw),
    )
}

#[test]
fn transport_failures_are_retried_and_each_attempt_reencodes() {
    let transport = FlakyTransport::new(2, "created");
    let encoder = Arc::new(CountingEncoder {
        calls: AtomicUsize::new(0),
    });
    let client = ClientBuilder::new(transport.clone())
        .body_encoder("GitHub", encoder.clone())
        .retryer(fast_retryer(5))
        .build(Target::new(post_interface(), "https://api.example.com"))
        .unwrap();

    let value = client
        .invoke("GitHub#create(User)", &[Arg::from(json!({"login": "d"}))])
        .unwrap();

    assert_eq!(value, Value::String("created".to_string()));
    assert_eq!(transport.calls(), 3);
    assert_eq!(encoder.calls.load(Ordering::SeqCst), 3);
}

#[test]
fn retryer_gives_up_after_max_attempts() {
    let transport = FlakyTransport::new(usize::MAX, "");
    let client = ClientBuilder::new(transport.clone())
        .body_encoder(
            "GitHub",
            Arc::new(CountingEncoder {
                calls: AtomicUsize::new(0),
            }),
        )
        .retryer(fast_retryer(3))
        .build(Target::new(post_interface(), "https://api.example.com"))
        .unwrap();

    let error = client
        .invoke("GitHub#create(User)", &[Arg::from(json!({}))])
        .unwrap_err();
    assert!(matches!(error, InvokeError::Transport(_)));
    assert_eq!(transport.calls(), 3);
}

#[test]
fn decode_failures_are_not_retried() {
    let spec = InterfaceSpec::new("GitHub").operation(
        OperationSpec::get("orgs")
            .path("/orgs")
            .returns(ReturnType::typed("Vec<Org>")),
    );
    let transport = FlakyTransport::new(0, "not json");
    let client = ClientBuilder::new(transport.clone())
        .decoder("GitHub", Arc::new(FailingDecoder))
        .retryer(fast_retryer(5))
        .build(Target::new(spec, "https://api.example.com"))
        .unwrap();

    let error = client.invoke("GitHub#orgs()", &[]).unwrap_err();
    assert!(matches!(error, InvokeError::Decode(DecodeError::Parse { .. })));
    assert_eq!(transport.calls(), 1);
}

#[test]
fn each_invocation_gets_a_fresh_retry_budget() {
    // exhaust the budget once, then invoke again: the second call gets the
    // same number of attempts, not a drained retryer
    let transport = FlakyTransport::new(usize::MAX, "");
    let client = ClientBuilder::new(transport.clone())
        .body_encoder(
            "GitHub",
            Arc::new(CountingEncoder {
                calls: AtomicUsize::new(0),
            }),
        )
        .retryer(fast_retryer(2))
        .build(Target::new(post_interface(), "https://api.example.com"))
        .unwrap();

    let args = [Arg::from(json!({}))];
    assert!(client.invoke("GitHub#create(User)", &args).is_err());
    assert!(client.invoke("GitHub#create(User)", &args).is_err());
    assert_eq!(transport.calls(), 4);
}

#[test]
fn backoff_retryer_propagates_once_attempts_are_spent() {
    let mut retryer = BackoffRetryer::new(2, Duration::from_millis(1), Duration::from_millis(1));
    assert!(retryer
        .continue_or_propagate(TransportError::new("first"))
        .is_ok());
    let error = retryer
        .continue_or_propagate(TransportError::new("second"))
        .unwrap_err();
    assert_eq!(error.message, "second");
}
