use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use httpbind::codec::{DecodeError, Decoder, Transport, TransportError};
use httpbind::contract::{ContractError, InterfaceSpec, OperationSpec, ParamSpec, ReturnType};
use httpbind::dispatch::{Arg, ClientBuilder, InvokeError};
use httpbind::http::{HttpMethod, Request, RequestOptions, Response, ResponseBody, Target};
use serde_json::{json, Value};

/// Scripted transport: pops one canned response per call and records every
/// request it saw.
struct StubTransport {
    responses: Mutex<VecDeque<(u16, &'static str, Option<String>)>>,
    requests: Mutex<Vec<Request>>,
}

impl StubTransport {
    fn returning(responses: Vec<(u16, &'static str, Option<String>)>) -> Arc<Self> {
        Arc::new(Self {
            responses: Mutex::new(responses.into()),
            requests: Mutex::new(Vec::new()),
        })
    }

    fn ok(body: &str) -> Arc<Self> {
        Self::returning(vec![(200, "OK", Some(body.to_string()))])
    }

    fn recorded(&self) -> Vec<Request> {
        self.requests.lock().unwrap().clone()
    }
}

impl Transport for StubTransport {
    fn execute(
        &self,
        request: &Request,
        _options: &RequestOptions,
    ) -> Result<Response, TransportError> {
        self.requests.lock().unwrap().push(request.clone());
        let (status, reason, body) = self
            .responses
            .lock()
            .unwrap()
            .pop_front()
            .ok_or_else(|| TransportError::new("no scripted response left"))?;
        Ok(Response::new(
            status,
            reason,
            vec![],
            body.map(ResponseBody::from_text),
        ))
    }
}

/// Minimal JSON decoder so these tests do not depend on the codec extension.
struct ParsingDecoder;

impl Decoder for ParsingDecoder {
    fn decode(
        &self,
        config_key: &str,
        body: &str,
        _return_type: &ReturnType,
    ) -> Result<Value, DecodeError> {
        serde_json::from_str(body).map_err(|error| DecodeError::Parse {
            config_key: config_key.to_string(),
            message: error.to_string(),
        })
    }
}

fn github_interface() -> InterfaceSpec {
    InterfaceSpec::new("GitHub").operation(
        OperationSpec::get("contributors")
            .path("/repos/{owner}/{repo}/contributors")
            .param(ParamSpec::path("String", "owner"))
            .param(ParamSpec::path("String", "repo"))
            .returns(ReturnType::typed("Vec<Contributor>")),
    )
}

#[test]
fn resolves_and_executes_a_get_operation() {
    let transport = StubTransport::ok(r#"[{"login": "dominic"}]"#);
    let client = ClientBuilder::new(transport.clone())
        .decoder("GitHub", Arc::new(ParsingDecoder))
        .build(Target::new(github_interface(), "https://api.example.com"))
        .unwrap();

    let value = client
        .invoke(
            "GitHub#contributors(String,String)",
            &[Arg::text("octocat"), Arg::text("hello-world")],
        )
        .unwrap();

    assert_eq!(value, json!([{"login": "dominic"}]));
    let requests = transport.recorded();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].method, HttpMethod::Get);
    assert_eq!(
        requests[0].url,
        "https://api.example.com/repos/octocat/hello-world/contributors"
    );
    assert_eq!(requests[0].body, None);
}

#[test]
fn uri_override_argument_replaces_the_base_url() {
    let spec = InterfaceSpec::new("GitHub").operation(
        OperationSpec::get("contributors")
            .path("/repos/{owner}/{repo}/contributors")
            .param(ParamSpec::uri())
            .param(ParamSpec::path("String", "owner"))
            .param(ParamSpec::path("String", "repo"))
            .returns(ReturnType::Raw),
    );
    let transport = StubTransport::ok("[]");
    let client = ClientBuilder::new(transport.clone())
        .build(Target::new(spec, "https://api.example.com"))
        .unwrap();

    client
        .invoke(
            "GitHub#contributors(Uri,String,String)",
            &[
                Arg::text("https://other.example.org"),
                Arg::text("octocat"),
                Arg::text("hello-world"),
            ],
        )
        .unwrap();

    assert_eq!(
        transport.recorded()[0].url,
        "https://other.example.org/repos/octocat/hello-world/contributors"
    );
}

#[test]
fn absent_uri_override_is_an_argument_error() {
    let spec = InterfaceSpec::new("GitHub").operation(
        OperationSpec::get("orgs")
            .path("/orgs")
            .param(ParamSpec::uri())
            .returns(ReturnType::Raw),
    );
    let transport = StubTransport::ok("[]");
    let client = ClientBuilder::new(transport)
        .build(Target::new(spec, "https://api.example.com"))
        .unwrap();

    let error = client.invoke("GitHub#orgs(Uri)", &[Arg::Absent]).unwrap_err();
    assert!(matches!(error, InvokeError::Argument { .. }));
}

#[test]
fn unknown_config_key_is_reported() {
    let transport = StubTransport::ok("[]");
    let client = ClientBuilder::new(transport)
        .decoder("GitHub", Arc::new(ParsingDecoder))
        .build(Target::new(github_interface(), "https://api.example.com"))
        .unwrap();

    let error = client.invoke("GitHub#missing()", &[]).unwrap_err();
    match error {
        InvokeError::UnknownOperation { config_key } => {
            assert_eq!(config_key, "GitHub#missing()")
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn typed_return_without_decoder_fails_at_build_time() {
    let transport = StubTransport::ok("[]");
    let error = ClientBuilder::new(transport)
        .build(Target::new(github_interface(), "https://api.example.com"))
        .unwrap_err();
    assert!(matches!(error, ContractError::MissingDecoder { .. }));
}

#[test]
fn method_level_decoder_wins_over_interface_level() {
    struct FixedDecoder(&'static str);
    impl Decoder for FixedDecoder {
        fn decode(&self, _: &str, _: &str, _: &ReturnType) -> Result<Value, DecodeError> {
            Ok(Value::String(self.0.to_string()))
        }
    }

    let transport = StubTransport::ok("ignored");
    let client = ClientBuilder::new(transport)
        .decoder("GitHub", Arc::new(FixedDecoder("interface")))
        .decoder(
            "GitHub#contributors(String,String)",
            Arc::new(FixedDecoder("method")),
        )
        .build(Target::new(github_interface(), "https://api.example.com"))
        .unwrap();

    let value = client
        .invoke(
            "GitHub#contributors(String,String)",
            &[Arg::text("a"), Arg::text("b")],
        )
        .unwrap();
    assert_eq!(value, Value::String("method".to_string()));
}

#[test]
fn form_bound_params_expand_a_body_template_without_a_form_encoder() {
    let spec = InterfaceSpec::new("Dns").operation(
        OperationSpec::post("login")
            .path("/tokens")
            .body("%7B\"user\": \"{user}\"%7D")
            .param(ParamSpec::form("String", "user"))
            .returns(ReturnType::Raw),
    );
    let transport = StubTransport::ok("token");
    let client = ClientBuilder::new(transport.clone())
        .build(Target::new(spec, "https://dns.example.com"))
        .unwrap();

    client
        .invoke("Dns#login(String)", &[Arg::text("admin")])
        .unwrap();

    assert_eq!(
        transport.recorded()[0].body.as_deref(),
        Some(r#"{"user": "admin"}"#)
    );
}

#[test]
fn unit_return_with_empty_response_decodes_to_null() {
    let spec = InterfaceSpec::new("GitHub").operation(
        OperationSpec::delete("remove")
            .path("/repos/{owner}")
            .param(ParamSpec::path("String", "owner"))
            .returns(ReturnType::Unit),
    );
    let transport = StubTransport::returning(vec![(204, "No Content", None)]);
    let client = ClientBuilder::new(transport)
        .build(Target::new(spec, "https://api.example.com"))
        .unwrap();

    let value = client
        .invoke("GitHub#remove(String)", &[Arg::text("octocat")])
        .unwrap();
    assert_eq!(value, Value::Null);
}

#[test]
fn error_status_surfaces_an_application_error() {
    let transport =
        StubTransport::returning(vec![(404, "Not Found", Some("no such repo".to_string()))]);
    let client = ClientBuilder::new(transport)
        .decoder("GitHub", Arc::new(ParsingDecoder))
        .build(Target::new(github_interface(), "https://api.example.com"))
        .unwrap();

    let error = client
        .invoke(
            "GitHub#contributors(String,String)",
            &[Arg::text("octocat"), Arg::text("gone")],
        )
        .unwrap_err();
    match error {
        InvokeError::Application(app) => {
            assert_eq!(app.status, 404);
            assert_eq!(app.reason, "Not Found");
            assert_eq!(app.body_snippet.as_deref(), Some("no such repo"));
            assert_eq!(app.config_key, "GitHub#contributors(String,String)");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn absent_path_argument_leaves_its_placeholder_in_the_url() {
    let transport = StubTransport::ok("[]");
    let client = ClientBuilder::new(transport.clone())
        .decoder("GitHub", Arc::new(ParsingDecoder))
        .build(Target::new(github_interface(), "https://api.example.com"))
        .unwrap();

    client
        .invoke(
            "GitHub#contributors(String,String)",
            &[Arg::text("octocat"), Arg::Absent],
        )
        .unwrap();
    assert_eq!(
        transport.recorded()[0].url,
        "https://api.example.com/repos/octocat/{repo}/contributors"
    );
}
