use crate::constants::URI_OVERRIDE_TYPE;
use crate::http::HttpMethod;
use std::fmt;

/// Declarative description of an HTTP-bound interface: the set of operations
/// a client exposes. The descriptor is plain data; the contract parser
/// validates it into `MethodMetadata`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InterfaceSpec {
    /// Simple interface name, the first component of every config key.
    pub name: String,
    pub operations: Vec<OperationSpec>,
}

impl InterfaceSpec {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            operations: Vec::new(),
        }
    }

    pub fn operation(mut self, operation: OperationSpec) -> Self {
        self.operations.push(operation);
        self
    }
}

/// One declared operation: its markers, its positional parameters, and its
/// declared return type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperationSpec {
    pub name: String,
    pub markers: Vec<OperationMarker>,
    pub params: Vec<ParamSpec>,
    pub return_type: ReturnType,
}

impl OperationSpec {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            markers: Vec::new(),
            params: Vec::new(),
            return_type: ReturnType::Unit,
        }
    }

    pub fn get(name: impl Into<String>) -> Self {
        Self::new(name).marker(OperationMarker::Verb(HttpMethod::Get))
    }

    pub fn post(name: impl Into<String>) -> Self {
        Self::new(name).marker(OperationMarker::Verb(HttpMethod::Post))
    }

    pub fn put(name: impl Into<String>) -> Self {
        Self::new(name).marker(OperationMarker::Verb(HttpMethod::Put))
    }

    pub fn delete(name: impl Into<String>) -> Self {
        Self::new(name).marker(OperationMarker::Verb(HttpMethod::Delete))
    }

    pub fn marker(mut self, marker: OperationMarker) -> Self {
        self.markers.push(marker);
        self
    }

    /// Appends a literal path fragment to the operation's URL.
    pub fn path(self, fragment: impl Into<String>) -> Self {
        self.marker(OperationMarker::Path(fragment.into()))
    }

    /// Declares a body: literal when the value has no placeholder syntax, a
    /// body template otherwise.
    pub fn body(self, value: impl Into<String>) -> Self {
        self.marker(OperationMarker::Body(value.into()))
    }

    pub fn produces(self, media_types: &[&str]) -> Self {
        self.marker(OperationMarker::Produces(
            media_types.iter().map(|t| t.to_string()).collect(),
        ))
    }

    pub fn consumes(self, media_types: &[&str]) -> Self {
        self.marker(OperationMarker::Consumes(
            media_types.iter().map(|t| t.to_string()).collect(),
        ))
    }

    pub fn param(mut self, param: ParamSpec) -> Self {
        self.params.push(param);
        self
    }

    pub fn returns(mut self, return_type: ReturnType) -> Self {
        self.return_type = return_type;
        self
    }
}

/// Operation-level markers, the descriptor analog of method annotations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OperationMarker {
    Verb(HttpMethod),
    /// Literal URL fragment appended to the operation's path.
    Path(String),
    /// Request body; treated as a template when it contains `{`.
    Body(String),
    /// Media types joined into the `Content-Type` header.
    Produces(Vec<String>),
    /// Media types joined into the `Accept` header.
    Consumes(Vec<String>),
}

/// One positional parameter: its simple type name (part of the config key)
/// and the template names it binds to. A parameter with no bindings is the
/// operation's body, unless its type is the designated URI-override type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParamSpec {
    pub type_name: String,
    pub bindings: Vec<ParamBinding>,
}

impl ParamSpec {
    /// An unmarked parameter; the contract treats it as the body argument.
    pub fn new(type_name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            bindings: Vec::new(),
        }
    }

    pub fn path(type_name: impl Into<String>, name: impl Into<String>) -> Self {
        Self::new(type_name).bind(ParamBinding::Path(name.into()))
    }

    pub fn query(type_name: impl Into<String>, name: impl Into<String>) -> Self {
        Self::new(type_name).bind(ParamBinding::Query(name.into()))
    }

    pub fn header(type_name: impl Into<String>, name: impl Into<String>) -> Self {
        Self::new(type_name).bind(ParamBinding::Header(name.into()))
    }

    pub fn form(type_name: impl Into<String>, name: impl Into<String>) -> Self {
        Self::new(type_name).bind(ParamBinding::Form(name.into()))
    }

    /// The call-time full-URI override parameter.
    pub fn uri() -> Self {
        Self::new(URI_OVERRIDE_TYPE)
    }

    pub fn bind(mut self, binding: ParamBinding) -> Self {
        self.bindings.push(binding);
        self
    }
}

/// Where a parameter's value lands in the request template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParamBinding {
    /// Substitutes a `{name}` placeholder in the URL path.
    Path(String),
    /// Appends a `{name}` placeholder to the query values for `name`.
    Query(String),
    /// Appends a `{name}` placeholder to the header values for `name`.
    Header(String),
    /// Collected into the form parameter list.
    Form(String),
}

impl ParamBinding {
    pub fn name(&self) -> &str {
        match self {
            ParamBinding::Path(name)
            | ParamBinding::Query(name)
            | ParamBinding::Header(name)
            | ParamBinding::Form(name) => name,
        }
    }
}

/// Declared result shape of an operation, consulted when resolving a decoder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReturnType {
    /// Nothing useful comes back; the body is discarded after the status
    /// check.
    Unit,
    /// The caller wants the body verbatim as text.
    Raw,
    /// Decoded into a typed value; the name is diagnostic only.
    Typed(String),
}

impl ReturnType {
    pub fn typed(name: impl Into<String>) -> Self {
        ReturnType::Typed(name.into())
    }

    /// Whether the built-in text decoder is an acceptable fallback.
    pub fn text_fallback_allowed(&self) -> bool {
        matches!(self, ReturnType::Unit | ReturnType::Raw)
    }
}

impl fmt::Display for ReturnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReturnType::Unit => f.write_str("()"),
            ReturnType::Raw => f.write_str("Response"),
            ReturnType::Typed(name) => f.write_str(name),
        }
    }
}
