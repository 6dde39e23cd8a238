use serde_json::Value;

/// One invocation argument, mirroring the positional parameter list of the
/// described operation.
#[derive(Debug, Clone, PartialEq)]
pub enum Arg {
    /// A value bound into URL, query, header, or form placeholders.
    Text(String),
    /// A structured payload for a body-encoded parameter.
    Json(Value),
    /// Not supplied; any placeholders bound at this position stay unresolved.
    Absent,
}

impl Arg {
    pub fn text(value: impl Into<String>) -> Self {
        Arg::Text(value.into())
    }

    /// The textual form used for placeholder substitution.
    pub(crate) fn binding_text(&self) -> Option<String> {
        match self {
            Arg::Text(value) => Some(value.clone()),
            Arg::Json(Value::String(value)) => Some(value.clone()),
            Arg::Json(value) => Some(value.to_string()),
            Arg::Absent => None,
        }
    }

    /// The structured form handed to a body encoder.
    pub(crate) fn as_json(&self) -> Option<Value> {
        match self {
            Arg::Text(value) => Some(Value::String(value.clone())),
            Arg::Json(value) => Some(value.clone()),
            Arg::Absent => None,
        }
    }
}

impl From<&str> for Arg {
    fn from(value: &str) -> Self {
        Arg::Text(value.to_string())
    }
}

impl From<String> for Arg {
    fn from(value: String) -> Self {
        Arg::Text(value)
    }
}

impl From<Value> for Arg {
    fn from(value: Value) -> Self {
        Arg::Json(value)
    }
}
