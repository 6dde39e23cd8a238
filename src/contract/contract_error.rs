use crate::http::HttpMethod;
use std::fmt;

/// Raised while validating an interface description or assembling its
/// handlers. Always fatal and never retried.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContractError {
    /// The operation declared no HTTP verb marker.
    MissingHttpMethod { config_key: String },

    /// The operation declared more than one HTTP verb marker.
    MultipleHttpMethods {
        config_key: String,
        first: HttpMethod,
        second: HttpMethod,
    },

    /// An unmarked body parameter was combined with form parameters.
    BodyWithFormParams {
        config_key: String,
        param_index: usize,
    },

    /// The operation declared more than one unmarked body parameter.
    MultipleBodyParams {
        config_key: String,
        param_index: usize,
    },

    /// The declared return type requires a decoder, but none was registered
    /// for the operation or its interface.
    MissingDecoder { config_key: String },

    /// The operation has a body parameter but no body encoder was registered.
    MissingBodyEncoder { config_key: String },

    /// The operation has form parameters but no form encoder was registered.
    MissingFormEncoder { config_key: String },
}

impl fmt::Display for ContractError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContractError::MissingHttpMethod { config_key } => {
                write!(f, "{config_key} declares no HTTP method marker")
            }
            ContractError::MultipleHttpMethods {
                config_key,
                first,
                second,
            } => write!(
                f,
                "{config_key} declares multiple HTTP methods: {first} and {second}"
            ),
            ContractError::BodyWithFormParams {
                config_key,
                param_index,
            } => write!(
                f,
                "{config_key}: body parameter {param_index} cannot be combined with form parameters"
            ),
            ContractError::MultipleBodyParams {
                config_key,
                param_index,
            } => write!(
                f,
                "{config_key}: parameter {param_index} is a second body parameter; at most one is allowed"
            ),
            ContractError::MissingDecoder { config_key } => {
                write!(f, "no decoder registered for {config_key}")
            }
            ContractError::MissingBodyEncoder { config_key } => {
                write!(f, "no body encoder registered for {config_key}")
            }
            ContractError::MissingFormEncoder { config_key } => {
                write!(f, "no form encoder registered for {config_key}")
            }
        }
    }
}

impl std::error::Error for ContractError {}
