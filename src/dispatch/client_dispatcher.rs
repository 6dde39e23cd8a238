use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use serde_json::Value;

use crate::codec::DecodeError;
use crate::dispatch::{Arg, InvokeError, MethodHandler};
use crate::http::Target;

/// A built client: one handler per described operation, keyed by config key.
///
/// Cheap to share across threads; every invocation is independent.
pub struct ClientDispatcher {
    target: Arc<Target>,
    handlers: HashMap<String, MethodHandler>,
}

impl ClientDispatcher {
    pub(crate) fn new(target: Arc<Target>, handlers: HashMap<String, MethodHandler>) -> Self {
        Self { target, handlers }
    }

    pub fn target(&self) -> &Target {
        &self.target
    }

    pub fn handler(&self, config_key: &str) -> Option<&MethodHandler> {
        self.handlers.get(config_key)
    }

    pub fn config_keys(&self) -> impl Iterator<Item = &str> {
        self.handlers.keys().map(String::as_str)
    }

    /// Invokes the operation mapped at `config_key` with positional
    /// arguments, returning the decoded response value.
    pub fn invoke(&self, config_key: &str, args: &[Arg]) -> Result<Value, InvokeError> {
        match self.handlers.get(config_key) {
            Some(handler) => handler.invoke(args),
            None => Err(InvokeError::UnknownOperation {
                config_key: config_key.to_string(),
            }),
        }
    }

    /// Invokes and deserializes the decoded value into a concrete type.
    pub fn invoke_as<T>(&self, config_key: &str, args: &[Arg]) -> Result<T, InvokeError>
    where
        T: serde::de::DeserializeOwned,
    {
        let value = self.invoke(config_key, args)?;
        serde_json::from_value(value).map_err(|error| {
            InvokeError::Decode(DecodeError::Parse {
                config_key: config_key.to_string(),
                message: error.to_string(),
            })
        })
    }
}

impl PartialEq for ClientDispatcher {
    fn eq(&self, other: &Self) -> bool {
        self.target == other.target
    }
}

impl fmt::Debug for ClientDispatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientDispatcher")
            .field("name", &self.target.name)
            .field("base_url", &self.target.base_url)
            .field("operations", &self.handlers.len())
            .finish()
    }
}
