use std::collections::HashMap;
use std::sync::Arc;

use tracing::debug;

use crate::codec::{
    BackoffRetryer, BodyEncoder, Decoder, ErrorDecoder, FormEncoder, Retryer, StatusErrorDecoder,
    TextDecoder, Transport,
};
use crate::contract::{interface_key, parse_interface, ContractError};
use crate::dispatch::method_handler::EncodeStrategy;
use crate::dispatch::{ClientDispatcher, MethodHandler};
use crate::http::{RequestOptions, Target};

/// Assembles a `ClientDispatcher` from an interface description, a transport,
/// and per-operation component registrations.
///
/// Components register under either a full config key
/// (`Interface#operation(Types)`) or a bare interface name; method-level
/// registrations win over interface-level ones.
pub struct ClientBuilder {
    transport: Arc<dyn Transport>,
    retryer: Arc<dyn Retryer>,
    options: HashMap<String, RequestOptions>,
    body_encoders: HashMap<String, Arc<dyn BodyEncoder>>,
    form_encoders: HashMap<String, Arc<dyn FormEncoder>>,
    decoders: HashMap<String, Arc<dyn Decoder>>,
    error_decoders: HashMap<String, Arc<dyn ErrorDecoder>>,
}

impl ClientBuilder {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self {
            transport,
            retryer: Arc::new(BackoffRetryer::default()),
            options: HashMap::new(),
            body_encoders: HashMap::new(),
            form_encoders: HashMap::new(),
            decoders: HashMap::new(),
            error_decoders: HashMap::new(),
        }
    }

    pub fn retryer(mut self, retryer: Arc<dyn Retryer>) -> Self {
        self.retryer = retryer;
        self
    }

    pub fn options(mut self, key: impl Into<String>, options: RequestOptions) -> Self {
        self.options.insert(key.into(), options);
        self
    }

    pub fn body_encoder(mut self, key: impl Into<String>, encoder: Arc<dyn BodyEncoder>) -> Self {
        self.body_encoders.insert(key.into(), encoder);
        self
    }

    pub fn form_encoder(mut self, key: impl Into<String>, encoder: Arc<dyn FormEncoder>) -> Self {
        self.form_encoders.insert(key.into(), encoder);
        self
    }

    pub fn decoder(mut self, key: impl Into<String>, decoder: Arc<dyn Decoder>) -> Self {
        self.decoders.insert(key.into(), decoder);
        self
    }

    pub fn error_decoder(mut self, key: impl Into<String>, decoder: Arc<dyn ErrorDecoder>) -> Self {
        self.error_decoders.insert(key.into(), decoder);
        self
    }

    /// Parses the target's interface and maps one handler per operation.
    ///
    /// Fails eagerly when an operation is invalid or is missing a component
    /// its shape requires, so no dispatcher exists with a half-wired
    /// operation.
    pub fn build(self, target: Target) -> Result<ClientDispatcher, ContractError> {
        let parsed = parse_interface(&target.interface)?;
        let target = Arc::new(target);
        let mut handlers = HashMap::new();

        for metadata in parsed {
            let key = metadata.config_key.clone();

            let options = for_method_or_interface(&self.options, &key)
                .copied()
                .unwrap_or_default();

            let decoder: Arc<dyn Decoder> = match for_method_or_interface(&self.decoders, &key) {
                Some(decoder) => Arc::clone(decoder),
                None if metadata.return_type.text_fallback_allowed() => Arc::new(TextDecoder),
                None => return Err(ContractError::MissingDecoder { config_key: key }),
            };

            let error_decoder: Arc<dyn ErrorDecoder> =
                match for_method_or_interface(&self.error_decoders, &key) {
                    Some(decoder) => Arc::clone(decoder),
                    None => Arc::new(StatusErrorDecoder),
                };

            // form params feed the body template, when one exists, through
            // plain placeholder resolution rather than a form encoder
            let strategy = if !metadata.form_params.is_empty()
                && metadata.template.body_template().is_none()
            {
                match for_method_or_interface(&self.form_encoders, &key) {
                    Some(encoder) => EncodeStrategy::Form(Arc::clone(encoder)),
                    None => return Err(ContractError::MissingFormEncoder { config_key: key }),
                }
            } else if let Some(index) = metadata.body_index {
                match for_method_or_interface(&self.body_encoders, &key) {
                    Some(encoder) => EncodeStrategy::Body {
                        encoder: Arc::clone(encoder),
                        index,
                    },
                    None => return Err(ContractError::MissingBodyEncoder { config_key: key }),
                }
            } else {
                EncodeStrategy::Identity
            };

            debug!(config_key = %key, "mapped operation handler");
            handlers.insert(
                key,
                MethodHandler {
                    target: Arc::clone(&target),
                    metadata,
                    options,
                    transport: Arc::clone(&self.transport),
                    decoder,
                    error_decoder,
                    retryer: Arc::clone(&self.retryer),
                    strategy,
                },
            );
        }

        Ok(ClientDispatcher::new(target, handlers))
    }
}

/// Two-level lookup: exact config key first, then the bare interface name.
fn for_method_or_interface<'a, T>(map: &'a HashMap<String, T>, config_key: &str) -> Option<&'a T> {
    map.get(config_key)
        .or_else(|| map.get(interface_key(config_key)))
}
