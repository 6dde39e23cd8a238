use std::collections::HashMap;
use std::sync::Arc;

use serde_json::Value;
use tracing::debug;

use crate::codec::{
    BodyEncoder, DecodeError, Decoder, ErrorDecoder, FormEncoder, Retryer, Transport,
};
use crate::constants::ERROR_STATUS_THRESHOLD;
use crate::contract::MethodMetadata;
use crate::dispatch::{Arg, InvokeError};
use crate::http::{RequestOptions, Target};
use crate::template::RequestTemplate;

/// How an operation's arguments become a request body. Selected once from
/// the metadata shape when the handler map is built.
pub(crate) enum EncodeStrategy {
    /// Named form values pass through the form encoder.
    Form(Arc<dyn FormEncoder>),
    /// The argument at `index` passes through the body encoder.
    Body {
        encoder: Arc<dyn BodyEncoder>,
        index: usize,
    },
    /// Placeholder-only resolution.
    Identity,
}

/// Per-operation unit turning arguments into a request, executing it through
/// the transport, and decoding or classifying the response.
pub struct MethodHandler {
    pub(crate) target: Arc<Target>,
    pub(crate) metadata: MethodMetadata,
    pub(crate) options: RequestOptions,
    pub(crate) transport: Arc<dyn Transport>,
    pub(crate) decoder: Arc<dyn Decoder>,
    pub(crate) error_decoder: Arc<dyn ErrorDecoder>,
    pub(crate) retryer: Arc<dyn Retryer>,
    pub(crate) strategy: EncodeStrategy,
}

impl MethodHandler {
    pub fn config_key(&self) -> &str {
        &self.metadata.config_key
    }

    pub fn metadata(&self) -> &MethodMetadata {
        &self.metadata
    }

    /// Runs one logical call: encode, execute, decode. Transport failures
    /// loop through a fresh retryer; a retried attempt re-runs the full
    /// binding and encode step.
    pub fn invoke(&self, args: &[Arg]) -> Result<Value, InvokeError> {
        let mut retryer = self.retryer.fresh();
        loop {
            match self.execute_and_decode(args) {
                Err(InvokeError::Transport(error)) => {
                    retryer
                        .continue_or_propagate(error)
                        .map_err(InvokeError::Transport)?;
                    debug!(
                        config_key = %self.metadata.config_key,
                        "retrying after transport failure"
                    );
                }
                outcome => return outcome,
            }
        }
    }

    fn execute_and_decode(&self, args: &[Arg]) -> Result<Value, InvokeError> {
        let mut template = self.build_template(args)?;
        self.target.apply(&mut template);
        let request = template.request();

        debug!(
            config_key = %self.metadata.config_key,
            method = %request.method,
            url = %request.url,
            "---> request"
        );
        let response = self
            .transport
            .execute(&request, &self.options)
            .map_err(InvokeError::Transport)?;
        debug!(
            config_key = %self.metadata.config_key,
            status = response.status,
            "<--- response"
        );

        if response.status < ERROR_STATUS_THRESHOLD {
            let body = match response.body {
                Some(body) => body
                    .text()
                    .map_err(|source| InvokeError::Decode(DecodeError::Read(source)))?,
                None => String::new(),
            };
            self.decoder
                .decode(&self.metadata.config_key, &body, &self.metadata.return_type)
                .map_err(InvokeError::Decode)
        } else {
            Err(InvokeError::Application(
                self.error_decoder
                    .decode(&self.metadata.config_key, response),
            ))
        }
    }

    /// Clones the cached skeleton and binds this invocation's arguments into
    /// it: URI override first, then the encode strategy, then placeholder
    /// resolution.
    fn build_template(&self, args: &[Arg]) -> Result<RequestTemplate, InvokeError> {
        let mut template = self.metadata.template.clone();

        if let Some(url_index) = self.metadata.url_index {
            let value = args
                .get(url_index)
                .and_then(|arg| arg.binding_text())
                .ok_or_else(|| InvokeError::Argument {
                    config_key: self.metadata.config_key.clone(),
                    message: format!("URI parameter {url_index} was absent"),
                })?;
            template.insert(0, &value);
        }

        let mut bindings: HashMap<String, String> = HashMap::new();
        for (index, names) in &self.metadata.index_to_name {
            // absent arguments are skipped; their placeholders stay unresolved
            if let Some(value) = args.get(*index).and_then(|arg| arg.binding_text()) {
                for name in names {
                    bindings.insert(name.clone(), value.clone());
                }
            }
        }

        match &self.strategy {
            EncodeStrategy::Form(encoder) => {
                let form_values: Vec<(String, String)> = self
                    .metadata
                    .form_params
                    .iter()
                    .filter_map(|name| bindings.get(name).map(|v| (name.clone(), v.clone())))
                    .collect();
                encoder
                    .encode_form(&form_values, &mut template)
                    .map_err(|source| InvokeError::Encode {
                        config_key: self.metadata.config_key.clone(),
                        source,
                    })?;
            }
            EncodeStrategy::Body { encoder, index } => {
                let value = args
                    .get(*index)
                    .and_then(|arg| arg.as_json())
                    .ok_or_else(|| InvokeError::Argument {
                        config_key: self.metadata.config_key.clone(),
                        message: format!("body parameter {index} was absent"),
                    })?;
                encoder
                    .encode_body(&value, &mut template)
                    .map_err(|source| InvokeError::Encode {
                        config_key: self.metadata.config_key.clone(),
                        source,
                    })?;
            }
            EncodeStrategy::Identity => {}
        }

        template.resolve(&bindings);
        Ok(template)
    }
}
