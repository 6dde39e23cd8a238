use std::collections::BTreeMap;

use crate::contract::ReturnType;
use crate::template::RequestTemplate;

/// Parse-time description of one operation: its canonical config key, the
/// request template skeleton, and how invocation arguments bind into it.
/// Built once by the contract parser and owned read-only by the operation's
/// `MethodHandler`; invocations clone the template, never mutate it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodMetadata {
    pub config_key: String,
    pub return_type: ReturnType,
    /// Position of the full-URI override argument, if declared.
    pub url_index: Option<usize>,
    /// Position of the body argument, if declared. Never set when
    /// `form_params` is non-empty.
    pub body_index: Option<usize>,
    pub template: RequestTemplate,
    /// Form parameter names, in declaration order.
    pub form_params: Vec<String>,
    /// Argument position to the template names bound at that position.
    pub index_to_name: BTreeMap<usize, Vec<String>>,
}

impl MethodMetadata {
    pub(crate) fn new(config_key: String, return_type: ReturnType) -> Self {
        Self {
            config_key,
            return_type,
            url_index: None,
            body_index: None,
            template: RequestTemplate::new(),
            form_params: Vec::new(),
            index_to_name: BTreeMap::new(),
        }
    }

    pub(crate) fn bind_name(&mut self, index: usize, name: &str) {
        let names = self.index_to_name.entry(index).or_default();
        if !names.iter().any(|n| n == name) {
            names.push(name.to_string());
        }
    }
}
