use crate::constants::{ACCEPT, CONTENT_TYPE, URI_OVERRIDE_TYPE};
use crate::contract::{
    config_key, ContractError, InterfaceSpec, MethodMetadata, OperationMarker, OperationSpec,
    ParamBinding,
};

/// Validates every operation of an interface description into metadata.
pub fn parse_interface(spec: &InterfaceSpec) -> Result<Vec<MethodMetadata>, ContractError> {
    spec.operations
        .iter()
        .map(|operation| parse_operation(&spec.name, operation))
        .collect()
}

/// Validates one operation description into `MethodMetadata`, building the
/// request template skeleton along the way.
pub fn parse_operation(
    interface: &str,
    operation: &OperationSpec,
) -> Result<MethodMetadata, ContractError> {
    let param_types: Vec<&str> = operation
        .params
        .iter()
        .map(|p| p.type_name.as_str())
        .collect();
    let key = config_key(interface, &operation.name, &param_types);
    let mut data = MethodMetadata::new(key, operation.return_type.clone());

    for marker in &operation.markers {
        match marker {
            OperationMarker::Verb(method) => {
                if let Some(first) = data.template.method() {
                    return Err(ContractError::MultipleHttpMethods {
                        config_key: data.config_key,
                        first,
                        second: *method,
                    });
                }
                data.template.set_method(*method);
            }
            OperationMarker::Body(value) => {
                if value.contains('{') {
                    data.template.set_body_template(value);
                } else {
                    data.template.set_body(Some(value.clone()));
                }
            }
            OperationMarker::Path(fragment) => {
                data.template.append(fragment);
            }
            OperationMarker::Produces(media_types) => {
                data.template
                    .set_header(CONTENT_TYPE, &[&media_types.join(",")]);
            }
            OperationMarker::Consumes(media_types) => {
                data.template.set_header(ACCEPT, &[&media_types.join(",")]);
            }
        }
    }
    if data.template.method().is_none() {
        return Err(ContractError::MissingHttpMethod {
            config_key: data.config_key,
        });
    }

    for (index, param) in operation.params.iter().enumerate() {
        for binding in &param.bindings {
            match binding {
                ParamBinding::Path(name) => {
                    data.bind_name(index, name);
                }
                ParamBinding::Query(name) => {
                    // keep previously recorded values for this key; the
                    // placeholder is appended, never a replacement
                    let mut values: Vec<String> = data
                        .template
                        .queries()
                        .into_iter()
                        .filter(|(k, _)| k == name)
                        .filter_map(|(_, v)| v)
                        .collect();
                    values.push(format!("{{{name}}}"));
                    let values: Vec<&str> = values.iter().map(String::as_str).collect();
                    data.template.set_query(name, &values);
                    data.bind_name(index, name);
                }
                ParamBinding::Header(name) => {
                    let mut values: Vec<String> = data
                        .template
                        .headers()
                        .iter()
                        .filter(|(k, _)| k == name)
                        .map(|(_, v)| v.clone())
                        .collect();
                    values.push(format!("{{{name}}}"));
                    let values: Vec<&str> = values.iter().map(String::as_str).collect();
                    data.template.set_header(name, &values);
                    data.bind_name(index, name);
                }
                ParamBinding::Form(name) => {
                    data.form_params.push(name.clone());
                    data.bind_name(index, name);
                }
            }
        }

        if param.type_name == URI_OVERRIDE_TYPE {
            data.url_index = Some(index);
        } else if param.bindings.is_empty() {
            if !data.form_params.is_empty() {
                return Err(ContractError::BodyWithFormParams {
                    config_key: data.config_key,
                    param_index: index,
                });
            }
            if data.body_index.is_some() {
                return Err(ContractError::MultipleBodyParams {
                    config_key: data.config_key,
                    param_index: index,
                });
            }
            data.body_index = Some(index);
        }
    }

    Ok(data)
}
