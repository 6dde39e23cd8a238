/// Builds the canonical signature string identifying a described operation:
/// `Interface#operation(Type1,Type2)`, with no whitespace and empty parens
/// for zero parameters. Used to key per-operation configuration and the
/// dispatcher's handler map.
pub fn config_key(interface: &str, operation: &str, param_types: &[&str]) -> String {
    let mut key = String::with_capacity(interface.len() + operation.len() + 16);
    key.push_str(interface);
    key.push('#');
    key.push_str(operation);
    key.push('(');
    key.push_str(&param_types.join(","));
    key.push(')');
    key
}

/// The interface-level configuration key: everything before the `#`.
pub fn interface_key(config_key: &str) -> &str {
    match config_key.split_once('#') {
        Some((interface, _)) => interface,
        None => config_key,
    }
}
