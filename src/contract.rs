mod config_key;
mod contract_error;
mod contract_parser;
mod interface_spec;
mod method_metadata;

pub use config_key::{config_key, interface_key};
pub use contract_error::ContractError;
pub use contract_parser::{parse_interface, parse_operation};
pub use interface_spec::{
    InterfaceSpec, OperationMarker, OperationSpec, ParamBinding, ParamSpec, ReturnType,
};
pub use method_metadata::MethodMetadata;
