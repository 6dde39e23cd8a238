mod arg;
mod client_builder;
mod client_dispatcher;
mod invoke_error;
mod method_handler;

pub use arg::Arg;
pub use client_builder::ClientBuilder;
pub use client_dispatcher::ClientDispatcher;
pub use invoke_error::InvokeError;
pub use method_handler::MethodHandler;
