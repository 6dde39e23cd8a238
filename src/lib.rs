//! httpbind compiles declaratively described HTTP interfaces into callable
//! clients.
//!
//! A contract parser turns operation descriptors into cached
//! [`MethodMetadata`](contract::MethodMetadata), a template engine expands
//! `{name}` placeholders across URLs, queries, headers, and bodies, and a
//! per-operation handler pipeline binds arguments, executes the request
//! through a pluggable [`Transport`](codec::Transport), and decodes or
//! classifies the response.
//!
//! The crate performs no network I/O of its own; transports, like encoders
//! and decoders, are collaborators supplied at assembly time.

pub mod codec;
pub mod constants;
pub mod contract;
pub mod dispatch;
pub mod http;
pub mod template;
