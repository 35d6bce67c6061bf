//! Invocation driver: request parsing, the fetch/transform/update/publish
//! pipeline, and the mapping of its outcome to an HTTP-style response.

pub mod config;
pub mod event;
pub mod handler;

pub use config::HandlerConfig;
pub use event::{InvocationEvent, InvocationResponse};
pub use handler::Handler;
