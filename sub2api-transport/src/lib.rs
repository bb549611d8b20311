pub mod abort;
pub mod client;
pub mod errors;
pub mod request_builder;

pub use abort::{AbortController, AbortSignal};
pub use errors::TransportError;
