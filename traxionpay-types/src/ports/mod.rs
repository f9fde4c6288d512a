//! Port traits implemented by transport adapters.

pub mod transport;

pub use transport::{GatewayRequest, Method, RequestBody, Transport};
