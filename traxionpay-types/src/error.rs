//! Error types shared by the SDK crates.

/// Errors raised while constructing a value object.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

/// Errors raised by a [`Transport`](crate::ports::Transport) while talking to the gateway.
///
/// Payloads are kept as strings so the port stays independent of any HTTP library.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransportError {
    #[error("HTTP error: {0}")]
    Http(String),

    #[error("Failed to decode response body: {0}")]
    Decode(String),

    #[error("Redirect expected but no Location header was returned (status {status})")]
    MissingLocation { status: u16 },

    #[error("Unexpected response body: {0}")]
    UnexpectedBody(String),
}
