//! Transport port.
//!
//! The facade describes each gateway call as a [`GatewayRequest`] and hands it
//! to a [`Transport`]. Implementations perform exactly one HTTP exchange per
//! call and normalize the result into a [`GatewayResponse`].

use std::fmt;

use crate::domain::GatewayResponse;
use crate::error::TransportError;

/// HTTP verbs the gateway uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Method::Get => f.write_str("GET"),
            Method::Post => f.write_str("POST"),
        }
    }
}

/// Body of a request. Form and JSON bodies are mutually exclusive.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum RequestBody {
    #[default]
    Empty,
    /// URL-encoded form fields. The response is read from the `Location` header.
    Form(Vec<(String, String)>),
    /// Raw JSON document. The response body is decoded as JSON.
    Json(String),
}

/// A single call against the gateway.
#[derive(Clone, PartialEq, Eq)]
pub struct GatewayRequest {
    pub method: Method,
    /// Path appended to the base URL, e.g. `/banks/`.
    pub endpoint: String,
    /// Full `Authorization` header value.
    pub authorization: Option<String>,
    pub body: RequestBody,
}

impl GatewayRequest {
    pub fn get(endpoint: impl Into<String>) -> Self {
        Self {
            method: Method::Get,
            endpoint: endpoint.into(),
            authorization: None,
            body: RequestBody::Empty,
        }
    }

    pub fn post(endpoint: impl Into<String>) -> Self {
        Self {
            method: Method::Post,
            ..Self::get(endpoint)
        }
    }

    pub fn with_authorization(mut self, value: impl Into<String>) -> Self {
        self.authorization = Some(value.into());
        self
    }

    pub fn with_form(mut self, fields: Vec<(String, String)>) -> Self {
        self.body = RequestBody::Form(fields);
        self
    }

    pub fn with_json(mut self, json: impl Into<String>) -> Self {
        self.body = RequestBody::Json(json.into());
        self
    }
}

// Keeps credentials out of logs.
impl fmt::Debug for GatewayRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GatewayRequest")
            .field("method", &self.method)
            .field("endpoint", &self.endpoint)
            .field("authorization", &self.authorization.as_ref().map(|_| "<redacted>"))
            .field("body", &self.body)
            .finish()
    }
}

/// Port trait for gateway transports.
#[async_trait::async_trait]
pub trait Transport: Send + Sync {
    /// Performs one call and returns the normalized response.
    async fn send(&self, request: GatewayRequest) -> Result<GatewayResponse, TransportError>;
}
