//! Normalized gateway response.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::ops::Deref;

use crate::error::TransportError;

/// The single response shape returned by every gateway operation.
///
/// An ordered mapping of string keys to JSON values. List responses are
/// wrapped under `"data"`; redirect responses carry `"url"`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GatewayResponse(Map<String, Value>);

impl GatewayResponse {
    /// An empty mapping.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Normalizes a decoded JSON body.
    ///
    /// Arrays become `{"data": [...]}` and objects pass through unchanged.
    /// Any other JSON value is rejected.
    pub fn from_json(value: Value) -> Result<Self, TransportError> {
        match value {
            Value::Object(map) => Ok(Self(map)),
            Value::Array(items) => {
                let mut map = Map::new();
                map.insert("data".to_string(), Value::Array(items));
                Ok(Self(map))
            }
            other => Err(TransportError::UnexpectedBody(format!(
                "expected a JSON object or array, got {other}"
            ))),
        }
    }

    /// Wraps a redirect target as `{"url": location}`.
    pub fn redirect(location: impl Into<String>) -> Self {
        let mut map = Map::new();
        map.insert("url".to_string(), Value::String(location.into()));
        Self(map)
    }

    /// The `"url"` entry of a redirect response.
    pub fn url(&self) -> Option<&str> {
        self.0.get("url").and_then(Value::as_str)
    }

    /// The `"data"` entry of a list response.
    pub fn data(&self) -> Option<&Vec<Value>> {
        self.0.get("data").and_then(Value::as_array)
    }

    pub fn into_inner(self) -> Map<String, Value> {
        self.0
    }
}

impl Deref for GatewayResponse {
    type Target = Map<String, Value>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<Map<String, Value>> for GatewayResponse {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}
