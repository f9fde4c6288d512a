//! reqwest-backed [`Transport`] adapter.

use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, LOCATION};
use reqwest::{Client, redirect};
use serde_json::Value;
use tracing::{debug, instrument, warn};

use traxionpay_types::{
    GatewayRequest, GatewayResponse, Method, RequestBody, Transport, TransportError,
};

use crate::config::GatewayConfig;

/// Sends gateway requests over HTTP.
///
/// One request per call, no retries, and redirects are never followed so the
/// cash-in `Location` header stays visible.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    base_url: String,
    http: Client,
}

impl HttpTransport {
    pub fn new(config: &GatewayConfig) -> Result<Self, reqwest::Error> {
        let http = Client::builder()
            .redirect(redirect::Policy::none())
            .build()?;
        Ok(Self {
            base_url: config.base_url().to_string(),
            http,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    #[instrument(
        name = "gateway_request",
        skip(self, request),
        fields(method = %request.method, endpoint = %request.endpoint)
    )]
    async fn execute(&self, request: GatewayRequest) -> Result<GatewayResponse, TransportError> {
        let url = format!("{}{}", self.base_url, request.endpoint);
        let mut builder = match request.method {
            Method::Get => self.http.get(&url),
            Method::Post => self.http.post(&url),
        };
        if let Some(value) = &request.authorization {
            builder = builder.header(AUTHORIZATION, value);
        }

        let expects_redirect =
            request.method == Method::Post && matches!(request.body, RequestBody::Form(_));
        builder = match request.body {
            RequestBody::Empty => builder,
            RequestBody::Form(fields) => builder.form(&fields),
            RequestBody::Json(json) => builder.header(CONTENT_TYPE, "application/json").body(json),
        };

        let resp = builder
            .send()
            .await
            .map_err(|e| TransportError::Http(e.to_string()))?;
        let status = resp.status();
        debug!(status = status.as_u16(), "gateway responded");

        if expects_redirect {
            let location = resp
                .headers()
                .get(LOCATION)
                .ok_or(TransportError::MissingLocation {
                    status: status.as_u16(),
                })?
                .to_str()
                .map_err(|e| TransportError::Decode(e.to_string()))?;
            return Ok(GatewayResponse::redirect(location));
        }

        let body = resp
            .text()
            .await
            .map_err(|e| TransportError::Http(e.to_string()))?;
        let value: Value =
            serde_json::from_str(&body).map_err(|e| TransportError::Decode(e.to_string()))?;
        GatewayResponse::from_json(value)
    }
}

#[async_trait::async_trait]
impl Transport for HttpTransport {
    async fn send(&self, request: GatewayRequest) -> Result<GatewayResponse, TransportError> {
        let endpoint = request.endpoint.clone();
        let result = self.execute(request).await;
        if let Err(e) = &result {
            warn!(%endpoint, error = %e, "gateway call failed");
        }
        result
    }
}
