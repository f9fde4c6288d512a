//! # TraxionPay Client SDK
//!
//! A typed Rust client for the TraxionPay payment gateway: cash-in through
//! the hosted payment form, bank payouts, and the supporting lookups.
//!
//! ```no_run
//! use traxionpay_client::TraxionPay;
//!
//! # async fn run() -> Result<(), traxionpay_client::ClientError> {
//! let client = TraxionPay::new("api-key", "secret-key")?;
//! let banks = client.fetch_banks().await?;
//! println!("{:?}", banks.data());
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod payform;
pub mod security;
pub mod transport;


use tracing::{debug, instrument};

use traxionpay_types::{
    BankLinkRequest, BillingDetails, CashInRequest, CashOutRequest, GatewayRequest,
    GatewayResponse, Transport, TransportError, ValidationError,
};

pub use config::GatewayConfig;
pub use payform::encode_additional_data;
pub use transport::HttpTransport;

/// Gateway endpoint paths, relative to the base URL.
pub mod endpoints {
    pub const CASH_IN: &str = "/payform-link";
    pub const BANKS: &str = "/banks/";
    pub const BANK_ACCOUNTS: &str = "/payout/bank-account/";
    pub const OTP: &str = "/payout/bank-payout/get-otp/";
    pub const BANK_PAYOUT: &str = "/payout/bank-payout/";
}

/// Error type for client operations.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Signing failed: {0}")]
    Signing(String),

    #[error("Transport error: {0}")]
    Transport(#[from] TransportError),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<ValidationError> for ClientError {
    fn from(err: ValidationError) -> Self {
        match err {
            ValidationError::InvalidArgument(msg) => ClientError::InvalidArgument(msg),
        }
    }
}

/// Flattens transport failures into an empty response.
///
/// For callers that prefer inspecting the mapping over handling errors.
/// Construction and signing errors are still returned.
pub trait OrEmpty {
    fn or_empty(self) -> Result<GatewayResponse, ClientError>;
}

impl OrEmpty for Result<GatewayResponse, ClientError> {
    fn or_empty(self) -> Result<GatewayResponse, ClientError> {
        match self {
            Err(ClientError::Transport(e)) => {
                debug!(error = %e, "returning empty response for failed gateway call");
                Ok(GatewayResponse::empty())
            }
            other => other,
        }
    }
}

/// TraxionPay gateway client.
///
/// Credentials and the auth header are fixed at construction, so one client
/// can be shared across tasks.
pub struct TraxionPay<T = HttpTransport> {
    api_key: String,
    secret_key: String,
    auth_header: String,
    transport: T,
}

impl TraxionPay<HttpTransport> {
    /// Creates a client against the default gateway URL.
    pub fn new(
        api_key: impl Into<String>,
        secret_key: impl Into<String>,
    ) -> Result<Self, ClientError> {
        Self::with_config(api_key, secret_key, GatewayConfig::default())
    }

    /// Creates a client against the configured gateway URL.
    pub fn with_config(
        api_key: impl Into<String>,
        secret_key: impl Into<String>,
        config: GatewayConfig,
    ) -> Result<Self, ClientError> {
        let (api_key, secret_key) = validate_credentials(api_key.into(), secret_key.into())?;
        let transport = HttpTransport::new(&config)?;
        Self::with_transport(api_key, secret_key, transport)
    }
}

impl<T: Transport> TraxionPay<T> {
    /// Creates a client that sends requests through `transport`.
    pub fn with_transport(
        api_key: impl Into<String>,
        secret_key: impl Into<String>,
        transport: T,
    ) -> Result<Self, ClientError> {
        let (api_key, secret_key) = validate_credentials(api_key.into(), secret_key.into())?;
        let token = security::generate_token(&secret_key)?;
        Ok(Self {
            api_key,
            secret_key,
            auth_header: format!("Basic {token}"),
            transport,
        })
    }

    /// Returns the underlying transport.
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Requests a hosted payment page for a cash-in.
    ///
    /// The payform signature authenticates this call, so no auth header is
    /// sent. On success the response holds the payment page under `"url"`.
    #[instrument(skip_all, fields(merchant_ref_no = %cash_in.merchant_ref_no()))]
    pub async fn cash_in(
        &self,
        cash_in: &CashInRequest,
        billing: Option<&BillingDetails>,
    ) -> Result<GatewayResponse, ClientError> {
        let signed = payform::build_payform(cash_in, billing, &self.api_key, &self.secret_key)?;
        let form_data = payform::encode_payform(&signed)?;
        debug!(bytes = form_data.len(), "payform encoded");
        let request = GatewayRequest::post(endpoints::CASH_IN)
            .with_form(vec![(payform::FORM_FIELD.to_string(), form_data)]);
        self.send(request).await
    }

    /// Lists the banks available for payouts, under `"data"`.
    pub async fn fetch_banks(&self) -> Result<GatewayResponse, ClientError> {
        self.send(GatewayRequest::get(endpoints::BANKS)).await
    }

    /// Lists the merchant's linked bank accounts, under `"data"`.
    pub async fn fetch_bank_accounts(&self) -> Result<GatewayResponse, ClientError> {
        self.send(self.authorized(GatewayRequest::get(endpoints::BANK_ACCOUNTS)))
            .await
    }

    /// Links a new bank account for payouts.
    pub async fn link_bank_account(
        &self,
        account: &BankLinkRequest,
    ) -> Result<GatewayResponse, ClientError> {
        let json = serde_json::to_string(account)?;
        let request = self
            .authorized(GatewayRequest::post(endpoints::BANK_ACCOUNTS))
            .with_json(json);
        self.send(request).await
    }

    /// Requests the one-time password needed by [`cash_out`](Self::cash_out).
    pub async fn fetch_otp(&self) -> Result<GatewayResponse, ClientError> {
        self.send(self.authorized(GatewayRequest::post(endpoints::OTP)))
            .await
    }

    /// Pays out wallet funds to a linked bank account.
    pub async fn cash_out(&self, payout: &CashOutRequest) -> Result<GatewayResponse, ClientError> {
        let json = serde_json::to_string(payout)?;
        let request = self
            .authorized(GatewayRequest::post(endpoints::BANK_PAYOUT))
            .with_json(json);
        self.send(request).await
    }

    fn authorized(&self, request: GatewayRequest) -> GatewayRequest {
        request.with_authorization(self.auth_header.as_str())
    }

    async fn send(&self, request: GatewayRequest) -> Result<GatewayResponse, ClientError> {
        Ok(self.transport.send(request).await?)
    }
}

fn validate_credentials(
    api_key: String,
    secret_key: String,
) -> Result<(String, String), ClientError> {
    if api_key.trim().is_empty() || secret_key.trim().is_empty() {
        return Err(ClientError::InvalidArgument(
            "api_key and secret_key must not be blank".to_string(),
        ));
    }
    Ok((api_key, secret_key))
}
