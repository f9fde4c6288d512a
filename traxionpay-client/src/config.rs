//! Gateway endpoint configuration.

use std::env;

/// Base URL of the TraxionPay development API.
pub const DEFAULT_BASE_URL: &str = "https://devapi.traxionpay.com";

/// Environment variable overriding the base URL.
pub const BASE_URL_ENV: &str = "TRAXIONPAY_BASE_URL";

/// Where gateway requests are sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GatewayConfig {
    base_url: String,
}

impl GatewayConfig {
    /// Creates a config for the given base URL. A trailing slash is dropped.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Loads the base URL from `TRAXIONPAY_BASE_URL`, falling back to the default.
    pub fn from_env() -> Self {
        Self::from_base_url(env::var(BASE_URL_ENV).ok())
    }

    fn from_base_url(value: Option<String>) -> Self {
        match value {
            Some(url) if !url.trim().is_empty() => Self::new(url.trim()),
            _ => Self::default(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_points_at_dev_api() {
        assert_eq!(GatewayConfig::default().base_url(), "https://devapi.traxionpay.com");
    }

    #[test]
    fn test_trailing_slash_is_trimmed() {
        let config = GatewayConfig::new("http://localhost:8080/");
        assert_eq!(config.base_url(), "http://localhost:8080");
    }

    #[test]
    fn test_blank_override_falls_back() {
        assert_eq!(GatewayConfig::from_base_url(None), GatewayConfig::default());
        assert_eq!(
            GatewayConfig::from_base_url(Some("  ".into())),
            GatewayConfig::default()
        );
        assert_eq!(
            GatewayConfig::from_base_url(Some("https://api.traxionpay.com".into())).base_url(),
            "https://api.traxionpay.com"
        );
    }
}
