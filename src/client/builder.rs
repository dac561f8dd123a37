use crate::client::CourierClient;
use crate::transport::HttpTransport;
use crate::{Error, ErrorContext, Result};
use std::sync::Arc;
use url::Url;

/// Default production endpoint.
pub const DEFAULT_BASE_URL: &str = "https://api.courier.com";

/// Builder for creating clients with custom configuration.
///
/// Keep this surface area small and predictable.
pub struct CourierClientBuilder {
    auth_token: Option<String>,
    /// Override base URL (primarily for testing with mock servers)
    base_url: Option<String>,
    timeout_secs: u64,
}

impl CourierClientBuilder {
    pub fn new() -> Self {
        Self {
            auth_token: None,
            base_url: None,
            timeout_secs: 30,
        }
    }

    /// Set the bearer token. Falls back to `COURIER_AUTH_TOKEN` when unset.
    pub fn auth_token(mut self, token: impl Into<String>) -> Self {
        self.auth_token = Some(token.into());
        self
    }

    /// Override the base URL.
    ///
    /// This is primarily for testing with mock servers. In production the
    /// default `https://api.courier.com` endpoint applies.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Request timeout in seconds (default 30).
    pub fn timeout_secs(mut self, secs: u64) -> Self {
        self.timeout_secs = secs.max(1);
        self
    }

    pub fn build(self) -> Result<CourierClient> {
        let auth_token = self
            .auth_token
            .or_else(|| std::env::var("COURIER_AUTH_TOKEN").ok())
            .ok_or_else(|| {
                Error::configuration_with_context(
                    "Auth token required (COURIER_AUTH_TOKEN)",
                    ErrorContext::new()
                        .with_field_path("builder.auth_token")
                        .with_source("client_builder"),
                )
            })?;

        let base_url = self.base_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        Url::parse(&base_url).map_err(|e| {
            Error::configuration_with_context(
                format!("Invalid base URL: {}", e),
                ErrorContext::new()
                    .with_field_path("builder.base_url")
                    .with_details(base_url.clone()),
            )
        })?;

        let transport = HttpTransport::new(base_url, auth_token, self.timeout_secs)?;
        Ok(CourierClient::from_transport(Arc::new(transport)))
    }
}

impl Default for CourierClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_invalid_base_url() {
        let err = CourierClientBuilder::new()
            .auth_token("token")
            .base_url("not a url")
            .build()
            .unwrap_err();
        assert!(matches!(err, Error::Configuration { .. }));
    }

    #[test]
    fn builds_with_explicit_token() {
        let client = CourierClientBuilder::new().auth_token("token").build();
        assert!(client.is_ok());
    }

    #[test]
    fn debug_output_redacts_the_token() {
        let client = CourierClientBuilder::new()
            .auth_token("super-secret")
            .build()
            .unwrap();
        let debug = format!("{:?}", client);
        assert!(!debug.contains("super-secret"));
        assert!(debug.contains("<redacted>"));
    }
}
