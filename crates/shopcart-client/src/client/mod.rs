//! Shopcart API client.
//!
//! This module provides the main client for issuing cart operations
//! against the shopcart REST service.

mod items;
mod search;

use crate::config::CartClientConfig;
use crate::http::{HttpBackend, ReqwestBackend};
use crate::models::ApiConfig;
use shopcart_core::CartPortError;
use url::Url;

// ============================================================================
// Type Aliases
// ============================================================================

/// Default shopcart client using the reqwest HTTP backend.
pub type DefaultCartClient = CartClient<ReqwestBackend>;

// ============================================================================
// Client
// ============================================================================

/// Client for the shopcart REST API.
///
/// This client is generic over an HTTP backend, allowing for easy testing.
/// Use `DefaultCartClient` for production code; external code interacts
/// with it through the `CartApiPort` trait from `shopcart-core`.
#[derive(Debug)]
pub struct CartClient<B: HttpBackend> {
    pub(crate) backend: B,
    pub(crate) config: ApiConfig,
}

impl DefaultCartClient {
    /// Create a new client with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns `CartPortError::Configuration` when the base URL does not
    /// parse.
    pub fn new(config: &CartClientConfig) -> Result<Self, CartPortError> {
        let internal_config = Self::to_internal_config(config)?;
        let backend = ReqwestBackend::new(&internal_config);
        Ok(Self {
            backend,
            config: internal_config,
        })
    }

    fn to_internal_config(config: &CartClientConfig) -> Result<ApiConfig, CartPortError> {
        let base_url =
            Url::parse(&config.base_url).map_err(|e| CartPortError::Configuration {
                message: format!("invalid base URL '{}': {e}", config.base_url),
            })?;

        Ok(ApiConfig {
            base_url,
            user_agent: config.user_agent.clone(),
            timeout: config.timeout,
        })
    }
}

impl<B: HttpBackend> CartClient<B> {
    /// Create a new client with a custom backend.
    ///
    /// Use this for testing with a fake backend.
    #[cfg(test)]
    pub(crate) const fn with_backend(config: ApiConfig, backend: B) -> Self {
        Self { backend, config }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::testing::FakeBackend;

    #[test]
    fn test_default_client_creation() {
        let config = CartClientConfig::new();
        let client = DefaultCartClient::new(&config).unwrap();
        assert_eq!(
            client.config.base_url.as_str(),
            "http://localhost:8080/shopcarts"
        );
    }

    #[test]
    fn test_invalid_base_url_is_rejected() {
        let config = CartClientConfig::new().with_base_url("not a url");
        let err = DefaultCartClient::new(&config).unwrap_err();
        match err {
            CartPortError::Configuration { message } => {
                assert!(message.contains("not a url"));
            }
            other => panic!("expected Configuration, got {other:?}"),
        }
    }

    #[test]
    fn test_client_with_fake_backend() {
        let _client = CartClient::with_backend(ApiConfig::default(), FakeBackend::new());
    }
}
