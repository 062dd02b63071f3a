//! Public configuration for the shopcart client.
//!
//! This module provides a stable public API for configuring the client.
//! The internal config is derived from this.

use std::time::Duration;

/// Configuration for the shopcart API client.
///
/// Use the builder pattern methods to customize the client configuration.
///
/// # Example
///
/// ```
/// use shopcart_client::CartClientConfig;
/// use std::time::Duration;
///
/// let config = CartClientConfig::new()
///     .with_base_url("https://carts.example.com/shopcarts")
///     .with_timeout(Duration::from_secs(10));
/// ```
#[derive(Debug, Clone)]
pub struct CartClientConfig {
    /// Base URL for the shopcart API
    pub(crate) base_url: String,
    /// User agent string for HTTP requests
    pub(crate) user_agent: String,
    /// Request timeout
    pub(crate) timeout: Duration,
}

impl Default for CartClientConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8080/shopcarts".to_string(),
            user_agent: concat!("shopcart-client/", env!("CARGO_PKG_VERSION")).to_string(),
            timeout: Duration::from_secs(30),
        }
    }
}

impl CartClientConfig {
    /// Create a new configuration with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the base URL for the shopcart API.
    ///
    /// Defaults to `http://localhost:8080/shopcarts`.
    #[must_use]
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the user agent string for HTTP requests.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Set the request timeout.
    ///
    /// Defaults to 30 seconds.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = CartClientConfig::new();
        assert_eq!(config.base_url, "http://localhost:8080/shopcarts");
        assert!(config.user_agent.contains("shopcart-client"));
        assert_eq!(config.timeout, Duration::from_secs(30));
    }

    #[test]
    fn test_builder_pattern() {
        let config = CartClientConfig::new()
            .with_base_url("https://carts.example.com/shopcarts")
            .with_user_agent("test-agent")
            .with_timeout(Duration::from_secs(5));

        assert_eq!(config.base_url, "https://carts.example.com/shopcarts");
        assert_eq!(config.user_agent, "test-agent");
        assert_eq!(config.timeout, Duration::from_secs(5));
    }
}
