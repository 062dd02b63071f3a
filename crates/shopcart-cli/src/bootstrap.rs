//! CLI bootstrap - the composition root.
//!
//! This module is the ONLY place where infrastructure is wired together
//! for the CLI adapter: the reqwest-backed client from `shopcart-client`
//! is instantiated here and handed to command handlers behind the
//! `CartApiPort` trait.

use std::sync::Arc;
use std::time::Duration;

use shopcart_client::{CartClientConfig, DefaultCartClient};
use shopcart_core::CartApiPort;
use url::Url;

use crate::error::CliError;

/// Default API base URL when neither the flag nor the environment sets one.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080/shopcarts";

/// Bootstrap configuration for the CLI.
#[derive(Debug, Clone)]
pub struct CliConfig {
    /// Base URL of the shopcart API.
    pub base_url: String,
    /// Request timeout.
    pub timeout: Duration,
}

impl CliConfig {
    /// Build the config from an optional base URL override.
    ///
    /// clap folds the `SHOPCART_API_URL` environment variable into the
    /// override before this runs. The URL is validated here so a typo
    /// fails fast instead of surfacing as a request error.
    pub fn resolve(base_url: Option<String>) -> Result<Self, CliError> {
        let base_url = base_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        Url::parse(&base_url)
            .map_err(|e| CliError::Config(format!("invalid base URL '{base_url}': {e}")))?;

        Ok(Self {
            base_url,
            timeout: Duration::from_secs(30),
        })
    }
}

/// Fully composed application context for CLI commands.
pub struct CliContext {
    /// The cart API behind its port trait.
    pub api: Arc<dyn CartApiPort>,
}

impl CliContext {
    /// Access the cart API port.
    pub fn api(&self) -> Arc<dyn CartApiPort> {
        self.api.clone()
    }
}

/// Bootstrap the CLI application.
///
/// This is the composition root: it builds the HTTP client and wraps it
/// in the context handlers receive.
pub fn bootstrap(config: &CliConfig) -> Result<CliContext, CliError> {
    let client_config = CartClientConfig::new()
        .with_base_url(&config.base_url)
        .with_timeout(config.timeout);
    let client = DefaultCartClient::new(&client_config).map_err(CliError::from)?;

    Ok(CliContext {
        api: Arc::new(client),
    })
}
