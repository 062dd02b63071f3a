//! CLI-specific error types and mappings.
//!
//! This module provides error types for the CLI adapter and mappings
//! from port errors to exit codes. Note that a failed cart operation is
//! not a `CliError`: the form controller turns it into a flash message,
//! matching the form contract. `CliError` covers everything around that
//! (configuration and bootstrap).

use shopcart_core::CartPortError;
use thiserror::Error;

/// CLI-specific error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Cart API error outside the form contract.
    #[error("{0}")]
    Api(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl CliError {
    /// Map error to appropriate exit code.
    ///
    /// Exit codes follow Unix conventions:
    /// - 1: General error
    /// - 64-78: Reserved categories (see sysexits.h)
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Api(_) => 1,
            Self::Config(_) => 78, // EX_CONFIG
        }
    }
}

impl From<CartPortError> for CliError {
    fn from(err: CartPortError) -> Self {
        match err {
            CartPortError::Configuration { message } => Self::Config(message),
            other => Self::Api(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        assert_eq!(CliError::Api("boom".to_string()).exit_code(), 1);
        assert_eq!(CliError::Config("bad url".to_string()).exit_code(), 78);
    }

    #[test]
    fn test_port_error_mapping() {
        let err = CliError::from(CartPortError::Configuration {
            message: "bad base URL".to_string(),
        });
        assert!(matches!(err, CliError::Config(_)));

        let err = CliError::from(CartPortError::Network {
            message: "refused".to_string(),
        });
        assert!(matches!(err, CliError::Api(_)));
    }
}
