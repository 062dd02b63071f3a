//! Error types for cart port operations.

use thiserror::Error;

/// Errors from cart API port operations.
///
/// These are domain-level errors that consumers can handle.
/// Implementation-specific errors (HTTP, JSON) are mapped to these at the
/// adapter boundary. Variants carrying a server response keep the server's
/// own message so frontends can surface it verbatim.
#[derive(Debug, Error)]
pub enum CartPortError {
    /// The addressed cart or item does not exist.
    #[error("{message}")]
    NotFound {
        /// The server-provided message
        message: String,
    },

    /// The server rejected the request.
    #[error("{message}")]
    Rejected {
        /// HTTP status code
        status: u16,
        /// The server-provided message
        message: String,
    },

    /// Network or connectivity error.
    #[error("Network error: {message}")]
    Network {
        /// Description of the network error
        message: String,
    },

    /// Invalid response from the API.
    #[error("Invalid API response: {message}")]
    InvalidResponse {
        /// What was invalid
        message: String,
    },

    /// Client-side configuration error.
    #[error("Configuration error: {message}")]
    Configuration {
        /// What's wrong with the configuration
        message: String,
    },
}

/// Result type alias for cart port operations.
pub type CartPortResult<T> = Result<T, CartPortError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_message_variants_display_verbatim() {
        let err = CartPortError::NotFound {
            message: "ShopCart with id '42' was not found.".to_string(),
        };
        assert_eq!(err.to_string(), "ShopCart with id '42' was not found.");

        let err = CartPortError::Rejected {
            status: 415,
            message: "Content-Type must be application/json".to_string(),
        };
        assert_eq!(err.to_string(), "Content-Type must be application/json");
    }

    #[test]
    fn test_transport_variants_display() {
        let err = CartPortError::Network {
            message: "connection refused".to_string(),
        };
        assert!(err.to_string().contains("connection refused"));

        let err = CartPortError::InvalidResponse {
            message: "expected an item object".to_string(),
        };
        assert!(err.to_string().starts_with("Invalid API response"));
    }
}
