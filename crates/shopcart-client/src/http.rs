//! HTTP backend abstraction for the shopcart API.
//!
//! This module provides a trait-based HTTP backend that allows for
//! dependency injection and easy testing. The production implementation
//! uses reqwest. Each operation is a single send-and-check round trip; on
//! a non-success status the server's JSON `message` field is extracted for
//! the error.

use crate::error::{ClientError, ClientResult};
use crate::models::ApiConfig;
use async_trait::async_trait;
use serde_json::Value;
use url::Url;

// ============================================================================
// HTTP Backend Trait
// ============================================================================

/// Trait for HTTP backends speaking JSON.
///
/// This abstraction allows for dependency injection of HTTP clients,
/// making it easy to test code that depends on HTTP requests.
///
/// This is an implementation detail - external code should use the
/// `CartApiPort` trait.
#[async_trait]
pub trait HttpBackend: Send + Sync {
    /// GET a URL and return the JSON response body.
    async fn get_json(&self, url: &Url) -> ClientResult<Value>;

    /// POST a JSON body to a URL and return the JSON response body.
    async fn post_json(&self, url: &Url, body: &Value) -> ClientResult<Value>;

    /// PUT a JSON body to a URL and return the JSON response body.
    async fn put_json(&self, url: &Url, body: &Value) -> ClientResult<Value>;

    /// DELETE a URL, discarding any response body.
    async fn delete(&self, url: &Url) -> ClientResult<()>;
}

// ============================================================================
// Reqwest Backend
// ============================================================================

/// Production HTTP backend using reqwest.
///
/// This is an implementation detail - external code should use
/// `DefaultCartClient` and interact with it through the `CartApiPort`
/// trait.
#[derive(Debug)]
pub struct ReqwestBackend {
    client: reqwest::Client,
}

impl ReqwestBackend {
    /// Create a new reqwest backend with the given configuration.
    pub fn new(config: &ApiConfig) -> Self {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.clone())
            .build()
            .expect("failed to create HTTP client");

        Self { client }
    }

    /// Send a request and fail with the server's message on error status.
    async fn execute(
        &self,
        request: reqwest::RequestBuilder,
        url: &Url,
    ) -> ClientResult<reqwest::Response> {
        let response = request.send().await?;
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let message = read_error_message(response).await;
        Err(ClientError::ApiRequestFailed {
            status: status.as_u16(),
            message,
            url: url.to_string(),
        })
    }
}

/// Extract the `message` field from an error response body.
///
/// Falls back to the canonical reason for the status when the body is not
/// JSON or carries no message.
async fn read_error_message(response: reqwest::Response) -> String {
    let fallback = response
        .status()
        .canonical_reason()
        .unwrap_or("Server error")
        .to_string();

    match response.json::<Value>().await {
        Ok(body) => body
            .get("message")
            .and_then(Value::as_str)
            .map_or(fallback, str::to_string),
        Err(_) => fallback,
    }
}

#[async_trait]
impl HttpBackend for ReqwestBackend {
    async fn get_json(&self, url: &Url) -> ClientResult<Value> {
        let response = self.execute(self.client.get(url.as_str()), url).await?;
        Ok(response.json().await?)
    }

    async fn post_json(&self, url: &Url, body: &Value) -> ClientResult<Value> {
        let request = self.client.post(url.as_str()).json(body);
        let response = self.execute(request, url).await?;
        Ok(response.json().await?)
    }

    async fn put_json(&self, url: &Url, body: &Value) -> ClientResult<Value> {
        let request = self.client.put(url.as_str()).json(body);
        let response = self.execute(request, url).await?;
        Ok(response.json().await?)
    }

    async fn delete(&self, url: &Url) -> ClientResult<()> {
        self.execute(self.client.delete(url.as_str()), url).await?;
        Ok(())
    }
}

// ============================================================================
// Fake Backend for Testing
// ============================================================================
