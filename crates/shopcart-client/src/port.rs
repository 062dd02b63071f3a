//! Port trait implementation for `CartClient`.
//!
//! This module implements the core-owned `CartApiPort` trait for
//! `CartClient`, handling the conversion between wire types and core
//! domain types and the mapping of internal errors to port errors.

use async_trait::async_trait;
use shopcart_core::{CartApiPort, CartItem, CartPortError, CartPortResult, CartTarget, SearchFilter};

use crate::client::CartClient;
use crate::error::ClientError;
use crate::http::HttpBackend;
use crate::models::ItemPayload;

// ============================================================================
// Error Mapping
// ============================================================================

/// Convert internal `ClientError` to core `CartPortError`.
fn map_error(err: ClientError) -> CartPortError {
    match err {
        ClientError::ApiRequestFailed {
            status, message, ..
        } => {
            if status == 404 {
                CartPortError::NotFound { message }
            } else {
                CartPortError::Rejected { status, message }
            }
        }
        ClientError::InvalidResponse { message } => CartPortError::InvalidResponse { message },
        ClientError::Network(e) => CartPortError::Network {
            message: e.to_string(),
        },
        ClientError::InvalidUrl(e) => CartPortError::Configuration {
            message: e.to_string(),
        },
        ClientError::JsonParse(e) => CartPortError::InvalidResponse {
            message: e.to_string(),
        },
    }
}

// ============================================================================
// Port Implementation
// ============================================================================

#[async_trait]
impl<B: HttpBackend + Send + Sync> CartApiPort for CartClient<B> {
    async fn create_item(&self, item: &CartItem) -> CartPortResult<CartItem> {
        let payload = ItemPayload::from(item);
        let record = self.create_item(&payload).await.map_err(map_error)?;
        Ok(record.into())
    }

    async fn update_item(&self, item: &CartItem) -> CartPortResult<CartItem> {
        let payload = ItemPayload::from(item);
        let record = self.update_item(&payload).await.map_err(map_error)?;
        Ok(record.into())
    }

    async fn retrieve(&self, target: &CartTarget) -> CartPortResult<CartItem> {
        let record = self.retrieve(target).await.map_err(map_error)?;
        Ok(record.into())
    }

    async fn delete(&self, target: &CartTarget) -> CartPortResult<()> {
        self.delete(target).await.map_err(map_error)
    }

    async fn checkout(&self, target: &CartTarget) -> CartPortResult<()> {
        self.checkout(target).await.map_err(map_error)
    }

    async fn search(&self, filter: &SearchFilter) -> CartPortResult<Vec<CartItem>> {
        let records = self.search(filter).await.map_err(map_error)?;
        Ok(records.into_iter().map(Into::into).collect())
    }
}
