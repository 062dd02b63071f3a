//! Lenient parsing of shopcart API responses.
//!
//! The service serializes identifiers, quantity, and price as JSON numbers
//! while the client treats every field as an opaque string, so decoding
//! goes through `serde_json::Value` and stringifies scalars rather than
//! deserializing into typed fields.

use serde_json::Value;

use crate::error::{ClientError, ClientResult};
use crate::models::ItemRecord;

/// Stringify one field of an item object.
///
/// Strings pass through unchanged, numbers and booleans are rendered in
/// their JSON form, missing and null fields become empty strings.
fn field_string(object: &serde_json::Map<String, Value>, key: &str) -> String {
    match object.get(key) {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

/// Parse a single item object.
pub fn parse_item(value: &Value) -> ClientResult<ItemRecord> {
    let object = value
        .as_object()
        .ok_or_else(|| ClientError::InvalidResponse {
            message: format!("expected an item object, got: {value}"),
        })?;

    Ok(ItemRecord {
        customer_id: field_string(object, "customer_id"),
        product_id: field_string(object, "product_id"),
        name: field_string(object, "name"),
        quantity: field_string(object, "quantity"),
        price: field_string(object, "price"),
    })
}

/// Parse a list response, preserving server order.
pub fn parse_item_list(value: &Value) -> ClientResult<Vec<ItemRecord>> {
    let array = value
        .as_array()
        .ok_or_else(|| ClientError::InvalidResponse {
            message: format!("expected an item list, got: {value}"),
        })?;

    array.iter().map(parse_item).collect()
}
