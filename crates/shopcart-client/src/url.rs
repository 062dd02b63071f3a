//! URL construction helpers for the shopcart API.
//!
//! This module provides pure functions for building shopcart API URLs,
//! ensuring consistent URL construction across all calls. The search query
//! string is built by explicit conjunction so that a parameter appears if
//! and only if its source field contributes one.

use crate::models::ApiConfig;
use shopcart_core::{CartTarget, SearchFilter};
use url::Url;

/// Append percent-encoded path segments to the configured base URL.
fn with_segments(config: &ApiConfig, segments: &[&str]) -> Url {
    let mut url = config.base_url.clone();

    let base_path = url.path().trim_end_matches('/').to_string();
    let joined = segments
        .iter()
        .map(|segment| urlencoding::encode(segment).into_owned())
        .collect::<Vec<_>>()
        .join("/");

    url.set_path(&format!("{base_path}/{joined}"));
    url
}

/// Build the URL for creating an item: `{base}/{customer_id}/items`.
pub fn build_create_url(config: &ApiConfig, customer_id: &str) -> Url {
    with_segments(config, &[customer_id, "items"])
}

/// Build the URL for updating an item: `{base}/{customer_id}/items/{product_id}`.
pub fn build_update_url(config: &ApiConfig, customer_id: &str, product_id: &str) -> Url {
    with_segments(config, &[customer_id, "items", product_id])
}

/// Build the cart- or item-scoped URL for a target.
///
/// Item-scoped (`{base}/{customer_id}/items/{product_id}`) when the target
/// carries a product identifier, cart-scoped (`{base}/{customer_id}`)
/// otherwise.
pub fn build_target_url(config: &ApiConfig, target: &CartTarget) -> Url {
    match target.product_id() {
        Some(product_id) => with_segments(config, &[target.customer_id(), "items", product_id]),
        None => with_segments(config, &[target.customer_id()]),
    }
}

/// Build the checkout URL for a target: the target URL with `/checkout`
/// appended.
pub fn build_checkout_url(config: &ApiConfig, target: &CartTarget) -> Url {
    match target.product_id() {
        Some(product_id) => with_segments(
            config,
            &[target.customer_id(), "items", product_id, "checkout"],
        ),
        None => with_segments(config, &[target.customer_id(), "checkout"]),
    }
}

/// Build the search URL with a conjunctive query string.
///
/// `name` and `quantity` contribute a parameter when non-empty; `priced`
/// contributes the literal `price=true`. Parameters are joined with `&`
/// with no leading `&`; an empty filter yields no query string at all.
pub fn build_search_url(config: &ApiConfig, filter: &SearchFilter) -> Url {
    let mut url = config.base_url.clone();
    if filter.is_empty() {
        url.set_query(None);
        return url;
    }

    let mut query = String::new();

    if let Some(name) = filter.name.as_deref().filter(|name| !name.is_empty()) {
        query.push_str(&format!("name={}", urlencoding::encode(name)));
    }
    if let Some(quantity) = filter
        .quantity
        .as_deref()
        .filter(|quantity| !quantity.is_empty())
    {
        if !query.is_empty() {
            query.push('&');
        }
        query.push_str(&format!("quantity={}", urlencoding::encode(quantity)));
    }
    if filter.priced {
        if !query.is_empty() {
            query.push('&');
        }
        query.push_str("price=true");
    }

    url.set_query(Some(&query));
    url
}
