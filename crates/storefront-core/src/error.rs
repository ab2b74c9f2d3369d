//! Storefront error types.
//!
//! Only catalog construction, config loading, and rebuilding a cart from
//! stored lines are fallible. Cart and view operations report unusual input
//! through their return values instead.

use thiserror::Error;

/// Errors that can occur while building a catalog or cart from data.
#[derive(Error, Debug)]
pub enum StorefrontError {
    /// Two catalog entries share an id.
    #[error("Duplicate product id in catalog: {0}")]
    DuplicateProduct(String),

    /// A featured id has no counterpart in the full catalog.
    #[error("Featured product is not in the catalog: {0}")]
    FeaturedNotInCatalog(String),

    /// Negative or non-finite price.
    #[error("Invalid price for {product_id}: {value}")]
    InvalidPrice { product_id: String, value: f64 },

    /// Cart lines break the one-line-per-product or positive-quantity rule.
    #[error("Invalid cart: {0}")]
    InvalidCart(String),

    /// Config file could not be read.
    #[error("Failed to read catalog config {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// TOML parse error.
    #[error("Invalid TOML catalog: {0}")]
    Toml(#[from] toml::de::Error),

    /// JSON parse error.
    #[error("Invalid JSON catalog: {0}")]
    Json(#[from] serde_json::Error),

    /// A tracing subscriber could not be installed.
    #[error("Failed to initialise logging: {0}")]
    Logging(String),
}
