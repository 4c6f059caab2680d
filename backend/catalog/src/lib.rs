//! # Catalog
//!
//! Shared product model between the catalog service and the storefront.
//!
//! ## File Format
//!
//! A JSON array of products, kept in file order:
//!
//! ```json
//! [
//!   {
//!     "product_id": "p-101",
//!     "product_name": "Mango Juice",
//!     "product_price": 40,
//!     "image": "https://...",
//!     "calories": "120 kcal",
//!     "weight": "250 ml",
//!     "description": "Chilled and fresh"
//!   }
//! ]
//! ```
//!
//! Only `product_id`, `product_name` and `product_price` are required by the storefront.
//! The service itself never looks inside the elements and serves them verbatim.
//!
//! ## Envelope
//! - Success: `{ "success": true, "data": [...] }`
//! - Failure: `{ "success": false, "error": "..." }`
use std::path::Path;

use serde_json::Value;
use thiserror::Error;

pub mod products;
pub mod remote;

pub use products::{Envelope, PLACEHOLDER_IMAGE, Product};
pub use remote::fetch_catalog;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Failed to read catalog: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed catalog: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("Catalog request timed out")]
    TimedOut,

    #[error("Catalog request failed: {0}")]
    Http(reqwest::Error),

    #[error("Catalog service responded with {0}")]
    Status(reqwest::StatusCode),

    #[error("Catalog service error: {0}")]
    Rejected(String),
}

impl From<reqwest::Error> for CatalogError {
    fn from(error: reqwest::Error) -> Self {
        if error.is_timeout() {
            CatalogError::TimedOut
        } else {
            CatalogError::Http(error)
        }
    }
}

/// Parses a catalog document, keeping every element exactly as written.
pub fn parse_catalog(raw: &str) -> Result<Vec<Value>, CatalogError> {
    Ok(serde_json::from_str(raw)?)
}

pub fn parse_products(raw: &str) -> Result<Vec<Product>, CatalogError> {
    Ok(serde_json::from_str(raw)?)
}

/// Fresh read of the catalog file. Nothing is cached between calls.
pub async fn load_catalog(path: impl AsRef<Path>) -> Result<Vec<Value>, CatalogError> {
    let raw = tokio::fs::read_to_string(path).await?;

    parse_catalog(&raw)
}
