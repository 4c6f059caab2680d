use std::sync::Arc;

use axum::{Json, extract::State};
use catalog::{Envelope, load_catalog};
use serde_json::Value;
use tracing::{debug, error};

use crate::{error::AppError, state::AppState};

pub const PRODUCTS_ROUTE: &str = "/api/products";

/// Whole catalog, in file order. Query parameters are not looked at.
pub async fn products_handler(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Envelope<Vec<Value>>>, AppError> {
    let products = load_catalog(&state.config.catalog_path)
        .await
        .map_err(|e| {
            error!(
                "Failed to load catalog from {}: {e}",
                state.config.catalog_path.display()
            );
            e
        })?;

    debug!("Serving {} products", products.len());

    Ok(Json(Envelope::ok(products)))
}

pub async fn fallback_handler() -> AppError {
    AppError::RouteNotFound
}
