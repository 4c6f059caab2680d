//! Catalog service for the vending machine storefront.
//!
//!
//!
//! # General Infrastructure
//! - One read-only endpoint: `GET /api/products`
//! - Catalog is a JSON file on disk, read fresh on every request
//! - No database, no cache, no write path
//! - Storefront (browser or terminal) fetches the catalog once and does everything else locally
//!
//!
//!
//! # Responses
//!
//! Success
//! - 200 + `{ "success": true, "data": [...] }`, products in file order, untouched
//!
//! Catalog missing, unreadable or not a JSON array
//! - 500 + `{ "success": false, "error": "..." }`
//! - Process keeps running, next request reads the file again
//!
//! Anything else
//! - 404 + `{ "success": false, "error": "Route not found" }`
//!
//!
//!
//! # Environment
//! - `RUST_PORT`: listening port, default 3001
//! - `CATALOG_PATH`: catalog file, default `../data.json` (relative to the working directory)
//! - `RUST_LOG`: tracing filter, e.g. `RUST_LOG=info`
//!
//!
//!
//! # Setup
//!
//! Run the service from `backend/` so the default catalog path resolves.
//! ```sh
//! cd backend
//! RUST_LOG=info cargo run --bin vending
//! ```
//!
//! Check it.
//! ```sh
//! curl http://localhost:3001/api/products
//! ```
//!
//! View current docs.
//! ```sh
//! cargo doc --open
//! ```
use std::{future::pending, sync::Arc, time::Duration};

use axum::{
    Router,
    http::{Method, header::CONTENT_TYPE},
    routing::get,
};

#[cfg(unix)]
use tokio::signal::unix::{SignalKind, signal};
use tokio::{net::TcpListener, signal::ctrl_c};
use tower_http::cors::CorsLayer;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

pub mod config;
pub mod error;
pub mod routes;
pub mod state;

use config::Config;
use routes::{PRODUCTS_ROUTE, fallback_handler, products_handler};
use state::AppState;

pub fn app(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE])
        .max_age(Duration::from_secs(60 * 60));

    Router::new()
        .route(PRODUCTS_ROUTE, get(products_handler))
        .fallback(fallback_handler)
        .layer(cors)
        .with_state(state)
}

pub async fn start_server() -> anyhow::Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    info!("Initializing state...");
    let state = AppState::new(Config::load()?);

    info!("Starting server...");
    info!("Serving catalog from {}", state.config.catalog_path.display());

    let address = format!("0.0.0.0:{}", state.config.port);
    info!("Binding to {address}");

    let listener = TcpListener::bind(&address).await?;
    info!("Server running on {address}");

    axum::serve(listener, app(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shut down");

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = ctrl_c().await {
            warn!("Failed to install Ctrl+C handler: {e}");
            pending::<()>().await;
        }

        info!("Received Ctrl+C, shutting down");
    };

    #[cfg(unix)]
    let terminate = async {
        match signal(SignalKind::terminate()) {
            Ok(mut terminate) => {
                terminate.recv().await;
            }
            Err(e) => {
                warn!("Failed to install signal handler: {e}");
                pending::<()>().await;
            }
        }

        info!("Received terminate signal, shutting down");
    };

    #[cfg(not(unix))]
    let terminate = pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
