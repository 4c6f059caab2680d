use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use catalog::{CatalogError, Envelope};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Catalog unavailable: {0}")]
    CatalogUnavailable(#[from] CatalogError),

    #[error("Route not found")]
    RouteNotFound,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match self {
            AppError::CatalogUnavailable { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::RouteNotFound => StatusCode::NOT_FOUND,
        };

        (status, Json(Envelope::<()>::failure(self.to_string()))).into_response()
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid {key} value: {reason}")]
    Invalid { key: &'static str, reason: String },
}
