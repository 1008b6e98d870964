use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use hydroflow_catalog::CatalogError;
use hydroflow_order::OrderError;
use serde_json::json;

#[derive(Debug)]
pub enum AppError {
    Unauthorized(String),
    Validation(String),
    NotFound(String),
    Conflict(String),
    InvalidState(String),
    Internal(String),
    Anyhow(anyhow::Error),
}

impl AppError {
    /// Collapse an infrastructure failure into a 500 without leaking it.
    pub fn internal<E: std::fmt::Display>(err: E) -> Self {
        AppError::Internal(err.to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            AppError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg),
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::InvalidState(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            AppError::Conflict(msg) => (StatusCode::CONFLICT, msg),
            AppError::Internal(msg) => {
                tracing::error!("Internal Server Error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal Server Error".to_string(),
                )
            }
            AppError::Anyhow(err) => {
                tracing::error!("Internal Server Error: {}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal Server Error".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": error_message,
        }));

        (status, body).into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self::Anyhow(err.into())
    }
}

/// Catalog failures surface as 400s: the request named a service that does
/// not exist.
pub fn catalog_error(err: CatalogError) -> AppError {
    match err {
        CatalogError::ServiceNotFound(id) => {
            AppError::Validation(format!("service {id} not found"))
        }
    }
}

/// Lifecycle failures keep their distinguishable kinds across the boundary.
pub fn order_error(err: OrderError) -> AppError {
    match err {
        OrderError::NotFound(id) => AppError::NotFound(format!("order {id} not found")),
        OrderError::InvalidState { .. } => AppError::InvalidState(err.to_string()),
    }
}
