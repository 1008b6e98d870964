use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, put},
    Json, Router,
};
use hydroflow_catalog::Service;
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::{error::AppError, state::AppState};

fn default_active() -> bool {
    true
}

#[derive(Debug, Deserialize)]
pub struct ServiceRequest {
    pub name: String,
    pub price_motorcycle: Decimal,
    pub price_car_small: Decimal,
    pub price_car_large: Decimal,
    pub duration_minutes: i32,
    #[serde(default = "default_active")]
    pub active: bool,
}

impl ServiceRequest {
    fn into_service(self, id: i32) -> Result<Service, AppError> {
        for (field, price) in [
            ("price_motorcycle", self.price_motorcycle),
            ("price_car_small", self.price_car_small),
            ("price_car_large", self.price_car_large),
        ] {
            if price < Decimal::ZERO {
                return Err(AppError::Validation(format!(
                    "{field} must not be negative"
                )));
            }
        }

        Ok(Service {
            id,
            name: self.name,
            price_motorcycle: self.price_motorcycle,
            price_car_small: self.price_car_small,
            price_car_large: self.price_car_large,
            duration_minutes: self.duration_minutes,
            active: self.active,
        })
    }
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/services", get(list_services).post(create_service))
        .route("/services/{id}", put(update_service).delete(delete_service))
}

/// GET /services
async fn list_services(State(state): State<AppState>) -> Result<Json<Vec<Service>>, AppError> {
    let services = state.services.list().await.map_err(AppError::internal)?;
    Ok(Json(services))
}

/// POST /services
async fn create_service(
    State(state): State<AppState>,
    Json(req): Json<ServiceRequest>,
) -> Result<(StatusCode, Json<Service>), AppError> {
    let mut service = req.into_service(0)?;
    service.id = state
        .services
        .create(&service)
        .await
        .map_err(AppError::internal)?;

    Ok((StatusCode::CREATED, Json(service)))
}

/// PUT /services/{id}
async fn update_service(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(req): Json<ServiceRequest>,
) -> Result<Json<Service>, AppError> {
    let service = req.into_service(id)?;

    if !state
        .services
        .update(&service)
        .await
        .map_err(AppError::internal)?
    {
        return Err(AppError::NotFound(format!("service {id} not found")));
    }

    Ok(Json(service))
}

/// DELETE /services/{id}
async fn delete_service(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<StatusCode, AppError> {
    if !state
        .services
        .delete(id)
        .await
        .map_err(AppError::internal)?
    {
        return Err(AppError::NotFound(format!("service {id} not found")));
    }
    Ok(StatusCode::NO_CONTENT)
}
