use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, put},
    Json, Router,
};
use hydroflow_core::{Vehicle, VehicleType};
use serde::Deserialize;

use crate::{error::AppError, state::AppState};

#[derive(Debug, Deserialize)]
pub struct VehicleRequest {
    pub plate: String,
    pub vehicle_type: VehicleType,
    pub client_document: String,
}

#[derive(Debug, Deserialize)]
pub struct VehicleUpdateRequest {
    pub vehicle_type: VehicleType,
    pub client_document: String,
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/vehicles", get(list_vehicles).post(create_vehicle))
        .route("/vehicles/{plate}", put(update_vehicle).delete(delete_vehicle))
}

/// GET /vehicles
async fn list_vehicles(State(state): State<AppState>) -> Result<Json<Vec<Vehicle>>, AppError> {
    let vehicles = state.vehicles.list().await.map_err(AppError::internal)?;
    Ok(Json(vehicles))
}

/// POST /vehicles
async fn create_vehicle(
    State(state): State<AppState>,
    Json(req): Json<VehicleRequest>,
) -> Result<(StatusCode, Json<Vehicle>), AppError> {
    if req.plate.trim().is_empty() {
        return Err(AppError::Validation("plate is required".to_string()));
    }

    ensure_client_exists(&state, &req.client_document).await?;

    if state
        .vehicles
        .get(&req.plate)
        .await
        .map_err(AppError::internal)?
        .is_some()
    {
        return Err(AppError::Conflict(format!(
            "vehicle {} already exists",
            req.plate
        )));
    }

    let vehicle = Vehicle {
        plate: req.plate,
        vehicle_type: req.vehicle_type,
        client_document: req.client_document,
    };
    state
        .vehicles
        .create(&vehicle)
        .await
        .map_err(AppError::internal)?;

    Ok((StatusCode::CREATED, Json(vehicle)))
}

/// PUT /vehicles/{plate}
async fn update_vehicle(
    State(state): State<AppState>,
    Path(plate): Path<String>,
    Json(req): Json<VehicleUpdateRequest>,
) -> Result<Json<Vehicle>, AppError> {
    ensure_client_exists(&state, &req.client_document).await?;

    let vehicle = Vehicle {
        plate,
        vehicle_type: req.vehicle_type,
        client_document: req.client_document,
    };

    if !state
        .vehicles
        .update(&vehicle)
        .await
        .map_err(AppError::internal)?
    {
        return Err(AppError::NotFound(format!(
            "vehicle {} not found",
            vehicle.plate
        )));
    }

    Ok(Json(vehicle))
}

/// DELETE /vehicles/{plate}
async fn delete_vehicle(
    State(state): State<AppState>,
    Path(plate): Path<String>,
) -> Result<StatusCode, AppError> {
    if !state
        .vehicles
        .delete(&plate)
        .await
        .map_err(AppError::internal)?
    {
        return Err(AppError::NotFound(format!("vehicle {plate} not found")));
    }
    Ok(StatusCode::NO_CONTENT)
}

async fn ensure_client_exists(state: &AppState, document: &str) -> Result<(), AppError> {
    state
        .clients
        .get(document)
        .await
        .map_err(AppError::internal)?
        .ok_or_else(|| AppError::Validation(format!("client {document} not found")))?;
    Ok(())
}
