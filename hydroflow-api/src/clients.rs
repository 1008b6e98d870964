use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use hydroflow_core::Client;
use serde::Deserialize;

use crate::{error::AppError, state::AppState};

#[derive(Debug, Deserialize)]
pub struct ClientRequest {
    pub document: String,
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub observations: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ClientUpdateRequest {
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub observations: Option<String>,
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/clients", get(list_clients).post(create_client))
        .route(
            "/clients/{document}",
            axum::routing::put(update_client).delete(delete_client),
        )
}

/// GET /clients
async fn list_clients(State(state): State<AppState>) -> Result<Json<Vec<Client>>, AppError> {
    let clients = state.clients.list().await.map_err(AppError::internal)?;
    Ok(Json(clients))
}

/// POST /clients
async fn create_client(
    State(state): State<AppState>,
    Json(req): Json<ClientRequest>,
) -> Result<(StatusCode, Json<Client>), AppError> {
    if req.document.trim().is_empty() {
        return Err(AppError::Validation("document is required".to_string()));
    }

    if state
        .clients
        .get(&req.document)
        .await
        .map_err(AppError::internal)?
        .is_some()
    {
        return Err(AppError::Conflict(format!(
            "client {} already exists",
            req.document
        )));
    }

    let client = Client {
        document: req.document,
        name: req.name,
        email: req.email,
        phone: req.phone,
        observations: req.observations,
    };
    state
        .clients
        .create(&client)
        .await
        .map_err(AppError::internal)?;

    Ok((StatusCode::CREATED, Json(client)))
}

/// PUT /clients/{document}
async fn update_client(
    State(state): State<AppState>,
    Path(document): Path<String>,
    Json(req): Json<ClientUpdateRequest>,
) -> Result<Json<Client>, AppError> {
    let client = Client {
        document,
        name: req.name,
        email: req.email,
        phone: req.phone,
        observations: req.observations,
    };

    if !state
        .clients
        .update(&client)
        .await
        .map_err(AppError::internal)?
    {
        return Err(AppError::NotFound(format!(
            "client {} not found",
            client.document
        )));
    }

    Ok(Json(client))
}

/// DELETE /clients/{document}
async fn delete_client(
    State(state): State<AppState>,
    Path(document): Path<String>,
) -> Result<StatusCode, AppError> {
    if !state
        .clients
        .delete(&document)
        .await
        .map_err(AppError::internal)?
    {
        return Err(AppError::NotFound(format!("client {document} not found")));
    }
    Ok(StatusCode::NO_CONTENT)
}
