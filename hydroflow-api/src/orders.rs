use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post, put},
    Extension, Json, Router,
};
use hydroflow_catalog::{LineRequest, PricingEngine, PricingResult, ServiceIndex};
use hydroflow_core::{OrderStatus, PaymentMethod, Vehicle};
use hydroflow_order::{Order, OrderError};
use serde::Deserialize;
use uuid::Uuid;

use crate::error::{catalog_error, order_error, AppError};
use crate::middleware::auth::AttendantClaims;
use crate::state::AppState;

// ============================================================================
// Request Types
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct OrderItemRequest {
    pub service_id: i32,
    pub quantity: i32,
}

#[derive(Debug, Deserialize)]
pub struct CreateOrderRequest {
    pub vehicle_plate: String,
    pub attendant_cpf: Option<String>,
    pub items: Vec<OrderItemRequest>,
    pub payment_method: PaymentMethod,
}

#[derive(Debug, Deserialize)]
pub struct ReplaceItemsRequest {
    pub items: Vec<OrderItemRequest>,
    pub payment_method: PaymentMethod,
}

#[derive(Debug, Deserialize)]
pub struct ConfirmPaymentRequest {
    pub payment_method: PaymentMethod,
}

#[derive(Debug, Deserialize)]
pub struct SetStatusRequest {
    pub status: OrderStatus,
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/orders", get(list_orders).post(create_order))
        .route("/orders/{id}", get(get_order).delete(delete_order))
        .route("/orders/{id}/items", put(replace_items))
        .route("/orders/{id}/payment", post(confirm_payment))
        .route("/orders/{id}/status", put(set_status))
        .route("/orders/{id}/cancel", post(cancel_order))
}

// ============================================================================
// Handlers
// ============================================================================

/// POST /orders
/// Create an order, pricing every line against the vehicle's type. The
/// attendant defaults to whoever is logged in.
async fn create_order(
    State(state): State<AppState>,
    Extension(claims): Extension<AttendantClaims>,
    Json(req): Json<CreateOrderRequest>,
) -> Result<(StatusCode, Json<Order>), AppError> {
    if req.items.is_empty() {
        return Err(AppError::Validation(
            "an order needs at least one item".to_string(),
        ));
    }

    let vehicle = resolve_vehicle(&state, &req.vehicle_plate).await?;
    let pricing = price_lines(&state, &vehicle, &req.items, req.payment_method).await?;

    let order = Order::create(
        vehicle.plate,
        req.attendant_cpf.or(Some(claims.sub)),
        req.payment_method,
        pricing,
    );
    state
        .orders
        .create_order(&order)
        .await
        .map_err(AppError::internal)?;

    tracing::info!("Order {} created, total {}", order.id, order.total);
    Ok((StatusCode::CREATED, Json(order)))
}

/// GET /orders
async fn list_orders(State(state): State<AppState>) -> Result<Json<Vec<Order>>, AppError> {
    let orders = state.orders.list_orders().await.map_err(AppError::internal)?;
    Ok(Json(orders))
}

/// GET /orders/{id}
async fn get_order(
    State(state): State<AppState>,
    Path(order_id): Path<Uuid>,
) -> Result<Json<Order>, AppError> {
    let order = fetch_order(&state, order_id).await?;
    Ok(Json(order))
}

/// PUT /orders/{id}/items
/// Replace the line-item set wholesale. Only legal while the order is Open;
/// the new lines are re-priced against the order's existing vehicle.
async fn replace_items(
    State(state): State<AppState>,
    Path(order_id): Path<Uuid>,
    Json(req): Json<ReplaceItemsRequest>,
) -> Result<Json<Order>, AppError> {
    if req.items.is_empty() {
        return Err(AppError::Validation(
            "an order needs at least one item".to_string(),
        ));
    }

    let _guard = state.order_locks.lock(order_id).await;

    let mut order = fetch_order(&state, order_id).await?;
    order.ensure_open("replace items").map_err(order_error)?;

    let vehicle = resolve_vehicle(&state, &order.vehicle_plate).await?;
    let pricing = price_lines(&state, &vehicle, &req.items, req.payment_method).await?;

    order
        .replace_items(req.payment_method, pricing)
        .map_err(order_error)?;
    state
        .orders
        .save_order(&order)
        .await
        .map_err(AppError::internal)?;

    Ok(Json(order))
}

/// POST /orders/{id}/payment
/// Confirm payment: Open -> Paid. Amounts are not recomputed.
async fn confirm_payment(
    State(state): State<AppState>,
    Path(order_id): Path<Uuid>,
    Json(req): Json<ConfirmPaymentRequest>,
) -> Result<Json<Order>, AppError> {
    let _guard = state.order_locks.lock(order_id).await;

    let mut order = fetch_order(&state, order_id).await?;
    order
        .confirm_payment(req.payment_method)
        .map_err(order_error)?;
    state
        .orders
        .save_order(&order)
        .await
        .map_err(AppError::internal)?;

    tracing::info!("Order {} paid via {}", order.id, order.payment_method.token());
    Ok(Json(order))
}

/// PUT /orders/{id}/status
/// Explicit status write, guarded by the same transition rules.
async fn set_status(
    State(state): State<AppState>,
    Path(order_id): Path<Uuid>,
    Json(req): Json<SetStatusRequest>,
) -> Result<Json<Order>, AppError> {
    let _guard = state.order_locks.lock(order_id).await;

    let mut order = fetch_order(&state, order_id).await?;
    order.transition_to(req.status).map_err(order_error)?;
    state
        .orders
        .save_order(&order)
        .await
        .map_err(AppError::internal)?;

    Ok(Json(order))
}

/// POST /orders/{id}/cancel
/// Logical cancellation. The order is retained with status CANCELLED.
async fn cancel_order(
    State(state): State<AppState>,
    Path(order_id): Path<Uuid>,
) -> Result<Json<Order>, AppError> {
    let _guard = state.order_locks.lock(order_id).await;

    let mut order = fetch_order(&state, order_id).await?;
    order.cancel().map_err(order_error)?;
    state
        .orders
        .save_order(&order)
        .await
        .map_err(AppError::internal)?;

    Ok(Json(order))
}

/// DELETE /orders/{id}
/// Hard delete of the order and its items, regardless of status.
async fn delete_order(
    State(state): State<AppState>,
    Path(order_id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    let removed = {
        let _guard = state.order_locks.lock(order_id).await;
        state
            .orders
            .delete_order(order_id)
            .await
            .map_err(AppError::internal)?
    };

    if !removed {
        return Err(AppError::NotFound(format!("order {order_id} not found")));
    }

    state.order_locks.remove(order_id);
    Ok(StatusCode::NO_CONTENT)
}

// ============================================================================
// Helpers
// ============================================================================

async fn fetch_order(state: &AppState, order_id: Uuid) -> Result<Order, AppError> {
    state
        .orders
        .get_order(order_id)
        .await
        .map_err(AppError::internal)?
        .ok_or(OrderError::NotFound(order_id))
        .map_err(order_error)
}

async fn resolve_vehicle(state: &AppState, plate: &str) -> Result<Vehicle, AppError> {
    state
        .vehicles
        .get(plate)
        .await
        .map_err(AppError::internal)?
        .ok_or_else(|| AppError::Validation(format!("vehicle {plate} not found")))
}

/// Load a catalog snapshot and price the requested lines atomically: any
/// unknown service fails the whole request before anything is written.
async fn price_lines(
    state: &AppState,
    vehicle: &Vehicle,
    items: &[OrderItemRequest],
    payment_method: PaymentMethod,
) -> Result<PricingResult, AppError> {
    let index = ServiceIndex::new(state.services.list().await.map_err(AppError::internal)?);
    let requests: Vec<LineRequest> = items
        .iter()
        .map(|item| LineRequest {
            service_id: item.service_id,
            quantity: item.quantity,
        })
        .collect();

    PricingEngine::price(vehicle.vehicle_type, &requests, payment_method, &index)
        .map_err(catalog_error)
}
