use std::str::FromStr;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use hydroflow_api::app;
use hydroflow_api::state::{AppState, AuthConfig};
use hydroflow_store::DbClient;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde_json::{json, Value};
use tower::ServiceExt;

async fn test_app() -> Router {
    let db = DbClient::new("sqlite::memory:").await.unwrap();
    db.init_schema().await.unwrap();

    let state = AppState::new(
        &db,
        AuthConfig {
            secret: "test-secret".to_string(),
            expiration: 3600,
        },
    );
    hydroflow_api::auth::seed_admin(&state, "00000000000", "admin", "123456")
        .await
        .unwrap();

    app(state)
}

async fn send(
    app: &Router,
    method: &str,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

fn money(value: &Value, key: &str) -> Decimal {
    Decimal::from_str(value[key].as_str().unwrap()).unwrap()
}

async fn login(app: &Router) -> String {
    let (status, body) = send(
        app,
        "POST",
        "/auth/login",
        None,
        Some(json!({ "cpf": "00000000000", "password": "123456" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    body["token"].as_str().unwrap().to_string()
}

/// Register a service, a client and a motorcycle, returning the service id.
async fn seed_catalog(app: &Router, token: &str) -> i64 {
    let (status, service) = send(
        app,
        "POST",
        "/services",
        Some(token),
        Some(json!({
            "name": "Full Wash",
            "price_motorcycle": "15.00",
            "price_car_small": "25.00",
            "price_car_large": "35.00",
            "duration_minutes": 40
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let service_id = service["id"].as_i64().unwrap();

    let (status, _) = send(
        app,
        "POST",
        "/clients",
        Some(token),
        Some(json!({ "document": "12345678900", "name": "Ana" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, _) = send(
        app,
        "POST",
        "/vehicles",
        Some(token),
        Some(json!({
            "plate": "ABC1D23",
            "vehicle_type": "MOTORCYCLE",
            "client_document": "12345678900"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    service_id
}

#[tokio::test]
async fn full_order_flow() {
    let app = test_app().await;
    let token = login(&app).await;
    let service_id = seed_catalog(&app, &token).await;

    // Create: 3x Full Wash on a motorcycle, paid in cash.
    let (status, order) = send(
        &app,
        "POST",
        "/orders",
        Some(&token),
        Some(json!({
            "vehicle_plate": "ABC1D23",
            "attendant_cpf": "00000000000",
            "items": [{ "service_id": service_id, "quantity": 3 }],
            "payment_method": "CASH"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(order["status"], "OPEN");
    assert_eq!(money(&order, "subtotal"), dec!(45.00));
    assert_eq!(money(&order, "discount"), dec!(4.50));
    assert_eq!(money(&order, "total"), dec!(40.50));
    let order_id = order["id"].as_str().unwrap().to_string();

    // The order reads back with its captured unit price.
    let (status, fetched) = send(&app, "GET", &format!("/orders/{order_id}"), Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched["items"][0]["quantity"], 3);
    assert_eq!(
        Decimal::from_str(fetched["items"][0]["unit_price"].as_str().unwrap()).unwrap(),
        dec!(15.00)
    );

    // Confirm payment: Open -> Paid, amounts untouched.
    let (status, paid) = send(
        &app,
        "POST",
        &format!("/orders/{order_id}/payment"),
        Some(&token),
        Some(json!({ "payment_method": "CASH" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(paid["status"], "PAID");
    assert_eq!(money(&paid, "total"), dec!(40.50));

    // Edits after payment are rejected and change nothing.
    let (status, _) = send(
        &app,
        "PUT",
        &format!("/orders/{order_id}/items"),
        Some(&token),
        Some(json!({
            "items": [{ "service_id": service_id, "quantity": 1 }],
            "payment_method": "PIX"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (_, unchanged) = send(&app, "GET", &format!("/orders/{order_id}"), Some(&token), None).await;
    assert_eq!(money(&unchanged, "subtotal"), dec!(45.00));
    assert_eq!(unchanged["items"][0]["quantity"], 3);

    // The register sees the day's revenue.
    let (status, summary) = send(&app, "GET", "/cash/summary", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(summary["total_orders"], 1);
    assert_eq!(money(&summary, "total_revenue"), dec!(40.50));
    assert_eq!(money(&summary, "total_discounts"), dec!(4.50));
    assert_eq!(summary["by_payment_method"][0]["payment_method"], "CASH");
    assert_eq!(summary["by_service"][0]["quantity"], 3);
}

#[tokio::test]
async fn replace_items_reprices_and_reapplies_the_discount_rule() {
    let app = test_app().await;
    let token = login(&app).await;
    let service_id = seed_catalog(&app, &token).await;

    let (_, order) = send(
        &app,
        "POST",
        "/orders",
        Some(&token),
        Some(json!({
            "vehicle_plate": "ABC1D23",
            "items": [{ "service_id": service_id, "quantity": 1 }],
            "payment_method": "CASH"
        })),
    )
    .await;
    let order_id = order["id"].as_str().unwrap().to_string();
    assert_eq!(money(&order, "discount"), dec!(1.50));

    // Switching to Pix drops the discount along with the new pricing.
    let (status, updated) = send(
        &app,
        "PUT",
        &format!("/orders/{order_id}/items"),
        Some(&token),
        Some(json!({
            "items": [{ "service_id": service_id, "quantity": 2 }],
            "payment_method": "PIX"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(money(&updated, "subtotal"), dec!(30.00));
    assert_eq!(money(&updated, "discount"), dec!(0.00));
    assert_eq!(money(&updated, "total"), dec!(30.00));
}

#[tokio::test]
async fn unknown_references_fail_without_persisting_anything() {
    let app = test_app().await;
    let token = login(&app).await;
    let service_id = seed_catalog(&app, &token).await;

    // Unknown vehicle.
    let (status, _) = send(
        &app,
        "POST",
        "/orders",
        Some(&token),
        Some(json!({
            "vehicle_plate": "ZZZ9Z99",
            "items": [{ "service_id": service_id, "quantity": 1 }],
            "payment_method": "PIX"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    // Unknown service: the whole order is rejected, not partially priced.
    let (status, _) = send(
        &app,
        "POST",
        "/orders",
        Some(&token),
        Some(json!({
            "vehicle_plate": "ABC1D23",
            "items": [
                { "service_id": service_id, "quantity": 1 },
                { "service_id": 999, "quantity": 1 }
            ],
            "payment_method": "PIX"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (_, orders) = send(&app, "GET", "/orders", Some(&token), None).await;
    assert_eq!(orders.as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn status_writes_are_guarded_and_cancelled_orders_leave_the_register() {
    let app = test_app().await;
    let token = login(&app).await;
    let service_id = seed_catalog(&app, &token).await;

    let (_, order) = send(
        &app,
        "POST",
        "/orders",
        Some(&token),
        Some(json!({
            "vehicle_plate": "ABC1D23",
            "items": [{ "service_id": service_id, "quantity": 1 }],
            "payment_method": "CASH"
        })),
    )
    .await;
    let order_id = order["id"].as_str().unwrap().to_string();

    let (status, cancelled) = send(
        &app,
        "PUT",
        &format!("/orders/{order_id}/status"),
        Some(&token),
        Some(json!({ "status": "CANCELLED" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(cancelled["status"], "CANCELLED");

    // Terminal states cannot be left.
    let (status, _) = send(
        &app,
        "PUT",
        &format!("/orders/{order_id}/status"),
        Some(&token),
        Some(json!({ "status": "OPEN" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (_, summary) = send(&app, "GET", "/cash/summary", Some(&token), None).await;
    assert_eq!(summary["total_orders"], 0);
    assert_eq!(money(&summary, "total_revenue"), dec!(0));

    // Hard delete is a distinct operation and works on any status.
    let (status, _) = send(
        &app,
        "DELETE",
        &format!("/orders/{order_id}"),
        Some(&token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, _) = send(&app, "GET", &format!("/orders/{order_id}"), Some(&token), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn requests_without_a_token_are_rejected() {
    let app = test_app().await;

    let (status, _) = send(&app, "GET", "/orders", None, None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, _) = send(
        &app,
        "POST",
        "/auth/login",
        None,
        Some(json!({ "cpf": "00000000000", "password": "wrong" })),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}
