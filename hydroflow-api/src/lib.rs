use axum::{http::Method, Router};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub mod auth;
pub mod cash;
pub mod clients;
pub mod error;
pub mod middleware;
pub mod orders;
pub mod services;
pub mod state;
pub mod vehicles;

pub use state::AppState;

pub fn app(state: AppState) -> Router {
    // CORS Middleware
    let cors = CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([
            axum::http::header::AUTHORIZATION,
            axum::http::header::CONTENT_TYPE,
        ]);

    // Everything except login requires an attendant token.
    let protected = Router::new()
        .merge(clients::routes())
        .merge(vehicles::routes())
        .merge(services::routes())
        .merge(orders::routes())
        .merge(cash::routes())
        .layer(axum::middleware::from_fn_with_state(
            state.clone(),
            middleware::auth::attendant_auth_middleware,
        ));

    Router::new()
        .merge(auth::routes())
        .merge(protected)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
