use std::net::SocketAddr;

use hydroflow_api::{app, state::{AppState, AuthConfig}};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "hydroflow_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = hydroflow_store::app_config::Config::load().expect("Failed to load config");
    tracing::info!("Starting HydroFlow API on port {}", config.server.port);

    let db = hydroflow_store::DbClient::new(&config.database.url)
        .await
        .expect("Failed to open database");
    db.init_schema().await.expect("Failed to initialize schema");

    let state = AppState::new(
        &db,
        AuthConfig {
            secret: config.auth.jwt_secret.clone(),
            expiration: config.auth.jwt_expiration_seconds,
        },
    );

    hydroflow_api::auth::seed_admin(
        &state,
        &config.seed.admin_cpf,
        &config.seed.admin_name,
        &config.seed.admin_password,
    )
    .await
    .expect("Failed to seed bootstrap attendant");

    let app = app(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
