use axum::{extract::State, routing::post, Json, Router};
use chrono::{Duration, Utc};
use hydroflow_core::repository::RepoError;
use hydroflow_core::Attendant;
use jsonwebtoken::{encode, EncodingKey, Header};
use rand::RngCore;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::{error::AppError, middleware::auth::AttendantClaims, state::AppState};

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub cpf: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
struct AuthResponse {
    token: String,
}

pub fn routes() -> Router<AppState> {
    Router::new().route("/auth/login", post(login))
}

/// POST /auth/login
async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<AuthResponse>, AppError> {
    let attendant = state
        .attendants
        .get(&req.cpf)
        .await
        .map_err(AppError::internal)?
        .ok_or_else(|| AppError::Unauthorized("invalid credentials".to_string()))?;

    if !verify_password(&req.password, &attendant.password_hash, &attendant.password_salt) {
        return Err(AppError::Unauthorized("invalid credentials".to_string()));
    }

    let claims = AttendantClaims {
        sub: attendant.cpf.clone(),
        name: attendant.name.clone(),
        exp: (Utc::now() + Duration::seconds(state.auth.expiration as i64)).timestamp() as usize,
    };

    let token = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(state.auth.secret.as_bytes()),
    )?;

    Ok(Json(AuthResponse { token }))
}

pub fn generate_salt() -> Vec<u8> {
    let mut salt = vec![0u8; 16];
    rand::thread_rng().fill_bytes(&mut salt);
    salt
}

pub fn hash_password(password: &str, salt: &[u8]) -> Vec<u8> {
    let mut hasher = Sha256::new();
    hasher.update(salt);
    hasher.update(password.as_bytes());
    hasher.finalize().to_vec()
}

pub fn verify_password(password: &str, hash: &[u8], salt: &[u8]) -> bool {
    hash_password(password, salt) == hash
}

/// Create the bootstrap attendant while the table is empty, so a fresh
/// install can log in at all.
pub async fn seed_admin(
    state: &AppState,
    cpf: &str,
    name: &str,
    password: &str,
) -> Result<(), RepoError> {
    if state.attendants.count().await? > 0 {
        return Ok(());
    }

    let salt = generate_salt();
    let hash = hash_password(password, &salt);
    state
        .attendants
        .create(&Attendant {
            cpf: cpf.to_string(),
            name: name.to_string(),
            password_hash: hash,
            password_salt: salt,
        })
        .await?;

    tracing::info!("Seeded bootstrap attendant {}", cpf);
    Ok(())
}
