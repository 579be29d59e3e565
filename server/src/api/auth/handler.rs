//! Auth handlers
//!
//! Registration, login and the current-user probe. Passwords are argon2
//! hashed; sessions are stateless JWT bearer tokens.

use std::time::Duration;

use axum::{Extension, Json, extract::State, http::StatusCode};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::auth::CurrentUser;
use crate::core::ServerState;
use crate::db::models::{User, UserProfile};
use crate::db::repository::UserRepository;
use crate::utils::validation::validate_request;
use crate::utils::{AppError, AppResult};

/// Fixed delay on login to blunt timing attacks
const AUTH_FIXED_DELAY_MS: u64 = 500;

#[derive(Debug, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(length(min = 3, max = 100, message = "must be between 3 and 100 characters"))]
    pub username: String,
    #[validate(length(min = 8, max = 128, message = "must be between 8 and 128 characters"))]
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub token: String,
    pub user: UserProfile,
}

/// POST /api/auth/register
///
/// The first registered account becomes the admin - single-restaurant
/// deployments bootstrap themselves this way.
pub async fn register(
    State(state): State<ServerState>,
    Json(req): Json<RegisterRequest>,
) -> AppResult<(StatusCode, Json<AuthResponse>)> {
    validate_request(&req)?;

    let repo = UserRepository::new(state.get_db());
    let is_first_user = repo.count().await? == 0;

    let hash = User::hash_password(&req.password)
        .map_err(|e| AppError::internal(format!("Password hashing failed: {e}")))?;
    let user = repo.create(&req.username, &hash, is_first_user).await?;

    let user_id = user.id.as_ref().map(|id| id.to_string()).unwrap_or_default();
    let token = state
        .get_jwt_service()
        .generate_token(&user_id, &user.username, user.is_admin)
        .map_err(|e| AppError::internal(format!("Failed to generate token: {e}")))?;

    tracing::info!(username = %user.username, is_admin = user.is_admin, "User registered");

    Ok((
        StatusCode::CREATED,
        Json(AuthResponse {
            token,
            user: UserProfile::from(&user),
        }),
    ))
}

/// POST /api/auth/login
pub async fn login(
    State(state): State<ServerState>,
    Json(req): Json<LoginRequest>,
) -> AppResult<Json<AuthResponse>> {
    let repo = UserRepository::new(state.get_db());
    let user = repo.find_by_username(&req.username).await?;

    // Fixed delay before inspecting the result
    tokio::time::sleep(Duration::from_millis(AUTH_FIXED_DELAY_MS)).await;

    // Unified error so usernames cannot be enumerated
    let user = match user {
        Some(user) => {
            let password_valid = user
                .verify_password(&req.password)
                .map_err(|e| AppError::internal(format!("Password verification failed: {e}")))?;
            if !password_valid {
                tracing::warn!(username = %req.username, "Login failed - invalid credentials");
                return Err(AppError::invalid_credentials());
            }
            user
        }
        None => {
            tracing::warn!(username = %req.username, "Login failed - user not found");
            return Err(AppError::invalid_credentials());
        }
    };

    let user_id = user.id.as_ref().map(|id| id.to_string()).unwrap_or_default();
    let token = state
        .get_jwt_service()
        .generate_token(&user_id, &user.username, user.is_admin)
        .map_err(|e| AppError::internal(format!("Failed to generate token: {e}")))?;

    tracing::info!(user_id = %user_id, username = %user.username, "User logged in");

    Ok(Json(AuthResponse {
        token,
        user: UserProfile::from(&user),
    }))
}

/// GET /api/auth/me - fresh profile for the bearer of the token
pub async fn me(
    State(state): State<ServerState>,
    Extension(current): Extension<CurrentUser>,
) -> AppResult<Json<UserProfile>> {
    let repo = UserRepository::new(state.get_db());
    let user = repo
        .find_by_username(&current.username)
        .await?
        .ok_or_else(|| AppError::not_found(format!("User {} not found", current.username)))?;

    Ok(Json(UserProfile::from(&user)))
}
