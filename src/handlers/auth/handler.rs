//! Authentication handler implementations

use axum::{Json, extract::State, http::StatusCode};
use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    middleware::auth::CurrentUser,
    services::AuthService,
    state::AppState,
    utils::validation::validate_username,
};

use super::{
    request::{LoginRequest, RegisterRequest},
    response::{AuthResponse, CurrentUserResponse, LogoutResponse, RegisterResponse, UserResponse},
};

/// Register a new user account (starts pending approval)
pub async fn register(
    State(state): State<AppState>,
    Json(payload): Json<RegisterRequest>,
) -> AppResult<(StatusCode, Json<RegisterResponse>)> {
    payload.validate()?;
    validate_username(&payload.username).map_err(|e| AppError::Validation(e.to_string()))?;

    let mut store = state.store().write().await;
    let user = AuthService::register(&mut store, &payload.username, &payload.password)?;
    state.persist(&store);

    let response = RegisterResponse {
        message: "Account created. It is now awaiting administrator approval.".to_string(),
        user: UserResponse::from(user),
    };

    Ok((StatusCode::CREATED, Json(response)))
}

/// Login with username and password, installing the active session
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> AppResult<Json<AuthResponse>> {
    payload.validate()?;

    let user = {
        let store = state.store().read().await;
        AuthService::authenticate(&store, &payload.username, &payload.password)?
    };

    *state.session().write().await = Some(user.id);
    tracing::info!(user_id = user.id, username = %user.username, "User logged in");

    Ok(Json(AuthResponse {
        user: UserResponse::from(user),
    }))
}

/// Logout, clearing the active session
pub async fn logout(State(state): State<AppState>) -> Json<LogoutResponse> {
    *state.session().write().await = None;

    Json(LogoutResponse {
        message: "Logged out".to_string(),
    })
}

/// Get the currently logged-in user
pub async fn get_current_user(current: CurrentUser) -> Json<CurrentUserResponse> {
    Json(CurrentUserResponse {
        user: UserResponse::from(current.0),
    })
}
