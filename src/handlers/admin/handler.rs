//! Admin handler implementations

use axum::{
    Json,
    extract::{Path, State},
};

use crate::{
    error::{AppError, AppResult},
    handlers::auth::response::UserResponse,
    middleware::auth::CurrentUser,
    services::AdminService,
    state::AppState,
};

use super::response::{AdminUsersListResponse, DeleteUserResponse};

/// List every account (admin only)
pub async fn list_users(
    State(state): State<AppState>,
    current: CurrentUser,
) -> AppResult<Json<AdminUsersListResponse>> {
    let store = state.store().read().await;
    let users = AdminService::list_users(&store, &current.0)?;
    let total = users.len();

    Ok(Json(AdminUsersListResponse {
        users: users.into_iter().map(UserResponse::from).collect(),
        total,
    }))
}

/// Approve a pending account (admin only)
pub async fn approve_user(
    State(state): State<AppState>,
    current: CurrentUser,
    Path(id): Path<i64>,
) -> AppResult<Json<UserResponse>> {
    let mut store = state.store().write().await;
    let user = AdminService::approve(&mut store, &current.0, id)?;
    state.persist(&store);

    Ok(Json(UserResponse::from(user)))
}

/// Flip an account's blocked flag (admin only)
pub async fn toggle_block_user(
    State(state): State<AppState>,
    current: CurrentUser,
    Path(id): Path<i64>,
) -> AppResult<Json<UserResponse>> {
    let mut store = state.store().write().await;
    let user = AdminService::toggle_block(&mut store, &current.0, id)?;
    state.persist(&store);

    Ok(Json(UserResponse::from(user)))
}

/// Delete an account and its owned data (admin only).
///
/// The currently-active account cannot delete itself; the guard sits here
/// at the caller boundary rather than in the service.
pub async fn delete_user(
    State(state): State<AppState>,
    current: CurrentUser,
    Path(id): Path<i64>,
) -> AppResult<Json<DeleteUserResponse>> {
    if id == current.0.id {
        return Err(AppError::NotAuthorized(
            "Cannot delete the account you are logged in with".to_string(),
        ));
    }

    let mut store = state.store().write().await;
    AdminService::delete_user(&mut store, &current.0, id)?;
    state.persist(&store);

    Ok(Json(DeleteUserResponse {
        message: "User and owned data deleted".to_string(),
    }))
}
