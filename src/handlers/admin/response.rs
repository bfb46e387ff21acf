//! Admin response DTOs

use serde::Serialize;

use crate::handlers::auth::response::UserResponse;

/// Account list response
#[derive(Debug, Serialize)]
pub struct AdminUsersListResponse {
    pub users: Vec<UserResponse>,
    pub total: usize,
}

/// Deletion acknowledgement
#[derive(Debug, Serialize)]
pub struct DeleteUserResponse {
    pub message: String,
}
