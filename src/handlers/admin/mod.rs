//! Administration handlers

mod handler;
pub mod response;

pub use handler::*;
pub use response::*;

use axum::{
    Router,
    routing::{delete, get, post},
};

use crate::state::AppState;

/// Admin routes (role is enforced per-operation in the services)
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/users", get(handler::list_users))
        .route("/users/{id}", delete(handler::delete_user))
        .route("/users/{id}/approve", post(handler::approve_user))
        .route("/users/{id}/block", post(handler::toggle_block_user))
}
