//! Opponent roster handlers

mod handler;
pub mod request;
pub mod response;

pub use handler::*;
pub use request::*;
pub use response::*;

use axum::{
    Router,
    routing::{delete, get, post},
};

use crate::state::AppState;

/// Player routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handler::list_players).post(handler::add_player))
        .route("/{id}", delete(handler::delete_player))
        .route("/{id}/certify", post(handler::toggle_certify))
}
