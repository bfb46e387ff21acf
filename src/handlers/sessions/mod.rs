//! Game session handlers

mod handler;
pub mod request;
pub mod response;

pub use handler::*;
pub use request::*;
pub use response::*;

use axum::{
    Router,
    routing::{delete, get},
};

use crate::state::AppState;

/// Session routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handler::list_sessions).post(handler::record_session))
        .route("/{id}", delete(handler::delete_session))
}
