//! Backup export/import handlers

mod handler;
pub mod response;

pub use handler::*;
pub use response::*;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// Backup routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/export", get(handler::export_data))
        .route("/import", post(handler::import_data))
        .route("/reset", post(handler::reset_data))
}
