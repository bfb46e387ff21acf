//! Settings handlers
//!
//! The settings singleton is global: every account reads and writes the same
//! four toggles.

use axum::{Json, Router, extract::State, routing::get};

use crate::{middleware::auth::CurrentUser, models::Settings, state::AppState};

/// Get the global settings
async fn get_settings(State(state): State<AppState>, _current: CurrentUser) -> Json<Settings> {
    let store = state.store().read().await;
    Json(store.settings.clone())
}

/// Replace the global settings
async fn update_settings(
    State(state): State<AppState>,
    _current: CurrentUser,
    Json(payload): Json<Settings>,
) -> Json<Settings> {
    let mut store = state.store().write().await;
    store.settings = payload;
    state.persist(&store);

    Json(store.settings.clone())
}

/// Settings routes
pub fn routes() -> Router<AppState> {
    Router::new().route("/", get(get_settings).put(update_settings))
}
