//! Backup handler implementations

use axum::{Json, extract::State};

use crate::{
    error::AppResult,
    middleware::auth::CurrentUser,
    services::{AdminService, BackupService, backup_service::BackupFile},
    state::AppState,
};

use super::response::{ImportResponse, ResetResponse};

/// Export a backup document.
///
/// Admins get the full snapshot; regular users get their own account and
/// owned data only.
pub async fn export_data(
    State(state): State<AppState>,
    current: CurrentUser,
) -> Json<BackupFile> {
    let store = state.store().read().await;
    Json(BackupService::export(&store, &current.0))
}

/// Import a backup document, merging it into the store.
///
/// The body is taken raw so a malformed file surfaces as an import error
/// rather than a generic request rejection.
pub async fn import_data(
    State(state): State<AppState>,
    current: CurrentUser,
    body: String,
) -> AppResult<Json<ImportResponse>> {
    let mut store = state.store().write().await;
    let result = BackupService::import(&mut store, &current.0, &body);
    // Import is field-at-a-time: earlier keys may have been applied even
    // when a later key fails, so the snapshot is written either way.
    state.persist(&store);
    result?;

    Ok(Json(ImportResponse {
        message: "Import successful".to_string(),
    }))
}

/// Reset data.
///
/// Admins reset everything back to the seeded state; regular users clear
/// only their own players and sessions.
pub async fn reset_data(
    State(state): State<AppState>,
    current: CurrentUser,
) -> Json<ResetResponse> {
    let mut store = state.store().write().await;
    AdminService::reset_data(&mut store, &current.0, &state.config().admin);
    state.persist(&store);

    Json(ResetResponse {
        message: "Data reset".to_string(),
    })
}
