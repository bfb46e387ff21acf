//! Session handler implementations

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use validator::Validate;

use crate::{
    error::AppResult,
    middleware::auth::CurrentUser,
    models::Session,
    services::{SessionService, session_service::NewSession},
    state::AppState,
};

use super::{
    request::NewSessionRequest,
    response::{DeleteResponse, SessionsListResponse},
};

/// List the current user's sessions
pub async fn list_sessions(
    State(state): State<AppState>,
    current: CurrentUser,
) -> Json<SessionsListResponse> {
    let store = state.store().read().await;
    let sessions = SessionService::list(&store, &current.0);
    let total = sessions.len();

    Json(SessionsListResponse { sessions, total })
}

/// Record a new session against one of the current user's opponents
pub async fn record_session(
    State(state): State<AppState>,
    current: CurrentUser,
    Json(payload): Json<NewSessionRequest>,
) -> AppResult<(StatusCode, Json<Session>)> {
    payload.validate()?;

    let new = NewSession {
        opponent_id: payload.opponent_id,
        game_type: payload.game_type,
        time_control: payload.time_control,
        matches: payload.matches.into_iter().map(Into::into).collect(),
    };

    let mut store = state.store().write().await;
    let session =
        SessionService::record(&mut store, &current.0, new, state.config().rating.step)?;
    state.persist(&store);

    Ok((StatusCode::CREATED, Json(session)))
}

/// Delete a recorded session (opponent stats are not rolled back)
pub async fn delete_session(
    State(state): State<AppState>,
    current: CurrentUser,
    Path(id): Path<i64>,
) -> AppResult<Json<DeleteResponse>> {
    let mut store = state.store().write().await;
    SessionService::delete(&mut store, &current.0, id)?;
    state.persist(&store);

    Ok(Json(DeleteResponse {
        message: "Session deleted".to_string(),
    }))
}
