//! Player handler implementations

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    middleware::auth::CurrentUser,
    models::Player,
    services::{PlayerService, player_service::NewPlayer},
    state::AppState,
    utils::validation::{sanitize_string, validate_player_name},
};

use super::{
    request::NewPlayerRequest,
    response::{DeleteResponse, PlayersListResponse},
};

/// List the current user's opponents
pub async fn list_players(
    State(state): State<AppState>,
    current: CurrentUser,
) -> Json<PlayersListResponse> {
    let store = state.store().read().await;
    let players = PlayerService::list(&store, &current.0);
    let total = players.len();

    Json(PlayersListResponse { players, total })
}

/// Add an opponent to the current user's roster
pub async fn add_player(
    State(state): State<AppState>,
    current: CurrentUser,
    Json(payload): Json<NewPlayerRequest>,
) -> AppResult<(StatusCode, Json<Player>)> {
    payload.validate()?;
    let name = sanitize_string(&payload.name);
    validate_player_name(&name).map_err(|e| AppError::Validation(e.to_string()))?;

    let new = NewPlayer {
        name,
        rating: payload.rating,
        avatar_color: payload.avatar_color,
        play_style: payload.play_style,
        description: payload.description.map(|d| sanitize_string(&d)),
    };

    let mut store = state.store().write().await;
    let player = PlayerService::add(&mut store, &current.0, new, state.config().rating.baseline);
    state.persist(&store);

    Ok((StatusCode::CREATED, Json(player)))
}

/// Delete an opponent from the roster
pub async fn delete_player(
    State(state): State<AppState>,
    current: CurrentUser,
    Path(id): Path<i64>,
) -> AppResult<Json<DeleteResponse>> {
    let mut store = state.store().write().await;
    PlayerService::delete(&mut store, &current.0, id)?;
    state.persist(&store);

    Ok(Json(DeleteResponse {
        message: "Player deleted".to_string(),
    }))
}

/// Toggle an opponent's certified badge (admin only)
pub async fn toggle_certify(
    State(state): State<AppState>,
    current: CurrentUser,
    Path(id): Path<i64>,
) -> AppResult<Json<Player>> {
    let mut store = state.store().write().await;
    let player = PlayerService::toggle_certify(&mut store, &current.0, id)?;
    state.persist(&store);

    Ok(Json(player))
}
