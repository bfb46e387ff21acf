//! Player response DTOs

use serde::Serialize;

use crate::models::Player;

/// Player list response
#[derive(Debug, Serialize)]
pub struct PlayersListResponse {
    pub players: Vec<Player>,
    pub total: usize,
}

/// Deletion acknowledgement
#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub message: String,
}
