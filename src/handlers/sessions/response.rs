//! Session response DTOs

use serde::Serialize;

use crate::models::Session;

/// Session list response
#[derive(Debug, Serialize)]
pub struct SessionsListResponse {
    pub sessions: Vec<Session>,
    pub total: usize,
}

/// Deletion acknowledgement
#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub message: String,
}
