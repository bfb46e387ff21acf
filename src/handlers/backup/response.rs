//! Backup response DTOs

use serde::Serialize;

/// Import acknowledgement
#[derive(Debug, Serialize)]
pub struct ImportResponse {
    pub message: String,
}

/// Reset acknowledgement
#[derive(Debug, Serialize)]
pub struct ResetResponse {
    pub message: String,
}
