//! User account model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Account role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    User,
}

/// Login account
///
/// Serialized in camelCase with the role under the legacy `type` key, so
/// existing snapshots and export files keep deserializing unchanged.
/// The password is stored and compared in the clear; hardening it is an
/// explicit non-goal of this application.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i64,
    pub username: String,
    pub password: String,
    #[serde(rename = "type")]
    pub role: Role,
    pub approved: bool,
    pub blocked: bool,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Check if user has admin privileges
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}
