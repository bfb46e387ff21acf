//! Backup export/import service

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{
    constants::EXPORT_FORMAT_VERSION,
    error::{AppError, AppResult},
    models::{Player, Session, Settings, User},
    store::Store,
};

/// Exported backup document
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BackupFile {
    pub users: Vec<User>,
    pub players: Vec<Player>,
    pub sessions: Vec<Session>,
    pub settings: Settings,
    pub version: String,
    pub export_date: DateTime<Utc>,
}

/// Backup export/import service
pub struct BackupService;

impl BackupService {
    /// Build an export document for the actor.
    ///
    /// An admin exports every collection; a regular user exports only their
    /// own account and owned data. Settings are global either way.
    pub fn export(store: &Store, actor: &User) -> BackupFile {
        let (users, players, sessions) = if actor.is_admin() {
            (
                store.users.clone(),
                store.players.clone(),
                store.sessions.clone(),
            )
        } else {
            (
                vec![actor.clone()],
                store.players_of(actor.id),
                store.sessions_of(actor.id),
            )
        };

        BackupFile {
            users,
            players,
            sessions,
            settings: store.settings.clone(),
            version: EXPORT_FORMAT_VERSION.to_string(),
            export_date: Utc::now(),
        }
    }

    /// Import a backup document, merging it into the store.
    ///
    /// Merge rules per recognized key:
    /// - `users`: wholesale replacement, admins only; silently skipped for
    ///   everyone else.
    /// - `players` / `sessions`: ownerless records are stamped with the
    ///   actor's id, then the actor's previously-owned records of that kind
    ///   are replaced by the imported ones. Other owners' records are never
    ///   touched.
    /// - `settings`: wholesale replacement of the global settings.
    ///
    /// Unrecognized keys are ignored. A body that is not a JSON object
    /// aborts before anything is applied. Keys are applied one at a time:
    /// a malformed value aborts at its key, leaving earlier keys applied.
    pub fn import(store: &mut Store, actor: &User, raw: &str) -> AppResult<()> {
        let value: Value =
            serde_json::from_str(raw).map_err(|e| AppError::ImportParse(e.to_string()))?;
        let object = value
            .as_object()
            .ok_or_else(|| AppError::ImportParse("expected a JSON object".to_string()))?;

        if actor.is_admin() {
            if let Some(users) = object.get("users") {
                let users: Vec<User> = serde_json::from_value(users.clone())
                    .map_err(|e| AppError::ImportParse(format!("users: {e}")))?;
                store.users = users;
            }
        }

        if let Some(players) = object.get("players") {
            let mut players: Vec<Player> = serde_json::from_value(players.clone())
                .map_err(|e| AppError::ImportParse(format!("players: {e}")))?;
            for player in players.iter_mut().filter(|p| p.user_id == 0) {
                player.user_id = actor.id;
            }
            store.players.retain(|p| p.user_id != actor.id);
            store.players.extend(players);
        }

        if let Some(sessions) = object.get("sessions") {
            let mut sessions: Vec<Session> = serde_json::from_value(sessions.clone())
                .map_err(|e| AppError::ImportParse(format!("sessions: {e}")))?;
            for session in sessions.iter_mut().filter(|s| s.user_id == 0) {
                session.user_id = actor.id;
            }
            store.sessions.retain(|s| s.user_id != actor.id);
            store.sessions.extend(sessions);
        }

        if let Some(settings) = object.get("settings") {
            store.settings = serde_json::from_value(settings.clone())
                .map_err(|e| AppError::ImportParse(format!("settings: {e}")))?;
        }

        tracing::info!(user_id = actor.id, "Imported backup");
        Ok(())
    }
}
