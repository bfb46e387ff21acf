//! Entity store
//!
//! The authoritative in-memory collections (users, players, sessions) plus
//! the settings singleton, persisted as one flat JSON snapshot. There is
//! exactly one logical writer; every mutation is followed by a synchronous
//! snapshot write.

use std::fs;
use std::path::Path;

use anyhow::Context;
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::config::AdminConfig;
use crate::constants::SEED_ADMIN_ID;
use crate::models::{Player, Role, Session, Settings, User};

/// On-disk form of the store: one document, four named sections
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Snapshot {
    pub users: Vec<User>,
    pub players: Vec<Player>,
    pub sessions: Vec<Session>,
    pub settings: Option<Settings>,
}

/// In-memory entity store
#[derive(Debug)]
pub struct Store {
    pub users: Vec<User>,
    pub players: Vec<Player>,
    pub sessions: Vec<Session>,
    pub settings: Settings,
}

impl Store {
    /// Build the seeded admin account (id 1, pre-approved, unblocked)
    pub fn seed_admin(admin: &AdminConfig) -> User {
        User {
            id: SEED_ADMIN_ID,
            username: admin.username.clone(),
            password: admin.password.clone(),
            role: Role::Admin,
            approved: true,
            blocked: false,
            created_at: Utc::now(),
        }
    }

    /// Fresh store containing only the seeded admin and default settings
    pub fn seeded(admin: &AdminConfig) -> Self {
        Self {
            users: vec![Self::seed_admin(admin)],
            players: Vec::new(),
            sessions: Vec::new(),
            settings: Settings::default(),
        }
    }

    /// Load the store from a snapshot file.
    ///
    /// A missing file yields a freshly seeded store. Legacy players and
    /// sessions without an owner are migrated to the seeded admin's id.
    pub fn load(path: &Path, admin: &AdminConfig) -> anyhow::Result<Self> {
        if !path.exists() {
            tracing::info!(path = %path.display(), "No snapshot found, seeding fresh store");
            return Ok(Self::seeded(admin));
        }

        let raw = fs::read_to_string(path)
            .with_context(|| format!("failed to read snapshot {}", path.display()))?;
        let snapshot: Snapshot = serde_json::from_str(&raw)
            .with_context(|| format!("failed to parse snapshot {}", path.display()))?;

        let mut store = Self {
            users: snapshot.users,
            players: snapshot.players,
            sessions: snapshot.sessions,
            settings: snapshot.settings.unwrap_or_default(),
        };

        if store.users.is_empty() {
            store.users.push(Self::seed_admin(admin));
        }
        store.migrate_owners(SEED_ADMIN_ID);

        tracing::info!(
            users = store.users.len(),
            players = store.players.len(),
            sessions = store.sessions.len(),
            "Loaded snapshot"
        );
        Ok(store)
    }

    /// Write the whole store to the snapshot file
    pub fn save(&self, path: &Path) -> anyhow::Result<()> {
        let snapshot = Snapshot {
            users: self.users.clone(),
            players: self.players.clone(),
            sessions: self.sessions.clone(),
            settings: Some(self.settings.clone()),
        };
        let raw = serde_json::to_string_pretty(&snapshot).context("failed to encode snapshot")?;
        fs::write(path, raw)
            .with_context(|| format!("failed to write snapshot {}", path.display()))?;
        Ok(())
    }

    /// Assign ownerless records (sentinel owner 0) to `owner_id`
    pub fn migrate_owners(&mut self, owner_id: i64) {
        for player in self.players.iter_mut().filter(|p| p.user_id == 0) {
            player.user_id = owner_id;
        }
        for session in self.sessions.iter_mut().filter(|s| s.user_id == 0) {
            session.user_id = owner_id;
        }
    }

    // -------------------------------------------------------------------------
    // Id allocation
    // -------------------------------------------------------------------------

    pub fn next_user_id(&self) -> i64 {
        self.users.iter().map(|u| u.id).max().unwrap_or(0) + 1
    }

    pub fn next_player_id(&self) -> i64 {
        self.players.iter().map(|p| p.id).max().unwrap_or(0) + 1
    }

    pub fn next_session_id(&self) -> i64 {
        self.sessions.iter().map(|s| s.id).max().unwrap_or(0) + 1
    }

    // -------------------------------------------------------------------------
    // Lookups
    // -------------------------------------------------------------------------

    pub fn user(&self, id: i64) -> Option<&User> {
        self.users.iter().find(|u| u.id == id)
    }

    pub fn user_mut(&mut self, id: i64) -> Option<&mut User> {
        self.users.iter_mut().find(|u| u.id == id)
    }

    pub fn user_by_username(&self, username: &str) -> Option<&User> {
        self.users.iter().find(|u| u.username == username)
    }

    pub fn player(&self, id: i64) -> Option<&Player> {
        self.players.iter().find(|p| p.id == id)
    }

    pub fn player_mut(&mut self, id: i64) -> Option<&mut Player> {
        self.players.iter_mut().find(|p| p.id == id)
    }

    pub fn session(&self, id: i64) -> Option<&Session> {
        self.sessions.iter().find(|s| s.id == id)
    }

    // -------------------------------------------------------------------------
    // Ownership / visibility filter
    // -------------------------------------------------------------------------

    /// Players owned by `user_id`, in insertion order
    pub fn players_of(&self, user_id: i64) -> Vec<Player> {
        self.players
            .iter()
            .filter(|p| p.user_id == user_id)
            .cloned()
            .collect()
    }

    /// Sessions owned by `user_id`, in insertion order
    pub fn sessions_of(&self, user_id: i64) -> Vec<Session> {
        self.sessions
            .iter()
            .filter(|s| s.user_id == user_id)
            .cloned()
            .collect()
    }

    /// Remove every player and session owned by `user_id`
    pub fn remove_owned_by(&mut self, user_id: i64) {
        self.players.retain(|p| p.user_id != user_id);
        self.sessions.retain(|s| s.user_id != user_id);
    }
}
