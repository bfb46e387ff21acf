//! Application state management
//!
//! This module contains the shared application state that is passed
//! to all request handlers via Axum's State extractor.

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::config::Config;
use crate::store::Store;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

/// Inner state (wrapped in Arc for cheap cloning)
struct AppStateInner {
    /// The entity store; one logical writer at a time
    pub store: RwLock<Store>,

    /// The active login session (at most one at a time)
    pub session: RwLock<Option<i64>>,

    /// Application configuration
    pub config: Config,
}

impl AppState {
    /// Create a new application state
    pub fn new(store: Store, config: Config) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                store: RwLock::new(store),
                session: RwLock::new(None),
                config,
            }),
        }
    }

    /// Get a reference to the entity store lock
    pub fn store(&self) -> &RwLock<Store> {
        &self.inner.store
    }

    /// Get a reference to the active session lock
    pub fn session(&self) -> &RwLock<Option<i64>> {
        &self.inner.session
    }

    /// Get a reference to the configuration
    pub fn config(&self) -> &Config {
        &self.inner.config
    }

    /// Write the snapshot after a mutation.
    ///
    /// Fire-and-forget: a failed write is logged but does not fail the
    /// request; the in-memory store stays authoritative.
    pub fn persist(&self, store: &Store) {
        if let Err(e) = store.save(&self.inner.config.storage.data_path) {
            tracing::error!("Failed to persist snapshot: {:?}", e);
        }
    }
}
