//! Application settings model

use serde::{Deserialize, Serialize};

/// Global UI settings singleton
///
/// Mutated by toggles, never deleted; an admin full-reset restores the
/// defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    pub dark_mode: bool,
    pub notifications: bool,
    pub auto_logout: bool,
    pub sound_effects: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            dark_mode: false,
            notifications: true,
            auto_logout: true,
            sound_effects: true,
        }
    }
}
