//! Opponent profile model

use serde::{Deserialize, Serialize};

use crate::models::session::Session;

fn default_avatar_color() -> String {
    "blue".to_string()
}

fn default_play_style() -> String {
    "Polyvalent".to_string()
}

/// Opponent profile tracked by an account (not a login account)
///
/// `user_id` is the owning account. Legacy records carry no owner on disk;
/// they deserialize to the sentinel 0 and are migrated on load or import.
/// The aggregate stats (`games`/`wins`/`losses`/`draws`/`rating`) only change
/// through [`Player::absorb`], never by direct edit.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    pub id: i64,
    #[serde(default)]
    pub user_id: i64,
    pub name: String,
    pub rating: i32,
    #[serde(default)]
    pub games: u32,
    #[serde(default)]
    pub wins: u32,
    #[serde(default)]
    pub losses: u32,
    #[serde(default)]
    pub draws: u32,
    #[serde(default)]
    pub certified: bool,
    #[serde(default = "default_avatar_color")]
    pub avatar_color: String,
    #[serde(default = "default_play_style")]
    pub play_style: String,
    #[serde(default)]
    pub description: String,
}

impl Player {
    /// Fold a recorded session into this player's lifetime record.
    ///
    /// Results invert across the board: the logged-in user's win is this
    /// opponent's loss and vice versa. The rating moves `step` points per
    /// decisive game, a fixed heuristic independent of any rating gap.
    ///
    /// This is a forward-only accumulator: deleting the session later does
    /// not reverse the fold, and the stats are never recomputed from the
    /// session history.
    pub fn absorb(&mut self, session: &Session, step: i32) {
        self.games += session.matches.len() as u32;
        self.wins += session.losses;
        self.losses += session.wins;
        self.draws += session.draws;
        self.rating += step * session.losses as i32 - step * session.wins as i32;
    }
}
