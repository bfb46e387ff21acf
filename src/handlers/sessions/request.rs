//! Session request DTOs

use serde::Deserialize;
use validator::Validate;

use crate::constants::MAX_ACCURACY;
use crate::models::{GameType, Match, MatchResult};

/// One match entry as submitted by the client.
///
/// Numbering is assigned server-side during reconciliation, so entries only
/// carry the result and the optional per-game metrics.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct MatchEntry {
    pub result: MatchResult,

    #[validate(range(min = 0.0, max = MAX_ACCURACY))]
    pub accuracy: Option<f64>,

    #[validate(range(min = 0, max = 4000))]
    pub estimated_rating: Option<i32>,
}

impl From<MatchEntry> for Match {
    fn from(entry: MatchEntry) -> Self {
        Match {
            number: 0,
            result: entry.result,
            accuracy: entry.accuracy,
            estimated_rating: entry.estimated_rating,
        }
    }
}

/// New session request
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewSessionRequest {
    pub opponent_id: i64,

    #[serde(default)]
    pub game_type: GameType,

    #[validate(length(min = 1, max = 32))]
    pub time_control: String,

    /// The size cap and the at-least-one-played-game rule are enforced
    /// during reconciliation
    #[validate(nested)]
    pub matches: Vec<MatchEntry>,
}
