//! Game session model and score reconciliation

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Result of one game, from the logged-in user's perspective
///
/// `None` is a placeholder for a not-yet-filled-in game; it is filtered out
/// before a session is persisted and never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchResult {
    Win,
    Loss,
    Draw,
    None,
}

/// Kind of game played in a session
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameType {
    #[default]
    Chess,
    Rapid,
    Blitz,
}

/// One individual game within a session
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Match {
    /// 1-based position within the session; renumbered when placeholders
    /// are dropped
    pub number: u32,
    pub result: MatchResult,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accuracy: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimated_rating: Option<i32>,
}

/// One recorded encounter against one opponent, on one date
///
/// Immutable once created, except for deletion. `opponent_name` is a
/// denormalized snapshot so the session stays renderable after the opponent
/// profile is deleted.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub id: i64,
    #[serde(default)]
    pub user_id: i64,
    pub opponent_id: i64,
    pub opponent_name: String,
    pub game_type: GameType,
    pub time_control: String,
    pub user_score: f64,
    pub opponent_score: f64,
    pub wins: u32,
    pub draws: u32,
    pub losses: u32,
    pub date: DateTime<Utc>,
    pub matches: Vec<Match>,
}

impl Session {
    /// Assemble a session from reconciled totals
    pub fn build(
        id: i64,
        user_id: i64,
        opponent_id: i64,
        opponent_name: String,
        game_type: GameType,
        time_control: String,
        date: DateTime<Utc>,
        totals: SessionTotals,
    ) -> Self {
        Self {
            id,
            user_id,
            opponent_id,
            opponent_name,
            game_type,
            time_control,
            user_score: totals.user_score,
            opponent_score: totals.opponent_score,
            wins: totals.wins,
            draws: totals.draws,
            losses: totals.losses,
            date,
            matches: totals.matches,
        }
    }
}

/// Aggregates computed from an ordered match list
///
/// The invariants `user_score == wins + 0.5 * draws` and
/// `opponent_score == losses + 0.5 * draws` hold by construction.
#[derive(Debug, Clone)]
pub struct SessionTotals {
    pub user_score: f64,
    pub opponent_score: f64,
    pub wins: u32,
    pub draws: u32,
    pub losses: u32,
    pub matches: Vec<Match>,
}

impl SessionTotals {
    /// Reconcile an ordered list of match entries into session aggregates.
    ///
    /// Placeholder entries (`result == none`) are dropped and the remaining
    /// matches renumbered 1..k in their original relative order. Returns
    /// `None` when no real result is present; such a session must not be
    /// persisted.
    pub fn tally(matches: Vec<Match>) -> Option<Self> {
        let mut retained: Vec<Match> = matches
            .into_iter()
            .filter(|m| m.result != MatchResult::None)
            .collect();
        if retained.is_empty() {
            return None;
        }

        for (i, m) in retained.iter_mut().enumerate() {
            m.number = i as u32 + 1;
        }

        let mut totals = Self {
            user_score: 0.0,
            opponent_score: 0.0,
            wins: 0,
            draws: 0,
            losses: 0,
            matches: Vec::new(),
        };

        for m in &retained {
            match m.result {
                MatchResult::Win => {
                    totals.user_score += 1.0;
                    totals.wins += 1;
                }
                MatchResult::Draw => {
                    totals.user_score += 0.5;
                    totals.opponent_score += 0.5;
                    totals.draws += 1;
                }
                MatchResult::Loss => {
                    totals.opponent_score += 1.0;
                    totals.losses += 1;
                }
                MatchResult::None => unreachable!("placeholders filtered above"),
            }
        }

        totals.matches = retained;
        Some(totals)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(result: MatchResult) -> Match {
        Match {
            number: 0,
            result,
            accuracy: None,
            estimated_rating: None,
        }
    }

    #[test]
    fn tally_computes_scores_and_counts() {
        let totals = SessionTotals::tally(vec![
            entry(MatchResult::Win),
            entry(MatchResult::Win),
            entry(MatchResult::Loss),
        ])
        .unwrap();

        assert_eq!(totals.user_score, 2.0);
        assert_eq!(totals.opponent_score, 1.0);
        assert_eq!(totals.wins, 2);
        assert_eq!(totals.losses, 1);
        assert_eq!(totals.draws, 0);
    }

    #[test]
    fn tally_splits_draws() {
        let totals = SessionTotals::tally(vec![
            entry(MatchResult::Draw),
            entry(MatchResult::Win),
            entry(MatchResult::Draw),
        ])
        .unwrap();

        assert_eq!(totals.user_score, 2.0);
        assert_eq!(totals.opponent_score, 1.0);
        assert_eq!(totals.wins, 1);
        assert_eq!(totals.draws, 2);
        assert_eq!(totals.user_score, totals.wins as f64 + 0.5 * totals.draws as f64);
        assert_eq!(
            totals.opponent_score,
            totals.losses as f64 + 0.5 * totals.draws as f64
        );
    }

    #[test]
    fn tally_drops_placeholders_and_renumbers() {
        let totals = SessionTotals::tally(vec![
            entry(MatchResult::None),
            entry(MatchResult::Win),
            entry(MatchResult::None),
            entry(MatchResult::Loss),
        ])
        .unwrap();

        assert_eq!(totals.matches.len(), 2);
        assert_eq!(totals.matches[0].number, 1);
        assert_eq!(totals.matches[0].result, MatchResult::Win);
        assert_eq!(totals.matches[1].number, 2);
        assert_eq!(totals.matches[1].result, MatchResult::Loss);
        assert_eq!(
            totals.matches.len() as u32,
            totals.wins + totals.draws + totals.losses
        );
    }

    #[test]
    fn tally_rejects_all_placeholders() {
        assert!(SessionTotals::tally(vec![entry(MatchResult::None)]).is_none());
        assert!(SessionTotals::tally(Vec::new()).is_none());
    }

    #[test]
    fn match_result_wire_format() {
        assert_eq!(serde_json::to_string(&MatchResult::Win).unwrap(), "\"win\"");
        assert_eq!(serde_json::to_string(&MatchResult::None).unwrap(), "\"none\"");
        assert_eq!(serde_json::to_string(&GameType::Blitz).unwrap(), "\"blitz\"");
    }
}
