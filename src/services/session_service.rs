//! Session recording service

use chrono::Utc;

use crate::{
    constants::MAX_MATCHES_PER_SESSION,
    error::{AppError, AppResult},
    models::{GameType, Match, Session, SessionTotals, User},
    store::Store,
};

/// Parameters for recording a new session
#[derive(Debug)]
pub struct NewSession {
    pub opponent_id: i64,
    pub game_type: GameType,
    pub time_control: String,
    pub matches: Vec<Match>,
}

/// Session recording service
pub struct SessionService;

impl SessionService {
    /// List the actor's own sessions
    pub fn list(store: &Store, actor: &User) -> Vec<Session> {
        store.sessions_of(actor.id)
    }

    /// Record a session against one of the actor's opponents.
    ///
    /// Reconciles the match list into session aggregates, persists the
    /// session, and folds the result into the opponent's lifetime record
    /// (see [`crate::models::Player::absorb`]). Rejected sessions leave the
    /// store untouched.
    pub fn record(
        store: &mut Store,
        actor: &User,
        new: NewSession,
        rating_step: i32,
    ) -> AppResult<Session> {
        if new.matches.len() > MAX_MATCHES_PER_SESSION {
            return Err(AppError::InvalidInput(format!(
                "A session holds at most {MAX_MATCHES_PER_SESSION} matches"
            )));
        }

        // The opponent must be on the actor's own roster.
        let opponent = store
            .player(new.opponent_id)
            .filter(|p| p.user_id == actor.id)
            .ok_or_else(|| AppError::NotFound("Player not found".to_string()))?;
        let opponent_name = opponent.name.clone();

        let totals = SessionTotals::tally(new.matches).ok_or(AppError::EmptySession)?;

        let session = Session::build(
            store.next_session_id(),
            actor.id,
            new.opponent_id,
            opponent_name,
            new.game_type,
            new.time_control,
            Utc::now(),
            totals,
        );
        store.sessions.push(session.clone());

        // Lookup cannot fail: the opponent was resolved above and nothing
        // removed it since.
        if let Some(player) = store.player_mut(new.opponent_id) {
            player.absorb(&session, rating_step);
        }

        tracing::info!(
            session_id = session.id,
            opponent = session.opponent_id,
            games = session.matches.len(),
            "Recorded session"
        );
        Ok(session)
    }

    /// Delete a recorded session.
    ///
    /// The opponent's aggregate stats are a forward-only accumulator and are
    /// deliberately not rolled back.
    pub fn delete(store: &mut Store, actor: &User, id: i64) -> AppResult<()> {
        let session = store
            .session(id)
            .ok_or_else(|| AppError::NotFound("Session not found".to_string()))?;
        if session.user_id != actor.id && !actor.is_admin() {
            return Err(AppError::NotFound("Session not found".to_string()));
        }

        store.sessions.retain(|s| s.id != id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::config::AdminConfig;
    use crate::models::MatchResult;
    use crate::services::{AuthService, PlayerService, player_service::NewPlayer};

    use super::*;

    fn store() -> Store {
        Store::seeded(&AdminConfig {
            username: "admin".to_string(),
            password: "admin123".to_string(),
        })
    }

    fn approved_user(store: &mut Store, username: &str) -> User {
        let user = AuthService::register(store, username, "pw").unwrap();
        store.user_mut(user.id).unwrap().approved = true;
        store.user(user.id).unwrap().clone()
    }

    fn add_opponent(store: &mut Store, actor: &User, name: &str) -> i64 {
        PlayerService::add(
            store,
            actor,
            NewPlayer {
                name: name.to_string(),
                rating: None,
                avatar_color: None,
                play_style: None,
                description: None,
            },
            1200,
        )
        .id
    }

    fn matches(results: &[MatchResult]) -> Vec<Match> {
        results
            .iter()
            .map(|&result| Match {
                number: 0,
                result,
                accuracy: None,
                estimated_rating: None,
            })
            .collect()
    }

    fn new_session(opponent_id: i64, results: &[MatchResult]) -> NewSession {
        NewSession {
            opponent_id,
            game_type: GameType::Chess,
            time_control: "10min".to_string(),
            matches: matches(results),
        }
    }

    #[test]
    fn record_reconciles_and_updates_opponent() {
        let mut store = store();
        let alice = approved_user(&mut store, "alice");
        let bob = add_opponent(&mut store, &alice, "Bob");

        let session = SessionService::record(
            &mut store,
            &alice,
            new_session(bob, &[MatchResult::Win, MatchResult::Win, MatchResult::Loss]),
            5,
        )
        .unwrap();

        assert_eq!(session.user_score, 2.0);
        assert_eq!(session.opponent_score, 1.0);
        assert_eq!(session.wins, 2);
        assert_eq!(session.losses, 1);
        assert_eq!(session.draws, 0);
        assert_eq!(session.opponent_name, "Bob");

        let player = store.player(bob).unwrap();
        assert_eq!(player.games, 3);
        assert_eq!(player.wins, 1);
        assert_eq!(player.losses, 2);
        assert_eq!(player.rating, 1195);
    }

    #[test]
    fn record_rejects_session_without_played_games() {
        let mut store = store();
        let alice = approved_user(&mut store, "alice");
        let bob = add_opponent(&mut store, &alice, "Bob");

        let err = SessionService::record(
            &mut store,
            &alice,
            new_session(bob, &[MatchResult::None, MatchResult::None]),
            5,
        )
        .unwrap_err();

        assert!(matches!(err, AppError::EmptySession));
        assert!(store.sessions.is_empty());
        assert_eq!(store.player(bob).unwrap().games, 0);
    }

    #[test]
    fn record_rejects_foreign_opponent() {
        let mut store = store();
        let alice = approved_user(&mut store, "alice");
        let mallory = approved_user(&mut store, "mallory");
        let bob = add_opponent(&mut store, &alice, "Bob");

        let err = SessionService::record(
            &mut store,
            &mallory,
            new_session(bob, &[MatchResult::Win]),
            5,
        )
        .unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[test]
    fn record_rejects_oversized_match_list() {
        let mut store = store();
        let alice = approved_user(&mut store, "alice");
        let bob = add_opponent(&mut store, &alice, "Bob");

        let results = vec![MatchResult::Win; MAX_MATCHES_PER_SESSION + 1];
        let err = SessionService::record(&mut store, &alice, new_session(bob, &results), 5)
            .unwrap_err();
        assert!(matches!(err, AppError::InvalidInput(_)));
    }

    #[test]
    fn delete_keeps_opponent_stats() {
        let mut store = store();
        let alice = approved_user(&mut store, "alice");
        let bob = add_opponent(&mut store, &alice, "Bob");

        let session =
            SessionService::record(&mut store, &alice, new_session(bob, &[MatchResult::Win]), 5)
                .unwrap();
        SessionService::delete(&mut store, &alice, session.id).unwrap();

        assert!(store.sessions.is_empty());
        // Forward-only accumulator: the fold is not reversed.
        let player = store.player(bob).unwrap();
        assert_eq!(player.games, 1);
        assert_eq!(player.losses, 1);
        assert_eq!(player.rating, 1195);
    }

    #[test]
    fn session_survives_opponent_deletion() {
        let mut store = store();
        let alice = approved_user(&mut store, "alice");
        let bob = add_opponent(&mut store, &alice, "Bob");

        let session =
            SessionService::record(&mut store, &alice, new_session(bob, &[MatchResult::Win]), 5)
                .unwrap();
        PlayerService::delete(&mut store, &alice, bob).unwrap();

        let kept = store.session(session.id).unwrap();
        assert_eq!(kept.opponent_name, "Bob");
        assert_eq!(kept.opponent_id, bob);
        assert!(store.player(bob).is_none());
    }
}
