//! Opponent roster service

use crate::{
    error::{AppError, AppResult},
    models::{Player, User},
    store::Store,
};

/// Parameters for adding an opponent to the roster
#[derive(Debug)]
pub struct NewPlayer {
    pub name: String,
    pub rating: Option<i32>,
    pub avatar_color: Option<String>,
    pub play_style: Option<String>,
    pub description: Option<String>,
}

/// Opponent roster service
pub struct PlayerService;

impl PlayerService {
    /// List the actor's own opponents
    pub fn list(store: &Store, actor: &User) -> Vec<Player> {
        store.players_of(actor.id)
    }

    /// Add an opponent to the actor's roster.
    ///
    /// Stats start at zero; the rating starts at the caller-supplied value
    /// or the configured baseline.
    pub fn add(store: &mut Store, actor: &User, new: NewPlayer, baseline: i32) -> Player {
        let player = Player {
            id: store.next_player_id(),
            user_id: actor.id,
            name: new.name,
            rating: new.rating.unwrap_or(baseline),
            games: 0,
            wins: 0,
            losses: 0,
            draws: 0,
            certified: false,
            avatar_color: new.avatar_color.unwrap_or_else(|| "blue".to_string()),
            play_style: new.play_style.unwrap_or_else(|| "Polyvalent".to_string()),
            description: new.description.unwrap_or_default(),
        };
        store.players.push(player.clone());

        tracing::info!(player_id = player.id, owner = actor.id, "Added opponent");
        player
    }

    /// Delete an opponent from the roster.
    ///
    /// Non-admins only see their own roster, so a foreign id is reported as
    /// not found rather than forbidden. Sessions against the opponent are
    /// kept; their `opponent_name` snapshot keeps them renderable.
    pub fn delete(store: &mut Store, actor: &User, id: i64) -> AppResult<()> {
        let player = store
            .player(id)
            .ok_or_else(|| AppError::NotFound("Player not found".to_string()))?;
        if player.user_id != actor.id && !actor.is_admin() {
            return Err(AppError::NotFound("Player not found".to_string()));
        }

        store.players.retain(|p| p.id != id);
        Ok(())
    }

    /// Toggle the certified badge on an opponent (admin only)
    pub fn toggle_certify(store: &mut Store, actor: &User, id: i64) -> AppResult<Player> {
        if !actor.is_admin() {
            return Err(AppError::NotAuthorized(
                "Only administrators can certify players".to_string(),
            ));
        }

        let player = store
            .player_mut(id)
            .ok_or_else(|| AppError::NotFound("Player not found".to_string()))?;
        player.certified = !player.certified;
        Ok(player.clone())
    }
}
