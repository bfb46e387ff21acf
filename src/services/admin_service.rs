//! Account administration service

use crate::{
    config::AdminConfig,
    error::{AppError, AppResult},
    models::{Settings, User},
    store::Store,
};

/// Account administration service
pub struct AdminService;

impl AdminService {
    fn require_admin(actor: &User) -> AppResult<()> {
        if actor.is_admin() {
            Ok(())
        } else {
            Err(AppError::NotAuthorized(
                "Administrator privileges required".to_string(),
            ))
        }
    }

    /// List every account (admin only)
    pub fn list_users(store: &Store, actor: &User) -> AppResult<Vec<User>> {
        Self::require_admin(actor)?;
        Ok(store.users.clone())
    }

    /// Approve a pending account (admin only).
    ///
    /// No-op if already approved; never unblocks.
    pub fn approve(store: &mut Store, actor: &User, id: i64) -> AppResult<User> {
        Self::require_admin(actor)?;
        let user = store
            .user_mut(id)
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;
        user.approved = true;
        Ok(user.clone())
    }

    /// Flip an account's blocked flag (admin only)
    pub fn toggle_block(store: &mut Store, actor: &User, id: i64) -> AppResult<User> {
        Self::require_admin(actor)?;
        let user = store
            .user_mut(id)
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;
        user.blocked = !user.blocked;
        Ok(user.clone())
    }

    /// Delete an account and cascade to its players and sessions (admin only).
    ///
    /// The guard against deleting the currently-active admin account lives
    /// at the handler boundary, not here.
    pub fn delete_user(store: &mut Store, actor: &User, id: i64) -> AppResult<()> {
        Self::require_admin(actor)?;
        if store.user(id).is_none() {
            return Err(AppError::NotFound("User not found".to_string()));
        }

        store.users.retain(|u| u.id != id);
        store.remove_owned_by(id);

        tracing::info!(user_id = id, "Deleted account and owned data");
        Ok(())
    }

    /// Reset stored data.
    ///
    /// An admin resets everything: accounts back to just the seeded admin,
    /// all players and sessions removed, settings back to defaults. A
    /// regular user only clears their own players and sessions.
    pub fn reset_data(store: &mut Store, actor: &User, admin: &AdminConfig) {
        if actor.is_admin() {
            store.users = vec![Store::seed_admin(admin)];
            store.players.clear();
            store.sessions.clear();
            store.settings = Settings::default();
            tracing::warn!("Full data reset by administrator");
        } else {
            store.remove_owned_by(actor.id);
            tracing::info!(user_id = actor.id, "User reset their own data");
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::constants::SEED_ADMIN_ID;
    use crate::models::MatchResult;
    use crate::services::{
        AuthService, PlayerService, SessionService, player_service::NewPlayer,
        session_service::NewSession,
    };

    use super::*;

    fn admin_config() -> AdminConfig {
        AdminConfig {
            username: "admin".to_string(),
            password: "admin123".to_string(),
        }
    }

    fn store() -> Store {
        Store::seeded(&admin_config())
    }

    fn admin(store: &Store) -> User {
        store.user(SEED_ADMIN_ID).unwrap().clone()
    }

    fn approved_user(store: &mut Store, username: &str) -> User {
        let user = AuthService::register(store, username, "pw").unwrap();
        store.user_mut(user.id).unwrap().approved = true;
        store.user(user.id).unwrap().clone()
    }

    fn seed_data_for(store: &mut Store, owner: &User) {
        let player = PlayerService::add(
            store,
            owner,
            NewPlayer {
                name: format!("rival-of-{}", owner.username),
                rating: None,
                avatar_color: None,
                play_style: None,
                description: None,
            },
            1200,
        );
        SessionService::record(
            store,
            owner,
            NewSession {
                opponent_id: player.id,
                game_type: Default::default(),
                time_control: "10min".to_string(),
                matches: vec![crate::models::Match {
                    number: 0,
                    result: MatchResult::Win,
                    accuracy: None,
                    estimated_rating: None,
                }],
            },
            5,
        )
        .unwrap();
    }

    #[test]
    fn admin_operations_refuse_regular_users() {
        let mut store = store();
        let alice = approved_user(&mut store, "alice");

        assert!(matches!(
            AdminService::list_users(&store, &alice),
            Err(AppError::NotAuthorized(_))
        ));
        assert!(matches!(
            AdminService::approve(&mut store, &alice, 1),
            Err(AppError::NotAuthorized(_))
        ));
        assert!(matches!(
            AdminService::toggle_block(&mut store, &alice, 1),
            Err(AppError::NotAuthorized(_))
        ));
        assert!(matches!(
            AdminService::delete_user(&mut store, &alice, 1),
            Err(AppError::NotAuthorized(_))
        ));
    }

    #[test]
    fn approve_is_idempotent_and_never_unblocks() {
        let mut store = store();
        let admin = admin(&store);
        let alice = approved_user(&mut store, "alice");
        store.user_mut(alice.id).unwrap().blocked = true;

        let user = AdminService::approve(&mut store, &admin, alice.id).unwrap();
        assert!(user.approved);
        assert!(user.blocked);

        let again = AdminService::approve(&mut store, &admin, alice.id).unwrap();
        assert!(again.approved);
    }

    #[test]
    fn toggle_block_flips_the_flag() {
        let mut store = store();
        let admin = admin(&store);
        let alice = approved_user(&mut store, "alice");

        assert!(AdminService::toggle_block(&mut store, &admin, alice.id).unwrap().blocked);
        assert!(!AdminService::toggle_block(&mut store, &admin, alice.id).unwrap().blocked);
    }

    #[test]
    fn delete_user_cascades_exactly_to_owned_data() {
        let mut store = store();
        let admin = admin(&store);
        let alice = approved_user(&mut store, "alice");
        let carol = approved_user(&mut store, "carol");
        seed_data_for(&mut store, &alice);
        seed_data_for(&mut store, &carol);

        AdminService::delete_user(&mut store, &admin, alice.id).unwrap();

        assert!(store.user(alice.id).is_none());
        assert!(store.players.iter().all(|p| p.user_id != alice.id));
        assert!(store.sessions.iter().all(|s| s.user_id != alice.id));
        // Carol's data is untouched.
        assert_eq!(store.players_of(carol.id).len(), 1);
        assert_eq!(store.sessions_of(carol.id).len(), 1);
    }

    #[test]
    fn admin_reset_restores_seeded_state() {
        let mut store = store();
        let admin = admin(&store);
        let alice = approved_user(&mut store, "alice");
        seed_data_for(&mut store, &alice);
        store.settings.dark_mode = true;

        AdminService::reset_data(&mut store, &admin, &admin_config());

        assert_eq!(store.users.len(), 1);
        assert_eq!(store.users[0].id, SEED_ADMIN_ID);
        assert!(store.players.is_empty());
        assert!(store.sessions.is_empty());
        assert!(!store.settings.dark_mode);
    }

    #[test]
    fn user_reset_only_clears_own_data() {
        let mut store = store();
        let alice = approved_user(&mut store, "alice");
        let carol = approved_user(&mut store, "carol");
        seed_data_for(&mut store, &alice);
        seed_data_for(&mut store, &carol);

        AdminService::reset_data(&mut store, &alice, &admin_config());

        assert_eq!(store.users.len(), 3);
        assert!(store.players_of(alice.id).is_empty());
        assert!(store.sessions_of(alice.id).is_empty());
        assert_eq!(store.players_of(carol.id).len(), 1);
        assert_eq!(store.sessions_of(carol.id).len(), 1);
    }
}
