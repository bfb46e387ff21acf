//! Authentication service

use chrono::Utc;

use crate::{
    error::{AppError, AppResult},
    models::{Role, User},
    store::Store,
};

/// Authentication service
pub struct AuthService;

impl AuthService {
    /// Register a new user account.
    ///
    /// The account starts pending: it cannot log in until an administrator
    /// approves it. Usernames are unique, compared case-sensitively.
    pub fn register(store: &mut Store, username: &str, password: &str) -> AppResult<User> {
        if store.user_by_username(username).is_some() {
            return Err(AppError::DuplicateUsername);
        }

        let user = User {
            id: store.next_user_id(),
            username: username.to_string(),
            password: password.to_string(),
            role: Role::User,
            approved: false,
            blocked: false,
            created_at: Utc::now(),
        };
        store.users.push(user.clone());

        tracing::info!(user_id = user.id, username = %user.username, "Registered new account");
        Ok(user)
    }

    /// Authenticate with username and password.
    ///
    /// Credentials are compared exactly (plaintext, a deliberate non-goal).
    /// A matched account is still refused while blocked or pending approval.
    pub fn authenticate(store: &Store, username: &str, password: &str) -> AppResult<User> {
        let user = store
            .users
            .iter()
            .find(|u| u.username == username && u.password == password)
            .ok_or(AppError::InvalidCredentials)?;

        if user.blocked {
            return Err(AppError::AccountBlocked);
        }
        if !user.approved {
            return Err(AppError::PendingApproval);
        }

        Ok(user.clone())
    }
}

#[cfg(test)]
mod tests {
    use crate::config::AdminConfig;

    use super::*;

    fn store() -> Store {
        Store::seeded(&AdminConfig {
            username: "admin".to_string(),
            password: "admin123".to_string(),
        })
    }

    #[test]
    fn register_creates_pending_account() {
        let mut store = store();
        let user = AuthService::register(&mut store, "alice", "pw1").unwrap();
        assert_eq!(user.id, 2);
        assert_eq!(user.role, Role::User);
        assert!(!user.approved);
        assert!(!user.blocked);
        assert_eq!(store.users.len(), 2);
    }

    #[test]
    fn register_rejects_duplicate_username() {
        let mut store = store();
        AuthService::register(&mut store, "alice", "pw1").unwrap();

        let err = AuthService::register(&mut store, "alice", "other").unwrap_err();
        assert!(matches!(err, AppError::DuplicateUsername));
        assert_eq!(store.users.len(), 2);
    }

    #[test]
    fn duplicate_check_is_case_sensitive() {
        let mut store = store();
        AuthService::register(&mut store, "alice", "pw1").unwrap();
        assert!(AuthService::register(&mut store, "Alice", "pw1").is_ok());
    }

    #[test]
    fn authenticate_admin_succeeds() {
        let store = store();
        let user = AuthService::authenticate(&store, "admin", "admin123").unwrap();
        assert!(user.is_admin());
    }

    #[test]
    fn authenticate_rejects_wrong_password() {
        let store = store();
        let err = AuthService::authenticate(&store, "admin", "nope").unwrap_err();
        assert!(matches!(err, AppError::InvalidCredentials));
    }

    #[test]
    fn authenticate_rejects_pending_account() {
        let mut store = store();
        AuthService::register(&mut store, "alice", "pw1").unwrap();
        let err = AuthService::authenticate(&store, "alice", "pw1").unwrap_err();
        assert!(matches!(err, AppError::PendingApproval));
    }

    #[test]
    fn authenticate_rejects_blocked_account_before_approval_check() {
        let mut store = store();
        AuthService::register(&mut store, "alice", "pw1").unwrap();
        let user = store.user_mut(2).unwrap();
        user.approved = true;
        user.blocked = true;

        let err = AuthService::authenticate(&store, "alice", "pw1").unwrap_err();
        assert!(matches!(err, AppError::AccountBlocked));
    }
}
