//! Authentication middleware
//!
//! The application runs a single logical login session, held in
//! [`AppState`]. The extractor resolves it to a full user record on every
//! request, so a mid-session block or deletion takes effect immediately.

use axum::{extract::FromRequestParts, http::request::Parts};

use crate::{error::AppError, models::User, state::AppState};

/// The currently logged-in user
#[derive(Debug, Clone)]
pub struct CurrentUser(pub User);

impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = AppError;

    async fn from_request_parts(_parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let user_id = *state.session().read().await;
        let user_id = user_id.ok_or(AppError::Unauthorized)?;

        let store = state.store().read().await;
        let user = store.user(user_id).cloned().ok_or(AppError::Unauthorized)?;

        if user.blocked {
            return Err(AppError::AccountBlocked);
        }

        Ok(CurrentUser(user))
    }
}
