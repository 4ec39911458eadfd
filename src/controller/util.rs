use tower_sessions::Session;

use crate::{
    error::{auth::AuthError, Error},
    model::session::user::SessionUser,
};

/// Resolves the acting user from the session.
///
/// A request without one is rejected with 401 before any data access; every
/// onboarding handler goes through this first.
pub async fn require_session_user(session: &Session) -> Result<SessionUser, Error> {
    let Some(user) = SessionUser::get(session).await? else {
        return Err(Error::AuthError(AuthError::UserNotInSession));
    };

    Ok(user)
}
