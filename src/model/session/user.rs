use serde::{Deserialize, Serialize};
use tower_sessions::Session;

use crate::error::Error;

pub const SESSION_USER_KEY: &str = "crewline:user";

/// The acting user stored in the session at login.
///
/// `company_id` is the tenant boundary: every onboarding query is scoped by
/// it, and a request without a session user is rejected before any data
/// access.
#[derive(Clone, Copy, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct SessionUser {
    pub user_id: i32,
    pub company_id: i32,
}

impl SessionUser {
    /// Insert the acting user into the session
    pub async fn insert(session: &Session, user: SessionUser) -> Result<(), Error> {
        session.insert(SESSION_USER_KEY, user).await?;

        Ok(())
    }

    /// Get the acting user from the session
    pub async fn get(session: &Session) -> Result<Option<SessionUser>, Error> {
        Ok(session.get::<SessionUser>(SESSION_USER_KEY).await?)
    }
}

#[cfg(test)]
mod tests {
    mod insert {
        use crewline_test_utils::prelude::*;

        use crate::model::session::user::SessionUser;

        /// Expect success when inserting an acting user into the session
        #[tokio::test]
        async fn inserts_session_user() -> Result<(), TestError> {
            let test = test_setup_with_tables!()?;

            let user = SessionUser {
                user_id: 1,
                company_id: 7,
            };
            let result = SessionUser::insert(&test.session, user).await;

            assert!(result.is_ok());

            Ok(())
        }
    }

    mod get {
        use crewline_test_utils::prelude::*;

        use crate::model::session::user::SessionUser;

        /// Expect the stored user back after inserting
        #[tokio::test]
        async fn returns_stored_user() -> Result<(), TestError> {
            let test = test_setup_with_tables!()?;

            let user = SessionUser {
                user_id: 3,
                company_id: 7,
            };
            SessionUser::insert(&test.session, user).await.unwrap();

            let result = SessionUser::get(&test.session).await.unwrap();

            assert_eq!(result, Some(user));

            Ok(())
        }

        /// Expect None when no user has been stored in the session
        #[tokio::test]
        async fn returns_none_for_empty_session() -> Result<(), TestError> {
            let test = test_setup_with_tables!()?;

            let result = SessionUser::get(&test.session).await.unwrap();

            assert!(result.is_none());

            Ok(())
        }
    }
}
