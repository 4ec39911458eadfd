use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tower_sessions::Session;
use tracing::debug;

use crate::{
    controller::util::require_session_user,
    data::app_user::UserRepository,
    error::{auth::AuthError, Error},
    model::{
        api::{ErrorDto, MessageDto},
        app::AppState,
        onboarding::{LoginDto, UserProfileDto},
        session::user::SessionUser,
    },
};

pub static AUTH_TAG: &str = "auth";

/// Logs a user in by email and stores the acting user in the session
#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = AUTH_TAG,
    request_body = LoginDto,
    responses(
        (status = 200, description = "Logged in", body = UserProfileDto),
        (status = 404, description = "No user for the given email", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Json(dto): Json<LoginDto>,
) -> Result<impl IntoResponse, Error> {
    let user = UserRepository::new(&state.db)
        .get_by_email(&dto.email)
        .await?
        .ok_or(AuthError::UnknownLoginEmail(dto.email))?;

    SessionUser::insert(
        &session,
        SessionUser {
            user_id: user.id,
            company_id: user.company_id,
        },
    )
    .await?;

    Ok((StatusCode::OK, Json(UserProfileDto::from(user))))
}

/// Logs the user out by clearing their session
#[utoipa::path(
    get,
    path = "/api/auth/logout",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Logged out", body = MessageDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn logout(session: Session) -> Result<impl IntoResponse, Error> {
    // Only clear when a user is present, clearing a session that does not
    // exist errors
    if SessionUser::get(&session).await?.is_some() {
        session.clear().await;
    }

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: "Logged out".to_string(),
        }),
    ))
}

/// Gets the logged in user's profile
#[utoipa::path(
    get,
    path = "/api/auth/user",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "The acting user's profile", body = UserProfileDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "User no longer exists", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    let session_user = require_session_user(&session).await?;

    let Some(user) = UserRepository::new(&state.db)
        .get_by_id(session_user.user_id)
        .await?
    else {
        session.clear().await;

        debug!(
            "Session cleared for user ID {} with an active session but no database row",
            session_user.user_id
        );

        return Err(AuthError::UserNotInDatabase(session_user.user_id).into());
    };

    Ok((StatusCode::OK, Json(UserProfileDto::from(user))))
}

#[cfg(test)]
mod tests {
    mod login {
        use axum::{extract::State, Json};
        use crewline_test_utils::prelude::*;
        use std::sync::Arc;

        use crate::{
            controller::auth::login,
            model::{
                app::AppState,
                onboarding::LoginDto,
                session::user::SessionUser,
            },
            service::notification::LogWelcomeNotifier,
        };

        /// Expect a successful login to store the user and tenant in the session
        #[tokio::test]
        async fn stores_session_user() -> Result<(), TestError> {
            let test = test_setup_with_onboarding_tables!()?;
            let seed = test.seed();
            let company = seed.insert_company("Acme").await?;
            let user = seed
                .insert_user(company.id, "Ada", "Lovelace", "ada@acme.test", "admin")
                .await?;

            let state = AppState {
                db: test.state.db.clone(),
                notifier: Arc::new(LogWelcomeNotifier),
            };

            let result = login(
                State(state),
                test.session.clone(),
                Json(LoginDto {
                    email: "ada@acme.test".to_string(),
                }),
            )
            .await;
            assert!(result.is_ok());

            let session_user = SessionUser::get(&test.session).await.unwrap();
            assert_eq!(
                session_user,
                Some(SessionUser {
                    user_id: user.id,
                    company_id: company.id,
                })
            );

            Ok(())
        }

        /// Expect an unknown email to be rejected without a session write
        #[tokio::test]
        async fn rejects_unknown_email() -> Result<(), TestError> {
            let test = test_setup_with_onboarding_tables!()?;

            let state = AppState {
                db: test.state.db.clone(),
                notifier: Arc::new(LogWelcomeNotifier),
            };

            let result = login(
                State(state),
                test.session.clone(),
                Json(LoginDto {
                    email: "nobody@acme.test".to_string(),
                }),
            )
            .await;
            assert!(result.is_err());

            let session_user = SessionUser::get(&test.session).await.unwrap();
            assert!(session_user.is_none());

            Ok(())
        }
    }
}
