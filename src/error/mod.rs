//! Error types for the Crewline server.
//!
//! Domain-specific error enums (authentication, configuration, onboarding)
//! aggregate into a single [`Error`] type. All errors implement
//! `IntoResponse` for Axum and use `thiserror` for their `Display`/`Error`
//! implementations.

pub mod auth;
pub mod config;
pub mod onboarding;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    error::{auth::AuthError, config::ConfigError, onboarding::OnboardingError},
    model::api::ErrorDto,
};

/// Main error type for the Crewline server.
///
/// Aggregates the domain error enums and external library errors into one
/// type so handlers can use `?` throughout. The `IntoResponse`
/// implementation delegates to the domain enums' own HTTP mappings and
/// treats everything else as a 500 with the details kept out of the body.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    #[error(transparent)]
    AuthError(#[from] AuthError),
    #[error(transparent)]
    OnboardingError(#[from] OnboardingError),
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
    #[error(transparent)]
    SessionError(#[from] tower_sessions::session::Error),
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::ConfigError(err) => err.into_response(),
            Self::AuthError(err) => err.into_response(),
            Self::OnboardingError(err) => err.into_response(),
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper converting any displayable error into a 500 response.
///
/// Logs the full error for operators but returns a generic message so
/// internal details never reach the client.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}

// Lets tests `?` service results while keeping the harness crate free of a
// dependency on this crate (which would split it into two types at test
// build time).
#[cfg(test)]
impl From<Error> for crewline_test_utils::TestError {
    fn from(err: Error) -> Self {
        match err {
            Error::DbErr(err) => Self::DbErr(err),
            Error::SessionError(err) => Self::SessionError(err),
            err => Self::ServiceError(err.to_string()),
        }
    }
}
