use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    controller::{onboarding::ONBOARDING_TAG, util::require_session_user},
    error::Error,
    model::{
        api::{ErrorDto, MessageDto},
        app::AppState,
        onboarding::{InitiateOnboardingDto, NewHireDto, UpdateNewHireDto},
    },
    service::onboarding::new_hire::NewHireService,
};

/// Initiates onboarding, converting a candidate into a new hire
#[utoipa::path(
    post,
    path = "/api/onboarding/initiate",
    tag = ONBOARDING_TAG,
    request_body = InitiateOnboardingDto,
    responses(
        (status = 201, description = "New hire created", body = NewHireDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Job or candidate not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn initiate_onboarding(
    State(state): State<AppState>,
    session: Session,
    Json(dto): Json<InitiateOnboardingDto>,
) -> Result<impl IntoResponse, Error> {
    let user = require_session_user(&session).await?;

    let new_hire = NewHireService::new(&state.db, &state.notifier)
        .initiate_onboarding(user, dto)
        .await?;

    Ok((StatusCode::CREATED, Json(new_hire)))
}

/// Lists the tenant's new hires
#[utoipa::path(
    get,
    path = "/api/onboarding/new-hires",
    tag = ONBOARDING_TAG,
    responses(
        (status = 200, description = "The tenant's new hires, newest first", body = Vec<NewHireDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_new_hires(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    let user = require_session_user(&session).await?;

    let new_hires = NewHireService::new(&state.db, &state.notifier)
        .get_new_hires(user.company_id)
        .await?;

    Ok((StatusCode::OK, Json(new_hires)))
}

/// Gets a single new hire
#[utoipa::path(
    get,
    path = "/api/onboarding/new-hires/{id}",
    tag = ONBOARDING_TAG,
    params(("id" = i32, Path, description = "New hire ID")),
    responses(
        (status = 200, description = "The new hire", body = NewHireDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "New hire not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_new_hire(
    State(state): State<AppState>,
    session: Session,
    Path(new_hire_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let user = require_session_user(&session).await?;

    let new_hire = NewHireService::new(&state.db, &state.notifier)
        .get_new_hire(new_hire_id, user.company_id)
        .await?;

    Ok((StatusCode::OK, Json(new_hire)))
}

/// Updates a new hire's personal and job fields
///
/// Derived `status`/`progress` are absent from the payload; they only ever
/// change through task mutations.
#[utoipa::path(
    put,
    path = "/api/onboarding/new-hires/{id}",
    tag = ONBOARDING_TAG,
    params(("id" = i32, Path, description = "New hire ID")),
    request_body = UpdateNewHireDto,
    responses(
        (status = 200, description = "New hire updated", body = NewHireDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "New hire not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_new_hire(
    State(state): State<AppState>,
    session: Session,
    Path(new_hire_id): Path<i32>,
    Json(dto): Json<UpdateNewHireDto>,
) -> Result<impl IntoResponse, Error> {
    let user = require_session_user(&session).await?;

    let new_hire = NewHireService::new(&state.db, &state.notifier)
        .update_new_hire(new_hire_id, user.company_id, dto)
        .await?;

    Ok((StatusCode::OK, Json(new_hire)))
}

/// Deletes a new hire and its tasks, notes, and document links
#[utoipa::path(
    delete,
    path = "/api/onboarding/new-hires/{id}",
    tag = ONBOARDING_TAG,
    params(("id" = i32, Path, description = "New hire ID")),
    responses(
        (status = 200, description = "New hire deleted", body = MessageDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Acting user is not an admin", body = ErrorDto),
        (status = 404, description = "New hire not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_new_hire(
    State(state): State<AppState>,
    session: Session,
    Path(new_hire_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let user = require_session_user(&session).await?;

    NewHireService::new(&state.db, &state.notifier)
        .delete_new_hire(user, new_hire_id)
        .await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: "New hire deleted".to_string(),
        }),
    ))
}
